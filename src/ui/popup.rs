/// Popup UI for the Video Topics extension

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use patternfly_yew::prelude::*;
use crate::api::HttpTopicService;
use crate::config::{PopupConfig, STORAGE_KEY};
use crate::controller::{PopupController, PopupView, RequestTracker, ResultDisplay};
use crate::error::InitError;
use crate::ui::components::ResultPanel;
use crate::video::is_video_url;

/// Element the popup is rendered into (see popup.html)
pub const ROOT_ELEMENT_ID: &str = "app";

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTabUrl() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;
}

/// Find the mount element, or explain why the popup cannot start
pub fn mount_point() -> Result<web_sys::Element, InitError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(InitError::NoDocument)?;

    document
        .get_element_by_id(ROOT_ELEMENT_ID)
        .ok_or(InitError::MissingElement(ROOT_ELEMENT_ID))
}

/// Yew state handles backing the result area and the spinner
#[derive(Clone)]
struct YewView {
    busy: UseStateHandle<bool>,
    result: UseStateHandle<ResultDisplay>,
}

impl PopupView for YewView {
    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn show_result(&self, display: ResultDisplay) {
        self.result.set(display);
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(PopupConfig::new);
    let url = use_state(String::new);
    let topic_count = use_state(|| config.default_topic_count.to_string());
    let busy = use_state(|| false);
    let result = use_state(ResultDisplay::default);
    let tracker = use_state(RequestTracker::default);
    let url_edited = use_mut_ref(|| false);
    let picked_count = use_mut_ref(|| None::<u32>);

    // Load settings and pre-fill from the active tab on mount
    {
        let config = config.clone();
        let topic_count = topic_count.clone();
        let url = url.clone();
        let url_edited = url_edited.clone();
        let picked_count = picked_count.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let loaded = load_config().await;
                let picked = *picked_count.borrow();
                topic_count.set(initial_topic_count(&loaded, picked).to_string());
                config.set(loaded);
            });

            spawn_local(async move {
                if let Some(active) = active_video_url().await {
                    if !*url_edited.borrow() {
                        url.set(active);
                    }
                }
            });
            || ()
        });
    }

    let on_url_input = {
        let url = url.clone();
        let url_edited = url_edited.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                *url_edited.borrow_mut() = true;
                url.set(input.value());
            }
        })
    };

    let on_count_change = {
        let topic_count = topic_count.clone();
        let picked_count = picked_count.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                *picked_count.borrow_mut() = select.value().parse().ok();
                topic_count.set(select.value());
            }
        })
    };

    // Process handler. A second click while busy supersedes the first request.
    let on_process = {
        let view = YewView {
            busy: busy.clone(),
            result: result.clone(),
        };
        let config = config.clone();
        let tracker = tracker.clone();
        let url = url.clone();
        let topic_count = topic_count.clone();

        Callback::from(move |_| {
            let controller = PopupController::new(
                view.clone(),
                HttpTopicService::new(config.endpoint.clone()),
                (*tracker).clone(),
            )
            .with_fallback_topic_count(config.default_topic_count);
            let raw_url = (*url).clone();
            let raw_count = (*topic_count).clone();

            spawn_local(async move {
                let started = js_sys::Date::now();
                controller.submit(&raw_url, &raw_count).await;
                log::debug!("Submit settled after {:.0} ms", js_sys::Date::now() - started);
            });
        })
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Video Topics"}</h1>

            <div class="flex-column-gap">
                <input
                    id="video-url"
                    type="text"
                    class="url-input"
                    placeholder="Paste a video URL..."
                    value={(*url).clone()}
                    oninput={on_url_input}
                />

                <label class="topic-count-label">
                    {"Number of topics"}
                    <select id="num-topicos" class="topic-count-select" onchange={on_count_change}>
                        {for config.topic_choices.iter().map(|count| {
                            let value = count.to_string();
                            html! {
                                <option value={value.clone()} selected={value == *topic_count}>
                                    {value.clone()}
                                </option>
                            }
                        })}
                    </select>
                </label>

                <Button onclick={on_process} variant={ButtonVariant::Primary} block={true}>
                    {"Extract Topics"}
                </Button>
            </div>

            if *busy {
                <div class="loading-text-center">
                    <Spinner />
                    <p class="loading-text">{"Extracting topics..."}</p>
                </div>
            }

            <ResultPanel display={(*result).clone()} />

            <p class="footer-popup">
                {format!("Video Topics v{}", env!("CARGO_PKG_VERSION"))}
            </p>
        </div>
    }
}

// Helper functions

/// Selector value once settings arrive: keep the user's pick if it is still offered
fn initial_topic_count(config: &PopupConfig, picked: Option<u32>) -> u32 {
    match picked {
        Some(count) if config.topic_choices.contains(&count) => count,
        _ => config.default_topic_count,
    }
}

async fn active_video_url() -> Option<String> {
    let url_js = match getActiveTabUrl().await {
        Ok(url_js) => url_js,
        Err(e) => {
            log::debug!("Active tab unavailable: {:?}", e);
            return None;
        }
    };

    let url = url_js.as_string()?;
    if is_video_url(&url) {
        Some(url)
    } else {
        log::debug!("Active tab is not a video page: {}", url);
        None
    }
}

async fn load_config() -> PopupConfig {
    match read_stored_config().await {
        Ok(Some(config)) => config.normalized(),
        Ok(None) => PopupConfig::new(),
        Err(e) => {
            log::warn!("Ignoring stored settings: {}", e);
            PopupConfig::new()
        }
    }
}

async fn read_stored_config() -> Result<Option<PopupConfig>, String> {
    let config_js = getStorage(STORAGE_KEY)
        .await
        .map_err(|e| format!("Failed to get storage: {:?}", e))?;

    if config_js.is_null() || config_js.is_undefined() {
        Ok(None)
    } else {
        serde_wasm_bindgen::from_value(config_js)
            .map(Some)
            .map_err(|e| format!("Failed to parse settings: {:?}", e))
    }
}
