/// Presentational components for the result area

use yew::prelude::*;
use crate::controller::ResultDisplay;
use crate::topics::Topic;

#[derive(Properties, PartialEq)]
pub struct TopicListProps {
    pub topics: Vec<Topic>,
}

#[function_component(TopicList)]
pub fn topic_list(props: &TopicListProps) -> Html {
    html! {
        <ul class="topic-list">
            {for props.topics.iter().map(|topic| html! {
                <li key={topic.index.to_string()} class="topic-item">
                    <strong>{format!("{}:", topic.index)}</strong>
                    {" "}
                    {&topic.text}
                </li>
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub display: ResultDisplay,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    let content = match &props.display {
        ResultDisplay::Empty => html! {},
        ResultDisplay::Prompt(msg) => html! {
            <p class="prompt">{msg}</p>
        },
        ResultDisplay::Topics(topics) => html! {
            <>
                <span class="success">{"Topics:"}</span>
                <TopicList topics={topics.clone()} />
            </>
        },
        ResultDisplay::Error(msg) => html! {
            <span class="error">{format!("Error: {}", msg)}</span>
        },
    };

    html! {
        <div id="response" class="response">
            {content}
        </div>
    }
}
