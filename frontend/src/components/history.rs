use super::super::{Model, Msg};
use super::results::render_precautions;
use super::utils::format_timestamp;
use shared::{DetectionHistory, HistoryEntry};
use yew::html::Scope;
use yew::prelude::*;

pub fn render_history(history: &DetectionHistory, link: &Scope<Model>) -> Html {
    if history.is_empty() {
        return html! {
            <p class="no-results-message">
                {"No detection history yet. Upload some images to get started!"}
            </p>
        };
    }

    html! {
        <div class="history-list">
            { for history.entries().iter().map(|entry| render_entry(entry, link)) }
        </div>
    }
}

fn render_entry(entry: &HistoryEntry, link: &Scope<Model>) -> Html {
    let id = entry.id;
    let result = &entry.result;

    html! {
        <div class="history-item" key={id.to_string()}>
            <img src={entry.image.clone()} alt="Detection" class="history-image" />
            <div class="history-details">
                <p><strong>{"Disease: "}</strong>{ result.disease_name.to_string() }</p>
                <p><strong>{"Percentage: "}</strong>{ format!("{}%", result.disease_percentage) }</p>
                <p><strong>{"Date: "}</strong>{ format_timestamp(&entry.timestamp) }</p>
                {
                    if result.precautions.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <details>
                                <summary>{"Precautions"}</summary>
                                { render_precautions(&result.precautions) }
                            </details>
                        }
                    }
                }
                <button
                    class="delete-btn"
                    onclick={link.callback(move |_| Msg::DeleteHistoryEntry(id))}
                >
                    <i class="fa-solid fa-trash"></i>{" Delete"}
                </button>
            </div>
        </div>
    }
}
