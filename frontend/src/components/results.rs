use super::super::Model;
use shared::ClassificationResult;
use yew::prelude::*;

pub fn render_result(model: &Model) -> Html {
    match &model.result {
        Some(result) => render_classification(result),
        None => html! {},
    }
}

pub fn render_precautions(precautions: &[String]) -> Html {
    if precautions.is_empty() {
        return html! {};
    }
    html! {
        <ul class="precaution-list">
            { for precautions.iter().map(|p| html! { <li>{ p }</li> }) }
        </ul>
    }
}

fn render_classification(result: &ClassificationResult) -> Html {
    let state_class = if result.is_diseased { "diseased" } else { "healthy" };

    html! {
        <div class={classes!("results-container", state_class)}>
            <div class="result-header">
                <h2>
                    {
                        if result.is_diseased {
                            html! { <i class="fa-solid fa-bug"></i> }
                        } else {
                            html! { <i class="fa-solid fa-seedling"></i> }
                        }
                    }
                    { format!(" {}", result.disease_name) }
                </h2>
                <p class="result-message">{ &result.message }</p>
                <div class="confidence-meter">
                    <div class="meter-label">{"Disease Percentage:"}</div>
                    <div class="meter">
                        <div class="meter-fill" style={format!("width: {}%", result.disease_percentage)}></div>
                    </div>
                    <div class="meter-value">{ format!("{}%", result.disease_percentage) }</div>
                </div>
            </div>
            {
                if result.precautions.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="precautions">
                            <h3><i class="fa-solid fa-shield-halved"></i>{" Recommended Precautions"}</h3>
                            { render_precautions(&result.precautions) }
                        </div>
                    }
                }
            }
        </div>
    }
}
