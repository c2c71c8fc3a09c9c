use super::super::{Model, Msg};
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(file_data) = &model.file else {
        return html! {};
    };
    let link = ctx.link();
    let name = file_data.file.name();

    html! {
        <div id="preview-container">
            <img id="actual-image-preview" src={file_data.preview_url.to_string()} alt={name.clone()} />
            <p class="analyzed-filename-display">{ name }</p>
            <div class="button-container">
                <button
                    id="clear-btn"
                    class="analyze-btn"
                    style="background-color: var(--clear-color);"
                    onclick={link.callback(|_| Msg::ClearFile)}
                    disabled={model.loading}
                >
                    <i class="fa-solid fa-trash"></i>{" Clear"}
                </button>
                <button
                    class="analyze-btn"
                    onclick={link.callback(|_| Msg::Detect)}
                    disabled={model.loading}
                >
                    {
                        if model.loading {
                            html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Detecting..."}</> }
                        } else {
                            html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Detect Disease"}</> }
                        }
                    }
                </button>
            </div>
        </div>
    }
}
