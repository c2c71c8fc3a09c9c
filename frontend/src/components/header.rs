use super::super::{Model, Msg, View};
use yew::html::Scope;
use yew::prelude::*;

/// Renders the application header and the view switcher
pub fn render_header(current: View, link: &Scope<Model>) -> Html {
    let tab = |view: View, icon: &'static str, label: &'static str| {
        html! {
            <button
                class={classes!("nav-link", (current == view).then_some("active"))}
                onclick={link.callback(move |_| Msg::ShowView(view))}
            >
                <i class={classes!("fa-solid", icon)}></i>{ label }
            </button>
        }
    };

    html! {
        <header class="app-header">
            <nav>
                { tab(View::Detect, "fa-house", " Home") }
                { tab(View::History, "fa-clock-rotate-left", " History") }
            </nav>
            {
                match current {
                    View::Detect => html! {
                        <>
                            <h1><i class="fa-solid fa-leaf"></i> {" Plant Leaf Disease Detection"}</h1>
                            <p class="subtitle">{"Upload a leaf photo via button, drag & drop, or paste"}</p>
                        </>
                    },
                    View::History => html! {
                        <h1><i class="fa-solid fa-clock-rotate-left"></i> {" Detection History"}</h1>
                    },
                }
            }
        </header>
    }
}
