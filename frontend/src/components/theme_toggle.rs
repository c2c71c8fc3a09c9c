use super::super::{Model, Msg, Theme};
use yew::html::Scope;
use yew::prelude::*;

const SUN_ICON: &str = "https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/2600.svg";
const MOON_ICON: &str = "https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/1f319.svg";

pub fn render_theme_toggle(theme: Theme, link: &Scope<Model>) -> Html {
    let (icon, alt, title) = match theme {
        Theme::Light => (SUN_ICON, "Sun Icon", "Switch to Dark Mode"),
        Theme::Dark => (MOON_ICON, "Moon Icon", "Switch to Light Mode"),
    };

    html! {
        <div class="top-right">
            <button
                id="theme-toggle"
                class="theme-toggle"
                onclick={link.callback(|_| Msg::ToggleTheme)}
                {title}
            >
                <img src={icon} {alt} class="toggle-icon" />
            </button>
        </div>
    }
}
