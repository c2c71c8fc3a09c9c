mod api;
mod components;

use components::handlers;
use components::header::render_header;
use components::history::render_history;
use components::preview_area::render_preview_area;
use components::results::render_result;
use components::theme_toggle::render_theme_toggle;
use components::upload_section::render_upload_section;
use components::utils::render_error_message;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{ClassificationResult, DetectionHistory, Uuid};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum View {
    Detect,
    History,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub struct FileData {
    file: GlooFile,
    preview_url: ObjectUrl,
}

pub enum Msg {
    // File operations
    FileSelected(GlooFile),
    ClearFile,

    // Detection
    Detect,
    Detected {
        result: ClassificationResult,
        image: Option<String>,
    },

    // History
    ShowView(View),
    DeleteHistoryEntry(Uuid),

    // UI states
    SetError(Option<String>),
    SetDragging(bool),
    ToggleTheme,

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

pub struct Model {
    view: View,
    file: Option<FileData>,
    result: Option<ClassificationResult>,
    loading: bool,
    error: Option<String>,
    is_dragging: bool,
    paste_listener: Option<EventListener>,
    theme: Theme,
    history: DetectionHistory,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            view: View::Detect,
            file: None,
            result: None,
            loading: false,
            error: None,
            is_dragging: false,
            paste_listener: None,
            theme: Theme::Light,
            history: handlers::load_history(),
        };

        let link = ctx.link().clone();
        if let Some(window) = web_sys::window() {
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileSelected(file) => handlers::handle_file_selected(self, file),
            Msg::ClearFile => handlers::handle_clear_file(self),

            Msg::Detect => handlers::handle_detect(self, ctx),
            Msg::Detected { result, image } => handlers::handle_detected(self, result, image),

            Msg::ShowView(view) => {
                self.view = view;
                true
            }
            Msg::DeleteHistoryEntry(id) => handlers::handle_delete_history_entry(self, id),

            Msg::SetError(error) => {
                self.error = error;
                self.loading = false;
                true
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),

            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header(self.view, ctx.link()) }
                { render_theme_toggle(self.theme, ctx.link()) }

                <main class="main-content">
                {
                    match self.view {
                        View::Detect => html! {
                            <>
                                { render_upload_section(self, ctx) }
                                { render_preview_area(self, ctx) }
                                { render_error_message(self) }
                                { render_result(self) }
                            </>
                        },
                        View::History => render_history(&self.history, ctx.link()),
                    }
                }
                </main>

                <footer class="app-footer">
                    <p>{"Plant Leaf Disease Detection | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
