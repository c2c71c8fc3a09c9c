use super::super::{FileData, Model, Msg, Theme};
use super::utils::first_image_file;
use crate::api;
use gloo_file::futures::read_as_data_url;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use shared::{ClassificationResult, DetectionHistory, HistoryEntry, Uuid};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

const HISTORY_KEY: &str = "detectionHistory";

pub fn load_history() -> DetectionHistory {
    match LocalStorage::get::<DetectionHistory>(HISTORY_KEY) {
        Ok(history) => history,
        Err(StorageError::KeyNotFound(_)) => DetectionHistory::default(),
        Err(e) => {
            log::warn!("Stored detection history is not a list, starting fresh: {}", e);
            DetectionHistory::default()
        }
    }
}

fn save_history(history: &DetectionHistory) {
    if let Err(e) = LocalStorage::set(HISTORY_KEY, history) {
        log::error!("Failed to save detection history: {}", e);
    }
}

pub fn handle_file_selected(model: &mut Model, file: GlooFile) -> bool {
    let preview_url = ObjectUrl::from(file.clone());
    model.file = Some(FileData { file, preview_url });
    model.result = None;
    model.error = None;
    true
}

pub fn handle_clear_file(model: &mut Model) -> bool {
    model.file = None;
    model.result = None;
    model.error = None;
    true
}

pub fn handle_detect(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.loading {
        return false;
    }
    let Some(file_data) = &model.file else {
        ctx.link()
            .send_message(Msg::SetError(Some("Select a leaf image first.".into())));
        return false;
    };

    let file = file_data.file.clone();
    model.loading = true;
    model.error = None;
    model.result = None;

    let link = ctx.link().clone();
    spawn_local(async move {
        match api::detect(&file).await {
            Ok(result) => {
                let image = match read_as_data_url(&file).await {
                    Ok(url) => Some(url),
                    Err(e) => {
                        log::warn!("Could not read {} for history: {:?}", file.name(), e);
                        None
                    }
                };
                link.send_message(Msg::Detected { result, image });
            }
            Err(message) => link.send_message(Msg::SetError(Some(message))),
        }
    });

    true
}

pub fn handle_detected(model: &mut Model, result: ClassificationResult, image: Option<String>) -> bool {
    model.loading = false;

    if let Some(image) = image {
        let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
        model
            .history
            .record(HistoryEntry::new(image, result.clone(), timestamp));
        save_history(&model.history);
    }

    model.result = Some(result);
    true
}

pub fn handle_delete_history_entry(model: &mut Model, id: Uuid) -> bool {
    if model.history.remove(id) {
        save_history(&model.history);
        true
    } else {
        false
    }
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    model.theme = model.theme.toggled();

    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return true;
    };

    let class_list = body.class_list();
    let outcome = match model.theme {
        Theme::Dark => class_list.add_1("dark-mode"),
        Theme::Light => class_list.remove_1("dark-mode"),
    };
    if let Err(e) = outcome {
        log::warn!("Failed to switch theme: {:?}", e);
    }

    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file_list) = event.data_transfer().and_then(|dt| dt.files()) {
        process_file_list(ctx, &file_list);
    }

    true
}

pub fn handle_paste(ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    match event.clipboard_data().and_then(|dt| dt.files()) {
        Some(file_list) if file_list.length() > 0 => {
            event.prevent_default();
            process_file_list(ctx, &file_list);
            true
        }
        _ => false,
    }
}

fn process_file_list(ctx: &Context<Model>, file_list: &FileList) {
    match first_image_file(file_list) {
        Some(file) => ctx.link().send_message(Msg::FileSelected(file)),
        None => ctx
            .link()
            .send_message(Msg::SetError(Some("No valid image file selected.".into()))),
    }
}
