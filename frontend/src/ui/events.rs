//! DOM event wiring for the chat page.
//!
//! Handlers only read what the event carries and dispatch a `Message`; all
//! decisions live in the reducers.

use uuid::Uuid;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DragEvent, Element, Event, FileList, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent};

use crate::components::composer::set_drag_highlight;
use crate::constants::{
    ACTION_CLOSE_CHAT, ATTR_ACTION, ATTR_AGENT_ID, ATTR_ATTACHMENT_ID, ID_AGENTS_GRID,
    ID_ATTACHMENT_LIST, ID_ATTACH_BUTTON, ID_CHAT_INPUT, ID_CHAT_MESSAGES, ID_FILE_INPUT,
    ID_SEND_BUTTON,
};
use crate::dom_utils::input_value;
use crate::models::Attachment;
use crate::{debug_log, messages::Message, state::dispatch_global_message, warn_log};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Entry point – call once after the layout exists.
pub fn setup_event_listeners(document: &Document) -> Result<(), JsValue> {
    setup_send_handlers(document)?;
    setup_drag_and_drop(document)?;
    setup_file_picker(document)?;
    setup_agent_grid_clicks(document)?;
    setup_transcript_clicks(document)?;
    setup_attachment_list_clicks(document)?;
    Ok(())
}

/// Files of a picker or drop event as attachments, in order.
pub fn attachments_from(files: Option<FileList>) -> Vec<Attachment> {
    let Some(files) = files else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(Attachment::from_file)
        .collect()
}

/// Read the composer and ask the chat reducer to send it.
pub fn request_send(document: &Document) {
    match document.get_element_by_id(ID_CHAT_INPUT) {
        Some(input) => dispatch_global_message(Message::RequestSend(input_value(&input))),
        None => warn_log!("#{} not found", ID_CHAT_INPUT),
    }
}

// ---------------------------------------------------------------------------
// Individual handlers
// ---------------------------------------------------------------------------

/// Send button click and Enter (without Shift) in the input.
fn setup_send_handlers(document: &Document) -> Result<(), JsValue> {
    if let Some(btn) = document.get_element_by_id(ID_SEND_BUTTON) {
        let doc = document.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| {
            request_send(&doc);
        }));
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    if let Some(input) = document.get_element_by_id(ID_CHAT_INPUT) {
        let doc = document.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                request_send(&doc);
            }
        }));
        input.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

fn setup_drag_and_drop(document: &Document) -> Result<(), JsValue> {
    let Some(input) = document.get_element_by_id(ID_CHAT_INPUT) else {
        return Ok(());
    };

    let doc = document.clone();
    let over = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: DragEvent| {
        e.prevent_default();
        let _ = set_drag_highlight(&doc, true);
    }));
    input.add_event_listener_with_callback("dragover", over.as_ref().unchecked_ref())?;
    over.forget();

    let doc = document.clone();
    let leave = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: DragEvent| {
        e.prevent_default();
        let _ = set_drag_highlight(&doc, false);
    }));
    input.add_event_listener_with_callback("dragleave", leave.as_ref().unchecked_ref())?;
    leave.forget();

    let doc = document.clone();
    let on_drop = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: DragEvent| {
        e.prevent_default();
        let _ = set_drag_highlight(&doc, false);
        let files = attachments_from(e.data_transfer().and_then(|dt| dt.files()));
        if !files.is_empty() {
            debug_log!("Archivos arrastrados: {}", files.len());
            dispatch_global_message(Message::FilesAttached(files));
        }
    }));
    input.add_event_listener_with_callback("drop", on_drop.as_ref().unchecked_ref())?;
    on_drop.forget();

    Ok(())
}

/// Attach button opens the hidden picker; picker `change` adds the files.
fn setup_file_picker(document: &Document) -> Result<(), JsValue> {
    let Some(picker) = document.get_element_by_id(ID_FILE_INPUT) else {
        return Ok(());
    };

    if let Some(btn) = document.get_element_by_id(ID_ATTACH_BUTTON) {
        let picker_el = picker.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| {
            if let Some(html) = picker_el.dyn_ref::<HtmlElement>() {
                html.click();
            }
        }));
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
        let files = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files());
        let files = attachments_from(files);
        if !files.is_empty() {
            dispatch_global_message(Message::FilesAttached(files));
        }
    }));
    picker.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// One delegated listener for all agent cards, so re-rendering the grid
/// needs no re-wiring.
fn setup_agent_grid_clicks(document: &Document) -> Result<(), JsValue> {
    let Some(grid) = document.get_element_by_id(ID_AGENTS_GRID) else {
        return Ok(());
    };
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: MouseEvent| {
        if let Some(agent_id) = closest_attr(&e, ATTR_AGENT_ID) {
            dispatch_global_message(Message::SelectAgent(agent_id));
        }
    }));
    grid.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Close button lives inside the transcript and is re-created with the
/// welcome message, hence delegation.
fn setup_transcript_clicks(document: &Document) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id(ID_CHAT_MESSAGES) else {
        return Ok(());
    };
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: MouseEvent| {
        if closest_attr(&e, ATTR_ACTION).as_deref() == Some(ACTION_CLOSE_CHAT) {
            dispatch_global_message(Message::CloseChat);
        }
    }));
    container.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Chip remove buttons.  The list node is swapped on every render, so the
/// listener sits on its parent.
fn setup_attachment_list_clicks(document: &Document) -> Result<(), JsValue> {
    let Some(parent) = document
        .get_element_by_id(ID_ATTACHMENT_LIST)
        .and_then(|list| list.parent_element())
    else {
        return Ok(());
    };
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: MouseEvent| {
        let id = closest_attr(&e, ATTR_ATTACHMENT_ID).and_then(|raw| Uuid::parse_str(&raw).ok());
        if let Some(id) = id {
            dispatch_global_message(Message::RemoveAttachment(id));
        }
    }));
    parent.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Value of `attr` on the event target or its nearest ancestor carrying it.
fn closest_attr(e: &MouseEvent, attr: &str) -> Option<String> {
    let target: Element = e.target()?.dyn_into().ok()?;
    let holder = target.closest(&format!("[{}]", attr)).ok()??;
    holder.get_attribute(attr)
}
