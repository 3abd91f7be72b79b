//! Tiny toast / notification helper.
//! Creates a `#toast-root` container once per page and appends toast divs that
//! fade out after a few seconds.  Every notification is also written to the
//! console as `[KIND] message`.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element};

use crate::html::el;
use crate::{debug_log, error_log};

const TOAST_LIFETIME_MS: i32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

pub fn show(message: &str, kind: ToastKind) {
    let line = format!("[{}] {}", kind.as_str().to_uppercase(), message);
    match kind {
        ToastKind::Error => error_log!("{}", line),
        _ => debug_log!("{}", line),
    }
    if let Err(e) = try_show(message, kind) {
        error_log!("Failed to show toast: {:?}", e);
    }
}

fn try_show(message: &str, kind: ToastKind) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    ensure_styles(&document)?;
    let root = ensure_root(&document)?;

    let toast = el("div")
        .class(&format!("toast toast-{}", kind.as_str()))
        .text(message)
        .mount(&document)?;

    // Prepend so newest appears on top.
    root.prepend_with_node_1(&toast)?;

    let cb = Closure::once_into_js(move || toast.remove());
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        TOAST_LIFETIME_MS,
    )?;
    Ok(())
}

fn ensure_root(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id("toast-root") {
        return Ok(el);
    }
    let root = el("div").id("toast-root").class("toast-root").mount(document)?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&root)?;
    Ok(root)
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id("toast-styles").is_some() {
        return Ok(());
    }

    let css = "
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999}
.toast{padding:10px 16px;border-radius:4px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.1);opacity:0;animation:toast-in .2s forwards}
.toast-error{background:#dc2626}
.toast-info{background:#2563eb}
@keyframes toast-in{to{opacity:1}}
";

    let style = el("style").id("toast-styles").text(css).mount(document)?;
    match document.head() {
        Some(head) => head.append_child(&style)?,
        None => document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&style)?,
    };
    Ok(())
}
