//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small wrappers for the show / hide / style / composer-input patterns so
//! the components don't repeat `dyn_into` and `style().set_property` calls.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

/// Show or hide via inline `display`, leaving the element's children alone.
pub fn set_display(el: &Element, visible: bool) -> Result<(), JsValue> {
    let value = if visible { "block" } else { "none" };
    set_style(el, "display", value)
}

pub fn is_displayed(el: &Element) -> bool {
    el.dyn_ref::<HtmlElement>()
        .and_then(|h| h.style().get_property_value("display").ok())
        .map(|v| v != "none")
        .unwrap_or(true)
}

pub fn set_style(el: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

pub fn focus(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
}

/// Scroll a container so its last child is visible.
pub fn scroll_to_end(el: &Element) {
    el.set_scroll_top(el.scroll_height());
}

// ---------------------------------------------------------------------------
// Composer input – the page may use either <textarea> or <input>
// ---------------------------------------------------------------------------

pub fn input_value(el: &Element) -> String {
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else {
        String::new()
    }
}

pub fn set_input_value(el: &Element, value: &str) {
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    } else if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    }
}

/// Toggle the `disabled` attribute on any form control.
pub fn set_disabled(el: &Element, disabled: bool) -> Result<(), JsValue> {
    if disabled {
        el.set_attribute("disabled", "")
    } else {
        el.remove_attribute("disabled")
    }
}

pub fn is_disabled(el: &Element) -> bool {
    el.has_attribute("disabled")
}
