use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::constants::{
    ATTACH_GLYPH, DEFAULT_HEADER_TITLE, ID_AGENTS_GRID, ID_APP_ROOT, ID_ATTACHMENT_LIST,
    ID_ATTACH_BUTTON, ID_CHAT_INPUT, ID_CHAT_MESSAGES, ID_FILE_INPUT, ID_HEADER_TITLE,
    ID_SEND_BUTTON, SEND_GLYPH,
};
use crate::html::{el, VElement, VNode};

/// Default page skeleton, used when the host page doesn't ship its own
/// markup with the expected ids.
pub fn base_layout_view() -> VElement {
    el("div")
        .id(ID_APP_ROOT)
        .class("datar-app")
        .child(
            el("header")
                .class("header")
                .child(el("h1").id(ID_HEADER_TITLE).text(DEFAULT_HEADER_TITLE)),
        )
        .child(
            el("section")
                .class("agents")
                .child(el("div").id(ID_AGENTS_GRID).class("agents-grid")),
        )
        .child(
            el("section")
                .class("chat")
                .child(el("div").id(ID_CHAT_MESSAGES).class("chat-messages"))
                .child(
                    el("div")
                        .class("chat-input-area")
                        .child(
                            el("button")
                                .id(ID_ATTACH_BUTTON)
                                .class("attach-button")
                                .attr("type", "button")
                                .attr("title", "Adjuntar archivos")
                                .text(ATTACH_GLYPH),
                        )
                        .child(
                            el("input")
                                .id(ID_FILE_INPUT)
                                .attr("type", "file")
                                .attr("multiple", "")
                                .style("display: none;"),
                        )
                        .child(
                            el("textarea")
                                .id(ID_CHAT_INPUT)
                                .class("chat-input")
                                .attr("rows", "1")
                                .attr("placeholder", "Escribe tu mensaje..."),
                        )
                        .child(
                            el("button")
                                .id(ID_SEND_BUTTON)
                                .class("send-button")
                                .attr("type", "button")
                                .text(SEND_GLYPH),
                        ),
                )
                .child(el("div").id(ID_ATTACHMENT_LIST).class("attachment-list")),
        )
}

/// Make sure every element the client drives exists.  Existing markup is
/// left untouched; only the attachment chip list is added next to it.
pub fn ensure_layout(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(ID_CHAT_MESSAGES).is_none() {
        let body = document.body().ok_or(JsValue::from_str("No body found"))?;
        VNode::from(base_layout_view()).append_to(document, &body)?;
        return Ok(());
    }

    if document.get_element_by_id(ID_ATTACHMENT_LIST).is_none() {
        if let Some(input) = document.get_element_by_id(ID_CHAT_INPUT) {
            let list = el("div")
                .id(ID_ATTACHMENT_LIST)
                .class("attachment-list")
                .mount(document)?;
            input.after_with_node_1(&list)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_has_every_driven_id() {
        let html = VNode::from(base_layout_view()).to_html();
        for id in [
            ID_HEADER_TITLE,
            ID_AGENTS_GRID,
            ID_CHAT_MESSAGES,
            ID_CHAT_INPUT,
            ID_SEND_BUTTON,
            ID_ATTACH_BUTTON,
            ID_FILE_INPUT,
            ID_ATTACHMENT_LIST,
        ] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing #{}", id);
        }
    }
}
