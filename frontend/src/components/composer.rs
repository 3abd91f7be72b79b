//! Message input, send button and attachment affordances.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlInputElement};

use crate::constants::{
    ATTACH_GLYPH, ATTR_ATTACHMENT_ID, COLOR_BORDER_TOKEN, COLOR_CARD_BG_TOKEN,
    COLOR_PRIMARY_TOKEN, DRAG_OVER_BACKGROUND, ID_ATTACHMENT_LIST, ID_ATTACH_BUTTON,
    ID_CHAT_INPUT, ID_FILE_INPUT, ID_SEND_BUTTON, PENDING_GLYPH, SEND_GLYPH,
};
use crate::css_var;
use crate::dom_utils::{by_id, focus, set_disabled, set_input_value, set_style};
use crate::html::{el, VElement, VNode};
use crate::models::Attachment;

/// How the composer advertises the pending attachments.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentAffordance {
    pub border_color: String,
    pub title: String,
    pub button_label: String,
}

impl AttachmentAffordance {
    pub fn for_names(names: &[String]) -> Self {
        if names.is_empty() {
            Self {
                border_color: css_var!(COLOR_BORDER_TOKEN),
                title: String::new(),
                button_label: ATTACH_GLYPH.to_string(),
            }
        } else {
            Self {
                border_color: css_var!(COLOR_PRIMARY_TOKEN),
                title: format!("Archivos adjuntos: {}", names.join(", ")),
                button_label: format!("{} {}", ATTACH_GLYPH, names.len()),
            }
        }
    }
}

/// Chips under the input, one per attachment, each with a remove button.
pub fn attachment_list_view(attachments: &[Attachment]) -> VElement {
    el("div")
        .id(ID_ATTACHMENT_LIST)
        .class("attachment-list")
        .children(attachments.iter().map(|a| {
            el("span")
                .class("attachment-chip")
                .text(format!("{} {}", ATTACH_GLYPH, a.name))
                .child(
                    el("button")
                        .class("attachment-chip__remove")
                        .attr("type", "button")
                        .attr("title", "Quitar archivo")
                        .attr(ATTR_ATTACHMENT_ID, a.id.to_string())
                        .text("×"),
                )
        }))
}

pub fn render_attachments(document: &Document, attachments: &[Attachment]) -> Result<(), JsValue> {
    let names: Vec<String> = attachments.iter().map(|a| a.name.clone()).collect();
    let affordance = AttachmentAffordance::for_names(&names);

    if let Some(input) = by_id(document, ID_CHAT_INPUT) {
        set_style(&input, "border-color", &affordance.border_color)?;
        input.set_attribute("title", &affordance.title)?;
    }
    if let Some(button) = by_id(document, ID_ATTACH_BUTTON) {
        button.set_text_content(Some(&affordance.button_label));
    }
    if let Some(list) = by_id(document, ID_ATTACHMENT_LIST) {
        let fresh = VNode::from(attachment_list_view(attachments)).mount(document)?;
        if let Some(parent) = list.parent_node() {
            parent.replace_child(&fresh, &list)?;
        }
    }
    Ok(())
}

/// Awaiting-response look: controls disabled, pending glyph.  Turning busy
/// off restores the send glyph and focuses the input.
pub fn set_busy(document: &Document, busy: bool) -> Result<(), JsValue> {
    let input = by_id(document, ID_CHAT_INPUT);
    if let Some(input) = &input {
        set_disabled(input, busy)?;
    }
    if let Some(button) = by_id(document, ID_SEND_BUTTON) {
        set_disabled(&button, busy)?;
        button.set_text_content(Some(if busy { PENDING_GLYPH } else { SEND_GLYPH }));
    }
    if !busy {
        if let Some(input) = &input {
            focus(input);
        }
    }
    Ok(())
}

pub fn clear_input(document: &Document) {
    if let Some(input) = by_id(document, ID_CHAT_INPUT) {
        set_input_value(&input, "");
    }
}

pub fn focus_input(document: &Document) {
    if let Some(input) = by_id(document, ID_CHAT_INPUT) {
        focus(&input);
    }
}

pub fn reset_file_input(document: &Document) {
    if let Some(picker) = by_id(document, ID_FILE_INPUT).and_then(|e| e.dyn_into::<HtmlInputElement>().ok()) {
        picker.set_value("");
    }
}

/// Highlight while files are dragged over the input.
pub fn set_drag_highlight(document: &Document, active: bool) -> Result<(), JsValue> {
    let Some(input) = by_id(document, ID_CHAT_INPUT) else {
        return Ok(());
    };
    if active {
        set_style(&input, "border-color", &css_var!(COLOR_PRIMARY_TOKEN))?;
        set_style(&input, "background", DRAG_OVER_BACKGROUND)?;
    } else {
        set_style(&input, "border-color", &css_var!(COLOR_BORDER_TOKEN))?;
        set_style(&input, "background", &css_var!(COLOR_CARD_BG_TOKEN))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_affordance_is_neutral() {
        let a = AttachmentAffordance::for_names(&[]);
        assert_eq!(a.border_color, "var(--color-border)");
        assert_eq!(a.title, "");
        assert_eq!(a.button_label, "📎");
    }

    #[test]
    fn affordance_counts_and_names_files() {
        let a = AttachmentAffordance::for_names(&["a.png".into(), "b.wav".into()]);
        assert_eq!(a.border_color, "var(--color-primary)");
        assert_eq!(a.title, "Archivos adjuntos: a.png, b.wav");
        assert_eq!(a.button_label, "📎 2");
    }

    #[test]
    fn chips_carry_removal_ids() {
        let att = Attachment::named("foto.jpg");
        let node = VNode::from(attachment_list_view(std::slice::from_ref(&att)));
        let remove = node.find_by_class("attachment-chip__remove").unwrap();
        assert_eq!(remove.get_attr(ATTR_ATTACHMENT_ID), Some(att.id.to_string().as_str()));
    }
}
