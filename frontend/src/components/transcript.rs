//! Append-only transcript under `#chat-messages`.
//!
//! Every entry is built as a `VNode` and mounted, so message text from the
//! user or the backend is inserted as text, never parsed as markup.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::constants::{
    ACTION_CLOSE_CHAT, ATTR_ACTION, AUDIO_UNSUPPORTED_TEXT, ID_CHAT_MESSAGES, INFO_LABEL,
    WELCOME_LABEL,
};
use crate::dom_utils::{by_id, scroll_to_end, set_display};
use crate::html::{el, text, VElement, VNode};
use crate::models::{Agent, ChatTurn, MediaKind, ResponseFile};
use crate::network::ApiConfig;

const IMAGE_STYLE: &str = "max-width: 100%; max-height: 400px; border-radius: 8px; margin-top: 10px;";
const AUDIO_STYLE: &str = "width: 100%; margin-top: 10px;";

pub fn turn_view(turn: &ChatTurn, config: &ApiConfig) -> VElement {
    let mut entry = el("div")
        .class("chat-message")
        .child(el("div").class("chat-message__label").text(turn.label.as_str()))
        .child(el("div").class(turn.role.bubble_class()).text(turn.text.as_str()));

    if !turn.files.is_empty() {
        entry = entry.child(
            el("div")
                .class("chat-message__media")
                .children(turn.files.iter().map(|f| media_view(f, config))),
        );
    }
    entry
}

pub fn media_view(file: &ResponseFile, config: &ApiConfig) -> VElement {
    let src = config.resource_url(&file.url);
    let name = file.filename.as_str();
    match file.media_kind() {
        MediaKind::Image => el("div")
            .class("media-item media-item--image")
            .child(
                el("img")
                    .attr("src", src)
                    .attr("alt", name)
                    .attr("title", file.description.as_deref().unwrap_or(name))
                    .style(IMAGE_STYLE),
            )
            .child(el("p").class("media-caption").text(name)),
        MediaKind::Audio => el("div")
            .class("media-item media-item--audio")
            .child(el("p").class("media-caption").text(format!("🎵 {}", name)))
            .child(
                el("audio")
                    .attr("controls", "")
                    .style(AUDIO_STYLE)
                    .child(el("source").attr("src", src.clone()).attr("type", "audio/wav"))
                    .child(el("source").attr("src", src).attr("type", "audio/mpeg"))
                    .text(AUDIO_UNSUPPORTED_TEXT),
            ),
        MediaKind::Map => el("div")
            .class("media-item media-item--map")
            .child(el("p").class("media-caption").text(format!("🗺️ {}", name)))
            .child(external_link(src).text("Abrir mapa")),
        MediaKind::File => el("div")
            .class("media-item media-item--file")
            .child(external_link(src).text(format!("📄 {}", name))),
    }
}

fn external_link(href: String) -> VElement {
    el("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener")
        .class("media-link")
}

/// Greeting rendered once the agent list is known.
pub fn welcome_view(agents: &[Agent]) -> VElement {
    let items = agents.iter().map(|a| {
        el("li")
            .child(el("strong").text(format!("{} {}:", a.display_emoji(), a.nombre)))
            .text(format!(" {}", a.descripcion))
    });

    el("div")
        .class("chat-message")
        .child(el("div").class("chat-message__label").text(WELCOME_LABEL))
        .child(
            el("div")
                .class("chat-message__agent")
                .text("¡Bienvenido al Sistema Agéntico DATAR! 🌿")
                .child(el("br"))
                .child(el("br"))
                .text(
                    "Puedes preguntarme sobre la Estructura Ecológica Principal de Bogotá. \
                     El sistema seleccionará automáticamente al agente más apropiado para \
                     responder tu consulta.",
                )
                .child(el("br"))
                .child(el("br"))
                .child(el("strong").text("Agentes disponibles:"))
                .child(
                    el("ul")
                        .style("margin-top: 10px; padding-left: 20px;")
                        .children(items),
                ),
        )
}

/// Informational entry appended when an agent card is clicked.
pub fn agent_info_view(agent: &Agent) -> VElement {
    let tint = format!(
        "background-color: {}20; border-left: 3px solid {};",
        agent.color, agent.color
    );
    el("div")
        .class("chat-message")
        .child(el("div").class("chat-message__label").text(INFO_LABEL))
        .child(
            el("div")
                .class("chat-message__agent")
                .style(&tint)
                .child(el("strong").text(format!("{} {}", agent.display_emoji(), agent.nombre)))
                .child(el("br"))
                .child(el("br"))
                .text(agent.descripcion.as_str())
                .child(el("br"))
                .child(el("br"))
                .child(el("em").text(
                    "Nota: El sistema seleccionará automáticamente al agente más apropiado \
                     para tu consulta. No necesitas seleccionarlo manualmente.",
                )),
        )
}

fn close_button() -> VElement {
    el("button")
        .class("chat-close")
        .attr("type", "button")
        .attr("title", "Cerrar chat")
        .attr(ATTR_ACTION, ACTION_CLOSE_CHAT)
        .child(text("×"))
}

/// Append one entry and keep the newest visible.
pub fn append_entry(document: &Document, entry: VElement) -> Result<(), JsValue> {
    let Some(container) = by_id(document, ID_CHAT_MESSAGES) else {
        return Ok(());
    };
    VNode::from(entry).append_to(document, &container)?;
    scroll_to_end(&container);
    Ok(())
}

pub fn append_turn(document: &Document, turn: &ChatTurn, config: &ApiConfig) -> Result<(), JsValue> {
    append_entry(document, turn_view(turn, config))
}

/// Put the close button and the greeting above whatever the transcript
/// already holds.  The agent list can arrive after the first exchange, so
/// existing turns are kept.
pub fn show_welcome(document: &Document, agents: &[Agent], reveal: bool) -> Result<(), JsValue> {
    let Some(container) = by_id(document, ID_CHAT_MESSAGES) else {
        return Ok(());
    };
    let close = VNode::from(close_button()).mount(document)?;
    let welcome = VNode::from(welcome_view(agents)).mount(document)?;
    container.prepend_with_node_2(&close, &welcome)?;
    if reveal {
        set_display(&container, true)?;
    }
    Ok(())
}

pub fn set_visible(document: &Document, visible: bool) -> Result<(), JsValue> {
    match by_id(document, ID_CHAT_MESSAGES) {
        Some(container) => set_display(&container, visible),
        None => Ok(()),
    }
}
