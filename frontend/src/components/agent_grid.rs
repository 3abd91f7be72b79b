//! Agent cards under `#agents-grid`.
//!
//! Cards carry `data-agent-id`; a single delegated click listener on the
//! grid (see `ui::events`) turns a click anywhere on a card into
//! `Message::SelectAgent`.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::constants::{ATTR_AGENT_ID, ID_AGENTS_GRID, NO_AGENTS_TEXT};
use crate::dom_utils::by_id;
use crate::html::{el, VElement, VNode};
use crate::icons::IconTable;
use crate::models::Agent;

pub fn agent_card_view(agent: &Agent, icons: &IconTable) -> VElement {
    el("div")
        .class("agent-card")
        .id(&format!("agent-{}", agent.id))
        .attr(ATTR_AGENT_ID, agent.id.as_str())
        .child(
            el("div")
                .class("agent-card__header")
                .child(
                    el("div")
                        .class("agent-card__icon")
                        .style(&format!("background-color: {};", agent.color))
                        .text(icons.agent_icon(&agent.id)),
                )
                .child(el("h3").class("agent-card__title").text(agent.nombre.as_str())),
        )
        .child(el("p").class("agent-card__description").text(agent.descripcion.as_str()))
        .child(
            el("button")
                .class("agent-card__button")
                .attr("type", "button")
                .text(format!("Chatear con {}", agent.nombre)),
        )
}

pub fn empty_view() -> VElement {
    el("div").class("loading").text(NO_AGENTS_TEXT)
}

/// Inline panel left in place of the grid when the directory can't load.
pub fn load_error_view(base_url: &str) -> VElement {
    el("div")
        .class("loading")
        .style("color: var(--color-error);")
        .text("⚠️ Error al conectar con el servidor.")
        .child(el("br"))
        .text(format!("Asegúrate de que el servidor esté corriendo en {}", base_url))
}

pub fn render_agents(document: &Document, agents: &[Agent], icons: &IconTable) -> Result<(), JsValue> {
    let Some(grid) = by_id(document, ID_AGENTS_GRID) else {
        return Ok(());
    };
    grid.set_inner_html("");
    if agents.is_empty() {
        VNode::from(empty_view()).append_to(document, &grid)?;
        return Ok(());
    }
    for agent in agents {
        VNode::from(agent_card_view(agent, icons)).append_to(document, &grid)?;
    }
    Ok(())
}

pub fn render_load_error(document: &Document, base_url: &str) -> Result<(), JsValue> {
    let Some(grid) = by_id(document, ID_AGENTS_GRID) else {
        return Ok(());
    };
    grid.set_inner_html("");
    VNode::from(load_error_view(base_url)).append_to(document, &grid)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> Agent {
        Agent {
            id: "root_agent".into(),
            nombre: "Root".into(),
            descripcion: "d".into(),
            color: "#fff".into(),
            emoji: None,
        }
    }

    #[test]
    fn card_shows_icon_name_and_target() {
        let node = VNode::from(agent_card_view(&root(), &IconTable::default()));
        let VNode::Element(card) = &node else { panic!("card is an element") };
        assert_eq!(card.get_attr(ATTR_AGENT_ID), Some("root_agent"));
        assert_eq!(card.get_attr("id"), Some("agent-root_agent"));

        let icon = node.find_by_class("agent-card__icon").unwrap();
        assert_eq!(icon.inner_html(), "🌿");
        assert_eq!(icon.get_attr("style"), Some("background-color: #fff;"));
        assert_eq!(
            VNode::from(node.find_by_class("agent-card__button").unwrap().clone()).text_content(),
            "Chatear con Root"
        );
    }

    #[test]
    fn unmapped_agent_gets_robot() {
        let mut agent = root();
        agent.id = "unknown_x".into();
        let node = VNode::from(agent_card_view(&agent, &IconTable::default()));
        assert_eq!(node.find_by_class("agent-card__icon").unwrap().inner_html(), "🤖");
    }

    #[test]
    fn error_panel_names_origin() {
        let text = VNode::from(load_error_view("http://localhost:8000")).text_content();
        assert!(text.contains("http://localhost:8000"));
    }
}
