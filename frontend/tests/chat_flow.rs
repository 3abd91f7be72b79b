//! Browser tests for the chat page: reducer output driven through the
//! command executors against a real DOM.
#![cfg(target_arch = "wasm32")]

use datar_frontend::command_executors::execute;
use datar_frontend::components::{agent_grid, composer};
use datar_frontend::constants::{
    ID_AGENTS_GRID, ID_APP_ROOT, ID_CHAT_INPUT, ID_CHAT_MESSAGES, ID_HEADER_TITLE, ID_SEND_BUTTON,
    PENDING_GLYPH, SEND_GLYPH,
};
use datar_frontend::dom_utils::{is_disabled, is_displayed, set_input_value};
use datar_frontend::icons::IconTable;
use datar_frontend::messages::{Command, Message};
use datar_frontend::models::{Agent, ChatTurn, Role};
use datar_frontend::state::{install_state, AppState, APP_STATE};
use datar_frontend::ui::setup::ensure_layout;
use wasm_bindgen_test::*;
use web_sys::Document;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_page() -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(previous) = document.get_element_by_id(ID_APP_ROOT) {
        previous.remove();
    }
    ensure_layout(&document).unwrap();
    install_state(AppState::new());
    document
}

fn agent(id: &str, nombre: &str) -> Agent {
    Agent {
        id: id.into(),
        nombre: nombre.into(),
        descripcion: format!("{} descripción", nombre),
        color: "#4caf50".into(),
        emoji: None,
    }
}

/// Run a message through the reducer and execute everything except network
/// calls.
fn drive(msg: Message) -> Vec<Command> {
    let commands = APP_STATE.with(|s| s.borrow_mut().dispatch(msg));
    for cmd in commands.iter().cloned() {
        if !matches!(cmd, Command::FetchAgents | Command::SendChat(_)) {
            execute(cmd);
        }
    }
    commands
}

#[wasm_bindgen_test]
fn script_in_turn_is_rendered_as_text() {
    let document = fresh_page();
    execute(Command::AppendTurn(ChatTurn {
        role: Role::Agent,
        label: "root_agent".into(),
        text: "<script>window.__pwned = 1</script>".into(),
        files: vec![],
    }));

    let container = document.get_element_by_id(ID_CHAT_MESSAGES).unwrap();
    assert!(container.query_selector("script").unwrap().is_none());
    assert!(container
        .text_content()
        .unwrap()
        .contains("<script>window.__pwned = 1</script>"));
}

#[wasm_bindgen_test]
fn send_shows_user_turn_and_locks_composer() {
    let document = fresh_page();
    let input = document.get_element_by_id(ID_CHAT_INPUT).unwrap();
    set_input_value(&input, "  ¿Qué es la EEP?  ");

    let commands = drive(Message::RequestSend("  ¿Qué es la EEP?  ".into()));
    assert!(commands.iter().any(|c| matches!(c, Command::SendChat(r) if r.message == "¿Qué es la EEP?")));

    let send = document.get_element_by_id(ID_SEND_BUTTON).unwrap();
    assert!(is_disabled(&send));
    assert!(is_disabled(&input));
    assert_eq!(send.text_content().as_deref(), Some(PENDING_GLYPH));

    let transcript = document.get_element_by_id(ID_CHAT_MESSAGES).unwrap();
    assert!(transcript.text_content().unwrap().contains("¿Qué es la EEP?"));

    drive(Message::ChatFailed("Error 500: Internal Server Error".into()));
    assert!(!is_disabled(&send));
    assert_eq!(send.text_content().as_deref(), Some(SEND_GLYPH));
    assert!(transcript
        .text_content()
        .unwrap()
        .contains("Error 500: Internal Server Error"));
}

#[wasm_bindgen_test]
fn close_hides_without_clearing() {
    let document = fresh_page();
    drive(Message::AgentsLoaded(vec![agent("root_agent", "Raíz")]));
    drive(Message::SelectAgent("root_agent".into()));

    let header = document.get_element_by_id(ID_HEADER_TITLE).unwrap();
    assert_eq!(header.text_content().as_deref(), Some("Explorando: Raíz"));

    let transcript = document.get_element_by_id(ID_CHAT_MESSAGES).unwrap();
    let before = transcript.child_element_count();
    drive(Message::CloseChat);

    assert!(!is_displayed(&transcript));
    assert_eq!(transcript.child_element_count(), before);
    assert_eq!(header.text_content().as_deref(), Some("Sistema de Agentes {DATAR}"));
}

#[wasm_bindgen_test]
fn grid_renders_one_card_per_agent() {
    let document = fresh_page();
    let agents = vec![agent("root_agent", "Raíz"), agent("agente_sonido", "Sonido")];
    agent_grid::render_agents(&document, &agents, &IconTable::default()).unwrap();

    let grid = document.get_element_by_id(ID_AGENTS_GRID).unwrap();
    assert_eq!(grid.query_selector_all(".agent-card").unwrap().length(), 2);
    let sonido = document.get_element_by_id("agent-agente_sonido").unwrap();
    assert!(sonido.text_content().unwrap().contains("🔊"));
}

#[wasm_bindgen_test]
fn busy_toggle_round_trips() {
    let document = fresh_page();
    composer::set_busy(&document, true).unwrap();
    composer::set_busy(&document, false).unwrap();
    let send = document.get_element_by_id(ID_SEND_BUTTON).unwrap();
    assert!(!is_disabled(&send));
    assert_eq!(send.text_content().as_deref(), Some(SEND_GLYPH));
}
