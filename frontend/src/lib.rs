use wasm_bindgen::prelude::*;

#[macro_use]
pub mod macros;

pub mod command_executors;
pub mod components;
pub mod constants;
pub mod dom_utils;
pub mod error;
pub mod html;
pub mod icons;
pub mod logging;
pub mod messages;
pub mod models;
pub mod network;
pub mod reducers;
pub mod state;
pub mod toast;
pub mod ui;
pub mod update;
pub mod utils;

use icons::IconTable;
use messages::Message;
use network::{ApiConfig, ClientConfig};
use state::{dispatch_global_message, install_state, AppState};

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let document = dom_utils::document().ok_or_else(|| JsValue::from_str("no document on window"))?;

    // Runtime config first, then build-time env, then the page location
    let client_config = ClientConfig::from_window();
    let api_config = ApiConfig::detect(client_config.api_base_url.as_deref());
    let icons = IconTable::with_overrides(&client_config.agent_icons);
    install_state(AppState::with_config(api_config, icons));

    ui::setup::ensure_layout(&document)?;
    ui::events::setup_event_listeners(&document)?;

    state::APP_STATE.with(|state| {
        let state = state.borrow();
        debug_log!(
            "DATAR client started: api={} session={}",
            state.config.base_url(),
            state.session_id
        );
    });

    dispatch_global_message(Message::LoadAgents);
    Ok(())
}
