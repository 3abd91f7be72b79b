use std::cell::RefCell;

use crate::command_executors;
use crate::icons::IconTable;
use crate::messages::{Command, Message};
use crate::models::{Agent, Attachment};
use crate::network::ApiConfig;
use crate::update::update;
use crate::utils::generate_session_id;

// Store global application state
pub struct AppState {
    pub config: ApiConfig,
    pub icons: IconTable,

    // Agent directory (replaced wholesale on every load)
    pub agents: Vec<Agent>,
    // Informational only; never sent to the backend
    pub selected_agent: Option<Agent>,

    // Chat session
    pub session_id: String,
    pub request_in_flight: bool,
    // False once the user closes the transcript; a send re-opens it
    pub chat_visible: bool,
    pub welcome_shown: bool,

    // Files waiting for the next send, in pick order
    pub attachments: Vec<Attachment>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default(), IconTable::default())
    }

    pub fn with_config(config: ApiConfig, icons: IconTable) -> Self {
        Self {
            config,
            icons,
            agents: Vec::new(),
            selected_agent: None,
            session_id: generate_session_id(),
            request_in_flight: false,
            chat_visible: true,
            welcome_shown: false,
            attachments: Vec::new(),
        }
    }

    pub fn find_agent(&self, agent_id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == agent_id)
    }

    pub fn attachment_names(&self) -> Vec<String> {
        self.attachments.iter().map(|a| a.name.clone()).collect()
    }

    /// Run the reducer for `msg` and hand back the side effects to execute.
    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }
}

// WASM runs single-threaded; one state per page.
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Replace the global state wholesale (start-up and tests).
pub fn install_state(state: AppState) {
    APP_STATE.with(|cell| *cell.borrow_mut() = state);
}

/// Dispatch a message against the global state, then execute the resulting
/// commands once the borrow is released.  Commands may dispatch again.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| state.borrow_mut().dispatch(msg));
    for cmd in commands {
        command_executors::execute(cmd);
    }
}
