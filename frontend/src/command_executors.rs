//! Runs the side effects the reducers return.
//!
//! Called from `dispatch_global_message` after the state borrow is dropped.
//! Render commands take short read-only borrows of `APP_STATE`; network
//! commands copy what they need before spawning so no borrow outlives an
//! await point.

use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::components::{agent_grid, composer, transcript};
use crate::constants::ID_HEADER_TITLE;
use crate::dom_utils;
use crate::messages::{Command, Message};
use crate::models::ChatRequest;
use crate::network::ApiClient;
use crate::state::{dispatch_global_message, APP_STATE};
use crate::{debug_log, error_log, toast};

pub fn execute(cmd: Command) {
    match cmd {
        Command::FetchAgents => fetch_agents(),
        Command::SendChat(request) => send_chat(request),
        other => {
            if let Err(e) = execute_dom_command(other) {
                error_log!("DOM update failed: {:?}", e);
            }
        }
    }
}

fn api_client() -> ApiClient {
    APP_STATE.with(|state| ApiClient::new(state.borrow().config.clone()))
}

fn fetch_agents() {
    let client = api_client();
    debug_log!("Fetching agents from {}", client.config().base_url());
    wasm_bindgen_futures::spawn_local(async move {
        match client.get_agents().await {
            Ok(agents) => dispatch_global_message(Message::AgentsLoaded(agents)),
            Err(e) => dispatch_global_message(Message::AgentsLoadFailed(e.to_string())),
        }
    });
}

fn send_chat(request: ChatRequest) {
    let client = api_client();
    wasm_bindgen_futures::spawn_local(async move {
        match client.send_chat(&request).await {
            Ok(response) => dispatch_global_message(Message::ChatReplied(response)),
            Err(e) => {
                error_log!("Error al enviar mensaje: {}", e);
                dispatch_global_message(Message::ChatFailed(e.user_message()));
            }
        }
    });
}

fn execute_dom_command(cmd: Command) -> Result<(), JsValue> {
    let Some(document) = dom_utils::document() else {
        return Ok(());
    };

    match cmd {
        Command::RenderAgentGrid => {
            let (agents, icons) = APP_STATE.with(|state| {
                let state = state.borrow();
                (state.agents.clone(), state.icons.clone())
            });
            agent_grid::render_agents(&document, &agents, &icons)
        }
        Command::RenderAgentLoadError => {
            let base_url = APP_STATE.with(|state| state.borrow().config.base_url().to_string());
            agent_grid::render_load_error(&document, &base_url)
        }
        Command::ShowWelcome { reveal } => {
            let agents = APP_STATE.with(|state| state.borrow().agents.clone());
            transcript::show_welcome(&document, &agents, reveal)
        }
        Command::AppendTurn(turn) => {
            let config = APP_STATE.with(|state| state.borrow().config.clone());
            transcript::append_turn(&document, &turn, &config)
        }
        Command::AppendAgentInfo(agent) => {
            transcript::append_entry(&document, transcript::agent_info_view(&agent))
        }
        Command::RenderAttachments => {
            let attachments = APP_STATE.with(|state| state.borrow().attachments.clone());
            composer::render_attachments(&document, &attachments)
        }
        Command::ResetFileInput => {
            composer::reset_file_input(&document);
            Ok(())
        }
        Command::SetComposerBusy(busy) => composer::set_busy(&document, busy),
        Command::ClearInput => {
            composer::clear_input(&document);
            Ok(())
        }
        Command::FocusInput => {
            composer::focus_input(&document);
            Ok(())
        }
        Command::ShowChat => transcript::set_visible(&document, true),
        Command::HideChat => transcript::set_visible(&document, false),
        Command::SetHeaderTitle(title) => {
            if let Some(header) = dom_utils::by_id(&document, ID_HEADER_TITLE) {
                header.set_text_content(Some(&title));
            }
            Ok(())
        }
        Command::ScrollPageToBottom => scroll_page_to_bottom(&document),
        Command::Notify { message, kind } => {
            toast::show(&message, kind);
            Ok(())
        }
        Command::FetchAgents | Command::SendChat(_) => Ok(()),
    }
}

fn scroll_page_to_bottom(document: &web_sys::Document) -> Result<(), JsValue> {
    let (Some(window), Some(body)) = (web_sys::window(), document.body()) else {
        return Ok(());
    };
    let opts = ScrollToOptions::new();
    opts.set_top(f64::from(body.scroll_height()));
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
    Ok(())
}
