//! Chat session reducer.
//!
//! One message moves through *composing* → *awaiting response* → back.  The
//! `request_in_flight` flag is the only guard against overlapping sends;
//! the disabled send button merely mirrors it.

use crate::constants::{
    ATTACHMENTS_NOT_UPLOADED_NOTICE, DEFAULT_AGENT_LABEL, DEFAULT_HEADER_TITLE, SYSTEM_LABEL,
    USER_LABEL,
};
use crate::messages::{Command, Message};
use crate::models::{ChatRequest, ChatResponse, ChatTurn, Role};
use crate::state::AppState;
use crate::toast::ToastKind;
use crate::utils::compose_user_display;
use crate::warn_log;

/// Returns `true` when the message was handled by the chat reducer.
pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::RequestSend(raw) => {
            request_send(state, raw, cmds);
            true
        }
        Message::ChatReplied(response) => {
            chat_replied(state, response, cmds);
            true
        }
        Message::ChatFailed(error_text) => {
            state.request_in_flight = false;
            cmds.push(Command::AppendTurn(ChatTurn {
                role: Role::System,
                label: SYSTEM_LABEL.to_string(),
                text: error_text.clone(),
                files: Vec::new(),
            }));
            // Attachments stay so the user can retry; the session id is kept.
            cmds.push(Command::SetComposerBusy(false));
            true
        }
        Message::CloseChat => {
            state.chat_visible = false;
            state.selected_agent = None;
            cmds.push(Command::HideChat);
            cmds.push(Command::SetHeaderTitle(DEFAULT_HEADER_TITLE.to_string()));
            cmds.push(Command::ClearInput);
            true
        }
        _ => false,
    }
}

fn request_send(state: &mut AppState, raw: &str, cmds: &mut Vec<Command>) {
    let message = raw.trim();
    if message.is_empty() && state.attachments.is_empty() {
        return;
    }
    if state.request_in_flight {
        warn_log!("Send ignored: a chat request is already in flight");
        return;
    }

    let names = state.attachment_names();
    if !names.is_empty() {
        // /api/chat only accepts JSON; the files are listed in the user turn
        // but not uploaded.
        warn_log!(
            "{} attachment(s) not uploaded: the chat endpoint accepts text only",
            names.len()
        );
        cmds.push(Command::Notify {
            message: ATTACHMENTS_NOT_UPLOADED_NOTICE.to_string(),
            kind: ToastKind::Info,
        });
    }

    state.request_in_flight = true;
    state.chat_visible = true;

    cmds.push(Command::SetComposerBusy(true));
    cmds.push(Command::AppendTurn(ChatTurn {
        role: Role::User,
        label: USER_LABEL.to_string(),
        text: compose_user_display(message, &names),
        files: Vec::new(),
    }));
    cmds.push(Command::ClearInput);
    cmds.push(Command::ShowChat);
    cmds.push(Command::SendChat(ChatRequest {
        message: message.to_string(),
        session_id: Some(state.session_id.clone()),
    }));
}

fn chat_replied(state: &mut AppState, response: &ChatResponse, cmds: &mut Vec<Command>) {
    state.request_in_flight = false;
    // The server may rotate the id; last write wins.
    state.session_id = response.session_id.clone();

    let label = response
        .agent_name
        .clone()
        .filter(|n| !n.is_empty())
        .or_else(|| state.selected_agent.as_ref().map(|a| a.nombre.clone()))
        .unwrap_or_else(|| DEFAULT_AGENT_LABEL.to_string());

    cmds.push(Command::AppendTurn(ChatTurn {
        role: Role::Agent,
        label,
        text: response.response.clone(),
        files: response.files.clone().unwrap_or_default(),
    }));

    state.attachments.clear();
    cmds.push(Command::RenderAttachments);
    cmds.push(Command::ResetFileInput);
    cmds.push(Command::SetComposerBusy(false));
}
