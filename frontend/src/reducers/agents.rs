//! Agent directory reducer: loading the list and the informational
//! "select agent" flow.

use crate::constants::LOAD_AGENTS_NOTIFICATION;
use crate::messages::{Command, Message};
use crate::state::AppState;
use crate::toast::ToastKind;
use crate::{debug_log, error_log};

/// Returns `true` when the message was handled by the agents reducer.
pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::LoadAgents => {
            cmds.push(Command::FetchAgents);
            true
        }
        Message::AgentsLoaded(agents) => {
            debug_log!("Agentes cargados: {}", agents.len());
            state.agents = agents.clone();
            cmds.push(Command::RenderAgentGrid);
            push_welcome_once(state, cmds);
            true
        }
        Message::AgentsLoadFailed(reason) => {
            error_log!("Error al cargar agentes: {}", reason);
            state.agents.clear();
            cmds.push(Command::RenderAgentLoadError);
            cmds.push(Command::Notify {
                message: LOAD_AGENTS_NOTIFICATION.to_string(),
                kind: ToastKind::Error,
            });
            push_welcome_once(state, cmds);
            true
        }
        Message::SelectAgent(agent_id) => {
            let Some(agent) = state.find_agent(agent_id).cloned() else {
                return true;
            };
            cmds.push(Command::SetHeaderTitle(format!("Explorando: {}", agent.nombre)));
            cmds.push(Command::AppendAgentInfo(agent.clone()));
            cmds.push(Command::FocusInput);
            cmds.push(Command::ScrollPageToBottom);
            state.selected_agent = Some(agent);
            true
        }
        _ => false,
    }
}

// The welcome turn goes out after the first load attempt, whatever its
// outcome, so it can list whatever agents arrived.  A closed transcript
// stays closed.
fn push_welcome_once(state: &mut AppState, cmds: &mut Vec<Command>) {
    if !state.welcome_shown {
        state.welcome_shown = true;
        cmds.push(Command::ShowWelcome {
            reveal: state.chat_visible,
        });
        cmds.push(Command::FocusInput);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Agent;
    use crate::update::update;

    fn agent(id: &str, nombre: &str) -> Agent {
        Agent {
            id: id.to_string(),
            nombre: nombre.to_string(),
            descripcion: "d".to_string(),
            color: "#fff".to_string(),
            emoji: None,
        }
    }

    #[test]
    fn load_requests_fetch() {
        let mut state = AppState::new();
        let cmds = update(&mut state, Message::LoadAgents);
        assert_eq!(cmds, vec![Command::FetchAgents]);
    }

    #[test]
    fn loaded_agents_replace_the_set() {
        let mut state = AppState::new();
        state.agents = vec![agent("old", "Old")];
        let cmds = update(&mut state, Message::AgentsLoaded(vec![agent("root_agent", "Root")]));
        assert_eq!(state.agents.len(), 1);
        assert_eq!(state.agents[0].id, "root_agent");
        assert!(cmds.contains(&Command::RenderAgentGrid));
        assert!(cmds.contains(&Command::ShowWelcome { reveal: true }));
    }

    #[test]
    fn failed_load_leaves_empty_set_and_notifies() {
        let mut state = AppState::new();
        state.agents = vec![agent("x", "X")];
        let cmds = update(&mut state, Message::AgentsLoadFailed("Failed to fetch".into()));
        assert!(state.agents.is_empty());
        assert!(cmds.contains(&Command::RenderAgentLoadError));
        assert!(cmds.iter().any(|c| matches!(c, Command::Notify { kind: ToastKind::Error, .. })));
    }

    #[test]
    fn welcome_is_shown_once() {
        let mut state = AppState::new();
        let first = update(&mut state, Message::AgentsLoaded(vec![]));
        let second = update(&mut state, Message::AgentsLoaded(vec![]));
        assert!(first.contains(&Command::ShowWelcome { reveal: true }));
        assert!(!second.iter().any(|c| matches!(c, Command::ShowWelcome { .. })));
    }

    #[test]
    fn late_load_after_close_keeps_transcript_hidden() {
        let mut state = AppState::new();
        update(&mut state, Message::RequestSend("hola".into()));
        update(&mut state, Message::CloseChat);
        let cmds = update(&mut state, Message::AgentsLoaded(vec![]));
        assert!(cmds.contains(&Command::ShowWelcome { reveal: false }));
        assert!(!cmds.contains(&Command::ShowChat));
    }

    #[test]
    fn selecting_agent_annotates_header_only() {
        let mut state = AppState::new();
        update(&mut state, Message::AgentsLoaded(vec![agent("agente_bosque", "Bosque")]));
        let session_before = state.session_id.clone();
        let cmds = update(&mut state, Message::SelectAgent("agente_bosque".into()));
        assert_eq!(state.selected_agent.as_ref().map(|a| a.id.as_str()), Some("agente_bosque"));
        assert_eq!(cmds[0], Command::SetHeaderTitle("Explorando: Bosque".into()));
        assert!(matches!(cmds[1], Command::AppendAgentInfo(_)));
        assert_eq!(state.session_id, session_before);
    }

    #[test]
    fn selecting_unknown_agent_is_ignored() {
        let mut state = AppState::new();
        let cmds = update(&mut state, Message::SelectAgent("nadie".into()));
        assert!(cmds.is_empty());
        assert!(state.selected_agent.is_none());
    }
}
