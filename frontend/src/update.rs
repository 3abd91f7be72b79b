// frontend/src/update.rs
//
use crate::messages::{Command, Message};
use crate::state::AppState;

/// Apply `msg` to `state` and return the commands to execute.  Pure with
/// respect to the DOM: every visible effect is a `Command`.
pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    // Delegate to domain-specific reducers; the first one that consumes the
    // message wins.
    if crate::reducers::agents::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::chat::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::attachments::update(state, &msg, &mut commands) {
        return commands;
    }

    crate::warn_log!("Unhandled message: {:?}", msg);
    commands
}
