use crate::debug_log;
use crate::messages::{Command, Message};
use crate::state::AppState;

/// Returns `true` when the message was handled by the attachments reducer.
pub fn update(state: &mut AppState, msg: &Message, cmds: &mut Vec<Command>) -> bool {
    match msg {
        Message::FilesAttached(files) => {
            if files.is_empty() {
                return true;
            }
            state.attachments.extend(files.iter().cloned());
            debug_log!("Archivos adjuntos: {}", state.attachments.len());
            cmds.push(Command::RenderAttachments);
            true
        }
        Message::RemoveAttachment(id) => {
            let before = state.attachments.len();
            state.attachments.retain(|a| a.id != *id);
            if state.attachments.len() != before {
                cmds.push(Command::RenderAttachments);
                if state.attachments.is_empty() {
                    cmds.push(Command::ResetFileInput);
                }
            }
            true
        }
        Message::ClearAttachments => {
            state.attachments.clear();
            cmds.push(Command::RenderAttachments);
            cmds.push(Command::ResetFileInput);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attachment;
    use crate::update::update;

    #[test]
    fn files_accumulate_in_order() {
        let mut state = AppState::new();
        update(&mut state, Message::FilesAttached(vec![Attachment::named("a.png")]));
        let cmds = update(
            &mut state,
            Message::FilesAttached(vec![Attachment::named("b.wav"), Attachment::named("c.txt")]),
        );
        assert_eq!(state.attachment_names(), vec!["a.png", "b.wav", "c.txt"]);
        assert_eq!(cmds, vec![Command::RenderAttachments]);
    }

    #[test]
    fn empty_drop_changes_nothing() {
        let mut state = AppState::new();
        assert!(update(&mut state, Message::FilesAttached(vec![])).is_empty());
    }

    #[test]
    fn remove_by_id() {
        let mut state = AppState::new();
        let keep = Attachment::named("keep.png");
        let gone = Attachment::named("drop.png");
        let gone_id = gone.id;
        update(&mut state, Message::FilesAttached(vec![keep, gone]));
        update(&mut state, Message::RemoveAttachment(gone_id));
        assert_eq!(state.attachment_names(), vec!["keep.png"]);

        // unknown id: nothing to re-render
        assert!(update(&mut state, Message::RemoveAttachment(gone_id)).is_empty());
    }

    #[test]
    fn clear_resets_picker() {
        let mut state = AppState::new();
        update(&mut state, Message::FilesAttached(vec![Attachment::named("a")]));
        let cmds = update(&mut state, Message::ClearAttachments);
        assert!(state.attachments.is_empty());
        assert_eq!(cmds, vec![Command::RenderAttachments, Command::ResetFileInput]);
    }
}
