//! Utility helpers shared across the WASM frontend.

use rand::Rng;

use crate::constants::ATTACH_GLYPH;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SESSION_SUFFIX_LEN: usize = 9;

/// Fresh client-side session id: `session_<epoch ms>_<9 base-36 chars>`.
/// The server may hand back a different one; see the chat reducer.
pub fn generate_session_id() -> String {
    let now_ms = chrono::Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SESSION_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format_session_id(now_ms, &suffix)
}

pub fn format_session_id(timestamp_ms: i64, suffix: &str) -> String {
    format!("session_{}_{}", timestamp_ms, suffix)
}

/// Text of the optimistic user turn: the typed message, then one
/// `📎 name` line per attachment.
pub fn compose_user_display(message: &str, attachment_names: &[String]) -> String {
    if attachment_names.is_empty() {
        return message.to_string();
    }
    let files = attachment_names
        .iter()
        .map(|name| format!("{} {}", ATTACH_GLYPH, name))
        .collect::<Vec<_>>()
        .join("\n");
    if message.is_empty() {
        files
    } else {
        format!("{}\n\n{}", message, files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_shape() {
        let id = generate_session_id();
        let parts: Vec<&str> = id.splitn(3, '_').collect();
        assert_eq!(parts[0], "session");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), SESSION_SUFFIX_LEN);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn session_ids_differ() {
        assert_ne!(generate_session_id(), generate_session_id());
    }

    #[test]
    fn display_text_lists_attachments() {
        let names = vec!["mapa.png".to_string(), "canto.wav".to_string()];
        assert_eq!(
            compose_user_display("mira esto", &names),
            "mira esto\n\n📎 mapa.png\n📎 canto.wav"
        );
        assert_eq!(compose_user_display("", &names), "📎 mapa.png\n📎 canto.wav");
        assert_eq!(compose_user_display("hola", &[]), "hola");
    }

    #[test]
    fn format_is_stable() {
        assert_eq!(format_session_id(1700000000000, "abc123xyz"), "session_1700000000000_abc123xyz");
    }
}
