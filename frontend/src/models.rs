use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::FALLBACK_AGENT_EMOJI;

// API models that match the backend schema

/// Agent as listed by `GET /api/agents`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub nombre: String,
    pub descripcion: String,
    pub color: String,
    #[serde(default)]
    pub emoji: Option<String>,
}

impl Agent {
    /// Emoji the backend advertises for this agent, or the robot fallback.
    pub fn display_emoji(&self) -> &str {
        match self.emoji.as_deref() {
            Some(e) if !e.is_empty() => e,
            _ => FALLBACK_AGENT_EMOJI,
        }
    }
}

/// Body of `POST /api/chat`.  No agent id: the root agent routes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: Option<String>,
}

/// Successful reply of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub response: String,
    #[serde(default)]
    pub agent_name: Option<String>,
    #[serde(default)]
    pub files: Option<Vec<ResponseFile>>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Media artifact attached to an agent reply.  `url` is relative to the
/// API origin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseFile {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub filename: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Audio,
    Map,
    File,
}

impl ResponseFile {
    pub fn media_kind(&self) -> MediaKind {
        match self.kind.as_str() {
            "image" => MediaKind::Image,
            "audio" => MediaKind::Audio,
            "map" => MediaKind::Map,
            _ => MediaKind::File,
        }
    }
}

/// Error body FastAPI sends with non-2xx responses.  `detail` is a string
/// for `HTTPException`s and a list of objects for validation errors.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Agent,
    System,
}

impl Role {
    /// CSS modifier for the message bubble.  System notices reuse the agent
    /// bubble.
    pub fn bubble_class(&self) -> &'static str {
        match self {
            Role::User => "chat-message__user",
            Role::Agent | Role::System => "chat-message__agent",
        }
    }
}

/// One rendered entry of the transcript.  Not kept in state: the DOM is the
/// history.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatTurn {
    pub role: Role,
    pub label: String,
    pub text: String,
    pub files: Vec<ResponseFile>,
}

/// A file picked or dropped by the user, waiting for the next send.
#[derive(Clone, Debug)]
pub struct Attachment {
    pub id: Uuid,
    pub name: String,
    pub file: Option<web_sys::File>,
}

impl Attachment {
    pub fn from_file(file: web_sys::File) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: file.name(),
            file: Some(file),
        }
    }

    /// Attachment without a browser handle (used by tests and previews).
    pub fn named(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_response_tolerates_missing_optionals() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"session_id":"s1","response":"hola"}"#).unwrap();
        assert_eq!(resp.session_id, "s1");
        assert!(resp.agent_name.is_none());
        assert!(resp.files.is_none());
    }

    #[test]
    fn response_file_kind_maps_unknown_to_file() {
        let f: ResponseFile = serde_json::from_str(
            r#"{"type":"text","url":"/outputs/a.txt","filename":"a.txt"}"#,
        )
        .unwrap();
        assert_eq!(f.media_kind(), MediaKind::File);

        let f: ResponseFile =
            serde_json::from_str(r#"{"type":"map","url":"/m.html","filename":"m.html"}"#).unwrap();
        assert_eq!(f.media_kind(), MediaKind::Map);
    }

    #[test]
    fn error_body_detail_variants() {
        let b: ErrorBody = serde_json::from_str(r#"{"detail":"sobrecargado"}"#).unwrap();
        assert_eq!(b.detail_text().as_deref(), Some("sobrecargado"));

        let b: ErrorBody = serde_json::from_str(r#"{"detail":[{"msg":"field required"}]}"#).unwrap();
        assert!(b.detail_text().unwrap().contains("field required"));

        let b: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(b.detail_text().is_none());
    }

    #[test]
    fn chat_request_has_no_agent_id() {
        let req = ChatRequest {
            message: "hola".into(),
            session_id: Some("session_1_abc".into()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["message"], "hola");
        assert_eq!(json["session_id"], "session_1_abc");
        assert!(json.get("agent_id").is_none());
    }

    #[test]
    fn agent_emoji_falls_back_to_robot() {
        let mut agent: Agent = serde_json::from_str(
            r##"{"id":"x","nombre":"X","descripcion":"d","color":"#fff"}"##,
        )
        .unwrap();
        assert_eq!(agent.display_emoji(), "🤖");
        agent.emoji = Some("🌳".into());
        assert_eq!(agent.display_emoji(), "🌳");
    }
}
