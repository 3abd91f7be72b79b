// frontend/src/messages.rs
//
// Everything that can happen in the UI, and the side effects the reducers
// ask for in return.
//
use uuid::Uuid;

use crate::models::{Agent, Attachment, ChatRequest, ChatResponse, ChatTurn};
use crate::toast::ToastKind;

#[derive(Debug, Clone)]
pub enum Message {
    // Agent directory
    LoadAgents,
    AgentsLoaded(Vec<Agent>),
    AgentsLoadFailed(String),
    SelectAgent(String),

    // Chat session
    /// Raw composer text; the reducer trims it.
    RequestSend(String),
    ChatReplied(ChatResponse),
    /// User-facing error text for the system turn.
    ChatFailed(String),
    CloseChat,

    // Attachments
    FilesAttached(Vec<Attachment>),
    RemoveAttachment(Uuid),
    ClearAttachments,
}

/// Side effects produced by `update`.  Executed by
/// `command_executors::execute` after the state borrow is dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `GET /api/agents`
    FetchAgents,
    /// `POST /api/chat`
    SendChat(ChatRequest),

    RenderAgentGrid,
    RenderAgentLoadError,
    /// Greeting at the top of the transcript; `reveal` shows the transcript
    /// too, unless the user has closed it.
    ShowWelcome { reveal: bool },
    AppendTurn(ChatTurn),
    AppendAgentInfo(Agent),
    RenderAttachments,
    ResetFileInput,

    SetComposerBusy(bool),
    ClearInput,
    FocusInput,
    ShowChat,
    HideChat,
    SetHeaderTitle(String),
    ScrollPageToBottom,
    Notify { message: String, kind: ToastKind },
}
