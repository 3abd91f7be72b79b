// Backend origin used when the page itself is served from a dev host.
pub const DEV_API_ORIGIN: &str = "http://localhost:8000";
pub const DEV_HOSTNAMES: [&str; 2] = ["localhost", "127.0.0.1"];

// Element ids the client mounts into / looks up
pub const ID_APP_ROOT: &str = "datar-app";
pub const ID_AGENTS_GRID: &str = "agents-grid";
pub const ID_CHAT_MESSAGES: &str = "chat-messages";
pub const ID_CHAT_INPUT: &str = "chat-input";
pub const ID_SEND_BUTTON: &str = "send-button";
pub const ID_ATTACH_BUTTON: &str = "attach-button";
pub const ID_FILE_INPUT: &str = "file-input";
pub const ID_ATTACHMENT_LIST: &str = "attachment-list";
pub const ID_HEADER_TITLE: &str = "header-agent-name";

// Data attributes used for delegated click handling
pub const ATTR_AGENT_ID: &str = "data-agent-id";
pub const ATTR_ATTACHMENT_ID: &str = "data-attachment-id";
pub const ATTR_ACTION: &str = "data-action";
pub const ACTION_CLOSE_CHAT: &str = "close-chat";

// Composer glyphs
pub const SEND_GLYPH: &str = "➤";
pub const PENDING_GLYPH: &str = "⏳";
pub const ATTACH_GLYPH: &str = "📎";

// Transcript labels
pub const USER_LABEL: &str = "Tú";
pub const SYSTEM_LABEL: &str = "Sistema";
pub const DEFAULT_AGENT_LABEL: &str = "root_agent";
pub const WELCOME_LABEL: &str = "Sistema DATAR";
pub const INFO_LABEL: &str = "Información";

pub const DEFAULT_HEADER_TITLE: &str = "Sistema de Agentes {DATAR}";
pub const FALLBACK_AGENT_EMOJI: &str = "🤖";

// User-facing error texts
pub const GENERIC_SEND_ERROR: &str =
    "❌ Error al comunicarse con el agente. Por favor, intenta de nuevo.";
pub const UNKNOWN_ERROR_DETAIL: &str = "Error desconocido";
pub const LOAD_AGENTS_NOTIFICATION: &str =
    "Error al cargar agentes. Por favor, verifica que el servidor esté corriendo.";
pub const ATTACHMENTS_NOT_UPLOADED_NOTICE: &str =
    "Los archivos adjuntos se listan en el mensaje pero no se envían al servidor.";
pub const NO_AGENTS_TEXT: &str = "No hay agentes disponibles";
pub const AUDIO_UNSUPPORTED_TEXT: &str = "Tu navegador no soporta la reproducción de audio.";

// Composer styling tokens
pub const COLOR_PRIMARY_TOKEN: &str = "color-primary";
pub const COLOR_BORDER_TOKEN: &str = "color-border";
pub const COLOR_CARD_BG_TOKEN: &str = "color-card-bg";
pub const DRAG_OVER_BACKGROUND: &str = "rgba(231, 107, 19, 0.1)";
