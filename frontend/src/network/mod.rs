pub mod api_client;
pub mod config;

// Re-export commonly used items
pub use api_client::ApiClient;
pub use config::{ApiConfig, ClientConfig};
