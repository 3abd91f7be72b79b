use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::config::ApiConfig;
use crate::debug_log;
use crate::error::ApiError;
use crate::models::{Agent, ChatRequest, ChatResponse};

// REST client for the DATAR backend.  Holds its own copy of the config so
// it can live inside a spawned future without touching APP_STATE.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // Get all agents
    pub async fn get_agents(&self) -> Result<Vec<Agent>, ApiError> {
        let url = self.config.url("/agents");
        let body = self.fetch_json(&url, "GET", None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send one chat turn.  The root agent picks the responder, so the
    /// payload only carries the text and the session id.
    pub async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        let url = self.config.url("/chat");
        let payload = serde_json::to_string(request)?;
        let body = self.fetch_json(&url, "POST", Some(&payload)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    // Helper function to make fetch requests
    pub async fn fetch_json(
        &self,
        url: &str,
        method: &str,
        body: Option<&str>,
    ) -> Result<String, ApiError> {
        use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        if let Some(data) = body {
            opts.set_body(&wasm_bindgen::JsValue::from_str(data));
            headers.append("Content-Type", "application/json")?;
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or(ApiError::NoWindow)?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        debug_log!("{} {} -> {}", method, url, resp.status());

        if !resp.ok() {
            // The body may be missing or not JSON; from_status copes with both.
            let text = match resp.text() {
                Ok(promise) => JsFuture::from(promise)
                    .await
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default(),
                Err(_) => String::new(),
            };
            return Err(ApiError::from_status(resp.status(), &resp.status_text(), &text));
        }

        let text = JsFuture::from(resp.text()?).await?;
        Ok(text.as_string().unwrap_or_default())
    }
}
