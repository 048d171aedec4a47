//! Application Context
//!
//! Shared configuration provided via Leptos Context API.

use leptos::prelude::*;

/// Backend location, provided once at the app root
#[derive(Clone)]
pub struct ApiContext {
    pub base_url: String,
}

impl ApiContext {
    /// Base URL from the `API_BASE_URL` build-time env var, falling back to
    /// a same-origin `/api` prefix
    pub fn from_env() -> Self {
        let base_url = option_env!("API_BASE_URL")
            .unwrap_or("/api")
            .trim_end_matches('/')
            .to_string();
        Self { base_url }
    }
}

/// Get the API context from context
pub fn use_api() -> ApiContext {
    expect_context::<ApiContext>()
}
