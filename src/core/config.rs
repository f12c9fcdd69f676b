use std::env;

/// Fallback recipient when no admin address is configured.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Resend credential. Its absence is reported per request as a 500, so
    /// it is optional here rather than a construction failure.
    pub resend_api_key: Option<String>,
    pub admin_email: String,
    pub property_owner_email: Option<String>,
}

impl AppConfig {
    /// Read configuration from the process environment. Looked up at request
    /// time on purpose: nothing is cached across invocations.
    pub fn from_env() -> Self {
        Self {
            resend_api_key: env::var("RESEND_API_KEY").ok(),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string()),
            property_owner_email: env::var("PROPERTY_OWNER_EMAIL").ok(),
        }
    }
}
