use std::fmt;

/// Runtime configuration for the engage client.
///
/// The auth token is a bearer credential and is redacted from `Debug` output.
#[derive(Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub auth_token: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub page_size: u32,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_url", &self.api_url)
            .field("auth_token", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("page_size", &self.page_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_the_token() {
        let config = AppConfig {
            api_url: "https://api.example.com".to_owned(),
            auth_token: "super-secret".to_owned(),
            log_level: "info".to_owned(),
            request_timeout_secs: 30,
            page_size: 100,
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[redacted]"));
    }
}
