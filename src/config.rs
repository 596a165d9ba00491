use secrecy::SecretString;
use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub provider_api_url: String,
    pub provider_access_token: SecretString,
    pub provider_model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub retry_max_attempts: u32,
    pub retry_base_delay: Duration,
    pub allowed_origins: Vec<String>,
    pub run_mode: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            provider_api_url: env::var("PROVIDER_API_URL").unwrap_or_else(|_| {
                "https://api-inference.huggingface.co/models/bigscience/bloom".to_string()
            }),
            provider_access_token: SecretString::from(
                env::var("PROVIDER_ACCESS_TOKEN")
                    .unwrap_or_else(|_| "dev_token_change_in_production".to_string()),
            ),
            provider_model: env::var("PROVIDER_MODEL")
                .unwrap_or_else(|_| "bigscience/bloom".to_string()),
            max_tokens: env::var("MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(512),
            temperature: env::var("TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.7),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            retry_max_attempts: env::var("RETRY_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            retry_base_delay: env::var("RETRY_BASE_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(Duration::from_millis(3000)),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|_| {
                    vec![
                        "http://localhost:5173".to_string(),
                        "http://localhost:3000".to_string(),
                        "https://teacher-platform-ochre.vercel.app".to_string(),
                    ]
                }),
            run_mode: env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.provider_access_token.expose_secret() == "dev_token_change_in_production" {
            panic!(
                "FATAL: PROVIDER_ACCESS_TOKEN is using default value! Set PROVIDER_ACCESS_TOKEN environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            provider_api_url: "http://localhost:9999/completions".to_string(),
            provider_access_token: SecretString::from("test_token".to_string()),
            provider_model: "test-model".to_string(),
            max_tokens: 64,
            temperature: 0.0,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            retry_max_attempts: 3,
            retry_base_delay: Duration::from_millis(3000),
            allowed_origins: vec!["http://localhost:5173".to_string()],
            run_mode: "test".to_string(),
        }
    }
}
