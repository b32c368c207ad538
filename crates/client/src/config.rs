use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    /// Guest-facing messages, usually localized per site language
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the invitation API. Relative values resolve against the
    /// page; empty means the page origin.
    #[serde(default)]
    pub base_url: String,

    /// Base URL used instead when the page is served from a loopback host
    #[serde(default = "default_local_base_url")]
    pub local_base_url: String,

    /// Timeout applied to every request, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            local_base_url: default_local_base_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessagesConfig {
    #[serde(default = "default_error_missing_kids")]
    pub error_missing_kids: String,

    #[serde(default = "default_error_generic")]
    pub error_generic: String,

    /// Party size line, `{n}` is replaced by adults plus kids
    #[serde(default)]
    pub invite_size_template: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            error_missing_kids: default_error_missing_kids(),
            error_generic: default_error_generic(),
            invite_size_template: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Default value functions
fn default_local_base_url() -> String {
    "http://localhost:8080/api/v1".to_string()
}
fn default_timeout_ms() -> u64 {
    15_000
}
fn default_user_agent() -> String {
    format!("rsvp-client/{}", env!("CARGO_PKG_VERSION"))
}
fn default_error_missing_kids() -> String {
    "Please select the number of kids.".to_string()
}
fn default_error_generic() -> String {
    "Something went wrong. Please try again.".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}

/// Everything one RSVP session needs, fixed when the session is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub error_missing_kids: String,
    pub error_generic: String,
    pub api_base: String,
    pub invite_size_template: String,
}

impl SessionConfig {
    /// Session settings with the default English messages.
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        let messages = MessagesConfig::default();
        Self {
            error_missing_kids: messages.error_missing_kids,
            error_generic: messages.error_generic,
            api_base: api_base.into(),
            invite_size_template: messages.invite_size_template,
        }
    }
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with RSVP__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("RSVP").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// Builds from embedded defaults so tests do not depend on the working
    /// directory.
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [api]
            base_url = "https://wedding.example.com/api/v1"
            local_base_url = "http://localhost:8080/api/v1"
            timeout_ms = 15000

            [messages]
            error_missing_kids = "Please select the number of kids."
            error_generic = "Something went wrong. Please try again."
            invite_size_template = "This invitation is for {n} people"

            [logging]
            level = "info"
            format = "pretty"
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        // Skip validation in tests to allow partial configs
        Ok(cfg)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.api.timeout_ms == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "api.timeout_ms must be greater than 0".to_string(),
            ));
        }

        if self.messages.error_generic.trim().is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "messages.error_generic must not be empty".to_string(),
            ));
        }

        // base_url may be relative to the page, so only the loopback
        // endpoint has to be absolute.
        if !self.api.local_base_url.is_empty()
            && reqwest::Url::parse(&self.api.local_base_url).is_err()
        {
            return Err(ConfigValidationError::InvalidValue(format!(
                "api.local_base_url is not a valid URL: {}",
                self.api.local_base_url
            )));
        }

        Ok(())
    }

    /// Session settings for a page whose API base has been resolved.
    pub fn session_config(&self, api_base: impl Into<String>) -> SessionConfig {
        SessionConfig {
            error_missing_kids: self.messages.error_missing_kids.clone(),
            error_generic: self.messages.error_generic.clone(),
            api_base: api_base.into(),
            invite_size_template: self.messages.invite_size_template.clone(),
        }
    }
}
