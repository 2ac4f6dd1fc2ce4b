use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub narrative: NarrativeConfig,
    pub assets: AssetConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub graceful_shutdown_secs: u64,
}

/// Generative fallback collaborator. The API key is optional: without one the
/// chat endpoint answers unmatched input with the static clarification reply.
#[derive(Clone, Debug)]
pub struct NarrativeConfig {
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub primary_model: String,
    pub fallback_model: String,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct AssetConfig {
    pub quote_templates_dir: PathBuf,
    pub pages_dir: PathBuf,
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    pub narrative_api_key: Option<String>,
    pub narrative_base_url: Option<String>,
    pub quote_templates_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_address: "127.0.0.1".to_string(),
                port: 8080,
                graceful_shutdown_secs: 15,
            },
            narrative: NarrativeConfig {
                api_key: None,
                base_url: "https://generativelanguage.googleapis.com".to_string(),
                primary_model: "gemini-1.5-pro".to_string(),
                fallback_model: "gemini-1.5-flash".to_string(),
                timeout_secs: 20,
            },
            assets: AssetConfig {
                quote_templates_dir: PathBuf::from("templates/quotes"),
                pages_dir: PathBuf::from("templates/pages"),
                static_dir: PathBuf::from("static"),
                output_dir: PathBuf::from("generated"),
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

fn secret_value(value: String) -> SecretString {
    value.into()
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("stowquote.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(server) = patch.server {
            if let Some(bind_address) = server.bind_address {
                self.server.bind_address = bind_address;
            }
            if let Some(port) = server.port {
                self.server.port = port;
            }
            if let Some(graceful_shutdown_secs) = server.graceful_shutdown_secs {
                self.server.graceful_shutdown_secs = graceful_shutdown_secs;
            }
        }

        if let Some(narrative) = patch.narrative {
            if let Some(narrative_api_key_value) = narrative.api_key {
                self.narrative.api_key = Some(secret_value(narrative_api_key_value));
            }
            if let Some(base_url) = narrative.base_url {
                self.narrative.base_url = base_url;
            }
            if let Some(primary_model) = narrative.primary_model {
                self.narrative.primary_model = primary_model;
            }
            if let Some(fallback_model) = narrative.fallback_model {
                self.narrative.fallback_model = fallback_model;
            }
            if let Some(timeout_secs) = narrative.timeout_secs {
                self.narrative.timeout_secs = timeout_secs;
            }
        }

        if let Some(assets) = patch.assets {
            if let Some(quote_templates_dir) = assets.quote_templates_dir {
                self.assets.quote_templates_dir = quote_templates_dir;
            }
            if let Some(pages_dir) = assets.pages_dir {
                self.assets.pages_dir = pages_dir;
            }
            if let Some(static_dir) = assets.static_dir {
                self.assets.static_dir = static_dir;
            }
            if let Some(output_dir) = assets.output_dir {
                self.assets.output_dir = output_dir;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("STOWQUOTE_SERVER_BIND_ADDRESS") {
            self.server.bind_address = value;
        }
        if let Some(value) = read_env("STOWQUOTE_SERVER_PORT") {
            self.server.port = parse_u16("STOWQUOTE_SERVER_PORT", &value)?;
        }
        if let Some(value) = read_env("STOWQUOTE_SERVER_GRACEFUL_SHUTDOWN_SECS") {
            self.server.graceful_shutdown_secs =
                parse_u64("STOWQUOTE_SERVER_GRACEFUL_SHUTDOWN_SECS", &value)?;
        }

        if let Some(value) = read_env("STOWQUOTE_NARRATIVE_API_KEY") {
            self.narrative.api_key = Some(secret_value(value));
        }
        if let Some(value) = read_env("STOWQUOTE_NARRATIVE_BASE_URL") {
            self.narrative.base_url = value;
        }
        if let Some(value) = read_env("STOWQUOTE_NARRATIVE_PRIMARY_MODEL") {
            self.narrative.primary_model = value;
        }
        if let Some(value) = read_env("STOWQUOTE_NARRATIVE_FALLBACK_MODEL") {
            self.narrative.fallback_model = value;
        }
        if let Some(value) = read_env("STOWQUOTE_NARRATIVE_TIMEOUT_SECS") {
            self.narrative.timeout_secs = parse_u64("STOWQUOTE_NARRATIVE_TIMEOUT_SECS", &value)?;
        }

        if let Some(value) = read_env("STOWQUOTE_ASSETS_QUOTE_TEMPLATES_DIR") {
            self.assets.quote_templates_dir = PathBuf::from(value);
        }
        if let Some(value) = read_env("STOWQUOTE_ASSETS_PAGES_DIR") {
            self.assets.pages_dir = PathBuf::from(value);
        }
        if let Some(value) = read_env("STOWQUOTE_ASSETS_STATIC_DIR") {
            self.assets.static_dir = PathBuf::from(value);
        }
        if let Some(value) = read_env("STOWQUOTE_ASSETS_OUTPUT_DIR") {
            self.assets.output_dir = PathBuf::from(value);
        }

        let log_level =
            read_env("STOWQUOTE_LOGGING_LEVEL").or_else(|| read_env("STOWQUOTE_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("STOWQUOTE_LOGGING_FORMAT").or_else(|| read_env("STOWQUOTE_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(bind_address) = overrides.bind_address {
            self.server.bind_address = bind_address;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
        if let Some(narrative_api_key) = overrides.narrative_api_key {
            self.narrative.api_key = Some(secret_value(narrative_api_key));
        }
        if let Some(narrative_base_url) = overrides.narrative_base_url {
            self.narrative.base_url = narrative_base_url;
        }
        if let Some(quote_templates_dir) = overrides.quote_templates_dir {
            self.assets.quote_templates_dir = quote_templates_dir;
        }
        if let Some(output_dir) = overrides.output_dir {
            self.assets.output_dir = output_dir;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_server(&self.server)?;
        validate_narrative(&self.narrative)?;
        validate_assets(&self.assets)?;
        validate_logging(&self.logging)?;
        Ok(())
    }

    /// True when a generative API key is configured.
    pub fn narrative_enabled(&self) -> bool {
        self.narrative
            .api_key
            .as_ref()
            .map(|key| !key.expose_secret().trim().is_empty())
            .unwrap_or(false)
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("stowquote.toml"), PathBuf::from("config/stowquote.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_server(server: &ServerConfig) -> Result<(), ConfigError> {
    if server.bind_address.trim().is_empty() {
        return Err(ConfigError::Validation("server.bind_address must not be empty".to_string()));
    }

    if server.port == 0 {
        return Err(ConfigError::Validation("server.port must be greater than zero".to_string()));
    }

    if server.graceful_shutdown_secs == 0 {
        return Err(ConfigError::Validation(
            "server.graceful_shutdown_secs must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

fn validate_narrative(narrative: &NarrativeConfig) -> Result<(), ConfigError> {
    if narrative.timeout_secs == 0 || narrative.timeout_secs > 300 {
        return Err(ConfigError::Validation(
            "narrative.timeout_secs must be in range 1..=300".to_string(),
        ));
    }

    let has_key = narrative
        .api_key
        .as_ref()
        .map(|value| !value.expose_secret().trim().is_empty())
        .unwrap_or(false);

    if has_key {
        if !narrative.base_url.starts_with("http://") && !narrative.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(
                "narrative.base_url must start with http:// or https://".to_string(),
            ));
        }
        if narrative.primary_model.trim().is_empty()
            || narrative.fallback_model.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "narrative.primary_model and narrative.fallback_model are required when an API key is set"
                    .to_string(),
            ));
        }
    }

    Ok(())
}

fn validate_assets(assets: &AssetConfig) -> Result<(), ConfigError> {
    for (name, path) in [
        ("assets.quote_templates_dir", &assets.quote_templates_dir),
        ("assets.pages_dir", &assets.pages_dir),
        ("assets.static_dir", &assets.static_dir),
        ("assets.output_dir", &assets.output_dir),
    ] {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(format!("{name} must not be empty")));
        }
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_u16(key: &str, value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse::<u64>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    server: Option<ServerPatch>,
    narrative: Option<NarrativePatch>,
    assets: Option<AssetsPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerPatch {
    bind_address: Option<String>,
    port: Option<u16>,
    graceful_shutdown_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct NarrativePatch {
    api_key: Option<String>,
    base_url: Option<String>,
    primary_model: Option<String>,
    fallback_model: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct AssetsPatch {
    quote_templates_dir: Option<PathBuf>,
    pages_dir: Option<PathBuf>,
    static_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}
