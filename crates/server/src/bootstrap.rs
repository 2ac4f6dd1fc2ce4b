use axum::Router;
use stowquote_core::config::{AppConfig, ConfigError, LoadOptions};
use stowquote_core::document::TemplateStore;
use thiserror::Error;
use tracing::{info, warn};

use crate::routes::{self, AppState};

pub struct Application {
    pub config: AppConfig,
    pub router: Router,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub async fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config).await
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    // A missing quote template is a per-request server fault; surfacing it at
    // startup keeps the failure close to the deployment mistake.
    let templates = TemplateStore::new(config.assets.quote_templates_dir.clone());
    let missing = templates.missing_assets();
    if missing.is_empty() {
        info!(
            event_name = "system.bootstrap.templates_ready",
            correlation_id = "bootstrap",
            directory = %config.assets.quote_templates_dir.display(),
            "quote template assets present"
        );
    } else {
        for path in &missing {
            warn!(
                event_name = "system.bootstrap.template_missing",
                correlation_id = "bootstrap",
                path = %path.display(),
                "quote template asset missing; requests for this category will fail"
            );
        }
    }

    if let Err(error) = tokio::fs::create_dir_all(&config.assets.output_dir).await {
        warn!(
            event_name = "system.bootstrap.output_dir_unavailable",
            correlation_id = "bootstrap",
            error = %error,
            "could not create output directory"
        );
    }

    info!(
        event_name = "system.bootstrap.narrative_mode",
        correlation_id = "bootstrap",
        narrative = if config.narrative_enabled() { "generative" } else { "static" },
        "chat fallback mode resolved"
    );

    let router = routes::router(AppState::from_config(&config));
    Ok(Application { config, router })
}

#[cfg(test)]
mod tests {
    use stowquote_core::config::{ConfigOverrides, LoadOptions};

    use super::bootstrap;

    #[tokio::test]
    async fn bootstrap_fails_fast_on_invalid_config() {
        let result = bootstrap(LoadOptions {
            overrides: ConfigOverrides {
                log_level: Some("extremely-loud".to_string()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        })
        .await;

        let message = result.err().expect("invalid log level must fail").to_string();
        assert!(message.contains("logging.level"));
    }

    #[tokio::test]
    async fn bootstrap_succeeds_with_defaults_and_missing_assets() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = bootstrap(LoadOptions {
            overrides: ConfigOverrides {
                quote_templates_dir: Some(dir.path().join("quotes")),
                output_dir: Some(dir.path().join("generated")),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        })
        .await
        .expect("missing assets degrade, they do not block startup");

        assert_eq!(app.config.server.port, 8080);
        assert!(dir.path().join("generated").exists());
    }
}
