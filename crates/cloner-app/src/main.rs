mod cli;
mod dotenv;
mod render;
mod repl;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use cloner_ai::{GeminiBackend, GenerationSettings, ImageAttachment};
use cloner_chat::{ChatController, SYSTEM_INSTRUCTION};
use cloner_common::ClonerError;
use cloner_config::ClonerConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "cloner=info";

/// Turn `--log-level` / `[logging] level` into a filter directive.
/// Bare level names are scoped to this workspace's crates.
fn log_directive(arg: Option<&str>, config: &ClonerConfig) -> String {
    match arg {
        Some(d) if d.contains('=') => d.to_string(),
        Some(level) => format!("cloner={level}"),
        None => format!("cloner={}", config.logging.level.as_directive()),
    }
}

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(
            directive.parse().unwrap_or_else(|_| {
                DEFAULT_DIRECTIVE
                    .parse()
                    .expect("default directive is valid")
            }),
        ))
        .init();
}

fn generation_settings(config: &ClonerConfig) -> GenerationSettings {
    GenerationSettings::default()
        .with_max_output_tokens(config.api.max_output_tokens)
        .with_temperature(config.api.temperature)
        .with_timeouts(
            Duration::from_secs(u64::from(config.api.connect_timeout_secs)),
            Duration::from_secs(u64::from(config.api.request_timeout_secs)),
        )
}

async fn run(args: cli::Args, config: ClonerConfig) -> Result<(), ClonerError> {
    let model = args.model.unwrap_or(config.api.model);

    let image = match args.image.as_ref().or(config.context.image.as_ref()) {
        Some(path) => match ImageAttachment::load(path) {
            Ok(img) => {
                tracing::info!("Attached reference image {}", img.file_name());
                Some(img)
            }
            Err(e) => {
                tracing::warn!("Ignoring reference image: {e}");
                None
            }
        },
        None => None,
    };

    let credential = cloner_config::resolve_credential(&config);
    if credential.is_none() {
        tracing::info!("No API key configured yet");
    }

    let backend = GeminiBackend::new(generation_settings(&config))
        .map_err(|e| ClonerError::Other(e.to_string()))?;
    let controller = ChatController::new(
        Arc::new(backend),
        credential,
        model.as_str(),
        SYSTEM_INSTRUCTION,
    );

    repl::Repl::new(controller, image, config).run().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before anything reads the environment
    dotenv::load();

    let args = cli::parse();

    let loaded = cloner_config::load_config(args.config.as_deref());
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_logging(&log_directive(args.log_level.as_deref(), &config));
    tracing::info!("Section Cloner v{} starting...", env!("CARGO_PKG_VERSION"));

    match loaded {
        Ok(_) => tracing::info!("Config loaded (model: {})", config.api.model),
        Err(e) => tracing::warn!("Config load failed, using defaults: {e}"),
    }

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloner_config::LogLevel;

    #[test]
    fn bare_level_is_scoped_to_workspace() {
        let config = ClonerConfig::default();
        assert_eq!(log_directive(Some("debug"), &config), "cloner=debug");
    }

    #[test]
    fn full_directive_passes_through() {
        let config = ClonerConfig::default();
        assert_eq!(
            log_directive(Some("cloner_ai=trace"), &config),
            "cloner_ai=trace"
        );
    }

    #[test]
    fn config_level_is_the_fallback() {
        let mut config = ClonerConfig::default();
        config.logging.level = LogLevel::Warn;
        assert_eq!(log_directive(None, &config), "cloner=warn");
    }

    #[test]
    fn settings_follow_config() {
        let mut config = ClonerConfig::default();
        config.api.temperature = 0.3;
        config.api.request_timeout_secs = 45;
        let settings = generation_settings(&config);
        assert!((settings.temperature - 0.3).abs() < f64::EPSILON);
        assert_eq!(settings.request_timeout, Duration::from_secs(45));
        assert_eq!(settings.max_output_tokens, 8192);
    }
}
