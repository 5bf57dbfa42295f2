use std::path::PathBuf;

use clap::Parser;
use cloner_config::ModelChoice;

/// Section Cloner: chat with Gemini to turn HTML/CSS and screenshots into
/// Shopify Liquid sections.
#[derive(Parser, Debug)]
#[command(name = "cloner", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error) or a full filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model to use (gemini-1.5-flash, gemini-1.5-pro).
    #[arg(short = 'm', long)]
    pub model: Option<ModelChoice>,

    /// Reference screenshot sent with every message (jpg, jpeg, png).
    #[arg(short = 'i', long)]
    pub image: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "cloner",
            "--config",
            "/tmp/c.toml",
            "--log-level",
            "debug",
            "-m",
            "gemini-1.5-pro",
            "-i",
            "shot.png",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.model, Some(ModelChoice::Pro));
        assert_eq!(args.image, Some(PathBuf::from("shot.png")));
    }

    #[test]
    fn rejects_unknown_model() {
        assert!(Args::try_parse_from(["cloner", "--model", "gpt-4"]).is_err());
    }

    #[test]
    fn flags_are_optional() {
        let args = Args::try_parse_from(["cloner"]).unwrap();
        assert!(args.model.is_none());
        assert!(args.image.is_none());
    }
}
