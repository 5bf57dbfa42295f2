//! Minimal `.env` loader so `GEMINI_API_KEY` can live next to the project.

use std::path::Path;

/// Load `KEY=VALUE` lines from `./.env`. Variables already set win.
pub(crate) fn load() {
    if let Ok(contents) = std::fs::read_to_string(Path::new(".env")) {
        for (key, value) in parse(&contents) {
            if std::env::var(key).is_err() {
                std::env::set_var(key, value);
            }
        }
    }
}

fn parse(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let key = key.trim().trim_start_matches("export ").trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key, value)
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}
