//! Validation for the `[context]` section.

use cloner_common::IMAGE_EXTENSIONS;

use crate::schema::ClonerConfig;

pub(crate) fn validate_context(errors: &mut Vec<String>, config: &ClonerConfig) {
    let Some(ref path) = config.context.image else {
        return;
    };

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext {
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => errors.push(format!(
            "context.image = {} must be one of: {}",
            path.display(),
            IMAGE_EXTENSIONS.join(", ")
        )),
    }
}
