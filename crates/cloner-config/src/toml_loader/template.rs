//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Section Cloner configuration
# Only override what you want to change -- missing fields use defaults.

[api]
# api_key = ""               # GEMINI_API_KEY overrides this when set
model = "gemini-1.5-flash"   # gemini-1.5-flash, gemini-1.5-pro
# max_output_tokens = 8192   # 1-65536
# temperature = 0.7          # 0.0-2.0
# connect_timeout_secs = 10  # 1-120
# request_timeout_secs = 120 # 1-600

[context]
# image = "settings.png"     # reference screenshot: jpg, jpeg, png

[logging]
level = "info"               # trace, debug, info, warn, error
"##
}
