use shared_types::{AppConfig, AuthSettings, FeatureFlags, MAX_SESSION_MINUTES};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and store it in the global `OnceLock`. Only the first
/// call has effect.
///
/// A missing or unparseable file yields the defaults: all features off,
/// `/auth` entry route, no accounts.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            tracing::info!(
                features = ?config.features,
                accounts = config.accounts.len(),
                entry_route = %config.auth.entry_route,
                "Loaded {CONFIG_PATH}"
            );
            config
        }
        Err(e) => {
            tracing::warn!("{CONFIG_PATH} not found ({e}), using defaults");
            AppConfig::default()
        }
    })
}

/// Parse config text, falling back to defaults on error.
///
/// `session_minutes` is clamped to `1..=MAX_SESSION_MINUTES`.
pub fn parse_config(contents: &str) -> AppConfig {
    let mut config: AppConfig = toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("Failed to parse {CONFIG_PATH}: {e}, using defaults");
        AppConfig::default()
    });
    let requested = config.auth.session_minutes;
    let minutes = requested.clamp(1, MAX_SESSION_MINUTES);
    if minutes != requested {
        tracing::warn!(requested, minutes, "auth.session_minutes out of range, clamped");
        config.auth.session_minutes = minutes;
    }
    config
}

/// The loaded config, or defaults if [`load_config`] hasn't run.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

pub fn feature_flags() -> &'static FeatureFlags {
    &app_config().features
}

pub fn auth_settings() -> &'static AuthSettings {
    &app_config().auth
}
