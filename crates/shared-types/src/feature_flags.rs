use serde::{Deserialize, Serialize};

/// Optional server surfaces, read from the `[features]` table of
/// `config.toml`. Anything left out of the file stays off.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Export traces and logs over OTLP.
    #[serde(default)]
    pub telemetry: bool,
    /// Serve the OpenAPI reference at `/docs`.
    #[serde(default)]
    pub api_docs: bool,
}
