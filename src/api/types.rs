use serde::Deserialize;

/// One blockable service as described by the appliance
///
/// Only `id` is consumed; the remaining fields ride along so the wire
/// contract stays explicit.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceDescriptor {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon_svg: String,
    #[serde(default)]
    pub rules: Vec<String>,
}

/// Outcome of a blocked-set update that may skip identifiers
#[derive(Debug, Clone, Default)]
pub struct BlockChange {
    /// Blocked set as re-fetched after the update
    pub blocked: Vec<String>,
    /// Requested identifiers that were skipped
    pub skipped: Vec<String>,
}
