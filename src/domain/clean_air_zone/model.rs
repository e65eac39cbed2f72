//! Clean Air Zone domain entity

use uuid::Uuid;

/// A geographic zone with emissions-based charging rules.
///
/// Read-only reference data; instances are snapshots produced by the
/// repository layer per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanAirZone {
    /// Zone identifier
    pub clean_air_zone_id: Uuid,
    /// Human-readable zone name (e.g., "Birmingham")
    pub name: String,
    /// URL of the official zone boundary map
    pub boundary_url: String,
}

impl CleanAirZone {
    pub fn new(
        clean_air_zone_id: Uuid,
        name: impl Into<String>,
        boundary_url: impl Into<String>,
    ) -> Self {
        Self {
            clean_air_zone_id,
            name: name.into(),
            boundary_url: boundary_url.into(),
        }
    }
}
