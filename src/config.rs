//! Application Configuration
//!
//! Storage keys, refresh intervals and the geolocation endpoint.

/// Static configuration shared by the store and the UI
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Slot holding the serialized widget list
    pub widgets_key: &'static str,
    /// Slot holding the free-form background style
    pub background_key: &'static str,
    /// Clock/date/greeting refresh period
    pub clock_interval_ms: u32,
    /// IP/location refresh period
    pub geo_interval_ms: u32,
    /// Geolocation-by-IP service
    pub geo_url: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            widgets_key: "widgets",
            background_key: "background",
            clock_interval_ms: 1_000,
            geo_interval_ms: 10 * 60 * 1_000,
            geo_url: "https://api.ipquery.io/?format=json",
        }
    }
}
