//! IP Geolocation
//!
//! Best-effort lookup of the public IP and its location. Failures never
//! surface as errors: the widget falls back to a placeholder.

use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Shown when no location data is available
pub const NO_INFORMATION: &str = "No information available";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    /// Some services name the region `state`
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IpInfo {
    pub ip: String,
    #[serde(default)]
    pub location: Location,
}

impl IpInfo {
    /// "City, Region, Country" with missing parts skipped
    pub fn location_line(&self) -> Option<String> {
        let location = &self.location;
        let region = location.region.as_deref().or(location.state.as_deref());
        let parts: Vec<&str> = [location.city.as_deref(), region, location.country.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum IpState {
    #[default]
    Loading,
    Ready(IpInfo),
    Unavailable,
}

pub fn parse_ip_info(body: &str) -> Option<IpInfo> {
    let info: IpInfo = serde_json::from_str(body).ok()?;
    if info.ip.trim().is_empty() {
        None
    } else {
        Some(info)
    }
}

/// Fetch and parse the geolocation body. Any failure maps to [`IpState::Unavailable`].
pub async fn fetch_ip_state(url: &str) -> IpState {
    match fetch_text(url).await {
        Ok(body) => match parse_ip_info(&body) {
            Some(info) => IpState::Ready(info),
            None => {
                log::warn!("[GEO] Unusable response body");
                IpState::Unavailable
            }
        },
        Err(e) => {
            log::warn!("[GEO] Request failed: {}", e);
            IpState::Unavailable
        }
    }
}

async fn fetch_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window")?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("{:?}", e))?;
    let response: web_sys::Response = response.dyn_into().map_err(|e| format!("{:?}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    let text = JsFuture::from(response.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?;
    text.as_string().ok_or_else(|| "body is not text".to_string())
}
