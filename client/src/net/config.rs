//! Map configuration fetched from the dev host.
//!
//! ERROR HANDLING
//! ==============
//! Any failure (network, status, body) falls back to
//! `MapConfig::default()`. The map still renders with the placeholder key,
//! so a missing host only costs tiles, not the editor.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use widget::config::MapConfig;

pub const MAP_CONFIG_ENDPOINT: &str = "/api/map-config";

#[cfg(any(test, feature = "csr"))]
fn config_failed_message(status: u16) -> String {
    format!("map config request failed: {status}")
}

/// Use a fetched config, or the default if fetching failed.
fn resolve(fetched: Result<MapConfig, String>) -> MapConfig {
    match fetched {
        Ok(config) => config,
        Err(message) => {
            #[cfg(feature = "csr")]
            log::warn!("{message}; using default map config");
            #[cfg(not(feature = "csr"))]
            let _ = message;
            MapConfig::default()
        }
    }
}

/// Fetch the style URL and access key from `/api/map-config`.
pub async fn fetch_map_config() -> MapConfig {
    #[cfg(feature = "csr")]
    {
        resolve(request_map_config().await)
    }
    #[cfg(not(feature = "csr"))]
    {
        resolve(Err("map config is only fetched in the browser".into()))
    }
}

#[cfg(feature = "csr")]
async fn request_map_config() -> Result<MapConfig, String> {
    let resp = gloo_net::http::Request::get(MAP_CONFIG_ENDPOINT)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(config_failed_message(resp.status()));
    }
    resp.json::<MapConfig>().await.map_err(|e| e.to_string())
}
