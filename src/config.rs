use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::fs;
use anyhow::{Context, Result};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub input: InputConfig,
    pub server: ServerConfig,
    pub map: MapConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct InputConfig {
    pub data_csv: PathBuf,
    pub geojson: PathBuf,
    pub join_column_shape: String, // GeoJSON feature property holding the GEOID
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            data_csv: PathBuf::from("master_df_geotag.csv"),
            geojson: PathBuf::from("converted_.geojson"),
            join_column_shape: "GEOID".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
            static_dir: PathBuf::from("assets"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MapConfig {
    /// Falls back to the centre of the boundary collection when unset.
    pub center: Option<LatLon>,
    pub zoom: f64,
    pub opacity: f64,
    pub color_scale: String,
    pub mapbox_style: String,
    pub access_token: Option<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: None,
            zoom: 9.0,
            opacity: 0.5,
            color_scale: "Reds".to_string(),
            mapbox_style: "carto-positron".to_string(),
            access_token: None,
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| "Failed to parse TOML configuration")?;
        Ok(config)
    }

    /// Missing file means defaults; an unreadable or invalid one is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }
}
