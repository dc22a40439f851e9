use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::nav::{NavTuning, WalkBounds};

/// Gallery room dimensions. The walkable interior is the room inset by
/// `wall_margin` on both horizontal axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub half_width: f32,
    pub half_depth: f32,
    pub wall_height: f32,
    pub wall_margin: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            half_width: 9.0,
            half_depth: 4.0,
            wall_height: 5.0,
            wall_margin: 0.5,
        }
    }
}

impl GalleryConfig {
    pub fn walk_bounds(&self) -> WalkBounds {
        WalkBounds::room(self.half_width, self.half_depth, self.wall_margin)
    }
}

/// Opaque tokens identifying the external email-delivery service, plus
/// its endpoint. The defaults are placeholders; real tokens come from
/// the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            service_id: "service_xxxxxxx".to_string(),
            template_id: "template_xxxxxxx".to_string(),
            public_key: "public_xxxxxxxxxxxx".to_string(),
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
        }
    }
}

/// Top-level runtime configuration. Every field has a default, so a
/// partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub nav: NavTuning,
    pub gallery: GalleryConfig,
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load from a JSON file. `None` or a missing file yields the
    /// defaults; a file that exists but does not parse is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            log::warn!("config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Span;

    #[test]
    fn defaults_match_the_gallery_tuning() {
        let config = AppConfig::default();
        assert_eq!(config.nav.speed, 5.0);
        assert_eq!(config.nav.damping, 10.0);
        assert_eq!(config.nav.eye_height, 1.7);
        let bounds = config.gallery.walk_bounds();
        assert_eq!(bounds.x, Span::new(-8.5, 8.5));
        assert_eq!(bounds.z, Span::new(-3.5, 3.5));
    }

    #[test]
    fn partial_file_overrides_named_fields_only() {
        let parsed: AppConfig =
            serde_json::from_str(r#"{ "nav": { "speed": 7.5 } }"#).expect("valid json");
        assert_eq!(parsed.nav.speed, 7.5);
        assert_eq!(parsed.nav.damping, 10.0);
        assert_eq!(parsed.gallery, GalleryConfig::default());
    }

    #[test]
    fn missing_path_yields_defaults() {
        let loaded = AppConfig::load(Some(Path::new("/nonexistent/portfolio.json"))).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn garbage_file_is_an_error() {
        let dir = std::env::temp_dir().join("portfolio-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        std::fs::write(&path, "not json at all").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }
}
