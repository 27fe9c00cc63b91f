//! Tunables for the page. Every field has a default, so a page can embed
//! a partial JSON object (or nothing) and get the stock behaviour.

use serde::Deserialize;

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "mistline-config";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub selectors: Selectors,
    pub render: RenderConfig,
    pub title: TitleConfig,
    pub track: TrackConfig,
    pub scroll: ScrollConfig,
}

impl Config {
    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(src)
    }
}

/// CSS selectors and markers the page is expected to carry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub canvas: String,
    pub title: String,
    pub container: String,
    pub wrapper: String,
    pub track: String,
    pub parallax: String,
    pub speed_attribute: String,
    pub block: String,
    pub visible_class: String,
    pub glyph_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            canvas: "#webgl-canvas".into(),
            title: ".split-text".into(),
            container: "#timeline-container".into(),
            wrapper: "#timeline-wrapper".into(),
            track: "#track".into(),
            parallax: ".parallax-el".into(),
            speed_attribute: "data-speed".into(),
            block: ".memory-block".into(),
            visible_class: "is-visible".into(),
            glyph_class: "char".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Device pixels per CSS pixel, independent of the display's ratio.
    pub pixel_ratio: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { pixel_ratio: 1.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    pub offset_y: f64,
    pub rotation: f64,
    pub duration: f64,
    pub stagger: f64,
    pub delay: f64,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            offset_y: 100.0,
            rotation: 5.0,
            duration: 1.5,
            stagger: 0.05,
            delay: 0.2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Seconds the track takes to catch up with the scroll position.
    pub scrub_lag: f64,
    /// Fraction of the viewport width a block's left edge must reach.
    pub reveal_edge: f64,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            scrub_lag: 1.0,
            reveal_edge: 0.9,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub lerp: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { lerp: 0.05 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = Config::from_json(r#"{ "track": { "scrub_lag": 0.5 } }"#).unwrap();
        assert_eq!(config.track.scrub_lag, 0.5);
        assert_eq!(config.track.reveal_edge, 0.9);
        assert_eq!(config.selectors, Selectors::default());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Config::from_json("{ track: }").is_err());
    }
}
