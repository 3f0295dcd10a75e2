//! Derived style objects.
//!
//! Pure functions of widget state and configuration, recomputed on every
//! access and never stored. They serialize with camelCase keys so they can
//! be handed to a CSS-in-JS renderer unchanged.

use serde::{Deserialize, Serialize};

/// Style for the track, the toggle's background pill shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreStyle {
    /// Track width, e.g. `"45px"`.
    pub width: String,
    /// Track height, e.g. `"25px"`.
    pub height: String,
    /// Transition shorthand, e.g. `"all 300ms"`.
    pub transition: String,
    /// Resolved background color; omitted in raw CSS passthrough mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Half the track height, rounded, e.g. `"13px"`.
    pub border_radius: String,
}

/// Style for the button (thumb), the sliding element indicating state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyle {
    /// Thumb side length, e.g. `"21px"`.
    pub width: String,
    /// Thumb side length, equal to `width`.
    pub height: String,
    /// Transition shorthand, e.g. `"all 300ms"`.
    pub transition: String,
    /// Horizontal slide, e.g. `"translate(28px, 3px)"`.
    pub transform: String,
    /// Resolved thumb color; omitted when no thumb color is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

/// Style for the state labels rendered inside the track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelStyle {
    /// Line height matching the track height, e.g. `"25px"`.
    pub line_height: String,
    /// Configured font size; omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    /// Resolved font color; omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
