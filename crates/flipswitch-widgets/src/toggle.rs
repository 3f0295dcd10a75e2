//! Toggle switch widget.
//!
//! A two-state control rendered as a track with a sliding thumb. The host
//! drives it either through the [`ValueAccessor`] form-control protocol or
//! by mutating the bound value input and invoking the [`Lifecycle`] hooks.

use flipswitch_core::css::{px, transition_all, translate};
use flipswitch_core::palette::{
    DEFAULT_COLOR_CHECKED, DEFAULT_COLOR_UNCHECKED, DEFAULT_LABEL_CHECKED, DEFAULT_LABEL_UNCHECKED,
    DEFAULT_SWITCH_COLOR, DISABLED_BUTTON_COLOR, DISABLED_COLOR,
};
use flipswitch_core::{
    ChangeFn, EventEmitter, Labels, Lifecycle, StateValue, TouchFn, ValueAccessor,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::style::{ButtonStyle, CoreStyle, LabelStyle};

/// Visual configuration for [`ToggleSwitch`].
///
/// Every field is optional with a documented default; hosts typically build
/// one with the consuming setters or deserialize one from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleConfig {
    /// Initial bound value.
    pub value: bool,
    /// Form field name.
    pub name: String,
    /// Whether interaction is disabled.
    pub disabled: bool,
    /// Track height in pixels.
    pub height: u32,
    /// Track width in pixels.
    pub width: u32,
    /// Gap between thumb and track edge in pixels.
    pub margin: u32,
    /// Label font size in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    /// Transition duration in milliseconds.
    pub speed: u32,
    /// Track color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<StateValue<String>>,
    /// Thumb color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_color: Option<StateValue<String>>,
    /// Label visibility or per-state label text.
    pub labels: Labels,
    /// Label shown while checked when `labels` is a visibility flag.
    pub checked_label: String,
    /// Label shown while unchecked when `labels` is a visibility flag.
    pub unchecked_label: String,
    /// Label font color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<StateValue<String>>,
    /// Raw CSS passthrough mode: leave the track background unset so a
    /// stylesheet can supply it.
    pub css_colors: bool,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            value: true,
            name: String::new(),
            disabled: false,
            height: 25,
            width: 45,
            margin: 2,
            font_size: None,
            speed: 300,
            color: None,
            switch_color: None,
            labels: Labels::default(),
            checked_label: String::new(),
            unchecked_label: String::new(),
            font_color: None,
            css_colors: false,
        }
    }
}

impl ToggleConfig {
    /// Create a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial bound value.
    #[must_use]
    pub const fn value(mut self, value: bool) -> Self {
        self.value = value;
        self
    }

    /// Set the form field name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set whether interaction is disabled.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the track height in pixels.
    #[must_use]
    pub const fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set the track width in pixels.
    #[must_use]
    pub const fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the thumb margin in pixels.
    #[must_use]
    pub const fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the label font size in pixels.
    #[must_use]
    pub const fn font_size(mut self, font_size: u32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Set the transition duration in milliseconds.
    #[must_use]
    pub const fn speed(mut self, speed: u32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the track color.
    #[must_use]
    pub fn color(mut self, color: impl Into<StateValue<String>>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the thumb color.
    #[must_use]
    pub fn switch_color(mut self, color: impl Into<StateValue<String>>) -> Self {
        self.switch_color = Some(color.into());
        self
    }

    /// Set label visibility or per-state label text.
    #[must_use]
    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Set the checked label text.
    #[must_use]
    pub fn checked_label(mut self, label: impl Into<String>) -> Self {
        self.checked_label = label.into();
        self
    }

    /// Set the unchecked label text.
    #[must_use]
    pub fn unchecked_label(mut self, label: impl Into<String>) -> Self {
        self.unchecked_label = label.into();
        self
    }

    /// Set the label font color.
    #[must_use]
    pub fn font_color(mut self, color: impl Into<StateValue<String>>) -> Self {
        self.font_color = Some(color.into());
        self
    }

    /// Enable raw CSS passthrough mode.
    #[must_use]
    pub const fn css_colors(mut self, css_colors: bool) -> Self {
        self.css_colors = css_colors;
        self
    }
}

/// Toggle switch control.
///
/// Holds the configuration, the rendered state, and the registered
/// form-control callbacks. Style getters are pure and recomputed per call.
pub struct ToggleSwitch {
    config: ToggleConfig,
    /// Rendered state. Mirrors `config.value` except mid-toggle.
    toggled: bool,
    on_change: ChangeFn,
    on_touched: TouchFn,
    change: EventEmitter<bool>,
}

impl ToggleSwitch {
    /// Create a toggle from a configuration. Rendered state starts in sync
    /// with the bound value.
    #[must_use]
    pub fn new(config: ToggleConfig) -> Self {
        let toggled = config.value;
        Self {
            config,
            toggled,
            on_change: Box::new(|_| {}),
            on_touched: Box::new(|| {}),
            change: EventEmitter::new(),
        }
    }

    /// The current configuration.
    #[must_use]
    pub const fn config(&self) -> &ToggleConfig {
        &self.config
    }

    /// The rendered state.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.toggled
    }

    /// The bound value.
    #[must_use]
    pub const fn value(&self) -> bool {
        self.config.value
    }

    /// Whether interaction is disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Mutate the bound value input from the host side, as a plain two-way
    /// bound attribute would, and resynchronize rendered state.
    pub fn set_value(&mut self, value: bool) {
        self.config.value = value;
        self.on_value_change();
    }

    /// Subscribe to the change event fired on every user-driven toggle.
    pub fn subscribe_change<F>(&mut self, listener: F)
    where
        F: FnMut(&bool) + 'static,
    {
        self.change.subscribe(listener);
    }

    /// Flip the rendered state in response to user interaction.
    ///
    /// No-op while disabled. Otherwise inverts the rendered state, writes
    /// it back to the bound value, then notifies in fixed order: touched
    /// callback, change callback, change event.
    pub fn toggle(&mut self) {
        if self.config.disabled {
            return;
        }
        let toggled = !self.toggled;
        self.toggled = toggled;
        self.config.value = toggled;

        (self.on_touched)();
        (self.on_change)(toggled);
        self.change.emit(&toggled);
    }

    // ===== Geometry =====

    /// Thumb side length: track height minus the margin on both sides.
    #[must_use]
    pub const fn button_radius(&self) -> i64 {
        self.config.height as i64 - 2 * self.config.margin as i64
    }

    /// Horizontal thumb offset while checked.
    #[must_use]
    pub fn distance(&self) -> String {
        let d = i64::from(self.config.width) - i64::from(self.config.height)
            + i64::from(self.config.margin);
        px(d)
    }

    // ===== Color resolution =====

    /// Track color while checked.
    #[must_use]
    pub fn color_checked(&self) -> String {
        self.config.color.as_ref().map_or_else(
            || DEFAULT_COLOR_CHECKED.to_string(),
            |c| c.resolve(true, DEFAULT_COLOR_CHECKED),
        )
    }

    /// Track color while unchecked.
    #[must_use]
    pub fn color_unchecked(&self) -> String {
        self.config.color.as_ref().map_or_else(
            || DEFAULT_COLOR_UNCHECKED.to_string(),
            |c| c.resolve(false, DEFAULT_COLOR_UNCHECKED),
        )
    }

    /// Track color while disabled. A `disabled` entry in the track color
    /// pair overrides the fixed constant.
    #[must_use]
    pub fn color_disabled(&self) -> String {
        self.config
            .color
            .as_ref()
            .and_then(StateValue::disabled_override)
            .cloned()
            .unwrap_or_else(|| DISABLED_COLOR.to_string())
    }

    /// Track color for the current state.
    #[must_use]
    pub fn color_current(&self) -> String {
        if self.toggled {
            self.color_checked()
        } else {
            self.color_unchecked()
        }
    }

    /// Thumb color for the current state, when one is configured.
    #[must_use]
    pub fn switch_color_current(&self) -> Option<String> {
        self.config
            .switch_color
            .as_ref()
            .map(|c| c.resolve(self.toggled, DEFAULT_SWITCH_COLOR))
    }

    /// Font color for the current state, when one is configured.
    #[must_use]
    pub fn font_color_current(&self) -> Option<String> {
        self.config
            .font_color
            .as_ref()
            .map(|c| c.resolve(self.toggled, DEFAULT_SWITCH_COLOR))
    }

    // ===== Labels =====

    /// Whether labels are rendered at all.
    #[must_use]
    pub fn labels_visible(&self) -> bool {
        !matches!(self.config.labels, Labels::Visible(false))
    }

    /// Label text while checked.
    #[must_use]
    pub fn label_checked(&self) -> String {
        match &self.config.labels {
            Labels::PerState { checked, .. } => checked
                .clone()
                .unwrap_or_else(|| DEFAULT_LABEL_CHECKED.to_string()),
            Labels::Visible(_) => self.config.checked_label.clone(),
        }
    }

    /// Label text while unchecked.
    #[must_use]
    pub fn label_unchecked(&self) -> String {
        match &self.config.labels {
            Labels::PerState { unchecked, .. } => unchecked
                .clone()
                .unwrap_or_else(|| DEFAULT_LABEL_UNCHECKED.to_string()),
            Labels::Visible(_) => self.config.unchecked_label.clone(),
        }
    }

    // ===== Style derivation =====

    /// Track style.
    #[must_use]
    pub fn core_style(&self) -> CoreStyle {
        let background_color = if self.config.css_colors {
            None
        } else if self.config.disabled {
            Some(self.color_disabled())
        } else {
            Some(self.color_current())
        };
        CoreStyle {
            width: px(self.config.width),
            height: px(self.config.height),
            transition: transition_all(self.config.speed),
            background_color,
            // half the height, rounded up for odd heights
            border_radius: px(self.config.height.div_ceil(2)),
        }
    }

    /// Thumb style.
    #[must_use]
    pub fn button_style(&self) -> ButtonStyle {
        let margin = px(self.config.margin);
        let transform = if self.toggled {
            translate(&self.distance(), &margin)
        } else {
            translate(&margin, &margin)
        };
        let background = if self.config.disabled {
            Some(DISABLED_BUTTON_COLOR.to_string())
        } else {
            self.switch_color_current()
        };
        let side = px(self.button_radius());
        ButtonStyle {
            width: side.clone(),
            height: side,
            transition: transition_all(self.config.speed),
            transform,
            background,
        }
    }

    /// Label style.
    #[must_use]
    pub fn label_style(&self) -> LabelStyle {
        LabelStyle {
            line_height: px(self.config.height),
            font_size: self.config.font_size.map(px),
            color: self.font_color_current(),
        }
    }
}

impl Default for ToggleSwitch {
    fn default() -> Self {
        Self::new(ToggleConfig::default())
    }
}

impl ValueAccessor for ToggleSwitch {
    fn write_value(&mut self, value: Option<bool>) {
        self.config.value = value.unwrap_or(false);
        self.toggled = self.config.value;
    }

    fn register_on_change(&mut self, callback: ChangeFn) {
        self.on_change = callback;
    }

    fn register_on_touched(&mut self, callback: TouchFn) {
        self.on_touched = callback;
    }

    fn set_disabled_state(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }
}

impl Lifecycle for ToggleSwitch {
    fn on_init(&mut self) {
        self.toggled = self.config.value;
    }

    fn on_value_change(&mut self) {
        self.toggled = self.config.value;
    }
}

impl fmt::Debug for ToggleSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleSwitch")
            .field("config", &self.config)
            .field("toggled", &self.toggled)
            .field("change", &self.change)
            .finish_non_exhaustive()
    }
}
