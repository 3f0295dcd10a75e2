//! The demo host application.
//!
//! Owns a configuration object and three toggle instances: one driven
//! through the form-control protocol, and two driven as plain two-way
//! bound attributes whose flip methods invert local booleans directly.

use std::cell::Cell;
use std::rc::Rc;

use flipswitch_core::{Labels, Lifecycle, StateValue, ValueAccessor};
use flipswitch_widgets::{ToggleConfig, ToggleSwitch};

/// The configuration the scripted demo ships with.
#[must_use]
pub fn demo_config() -> ToggleConfig {
    ToggleConfig::new()
        .width(50)
        .margin(3)
        .font_size(10)
        .speed(300)
        .color(StateValue::pair("#BFCBD9", "#BFCBD9"))
        .switch_color(StateValue::pair("#00a388", "red"))
        .labels(Labels::pair("on", "off"))
        .font_color(StateValue::pair("#fafafa", "#f45a32"))
}

/// Host state and the toggles it drives.
#[derive(Debug)]
pub struct DemoApp {
    form_value: Rc<Cell<bool>>,
    form_touched: Rc<Cell<bool>>,
    form_toggle: ToggleSwitch,
    /// Two-way bound field behind the second toggle.
    pub switch_test: bool,
    switch_toggle: ToggleSwitch,
    /// Two-way bound field behind the third toggle.
    pub switch_test_value: bool,
    value_toggle: ToggleSwitch,
}

impl DemoApp {
    /// Build the app, wiring the first toggle through the form-control
    /// protocol and initializing the other two from local booleans.
    #[must_use]
    pub fn new(config: ToggleConfig) -> Self {
        let form_value = Rc::new(Cell::new(config.value));
        let form_touched = Rc::new(Cell::new(false));

        let mut form_toggle = ToggleSwitch::new(config.clone());
        {
            let form_value = Rc::clone(&form_value);
            form_toggle.register_on_change(Box::new(move |v| form_value.set(v)));
        }
        {
            let form_touched = Rc::clone(&form_touched);
            form_toggle.register_on_touched(Box::new(move || form_touched.set(true)));
        }
        form_toggle.on_init();

        let mut switch_toggle = ToggleSwitch::new(config.clone());
        switch_toggle.on_init();
        let mut value_toggle = ToggleSwitch::new(config);
        value_toggle.on_init();

        Self {
            switch_test: switch_toggle.value(),
            switch_test_value: value_toggle.value(),
            form_value,
            form_touched,
            form_toggle,
            switch_toggle,
            value_toggle,
        }
    }

    /// Simulate a user click on the form-driven toggle.
    pub fn click_form_toggle(&mut self) {
        self.form_toggle.toggle();
    }

    /// Invert the local boolean and push it into the second toggle as a
    /// bound attribute write, bypassing the form-control protocol.
    pub fn flip_switch(&mut self) {
        self.switch_test = !self.switch_test;
        self.switch_toggle.set_value(self.switch_test);
    }

    /// Same as [`Self::flip_switch`], for the third toggle.
    pub fn flip_switch_value(&mut self) {
        self.switch_test_value = !self.switch_test_value;
        self.value_toggle.set_value(self.switch_test_value);
    }

    /// The form field's current value.
    #[must_use]
    pub fn form_value(&self) -> bool {
        self.form_value.get()
    }

    /// Whether the form-driven toggle has been interacted with.
    #[must_use]
    pub fn form_touched(&self) -> bool {
        self.form_touched.get()
    }

    /// The form-driven toggle.
    #[must_use]
    pub const fn form_toggle(&self) -> &ToggleSwitch {
        &self.form_toggle
    }

    /// The toggle bound to [`Self::switch_test`].
    #[must_use]
    pub const fn switch_toggle(&self) -> &ToggleSwitch {
        &self.switch_toggle
    }

    /// The toggle bound to [`Self::switch_test_value`].
    #[must_use]
    pub const fn value_toggle(&self) -> &ToggleSwitch {
        &self.value_toggle
    }
}

impl Default for DemoApp {
    fn default() -> Self {
        Self::new(demo_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_config_matches_shipped_values() {
        let config = demo_config();
        assert_eq!(config.width, 50);
        assert_eq!(config.height, 25);
        assert_eq!(config.margin, 3);
        assert_eq!(config.font_size, Some(10));
        assert_eq!(config.labels, Labels::pair("on", "off"));
    }

    #[test]
    fn test_form_click_writes_back_through_protocol() {
        let mut app = DemoApp::default();
        assert!(app.form_value());
        assert!(!app.form_touched());

        app.click_form_toggle();
        assert!(!app.form_value());
        assert!(app.form_touched());
    }

    #[test]
    fn test_flip_switch_drives_widget_without_protocol() {
        let mut app = DemoApp::default();
        assert!(app.switch_test);
        app.flip_switch();
        assert!(!app.switch_test);
        assert!(!app.switch_toggle().is_checked());
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut app = DemoApp::default();
        app.flip_switch();
        assert!(!app.switch_toggle().is_checked());
        assert!(app.value_toggle().is_checked());
        assert!(app.form_toggle().is_checked());

        app.flip_switch_value();
        assert!(!app.value_toggle().is_checked());
        assert!(app.form_toggle().is_checked());
    }

    #[test]
    fn test_form_toggle_styles_follow_demo_config() {
        let app = DemoApp::default();
        let core = app.form_toggle().core_style();
        assert_eq!(core.width, "50px");
        assert_eq!(core.background_color.as_deref(), Some("#BFCBD9"));

        let button = app.form_toggle().button_style();
        // 50 - 25 + 3 = 28
        assert_eq!(button.transform, "translate(28px, 3px)");
        assert_eq!(button.background.as_deref(), Some("#00a388"));
    }

    #[test]
    fn test_flip_switch_twice_restores_state() {
        let mut app = DemoApp::default();
        app.flip_switch();
        app.flip_switch();
        assert!(app.switch_test);
        assert!(app.switch_toggle().is_checked());
    }
}
