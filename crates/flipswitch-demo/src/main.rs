//! Scripted demo driver.
//!
//! Builds the demo app, runs a few interactions across the three toggles,
//! and prints each resulting style object as JSON.

mod app;

use clap::Parser;
use flipswitch_core::{HexColor, StateValue};
use flipswitch_widgets::{ButtonStyle, CoreStyle, LabelStyle, ToggleSwitch};
use serde::Serialize;

use crate::app::{demo_config, DemoApp};

#[derive(Debug, Parser)]
#[command(name = "flipswitch-demo", about = "Exercise the toggle widget's configuration surface")]
struct Args {
    /// Track width in pixels.
    #[arg(long)]
    width: Option<u32>,
    /// Track height in pixels.
    #[arg(long)]
    height: Option<u32>,
    /// Thumb margin in pixels.
    #[arg(long)]
    margin: Option<u32>,
    /// Transition duration in milliseconds.
    #[arg(long)]
    speed: Option<u32>,
    /// Label font size in pixels.
    #[arg(long)]
    font_size: Option<u32>,
    /// Track color while checked.
    #[arg(long)]
    checked_color: Option<HexColor>,
    /// Track color while unchecked.
    #[arg(long)]
    unchecked_color: Option<HexColor>,
    /// Disable interaction.
    #[arg(long)]
    disabled: bool,
    /// Leave the track background to the stylesheet.
    #[arg(long)]
    css_colors: bool,
    /// Number of scripted interaction steps.
    #[arg(long, default_value_t = 6)]
    steps: u32,
}

impl Args {
    fn into_app(self) -> DemoApp {
        let mut config = demo_config();
        if let Some(width) = self.width {
            config = config.width(width);
        }
        if let Some(height) = self.height {
            config = config.height(height);
        }
        if let Some(margin) = self.margin {
            config = config.margin(margin);
        }
        if let Some(speed) = self.speed {
            config = config.speed(speed);
        }
        if let Some(font_size) = self.font_size {
            config = config.font_size(font_size);
        }
        match (self.checked_color, self.unchecked_color) {
            (Some(checked), Some(unchecked)) => {
                config = config.color(StateValue::pair(checked.as_str(), unchecked.as_str()));
            }
            (Some(single), None) | (None, Some(single)) => {
                config = config.color(String::from(single));
            }
            (None, None) => {}
        }
        config = config.disabled(self.disabled).css_colors(self.css_colors);
        DemoApp::new(config)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToggleReport {
    checked: bool,
    labels_visible: bool,
    label_checked: String,
    label_unchecked: String,
    core: CoreStyle,
    button: ButtonStyle,
    label: LabelStyle,
}

impl ToggleReport {
    fn capture(toggle: &ToggleSwitch) -> Self {
        Self {
            checked: toggle.is_checked(),
            labels_visible: toggle.labels_visible(),
            label_checked: toggle.label_checked(),
            label_unchecked: toggle.label_unchecked(),
            core: toggle.core_style(),
            button: toggle.button_style(),
            label: toggle.label_style(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StepReport {
    step: u32,
    action: &'static str,
    form_value: bool,
    form_touched: bool,
    form: ToggleReport,
    switch: ToggleReport,
    switch_value: ToggleReport,
}

fn capture(app: &DemoApp, step: u32, action: &'static str) -> StepReport {
    StepReport {
        step,
        action,
        form_value: app.form_value(),
        form_touched: app.form_touched(),
        form: ToggleReport::capture(app.form_toggle()),
        switch: ToggleReport::capture(app.switch_toggle()),
        switch_value: ToggleReport::capture(app.value_toggle()),
    }
}

fn main() {
    let args = Args::parse();
    let steps = args.steps;
    let mut app = args.into_app();

    let report = capture(&app, 0, "init");
    println!(
        "{}",
        serde_json::to_string_pretty(&report).expect("style report serialization")
    );

    for step in 1..=steps {
        let action = match step % 3 {
            1 => {
                app.click_form_toggle();
                "click-form-toggle"
            }
            2 => {
                app.flip_switch();
                "flip-switch"
            }
            _ => {
                app.flip_switch_value();
                "flip-switch-value"
            }
        };
        let report = capture(&app, step, action);
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("style report serialization")
        );
    }
}
