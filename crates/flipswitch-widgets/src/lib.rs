//! Widget implementations for the flipswitch framework.

pub mod style;
pub mod toggle;

pub use style::{ButtonStyle, CoreStyle, LabelStyle};
pub use toggle::{ToggleConfig, ToggleSwitch};
