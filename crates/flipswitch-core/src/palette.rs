//! Fixed fallback colors and labels used when configuration omits a value.

/// Track color when checked and no track color is configured.
pub const DEFAULT_COLOR_CHECKED: &str = "#0099CC";

/// Track color when unchecked and no track color is configured.
pub const DEFAULT_COLOR_UNCHECKED: &str = "#e0e0e0";

/// Label text when checked and no label is configured.
pub const DEFAULT_LABEL_CHECKED: &str = "";

/// Label text when unchecked and no label is configured.
pub const DEFAULT_LABEL_UNCHECKED: &str = "";

/// Thumb and font fallback color.
pub const DEFAULT_SWITCH_COLOR: &str = "#fff";

/// Track color while the control is disabled.
pub const DISABLED_COLOR: &str = "#dbdbdb";

/// Thumb color while the control is disabled.
pub const DISABLED_BUTTON_COLOR: &str = "silver";
