//! Helpers for building CSS value strings.
//!
//! Derived styles are expressed as CSS-in-JS style objects, so every value
//! ends up as a string: `"45px"`, `"translate(28px, 3px)"`, `"all 300ms"`.

use std::fmt;

/// Format a length as a CSS pixel value.
///
/// Accepts any displayable number; negative lengths are passed through
/// unchanged, matching the no-validation coercion model.
#[must_use]
pub fn px<T: fmt::Display>(value: T) -> String {
    format!("{value}px")
}

/// Format a CSS 2D translation.
#[must_use]
pub fn translate(x: &str, y: &str) -> String {
    format!("translate({x}, {y})")
}

/// Format an all-properties CSS transition with a millisecond duration.
#[must_use]
pub fn transition_all(duration_ms: u32) -> String {
    format!("all {duration_ms}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_formats_integers() {
        assert_eq!(px(45), "45px");
        assert_eq!(px(0), "0px");
    }

    #[test]
    fn test_px_passes_negative_values_through() {
        assert_eq!(px(-5), "-5px");
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate("28px", "3px"), "translate(28px, 3px)");
    }

    #[test]
    fn test_transition_all() {
        assert_eq!(transition_all(300), "all 300ms");
    }
}
