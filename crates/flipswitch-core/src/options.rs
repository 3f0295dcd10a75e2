//! Scalar-or-pair configuration options.
//!
//! Several widget options (track color, thumb color, font color, labels)
//! accept either a single value applied in both states or a per-state pair.
//! `StateValue` models that shape explicitly and funnels every lookup
//! through one resolution function parameterized by a fallback.

use serde::{Deserialize, Serialize};

/// A configuration option that is either one value for both states or a
/// per-state map.
///
/// The untagged serde representation matches the JSON shapes hosts write:
/// `"#333"` or `{"checked": "#111", "unchecked": "#222"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue<T> {
    /// One value, applied regardless of state.
    Single(T),
    /// Distinct values per state; absent entries fall back to the
    /// option's default at resolution time.
    PerState {
        /// Value while checked.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        checked: Option<T>,
        /// Value while unchecked.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unchecked: Option<T>,
        /// Value while disabled, overriding the fixed disabled fallback.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        disabled: Option<T>,
    },
}

impl<T: Clone> StateValue<T> {
    /// Create a per-state pair with both entries present.
    pub fn pair(checked: impl Into<T>, unchecked: impl Into<T>) -> Self {
        Self::PerState {
            checked: Some(checked.into()),
            unchecked: Some(unchecked.into()),
            disabled: None,
        }
    }

    /// Attach a disabled-state value. A single value is promoted to a
    /// per-state pair carrying it in both slots.
    #[must_use]
    pub fn with_disabled(self, value: impl Into<T>) -> Self {
        match self {
            Self::Single(v) => Self::PerState {
                checked: Some(v.clone()),
                unchecked: Some(v),
                disabled: Some(value.into()),
            },
            Self::PerState {
                checked, unchecked, ..
            } => Self::PerState {
                checked,
                unchecked,
                disabled: Some(value.into()),
            },
        }
    }

    /// Resolve the value for the given state, falling back to `default`
    /// when the matching per-state entry is absent.
    pub fn resolve(&self, checked: bool, default: impl Into<T>) -> T {
        match self {
            Self::Single(v) => v.clone(),
            Self::PerState {
                checked: c,
                unchecked: u,
                ..
            } => {
                let slot = if checked { c } else { u };
                slot.clone().unwrap_or_else(|| default.into())
            }
        }
    }

    /// The disabled-state override, if one is configured.
    pub fn disabled_override(&self) -> Option<&T> {
        match self {
            Self::Single(_) => None,
            Self::PerState { disabled, .. } => disabled.as_ref(),
        }
    }
}

impl From<&str> for StateValue<String> {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for StateValue<String> {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

/// The `labels` option: a visibility flag, or per-state label text.
///
/// When configured as a pair, the pair wins over the widget's separate
/// checked/unchecked label strings; `Visible(false)` hides labels entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Labels {
    /// Show or hide the labels; text comes from the label string options.
    Visible(bool),
    /// Explicit per-state label text.
    PerState {
        /// Label while checked.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        checked: Option<String>,
        /// Label while unchecked.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unchecked: Option<String>,
    },
}

impl Labels {
    /// Create a per-state label pair.
    #[must_use]
    pub fn pair(checked: impl Into<String>, unchecked: impl Into<String>) -> Self {
        Self::PerState {
            checked: Some(checked.into()),
            unchecked: Some(unchecked.into()),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::Visible(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Resolution Tests =====

    #[test]
    fn test_single_resolves_regardless_of_state() {
        let v = StateValue::Single("#333".to_string());
        assert_eq!(v.resolve(true, "#default"), "#333");
        assert_eq!(v.resolve(false, "#default"), "#333");
    }

    #[test]
    fn test_pair_resolves_per_state() {
        let v: StateValue<String> = StateValue::pair("#111", "#222");
        assert_eq!(v.resolve(true, "#default"), "#111");
        assert_eq!(v.resolve(false, "#default"), "#222");
    }

    #[test]
    fn test_pair_missing_entry_falls_back_to_default() {
        let v: StateValue<String> = StateValue::PerState {
            checked: Some("#111".to_string()),
            unchecked: None,
            disabled: None,
        };
        assert_eq!(v.resolve(true, "#default"), "#111");
        assert_eq!(v.resolve(false, "#default"), "#default");
    }

    #[test]
    fn test_disabled_override_absent_on_single() {
        let v: StateValue<String> = "#333".into();
        assert!(v.disabled_override().is_none());
    }

    #[test]
    fn test_with_disabled_on_pair() {
        let v: StateValue<String> = StateValue::pair("#111", "#222").with_disabled("#ddd");
        assert_eq!(v.disabled_override().map(String::as_str), Some("#ddd"));
        assert_eq!(v.resolve(true, "#default"), "#111");
    }

    #[test]
    fn test_with_disabled_promotes_single() {
        let v: StateValue<String> = StateValue::from("#333").with_disabled("#ddd");
        assert_eq!(v.resolve(true, "#default"), "#333");
        assert_eq!(v.resolve(false, "#default"), "#333");
        assert_eq!(v.disabled_override().map(String::as_str), Some("#ddd"));
    }

    // ===== Serde Shape Tests =====

    #[test]
    fn test_single_deserializes_from_bare_string() {
        let v: StateValue<String> = serde_json::from_str("\"#333\"").unwrap();
        assert_eq!(v, StateValue::Single("#333".to_string()));
    }

    #[test]
    fn test_pair_deserializes_from_object() {
        let v: StateValue<String> =
            serde_json::from_str(r##"{"checked": "#111", "unchecked": "#222"}"##).unwrap();
        assert_eq!(v.resolve(true, ""), "#111");
        assert_eq!(v.resolve(false, ""), "#222");
    }

    #[test]
    fn test_pair_deserializes_partial_object() {
        let v: StateValue<String> = serde_json::from_str(r##"{"disabled": "#ddd"}"##).unwrap();
        assert_eq!(v.disabled_override().map(String::as_str), Some("#ddd"));
        assert_eq!(v.resolve(true, "#fallback"), "#fallback");
    }

    #[test]
    fn test_single_serializes_to_bare_string() {
        let v: StateValue<String> = "#333".into();
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"#333\"");
    }

    // ===== Labels Tests =====

    #[test]
    fn test_labels_default_visible() {
        assert_eq!(Labels::default(), Labels::Visible(true));
    }

    #[test]
    fn test_labels_pair() {
        let labels = Labels::pair("on", "off");
        assert_eq!(
            labels,
            Labels::PerState {
                checked: Some("on".to_string()),
                unchecked: Some("off".to_string()),
            }
        );
    }

    #[test]
    fn test_labels_deserializes_from_bool() {
        let labels: Labels = serde_json::from_str("false").unwrap();
        assert_eq!(labels, Labels::Visible(false));
    }

    #[test]
    fn test_labels_deserializes_from_object() {
        let labels: Labels =
            serde_json::from_str(r#"{"checked": "on", "unchecked": "off"}"#).unwrap();
        assert_eq!(labels, Labels::pair("on", "off"));
    }

    // ===== Property Tests =====

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_single_is_state_independent(value in "[#a-z0-9]{0,12}", checked in any::<bool>()) {
                let v = StateValue::Single(value.clone());
                prop_assert_eq!(v.resolve(checked, "fallback"), value);
            }

            #[test]
            fn prop_pair_resolves_matching_slot(
                on in "[#a-z0-9]{0,12}",
                off in "[#a-z0-9]{0,12}",
                checked in any::<bool>(),
            ) {
                let v: StateValue<String> = StateValue::pair(on.clone(), off.clone());
                let expected = if checked { on } else { off };
                prop_assert_eq!(v.resolve(checked, "fallback"), expected);
            }

            #[test]
            fn prop_absent_slot_falls_back_to_default(
                value in "[#a-z0-9]{0,12}",
                default in "[#a-z0-9]{0,12}",
                checked in any::<bool>(),
            ) {
                let v: StateValue<String> = StateValue::PerState {
                    checked: checked.then(|| value.clone()),
                    unchecked: (!checked).then(|| value.clone()),
                    disabled: None,
                };
                prop_assert_eq!(v.resolve(checked, default.clone()), value);
                prop_assert_eq!(v.resolve(!checked, default.clone()), default);
            }

            #[test]
            fn prop_with_disabled_preserves_resolution(
                value in "[#a-z0-9]{0,12}",
                disabled in "[#a-z0-9]{0,12}",
                checked in any::<bool>(),
            ) {
                let v = StateValue::Single(value.clone()).with_disabled(disabled.clone());
                prop_assert_eq!(v.resolve(checked, "fallback"), value);
                prop_assert_eq!(v.disabled_override().cloned(), Some(disabled));
            }
        }
    }
}
