//! The form-control contract between a host form and a bound control.
//!
//! Mirrors the classic value-accessor protocol: the host pushes values in
//! and registers callbacks; the control invokes them on user interaction.

/// Callback invoked with the new boolean on every user-driven toggle.
pub type ChangeFn = Box<dyn FnMut(bool)>;

/// Callback invoked when the user first interacts with the control.
pub type TouchFn = Box<dyn FnMut()>;

/// Bidirectional form binding for a boolean control.
///
/// Registration replaces any previously registered callback.
pub trait ValueAccessor {
    /// Push an external value into the control and resynchronize its
    /// rendered state. `None` coerces to `false`; no input is rejected.
    ///
    /// Programmatic writes do not fire change notifications.
    fn write_value(&mut self, value: Option<bool>);

    /// Register the change callback.
    fn register_on_change(&mut self, callback: ChangeFn);

    /// Register the touched callback.
    fn register_on_touched(&mut self, callback: TouchFn);

    /// Enable or disable the control from the host side.
    fn set_disabled_state(&mut self, disabled: bool);
}

/// Host-invoked lifecycle hooks.
///
/// The host calls `on_init` once after constructing the control, and
/// `on_value_change` whenever it mutates the control's bound value input.
/// Both resynchronize rendered state with the bound value.
pub trait Lifecycle {
    /// Called once at creation.
    fn on_init(&mut self);

    /// Called after the bound value input changed.
    fn on_value_change(&mut self);
}
