//! Core types and contracts for the flipswitch toggle widget.
//!
//! This crate provides the pieces shared between the widget and its hosts:
//! - CSS value helpers: [`css::px`], [`css::translate`], [`css::transition_all`]
//! - Validated hex colors: [`HexColor`]
//! - Scalar-or-pair options: [`StateValue`], [`Labels`]
//! - The form-control contract: [`ValueAccessor`], [`Lifecycle`]
//! - Output events: [`EventEmitter`]
//! - Fallback constants in [`palette`]

mod color;
mod contract;
pub mod css;
mod emitter;
mod options;
pub mod palette;

pub use color::{ColorParseError, HexColor};
pub use contract::{ChangeFn, Lifecycle, TouchFn, ValueAccessor};
pub use emitter::EventEmitter;
pub use options::{Labels, StateValue};
