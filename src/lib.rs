//! # masked-fields
//!
//! Masked form-field formatting and input state for design-system components.
//!
//! Hosts own rendering, accessibility and styling. This crate owns what the
//! field means: how raw keystrokes become a canonical display string, what
//! value the surrounding form receives, and when sensitive digits are hidden.
//!
//! ## Core Systems
//!
//! - **[`mask`]** — Mask types, digit normalization, formatter, SSN overlay
//! - **[`widgets`]** — `MaskedInput`: mount seeding, editing, focus, host callback
//! - **[`event`]** — Field input events with crossterm conversion
//! - **[`config`]** — TOML-loadable field options
//! - **[`format`]** — Read-only phone, date and currency formatters
//! - **[`toast`]** — Host-owned priority queue for toasts and alerts
//! - **[`strength`]** — Password-strength heuristic
//! - **[`testing`]** — `FieldPilot` and snapshot rendering helpers
//! - **[`error`]** — Error types for the fallible edges of the crate

// Foundation
pub mod error;
pub mod mask;

// Fields
pub mod config;
pub mod event;
pub mod widgets;

// Helpers
pub mod format;
pub mod strength;
pub mod toast;

// Testing
pub mod testing;

pub use config::FieldConfig;
pub use error::{ConfigError, DateInputError, MaskTypeError};
pub use mask::{EmittedValue, MaskFormatter, MaskType};
pub use widgets::MaskedInput;
