//! Headless testing helpers: FieldPilot, snapshot rendering.
//!
//! Use the [`FieldPilot`] to drive a [`MaskedInput`](crate::widgets::MaskedInput)
//! with key presses, pastes and focus changes while recording every value it
//! emits. Use [`field_to_string`] to capture what the host would draw as a
//! single line of text for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::FieldPilot;
pub use snapshot::field_to_string;
