//! Built-in fields: MaskedInput.

pub mod masked_input;

pub use masked_input::{MaskedInput, Phase, UpdateCallback};
