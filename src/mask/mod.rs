//! Mask formatting: digit normalization, per-type rules, SSN obscuring.
//!
//! - [`MaskType`]: which rule applies, plus input-element hints.
//! - [`DigitString`]: digits-only canonical form of user input.
//! - [`MaskFormatter`]: raw input to display string and emitted value.
//! - [`ssn`]: Revealed/Obscured overlay for SSN fields.

pub mod currency;
pub mod digits;
pub mod formatter;
pub mod kind;
pub mod ssn;

pub use currency::{CurrencyStyle, Usd};
pub use digits::DigitString;
pub use formatter::{format, EmittedValue, MaskFormatter, MaskOutput};
pub use kind::MaskType;
pub use ssn::SsnVisibility;
