//! Read-only display formatters for stored values.

pub mod currency;
pub mod date;
pub mod phone;

pub use currency::{format_currency, format_dollars};
pub use date::{format_date, parse_date_input, DateStyle};
pub use phone::format_phone_number;
