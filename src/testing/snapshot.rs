//! Plain-text rendering of a field for snapshot tests.

use crate::widgets::MaskedInput;

/// Cursor marker drawn into focused fields.
pub const CURSOR: char = '|';

/// Render what the host would draw for `field` as one line.
///
/// The currency decoration (if any) comes first, followed by a space. A
/// focused field shows [`CURSOR`] at the cursor position, or before the
/// placeholder when empty. Obscured SSN overlays never show a cursor.
///
/// # Examples
///
/// ```
/// use masked_fields::mask::MaskType;
/// use masked_fields::testing::field_to_string;
/// use masked_fields::widgets::MaskedInput;
///
/// let mut field = MaskedInput::new(MaskType::Usd);
/// field.mount();
/// field.handle_input("123456");
/// assert_eq!(field_to_string(&field), "$ 1,234.56");
/// ```
pub fn field_to_string(field: &MaskedInput) -> String {
    let mut out = String::new();
    if let Some(symbol) = field.decoration() {
        out.push_str(symbol);
        out.push(' ');
    }

    let text = field.display_text();
    let draws_cursor = field.is_focused() && field.overlay().is_none();
    if !draws_cursor {
        out.push_str(text);
    } else if field.showing_placeholder() || field.value().is_empty() {
        out.push(CURSOR);
        out.push_str(text);
    } else {
        let (head, tail) = field.value().split_at(field.cursor_position());
        out.push_str(head);
        out.push(CURSOR);
        out.push_str(tail);
    }
    out
}

// ===========================================================================
// Tests
// ===========================================================================
