//! FieldPilot: programmatic interaction with a headless masked field.
//!
//! The pilot owns a [`MaskedInput`], installs a recording update callback,
//! and exposes the same simulation verbs a host would produce: key presses,
//! typed text, pastes, whole-value replacement, focus and blur.

use std::cell::RefCell;
use std::rc::Rc;

use crate::event::input::{InputEvent, Key, KeyEvent, Modifiers};
use crate::mask::{EmittedValue, MaskType};
use crate::widgets::MaskedInput;

use super::snapshot::field_to_string;

// ---------------------------------------------------------------------------
// FieldPilot
// ---------------------------------------------------------------------------

/// A headless field driver for testing.
///
/// # Examples
///
/// ```
/// use masked_fields::mask::MaskType;
/// use masked_fields::testing::FieldPilot;
///
/// let mut pilot = FieldPilot::for_mask(MaskType::Ssn);
/// pilot.focus();
/// pilot.type_text("123456789");
/// pilot.blur();
/// assert_eq!(pilot.render(), "***-**-6789");
/// ```
pub struct FieldPilot {
    field: MaskedInput,
    emitted: Rc<RefCell<Vec<EmittedValue>>>,
}

impl FieldPilot {
    /// Wrap `field`, replacing its update callback with a recorder, and
    /// mount it.
    pub fn new(mut field: MaskedInput) -> Self {
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&emitted);
        field.set_update_callback(move |value| sink.borrow_mut().push(value.clone()));
        field.mount();
        Self { field, emitted }
    }

    /// Pilot an empty field of the given mask.
    pub fn for_mask(kind: MaskType) -> Self {
        Self::new(MaskedInput::new(kind))
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Simulate a key press with no modifiers.
    pub fn press_key(&mut self, key: Key) -> bool {
        self.field
            .handle_event(&InputEvent::Key(KeyEvent::new(key, Modifiers::NONE)))
    }

    /// Simulate a key press with the given modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) -> bool {
        self.field
            .handle_event(&InputEvent::Key(KeyEvent::new(key, modifiers)))
    }

    /// Simulate typing each character of `text` as individual key presses.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(Key::Char(ch));
        }
    }

    pub fn paste(&mut self, text: &str) {
        self.field.handle_event(&InputEvent::Paste(text.to_owned()));
    }

    /// Replace the whole raw value in one event.
    pub fn replace(&mut self, raw: &str) {
        self.field.handle_event(&InputEvent::Replace(raw.to_owned()));
    }

    pub fn focus(&mut self) {
        self.field.handle_event(&InputEvent::FocusGained);
    }

    pub fn blur(&mut self) {
        self.field.handle_event(&InputEvent::FocusLost);
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn field(&self) -> &MaskedInput {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut MaskedInput {
        &mut self.field
    }

    /// Every value the field emitted, in order.
    pub fn emitted(&self) -> Vec<EmittedValue> {
        self.emitted.borrow().clone()
    }

    pub fn last_emitted(&self) -> Option<EmittedValue> {
        self.emitted.borrow().last().cloned()
    }

    /// Emitted usd amounts in dollars; text values are skipped.
    pub fn emitted_dollars(&self) -> Vec<f64> {
        self.emitted
            .borrow()
            .iter()
            .filter_map(EmittedValue::as_dollars)
            .collect()
    }

    pub fn emit_count(&self) -> usize {
        self.emitted.borrow().len()
    }

    /// Render the field as one line; see [`field_to_string`].
    pub fn render(&self) -> String {
        field_to_string(&self.field)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_mounts_the_field() {
        let pilot = FieldPilot::new(MaskedInput::new(MaskType::Zip).with_value("12345"));
        assert!(pilot.field().is_mounted());
        assert_eq!(pilot.field().value(), "12345");
        assert_eq!(pilot.emit_count(), 0);
    }

    // ── Input simulation ─────────────────────────────────────────────

    #[test]
    fn type_text_records_each_keystroke() {
        let mut pilot = FieldPilot::for_mask(MaskType::Zip);
        pilot.type_text("902");
        assert_eq!(pilot.emit_count(), 3);
        assert_eq!(pilot.last_emitted(), Some(EmittedValue::Text("902".into())));
    }

    #[test]
    fn press_backspace() {
        let mut pilot = FieldPilot::for_mask(MaskType::Account);
        pilot.type_text("12345");
        assert!(pilot.press_key(Key::Backspace));
        assert_eq!(pilot.field().value(), "1234");
    }

    #[test]
    fn ctrl_keys_pass_through() {
        let mut pilot = FieldPilot::for_mask(MaskType::Zip);
        assert!(!pilot.press_key_with(Key::Char('a'), Modifiers::CTRL));
        assert_eq!(pilot.emit_count(), 0);
    }

    #[test]
    fn paste_and_replace() {
        let mut pilot = FieldPilot::for_mask(MaskType::Phone);
        pilot.paste("555");
        pilot.replace("555-123-4567");
        assert_eq!(pilot.field().value(), "(555) 123-4567");
        assert_eq!(pilot.emit_count(), 2);
    }

    #[test]
    fn emitted_dollars_for_usd() {
        let mut pilot = FieldPilot::for_mask(MaskType::Usd);
        pilot.type_text("12");
        assert_eq!(pilot.emitted_dollars(), vec![0.01, 0.12]);
    }

    #[test]
    fn focus_blur_round_trip() {
        let mut pilot = FieldPilot::for_mask(MaskType::Ssn);
        pilot.focus();
        assert!(pilot.field().is_focused());
        pilot.blur();
        assert!(!pilot.field().is_focused());
    }
}
