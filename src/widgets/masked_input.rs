//! MaskedInput: a focusable text field that reformats on every edit.
//!
//! The field holds the formatted display string and a byte-offset cursor.
//! Each edit splices the change into the display text, reformats the result
//! through its [`MaskFormatter`], and notifies the host once with the
//! [`EmittedValue`]. A usd edit that yields no parsable amount is dropped and
//! the previous display is kept.
//!
//! Lifecycle:
//!
//! - `Uninitialized -> Initialized` on [`MaskedInput::mount`]. A value given
//!   with [`MaskedInput::with_value`] seeds the display exactly once, here.
//!   External values arriving after mount are ignored so that host re-renders
//!   never overwrite what the user is typing.
//! - SSN fields additionally carry an [`SsnVisibility`] that is revealed on
//!   focus and obscured on blur when the value is a complete SSN.

use std::borrow::Cow;
use std::fmt;

use crate::config::FieldConfig;
use crate::event::input::{InputEvent, Key};
use crate::mask::digits::{count_digits, offset_after_digits};
use crate::mask::{EmittedValue, MaskFormatter, MaskType, SsnVisibility};

/// Host callback receiving each emitted value.
pub type UpdateCallback = Box<dyn FnMut(&EmittedValue)>;

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Mount state of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Initialized,
}

// ---------------------------------------------------------------------------
// MaskedInput
// ---------------------------------------------------------------------------

/// A masked text field.
///
/// # Examples
///
/// ```
/// use masked_fields::mask::MaskType;
/// use masked_fields::widgets::MaskedInput;
///
/// let mut field = MaskedInput::new(MaskType::Phone);
/// field.mount();
/// field.handle_input("5551234567");
/// assert_eq!(field.value(), "(555) 123-4567");
/// ```
pub struct MaskedInput {
    formatter: MaskFormatter,
    value: String,
    cursor_position: usize,
    placeholder: String,
    phase: Phase,
    initial: Option<String>,
    focused: bool,
    ssn: Option<SsnVisibility>,
    obscure_char: char,
    emitted: Option<EmittedValue>,
    on_update: Option<UpdateCallback>,
}

impl MaskedInput {
    /// Create an empty, unmounted field with default punctuation.
    pub fn new(kind: MaskType) -> Self {
        Self::with_formatter(MaskFormatter::new(kind))
    }

    /// Create an unmounted field from a loaded config.
    pub fn from_config(config: &FieldConfig) -> Self {
        let mut field = Self::with_formatter(config.formatter());
        field.placeholder = config.placeholder.clone();
        field.obscure_char = config.ssn.obscure_char;
        field
    }

    fn with_formatter(formatter: MaskFormatter) -> Self {
        let ssn = (formatter.kind() == MaskType::Ssn).then(SsnVisibility::default);
        Self {
            formatter,
            value: String::new(),
            cursor_position: 0,
            placeholder: String::new(),
            phase: Phase::Uninitialized,
            initial: None,
            focused: false,
            ssn,
            obscure_char: '*',
            emitted: None,
            on_update: None,
        }
    }

    /// Set the placeholder text (builder pattern).
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Supply the initial value applied on mount (builder pattern).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.initial = Some(value.into());
        self
    }

    /// Register the host callback (builder pattern).
    pub fn on_masked_value_update(mut self, callback: impl FnMut(&EmittedValue) + 'static) -> Self {
        self.on_update = Some(Box::new(callback));
        self
    }

    /// Replace the host callback on an existing field.
    pub fn set_update_callback(&mut self, callback: impl FnMut(&EmittedValue) + 'static) {
        self.on_update = Some(Box::new(callback));
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Run the one-time initialization. Returns `true` if a supplied initial
    /// value seeded the display.
    ///
    /// Seeding does not notify the host: the value came from the host.
    pub fn mount(&mut self) -> bool {
        if self.phase == Phase::Initialized {
            return false;
        }
        self.phase = Phase::Initialized;

        let Some(initial) = self.initial.take() else {
            return false;
        };
        match self.formatter.format(&initial) {
            Some(out) => {
                self.value = out.display;
                self.cursor_position = self.value.len();
                self.emitted = Some(out.emitted);
                self.refresh_overlay();
                tracing::debug!(mask = %self.kind(), "seeded field from initial value");
                true
            }
            None => {
                tracing::debug!(mask = %self.kind(), "initial value has no amount; field left empty");
                false
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.phase == Phase::Initialized
    }

    /// Offer a value from the host form.
    ///
    /// Before mount this replaces the pending initial value. After mount it
    /// is ignored.
    pub fn set_external_value(&mut self, value: impl Into<String>) {
        match self.phase {
            Phase::Uninitialized => self.initial = Some(value.into()),
            Phase::Initialized => {
                tracing::debug!(mask = %self.kind(), "ignoring external value after mount");
            }
        }
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Replace the whole raw value, as a DOM `input` event does. Returns
    /// whether the display was updated.
    pub fn handle_input(&mut self, raw: &str) -> bool {
        self.apply(raw, count_digits(raw))
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf))
    }

    /// Insert text at the cursor (typing or paste).
    ///
    /// Digits beyond the mask's capacity are dropped before the splice, so a
    /// full field keeps its value instead of shifting digits off the end.
    pub fn insert_str(&mut self, text: &str) -> bool {
        let text = self.within_digit_cap(text);
        let mut raw = self.value.clone();
        raw.insert_str(self.cursor_position, &text);
        let before = count_digits(&raw[..self.cursor_position + text.len()]);
        self.apply(&raw, before)
    }

    /// Backspace: remove the nearest digit before the cursor.
    ///
    /// Punctuation is skipped over; deleting it alone would be undone by
    /// reformatting.
    pub fn delete_char(&mut self) -> bool {
        let Some(pos) = self.value[..self.cursor_position].rfind(|c: char| c.is_ascii_digit())
        else {
            return false;
        };
        let mut raw = self.value.clone();
        raw.remove(pos);
        let before = count_digits(&raw[..pos]);
        self.apply(&raw, before)
    }

    /// Delete: remove the nearest digit after the cursor.
    pub fn delete_forward(&mut self) -> bool {
        let Some(rel) = self.value[self.cursor_position..].find(|c: char| c.is_ascii_digit())
        else {
            return false;
        };
        let mut raw = self.value.clone();
        raw.remove(self.cursor_position + rel);
        let before = count_digits(&raw[..self.cursor_position]);
        self.apply(&raw, before)
    }

    /// Clear the display through the formatter.
    ///
    /// A usd field cannot be cleared this way: an empty amount does not parse.
    pub fn clear(&mut self) -> bool {
        self.apply("", 0)
    }

    /// `text` with any digits past the remaining capacity removed.
    fn within_digit_cap<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let Some(cap) = self.kind().max_digits() else {
            return Cow::Borrowed(text);
        };
        let mut room = cap.saturating_sub(count_digits(&self.value));
        if count_digits(text) <= room {
            return Cow::Borrowed(text);
        }
        tracing::trace!(mask = %self.kind(), room, "dropping digits past capacity");
        Cow::Owned(
            text.chars()
                .filter(|c| {
                    if !c.is_ascii_digit() {
                        return true;
                    }
                    if room == 0 {
                        return false;
                    }
                    room -= 1;
                    true
                })
                .collect(),
        )
    }

    /// Format `raw`, then place the cursor after `digits_before` digits.
    fn apply(&mut self, raw: &str, digits_before: usize) -> bool {
        let Some(out) = self.formatter.format(raw) else {
            tracing::debug!(mask = %self.kind(), "no amount in input; keeping previous value");
            return false;
        };

        let total = count_digits(raw);
        self.value = out.display;
        self.cursor_position = if self.kind() == MaskType::Usd {
            // Cents shift in from the right, so anchor the cursor there.
            offset_before_last_digits(&self.value, total.saturating_sub(digits_before))
        } else {
            offset_after_digits(&self.value, digits_before)
        };
        self.refresh_overlay();

        tracing::trace!(
            mask = %self.kind(),
            digits = out.digits.len(),
            "formatted field input"
        );
        if let Some(callback) = self.on_update.as_mut() {
            callback(&out.emitted);
        }
        self.emitted = Some(out.emitted);
        true
    }

    // -----------------------------------------------------------------------
    // Cursor
    // -----------------------------------------------------------------------

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position = self.prev_char_boundary();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.value.len() {
            self.cursor_position = self.next_char_boundary();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.value.len();
    }

    /// Cursor position as a byte offset into [`value`](Self::value).
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    fn prev_char_boundary(&self) -> usize {
        let mut pos = self.cursor_position.saturating_sub(1);
        while pos > 0 && !self.value.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn next_char_boundary(&self) -> usize {
        let mut pos = self.cursor_position + 1;
        while pos < self.value.len() && !self.value.is_char_boundary(pos) {
            pos += 1;
        }
        pos
    }

    // -----------------------------------------------------------------------
    // Focus / SSN overlay
    // -----------------------------------------------------------------------

    pub fn focus(&mut self) {
        self.focused = true;
        if let Some(ssn) = self.ssn.as_mut() {
            ssn.focus();
        }
    }

    pub fn blur(&mut self) {
        self.focused = false;
        if let Some(ssn) = self.ssn.as_mut() {
            ssn.blur(&self.value, self.obscure_char);
            if ssn.is_obscured() {
                tracing::debug!("obscured complete ssn on blur");
            }
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Keep an existing overlay in step with a changed value.
    fn refresh_overlay(&mut self) {
        if let Some(ssn) = self.ssn.as_mut() {
            if ssn.is_obscured() {
                ssn.blur(&self.value, self.obscure_char);
            }
        }
    }

    /// SSN overlay state; `None` for other masks.
    pub fn ssn_visibility(&self) -> Option<&SsnVisibility> {
        self.ssn.as_ref()
    }

    pub fn overlay(&self) -> Option<&str> {
        self.ssn.as_ref().and_then(SsnVisibility::overlay)
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    /// Route an input event. Returns whether the field consumed it.
    ///
    /// An unmounted field mounts itself before handling its first event.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        if !self.is_mounted() {
            self.mount();
        }
        match event {
            InputEvent::Key(key) if key.modifiers.is_command() => false,
            InputEvent::Key(key) => match key.code {
                Key::Char(ch) => {
                    self.insert_char(ch);
                    true
                }
                Key::Backspace => {
                    self.delete_char();
                    true
                }
                Key::Delete => {
                    self.delete_forward();
                    true
                }
                Key::Left => {
                    self.move_cursor_left();
                    true
                }
                Key::Right => {
                    self.move_cursor_right();
                    true
                }
                Key::Home => {
                    self.move_cursor_home();
                    true
                }
                Key::End => {
                    self.move_cursor_end();
                    true
                }
                Key::Enter | Key::Escape | Key::Tab | Key::BackTab | Key::Other => false,
            },
            InputEvent::Paste(text) => {
                self.insert_str(text);
                true
            }
            InputEvent::Replace(raw) => {
                self.handle_input(raw);
                true
            }
            InputEvent::FocusGained => {
                self.focus();
                true
            }
            InputEvent::FocusLost => {
                self.blur();
                true
            }
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn kind(&self) -> MaskType {
        self.formatter.kind()
    }

    /// The formatted value (never the overlay).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The last value emitted or seeded.
    pub fn emitted(&self) -> Option<&EmittedValue> {
        self.emitted.as_ref()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Currency symbol shown beside a usd field.
    pub fn decoration(&self) -> Option<&str> {
        (self.kind() == MaskType::Usd).then(|| self.formatter.currency().symbol.as_str())
    }

    /// What the host should draw: the overlay, the value, or the placeholder.
    pub fn display_text(&self) -> &str {
        if let Some(overlay) = self.overlay() {
            overlay
        } else if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }

    /// Whether [`display_text`](Self::display_text) is the placeholder.
    pub fn showing_placeholder(&self) -> bool {
        self.value.is_empty() && !self.placeholder.is_empty()
    }
}

impl fmt::Debug for MaskedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskedInput")
            .field("kind", &self.kind())
            .field("value", &self.value)
            .field("cursor_position", &self.cursor_position)
            .field("phase", &self.phase)
            .field("focused", &self.focused)
            .field("ssn", &self.ssn)
            .field("emitted", &self.emitted)
            .field("has_callback", &self.on_update.is_some())
            .finish()
    }
}

/// Byte offset just before the last `n` digits of `s` (`s.len()` when `n == 0`).
fn offset_before_last_digits(s: &str, n: usize) -> usize {
    if n == 0 {
        return s.len();
    }
    let mut seen = 0;
    for (i, b) in s.bytes().enumerate().rev() {
        if b.is_ascii_digit() {
            seen += 1;
            if seen == n {
                return i;
            }
        }
    }
    0
}

// ===========================================================================
// Tests
// ===========================================================================
