//! Slot-level state machine for six-digit code entry.
//!
//! The form owns one [`CodeEntry`] and drives it through discrete events: a
//! single slot changing, a paste replacing the whole code, and a submit
//! validating all slots at once. The transitions live here, away from the
//! DOM, so the focus rules and validation are directly testable.

/// Number of digit slots in a verification code.
pub const CODE_LEN: usize = 6;

/// One slot of the code: empty, or a single decimal digit.
pub type Slot = Option<char>;

/// The six collected slots, in entry order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeEntry {
    slots: [Slot; CODE_LEN],
}

impl CodeEntry {
    pub fn from_slots(slots: [Slot; CODE_LEN]) -> Self {
        Self { slots }
    }

    /// Text value of a slot, as bound to its input element.
    pub fn slot_text(&self, index: usize) -> String {
        self.slots[index].map(String::from).unwrap_or_default()
    }

    pub fn set_slot(&mut self, index: usize, slot: Slot) {
        self.slots[index] = slot;
    }

    /// Concatenates the filled slots into the submitted code string.
    pub fn join(&self) -> String {
        self.slots.iter().flatten().collect()
    }
}

/// Filters a raw input value against the one-digit-per-slot contract.
///
/// Returns the accepted slot value, or `None` when the change must be
/// dropped without touching state: anything longer than one character or
/// containing a non-digit is rejected silently.
pub fn sanitize_input(raw: &str) -> Option<Slot> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Some(None),
        (Some(first), None) if first.is_ascii_digit() => Some(Some(first)),
        _ => None,
    }
}

/// Focus transition after a slot change: entering a digit advances to the
/// next slot, clearing one steps back. Both ends of the row hold focus.
pub fn focus_after_change(index: usize, entered: bool) -> usize {
    if entered {
        (index + 1).min(CODE_LEN - 1)
    } else {
        index.saturating_sub(1)
    }
}

/// Parses pasted clipboard text, accepting exactly six decimal digits.
/// Anything else leaves the current code untouched.
pub fn parse_pasted(text: &str) -> Option<[Slot; CODE_LEN]> {
    let digits: Vec<char> = text.chars().collect();
    if digits.len() != CODE_LEN || !digits.iter().all(|ch| ch.is_ascii_digit()) {
        return None;
    }

    let mut slots = [None; CODE_LEN];
    for (slot, digit) in slots.iter_mut().zip(digits) {
        *slot = Some(digit);
    }
    Some(slots)
}

/// Per-slot verdicts from a submit-time validation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    /// `true` marks a slot that is empty or not a single decimal digit.
    pub invalid: [bool; CODE_LEN],
    /// First invalid slot, the one that receives focus on failure.
    pub first_invalid: Option<usize>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.first_invalid.is_none()
    }
}

/// Checks every slot in order, flagging each invalid one and remembering the
/// first so the form can move focus there.
pub fn validate(entry: &CodeEntry) -> ValidationReport {
    let mut invalid = [false; CODE_LEN];
    let mut first_invalid = None;

    for (index, slot) in entry.slots.iter().enumerate() {
        let valid = matches!(slot, Some(ch) if ch.is_ascii_digit());
        invalid[index] = !valid;
        if !valid && first_invalid.is_none() {
            first_invalid = Some(index);
        }
    }

    ValidationReport {
        invalid,
        first_invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds an entry from a six-character pattern, spaces meaning empty.
    fn entry_from(pattern: &str) -> CodeEntry {
        let mut entry = CodeEntry::default();
        for (index, ch) in pattern.chars().enumerate() {
            if ch != ' ' {
                entry.set_slot(index, Some(ch));
            }
        }
        entry
    }

    #[test]
    fn sanitize_input_accepts_single_digits_and_deletion() {
        assert_eq!(sanitize_input(""), Some(None));
        assert_eq!(sanitize_input("0"), Some(Some('0')));
        assert_eq!(sanitize_input("9"), Some(Some('9')));
    }

    #[test]
    fn sanitize_input_rejects_non_digits_and_long_values() {
        assert_eq!(sanitize_input("a"), None);
        assert_eq!(sanitize_input(" "), None);
        assert_eq!(sanitize_input("12"), None);
        assert_eq!(sanitize_input("1a"), None);
    }

    #[test]
    fn entering_a_digit_advances_focus_until_the_last_slot() {
        assert_eq!(focus_after_change(0, true), 1);
        assert_eq!(focus_after_change(4, true), 5);
        assert_eq!(focus_after_change(5, true), 5);
    }

    #[test]
    fn clearing_a_slot_steps_focus_back_until_the_first_slot() {
        assert_eq!(focus_after_change(5, false), 4);
        assert_eq!(focus_after_change(1, false), 0);
        assert_eq!(focus_after_change(0, false), 0);
    }

    #[test]
    fn parse_pasted_accepts_exactly_six_digits() {
        let slots = parse_pasted("123456").expect("six digits should parse");
        assert_eq!(CodeEntry::from_slots(slots).join(), "123456");
    }

    #[test]
    fn parse_pasted_rejects_wrong_lengths_and_non_digits() {
        assert!(parse_pasted("").is_none());
        assert!(parse_pasted("12345").is_none());
        assert!(parse_pasted("1234567").is_none());
        assert!(parse_pasted("12a456").is_none());
    }

    #[test]
    fn validate_flags_every_invalid_slot_and_reports_the_first() {
        let report = validate(&entry_from("12 4 6"));
        assert!(!report.is_valid());
        assert_eq!(report.first_invalid, Some(2));
        assert_eq!(report.invalid, [false, false, true, false, true, false]);
    }

    #[test]
    fn validate_accepts_a_fully_filled_code() {
        let report = validate(&entry_from("123456"));
        assert!(report.is_valid());
        assert_eq!(report.first_invalid, None);
        assert_eq!(report.invalid, [false; CODE_LEN]);
    }

    #[test]
    fn join_concatenates_filled_slots_in_order() {
        assert_eq!(entry_from("123456").join(), "123456");
        assert_eq!(entry_from("1 3").join(), "13");
        assert_eq!(CodeEntry::default().join(), "");
    }

    #[test]
    fn slot_text_mirrors_the_slot_value() {
        let entry = entry_from("1");
        assert_eq!(entry.slot_text(0), "1");
        assert_eq!(entry.slot_text(1), "");
    }
}
