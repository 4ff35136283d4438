//! Donation amount selection: a row of mutually exclusive presets plus a
//! free-form custom field.

/// Parses the leading integer of `text` the way an HTML number input is read
/// by the page: leading whitespace and an optional sign are allowed, parsing
/// stops at the first non-digit, and text with no leading digits is not a
/// number (`None`). There is no upper bound; very long digit runs saturate.
pub fn parse_leading_int(text: &str) -> Option<i128> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].bytes().fold(0i128, |acc, b| {
        acc.saturating_mul(10).saturating_add(i128::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Accepts only strictly positive amounts. Values past `u64::MAX` saturate.
pub fn positive_amount(value: Option<i128>) -> Option<u64> {
    value
        .filter(|v| *v > 0)
        .map(|v| u64::try_from(v).unwrap_or(u64::MAX))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountSelection {
    presets: Vec<u64>,
    default_amount: u64,
    default_preset: Option<usize>,
    active_preset: Option<usize>,
    custom_text: String,
    /// Last amount picked from a preset or parsed from a non-empty custom entry.
    selected: Option<i128>,
}

impl AmountSelection {
    /// `default_amount` starts active when it is one of `presets`; otherwise no
    /// preset is highlighted but the amount is still preselected.
    pub fn new(presets: Vec<u64>, default_amount: u64) -> Self {
        let default_preset = presets.iter().position(|p| *p == default_amount);
        Self {
            presets,
            default_amount,
            default_preset,
            active_preset: default_preset,
            custom_text: String::new(),
            selected: Some(i128::from(default_amount)),
        }
    }

    pub fn presets(&self) -> &[u64] {
        &self.presets
    }

    pub fn active_preset(&self) -> Option<usize> {
        self.active_preset
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_preset == Some(index)
    }

    pub fn custom_text(&self) -> &str {
        &self.custom_text
    }

    /// Activates preset `index` (deactivating the others) and clears the
    /// custom field. Out-of-range indices are ignored.
    pub fn select_preset(&mut self, index: usize) {
        let Some(&value) = self.presets.get(index) else {
            return;
        };
        self.active_preset = Some(index);
        self.selected = Some(i128::from(value));
        self.custom_text.clear();
    }

    /// Mirrors the custom input. Non-empty text deactivates every preset and
    /// replaces the selected amount with its parsed value, even when that is
    /// not a number. Clearing the field keeps the previous selection.
    pub fn enter_custom(&mut self, text: &str) {
        self.custom_text = text.to_string();
        if !text.is_empty() {
            self.active_preset = None;
            self.selected = parse_leading_int(text);
        }
    }

    /// The amount a submission would use: the custom entry when present,
    /// otherwise the last selection. `None` means "not a number".
    pub fn effective(&self) -> Option<i128> {
        if self.custom_text.is_empty() {
            self.selected
        } else {
            parse_leading_int(&self.custom_text)
        }
    }

    /// Back to the state `new` produced.
    pub fn reset(&mut self) {
        self.active_preset = self.default_preset;
        self.selected = Some(i128::from(self.default_amount));
        self.custom_text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> AmountSelection {
        AmountSelection::new(vec![200, 600, 1000], 600)
    }

    #[test]
    fn parse_leading_int_reads_like_a_number_input() {
        assert_eq!(parse_leading_int("250"), Some(250));
        assert_eq!(parse_leading_int("  42"), Some(42));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("1.5"), Some(1));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(
            parse_leading_int("99999999999999999999999"),
            Some(99_999_999_999_999_999_999_999)
        );
        let huge = "9".repeat(60);
        assert_eq!(parse_leading_int(&huge), Some(i128::MAX));
        assert_eq!(parse_leading_int(&format!("-{huge}")), Some(-i128::MAX));
    }

    #[test]
    fn default_preset_starts_active() {
        let s = selection();
        assert_eq!(s.active_preset(), Some(1));
        assert_eq!(s.effective(), Some(600));
    }

    #[test]
    fn preset_then_custom_uses_custom_exclusively() {
        let mut s = selection();
        s.select_preset(2);
        assert!(s.is_active(2));
        s.enter_custom("350");
        assert_eq!(s.active_preset(), None);
        assert_eq!(s.effective(), Some(350));
    }

    #[test]
    fn custom_then_preset_clears_custom_field() {
        let mut s = selection();
        s.enter_custom("350");
        s.select_preset(0);
        assert_eq!(s.custom_text(), "");
        assert!(s.is_active(0));
        assert!(!s.is_active(1));
        assert_eq!(s.effective(), Some(200));
    }

    #[test]
    fn non_numeric_custom_is_not_a_number() {
        let mut s = selection();
        s.enter_custom("lots");
        assert_eq!(s.effective(), None);
        assert_eq!(positive_amount(s.effective()), None);
    }

    #[test]
    fn clearing_custom_keeps_last_parsed_value() {
        let mut s = selection();
        s.enter_custom("5");
        s.enter_custom("");
        assert_eq!(s.active_preset(), None);
        assert_eq!(s.effective(), Some(5));
    }

    #[test]
    fn out_of_range_preset_is_ignored() {
        let mut s = selection();
        s.select_preset(9);
        assert!(s.is_active(1));
        assert_eq!(s.effective(), Some(600));
    }

    #[test]
    fn reset_restores_default() {
        let mut s = selection();
        s.enter_custom("77");
        s.reset();
        assert_eq!(s, selection());
    }

    #[test]
    fn positive_amount_rejects_zero_and_negative() {
        assert_eq!(positive_amount(Some(0)), None);
        assert_eq!(positive_amount(Some(-3)), None);
        assert_eq!(positive_amount(Some(1)), Some(1));
    }

    #[test]
    fn large_amounts_are_not_capped_below_u64() {
        assert_eq!(
            positive_amount(parse_leading_int("10000000000000000000")),
            Some(10_000_000_000_000_000_000)
        );
        assert_eq!(positive_amount(parse_leading_int(&"9".repeat(40))), Some(u64::MAX));
    }

    #[test]
    fn preset_above_i64_keeps_its_value() {
        let mut s = AmountSelection::new(vec![600, u64::MAX], 600);
        s.select_preset(1);
        assert_eq!(positive_amount(s.effective()), Some(u64::MAX));
    }
}
