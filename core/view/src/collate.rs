//! Locale-aware ordering of names.
use std::cmp::Ordering;

/// ASCII punctuation and symbols in root collation order.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Compare two strings the way a default locale collation orders them.
///
/// Strings are compared character by character in three passes:
///
/// 1. By character class (whitespace, then punctuation and symbols, then digits, then
///    everything else) and case-insensitive character value.
///    Punctuation follows the root collation order, so `_` sorts before `-` and `.`.
/// 2. By case, with lowercase sorting before uppercase.
/// 3. By code point, so distinct strings never compare equal.
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    let primary = left
        .chars()
        .map(primary_weight)
        .cmp(right.chars().map(primary_weight));
    primary
        .then_with(|| {
            left.chars()
                .map(char::is_uppercase)
                .cmp(right.chars().map(char::is_uppercase))
        })
        .then_with(|| left.cmp(right))
}

fn primary_weight(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        return (0, u32::from(c));
    }
    if !c.is_alphanumeric() {
        // Non-ASCII punctuation sorts after the known ASCII marks, by code point.
        let rank = match PUNCTUATION_ORDER.find(c) {
            Some(rank) => rank as u32,
            None => PUNCTUATION_ORDER.len() as u32 + u32::from(c),
        };
        return (1, rank);
    }
    let class = if c.is_numeric() { 2 } else { 3 };
    let folded = c.to_lowercase().next().unwrap_or(c);
    (class, u32::from(folded))
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::locale_compare;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|name| name.to_string()).collect();
        names.sort_by(|a, b| locale_compare(a, b));
        names
    }

    #[test]
    fn case_insensitive_first() {
        assert_eq!(sorted(&["b", "A", "a", "B"]), vec!["a", "A", "b", "B"]);
    }

    #[test]
    fn punctuation_and_digits_first() {
        assert_eq!(
            sorted(&["logs", "2024-logs", ".kibana", "_internal"]),
            vec!["_internal", ".kibana", "2024-logs", "logs"],
        );
    }

    #[test]
    fn punctuation_in_root_collation_order() {
        assert_eq!(
            sorted(&["logs.a", "logs-a", "logs_a", ".kibana", "_internal"]),
            vec!["_internal", ".kibana", "logs_a", "logs-a", "logs.a"],
        );
    }

    #[test]
    fn whitespace_before_punctuation() {
        assert_eq!(sorted(&["a_b", "a b", "a-b"]), vec!["a b", "a_b", "a-b"]);
    }

    #[test]
    fn prefixes_sort_first() {
        assert_eq!(sorted(&["logs-1", "logs"]), vec!["logs", "logs-1"]);
    }

    #[test]
    fn equal_only_when_identical() {
        assert_eq!(locale_compare("logs", "logs"), Ordering::Equal);
        assert_ne!(locale_compare("Logs", "logs"), Ordering::Equal);
    }
}
