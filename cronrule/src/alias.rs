//! Weekday and month names accepted in place of numbers.

/// Three-letter names and the number each one stands for. Weekdays count
/// from Sunday = 0, months from January = 1.
const ALIASES: [(&str, &str); 19] = [
    ("sun", "0"),
    ("mon", "1"),
    ("tue", "2"),
    ("wed", "3"),
    ("thu", "4"),
    ("fri", "5"),
    ("sat", "6"),
    ("jan", "1"),
    ("feb", "2"),
    ("mar", "3"),
    ("apr", "4"),
    ("may", "5"),
    ("jun", "6"),
    ("jul", "7"),
    ("aug", "8"),
    ("sep", "9"),
    ("oct", "10"),
    ("nov", "11"),
    ("dec", "12"),
];

/// Resolve a weekday or month name (case-insensitive) to its numeric string.
///
/// Anything that is not a known name comes back unchanged.
pub fn map_alias(token: &str) -> &str {
    ALIASES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map_or(token, |&(_, number)| number)
}
