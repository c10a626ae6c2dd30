//! Book groups: the fixed split of the alphabet into output files.
//!
//! Each uppercase letter belongs to exactly one group, and the groups are
//! contiguous runs in alphabetical order, so a sequence sorted by key visits
//! every group at most once.

/// Letter ranges (inclusive) and the label of the book they go into.
pub const BOOK_GROUPS: [(char, char, &str); 5] = [
    ('A', 'E', "ABCDE"),
    ('F', 'J', "FGHIJ"),
    ('K', 'P', "KLMNOP"),
    ('Q', 'U', "QRSTU"),
    ('V', 'Z', "VWXYZ"),
];

/// Look up the book group label for a leading character.
///
/// Only `'A'..='Z'` are mapped. Lowercase, accented and non-letter
/// characters return `None`.
pub fn book_group(ch: char) -> Option<&'static str> {
    BOOK_GROUPS
        .iter()
        .find(|(first, last, _)| (*first..=*last).contains(&ch))
        .map(|(_, _, label)| *label)
}
