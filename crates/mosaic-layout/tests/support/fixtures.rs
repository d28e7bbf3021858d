//! Entry fixtures.

use mosaic_layout::Entry;

/// Build entries from featured flags. Ids are `e0`, `e1`, ...
pub fn entries_from_flags(flags: &[bool]) -> Vec<Entry> {
    flags
        .iter()
        .enumerate()
        .map(|(i, &featured)| {
            let id = format!("e{i}");
            if featured {
                Entry::featured(id)
            } else {
                Entry::normal(id)
            }
        })
        .collect()
}

/// Build entries from a pattern: `F` is featured, anything else is normal.
/// Ids are the letters `A`, `B`, `C`...
pub fn entries(pattern: &str) -> Vec<Entry> {
    pattern
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let id = ((b'A' + i as u8) as char).to_string();
            if c == 'F' {
                Entry::featured(id)
            } else {
                Entry::normal(id)
            }
        })
        .collect()
}

/// Ids of a packed sequence, in order.
pub fn ids<'a>(packed: impl IntoIterator<Item = &'a Entry>) -> Vec<&'a str> {
    packed.into_iter().map(|entry| entry.id.as_str()).collect()
}
