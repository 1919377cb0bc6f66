//! Canonical matching keys for station names.
//!
//! Users type station names in many shapes: `M.G. Road`, `mg road`,
//! `M G ROAD`. [`normalize_name`] folds all of them into one key so that the
//! registry, route queries and autocomplete agree on what "the same station"
//! means.

/// Maximum number of input characters considered when building a key.
///
/// Longer input is truncated rather than rejected.
pub const MAX_KEY_LEN: usize = 79;

/// Produce the canonical matching key for a raw station name.
///
/// The transformation is total and deterministic:
///
/// 1. keep alphanumeric characters and whitespace only;
/// 2. collapse whitespace runs to a single space and trim both ends;
/// 3. fuse adjacent single-letter tokens pairwise, left to right and
///    non-overlapping (`m g road` becomes `mg road`, `a b c` becomes `ab c`);
/// 4. lowercase.
pub fn normalize_name(raw: &str) -> String {
    let filtered: String = raw
        .chars()
        .take(MAX_KEY_LEN)
        .filter(|c| is_key_char(*c))
        .collect();

    let tokens: Vec<&str> = filtered.split_whitespace().collect();
    let mut fused: Vec<String> = Vec::with_capacity(tokens.len());
    let mut index = 0;
    while index < tokens.len() {
        let current = tokens[index];
        match tokens.get(index + 1) {
            Some(next) if is_single_letter(current) && is_single_letter(next) => {
                fused.push(format!("{current}{next}"));
                index += 2;
            }
            _ => {
                fused.push(current.to_string());
                index += 1;
            }
        }
    }

    // Lowercasing can expand a character into a base letter plus a combining
    // mark; the mark is dropped so a second pass sees the same key.
    fused
        .join(" ")
        .to_lowercase()
        .chars()
        .filter(|c| is_key_char(*c))
        .take(MAX_KEY_LEN)
        .collect()
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace()
}

fn is_single_letter(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}
