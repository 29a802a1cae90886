//! Building blocks for SQL literal text.

use rand::Rng;

/// ASCII letters, lowercase then uppercase.
pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Draw `length` letters uniformly from [`LETTERS`].
pub fn random_letters<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(LETTERS[rng.gen_range(0..LETTERS.len())]))
        .collect()
}

/// Render text as a single-quoted SQL string literal.
pub fn quote_string(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
