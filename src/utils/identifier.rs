//! Short-link identifier validation and generation.
//!
//! Every identifier, generated or user-supplied, is drawn from the same fixed
//! 62-character [`ALPHABET`]. Validation here is charset-only; the length
//! bounds for user-supplied paths live in [`crate::domain::form`].

use rand::rngs::ThreadRng;
use rand::{Rng, RngCore};

/// The fixed identifier alphabet: `A-Z`, `a-z`, `0-9`.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz1234567890";

/// Shortest identifier produced by [`IdentifierGenerator`].
pub const MIN_GENERATED_LENGTH: usize = 5;

/// Longest identifier produced by [`IdentifierGenerator`].
pub const MAX_GENERATED_LENGTH: usize = 8;

/// Bit `n` is set when the ASCII code point `n` belongs to [`ALPHABET`].
const ALPHABET_MASK: u128 = build_mask(ALPHABET);

const fn build_mask(chars: &[u8]) -> u128 {
    let mut mask = 0u128;
    let mut i = 0;
    while i < chars.len() {
        mask |= 1u128 << chars[i];
        i += 1;
    }
    mask
}

/// Returns true if `c` is a member of [`ALPHABET`].
#[inline]
pub fn is_alphabet_char(c: char) -> bool {
    let code = c as u32;
    code < 128 && ALPHABET_MASK & (1u128 << code) != 0
}

/// Checks that `candidate` consists only of [`ALPHABET`] characters.
///
/// Applies no length bound, so the empty string is accepted.
///
/// # Examples
///
/// ```
/// use url_shortener_client::utils::identifier::validate_characters;
///
/// assert!(validate_characters("abcXYZ123"));
/// assert!(validate_characters(""));
/// assert!(!validate_characters("my-link"));
/// ```
pub fn validate_characters(candidate: &str) -> bool {
    candidate.chars().all(is_alphabet_char)
}

/// Random identifier generator over [`ALPHABET`].
///
/// The entropy source is a type parameter so tests can plug in a seeded RNG.
/// Output is not cryptographically secure and carries no uniqueness
/// guarantee: callers must retry when the service reports a collision.
#[derive(Debug, Clone)]
pub struct IdentifierGenerator<R = ThreadRng> {
    rng: R,
}

impl IdentifierGenerator<ThreadRng> {
    /// Creates a generator backed by the thread-local RNG.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for IdentifierGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> IdentifierGenerator<R> {
    /// Creates a generator drawing from the given RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a fresh identifier.
    ///
    /// The length is uniform over
    /// `MIN_GENERATED_LENGTH..=MAX_GENERATED_LENGTH`; each character is
    /// sampled uniformly, with replacement.
    pub fn generate(&mut self) -> String {
        let length = self
            .rng
            .random_range(MIN_GENERATED_LENGTH..=MAX_GENERATED_LENGTH);

        (0..length)
            .map(|_| ALPHABET[self.rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Generates an identifier with the thread-local RNG.
pub fn generate_identifier() -> String {
    IdentifierGenerator::new().generate()
}
