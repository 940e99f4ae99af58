//! Passwords of the form `word-WORD-word-NN`.
//!
//! Three words are drawn uniformly, with replacement, from [`WORDLIST`]. The
//! first and third are lowercased, the second uppercased, and a number in
//! [`NUMBER_MIN`]`..=`[`NUMBER_MAX`] is appended. Not meant to be a strong or
//! unique secret.

mod source;
mod wordlist;

pub use source::RandomSource;
pub use wordlist::WORDLIST;

/// Joins the four components of a password.
pub const SEPARATOR: char = '-';

/// Smallest numeric suffix, always two digits.
pub const NUMBER_MIN: u8 = 10;

/// Largest numeric suffix.
pub const NUMBER_MAX: u8 = 99;

/// Generates a password using the thread local rng.
#[must_use]
pub fn generate_password() -> String {
    generate_password_with(&mut rand::rng())
}

/// Generates `count` independent passwords using the thread local rng.
///
/// Callers wanting a single password pass `1`, or use [`generate_password`].
#[must_use]
pub fn generate_multiple_passwords(count: usize) -> Vec<String> {
    generate_multiple_passwords_with(&mut rand::rng(), count)
}

pub fn generate_password_with<R: RandomSource + ?Sized>(source: &mut R) -> String {
    let first = pick_word(source).to_ascii_lowercase();
    let second = pick_word(source).to_ascii_uppercase();
    let third = pick_word(source).to_ascii_lowercase();
    let number = source.pick_in_range(NUMBER_MIN, NUMBER_MAX);

    let password = format!("{first}{SEPARATOR}{second}{SEPARATOR}{third}{SEPARATOR}{number}");

    log::trace!("Generated password of {} characters", password.len());

    password
}

/// Passwords are returned in generation order, a count of zero yields none.
pub fn generate_multiple_passwords_with<R: RandomSource + ?Sized>(
    source: &mut R,
    count: usize,
) -> Vec<String> {
    log::debug!("Generating {count} passwords");

    (0..count).map(|_| generate_password_with(source)).collect()
}

fn pick_word<R: RandomSource + ?Sized>(source: &mut R) -> &'static str {
    WORDLIST[source.pick_index(WORDLIST.len())]
}
