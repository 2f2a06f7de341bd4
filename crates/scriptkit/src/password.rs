//! Random password generation.

use rand::Rng;

use crate::error::{Error, Result};

/// Generate a password of `length` characters drawn uniformly and
/// independently, with replacement, from the characters of `alphabet`.
///
/// Selection uses the thread-local CSPRNG. A zero `length` yields an
/// empty string; an empty alphabet with nonzero `length` is an
/// [`Error::InvalidArgument`].
///
/// # Example
///
/// ```rust
/// use scriptkit::generate_password;
///
/// let password = generate_password("abcdef0123456789", 16)?;
/// assert_eq!(password.chars().count(), 16);
/// # Ok::<(), scriptkit::Error>(())
/// ```
pub fn generate_password(alphabet: &str, length: usize) -> Result<String> {
    if length == 0 {
        return Ok(String::new());
    }
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return Err(Error::invalid_arg("alphabet", "empty"));
    }
    let mut rng = rand::rng();
    Ok((0..length)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect())
}
