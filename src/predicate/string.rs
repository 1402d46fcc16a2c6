//! String predicates
//!
//! All predicates here operate on `str`; lengths are counted in characters,
//! not bytes.

use super::combinators::Predicate;

/// Predicate that checks a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

/// Create a predicate that checks a string is not empty.
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks the character count is in an inclusive range.
#[derive(Clone, Copy, Debug)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl Predicate<str> for LenBetween {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let len = value.chars().count();
        len >= self.min && len <= self.max
    }
}

/// Create a predicate that checks string length is between min and max (inclusive).
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// let p = len_between(3, 5);
/// assert!(!p.check("ab"));
/// assert!(p.check("abc"));
/// assert!(p.check("héllo"));
/// assert!(!p.check("toolong"));
/// ```
pub fn len_between(min: usize, max: usize) -> LenBetween {
    LenBetween { min, max }
}

/// Create a predicate that checks string length is at least min.
pub fn len_min(min: usize) -> LenBetween {
    LenBetween {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate that checks string length is at most max.
pub fn len_max(max: usize) -> LenBetween {
    LenBetween { min: 0, max }
}

/// Predicate that checks a string starts with a prefix.
#[derive(Clone, Debug)]
pub struct StartsWith<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for StartsWith<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.starts_with(self.0.as_ref())
    }
}

/// Create a predicate that checks a string starts with `prefix`.
pub fn starts_with<S: AsRef<str> + Send + Sync>(prefix: S) -> StartsWith<S> {
    StartsWith(prefix)
}

/// Predicate that checks a string ends with a suffix.
#[derive(Clone, Debug)]
pub struct EndsWith<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for EndsWith<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.ends_with(self.0.as_ref())
    }
}

/// Create a predicate that checks a string ends with `suffix`.
pub fn ends_with<S: AsRef<str> + Send + Sync>(suffix: S) -> EndsWith<S> {
    EndsWith(suffix)
}

/// Predicate that checks a string contains a substring.
#[derive(Clone, Debug)]
pub struct Contains<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for Contains<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.contains(self.0.as_ref())
    }
}

/// Create a predicate that checks a string contains `needle`.
pub fn contains<S: AsRef<str> + Send + Sync>(needle: S) -> Contains<S> {
    Contains(needle)
}

/// Predicate that checks every character satisfies `F`.
///
/// Vacuously true for the empty string; pair with [`not_empty`] when that matters.
#[derive(Clone, Copy, Debug)]
pub struct AllChars<F>(pub F);

impl<F: Fn(char) -> bool + Send + Sync> Predicate<str> for AllChars<F> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().all(&self.0)
    }
}

/// Create a predicate that checks every character satisfies `f`.
pub fn all_chars<F: Fn(char) -> bool + Send + Sync>(f: F) -> AllChars<F> {
    AllChars(f)
}

/// Every character is alphabetic (Unicode).
///
/// ```rust
/// use fieldwise::predicate::*;
///
/// assert!(is_alphabetic().check("Krishna"));
/// assert!(!is_alphabetic().check("Krishna123"));
/// ```
pub fn is_alphabetic() -> AllChars<fn(char) -> bool> {
    AllChars(char::is_alphabetic)
}

/// Every character is alphanumeric (Unicode).
pub fn is_alphanumeric() -> AllChars<fn(char) -> bool> {
    AllChars(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(not_empty().check("a"));
        assert!(!not_empty().check(""));
    }

    #[test]
    fn test_len_counts_chars() {
        assert!(len_max(4).check("ñañá"));
        assert!(!len_max(3).check("ñañá"));
        assert!(len_min(2).check("ab"));
        assert!(!len_min(2).check("a"));
    }

    #[test]
    fn test_affixes() {
        assert!(starts_with("http").check("https://example.com"));
        assert!(ends_with(".rs").check("main.rs"));
        assert!(contains("@").check("a@b.io"));
        assert!(!contains("@").check("ab.io"));
    }

    #[test]
    fn test_char_classes() {
        assert!(is_alphabetic().check("Zoë"));
        assert!(!is_alphabetic().check("Zoe 2"));
        assert!(is_alphanumeric().check("abc123"));
        assert!(!is_alphanumeric().check("abc-123"));
        assert!(all_chars(|c: char| c.is_ascii_digit()).check(""));
    }
}
