//! Interned identifiers for diagram nodes, clusters and participants.
//!
//! Builders refer to the same node many times (once when declaring it and
//! once per edge), so identifiers are interned: an [`Id`] is a `Copy` symbol
//! and comparing two of them never touches the string data.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Process-wide interner backing every [`Id`].
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Identifier of a diagram element.
///
/// # Examples
///
/// ```
/// use livevue_diagrams_core::identifier::Id;
///
/// let browser = Id::new("Browser");
/// assert_eq!(browser, Id::new("Browser"));
/// assert_eq!(browser, "Browser");
/// assert!(browser.is_bare());
/// assert!(!Id::new("Phoenix LiveView").is_bare());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Interns `name` and returns its identifier.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Runs `f` against the interned string of this identifier.
    pub fn with_str<R>(self, f: impl FnOnce(&str) -> R) -> R {
        let interner = interner();
        let value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        f(value)
    }

    /// Whether the identifier can be written as-is in Mermaid source.
    ///
    /// Bare identifiers are non-empty and consist of ASCII letters, digits
    /// and underscores, not starting with a digit.
    pub fn is_bare(self) -> bool {
        self.with_str(|value| {
            let mut chars = value.chars();
            match chars.next() {
                Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
                }
                _ => false,
            }
        })
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_str(|value| f.write_str(value))
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self.with_str(|value| value == other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
