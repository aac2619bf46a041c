//! Tag labels attached to every log line.

use std::fmt;

use crate::error::ValidationError;

/// A non-empty tag label identifying the origin of a log message.
///
/// The facade that feeds a print strategy decides what a tag means (a module
/// name, a subsystem, a class); this type only enforces that it is not empty.
///
/// # Examples
///
/// ```
/// use mainprint::Tag;
///
/// let tag = Tag::new("net").unwrap();
/// assert_eq!(tag.as_str(), "net");
///
/// assert!(Tag::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    /// Creates a tag from a non-empty string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyTag` if the string is empty.
    pub fn new(tag: impl Into<String>) -> Result<Self, ValidationError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(ValidationError::EmptyTag);
        }
        Ok(Self(tag))
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
