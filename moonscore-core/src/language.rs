//! Language codes used to select the language-fit axis.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// Case-insensitive language code such as `en` or `pt`.
///
/// Codes are stored lower-cased and trimmed so lookups against a city's
/// speaker table never depend on how the caller spelled the code.
///
/// # Examples
/// ```
/// use moonscore_core::LanguageCode;
///
/// let code = LanguageCode::new(" EN ");
/// assert_eq!(code.as_str(), "en");
/// assert_eq!(code, LanguageCode::new("en"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Normalise and wrap a language code.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_lowercase())
    }

    /// Return the normalised code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::new("en")
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LanguageCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}
