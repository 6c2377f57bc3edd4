use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Minimum number of characters (after trimming) a startup idea must have.
pub const MIN_IDEA_CHARS: usize = 10;

/// A validated, trimmed free-text startup idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StartupIdea(String);

impl StartupIdea {
    /// Validate and trim a raw idea.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IdeaTooShort`] when the trimmed text has fewer than
    /// [`MIN_IDEA_CHARS`] characters.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        let length = trimmed.chars().count();
        if length < MIN_IDEA_CHARS {
            return Err(CoreError::IdeaTooShort {
                length,
                min: MIN_IDEA_CHARS,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StartupIdea {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StartupIdea> for String {
    fn from(value: StartupIdea) -> Self {
        value.0
    }
}

impl fmt::Display for StartupIdea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
