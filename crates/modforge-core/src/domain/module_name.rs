//! The validated module name and its casing variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::casing::{is_word_char, to_camel_case, to_kebab_case, to_pascal_case};
use super::error::DomainError;

/// A module name matching `^[A-Za-z0-9_-]+$`.
///
/// Invariant: non-empty and restricted to word characters and hyphens.
/// Enforced at construction; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleName(String);

impl ModuleName {
    /// Validate and wrap a raw name.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        Self::validate(&raw)?;
        Ok(Self(raw))
    }

    /// Check a raw name without constructing it.
    ///
    /// Used by the interactive prompt to reject input inline.
    pub fn validate(raw: &str) -> Result<(), DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::EmptyModuleName);
        }

        let mut invalid: Vec<char> = Vec::new();
        for c in raw.chars().filter(|&c| !is_allowed(c)) {
            if !invalid.contains(&c) {
                invalid.push(c);
            }
        }
        if invalid.is_empty() {
            // `_` or `-` alone would leave an empty class and folder name.
            if !raw.chars().any(|c| c.is_ascii_alphanumeric()) {
                return Err(DomainError::NoAlphanumeric {
                    name: raw.to_string(),
                });
            }
            return Ok(());
        }

        Err(DomainError::InvalidModuleName {
            name: raw.to_string(),
            invalid: invalid
                .iter()
                .map(|c| format!("{c:?}"))
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `blog_post` -> `BlogPost`. Used for class names and the module folder.
    pub fn pascal(&self) -> String {
        to_pascal_case(&self.0)
    }

    /// `blog_post` -> `blogPost`.
    pub fn camel(&self) -> String {
        to_camel_case(&self.0)
    }

    /// `Blog_Post` -> `blog_post`. Used for file names, fields and the mount path.
    pub fn lower(&self) -> String {
        self.0.to_lowercase()
    }

    /// `BlogPost` -> `blog-post`.
    pub fn kebab(&self) -> String {
        to_kebab_case(&self.0)
    }
}

fn is_allowed(c: char) -> bool {
    is_word_char(c) || c == '-'
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ModuleName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ModuleName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModuleName> for String {
    fn from(name: ModuleName) -> Self {
        name.0
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
