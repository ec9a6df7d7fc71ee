//! Subfolder categories of a generated module.
//!
//! # Design
//!
//! The five built-in categories are unit variants; anything else read from
//! configuration becomes [`Subfolder::Custom`]. Custom folders get the
//! default suffix rule and an empty primary file.
//!
//! # Singularization
//!
//! File suffixes and export names drop one trailing `s` from the folder
//! name. That is only correct for the five built-in names; irregular plurals
//! in custom folders (`data`, `indices`) come out wrong and are left that way.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::casing::is_word_char;
use super::error::DomainError;
use super::module_name::ModuleName;

/// One subfolder of a module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Subfolder {
    Controllers,
    Middlewares,
    Routes,
    Services,
    Repositories,
    Custom(String),
}

impl Subfolder {
    /// The fixed default set, in output order.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::Controllers,
            Self::Middlewares,
            Self::Routes,
            Self::Services,
            Self::Repositories,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Controllers => "controllers",
            Self::Middlewares => "middlewares",
            Self::Routes => "routes",
            Self::Services => "services",
            Self::Repositories => "repositories",
            Self::Custom(name) => name,
        }
    }

    /// Folder name with one trailing `s` removed: `controllers` -> `controller`.
    pub fn singular(&self) -> &str {
        let name = self.as_str();
        name.strip_suffix('s').unwrap_or(name)
    }

    /// [`Self::singular`] with its first letter upper-cased: `Controller`.
    pub fn singular_pascal(&self) -> String {
        let mut chars = self.singular().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// File-name suffix (without extension) of this folder's primary file.
    pub fn suffix(&self) -> &str {
        match self {
            Self::Repositories => "repository",
            _ => self.singular(),
        }
    }

    /// `<lower>.<suffix>.ts`, e.g. `user.repository.ts`.
    pub fn primary_file_name(&self, module: &ModuleName) -> String {
        format!("{}.{}.ts", module.lower(), self.suffix())
    }
}

impl fmt::Display for Subfolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subfolder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "controllers" => Ok(Self::Controllers),
            "middlewares" => Ok(Self::Middlewares),
            "routes" => Ok(Self::Routes),
            "services" => Ok(Self::Services),
            "repositories" => Ok(Self::Repositories),
            "" => Err(DomainError::InvalidSubfolder {
                name: s.into(),
                reason: "name cannot be empty".into(),
            }),
            other if other.chars().all(|c| is_word_char(c) || c == '-') => {
                Ok(Self::Custom(other.to_string()))
            }
            other => Err(DomainError::InvalidSubfolder {
                name: other.into(),
                reason: "only letters, digits, underscores and hyphens are allowed".into(),
            }),
        }
    }
}

impl TryFrom<String> for Subfolder {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Subfolder> for String {
    fn from(folder: Subfolder) -> Self {
        folder.as_str().to_string()
    }
}

/// Parse a list of folder names, rejecting an empty list.
pub fn parse_subfolders<I, S>(names: I) -> Result<Vec<Subfolder>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let folders = names
        .into_iter()
        .map(|n| n.as_ref().parse())
        .collect::<Result<Vec<Subfolder>, _>>()?;

    if folders.is_empty() {
        return Err(DomainError::EmptySubfolderSet);
    }
    Ok(folders)
}
