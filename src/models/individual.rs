//! Individual entity model
//!
//! An Individual is one `INDI` record: its id, the names it was recorded
//! under and its gender.

use serde::{Deserialize, Serialize};

/// Gender of an individual as recorded by the `SEX` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    /// `SEX M`
    Male,
    /// `SEX F`
    Female,
}

impl Gender {
    /// Map a `SEX` value to a gender; any value other than `M` or `F` is unknown
    #[must_use]
    pub fn from_sex_value(value: &str) -> Option<Self> {
        match value {
            "M" => Some(Self::Male),
            "F" => Some(Self::Female),
            _ => None,
        }
    }
}

/// One recorded name of an individual
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Name {
    /// Given name(s)
    pub given_name: String,
    /// Family name
    pub surname: String,
}

impl Name {
    /// Create a name from its parts
    #[must_use]
    pub fn new(given_name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            given_name: given_name.into(),
            surname: surname.into(),
        }
    }

    /// A name with neither a given name nor a surname carries no information
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.given_name.is_empty() && self.surname.is_empty()
    }
}

/// A person
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Individual {
    /// Cross-reference id, e.g. `@I1@`
    pub id: String,
    /// Names in record order
    pub names: Vec<Name>,
    /// Gender, if recorded as `M` or `F`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gender: Option<Gender>,
}

impl Individual {
    /// Create an individual with no names and unknown gender
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            names: Vec::new(),
            gender: None,
        }
    }

    /// Add a name, ignoring names with no content
    pub fn add_name(&mut self, name: Name) {
        if !name.is_empty() {
            self.names.push(name);
        }
    }
}
