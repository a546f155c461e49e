//! GEDCOM line tokenizer
//!
//! A GEDCOM line carries up to four fields:
//!
//! ```text
//! level [xref_id] tag [value]
//! 0 @I1@ INDI
//! 1 NAME Robert Eugene/Williams/
//! 2 DATE 02 OCT 1822
//! ```
//!
//! Whether the second token is a cross-reference id or the tag is only known
//! after looking at it, so the tag and value boundaries are derived together.
//! All fields are parsed once when the line is constructed.

use std::fmt;

use crate::error::{GedcomError, Result};

/// Byte-order mark some tools write at the start of a document
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// One tokenized GEDCOM line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    level: u32,
    xref_id: Option<String>,
    tag: String,
    value: Option<String>,
}

impl Line {
    /// Tokenize a raw text line
    ///
    /// A trailing line terminator (`\n` or `\r\n`) is ignored. The value is
    /// kept verbatim, so dates and slash-delimited names retain their spaces.
    ///
    /// # Arguments
    /// * `raw` - The raw line text
    ///
    /// # Errors
    /// Returns `MalformedLevel` if the first token is not made of ASCII digits
    /// only (no sign) or overflows, or `MissingTag` if no tag token follows the level and
    /// optional cross-reference id.
    pub fn parse(raw: &str) -> Result<Self> {
        let text = raw.trim_end_matches(['\n', '\r']);

        let (level_token, rest) = text.split_once(' ').unwrap_or((text, ""));
        let level = level_token
            .bytes()
            .all(|b| b.is_ascii_digit())
            .then(|| level_token.parse::<u32>().ok())
            .flatten()
            .ok_or_else(|| GedcomError::MalformedLevel {
                line: text.to_string(),
            })?;

        let (xref_id, rest) = if rest.starts_with('@') {
            let (xref, after) = rest.split_once(' ').unwrap_or((rest, ""));
            (Some(xref.to_string()), after)
        } else {
            (None, rest)
        };

        let (tag, value) = rest.split_once(' ').unwrap_or((rest, ""));
        if tag.is_empty() {
            return Err(GedcomError::MissingTag {
                line: text.to_string(),
                level,
            });
        }

        Ok(Self {
            level,
            xref_id,
            tag: tag.to_string(),
            value: (!value.is_empty()).then(|| value.to_string()),
        })
    }

    /// Tokenize the first line of a document, dropping a leading byte-order mark
    ///
    /// # Errors
    /// Same as [`Line::parse`]
    pub fn parse_first(raw: &str) -> Result<Self> {
        Self::parse(raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw))
    }

    /// Nesting depth of the line
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Cross-reference id such as `@I1@`, if the line declares one
    #[must_use]
    pub fn xref_id(&self) -> Option<&str> {
        self.xref_id.as_deref()
    }

    /// Tag of the line, e.g. `INDI` or `NAME`
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Value of the line, or the empty string when there is none
    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    /// Whether the line carries a non-empty value
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Whether the line opens a new record
    #[must_use]
    pub const fn is_record_start(&self) -> bool {
        self.level == 0
    }

    /// Serialize the line back to GEDCOM text, including the trailing newline
    ///
    /// The tag is written upper-cased.
    #[must_use]
    pub fn to_gedcom(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(xref_id) = &self.xref_id {
            write!(f, " {xref_id}")?;
        }
        write!(f, " {}", self.tag.to_uppercase())?;
        if let Some(value) = &self.value {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Line {
    type Err = GedcomError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
