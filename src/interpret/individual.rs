//! Individual record interpretation
//!
//! Folds an `INDI` record into an [`Individual`]. Only level-1 `NAME` and
//! `SEX` lines are read; a `NAME` without an inline given name or surname
//! falls back to its `GIVN`/`SURN` sub-lines.

use crate::gedcom::line::Line;
use crate::gedcom::record::Record;
use crate::models::{Gender, Individual, Name};

const NAME_TAG: &str = "NAME";
const SEX_TAG: &str = "SEX";
const GIVEN_NAME_TAG: &str = "GIVN";
const SURNAME_TAG: &str = "SURN";

/// Interpret an `INDI` record
///
/// # Arguments
/// * `record` - A record whose first line has the `INDI` tag
///
/// # Returns
/// The individual, with empty names and unknown gender if the record has
/// no `NAME` or `SEX` lines
#[must_use]
pub fn interpret_individual(record: &Record) -> Individual {
    let lines = record.lines();
    let mut individual = Individual::new(record.xref_id().unwrap_or_default());

    for (index, line) in lines.iter().enumerate().skip(1) {
        if line.is_record_start() {
            break;
        }
        if line.level() != 1 {
            continue;
        }

        match line.tag() {
            NAME_TAG => individual.add_name(parse_name(line, &lines[index + 1..])),
            SEX_TAG => {
                if let Some(gender) = Gender::from_sex_value(line.value()) {
                    individual.gender = Some(gender);
                }
            }
            _ => {}
        }
    }

    individual
}

/// Parse a `NAME` line such as `Robert Eugene/Williams/`
///
/// When both the part before the first slash and the part between the
/// slashes are empty, the structured `GIVN`/`SURN` lines nested below the
/// name are used instead.
fn parse_name(line: &Line, following: &[Line]) -> Name {
    let mut parts = line.value().split('/');
    let given_name = parts.next().unwrap_or_default();
    let surname = parts.next().unwrap_or_default();

    if !given_name.is_empty() || !surname.is_empty() {
        return Name::new(given_name, surname);
    }

    let mut name = Name::default();
    for sub_line in following.iter().take_while(|sub_line| sub_line.level() >= 2) {
        match sub_line.tag() {
            GIVEN_NAME_TAG => name.given_name = sub_line.value().to_string(),
            SURNAME_TAG => name.surname = sub_line.value().to_string(),
            _ => {}
        }
    }
    name
}
