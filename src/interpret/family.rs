//! Family record interpretation
//!
//! Folds a `FAM` record into a [`Family`] and one [`Child`] per `CHIL`
//! line. `HUSB`, `WIFE` and `CHIL` are matched at any level of the record.

use crate::gedcom::record::Record;
use crate::models::{Child, Family};

const HUSBAND_TAG: &str = "HUSB";
const WIFE_TAG: &str = "WIFE";
const CHILD_TAG: &str = "CHIL";

/// Interpret a `FAM` record
///
/// Child relationships are derived once the whole record has been read, so
/// a `CHIL` line listed before `HUSB` or `WIFE` still gets both parent
/// relationships.
///
/// # Arguments
/// * `record` - A record whose first line has the `FAM` tag
///
/// # Returns
/// The family and its child relationships
#[must_use]
pub fn interpret_family(record: &Record) -> (Family, Vec<Child>) {
    let mut family = Family::new(record.xref_id().unwrap_or_default());

    for line in record.lines().iter().skip(1) {
        if line.is_record_start() {
            break;
        }
        if !line.has_value() {
            continue;
        }

        match line.tag() {
            HUSBAND_TAG => family.set_father(line.value()),
            WIFE_TAG => family.set_mother(line.value()),
            CHILD_TAG => family.add_child(line.value()),
            _ => {}
        }
    }

    let children = derive_children(&family);
    (family, children)
}

/// Build the child relationships of a family
#[must_use]
pub fn derive_children(family: &Family) -> Vec<Child> {
    let has_mother = family.has_mother();
    let has_father = family.has_father();

    family
        .child_ids
        .iter()
        .map(|child_id| Child {
            has_mother_relationship: has_mother,
            has_father_relationship: has_father,
            ..Child::new(family.id.clone(), child_id.clone())
        })
        .collect()
}
