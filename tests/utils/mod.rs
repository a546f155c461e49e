use std::collections::BTreeMap;

use ged_reader::{Child, Family, Graph, Individual};

/// A small but complete GEDCOM document
pub const SAMPLE_DOCUMENT: &str = "\u{FEFF}0 HEAD
1 SOUR test
1 GEDC
2 VERS 5.5.1
0 @I1@ INDI
1 NAME Robert Eugene/Williams/
1 SEX M
1 BIRT
2 DATE 02 OCT 1822
1 FAMS @F1@
0 @I2@ INDI
1 NAME //
2 GIVN Mary Ann
2 SURN Wilson
1 SEX F
1 FAMS @F1@
0 @I3@ INDI
1 NAME Joe /Williams/
1 FAMC @F1@
0 @F1@ FAM
1 HUSB @I1@
1 WIFE @I2@
1 CHIL @I3@
1 MARR
2 DATE DEC 1859
0 @F2@ FAM
1 HUSB @I1@
1 WIFE @I2@
1 CHIL @I3@
1 CHIL @I404@
0 @S1@ SOUR
1 TITL Parish register
0 TRLR
";

/// Lines of `SAMPLE_DOCUMENT`
#[must_use]
pub fn sample_lines() -> Vec<String> {
    SAMPLE_DOCUMENT.lines().map(str::to_string).collect()
}

/// Individuals keyed by id
#[must_use]
pub fn individuals_by_id(graph: &Graph) -> BTreeMap<String, Individual> {
    graph
        .individuals
        .iter()
        .map(|individual| (individual.id.clone(), individual.clone()))
        .collect()
}

/// Families keyed by id
#[must_use]
pub fn families_by_id(graph: &Graph) -> BTreeMap<String, Family> {
    graph
        .families
        .iter()
        .map(|family| (family.id.clone(), family.clone()))
        .collect()
}

/// Child relationships in a canonical order
#[must_use]
pub fn sorted_children(graph: &Graph) -> Vec<Child> {
    let mut children = graph.children.clone();
    children.sort_by(|a, b| {
        (a.family_id.as_str(), a.child_id.as_str()).cmp(&(b.family_id.as_str(), b.child_id.as_str()))
    });
    children
}
