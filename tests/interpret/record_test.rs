#[cfg(test)]
mod tests {
    use ged_reader::interpret::{interpret_family, interpret_individual};
    use ged_reader::{Gender, Line, Name, Record, RecordGrouper, RecordKind};

    fn record(lines: &[&str]) -> Record {
        Record::from_lines(lines.iter().map(|raw| Line::parse(raw).unwrap()).collect())
    }

    #[test]
    fn test_inline_name() {
        let individual = interpret_individual(&record(&[
            "0 @1@ INDI",
            "1 NAME Robert Eugene/Williams/",
        ]));
        assert_eq!(individual.names, vec![Name::new("Robert Eugene", "Williams")]);
    }

    #[test]
    fn test_surname_only_name_is_kept() {
        let individual = interpret_individual(&record(&["0 @I1@ INDI", "1 NAME /Smith/"]));
        assert_eq!(individual.names, vec![Name::new("", "Smith")]);
    }

    #[test]
    fn test_empty_name_without_structure_is_dropped() {
        let individual = interpret_individual(&record(&["0 @I1@ INDI", "1 NAME //"]));
        assert!(individual.names.is_empty());
    }

    #[test]
    fn test_record_without_name_or_sex() {
        let individual = interpret_individual(&record(&["0 @I7@ INDI", "1 BIRT", "2 DATE 1900"]));
        assert_eq!(individual.id, "@I7@");
        assert!(individual.names.is_empty());
        assert_eq!(individual.gender, None);
    }

    #[test]
    fn test_last_sex_line_wins() {
        let individual =
            interpret_individual(&record(&["0 @I8@ INDI", "1 SEX M", "1 SEX F", "1 SEX X"]));
        assert_eq!(individual.gender, Some(Gender::Female));
    }

    #[test]
    fn test_family_and_children() {
        let (family, children) = interpret_family(&record(&[
            "0 @F1@ FAM",
            "1 HUSB @I1@",
            "1 WIFE @I2@",
            "1 CHIL @I3@",
        ]));

        assert_eq!(family.father_id.as_deref(), Some("@I1@"));
        assert_eq!(family.mother_id.as_deref(), Some("@I2@"));
        assert_eq!(family.child_ids, vec!["@I3@"]);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].family_id, "@F1@");
        assert_eq!(children[0].child_id, "@I3@");
        assert!(children[0].has_mother_relationship);
        assert!(children[0].has_father_relationship);
    }

    #[test]
    fn test_child_listed_before_parents() {
        let (_, children) = interpret_family(&record(&[
            "0 @F1@ FAM",
            "1 CHIL @I3@",
            "1 WIFE @I2@",
        ]));
        assert!(children[0].has_mother_relationship);
        assert!(!children[0].has_father_relationship);
    }

    #[test]
    fn test_record_kinds() {
        let kinds: Vec<RecordKind> = RecordGrouper::new([
            "0 HEAD",
            "0 @I1@ INDI",
            "0 @F1@ FAM",
            "0 @R1@ REPO",
        ])
        .map(|record| record.kind())
        .collect();

        assert_eq!(
            kinds,
            vec![
                RecordKind::Unrecognized("HEAD".to_string()),
                RecordKind::Individual,
                RecordKind::Family,
                RecordKind::Unrecognized("REPO".to_string()),
            ]
        );
    }
}
