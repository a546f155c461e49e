#[cfg(test)]
mod tests {
    use ged_reader::{Gender, GedcomError, Name, PruneConfig, parse_document};

    use crate::utils::{families_by_id, individuals_by_id, sample_lines, sorted_children};

    #[test]
    fn test_sample_document() {
        let report = parse_document("sample.ged", sample_lines(), &PruneConfig::default());

        assert!(report.is_clean());
        assert_eq!(report.record_count, 8);
        assert_eq!(report.skipped_records, 3);

        let individuals = individuals_by_id(&report.graph);
        assert_eq!(individuals.len(), 3);
        assert_eq!(
            individuals["@I1@"].names,
            vec![Name::new("Robert Eugene", "Williams")]
        );
        assert_eq!(individuals["@I1@"].gender, Some(Gender::Male));
        assert_eq!(individuals["@I2@"].names, vec![Name::new("Mary Ann", "Wilson")]);
        assert_eq!(individuals["@I3@"].gender, None);

        let families = families_by_id(&report.graph);
        assert_eq!(families.len(), 1);
        let family = &families["@F1@"];
        assert_eq!(family.father_id.as_deref(), Some("@I1@"));
        assert_eq!(family.mother_id.as_deref(), Some("@I2@"));
        assert_eq!(family.child_ids, vec!["@I3@"]);
        assert_eq!(report.pruned.removed_family_ids, vec!["@F2@"]);

        let children = sorted_children(&report.graph);
        assert_eq!(children.len(), 3);
        assert!(children.iter().any(|child| child.family_id == "@F1@"
            && child.child_id == "@I3@"
            && child.has_mother_relationship
            && child.has_father_relationship));
    }

    #[test]
    fn test_malformed_line_only_skips_its_record() {
        let lines = [
            "0 @I1@ INDI",
            "1 NAME Ann /Lee/",
            "0 @I2@ INDI",
            "1 @N1@",
            "0 @I3@ INDI",
            "1 SEX F",
        ];

        let report = parse_document("broken.ged", lines, &PruneConfig::default());

        assert!(!report.is_clean());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].line_number, 4);
        assert!(matches!(
            report.failures[0].error,
            GedcomError::MissingTag { level: 1, .. }
        ));

        let individuals = individuals_by_id(&report.graph);
        assert_eq!(individuals.len(), 2);
        assert!(individuals.contains_key("@I1@"));
        assert!(individuals.contains_key("@I3@"));
    }

    #[test]
    fn test_broken_header_keeps_previous_record() {
        let lines = [
            "0 @I1@ INDI",
            "1 NAME Ann /Lee/",
            "0 @I2@",
            "1 SEX F",
            "0 @I3@ INDI",
        ];

        let report = parse_document("header.ged", lines, &PruneConfig::default());

        assert_eq!(report.record_count, 3);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].line_number, 3);
        assert!(matches!(
            report.failures[0].error,
            GedcomError::MissingTag { level: 0, .. }
        ));

        let individuals = individuals_by_id(&report.graph);
        assert_eq!(individuals.keys().collect::<Vec<_>>(), vec!["@I1@", "@I3@"]);
        assert_eq!(individuals["@I1@"].names, vec![Name::new("Ann", "Lee")]);
        assert_eq!(individuals["@I3@"].gender, None);
    }

    #[test]
    fn test_unreadable_level_keeps_previous_record() {
        let lines = [
            "0 @I1@ INDI",
            "1 NAME Ann /Lee/",
            "O @I2@ INDI",
            "1 SEX F",
            "0 @I3@ INDI",
        ];

        let report = parse_document("level.ged", lines, &PruneConfig::default());

        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            report.failures[0].error,
            GedcomError::MalformedLevel { .. }
        ));

        let individuals = individuals_by_id(&report.graph);
        assert_eq!(individuals.keys().collect::<Vec<_>>(), vec!["@I1@", "@I3@"]);
        assert_eq!(individuals["@I3@"].gender, None);
    }

    #[test]
    fn test_single_parent_family_depends_on_prune_config() {
        let lines = ["0 @I1@ INDI", "0 @I2@ INDI", "0 @F1@ FAM", "1 WIFE @I1@", "1 CHIL @I2@"];

        let strict = parse_document("strict.ged", lines, &PruneConfig::default());
        assert!(strict.graph.families.is_empty());

        let lenient = parse_document(
            "lenient.ged",
            lines,
            &PruneConfig {
                require_both_parents: false,
            },
        );
        assert_eq!(lenient.graph.families.len(), 1);
    }

    #[test]
    fn test_empty_document() {
        let lines: Vec<String> = Vec::new();
        let report = parse_document("empty.ged", lines, &PruneConfig::default());
        assert_eq!(report.record_count, 0);
        assert!(report.graph.is_empty());
    }
}
