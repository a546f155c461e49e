#[cfg(test)]
mod tests {
    use ged_reader::{GedcomError, Line};

    const GEDCOM_LINES: [&str; 7] = [
        "0 HEAD",
        "0 @1@ INDI",
        "1 NAME Robert Eugene/Williams/",
        "1 SEX M",
        "1 BIRT",
        "2 DATE 02 OCT 1822",
        "1 FAMC @4@",
    ];

    #[test]
    fn test_line_level() {
        let expected = [0, 0, 1, 1, 1, 2, 1];
        for (raw, level) in GEDCOM_LINES.iter().zip(expected) {
            assert_eq!(Line::parse(raw).unwrap().level(), level, "line {raw:?}");
        }
    }

    #[test]
    fn test_line_xref_id() {
        let expected = [None, Some("@1@"), None, None, None, None, None];
        for (raw, xref_id) in GEDCOM_LINES.iter().zip(expected) {
            assert_eq!(Line::parse(raw).unwrap().xref_id(), xref_id, "line {raw:?}");
        }
    }

    #[test]
    fn test_line_tag() {
        let expected = ["HEAD", "INDI", "NAME", "SEX", "BIRT", "DATE", "FAMC"];
        for (raw, tag) in GEDCOM_LINES.iter().zip(expected) {
            assert_eq!(Line::parse(raw).unwrap().tag(), tag, "line {raw:?}");
        }
    }

    #[test]
    fn test_line_value() {
        let expected = ["", "", "Robert Eugene/Williams/", "M", "", "02 OCT 1822", "@4@"];
        for (raw, value) in GEDCOM_LINES.iter().zip(expected) {
            assert_eq!(Line::parse(raw).unwrap().value(), value, "line {raw:?}");
        }
    }

    #[test]
    fn test_serialized_line_tokenizes_to_same_fields() {
        let lines = GEDCOM_LINES
            .iter()
            .chain(&["0 @N1@ note Value with  two spaces / and @ signs", "3 _custom x"]);

        for raw in lines {
            let line = Line::parse(raw).unwrap();
            let reparsed = Line::parse(&line.to_gedcom()).unwrap();

            assert_eq!(reparsed.level(), line.level());
            assert_eq!(reparsed.xref_id(), line.xref_id());
            assert!(reparsed.tag().eq_ignore_ascii_case(line.tag()));
            assert_eq!(reparsed.value(), line.value());
        }
    }

    #[test]
    fn test_round_trip_text() {
        let line: Line = "0 @1@ INDI".parse().unwrap();
        assert_eq!(line.to_gedcom(), "0 @1@ INDI\n");
        assert_eq!(line.to_string(), "0 @1@ INDI");
    }

    #[test]
    fn test_malformed_lines() {
        let err = Line::parse("A HEAD").unwrap_err();
        assert!(matches!(err, GedcomError::MalformedLevel { .. }));
        assert!(err.starts_record());
        assert!(err.to_string().contains("A HEAD"));

        let err = Line::parse("1 @X@").unwrap_err();
        assert!(matches!(err, GedcomError::MissingTag { level: 1, .. }));
        assert!(!err.starts_record());

        let err = Line::parse("0 @X@").unwrap_err();
        assert!(err.starts_record());

        let err = Line::parse("+1 NAME John /Doe/").unwrap_err();
        assert!(matches!(err, GedcomError::MalformedLevel { .. }));
    }
}
