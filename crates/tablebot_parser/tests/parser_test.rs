use tablebot_core::{error_position, highlight_error_position};
use tablebot_error::SqlErrorKind;
use tablebot_parser::{StatementValidator, TablelandParser};

#[test]
fn normalization_canonicalizes_keywords() {
    let parser = TablelandParser::new();
    let normalized = parser
        .normalize("select id, name from healthbot_80001_1 where id = 1")
        .unwrap();

    assert_eq!(normalized.kind().to_string(), "read");
    assert_eq!(normalized.statements().len(), 1);
    assert_eq!(
        normalized.statements()[0],
        "SELECT id, name FROM healthbot_80001_1 WHERE id = 1"
    );
}

#[test]
fn syntax_errors_report_an_in_bounds_position() {
    let parser = TablelandParser::new();
    let statement = "SELECT * FROM WHERE id = 1";
    let err = parser.normalize(statement).unwrap_err();

    match err.kind() {
        SqlErrorKind::Syntax { position, .. } => {
            assert!(*position >= 1 && *position <= statement.chars().count());
        }
        other => panic!("expected a positional syntax error, got {other:?}"),
    }

    // The rendered diagnostic feeds straight into the highlighter.
    let diagnostic = err.diagnostic();
    assert!(diagnostic.starts_with("syntax error at position "));
    assert!(error_position(&diagnostic).is_some());
    let marked = highlight_error_position(&diagnostic, statement);
    assert_ne!(marked, statement);
}

#[test]
fn unterminated_input_still_yields_a_diagnostic() {
    let parser = TablelandParser::new();
    let statement = "SELECT * FROM t_1_1 WHERE";
    let err = parser.normalize(statement).unwrap_err();

    // Whether or not a position is recoverable, the failure must be a parse
    // diagnostic the user can read, never a panic.
    assert!(matches!(
        err.kind(),
        SqlErrorKind::Syntax { .. } | SqlErrorKind::Unparsable(_)
    ));
}

#[test]
fn read_validation_rejects_writes() {
    let parser = TablelandParser::new();
    let err = parser
        .validate_read("INSERT INTO healthbot_80001_1 VALUES (1)")
        .unwrap_err();
    assert!(matches!(err.kind(), SqlErrorKind::NotReadStatement));
}

#[test]
fn read_validation_rejects_malformed_table_names() {
    let parser = TablelandParser::new();
    let err = parser.validate_read("SELECT * FROM healthbot").unwrap_err();
    assert!(matches!(err.kind(), SqlErrorKind::InvalidTableName(_)));
}

#[test]
fn read_validation_rejects_unsupported_chains() {
    let parser = TablelandParser::new();
    let err = parser.validate_read("SELECT * FROM demo_2_1").unwrap_err();
    assert!(matches!(err.kind(), SqlErrorKind::UnsupportedChain(2)));
}

#[test]
fn read_validation_resolves_table_and_chain() {
    let parser = TablelandParser::new();
    let read = parser
        .validate_read("select * from my_cool_table_80001_7 limit 5")
        .unwrap();

    assert_eq!(read.table().prefix(), "my_cool_table");
    assert_eq!(read.table().chain_id(), 80001);
    assert_eq!(read.table().table_id(), 7);
    assert_eq!(read.chain().phrase(), "Polygon Mumbai");
    assert_eq!(
        read.statement(),
        "SELECT * FROM my_cool_table_80001_7 LIMIT 5"
    );
}
