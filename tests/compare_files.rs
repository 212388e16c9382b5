//! End-to-end comparisons of the source files under `tests/fixtures`

use codesim::codesim::location::Position;
use codesim::codesim::processor::{compare_files, parse_file, ProcessingError};
use codesim::codesim::similarity::{RowKind, Verdict};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_identical_files_score_100() {
    let report = compare_files(fixture("counter.java"), fixture("counter.java"))
        .expect("fixtures to parse");

    assert_eq!(report.percentage(), 100);
    assert_eq!(report.similarity(), 1.0);
    assert_eq!(report.verdict(0.7), Verdict::Identical);
}

#[test]
fn test_added_statement_is_a_near_duplicate() {
    let extra = compare_files(fixture("counter.java"), fixture("counter_extra.java"))
        .expect("fixtures to parse");
    let unrelated = compare_files(fixture("counter.java"), fixture("unrelated.java"))
        .expect("fixtures to parse");

    assert!(extra.percentage() < 100);
    assert!(extra.similarity() > unrelated.similarity());
    assert_eq!(extra.verdict(0.7), Verdict::NearDuplicate);

    let inserted: Vec<String> = extra
        .rows()
        .into_iter()
        .filter(|row| row.kind == RowKind::Inserted)
        .map(|row| row.right)
        .collect();
    assert_eq!(inserted, vec!["steps = steps + 1"]);
}

#[test]
fn test_comparison_is_symmetric() {
    let forward = compare_files(fixture("counter.java"), fixture("unrelated.java"))
        .expect("fixtures to parse");
    let backward = compare_files(fixture("unrelated.java"), fixture("counter.java"))
        .expect("fixtures to parse");

    assert_eq!(forward.root().matched, backward.root().matched);
    assert_eq!(forward.root().total, backward.root().total);
}

#[test]
fn test_every_fixture_parses() {
    for name in ["counter.java", "counter_extra.java", "unrelated.java"] {
        let tree = parse_file(fixture(name)).expect("fixture to parse");
        assert!(!tree.is_empty(), "{name} parsed to nothing");
    }
}

#[test]
fn test_broken_file_reports_where_parsing_stopped() {
    let error = parse_file(fixture("broken.java")).expect_err("dangling assignment");
    let ProcessingError::Parse { path, source } = &error else {
        panic!("expected a parse error, got {error:?}");
    };

    assert!(path.ends_with("broken.java"));
    assert_eq!(source.position(), Position::new(1, 4));
    assert_eq!(source.offset(), 15);
}

#[test]
fn test_missing_file() {
    let error = compare_files(fixture("counter.java"), fixture("missing.java"))
        .expect_err("missing file");
    assert!(matches!(error, ProcessingError::Io { .. }));
}
