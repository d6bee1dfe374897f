#![cfg(test)]

use crate::{
    diagnostics::DiagnosticSeverity,
    driver::{Driver, DriverConfig},
    index::{DeclKind, DeclarationTable, IndexConfig},
    source::{Pos, Range},
};
use std::{fs, path::PathBuf};

const SCENARIO: &str = "foo: THEORY BEGIN T: TYPE F: FORMULA TRUE END foo";

#[test]
fn test_scenario() {
    let result = Driver::default().index_text(SCENARIO);
    assert!(result.is_ok());

    let t = result.table.find("T").unwrap();
    assert_eq!(t.name, "T");
    assert_eq!(t.position, Pos::new(1, 18));
    assert_eq!(result.table.get(DeclKind::Type, "T"), Some(t));

    let f = result.table.find("F").unwrap();
    assert_eq!(result.table.get(DeclKind::Formula, "F"), Some(f));
    assert_eq!(f.source_text, "F: FORMULA TRUE");

    assert_eq!(result.table.find("Z"), None);
}

#[test]
fn test_every_identifier_of_a_declaration_is_found() {
    let text = "t: THEORY\nBEGIN\n  A, B, C: TYPE\nEND t";
    let result = Driver::default().index_text(text);

    for (name, character) in &[("A", 2), ("B", 5), ("C", 8)] {
        let descriptor = result.table.find(name).unwrap();
        assert_eq!(descriptor.name, *name);
        assert_eq!(descriptor.position, Pos::new(3, *character));
    }
}

#[test]
fn test_redeclaration_overwrites() {
    let text = "t: THEORY\nBEGIN\n  T: TYPE\n  T: TYPE = int\nEND t";
    let result = Driver::default().index_text(text);

    let t = result.table.find("T").unwrap();
    assert_eq!(t.position, Pos::new(4, 2));
    assert_eq!(t.source_text, "T: TYPE = int");
}

#[test]
fn test_type_wins_over_formula() {
    let text = "t: THEORY\nBEGIN\n  X: LEMMA TRUE\n  X: TYPE\nEND t";
    let result = Driver::default().index_text(text);

    assert_eq!(result.table.len(DeclKind::Formula), 1);
    assert_eq!(result.table.find("X").unwrap().source_text, "X: TYPE");
}

#[test]
fn test_syntax_error_skips_indexing() {
    let result = Driver::new(DriverConfig {
        dump: true,
        ..DriverConfig::default()
    })
    .index_text("foo: THEORY BEGIN T: TYPE F: FORMULA END foo");

    assert!(!result.diagnostics.is_empty());
    assert!(result.table.is_empty());
    assert!(result.dumps.is_empty());
    assert!(result
        .diagnostics
        .iter()
        .all(|d| d.severity == DiagnosticSeverity::Error));
}

#[test]
fn test_diagnostic_range_of_one_char_token() {
    let text = "t: THEORY\nBEGIN\n  F: LEMMA\nEND t";
    let diagnostics = Driver::default().parse_text("t: THEORY\nBEGIN\n  T: TYPE\n  F: LEMMA ) END t");
    assert_eq!(diagnostics.len(), 1);

    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.range.start, Pos::new(4, 11));
    assert_eq!(diagnostic.range.end, Pos::new(4, 12));
    assert_eq!(diagnostic.message, "no viable alternative at input ')'");

    // 複数文字のトークンは長さの分だけ伸びる。
    let diagnostics = Driver::default().parse_text(text);
    assert_eq!(diagnostics[0].range.start, Pos::new(4, 0));
    assert_eq!(diagnostics[0].range.end, Pos::new(4, 3));
}

#[test]
fn test_idempotence() {
    let driver = Driver::new(DriverConfig {
        dump: true,
        ..DriverConfig::default()
    });

    let first = driver.index_text(SCENARIO);
    let second = driver.index_text(SCENARIO);
    assert_eq!(first.diagnostics, second.diagnostics);
    assert_eq!(first.table, second.table);
    assert_eq!(first.dumps, second.dumps);

    let bad = "foo: THEORY BEGIN T TYPE END foo";
    assert_eq!(driver.parse_text(bad), driver.parse_text(bad));
}

#[test]
fn test_diagnostics_json() {
    let diagnostics = Driver::default().parse_text("t: THEORY BEGIN END");
    let json = serde_json::to_string(&diagnostics).unwrap();
    assert_eq!(
        json,
        r#"[{"range":{"start":{"line":1,"character":19},"end":{"line":1,"character":19}},"message":"mismatched input '<EOF>' expecting IDENTIFIER","severity":1}]"#
    );
}

#[test]
fn test_dump_lists_every_category() {
    let result = crate::driver::analyze(SCENARIO, IndexConfig { dump: true });
    assert_eq!(result.dumps.len(), 1);

    let dump = &result.dumps[0];
    assert!(dump.contains("1 type declarations\n"));
    assert!(dump.contains("1 formula declarations\n"));
    assert!(dump.contains("0 function declarations\n"));
    assert!(dump.contains("0 local bindings\n"));
    assert!(dump.contains("T 1:18 in 1.1-1.50 \"T: TYPE\"\n"));
}

fn tests_dir() -> PathBuf {
    let manifest_dir: &'static str = env!("CARGO_MANIFEST_DIR");
    let tests_dir = PathBuf::from(manifest_dir)
        .join("../tests")
        .canonicalize()
        .unwrap();
    assert_eq!(tests_dir.file_name().unwrap().to_str(), Some("tests"));
    tests_dir
}

fn pvs_files(dir: &str) -> Vec<PathBuf> {
    let mut files = fs::read_dir(tests_dir().join(dir))
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "pvs"))
        .collect::<Vec<_>>();
    files.sort();
    assert!(!files.is_empty(), "no tests in {}", dir);
    files
}

#[test]
fn test_valid_files() {
    let driver = Driver::default();
    let mut fail = vec![];

    for path in pvs_files("valid") {
        let result = driver.index(&path).unwrap();
        if !result.is_ok() || result.table.is_empty() {
            fail.push((path, result.diagnostics));
        }
    }

    if !fail.is_empty() {
        panic!("fails {:#?}", fail)
    }
}

#[test]
fn test_invalid_files() {
    let driver = Driver::default();

    for path in pvs_files("invalid") {
        let result = driver.index(&path).unwrap();
        assert!(!result.is_ok(), "{:?}", path);
        assert!(result.table.is_empty(), "{:?}", path);
    }
}

#[test]
fn test_fixture_declarations() {
    let result = Driver::default()
        .index(&tests_dir().join("valid/stacks.pvs"))
        .unwrap();
    let table = &result.table;

    assert_eq!(table.get(DeclKind::Type, "nonempty_stack").unwrap().position, Pos::new(5, 2));
    assert!(table.get(DeclKind::Function, "push").is_some());
    assert!(table.get(DeclKind::Formula, "top_push").is_some());
    assert!(table.get(DeclKind::LocalBinding, "s").is_some());

    // 理論の仮引数の型も型として記録される。
    assert_eq!(table.get(DeclKind::Type, "T").unwrap().position, Pos::new(2, 7));
}

/// 記録された宣言はすべて有効範囲を持ち、その位置は有効範囲に含まれる。
fn assert_positions_within_scopes(table: &DeclarationTable) {
    for &kind in DeclKind::PRIORITY.iter() {
        for (name, descriptor) in table.entries(kind) {
            let scope = match descriptor.scope {
                Some(scope) => scope,
                None => panic!("{} {} has no scope", kind, name),
            };
            assert!(
                scope.contains_loosely(descriptor.position),
                "{} {} at {} is out of {}",
                kind,
                name,
                descriptor.position,
                scope
            );
        }
    }
}

#[test]
fn test_fixture_positions_within_scopes() {
    let driver = Driver::default();

    for path in pvs_files("valid") {
        let result = driver.index(&path).unwrap();
        assert!(result.is_ok(), "{:?}", path);
        assert_positions_within_scopes(&result.table);
    }
}

#[test]
fn test_scope_of_each_binding_construct() {
    let text = r#"t: THEORY
BEGIN
  stack: TYPE
  f(p: int): int = LET q = p IN q
  nonempty: TYPE = { s: stack | TRUE }
  ax: AXIOM FORALL (r: int): r = r
END t"#;
    let result = Driver::default().index_text(text);
    assert!(result.is_ok(), "{:?}", result.diagnostics);
    assert_positions_within_scopes(&result.table);

    let scope_of = |name: &str| {
        result
            .table
            .get(DeclKind::LocalBinding, name)
            .and_then(|descriptor| descriptor.scope)
    };
    let range = |l1, c1, l2, c2| Some(Range::new(Pos::new(l1, c1), Pos::new(l2, c2)));

    // 関数の引数は関数宣言全体、LET の束縛は LET 式で有効になる。
    assert_eq!(scope_of("p"), range(4, 2, 4, 33));
    assert_eq!(scope_of("q"), range(4, 19, 4, 33));
    assert_eq!(scope_of("s"), range(5, 19, 5, 38));
    assert_eq!(scope_of("r"), range(6, 12, 6, 34));

    // 理論直下の宣言は理論全体で有効になる。
    assert_eq!(
        result.table.get(DeclKind::Type, "stack").unwrap().scope,
        range(1, 0, 7, 5)
    );
}
