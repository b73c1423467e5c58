// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    LineKind, UPDATE_MARKER, VarMap, classify, lines, parse_line, rewrite,
    rewrite_from_environment, rewrite_line,
};
use crate::core::env::EnvSnapshot;
use crate::error::ParseError;

fn env_strings(text: &str) -> Vec<String> {
    VarMap::parse(text).to_env_strings()
}

fn live_env(pairs: &[(&str, &str)]) -> VarMap {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// lines
// =============================================================================

#[test]
fn test_lines_splitting() {
    let cases: [(&str, &[&str]); 7] = [
        ("", &[]),
        ("A=B", &["A=B"]),
        ("A=B\nC=D", &["A=B", "C=D"]),
        ("A=B\nC=D\n", &["A=B", "C=D"]),
        ("A=B\r\nC=D\r\n", &["A=B", "C=D"]),
        ("A=B\n\nC=D", &["A=B", "", "C=D"]),
        ("\n", &[""]),
    ];

    for (text, expected) in cases {
        let got: Vec<&str> = lines(text).collect();
        assert_eq!(got, expected, "lines({text:?})");
    }
}

#[test]
fn test_lines_restartable() {
    let iter = lines("a\nb\nc");
    let first: Vec<_> = iter.clone().collect();
    let second: Vec<_> = iter.collect();
    assert_eq!(first, second);
}

// =============================================================================
// classify / parse_line
// =============================================================================

#[test]
fn test_classify_non_assignments() {
    assert_eq!(classify(""), LineKind::Blank);
    assert_eq!(classify("   \t"), LineKind::Blank);
    assert_eq!(classify("# comment"), LineKind::CommentOnly);
    assert_eq!(classify("#G=H"), LineKind::CommentOnly);
    assert_eq!(classify("  # indented=comment"), LineKind::CommentOnly);
    assert_eq!(classify("no delimiter"), LineKind::NotAssignment);
    assert_eq!(classify("=value"), LineKind::NotAssignment);
}

#[test]
fn test_parse_line_values() {
    let cases = [
        ("A=", "A", ""),
        ("A=B", "A", "B"),
        ("A=abc123=", "A", "abc123="),
        (r#"A="abc123=""#, "A", "abc123="),
        ("A=abc123 # comment", "A", "abc123"),
        ("A=a#b", "A", "a#b"),
        (r#"A="a # b" # note"#, "A", "a # b"),
        ("A='single # quoted'", "A", "single # quoted"),
        (r#"A='keeps \" as is'"#, "A", r#"keeps \" as is"#),
        ("  A = spaced  ", "A", "spaced"),
        ("export A=exported", "A", "exported"),
        ("exporter=value", "exporter", "value"),
        (r#"A={"type":"service_account"}"#, "A", r#"{"type":"service_account"}"#),
        (
            r#"A="{\"type\":\"service_account\"}""#,
            "A",
            r#"{"type":"service_account"}"#,
        ),
        (r#"A=""#, "A", r#"""#),
        (r#"A="""#, "A", ""),
    ];

    for (line, key, value) in cases {
        let assignment = parse_line(line).unwrap_or_else(|| panic!("{line:?} is an assignment"));
        assert_eq!(assignment.key(), key, "key of {line:?}");
        assert_eq!(assignment.value(), value, "value of {line:?}");
    }
}

#[test]
fn test_parse_line_comment() {
    let assignment = parse_line("GOOS=windows # target {update}").expect("assignment");
    assert_eq!(assignment.value(), "windows");
    assert_eq!(assignment.comment(), Some(" target {update}"));

    let assignment = parse_line(r#"A="x" #note"#).expect("assignment");
    assert_eq!(assignment.comment(), Some("note"));

    assert_eq!(parse_line("A=plain").expect("assignment").comment(), None);
    assert!(parse_line("# A=B").is_none());
}

// =============================================================================
// VarMap
// =============================================================================

#[test]
fn test_parse_config_text() {
    let cases: [(&str, &[&str]); 9] = [
        ("", &[]),
        ("A=", &["A="]),
        ("A=B", &["A=B"]),
        ("A=B\nC=D", &["A=B", "C=D"]),
        ("A=B\n# comment\nC=D", &["A=B", "C=D"]),
        ("A=abc123=", &["A=abc123="]),
        (r#"A="abc123=""#, &["A=abc123="]),
        ("A=abc123 # comment", &["A=abc123"]),
        ("A=B\n# comment\nC=D=\nE=\"=F\"\n#G=H", &["A=B", "C=D=", "E==F"]),
    ];

    for (text, expected) in cases {
        assert_eq!(env_strings(text), expected, "parse({text:?})");
    }
}

#[test]
fn test_parse_mixed_document() {
    let vars = VarMap::parse("A=B\n# comment\nC=D=\nE=\"=F\"\n#G=H");
    assert_eq!(vars.len(), 3);
    assert_eq!(vars.get("A"), Some("B"));
    assert_eq!(vars.get("C"), Some("D="));
    assert_eq!(vars.get("E"), Some("=F"));
    assert_eq!(vars.get("G"), None);
}

#[test]
fn test_parse_skips_noise_anywhere() {
    let vars = VarMap::parse("\n\n# a\nnot an assignment\n\nA=1\n  \n# b\nstray\n");
    assert_eq!(vars.to_env_strings(), ["A=1"]);
}

#[test]
fn test_duplicate_keys_last_wins() {
    let vars = VarMap::parse("A=1\nB=x\nA=2");
    assert_eq!(vars.get("A"), Some("2"));
    assert_eq!(vars.len(), 2);
}

#[test]
fn test_keys_are_case_sensitive() {
    let vars = VarMap::parse("path=lower\nPATH=upper");
    assert_eq!(vars.get("path"), Some("lower"));
    assert_eq!(vars.get("PATH"), Some("upper"));
}

#[test]
fn test_parse_strict_rejects_stray_lines() {
    assert_eq!(
        VarMap::parse_strict("A=1\n# ok\n\nB=2").map(|vars| vars.len()),
        Ok(2)
    );
    assert_eq!(
        VarMap::parse_strict("A=1\ncontinued"),
        Err(ParseError::MalformedEnvironment {
            line: 2,
            content: "continued".to_string(),
        })
    );
}

// =============================================================================
// rewrite_line
// =============================================================================

#[test]
fn test_rewrite_line_cases() {
    let cases = [
        ("GOOS=windows", "GOOS=windows"),
        (
            "GOOS=windows # GOOS is the target OS",
            "GOOS=windows # GOOS is the target OS",
        ),
        ("GOOS=windows # {update}", "GOOS='linux' # {update}"),
        (
            "GOOS=windows # GOOS is the target OS {update} it should be replaced with 'linux'",
            "GOOS='linux' # GOOS is the target OS {update} it should be replaced with 'linux'",
        ),
        ("GOOS='windows' # {update}", "GOOS='linux' # {update}"),
        ("GOOS=\"windows\" #{update}", "GOOS='linux' #{update}"),
        ("GOOS='windows{update}'", "GOOS='windows{update}'"),
        ("GOOS=windows{update} # plain", "GOOS=windows{update} # plain"),
    ];

    for (line, expected) in cases {
        assert_eq!(rewrite_line(line, "GOOS", "linux"), expected, "line {line:?}");
    }
}

#[test]
fn test_rewrite_line_requires_whole_key() {
    let line = "GOOS=windows # {update}";
    assert_eq!(rewrite_line(line, "GO", "x"), line);
    assert_eq!(rewrite_line("GOOS_X=1 # {update}", "GOOS", "x"), "GOOS_X=1 # {update}");
    assert_eq!(rewrite_line("GOOS = a # {update}", "GOOS", "b"), "GOOS='b' # {update}");
}

#[test]
fn test_rewrite_line_every_key_order_agrees() {
    let line = "GOOS=windows # {update}";
    let env = [("GO", "a"), ("GOOS", "linux"), ("GOOSE", "b")];

    let forward = env
        .iter()
        .fold(line.to_string(), |acc, (k, v)| rewrite_line(&acc, k, v).into_owned());
    let backward = env
        .iter()
        .rev()
        .fold(line.to_string(), |acc, (k, v)| rewrite_line(&acc, k, v).into_owned());

    assert_eq!(forward, "GOOS='linux' # {update}");
    assert_eq!(forward, backward);
}

// =============================================================================
// rewrite
// =============================================================================

#[test]
fn test_rewrite_round_trip() {
    let outcome = rewrite(
        "GOOS=windows # {update}\nGOARCH=amd64\n",
        &live_env(&[("GOOS", "linux"), ("HOME", "/root")]),
    );

    assert_eq!(outcome.text(), "GOOS='linux' # {update}\nGOARCH=amd64\n");
    assert_eq!(outcome.updated(), ["GOOS"]);
    assert!(outcome.is_changed());
}

#[test]
fn test_rewrite_without_markers_is_identity() {
    let text = "GOOS=windows\nGOARCH=amd64\n";
    let outcome = rewrite(text, &live_env(&[("GOOS", "linux")]));
    assert_eq!(outcome.text(), text);
    assert!(!outcome.is_changed());
}

#[test]
fn test_rewrite_unrelated_environment_normalizes_newlines() {
    let outcome = rewrite(
        "A=1 # {update}\n\n# note\nB=2",
        &live_env(&[("OTHER", "x")]),
    );
    assert_eq!(outcome.text(), "A=1 # {update}\n\n# note\nB=2\n");
    assert!(outcome.updated().is_empty());
}

#[test]
fn test_rewrite_marker_in_value_ignored() {
    let outcome = rewrite("GOOS='windows{update}'", &live_env(&[("GOOS", "linux")]));
    assert_eq!(outcome.text(), "GOOS='windows{update}'\n");
}

#[test]
fn test_rewrite_reports_only_changed_lines() {
    let outcome = rewrite(
        "GOOS='linux' # {update}\n",
        &live_env(&[("GOOS", "linux")]),
    );
    assert_eq!(outcome.text(), "GOOS='linux' # {update}\n");
    assert!(!outcome.is_changed());

    let outcome = rewrite("GOOS=linux # {update}\n", &live_env(&[("GOOS", "linux")]));
    assert_eq!(outcome.text(), "GOOS='linux' # {update}\n");
    assert!(outcome.is_changed());
}

#[test]
fn test_rewrite_is_idempotent() {
    let env = live_env(&[("GOOS", "linux"), ("TOKEN", "a=b")]);
    let once = rewrite("GOOS=windows # {update}\nTOKEN=x # {update}\nKEEP=1\n", &env);
    let twice = rewrite(once.text(), &env);
    assert_eq!(once.text(), twice.text());
    assert_eq!(
        VarMap::parse(twice.text()).to_env_strings(),
        ["GOOS=linux", "KEEP=1", "TOKEN=a=b"]
    );
}

#[test]
fn test_rewrite_only_marked_duplicate_changes() {
    let outcome = rewrite(
        "A=1\nA=2 # {update}\n",
        &live_env(&[("A", "3")]),
    );
    assert_eq!(outcome.text(), "A=1\nA='3' # {update}\n");
}

#[test]
fn test_rewrite_skips_indented_marked_line() {
    let text = "  GOOS=windows # {update}\n";
    assert_eq!(env_strings(text), ["GOOS=windows"]);

    let outcome = rewrite(text, &live_env(&[("GOOS", "linux")]));
    assert_eq!(outcome.text(), text);
    assert!(!outcome.is_changed());
}

#[test]
fn test_update_marker_literal() {
    assert_eq!(UPDATE_MARKER, "{update}");
}

// =============================================================================
// rewrite_from_environment
// =============================================================================

#[test]
fn test_rewrite_from_environment_snapshot() {
    let snapshot = EnvSnapshot::from_pairs([("GOOS", "linux"), ("URL", "a=b=c")]);
    let outcome = rewrite_from_environment(
        "GOOS=windows # {update}\nURL=old # {update}\n",
        &snapshot,
    )
    .expect("environment decodes");

    assert_eq!(
        outcome.text(),
        "GOOS='linux' # {update}\nURL='a=b=c' # {update}\n"
    );
    assert_eq!(outcome.updated(), ["GOOS", "URL"]);
}

#[test]
fn test_rewrite_from_environment_malformed() {
    let snapshot = EnvSnapshot::from_pairs([("OK", "1"), ("MULTI", "line one\nline two")]);
    let err = rewrite_from_environment("OK=0 # {update}\n", &snapshot)
        .expect_err("multi-line value cannot be decoded");

    assert_eq!(
        err,
        ParseError::MalformedEnvironment {
            line: 3,
            content: "line two".to_string(),
        }
    );
}
