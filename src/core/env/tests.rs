// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use super::{Env, EnvSnapshot};
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar");

    assert_eq!(env.get("FOO"), Some(OsStr::new("bar")));
    assert_eq!(env.get("foo"), None, "keys are case-sensitive");
    assert_eq!(env.get("NOTEXIST"), None);

    env.remove("FOO");
    assert!(env.is_empty());
}

#[test]
fn test_extend_assignments_overrides_inherited() {
    let mut map = BTreeMap::new();
    map.insert(OsString::from("PATH"), OsString::from("/usr/bin"));
    map.insert(OsString::from("GOOS"), OsString::from("windows"));
    let mut env = Env::from_map(map);

    env.extend_assignments(["GOOS=linux", "TOKEN=a=b=", "broken", "=nokey"]);

    insta::assert_snapshot!(env.to_listing(), @r"
    GOOS=linux
    PATH=/usr/bin
    TOKEN=a=b=
    ");
}

#[cfg(unix)]
#[test]
fn test_non_unicode_values_are_kept_raw() {
    use std::os::unix::ffi::OsStrExt;

    let mut env = Env::new();
    env.set("RAW", OsStr::from_bytes(b"a\xffb"));
    env.extend_assignments(["NAME=shim"]);

    assert_eq!(env.get("RAW").map(OsStr::as_bytes), Some(&b"a\xffb"[..]));
    assert_eq!(env.to_listing(), "NAME=shim\nRAW=a\u{fffd}b");
}

#[test]
fn test_inherit_contains_path() {
    // Behavioral test - PATH should exist
    let env = Env::inherit();
    assert!(
        env.get("PATH").is_some() || env.get("Path").is_some(),
        "PATH should exist in current environment"
    );
}

#[test]
fn test_snapshot_to_text() {
    let snapshot = EnvSnapshot::from_pairs([("GOOS", "linux"), ("EMPTY", ""), ("EQ", "a=b")]);
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot.to_text(), "GOOS=linux\nEMPTY=\nEQ=a=b\n");
}

#[test]
fn test_snapshot_capture_matches_process_env() {
    let snapshot = EnvSnapshot::capture().expect("test environment should be unicode");
    assert_eq!(snapshot.len(), std::env::vars_os().count());
}
