// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, ParseError, ProcessError, ShimError, ShimResult};

#[test]
fn test_malformed_environment_display() {
    let err = ParseError::MalformedEnvironment {
        line: 3,
        content: "continued value".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"malformed environment at line 3: 'continued value' is not a KEY=VALUE assignment"
    );
}

#[test]
fn test_missing_key_display_is_message_only() {
    let err = ConfigError::MissingKey {
        key: "appconfig.application".to_string(),
        message: "no application ID provided. Specify with --app flag".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "no application ID provided. Specify with --app flag"
    );
}

#[test]
fn test_shim_error_wraps_sub_errors() {
    let err: ShimError = ProcessError::MissingProgram.into();
    assert_eq!(
        err.to_string(),
        "process error: must specify program to execute"
    );
    assert!(matches!(err, ShimError::Process(_)));
}

#[test]
fn test_shim_error_size() {
    // Box<str> variants are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<ShimError>();
    assert!(size <= 24, "ShimError is {size} bytes, expected <= 24");
}

#[test]
fn test_shim_result_size() {
    let size = std::mem::size_of::<ShimResult<()>>();
    assert!(size <= 24, "ShimResult<()> is {size} bytes, expected <= 24");
}
