// config-shim: Remote configuration to environment launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigSource, ParameterEntry, SourceParams, vars_from_parameters};
use crate::logging::Verbosity;
use aws_config::{BehaviorVersion, Region, SdkConfig};

fn offline_sdk_config() -> SdkConfig {
    SdkConfig::builder()
        .region(Region::new("us-east-1"))
        .behavior_version(BehaviorVersion::latest())
        .build()
}

#[test]
fn test_vars_from_parameters_strips_path() {
    let entries = vec![
        ParameterEntry::new("/app/prod/DB_HOST", "db.internal"),
        ParameterEntry::new("/app/prod/DB_PASS", "s3cret"),
    ];

    let vars = vars_from_parameters("/app/prod/", entries, Verbosity::Normal);
    assert_eq!(vars.to_env_strings(), ["DB_HOST=db.internal", "DB_PASS=s3cret"]);
}

#[test]
fn test_vars_from_parameters_skips_incomplete_entries() {
    let entries = vec![
        ParameterEntry {
            name: None,
            value: Some("orphan".to_string()),
        },
        ParameterEntry {
            name: Some("/app/EMPTY".to_string()),
            value: None,
        },
        ParameterEntry::new("/app/KEEP", "1"),
    ];

    let vars = vars_from_parameters("/app/", entries, Verbosity::Debug);
    assert_eq!(vars.len(), 1);
    assert_eq!(vars.get("KEEP"), Some("1"));
}

#[test]
fn test_vars_from_parameters_foreign_prefix_kept_whole() {
    let entries = vec![ParameterEntry::new("/other/NAME", "v")];
    let vars = vars_from_parameters("/app/", entries, Verbosity::Verbose);
    assert_eq!(vars.get("/other/NAME"), Some("v"));
}

#[test]
fn test_vars_from_parameters_value_with_equals() {
    let entries = vec![ParameterEntry::new("/app/URL", "a=b&c=d")];
    let vars = vars_from_parameters("/app/", entries, Verbosity::Normal);
    assert_eq!(vars.to_env_strings(), ["URL=a=b&c=d"]);
}

#[test]
fn test_source_params_display() {
    let appconfig = SourceParams::AppConfig {
        application: "web".to_string(),
        environment: "prod".to_string(),
        profile: "env".to_string(),
        strategy: None,
    };
    insta::assert_snapshot!(appconfig.to_string(), @r#"AppConfig app "web", env "prod", config profile "env""#);

    let parameter_store = SourceParams::ParameterStore {
        path: "/app/".to_string(),
    };
    insta::assert_snapshot!(parameter_store.to_string(), @r#"Parameter Store path "/app/""#);
}

#[test]
fn test_config_source_from_params() {
    let sdk_config = offline_sdk_config();

    let source = ConfigSource::from_params(
        SourceParams::AppConfig {
            application: "web".to_string(),
            environment: "prod".to_string(),
            profile: "env".to_string(),
            strategy: Some("AllAtOnce".to_string()),
        },
        &sdk_config,
    );
    match source {
        ConfigSource::AppConfig(store) => {
            assert_eq!(store.application(), "web");
            assert_eq!(store.environment(), "prod");
            assert_eq!(store.profile(), "env");
            assert_eq!(store.strategy(), Some("AllAtOnce"));
        }
        ConfigSource::ParameterStore(_) => panic!("expected AppConfig source"),
    }

    let source = ConfigSource::from_params(
        SourceParams::ParameterStore {
            path: "/app/".to_string(),
        },
        &sdk_config,
    );
    match source {
        ConfigSource::ParameterStore(store) => assert_eq!(store.path(), "/app/"),
        ConfigSource::AppConfig(_) => panic!("expected Parameter Store source"),
    }
}
