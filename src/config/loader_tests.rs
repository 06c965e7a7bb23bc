//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the var on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

// ===== Paths =====

#[test]
fn default_config_path_contains_chatdeck_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("chatdeck") && path_str.ends_with("config.toml"),
        "Path should contain 'chatdeck' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_chatdeck_log() {
    let path = default_log_path();
    assert!(path.ends_with("chatdeck.log"), "got: {}", path.display());
}

// ===== load_config_file =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = write_temp_config(
        "chatdeck_test_config.toml",
        r#"
sidebar_expanded = false
thread_mode = "per-conversation"
data_file = "/tmp/chats.json"
mouse = false
log_file_path = "/tmp/chatdeck-test.log"
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.sidebar_expanded, Some(false));
    assert_eq!(config.thread_mode, Some(ThreadMode::PerConversation));
    assert_eq!(config.data_file, Some(PathBuf::from("/tmp/chats.json")));
    assert_eq!(config.mouse, Some(false));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/chatdeck-test.log"))
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = write_temp_config("chatdeck_test_invalid.toml", "this is not valid TOML ][}{");

    let result = load_config_file(&config_path);

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = write_temp_config(
        "chatdeck_test_partial.toml",
        r#"
sidebar_expanded = false
# Other fields omitted
"#,
    );

    let config = load_config_file(&config_path).unwrap().unwrap();
    assert_eq!(config.sidebar_expanded, Some(false));
    assert_eq!(config.thread_mode, None);
    assert_eq!(config.data_file, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let config_path = write_temp_config("chatdeck_test_unknown.toml", "theme = \"dark\"\n");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown keys should be rejected, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_thread_mode() {
    let config_path = write_temp_config(
        "chatdeck_test_bad_mode.toml",
        "thread_mode = \"threaded\"\n",
    );

    let result = load_config_file(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    fs::remove_file(config_path).ok();
}

// ===== merge_config =====

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();

    assert!(config.sidebar_expanded);
    assert_eq!(config.thread_mode, ThreadMode::Shared);
    assert_eq!(config.data_file, None);
    assert!(config.mouse);
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        sidebar_expanded: Some(false),
        thread_mode: Some(ThreadMode::PerConversation),
        data_file: Some(PathBuf::from("/data/chats.json")),
        mouse: Some(false),
        log_file_path: Some(PathBuf::from("/logs/chatdeck.log")),
    };

    let resolved = merge_config(Some(config_file));

    assert!(!resolved.sidebar_expanded);
    assert_eq!(resolved.thread_mode, ThreadMode::PerConversation);
    assert_eq!(resolved.data_file, Some(PathBuf::from("/data/chats.json")));
    assert!(!resolved.mouse);
    assert_eq!(resolved.log_file_path, PathBuf::from("/logs/chatdeck.log"));
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let config_file = ConfigFile {
        mouse: Some(false),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert!(!resolved.mouse);
    assert_eq!(resolved.sidebar_expanded, defaults.sidebar_expanded);
    assert_eq!(resolved.thread_mode, defaults.thread_mode);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
}

// ===== apply_env_overrides =====

#[test]
#[serial(chatdeck_env)]
fn apply_env_overrides_respects_chatdeck_data() {
    let _guard = EnvGuard::new(DATA_ENV_VAR);
    env::set_var(DATA_ENV_VAR, "/from/env.json");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.data_file, Some(PathBuf::from("/from/env.json")));
}

#[test]
#[serial(chatdeck_env)]
fn apply_env_overrides_ignores_empty_chatdeck_data() {
    let _guard = EnvGuard::new(DATA_ENV_VAR);
    env::set_var(DATA_ENV_VAR, "");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.data_file, None);
}

#[test]
#[serial(chatdeck_env)]
fn apply_env_overrides_respects_thread_mode() {
    let _guard = EnvGuard::new(THREAD_MODE_ENV_VAR);
    env::set_var(THREAD_MODE_ENV_VAR, "per-conversation");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.thread_mode, ThreadMode::PerConversation);
}

#[test]
#[serial(chatdeck_env)]
fn apply_env_overrides_ignores_unknown_thread_mode() {
    let _guard = EnvGuard::new(THREAD_MODE_ENV_VAR);
    env::set_var(THREAD_MODE_ENV_VAR, "bogus");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.thread_mode, ThreadMode::Shared);
}

#[test]
#[serial(chatdeck_env)]
fn apply_env_overrides_no_change_when_env_vars_not_set() {
    let _data = EnvGuard::new(DATA_ENV_VAR);
    let _mode = EnvGuard::new(THREAD_MODE_ENV_VAR);

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(result, base, "Config should be unchanged when no env vars set");
}

// ===== load_config_with_precedence =====

#[test]
#[serial(chatdeck_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let explicit_path = write_temp_config("chatdeck_explicit.toml", "sidebar_expanded = false\n");
    let env_path = write_temp_config("chatdeck_env.toml", "sidebar_expanded = true\n");
    env::set_var(CONFIG_ENV_VAR, env_path.to_str().unwrap());

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(
        config.sidebar_expanded,
        Some(false),
        "Should use explicit path, not CHATDECK_CONFIG env var"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(chatdeck_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let env_path = write_temp_config("chatdeck_env_only.toml", "mouse = false\n");
    env::set_var(CONFIG_ENV_VAR, env_path.to_str().unwrap());

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(
        config.mouse,
        Some(false),
        "Should use CHATDECK_CONFIG when no explicit path"
    );

    fs::remove_file(env_path).ok();
}

#[test]
#[serial(chatdeck_config)]
fn load_config_with_precedence_env_var_pointing_nowhere_is_not_an_error() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    env::set_var(CONFIG_ENV_VAR, "/nonexistent/chatdeck/config.toml");

    assert_eq!(load_config_with_precedence(None), Ok(None));
}

// ===== apply_cli_overrides =====

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    let result = apply_cli_overrides(base.clone(), CliOverrides::default());
    assert_eq!(result, base);
}

#[test]
fn apply_cli_overrides_multiple_overrides() {
    let cli = CliOverrides {
        sidebar_expanded: Some(false),
        thread_mode: Some(ThreadMode::PerConversation),
        data_file: Some(PathBuf::from("/cli.json")),
        mouse: Some(false),
    };

    let result = apply_cli_overrides(ResolvedConfig::default(), cli);

    assert!(!result.sidebar_expanded);
    assert_eq!(result.thread_mode, ThreadMode::PerConversation);
    assert_eq!(result.data_file, Some(PathBuf::from("/cli.json")));
    assert!(!result.mouse);
}

// ===== Full chain =====

#[test]
#[serial(chatdeck_env)]
fn precedence_chain_full_defaults_to_cli() {
    let _data = EnvGuard::new(DATA_ENV_VAR);
    let _mode = EnvGuard::new(THREAD_MODE_ENV_VAR);

    let config_file = ConfigFile {
        data_file: Some(PathBuf::from("/file.json")),
        thread_mode: Some(ThreadMode::PerConversation),
        ..ConfigFile::default()
    };
    let merged = merge_config(Some(config_file));
    assert_eq!(merged.data_file, Some(PathBuf::from("/file.json")));

    env::set_var(DATA_ENV_VAR, "/env.json");
    let with_env = apply_env_overrides(merged);
    assert_eq!(with_env.data_file, Some(PathBuf::from("/env.json")));
    assert_eq!(with_env.thread_mode, ThreadMode::PerConversation);

    let cli = CliOverrides {
        data_file: Some(PathBuf::from("/cli.json")),
        ..CliOverrides::default()
    };
    let with_cli = apply_cli_overrides(with_env, cli);
    assert_eq!(
        with_cli.data_file,
        Some(PathBuf::from("/cli.json")),
        "CLI data file should override all other sources"
    );
    assert_eq!(with_cli.thread_mode, ThreadMode::PerConversation);
}
