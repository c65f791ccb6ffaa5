use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, ConfigError};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq(crate::DEFAULT_BASE_URL));
    assert_that!(config.api.prefix.as_str(), eq(crate::DEFAULT_API_PREFIX));
    assert_that!(config.session.token_file.as_str(), eq("token"));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join("portal");
    let _guard = EnvGuard::set("JP_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [api]
              base_url = "https://jobs.example.edu"
              request_timeout_secs = 45

              [session]
              token_file = "auth/token"
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.api.base_url.as_str(),
        eq("https://jobs.example.edu")
    );
    assert_that!(config.api.request_timeout_secs, eq(45));
    assert_that!(config.api.connect_timeout_secs, eq(10));
    assert_that!(config.session.token_file.as_str(), eq("auth/token"));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[api\nbase_url = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    assert!(matches!(result, Err(ConfigError::Toml { .. })));
}

#[test]
#[serial]
fn given_explicit_dir_when_load_from_then_reads_that_dir() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let other = tempfile::TempDir::new().unwrap();
    std::fs::write(
        other.path().join("config.toml"),
        "[retry]\nmax_attempts = 1",
    )
    .unwrap();

    // When
    let config = Config::load_from(other.path()).unwrap();

    // Then
    assert_that!(config.retry.max_attempts, eq(1));
}

#[test]
#[serial]
fn given_invalid_retry_section_when_validate_then_error_names_section() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[retry]\nmax_attempts = 0",
    )
    .unwrap();

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result.unwrap_err().section(), eq(Some("retry")));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[api]\nbase_url = \"http://toml:9000\"",
    )
    .unwrap();
    let _url = EnvGuard::set("JP_API_BASE_URL", "http://env:8888");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("http://env:8888"));
}

#[test]
#[serial]
fn given_config_dir_env_when_token_path_then_inside_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.token_path();

    // Then
    assert_that!(path, eq(&temp.path().join("token")));
}

#[test]
#[serial]
fn given_explicit_dir_when_load_from_then_paths_resolve_inside_that_dir() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let other = tempfile::TempDir::new().unwrap();
    let _file = EnvGuard::set("JP_LOG_FILE", "client.log");

    // When
    let config = Config::load_from(other.path()).unwrap();

    // Then
    assert_that!(config.dir(), eq(other.path()));
    assert_that!(config.token_path(), eq(&other.path().join("token")));
    assert_that!(
        config.log_file_path(),
        eq(&Some(other.path().join("client.log")))
    );
}

#[test]
#[serial]
fn given_no_config_dir_env_when_config_dir_then_under_home() {
    // Given
    let _guard = EnvGuard::remove("JP_CONFIG_DIR");

    // When
    let result = Config::config_dir();

    // Then
    if let Some(home) = dirs::home_dir() {
        assert_that!(result.unwrap(), eq(&home.join(".jobportal")));
    }
}
