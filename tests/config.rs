use std::fs;
use std::path::Path;

use urltoken::error::AppError;
use urltoken::{Config, ConfigError, Token};

fn write_user_config(home: &Path, contents: &str) {
    let dir = home.join(".config").join("urltoken");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

// Single test: the configuration is cached once per process.
#[cfg(unix)]
#[tokio::test]
async fn user_config_drives_default_length() {
    let home = tempfile::tempdir().unwrap();
    unsafe {
        std::env::set_var("HOME", home.path());
    }

    // an invalid file is reported, not replaced by the defaults
    write_user_config(home.path(), "[token]\nlength = 0\n");
    let err = Config::get_or_init(false).await.unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTokenLength(0)));

    let err = Token::generate_default().await.unwrap_err();
    assert!(matches!(
        err,
        AppError::ConfigError(ConfigError::InvalidTokenLength(0))
    ));

    write_user_config(home.path(), "[token]\nlength = \"long\"\n");
    let err = Config::get_or_init(false).await.unwrap_err();
    assert!(matches!(err, ConfigError::TomlDeError(_)));

    // a failed load leaves nothing cached, the fixed file is picked up
    write_user_config(home.path(), "[token]\nlength = 48\n");
    let config = Config::get_or_init(false).await.unwrap();
    assert_eq!(config.token().length(), 48);

    let token = Token::generate_default().await.unwrap();
    assert_eq!(token.len(), 48);
}
