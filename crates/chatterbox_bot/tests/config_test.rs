//! Configuration and accounts loading from files.

use chatterbox_bot::{ChatterboxConfig, load_accounts};
use chatterbox_core::{ChannelId, DeletionPolicy, Language};
use chatterbox_error::ConfigErrorKind;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_user_file_overrides_defaults() -> anyhow::Result<()> {
    let file = toml_file(
        r#"
message_file = "broadcast.txt"

[generation]
retry_backoff_secs = 5

[[channels]]
id = "111"
use_generation = true
language = "id"
read_delay_secs = 4
loop_interval_secs = 20
use_slow_mode = true
reply_as_thread = true
delete_after_secs = 30

[[channels]]
id = "222"
loop_interval_secs = 60
read_delay_secs = 9
use_slow_mode = true
delete_immediately = true
"#,
    )?;

    let config = ChatterboxConfig::from_file(file.path())?;
    config.validate()?;

    assert_eq!(config.message_file.to_str(), Some("broadcast.txt"));
    assert_eq!(config.accounts_file.to_str(), Some("accounts.txt"));
    assert_eq!(config.retry_backoff(), Duration::from_secs(5));
    assert_eq!(config.generation.model, "gemini-2.5-flash");
    assert_eq!(config.cooldown(), Duration::from_secs(86_400));

    let plans = config.channel_plans()?;
    assert_eq!(plans.len(), 2);

    let (id, reader) = &plans[0];
    assert_eq!(id, &ChannelId::new("111"));
    assert!(reader.read_messages());
    assert_eq!(*reader.language(), Language::Indonesian);
    assert_eq!(*reader.read_delay(), Duration::from_secs(4));
    assert!(*reader.use_slow_mode());
    assert_eq!(reader.deletion(), DeletionPolicy::After(Duration::from_secs(30)));

    let (_, broadcaster) = &plans[1];
    assert!(!broadcaster.read_messages());
    assert_eq!(*broadcaster.language(), Language::English);
    assert_eq!(*broadcaster.read_delay(), Duration::ZERO);
    assert!(!*broadcaster.use_slow_mode());
    assert_eq!(broadcaster.deletion(), DeletionPolicy::Immediately);
    Ok(())
}

#[test]
fn test_no_channels_rejected() -> anyhow::Result<()> {
    let file = toml_file("accounts_file = \"accounts.txt\"\n")?;
    let config = ChatterboxConfig::from_file(file.path())?;
    let err = config.validate().expect_err("no channels");
    assert!(err.to_string().contains("No channels configured"));
    Ok(())
}

#[test]
fn test_duplicate_channel_rejected() -> anyhow::Result<()> {
    let file = toml_file(
        r#"
[[channels]]
id = "111"
loop_interval_secs = 5

[[channels]]
id = "111"
loop_interval_secs = 7
"#,
    )?;
    let config = ChatterboxConfig::from_file(file.path())?;
    let err = config.validate().expect_err("duplicate id");
    assert!(err.to_string().contains("configured twice"));
    Ok(())
}

#[test]
fn test_invalid_language_rejected() -> anyhow::Result<()> {
    let file = toml_file(
        r#"
[[channels]]
id = "111"
use_generation = true
language = "fr"
loop_interval_secs = 5
"#,
    )?;
    let config = ChatterboxConfig::from_file(file.path())?;
    let err = config.validate().expect_err("fr is not supported");
    assert_eq!(
        err.kind(),
        &ConfigErrorKind::UnsupportedLanguage {
            channel: "111".to_string(),
            language: "fr".to_string(),
        }
    );
    Ok(())
}

#[test]
fn test_missing_file_rejected() {
    assert!(ChatterboxConfig::from_file("/nonexistent/chatterbox.toml").is_err());
}

#[test]
fn test_load_accounts_file() -> anyhow::Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "TOKEN=token-one")?;
    writeln!(file, "API_KEY=key-one")?;
    writeln!(file)?;
    writeln!(file, "TOKEN=token-two")?;
    writeln!(file, "API_KEY=key-two")?;
    writeln!(file, "TOKEN=dangling")?;
    file.flush()?;

    let accounts = load_accounts(file.path())?;
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[1].token(), "token-two");
    assert_eq!(accounts[1].api_key(), "key-two");
    Ok(())
}

#[test]
fn test_empty_accounts_file_rejected() -> anyhow::Result<()> {
    let file = NamedTempFile::new()?;
    let err = load_accounts(file.path()).expect_err("no accounts");
    assert!(err.to_string().contains("No accounts found"));
    Ok(())
}

#[test]
fn test_missing_accounts_file_rejected() {
    assert!(load_accounts("/nonexistent/accounts.txt").is_err());
}
