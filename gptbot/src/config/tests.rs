//! Config tests.

use crate::config::BotConfig;
use serial_test::serial;
use std::env;

const ALL_VARS: &[&str] = &[
    "BOT_TOKEN",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "LOG_FILE",
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "MODEL",
    "MAX_TOKENS",
    "TEMPERATURE",
    "REPLY_PREFIX",
    "IMAGE_SIZE",
    "WECHAT_WORK_SEND_KEY",
    "LIVENESS_CHECK_INTERVAL_SECS",
    "LIVENESS_ALERT_MESSAGE",
];

fn reset_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("OPENAI_API_KEY", "test_key");
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    reset_env();

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram_api_url().is_none());
    assert_eq!(config.log_file(), "logs/gptbot.log");

    let a = config.assistant();
    assert_eq!(a.openai_api_key, "test_key");
    assert_eq!(a.openai_base_url, "https://api.openai.com/v1");
    assert_eq!(a.model, "gpt-3.5-turbo-instruct");
    assert_eq!(a.max_tokens, 512);
    assert_eq!(a.temperature, 0.7);
    assert_eq!(a.reply_prefix, "");
    assert_eq!(a.image_size, "1024x1024");

    let w = config.watchdog();
    assert!(!w.enabled());
    assert_eq!(w.check_interval_secs, 10);
    assert_eq!(w.alert_message, "gptbot is dead!");

    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    reset_env();
    env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");
    env::set_var("LOG_FILE", "/tmp/gptbot-test.log");
    env::set_var("MODEL", "text-davinci-003");
    env::set_var("MAX_TOKENS", "1024");
    env::set_var("TEMPERATURE", "0.2");
    env::set_var("REPLY_PREFIX", "[bot]");
    env::set_var("IMAGE_SIZE", "512x512");
    env::set_var("WECHAT_WORK_SEND_KEY", "wecom-key");
    env::set_var("LIVENESS_CHECK_INTERVAL_SECS", "30");
    env::set_var("LIVENESS_ALERT_MESSAGE", "down");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.telegram_api_url(), Some("http://127.0.0.1:8081"));
    assert_eq!(config.log_file(), "/tmp/gptbot-test.log");
    let settings = config.assistant().settings();
    assert_eq!(settings.max_tokens, 1024);
    assert_eq!(settings.temperature, 0.2);
    assert_eq!(settings.reply_prefix, "[bot]");
    assert_eq!(config.assistant().model, "text-davinci-003");
    assert_eq!(config.assistant().image_size, "512x512");
    assert_eq!(config.watchdog().send_key.as_deref(), Some("wecom-key"));
    assert_eq!(config.watchdog().check_interval().as_secs(), 30);
    assert_eq!(config.watchdog().alert_message, "down");
    assert!(config.validate().is_ok());

    reset_env();
}

#[test]
#[serial]
fn test_load_config_with_override_token() {
    reset_env();
    env::set_var("BOT_TOKEN", "env_token");

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();

    assert_eq!(config.bot_token(), "override_token");
}

#[test]
#[serial]
fn test_missing_required_vars() {
    reset_env();
    env::remove_var("BOT_TOKEN");
    assert!(BotConfig::load(None).is_err());

    reset_env();
    env::remove_var("OPENAI_API_KEY");
    assert!(BotConfig::load(None).is_err());

    reset_env();
}

#[test]
#[serial]
fn test_unparsable_numbers_fall_back_to_defaults() {
    reset_env();
    env::set_var("MAX_TOKENS", "lots");
    env::set_var("TEMPERATURE", "warm");

    let config = BotConfig::load(None).unwrap();
    assert_eq!(config.assistant().max_tokens, 512);
    assert_eq!(config.assistant().temperature, 0.7);

    reset_env();
}

#[test]
#[serial]
fn test_empty_send_key_disables_watchdog() {
    reset_env();
    env::set_var("WECHAT_WORK_SEND_KEY", "  ");
    let config = BotConfig::load(None).unwrap();
    assert!(!config.watchdog().enabled());
    reset_env();
}

#[test]
#[serial]
fn test_validate_rejects_bad_values() {
    for (var, value) in [
        ("TELEGRAM_API_URL", "not-a-valid-url"),
        ("OPENAI_BASE_URL", "::"),
        ("MAX_TOKENS", "0"),
        ("TEMPERATURE", "2.5"),
        ("IMAGE_SIZE", "800x600"),
    ] {
        reset_env();
        env::set_var(var, value);
        let config = BotConfig::load(None).unwrap();
        assert!(config.validate().is_err(), "{var}={value} should be rejected");
    }

    reset_env();
    env::set_var("WECHAT_WORK_SEND_KEY", "k");
    env::set_var("LIVENESS_CHECK_INTERVAL_SECS", "0");
    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    reset_env();
}
