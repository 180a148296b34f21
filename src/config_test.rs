use super::*;

#[test]
fn default_config_matches_web_gui_routes() {
    let config = RuntimeConfig::default();
    assert_eq!(config.stats_endpoint, "/api/stats");
    assert_eq!(config.search_endpoint, "/api/iocs");
    assert_eq!(config.dashboard_path, "/");
    assert_eq!(config.toast_container_id, "toastContainer");
    assert_eq!(config.default_search_limit.get(), 100);
    assert_eq!(config.poll_interval(), Duration::from_secs(30));
}

#[test]
fn from_json_keeps_defaults_for_missing_keys() {
    let config = RuntimeConfig::from_json(r#"{ "poll_interval_ms": 5000 }"#).expect("valid config");
    assert_eq!(config.poll_interval(), Duration::from_secs(5));
    assert_eq!(config.stats_endpoint, DEFAULT_STATS_ENDPOINT);
    assert_eq!(config.dashboard_path, DEFAULT_DASHBOARD_PATH);
}

#[test]
fn from_json_rejects_zero_interval() {
    let err = RuntimeConfig::from_json(r#"{ "poll_interval_ms": 0 }"#).expect_err("zero interval");
    assert!(matches!(err, ConfigError::ZeroInterval));
}

#[test]
fn from_json_rejects_zero_search_limit() {
    let err = RuntimeConfig::from_json(r#"{ "default_search_limit": 0 }"#).expect_err("zero limit");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(RuntimeConfig::from_json("{ not json").is_err());
}

#[test]
fn is_dashboard_matches_exact_path_only() {
    let config = RuntimeConfig::default();
    assert!(config.is_dashboard("/"));
    assert!(!config.is_dashboard("/iocs"));
    assert!(!config.is_dashboard(""));
}

#[test]
fn log_level_parses_names_and_falls_back_to_info() {
    let mut config = RuntimeConfig::default();
    config.log_level = "debug".to_owned();
    assert_eq!(config.log_level(), log::Level::Debug);
    config.log_level = "WARN".to_owned();
    assert_eq!(config.log_level(), log::Level::Warn);
    config.log_level = "chatty".to_owned();
    assert_eq!(config.log_level(), log::Level::Info);
}
