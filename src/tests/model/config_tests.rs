use super::*;

#[test]
fn missing_fields_take_defaults() {
    let cfg: AppConfig = serde_json::from_str(r#"{"username":"ana"}"#).unwrap();
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server_url, DEFAULT_SERVER_URL);
    assert_eq!(cfg.ai_assist_endpoint, DEFAULT_AI_ASSIST_ENDPOINT);
    assert_eq!(cfg.ai_assist_key, DEFAULT_AI_ASSIST_KEY);
    assert_eq!(cfg.ai_assist_timeout_secs, 30);
    assert_eq!(cfg.username.as_deref(), Some("ana"));
    assert!(cfg.ai_assist_options.is_empty());
}

#[test]
fn ai_assist_url_joins_relative_endpoints() {
    let mut cfg = AppConfig {
        server_url: "http://127.0.0.1:9000/".to_string(),
        ..AppConfig::default()
    };
    assert_eq!(cfg.ai_assist_url(), "http://127.0.0.1:9000/ai-assist");

    cfg.ai_assist_endpoint = "api/assist".to_string();
    assert_eq!(cfg.ai_assist_url(), "http://127.0.0.1:9000/api/assist");

    cfg.ai_assist_endpoint = "https://ai.example.test/v1".to_string();
    assert_eq!(cfg.ai_assist_url(), "https://ai.example.test/v1");
}

#[test]
fn load_falls_back_to_defaults_without_file() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = AppConfig::load(&AppConfig::default_path(tmp.path())).unwrap();
    assert_eq!(cfg.server_url, DEFAULT_SERVER_URL);
}
