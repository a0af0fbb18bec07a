use std::io::Write;

use surge2clash::settings::{init_settings, update_settings_from_content, Settings};
use surge2clash::utils::http::FetchConfig;
use tempfile::NamedTempFile;

#[cfg(test)]
mod settings_tests {
    use super::*;

    fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_settings_toml() {
        let toml_content = r#"
log_level = "debug"

[server]
listen_address = "0.0.0.0"
listen_port = 8080

[fetch]
timeout_secs = 5
proxy = "http://127.0.0.1:1080"
"#;
        let settings = Settings::load_from_content(toml_content).unwrap();

        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.server.listen_address, "0.0.0.0");
        assert_eq!(settings.server.listen_port, 8080);
        assert_eq!(settings.server.max_concur_threads, 4);
        assert_eq!(settings.fetch.timeout_secs, 5);
        assert_eq!(settings.fetch.user_agent, "surge2clash");
        assert_eq!(settings.listen_address(), "0.0.0.0:8080");

        let fetch = FetchConfig::from(&settings.fetch);
        assert_eq!(fetch.proxy.proxy.as_deref(), Some("http://127.0.0.1:1080"));
    }

    #[test]
    fn test_settings_yaml() {
        let yaml_content = r#"
server:
  listen_port: 9000
  max_concur_threads: 8
fetch:
  max_download_size: 1024
"#;
        let settings = Settings::load_from_content(yaml_content).unwrap();

        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.server.listen_address, "127.0.0.1");
        assert_eq!(settings.server.listen_port, 9000);
        assert_eq!(settings.server.max_concur_threads, 8);
        assert_eq!(settings.fetch.max_download_size, 1024);
        assert_eq!(settings.fetch.proxy, "NONE");
    }

    #[test]
    fn test_settings_file_extension_selects_format() {
        let yaml = temp_file(".yml", "log_level: warn\n");
        assert_eq!(Settings::load_from_file(yaml.path()).unwrap().log_level, "warn");

        let toml = temp_file(".toml", "log_level = \"error\"\n");
        assert_eq!(Settings::load_from_file(toml.path()).unwrap().log_level, "error");
    }

    #[test]
    fn test_settings_invalid_content() {
        assert!(Settings::load_from_content("[server]\nlisten_port = \"high\"\n").is_err());
        let missing = Settings::load_from_file("/nonexistent/surge2clash.toml");
        assert!(matches!(
            missing,
            Err(surge2clash::SettingsError::Io(_))
        ));
    }

    // The only test touching the global instance in this binary.
    #[test]
    fn test_global_settings_update() {
        init_settings("").unwrap();
        assert_eq!(*Settings::current(), Settings::default());

        let file = temp_file(".toml", "[server]\nlisten_port = 30000\n");
        init_settings(file.path().to_str().unwrap()).unwrap();
        assert_eq!(Settings::current().server.listen_port, 30000);

        update_settings_from_content("[fetch]\ntimeout_secs = 1\n").unwrap();
        let settings = Settings::current();
        assert_eq!(settings.fetch.timeout_secs, 1);
        assert_eq!(settings.server.listen_port, 25500);
    }
}
