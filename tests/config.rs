#[cfg(test)]
mod tests {
    use kekatime::api::KekaConfig;
    use kekatime::libs::config::Config;
    use kekatime::libs::secret::Secret;
    use kekatime::libs::settings::{BreakPolicy, Settings};
    use kekatime::libs::time::ClockFormat;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME is process-wide; tests touching it run one at a time.
    static HOME_LOCK: Mutex<()> = Mutex::new(());

    /// Points HOME/LOCALAPPDATA at a fresh temporary directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = HOME_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_missing_config_gives_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.settings(), Settings::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            keka: Some(KekaConfig {
                base_url: "https://acme.keka.com".to_string(),
            }),
            settings: Some(Settings {
                work_hours: 9,
                work_minutes: 15,
                break_policy: BreakPolicy::Included,
                notifications_enabled: false,
                clock_format: ClockFormat::H24,
            }),
        };
        config.save().unwrap();

        assert_eq!(Config::read().unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_settings_use_defaults(_ctx: &mut ConfigTestContext) {
        std::fs::write(Config::path().unwrap(), r#"{ "settings": { "work_hours": 7, "work_minutes": 0 } }"#).unwrap();

        let settings = Config::read().unwrap().settings();
        assert_eq!(settings.work_hours, 7);
        assert_eq!(settings.break_policy, BreakPolicy::Excluded);
        assert!(settings.notifications_enabled);
        assert_eq!(settings.clock_format, ClockFormat::H12);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_out_of_range_settings_fall_back(_ctx: &mut ConfigTestContext) {
        let config = Config {
            keka: None,
            settings: Some(Settings {
                work_hours: 20,
                work_minutes: 75,
                ..Settings::default()
            }),
        };
        config.save().unwrap();

        let settings = Config::read().unwrap().settings();
        assert_eq!(settings.work_hours, 8);
        assert_eq!(settings.work_minutes, 30);
        assert_eq!(settings.target_minutes(), 510);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        assert!(!Config::delete().unwrap());
        Config::default().save().unwrap();
        assert!(Config::delete().unwrap());
        assert!(!Config::path().unwrap().exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_secret_store_read_forget(_ctx: &mut ConfigTestContext) {
        let secret = Secret::new(".test_token", "token");
        secret.store("eyJhbGciOi.payload.sig").unwrap();

        assert_eq!(secret.read().unwrap(), "eyJhbGciOi.payload.sig");
        assert_eq!(secret.get_or_prompt().unwrap(), "eyJhbGciOi.payload.sig");
        assert_ne!(std::fs::read_to_string(secret.path()).unwrap(), "eyJhbGciOi.payload.sig");

        assert!(secret.forget().unwrap());
        assert!(!secret.forget().unwrap());
    }

    #[test]
    fn test_break_policy_from_str() {
        assert_eq!("Included".parse::<BreakPolicy>(), Ok(BreakPolicy::Included));
        assert_eq!("excluded".parse::<BreakPolicy>(), Ok(BreakPolicy::Excluded));
        assert!("sometimes".parse::<BreakPolicy>().is_err());
    }
}
