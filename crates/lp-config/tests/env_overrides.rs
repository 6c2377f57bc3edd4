use figment::Jail;
use lp_config::{ConfigError, LaunchpadConfig};

#[test]
fn prefixed_env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("LAUNCHPAD_API__BASE_URL", "http://localhost:9000");
        jail.set_env("LAUNCHPAD_API__RETRIEVAL_TIMEOUT_SECS", "3");
        jail.set_env("LAUNCHPAD_CLERK__SECRET_KEY", "sk_from_env");

        let config: LaunchpadConfig = LaunchpadConfig::figment().extract()?;
        assert_eq!(config.api.base_url().unwrap(), "http://localhost:9000");
        assert_eq!(config.api.retrieval_timeout_secs, 3);
        assert_eq!(config.clerk.secret_key, "sk_from_env");
        Ok(())
    });
}

#[test]
fn legacy_front_end_variable_sets_base_url() {
    Jail::expect_with(|jail| {
        jail.set_env("NEXT_PUBLIC_API_URL", "https://startup-mvp-builder.example.com");

        let config: LaunchpadConfig = LaunchpadConfig::figment().extract()?;
        assert_eq!(
            config.api.base_url().unwrap(),
            "https://startup-mvp-builder.example.com"
        );
        Ok(())
    });
}

#[test]
fn prefixed_env_beats_legacy_variable() {
    Jail::expect_with(|jail| {
        jail.set_env("NEXT_PUBLIC_API_URL", "https://legacy.example.com");
        jail.set_env("LAUNCHPAD_API__BASE_URL", "https://primary.example.com");

        let config: LaunchpadConfig = LaunchpadConfig::figment().extract()?;
        assert_eq!(config.api.base_url().unwrap(), "https://primary.example.com");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".launchpad")?;
        jail.create_file(
            ".launchpad/config.toml",
            r#"
[auth]
user_id = "user_from_file"
"#,
        )?;
        jail.set_env("LAUNCHPAD_AUTH__USER_ID", "user_from_env");

        let config: LaunchpadConfig = LaunchpadConfig::figment().extract()?;
        assert_eq!(config.auth.user_id(), Some("user_from_env"));
        Ok(())
    });
}

#[test]
fn absent_base_url_is_reported_as_not_configured() {
    Jail::expect_with(|_jail| {
        let config: LaunchpadConfig = LaunchpadConfig::figment().extract()?;
        if config.api.is_configured() {
            // A user-global config file supplied one; nothing to assert.
            return Ok(());
        }
        assert!(matches!(
            config.api.base_url(),
            Err(ConfigError::NotConfigured { .. })
        ));
        Ok(())
    });
}
