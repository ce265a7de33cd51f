//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment, Jail,
};
use rna_config::RnaConfig;
use rna_core::Nutrient;

#[test]
fn loads_usda_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[usda]
api_key = "DEMO_KEY"
base_url = "http://localhost:9000/fdc/v1"
page_size = 25
timeout_secs = 5
"#,
        )?;

        let config: RnaConfig = Figment::from(Serialized::defaults(RnaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.usda.api_key, "DEMO_KEY");
        assert_eq!(config.usda.base_url, "http://localhost:9000/fdc/v1");
        assert_eq!(config.usda.page_size, 25);
        assert_eq!(config.usda.timeout_secs, 5);
        assert!(config.usda.is_configured());
        Ok(())
    });
}

#[test]
fn loads_audit_policy_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[audit]
discrepancy_threshold_pct = 15.0
critical = ["Sodium", "Potassium", "Phosphorus"]

[audit.limits]
Sodium = 120.0
Potassium = 180.0
Phosphorus = 90.0
"Saturated Fat" = 4.0
"#,
        )?;

        let config: RnaConfig = Figment::from(Serialized::defaults(RnaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        let policy = config.audit.to_policy();
        assert_eq!(policy.discrepancy_threshold_pct, 15.0);
        assert_eq!(
            policy.critical,
            vec![Nutrient::Sodium, Nutrient::Potassium, Nutrient::Phosphorus]
        );
        assert_eq!(policy.limits[&Nutrient::Sodium], 120.0);
        assert_eq!(policy.limits[&Nutrient::SaturatedFat], 4.0);
        // Unlisted limits are replaced wholesale, not merged.
        assert!(!policy.limits.contains_key(&Nutrient::Protein));
        Ok(())
    });
}

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[usda]
api_key = "usda-key"

[ocr]
api_key = "ocr-key"
language = "fre"

[llm]
api_key = "llm-key"
model = "gemini-2.5-flash"

[airtable]
api_key = "pat-key"
base_id = "appTEST"
table_id = "tblTEST"
"#,
        )?;

        let config: RnaConfig = Figment::from(Serialized::defaults(RnaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.usda.is_configured());
        assert!(config.ocr.is_configured());
        assert_eq!(config.ocr.language, "fre");
        assert!(config.llm.is_configured());
        assert_eq!(config.llm.model, "gemini-2.5-flash");
        assert!(config.airtable.is_configured());
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("RNA_USDA__API_KEY", "from-env");

        jail.create_file(
            "config.toml",
            r#"
[usda]
api_key = "from-toml"
page_size = 50
"#,
        )?;

        let config: RnaConfig = Figment::from(Serialized::defaults(RnaConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("RNA_").split("__"))
            .extract()?;

        // Env should win over TOML
        assert_eq!(config.usda.api_key, "from-env");
        // TOML value not overridden by env should remain
        assert_eq!(config.usda.page_size, 50);
        Ok(())
    });
}
