//! Application settings and configuration structures.

use std::collections::BTreeMap;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// UI language configuration
    pub language: LanguageSettings,

    /// Catalog bootstrap configuration
    pub catalog: CatalogSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// UI language / culture configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageSettings {
    /// Culture code used for unknown language names (e.g., "en")
    pub default_culture: String,

    /// Name of the cookie carrying the selected culture
    pub cookie_name: String,

    /// Display language name -> culture code (e.g., "French" -> "fr")
    pub cultures: BTreeMap<String, String>,
}

/// Catalog configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// Load the demo products into an empty store at startup
    pub seed_demo_products: bool,
}

/// Cookie name understood by ASP.NET-style request culture providers
pub const DEFAULT_CULTURE_COOKIE: &str = ".AspNetCore.Culture";

const DEFAULT_CULTURES: [(&str, &str); 4] = [
    ("English", "en"),
    ("French", "fr"),
    ("Spanish", "es"),
    ("Wolof", "wo"),
];

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            default_culture: "en".into(),
            cookie_name: DEFAULT_CULTURE_COOKIE.into(),
            cultures: DEFAULT_CULTURES
                .iter()
                .map(|(name, code)| (name.to_string(), code.to_string()))
                .collect(),
        }
    }
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the default culture is blank.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("language.default_culture", "en")?
            .set_default("language.cookie_name", DEFAULT_CULTURE_COOKIE)?
            .set_default("catalog.seed_demo_products", true)?;

        for (name, code) in DEFAULT_CULTURES {
            builder = builder.set_default(format!("language.cultures.{}", name), code)?;
        }

        builder
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__LANGUAGE__DEFAULT_CULTURE=fr -> language.default_culture = "fr"
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                settings.validate()?;
                Ok(settings)
            })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.language.default_culture.trim().is_empty() {
            return Err(ConfigError::Message(
                "language.default_culture must not be empty".into(),
            ));
        }
        if self.language.cookie_name.trim().is_empty() {
            return Err(ConfigError::Message(
                "language.cookie_name must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(language: LanguageSettings) -> Settings {
        Settings {
            language,
            catalog: CatalogSettings {
                seed_demo_products: false,
            },
            environment: "test".into(),
        }
    }

    #[test]
    fn test_default_language_settings() {
        let language = LanguageSettings::default();

        assert_eq!(language.default_culture, "en");
        assert_eq!(language.cookie_name, ".AspNetCore.Culture");
        assert_eq!(language.cultures.len(), 4);
        assert_eq!(language.cultures.get("Wolof").map(String::as_str), Some("wo"));
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(settings(LanguageSettings::default()).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_default_culture() {
        let language = LanguageSettings {
            default_culture: " ".into(),
            ..Default::default()
        };

        assert!(settings(language).validate().is_err());
    }
}
