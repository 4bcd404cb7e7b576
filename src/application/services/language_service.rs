//! Language Service
//!
//! Maps display language names to culture codes and remembers the choice in
//! a cookie.

use axum_extra::extract::cookie::Cookie;
use tracing::info;

use crate::config::LanguageSettings;
use crate::presentation::http::HttpContext;

/// Language service trait
pub trait LanguageService: Send + Sync {
    /// Switch the UI language for the client behind `context`.
    ///
    /// Does nothing when there is no context.
    fn change_ui_language(&self, context: Option<&mut HttpContext>, language: &str);

    /// Culture code for a display language name, or the default culture.
    fn set_culture(&self, language: &str) -> String;

    /// Write the culture cookie.
    fn update_culture_cookie(&self, context: &mut HttpContext, culture: &str);
}

/// LanguageService implementation backed by the configured culture table
pub struct LanguageServiceImpl {
    settings: LanguageSettings,
}

impl LanguageServiceImpl {
    pub fn new(settings: LanguageSettings) -> Self {
        Self { settings }
    }

    /// Cookie value in the `c=<culture>|uic=<ui culture>` format.
    pub fn cookie_value(culture: &str) -> String {
        format!("c={}|uic={}", culture, culture)
    }
}

impl LanguageService for LanguageServiceImpl {
    fn change_ui_language(&self, context: Option<&mut HttpContext>, language: &str) {
        let Some(context) = context else {
            return;
        };

        let culture = self.set_culture(language);
        self.update_culture_cookie(context, &culture);
        info!(language, culture = %culture, "UI language changed");
    }

    fn set_culture(&self, language: &str) -> String {
        let language = language.trim();
        let cultures = &self.settings.cultures;

        // exact name first, then the first case-insensitive match in name order
        cultures
            .get(language)
            .or_else(|| {
                cultures
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(language))
                    .map(|(_, code)| code)
            })
            .cloned()
            .unwrap_or_else(|| self.settings.default_culture.clone())
    }

    fn update_culture_cookie(&self, context: &mut HttpContext, culture: &str) {
        let cookie = Cookie::build((self.settings.cookie_name.clone(), Self::cookie_value(culture)))
            .path("/")
            .permanent()
            .build();

        context.append_cookie(cookie);
    }
}
