//! Settings schema types (providers, proxy, assistant defaults).

use std::collections::HashMap;

use {
    secrecy::{ExposeSecret, Secret},
    serde::{Deserialize, Serialize},
};

/// Network proxy toggle applied to outbound AI requests.
///
/// The toggle is independent of the stored URLs so a user can flip the
/// proxy off without losing the addresses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub enabled: bool,
    pub http: Option<String>,
    pub https: Option<String>,
}

impl ProxySettings {
    /// Returns `true` when the toggle is on and at least one URL is set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.enabled && (self.http.is_some() || self.https.is_some())
    }

    /// Proxy URL for HTTPS traffic, falling back to the HTTP one.
    #[must_use]
    pub fn https_url(&self) -> Option<&str> {
        if !self.enabled {
            return None;
        }
        self.https.as_deref().or(self.http.as_deref())
    }

    /// Proxy URL for plain HTTP traffic.
    #[must_use]
    pub fn http_url(&self) -> Option<&str> {
        if !self.enabled {
            return None;
        }
        self.http.as_deref()
    }
}

/// Configuration for a single AI provider.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Whether this provider is offered in the model picker.
    pub enabled: bool,

    #[serde(
        default,
        serialize_with = "serialize_option_secret",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_key: Option<Secret<String>>,

    /// OpenAI-compatible endpoint root, e.g. `https://api.deepseek.com/v1`.
    pub base_url: String,

    /// Currently selected model ID.
    pub model: String,

    pub temperature: f32,
    pub max_tokens: u32,

    /// Per-request timeout for chat completions, in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("enabled", &self.enabled)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            base_url: String::new(),
            model: String::new(),
            temperature: 0.7,
            max_tokens: 2000,
            timeout_secs: 30,
        }
    }
}

impl ProviderSettings {
    /// Exposed API key, or `None` when unset or blank.
    #[must_use]
    pub fn api_key_value(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .filter(|k| !k.trim().is_empty())
    }
}

/// Top-level AI settings block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    pub enabled: bool,

    /// Provider used when the user has not picked one explicitly.
    pub default_provider: String,

    pub stream_enabled: bool,
    pub system_prompt: String,
    pub max_history_length: usize,

    pub proxy: ProxySettings,

    /// Provider-specific settings keyed by provider name.
    /// Known keys: "deepseek", "gemini", "qianwen", "openai", "newapi".
    pub providers: HashMap<String, ProviderSettings>,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            default_provider: "deepseek".into(),
            stream_enabled: true,
            system_prompt: "You are Victor, a helpful AI assistant.".into(),
            max_history_length: 10,
            proxy: ProxySettings::default(),
            providers: builtin_providers(),
        }
    }
}

impl AiSettings {
    /// Get the configured entry for a provider, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ProviderSettings> {
        self.providers.get(name)
    }

    /// Names of providers currently enabled, sorted for stable display.
    #[must_use]
    pub fn enabled_providers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .providers
            .iter()
            .filter(|(_, p)| p.enabled)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

fn provider(base_url: &str, model: &str, enabled: bool) -> ProviderSettings {
    ProviderSettings {
        enabled,
        base_url: base_url.into(),
        model: model.into(),
        ..Default::default()
    }
}

/// Built-in provider entries seeded into a fresh settings block.
fn builtin_providers() -> HashMap<String, ProviderSettings> {
    HashMap::from([
        (
            "deepseek".into(),
            provider("https://api.deepseek.com/v1", "deepseek-chat", true),
        ),
        (
            "gemini".into(),
            provider(
                "https://generativelanguage.googleapis.com/v1beta",
                "gemini-1.5-flash",
                false,
            ),
        ),
        (
            "qianwen".into(),
            provider(
                "https://dashscope.aliyuncs.com/compatible-mode/v1",
                "qwen-turbo",
                false,
            ),
        ),
        (
            "openai".into(),
            provider("https://api.openai.com/v1", "gpt-3.5-turbo", false),
        ),
        // Self-hosted NewAPI-style aggregator; the user fills in the URL.
        ("newapi".into(), provider("", "gpt-3.5-turbo", false)),
    ])
}

// ── Serde helpers for Secret<String> ────────────────────────────────────────

fn serialize_option_secret<S: serde::Serializer>(
    secret: &Option<Secret<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match secret {
        Some(s) => serializer.serialize_some(s.expose_secret()),
        None => serializer.serialize_none(),
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_seed_builtin_providers() {
        let settings = AiSettings::default();
        for name in ["deepseek", "gemini", "qianwen", "openai", "newapi"] {
            assert!(settings.get(name).is_some(), "missing builtin {name}");
        }
        assert_eq!(settings.default_provider, "deepseek");
    }

    #[test]
    fn only_deepseek_enabled_by_default() {
        let settings = AiSettings::default();
        assert_eq!(settings.enabled_providers(), vec!["deepseek"]);
    }

    #[test]
    fn provider_debug_redacts_api_key() {
        let entry = ProviderSettings {
            api_key: Some(Secret::new("sk-super-secret".into())),
            ..Default::default()
        };
        let rendered = format!("{entry:?}");
        assert!(!rendered.contains("sk-super-secret"));
        assert!(rendered.contains("REDACTED"));
    }

    #[test]
    fn api_key_value_ignores_blank_keys() {
        let mut entry = ProviderSettings::default();
        assert!(entry.api_key_value().is_none());
        entry.api_key = Some(Secret::new("   ".into()));
        assert!(entry.api_key_value().is_none());
        entry.api_key = Some(Secret::new("sk-test".into()));
        assert_eq!(entry.api_key_value(), Some("sk-test"));
    }

    #[test]
    fn proxy_https_falls_back_to_http() {
        let proxy = ProxySettings {
            enabled: true,
            http: Some("http://127.0.0.1:7890".into()),
            https: None,
        };
        assert_eq!(proxy.https_url(), Some("http://127.0.0.1:7890"));
    }

    #[test]
    fn disabled_proxy_yields_no_urls() {
        let proxy = ProxySettings {
            enabled: false,
            http: Some("http://127.0.0.1:7890".into()),
            https: Some("http://127.0.0.1:7890".into()),
        };
        assert!(!proxy.is_active());
        assert!(proxy.http_url().is_none());
        assert!(proxy.https_url().is_none());
    }

    #[test]
    fn settings_round_trip_preserves_api_key() {
        let mut settings = AiSettings::default();
        if let Some(entry) = settings.providers.get_mut("deepseek") {
            entry.api_key = Some(Secret::new("sk-roundtrip".into()));
        }
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("sk-roundtrip"));
        let back: AiSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(
            back.get("deepseek").unwrap().api_key_value(),
            Some("sk-roundtrip")
        );
    }

    #[test]
    fn unknown_fields_are_ignored_on_load() {
        let json = r#"{"enabled": true, "legacyField": 42, "providers": {}}"#;
        let settings: AiSettings = serde_json::from_str(json).unwrap();
        assert!(settings.enabled);
        assert!(settings.providers.is_empty());
    }
}
