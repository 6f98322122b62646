//! Service-family detection from endpoint URLs.

use serde::{Deserialize, Serialize};

/// Provider-specific identity inferred from an endpoint URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceFamily {
    OpenAi,
    DeepSeek,
    Qianwen,
    Gemini,
    Claude,
    /// Generic OpenAI-compatible endpoint (aggregators, self-hosted relays).
    Unknown,
}

/// Ordered detection rules; the first matching substring wins.
///
/// Order matters: "dashscope.aliyuncs.com" must be checked before any
/// looser pattern that could also appear in an aggregator URL. New
/// providers are added here without touching call sites.
const DETECTION_RULES: &[(&str, ServiceFamily)] = &[
    ("deepseek", ServiceFamily::DeepSeek),
    ("dashscope.aliyuncs.com", ServiceFamily::Qianwen),
    ("generativelanguage.googleapis.com", ServiceFamily::Gemini),
    ("api.openai.com", ServiceFamily::OpenAi),
    ("claude", ServiceFamily::Claude),
    ("anthropic", ServiceFamily::Claude),
];

impl ServiceFamily {
    /// Detect the family from a base URL by case-insensitive substring
    /// match. Total: anything unmatched is [`ServiceFamily::Unknown`].
    #[must_use]
    pub fn detect(base_url: &str) -> Self {
        let url = base_url.to_ascii_lowercase();
        DETECTION_RULES
            .iter()
            .find(|(pattern, _)| url.contains(pattern))
            .map_or(Self::Unknown, |(_, family)| *family)
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::DeepSeek => "deepseek",
            Self::Qianwen => "qianwen",
            Self::Gemini => "gemini",
            Self::Claude => "claude",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ServiceFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_known_hosts() {
        assert_eq!(
            ServiceFamily::detect("https://api.deepseek.com/v1"),
            ServiceFamily::DeepSeek
        );
        assert_eq!(
            ServiceFamily::detect("https://dashscope.aliyuncs.com/compatible-mode/v1"),
            ServiceFamily::Qianwen
        );
        assert_eq!(
            ServiceFamily::detect("https://generativelanguage.googleapis.com/v1beta"),
            ServiceFamily::Gemini
        );
        assert_eq!(
            ServiceFamily::detect("https://api.openai.com/v1"),
            ServiceFamily::OpenAi
        );
        assert_eq!(
            ServiceFamily::detect("https://api.anthropic.com"),
            ServiceFamily::Claude
        );
    }

    #[test]
    fn unmatched_hosts_are_unknown() {
        assert_eq!(
            ServiceFamily::detect("https://unknown.example.com/v1"),
            ServiceFamily::Unknown
        );
        assert_eq!(ServiceFamily::detect(""), ServiceFamily::Unknown);
    }

    #[test]
    fn detection_is_case_insensitive() {
        assert_eq!(
            ServiceFamily::detect("https://API.DEEPSEEK.COM/v1"),
            ServiceFamily::DeepSeek
        );
    }

    #[test]
    fn first_matching_rule_wins() {
        // A relay URL mentioning two providers resolves by rule order.
        assert_eq!(
            ServiceFamily::detect("https://deepseek.claude-proxy.example.com/v1"),
            ServiceFamily::DeepSeek
        );
    }

    #[test]
    fn serializes_to_lowercase_tags() {
        let json = serde_json::to_string(&ServiceFamily::DeepSeek).unwrap();
        assert_eq!(json, "\"deepseek\"");
        let json = serde_json::to_string(&ServiceFamily::OpenAi).unwrap();
        assert_eq!(json, "\"openai\"");
    }
}
