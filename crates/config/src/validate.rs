//! Settings validation.
//!
//! Checks an [`AiSettings`] block for entries that would break discovery or
//! chat at runtime (enabled provider without an endpoint, zero timeout) and
//! for values worth warning about before they reach the network layer.

use crate::schema::AiSettings;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Category: "provider", "proxy", "general"
    pub category: &'static str,
    /// Dotted path, e.g. "providers.deepseek.base_url"
    pub path: String,
    pub message: String,
}

/// Result of validating a settings block.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Returns `true` if any diagnostic is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Count diagnostics by severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    fn push(
        &mut self,
        severity: Severity,
        category: &'static str,
        path: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(Diagnostic {
            severity,
            category,
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate a settings block.
#[must_use]
pub fn validate(settings: &AiSettings) -> ValidationResult {
    let mut result = ValidationResult::default();

    if !settings.providers.contains_key(&settings.default_provider) {
        result.push(
            Severity::Warning,
            "general",
            "default_provider",
            format!(
                "default provider '{}' has no configured entry",
                settings.default_provider
            ),
        );
    }

    for (name, entry) in &settings.providers {
        let base = format!("providers.{name}");

        if entry.enabled && entry.base_url.trim().is_empty() {
            result.push(
                Severity::Error,
                "provider",
                format!("{base}.base_url"),
                "enabled provider has no base URL",
            );
        } else if !entry.base_url.trim().is_empty()
            && url::Url::parse(entry.base_url.trim()).is_err()
        {
            result.push(
                Severity::Error,
                "provider",
                format!("{base}.base_url"),
                format!("'{}' is not a valid URL", entry.base_url),
            );
        }

        if entry.enabled && entry.api_key_value().is_none() {
            result.push(
                Severity::Warning,
                "provider",
                format!("{base}.api_key"),
                "enabled provider has no API key; discovery will fall back to defaults",
            );
        }

        if !(0.0..=2.0).contains(&entry.temperature) {
            result.push(
                Severity::Warning,
                "provider",
                format!("{base}.temperature"),
                format!("temperature {} outside the usual 0.0-2.0 range", entry.temperature),
            );
        }

        if entry.max_tokens == 0 {
            result.push(
                Severity::Error,
                "provider",
                format!("{base}.max_tokens"),
                "max_tokens must be greater than zero",
            );
        }

        if entry.timeout_secs == 0 {
            result.push(
                Severity::Error,
                "provider",
                format!("{base}.timeout_secs"),
                "timeout must be greater than zero; an unbounded request blocks the app",
            );
        }
    }

    if settings.proxy.enabled && settings.proxy.http.is_none() && settings.proxy.https.is_none() {
        result.push(
            Severity::Warning,
            "proxy",
            "proxy",
            "proxy is enabled but no proxy URL is configured",
        );
    }

    result
}
