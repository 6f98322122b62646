//! Static model catalog: per-family default model lists, provider presets,
//! and task-based recommendations.
//!
//! The default lists are the fallback shown when live discovery fails, so
//! they intentionally stay short and conservative.

use crate::family::ServiceFamily;

const OPENAI_DEFAULTS: &[&str] = &[
    "gpt-3.5-turbo",
    "gpt-4",
    "gpt-4-turbo",
    "gpt-4o",
    "gpt-4o-mini",
];

const DEEPSEEK_DEFAULTS: &[&str] = &["deepseek-chat", "deepseek-coder"];

const QIANWEN_DEFAULTS: &[&str] = &["qwen-turbo", "qwen-plus", "qwen-max", "qwen-long"];

const GEMINI_DEFAULTS: &[&str] = &["gemini-1.5-flash", "gemini-1.5-pro", "gemini-pro"];

const CLAUDE_DEFAULTS: &[&str] = &[
    "claude-3-haiku-20240307",
    "claude-3-sonnet-20240229",
    "claude-3-opus-20240229",
    "claude-3-5-sonnet-20241022",
];

/// Default model identifiers for a service family.
///
/// [`ServiceFamily::Unknown`] maps to the OpenAI list: an unrecognized
/// endpoint is assumed to be OpenAI-compatible, and `gpt-3.5-turbo` is the
/// most widely aliased ID among aggregators.
#[must_use]
pub fn default_models(family: ServiceFamily) -> &'static [&'static str] {
    match family {
        ServiceFamily::OpenAi | ServiceFamily::Unknown => OPENAI_DEFAULTS,
        ServiceFamily::DeepSeek => DEEPSEEK_DEFAULTS,
        ServiceFamily::Qianwen => QIANWEN_DEFAULTS,
        ServiceFamily::Gemini => GEMINI_DEFAULTS,
        ServiceFamily::Claude => CLAUDE_DEFAULTS,
    }
}

/// Preset definition used to pre-fill provider settings.
#[derive(Debug, Clone, Copy)]
pub struct KnownProvider {
    pub name: &'static str,
    pub display_name: &'static str,
    pub default_base_url: &'static str,
    pub default_model: &'static str,
}

/// Built-in provider presets, in display order.
#[must_use]
pub fn known_providers() -> &'static [KnownProvider] {
    &[
        KnownProvider {
            name: "deepseek",
            display_name: "DeepSeek",
            default_base_url: "https://api.deepseek.com/v1",
            default_model: "deepseek-chat",
        },
        KnownProvider {
            name: "gemini",
            display_name: "Google Gemini",
            default_base_url: "https://generativelanguage.googleapis.com/v1beta",
            default_model: "gemini-1.5-flash",
        },
        KnownProvider {
            name: "qianwen",
            display_name: "Qianwen",
            default_base_url: "https://dashscope.aliyuncs.com/compatible-mode/v1",
            default_model: "qwen-turbo",
        },
        KnownProvider {
            name: "openai",
            display_name: "OpenAI",
            default_base_url: "https://api.openai.com/v1",
            default_model: "gpt-3.5-turbo",
        },
        KnownProvider {
            name: "newapi",
            display_name: "NewAPI",
            default_base_url: "",
            default_model: "gpt-3.5-turbo",
        },
    ]
}

/// Recommended model picks by task kind ("chat", "code", "creative",
/// "analysis"). Unknown tasks return an empty slice.
#[must_use]
pub fn recommended_models(task: &str) -> &'static [&'static str] {
    match task {
        "chat" => &["deepseek-chat", "gpt-3.5-turbo", "gemini-1.5-flash"],
        "code" => &["deepseek-coder", "gpt-4", "claude-3-sonnet"],
        "creative" => &["gpt-4", "claude-3-opus", "gemini-1.5-pro"],
        "analysis" => &["gpt-4", "claude-3-sonnet", "qwen-max"],
        _ => &[],
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_family_has_defaults() {
        for family in [
            ServiceFamily::OpenAi,
            ServiceFamily::DeepSeek,
            ServiceFamily::Qianwen,
            ServiceFamily::Gemini,
            ServiceFamily::Claude,
            ServiceFamily::Unknown,
        ] {
            assert!(
                !default_models(family).is_empty(),
                "no defaults for {family}"
            );
        }
    }

    #[test]
    fn unknown_family_gets_generic_openai_list() {
        assert_eq!(
            default_models(ServiceFamily::Unknown),
            default_models(ServiceFamily::OpenAi)
        );
        assert_eq!(default_models(ServiceFamily::Unknown)[0], "gpt-3.5-turbo");
    }

    #[test]
    fn known_provider_names_unique() {
        let providers = known_providers();
        let mut names: Vec<&str> = providers.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), providers.len());
    }

    #[test]
    fn presets_with_base_urls_detect_as_their_family() {
        for preset in known_providers() {
            if preset.default_base_url.is_empty() {
                continue;
            }
            let family = ServiceFamily::detect(preset.default_base_url);
            assert_eq!(
                family.as_str(),
                preset.name,
                "preset {} detects as {family}",
                preset.name
            );
        }
    }

    #[test]
    fn recommended_models_cover_known_tasks() {
        for task in ["chat", "code", "creative", "analysis"] {
            assert!(!recommended_models(task).is_empty());
        }
        assert!(recommended_models("juggling").is_empty());
    }
}
