//! Recognition locales and operator feedback strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Recognition locale offered to the operator. `None` disables voice
/// input. The rewrite vocabulary itself is shared across locales (the
/// French and Arabic tables always both apply); the locale only tells the
/// capture collaborator which language to listen for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    None,
    Arabic,
    French,
    English,
}

impl Language {
    /// BCP-47 tag handed to the speech-recognition collaborator, or
    /// `None` when voice input is off.
    pub fn bcp47(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Arabic => Some("ar-SA"),
            Self::French => Some("fr-FR"),
            Self::English => Some("en-US"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Arabic => write!(f, "ar"),
            Self::French => write!(f, "fr"),
            Self::English => write!(f, "en"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "ar" | "ar-SA" => Ok(Self::Arabic),
            "fr" | "fr-FR" => Ok(Self::French),
            "en" | "en-US" => Ok(Self::English),
            other => Err(format!("unknown language: '{other}' (expected none, ar, fr, en)")),
        }
    }
}

/// Feedback strings the capture collaborator shows while listening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub listening: &'static str,
    pub speak: &'static str,
    pub error: &'static str,
}

impl Messages {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Arabic => Self {
                listening: "جاري الاستماع...",
                speak: "تحدث بوضوح من فضلك",
                error: "خطأ في التعرف على الصوت. حاول مرة أخرى",
            },
            Language::French => Self {
                listening: "Écoute en cours...",
                speak: "Parlez clairement s'il vous plaît",
                error: "Erreur de reconnaissance vocale. Veuillez réessayer.",
            },
            Language::English | Language::None => Self {
                listening: "Listening...",
                speak: "Please speak clearly",
                error: "Voice recognition error. Please try again.",
            },
        }
    }
}
