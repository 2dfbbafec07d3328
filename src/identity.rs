//! Tagged identities the classifiers dispatch on.

use std::fmt;

use crate::constants::{COMPATIBLE_TOKEN, DALVIK, MOZILLA, OPERA};

/// Identity of the leading section of a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compat {
    /// `Mozilla/x.y`, shared by nearly every browser
    Mozilla,
    /// `Opera/x.y`, Presto era Opera
    Opera,
    /// `Dalvik/x.y`, Android VM clients
    Dalvik,
    /// Anything else: bots, libraries, unknown clients
    Other,
}

impl Compat {
    /// Classifies a first-section name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            MOZILLA => Self::Mozilla,
            OPERA => Self::Opera,
            DALVIK => Self::Dalvik,
            _ => Self::Other,
        }
    }
}

/// Rendering engine identity.
///
/// The engine string stored on a [`Browser`](crate::Browser) is free text
/// (any second-section name); this enum only names the values that change
/// how a header is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// No engine detected
    None,
    /// `WebKit` and Blink, which still advertise `AppleWebKit`
    AppleWebKit,
    /// Gecko
    Gecko,
    /// Trident (Internet Explorer)
    Trident,
    /// Presto (Opera up to 12)
    Presto,
    /// `EdgeHTML` (legacy Edge)
    EdgeHtml,
    /// The `like` of IE11's `like Gecko` trailer
    Like,
    /// Any other engine token
    Other,
}

impl EngineKind {
    /// Classifies an engine name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "" => Self::None,
            "AppleWebKit" => Self::AppleWebKit,
            "Gecko" => Self::Gecko,
            "Trident" => Self::Trident,
            "Presto" => Self::Presto,
            "EdgeHTML" => Self::EdgeHtml,
            "like" => Self::Like,
            _ => Self::Other,
        }
    }

    /// Returns the canonical engine name, or `None` for unnamed variants.
    #[must_use]
    pub const fn as_str(self) -> Option<&'static str> {
        match self {
            Self::AppleWebKit => Some("AppleWebKit"),
            Self::Gecko => Some("Gecko"),
            Self::Trident => Some("Trident"),
            Self::Presto => Some("Presto"),
            Self::EdgeHtml => Some("EdgeHTML"),
            Self::Like => Some("like"),
            Self::None | Self::Other => None,
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Other => write!(f, "other"),
            named => write!(f, "{}", named.as_str().unwrap_or_default()),
        }
    }
}

/// Platform family derived from the first comment token of a Mozilla header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum PlatformHint {
    /// No comment, or the comment starts with `compatible`
    Unknown,
    Windows,
    Symbian,
    WebOs,
    BlackBerry,
    /// The raw token, used verbatim
    Raw(String),
}

impl PlatformHint {
    pub(crate) fn from_comment(comment: &[String]) -> Self {
        let Some(first) = comment.first() else {
            return Self::Unknown;
        };
        match first.as_str() {
            COMPATIBLE_TOKEN => Self::Unknown,
            token if token.starts_with("Windows") => Self::Windows,
            token if token.starts_with("Symbian") => Self::Symbian,
            token if token.starts_with("webOS") => Self::WebOs,
            "BB10" => Self::BlackBerry,
            token => Self::Raw(token.to_string()),
        }
    }

    pub(crate) fn into_platform(self) -> String {
        match self {
            Self::Unknown => String::new(),
            Self::Windows => "Windows".to_string(),
            Self::Symbian => "Symbian".to_string(),
            Self::WebOs => "webOS".to_string(),
            Self::BlackBerry => "BlackBerry".to_string(),
            Self::Raw(token) => token,
        }
    }
}
