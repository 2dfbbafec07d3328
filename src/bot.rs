//! Hooks for bot detection.
//!
//! Deciding whether a header belongs to a crawler is left to the caller.
//! The classifiers consult a [`BotDetector`] at the two points where they
//! cannot tell a browser from a bot on their own:
//!
//! - `WebKit` headers on Linux with exactly three comment tokens, and `WebKit`
//!   headers with exactly two comment tokens, are typical of crawlers
//!   posing as Android browsers. When [`BotDetector::is_disguised`] agrees,
//!   the platform is cleared and the header is left undecided.
//! - Undecided headers, whose platform could not be classified, are handed
//!   to [`BotDetector::detect`].

use crate::section::Sections;

/// A bot identified by a [`BotDetector`].
///
/// When applied, the bot's name and version replace the browser's, the
/// record is marked as a bot and it is no longer undecided.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bot {
    /// Bot name, e.g. `Googlebot`.
    pub name: String,
    /// Bot version, empty when unknown.
    pub version: String,
}

impl Bot {
    /// Creates a bot verdict.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Decides whether a header comes from a bot.
///
/// Both methods default to "not a bot".
///
/// # Examples
///
/// ```
/// use user_agent::{Bot, BotDetector, Parser, Sections};
///
/// struct Curl;
///
/// impl BotDetector for Curl {
///     fn detect(&self, _ua: &str, sections: &Sections) -> Option<Bot> {
///         let first = sections.first()?;
///         (first.name() == "curl").then(|| Bot::new("curl", first.version()))
///     }
/// }
///
/// let ua = Parser::new().with_bot_detector(Curl).parse("curl/8.4.0");
/// assert!(ua.is_bot());
/// assert_eq!(ua.browser().name, "curl");
/// assert!(!ua.is_undecided());
/// ```
pub trait BotDetector {
    /// Called for undecided headers.
    fn detect(&self, ua: &str, sections: &Sections) -> Option<Bot> {
        let _ = (ua, sections);
        None
    }

    /// Called for `WebKit` headers whose short comment is shared by
    /// Android browsers and crawlers imitating them.
    fn is_disguised(&self, ua: &str) -> bool {
        let _ = ua;
        false
    }
}

/// A [`BotDetector`] that never reports a bot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoBotDetection;

impl BotDetector for NoBotDetection {}

impl<D: BotDetector + ?Sized> BotDetector for &D {
    fn detect(&self, ua: &str, sections: &Sections) -> Option<Bot> {
        (**self).detect(ua, sections)
    }

    fn is_disguised(&self, ua: &str) -> bool {
        (**self).is_disguised(ua)
    }
}

impl<D: BotDetector + ?Sized> BotDetector for Box<D> {
    fn detect(&self, ua: &str, sections: &Sections) -> Option<Bot> {
        (**self).detect(ua, sections)
    }

    fn is_disguised(&self, ua: &str) -> bool {
        (**self).is_disguised(ua)
    }
}
