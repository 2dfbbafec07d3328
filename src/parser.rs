//! Configurable parser running the classification pipeline.

use crate::bot::{BotDetector, NoBotDetection};
use crate::browser;
use crate::constants::MOZILLA;
use crate::platform;
use crate::tokenizer::tokenize;
use crate::user_agent::UserAgent;

/// A user agent parser.
///
/// [`UserAgent::parse`] uses the default parser, which never reports bots.
/// Plug in a [`BotDetector`] to resolve the headers the classifiers leave
/// undecided.
///
/// Parsing takes `&self`, so one parser can be shared between threads as
/// long as its detector allows it.
///
/// # Examples
///
/// ```
/// use user_agent::Parser;
///
/// let parser = Parser::new();
/// let ua = parser.parse("Mozilla/5.0 (Windows NT 6.1; WOW64; rv:40.0) Gecko/20100101 Firefox/40.1");
/// assert_eq!(ua.browser().name, "Firefox");
/// assert_eq!(ua.os_info().name, "Windows");
/// assert_eq!(ua.os_info().version, "7");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser<D = NoBotDetection> {
    bots: D,
}

impl Parser {
    /// Creates a parser without bot detection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bots: NoBotDetection,
        }
    }
}

impl<D: BotDetector> Parser<D> {
    /// Replaces the bot detector.
    #[must_use]
    pub fn with_bot_detector<E: BotDetector>(self, bots: E) -> Parser<E> {
        Parser { bots }
    }

    /// Returns the bot detector.
    #[must_use]
    pub const fn bot_detector(&self) -> &D {
        &self.bots
    }

    /// Parses a user agent header.
    ///
    /// Never fails: fields that cannot be determined stay empty.
    #[must_use]
    pub fn parse(&self, ua: &str) -> UserAgent {
        let tokenized = tokenize(ua);
        let sections = &tokenized.sections;
        let Some(first) = sections.first() else {
            return UserAgent {
                ua: ua.to_string(),
                ..UserAgent::default()
            };
        };

        let browser = browser::detect(sections);
        let mozilla = match browser.mozilla {
            Some(implied) => implied,
            None if first.name() == MOZILLA => first.version(),
            None => "",
        }
        .to_string();

        let mut stage = platform::detect(first, browser, tokenized.mobile, ua, &self.bots);

        let mut bot = false;
        if stage.undecided {
            match self.bots.detect(ua, sections) {
                Some(found) => {
                    tracing::debug!(name = %found.name, "user agent classified as bot");
                    stage.browser.name = found.name;
                    stage.browser.version = found.version;
                    stage.undecided = false;
                    bot = true;
                }
                None => tracing::debug!(ua, "user agent platform undecided"),
            }
        }

        UserAgent {
            ua: ua.to_string(),
            mozilla,
            platform: stage.platform,
            os: stage.os,
            localization: stage.localization,
            browser: stage.browser,
            bot,
            mobile: stage.mobile,
            undecided: stage.undecided,
        }
    }
}
