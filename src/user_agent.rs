//! The parsed user agent record.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::browser::Browser;
use crate::os::OsInfo;
use crate::parser::Parser;

/// Everything extracted from a `User-Agent` header.
///
/// Fields are best effort: anything the header does not reveal is left
/// empty (or `false`).
///
/// # Examples
///
/// ```
/// use user_agent::UserAgent;
///
/// let ua = UserAgent::parse(
///     "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2228.0 Safari/537.36",
/// );
/// assert_eq!(ua.mozilla(), "5.0");
/// assert_eq!(ua.platform(), "Windows");
/// assert_eq!(ua.os(), "Windows 7");
/// assert_eq!(ua.browser_name_version(), ("Chrome", "41.0.2228.0"));
/// assert_eq!(ua.engine(), ("AppleWebKit", "537.36"));
/// assert!(!ua.is_mobile());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserAgent {
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) ua: String,
    pub(crate) mozilla: String,
    pub(crate) platform: String,
    pub(crate) os: String,
    pub(crate) localization: String,
    pub(crate) browser: Browser,
    #[cfg_attr(feature = "serde", serde(rename = "is_bot"))]
    pub(crate) bot: bool,
    #[cfg_attr(feature = "serde", serde(rename = "is_mobile"))]
    pub(crate) mobile: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) undecided: bool,
}

impl UserAgent {
    /// Parses a header with the default [`Parser`].
    #[must_use]
    pub fn parse(ua: &str) -> Self {
        Parser::new().parse(ua)
    }

    /// Returns the header this record was parsed from.
    #[must_use]
    pub fn ua(&self) -> &str {
        &self.ua
    }

    /// Returns the Mozilla compatibility version, e.g. `5.0`.
    #[must_use]
    pub fn mozilla(&self) -> &str {
        &self.mozilla
    }

    /// Returns the platform, e.g. `Windows`, `X11`, `iPhone`, `Linux`.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Returns the raw OS string, e.g. `Windows 7` or `Intel Mac OS X 10_6_8`.
    #[must_use]
    pub fn os(&self) -> &str {
        &self.os
    }

    /// Returns the localization, e.g. `en-US`.
    #[must_use]
    pub fn localization(&self) -> &str {
        &self.localization
    }

    /// Returns the browser and engine details.
    #[must_use]
    pub const fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Returns the engine name and version.
    #[must_use]
    pub fn engine(&self) -> (&str, &str) {
        (&self.browser.engine, &self.browser.engine_version)
    }

    /// Returns the browser name and version.
    #[must_use]
    pub fn browser_name_version(&self) -> (&str, &str) {
        (&self.browser.name, &self.browser.version)
    }

    /// Returns true if a bot detector identified the header as a bot.
    #[must_use]
    pub const fn is_bot(&self) -> bool {
        self.bot
    }

    /// Returns true if the header belongs to a mobile device.
    #[must_use]
    pub const fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// Returns true if the platform could not be classified and no bot
    /// detector claimed the header.
    #[must_use]
    pub const fn is_undecided(&self) -> bool {
        self.undecided
    }

    /// Returns the name and version breakdown of [`os`](Self::os).
    #[must_use]
    pub fn os_info(&self) -> OsInfo {
        OsInfo::from_os(&self.os)
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ua)
    }
}

impl From<&str> for UserAgent {
    fn from(ua: &str) -> Self {
        Self::parse(ua)
    }
}

impl From<String> for UserAgent {
    fn from(ua: String) -> Self {
        Self::parse(&ua)
    }
}

impl FromStr for UserAgent {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
