//! Platform, OS, localization and mobile detection.
//!
//! Runs after the browser stage: the first section's comment means
//! different things depending on the engine, so each engine family gets
//! its own reading of it.

use crate::bot::BotDetector;
use crate::browser::{Browser, BrowserStage};
use crate::constants::{DEFAULT_TRIDENT_OS, SECURITY_TOKEN};
use crate::identity::{Compat, EngineKind, PlatformHint};
use crate::os::normalize_os;
use crate::section::Section;

/// Output of the platform stage.
///
/// Carries the browser along, since some platforms rename it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PlatformStage {
    pub(crate) browser: Browser,
    pub(crate) platform: String,
    pub(crate) os: String,
    pub(crate) localization: String,
    pub(crate) mobile: bool,
    pub(crate) undecided: bool,
}

/// Detects the platform fields from the first section.
///
/// `mobile` is the flag collected by the tokenizer; it is only ever
/// raised here, except for desktop Linux `WebKit` builds.
pub(crate) fn detect<D>(
    first: &Section,
    browser: BrowserStage,
    mobile: bool,
    ua: &str,
    bots: &D,
) -> PlatformStage
where
    D: BotDetector + ?Sized,
{
    let engine = browser.engine();
    let mut stage = PlatformStage {
        browser: browser.browser,
        mobile,
        ..PlatformStage::default()
    };
    let comment = first.comment();

    match Compat::from_name(first.name()) {
        Compat::Mozilla => {
            let hint = PlatformHint::from_comment(comment);
            if let (PlatformHint::Windows, Some(first_token)) = (&hint, comment.first()) {
                stage.os = normalize_os(first_token);
            }
            stage.platform = hint.clone().into_platform();

            match engine {
                EngineKind::None => stage.undecided = true,
                EngineKind::Gecko => stage.gecko(comment),
                EngineKind::AppleWebKit => stage.webkit(&hint, comment, ua, bots),
                EngineKind::Trident => stage.trident(comment),
                _ => {}
            }
        }
        Compat::Opera if !comment.is_empty() => stage.opera(comment),
        Compat::Dalvik if !comment.is_empty() => stage.dalvik(comment),
        Compat::Opera | Compat::Dalvik => {}
        Compat::Other => stage.undecided = true,
    }

    tracing::trace!(
        platform = %stage.platform,
        os = %stage.os,
        localization = %stage.localization,
        mobile = stage.mobile,
        undecided = stage.undecided,
        "platform stage"
    );
    stage
}

impl PlatformStage {
    fn webkit<D>(&mut self, hint: &PlatformHint, comment: &[String], ua: &str, bots: &D)
    where
        D: BotDetector + ?Sized,
    {
        match hint {
            PlatformHint::WebOs => {
                self.browser.name.clone_from(&self.platform);
                self.os = "Palm".to_string();
                if let Some(localization) = comment.get(2) {
                    self.localization.clone_from(localization);
                }
                self.mobile = true;
            }
            PlatformHint::Symbian => {
                self.mobile = true;
                self.browser.name.clone_from(&self.platform);
                self.os = comment.first().cloned().unwrap_or_default();
            }
            PlatformHint::Raw(token) if token == "Linux" => {
                self.mobile = true;
                if self.browser.name == "Safari" {
                    self.browser.name = "Android".to_string();
                }
                match comment {
                    [first, second, rest @ ..] if second == SECURITY_TOKEN => match rest.first() {
                        Some(os) => self.os.clone_from(os),
                        None => {
                            // desktop build
                            self.mobile = false;
                            self.os.clone_from(first);
                        }
                    },
                    [_, second, ..] => self.os.clone_from(second),
                    _ => {}
                }
                if let Some(localization) = comment.get(3) {
                    self.localization.clone_from(localization);
                } else if comment.len() == 3 {
                    self.check_disguised(ua, bots);
                }
            }
            _ if !comment.is_empty() => {
                if let Some(localization) = comment.get(3) {
                    self.localization.clone_from(localization);
                }
                match comment {
                    [first, ..] if first.starts_with("Windows NT") => self.os = normalize_os(first),
                    [only] => self.localization.clone_from(only),
                    [_, second] => {
                        if !self.check_disguised(ua, bots) {
                            self.os = normalize_os(second);
                        }
                    }
                    [_, _, third, ..] => self.os = normalize_os(third),
                    [] => {}
                }
                if self.platform == "BlackBerry" {
                    self.browser.name.clone_from(&self.platform);
                    if self.os == "Touch" {
                        self.os.clone_from(&self.platform);
                    }
                }
            }
            _ => {}
        }
    }

    fn gecko(&mut self, comment: &[String]) {
        let [first, second, rest @ ..] = comment else {
            return;
        };

        if second == SECURITY_TOKEN {
            self.os = normalize_os(rest.first().unwrap_or(second));
        } else if self.platform == "Android" {
            // Firefox for Android reports `Android; Mobile`: platform and
            // OS come in the opposite order.
            self.mobile = true;
            let platform = std::mem::replace(&mut self.platform, normalize_os(second));
            self.os = platform;
        } else if first == "Mobile" || first == "Tablet" {
            self.mobile = true;
            self.os = "FirefoxOS".to_string();
        } else if self.os.is_empty() {
            self.os = normalize_os(second);
        }

        // Firefox on Ubuntu puts `rv:XX.X` where the locale usually is.
        if let Some(localization) = comment.get(3).filter(|token| !token.starts_with("rv:")) {
            self.localization.clone_from(localization);
        }
    }

    fn trident(&mut self, comment: &[String]) {
        self.platform = "Windows".to_string();

        // IE11 headers already set the OS from the platform token.
        if self.os.is_empty() {
            self.os = comment
                .get(2)
                .map_or_else(|| DEFAULT_TRIDENT_OS.to_string(), |os| normalize_os(os));
        }

        if comment.iter().any(|token| token.starts_with("IEMobile")) {
            self.mobile = true;
        }
    }

    fn opera(&mut self, comment: &[String]) {
        let Some(first) = comment.first() else {
            return;
        };

        if first.starts_with("Windows") {
            self.platform = "Windows".to_string();
            self.os = normalize_os(first);
            match comment {
                [_, _, third, fourth, ..] if third.starts_with("MRA") => {
                    self.localization.clone_from(fourth);
                }
                [_, _, third, ..] => self.localization.clone_from(third),
                _ => {}
            }
        } else {
            if first.starts_with("Android") {
                self.mobile = true;
            }
            self.platform.clone_from(first);
            if let Some(os) = comment.get(1) {
                self.os.clone_from(os);
                if let Some(localization) = comment.get(3) {
                    self.localization.clone_from(localization);
                }
            } else {
                self.os.clone_from(first);
            }
        }
    }

    fn dalvik(&mut self, comment: &[String]) {
        let Some(first) = comment.first().filter(|token| token.starts_with("Linux")) else {
            return;
        };
        self.platform.clone_from(first);
        if let Some(os) = comment.get(2) {
            self.os.clone_from(os);
        }
        self.mobile = true;
    }

    /// Defers to bot detection when the detector flags the header.
    fn check_disguised<D>(&mut self, ua: &str, bots: &D) -> bool
    where
        D: BotDetector + ?Sized,
    {
        if bots.is_disguised(ua) {
            tracing::debug!(ua, "webkit header deferred to bot detection");
            self.platform.clear();
            self.undecided = true;
        }
        self.undecided
    }
}
