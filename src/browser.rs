//! Browser and rendering engine detection.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{COMPATIBLE_TOKEN, DALVIK_MOZILLA_VERSION, INTERNET_EXPLORER};
use crate::identity::{Compat, EngineKind};
use crate::section::{Section, Sections};

static IE11_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^rv:(.+)$").expect("IE11 version pattern is valid"));

/// Browser and rendering engine reported by a user agent.
///
/// All fields are empty when nothing could be detected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Browser {
    /// Rendering engine, e.g. `AppleWebKit`, `Gecko`, `Trident`, `Presto`.
    pub engine: String,
    /// Version of the rendering engine.
    pub engine_version: String,
    /// Browser name, e.g. `Chrome`, `Firefox`, `Internet Explorer`.
    pub name: String,
    /// Browser version.
    pub version: String,
}

impl Browser {
    /// Classifies the engine string.
    #[must_use]
    pub fn engine_kind(&self) -> EngineKind {
        EngineKind::from_name(&self.engine)
    }
}

/// Output of the browser stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BrowserStage {
    pub(crate) browser: Browser,
    /// Mozilla version implied by the client, when the header does not say.
    pub(crate) mozilla: Option<&'static str>,
}

impl BrowserStage {
    /// Engine identity, final once this stage has run.
    pub(crate) fn engine(&self) -> EngineKind {
        self.browser.engine_kind()
    }
}

/// Detects browser and engine from the full section sequence.
pub(crate) fn detect(sections: &Sections) -> BrowserStage {
    let mut stage = BrowserStage::default();
    let Some(first) = sections.first() else {
        return stage;
    };

    match Compat::from_name(first.name()) {
        Compat::Opera => stage.browser = presto(sections, first),
        Compat::Dalvik => stage.mozilla = Some(DALVIK_MOZILLA_VERSION),
        _ if sections.len() > 1 => stage.browser = by_engine(sections, first),
        _ => {
            if let Some(browser) = legacy_internet_explorer(first) {
                stage.browser = browser;
            }
        }
    }

    tracing::trace!(
        engine = %stage.browser.engine,
        name = %stage.browser.name,
        version = %stage.browser.version,
        "browser stage"
    );
    stage
}

fn presto(sections: &Sections, first: &Section) -> Browser {
    Browser {
        engine: "Presto".to_string(),
        engine_version: sections.version_at(1).unwrap_or_default().to_string(),
        name: "Opera".to_string(),
        version: first.version().to_string(),
    }
}

/// The second section names the engine, the sections after it the browser.
fn by_engine(sections: &Sections, first: &Section) -> Browser {
    let mut browser = Browser::default();
    let Some(engine) = sections.get(1) else {
        return browser;
    };
    browser.engine = engine.name().to_string();
    browser.engine_version = engine.version().to_string();

    let Some(third) = sections.get(2) else {
        return browser;
    };
    // Some Linux builds emit an empty-version section right after the engine.
    let versioned = match sections.get(3) {
        Some(fourth) if third.version().is_empty() => fourth,
        _ => third,
    };
    browser.version = versioned.version().to_string();

    match EngineKind::from_name(engine.name()) {
        EngineKind::AppleWebKit => webkit_browser(&mut browser, sections, versioned),
        EngineKind::Gecko => match sections.get(4) {
            // vendor builds injecting an `MRA` token before the browser
            Some(fifth) if third.name() == "MRA" => {
                browser.name = fifth.name().to_string();
                browser.version = fifth.version().to_string();
            }
            _ => browser.name = third.name().to_string(),
        },
        EngineKind::Like if third.name() == "Gecko" => {
            // Internet Explorer 11 dropped the MSIE token for `like Gecko`.
            browser.engine = "Trident".to_string();
            browser.name = INTERNET_EXPLORER.to_string();
            browser.version = first
                .comment()
                .iter()
                .find_map(|token| IE11_VERSION.captures(token))
                .and_then(|captures| captures.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
        }
        _ => {}
    }

    browser
}

/// `WebKit` derived browsers identify themselves in the last section, or
/// else in the version-bearing one.
fn webkit_browser(browser: &mut Browser, sections: &Sections, versioned: &Section) {
    let Some(last) = sections.last() else {
        return;
    };
    match last.name() {
        "Edge" => {
            browser.name = "Edge".to_string();
            browser.version = last.version().to_string();
            browser.engine = "EdgeHTML".to_string();
            browser.engine_version.clear();
        }
        "OPR" => {
            browser.name = "Opera".to_string();
            browser.version = last.version().to_string();
        }
        _ => {
            browser.name = match versioned.name() {
                "Chrome" => "Chrome",
                "Chromium" => "Chromium",
                _ => "Safari",
            }
            .to_string();
        }
    }
}

/// `Mozilla/4.0 (compatible; MSIE 8.0; ...; Trident/4.0)`
fn legacy_internet_explorer(first: &Section) -> Option<Browser> {
    let comment = first.comment();
    let [compatible, msie, ..] = comment else {
        return None;
    };
    let msie_version = msie.strip_prefix("MSIE")?;
    if compatible != COMPATIBLE_TOKEN {
        return None;
    }

    // For IE 8 to 10 the Trident token is more accurate than MSIE, which
    // may report the compatibility version instead.
    let trident_version = comment
        .iter()
        .find_map(|token| token.strip_prefix("Trident/"))
        .and_then(|trident| match trident {
            "4.0" => Some("8.0"),
            "5.0" => Some("9.0"),
            "6.0" => Some("10.0"),
            _ => None,
        });

    Some(Browser {
        engine: "Trident".to_string(),
        engine_version: String::new(),
        name: INTERNET_EXPLORER.to_string(),
        version: trident_version.map_or_else(|| msie_version.trim().to_string(), str::to_string),
    })
}
