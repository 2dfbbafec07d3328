//! End-to-end parsing of real-world headers.

use user_agent::{Bot, BotDetector, Parser, Sections, UserAgent};

/// Expected record for one header.
#[derive(Debug, Default)]
struct Expected {
    mozilla: &'static str,
    platform: &'static str,
    os: &'static str,
    localization: &'static str,
    engine: (&'static str, &'static str),
    browser: (&'static str, &'static str),
    mobile: bool,
    os_name: &'static str,
    os_version: &'static str,
}

fn check(header: &str, expected: &Expected) {
    let ua = UserAgent::parse(header);
    assert_eq!(ua.ua(), header);
    assert_eq!(ua.mozilla(), expected.mozilla, "mozilla of {header}");
    assert_eq!(ua.platform(), expected.platform, "platform of {header}");
    assert_eq!(ua.os(), expected.os, "os of {header}");
    assert_eq!(ua.localization(), expected.localization, "localization of {header}");
    assert_eq!(ua.engine(), expected.engine, "engine of {header}");
    assert_eq!(ua.browser_name_version(), expected.browser, "browser of {header}");
    assert_eq!(ua.is_mobile(), expected.mobile, "mobile of {header}");
    assert!(!ua.is_bot(), "bot: {header}");
    assert!(!ua.is_undecided(), "undecided: {header}");

    let info = ua.os_info();
    assert_eq!(info.full_name, expected.os);
    assert_eq!(info.name, expected.os_name, "os name of {header}");
    assert_eq!(info.version, expected.os_version, "os version of {header}");
}

#[test]
fn chrome_on_windows_7() {
    check(
        "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2228.0 Safari/537.36",
        &Expected {
            mozilla: "5.0",
            platform: "Windows",
            os: "Windows 7",
            engine: ("AppleWebKit", "537.36"),
            browser: ("Chrome", "41.0.2228.0"),
            os_name: "Windows",
            os_version: "7",
            ..Expected::default()
        },
    );
}

#[test]
fn internet_explorer_9() {
    check(
        "Mozilla/5.0 (compatible; MSIE 9.0; Windows NT 6.1; Trident/5.0)",
        &Expected {
            mozilla: "5.0",
            platform: "Windows",
            os: "Windows 7",
            engine: ("Trident", ""),
            browser: ("Internet Explorer", "9.0"),
            os_name: "Windows",
            os_version: "7",
            ..Expected::default()
        },
    );
}

#[test]
fn internet_explorer_11() {
    check(
        "Mozilla/5.0 (Windows NT 6.3; Trident/7.0; rv:11.0) like Gecko",
        &Expected {
            mozilla: "5.0",
            platform: "Windows",
            os: "Windows 8.1",
            engine: ("Trident", ""),
            browser: ("Internet Explorer", "11.0"),
            os_name: "Windows",
            os_version: "8.1",
            ..Expected::default()
        },
    );
}

#[test]
fn firefox_on_windows() {
    check(
        "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:40.0) Gecko/20100101 Firefox/40.1",
        &Expected {
            mozilla: "5.0",
            platform: "Windows",
            os: "Windows 7",
            engine: ("Gecko", "20100101"),
            browser: ("Firefox", "40.1"),
            os_name: "Windows",
            os_version: "7",
            ..Expected::default()
        },
    );
}

#[test]
fn firefox_on_windows_xp_with_locale() {
    check(
        "Mozilla/5.0 (Windows; U; Windows NT 5.1; en-US; rv:1.9.2.8) Gecko/20100722 Firefox/3.6.8",
        &Expected {
            mozilla: "5.0",
            platform: "Windows",
            os: "Windows XP",
            localization: "en-US",
            engine: ("Gecko", "20100722"),
            browser: ("Firefox", "3.6.8"),
            os_name: "Windows",
            os_version: "XP",
            ..Expected::default()
        },
    );
}

#[test]
fn safari_on_mac() {
    check(
        "Mozilla/5.0 (Macintosh; U; Intel Mac OS X 10_6_3; en-us) AppleWebKit/531.22.7 (KHTML, like Gecko) Version/4.0.5 Safari/531.22.7",
        &Expected {
            mozilla: "5.0",
            platform: "Macintosh",
            os: "Intel Mac OS X 10_6_3",
            localization: "en-us",
            engine: ("AppleWebKit", "531.22.7"),
            browser: ("Safari", "4.0.5"),
            os_name: "Mac OS X",
            os_version: "10.6.3",
            ..Expected::default()
        },
    );
}

#[test]
fn safari_on_iphone() {
    check(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 7_0 like Mac OS X) AppleWebKit/546.10 (KHTML, like Gecko) Version/6.0 Mobile/7E18WD Safari/8536.25",
        &Expected {
            mozilla: "5.0",
            platform: "iPhone",
            os: "CPU iPhone OS 7_0 like Mac OS X",
            engine: ("AppleWebKit", "546.10"),
            browser: ("Safari", "6.0"),
            mobile: true,
            os_name: "iPhone OS",
            os_version: "7.0",
            ..Expected::default()
        },
    );
}

#[test]
fn android_stock_browser() {
    check(
        "Mozilla/5.0 (Linux; U; Android 4.0.3; de-ch; HTC Sensation Build/IML74K) AppleWebKit/534.30 (KHTML, like Gecko) Version/4.0 Mobile Safari/534.30",
        &Expected {
            mozilla: "5.0",
            platform: "Linux",
            os: "Android 4.0.3",
            localization: "de-ch",
            engine: ("AppleWebKit", "534.30"),
            browser: ("Android", "4.0"),
            mobile: true,
            os_name: "Android",
            os_version: "4.0.3",
        },
    );
}

#[test]
fn edge_on_windows_10() {
    check(
        "Mozilla/5.0 (Windows NT 10.0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/42.0.2311.135 Safari/537.36 Edge/12.10136",
        &Expected {
            mozilla: "5.0",
            platform: "Windows",
            os: "Windows 10",
            engine: ("EdgeHTML", ""),
            browser: ("Edge", "12.10136"),
            os_name: "Windows",
            os_version: "10",
            ..Expected::default()
        },
    );
}

#[test]
fn opera_presto() {
    check(
        "Opera/9.80 (Windows NT 6.1; U; en) Presto/2.12.388 Version/12.16",
        &Expected {
            platform: "Windows",
            os: "Windows 7",
            localization: "en",
            engine: ("Presto", "2.12.388"),
            browser: ("Opera", "9.80"),
            os_name: "Windows",
            os_version: "7",
            ..Expected::default()
        },
    );
}

#[test]
fn dalvik_client() {
    check(
        "Dalvik/1.6.0 (Linux; U; Android 4.0.4; W2430 Build/IMM76D)",
        &Expected {
            mozilla: "5.0",
            platform: "Linux",
            os: "Android 4.0.4",
            mobile: true,
            os_name: "Android",
            os_version: "4.0.4",
            ..Expected::default()
        },
    );
}

#[test]
fn blackberry_10() {
    check(
        "Mozilla/5.0 (BB10; Touch) AppleWebKit/537.10+ (KHTML, like Gecko) Version/10.0.9.2372 Mobile Safari/537.10+",
        &Expected {
            mozilla: "5.0",
            platform: "BlackBerry",
            os: "BlackBerry",
            engine: ("AppleWebKit", "537.10+"),
            browser: ("BlackBerry", "10.0.9.2372"),
            mobile: true,
            os_name: "BlackBerry",
            ..Expected::default()
        },
    );
}

#[test]
fn unknown_clients_are_undecided() {
    for header in [
        "curl/7.64.1",
        "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
    ] {
        let ua = UserAgent::parse(header);
        assert!(ua.is_undecided(), "{header}");
        assert!(!ua.is_bot(), "{header}");
        assert_eq!(ua.platform(), "", "{header}");
    }
}

#[test]
fn empty_header() {
    let ua = UserAgent::parse("");
    assert_eq!(ua, UserAgent::default());
    assert!(!ua.is_undecided());
}

struct Crawlers;

impl BotDetector for Crawlers {
    fn detect(&self, _ua: &str, sections: &Sections) -> Option<Bot> {
        sections
            .iter()
            .flat_map(|section| {
                std::iter::once(section.name()).chain(section.comment().iter().map(String::as_str))
            })
            .find_map(|token| {
                let (name, version) = token.split_once('/')?;
                name.ends_with("bot").then(|| Bot::new(name, version))
            })
    }

    fn is_disguised(&self, ua: &str) -> bool {
        ua.contains("bot/")
    }
}

#[test]
fn bot_detector_claims_compatible_crawler() {
    let ua = Parser::new()
        .with_bot_detector(Crawlers)
        .parse("Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)");
    assert!(ua.is_bot());
    assert!(!ua.is_undecided());
    assert_eq!(ua.browser_name_version(), ("Googlebot", "2.1"));
    assert_eq!(ua.mozilla(), "5.0");
}

#[test]
fn bot_detector_unmasks_webkit_crawler() {
    let header = "Mozilla/5.0 (iPhone; CPU iPhone OS 8_3 like Mac OS X) AppleWebKit/600.1.4 (KHTML, like Gecko) Version/8.0 Mobile/12F70 Safari/600.1.4 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";

    let plain = UserAgent::parse(header);
    assert_eq!(plain.platform(), "iPhone");
    assert!(!plain.is_bot());

    let ua = Parser::new().with_bot_detector(Crawlers).parse(header);
    assert!(ua.is_bot());
    assert_eq!(ua.platform(), "");
    assert_eq!(ua.os(), "");
    assert_eq!(ua.browser_name_version(), ("Googlebot", "2.1"));
    assert_eq!(ua.engine(), ("AppleWebKit", "600.1.4"));
}

#[test]
fn bot_detector_ignores_browsers() {
    let parser = Parser::new().with_bot_detector(Crawlers);
    let ua = parser.parse("Mozilla/5.0 (Windows NT 6.1; WOW64; rv:40.0) Gecko/20100101 Firefox/40.1");
    assert!(!ua.is_bot());
    assert_eq!(ua, UserAgent::parse(ua.ua()));
}
