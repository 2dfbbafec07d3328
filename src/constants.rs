//! Tokens and names recognized in user agent headers.

/// Product token of Mozilla-compatible clients.
pub const MOZILLA: &str = "Mozilla";

/// Product token of pre-Blink Opera releases.
pub const OPERA: &str = "Opera";

/// Product token of the Android Dalvik VM.
pub const DALVIK: &str = "Dalvik";

/// Section name that marks a mobile client anywhere in the header.
pub const MOBILE_SECTION: &str = "Mobile";

/// Mozilla version reported for Dalvik clients.
pub const DALVIK_MOZILLA_VERSION: &str = "5.0";

/// Leading comment token of legacy Internet Explorer headers.
pub const COMPATIBLE_TOKEN: &str = "compatible";

/// Security token placeholder found in the second comment position.
pub const SECURITY_TOKEN: &str = "U";

/// Separator between comment tokens.
pub const COMMENT_SEPARATOR: &str = "; ";

/// OS reported by Internet Explorer when the comment carries none.
pub const DEFAULT_TRIDENT_OS: &str = "Windows NT 4.0";

/// Browser name used for every Trident based Internet Explorer.
pub const INTERNET_EXPLORER: &str = "Internet Explorer";
