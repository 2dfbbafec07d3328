//! Operating system normalization.

/// Rewrites `<X> NT <version>` into the marketing name of that Windows
/// release. Anything else is returned unchanged.
///
/// # Examples
///
/// ```
/// use user_agent::normalize_os;
///
/// assert_eq!(normalize_os("Windows NT 6.1"), "Windows 7");
/// assert_eq!(normalize_os("Windows NT 6.1.1"), "Windows NT 6.1.1");
/// assert_eq!(normalize_os("Linux x86_64"), "Linux x86_64");
/// ```
#[must_use]
pub fn normalize_os(name: &str) -> String {
    let mut parts = name.splitn(3, ' ');
    let (Some(_), Some("NT"), Some(version)) = (parts.next(), parts.next(), parts.next()) else {
        return name.to_string();
    };

    windows_release(version).map_or_else(|| name.to_string(), str::to_string)
}

fn windows_release(nt_version: &str) -> Option<&'static str> {
    let release = match nt_version {
        "5.0" => "Windows 2000",
        "5.01" => "Windows 2000, Service Pack 1 (SP1)",
        "5.1" => "Windows XP",
        "5.2" => "Windows XP x64 Edition",
        "6.0" => "Windows Vista",
        "6.1" => "Windows 7",
        "6.2" => "Windows 8",
        "6.3" => "Windows 8.1",
        "10.0" => "Windows 10",
        _ => return None,
    };
    Some(release)
}

/// Name and version breakdown of a raw OS string.
///
/// # Examples
///
/// ```
/// use user_agent::OsInfo;
///
/// let info = OsInfo::from_os("Intel Mac OS X 10_6_8");
/// assert_eq!(info.name, "Mac OS X");
/// assert_eq!(info.version, "10.6.8");
/// assert_eq!(info.full_name, "Intel Mac OS X 10_6_8");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OsInfo {
    /// The raw OS string, as reported by [`UserAgent::os`](crate::UserAgent::os).
    pub full_name: String,
    /// OS name, e.g. `Mac OS X` for `Intel Mac OS X 10_8_2`.
    pub name: String,
    /// OS version, e.g. `7` for Windows 7 or `10.8.2` for Mac OS X.
    pub version: String,
}

impl OsInfo {
    /// Derives the breakdown from a raw OS string.
    #[must_use]
    pub fn from_os(os: &str) -> Self {
        // iOS reports "CPU iPhone OS 7_0 like Mac OS X"
        let cleaned = os.replacen("like Mac OS X", "", 1).replacen("CPU", "", 1);
        let cleaned = cleaned.trim_matches(' ');

        let mut parts: Vec<&str> = cleaned.split(' ').collect();
        if cleaned == "Windows XP x64 Edition" {
            parts.truncate(parts.len() - 2);
        }

        let (mut name, mut version) = os_name(&parts);

        if name.contains('/') {
            let mut halves = name.split('/');
            let (left, right) = (halves.next(), halves.next());
            version = right.unwrap_or_default().to_string();
            name = left.unwrap_or_default().to_string();
        }

        Self {
            full_name: os.to_string(),
            name,
            version: version.replace('_', "."),
        }
    }
}

/// Splits OS words into a name and a trailing version.
pub(crate) fn os_name(parts: &[&str]) -> (String, String) {
    let [name_parts @ .., last] = parts else {
        return (String::new(), String::new());
    };
    if name_parts.is_empty() {
        return ((*last).to_string(), String::new());
    }

    let name_parts = match name_parts {
        ["Intel", "Mac", ..] => &name_parts[1..],
        _ => name_parts,
    };
    let mut name = name_parts.join(" ");
    let mut version = (*last).to_string();

    if version.contains("x86") || version.contains("i686") {
        // architecture, not a version
        version.clear();
    } else if version == "X" && name == "Mac OS" {
        name.push_str(" X");
        version.clear();
    }

    (name, version)
}
