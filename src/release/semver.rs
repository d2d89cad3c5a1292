use semver::Version;

/// Whether a release opens a new major.minor line or patches an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseKind {
    /// First release of a major.minor line (patch == 0)
    Major,
    /// Patch release on top of the X.Y.0 baseline
    Minor,
}

/// Strip any non-numeric prefix from a release identifier.
///
/// Examples:
/// - "go1.19.4" -> "1.19.4"
/// - "v1.2" -> "1.2"
/// - "1.2.3" -> "1.2.3"
pub fn numeric_part(version: &str) -> &str {
    version.trim_start_matches(|c: char| !c.is_ascii_digit())
}

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "1" or "1.2" by padding with zeros.
/// Any non-numeric prefix ("go", "v") is stripped first.
///
/// Examples:
/// - "go1" -> Version(1, 0, 0)
/// - "go1.19" -> Version(1, 19, 0)
/// - "go1.19.4" -> Version(1, 19, 4)
pub fn parse_version(version: &str) -> Option<Version> {
    let version = numeric_part(version);
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Classify a parsed version against the X.Y.0 baseline of its line
pub fn release_kind(version: &Version) -> ReleaseKind {
    let baseline = Version::new(version.major, version.minor, 0);
    if *version > baseline {
        ReleaseKind::Minor
    } else {
        ReleaseKind::Major
    }
}
