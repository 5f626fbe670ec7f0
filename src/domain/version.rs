use crate::error::{NextVersionError, Result};
use semver::Version;
use std::fmt;

/// Version bump category decided from commit analysis.
///
/// Ordered by magnitude so the highest category across a commit range wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VersionBump {
    Patch,
    Minor,
    Major,
}

impl VersionBump {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a version string into a semantic version.
///
/// No leniency: the string must already be a bare `MAJOR.MINOR.PATCH` version,
/// optionally with pre-release and build metadata.
pub fn parse_version(s: &str) -> Result<Version> {
    Version::parse(s)
        .map_err(|e| NextVersionError::version(format!("Invalid semantic version '{}': {}", s, e)))
}

/// Extract a semantic version from a tag name, stripping a leading 'v'/'V'.
///
/// Returns `None` for tags that are not version-shaped ("nightly",
/// "release-candidate", ...). Used to decide which tags count as release
/// points.
pub fn parse_release_tag(tag: &str) -> Option<Version> {
    let clean_tag = tag.trim_start_matches('v').trim_start_matches('V');
    Version::parse(clean_tag).ok()
}

/// Apply a bump to a version per standard semver increment rules.
///
/// - **Major**: `X.Y.Z -> (X+1).0.0`
/// - **Minor**: `X.Y.Z -> X.(Y+1).0`
/// - **Patch**: `X.Y.Z -> X.Y.(Z+1)`
///
/// A pre-release that already sits on the target boundary promotes to its
/// release instead of skipping past it (`1.3.0-rc.1` + minor -> `1.3.0`,
/// `1.2.3-alpha.1` + patch -> `1.2.3`). Pre-release and build metadata never
/// survive an increment.
pub fn increment(current: &Version, bump: VersionBump) -> Version {
    let in_prerelease = !current.pre.is_empty();
    match bump {
        VersionBump::Major => {
            if in_prerelease && current.minor == 0 && current.patch == 0 {
                Version::new(current.major, 0, 0)
            } else {
                Version::new(current.major + 1, 0, 0)
            }
        }
        VersionBump::Minor => {
            if in_prerelease && current.patch == 0 {
                Version::new(current.major, current.minor, 0)
            } else {
                Version::new(current.major, current.minor + 1, 0)
            }
        }
        VersionBump::Patch => {
            if in_prerelease {
                Version::new(current.major, current.minor, current.patch)
            } else {
                Version::new(current.major, current.minor, current.patch + 1)
            }
        }
    }
}
