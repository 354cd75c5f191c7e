use crate::domain::prerelease::PreRelease;
use crate::error::{Result, VersError};
use std::fmt;

/// Numeric `major.minor.patch` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a strict semantic version and keep only its numeric triple.
    ///
    /// Pre-release and build metadata are accepted but dropped, so
    /// `"3.0.0-rc.1"` yields `3.0.0`. Used for release prefix overrides.
    pub fn parse(input: &str) -> Result<Self> {
        let parsed = semver::Version::parse(input)
            .map_err(|e| VersError::invalid_version(input, e.to_string()))?;

        Ok(Version::new(parsed.major, parsed.minor, parsed.patch))
    }

    /// Bump version according to bump type
    ///
    /// Fails when the bumped component would overflow `u64`.
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let overflow = |part: &str| {
            VersError::invalid_version(self.to_string(), format!("{} version cannot be bumped", part))
        };

        match bump_type {
            VersionBump::Minor => Ok(Version {
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(|| overflow("minor"))?,
                patch: 0,
            }),
            VersionBump::Patch => Ok(Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1).ok_or_else(|| overflow("patch"))?,
            }),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Increment applied to an untagged commit's base version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Minor,
    Patch,
}

impl VersionBump {
    /// Patch while the major version is 0, minor afterwards
    pub fn for_version(version: &Version) -> Self {
        if version.major == 0 {
            VersionBump::Patch
        } else {
            VersionBump::Minor
        }
    }
}

/// Version produced by a resolution, before ecosystem formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbstractVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<PreRelease>,
    pub build: Vec<String>,
}

impl AbstractVersion {
    pub fn new(core: Version) -> Self {
        AbstractVersion {
            major: core.major,
            minor: core.minor,
            patch: core.patch,
            prerelease: None,
            build: Vec::new(),
        }
    }

    /// Parse a strict `X.Y.Z[-pre][+build]` version string.
    ///
    /// The pre-release, when present, must start with a recognized kind.
    pub fn parse(input: &str) -> Result<Self> {
        let parsed = semver::Version::parse(input)
            .map_err(|e| VersError::invalid_version(input, e.to_string()))?;

        let prerelease = PreRelease::parse_identifiers(parsed.pre.as_str())?;
        let build = if parsed.build.is_empty() {
            Vec::new()
        } else {
            parsed.build.as_str().split('.').map(str::to_string).collect()
        };

        Ok(AbstractVersion {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            prerelease,
            build,
        })
    }

    /// The numeric triple
    pub fn core(&self) -> Version {
        Version::new(self.major, self.minor, self.patch)
    }

    /// Replace the numeric triple, leaving pre-release and build untouched
    pub fn set_core(&mut self, core: Version) {
        self.major = core.major;
        self.minor = core.minor;
        self.patch = core.patch;
    }
}

impl fmt::Display for AbstractVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.core())?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }
        Ok(())
    }
}
