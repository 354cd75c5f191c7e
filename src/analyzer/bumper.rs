use crate::domain::{AbstractVersion, PreRelease, PreReleaseKind, Version, VersionBump};
use crate::error::{Result, ResultExt};
use tracing::debug;

/// Turn a tag-derived base version into the working version.
///
/// Exact tags keep their version, and their pre-release must be one of the
/// known kinds. Anything else is bumped (patch while major is 0, minor
/// otherwise) and marked `alpha`, whatever pre-release the tag carried; the
/// ordinal suffix is attached at formatting time. A `release_prefix`
/// replaces the numeric triple in every case.
pub fn bump(base: &str, is_exact: bool, release_prefix: Option<Version>) -> Result<AbstractVersion> {
    let context = format!("parsing base version {:?}", base);

    let mut version = if is_exact {
        AbstractVersion::parse(base).context(&context)?
    } else {
        let core = Version::parse(base).context(&context)?;
        let bump = VersionBump::for_version(&core);
        let mut bumped = AbstractVersion::new(core.bump(bump).context(&context)?);
        bumped.prerelease = Some(PreRelease::new(PreReleaseKind::Alpha, None));
        debug!(?bump, version = %bumped, "bumped untagged commit");
        bumped
    };

    if let Some(prefix) = release_prefix {
        version.set_core(prefix);
        debug!(%prefix, "applied release prefix override");
    }

    Ok(version)
}
