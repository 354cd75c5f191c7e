//! Version resolution stages: tag lookup, bump policy, dirty detection

pub mod bumper;
pub mod dirty;
pub mod tag_resolver;

pub use bumper::bump;
pub use dirty::is_dirty;
pub use tag_resolver::{resolve_base_version, AncestryWalk, BaseVersion, TagResolver};
