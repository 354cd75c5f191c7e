use crate::domain::{strip_module_tag_prefixes, TagVisibility};
use crate::error::{Result, ResultExt};
use crate::git::Repository;
use git2::Oid;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Base version used when no visible tag is reachable
pub const UNTAGGED_VERSION: &str = "0.0.0";

/// Outcome of tag resolution for one commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseVersion {
    /// Version text taken from the tag, module prefix and `v` removed
    pub version: String,
    /// The tag sits on the resolved commit itself
    pub is_exact: bool,
    /// Short name of the tag the version came from
    pub tag: Option<String>,
}

impl BaseVersion {
    fn untagged() -> Self {
        BaseVersion {
            version: UNTAGGED_VERSION.to_string(),
            is_exact: false,
            tag: None,
        }
    }

    fn from_tag(tag: &VisibleTag, is_exact: bool) -> Self {
        BaseVersion {
            version: strip_module_tag_prefixes(&tag.name).to_string(),
            is_exact,
            tag: Some(tag.name.clone()),
        }
    }
}

/// A visible tag with its target dereferenced to a commit id
#[derive(Debug, Clone, PartialEq, Eq)]
struct VisibleTag {
    name: String,
    commit: Oid,
}

/// Finds the tag a commit's version derives from
///
/// Tags are listed once per resolver. Visible tags are sorted by short name,
/// so when several tags share a commit the lexicographically smallest wins.
pub struct TagResolver<'r, R: Repository + ?Sized> {
    repo: &'r R,
    tags: Vec<VisibleTag>,
}

impl<'r, R: Repository + ?Sized> TagResolver<'r, R> {
    /// List the repository's tags and keep the ones `visibility` admits
    pub fn new(repo: &'r R, visibility: &TagVisibility) -> Result<Self> {
        let mut tags = Vec::new();

        for candidate in repo.list_tags().context("listing tags")? {
            let short_name = candidate.short_name();
            if !visibility.admits(short_name) {
                continue;
            }

            let commit = if candidate.is_annotated {
                repo.dereference_annotated_tag(candidate.target)
                    .context("listing tags")?
                    .unwrap_or(candidate.target)
            } else {
                candidate.target
            };

            tags.push(VisibleTag {
                name: short_name.to_string(),
                commit,
            });
        }

        tags.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(visible = tags.len(), "collected visible tags");

        Ok(TagResolver { repo, tags })
    }

    /// Determine the base version for `commit` and whether it is exact
    #[instrument(skip(self), fields(tags = self.tags.len()))]
    pub fn resolve(&self, commit: Oid) -> Result<BaseVersion> {
        if let Some(tag) = self.find(commit) {
            debug!(tag = %tag.name, "commit carries an exact tag");
            return Ok(BaseVersion::from_tag(tag, true));
        }

        match self.nearest(commit)? {
            Some(tag) => {
                debug!(tag = %tag.name, tagged = %tag.commit, "found most recent ancestor tag");
                Ok(BaseVersion::from_tag(tag, false))
            }
            None => {
                debug!("no reachable tag");
                Ok(BaseVersion::untagged())
            }
        }
    }

    fn find(&self, commit: Oid) -> Option<&VisibleTag> {
        self.tags.iter().find(|tag| tag.commit == commit)
    }

    fn nearest(&self, commit: Oid) -> Result<Option<&VisibleTag>> {
        if self.tags.is_empty() {
            return Ok(None);
        }

        for ancestor in AncestryWalk::new(self.repo, commit) {
            if let Some(tag) = self.find(ancestor?) {
                return Ok(Some(tag));
            }
        }

        Ok(None)
    }
}

/// Resolve the base version for `commit` in one call
pub fn resolve_base_version<R: Repository + ?Sized>(
    repo: &R,
    commit: Oid,
    visibility: &TagVisibility,
) -> Result<BaseVersion> {
    TagResolver::new(repo, visibility)?.resolve(commit)
}

/// Lazy preorder walk over a commit and its ancestors
///
/// Children come before parents and first parents before later ones; each
/// commit is yielded once. Commits are looked up only as the walk reaches
/// them, so stopping early bounds the work on long histories.
pub struct AncestryWalk<'r, R: Repository + ?Sized> {
    repo: &'r R,
    stack: Vec<Oid>,
    seen: HashSet<Oid>,
}

impl<'r, R: Repository + ?Sized> AncestryWalk<'r, R> {
    pub fn new(repo: &'r R, start: Oid) -> Self {
        AncestryWalk {
            repo,
            stack: vec![start],
            seen: HashSet::new(),
        }
    }
}

impl<R: Repository + ?Sized> Iterator for AncestryWalk<'_, R> {
    type Item = Result<Oid>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            if !self.seen.insert(id) {
                continue;
            }

            let commit = match self.repo.commit(id).context("getting commit object") {
                Ok(commit) => commit,
                Err(e) => {
                    self.stack.clear();
                    return Some(Err(e));
                }
            };

            self.stack.extend(
                commit
                    .parents
                    .iter()
                    .rev()
                    .filter(|parent| !self.seen.contains(*parent)),
            );

            return Some(Ok(id));
        }

        None
    }
}
