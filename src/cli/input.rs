//! Telling a version string apart from a git reference on the command line

const COMMON_REFS: [&str; 8] = [
    "head", "main", "master", "develop", "dev", "trunk", "origin", "upstream",
];

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Whether `input` looks like a git reference: a well-known branch or remote
/// name, a path-like ref, a relative revision (`~`, `^`), or 7 to 40 hex
/// characters.
pub fn is_git_reference(input: &str) -> bool {
    if COMMON_REFS
        .iter()
        .any(|name| input.eq_ignore_ascii_case(name))
    {
        return true;
    }

    if input.contains('/') || input.starts_with("refs/") {
        return true;
    }

    if (7..=40).contains(&input.len()) && is_hex(input) {
        return true;
    }

    input.contains('~') || input.contains('^')
}

/// Whether `input` should be converted as a version string rather than
/// resolved in the repository.
///
/// Accepts `[v]MAJOR.MINOR[.PATCH...]` with numeric major and minor; a patch
/// part must be numeric up to an optional `-pre` or `+build` tail. Two-part
/// input is accepted here so the converter can reject it with a clear error.
pub fn is_version_string(input: &str) -> bool {
    if is_git_reference(input) {
        return false;
    }

    let trimmed = input.strip_prefix('v').unwrap_or(input);
    let mut parts = trimmed.split('.');
    let (Some(major), Some(minor)) = (parts.next(), parts.next()) else {
        return false;
    };
    if !is_numeric(major) || !is_numeric(minor) {
        return false;
    }

    match parts.next().filter(|patch| !patch.is_empty()) {
        Some(patch) => {
            let patch_number = patch
                .split(|c| c == '-' || c == '+')
                .next()
                .unwrap_or_default();
            is_numeric(patch_number)
        }
        None => true,
    }
}
