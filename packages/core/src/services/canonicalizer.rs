//! Canonicalization Engine
//!
//! Turns an observed (possibly convention-violating) path into the canonical
//! destination it should land on, under a chosen [`ChangePolicy`]:
//!
//! - `PathKing` keeps the node where it physically is and heals the basename.
//! - `NameKing` treats the name-encoded suffix as authoritative and derives
//!   the destination from it.
//!
//! Either way the result is rebuilt and re-validated through the canonical
//! codec, so NameKing always lands on a PathKing-consistent object; the
//! policies differ only in which side is ground truth for the destination.
//! Any validation failure aborts the whole call; no partial results.

use crate::codec::canonical;
use crate::codec::error::SplitPathError;
use crate::codec::suffix;
use crate::models::{
    CanonicalSplitPathInsideLibrary, CodecRules, NodeName, PathKind, SeparatedSuffixedBasename,
    SplitPath, SplitPathInsideLibrary,
};
use crate::services::policy::{ChangePolicy, RenameIntent};
use regex::Regex;
use std::sync::LazyLock;

/// Host-duplication artifact: a trailing ` N` the vault appends when a name
/// collides ("Note" duplicated becomes "Note 1").
static DUPLICATE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<stem>.*\S) (?P<marker>\d+)$").unwrap());

/// Split a trailing duplicate marker off a basename.
///
/// The marker is stripped before suffix parsing and re-appended to the
/// resolved core name afterwards, so "Note-A 1" heals to core "Note 1" with
/// suffix "A" instead of failing on a malformed suffix token.
pub(crate) fn split_duplicate_marker(basename: &str) -> (&str, Option<&str>) {
    match DUPLICATE_MARKER.captures(basename) {
        Some(caps) => {
            let stem = caps.name("stem").map(|m| m.as_str()).unwrap_or(basename);
            let marker = caps.name("marker").map(|m| m.as_str());
            (stem, marker)
        }
        None => (basename, None),
    }
}

/// Compute the canonical destination for an observed path.
///
/// `intent` is `Some` for rename-derived events and `None` for fresh creates;
/// it only matters under `NameKing`, where a `Move` with a non-empty suffix
/// relocates folders parent-relative but files root-relative (an intentional
/// asymmetry of the convention).
pub fn canonicalize(
    observed: &SplitPathInsideLibrary,
    policy: ChangePolicy,
    intent: Option<RenameIntent>,
    rules: &CodecRules,
) -> Result<CanonicalSplitPathInsideLibrary, SplitPathError> {
    let (stem, marker) = split_duplicate_marker(observed.basename());

    let separated = suffix::parse_separated_suffix(stem, rules)
        .map_err(|cause| SplitPathError::invalid_basename(observed.basename(), cause))?;

    let core_name = match marker {
        Some(marker) => {
            let with_marker = format!("{} {}", separated.core_name, marker);
            NodeName::parse(&with_marker, rules).map_err(|cause| {
                SplitPathError::invalid_basename(
                    observed.basename(),
                    crate::codec::error::SuffixError::InvalidNodeName {
                        basename: with_marker.clone(),
                        cause,
                    },
                )
            })?
        }
        None => separated.core_name,
    };

    let destination_parts = match policy {
        ChangePolicy::PathKing => observed.path_parts().to_vec(),
        ChangePolicy::NameKing => {
            name_king_destination(observed, &separated.suffix_parts, intent, rules)
        }
    };

    // Recompute the canonical suffix purely from the destination.
    let suffix_parts = match observed.kind() {
        PathKind::Folder => Vec::new(),
        PathKind::File | PathKind::MdFile => {
            suffix::library_path_parts_to_suffix_parts(&destination_parts, rules)
                .map_err(|cause| SplitPathError::invalid_basename(observed.basename(), cause))?
        }
    };

    let basename = suffix::serialize_separated_suffix(
        &SeparatedSuffixedBasename::new(core_name, suffix_parts),
        rules,
    );

    let healed = SplitPath {
        path_parts: destination_parts,
        basename,
        kind: observed.kind(),
        extension: observed.extension().map(|e| e.to_string()),
    };
    let inside = SplitPathInsideLibrary::new(healed, rules)?;
    canonical::to_canonical(inside, rules)
}

/// Destination ancestor chain when the name-encoded suffix is authoritative.
fn name_king_destination(
    observed: &SplitPathInsideLibrary,
    suffix_parts: &[NodeName],
    intent: Option<RenameIntent>,
    rules: &CodecRules,
) -> Vec<String> {
    let root = rules.library_root_name().to_string();

    if intent == Some(RenameIntent::Move) {
        if suffix_parts.is_empty() {
            // A stripped suffix sends the node to the library root.
            return vec![root];
        }
        if observed.kind() == PathKind::Folder {
            // Folder suffixes are parent-relative: appended below the
            // folder's current location, not resolved from the root.
            let mut parts = observed.path_parts().to_vec();
            parts.extend(suffix_parts.iter().rev().map(|n| n.as_str().to_string()));
            return parts;
        }
    }

    // Fresh creates and file moves resolve the suffix absolutely.
    let mut parts = Vec::with_capacity(1 + suffix_parts.len());
    parts.push(root);
    parts.extend(suffix_parts.iter().rev().map(|n| n.as_str().to_string()));
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LibrarySettings;

    fn rules() -> CodecRules {
        CodecRules::new(LibrarySettings::default()).unwrap()
    }

    fn inside(path: SplitPath, rules: &CodecRules) -> SplitPathInsideLibrary {
        SplitPathInsideLibrary::new(path, rules).unwrap()
    }

    fn scroll(parts: &[&str], basename: &str) -> SplitPath {
        SplitPath::md_file(parts.iter().map(|p| p.to_string()).collect(), basename)
    }

    #[test]
    fn marker_splitting() {
        assert_eq!(split_duplicate_marker("Note 1"), ("Note", Some("1")));
        assert_eq!(split_duplicate_marker("Note-A 12"), ("Note-A", Some("12")));
        assert_eq!(split_duplicate_marker("Note"), ("Note", None));
        assert_eq!(split_duplicate_marker("Note1"), ("Note1", None));
        assert_eq!(split_duplicate_marker(" 1"), (" 1", None));
    }

    #[test]
    fn path_king_heals_the_basename() {
        let rules = rules();
        let observed = inside(scroll(&["Library", "A", "B"], "Note"), &rules);
        let canonical =
            canonicalize(&observed, ChangePolicy::PathKing, None, &rules).unwrap();
        assert_eq!(canonical.path_parts(), ["Library", "A", "B"]);
        assert_eq!(
            canonical.split_path().basename(),
            "Note-B-A"
        );
    }

    #[test]
    fn path_king_is_idempotent_on_canonical_input() {
        let rules = rules();
        let observed = inside(scroll(&["Library", "A", "B"], "Note-B-A"), &rules);
        let canonical =
            canonicalize(&observed, ChangePolicy::PathKing, None, &rules).unwrap();
        assert_eq!(canonical.path_parts(), observed.path_parts());
        assert_eq!(canonical.split_path().basename(), observed.basename());

        let again = canonicalize(
            &inside(canonical.split_path().as_split_path().clone(), &rules),
            ChangePolicy::PathKing,
            None,
            &rules,
        )
        .unwrap();
        assert_eq!(again, canonical);
    }

    #[test]
    fn name_king_create_resolves_suffix_absolutely() {
        let rules = rules();
        let observed = inside(scroll(&["Library"], "Note-B-A"), &rules);
        let canonical =
            canonicalize(&observed, ChangePolicy::NameKing, None, &rules).unwrap();
        assert_eq!(canonical.path_parts(), ["Library", "A", "B"]);
        assert_eq!(canonical.split_path().basename(), "Note-B-A");
        assert_eq!(canonical.core_name(), &"Note");
    }

    #[test]
    fn name_king_move_with_empty_suffix_lands_at_root() {
        let rules = rules();
        let observed = inside(scroll(&["Library", "R3", "S3"], "Note"), &rules);
        let canonical = canonicalize(
            &observed,
            ChangePolicy::NameKing,
            Some(RenameIntent::Move),
            &rules,
        )
        .unwrap();
        assert_eq!(canonical.path_parts(), ["Library"]);
        assert_eq!(canonical.split_path().basename(), "Note");
    }

    #[test]
    fn name_king_move_of_file_is_root_relative() {
        let rules = rules();
        let observed = inside(scroll(&["Library", "X"], "Note-B-A"), &rules);
        let canonical = canonicalize(
            &observed,
            ChangePolicy::NameKing,
            Some(RenameIntent::Move),
            &rules,
        )
        .unwrap();
        assert_eq!(canonical.path_parts(), ["Library", "A", "B"]);
    }

    #[test]
    fn name_king_move_of_folder_is_parent_relative() {
        let rules = rules();
        let observed = inside(
            SplitPath::folder(vec!["Library".into(), "X".into()], "Sub-B-A"),
            &rules,
        );
        let canonical = canonicalize(
            &observed,
            ChangePolicy::NameKing,
            Some(RenameIntent::Move),
            &rules,
        )
        .unwrap();
        // Suffix appended below the folder's current location, nearest
        // parent innermost.
        assert_eq!(canonical.path_parts(), ["Library", "X", "A", "B"]);
        assert_eq!(canonical.split_path().basename(), "Sub");
        assert!(canonical.suffix_parts().is_empty());
    }

    #[test]
    fn duplicate_marker_is_reattached_to_core_name() {
        let rules = rules();
        let observed = inside(scroll(&["Library", "Parent"], "Note 1"), &rules);
        let canonical =
            canonicalize(&observed, ChangePolicy::PathKing, None, &rules).unwrap();
        assert_eq!(canonical.split_path().basename(), "Note 1-Parent");
        assert_eq!(canonical.core_name(), &"Note 1");
    }

    #[test]
    fn duplicate_marker_after_suffix_is_healed() {
        let rules = rules();
        let observed = inside(scroll(&["Library", "A"], "Note-A 3"), &rules);
        let canonical =
            canonicalize(&observed, ChangePolicy::PathKing, None, &rules).unwrap();
        assert_eq!(canonical.core_name(), &"Note 3");
        assert_eq!(canonical.split_path().basename(), "Note 3-A");
    }

    #[test]
    fn output_never_contains_the_delimiter_in_tokens() {
        let rules = rules();
        let observed = inside(scroll(&["Library", "A"], "Note"), &rules);
        let canonical =
            canonicalize(&observed, ChangePolicy::PathKing, None, &rules).unwrap();
        assert!(!canonical.core_name().as_str().contains('-'));
        for part in canonical.suffix_parts() {
            assert!(!part.as_str().contains('-'));
        }
    }

    #[test]
    fn invalid_basename_aborts_whole_call() {
        let rules = rules();
        let observed = inside(scroll(&["Library", "A"], "-Note"), &rules);
        assert!(canonicalize(&observed, ChangePolicy::PathKing, None, &rules).is_err());
    }
}
