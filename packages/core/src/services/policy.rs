//! Change Policy & Rename Intent Inference
//!
//! A single filesystem rename signal is ambiguous: the user may have relabeled
//! a node (edited its core name) or relocated it (edited its suffix, or
//! dragged it). This module disambiguates that signal and decides which side
//! of an observed path is ground truth for canonicalization.
//!
//! **CRITICAL:** intent inference only looks at basenames and ancestor chains.
//! It never touches the tree: the same `(from, to)` pair always yields the
//! same intent.

use crate::codec::suffix;
use crate::models::{CodecRules, PathKind, SplitPath};
use crate::services::canonicalizer::split_duplicate_marker;
use serde::{Deserialize, Serialize};

/// Which side of an observed path is ground truth.
///
/// - `PathKing`: trust the actual location; recompute the suffix from it.
/// - `NameKing`: trust the name-encoded location; derive the destination from
///   the suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChangePolicy {
    PathKing,
    NameKing,
}

/// What the user meant by a rename signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RenameIntent {
    /// The node keeps its place; its label changed.
    Rename,
    /// The node keeps its label; its place changed.
    Move,
}

/// Policy for a Create event.
///
/// A node dropped at library-root level gets its name trusted (the suffix is
/// the only location information it carries); anywhere deeper, the drop
/// location wins.
pub fn create_policy(path: &SplitPath, rules: &CodecRules) -> ChangePolicy {
    if is_root_level(&path.path_parts, rules) {
        ChangePolicy::NameKing
    } else {
        ChangePolicy::PathKing
    }
}

/// Infer what a rename signal meant.
///
/// Decision order:
/// 1. basename unchanged → `Move` (pure relocation)
/// 2. new basename unparseable → `Rename` (fail-soft; the canonicalization
///    engine enforces real validity)
/// 3. sections: suffix added → `Move`, otherwise `Rename`
/// 4. files/scrolls: compare the new suffix against the suffix implied by the
///    current physical ancestor chain; matching means the user only touched
///    the label
///
/// A trailing duplicate marker is stripped before suffix parsing, so a
/// collision rename like `Note-A` → `Note-A 1` reads as a label edit rather
/// than a move ordered by a mangled suffix token.
pub fn infer_rename_intent(
    from: &SplitPath,
    to: &SplitPath,
    rules: &CodecRules,
) -> RenameIntent {
    if from.basename == to.basename {
        return RenameIntent::Move;
    }

    let (stem, _) = split_duplicate_marker(&to.basename);
    let Ok(separated) = suffix::parse_separated_suffix(stem, rules) else {
        return RenameIntent::Rename;
    };

    if to.kind == PathKind::Folder {
        return if separated.suffix_parts.is_empty() {
            RenameIntent::Rename
        } else {
            RenameIntent::Move
        };
    }

    if separated.suffix_parts.is_empty() {
        // Stripping the whole suffix at root level is just a label edit;
        // anywhere deeper it demands relocation to the root.
        return if is_root_level(&to.path_parts, rules) {
            RenameIntent::Rename
        } else {
            RenameIntent::Move
        };
    }

    match suffix::library_path_parts_to_suffix_parts(&to.path_parts, rules) {
        Ok(implied) if implied == separated.suffix_parts => RenameIntent::Rename,
        _ => RenameIntent::Move,
    }
}

/// Resolve the policy to canonicalize a rename destination under.
///
/// A label edit always trusts the path (the node did not move). A move
/// ordered through the name (the basename changed and its suffix demands a
/// different location) trusts the name. A pure relocation (drag, basename
/// unchanged) uses the configured move policy, `PathKing` by default.
pub fn effective_rename_policy(
    from: &SplitPath,
    to: &SplitPath,
    intent: RenameIntent,
    move_policy: ChangePolicy,
) -> ChangePolicy {
    match intent {
        RenameIntent::Rename => ChangePolicy::PathKing,
        RenameIntent::Move if from.basename != to.basename => ChangePolicy::NameKing,
        RenameIntent::Move => move_policy,
    }
}

fn is_root_level(path_parts: &[String], rules: &CodecRules) -> bool {
    matches!(path_parts, [first] if first == rules.library_root_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LibrarySettings;

    fn rules() -> CodecRules {
        CodecRules::new(LibrarySettings::default()).unwrap()
    }

    fn scroll(parts: &[&str], basename: &str) -> SplitPath {
        SplitPath::md_file(parts.iter().map(|p| p.to_string()).collect(), basename)
    }

    fn folder(parts: &[&str], basename: &str) -> SplitPath {
        SplitPath::folder(parts.iter().map(|p| p.to_string()).collect(), basename)
    }

    #[test]
    fn create_at_root_is_name_king() {
        let rules = rules();
        let path = scroll(&["Library"], "Note-B-A");
        assert_eq!(create_policy(&path, &rules), ChangePolicy::NameKing);
    }

    #[test]
    fn create_below_root_is_path_king() {
        let rules = rules();
        let path = scroll(&["Library", "A"], "Note");
        assert_eq!(create_policy(&path, &rules), ChangePolicy::PathKing);
    }

    #[test]
    fn unchanged_basename_is_a_move() {
        let rules = rules();
        let from = scroll(&["Library", "A"], "Note-A");
        let to = scroll(&["Library", "B"], "Note-A");
        assert_eq!(infer_rename_intent(&from, &to, &rules), RenameIntent::Move);
    }

    #[test]
    fn folder_label_edit_is_a_rename() {
        let rules = rules();
        let from = folder(&["Library", "Recipes"], "Soups");
        let to = folder(&["Library", "Recipes"], "Stews");
        assert_eq!(
            infer_rename_intent(&from, &to, &rules),
            RenameIntent::Rename
        );
    }

    #[test]
    fn folder_gaining_a_suffix_is_a_move() {
        let rules = rules();
        let from = folder(&["Library", "Recipes"], "Soups");
        let to = folder(&["Library", "Recipes"], "Soups-Archive");
        assert_eq!(infer_rename_intent(&from, &to, &rules), RenameIntent::Move);
    }

    #[test]
    fn leaf_suffix_matching_chain_is_a_rename() {
        let rules = rules();
        let from = scroll(&["Library", "R3", "S3"], "Note-S3-R3");
        let to = scroll(&["Library", "R3", "S3"], "Better-S3-R3");
        assert_eq!(
            infer_rename_intent(&from, &to, &rules),
            RenameIntent::Rename
        );
    }

    #[test]
    fn leaf_suffix_mismatching_chain_is_a_move() {
        let rules = rules();
        let from = scroll(&["Library", "R3", "S3"], "Note-S3-R3");
        let to = scroll(&["Library", "R3", "S3"], "Note-Other");
        assert_eq!(infer_rename_intent(&from, &to, &rules), RenameIntent::Move);
    }

    #[test]
    fn leaf_suffix_stripped_below_root_is_a_move() {
        let rules = rules();
        let from = scroll(&["Library", "R3", "S3"], "Note-S3-R3");
        let to = scroll(&["Library", "R3", "S3"], "Note");
        assert_eq!(infer_rename_intent(&from, &to, &rules), RenameIntent::Move);
    }

    #[test]
    fn leaf_suffix_stripped_at_root_is_a_rename() {
        let rules = rules();
        let from = scroll(&["Library"], "Note-Old");
        let to = scroll(&["Library"], "Note");
        assert_eq!(
            infer_rename_intent(&from, &to, &rules),
            RenameIntent::Rename
        );
    }

    #[test]
    fn collision_marker_rename_is_a_rename() {
        let rules = rules();
        // The vault appends " 1" on a name collision; the node did not move.
        let from = scroll(&["Library", "A"], "Note-A");
        let to = scroll(&["Library", "A"], "Note-A 1");
        assert_eq!(
            infer_rename_intent(&from, &to, &rules),
            RenameIntent::Rename
        );
    }

    #[test]
    fn unparseable_new_basename_defaults_to_rename() {
        let rules = rules();
        let from = scroll(&["Library", "A"], "Note-A");
        let to = scroll(&["Library", "A"], "Note--A");
        assert_eq!(
            infer_rename_intent(&from, &to, &rules),
            RenameIntent::Rename
        );
    }

    #[test]
    fn effective_policy_resolution() {
        let rules = rules();
        let from = scroll(&["Library", "R3", "S3"], "Note-S3-R3");

        // Label edit: path wins no matter the configured move policy.
        let to = scroll(&["Library", "R3", "S3"], "Better-S3-R3");
        assert_eq!(
            effective_rename_policy(&from, &to, RenameIntent::Rename, ChangePolicy::NameKing),
            ChangePolicy::PathKing
        );

        // Suffix-edited move: the name ordered the relocation.
        let to = scroll(&["Library", "R3", "S3"], "Note");
        let intent = infer_rename_intent(&from, &to, &rules);
        assert_eq!(intent, RenameIntent::Move);
        assert_eq!(
            effective_rename_policy(&from, &to, intent, ChangePolicy::PathKing),
            ChangePolicy::NameKing
        );

        // Drag: basename unchanged, configured move policy applies.
        let to = scroll(&["Library", "Other"], "Note-S3-R3");
        assert_eq!(
            effective_rename_policy(&from, &to, RenameIntent::Move, ChangePolicy::PathKing),
            ChangePolicy::PathKing
        );
        assert_eq!(
            effective_rename_policy(&from, &to, RenameIntent::Move, ChangePolicy::NameKing),
            ChangePolicy::NameKing
        );
    }
}
