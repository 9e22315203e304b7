//! Canonical Split Path Codec
//!
//! Enforces the agreement between a node's location and its name-encoded
//! location. A path is canonical when its basename's suffix tokens are exactly
//! the reversed ancestor chain (minus the library root), and folders carry no
//! suffix tokens at all.
//!
//! This codec is the only producer of [`CanonicalSplitPathInsideLibrary`];
//! everything downstream (locators, the canonicalization engine) round-trips
//! through it to stay honest.

use crate::codec::error::SplitPathError;
use crate::codec::suffix;
use crate::models::{
    CanonicalSplitPathInsideLibrary, CodecRules, NodeName, PathKind, SplitPathInsideLibrary,
};

/// Validate an inside-library split path as canonical.
///
/// Derives the expected suffix from `path_parts` independently of the actual
/// basename, then compares. On mismatch the error carries both sides for
/// diagnostics.
pub fn to_canonical(
    split_path: SplitPathInsideLibrary,
    rules: &CodecRules,
) -> Result<CanonicalSplitPathInsideLibrary, SplitPathError> {
    for part in split_path.path_parts() {
        NodeName::parse(part, rules).map_err(|cause| SplitPathError::InvalidPathParts {
            part: part.clone(),
            cause,
        })?;
    }

    if split_path.kind() == PathKind::File && split_path.extension().is_none() {
        return Err(SplitPathError::MissingExtension {
            basename: split_path.basename().to_string(),
        });
    }

    let actual = suffix::parse_separated_suffix(split_path.basename(), rules)
        .map_err(|cause| SplitPathError::invalid_basename(split_path.basename(), cause))?;

    // Folders carry their location in the path alone.
    let expected = match split_path.kind() {
        PathKind::Folder => Vec::new(),
        PathKind::File | PathKind::MdFile => {
            suffix::library_path_parts_to_suffix_parts(split_path.path_parts(), rules)
                .map_err(|cause| SplitPathError::invalid_basename(split_path.basename(), cause))?
        }
    };

    if actual.suffix_parts != expected {
        return Err(SplitPathError::CanonicalizationFailed {
            actual: actual
                .suffix_parts
                .iter()
                .map(|n| n.as_str().to_string())
                .collect(),
            expected: expected.iter().map(|n| n.as_str().to_string()).collect(),
        });
    }

    Ok(CanonicalSplitPathInsideLibrary::from_checked_parts(
        split_path, actual,
    ))
}

/// Serialize a canonical path's basename back into one string.
///
/// Pure re-join; the inverse of the parse performed by [`to_canonical`].
pub fn from_canonical(canonical: &CanonicalSplitPathInsideLibrary, rules: &CodecRules) -> String {
    suffix::serialize_separated_suffix(canonical.separated_basename(), rules)
}
