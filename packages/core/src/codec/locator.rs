//! Locator Codec
//!
//! A [`TreeNodeLocator`] addresses a tree node independently of any filesystem
//! path: its own segment ID plus the segment ID chain of its ancestors,
//! nearest parent first. Because every ancestor of a library node is a
//! section, chain segments are always section-kind.
//!
//! The reverse direction rebuilds the full canonical split path and
//! round-trips it through the canonical codec, so a locator that decodes at
//! all is guaranteed self-consistent.

use crate::codec::canonical;
use crate::codec::error::{LocatorError, SegmentIdError};
use crate::codec::segment_id::SegmentId;
use crate::codec::suffix;
use crate::models::{
    CanonicalSplitPathInsideLibrary, CodecRules, NodeKind, NodeName, SeparatedSuffixedBasename,
    SplitPath, SplitPathInsideLibrary,
};
use serde::Serialize;

/// Address-based reference to one tree node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNodeLocator {
    /// The node's own segment ID.
    pub segment_id: SegmentId,
    /// Ancestor segment IDs, nearest parent first, excluding the library root.
    pub segment_id_chain_to_parent: Vec<SegmentId>,
    /// Tree-side kind of the addressed node.
    pub kind: NodeKind,
}

impl TreeNodeLocator {
    /// Locator of the parent section, or `None` at library-root level.
    pub fn parent(&self) -> Option<TreeNodeLocator> {
        self.segment_id_chain_to_parent
            .split_first()
            .map(|(head, tail)| TreeNodeLocator {
                segment_id: head.clone(),
                segment_id_chain_to_parent: tail.to_vec(),
                kind: NodeKind::Section,
            })
    }

    /// Parent locator as a hard requirement.
    pub fn require_parent(&self) -> Result<TreeNodeLocator, LocatorError> {
        self.parent().ok_or_else(|| LocatorError::NoParent {
            segment_id: self.segment_id.as_str().to_string(),
        })
    }
}

/// Build the locator for a canonical split path.
pub fn canonical_to_locator(
    canonical: &CanonicalSplitPathInsideLibrary,
    rules: &CodecRules,
) -> Result<TreeNodeLocator, LocatorError> {
    let ancestors = strip_root(canonical.path_parts(), rules);

    let mut chain = Vec::with_capacity(ancestors.len());
    for part in ancestors.iter().rev() {
        let name = NodeName::parse(part, rules).map_err(|_| {
            LocatorError::invalid_chain(format!("ancestor {part:?} is not a valid node name"))
        })?;
        chain.push(SegmentId::section(&name));
    }

    let segment_id = match canonical.node_kind() {
        NodeKind::Section => SegmentId::section(canonical.core_name()),
        NodeKind::Scroll => SegmentId::scroll(canonical.core_name()),
        NodeKind::File => {
            let extension = canonical.extension().ok_or_else(|| {
                LocatorError::invalid_segment_id(
                    canonical.core_name().as_str(),
                    SegmentIdError::InvalidExtension {
                        raw: canonical.core_name().as_str().to_string(),
                        extension: String::new(),
                    },
                )
            })?;
            SegmentId::file(canonical.core_name(), extension).map_err(|cause| {
                LocatorError::invalid_segment_id(canonical.core_name().as_str(), cause)
            })?
        }
    };

    Ok(TreeNodeLocator {
        segment_id,
        segment_id_chain_to_parent: chain,
        kind: canonical.node_kind(),
    })
}

/// Rebuild the canonical split path a locator addresses.
///
/// Parses every segment in the chain, reassembles path parts and the expected
/// basename, and validates the result through the canonical codec. Any segment
/// parse failure aborts with a [`LocatorError`] wrapping the cause.
pub fn locator_to_canonical_split_path(
    locator: &TreeNodeLocator,
    rules: &CodecRules,
) -> Result<CanonicalSplitPathInsideLibrary, LocatorError> {
    let own = locator
        .segment_id
        .parse()
        .map_err(|cause| LocatorError::invalid_segment_id(locator.segment_id.as_str(), cause))?;

    if own.kind != locator.kind {
        return Err(LocatorError::invalid_chain(format!(
            "segment ID kind {} disagrees with locator kind {}",
            own.kind, locator.kind
        )));
    }

    // Chain runs nearest-parent-first; path parts run root-first.
    let mut ancestor_names = Vec::with_capacity(locator.segment_id_chain_to_parent.len());
    for segment in &locator.segment_id_chain_to_parent {
        let parsed = segment
            .parse()
            .map_err(|cause| LocatorError::invalid_segment_id(segment.as_str(), cause))?;
        if parsed.kind != NodeKind::Section {
            return Err(LocatorError::invalid_chain(format!(
                "chain segment {:?} is a {}, expected a section",
                segment.as_str(),
                parsed.kind
            )));
        }
        ancestor_names.push(parsed.core_name);
    }

    let mut path_parts = Vec::with_capacity(1 + ancestor_names.len());
    path_parts.push(rules.library_root_name().to_string());
    path_parts.extend(ancestor_names.into_iter().rev());

    let core_name = NodeName::parse(&own.core_name, rules).map_err(|_| {
        LocatorError::invalid_segment_id(
            locator.segment_id.as_str(),
            SegmentIdError::InvalidNodeName {
                raw: locator.segment_id.as_str().to_string(),
            },
        )
    })?;

    let suffix_parts = match own.kind {
        NodeKind::Section => Vec::new(),
        NodeKind::Scroll | NodeKind::File => {
            suffix::library_path_parts_to_suffix_parts(&path_parts, rules).map_err(|cause| {
                LocatorError::invalid_chain(format!("chain yields unusable suffix: {cause}"))
            })?
        }
    };
    let basename = suffix::serialize_separated_suffix(
        &SeparatedSuffixedBasename::new(core_name, suffix_parts),
        rules,
    );

    let split_path = match own.kind {
        NodeKind::Section => SplitPath::folder(path_parts, basename),
        NodeKind::Scroll => SplitPath::md_file(path_parts, basename),
        NodeKind::File => {
            // Parser guarantees a file segment carries its extension.
            let extension = own.extension.clone().unwrap_or_default();
            SplitPath::file(path_parts, basename, extension)
        }
    };

    let inside = SplitPathInsideLibrary::new(split_path, rules)
        .map_err(|e| LocatorError::invalid_chain_with_cause("chain escapes the library", e.into()))?;
    canonical::to_canonical(inside, rules)
        .map_err(|e| LocatorError::invalid_chain_with_cause("round-trip validation failed", e))
}

fn strip_root<'a>(path_parts: &'a [String], rules: &CodecRules) -> &'a [String] {
    match path_parts.first() {
        Some(first) if first == rules.library_root_name() => &path_parts[1..],
        _ => path_parts,
    }
}
