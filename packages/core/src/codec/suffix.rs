//! Suffix Codec
//!
//! Translates between on-disk basenames and their token decomposition, and
//! between ancestor path chains and suffix chains.
//!
//! The wire format of a basename is `core<delim>suffix1<delim>suffix2...`
//! where the suffix token adjacent to the core name is the nearest parent
//! folder. Path parts run root-first, suffix parts run nearest-parent-first,
//! so the two representations are reverses of each other.

use crate::codec::error::SuffixError;
use crate::models::{CodecRules, NodeName, SeparatedSuffixedBasename};

/// Split a basename on the configured delimiter, validating every token.
pub fn split_by_suffix_delimiter(
    basename: &str,
    rules: &CodecRules,
) -> Result<Vec<NodeName>, SuffixError> {
    let delimiter = rules.suffix_delimiter();
    if delimiter.is_empty() {
        return Err(SuffixError::InvalidDelimiter {
            delimiter: delimiter.to_string(),
        });
    }
    if basename.is_empty() {
        return Err(SuffixError::EmptyParts {
            basename: basename.to_string(),
        });
    }

    basename
        .split(delimiter)
        .map(|part| {
            NodeName::parse(part, rules).map_err(|cause| SuffixError::InvalidNodeName {
                basename: basename.to_string(),
                cause,
            })
        })
        .collect()
}

/// Parse a basename into core name and suffix parts.
pub fn parse_separated_suffix(
    basename: &str,
    rules: &CodecRules,
) -> Result<SeparatedSuffixedBasename, SuffixError> {
    let mut parts = split_by_suffix_delimiter(basename, rules)?.into_iter();
    let core_name = parts.next().ok_or_else(|| SuffixError::EmptyParts {
        basename: basename.to_string(),
    })?;
    Ok(SeparatedSuffixedBasename::new(core_name, parts.collect()))
}

/// Re-join core name and suffix parts into one basename string.
pub fn serialize_separated_suffix(
    separated: &SeparatedSuffixedBasename,
    rules: &CodecRules,
) -> String {
    let mut tokens = Vec::with_capacity(1 + separated.suffix_parts.len());
    tokens.push(separated.core_name.as_str());
    tokens.extend(separated.suffix_parts.iter().map(NodeName::as_str));
    tokens.join(rules.suffix_delimiter())
}

/// Ancestor chain (root-first) to suffix chain (nearest-parent-first).
pub fn path_parts_to_suffix_parts(path_parts: &[NodeName]) -> Vec<NodeName> {
    path_parts.iter().rev().cloned().collect()
}

/// Suffix chain (nearest-parent-first) to ancestor chain (root-first).
pub fn suffix_parts_to_path_parts(suffix_parts: &[NodeName]) -> Vec<NodeName> {
    suffix_parts.iter().rev().cloned().collect()
}

/// Root-aware variant: strips the library root before reversing.
///
/// `path_parts` is the raw ancestor chain of an inside-library path; the
/// leading root (when present) carries no suffix token.
pub fn library_path_parts_to_suffix_parts(
    path_parts: &[String],
    rules: &CodecRules,
) -> Result<Vec<NodeName>, SuffixError> {
    let ancestors = match path_parts.first() {
        Some(first) if first == rules.library_root_name() => &path_parts[1..],
        _ => path_parts,
    };

    let mut validated = Vec::with_capacity(ancestors.len());
    for part in ancestors {
        let name = NodeName::parse(part, rules).map_err(|cause| SuffixError::InvalidNodeName {
            basename: part.clone(),
            cause,
        })?;
        validated.push(name);
    }
    Ok(path_parts_to_suffix_parts(&validated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LibrarySettings;

    fn rules() -> CodecRules {
        CodecRules::new(LibrarySettings::default()).unwrap()
    }

    fn names(raw: &[&str], rules: &CodecRules) -> Vec<NodeName> {
        raw.iter().map(|n| NodeName::parse(n, rules).unwrap()).collect()
    }

    #[test]
    fn splits_and_validates_tokens() {
        let parts = split_by_suffix_delimiter("Note-S3-R3", &rules()).unwrap();
        assert_eq!(parts, names(&["Note", "S3", "R3"], &rules()));
    }

    #[test]
    fn split_rejects_empty_token() {
        assert!(matches!(
            split_by_suffix_delimiter("Note--A", &rules()),
            Err(SuffixError::InvalidNodeName { .. })
        ));
        assert!(matches!(
            split_by_suffix_delimiter("", &rules()),
            Err(SuffixError::EmptyParts { .. })
        ));
    }

    #[test]
    fn parse_separates_core_from_suffix() {
        let rules = rules();
        let separated = parse_separated_suffix("Note-B-A", &rules).unwrap();
        assert_eq!(separated.core_name, "Note");
        assert_eq!(separated.suffix_parts, names(&["B", "A"], &rules));
    }

    #[test]
    fn parse_with_no_suffix() {
        let separated = parse_separated_suffix("Note", &rules()).unwrap();
        assert_eq!(separated.core_name, "Note");
        assert!(separated.suffix_parts.is_empty());
    }

    #[test]
    fn serialize_parse_round_trip() {
        let rules = rules();
        let separated = parse_separated_suffix("Note-S3-R3", &rules).unwrap();
        let joined = serialize_separated_suffix(&separated, &rules);
        assert_eq!(joined, "Note-S3-R3");
        assert_eq!(parse_separated_suffix(&joined, &rules).unwrap(), separated);
    }

    #[test]
    fn path_and_suffix_chains_are_mutual_inverses() {
        let rules = rules();
        let path = names(&["A", "B", "C"], &rules);
        let suffix = path_parts_to_suffix_parts(&path);
        assert_eq!(suffix, names(&["C", "B", "A"], &rules));
        assert_eq!(suffix_parts_to_path_parts(&suffix), path);
    }

    #[test]
    fn root_aware_variant_strips_the_root() {
        let rules = rules();
        let parts = vec!["Library".to_string(), "A".to_string(), "B".to_string()];
        let suffix = library_path_parts_to_suffix_parts(&parts, &rules).unwrap();
        assert_eq!(suffix, names(&["B", "A"], &rules));
    }

    #[test]
    fn root_aware_variant_at_root_is_empty() {
        let suffix =
            library_path_parts_to_suffix_parts(&["Library".to_string()], &rules()).unwrap();
        assert!(suffix.is_empty());
    }
}
