//! Codec Configuration
//!
//! This module defines the immutable [`CodecRules`] configuration that every codec
//! function receives as an explicit parameter, plus the raw [`LibrarySettings`]
//! shape it is validated from.
//!
//! # Architecture
//!
//! - **No ambient state**: codecs never read settings from globals. A `CodecRules`
//!   value is constructed once per session and threaded by reference everywhere.
//! - **Settings changes**: a settings change builds a fresh `CodecRules`; an
//!   existing one is never mutated in place.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator used inside segment ID wire tokens.
///
/// ASCII unit separator. It is never legal inside a node name, a suffix
/// delimiter, or a file extension, which keeps the segment ID encoding
/// unambiguous regardless of what delimiter the user configures.
pub const SEGMENT_SEPARATOR: char = '\u{1F}';

/// Extension every scroll (markdown leaf) carries.
pub const MD_EXTENSION: &str = "md";

fn default_suffix_delimiter() -> String {
    "-".to_string()
}

fn default_library_root_name() -> String {
    "Library".to_string()
}

/// Raw, user-editable settings as parsed from the host's settings store.
///
/// This is the deserialization target; it carries no invariants of its own.
/// Validation happens once, in [`CodecRules::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySettings {
    /// Separator between a basename's core name and its suffix tokens.
    #[serde(default = "default_suffix_delimiter")]
    pub suffix_delimiter: String,
    /// Name of the top-level folder scoping all naming enforcement.
    #[serde(default = "default_library_root_name")]
    pub library_root_name: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            suffix_delimiter: default_suffix_delimiter(),
            library_root_name: default_library_root_name(),
        }
    }
}

/// Settings validation errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The suffix delimiter is empty
    #[error("Suffix delimiter must not be empty")]
    EmptyDelimiter,

    /// The suffix delimiter collides with the segment separator
    #[error("Suffix delimiter {delimiter:?} must not contain the segment separator")]
    DelimiterContainsSeparator { delimiter: String },

    /// The library root name is empty
    #[error("Library root name must not be empty")]
    EmptyRootName,

    /// The library root name contains the suffix delimiter
    #[error("Library root name {root:?} must not contain the suffix delimiter {delimiter:?}")]
    DelimiterInRootName { root: String, delimiter: String },

    /// The library root name contains the segment separator
    #[error("Library root name {root:?} must not contain the segment separator")]
    SeparatorInRootName { root: String },
}

/// Immutable codec configuration for one session.
///
/// Constructed once from validated [`LibrarySettings`] and injected into every
/// codec function. Fields are private so a validated value can never drift from
/// its invariants:
///
/// - `suffix_delimiter` is non-empty and disjoint from [`SEGMENT_SEPARATOR`]
/// - `library_root_name` is a valid node name under that delimiter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecRules {
    suffix_delimiter: String,
    library_root_name: String,
}

impl CodecRules {
    /// Validate raw settings into an immutable rules object.
    pub fn new(settings: LibrarySettings) -> Result<Self, SettingsError> {
        let LibrarySettings {
            suffix_delimiter,
            library_root_name,
        } = settings;

        if suffix_delimiter.is_empty() {
            return Err(SettingsError::EmptyDelimiter);
        }
        if suffix_delimiter.contains(SEGMENT_SEPARATOR) {
            return Err(SettingsError::DelimiterContainsSeparator {
                delimiter: suffix_delimiter,
            });
        }
        if library_root_name.is_empty() {
            return Err(SettingsError::EmptyRootName);
        }
        if library_root_name.contains(&suffix_delimiter) {
            return Err(SettingsError::DelimiterInRootName {
                root: library_root_name,
                delimiter: suffix_delimiter,
            });
        }
        if library_root_name.contains(SEGMENT_SEPARATOR) {
            return Err(SettingsError::SeparatorInRootName {
                root: library_root_name,
            });
        }

        Ok(Self {
            suffix_delimiter,
            library_root_name,
        })
    }

    /// Separator between core name and suffix tokens in on-disk basenames.
    pub fn suffix_delimiter(&self) -> &str {
        &self.suffix_delimiter
    }

    /// Name of the configured library root folder.
    pub fn library_root_name(&self) -> &str {
        &self.library_root_name
    }
}
