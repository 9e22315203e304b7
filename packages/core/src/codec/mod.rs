//! Codecs
//!
//! Pure, synchronous translation layers between the filesystem view of the
//! library and its tree-address view:
//!
//! - `suffix` - basename ↔ (core name, suffix parts); path order ↔ suffix order
//! - `canonical` - path/suffix agreement enforcement
//! - `segment_id` - (core name, kind, extension) ↔ tree-address token
//! - `locator` - canonical split path ↔ segment ID chain
//!
//! Every function takes an explicit `&CodecRules`; nothing here reads ambient
//! state, so all codecs are safe under unlimited concurrent use.

pub mod canonical;
pub mod error;
pub mod locator;
pub mod segment_id;
pub mod suffix;

pub use error::{LocatorError, SegmentIdError, SplitPathError, SuffixError};
pub use locator::TreeNodeLocator;
pub use segment_id::{ParsedSegmentId, SegmentId};
