//! Event Materialization
//!
//! Projects scope-classified vault events onto single-node, library-scoped
//! Create/Delete/Rename events. This is a pure classifying projection: exactly
//! one event out per relevant event in, nothing retried, nothing buffered.
//!
//! Rules:
//!
//! - folders never materialize as Create; sections are implicit and created
//!   lazily when a child needs them
//! - a rename into the library is an import, keyed by the `to` side
//! - a rename out of the library is an export, keyed by the `from` side
//! - an inside rename whose `from`/`to` kinds disagree is dropped
//! - events entirely outside the library are ignored

use crate::events::scoped::{EventScope, RenameScope, ScopedVaultEvent};
use crate::models::{PathKind, SplitPath};

/// A single-node, library-scoped event, free of boundary-crossing noise.
///
/// This is a closed sum over `{Create, Delete, Rename} x {File, Scroll,
/// Section}` with one deliberate hole: there is no `CreateSection` variant,
/// because folders never materialize as Create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterializedNodeEvent {
    CreateFile(SplitPath),
    CreateScroll(SplitPath),
    DeleteFile(SplitPath),
    DeleteScroll(SplitPath),
    DeleteSection(SplitPath),
    RenameFile { from: SplitPath, to: SplitPath },
    RenameScroll { from: SplitPath, to: SplitPath },
    RenameSection { from: SplitPath, to: SplitPath },
}

impl MaterializedNodeEvent {
    /// Short label for logging.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::CreateFile(_) => "create_file",
            Self::CreateScroll(_) => "create_scroll",
            Self::DeleteFile(_) => "delete_file",
            Self::DeleteScroll(_) => "delete_scroll",
            Self::DeleteSection(_) => "delete_section",
            Self::RenameFile { .. } => "rename_file",
            Self::RenameScroll { .. } => "rename_scroll",
            Self::RenameSection { .. } => "rename_section",
        }
    }
}

/// Project one raw event onto at most one materialized event.
pub fn materialize(event: ScopedVaultEvent) -> Option<MaterializedNodeEvent> {
    match event {
        ScopedVaultEvent::Created { scope, path } => match scope {
            EventScope::Inside => create_event(path),
            EventScope::Outside => None,
        },

        ScopedVaultEvent::Deleted { scope, path } => match scope {
            EventScope::Inside => Some(delete_event(path)),
            EventScope::Outside => None,
        },

        ScopedVaultEvent::Renamed { scope, from, to } => match scope {
            RenameScope::Inside => {
                if from.kind != to.kind {
                    tracing::warn!(
                        "Dropping rename with disagreeing kinds: {} -> {}",
                        from.display_path(),
                        to.display_path()
                    );
                    return None;
                }
                Some(match to.kind {
                    PathKind::Folder => MaterializedNodeEvent::RenameSection { from, to },
                    PathKind::MdFile => MaterializedNodeEvent::RenameScroll { from, to },
                    PathKind::File => MaterializedNodeEvent::RenameFile { from, to },
                })
            }
            // Import: only the inside (`to`) side exists for the tree.
            RenameScope::OutsideToInside => create_event(to),
            // Export: the node leaves the library; key off the inside side.
            RenameScope::InsideToOutside => Some(delete_event(from)),
            RenameScope::Outside => None,
        },
    }
}

fn create_event(path: SplitPath) -> Option<MaterializedNodeEvent> {
    match path.kind {
        // Sections are created lazily, never from a folder event.
        PathKind::Folder => None,
        PathKind::MdFile => Some(MaterializedNodeEvent::CreateScroll(path)),
        PathKind::File => Some(MaterializedNodeEvent::CreateFile(path)),
    }
}

fn delete_event(path: SplitPath) -> MaterializedNodeEvent {
    match path.kind {
        PathKind::Folder => MaterializedNodeEvent::DeleteSection(path),
        PathKind::MdFile => MaterializedNodeEvent::DeleteScroll(path),
        PathKind::File => MaterializedNodeEvent::DeleteFile(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll(basename: &str) -> SplitPath {
        SplitPath::md_file(vec!["Library".into()], basename)
    }

    fn folder(basename: &str) -> SplitPath {
        SplitPath::folder(vec!["Library".into()], basename)
    }

    #[test]
    fn inside_create_of_scroll_materializes() {
        let event = ScopedVaultEvent::Created {
            scope: EventScope::Inside,
            path: scroll("Note"),
        };
        assert_eq!(
            materialize(event),
            Some(MaterializedNodeEvent::CreateScroll(scroll("Note")))
        );
    }

    #[test]
    fn folder_create_never_materializes() {
        let event = ScopedVaultEvent::Created {
            scope: EventScope::Inside,
            path: folder("Recipes"),
        };
        assert_eq!(materialize(event), None);

        let event = ScopedVaultEvent::Renamed {
            scope: RenameScope::OutsideToInside,
            from: SplitPath::folder(vec!["Elsewhere".into()], "Recipes"),
            to: folder("Recipes"),
        };
        assert_eq!(materialize(event), None);
    }

    #[test]
    fn outside_events_are_ignored() {
        let event = ScopedVaultEvent::Created {
            scope: EventScope::Outside,
            path: SplitPath::md_file(vec!["Elsewhere".into()], "Note"),
        };
        assert_eq!(materialize(event), None);

        let event = ScopedVaultEvent::Renamed {
            scope: RenameScope::Outside,
            from: SplitPath::md_file(vec!["Elsewhere".into()], "Note"),
            to: SplitPath::md_file(vec!["Elsewhere".into()], "Other"),
        };
        assert_eq!(materialize(event), None);
    }

    #[test]
    fn import_becomes_create_keyed_by_to_side() {
        let to = scroll("Note");
        let event = ScopedVaultEvent::Renamed {
            scope: RenameScope::OutsideToInside,
            from: SplitPath::md_file(vec!["Elsewhere".into()], "Note"),
            to: to.clone(),
        };
        assert_eq!(
            materialize(event),
            Some(MaterializedNodeEvent::CreateScroll(to))
        );
    }

    #[test]
    fn export_becomes_delete_keyed_by_from_side() {
        let from = scroll("Note");
        let event = ScopedVaultEvent::Renamed {
            scope: RenameScope::InsideToOutside,
            from: from.clone(),
            to: SplitPath::md_file(vec!["Elsewhere".into()], "Note"),
        };
        assert_eq!(
            materialize(event),
            Some(MaterializedNodeEvent::DeleteScroll(from))
        );
    }

    #[test]
    fn inside_rename_with_kind_disagreement_is_dropped() {
        let event = ScopedVaultEvent::Renamed {
            scope: RenameScope::Inside,
            from: scroll("Note"),
            to: SplitPath::file(vec!["Library".into()], "Note", "png"),
        };
        assert_eq!(materialize(event), None);
    }

    #[test]
    fn inside_deletes_cover_every_kind() {
        let event = ScopedVaultEvent::Deleted {
            scope: EventScope::Inside,
            path: folder("Recipes"),
        };
        assert_eq!(
            materialize(event),
            Some(MaterializedNodeEvent::DeleteSection(folder("Recipes")))
        );

        let event = ScopedVaultEvent::Deleted {
            scope: EventScope::Inside,
            path: SplitPath::file(vec!["Library".into()], "Diagram", "png"),
        };
        assert!(matches!(
            materialize(event),
            Some(MaterializedNodeEvent::DeleteFile(_))
        ));
    }
}
