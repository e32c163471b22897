//! Error types for the sidenav TUI.

use std::io;

use thiserror::Error;

use crate::navigation::ViewId;

/// Errors surfaced by the application loop.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Terminal I/O failed (setup, draw, or event read).
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    /// A message targeted a view that is not the mounted one.
    #[error("{expected} view is not mounted (mounted: {})", .mounted.map_or("none", ViewId::key))]
    NotMounted {
        expected: ViewId,
        mounted: Option<ViewId>,
    },
}

/// Returned when a string does not name one of the sidebar views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view '{0}' (expected home, settings or about)")]
pub struct ParseViewIdError(pub String);
