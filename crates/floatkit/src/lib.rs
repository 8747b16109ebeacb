#![forbid(unsafe_code)]

//! floatkit public facade crate.
//!
//! Re-exports the geometry, placement, and floating menu types from the
//! internal crates and offers a lightweight prelude.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use floatkit_core::event::{Event, FocusTarget, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use floatkit_core::geometry::{Rect, Size};

// --- Layout re-exports -----------------------------------------------------

pub use floatkit_layout::{
    Alignment, Container, ContainerPositioning, Direction, DirectionGroup, FloatingPlacement,
    OffsetProperty, Position, PositionError, TextDirection, compute_position,
};

// --- Widget re-exports -----------------------------------------------------

pub use floatkit_widgets::{
    FloatingMenu, FloatingMenuConfig, LayoutObserver, MenuHost, MenuState, MenuTransition,
    ResizeHandle, ResizeSignal, ResizeSubscription, ResizeTarget, StyleApplier, TransitionCause,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for floatkit hosts.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A floating surface could not be positioned.
    Position(PositionError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Position(err) => Some(err),
        }
    }
}

impl From<PositionError> for Error {
    fn from(err: PositionError) -> Self {
        Self::Position(err)
    }
}

/// Standard result type for floatkit APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, Container, Direction, Error, Event, FloatingMenu, FloatingMenuConfig,
        FloatingPlacement, KeyCode, KeyEvent, MenuHost, Position, Rect, Result, Size,
        TextDirection,
    };

    pub use crate::{core, layout, widgets};
}

pub use floatkit_core as core;
pub use floatkit_layout as layout;
pub use floatkit_widgets as widgets;
