#![forbid(unsafe_code)]

//! Placement of floating surfaces relative to a trigger.
//!
//! This crate provides the pure geometry behind floating menus:
//!
//! - [`Direction`] - which side of the trigger the menu body goes on
//! - [`Alignment`] - where along the perpendicular axis it lines up
//! - [`Container`] - the positioned ancestor offsets are measured from
//! - [`compute_position`] - the placement computation itself
//!
//! ```
//! use floatkit_layout::{Alignment, Container, Direction, FloatingPlacement, TextDirection};
//! use floatkit_layout::{Rect, Size};
//!
//! let container = Container::positioned(Rect::from_edges(0.0, 0.0, 500.0, 300.0));
//! let trigger = Rect::from_edges(100.0, 50.0, 150.0, 70.0);
//!
//! let position = FloatingPlacement::new(Direction::Bottom, Alignment::Start)
//!     .compute(Some(trigger), &container, Size::new(80.0, 40.0), TextDirection::Ltr)
//!     .unwrap();
//! assert_eq!((position.start, position.top), (100.0, 70.0));
//! ```

pub mod floating;

pub use floating::{
    Alignment, Container, ContainerPositioning, Direction, DirectionGroup, FloatingPlacement,
    OffsetProperty, Position, PositionError, TextDirection, compute_position,
};
pub use floatkit_core::geometry::{Rect, Size};
