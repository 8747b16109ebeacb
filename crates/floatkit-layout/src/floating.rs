#![forbid(unsafe_code)]

//! Floating menu placement.
//!
//! Computes where a floating menu body sits inside its container so that it
//! hugs a trigger element on a chosen side.
//!
//! # Coordinate model
//!
//! Inputs are snapshots in one coordinate space (normally the viewport):
//! the trigger rectangle, the container rectangle, and the menu body size.
//! The output [`Position`] is relative to the container's own box. Its
//! `start` is measured from the container's left edge under
//! [`TextDirection::Ltr`] and from its right edge under
//! [`TextDirection::Rtl`], so "start" always follows text flow.
//!
//! # Algorithm
//!
//! 1. Measure trigger reference points relative to the container, mirrored
//!    for RTL.
//! 2. Pick the alignment axis, perpendicular to the placement direction.
//! 3. Align the menu to the trigger's start edge, center, or end edge on
//!    that axis.
//! 4. Offset the menu past the trigger on the placement axis.
//!
//! # Invariants
//!
//! 1. The computation is pure: identical inputs give identical outputs.
//! 2. A position is never reused across layout changes; callers recompute
//!    from fresh snapshots.
//! 3. Invalid configuration is reported, never corrected.

use std::fmt;
use std::str::FromStr;

use floatkit_core::geometry::{Rect, Size};

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Which side of the trigger the menu body is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Menu body to the left of the trigger.
    Left,
    /// Menu body above the trigger.
    Top,
    /// Menu body to the right of the trigger.
    Right,
    /// Menu body below the trigger.
    #[default]
    Bottom,
}

impl Direction {
    /// All placement directions.
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    /// The axis along which [`Alignment`] is evaluated.
    ///
    /// Always perpendicular to the placement axis: a menu below its trigger
    /// aligns horizontally, a menu beside it aligns vertically.
    #[must_use]
    pub const fn alignment_axis(self) -> DirectionGroup {
        match self {
            Self::Left | Self::Right => DirectionGroup::Vertical,
            Self::Top | Self::Bottom => DirectionGroup::Horizontal,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
        }
    }
}

impl FromStr for Direction {
    type Err = PositionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "top" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            _ => Err(PositionError::InvalidDirection(value.to_owned())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The axis an [`Alignment`] is measured along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionGroup {
    /// Alignment runs along the inline (left/right) axis.
    Horizontal,
    /// Alignment runs along the block (top/bottom) axis.
    Vertical,
}

/// Where along the alignment axis the menu lines up with its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// Menu start edge meets trigger start edge.
    #[default]
    Start,
    /// Menu center meets trigger center.
    Center,
    /// Menu end edge meets trigger end edge.
    End,
}

impl Alignment {
    /// All alignments.
    pub const ALL: [Self; 3] = [Self::Start, Self::Center, Self::End];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }

    /// Offset of the menu's leading edge along one axis.
    ///
    /// `start`, `center` and `end` are the trigger's reference points on the
    /// axis; `extent` is the menu's size on the same axis.
    #[inline]
    fn offset(self, start: f64, center: f64, end: f64, extent: f64) -> f64 {
        match self {
            Self::Start => start,
            Self::Center => center - extent / 2.0,
            Self::End => end - extent,
        }
    }
}

impl FromStr for Alignment {
    type Err = PositionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            _ => Err(PositionError::InvalidAlignment(value.to_owned())),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline text direction of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl TextDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

impl FromStr for TextDirection {
    type Err = PositionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            _ => Err(PositionError::InvalidTextDirection(value.to_owned())),
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The positioning scheme of the container element.
///
/// Only non-static containers establish a box that absolute offsets are
/// measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContainerPositioning {
    /// Normal flow; not an offset parent.
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl ContainerPositioning {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
            Self::Sticky => "sticky",
        }
    }

    /// Whether the container is an offset parent.
    #[must_use]
    pub const fn is_positioned(self) -> bool {
        !matches!(self, Self::Static)
    }
}

impl FromStr for ContainerPositioning {
    type Err = PositionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "relative" => Ok(Self::Relative),
            "absolute" => Ok(Self::Absolute),
            "fixed" => Ok(Self::Fixed),
            "sticky" => Ok(Self::Sticky),
            _ => Err(PositionError::InvalidPositioning(value.to_owned())),
        }
    }
}

impl fmt::Display for ContainerPositioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The style property that carries [`Position::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetProperty {
    Left,
    Right,
    Top,
}

impl OffsetProperty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons a floating menu position cannot be computed.
///
/// All variants are configuration errors: retrying with the same inputs
/// fails the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionError {
    /// Direction value outside left/top/right/bottom.
    InvalidDirection(String),
    /// Alignment value outside start/center/end.
    InvalidAlignment(String),
    /// Text direction value outside ltr/rtl.
    InvalidTextDirection(String),
    /// Positioning scheme value that is not a known CSS keyword.
    InvalidPositioning(String),
    /// The container is `static` and not the document root at its origin.
    InvalidContainer {
        positioning: ContainerPositioning,
        start_from_viewport: f64,
        top: f64,
    },
    /// Trigger geometry is not available yet.
    MissingTriggerGeometry,
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirection(value) => write!(f, "wrong menu position direction: {value}"),
            Self::InvalidAlignment(value) => write!(f, "wrong menu alignment: {value}"),
            Self::InvalidTextDirection(value) => write!(f, "wrong text direction: {value}"),
            Self::InvalidPositioning(value) => write!(f, "wrong container positioning: {value}"),
            Self::InvalidContainer {
                positioning,
                start_from_viewport,
                top,
            } => write!(
                f,
                "floating menu container must not have `position:{positioning}` \
                 (start {start_from_viewport}px, top {top}px from viewport)"
            ),
            Self::MissingTriggerGeometry => {
                f.write_str("missing information of trigger button position")
            }
        }
    }
}

impl std::error::Error for PositionError {}

// ---------------------------------------------------------------------------
// Container
// ---------------------------------------------------------------------------

/// The element a floating menu is placed into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    /// Container box in viewport coordinates.
    pub rect: Rect,
    /// Its positioning scheme.
    pub positioning: ContainerPositioning,
    /// Whether the container is the document root (`<body>`).
    pub is_document_root: bool,
    /// Viewport width, used to measure an RTL container's start edge.
    pub viewport_width: f64,
}

impl Container {
    /// A container with the given positioning scheme.
    ///
    /// The viewport is assumed to end at the container's right edge.
    #[must_use]
    pub fn new(rect: Rect, positioning: ContainerPositioning) -> Self {
        Self {
            rect,
            positioning,
            is_document_root: false,
            viewport_width: rect.right(),
        }
    }

    /// A `position: relative` container.
    #[must_use]
    pub fn positioned(rect: Rect) -> Self {
        Self::new(rect, ContainerPositioning::Relative)
    }

    /// The static document root spanning the whole viewport.
    #[must_use]
    pub fn document_root(viewport: Rect) -> Self {
        Self {
            rect: viewport,
            positioning: ContainerPositioning::Static,
            is_document_root: true,
            viewport_width: viewport.right(),
        }
    }

    /// Set the viewport width.
    #[must_use]
    pub fn with_viewport_width(mut self, width: f64) -> Self {
        self.viewport_width = width;
        self
    }

    /// Mark or unmark the container as the document root.
    #[must_use]
    pub fn with_document_root(mut self, is_document_root: bool) -> Self {
        self.is_document_root = is_document_root;
        self
    }

    /// Distance of the container's start edge from the viewport's start edge.
    #[must_use]
    pub fn start_from_viewport(&self, text_direction: TextDirection) -> f64 {
        match text_direction {
            TextDirection::Ltr => self.rect.left(),
            TextDirection::Rtl => self.viewport_width - self.rect.right(),
        }
    }

    /// Check that offsets measured from this container are meaningful.
    ///
    /// A static container only works when it is the document root sitting
    /// exactly at the viewport origin.
    pub fn validate(&self, text_direction: TextDirection) -> Result<(), PositionError> {
        if self.positioning.is_positioned() {
            return Ok(());
        }
        let start_from_viewport = self.start_from_viewport(text_direction);
        let top = self.rect.top();
        if self.is_document_root && start_from_viewport == 0.0 && top == 0.0 {
            return Ok(());
        }
        Err(PositionError::InvalidContainer {
            positioning: self.positioning,
            start_from_viewport,
            top,
        })
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Placement of a floating menu inside its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Text direction `start` is measured in.
    pub text_direction: TextDirection,
    /// Left offset (LTR) or right offset (RTL), in pixels.
    pub start: f64,
    /// Top offset, in pixels.
    pub top: f64,
}

impl Position {
    /// The style property `start` should be written to.
    #[must_use]
    pub const fn inline_property(&self) -> OffsetProperty {
        match self.text_direction {
            TextDirection::Ltr => OffsetProperty::Left,
            TextDirection::Rtl => OffsetProperty::Right,
        }
    }

    /// The style writes needed to apply this position.
    #[must_use]
    pub fn style_offsets(&self) -> [(OffsetProperty, f64); 2] {
        [
            (self.inline_property(), self.start),
            (OffsetProperty::Top, self.top),
        ]
    }
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Trigger reference points measured from the container.
#[derive(Debug, Clone, Copy)]
struct References {
    start: f64,
    center_horizontal: f64,
    end: f64,
    top: f64,
    center_vertical: f64,
    bottom: f64,
}

impl References {
    fn measure(trigger: &Rect, container: &Rect, text_direction: TextDirection) -> Self {
        let (start, center_horizontal, end) = match text_direction {
            TextDirection::Ltr => (
                trigger.left() - container.left(),
                trigger.center_x() - container.left(),
                trigger.right() - container.left(),
            ),
            TextDirection::Rtl => (
                container.right() - trigger.right(),
                container.right() - trigger.center_x(),
                container.right() - trigger.left(),
            ),
        };
        Self {
            start,
            center_horizontal,
            end,
            top: trigger.top() - container.top(),
            center_vertical: trigger.center_y() - container.top(),
            bottom: trigger.bottom() - container.top(),
        }
    }
}

/// Compute the position of a floating menu body.
///
/// # Errors
///
/// - [`PositionError::MissingTriggerGeometry`] when `trigger` is `None`.
/// - [`PositionError::InvalidContainer`] when the container is not an
///   offset parent (see [`Container::validate`]).
pub fn compute_position(
    trigger: Option<Rect>,
    container: &Container,
    menu: Size,
    direction: Direction,
    alignment: Alignment,
    text_direction: TextDirection,
) -> Result<Position, PositionError> {
    let trigger = trigger.ok_or(PositionError::MissingTriggerGeometry)?;
    container.validate(text_direction)?;

    let refs = References::measure(&trigger, &container.rect, text_direction);
    let aligned = match direction.alignment_axis() {
        DirectionGroup::Horizontal => {
            alignment.offset(refs.start, refs.center_horizontal, refs.end, menu.width)
        }
        DirectionGroup::Vertical => {
            alignment.offset(refs.top, refs.center_vertical, refs.bottom, menu.height)
        }
    };

    let (start, top) = match direction {
        Direction::Left => (refs.start - menu.width, aligned),
        Direction::Top => (aligned, refs.top - menu.height),
        Direction::Right => (refs.end, aligned),
        Direction::Bottom => (aligned, refs.bottom),
    };

    floatkit_core::trace!(
        direction = direction.as_str(),
        alignment = alignment.as_str(),
        text_direction = text_direction.as_str(),
        start,
        top,
        "computed floating menu position"
    );

    Ok(Position {
        text_direction,
        start,
        top,
    })
}

/// Direction and alignment of a floating menu, bundled for reuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FloatingPlacement {
    pub direction: Direction,
    pub alignment: Alignment,
}

impl FloatingPlacement {
    #[must_use]
    pub const fn new(direction: Direction, alignment: Alignment) -> Self {
        Self {
            direction,
            alignment,
        }
    }

    /// Parse textual attribute values such as `"top"` and `"center"`.
    ///
    /// Alignment is checked before direction.
    pub fn parse(direction: &str, alignment: &str) -> Result<Self, PositionError> {
        let alignment = alignment.parse()?;
        let direction = direction.parse()?;
        Ok(Self::new(direction, alignment))
    }

    /// Set the direction.
    #[must_use]
    pub const fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the alignment.
    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// See [`compute_position`].
    pub fn compute(
        &self,
        trigger: Option<Rect>,
        container: &Container,
        menu: Size,
        text_direction: TextDirection,
    ) -> Result<Position, PositionError> {
        compute_position(
            trigger,
            container,
            menu,
            self.direction,
            self.alignment,
            text_direction,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger() -> Rect {
        Rect::from_edges(100.0, 50.0, 150.0, 70.0)
    }

    fn container() -> Container {
        Container::positioned(Rect::from_edges(0.0, 0.0, 500.0, 300.0))
    }

    const MENU: Size = Size::new(80.0, 40.0);

    fn place(direction: Direction, alignment: Alignment) -> Position {
        compute_position(
            Some(trigger()),
            &container(),
            MENU,
            direction,
            alignment,
            TextDirection::Ltr,
        )
        .expect("valid placement")
    }

    #[test]
    fn bottom_start() {
        let p = place(Direction::Bottom, Alignment::Start);
        assert_eq!((p.start, p.top), (100.0, 70.0));
        assert_eq!(p.text_direction, TextDirection::Ltr);
    }

    #[test]
    fn top_end() {
        let p = place(Direction::Top, Alignment::End);
        assert_eq!((p.start, p.top), (70.0, 10.0));
    }

    #[test]
    fn left_center() {
        let p = place(Direction::Left, Alignment::Center);
        assert_eq!((p.start, p.top), (20.0, 40.0));
    }

    #[test]
    fn right_start_and_end() {
        let p = place(Direction::Right, Alignment::Start);
        assert_eq!((p.start, p.top), (150.0, 50.0));
        let p = place(Direction::Right, Alignment::End);
        assert_eq!((p.start, p.top), (150.0, 30.0));
    }

    #[test]
    fn bottom_center() {
        let p = place(Direction::Bottom, Alignment::Center);
        assert_eq!((p.start, p.top), (85.0, 70.0));
    }

    #[test]
    fn offsets_are_container_relative() {
        let container = Container::positioned(Rect::from_edges(20.0, 30.0, 520.0, 330.0));
        let p = compute_position(
            Some(trigger()),
            &container,
            MENU,
            Direction::Bottom,
            Alignment::Start,
            TextDirection::Ltr,
        )
        .unwrap();
        assert_eq!((p.start, p.top), (80.0, 40.0));
    }

    #[test]
    fn vertical_end_uses_container_relative_bottom() {
        let container = Container::positioned(Rect::from_edges(0.0, 30.0, 500.0, 330.0));
        let p = compute_position(
            Some(trigger()),
            &container,
            MENU,
            Direction::Left,
            Alignment::End,
            TextDirection::Ltr,
        )
        .unwrap();
        // trigger bottom 70 -> 40 from container, minus menu height
        assert_eq!(p.top, 0.0);
    }

    #[test]
    fn rtl_measures_from_container_right() {
        let p = compute_position(
            Some(trigger()),
            &container(),
            MENU,
            Direction::Bottom,
            Alignment::Start,
            TextDirection::Rtl,
        )
        .unwrap();
        // start edge in RTL is the trigger's right edge: 500 - 150
        assert_eq!((p.start, p.top), (350.0, 70.0));
        assert_eq!(p.inline_property(), OffsetProperty::Right);
    }

    #[test]
    fn rtl_left_direction_places_before_start_edge() {
        let p = compute_position(
            Some(trigger()),
            &container(),
            MENU,
            Direction::Left,
            Alignment::Start,
            TextDirection::Rtl,
        )
        .unwrap();
        assert_eq!((p.start, p.top), (270.0, 50.0));
    }

    #[test]
    fn missing_trigger_is_reported() {
        let err = compute_position(
            None,
            &container(),
            MENU,
            Direction::Bottom,
            Alignment::Start,
            TextDirection::Ltr,
        )
        .unwrap_err();
        assert_eq!(err, PositionError::MissingTriggerGeometry);
    }

    #[test]
    fn invalid_direction_string() {
        let err = "diagonal".parse::<Direction>().unwrap_err();
        assert_eq!(err, PositionError::InvalidDirection("diagonal".into()));
        assert_eq!(err.to_string(), "wrong menu position direction: diagonal");
    }

    #[test]
    fn invalid_alignment_string() {
        let err = "middle".parse::<Alignment>().unwrap_err();
        assert_eq!(err, PositionError::InvalidAlignment("middle".into()));
    }

    #[test]
    fn parse_checks_alignment_first() {
        let err = FloatingPlacement::parse("diagonal", "middle").unwrap_err();
        assert!(matches!(err, PositionError::InvalidAlignment(_)));
        let err = FloatingPlacement::parse("diagonal", "end").unwrap_err();
        assert!(matches!(err, PositionError::InvalidDirection(_)));
    }

    #[test]
    fn parse_is_case_insensitive() {
        let placement = FloatingPlacement::parse(" Top ", "CENTER").unwrap();
        assert_eq!(placement, FloatingPlacement::new(Direction::Top, Alignment::Center));
        assert_eq!("RTL".parse::<TextDirection>(), Ok(TextDirection::Rtl));
        assert_eq!(
            "sticky".parse::<ContainerPositioning>(),
            Ok(ContainerPositioning::Sticky)
        );
        assert!("inline".parse::<ContainerPositioning>().is_err());
        assert!("up".parse::<TextDirection>().is_err());
    }

    #[test]
    fn textual_names_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
        for alignment in Alignment::ALL {
            assert_eq!(alignment.to_string().parse::<Alignment>(), Ok(alignment));
        }
    }

    #[test]
    fn static_container_with_offset_is_rejected() {
        let container = Container::new(
            Rect::from_edges(10.0, 20.0, 510.0, 320.0),
            ContainerPositioning::Static,
        );
        let err = compute_position(
            Some(trigger()),
            &container,
            MENU,
            Direction::Bottom,
            Alignment::Start,
            TextDirection::Ltr,
        )
        .unwrap_err();
        assert!(matches!(err, PositionError::InvalidContainer { .. }));
    }

    #[test]
    fn static_non_root_at_origin_is_rejected() {
        let container = Container::new(
            Rect::from_edges(0.0, 0.0, 500.0, 300.0),
            ContainerPositioning::Static,
        );
        assert!(container.validate(TextDirection::Ltr).is_err());
    }

    #[test]
    fn static_document_root_at_origin_is_accepted() {
        let root = Container::document_root(Rect::from_size(500.0, 300.0));
        assert!(root.validate(TextDirection::Ltr).is_ok());
        assert!(root.validate(TextDirection::Rtl).is_ok());
    }

    #[test]
    fn static_document_root_scrolled_is_rejected() {
        let root = Container::document_root(Rect::new(0.0, -120.0, 500.0, 900.0));
        let err = root.validate(TextDirection::Ltr).unwrap_err();
        assert_eq!(
            err,
            PositionError::InvalidContainer {
                positioning: ContainerPositioning::Static,
                start_from_viewport: 0.0,
                top: -120.0,
            }
        );
    }

    #[test]
    fn rtl_start_from_viewport_uses_viewport_width() {
        let root = Container::document_root(Rect::from_size(500.0, 300.0)).with_viewport_width(515.0);
        assert_eq!(root.start_from_viewport(TextDirection::Rtl), 15.0);
        assert!(root.validate(TextDirection::Rtl).is_err());
        assert!(root.validate(TextDirection::Ltr).is_ok());
    }

    #[test]
    fn positioned_container_anywhere_is_accepted() {
        for positioning in [
            ContainerPositioning::Relative,
            ContainerPositioning::Absolute,
            ContainerPositioning::Fixed,
            ContainerPositioning::Sticky,
        ] {
            let c = Container::new(Rect::new(33.0, 44.0, 100.0, 100.0), positioning);
            assert!(c.validate(TextDirection::Ltr).is_ok(), "{positioning}");
        }
    }

    #[test]
    fn alignment_axis_is_perpendicular() {
        assert_eq!(Direction::Left.alignment_axis(), DirectionGroup::Vertical);
        assert_eq!(Direction::Right.alignment_axis(), DirectionGroup::Vertical);
        assert_eq!(Direction::Top.alignment_axis(), DirectionGroup::Horizontal);
        assert_eq!(Direction::Bottom.alignment_axis(), DirectionGroup::Horizontal);
    }

    #[test]
    fn style_offsets_follow_text_direction() {
        let p = Position {
            text_direction: TextDirection::Rtl,
            start: 12.0,
            top: 34.0,
        };
        assert_eq!(
            p.style_offsets(),
            [(OffsetProperty::Right, 12.0), (OffsetProperty::Top, 34.0)]
        );
    }

    #[test]
    fn placement_builder() {
        let placement = FloatingPlacement::default()
            .direction(Direction::Top)
            .alignment(Alignment::End);
        let p = placement
            .compute(Some(trigger()), &container(), MENU, TextDirection::Ltr)
            .unwrap();
        assert_eq!(p, place(Direction::Top, Alignment::End));
        assert_eq!(
            FloatingPlacement::default(),
            FloatingPlacement::new(Direction::Bottom, Alignment::Start)
        );
    }
}
