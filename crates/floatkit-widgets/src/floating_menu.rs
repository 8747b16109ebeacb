#![forbid(unsafe_code)]

//! Floating menu controller.
//!
//! Owns the open/closed lifecycle of a menu body that floats next to its
//! trigger: attaching it to a container, keeping it positioned while the
//! page reflows, and closing it when focus or keyboard input says so.
//!
//! # State machine
//!
//! ```text
//!            open / toggle / trigger activation
//!   Closed ─────────────────────────────────────▶ Open
//!     ▲                                             │
//!     └──── close, Escape, Tab, focus out, detach ──┘
//! ```
//!
//! Opening attaches the menu to its container (once), subscribes to resize
//! notifications for the container and the trigger's parent, and applies an
//! initial position. While open, every resize notification recomputes the
//! position from fresh geometry. Closing releases both subscriptions.
//!
//! # Invariants
//!
//! 1. Subscriptions exist only while the menu is open.
//! 2. Each subscription is released exactly once.
//! 3. A position is recomputed from current geometry every time it is
//!    applied; nothing computed in one open cycle survives into the next.
//!
//! # Failure Modes
//!
//! Positioning errors propagate to the caller. The menu stays in whatever
//! state the transition reached and keeps its last applied offsets; there is
//! no fallback placement.

use std::fmt;

use floatkit_core::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use floatkit_layout::{
    Alignment, Direction, FloatingPlacement, OffsetProperty, Position, PositionError,
};

use crate::host::{
    LayoutObserver, MenuHost, ResizeHandle, ResizeSubscription, ResizeTarget, StyleApplier,
};

/// Selector used to find the container when none is configured.
pub const DEFAULT_CONTAINER_SELECTOR: &str = "[data-floating-menu-container]";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for a floating menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingMenuConfig {
    /// Selector for the element the menu is moved into.
    /// Default: `[data-floating-menu-container]`
    pub container_selector: String,

    /// Also reposition when the element holding the trigger resizes.
    /// Default: true
    pub observe_trigger_parent: bool,

    /// Return focus to the trigger after an Escape close.
    /// Default: true
    pub refocus_on_escape: bool,

    /// Return focus to the trigger after focus leaves the menu.
    /// Default: true
    pub refocus_on_blur: bool,

    /// Close when Tab or Shift+Tab is pressed inside the menu.
    /// Default: true
    pub close_on_tab: bool,
}

impl Default for FloatingMenuConfig {
    fn default() -> Self {
        Self {
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_owned(),
            observe_trigger_parent: true,
            refocus_on_escape: true,
            refocus_on_blur: true,
            close_on_tab: true,
        }
    }
}

impl FloatingMenuConfig {
    #[must_use]
    pub fn container_selector(mut self, selector: impl Into<String>) -> Self {
        self.container_selector = selector.into();
        self
    }

    #[must_use]
    pub fn observe_trigger_parent(mut self, enabled: bool) -> Self {
        self.observe_trigger_parent = enabled;
        self
    }

    #[must_use]
    pub fn refocus_on_escape(mut self, enabled: bool) -> Self {
        self.refocus_on_escape = enabled;
        self
    }

    #[must_use]
    pub fn refocus_on_blur(mut self, enabled: bool) -> Self {
        self.refocus_on_blur = enabled;
        self
    }

    #[must_use]
    pub fn close_on_tab(mut self, enabled: bool) -> Self {
        self.close_on_tab = enabled;
        self
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Open/closed state of a floating menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

/// Why a state transition happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionCause {
    /// Explicit open request.
    Opened,
    /// Trigger clicked or activated from the keyboard.
    TriggerActivated,
    /// Explicit close request.
    Closed,
    /// Escape pressed.
    Escape,
    /// Tab or Shift+Tab pressed.
    Tab,
    /// Focus moved outside the menu and its trigger.
    FocusLost,
    /// The menu element was removed from the document.
    Detached,
}

impl fmt::Display for TransitionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Opened => "opened",
            Self::TriggerActivated => "trigger_activated",
            Self::Closed => "closed",
            Self::Escape => "escape",
            Self::Tab => "tab",
            Self::FocusLost => "focus_lost",
            Self::Detached => "detached",
        })
    }
}

/// A completed state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuTransition {
    pub from: MenuState,
    pub to: MenuState,
    pub cause: TransitionCause,
}

// ---------------------------------------------------------------------------
// FloatingMenu
// ---------------------------------------------------------------------------

/// A floating menu driven by a [`MenuHost`].
///
/// `R` is the host's resize handle type.
#[derive(Debug)]
pub struct FloatingMenu<R: ResizeHandle> {
    config: FloatingMenuConfig,
    placement: FloatingPlacement,
    state: MenuState,
    attached: bool,
    subscriptions: Vec<ResizeSubscription<R>>,
    /// Inline property written by the last applied position.
    applied_property: Option<OffsetProperty>,
    /// Last position applied in the current open cycle.
    last_position: Option<Position>,
}

impl<R: ResizeHandle> FloatingMenu<R> {
    /// Create a closed, unattached menu.
    #[must_use]
    pub fn new(placement: FloatingPlacement, config: FloatingMenuConfig) -> Self {
        Self {
            config,
            placement,
            state: MenuState::Closed,
            attached: false,
            subscriptions: Vec::with_capacity(2),
            applied_property: None,
            last_position: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    #[inline]
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[must_use]
    pub fn placement(&self) -> FloatingPlacement {
        self.placement
    }

    #[must_use]
    pub fn config(&self) -> &FloatingMenuConfig {
        &self.config
    }

    /// Position applied most recently during the current open cycle.
    #[must_use]
    pub fn last_position(&self) -> Option<Position> {
        self.last_position
    }

    /// Number of resize observations currently held.
    #[must_use]
    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.iter().filter(|s| s.is_active()).count()
    }

    /// Open the menu.
    ///
    /// Returns `Ok(None)` if it was already open. On a positioning error the
    /// menu is still open and subscribed, so the next resize retries.
    pub fn open<H>(&mut self, host: &mut H) -> Result<Option<MenuTransition>, PositionError>
    where
        H: MenuHost<Handle = R>,
    {
        self.open_with(host, TransitionCause::Opened)
    }

    /// Close the menu. Returns `None` if it was already closed.
    pub fn close(&mut self) -> Option<MenuTransition> {
        self.close_with(TransitionCause::Closed)
    }

    /// Open if closed, close if open.
    pub fn toggle<H>(&mut self, host: &mut H) -> Result<Option<MenuTransition>, PositionError>
    where
        H: MenuHost<Handle = R>,
    {
        match self.state {
            MenuState::Closed => self.open_with(host, TransitionCause::TriggerActivated),
            MenuState::Open => Ok(self.close_with(TransitionCause::TriggerActivated)),
        }
    }

    /// Feed an input event to the menu.
    pub fn handle_event<H>(
        &mut self,
        host: &mut H,
        event: &Event,
    ) -> Result<Option<MenuTransition>, PositionError>
    where
        H: MenuHost<Handle = R>,
    {
        match event {
            Event::Key(key) => Ok(self.handle_key(host, key)),
            Event::TriggerKey(key) => {
                if key.kind == KeyEventKind::Release {
                    return Ok(None);
                }
                if key.is_activation() {
                    return self.toggle(host);
                }
                Ok(self.handle_key(host, key))
            }
            Event::TriggerClick => self.toggle(host),
            Event::FocusOut { next } => {
                if !self.is_open() || next.is_within() {
                    return Ok(None);
                }
                let transition = self.close_with(TransitionCause::FocusLost);
                if self.config.refocus_on_blur {
                    host.focus_trigger();
                }
                Ok(transition)
            }
        }
    }

    /// Recompute after a resize notification.
    ///
    /// Notifications that arrive while closed are stale and ignored.
    pub fn on_resize<H>(&mut self, host: &mut H) -> Result<Option<Position>, PositionError>
    where
        H: LayoutObserver + StyleApplier,
    {
        if !self.is_open() {
            floatkit_core::trace!("ignoring resize notification for closed floating menu");
            return Ok(None);
        }
        self.reposition(host).map(Some)
    }

    /// Change the placement direction, repositioning if open.
    pub fn set_direction<H>(
        &mut self,
        host: &mut H,
        direction: Direction,
    ) -> Result<Option<Position>, PositionError>
    where
        H: LayoutObserver + StyleApplier,
    {
        self.set_placement(host, self.placement.direction(direction))
    }

    /// Change the alignment, repositioning if open.
    pub fn set_alignment<H>(
        &mut self,
        host: &mut H,
        alignment: Alignment,
    ) -> Result<Option<Position>, PositionError>
    where
        H: LayoutObserver + StyleApplier,
    {
        self.set_placement(host, self.placement.alignment(alignment))
    }

    /// Replace direction and alignment together, repositioning if open.
    pub fn set_placement<H>(
        &mut self,
        host: &mut H,
        placement: FloatingPlacement,
    ) -> Result<Option<Position>, PositionError>
    where
        H: LayoutObserver + StyleApplier,
    {
        if placement == self.placement {
            return Ok(None);
        }
        self.placement = placement;
        if !self.is_open() {
            return Ok(None);
        }
        self.reposition(host).map(Some)
    }

    /// Compute the position from current geometry and apply it.
    pub fn reposition<H>(&mut self, host: &mut H) -> Result<Position, PositionError>
    where
        H: LayoutObserver + StyleApplier,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "floating_menu_reposition",
            direction = self.placement.direction.as_str(),
            alignment = self.placement.alignment.as_str()
        )
        .entered();

        let container = host.container(&self.config.container_selector);
        let position = self
            .placement
            .compute(
                host.trigger_rect(),
                &container,
                host.menu_size(),
                host.text_direction(),
            )
            .inspect_err(|_err| {
                floatkit_core::warn!(error = %_err, "floating menu positioning failed");
            })?;
        self.apply(host, position);
        Ok(position)
    }

    /// Release subscriptions, close, and forget the container attachment.
    pub fn detach(&mut self) -> Option<MenuTransition> {
        let transition = self.close_with(TransitionCause::Detached);
        self.release_subscriptions();
        self.attached = false;
        self.applied_property = None;
        transition
    }

    fn open_with<H>(
        &mut self,
        host: &mut H,
        cause: TransitionCause,
    ) -> Result<Option<MenuTransition>, PositionError>
    where
        H: MenuHost<Handle = R>,
    {
        if self.is_open() {
            return Ok(None);
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("floating_menu_open", cause = %cause).entered();

        if !self.attached {
            host.attach_to_container(&self.config.container_selector);
            self.attached = true;
        }
        self.state = MenuState::Open;
        self.last_position = None;

        self.release_subscriptions();
        self.subscribe(host, ResizeTarget::Container);
        if self.config.observe_trigger_parent {
            self.subscribe(host, ResizeTarget::TriggerParent);
        }

        floatkit_core::debug!(
            cause = %cause,
            subscriptions = self.subscriptions.len(),
            "floating menu opened"
        );

        self.reposition(host)?;
        Ok(Some(MenuTransition {
            from: MenuState::Closed,
            to: MenuState::Open,
            cause,
        }))
    }

    fn close_with(&mut self, cause: TransitionCause) -> Option<MenuTransition> {
        if !self.is_open() {
            return None;
        }
        self.state = MenuState::Closed;
        self.release_subscriptions();
        self.last_position = None;

        floatkit_core::debug!(cause = %cause, "floating menu closed");

        Some(MenuTransition {
            from: MenuState::Open,
            to: MenuState::Closed,
            cause,
        })
    }

    fn handle_key<H>(&mut self, host: &mut H, key: &KeyEvent) -> Option<MenuTransition>
    where
        H: MenuHost<Handle = R>,
    {
        if key.kind == KeyEventKind::Release || !self.is_open() {
            return None;
        }
        match key.code {
            KeyCode::Escape => {
                let transition = self.close_with(TransitionCause::Escape);
                if self.config.refocus_on_escape {
                    host.focus_trigger();
                }
                transition
            }
            _ if key.is_focus_move() && self.config.close_on_tab => {
                self.close_with(TransitionCause::Tab)
            }
            _ => None,
        }
    }

    fn subscribe<H>(&mut self, host: &mut H, target: ResizeTarget)
    where
        H: MenuHost<Handle = R>,
    {
        match host.observe(target) {
            Some(handle) => self
                .subscriptions
                .push(ResizeSubscription::new(target, handle)),
            None => {
                floatkit_core::trace!(?target, "resize target unavailable");
            }
        }
    }

    fn release_subscriptions(&mut self) {
        for mut subscription in self.subscriptions.drain(..) {
            subscription.release();
        }
    }

    fn apply<H: StyleApplier>(&mut self, host: &mut H, position: Position) {
        let property = position.inline_property();
        if let Some(previous) = self.applied_property
            && previous != property
        {
            host.clear_offset(previous);
        }
        for (property, px) in position.style_offsets() {
            host.set_offset(property, px);
        }
        self.applied_property = Some(property);
        self.last_position = Some(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = FloatingMenuConfig::default();
        assert_eq!(config.container_selector, DEFAULT_CONTAINER_SELECTOR);
        assert!(config.observe_trigger_parent);
        assert!(config.refocus_on_escape);
        assert!(config.refocus_on_blur);
        assert!(config.close_on_tab);
    }

    #[test]
    fn config_builder() {
        let config = FloatingMenuConfig::default()
            .container_selector("#overlay")
            .observe_trigger_parent(false)
            .refocus_on_escape(false)
            .refocus_on_blur(false)
            .close_on_tab(false);
        assert_eq!(config.container_selector, "#overlay");
        assert!(!config.observe_trigger_parent);
        assert!(!config.refocus_on_escape);
        assert!(!config.refocus_on_blur);
        assert!(!config.close_on_tab);
    }

    #[test]
    fn cause_names() {
        assert_eq!(TransitionCause::FocusLost.to_string(), "focus_lost");
        assert_eq!(TransitionCause::TriggerActivated.to_string(), "trigger_activated");
        assert_eq!(MenuState::Open.as_str(), "open");
        assert_eq!(MenuState::default(), MenuState::Closed);
    }
}
