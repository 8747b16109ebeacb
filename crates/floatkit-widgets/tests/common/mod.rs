//! Recording host shared by the floating menu integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use floatkit_core::geometry::{Rect, Size};
use floatkit_layout::{Container, OffsetProperty, TextDirection};
use floatkit_widgets::{
    LayoutObserver, MenuHost, ResizeHandle, ResizeSignal, ResizeTarget, StyleApplier,
};

/// Observe/release log shared between the host and its handles.
#[derive(Debug, Default)]
pub struct ResizeLog {
    pub observed: Vec<ResizeTarget>,
    pub released: Vec<ResizeTarget>,
}

impl ResizeLog {
    pub fn live(&self) -> usize {
        self.observed.len() - self.released.len()
    }
}

#[derive(Debug)]
pub struct RecordingHandle {
    target: ResizeTarget,
    log: Rc<RefCell<ResizeLog>>,
}

impl ResizeHandle for RecordingHandle {
    fn release(self) {
        self.log.borrow_mut().released.push(self.target);
    }
}

/// A host whose geometry is set by the test and which records every call.
pub struct RecordingHost {
    pub trigger: Option<Rect>,
    pub container: Container,
    pub menu: Size,
    pub text_direction: TextDirection,
    pub has_trigger_parent: bool,

    pub styles: HashMap<OffsetProperty, f64>,
    pub cleared: Vec<OffsetProperty>,
    pub attached_to: Vec<String>,
    pub selectors_queried: RefCell<Vec<String>>,
    pub focus_trigger_calls: usize,
    pub resize: Rc<RefCell<ResizeLog>>,
}

impl RecordingHost {
    /// Trigger `{100,50,150,70}` inside a positioned `500x300` container,
    /// menu body `80x40`, LTR.
    pub fn new() -> Self {
        Self {
            trigger: Some(Rect::from_edges(100.0, 50.0, 150.0, 70.0)),
            container: Container::positioned(Rect::from_edges(0.0, 0.0, 500.0, 300.0)),
            menu: Size::new(80.0, 40.0),
            text_direction: TextDirection::Ltr,
            has_trigger_parent: true,
            styles: HashMap::new(),
            cleared: Vec::new(),
            attached_to: Vec::new(),
            selectors_queried: RefCell::new(Vec::new()),
            focus_trigger_calls: 0,
            resize: Rc::new(RefCell::new(ResizeLog::default())),
        }
    }

    pub fn style(&self, property: OffsetProperty) -> Option<f64> {
        self.styles.get(&property).copied()
    }

    pub fn live_subscriptions(&self) -> usize {
        self.resize.borrow().live()
    }
}

impl LayoutObserver for RecordingHost {
    fn trigger_rect(&self) -> Option<Rect> {
        self.trigger
    }

    fn container(&self, selector: &str) -> Container {
        self.selectors_queried.borrow_mut().push(selector.to_owned());
        self.container
    }

    fn menu_size(&self) -> Size {
        self.menu
    }

    fn text_direction(&self) -> TextDirection {
        self.text_direction
    }
}

impl ResizeSignal for RecordingHost {
    type Handle = RecordingHandle;

    fn observe(&mut self, target: ResizeTarget) -> Option<Self::Handle> {
        if target == ResizeTarget::TriggerParent && !self.has_trigger_parent {
            return None;
        }
        self.resize.borrow_mut().observed.push(target);
        Some(RecordingHandle {
            target,
            log: Rc::clone(&self.resize),
        })
    }
}

impl StyleApplier for RecordingHost {
    fn set_offset(&mut self, property: OffsetProperty, px: f64) {
        self.styles.insert(property, px);
    }

    fn clear_offset(&mut self, property: OffsetProperty) {
        self.styles.remove(&property);
        self.cleared.push(property);
    }
}

impl MenuHost for RecordingHost {
    fn attach_to_container(&mut self, selector: &str) {
        self.attached_to.push(selector.to_owned());
    }

    fn focus_trigger(&mut self) {
        self.focus_trigger_calls += 1;
    }
}
