//! Recording host and callback log for headless sheet tests.

use snapsheet::{BackdropFill, SheetCallbacks, SheetHost};
use std::cell::RefCell;
use std::rc::Rc;

/// One call the sheet made into its host.
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    Attach(BackdropFill),
    SheetHeight(f32),
    BackdropHeight(f32),
    RequestFrame,
    Detach,
}

/// [`SheetHost`] that records every call instead of rendering.
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Sheet heights in the order they were applied.
    pub fn sheet_heights(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::SheetHeight(height) => Some(*height),
                _ => None,
            })
            .collect()
    }

    pub fn last_sheet_height(&self) -> Option<f32> {
        self.sheet_heights().last().copied()
    }

    pub fn last_backdrop_height(&self) -> Option<f32> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::BackdropHeight(height) => Some(*height),
            _ => None,
        })
    }

    pub fn frame_requests(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, HostCall::RequestFrame))
            .count()
    }

    pub fn is_attached(&self) -> bool {
        let attached = self
            .calls
            .iter()
            .rposition(|call| matches!(call, HostCall::Attach(_)));
        let detached = self
            .calls
            .iter()
            .rposition(|call| matches!(call, HostCall::Detach));
        match (attached, detached) {
            (Some(attached), Some(detached)) => attached > detached,
            (Some(_), None) => true,
            _ => false,
        }
    }
}

impl SheetHost for RecordingHost {
    fn attach(&mut self, fill: &BackdropFill) {
        self.calls.push(HostCall::Attach(fill.clone()));
    }

    fn set_sheet_height(&mut self, height: f32) {
        self.calls.push(HostCall::SheetHeight(height));
    }

    fn set_backdrop_height(&mut self, height: f32) {
        self.calls.push(HostCall::BackdropHeight(height));
    }

    fn request_frame(&mut self) {
        self.calls.push(HostCall::RequestFrame);
    }

    fn detach(&mut self) {
        self.calls.push(HostCall::Detach);
    }
}

/// A callback notification as observed by the host application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetEvent {
    Snap(usize),
    Open,
    Close,
}

/// Shared log of callback notifications.
///
/// `callbacks()` wires a fresh [`SheetCallbacks`] into the log; clones of the
/// recorder observe the same events.
#[derive(Clone, Debug, Default)]
pub struct CallbackRecorder {
    events: Rc<RefCell<Vec<SheetEvent>>>,
}

impl CallbackRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callbacks(&self) -> SheetCallbacks {
        let on_snap = Rc::clone(&self.events);
        let on_open = Rc::clone(&self.events);
        let on_close = Rc::clone(&self.events);
        SheetCallbacks::new()
            .on_snap(move |index| on_snap.borrow_mut().push(SheetEvent::Snap(index)))
            .on_open(move || on_open.borrow_mut().push(SheetEvent::Open))
            .on_close(move || on_close.borrow_mut().push(SheetEvent::Close))
    }

    pub fn events(&self) -> Vec<SheetEvent> {
        self.events.borrow().clone()
    }

    /// Returns and clears the recorded events.
    pub fn take(&self) -> Vec<SheetEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn last_snap(&self) -> Option<usize> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            SheetEvent::Snap(index) => Some(*index),
            _ => None,
        })
    }
}
