//! Web platform adapter for snapsheet
//!
//! Turns DOM touch and mouse events into the unified `PointerEvent` the
//! sheet consumes, and lists the listeners a browser host has to register
//! (and remove again on teardown).

use snapsheet_core::{MonotonicClock, PointerEvent, PointerEventKind, PointerType, TargetId};
use web_sys::{MouseEvent, TouchEvent};

/// Where a listener has to be registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerScope {
    /// The sheet element itself.
    Sheet,
    /// The window, so drags keep tracking once the pointer leaves the sheet.
    Window,
}

/// What a DOM listener feeds into the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerAction {
    Pointer(PointerType, PointerEventKind),
    /// Window resize: re-measure the viewport.
    Resize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerSpec {
    pub event_type: &'static str,
    pub scope: ListenerScope,
    /// `touchmove` must stay non-passive so the host can prevent page scroll.
    pub passive: bool,
    pub action: ListenerAction,
}

/// Listeners a browser host registers for one sheet.
pub const SHEET_LISTENERS: &[ListenerSpec] = &[
    ListenerSpec {
        event_type: "touchstart",
        scope: ListenerScope::Sheet,
        passive: true,
        action: ListenerAction::Pointer(PointerType::Touch, PointerEventKind::Down),
    },
    ListenerSpec {
        event_type: "touchmove",
        scope: ListenerScope::Sheet,
        passive: false,
        action: ListenerAction::Pointer(PointerType::Touch, PointerEventKind::Move),
    },
    ListenerSpec {
        event_type: "touchend",
        scope: ListenerScope::Sheet,
        passive: true,
        action: ListenerAction::Pointer(PointerType::Touch, PointerEventKind::Up),
    },
    ListenerSpec {
        event_type: "touchcancel",
        scope: ListenerScope::Sheet,
        passive: true,
        action: ListenerAction::Pointer(PointerType::Touch, PointerEventKind::Cancel),
    },
    ListenerSpec {
        event_type: "mousedown",
        scope: ListenerScope::Sheet,
        passive: false,
        action: ListenerAction::Pointer(PointerType::Mouse, PointerEventKind::Down),
    },
    ListenerSpec {
        event_type: "mousemove",
        scope: ListenerScope::Window,
        passive: false,
        action: ListenerAction::Pointer(PointerType::Mouse, PointerEventKind::Move),
    },
    ListenerSpec {
        event_type: "mouseup",
        scope: ListenerScope::Window,
        passive: false,
        action: ListenerAction::Pointer(PointerType::Mouse, PointerEventKind::Up),
    },
    ListenerSpec {
        event_type: "resize",
        scope: ListenerScope::Window,
        passive: true,
        action: ListenerAction::Resize,
    },
];

/// Looks up the listener registered for a DOM event type.
pub fn listener_for(event_type: &str) -> Option<&'static ListenerSpec> {
    SHEET_LISTENERS
        .iter()
        .find(|spec| spec.event_type == event_type)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WebPlatform {
    /// Fallback time source for events that arrive without a usable
    /// `timeStamp` (synthetic events, some embedded webviews).
    clock: MonotonicClock,
}

impl WebPlatform {
    pub fn new() -> Self {
        Self {
            clock: MonotonicClock::new(),
        }
    }

    /// Converts a DOM high-resolution timestamp to whole milliseconds,
    /// falling back to the platform clock when the event carries none.
    pub fn timestamp_ms(&self, time_stamp: f64) -> u64 {
        if time_stamp.is_finite() && time_stamp > 0.0 {
            time_stamp.round() as u64
        } else {
            log::trace!("event without timestamp ({time_stamp}), using platform clock");
            self.clock.now_ms()
        }
    }

    /// Builds a pointer event from raw coordinates. `client_y` is already in
    /// CSS pixels (logical coordinates).
    pub fn pointer_event(
        &self,
        kind: PointerEventKind,
        pointer_type: PointerType,
        client_y: f64,
        time_stamp: f64,
        target: Option<TargetId>,
    ) -> PointerEvent {
        let mut event = PointerEvent::new(kind, client_y as f32, self.timestamp_ms(time_stamp))
            .with_pointer_type(pointer_type);
        event.target = target;
        event
    }

    /// Uses the first active touch, or the first changed touch for end and
    /// cancel events (the lifted finger is no longer in `touches`).
    pub fn touch_event(
        &self,
        kind: PointerEventKind,
        event: &TouchEvent,
        target: Option<TargetId>,
    ) -> Option<PointerEvent> {
        let touch = match kind {
            PointerEventKind::Up | PointerEventKind::Cancel => event.changed_touches().get(0),
            PointerEventKind::Down | PointerEventKind::Move => event.touches().get(0),
        };
        let Some(touch) = touch else {
            log::trace!("{kind:?} touch event without touch points");
            return None;
        };
        Some(self.pointer_event(
            kind,
            PointerType::Touch,
            f64::from(touch.client_y()),
            event.time_stamp(),
            target,
        ))
    }

    pub fn mouse_event(
        &self,
        kind: PointerEventKind,
        event: &MouseEvent,
        target: Option<TargetId>,
    ) -> PointerEvent {
        self.pointer_event(
            kind,
            PointerType::Mouse,
            f64::from(event.client_y()),
            event.time_stamp(),
            target,
        )
    }
}
