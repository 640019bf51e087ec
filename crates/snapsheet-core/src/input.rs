//! Unified pointer input for touch and mouse hosts.

use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;

/// Identity of the element a pointer landed on, as assigned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerType {
    #[default]
    Touch,
    Mouse,
}

/// A single pointer sample on the sheet's vertical axis.
///
/// Touch and mouse input share this shape; hosts extract the first touch
/// point or the mouse position and hand over the vertical coordinate only.
/// Consumption is shared between copies so the host can tell afterwards
/// whether the sheet claimed the event (and should prevent its default
/// handling).
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Vertical position in logical pixels, growing downward.
    pub y: f32,
    /// Event time in milliseconds on the host's monotonic clock.
    pub uptime_ms: u64,
    pub target: Option<TargetId>,
    pub pointer_type: PointerType,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, y: f32, uptime_ms: u64) -> Self {
        Self {
            kind,
            y,
            uptime_ms,
            target: None,
            pointer_type: PointerType::Touch,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(y: f32, uptime_ms: u64) -> Self {
        Self::new(PointerEventKind::Down, y, uptime_ms)
    }

    pub fn moved(y: f32, uptime_ms: u64) -> Self {
        Self::new(PointerEventKind::Move, y, uptime_ms)
    }

    pub fn up(y: f32, uptime_ms: u64) -> Self {
        Self::new(PointerEventKind::Up, y, uptime_ms)
    }

    pub fn cancel(y: f32, uptime_ms: u64) -> Self {
        Self::new(PointerEventKind::Cancel, y, uptime_ms)
    }

    pub fn with_target(mut self, target: TargetId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }

    /// Marks the event as claimed by the sheet.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

/// A region of the sheet that must not start a drag, such as scrollable or
/// interactive content placed inside it.
///
/// The host owns the element tree, so containment is answered by the host.
pub trait ExclusionZone {
    fn contains(&self, target: TargetId) -> bool;
}

impl<F> ExclusionZone for F
where
    F: Fn(TargetId) -> bool,
{
    fn contains(&self, target: TargetId) -> bool {
        self(target)
    }
}

/// Exclusion zone given as an explicit list of target ids (the excluded
/// element and whichever descendants the host reports).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExcludedTargets(SmallVec<[TargetId; 4]>);

impl ExcludedTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, target: TargetId) -> Self {
        self.insert(target);
        self
    }

    pub fn insert(&mut self, target: TargetId) {
        if !self.0.contains(&target) {
            self.0.push(target);
        }
    }

    pub fn remove(&mut self, target: TargetId) {
        self.0.retain(|existing| *existing != target);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<TargetId> for ExcludedTargets {
    fn from_iter<I: IntoIterator<Item = TargetId>>(iter: I) -> Self {
        let mut targets = Self::new();
        for target in iter {
            targets.insert(target);
        }
        targets
    }
}

impl ExclusionZone for ExcludedTargets {
    fn contains(&self, target: TargetId) -> bool {
        self.0.contains(&target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumption_is_shared_between_copies() {
        let event = PointerEvent::down(10.0, 0);
        let copy = event.clone();
        assert!(!event.is_consumed());
        copy.consume();
        assert!(event.is_consumed());
    }

    #[test]
    fn excluded_targets_deduplicate() {
        let targets: ExcludedTargets = [TargetId(1), TargetId(2), TargetId(1)]
            .into_iter()
            .collect();
        assert!(targets.contains(TargetId(1)));
        assert!(targets.contains(TargetId(2)));
        assert!(!targets.contains(TargetId(3)));

        let mut targets = targets;
        targets.remove(TargetId(1));
        assert!(!targets.contains(TargetId(1)));
    }

    #[test]
    fn closures_act_as_exclusion_zones() {
        let zone = |target: TargetId| target.0 >= 100;
        assert!(zone.contains(TargetId(150)));
        assert!(!zone.contains(TargetId(5)));
    }
}
