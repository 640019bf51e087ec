type Callback = Box<dyn FnMut()>;
type SnapCallback = Box<dyn FnMut(usize)>;

/// Notifications fired each time the sheet settles at a snap index.
#[derive(Default)]
pub struct SheetCallbacks {
    on_open: Option<Callback>,
    on_close: Option<Callback>,
    on_snap: Option<SnapCallback>,
}

impl SheetCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fired when the sheet settles at the last (fully open) snap point.
    pub fn on_open(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_open = Some(Box::new(callback));
        self
    }

    /// Fired when the sheet settles at snap index 0, including on mount.
    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn on_snap(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_snap = Some(Box::new(callback));
        self
    }

    /// `on_snap` first, then `on_close` at index 0 or else `on_open` at the
    /// last index.
    pub(crate) fn notify_settled(&mut self, index: usize, snap_count: usize) {
        if let Some(on_snap) = self.on_snap.as_mut() {
            on_snap(index);
        }
        if index == 0 {
            if let Some(on_close) = self.on_close.as_mut() {
                on_close();
            }
        } else if index + 1 == snap_count {
            if let Some(on_open) = self.on_open.as_mut() {
                on_open();
            }
        }
    }
}

impl std::fmt::Debug for SheetCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetCallbacks")
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("on_snap", &self.on_snap.is_some())
            .finish()
    }
}
