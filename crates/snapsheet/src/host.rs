use crate::backdrop::BackdropFill;

/// The UI layer a [`BottomSheet`](crate::BottomSheet) renders into.
///
/// The host owns the real element: it applies heights, paints the backdrop
/// and schedules frames. Event listener registration stays with the host as
/// well; it forwards what it receives and removes its subscriptions when the
/// sheet is destroyed.
pub trait SheetHost {
    /// The sheet mounted; set up the fixed bottom anchoring and the backdrop.
    fn attach(&mut self, _fill: &BackdropFill) {}

    fn set_sheet_height(&mut self, height: f32);

    fn set_backdrop_height(&mut self, height: f32);

    /// A settle animation is running; call `BottomSheet::tick` on the next
    /// frame.
    fn request_frame(&mut self) {}

    /// The sheet is being destroyed; undo whatever `attach` did.
    fn detach(&mut self) {}
}
