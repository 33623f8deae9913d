//! Event wiring between the host UI and the controller task

use tokio::sync::mpsc::UnboundedSender;

/// UI events forwarded into the controller loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UiEvent {
    /// A key was pressed in the query input
    KeyPress,
    /// The form was submitted (Enter or an explicit submit)
    Submit,
}

/// Clone-able sender half of a controller binding.
///
/// The host wires its input and submit callbacks to [`key_press`] and
/// [`submit`]. Events sent after the controller task has exited are silently
/// dropped, matching page teardown.
///
/// [`key_press`]: SearchHandle::key_press
/// [`submit`]: SearchHandle::submit
#[derive(Debug, Clone)]
pub struct SearchHandle {
    pub(crate) events: UnboundedSender<UiEvent>,
}

impl SearchHandle {
    /// Report a key press in the query input
    pub fn key_press(&self) {
        let _ = self.events.send(UiEvent::KeyPress);
    }

    /// Report a form submission.
    ///
    /// The host is expected to suppress the default submit navigation before
    /// forwarding the event; the controller only decides whether to jump to
    /// the first result link.
    pub fn submit(&self) {
        let _ = self.events.send(UiEvent::Submit);
    }
}
