#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The panel became visible and can receive messages.
    PanelResolved,
    /// The panel was closed; all pending work is abandoned.
    PanelDisposed,
    /// The host switched editors. `None` when no text editor is focused.
    ActiveEditorChanged(Option<crate::Document>),
    /// The text of a document changed (full text after the edit).
    DocumentChanged(crate::Document),
    /// User pressed the "translate now" control.
    ManualUpdate,
    /// User flipped the auto-update checkbox.
    ToggleAutoUpdate(bool),
    /// A debounce timer elapsed.
    TimerFired { timer_id: crate::TimerId },
    /// A translation finished; `content` is already the display string.
    TranslationFinished {
        request_id: crate::RequestId,
        content: String,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
