use crate::{AutoUpdate, Lifecycle};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelViewModel {
    pub lifecycle: Lifecycle,
    pub auto_update: AutoUpdate,
    pub active_uri: Option<String>,
    /// Last string posted to the panel, shown verbatim.
    pub content: String,
    pub translating: bool,
    pub timer_pending: bool,
    pub dirty: bool,
}
