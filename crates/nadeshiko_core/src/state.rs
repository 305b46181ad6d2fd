use std::time::Duration;

use crate::view_model::PanelViewModel;
use crate::Document;

pub type TimerId = u64;
pub type RequestId = u64;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);
pub const NO_JAVA_PLACEHOLDER: &str = "Javaファイルを開いてください";
pub const TRANSLATING_PLACEHOLDER: &str = "変換中...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoUpdate {
    #[default]
    On,
    Off,
}

impl AutoUpdate {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            AutoUpdate::On
        } else {
            AutoUpdate::Off
        }
    }

    pub fn is_on(self) -> bool {
        self == AutoUpdate::On
    }
}

/// What to do with a refresh that arrives while a translation is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InFlightPolicy {
    /// Abort the running translation and start over with the latest text.
    #[default]
    Cancel,
    /// Let the running translation finish, then translate the latest text once.
    Coalesce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Hidden,
    Visible,
    Disposed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSettings {
    pub debounce: Duration,
    pub auto_update: AutoUpdate,
    pub in_flight: InFlightPolicy,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            auto_update: AutoUpdate::On,
            in_flight: InFlightPolicy::Cancel,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelState {
    debounce: Duration,
    in_flight_policy: InFlightPolicy,
    lifecycle: Lifecycle,
    auto_update: AutoUpdate,
    active: Option<Document>,
    pending_timer: Option<TimerId>,
    next_timer_id: TimerId,
    in_flight: Option<RequestId>,
    queued_source: Option<String>,
    next_request_id: RequestId,
    content: String,
    dirty: bool,
}

impl PanelState {
    pub fn new() -> Self {
        Self::with_settings(PanelSettings::default())
    }

    pub fn with_settings(settings: PanelSettings) -> Self {
        Self {
            debounce: settings.debounce,
            in_flight_policy: settings.in_flight,
            auto_update: settings.auto_update,
            content: NO_JAVA_PLACEHOLDER.to_string(),
            ..Self::default()
        }
    }

    pub fn view(&self) -> PanelViewModel {
        PanelViewModel {
            lifecycle: self.lifecycle,
            auto_update: self.auto_update,
            active_uri: self.active.as_ref().map(|doc| doc.uri.clone()),
            content: self.content.clone(),
            translating: self.in_flight.is_some(),
            timer_pending: self.pending_timer.is_some(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn auto_update(&self) -> AutoUpdate {
        self.auto_update
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn in_flight_policy(&self) -> InFlightPolicy {
        self.in_flight_policy
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active.as_ref()
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending_timer
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub(crate) fn set_lifecycle(&mut self, lifecycle: Lifecycle) {
        if self.lifecycle != lifecycle {
            self.lifecycle = lifecycle;
            self.dirty = true;
        }
    }

    pub(crate) fn set_auto_update(&mut self, auto_update: AutoUpdate) {
        if self.auto_update != auto_update {
            self.auto_update = auto_update;
            self.dirty = true;
        }
    }

    pub(crate) fn set_active(&mut self, document: Option<Document>) {
        self.active = document;
        self.dirty = true;
    }

    /// Replaces the active document's text if `document` is the active one.
    /// Returns true when it was.
    pub(crate) fn refresh_active_text(&mut self, document: &Document) -> bool {
        match self.active.as_mut() {
            Some(active) if active.uri == document.uri => {
                active.text.clone_from(&document.text);
                active.language_id.clone_from(&document.language_id);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn arm_timer(&mut self) -> TimerId {
        self.next_timer_id += 1;
        self.pending_timer = Some(self.next_timer_id);
        self.dirty = true;
        self.next_timer_id
    }

    pub(crate) fn take_pending_timer(&mut self) -> Option<TimerId> {
        let taken = self.pending_timer.take();
        if taken.is_some() {
            self.dirty = true;
        }
        taken
    }

    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.in_flight = Some(self.next_request_id);
        self.dirty = true;
        self.next_request_id
    }

    pub(crate) fn take_in_flight(&mut self) -> Option<RequestId> {
        let taken = self.in_flight.take();
        if taken.is_some() {
            self.dirty = true;
        }
        taken
    }

    pub(crate) fn queue_source(&mut self, source: String) {
        self.queued_source = Some(source);
    }

    pub(crate) fn take_queued_source(&mut self) -> Option<String> {
        self.queued_source.take()
    }

    pub(crate) fn set_content(&mut self, content: &str) {
        content.clone_into(&mut self.content);
        self.dirty = true;
    }
}
