use std::time::Duration;

use crate::{RequestId, TimerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver a message to the panel UI.
    Post(PanelMessage),
    ArmTimer { timer_id: TimerId, delay: Duration },
    CancelTimer { timer_id: TimerId },
    StartTranslation { request_id: RequestId, source: String },
    CancelTranslation { request_id: RequestId },
}

/// Outbound panel UI message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMessage {
    Update { content: String },
}

impl PanelMessage {
    pub fn update(content: impl Into<String>) -> Self {
        PanelMessage::Update {
            content: content.into(),
        }
    }
}
