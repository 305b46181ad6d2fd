//! Nadeshiko panel core: pure refresh controller and view-model helpers.
mod document;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use document::{Document, JAVA_LANGUAGE_ID};
pub use effect::{Effect, PanelMessage};
pub use msg::Msg;
pub use state::{
    AutoUpdate, InFlightPolicy, Lifecycle, PanelSettings, PanelState, RequestId, TimerId,
    DEFAULT_DEBOUNCE, NO_JAVA_PLACEHOLDER, TRANSLATING_PLACEHOLDER,
};
pub use update::update;
pub use view_model::PanelViewModel;
