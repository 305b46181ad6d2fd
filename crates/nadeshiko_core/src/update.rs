use crate::{
    AutoUpdate, Effect, InFlightPolicy, Lifecycle, Msg, PanelMessage, PanelState,
    NO_JAVA_PLACEHOLDER, TRANSLATING_PLACEHOLDER,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PanelState, msg: Msg) -> (PanelState, Vec<Effect>) {
    if state.lifecycle() == Lifecycle::Disposed {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::PanelResolved => {
            state.set_lifecycle(Lifecycle::Visible);
            refresh_now(&mut state)
        }
        Msg::PanelDisposed => {
            let mut effects = Vec::new();
            if let Some(timer_id) = state.take_pending_timer() {
                effects.push(Effect::CancelTimer { timer_id });
            }
            if let Some(request_id) = state.take_in_flight() {
                effects.push(Effect::CancelTranslation { request_id });
            }
            state.take_queued_source();
            state.set_lifecycle(Lifecycle::Disposed);
            effects
        }
        Msg::ActiveEditorChanged(document) => {
            state.set_active(document);
            refresh_now(&mut state)
        }
        Msg::DocumentChanged(document) => {
            // Edits to background documents are not shown.
            if state.refresh_active_text(&document) && document.is_java() {
                schedule_update(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::ManualUpdate => refresh_now(&mut state),
        Msg::ToggleAutoUpdate(enabled) => {
            let auto_update = AutoUpdate::from_enabled(enabled);
            state.set_auto_update(auto_update);
            if auto_update.is_on() {
                return (state, Vec::new());
            }
            match state.take_pending_timer() {
                Some(timer_id) => vec![Effect::CancelTimer { timer_id }],
                None => Vec::new(),
            }
        }
        Msg::TimerFired { timer_id } => {
            if state.pending_timer() == Some(timer_id) {
                state.take_pending_timer();
                refresh_now(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::TranslationFinished {
            request_id,
            content,
        } => {
            if state.in_flight() != Some(request_id) {
                return (state, Vec::new());
            }
            state.take_in_flight();
            match state.take_queued_source() {
                Some(source) => start_translation(&mut state, source, false),
                None => {
                    state.set_content(&content);
                    vec![Effect::Post(PanelMessage::update(content))]
                }
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn schedule_update(state: &mut PanelState) -> Vec<Effect> {
    if !state.auto_update().is_on() || state.lifecycle() != Lifecycle::Visible {
        return Vec::new();
    }

    let mut effects = Vec::with_capacity(2);
    if let Some(timer_id) = state.take_pending_timer() {
        effects.push(Effect::CancelTimer { timer_id });
    }
    let timer_id = state.arm_timer();
    effects.push(Effect::ArmTimer {
        timer_id,
        delay: state.debounce(),
    });
    effects
}

fn refresh_now(state: &mut PanelState) -> Vec<Effect> {
    if state.lifecycle() != Lifecycle::Visible {
        return Vec::new();
    }

    let mut effects = Vec::new();
    // The immediate refresh covers whatever the pending timer would have done.
    if let Some(timer_id) = state.take_pending_timer() {
        effects.push(Effect::CancelTimer { timer_id });
    }

    let source = match state.active_document() {
        Some(document) if document.is_java() => document.text.clone(),
        _ => {
            state.take_queued_source();
            if let Some(request_id) = state.take_in_flight() {
                effects.push(Effect::CancelTranslation { request_id });
            }
            state.set_content(NO_JAVA_PLACEHOLDER);
            effects.push(Effect::Post(PanelMessage::update(NO_JAVA_PLACEHOLDER)));
            return effects;
        }
    };

    if let Some(request_id) = state.in_flight() {
        match state.in_flight_policy() {
            InFlightPolicy::Cancel => {
                state.take_in_flight();
                effects.push(Effect::CancelTranslation { request_id });
            }
            InFlightPolicy::Coalesce => {
                state.queue_source(source);
                return effects;
            }
        }
    }

    effects.extend(start_translation(state, source, true));
    effects
}

fn start_translation(state: &mut PanelState, source: String, announce: bool) -> Vec<Effect> {
    let mut effects = Vec::with_capacity(2);
    if announce {
        state.set_content(TRANSLATING_PLACEHOLDER);
        effects.push(Effect::Post(PanelMessage::update(TRANSLATING_PLACEHOLDER)));
    }
    let request_id = state.begin_request();
    effects.push(Effect::StartTranslation { request_id, source });
    effects
}
