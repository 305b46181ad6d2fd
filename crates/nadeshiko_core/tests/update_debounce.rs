use std::sync::Once;
use std::time::Duration;

use nadeshiko_core::{
    update, Document, Effect, Msg, PanelMessage, PanelSettings, PanelState, DEFAULT_DEBOUNCE,
    TRANSLATING_PLACEHOLDER,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(panel_logging::initialize_for_tests);
}

fn visible_with_java(text: &str) -> PanelState {
    let (state, _) = update(PanelState::new(), Msg::PanelResolved);
    let (state, _) = update(
        state,
        Msg::ActiveEditorChanged(Some(Document::java("file:///Main.java", text))),
    );
    // Let the initial translation settle so later assertions see only debounce effects.
    let request_id = state.in_flight().expect("initial translation");
    let (state, _) = update(
        state,
        Msg::TranslationFinished {
            request_id,
            content: "initial".to_string(),
        },
    );
    state
}

fn edit(state: PanelState, text: &str) -> (PanelState, Vec<Effect>) {
    update(
        state,
        Msg::DocumentChanged(Document::java("file:///Main.java", text)),
    )
}

#[test]
fn edit_arms_timer_with_default_delay() {
    init_logging();
    let state = visible_with_java("class A {}");

    let (state, effects) = edit(state, "class B {}");

    assert_eq!(
        effects,
        vec![Effect::ArmTimer {
            timer_id: 1,
            delay: DEFAULT_DEBOUNCE,
        }]
    );
    assert_eq!(state.pending_timer(), Some(1));
    assert_eq!(DEFAULT_DEBOUNCE, Duration::from_millis(1000));
}

#[test]
fn burst_of_edits_yields_exactly_one_refresh() {
    init_logging();
    let mut state = visible_with_java("class A {}");

    let mut armed = Vec::new();
    let mut cancelled = Vec::new();
    for n in 0..5 {
        let (next, effects) = edit(state, &format!("class A{n} {{}}"));
        state = next;
        for effect in effects {
            match effect {
                Effect::ArmTimer { timer_id, .. } => armed.push(timer_id),
                Effect::CancelTimer { timer_id } => cancelled.push(timer_id),
                other => panic!("unexpected effect {other:?}"),
            }
        }
    }

    assert_eq!(armed, vec![1, 2, 3, 4, 5]);
    assert_eq!(cancelled, vec![1, 2, 3, 4]);
    assert_eq!(state.pending_timer(), Some(5));

    // Superseded timers that still fire are ignored.
    for stale in [1, 2, 3, 4] {
        let (next, effects) = update(state, Msg::TimerFired { timer_id: stale });
        assert!(effects.is_empty());
        state = next;
    }

    let (state, effects) = update(state, Msg::TimerFired { timer_id: 5 });
    let request_id = state.in_flight().expect("translation started");
    assert_eq!(
        effects,
        vec![
            Effect::Post(PanelMessage::update(TRANSLATING_PLACEHOLDER)),
            Effect::StartTranslation {
                request_id,
                source: "class A4 {}".to_string(),
            },
        ]
    );
    assert_eq!(state.pending_timer(), None);
}

#[test]
fn custom_debounce_is_used() {
    init_logging();
    let settings = PanelSettings {
        debounce: Duration::from_millis(250),
        ..PanelSettings::default()
    };
    let (state, _) = update(PanelState::with_settings(settings), Msg::PanelResolved);
    let (state, _) = update(
        state,
        Msg::ActiveEditorChanged(Some(Document::java("file:///Main.java", ""))),
    );

    let (_state, effects) = edit(state, "class A {}");
    assert!(effects.contains(&Effect::ArmTimer {
        timer_id: 1,
        delay: Duration::from_millis(250),
    }));
}

#[test]
fn toggle_off_suppresses_debounced_but_not_manual_refresh() {
    init_logging();
    let state = visible_with_java("class A {}");
    let (state, _) = edit(state, "class B {}");
    assert_eq!(state.pending_timer(), Some(1));

    let (state, effects) = update(state, Msg::ToggleAutoUpdate(false));
    assert_eq!(effects, vec![Effect::CancelTimer { timer_id: 1 }]);
    assert!(!state.auto_update().is_on());

    // The cancelled timer may still race in; it must not refresh.
    let (state, effects) = update(state, Msg::TimerFired { timer_id: 1 });
    assert!(effects.is_empty());

    let (state, effects) = edit(state, "class C {}");
    assert!(effects.is_empty());
    assert_eq!(state.pending_timer(), None);

    let (state, effects) = update(state, Msg::ManualUpdate);
    assert!(effects.iter().any(|effect| matches!(
        effect,
        Effect::StartTranslation { source, .. } if source == "class C {}"
    )));

    let (state, effects) = update(state, Msg::ToggleAutoUpdate(true));
    assert!(effects.is_empty());
    let (_state, effects) = edit(state, "class D {}");
    assert!(matches!(effects.as_slice(), [Effect::ArmTimer { .. }]));
}

#[test]
fn manual_refresh_cancels_pending_timer() {
    init_logging();
    let state = visible_with_java("class A {}");
    let (state, _) = edit(state, "class B {}");

    let (state, effects) = update(state, Msg::ManualUpdate);

    assert_eq!(effects[0], Effect::CancelTimer { timer_id: 1 });
    assert_eq!(state.pending_timer(), None);
}

#[test]
fn edits_to_background_documents_are_ignored() {
    init_logging();
    let state = visible_with_java("class A {}");

    let (state, effects) = update(
        state,
        Msg::DocumentChanged(Document::java("file:///Other.java", "class Z {}")),
    );

    assert!(effects.is_empty());
    assert_eq!(state.pending_timer(), None);
    assert_eq!(state.active_document().unwrap().text, "class A {}");
}

#[test]
fn edits_to_non_java_active_document_update_text_without_scheduling() {
    init_logging();
    let (state, _) = update(PanelState::new(), Msg::PanelResolved);
    let (state, _) = update(
        state,
        Msg::ActiveEditorChanged(Some(Document::new("file:///notes.txt", "plaintext", "a"))),
    );

    let (state, effects) = update(
        state,
        Msg::DocumentChanged(Document::new("file:///notes.txt", "plaintext", "ab")),
    );

    assert!(effects.is_empty());
    assert_eq!(state.active_document().unwrap().text, "ab");
}
