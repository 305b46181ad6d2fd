use std::path::PathBuf;

use nadeshiko_core::{update, Lifecycle, Msg, PanelMessage, PanelSettings, PanelState, PanelViewModel};
use panel_logging::panel_trace;
use ratatui::crossterm::event::KeyEvent;

use super::effects::EffectRunner;

/// Everything that can arrive on a front end's inbox.
#[derive(Debug)]
pub enum AppEvent {
    Panel(Msg),
    Key(KeyEvent),
    FileChanged(PathBuf),
    Redraw,
    /// The input side went away (stdin EOF, terminal closed).
    InputClosed,
}

/// Owns the controller state and runs its effects. Front ends feed it messages
/// and deliver the returned posts to their UI.
pub struct PanelDriver {
    state: PanelState,
    effects: EffectRunner,
}

impl PanelDriver {
    pub fn new(settings: PanelSettings, effects: EffectRunner) -> Self {
        Self {
            state: PanelState::with_settings(settings),
            effects,
        }
    }

    pub fn dispatch(&mut self, msg: Msg) -> Vec<PanelMessage> {
        panel_trace!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects)
    }

    pub fn view(&self) -> PanelViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn is_disposed(&self) -> bool {
        self.state.lifecycle() == Lifecycle::Disposed
    }

    /// No translation running and no debounce timer armed.
    pub fn is_idle(&self) -> bool {
        self.state.in_flight().is_none() && self.state.pending_timer().is_none()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;

    use nadeshiko_engine::{TranslateError, Translator};

    /// Wraps the source in brackets after a short delay.
    pub struct BracketTranslator {
        pub delay: Duration,
    }

    #[async_trait::async_trait]
    impl Translator for BracketTranslator {
        async fn translate(&self, source: &str) -> Result<String, TranslateError> {
            tokio::time::sleep(self.delay).await;
            Ok(format!("「{}」", source.trim()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{mpsc, Arc};
    use std::time::Duration;

    use nadeshiko_core::{Document, NO_JAVA_PLACEHOLDER, TRANSLATING_PLACEHOLDER};
    use pretty_assertions::assert_eq;

    use super::test_support::BracketTranslator;
    use super::*;

    fn driver(debounce: Duration) -> (PanelDriver, mpsc::Receiver<AppEvent>) {
        let (tx, rx) = mpsc::channel();
        let effects = EffectRunner::with_translator(
            Arc::new(BracketTranslator {
                delay: Duration::from_millis(10),
            }),
            tx,
        );
        let settings = PanelSettings {
            debounce,
            ..PanelSettings::default()
        };
        (PanelDriver::new(settings, effects), rx)
    }

    fn next_panel_msg(rx: &mpsc::Receiver<AppEvent>) -> Msg {
        match rx.recv_timeout(Duration::from_secs(5)).expect("engine event") {
            AppEvent::Panel(msg) => msg,
            other => panic!("unexpected event {other:?}"),
        }
    }

    fn contents(posts: Vec<PanelMessage>) -> Vec<String> {
        posts
            .into_iter()
            .map(|PanelMessage::Update { content }| content)
            .collect()
    }

    #[test]
    fn translation_result_round_trips_through_engine() {
        let (mut driver, rx) = driver(Duration::from_millis(20));

        assert_eq!(
            contents(driver.dispatch(Msg::PanelResolved)),
            vec![NO_JAVA_PLACEHOLDER]
        );
        assert_eq!(
            contents(driver.dispatch(Msg::ActiveEditorChanged(Some(Document::java(
                "A.java",
                "class A {}"
            ))))),
            vec![TRANSLATING_PLACEHOLDER]
        );
        assert!(!driver.is_idle());

        let finished = next_panel_msg(&rx);
        assert!(matches!(finished, Msg::TranslationFinished { .. }));
        assert_eq!(contents(driver.dispatch(finished)), vec!["「class A {}」"]);
        assert!(driver.is_idle());
        assert_eq!(driver.view().content, "「class A {}」");
    }

    #[test]
    fn debounced_edit_fires_timer_then_translates() {
        let (mut driver, rx) = driver(Duration::from_millis(30));
        driver.dispatch(Msg::PanelResolved);
        driver.dispatch(Msg::ActiveEditorChanged(Some(Document::java("A.java", "v1"))));
        let first = next_panel_msg(&rx);
        driver.dispatch(first);

        assert!(driver
            .dispatch(Msg::DocumentChanged(Document::java("A.java", "v2")))
            .is_empty());
        assert!(driver
            .dispatch(Msg::DocumentChanged(Document::java("A.java", "v3")))
            .is_empty());

        let fired = next_panel_msg(&rx);
        assert!(matches!(fired, Msg::TimerFired { .. }));
        assert_eq!(contents(driver.dispatch(fired)), vec![TRANSLATING_PLACEHOLDER]);

        let finished = next_panel_msg(&rx);
        assert_eq!(contents(driver.dispatch(finished)), vec!["「v3」"]);
    }

    #[test]
    fn dispose_marks_driver_finished() {
        let (mut driver, _rx) = driver(Duration::from_millis(20));
        driver.dispatch(Msg::PanelResolved);
        assert!(driver.consume_dirty());

        driver.dispatch(Msg::PanelDisposed);

        assert!(driver.is_disposed());
        assert!(driver.dispatch(Msg::ManualUpdate).is_empty());
    }
}
