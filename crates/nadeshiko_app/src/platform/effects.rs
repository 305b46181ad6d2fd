use std::sync::{mpsc, Arc};

use nadeshiko_core::{Effect, Msg, PanelMessage};
use nadeshiko_engine::{
    render_result, EngineEvent, EngineHandle, EventSink, SubprocessTranslator, Translator,
    TranslatorSettings,
};
use panel_logging::{panel_debug, panel_info};

use super::app::AppEvent;

/// Executes controller effects against the engine. Panel posts are handed back
/// to the caller, which owns the UI.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: TranslatorSettings, event_tx: mpsc::Sender<AppEvent>) -> Self {
        panel_info!(
            "Converter at {:?}, entry class {}",
            settings.base_dir,
            settings.entry_class
        );
        Self::with_translator(Arc::new(SubprocessTranslator::new(settings)), event_tx)
    }

    pub fn with_translator(
        translator: Arc<dyn Translator>,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        let sink = Arc::new(PanelEventSink { tx: event_tx });
        Self {
            engine: EngineHandle::new(translator, sink),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) -> Vec<PanelMessage> {
        let mut posts = Vec::new();
        for effect in effects {
            match effect {
                Effect::Post(message) => posts.push(message),
                Effect::ArmTimer { timer_id, delay } => {
                    panel_debug!("ArmTimer timer_id={} delay_ms={}", timer_id, delay.as_millis());
                    self.engine.arm_timer(timer_id, delay);
                }
                Effect::CancelTimer { timer_id } => self.engine.cancel_timer(timer_id),
                Effect::StartTranslation { request_id, source } => {
                    panel_info!(
                        "StartTranslation request_id={} source_len={}",
                        request_id,
                        source.len()
                    );
                    self.engine.translate(request_id, source);
                }
                Effect::CancelTranslation { request_id } => {
                    panel_info!("CancelTranslation request_id={}", request_id);
                    self.engine.cancel_translation(request_id);
                }
            }
        }
        posts
    }
}

/// Turns engine events into controller messages on the app's inbox.
struct PanelEventSink {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSink for PanelEventSink {
    fn emit(&self, event: EngineEvent) {
        let msg = match event {
            EngineEvent::TranslationCompleted { request_id, result } => Msg::TranslationFinished {
                request_id,
                content: render_result(&result),
            },
            EngineEvent::TimerFired { timer_id } => Msg::TimerFired { timer_id },
        };
        let _ = self.tx.send(AppEvent::Panel(msg));
    }
}
