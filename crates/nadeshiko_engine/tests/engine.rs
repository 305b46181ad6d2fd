use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use nadeshiko_engine::{
    ChannelEventSink, EngineEvent, EngineHandle, FailureKind, Stage, TranslateError, Translator,
};
use pretty_assertions::assert_eq;

struct UppercaseTranslator {
    delay: Duration,
}

#[async_trait::async_trait]
impl Translator for UppercaseTranslator {
    async fn translate(&self, source: &str) -> Result<String, TranslateError> {
        tokio::time::sleep(self.delay).await;
        if source == "fail" {
            return Err(TranslateError {
                kind: FailureKind::ExitStatus {
                    stage: Stage::Running,
                    code: Some(1),
                },
                message: "boom".to_string(),
            });
        }
        Ok(source.to_uppercase())
    }
}

fn engine(delay: Duration) -> (EngineHandle, mpsc::Receiver<EngineEvent>) {
    let (tx, rx) = mpsc::channel();
    let handle = EngineHandle::new(
        Arc::new(UppercaseTranslator { delay }),
        Arc::new(ChannelEventSink::new(tx)),
    );
    (handle, rx)
}

#[test]
fn completed_translation_is_reported_with_request_id() {
    let (engine, events) = engine(Duration::from_millis(10));

    engine.translate(7, "class a {}");

    let event = events.recv_timeout(Duration::from_secs(5)).expect("event");
    assert_eq!(
        event,
        EngineEvent::TranslationCompleted {
            request_id: 7,
            result: Ok("CLASS A {}".to_string()),
        }
    );
}

#[test]
fn failed_translation_is_reported_not_raised() {
    let (engine, events) = engine(Duration::from_millis(1));

    engine.translate(1, "fail");

    match events.recv_timeout(Duration::from_secs(5)).expect("event") {
        EngineEvent::TranslationCompleted { request_id, result } => {
            assert_eq!(request_id, 1);
            assert_eq!(result.unwrap_err().message, "boom");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn cancelled_translation_never_reports() {
    let (engine, events) = engine(Duration::from_millis(300));

    engine.translate(1, "first");
    engine.cancel_translation(1);
    engine.translate(2, "second");

    let event = events.recv_timeout(Duration::from_secs(5)).expect("event");
    assert_eq!(
        event,
        EngineEvent::TranslationCompleted {
            request_id: 2,
            result: Ok("SECOND".to_string()),
        }
    );
    assert!(events.recv_timeout(Duration::from_millis(500)).is_err());
}

#[test]
fn timer_fires_no_earlier_than_its_delay() {
    let (engine, events) = engine(Duration::ZERO);
    let delay = Duration::from_millis(100);

    let armed_at = Instant::now();
    engine.arm_timer(1, delay);

    let event = events.recv_timeout(Duration::from_secs(5)).expect("event");
    assert_eq!(event, EngineEvent::TimerFired { timer_id: 1 });
    assert!(armed_at.elapsed() >= delay);
}

#[test]
fn rearming_in_a_burst_fires_only_the_last_timer() {
    let (engine, events) = engine(Duration::ZERO);
    let delay = Duration::from_millis(150);

    let mut last_armed = Instant::now();
    for timer_id in 1..=5 {
        if timer_id > 1 {
            engine.cancel_timer(timer_id - 1);
        }
        last_armed = Instant::now();
        engine.arm_timer(timer_id, delay);
        std::thread::sleep(Duration::from_millis(20));
    }

    let event = events.recv_timeout(Duration::from_secs(5)).expect("event");
    assert_eq!(event, EngineEvent::TimerFired { timer_id: 5 });
    assert!(last_armed.elapsed() >= delay);
    assert!(events.recv_timeout(Duration::from_millis(400)).is_err());
}
