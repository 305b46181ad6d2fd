use std::collections::HashMap;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use panel_logging::{panel_debug, panel_error, panel_warn};
use tokio::task::JoinHandle;

use crate::{EngineEvent, EventSink, RequestId, TimerId, Translator};

enum EngineCommand {
    Translate { request_id: RequestId, source: String },
    CancelTranslation { request_id: RequestId },
    ArmTimer { timer_id: TimerId, delay: Duration },
    CancelTimer { timer_id: TimerId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum TaskKey {
    Translation(RequestId),
    Timer(TimerId),
}

/// Executes translations and debounce timers on a background tokio runtime.
///
/// Commands are fire-and-forget; results arrive through the [`EventSink`].
/// Dropping the handle stops the runtime and aborts outstanding work.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(translator: Arc<dyn Translator>, sink: Arc<dyn EventSink>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    panel_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };

            let mut tasks: HashMap<TaskKey, JoinHandle<()>> = HashMap::new();
            while let Ok(command) = cmd_rx.recv() {
                tasks.retain(|_, task| !task.is_finished());
                match command {
                    EngineCommand::Translate { request_id, source } => {
                        let translator = translator.clone();
                        let sink = sink.clone();
                        let task = runtime.spawn(async move {
                            let result = translator.translate(&source).await;
                            if let Err(err) = &result {
                                panel_warn!("Translation {} failed: {} ({})", request_id, err, err.kind);
                            }
                            sink.emit(EngineEvent::TranslationCompleted { request_id, result });
                        });
                        replace_task(&mut tasks, TaskKey::Translation(request_id), task);
                    }
                    EngineCommand::ArmTimer { timer_id, delay } => {
                        let sink = sink.clone();
                        let task = runtime.spawn(async move {
                            tokio::time::sleep(delay).await;
                            sink.emit(EngineEvent::TimerFired { timer_id });
                        });
                        replace_task(&mut tasks, TaskKey::Timer(timer_id), task);
                    }
                    EngineCommand::CancelTranslation { request_id } => {
                        abort_task(&mut tasks, TaskKey::Translation(request_id));
                    }
                    EngineCommand::CancelTimer { timer_id } => {
                        abort_task(&mut tasks, TaskKey::Timer(timer_id));
                    }
                }
            }

            for task in tasks.values() {
                task.abort();
            }
            runtime.shutdown_timeout(Duration::from_secs(1));
        });

        Self { cmd_tx }
    }

    pub fn translate(&self, request_id: RequestId, source: impl Into<String>) {
        self.send(EngineCommand::Translate {
            request_id,
            source: source.into(),
        });
    }

    pub fn cancel_translation(&self, request_id: RequestId) {
        self.send(EngineCommand::CancelTranslation { request_id });
    }

    pub fn arm_timer(&self, timer_id: TimerId, delay: Duration) {
        self.send(EngineCommand::ArmTimer { timer_id, delay });
    }

    pub fn cancel_timer(&self, timer_id: TimerId) {
        self.send(EngineCommand::CancelTimer { timer_id });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            panel_warn!("Engine is not running; command dropped");
        }
    }
}

fn replace_task(tasks: &mut HashMap<TaskKey, JoinHandle<()>>, key: TaskKey, task: JoinHandle<()>) {
    if let Some(previous) = tasks.insert(key, task) {
        previous.abort();
    }
}

fn abort_task(tasks: &mut HashMap<TaskKey, JoinHandle<()>>, key: TaskKey) {
    match tasks.remove(&key) {
        Some(task) => {
            panel_debug!("Aborting {:?}", key);
            task.abort();
        }
        None => panel_debug!("Nothing to abort for {:?}", key),
    }
}
