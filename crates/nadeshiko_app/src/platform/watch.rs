//! Terminal panel over a set of files on disk. Saving a tracked file counts as
//! an edit; Tab switches the active file.

use std::collections::HashSet;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use chrono::Local;
use nadeshiko_core::Msg;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use panel_logging::{panel_debug, panel_error, panel_info, panel_warn};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;

use super::app::{AppEvent, PanelDriver};
use super::config::PanelConfig;
use super::effects::EffectRunner;
use super::ui::{self, StatusInfo};
use super::workspace::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    UpdateNow,
    ToggleAutoUpdate,
    NextFile,
    Quit,
}

fn action_for(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match key.code {
        ui::KEY_UPDATE_NOW => Some(Action::UpdateNow),
        ui::KEY_TOGGLE_AUTO => Some(Action::ToggleAutoUpdate),
        ui::KEY_NEXT_FILE => Some(Action::NextFile),
        ui::KEY_QUIT | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

pub fn run(config: &PanelConfig, files: Vec<PathBuf>) -> anyhow::Result<()> {
    let workspace = Workspace::open(files).context("opening files")?;
    let (event_tx, event_rx) = mpsc::channel();
    let effects = EffectRunner::new(config.translator_settings(), event_tx.clone());
    let settings = config.panel_settings();
    let debounce = settings.debounce;
    let driver = PanelDriver::new(settings, effects);

    let _watcher = watch_files(workspace.files(), event_tx.clone())?;
    spawn_key_reader(event_tx);

    let mut session = WatchSession {
        driver,
        workspace,
        info: StatusInfo {
            debounce,
            ..StatusInfo::default()
        },
    };

    let mut terminal = ratatui::init();
    let result = session.run(&mut terminal, &event_rx);
    ratatui::restore();

    session.driver.dispatch(Msg::PanelDisposed);
    panel_info!("Watch session closed");
    result
}

struct WatchSession {
    driver: PanelDriver,
    workspace: Workspace,
    info: StatusInfo,
}

impl WatchSession {
    fn run(
        &mut self,
        terminal: &mut DefaultTerminal,
        events: &mpsc::Receiver<AppEvent>,
    ) -> anyhow::Result<()> {
        self.apply(Msg::PanelResolved);
        let first = self.workspace.active_document();
        self.apply(Msg::ActiveEditorChanged(first));
        self.draw(terminal)?;

        while let Ok(event) = events.recv() {
            let redraw = matches!(event, AppEvent::Redraw);
            if self.handle(event).is_break() {
                break;
            }
            if self.driver.consume_dirty() || redraw {
                self.draw(terminal)?;
            }
        }
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) -> ControlFlow<()> {
        match event {
            AppEvent::Panel(msg) => self.apply(msg),
            AppEvent::Key(key) => match action_for(&key) {
                Some(Action::UpdateNow) => self.apply(Msg::ManualUpdate),
                Some(Action::ToggleAutoUpdate) => {
                    let enabled = !self.driver.view().auto_update.is_on();
                    self.apply(Msg::ToggleAutoUpdate(enabled));
                }
                Some(Action::NextFile) => {
                    let next = self.workspace.cycle();
                    self.apply(Msg::ActiveEditorChanged(next));
                }
                Some(Action::Quit) => return ControlFlow::Break(()),
                None => {}
            },
            AppEvent::FileChanged(path) => {
                if let Some(document) = self.workspace.document_for(&path) {
                    panel_debug!("File changed: {:?}", path);
                    self.apply(Msg::DocumentChanged(document));
                }
            }
            AppEvent::Redraw => {}
            AppEvent::InputClosed => return ControlFlow::Break(()),
        }
        if self.driver.is_disposed() {
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }

    fn apply(&mut self, msg: Msg) {
        let posts = self.driver.dispatch(msg);
        if !posts.is_empty() {
            self.info.last_updated = Some(Local::now().time());
        }
        self.info.active_path = self
            .workspace
            .active_path()
            .map(|path| path.display().to_string());
    }

    fn draw(&self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        let screen = ui::render(&self.driver.view(), &self.info);
        terminal
            .draw(|frame| ui::draw(frame, &screen))
            .context("drawing panel")?;
        Ok(())
    }
}

/// Watches the parent directories of `files`, so editors that save by
/// rename still produce events for the tracked path.
fn watch_files(
    files: &[PathBuf],
    tx: mpsc::Sender<AppEvent>,
) -> anyhow::Result<RecommendedWatcher> {
    let tracked: HashSet<PathBuf> = files.iter().cloned().collect();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        match res {
            Ok(event) => {
                if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    return;
                }
                for path in event.paths {
                    if tracked.contains(&path) {
                        let _ = tx.send(AppEvent::FileChanged(path));
                    }
                }
            }
            Err(err) => panel_error!("File watcher error: {}", err),
        }
    })
    .context("creating file watcher")?;

    let dirs: HashSet<&Path> = files.iter().filter_map(|file| file.parent()).collect();
    for dir in dirs {
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("watching {}", dir.display()))?;
        panel_debug!("Watching {:?}", dir);
    }
    Ok(watcher)
}

fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        let event = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
            Ok(Event::Resize(..)) => AppEvent::Redraw,
            Ok(_) => continue,
            Err(err) => {
                panel_warn!("Terminal input failed: {}", err);
                let _ = tx.send(AppEvent::InputClosed);
                return;
            }
        };
        if tx.send(event).is_err() {
            return;
        }
    });
}
