use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use nadeshiko_core::{Msg, PanelMessage};
use panel_logging::{panel_debug, panel_info, panel_warn};

use super::app::{AppEvent, PanelDriver};
use super::config::PanelConfig;
use super::effects::EffectRunner;
use super::protocol::{encode_outbound, parse_inbound, Outbound};

pub fn run(config: &PanelConfig) -> anyhow::Result<()> {
    let (event_tx, event_rx) = mpsc::channel();
    let effects = EffectRunner::new(config.translator_settings(), event_tx.clone());
    let driver = PanelDriver::new(config.panel_settings(), effects);

    spawn_reader(io::BufReader::new(io::stdin()), event_tx);
    let stdout = io::stdout();
    serve_loop(driver, &event_rx, &mut stdout.lock()).context("writing panel messages")
}

/// Forwards parsed lines from `reader` to the inbox; malformed lines are skipped.
pub(crate) fn spawn_reader<R>(reader: R, tx: mpsc::Sender<AppEvent>)
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    panel_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match parse_inbound(&line) {
                Ok(inbound) => {
                    if tx.send(AppEvent::Panel(inbound.into())).is_err() {
                        return;
                    }
                }
                Err(err) => panel_warn!("Skipping malformed message ({}): {}", err, line),
            }
        }
        let _ = tx.send(AppEvent::InputClosed);
    });
}

/// Runs until the panel is disposed, or until input closes and outstanding work has drained.
pub(crate) fn serve_loop<W: Write>(
    mut driver: PanelDriver,
    events: &mpsc::Receiver<AppEvent>,
    out: &mut W,
) -> io::Result<()> {
    write_posts(out, driver.dispatch(Msg::PanelResolved))?;

    let mut input_closed = false;
    while !(input_closed && driver.is_idle()) {
        let Ok(event) = events.recv() else {
            break;
        };
        match event {
            AppEvent::Panel(msg) => {
                write_posts(out, driver.dispatch(msg))?;
                if driver.is_disposed() {
                    panel_info!("Panel disposed by host");
                    return Ok(());
                }
            }
            AppEvent::InputClosed => {
                panel_debug!("Input closed; draining outstanding work");
                input_closed = true;
            }
            AppEvent::Key(_) | AppEvent::FileChanged(_) | AppEvent::Redraw => {}
        }
    }

    driver.dispatch(Msg::PanelDisposed);
    Ok(())
}

fn write_posts<W: Write>(out: &mut W, posts: Vec<PanelMessage>) -> io::Result<()> {
    for post in posts {
        let line = encode_outbound(&Outbound::from(post)).map_err(io::Error::other)?;
        writeln!(out, "{line}")?;
    }
    out.flush()
}
