//! Terminal render sink.
//!
//! A dedicated thread drains the event bus and writes one block per event
//! to stdout. Logs go to stderr, so the transcript stays readable.

use std::io::Write;
use std::thread::{self, JoinHandle};

use coach_common::RenderEvent;
use tokio::sync::broadcast::{self, error::RecvError};

pub fn format_event(event: &RenderEvent) -> String {
    match event {
        RenderEvent::SystemNotice(text) => format!("* {text}"),
        RenderEvent::UserTurn(text) => format!("you> {text}"),
        RenderEvent::AssistantTurn(text) => format!("tutor> {text}"),
        RenderEvent::Error(text) => format!("! {text}"),
    }
}

/// Write events to `out` until every sender is dropped.
pub fn drain<W: Write>(mut rx: broadcast::Receiver<RenderEvent>, mut out: W) {
    loop {
        match rx.blocking_recv() {
            Ok(event) => {
                let written = writeln!(out, "{}\n", format_event(&event)).and_then(|_| out.flush());
                if let Err(e) = written {
                    tracing::warn!(error = %e, "render sink write failed");
                    return;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "render sink fell behind");
            }
            Err(RecvError::Closed) => return,
        }
    }
}

pub fn spawn_render_thread(
    rx: broadcast::Receiver<RenderEvent>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("coach-render".into())
        .spawn(move || drain(rx, std::io::stdout()))
}
