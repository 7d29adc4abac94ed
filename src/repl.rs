//! Line-oriented terminal front end
//!
//! Each input line becomes the draft and is submitted. Transcript updates are
//! rendered from session events, so replies print whenever they arrive.

use crate::query::QueryClient;
use crate::runtime::{ChatRuntime, SessionEvent, SubmitOutcome};
use crate::session::Message;
use std::io::{self, Write};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::sync::{broadcast, oneshot};
use tokio::task::JoinHandle;

pub const QUIT_COMMAND: &str = "/quit";
pub const TYPING_INDICATOR: &str = "...";
const BUSY_NOTICE: &str = "(still waiting for a reply, send that again once it arrives)";

pub fn format_message(message: &Message) -> String {
    format!("{}: {}", message.sender().label(), message.content())
}

/// Line to print for a session event, if any
pub fn render_event(event: &SessionEvent) -> Option<String> {
    match event {
        SessionEvent::MessageAppended { message } => Some(format_message(message)),
        SessionEvent::BusyChanged { busy: true } => Some(TYPING_INDICATOR.to_string()),
        SessionEvent::BusyChanged { busy: false } | SessionEvent::DraftCleared => None,
    }
}

fn is_quit(line: &str) -> bool {
    line.trim() == QUIT_COMMAND
}

/// Print transcript updates until told to stop.
///
/// On shutdown, events already broadcast are still printed before returning.
async fn render_events<W: Write>(
    mut events: broadcast::Receiver<SessionEvent>,
    mut shutdown: oneshot::Receiver<()>,
    mut out: W,
) -> io::Result<W> {
    loop {
        tokio::select! {
            biased;
            received = events.recv() => match received {
                Ok(event) => write_event(&mut out, &event)?,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Transcript renderer fell behind");
                }
                Err(RecvError::Closed) => return Ok(out),
            },
            _ = &mut shutdown => break,
        }
    }

    loop {
        match events.try_recv() {
            Ok(event) => write_event(&mut out, &event)?,
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Transcript renderer fell behind");
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => return Ok(out),
        }
    }
}

fn write_event<W: Write>(out: &mut W, event: &SessionEvent) -> io::Result<()> {
    if let Some(line) = render_event(event) {
        writeln!(out, "{line}")?;
        out.flush()?;
    }
    Ok(())
}

/// Run the REPL until `/quit` or end of input
pub async fn run<C>(runtime: Arc<ChatRuntime<C>>) -> io::Result<()>
where
    C: QueryClient + 'static,
{
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let renderer = tokio::spawn(render_events(
        runtime.subscribe(),
        shutdown_rx,
        io::stdout(),
    ));

    println!("Chatbot ({QUIT_COMMAND} to exit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight: Option<JoinHandle<SubmitOutcome>> = None;

    while let Some(line) = lines.next_line().await? {
        if is_quit(&line) {
            break;
        }

        runtime.set_draft(line).await;
        match runtime.begin_cycle().await {
            Ok(pending) => {
                let rt = Arc::clone(&runtime);
                in_flight = Some(tokio::spawn(async move { rt.finish_cycle(pending).await }));
            }
            Err(SubmitOutcome::Busy) => println!("{BUSY_NOTICE}"),
            Err(_) => {}
        }
    }

    // Let a reply that is already on its way land before exiting
    if let Some(task) = in_flight {
        match task.await {
            Ok(SubmitOutcome::Completed { reply }) => {
                tracing::debug!(message_id = %reply.id(), "Last reply recorded");
            }
            Ok(_) => {}
            Err(e) => tracing::error!(error = %e, "Request cycle task failed"),
        }
    }

    // Receiver already gone means the renderer has exited on its own
    let _ = shutdown_tx.send(());
    match renderer.await {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => tracing::warn!(error = %e, "Failed to write transcript"),
        Err(e) => tracing::error!(error = %e, "Transcript renderer failed"),
    }

    let state = runtime.session().read().await;
    tracing::debug!(messages = state.transcript().len(), "Session ended");

    Ok(())
}
