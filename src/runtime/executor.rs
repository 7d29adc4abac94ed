//! Chat runtime executor

use super::{SessionEvent, SubmitOutcome};
use crate::query::{QueryClient, QueryError};
use crate::session::{Message, SessionHandle, SessionState};
use crate::state_machine::{transition, CyclePhase, Effect, Event, APOLOGY_MESSAGE};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Accepted query text of a started cycle, awaiting `finish_cycle`
#[derive(Debug)]
pub struct PendingQuery(String);

/// What applying a batch of effects produced
#[derive(Debug, Default)]
struct Applied {
    query: Option<String>,
    reply: Option<Message>,
}

/// Applies effects to the shared session and broadcasts what changed
#[derive(Clone)]
struct SessionWriter {
    session: SessionHandle,
    broadcast_tx: broadcast::Sender<SessionEvent>,
}

/// Drives request cycles for one session against any query client
pub struct ChatRuntime<C>
where
    C: QueryClient + 'static,
{
    writer: SessionWriter,
    client: Arc<C>,
}

impl<C> ChatRuntime<C>
where
    C: QueryClient + 'static,
{
    pub fn new(client: C) -> Self {
        Self::with_session(SessionHandle::default(), client)
    }

    pub fn with_session(session: SessionHandle, client: C) -> Self {
        let (broadcast_tx, _) = broadcast::channel(128);
        Self {
            writer: SessionWriter {
                session,
                broadcast_tx,
            },
            client: Arc::new(client),
        }
    }

    /// Read access for presentation layers
    pub fn session(&self) -> &SessionHandle {
        &self.writer.session
    }

    /// Subscribe to session updates
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.writer.broadcast_tx.subscribe()
    }

    pub async fn set_draft(&self, text: impl Into<String>) {
        self.writer.session.write().await.set_draft(text);
    }

    /// Run one request cycle for the current draft.
    ///
    /// Never fails: query errors become an apology message in the transcript.
    pub async fn submit(&self) -> SubmitOutcome {
        match self.begin_cycle().await {
            Ok(pending) => self.finish_cycle(pending).await,
            Err(outcome) => outcome,
        }
    }

    /// Accept the draft and mark the session busy.
    ///
    /// The busy check and the acceptance happen under one lock, so concurrent
    /// callers cannot start two cycles. Returns `Err` with the outcome when
    /// nothing was started.
    pub async fn begin_cycle(&self) -> Result<PendingQuery, SubmitOutcome> {
        let mut state = self.writer.session.write().await;
        let event = Event::SubmitRequested {
            draft: state.draft().to_string(),
        };

        let result = match transition(CyclePhase::of(&state), event) {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(error = %e, "Submission rejected");
                return Err(SubmitOutcome::Busy);
            }
        };

        self.writer
            .apply_effects(&mut state, result.effects)
            .query
            .map(PendingQuery)
            .ok_or(SubmitOutcome::Empty)
    }

    /// Issue the query for a started cycle and record its outcome.
    ///
    /// The query runs on its own task and the session lock is released while
    /// it is in flight. Dropping the returned future does not abandon the
    /// cycle: the outcome is still recorded and busy still clears.
    pub async fn finish_cycle(&self, pending: PendingQuery) -> SubmitOutcome {
        let PendingQuery(query) = pending;
        let client = Arc::clone(&self.client);
        let writer = self.writer.clone();

        let cycle = tokio::spawn(async move {
            tracing::debug!(
                endpoint = %client.endpoint(),
                query_chars = query.chars().count(),
                "Issuing query"
            );
            let event = Event::from_query_result(client.query(&query).await);
            writer.record_outcome(event).await
        });

        match cycle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                // The task died before recording anything, so close the cycle here
                tracing::error!(error = %e, "Request cycle task failed");
                let error = QueryError::network(format!("Request cycle task failed: {e}"));
                self.writer
                    .record_outcome(Event::QueryFailed { error })
                    .await
            }
        }
    }
}

impl SessionWriter {
    async fn record_outcome(&self, event: Event) -> SubmitOutcome {
        let mut state = self.session.write().await;
        let effects = match transition(CyclePhase::of(&state), event) {
            Ok(r) => r.effects,
            Err(e) => {
                // Busy must still clear, so fall back to the failure path
                tracing::error!(error = %e, "Query outcome arrived outside of a request cycle");
                vec![
                    Effect::append_bot_message(APOLOGY_MESSAGE),
                    Effect::SetBusy(false),
                ]
            }
        };

        self.apply_effects(&mut state, effects)
            .reply
            .map_or(SubmitOutcome::Empty, |reply| SubmitOutcome::Completed { reply })
    }

    fn apply_effects(&self, state: &mut SessionState, effects: Vec<Effect>) -> Applied {
        let mut applied = Applied::default();

        for effect in effects {
            match effect {
                Effect::AcceptDraft => {
                    if state.accept_submission().is_none() {
                        tracing::warn!("Draft was blank when accepting submission");
                        continue;
                    }
                    if let Some(message) = state.last_message() {
                        self.notify(SessionEvent::MessageAppended {
                            message: message.clone(),
                        });
                    }
                    self.notify(SessionEvent::DraftCleared);
                }
                Effect::SetBusy(busy) => {
                    state.set_busy(busy);
                    self.notify(SessionEvent::BusyChanged { busy });
                }
                Effect::IssueQuery { query } => {
                    applied.query = Some(query);
                }
                Effect::AppendBotMessage { content } => {
                    let message = Message::bot(content);
                    state.append_message(message.clone());
                    self.notify(SessionEvent::MessageAppended {
                        message: message.clone(),
                    });
                    applied.reply = Some(message);
                }
                Effect::LogFailure { kind, detail } => {
                    tracing::error!(
                        kind = kind.as_str(),
                        error = %detail,
                        "Query failed, replying with apology"
                    );
                }
            }
        }

        applied
    }

    fn notify(&self, event: SessionEvent) {
        // No subscribers is fine
        let _ = self.broadcast_tx.send(event);
    }
}
