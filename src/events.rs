//! Backend event processing (advisor replies, metadata results).

use chrono::Local;
use crossbeam_channel::{Receiver, Sender};

use crate::protocol::{BackendAction, GuiEvent};
use crate::session::ConversationSession;

/// Keep the system log from growing without bound
const MAX_LOG_LINES: usize = 500;

/// Drain all pending events from the backend and apply them to the session.
pub fn process_events(
    event_rx: &Receiver<GuiEvent>,
    action_tx: &Sender<BackendAction>,
    session: &mut ConversationSession,
    system_log: &mut Vec<String>,
) {
    while let Ok(event) = event_rx.try_recv() {
        apply_event(event, action_tx, session, system_log);
    }
}

/// Apply one backend event.
pub fn apply_event(
    event: GuiEvent,
    action_tx: &Sender<BackendAction>,
    session: &mut ConversationSession,
    system_log: &mut Vec<String>,
) {
    match event {
        GuiEvent::ChatResponse { generation, text } => {
            match session.apply_response(generation, text) {
                Some(turn_id) => {
                    // Kick off one independent lookup per URL in the reply
                    if let Some(turn) = session.turns.iter().find(|t| t.id == turn_id) {
                        for preview in &turn.previews {
                            let _ = action_tx.send(BackendAction::FetchMetadata {
                                turn_id,
                                url: preview.url.clone(),
                            });
                        }
                        push_log(
                            system_log,
                            format!(
                                "Reply received ({} link{})",
                                turn.previews.len(),
                                if turn.previews.len() == 1 { "" } else { "s" }
                            ),
                        );
                    }
                }
                None => {
                    push_log(system_log, "Dropped reply for a cleared conversation".into());
                }
            }
        }

        GuiEvent::ChatFailed { generation, error } => {
            push_log(system_log, format!("Request failed: {}", error));
            session.apply_failure(generation, error);
        }

        GuiEvent::MetadataReady {
            turn_id,
            url,
            metadata,
        } => {
            session.apply_metadata(turn_id, &url, Ok(metadata));
        }

        GuiEvent::MetadataFailed {
            turn_id,
            url,
            error,
        } => {
            push_log(system_log, format!("Metadata failed for {}: {}", url, error));
            session.apply_metadata(turn_id, &url, Err(error));
        }
    }
}

/// Append a timestamped line to the system log, trimming the oldest entries
/// past the cap.
pub fn push_log(system_log: &mut Vec<String>, message: String) {
    let ts = Local::now().format("%H:%M:%S").to_string();
    system_log.push(format!("[{}] {}", ts, message));
    if system_log.len() > MAX_LOG_LINES {
        system_log.remove(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::PreviewState;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_response_event_dispatches_metadata_fetches() {
        let (action_tx, action_rx) = unbounded();
        let mut session = ConversationSession::new();
        let mut log = Vec::new();

        let req = session.submit("hi").unwrap();
        apply_event(
            GuiEvent::ChatResponse {
                generation: req.generation,
                text: "see http://a.com and http://b.com".into(),
            },
            &action_tx,
            &mut session,
            &mut log,
        );

        // One fetch per extracted URL, in order
        let first = action_rx.try_recv().unwrap();
        let second = action_rx.try_recv().unwrap();
        match (first, second) {
            (
                BackendAction::FetchMetadata { url: a, .. },
                BackendAction::FetchMetadata { url: b, .. },
            ) => {
                assert_eq!(a, "http://a.com");
                assert_eq!(b, "http://b.com");
            }
            other => panic!("unexpected actions: {:?}", other),
        }
        assert!(action_rx.try_recv().is_err());
    }

    #[test]
    fn test_failed_event_sets_session_error() {
        let (action_tx, _action_rx) = unbounded();
        let mut session = ConversationSession::new();
        let mut log = Vec::new();

        let req = session.submit("hi").unwrap();
        apply_event(
            GuiEvent::ChatFailed {
                generation: req.generation,
                error: "connection refused".into(),
            },
            &action_tx,
            &mut session,
            &mut log,
        );

        assert_eq!(session.error.as_deref(), Some("connection refused"));
        assert!(!session.pending);
        assert!(log.iter().any(|l| l.contains("connection refused")));
    }

    #[test]
    fn test_metadata_events_settle_previews() {
        let (action_tx, _action_rx) = unbounded();
        let mut session = ConversationSession::new();
        let mut log = Vec::new();

        let req = session.submit("hi").unwrap();
        apply_event(
            GuiEvent::ChatResponse {
                generation: req.generation,
                text: "listing at http://a.com".into(),
            },
            &action_tx,
            &mut session,
            &mut log,
        );
        let turn_id = session.turns[1].id;

        apply_event(
            GuiEvent::MetadataFailed {
                turn_id,
                url: "http://a.com".into(),
                error: "404".into(),
            },
            &action_tx,
            &mut session,
            &mut log,
        );

        assert!(matches!(
            session.turns[1].previews[0].state,
            PreviewState::Failed(_)
        ));
        // Per-link failure never becomes a session error
        assert!(session.error.is_none());
    }

    #[test]
    fn test_log_trimming() {
        let mut log = Vec::new();
        for i in 0..(MAX_LOG_LINES + 20) {
            push_log(&mut log, format!("line {}", i));
        }
        assert!(log.len() <= MAX_LOG_LINES);
        assert!(log.last().unwrap().contains("line 519"));
    }
}
