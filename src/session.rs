//! Core conversation state, separated from UI logic.
//!
//! `ConversationSession` holds everything that represents the exchange with
//! the advisor: the ordered turns, the single in-flight flag, and the last
//! error. UI components receive it as a parameter rather than owning it,
//! and nothing else writes to it.

use crate::links::extract_links;
use crate::protocol::ListingMetadata;
use crate::transcript::{LinkPreview, PreviewState, Turn};

/// Payload for one chat dispatch, handed back to the caller to send over
/// the action channel. Building it here keeps `submit` synchronous and
/// free of I/O.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub generation: u64,
    pub message: String,
    pub history: Vec<(String, String)>,
}

/// Conversation state for the advisor client.
#[derive(Default)]
pub struct ConversationSession {
    /// Turns in conversation order
    pub turns: Vec<Turn>,
    /// Whether a chat request is in flight; gates submission
    pub pending: bool,
    /// Last session-level error, at most one at a time
    pub error: Option<String>,

    /// Bumped on `clear` so in-flight responses can be discarded
    generation: u64,
    next_turn_id: u64,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Submit user input.
    ///
    /// A no-op returning `None` when the input is empty/whitespace or a
    /// request is already pending. Otherwise clears any prior error,
    /// appends a user turn, raises the pending gate, and returns the
    /// request payload built from the turns preceding this submission.
    pub fn submit(&mut self, text: &str) -> Option<ChatRequest> {
        if text.trim().is_empty() || self.pending {
            return None;
        }
        self.error = None;

        // History is the state before this submission
        let history = self.chat_history();

        let id = self.alloc_turn_id();
        self.turns.push(Turn::user(id, text.to_string()));
        self.pending = true;

        Some(ChatRequest {
            generation: self.generation,
            message: text.to_string(),
            history,
        })
    }

    /// Apply a successful advisor reply.
    ///
    /// Appends an assistant turn with a fresh reveal and one loading
    /// preview per URL in the reply, and returns the new turn's id so the
    /// caller can dispatch the metadata fetches. A reply whose generation
    /// predates a `clear` is dropped.
    pub fn apply_response(&mut self, generation: u64, text: String) -> Option<u64> {
        if generation != self.generation {
            return None;
        }
        self.pending = false;

        let previews: Vec<LinkPreview> = extract_links(&text)
            .into_iter()
            .map(LinkPreview::loading)
            .collect();
        let id = self.alloc_turn_id();
        self.turns.push(Turn::assistant(id, text, previews));
        Some(id)
    }

    /// Apply a failed advisor reply: record the error, drop the gate,
    /// append nothing. The user's turn stays in the transcript, visible
    /// but unanswered.
    pub fn apply_failure(&mut self, generation: u64, error: String) {
        if generation != self.generation {
            return;
        }
        self.pending = false;
        self.error = Some(error);
    }

    /// Apply a metadata result for one URL in one turn.
    ///
    /// If the turn or URL no longer exists the result is stale and is
    /// dropped; an already-settled preview is never overwritten.
    pub fn apply_metadata(
        &mut self,
        turn_id: u64,
        url: &str,
        result: Result<ListingMetadata, String>,
    ) {
        let Some(turn) = self.turns.iter_mut().find(|t| t.id == turn_id) else {
            return;
        };
        let Some(preview) = turn.preview_mut(url) else {
            return;
        };
        if !matches!(preview.state, PreviewState::Loading) {
            return;
        }
        preview.state = match result {
            Ok(metadata) => PreviewState::Ready(metadata),
            Err(error) => PreviewState::Failed(error),
        };
    }

    /// Start a new conversation. Anything still in flight becomes stale.
    pub fn clear(&mut self) {
        self.turns.clear();
        self.pending = false;
        self.error = None;
        self.generation += 1;
    }

    /// History payload: one `(userText, assistantTextOrEmpty)` pair per
    /// user turn, in order. An unanswered user turn contributes an empty
    /// assistant slot.
    fn chat_history(&self) -> Vec<(String, String)> {
        let mut history: Vec<(String, String)> = Vec::new();
        for turn in &self.turns {
            match turn.role {
                crate::transcript::Role::User => {
                    history.push((turn.content.clone(), String::new()));
                }
                crate::transcript::Role::Assistant => {
                    if let Some(pair) = history.last_mut() {
                        if pair.1.is_empty() {
                            pair.1 = turn.content.clone();
                        }
                    }
                }
            }
        }
        history
    }

    fn alloc_turn_id(&mut self) -> u64 {
        let id = self.next_turn_id;
        self.next_turn_id += 1;
        id
    }
}
