//! Conversation transcript data model.

use crate::protocol::ListingMetadata;
use crate::typewriter::Typewriter;

/// Who authored a turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// Per-URL enrichment state, independent of the conversation and of every
/// other link.
#[derive(Clone, Debug)]
pub enum PreviewState {
    /// Lookup in flight
    Loading,
    /// Lookup failed; rendered as a lightweight inline failure
    Failed(String),
    /// Metadata resolved
    Ready(ListingMetadata),
}

/// One URL found in an assistant turn plus its enrichment lifecycle.
#[derive(Clone, Debug)]
pub struct LinkPreview {
    pub url: String,
    pub state: PreviewState,
}

impl LinkPreview {
    pub fn loading(url: String) -> Self {
        Self {
            url,
            state: PreviewState::Loading,
        }
    }
}

/// Thumbs feedback on an assistant turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    ThumbsUp,
    ThumbsDown,
}

/// One message in the conversation.
///
/// `content` is immutable once appended; what varies over time is the
/// typewriter's prefix view and the preview states, both scoped to this
/// turn's lifetime.
#[derive(Clone, Debug)]
pub struct Turn {
    /// Session-scoped identity, used to route late metadata results
    pub id: u64,
    pub role: Role,
    pub content: String,
    /// Reveal state; `Some` for assistant turns only
    pub typewriter: Option<Typewriter>,
    /// One entry per URL extracted from `content`, assistant turns only
    pub previews: Vec<LinkPreview>,
    pub feedback: Option<Feedback>,
}

impl Turn {
    pub fn user(id: u64, content: String) -> Self {
        Self {
            id,
            role: Role::User,
            content,
            typewriter: None,
            previews: Vec::new(),
            feedback: None,
        }
    }

    pub fn assistant(id: u64, content: String, previews: Vec<LinkPreview>) -> Self {
        let typewriter = Typewriter::new(&content);
        Self {
            id,
            role: Role::Assistant,
            content,
            typewriter: Some(typewriter),
            previews,
            feedback: None,
        }
    }

    /// Find a preview by its URL.
    pub fn preview_mut(&mut self, url: &str) -> Option<&mut LinkPreview> {
        self.previews.iter_mut().find(|p| p.url == url)
    }
}
