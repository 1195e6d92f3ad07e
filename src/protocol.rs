use serde::{Deserialize, Serialize};

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Send the user's message plus prior turns to the advisor backend
    SendChat {
        /// Conversation generation at dispatch time; a cleared conversation
        /// bumps this so the eventual response can be discarded
        generation: u64,
        message: String,
        history: Vec<(String, String)>,
    },
    /// Fetch listing metadata for one URL found in an assistant turn
    FetchMetadata { turn_id: u64, url: String },
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The advisor replied to a chat request
    ChatResponse { generation: u64, text: String },
    /// A chat request failed (transport error, non-2xx, malformed body)
    ChatFailed { generation: u64, error: String },
    /// Metadata resolved for one URL in one turn
    MetadataReady {
        turn_id: u64,
        url: String,
        metadata: ListingMetadata,
    },
    /// Metadata lookup failed for one URL; never affects the conversation
    MetadataFailed {
        turn_id: u64,
        url: String,
        error: String,
    },
}

/// Request body for `POST /respond`
#[derive(Debug, Serialize)]
pub struct RespondRequest {
    pub message: String,
    /// Pairs of (user text, assistant text or empty), in conversation order
    pub chat_history: Vec<(String, String)>,
}

/// Success body for `POST /respond`
#[derive(Debug, Deserialize)]
pub struct RespondReply {
    #[serde(rename = "botResponse")]
    pub bot_response: String,
}

/// Request body for `POST /api/metadata`
#[derive(Debug, Serialize)]
pub struct MetadataRequest {
    pub url: String,
}

/// Listing metadata returned by `POST /api/metadata`.
///
/// Only `address` and `price` are guaranteed; everything else is optional
/// and rendered when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingMetadata {
    pub address: String,
    pub price: f64,
    #[serde(default)]
    pub area_size: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub listing_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respond_request_wire_shape() {
        let req = RespondRequest {
            message: "hello".into(),
            chat_history: vec![("hi".into(), "welcome".into()), ("more?".into(), String::new())],
        };
        let json = serde_json::to_value(&req).unwrap();
        // History pairs serialize as two-element arrays, per the backend contract
        assert_eq!(
            json,
            serde_json::json!({
                "message": "hello",
                "chat_history": [["hi", "welcome"], ["more?", ""]],
            })
        );
    }

    #[test]
    fn test_respond_reply_field_rename() {
        let reply: RespondReply =
            serde_json::from_str(r#"{"botResponse": "Try Tiong Bahru."}"#).unwrap();
        assert_eq!(reply.bot_response, "Try Tiong Bahru.");
    }

    #[test]
    fn test_listing_metadata_optional_fields() {
        // Minimal body: only the guaranteed fields
        let meta: ListingMetadata =
            serde_json::from_str(r#"{"address": "12 Kallang Way", "price": 850000}"#).unwrap();
        assert_eq!(meta.address, "12 Kallang Way");
        assert_eq!(meta.price, 850000.0);
        assert!(meta.image.is_none());
        assert!(meta.listing_url.is_none());

        // Full body
        let meta: ListingMetadata = serde_json::from_str(
            r#"{
                "address": "12 Kallang Way",
                "price": 850000,
                "area_size": 1200,
                "image": "https://example.com/p.jpg",
                "description": "B1 industrial unit",
                "listing_url": "https://example.com/listing",
                "title": "Industrial - 12 Kallang Way"
            }"#,
        )
        .unwrap();
        assert_eq!(meta.area_size, Some(1200.0));
        assert_eq!(
            meta.listing_url.as_deref(),
            Some("https://example.com/listing")
        );
    }
}
