//! Async network backend (runs in a separate thread).
//!
//! Owns a Tokio runtime and a shared reqwest client. Actions arrive from
//! the UI over a crossbeam channel; each one is served by an independent
//! spawned task so a slow advisor reply never blocks metadata lookups and
//! metadata lookups never block each other. Results go back to the UI as
//! `GuiEvent`s. The loop exits when the UI drops its action sender.

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::time::Duration;
use tokio::runtime::Runtime;

use crate::protocol::{
    BackendAction, GuiEvent, ListingMetadata, MetadataRequest, RespondReply, RespondRequest,
};

pub fn run_backend(action_rx: Receiver<BackendAction>, event_tx: Sender<GuiEvent>, base_url: String) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {}", e);
            return;
        }
    };

    rt.block_on(async move {
        let client = match reqwest::Client::builder().build() {
            Ok(client) => client,
            Err(e) => {
                eprintln!("Failed to create HTTP client: {}", e);
                return;
            }
        };

        loop {
            // Check for actions from the UI (non-blocking)
            loop {
                match action_rx.try_recv() {
                    Ok(action) => handle_action(action, &client, &base_url, &event_tx),
                    Err(TryRecvError::Empty) => break,
                    // UI is gone; let in-flight tasks drop with the runtime
                    Err(TryRecvError::Disconnected) => return,
                }
            }
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
    });
}

/// Spawn a task for one action. Must be called from within the runtime.
fn handle_action(
    action: BackendAction,
    client: &reqwest::Client,
    base_url: &str,
    event_tx: &Sender<GuiEvent>,
) {
    match action {
        BackendAction::SendChat {
            generation,
            message,
            history,
        } => {
            let client = client.clone();
            let event_tx = event_tx.clone();
            let url = endpoint(base_url, "/respond");
            tokio::spawn(async move {
                let event = match request_reply(&client, &url, message, history).await {
                    Ok(text) => GuiEvent::ChatResponse { generation, text },
                    Err(error) => GuiEvent::ChatFailed { generation, error },
                };
                let _ = event_tx.send(event);
            });
        }

        BackendAction::FetchMetadata { turn_id, url } => {
            let client = client.clone();
            let event_tx = event_tx.clone();
            let endpoint = endpoint(base_url, "/api/metadata");
            tokio::spawn(async move {
                let event = match fetch_metadata(&client, &endpoint, &url).await {
                    Ok(metadata) => GuiEvent::MetadataReady {
                        turn_id,
                        url,
                        metadata,
                    },
                    Err(error) => GuiEvent::MetadataFailed {
                        turn_id,
                        url,
                        error,
                    },
                };
                let _ = event_tx.send(event);
            });
        }
    }
}

/// One round trip to `POST /respond`. Single attempt, no retries; the user
/// resubmits if they want another go.
async fn request_reply(
    client: &reqwest::Client,
    endpoint: &str,
    message: String,
    history: Vec<(String, String)>,
) -> Result<String, String> {
    let body = RespondRequest {
        message,
        chat_history: history,
    };
    let response = client
        .post(endpoint)
        .json(&body)
        .send()
        .await
        .map_err(|e| format!("Failed to reach the advisor: {}", e))?;

    if !response.status().is_success() {
        return Err(format!(
            "Advisor returned an error ({})",
            response.status()
        ));
    }

    let reply: RespondReply = response
        .json()
        .await
        .map_err(|e| format!("Malformed advisor response: {}", e))?;
    Ok(reply.bot_response)
}

/// One round trip to `POST /api/metadata` for a single URL.
async fn fetch_metadata(
    client: &reqwest::Client,
    endpoint: &str,
    url: &str,
) -> Result<ListingMetadata, String> {
    let body = MetadataRequest {
        url: url.to_string(),
    };
    let response = client
        .post(endpoint)
        .json(&body)
        .send()
        .await
        .map_err(|e| format!("Failed to reach the metadata service: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("Metadata lookup returned {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Malformed metadata response: {}", e))
}

/// Join the configured base URL with an endpoint path, tolerating a
/// trailing slash in the configured value.
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
