//! Core AdvisorApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;
use std::thread;

use crate::backend::run_backend;
use crate::config::{load_settings, save_settings, Settings};
use crate::protocol::{BackendAction, GuiEvent};
use crate::session::ConversationSession;
use crate::ui::AdvisorTheme;

/// Cap on persisted composer history entries
const MAX_INPUT_HISTORY: usize = 50;

pub struct AdvisorApp {
    // Conversation state (turns, pending flag, error)
    pub session: ConversationSession,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    // Composer
    pub message_input: String,
    pub input_history: Vec<String>,

    // Diagnostics log (shown in a toggleable window)
    pub system_log: Vec<String>,
    pub show_system_log: bool,

    // Theme ("dark" or "light"), persisted in settings
    pub theme: String,

    // Advisor backend base URL the backend thread was spawned with
    pub server_url: String,
}

impl AdvisorApp {
    /// Get the current theme based on the theme string ("dark" or "light")
    pub(super) fn get_theme(&self) -> AdvisorTheme {
        match self.theme.as_str() {
            "light" => AdvisorTheme::light(),
            _ => AdvisorTheme::dark(),
        }
    }

    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        let settings = load_settings().unwrap_or_default();
        match settings.theme.as_str() {
            "light" => cc.egui_ctx.set_visuals(egui::Visuals::light()),
            _ => cc.egui_ctx.set_visuals(egui::Visuals::dark()),
        }

        // Spawn the backend thread against the configured base URL
        let base_url = settings.server_url.clone();
        thread::spawn(move || {
            run_backend(action_rx, event_tx, base_url);
        });

        let mut app = Self {
            session: ConversationSession::new(),

            action_tx,
            event_rx,

            message_input: String::new(),
            input_history: settings.history,

            system_log: Vec::new(),
            show_system_log: false,

            theme: settings.theme,
            server_url: settings.server_url,
        };
        if app.theme.is_empty() {
            app.theme = "dark".into();
        }
        crate::events::push_log(&mut app.system_log, format!("Advisor at {}", app.server_url));
        app
    }

    /// Submit the composer content. No-op while a request is pending or the
    /// input is blank; on acceptance the composer is cleared and the chat
    /// request dispatched to the backend.
    pub fn submit_current_input(&mut self) {
        let text = self.message_input.clone();
        let Some(request) = self.session.submit(&text) else {
            return;
        };
        self.message_input.clear();

        self.input_history.push(text);
        if self.input_history.len() > MAX_INPUT_HISTORY {
            self.input_history.remove(0);
        }

        let _ = self.action_tx.send(BackendAction::SendChat {
            generation: request.generation,
            message: request.message,
            history: request.history,
        });
    }

    /// Toggle between dark and light, updating egui visuals to match.
    pub(super) fn toggle_theme(&mut self, ctx: &egui::Context) {
        if self.theme == "light" {
            self.theme = "dark".into();
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            self.theme = "light".into();
            ctx.set_visuals(egui::Visuals::light());
        }
    }

    fn settings(&self) -> Settings {
        Settings {
            server_url: self.server_url.clone(),
            theme: self.theme.clone(),
            history: self.input_history.clone(),
        }
    }
}

impl Drop for AdvisorApp {
    fn drop(&mut self) {
        // Persist settings on exit
        if let Err(e) = save_settings(&self.settings()) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}
