//! Event processing from the backend thread.

use super::AdvisorApp;

impl AdvisorApp {
    /// Drain pending backend events into the session. Metadata fetches for
    /// newly arrived replies are dispatched from here as well.
    pub(super) fn process_events(&mut self) {
        crate::events::process_events(
            &self.event_rx,
            &self.action_tx,
            &mut self.session,
            &mut self.system_log,
        );
    }
}
