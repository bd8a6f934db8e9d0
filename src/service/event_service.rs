use std::sync::Arc;

use crate::models::calendar::CalendarEvent;

/// Read-only calendar shared by every run.
#[derive(Debug, Clone)]
pub struct EventSource {
    events: Arc<Vec<CalendarEvent>>,
}

impl EventSource {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self {
            events: Arc::new(events),
        }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }
}

pub fn filter_outdoor(events: &[CalendarEvent]) -> Vec<CalendarEvent> {
    events.iter().filter(|e| e.is_outdoor).cloned().collect()
}
