use chrono::{Days, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub time: String,
    pub location: String,
    pub is_outdoor: bool,
    pub date: NaiveDate,
}

impl CalendarEvent {
    pub fn new(title: &str, time: &str, location: &str, is_outdoor: bool, date: NaiveDate) -> Self {
        Self {
            title: title.to_string(),
            time: time.to_string(),
            location: location.to_string(),
            is_outdoor,
            date,
        }
    }

    pub fn summary_line(&self) -> String {
        format!("- {}: {} at {}", self.time, self.title, self.location)
    }
}

/// Tomorrow's date as seen from `timezone`.
pub fn tomorrow_in(timezone: Tz) -> NaiveDate {
    let today = Utc::now().with_timezone(&timezone).date_naive();
    today.checked_add_days(Days::new(1)).unwrap_or(today)
}

/// The demo calendar: two outdoor plans and one call from home.
pub fn demo_events(date: NaiveDate) -> Vec<CalendarEvent> {
    vec![
        CalendarEvent::new(
            "Morning Run in Prospect Park",
            "7:00 AM",
            "Prospect Park",
            true,
            date,
        ),
        CalendarEvent::new(
            "Coffee with Sarah",
            "10:30 AM",
            "Cafe Grumpy (outdoor seating)",
            true,
            date,
        ),
        CalendarEvent::new("Team Video Call", "2:00 PM", "Home office", false, date),
    ]
}
