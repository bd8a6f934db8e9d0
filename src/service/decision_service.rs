use super::llm_service::CompletionClient;
use crate::error::AgentError;
use crate::models::calendar::CalendarEvent;
use crate::models::decision::{AgentDecision, NO_EMAIL_SENTINEL, parse_decision};
use crate::models::forecast::ForecastPoint;

/// Forecast points embedded in the prompt (the first 12 hours).
pub const PROMPT_FORECAST_POINTS: usize = 4;

pub fn build_prompt(
    location_name: &str,
    forecast: &[ForecastPoint],
    outdoor_events: &[CalendarEvent],
) -> String {
    let weather_summary = forecast
        .iter()
        .take(PROMPT_FORECAST_POINTS)
        .map(ForecastPoint::summary_line)
        .collect::<Vec<_>>()
        .join("\n");
    let events_summary = outdoor_events
        .iter()
        .map(CalendarEvent::summary_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an intelligent personal assistant agent. Analyze this data and decide if the user needs a weather alert email.\n\
         \n\
         TOMORROW'S WEATHER FORECAST ({location}):\n\
         {weather}\n\
         \n\
         OUTDOOR EVENTS TOMORROW:\n\
         {events}\n\
         \n\
         YOUR JOB:\n\
         1. Decide if weather conditions warrant sending an alert\n\
         2. Consider: Will weather impact these outdoor activities?\n\
         3. If YES, compose a helpful email with:\n   \
            - Appropriate subject line\n   \
            - Friendly tone\n   \
            - Specific advice based on conditions\n   \
            - Which events might be affected\n\
         \n\
         If no alert needed, respond with: {sentinel}\n\
         \n\
         If alert needed, format as:\n\
         SUBJECT: [your subject]\n\
         BODY: [your email body]",
        location = location_name,
        weather = weather_summary,
        events = events_summary,
        sentinel = NO_EMAIL_SENTINEL,
    )
}

pub struct DecisionService;

impl DecisionService {
    /// Asks the model whether tomorrow's weather warrants an alert.
    pub async fn decide<C: CompletionClient + ?Sized>(
        location_name: &str,
        forecast: &[ForecastPoint],
        outdoor_events: &[CalendarEvent],
        llm: &C,
    ) -> Result<AgentDecision, AgentError> {
        let prompt = build_prompt(location_name, forecast, outdoor_events);
        let reply = llm.complete(&prompt).await?;
        tracing::debug!(reply_len = reply.len(), "received decision reply");
        parse_decision(&reply)
    }
}
