use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use super::decision_service::DecisionService;
use super::event_service::{EventSource, filter_outdoor};
use super::llm_service::CompletionClient;
use super::weather_service::WeatherClient;
use crate::config::city_name;
use crate::error::AgentError;
use crate::models::decision::AgentDecision;

const RULE: &str = "============================================================";

#[derive(Debug)]
pub enum RunOutcome {
    NoOutdoorEvents,
    Decided(AgentDecision),
    Failed(AgentError),
}

#[derive(Debug)]
pub struct AgentRun {
    pub run_id: String,
    pub transcript: String,
    pub outcome: RunOutcome,
}

impl AgentRun {
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, RunOutcome::Failed(_))
    }
}

#[derive(Default)]
struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn fail(&mut self, err: &AgentError) {
        self.push(format!("\nFAILED ({}): {}", err.label(), err.detail()));
        if let Some(reply) = err.reply() {
            self.push("Model reply:");
            self.push(reply);
        }
    }

    fn render(self) -> String {
        self.lines.join("\n")
    }
}

/// The weather/calendar pipeline with its collaborators.
pub struct WeatherAgent {
    weather: Arc<dyn WeatherClient>,
    llm: Arc<dyn CompletionClient>,
    events: EventSource,
    location: String,
    location_name: String,
    recipient: String,
}

impl WeatherAgent {
    pub fn new(
        weather: Arc<dyn WeatherClient>,
        llm: Arc<dyn CompletionClient>,
        events: EventSource,
        location: String,
        recipient: String,
    ) -> Self {
        let location_name = city_name(&location).to_string();
        Self {
            weather,
            llm,
            events,
            location,
            location_name,
            recipient,
        }
    }

    pub fn events(&self) -> &EventSource {
        &self.events
    }

    pub fn weather(&self) -> &dyn WeatherClient {
        self.weather.as_ref()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn location_name(&self) -> &str {
        &self.location_name
    }

    /// Runs fetch → filter → decide once and reports every step.
    pub async fn run(&self) -> AgentRun {
        let run_id = Uuid::new_v4().to_string();
        let span = tracing::info_span!("agent_run", run_id = %run_id);
        let (transcript, outcome) = self.run_steps().instrument(span).await;
        AgentRun {
            run_id,
            transcript,
            outcome,
        }
    }

    async fn run_steps(&self) -> (String, RunOutcome) {
        let mut out = Transcript::default();
        out.push("🤖 AGENT STARTING...");
        out.push(RULE);

        out.push(format!("\n📡 Calling Weather API for {}...", self.location_name));
        let forecast = match self.weather.forecast(&self.location).await {
            Ok(points) => points,
            Err(err) => {
                tracing::error!(error = %err, "forecast step failed");
                out.fail(&err);
                return (out.render(), RunOutcome::Failed(err));
            }
        };
        out.push(format!("✓ Got weather forecast: {} data points", forecast.len()));

        out.push("\n📅 Checking calendar for outdoor events...");
        let outdoor = filter_outdoor(self.events.events());
        out.push(format!("✓ Found {} outdoor events", outdoor.len()));
        tracing::info!(
            forecast_points = forecast.len(),
            outdoor_events = outdoor.len(),
            "inputs gathered"
        );

        out.push("\n🧠 AGENT THINKING...");
        if outdoor.is_empty() {
            out.push("Decision: No outdoor events tomorrow. No email needed.");
            tracing::info!("no outdoor events, skipping decision");
            return (out.render(), RunOutcome::NoOutdoorEvents);
        }

        let decision = match DecisionService::decide(
            &self.location_name,
            &forecast,
            &outdoor,
            self.llm.as_ref(),
        )
        .await
        {
            Ok(decision) => decision,
            Err(err) => {
                tracing::error!(error = %err, "decision step failed");
                out.fail(&err);
                return (out.render(), RunOutcome::Failed(err));
            }
        };

        out.push("\n📋 AGENT DECISION:");
        match &decision {
            AgentDecision::NoAlert => {
                out.push("✓ Weather looks fine. No alert necessary.");
                tracing::info!("no alert needed");
            }
            AgentDecision::Alert { subject, raw, .. } => {
                out.push("✓ Weather alert needed! Composing email...");
                out.push(format!("\n{}", RULE));
                out.push("📧 EMAIL OUTPUT:");
                out.push(RULE);
                out.push(format!("To: {}", self.recipient));
                out.push(raw.as_str());
                out.push(RULE);
                tracing::info!(%subject, "alert composed");
            }
        }

        (out.render(), RunOutcome::Decided(decision))
    }
}
