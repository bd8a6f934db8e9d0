use std::convert::Infallible;
use std::sync::Arc;

use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::service::agent_flow::WeatherAgent;

const HOME_TEMPLATE: &str = include_str!("../../assets/home.html");

pub struct WebState {
    pub agent: WeatherAgent,
    pub home_page: String,
}

impl WebState {
    pub fn new(agent: WeatherAgent) -> Self {
        let home_page = render_home(agent.location_name());
        Self { agent, home_page }
    }
}

pub fn render_home(location_name: &str) -> String {
    HOME_TEMPLATE.replace("{{LOCATION}}", &escape_html(location_name))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Runs the agent and picks the status for the transcript.
pub async fn run_report(agent: &WeatherAgent) -> (StatusCode, String) {
    let run = agent.run().await;
    let status = if run.is_failure() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    (status, run.transcript)
}

async fn handle_run(state: Arc<WebState>) -> Result<impl Reply, Infallible> {
    let (status, body) = run_report(&state.agent).await;
    Ok(warp::reply::with_status(body, status))
}

fn with_state(
    state: Arc<WebState>,
) -> impl Filter<Extract = (Arc<WebState>,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

/// `GET /` serves the trigger page, `GET /run` executes the pipeline.
pub fn routes(
    state: Arc<WebState>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let home = warp::path::end().and(warp::get()).and(with_state(state.clone())).map(
        |state: Arc<WebState>| warp::reply::html(state.home_page.clone()),
    );
    let run = warp::path("run")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_state(state))
        .and_then(handle_run);
    home.or(run)
}
