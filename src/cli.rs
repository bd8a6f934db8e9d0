use clap::{Parser, Subcommand};

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::runtime::build_agent;

#[derive(Parser)]
#[command(about = "Weather calendar agent")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the agent once and print the transcript.
    Run {},
    /// List tomorrow's calendar events.
    Events {},
    /// Fetch and print the forecast for the configured location.
    Forecast {},
}

pub async fn cli(config: AgentConfig) -> Result<(), AgentError> {
    // Fine to exit on bad arguments here
    let cli = Cli::parse();
    let agent = build_agent(&config)?;
    match &cli.command {
        Commands::Run {} => {
            let run = agent.run().await;
            println!("{}", run.transcript);
            if let crate::service::agent_flow::RunOutcome::Failed(err) = run.outcome {
                return Err(err);
            }
        }
        Commands::Events {} => {
            for event in agent.events().events() {
                let place = if event.is_outdoor { "outdoor" } else { "indoor" };
                println!(
                    "{} {} {} at {} ({})",
                    event.date, event.time, event.title, event.location, place
                );
            }
        }
        Commands::Forecast {} => {
            let points = agent.weather().forecast(agent.location()).await?;
            for point in &points {
                println!("{} [{}]", point.summary_line(), point.condition);
            }
        }
    }
    Ok(())
}
