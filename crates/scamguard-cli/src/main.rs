mod cli;
mod output;
mod response;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use response::DetectionResponse;
use scamguard_engine::{DecisionEngine, EngineConfig};
use scamguard_model::{LinearClassifier, ScamModel};
use scamguard_rules::{RiskRuleEngine, RuleSet};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    init_logging(args.verbose);

    let model = Arc::new(
        ScamModel::load(&args.model)
            .with_context(|| format!("could not load model bundle from {}", args.model))?,
    );

    let rules = match &args.rules {
        Some(path) => {
            let set = RuleSet::from_file(path)
                .with_context(|| format!("could not load rule set from {path}"))?;
            RiskRuleEngine::from_ruleset(&set)?
        }
        None => RiskRuleEngine::new()?,
    };

    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("could not load engine config from {path}"))?,
        None => EngineConfig::default(),
    };

    let engine = DecisionEngine::with_parts(Arc::new(LinearClassifier::new(model)), rules, config)?;

    match &args.message {
        Some(message) => classify_once(&engine, message, args.json).await,
        None => run_interactive(&engine, args.json).await,
    }
}

async fn classify_once(engine: &DecisionEngine, message: &str, json: bool) -> anyhow::Result<()> {
    let decision = engine.decide(message).await?;

    if json {
        let response = DetectionResponse::new(message, &decision);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("\nMessage: {message}");
        output::print_decision(&decision);
    }

    Ok(())
}

async fn run_interactive(engine: &DecisionEngine, json: bool) -> anyhow::Result<()> {
    println!();
    println!("=========================================");
    println!("  SCAMGUARD TERMINAL");
    println!("=========================================");
    println!("Enter messages to check if they're scams.");
    println!("Type 'quit' or 'exit' (or an empty line) to leave.");

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("\nEnter message (or 'exit' to quit): ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.is_empty() || message.eq_ignore_ascii_case("quit") || message.eq_ignore_ascii_case("exit")
        {
            println!("\nExiting. Goodbye!");
            break;
        }

        let decision = engine.decide(message).await?;

        if json {
            let response = DetectionResponse::new(message, &decision);
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            output::print_result_banner(&decision);
            output::print_decision(&decision);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "scamguard=debug,scamguard_engine=debug,scamguard_model=debug,scamguard_rules=debug"
    } else {
        "scamguard=info,scamguard_engine=info,scamguard_model=info,scamguard_rules=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
