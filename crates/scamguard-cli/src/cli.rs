use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "scamguard")]
#[command(
    author,
    version,
    about = "Classify suspicious messages as scam or legitimate"
)]
pub struct Cli {
    /// Message to classify (enclose in quotes); omit for interactive mode
    #[arg(short, long)]
    pub message: Option<String>,

    /// Path to the model bundle (vocabulary + IDF table + weights)
    #[arg(long, default_value = "models/scam_model.json")]
    pub model: String,

    /// Rule-set file replacing the built-in risk patterns
    #[arg(long)]
    pub rules: Option<String>,

    /// Engine configuration file (override threshold/floor, normalization)
    #[arg(long)]
    pub config: Option<String>,

    /// Emit the decision as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
