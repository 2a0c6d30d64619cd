use artistscope::clients::errors::Result;
use artistscope::intake::{AGE_PROMPT, IntakeRecord, NAME_PROMPT, STATUS_PROMPT};
use artistscope::lookup::{ConfigBuilder, Lookup};
use clap::{Parser, Subcommand};
use dialoguer::Input;
use log::info;

const ARTIST_PROMPT: &str = "Enter your favorite artist's name";

#[derive(Parser)]
#[command(name = "artistscope")]
#[command(version, about = "Look up an artist on Spotify", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print followers, genres, top tracks and related artists
    Artist {
        /// Artist to look up; prompted for when omitted
        #[arg(short, long)]
        name: Option<String>,
        /// ISO 3166-1 alpha-2 country for the top tracks
        #[arg(short, long)]
        market: Option<String>,
    },
    /// Record a patient and print the procedure for their condition
    Intake {
        /// Patient name
        #[arg(long)]
        name: Option<String>,
        /// Patient age
        #[arg(long)]
        age: Option<String>,
        /// Condition code (EM, EX, IP)
        #[arg(long)]
        status: Option<String>,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Artist { name, market } => look_up_artist(name, market).await?,
        Commands::Intake { name, age, status } => record_patient(name, age, status)?,
    }
    Ok(())
}

async fn look_up_artist(name: Option<String>, market: Option<String>) -> Result<()> {
    info!("Building config ...");
    // Fail on missing credentials before asking the user anything
    let config = ConfigBuilder::new().market(market).build()?;
    let name = ask_unless_given(name, ARTIST_PROMPT)?;

    let lookup = Lookup::new(config);
    // Either the report or the not-found notice
    print!("{}", lookup.run(&name).await?);
    Ok(())
}

fn record_patient(
    name: Option<String>,
    age: Option<String>,
    status: Option<String>,
) -> Result<()> {
    let name = ask_unless_given(name, NAME_PROMPT)?;
    let age = ask_unless_given(age, AGE_PROMPT)?;
    let status = ask_unless_given(status, STATUS_PROMPT)?;

    // Codes are matched exactly as entered, so " EM" or "em" get the discharge procedure
    print!("{}", IntakeRecord::new(name, age, &status));
    Ok(())
}

// Empty answers are accepted and passed on as-is
fn ask_unless_given(value: Option<String>, question: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?),
    }
}
