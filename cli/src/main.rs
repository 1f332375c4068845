use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use harahachi_core::{
    analyze_meal_image, cost_recipe, discover_recipes, evaluate_daily_log, search_food,
    suggest_next_meal, DailyIntake, DailyLogSummary, FallbackClient, ImageData, MealSlot,
};

#[derive(Parser)]
#[command(name = "harahachi")]
#[command(about = "Harahachi AI nutrition CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a meal photo
    Analyze {
        /// Path to the image file
        image: PathBuf,
        /// Note about the photo (e.g. "ate about half")
        #[arg(long)]
        note: Option<String>,
    },
    /// Search food candidates by name
    Search {
        /// Search query
        query: String,
    },
    /// Estimate per-serving nutrition from an ingredient list
    Cost {
        /// Free-text ingredient list
        ingredients: String,
    },
    /// Suggest what to eat next
    Suggest {
        /// Meal slot: breakfast, lunch, dinner, or snack
        #[arg(long, default_value = "dinner")]
        slot: String,
        /// Calories consumed so far today
        #[arg(long, default_value_t = 0.0)]
        consumed: f64,
        /// Daily calorie target
        #[arg(long, default_value_t = 2000.0)]
        target: f64,
    },
    /// Discover recipe ideas for a request
    Recipes {
        /// Free-text request (e.g. "something light with chicken")
        query: String,
    },
    /// Evaluate a day's log from a JSON file
    Evaluate {
        /// Path to a JSON file with the day's log summary
        log: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = FallbackClient::from_env()?;

    match cli.command {
        Commands::Analyze { image, note } => {
            analyze(&client, &image, note.as_deref()).await?;
        }
        Commands::Search { query } => {
            let result = search_food(&client, &query, &[]).await?;
            print_json(&result)?;
        }
        Commands::Cost { ingredients } => {
            let result = cost_recipe(&client, &ingredients).await?;
            print_json(&result)?;
        }
        Commands::Suggest {
            slot,
            consumed,
            target,
        } => {
            let slot = MealSlot::from_str(&slot)
                .with_context(|| format!("unknown meal slot: {slot}"))?;
            let intake = DailyIntake {
                total_calories: consumed,
                target_calories: target,
                ..DailyIntake::default()
            };
            let result = suggest_next_meal(&client, slot, &[], &intake).await;
            print_json(&result)?;
        }
        Commands::Recipes { query } => {
            let result = discover_recipes(&client, &query).await?;
            print_json(&result)?;
        }
        Commands::Evaluate { log } => {
            let raw = std::fs::read_to_string(&log)
                .with_context(|| format!("failed to read {}", log.display()))?;
            let summary: DailyLogSummary =
                serde_json::from_str(&raw).context("failed to parse log summary JSON")?;
            let result = evaluate_daily_log(&client, &summary).await?;
            print_json(&result)?;
        }
    }

    Ok(())
}

async fn analyze(client: &FallbackClient, path: &Path, note: Option<&str>) -> Result<()> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let image = ImageData::new(bytes, mime_type_for(path));

    let result = analyze_meal_image(client, image, note).await;
    print_json(&result)?;

    Ok(())
}

fn mime_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        // JPEG is by far the most common camera output; default to it.
        _ => "image/jpeg",
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
