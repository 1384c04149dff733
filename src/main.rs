//! fizyo - Physiotherapy exercise catalog and set/rep tracker

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fizyo::catalog::{Catalog, PageParams};
use fizyo::exercises::ExerciseRecord;
use fizyo::tui::App;

#[derive(Parser)]
#[command(name = "fizyo")]
#[command(author, version, about = "Physiotherapy exercise catalog and set/rep tracker")]
struct Cli {
    /// Log filter, e.g. "debug" or "fizyo::session=debug" (logs go to stderr)
    #[arg(long, env = "FIZYO_LOG", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog in the TUI
    Tui,

    /// Open the tracker for one exercise
    Track {
        /// Category key (e.g. "diz")
        category: String,
        /// Exercise key (e.g. "kuadriseps-gucendirme")
        exercise: String,
    },

    /// List categories and their exercises
    List,

    /// Print every valid category/exercise pair
    Routes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one exercise
    Show {
        category: String,
        exercise: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::builtin()?;

    match cli.command {
        Some(Commands::Track { category, exercise }) => {
            let mut app = App::open(catalog, &category, &exercise)?;
            app.run()?;
        }

        Some(Commands::List) => {
            for category in catalog.categories() {
                println!("{} ({})", category.title, category.key);
                for (key, record) in category.exercises() {
                    println!(
                        "  {:24} | {:32} | {}x{} | rest {}s",
                        key, record.title, record.sets, record.reps.text, record.rest_time_secs
                    );
                }
            }
        }

        Some(Commands::Routes { json }) => {
            let params: Vec<PageParams> = catalog.page_params().collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&params)?);
            } else {
                for p in &params {
                    println!("{}", p.path());
                }
            }
        }

        Some(Commands::Show { category, exercise, json }) => {
            let record = catalog.resolve(&category, &exercise)?;
            if json {
                println!("{}", serde_json::to_string_pretty(record)?);
            } else {
                print_record(record);
            }
        }

        Some(Commands::Tui) | None => {
            let mut app = App::new(catalog);
            app.run()?;
        }
    }

    Ok(())
}

fn print_record(record: &ExerciseRecord) {
    println!("{}", record.title);
    println!("{:-<60}", "");
    println!("{} | {}", record.difficulty, record.equipment);
    println!();
    println!("{}", record.description);
    println!();
    println!("Talimatlar:");
    for (i, step) in record.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!();
    println!(
        "Set: {} | Rep: {} | Dinlenme: {}s",
        record.sets, record.reps.text, record.rest_time_secs
    );
    println!("Hedef kaslar: {}", record.target_muscles.join(", "));
    println!("Uyarılar:");
    for warning in record.warnings {
        println!("  - {}", warning);
    }
}
