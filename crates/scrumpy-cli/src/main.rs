use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "scrumpy", version, about = "Sprint statistics for kanban boards")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a scraped board into a snapshot
    Aggregate(commands::aggregate::AggregateArgs),
    /// Burndown, velocity and problems for a sprint
    Stats(commands::stats::StatsArgs),
    /// Stored sprint parameters per board
    Params {
        #[command(subcommand)]
        action: commands::params::ParamsAction,
    },
    /// Parse a single card title
    Parse {
        /// Card title, e.g. "Fix login (4) {3}"
        title: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Re-aggregate a board file on the polling schedule
    Watch(commands::watch::WatchArgs),
}

fn main() {
    logging::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Aggregate(args) => commands::aggregate::run(args),
        Commands::Stats(args) => commands::stats::run(args),
        Commands::Params { action } => commands::params::run(action),
        Commands::Parse { title } => commands::parse::run(&title),
        Commands::Config { action } => commands::config::run(action),
        Commands::Watch(args) => commands::watch::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
