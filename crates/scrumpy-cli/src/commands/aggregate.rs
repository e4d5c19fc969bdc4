use std::path::PathBuf;

use clap::Args;
use scrumpy_core::{board, RawBoard};

#[derive(Args)]
pub struct AggregateArgs {
    /// Scraped board JSON file
    pub board: PathBuf,
    /// Print the totals annotation of every list instead of the snapshot
    #[arg(long)]
    pub totals: bool,
}

pub fn run(args: AggregateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let raw = RawBoard::load(&args.board)?;

    if args.totals {
        for totals in board::list_totals(&raw) {
            println!("{}{}", totals.title, totals.annotation());
        }
        return Ok(());
    }

    let snapshot = board::aggregate_board(&raw)?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
