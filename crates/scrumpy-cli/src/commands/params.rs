use chrono::NaiveDate;
use clap::Subcommand;
use scrumpy_core::{Clock, Config, ParamStore, SystemClock, UserInput};

#[derive(Subcommand)]
pub enum ParamsAction {
    /// Show the parameters for a board (defaults if none are stored)
    Get {
        /// Board identifier, e.g. "2aOkziAO"
        board_id: String,
    },
    /// Store parameters for a board
    Set {
        board_id: String,
        /// Sprint start date (YYYY-MM-DD); weekends move to the next Monday
        #[arg(long)]
        start: NaiveDate,
        /// Sprint length in weekdays
        #[arg(long)]
        duration: u32,
        /// Label marking unplanned work
        #[arg(long, default_value = "")]
        interference: String,
    },
    /// Forget the parameters for a board
    Clear { board_id: String },
    /// List boards with stored parameters
    List,
}

pub fn run(action: ParamsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ParamStore::open()?;

    match action {
        ParamsAction::Get { board_id } => {
            let config = Config::load_or_default();
            let input = store.get_or_default(
                &board_id,
                SystemClock.today(),
                config.sprint.default_duration,
            );
            println!("{}", serde_json::to_string_pretty(&input)?);
        }
        ParamsAction::Set {
            board_id,
            start,
            duration,
            interference,
        } => {
            let input = UserInput::new(start, duration, interference)?;
            store.set(&board_id, input.clone())?;
            println!("{}", serde_json::to_string_pretty(&input)?);
        }
        ParamsAction::Clear { board_id } => {
            if store.remove(&board_id)? {
                println!("cleared {board_id}");
            } else {
                println!("nothing stored for {board_id}");
            }
        }
        ParamsAction::List => {
            for board_id in store.board_ids() {
                println!("{board_id}");
            }
        }
    }
    Ok(())
}
