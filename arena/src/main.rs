mod config;
mod series;

use clap::Parser;
use connect_four_common::{log, logger};

use config::{get_config_manager, Validate, DEFAULT_CONFIG_FILE};
use series::run_series;

#[derive(Parser)]
#[command(name = "connect_four_arena")]
struct Args {
    /// YAML file with board and series settings
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Number of games, overrides the config file
    #[arg(long)]
    games: Option<u32>,

    /// Master RNG seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    show_boards: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Arena".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(&args.config).get_config()?;
    if let Some(games) = args.games {
        config.series.games = games;
    }
    if args.seed.is_some() {
        config.series.seed = args.seed;
    }
    if args.show_boards {
        config.series.show_boards = true;
    }
    config
        .validate()
        .map_err(|e| format!("Invalid arena settings: {}", e))?;

    let result = run_series(&config)?;

    log!("Series finished: {} games, seed {}", result.stats.games(), result.seed);
    for (name, record) in result.stats.iter() {
        log!(
            "{}: {} wins, {} losses, {} draws, {} forfeits ({:.1}% wins)",
            name,
            record.wins,
            record.losses,
            record.draws,
            record.forfeits,
            record.win_rate() * 100.0
        );
    }

    Ok(())
}
