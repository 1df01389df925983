use connect_four_common::games::SessionRng;
use connect_four_common::games::connect_four::{
    play_match, Agent, Board, Color, DefensiveAgent, MatchReport, RandomAgent, SeriesStats,
    DEFENSIVE_AGENT_NAME, RANDOM_AGENT_NAME,
};
use connect_four_common::log;

use crate::config::ArenaConfig;

pub struct SeriesResult {
    pub seed: u64,
    pub stats: SeriesStats,
}

/// Plays the configured number of games between the defensive agent and the
/// random baseline. Every agent gets a seed drawn from one master generator,
/// so a run is reproducible from `SeriesResult::seed`.
pub fn run_series(config: &ArenaConfig) -> Result<SeriesResult, String> {
    let mut master = match config.series.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let seed = master.seed();
    let mut stats = SeriesStats::default();

    log!(
        "Starting series of {} games on a {}x{} board, seed {}",
        config.series.games,
        config.board.columns,
        config.board.rows,
        seed
    );

    for game in 0..config.series.games {
        let defender_is_red = !config.series.alternate_colors || game % 2 == 0;
        let (report, board, red_name, yellow_name) =
            play_game(config, defender_is_red, &mut master)?;

        log!(
            "Game {}/{}: {} (Red) vs {} (Yellow): {} after {} moves",
            game + 1,
            config.series.games,
            red_name,
            yellow_name,
            report.outcome,
            report.moves
        );
        if config.series.show_boards {
            log!("Final board:\n{}", board);
        }

        stats.record(red_name, yellow_name, &report.outcome);
    }

    Ok(SeriesResult { seed, stats })
}

fn play_game(
    config: &ArenaConfig,
    defender_is_red: bool,
    master: &mut SessionRng,
) -> Result<(MatchReport, Board, &'static str, &'static str), String> {
    let board = Board::new(config.board.columns, config.board.rows).into_handle();
    let random_color = if defender_is_red { Color::Yellow } else { Color::Red };

    let mut defender = DefensiveAgent::with_seed(board.clone(), defender_is_red, master.next_seed());
    let mut random = RandomAgent::new(board.clone(), random_color, SessionRng::new(master.next_seed()));

    let (red, yellow, red_name, yellow_name): (&mut dyn Agent, &mut dyn Agent, _, _) = if defender_is_red {
        (&mut defender, &mut random, DEFENSIVE_AGENT_NAME, RANDOM_AGENT_NAME)
    } else {
        (&mut random, &mut defender, RANDOM_AGENT_NAME, DEFENSIVE_AGENT_NAME)
    };

    let report = play_match(&board, red, yellow)?;
    let final_board = board.borrow().clone();
    Ok((report, final_board, red_name, yellow_name))
}
