pub(crate) use connect_four_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use connect_four_common::config::check_range;
use connect_four_common::games::connect_four::{STANDARD_COLUMNS, STANDARD_ROWS};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "connect_four_arena.yaml";

pub const MIN_BOARD_SIZE: usize = 4;
pub const MAX_BOARD_SIZE: usize = 20;
pub const MAX_GAMES: u32 = 100_000;

pub fn get_config_manager(path: &str) -> ConfigManager<FileContentConfigProvider, ArenaConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ArenaConfig {
    pub board: BoardConfig,
    pub series: SeriesConfig,
}

impl Validate for ArenaConfig {
    fn validate(&self) -> Result<(), String> {
        self.board.validate()?;
        self.series.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BoardConfig {
    pub columns: usize,
    pub rows: usize,
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), String> {
        check_range("columns", self.columns, MIN_BOARD_SIZE, MAX_BOARD_SIZE)?;
        check_range("rows", self.rows, MIN_BOARD_SIZE, MAX_BOARD_SIZE)?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SeriesConfig {
    pub games: u32,
    /// Fixed master seed; a fresh one is drawn per run when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Swap colors every game so the defender plays both sides.
    pub alternate_colors: bool,
    #[serde(default)]
    pub show_boards: bool,
}

impl Validate for SeriesConfig {
    fn validate(&self) -> Result<(), String> {
        check_range("games", self.games, 1, MAX_GAMES)
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig {
                columns: STANDARD_COLUMNS,
                rows: STANDARD_ROWS,
            },
            series: SeriesConfig {
                games: 100,
                seed: None,
                alternate_colors: true,
                show_boards: false,
            },
        }
    }
}
