//! YAML configuration for the command-line driver.
//!
//! Every field is optional; missing fields fall back to the defaults below.
//!
//! ```yaml
//! placement: "8/8/3r1p2/P7/8/2BP4/8/8"
//! log_level: debug
//! probe_seed: 7
//! probe_count: 256
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::BoardError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::SCENARIO_PLACEMENT;
use crate::utils::placement_parser::parse_placement;

pub const CONFIG_PATH_ENV: &str = "CHESS_PATH_CONFIG";
pub const LOG_LEVEL_ENV: &str = "CHESS_PATH_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Starting position as a placement string.
    pub placement: String,
    pub log_level: String,
    pub probe_seed: u64,
    pub probe_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placement: SCENARIO_PLACEMENT.to_owned(),
            log_level: "info".to_owned(),
            probe_seed: 0,
            probe_count: 64,
        }
    }
}

impl Config {
    /// Load from `path`, or defaults when no path is given or the file is absent.
    pub fn load(path: Option<&Path>) -> Result<Self, BoardError> {
        match path {
            Some(p) if p.exists() => {
                let content = fs::read_to_string(p)
                    .map_err(|e| BoardError::Config(format!("{}: {e}", p.display())))?;
                Self::from_yaml(&content)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, BoardError> {
        serde_yaml::from_str(content).map_err(|e| BoardError::Config(e.to_string()))
    }

    /// The board described by `placement`.
    pub fn board(&self) -> Result<Board, BoardError> {
        parse_placement(&self.placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::scenario_board;

    #[test]
    fn defaults_describe_the_scenario_board() {
        let config = Config::default();
        assert_eq!(
            config.board().expect("default placement should parse"),
            scenario_board().expect("scenario should build")
        );
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("probe_seed: 9\nlog_level: debug\n").expect("yaml should parse");
        assert_eq!(config.probe_seed, 9);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.placement, SCENARIO_PLACEMENT);
        assert_eq!(config.probe_count, 64);
    }

    #[test]
    fn malformed_yaml_is_a_config_error() {
        assert!(matches!(
            Config::from_yaml("probe_seed: [1, 2"),
            Err(BoardError::Config(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/chess_path.yaml")))
            .expect("absent file should give defaults");
        assert_eq!(config, Config::default());
        assert_eq!(Config::load(None).expect("no path gives defaults"), Config::default());
    }

    #[test]
    fn bad_placement_surfaces_on_board() {
        let config = Config::from_yaml("placement: \"8/8\"").expect("yaml should parse");
        assert!(matches!(config.board(), Err(BoardError::InvalidPlacement(_))));
    }
}
