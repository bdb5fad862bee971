//! WASM bindings for frontend match replay

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{calculate_match_count, play_match, Scoreboard, StrategyKind, Tournament, TournamentConfig};

/// Replay a match between two fresh strategies
///
/// # Arguments
/// * `strategy_a` - Strategy name for player A
/// * `strategy_b` - Strategy name for player B
/// * `rounds` - Number of rounds to play
///
/// # Returns
/// JSON serialized MatchResult
#[wasm_bindgen]
pub fn replay_match(strategy_a: &str, strategy_b: &str, rounds: u32) -> Result<JsValue, JsError> {
    let kind_a: StrategyKind = strategy_a
        .parse()
        .map_err(|e| JsError::new(&format!("Invalid strategy A: {}", e)))?;
    let kind_b: StrategyKind = strategy_b
        .parse()
        .map_err(|e| JsError::new(&format!("Invalid strategy B: {}", e)))?;

    let mut a = kind_a.build();
    let mut b = kind_b.build();
    let mut scoreboard = Scoreboard::new();
    let result = play_match(a.as_mut(), b.as_mut(), rounds, &mut scoreboard);

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Run a full tournament
///
/// # Arguments
/// * `config_json` - JSON serialized TournamentConfig; missing fields take defaults
///
/// # Returns
/// JSON serialized TournamentReport
#[wasm_bindgen]
pub fn run_tournament(config_json: &str) -> Result<JsValue, JsError> {
    let config: TournamentConfig = serde_json::from_str(config_json)
        .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?;

    let report = Tournament::new(config)
        .run()
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&report)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(serde::Serialize)]
struct StrategyInfo {
    id: StrategyKind,
    name: &'static str,
    description: &'static str,
}

/// Get all available strategies
#[wasm_bindgen]
pub fn get_strategy_types() -> Result<JsValue, JsError> {
    let types: Vec<StrategyInfo> = StrategyKind::ALL
        .into_iter()
        .map(|kind| StrategyInfo {
            id: kind,
            name: kind.name(),
            description: kind.describe(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&types)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Get human-readable description of a strategy
#[wasm_bindgen]
pub fn get_strategy_description(strategy: &str) -> Result<String, JsError> {
    let kind: StrategyKind = strategy
        .parse()
        .map_err(|e| JsError::new(&format!("Invalid strategy: {}", e)))?;
    Ok(kind.describe().to_string())
}

/// Get total match count for a round-robin over `participant_count` players
#[wasm_bindgen]
pub fn get_match_count(participant_count: u32) -> u32 {
    calculate_match_count(participant_count as usize) as u32
}
