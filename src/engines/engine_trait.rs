//! Engine abstraction layer used by the console game and the match harness.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth when set.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

/// Engines move for `game_state.side_to_move`.
pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
