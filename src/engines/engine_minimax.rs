use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::minimax::{minimax_search, SearchConfig, SearchError};
use crate::utils::long_algebraic::move_to_long_algebraic;

pub struct MinimaxEngine<G = PseudoLegalMoveGenerator, S = MaterialScorer> {
    move_generator: G,
    scorer: S,
    config: SearchConfig,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self::with_parts(
            PseudoLegalMoveGenerator,
            MaterialScorer,
            SearchConfig {
                depth,
                ..SearchConfig::default()
            },
        )
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::with_parts(PseudoLegalMoveGenerator, MaterialScorer, SearchConfig::default())
    }
}

impl<G: MoveGenerator, S: BoardScorer> MinimaxEngine<G, S> {
    pub fn with_parts(move_generator: G, scorer: S, config: SearchConfig) -> Self {
        Self {
            move_generator,
            scorer,
            config,
        }
    }
}

impl<G: MoveGenerator, S: BoardScorer> Engine for MinimaxEngine<G, S> {
    fn name(&self) -> &str {
        "TulipChess Minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let config = SearchConfig {
            depth: params.depth.unwrap_or(self.config.depth),
            ..self.config
        };
        let player = game_state.side_to_move;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string minimax_engine depth {} threads {}",
            config.depth,
            config.threads.max(1)
        ));

        let result = match minimax_search(
            game_state,
            player,
            &self.move_generator,
            &self.scorer,
            config,
        ) {
            Ok(result) => result,
            Err(SearchError::NoLegalMoves(color)) => {
                out.info_lines.push(format!(
                    "info string minimax_engine no_legal_moves {}",
                    color.name()
                ));
                return Ok(out);
            }
            Err(e) => return Err(e.to_string()),
        };

        out.info_lines.push(format!(
            "info string minimax_engine root_moves {} nodes {} exhausted_nodes {}",
            result.root_moves, result.stats.nodes, result.stats.exhausted_nodes
        ));
        out.info_lines.push(format!(
            "info depth {} score cp {} pv {}",
            config.depth,
            result.best_score,
            move_to_long_algebraic(result.best_move)?
        ));
        out.best_move = Some(result.best_move);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;

    #[test]
    fn picks_first_move_on_quiet_start_position() {
        let mut engine = MinimaxEngine::new(1);
        let out = engine
            .choose_move(&GameState::new_game(), &GoParams::default())
            .expect("engine should run");
        assert_eq!(
            out.best_move,
            Some(ChessMove::new(Square::new(0, 6), Square::new(0, 4)))
        );
        assert!(out.info_lines.iter().any(|l| l.contains("root_moves 20")));
    }

    #[test]
    fn go_depth_overrides_configured_depth() {
        let mut engine = MinimaxEngine::new(4);
        let out = engine
            .choose_move(&GameState::new_game(), &GoParams { depth: Some(1) })
            .expect("engine should run");
        assert!(out.info_lines[0].contains("depth 1"));
    }

    #[test]
    fn reports_missing_moves_without_failing() {
        let mut game = GameState::new_empty();
        game.put(Square::new(0, 0), Piece::new(Color::Dark, PieceKind::King));
        let mut engine = MinimaxEngine::new(2);
        let out = engine
            .choose_move(&game, &GoParams::default())
            .expect("engine should report, not fail");
        assert_eq!(out.best_move, None);
        assert!(out.info_lines.iter().any(|l| l.contains("no_legal_moves white")));
    }
}
