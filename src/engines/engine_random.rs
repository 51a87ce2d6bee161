//! Random-move engine.
//!
//! Picks uniformly among pseudo-legal moves. Used for diagnostics and as a
//! sparring partner in the match harness.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};

pub struct RandomEngine {
    move_generator: PseudoLegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: PseudoLegalMoveGenerator,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            move_generator: PseudoLegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "TulipChess Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let moves = self
            .move_generator
            .generate_moves(game_state, game_state.side_to_move);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            moves.len()
        ));

        if let Some(depth) = params.depth {
            out.info_lines.push(format!(
                "info string random_engine requested_depth {}",
                depth
            ));
        }

        out.best_move = moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::is_pseudo_legal;

    #[test]
    fn seeded_engine_is_reproducible_and_legal() {
        let game = GameState::new_game();
        let mut a = RandomEngine::seeded(7);
        let mut b = RandomEngine::seeded(7);

        for _ in 0..5 {
            let ma = a.choose_move(&game, &GoParams::default()).expect("engine should run");
            let mb = b.choose_move(&game, &GoParams::default()).expect("engine should run");
            assert_eq!(ma.best_move, mb.best_move);
            let mv = ma.best_move.expect("start position has moves");
            assert!(is_pseudo_legal(&game, mv, game.side_to_move));
        }
    }

    #[test]
    fn no_moves_means_no_choice() {
        let game = GameState::new_empty();
        let out = RandomEngine::seeded(1)
            .choose_move(&game, &GoParams::default())
            .expect("engine should run");
        assert_eq!(out.best_move, None);
    }
}
