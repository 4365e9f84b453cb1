//! Computer opponent that picks a uniformly random empty cell.
//!
//! There is no look-ahead and no difficulty level: every empty cell is
//! equally likely. Delays before the move is shown belong to the caller.

use super::types::{Board, Mark};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument, warn};

/// Something that can choose a move for the computer's mark.
pub trait Opponent {
    /// Chooses an empty cell index for `mark`.
    ///
    /// Returns `None` only when the board has no empty cell.
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Option<usize>;
}

/// Uniform random opponent.
#[derive(Debug, Clone)]
pub struct RandomOpponent<R = StdRng> {
    rng: R,
}

impl RandomOpponent<StdRng> {
    /// Seeded opponent; the same seed reproduces the same choices.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Opponent seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for RandomOpponent<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: rand::Rng> Opponent for RandomOpponent<R> {
    #[instrument(skip(self, board))]
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        let empty = board.empty_indices();
        let Some(&index) = empty.choose(&mut self.rng) else {
            warn!(?mark, "Opponent asked to move on a full board");
            return None;
        };
        debug!(?mark, index, candidates = empty.len(), "Opponent chose cell");
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_board_yields_none() {
        let board = Board::parse("XOXXOOOXX").unwrap();
        let mut opponent = RandomOpponent::from_seed(7);
        assert_eq!(opponent.choose_move(&board, Mark::O), None);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomOpponent::from_seed(42);
        let mut b = RandomOpponent::from_seed(42);
        for _ in 0..20 {
            assert_eq!(a.choose_move(&board, Mark::O), b.choose_move(&board, Mark::O));
        }
    }

    #[test]
    fn test_every_empty_cell_reachable() {
        let board = Board::parse("X...O...X").unwrap();
        let mut opponent = RandomOpponent::from_seed(3);
        let mut seen = [false; 9];
        for _ in 0..500 {
            let index = opponent.choose_move(&board, Mark::O).unwrap();
            seen[index] = true;
        }
        assert_eq!(seen, [false, true, true, true, false, true, true, true, false]);
    }
}
