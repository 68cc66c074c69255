use crate::movegen::{GenMode, MoveList, generate_moves};
use crate::{board::Board, error::BoardError};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
///
/// Promotions are always to a queen, so totals agree with the published
/// tables only at depths where no promotion occurs.
pub fn perft(board: &mut Board, depth: u8) -> Result<u64, BoardError> {
    fn inner(board: &mut Board, depth: u8, layers: &mut [MoveList]) -> Result<u64, BoardError> {
        if depth == 0 {
            return Ok(1);
        }
        let Some((list, rest)) = layers.split_first_mut() else {
            return Ok(1);
        };

        let mover = board.side_to_move();
        generate_moves(board, mover, GenMode::All, list);

        let mut nodes = 0u64;
        for mv in list.ordered() {
            board.apply(mv)?;
            if !board.in_check(mover) {
                nodes += inner(board, depth - 1, rest)?;
            }
            board.undo(mv)?;
        }
        Ok(nodes)
    }

    let mut layers = vec![MoveList::new(); depth as usize];
    inner(board, depth, &mut layers[..])
}
