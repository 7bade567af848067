//! Reachability checks for positions built outside of play

use super::{
    board::{Board, Cell, Player},
    lines::LineAnalyzer,
};

impl Board {
    /// Check whether this position can arise from legal alternating play
    /// starting from the empty board with X to move.
    pub fn is_reachable(&self) -> bool {
        self.unreachable_reason().is_none()
    }

    /// Like [`Board::is_reachable`], but explains the failure.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnreachablePosition`] describing the first rule
    /// the position breaks.
    pub fn ensure_reachable(&self) -> Result<(), crate::Error> {
        match self.unreachable_reason() {
            None => Ok(()),
            Some(reason) => Err(crate::Error::UnreachablePosition {
                board: self.encode(),
                reason,
            }),
        }
    }

    fn unreachable_reason(&self) -> Option<String> {
        let x_count = self.count(Cell::X);
        let o_count = self.count(Cell::O);

        if !(x_count == o_count || x_count == o_count + 1) {
            return Some(format!(
                "piece counts X={x_count}, O={o_count} (X opens, so X must equal O or lead by one)"
            ));
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return Some("both players cannot have winning lines".to_string());
        }

        // The winner must have made the last move
        if x_wins && x_count != o_count + 1 {
            return Some("X has a line but O moved after it".to_string());
        }
        if o_wins && x_count != o_count {
            return Some("O has a line but X moved after it".to_string());
        }

        // Several lines can only be completed together by one shared move
        for (player, won) in [(Player::X, x_wins), (Player::O, o_wins)] {
            if won && !self.winning_lines_share_cell(player) {
                return Some(format!(
                    "{player} holds winning lines that no single move could complete"
                ));
            }
        }

        None
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(self.cells(), player)
    }

    /// Check if all winning lines for a player share at least one cell.
    /// This is necessary for multiple lines to be formed in a single move.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::completed_lines(self.cells(), player);
        let Some((first, rest)) = lines.split_first() else {
            return true;
        };
        first
            .iter()
            .any(|idx| rest.iter().all(|line| line.contains(idx)))
    }
}
