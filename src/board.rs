//! Board storage, move validation, and line accessors.

use crate::error::InvalidMove;
use crate::invariants::{Invariant, MarkBalance};
use crate::position::Position;
use crate::rules;
use crate::types::{Cell, Player, Status};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// A plain value type owning its 9 cells. Mutation flows through
/// [`Board::play`] (or the typed [`Board::play_move`]) and [`Board::reset`];
/// every rejected move leaves the cells untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
    pub const LINES: [[Position; 3]; 8] = [
        // Rows
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [Position::MiddleLeft, Position::Center, Position::MiddleRight],
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
        // Columns
        [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
        [
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ],
        [
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ],
        // Diagonals
        [Position::TopLeft, Position::Center, Position::BottomRight],
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ];

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Sets all 9 cells back to empty, clearing all prior moves.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Attempts to place `symbol`'s mark at the raw index `pos`.
    ///
    /// The mark character is case-insensitive. Checks run in order, each a
    /// distinct [`InvalidMove`] variant, and all of them read state before
    /// any mutation:
    ///
    /// 1. `symbol` is not X or O
    /// 2. `pos` is outside 0-8
    /// 3. the cell is already occupied
    /// 4. the move would break the alternation between players
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: usize, symbol: char) -> Result<(), InvalidMove> {
        let player = Player::from_symbol(symbol).ok_or(InvalidMove::UnknownPlayer(symbol))?;
        let position = Position::from_index(pos).ok_or(InvalidMove::OutOfRange(pos))?;
        self.place(position, player)
    }

    /// Places a mark, with occupancy and turn-balance validation.
    ///
    /// The unrepresentable failures of [`Board::play`] (unknown symbol,
    /// out-of-range index) are already ruled out by the types.
    pub(crate) fn place(&mut self, position: Position, player: Player) -> Result<(), InvalidMove> {
        if !self.is_empty(position) {
            return Err(InvalidMove::Occupied(position));
        }
        // One more mark may not push this player's count past the opponent's.
        if self.count_of(player) > self.count_of(player.opponent()) {
            return Err(InvalidMove::OutOfTurn(player));
        }
        self.cells[position.to_index()] = Cell::Marked(player);
        debug_assert!(MarkBalance::holds(self), "{}", MarkBalance::description());
        Ok(())
    }

    /// Computes the current status from the cells.
    pub fn game_status(&self) -> Status {
        rules::game_status(self)
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at a raw index, `None` if out of range.
    pub fn cell(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Number of cells marked by the given player.
    pub fn count_of(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.player() == Some(player))
            .count()
    }

    /// Checks that the mark counts are consistent with a sequence of
    /// validated moves.
    ///
    /// Always true for boards mutated only through [`Board::play`]; useful
    /// for hosts that deserialize boards from untrusted sources.
    pub fn is_reachable(&self) -> bool {
        MarkBalance::holds(self)
    }

    /// The cells of one winning line, as a computed view.
    pub fn line(&self, line: [Position; 3]) -> [Cell; 3] {
        line.map(|pos| self.get(pos))
    }

    /// Row `r` (0-2): cells at indices {3r, 3r+1, 3r+2}.
    pub fn row(&self, r: usize) -> Option<[Cell; 3]> {
        (r < 3).then(|| self.line(Self::LINES[r]))
    }

    /// Column `c` (0-2): cells at indices {c, c+3, c+6}.
    pub fn col(&self, c: usize) -> Option<[Cell; 3]> {
        (c < 3).then(|| self.line(Self::LINES[3 + c]))
    }

    /// Diagonal `d` (0-1): {0,4,8} then {2,4,6}.
    pub fn diag(&self, d: usize) -> Option<[Cell; 3]> {
        (d < 2).then(|| self.line(Self::LINES[6 + d]))
    }

    /// The 3 rows.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        [
            self.line(Self::LINES[0]),
            self.line(Self::LINES[1]),
            self.line(Self::LINES[2]),
        ]
    }

    /// The 3 columns.
    pub fn cols(&self) -> [[Cell; 3]; 3] {
        [
            self.line(Self::LINES[3]),
            self.line(Self::LINES[4]),
            self.line(Self::LINES[5]),
        ]
    }

    /// The 2 diagonals.
    pub fn diags(&self) -> [[Cell; 3]; 2] {
        [self.line(Self::LINES[6]), self.line(Self::LINES[7])]
    }

    /// All 8 winning lines.
    pub fn lines(&self) -> [[Cell; 3]; 8] {
        Self::LINES.map(|line| self.line(line))
    }

    /// Writes a cell directly, bypassing validation.
    #[cfg(test)]
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..3 {
            if r > 0 {
                writeln!(f)?;
            }
            let [a, b, c] = self.line(Self::LINES[r]);
            write!(f, "{} {} {}", a.glyph(), b.glyph(), c.glyph())?;
        }
        Ok(())
    }
}
