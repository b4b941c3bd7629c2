use super::{Canonical, MoveList, PlayerId, Position};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 3x3 noughts and crosses. Cells are indexed row-major from the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicTacToe {
    cells: [Option<PlayerId>; 9],
    next_player: PlayerId,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self {
            cells: [None; 9],
            next_player: PlayerId::One,
        }
    }
}

impl TicTacToe {
    /// Build a board from a 9-character string of `X` (player one),
    /// `O` (player two) and `.` (empty). Returns `None` on malformed input.
    pub fn from_str_board(board: &str, next_player: PlayerId) -> Option<Self> {
        if board.chars().count() != 9 {
            return None;
        }
        let mut cells = [None; 9];
        for (cell, ch) in cells.iter_mut().zip(board.chars()) {
            *cell = match ch {
                'X' => Some(PlayerId::One),
                'O' => Some(PlayerId::Two),
                '.' => None,
                _ => return None,
            };
        }
        Some(Self { cells, next_player })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        LINES.iter().find_map(|&[a, b, c]| match self.cells[a] {
            Some(p) if self.cells[b] == Some(p) && self.cells[c] == Some(p) => Some(p),
            _ => None,
        })
    }

    fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl Position for TicTacToe {
    /// Cell index
    type Move = usize;

    fn next_player(&self) -> PlayerId {
        self.next_player
    }

    fn legal_moves(&self) -> MoveList<usize> {
        if self.winner().is_some() {
            return MoveList::new();
        }
        (0..9).filter(|&i| self.cells[i].is_none()).collect()
    }

    fn apply_move(&self, mv: &usize) -> Self {
        let mut next = *self;
        next.cells[*mv] = Some(self.next_player);
        next.next_player = self.next_player.opponent();
        next
    }

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    fn outcome(&self) -> f64 {
        match self.winner() {
            Some(PlayerId::One) => 1.0,
            Some(PlayerId::Two) => -1.0,
            None => 0.0,
        }
    }
}

impl Canonical for TicTacToe {
    type Key = u32;

    /// Base-3 board encoding with the player to move in the lowest bit.
    fn canonical_key(&self) -> u32 {
        let board = self.cells.iter().fold(0u32, |acc, cell| {
            acc * 3
                + match cell {
                    None => 0,
                    Some(PlayerId::One) => 1,
                    Some(PlayerId::Two) => 2,
                }
        });
        board * 2 + u32::from(self.next_player == PlayerId::Two)
    }
}
