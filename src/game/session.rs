use crate::ai::MinimaxAgent;
use crate::error::MoveError;

use super::board::{Board, GameOutcome};
use super::moves;
use super::player::{Player, SideControl};

/// Session-level settings, loadable from the `[session]` config table.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// The side the search engine plays.
    pub automated_side: Player,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            automated_side: Player::Yellow,
        }
    }
}

/// Outcome of one committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub column: usize,
    pub row: usize,
    pub outcome: GameOutcome,
}

/// One game between two sides, human- or engine-controlled.
///
/// Sequences the turns, commits every move through the move applier, and
/// queries the board for a terminal state after each commit. The engine
/// never touches the session board directly: it searches its own copy and
/// hands back a column.
pub struct GameSession {
    board: Board,
    current: Player,
    controls: [SideControl; 2],
    engines: [Option<MinimaxAgent>; 2],
    outcome: GameOutcome,
}

fn index(side: Player) -> usize {
    match side {
        Player::Red => 0,
        Player::Yellow => 1,
    }
}

impl GameSession {
    /// Start a fresh game. Red moves first.
    pub fn new(red: SideControl, yellow: SideControl) -> Self {
        let controls = [red, yellow];
        let engines = controls.map(|control| match control {
            SideControl::Automated { depth } => Some(MinimaxAgent::new(depth)),
            SideControl::Human => None,
        });
        GameSession {
            board: Board::new(),
            current: Player::Red,
            controls,
            engines,
            outcome: GameOutcome::Ongoing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome != GameOutcome::Ongoing
    }

    pub fn control(&self, side: Player) -> SideControl {
        self.controls[index(side)]
    }

    /// Whether the side to move is engine-controlled.
    pub fn is_automated_turn(&self) -> bool {
        self.control(self.current).is_automated()
    }

    /// Play a human-chosen column for the side to move.
    ///
    /// A rejected move (illegal column, wrong turn, finished game) leaves
    /// the board and the turn order untouched.
    pub fn human_move(&mut self, column: usize) -> Result<MoveResult, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.control(self.current).is_automated() {
            return Err(MoveError::OutOfTurn(self.current));
        }
        self.commit(column)
    }

    /// Ask the engine for a column and play it for the side to move.
    pub fn automated_move(&mut self) -> Result<MoveResult, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let side = self.current;
        let engine = match self.engines[index(side)].as_mut() {
            Some(engine) => engine,
            None => return Err(MoveError::OutOfTurn(side)),
        };
        let column = engine.take_turn(&self.board, side);
        self.commit(column)
    }

    /// Clear the board for a new game on the same session.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current = Player::Red;
        self.outcome = GameOutcome::Ongoing;
    }

    fn commit(&mut self, column: usize) -> Result<MoveResult, MoveError> {
        let side = self.current;
        let row = moves::apply(&mut self.board, column, side)?;
        self.outcome = self.board.winner();
        self.current = side.other();
        Ok(MoveResult {
            column,
            row,
            outcome: self.outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::COLS;

    fn human_vs_human() -> GameSession {
        GameSession::new(SideControl::Human, SideControl::Human)
    }

    #[test]
    fn test_initial_state() {
        let session = human_vs_human();
        assert_eq!(session.current_player(), Player::Red);
        assert_eq!(session.outcome(), GameOutcome::Ongoing);
        assert!(!session.is_terminal());
        assert_eq!(session.board().tokens(), 0);
    }

    #[test]
    fn test_human_move_advances_turn() {
        let mut session = human_vs_human();
        let result = session.human_move(3).unwrap();
        assert_eq!(result, MoveResult { column: 3, row: 5, outcome: GameOutcome::Ongoing });
        assert_eq!(session.current_player(), Player::Yellow);
        assert_eq!(session.board().get(5, 3), Player::Red.to_cell());
    }

    #[test]
    fn test_rejected_move_leaves_state_untouched() {
        let mut session = human_vs_human();
        session.human_move(0).unwrap();
        let board_before = *session.board();

        assert_eq!(session.human_move(COLS), Err(MoveError::InvalidColumn(COLS)));
        assert_eq!(session.current_player(), Player::Yellow);
        assert_eq!(*session.board(), board_before);
    }

    #[test]
    fn test_full_column_rejected_without_turn_change() {
        let mut session = human_vs_human();
        for _ in 0..3 {
            session.human_move(2).unwrap();
            session.human_move(2).unwrap();
        }
        assert_eq!(session.human_move(2), Err(MoveError::ColumnFull(2)));
        assert_eq!(session.current_player(), Player::Red);
    }

    #[test]
    fn test_out_of_turn_rejections() {
        let mut session =
            GameSession::new(SideControl::Human, SideControl::Automated { depth: 2 });
        // Yellow is engine-controlled, so a human column is rejected there.
        session.human_move(0).unwrap();
        assert_eq!(session.human_move(1), Err(MoveError::OutOfTurn(Player::Yellow)));
        session.automated_move().unwrap();
        // And the engine cannot move for the human side.
        assert_eq!(session.automated_move(), Err(MoveError::OutOfTurn(Player::Red)));
    }

    #[test]
    fn test_win_reported_and_game_locked() {
        let mut session = human_vs_human();
        // Red builds the bottom row 0..=3, Yellow stacks on top.
        for column in 0..3 {
            session.human_move(column).unwrap();
            session.human_move(column).unwrap();
        }
        let result = session.human_move(3).unwrap();
        assert_eq!(result.outcome, GameOutcome::Win(Player::Red));
        assert_eq!(session.outcome(), GameOutcome::Win(Player::Red));
        assert!(session.is_terminal());
        assert_eq!(session.human_move(4), Err(MoveError::GameOver));
        assert_eq!(session.automated_move(), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw_reported() {
        let mut session = human_vs_human();
        // Fills the board with alternating colors, center column inverted;
        // no four-in-a-row exists at any point of the sequence.
        let columns = [
            0, 0, 0, 0, 0, 0,
            1, 1, 1, 1, 1, 1,
            2, 2, 2, 2, 2, 2,
            4, 3, 3, 4, 4, 3, 3, 4, 4, 3, 3, 4,
            5, 5, 5, 5, 5, 5,
            6, 6, 6, 6, 6, 6,
        ];
        let mut last = None;
        for column in columns {
            last = Some(session.human_move(column).unwrap());
        }
        assert_eq!(last.unwrap().outcome, GameOutcome::Draw);
        assert_eq!(session.outcome(), GameOutcome::Draw);
    }

    #[test]
    fn test_automated_move_commits_through_session() {
        let mut session =
            GameSession::new(SideControl::Human, SideControl::Automated { depth: 3 });
        session.human_move(3).unwrap();
        let result = session.automated_move().unwrap();
        assert!(result.column < COLS);
        assert_eq!(result.outcome, GameOutcome::Ongoing);
        assert_eq!(session.current_player(), Player::Red);
        assert_eq!(session.board().tokens(), 2);
    }

    #[test]
    fn test_engine_vs_engine_session_finishes() {
        let mut session = GameSession::new(
            SideControl::Automated { depth: 3 },
            SideControl::Automated { depth: 3 },
        );
        while !session.is_terminal() {
            session.automated_move().unwrap();
        }
        assert_ne!(session.outcome(), GameOutcome::Ongoing);
    }

    #[test]
    fn test_reset_clears_the_game() {
        let mut session = human_vs_human();
        for column in 0..3 {
            session.human_move(column).unwrap();
            session.human_move(column).unwrap();
        }
        session.human_move(3).unwrap();
        assert!(session.is_terminal());

        session.reset();
        assert_eq!(session.current_player(), Player::Red);
        assert_eq!(session.outcome(), GameOutcome::Ongoing);
        assert_eq!(session.board().tokens(), 0);
    }

    #[test]
    fn test_default_session_config() {
        assert_eq!(SessionConfig::default().automated_side, Player::Yellow);
    }
}
