//! Game session - the spawn, fall, lock, clear cycle
//!
//! The session owns the board and the current/next pieces, consumes discrete
//! commands, and advances gravity from injected elapsed time. Every move is
//! speculative: mutate the piece, validate against the board, roll back on
//! rejection. Within one step the order is fixed: pending commands first,
//! then gravity.

use crate::core::board::Board;
use crate::core::catalog::ShapeCatalog;
use crate::core::config::{ConfigError, GameConfig};
use crate::core::piece::Piece;
use crate::core::rng::ShapeSource;
use crate::core::snapshot::{PieceSnapshot, SessionSnapshot};
use crate::types::{Command, PieceKind, SessionState, SPAWN_ROW};

/// One game: board, falling piece, next piece, timers, and state
#[derive(Debug)]
pub struct GameSession<S: ShapeSource> {
    config: GameConfig,
    catalog: ShapeCatalog,
    board: Board,
    current: Piece,
    next: Piece,
    shapes: S,
    fall_timer_ms: u32,
    lines_cleared: u32,
    state: SessionState,
    running: bool,
}

impl<S: ShapeSource> GameSession<S> {
    /// Build a session, validating configuration and catalog up front.
    /// The shape source is consulted twice for the initial current/next pair.
    pub fn new(
        config: GameConfig,
        catalog: ShapeCatalog,
        mut shapes: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if let Some(def) = catalog.shapes().iter().find(|def| def.rotations.is_empty()) {
            return Err(ConfigError::NoRotations { kind: def.kind });
        }

        let spawn_x = config.spawn_x();
        let current = Piece::new(shapes.next_shape(&catalog), spawn_x, SPAWN_ROW);
        let next = Piece::new(shapes.next_shape(&catalog), spawn_x, SPAWN_ROW);

        let mut session = Self {
            config,
            catalog,
            board: Board::new(config.board_width, config.board_height),
            current,
            next,
            shapes,
            fall_timer_ms: 0,
            lines_cleared: 0,
            state: SessionState::Falling,
            running: true,
        };
        session.detect_game_over();
        Ok(session)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the session still consumes ticks and commands
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scenario setup in tests and tools
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next.kind()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Apply one command. Movement is speculative with rollback; quit stops
    /// the session at the command boundary with committed state intact.
    /// Returns whether the command changed anything.
    pub fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => {
                self.running = false;
                true
            }
            _ if !self.running => false,
            Command::MoveLeft => self.try_translate(-1, 0),
            Command::MoveRight => self.try_translate(1, 0),
            Command::SoftDrop => self.try_translate(0, 1),
            Command::Rotate => self.try_rotate(),
        }
    }

    /// Advance time. When the accumulated elapsed time crosses the fall
    /// threshold the timer resets and the piece descends one row; a blocked
    /// descent locks the piece, unless it is still stuck at the very top
    /// (y <= 0), in which case the descended position stands and the loss
    /// predicate catches the stack at the next lock.
    /// Returns true when the threshold fired.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        if !self.running {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(dt_ms);
        if self.fall_timer_ms < self.config.fall_interval_ms {
            return false;
        }
        self.fall_timer_ms = 0;

        self.current.translate(0, 1);
        if !self.board.validate(&self.current) && self.current.y() > 0 {
            self.current.translate(0, -1);
            self.lock_current();
        }
        true
    }

    /// One full step: pending commands in arrival order, then gravity
    pub fn step(&mut self, dt_ms: u32, commands: &[Command]) -> bool {
        for &command in commands {
            self.handle_command(command);
        }
        self.tick(dt_ms)
    }

    /// Merge the current piece into the board, clear full rows, then promote
    /// the next piece and draw a fresh one from the shape source
    pub fn lock_current(&mut self) {
        self.board.lock(&self.current);
        self.lines_cleared += self.board.clear_full_rows();
        self.spawn_next();
    }

    fn spawn_next(&mut self) {
        let fresh = Piece::new(
            self.shapes.next_shape(&self.catalog),
            self.config.spawn_x(),
            SPAWN_ROW,
        );
        self.current = std::mem::replace(&mut self.next, fresh);
        self.detect_game_over();
    }

    /// Game over when the fresh spawn is already blocked or the stack has
    /// reached the spawn buffer; no tick is needed for either
    fn detect_game_over(&mut self) {
        if !self.board.validate(&self.current) || self.board.stack_reached_top() {
            self.state = SessionState::GameOver;
            self.running = false;
        }
    }

    fn try_translate(&mut self, dx: i8, dy: i8) -> bool {
        self.current.translate(dx, dy);
        if self.board.validate(&self.current) {
            return true;
        }
        self.current.translate(-dx, -dy);
        false
    }

    fn try_rotate(&mut self) -> bool {
        self.current.rotate_next();
        if self.board.validate(&self.current) {
            return true;
        }
        self.current.rotate_back();
        false
    }

    /// Fill a reusable snapshot without reallocating its map
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board_cells.clear();
        for (&key, &color) in self.board.cells() {
            out.board_cells.insert(key, color);
        }
        out.current = Some(PieceSnapshot::from(&self.current));
        out.next_kind = Some(self.next.kind());
        out.lines_cleared = self.lines_cleared;
        out.state = self.state;
        out.running = self.running;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut out = SessionSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
