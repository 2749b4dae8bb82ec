//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, piece source
//! and scoring. It handles gravity timing, piece movement, rotation, line
//! clears, token rewards and the session lifecycle.
//!
//! The engine does not gate player moves while paused; adapters decide which
//! actions reach it (see the input crate's gate).

use tracing::{debug, info};

use crate::board::Board;
use crate::pieces::{spawn_x, Minos, Shape, SPAWN_Y};
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::{drop_interval_with_floor_ms, score_clear, LevelProgress};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, GameStatus, LockEvent, PieceKind};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Column of the shape matrix's left edge.
    pub x: i8,
    /// Row of the shape matrix's top edge (may be negative).
    pub y: i8,
    pub shape: Shape,
}

impl ActivePiece {
    /// Create a piece of `kind` at its spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::spawn(kind);
        Self {
            kind,
            x: spawn_x(&shape),
            y: SPAWN_Y,
            shape,
        }
    }

    /// Occupied cells relative to the matrix corner.
    pub fn minos(&self) -> Minos {
        self.shape.minos()
    }

    /// Whether the piece fits on `board` at its current position.
    pub fn fits(&self, board: &Board) -> bool {
        board.fits(&self.shape, self.x, self.y)
    }
}

/// Tunables that are not part of the rules proper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Lower bound for the gravity interval. `None` keeps the raw formula,
    /// which reaches zero at level 20.
    pub drop_interval_floor_ms: Option<u32>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S: PieceSource = SimpleRng> {
    board: Board,
    active: Option<ActivePiece>,
    source: S,
    config: EngineConfig,
    status: GameStatus,
    /// Monotonic id for spawned pieces (increments on every spawn attempt that
    /// places a piece, including the one that ends the game).
    piece_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    tokens: u32,
    lines: u32,
    progress: LevelProgress,
    drop_timer_ms: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game drawing pieces from `source`
    pub fn with_source(source: S) -> Self {
        Self::with_config(source, EngineConfig::default())
    }

    pub fn with_config(source: S, config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            active: None,
            source,
            config,
            status: GameStatus::Ready,
            piece_id: 0,
            last_event: None,
            score: 0,
            tokens: 0,
            lines: 0,
            progress: LevelProgress::new(),
            drop_timer_ms: 0,
        }
    }

    /// Start the game and spawn the first piece.
    ///
    /// Only a `Ready` session can be started; returns whether it was.
    pub fn start(&mut self) -> bool {
        if self.status != GameStatus::Ready {
            return false;
        }
        self.status = GameStatus::Running;
        self.spawn_piece();
        true
    }

    /// Discard the current session and begin a fresh running one.
    ///
    /// Accepted from every status. The piece source keeps its position.
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.last_event = None;
        self.score = 0;
        self.tokens = 0;
        self.lines = 0;
        self.progress = LevelProgress::new();
        self.drop_timer_ms = 0;
        self.piece_id = 0;
        self.status = GameStatus::Running;
        info!("session restarted");
        self.spawn_piece();
    }

    /// Pause a running game or resume a paused one.
    ///
    /// Returns false (and does nothing) in any other status.
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Running => {
                self.status = GameStatus::Paused;
                true
            }
            GameStatus::Paused => {
                self.status = GameStatus::Running;
                true
            }
            GameStatus::Ready | GameStatus::GameOver => false,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn started(&self) -> bool {
        self.status != GameStatus::Ready
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tokens(&self) -> u32 {
        self.tokens
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    /// Total lines cleared this session.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn lines_since_level_up(&self) -> u32 {
        self.progress.lines_since_level_up()
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for puzzle setups and tests.
    ///
    /// Writes are not validated against the active piece.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Current gravity interval (may be zero or negative without a floor).
    pub fn drop_interval_ms(&self) -> i64 {
        drop_interval_with_floor_ms(self.level(), self.config.drop_interval_floor_ms)
    }

    /// Gravity accumulator.
    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.status = self.status;
        out.piece_id = self.piece_id;
        out.score = self.score;
        out.tokens = self.tokens;
        out.level = self.level();
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Spawn a new piece from the source.
    ///
    /// If the spawned piece collides the session ends; the piece stays as
    /// `active` so it can still be drawn.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.source.next_piece());
        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        self.drop_timer_ms = 0;

        if !piece.fits(&self.board) {
            self.status = GameStatus::GameOver;
            info!(
                score = self.score,
                tokens = self.tokens,
                level = self.level(),
                lines = self.lines,
                "game over"
            );
            return false;
        }
        true
    }

    /// Whether moves and rotations reach the active piece.
    fn accepts_moves(&self) -> bool {
        matches!(self.status, GameStatus::Running | GameStatus::Paused)
    }

    /// Try to translate the active piece.
    ///
    /// A blocked downward move lands the piece: it is merged, full rows are
    /// cleared and the next piece spawns.
    pub fn attempt_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.accepts_moves() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let (Some(x), Some(y)) = (active.x.checked_add(dx), active.y.checked_add(dy)) else {
            return false;
        };

        if self.board.fits(&active.shape, x, y) {
            self.active = Some(ActivePiece { x, y, ..active });
            return true;
        }

        if dy > 0 {
            self.merge_and_clear();
        }
        false
    }

    /// Rotate the active piece clockwise in place (no kicks).
    pub fn rotate(&mut self) -> bool {
        if !self.accepts_moves() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotated();
        if !self.board.fits(&rotated, active.x, active.y) {
            return false;
        }
        self.active = Some(ActivePiece {
            shape: rotated,
            ..active
        });
        true
    }

    /// Move down one row; locks the piece if it cannot.
    pub fn soft_drop(&mut self) -> bool {
        self.attempt_move(0, 1)
    }

    /// Drop the active piece until it lands, then lock it.
    ///
    /// Returns the number of rows travelled.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.accepts_moves() || self.active.is_none() {
            return 0;
        }
        let mut distance = 0;
        while self.attempt_move(0, 1) {
            distance += 1;
        }
        distance
    }

    /// Dispatch an adapter command. Returns whether it had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.attempt_move(-1, 0),
            GameAction::MoveRight => self.attempt_move(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => {
                let had_piece = self.accepts_moves() && self.active.is_some();
                self.hard_drop();
                had_piece
            }
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Main game tick - advance the gravity accumulator
    ///
    /// Returns whether a gravity step fired. At most one row per call.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if i64::from(self.drop_timer_ms) > self.drop_interval_ms() {
            self.drop_timer_ms = 0;
            self.attempt_move(0, 1);
            return true;
        }
        false
    }

    /// Lock the active piece onto the board, clear rows, score, and spawn.
    fn merge_and_clear(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .merge(&active.shape, active.x, active.y, active.kind);

        let cleared_rows = self.board.clear_full_rows();
        let lines_cleared = cleared_rows.len() as u32;

        let result = score_clear(lines_cleared, &mut self.progress);
        self.lines = self.lines.saturating_add(lines_cleared);
        self.score = self.score.saturating_add(result.points);
        self.tokens = self.tokens.saturating_add(result.tokens);

        debug!(
            kind = active.kind.as_str(),
            lines = lines_cleared,
            points = result.points,
            tokens = result.tokens,
            "piece locked"
        );
        if let Some(level) = result.level_up {
            info!(level, "level up");
        }

        let spawned = self.spawn_piece();

        self.last_event = Some(LockEvent {
            kind: active.kind,
            lines_cleared,
            points: result.points,
            tokens: result.tokens,
            level_up: result.level_up,
            game_over: !spawned,
        });
    }
}
