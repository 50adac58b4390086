//! Engine module - the piece lifecycle state machine
//!
//! Ties together the board, the shape catalog, the RNG and the score. One
//! piece is active at a time:
//!
//! ```text
//! spawn ──► falling ──(blocked below)──► freeze ──► clear lines ──► spawn
//!   │
//!   └──(spawn position blocked)──► game over (terminal)
//! ```
//!
//! Every mutator checks the game-over flag first, so once the game is over
//! the engine is frozen in place for the renderer to read.

use tracing::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::grid::Mask;
use crate::pieces::{self, ShapeCatalog};
use crate::rng::SimpleRng;
use crate::scoring::{line_clear_points, Score};
use crate::types::{Intent, PieceKind};

/// The falling piece.
///
/// `mask` is the current orientation, which may differ from the catalog
/// template after rotations. `(x, y)` is the top-left anchor of the mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub mask: Mask,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    /// Absolute board coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.mask
            .occupied()
            .map(move |(dx, dy)| (self.x + dx as i32, self.y + dy as i32))
    }
}

/// Externally visible engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A piece is falling and input is accepted.
    Falling,
    /// A new piece could not be placed. Terminal.
    GameOver,
}

/// Summary of the most recent freeze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreezeEvent {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
    pub lines_cleared: usize,
}

/// A single game session.
#[derive(Debug, Clone)]
pub struct Engine {
    config: GameConfig,
    board: Board,
    catalog: ShapeCatalog,
    rng: SimpleRng,
    active: ActivePiece,
    score: Score,
    phase: Phase,
    pieces_spawned: u32,
    lines_cleared: u32,
    last_event: Option<FreezeEvent>,
}

impl Engine {
    /// Start a game with the standard seven-piece catalog.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::with_catalog(config, ShapeCatalog::standard(), seed)
    }

    /// Start a game drawing from a custom catalog.
    ///
    /// The board starts empty and the first piece is spawned immediately. A
    /// board too small for that piece yields an engine that is already over.
    pub fn with_catalog(
        config: GameConfig,
        catalog: ShapeCatalog,
        seed: u32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let board = Board::new(config.width as usize, config.height as usize);
        let mut rng = SimpleRng::new(seed);
        let active = draw_piece(&catalog, &mut rng, board.width());

        let mut engine = Self {
            config,
            board,
            catalog,
            rng,
            active,
            score: Score::new(),
            phase: Phase::Falling,
            pieces_spawned: 0,
            lines_cleared: 0,
            last_event: None,
        };
        engine.settle_spawn();
        Ok(engine)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for drivers and scripted setups.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score.get()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Pieces successfully placed at the spawn position so far.
    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Total rows cleared this game.
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Take and clear the last freeze event.
    pub fn take_last_event(&mut self) -> Option<FreezeEvent> {
        self.last_event.take()
    }

    /// Replace the active piece with a random catalog shape at the spawn
    /// position, ending the game if that position is blocked.
    pub fn spawn(&mut self) {
        if self.game_over() {
            return;
        }
        self.active = draw_piece(&self.catalog, &mut self.rng, self.board.width());
        self.settle_spawn();
    }

    fn settle_spawn(&mut self) {
        let piece = &self.active;
        if self.board.collides(piece.x, piece.y, &piece.mask) {
            self.phase = Phase::GameOver;
            info!(
                kind = piece.kind.letter(),
                score = self.score.get(),
                pieces = self.pieces_spawned,
                "spawn blocked, game over"
            );
            return;
        }

        self.phase = Phase::Falling;
        self.pieces_spawned = self.pieces_spawned.saturating_add(1);
        debug!(kind = piece.kind.letter(), x = piece.x, y = piece.y, "spawned piece");
    }

    /// Try to move the active piece by (dx, dy).
    ///
    /// Returns false and leaves everything untouched if the target position
    /// collides. That is the normal outcome against a wall or the floor. A
    /// delta that overflows the anchor is rejected the same way.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_over() {
            return false;
        }

        let (Some(x), Some(y)) = (
            self.active.x.checked_add(dx),
            self.active.y.checked_add(dy),
        ) else {
            return false;
        };
        if self.board.collides(x, y, &self.active.mask) {
            return false;
        }

        self.active.x = x;
        self.active.y = y;
        true
    }

    /// Rotate the active piece clockwise in place.
    ///
    /// The rotated mask is tested at the current anchor only; if it collides
    /// the rotation is dropped. Returns whether the rotation was applied.
    pub fn rotate(&mut self) -> bool {
        if self.game_over() {
            return false;
        }

        let rotated = pieces::rotate(&self.active.mask);
        if self.board.collides(self.active.x, self.active.y, &rotated) {
            return false;
        }

        self.active.mask = rotated;
        true
    }

    /// Move down one row, or freeze the piece and spawn the next one if it
    /// cannot fall any further.
    pub fn soft_drop(&mut self) {
        if self.game_over() {
            return;
        }
        if !self.try_move(0, 1) {
            self.freeze_active();
        }
    }

    /// Freeze the active piece, clear lines, score them and respawn.
    fn freeze_active(&mut self) {
        let ActivePiece { kind, ref mask, x, y } = self.active;
        self.board.freeze(x, y, mask, kind);

        let lines = self.board.clear_full_lines();
        self.score.add(line_clear_points(lines));
        self.lines_cleared = self
            .lines_cleared
            .saturating_add(u32::try_from(lines).unwrap_or(u32::MAX));

        self.last_event = Some(FreezeEvent {
            kind,
            x,
            y,
            lines_cleared: lines,
        });
        debug!(
            kind = kind.letter(),
            x,
            y,
            lines,
            score = self.score.get(),
            "froze piece"
        );

        self.spawn();
    }

    /// Gravity step, driven by the external timer.
    pub fn tick(&mut self) {
        if self.game_over() {
            return;
        }
        self.soft_drop();
    }

    /// Apply a player intent.
    pub fn handle_input(&mut self, intent: Intent) {
        if self.game_over() {
            return;
        }
        match intent {
            Intent::MoveLeft => {
                self.try_move(-1, 0);
            }
            Intent::MoveRight => {
                self.try_move(1, 0);
            }
            Intent::SoftDrop => self.soft_drop(),
            Intent::Rotate => {
                self.rotate();
            }
        }
    }
}

/// Pick a catalog shape uniformly and anchor it at the top center.
///
/// `x = board_width / 2 - mask_width / 2` with truncating division, so odd
/// widths sit one cell left of true center.
fn draw_piece(catalog: &ShapeCatalog, rng: &mut SimpleRng, board_width: usize) -> ActivePiece {
    let shapes = catalog.shapes();
    let shape = &shapes[rng.next_index(shapes.len())];
    let x = board_width as i32 / 2 - shape.mask.width() as i32 / 2;
    ActivePiece {
        kind: shape.kind,
        mask: shape.mask.clone(),
        x,
        y: 0,
    }
}
