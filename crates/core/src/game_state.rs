//! Game state module - the gravity and lock controller
//!
//! `GameState` owns the board, the active and next pieces, the drop timer and the
//! score. Every other core component is a pure function it calls with borrowed
//! snapshots. The host calls [`GameState::tick`] once per frame with the elapsed
//! time, and forwards discrete commands between ticks.
//!
//! Within one tick the order is fixed: collision-checked fall, then the lock
//! decision, then spawn, then the spawn collision check that may end the game.

use arrayvec::ArrayVec;
use log::{debug, info, trace};

use crate::board::Board;
use crate::collision::{collides, rests_in_view};
use crate::ghost::ghost_of;
use crate::movement::{move_down, move_horizontal, Direction};
use crate::piece::Piece;
use crate::rng::PieceGenerator;
use crate::rotation::rotate;
use crate::scoring::line_clear_score;
use crate::snapshot::GameSnapshot;
use crate::types::{
    Command, GameEvent, PieceKind, DEFAULT_DROP_INTERVAL_SECS, FAST_DROP_INTERVAL_SECS,
};

/// Events produced by one tick. A tick yields at most one of each kind.
pub type TickEvents = ArrayVec<GameEvent, 3>;

/// Gravity intervals in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropTiming {
    pub normal_secs: f32,
    pub fast_secs: f32,
}

impl Default for DropTiming {
    fn default() -> Self {
        Self {
            normal_secs: DEFAULT_DROP_INTERVAL_SECS,
            fast_secs: FAST_DROP_INTERVAL_SECS,
        }
    }
}

/// Controller phase.
///
/// `Locking` and `Spawning` are transient: a tick that enters them always leaves
/// the controller in `Falling` or `GameOver` before returning, so
/// [`GameState::phase`] only ever reports those two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Falling,
    Locking,
    Spawning,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    next: Piece,
    generator: PieceGenerator,
    timing: DropTiming,
    phase: Phase,
    /// Seconds accumulated toward the next gravity step.
    drop_timer: f32,
    fast_drop: bool,
    /// Monotonic game counter (increments on restart).
    episode_id: u32,
    score: u32,
    lines: u32,
    pieces_placed: u32,
}

impl GameState {
    /// New game on an empty board with default timing; the first piece is already falling.
    pub fn new(seed: u32) -> Self {
        Self::with_timing(seed, DropTiming::default())
    }

    pub fn with_timing(seed: u32, timing: DropTiming) -> Self {
        Self::with_board(seed, timing, Board::new())
    }

    /// New game starting from a pre-filled board.
    ///
    /// If the first piece cannot spawn the game starts in [`Phase::GameOver`].
    pub fn with_board(seed: u32, timing: DropTiming, board: Board) -> Self {
        Self::from_generator(PieceGenerator::new(seed), timing, board)
    }

    fn from_generator(mut generator: PieceGenerator, timing: DropTiming, board: Board) -> Self {
        let next = generator.generate();
        let mut state = Self {
            board,
            active: None,
            next,
            generator,
            timing,
            phase: Phase::Spawning,
            drop_timer: 0.0,
            fast_drop: false,
            episode_id: 0,
            score: 0,
            lines: 0,
            pieces_placed: 0,
        };
        let mut events = TickEvents::new();
        state.spawn_next(&mut events);
        state
    }

    /// Throw the current game away and start a fresh one.
    ///
    /// Board, pieces, score and counters are replaced wholesale; the random stream
    /// and timing carry over.
    pub fn restart(&mut self) {
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::from_generator(self.generator.clone(), self.timing, Board::new());
        self.episode_id = next_episode;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups.
    ///
    /// The active piece is not re-validated against the edited board.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next_piece(&self) -> Piece {
        self.next
    }

    /// Landing projection of the active piece. `None` when there is nothing to project.
    pub fn ghost(&self) -> Option<Piece> {
        if self.phase == Phase::GameOver {
            return None;
        }
        self.active.map(|active| ghost_of(&active, &self.board))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    pub fn timing(&self) -> DropTiming {
        self.timing
    }

    pub fn fast_drop(&self) -> bool {
        self.fast_drop
    }

    pub fn drop_timer(&self) -> f32 {
        self.drop_timer
    }

    /// Current gravity interval in seconds.
    pub fn drop_interval(&self) -> f32 {
        if self.fast_drop {
            self.timing.fast_secs
        } else {
            self.timing.normal_secs
        }
    }

    /// Replace the active piece, e.g. to script a position.
    ///
    /// Rejected (returns false) when the placement collides or the game is over.
    pub fn set_active(&mut self, piece: Piece) -> bool {
        if self.game_over() || collides(&piece, &self.board) {
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Replace the previewed next piece with a spawn-anchored piece of `kind`.
    pub fn set_next(&mut self, kind: PieceKind) {
        self.next = Piece::spawn(kind);
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(Direction::Right)
    }

    fn shift(&mut self, direction: Direction) -> bool {
        if self.game_over() {
            return false;
        }
        match self.active.as_mut() {
            Some(active) => move_horizontal(active, &self.board, direction),
            None => false,
        }
    }

    /// Rotate the active piece 90° using the five-position kick search.
    pub fn rotate(&mut self) -> bool {
        if self.game_over() {
            return false;
        }
        match self.active.as_mut() {
            Some(active) => rotate(active, &self.board),
            None => false,
        }
    }

    /// Select the fast or normal gravity interval. The drop timer is kept.
    pub fn set_fast_drop(&mut self, enabled: bool) {
        if self.game_over() {
            return;
        }
        self.fast_drop = enabled;
    }

    /// Apply a discrete command. Returns whether it changed anything.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Rotate => self.rotate(),
            Command::SetFastDrop(enabled) => {
                let changed = !self.game_over() && self.fast_drop != enabled;
                self.set_fast_drop(enabled);
                changed
            }
        }
    }

    /// Advance the drop timer by `delta_secs`.
    ///
    /// When the timer reaches the drop interval, runs exactly one gravity step
    /// (fall, or lock then spawn) and resets the timer to zero. Large deltas never
    /// produce more than one step. Once the game is over this does nothing.
    pub fn tick(&mut self, delta_secs: f32) -> TickEvents {
        let mut events = TickEvents::new();
        if self.game_over() {
            return events;
        }

        self.drop_timer += delta_secs.max(0.0);
        if self.drop_timer < self.drop_interval() {
            return events;
        }
        self.drop_timer = 0.0;

        self.step(&mut events);
        events
    }

    /// One gravity step through the controller phases.
    fn step(&mut self, events: &mut TickEvents) {
        loop {
            match self.phase {
                Phase::Falling => {
                    let Some(active) = self.active.as_mut() else {
                        self.phase = Phase::Spawning;
                        continue;
                    };
                    if move_down(active, &self.board) {
                        return;
                    }
                    self.phase = Phase::Locking;
                }
                Phase::Locking => {
                    if let Some(piece) = self.active.take() {
                        if rests_in_view(&piece) {
                            self.lock(&piece, events);
                        } else {
                            debug!("{} below the floor, discarded", piece.kind.as_str());
                        }
                    }
                    self.phase = Phase::Spawning;
                }
                Phase::Spawning => {
                    self.spawn_next(events);
                    return;
                }
                Phase::GameOver => return,
            }
        }
    }

    /// Write `piece` into the board, clear lines and score them.
    fn lock(&mut self, piece: &Piece, events: &mut TickEvents) {
        let written = self.board.lock_piece(piece);
        self.pieces_placed = self.pieces_placed.wrapping_add(1);
        self.fast_drop = false;
        trace!(
            "locked {} at ({}, {}), {} cells written",
            piece.kind.as_str(),
            piece.x,
            piece.y,
            written
        );
        events.push(GameEvent::PiecePlaced { kind: piece.kind });

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            let points = line_clear_score(cleared);
            self.score = self.score.saturating_add(points);
            self.lines = self.lines.saturating_add(cleared as u32);
            debug!("cleared {} lines for {} points", cleared, points);
            events.push(GameEvent::LinesCleared {
                count: cleared as u32,
                points,
            });
        }
    }

    /// Promote next to active, draw a new next, and check for a blocked spawn.
    fn spawn_next(&mut self, events: &mut TickEvents) {
        let piece = std::mem::replace(&mut self.next, self.generator.generate());
        self.active = Some(piece);

        if collides(&piece, &self.board) {
            self.phase = Phase::GameOver;
            info!(
                "game over: {} blocked at spawn, score {}",
                piece.kind.as_str(),
                self.score
            );
            events.push(GameEvent::GameOver { score: self.score });
        } else {
            self.phase = Phase::Falling;
            debug!("spawned {} (next {})", piece.kind.as_str(), self.next.kind.as_str());
        }
    }

    /// Fill `out` with a read-only view for renderers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active;
        out.ghost = self.ghost();
        out.next = self.next;
        out.score = self.score;
        out.lines = self.lines;
        out.pieces_placed = self.pieces_placed;
        out.fast_drop = self.fast_drop;
        out.game_over = self.game_over();
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
