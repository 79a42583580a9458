//! Game state module - the tick-driven simulation
//!
//! [`GameState`] owns the well, the active piece, the piece queue and the
//! hold slot. It advances only through two entry points:
//!
//! - [`GameState::apply`] for player commands, delivered between ticks
//! - [`GameState::advance_tick`] once per simulation tick
//!
//! Within one playing tick a pending spawn (with its game-over check) is
//! handled first; otherwise at most one gravity step or lock happens.
//! Everything observable is recorded as a [`GameEvent`] and drained with
//! [`GameState::flush_events`].

use tracing::{debug, trace, warn};

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::events::{EventSink, GameEvent};
use crate::gravity::GravityState;
use crate::pieces::{try_rotate, Piece};
use crate::rng::PieceQueue;
use crate::scoring::GameInfo;
use crate::snapshot::GameSnapshot;
use crate::types::{Command, GamePhase, PieceKind, Spin, PREVIEW_LEN};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<Piece>,
    held: Option<PieceKind>,
    /// A hold swap already happened since the last spawn
    swapped: bool,
    queue: PieceQueue,
    /// Seed of the first game's queue; later games derive theirs from it
    seed: u64,
    /// Games started so far
    games: u32,
    phase: GamePhase,
    info: GameInfo,
    gravity: GravityState,
    /// Value of `info.elapsed_ticks` when the active piece appeared
    spawn_tick: u64,
    spawn_pending: bool,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game in the start phase with a bag queue seeded by `seed`
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_queue(config, PieceQueue::new(seed))
    }

    /// Create a game that deals its first game's pieces from `queue`
    pub fn with_queue(config: GameConfig, queue: PieceQueue) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, queue))
    }

    fn build(config: GameConfig, queue: PieceQueue) -> Self {
        Self {
            board: Board::new(config.width, config.height),
            active: None,
            held: None,
            swapped: false,
            seed: queue.seed(),
            queue,
            games: 0,
            phase: GamePhase::Start,
            info: GameInfo::default(),
            gravity: GravityState::new(&config),
            spawn_tick: 0,
            spawn_pending: false,
            events: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.held
    }

    /// Whether a hold swap is still available for the active piece
    pub fn can_hold(&self) -> bool {
        self.active.is_some() && !self.swapped
    }

    pub fn info(&self) -> &GameInfo {
        &self.info
    }

    pub fn score(&self) -> u32 {
        self.info.score
    }

    pub fn elapsed_ticks(&self) -> u64 {
        self.info.elapsed_ticks
    }

    /// Natural gravity interval in ticks per row
    pub fn interval(&self) -> u32 {
        self.gravity.interval
    }

    /// Interval currently used for descent, soft drop included
    pub fn effective_interval(&self) -> u32 {
        self.gravity.effective_interval(&self.config)
    }

    pub fn speed_level(&self) -> u32 {
        self.gravity.speed_level(&self.config)
    }

    pub fn soft_drop(&self) -> bool {
        self.gravity.speed_up
    }

    /// Upcoming kinds, next first
    pub fn preview(&self) -> &[PieceKind] {
        self.queue.preview(PREVIEW_LEN)
    }

    pub fn games_started(&self) -> u32 {
        self.games
    }

    /// Mark the finished game as a high score (decided by the caller's store)
    pub fn set_high_score(&mut self, high_score: bool) {
        self.info.high_score = high_score;
    }

    /// Lowest valid position of the active piece
    pub fn ghost(&self) -> Option<Piece> {
        let mut piece = self.active?;
        while self.board.fits(&piece.shifted(0, 1)) {
            piece = piece.shifted(0, 1);
        }
        Some(piece)
    }

    /// Apply a player command
    ///
    /// Returns false when the command is rejected; a rejected command changes
    /// nothing and emits nothing.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::PauseToggle => match self.phase {
                GamePhase::Playing => self.set_phase(GamePhase::Paused),
                GamePhase::Paused => self.set_phase(GamePhase::Playing),
                _ => return false,
            },
            // A game in progress only ends through game over.
            Command::NewGame => match self.phase {
                GamePhase::Start | GamePhase::GameOver => self.new_game(),
                _ => return false,
            },
            // Releasing soft drop is always safe, even while paused.
            Command::SoftDropStop => return self.set_soft_drop(false),
            _ if self.phase != GamePhase::Playing => return false,
            Command::SoftDropStart => return self.set_soft_drop(true),
            Command::MoveLeft => return self.shift(-1),
            Command::MoveRight => return self.shift(1),
            Command::RotateCw => return self.rotate(Spin::Cw),
            Command::RotateCcw => return self.rotate(Spin::Ccw),
            Command::HardDrop => return self.hard_drop(),
            Command::Hold => return self.hold(),
        }
        true
    }

    /// Advance the simulation by one tick
    ///
    /// Does nothing outside the playing phase. Returns true if the well or
    /// the active piece changed.
    pub fn advance_tick(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }

        let changed = if self.spawn_pending || self.active.is_none() {
            if !self.spawn_next() {
                return true;
            }
            true
        } else {
            self.apply_gravity()
        };

        self.info.elapsed_ticks += 1;
        changed
    }

    /// Deliver buffered events to `sink` in emission order
    pub fn flush_events(&mut self, sink: &mut impl EventSink) {
        for event in self.events.drain(..) {
            sink.emit(event);
        }
    }

    /// Take the buffered events
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.config.width,
            height: self.config.height,
            invalid_rows: self.config.invalid_rows,
            board: self.board.cells().to_vec(),
            active: self.active.map(Into::into),
            ghost: self.ghost(),
            hold: self.held,
            can_hold: self.can_hold(),
            preview: self.preview().iter().copied().collect(),
            phase: self.phase,
            info: self.info,
            interval: self.gravity.interval,
            speed_level: self.speed_level(),
            soft_drop: self.gravity.speed_up,
        }
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    fn set_phase(&mut self, phase: GamePhase) {
        debug!(from = self.phase.as_str(), to = phase.as_str(), "phase change");
        self.phase = phase;
        self.emit(GameEvent::PhaseChanged(phase));
    }

    fn set_soft_drop(&mut self, on: bool) -> bool {
        if self.gravity.speed_up == on {
            return false;
        }
        self.gravity.speed_up = on;
        true
    }

    /// Reset everything and enter the playing phase; the next tick spawns
    fn new_game(&mut self) {
        if self.games > 0 {
            self.queue = PieceQueue::new(self.seed.wrapping_add(u64::from(self.games)));
        }
        self.games += 1;

        self.board.clear();
        self.active = None;
        self.held = None;
        self.swapped = false;
        self.info = GameInfo::default();
        self.gravity = GravityState::new(&self.config);
        self.spawn_tick = 0;
        self.spawn_pending = true;

        debug!(game = self.games, seed = self.queue.seed(), "new game");
        self.set_phase(GamePhase::NewGame);
        self.emit(GameEvent::ScoreChanged(0));
        self.emit(GameEvent::HoldChanged(None));
        self.set_phase(GamePhase::Playing);
    }

    /// Spawn the next queued piece, or end the game if the band is occupied
    fn spawn_next(&mut self) -> bool {
        if self.board.top_rows_occupied(self.config.invalid_rows) {
            self.finish_game();
            return false;
        }

        let leftover = self.board.clear_full_rows();
        if !leftover.is_empty() {
            warn!(rows = ?leftover, "full rows survived until spawn");
            self.award_clear(leftover);
        }

        let kind = self.queue.next();
        self.place_new(kind)
    }

    /// Put a fresh piece of `kind` at its spawn anchor
    fn place_new(&mut self, kind: PieceKind) -> bool {
        let piece = Piece::spawn_in(kind, self.config.width);
        if !self.board.fits(&piece) {
            warn!(kind = kind.as_str(), "spawn position blocked");
            self.finish_game();
            return false;
        }

        self.active = Some(piece);
        self.swapped = false;
        self.spawn_pending = false;
        self.spawn_tick = self.info.elapsed_ticks;
        if self.gravity.recompute(self.info.elapsed_ticks, &self.config) {
            debug!(interval = self.gravity.interval, "gravity interval changed");
            self.emit(GameEvent::SpeedChanged {
                interval: self.gravity.interval,
            });
        }

        debug!(kind = kind.as_str(), tick = self.info.elapsed_ticks, "spawn");
        self.emit(GameEvent::PieceSpawned(piece));
        true
    }

    fn finish_game(&mut self) {
        self.active = None;
        self.spawn_pending = false;
        debug!(
            score = self.info.score,
            lines = self.info.lines_destroyed,
            ticks = self.info.elapsed_ticks,
            "game over"
        );
        self.set_phase(GamePhase::GameOver);
        self.emit(GameEvent::GameOver(self.info));
    }

    fn apply_gravity(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let interval = u64::from(self.effective_interval());
        let since_spawn = self.info.elapsed_ticks - self.spawn_tick;
        if since_spawn == 0 || since_spawn % interval != 0 {
            return false;
        }

        let down = active.shifted(0, 1);
        if self.board.fits(&down) {
            self.active = Some(down);
            trace!(y = down.y, "gravity step");
            self.emit(GameEvent::PieceMoved(down));
        } else {
            self.lock_active();
        }
        true
    }

    fn shift(&mut self, dx: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(dx, 0);
        if !self.board.fits(&moved) {
            return false;
        }

        self.active = Some(moved);
        trace!(x = moved.x, "shift");
        self.emit(GameEvent::PieceMoved(moved));
        true
    }

    fn rotate(&mut self, spin: Spin) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let board = &self.board;
        let Some((rotated, kick)) = try_rotate(&active, spin, |p| board.fits(p)) else {
            return false;
        };

        // O has a single state: accepted, nothing to report.
        if rotated == active {
            return true;
        }

        self.active = Some(rotated);
        trace!(rotation = rotated.rotation, kick, "rotate");
        self.emit(GameEvent::PieceMoved(rotated));
        true
    }

    fn hard_drop(&mut self) -> bool {
        let Some(ghost) = self.ghost() else {
            return false;
        };

        self.active = Some(ghost);
        self.info.record_quick_drop();
        self.lock_active();
        true
    }

    fn hold(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if self.swapped || self.held == Some(active.kind) {
            return false;
        }

        let next = match self.held.replace(active.kind) {
            Some(kind) => kind,
            None => self.queue.next(),
        };
        self.info.record_swap();
        debug!(held = active.kind.as_str(), next = next.as_str(), "hold");
        self.emit(GameEvent::HoldChanged(self.held));

        if self.place_new(next) {
            self.swapped = true;
        }
        true
    }

    /// Commit the active piece, clear rows and schedule the next spawn
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.spawn_pending = true;

        let locked = self.board.lock_piece(&piece);
        debug_assert!(locked, "active piece locked at an invalid position: {piece:?}");
        if !locked {
            warn!(?piece, "refused to lock piece at an invalid position");
            return;
        }

        debug!(kind = piece.kind.as_str(), x = piece.x, y = piece.y, "lock");
        self.emit(GameEvent::PieceLocked(piece));

        let rows = self.board.clear_full_rows();
        let points = self.info.record_lock(rows.len(), self.config.points_per_line);
        if !rows.is_empty() {
            self.report_clear(rows, points);
        }
    }

    fn award_clear(&mut self, rows: Vec<usize>) {
        let points = self.info.record_clear(rows.len(), self.config.points_per_line);
        self.report_clear(rows, points);
    }

    fn report_clear(&mut self, rows: Vec<usize>, points: u32) {
        debug!(lines = rows.len(), points, "lines cleared");
        self.emit(GameEvent::LinesCleared { rows });
        self.emit(GameEvent::ScoreChanged(self.info.score));
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::build(GameConfig::default(), PieceQueue::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(prefix: &[PieceKind]) -> GameState {
        let queue = PieceQueue::with_prefix(42, prefix);
        let mut state = GameState::with_queue(GameConfig::default(), queue).unwrap();
        assert!(state.apply(Command::NewGame));
        state.advance_tick();
        state.take_events();
        state
    }

    fn tick_n(state: &mut GameState, n: usize) {
        for _ in 0..n {
            state.advance_tick();
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let cfg = GameConfig {
            width: 2,
            ..GameConfig::default()
        };
        assert_eq!(GameState::new(cfg, 1).unwrap_err(), ConfigError::Width(2));
    }

    #[test]
    fn test_start_phase_ignores_play_commands() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        assert_eq!(state.phase(), GamePhase::Start);
        assert!(!state.apply(Command::MoveLeft));
        assert!(!state.apply(Command::HardDrop));
        assert!(!state.apply(Command::PauseToggle));
        assert!(!state.advance_tick());
        assert_eq!(state.elapsed_ticks(), 0);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_new_game_spawns_on_first_tick() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        let first = state.preview()[0];
        assert!(state.apply(Command::NewGame));
        assert!(state.active().is_none());

        let events = state.take_events();
        assert_eq!(events.first(), Some(&GameEvent::PhaseChanged(GamePhase::NewGame)));
        assert_eq!(events.last(), Some(&GameEvent::PhaseChanged(GamePhase::Playing)));

        assert!(state.advance_tick());
        let active = state.active().unwrap();
        assert_eq!(active, Piece::spawn(first));
        assert_eq!(state.take_events(), vec![GameEvent::PieceSpawned(active)]);
        assert_eq!(state.elapsed_ticks(), 1);
    }

    #[test]
    fn test_new_game_rejected_while_playing() {
        let mut state = started(&[]);
        assert!(!state.apply(Command::NewGame));
    }

    #[test]
    fn test_new_game_rejected_while_paused() {
        let mut state = started(&[PieceKind::I]);
        state.board_mut().fill_row(24, PieceKind::J);
        state.board_mut().set(0, 24, None);
        assert!(state.apply(Command::RotateCw));
        while state.apply(Command::MoveLeft) {}
        assert!(state.apply(Command::HardDrop));
        assert_eq!(state.score(), 10);

        assert!(state.apply(Command::PauseToggle));
        state.take_events();
        assert!(!state.apply(Command::NewGame));
        assert_eq!(state.phase(), GamePhase::Paused);
        assert_eq!(state.score(), 10);
        assert_eq!(state.games_started(), 1);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_gravity_first_step_after_full_interval() {
        let mut state = started(&[PieceKind::T]);
        tick_n(&mut state, 44);
        assert_eq!(state.active().unwrap().y, 0);
        assert!(state.advance_tick());
        assert_eq!(state.active().unwrap().y, 1);

        tick_n(&mut state, 44);
        assert_eq!(state.active().unwrap().y, 1);
        state.advance_tick();
        assert_eq!(state.active().unwrap().y, 2);
    }

    #[test]
    fn test_soft_drop_uses_fast_interval() {
        let mut state = started(&[PieceKind::T]);
        assert!(state.apply(Command::SoftDropStart));
        assert!(!state.apply(Command::SoftDropStart));
        assert_eq!(state.effective_interval(), 8);
        assert_eq!(state.interval(), 45);

        tick_n(&mut state, 8);
        assert_eq!(state.active().unwrap().y, 1);

        assert!(state.apply(Command::SoftDropStop));
        assert_eq!(state.effective_interval(), 45);
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let mut state = started(&[PieceKind::T]);
        assert!(state.apply(Command::PauseToggle));
        assert_eq!(state.phase(), GamePhase::Paused);

        let before = state.active();
        let ticks = state.elapsed_ticks();
        tick_n(&mut state, 100);
        assert_eq!(state.active(), before);
        assert_eq!(state.elapsed_ticks(), ticks);
        assert!(!state.apply(Command::MoveLeft));

        assert!(state.apply(Command::PauseToggle));
        assert_eq!(state.phase(), GamePhase::Playing);
        assert!(state.apply(Command::MoveLeft));
    }

    #[test]
    fn test_piece_locks_when_gravity_blocked() {
        let mut state = started(&[PieceKind::O, PieceKind::T]);
        assert!(state.apply(Command::SoftDropStart));
        // 23 steps reach the floor, the 24th attempt locks.
        tick_n(&mut state, 8 * 24);
        assert!(state.active().is_none());
        assert_eq!(state.board().get(4, 24), Some(Some(PieceKind::O)));

        state.advance_tick();
        assert_eq!(state.active().unwrap().kind, PieceKind::T);
        assert_eq!(state.info().pieces_dropped, 1);
    }

    #[test]
    fn test_lock_records_clear_in_game_info() {
        let mut state = started(&[PieceKind::I]);
        assert!(state.apply(Command::RotateCw));
        while state.apply(Command::MoveLeft) {}
        let x = state.active().unwrap().x;
        for y in 22..25 {
            state.board_mut().fill_row(y, PieceKind::J);
            state.board_mut().set(x, y as i8, None);
        }

        assert!(state.apply(Command::HardDrop));
        let info = *state.info();
        assert_eq!(info.pieces_dropped, 1);
        assert_eq!(info.quick_drops, 1);
        assert_eq!(info.lines_destroyed, 3);
        assert_eq!(info.triples, 1);
        assert_eq!(info.score, 30);
    }

    #[test]
    fn test_hard_drop_locks_at_ghost() {
        let mut state = started(&[PieceKind::I]);
        let ghost = state.ghost().unwrap();
        assert_eq!(ghost.y, 24);

        assert!(state.apply(Command::HardDrop));
        assert!(state.active().is_none());
        assert_eq!(state.info().quick_drops, 1);
        assert_eq!(state.take_events(), vec![GameEvent::PieceLocked(ghost)]);

        // Commands have nothing to act on until the next spawn.
        assert!(!state.apply(Command::HardDrop));
        assert!(!state.apply(Command::Hold));
    }

    #[test]
    fn test_hold_into_empty_slot_draws_from_queue() {
        let mut state = started(&[PieceKind::T, PieceKind::S, PieceKind::Z]);
        assert!(state.apply(Command::Hold));
        assert_eq!(state.held(), Some(PieceKind::T));
        assert_eq!(state.active().unwrap(), Piece::spawn(PieceKind::S));
        assert_eq!(state.preview()[0], PieceKind::Z);
        assert!(!state.can_hold());
    }

    #[test]
    fn test_second_hold_before_spawn_is_ignored() {
        let mut state = started(&[PieceKind::T, PieceKind::S]);
        assert!(state.apply(Command::Hold));
        let active = state.active();
        let held = state.held();
        state.take_events();

        assert!(!state.apply(Command::Hold));
        assert_eq!(state.active(), active);
        assert_eq!(state.held(), held);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_hold_swap_does_not_consume_queue() {
        let mut state = started(&[PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::L]);
        state.apply(Command::Hold);
        state.apply(Command::HardDrop);
        state.advance_tick();
        assert_eq!(state.active().unwrap().kind, PieceKind::Z);

        assert!(state.apply(Command::Hold));
        assert_eq!(state.active().unwrap(), Piece::spawn(PieceKind::T));
        assert_eq!(state.held(), Some(PieceKind::Z));
        assert_eq!(state.preview()[0], PieceKind::L);
        assert_eq!(state.info().swaps, 2);
    }

    #[test]
    fn test_hold_rejects_same_kind() {
        let mut state = started(&[PieceKind::T, PieceKind::S, PieceKind::T]);
        state.apply(Command::Hold);
        state.apply(Command::HardDrop);
        state.advance_tick();
        assert_eq!(state.active().unwrap().kind, PieceKind::T);
        assert!(!state.apply(Command::Hold));
    }

    #[test]
    fn test_rotate_o_is_silent_noop() {
        let mut state = started(&[PieceKind::O]);
        let before = state.active();
        assert!(state.apply(Command::RotateCw));
        assert_eq!(state.active(), before);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_rotate_kicks_off_right_wall() {
        let mut state = started(&[PieceKind::T]);
        assert!(state.apply(Command::RotateCcw));
        while state.apply(Command::MoveRight) {}
        assert_eq!(state.active().unwrap().x, 8);

        assert!(state.apply(Command::RotateCw));
        let piece = state.active().unwrap();
        assert_eq!((piece.rotation, piece.x), (0, 7));
    }

    #[test]
    fn test_blocked_rotation_leaves_piece_untouched() {
        let mut state = started(&[PieceKind::I]);
        assert!(state.apply(Command::RotateCw));
        while state.apply(Command::MoveRight) {}
        let before = state.active().unwrap();
        assert_eq!(before.x, 9);
        state.take_events();

        // Lying flat against the wall needs a shift of three: no kick covers it.
        assert!(!state.apply(Command::RotateCw));
        assert!(!state.apply(Command::RotateCcw));
        assert_eq!(state.active().unwrap(), before);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_game_over_when_band_occupied_at_spawn() {
        let mut state = GameState::new(GameConfig::default(), 9).unwrap();
        state.apply(Command::NewGame);
        state.board_mut().set(0, 2, Some(PieceKind::J));
        state.take_events();

        assert!(state.advance_tick());
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert!(state.active().is_none());
        assert_eq!(state.elapsed_ticks(), 0);
        assert_eq!(
            state.take_events(),
            vec![
                GameEvent::PhaseChanged(GamePhase::GameOver),
                GameEvent::GameOver(GameInfo::default()),
            ]
        );

        assert!(!state.advance_tick());
        assert!(!state.apply(Command::PauseToggle));
        assert!(state.apply(Command::NewGame));
        assert_eq!(state.phase(), GamePhase::Playing);
        assert!(!state.board().top_rows_occupied(3));
    }

    #[test]
    fn test_speed_changes_at_spawn() {
        let mut state = started(&[PieceKind::O]);
        tick_n(&mut state, 600);
        // The interval is only recomputed at spawn.
        assert_eq!(state.interval(), 45);

        state.apply(Command::HardDrop);
        state.take_events();
        state.advance_tick();
        assert_eq!(state.interval(), 43);
        assert_eq!(state.speed_level(), 2);
        assert!(state
            .take_events()
            .contains(&GameEvent::SpeedChanged { interval: 43 }));
    }

    #[test]
    fn test_restart_uses_a_new_sequence() {
        let mut state = GameState::new(GameConfig::default(), 5).unwrap();
        state.apply(Command::NewGame);
        let first: Vec<_> = state.preview().to_vec();
        state.board_mut().set(0, 0, Some(PieceKind::J));
        state.advance_tick();
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert!(state.apply(Command::NewGame));
        assert_eq!(state.games_started(), 2);
        assert_eq!(state.queue.seed(), 6);
        assert_eq!(state.preview().len(), first.len());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = started(&[PieceKind::L]);
        state.apply(Command::MoveLeft);
        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.active.unwrap().piece, state.active().unwrap());
        assert_eq!(snap.ghost, state.ghost());
        assert_eq!(snap.preview.len(), PREVIEW_LEN);
        assert_eq!(snap.board.len(), 250);
        assert!(snap.can_hold);
    }

    #[test]
    fn test_flush_events_into_closure() {
        let mut state = started(&[PieceKind::T]);
        state.apply(Command::MoveLeft);
        state.apply(Command::MoveRight);

        let mut moves = 0;
        state.flush_events(&mut |event: GameEvent| {
            if matches!(event, GameEvent::PieceMoved(_)) {
                moves += 1;
            }
        });
        assert_eq!(moves, 2);
        assert!(state.take_events().is_empty());
    }
}
