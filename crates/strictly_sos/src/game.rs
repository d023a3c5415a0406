//! The SOS engine.
//!
//! One explicit object owns every piece of match state. All input arrives
//! as [`Event`]s through [`SosGame::handle`], which runs each event to
//! completion before returning. Refused events leave the state untouched.

use super::action::{Effect, Event, GameError};
use super::config::MatchConfig;
use super::contracts::{Contract, EndTurnContract, PlacementContract, check_invariants};
use super::gesture::{DragPath, DragStep, Line};
use super::grid::Grid;
use super::ledger::{LineLedger, ScoredLine};
use super::phases::{Outcome, Phase};
use super::roster::{Player, Roster};
use super::rules::{self, SlashVerdict};
use super::snapshot::Snapshot;
use super::types::{Coord, GridSize, Letter, PlayerCount};
use tracing::{debug, info, instrument, warn};

/// Stores that exist only while a match is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Table {
    pub(crate) grid: Grid,
    pub(crate) roster: Roster,
    pub(crate) ledger: LineLedger,
}

impl Table {
    fn new(config: &MatchConfig) -> Self {
        Self {
            grid: Grid::new(*config.grid_size()),
            roster: Roster::new(*config.player_count()),
            ledger: LineLedger::new(),
        }
    }
}

/// SOS match engine.
///
/// Phases run `Setup → Placement → Claiming`, then back to `Placement` on
/// turn end, or on to `GameOver` once the grid is full. A successful slash
/// grants one bonus placement, usable while still claiming and forfeited
/// when the turn ends.
///
/// A refused event leaves the engine exactly as it was. In debug builds
/// this also holds when a contract or invariant check fails after the
/// transition: the previous state is restored before the error returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SosGame {
    pub(crate) phase: Phase,
    pub(crate) config: MatchConfig,
    pub(crate) table: Option<Table>,
    pub(crate) pending: Option<Coord>,
    pub(crate) path: DragPath,
    pub(crate) has_placed: bool,
    pub(crate) bonus_available: bool,
}

impl SosGame {
    /// Creates an engine in setup with the default configuration.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(MatchConfig::default())
    }

    /// Creates an engine in setup with the given configuration.
    #[instrument]
    pub fn with_config(config: MatchConfig) -> Self {
        Self {
            phase: Phase::Setup,
            config,
            table: None,
            pending: None,
            path: DragPath::new(),
            has_placed: false,
            bonus_available: false,
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Transition function
    // ─────────────────────────────────────────────────────────

    /// Applies one event.
    ///
    /// Inputs that make no sense in the current phase return
    /// `Ok(Effect::Ignored)`. Errors are either the player-facing
    /// [`GameError::MustPlaceFirst`] or a broken caller contract.
    #[instrument(skip(self, event), fields(phase = %self.phase, event = %event))]
    pub fn handle(&mut self, event: Event) -> Result<Effect, GameError> {
        let before = cfg!(debug_assertions).then(|| self.clone());

        let effect = match self.dispatch(event) {
            Ok(effect) => effect,
            Err(error) => {
                if let Some(before) = before {
                    *self = before;
                }
                return Err(error);
            }
        };

        if effect == Effect::Ignored {
            debug!("Event ignored");
        }
        Ok(effect)
    }

    /// Runs the handler for `event`, then the debug invariant checks.
    fn dispatch(&mut self, event: Event) -> Result<Effect, GameError> {
        let effect = match event {
            Event::SelectGridSize(size) => self.select_grid_size(size),
            Event::SelectPlayerCount(count) => self.select_player_count(count),
            Event::StartMatch => self.start_match(),
            Event::PlacementTap(at) => self.placement_tap(at),
            Event::LetterChosen(letter) => self.letter_chosen(letter),
            Event::DragEnter(at) => self.drag_entered(at),
            Event::DragRelease => Ok(self.drag_released()),
            Event::EndTurn => self.turn_ended(),
            Event::ResetMatch => Ok(self.reset_match()),
        }?;

        if cfg!(debug_assertions) {
            check_invariants(self)?;
        }
        Ok(effect)
    }

    /// Pure form of [`handle`](Self::handle): returns the next state and
    /// leaves `self` untouched.
    pub fn step(&self, event: Event) -> Result<(Self, Effect), GameError> {
        let mut next = self.clone();
        let effect = next.handle(event)?;
        Ok((next, effect))
    }

    // ─────────────────────────────────────────────────────────
    //  Setup
    // ─────────────────────────────────────────────────────────

    fn require_setup(&self) -> Result<(), GameError> {
        if self.phase == Phase::Setup {
            Ok(())
        } else {
            warn!(phase = %self.phase, "Setup input outside setup");
            Err(GameError::NotInSetup(self.phase))
        }
    }

    fn select_grid_size(&mut self, size: GridSize) -> Result<Effect, GameError> {
        self.require_setup()?;
        self.config.set_grid_size(size);
        Ok(Effect::Configured)
    }

    fn select_player_count(&mut self, count: PlayerCount) -> Result<Effect, GameError> {
        self.require_setup()?;
        self.config.set_player_count(count);
        Ok(Effect::Configured)
    }

    fn start_match(&mut self) -> Result<Effect, GameError> {
        self.require_setup()?;
        self.table = Some(Table::new(&self.config));
        self.clear_turn_state();
        self.phase = Phase::Placement;
        info!(
            grid = %self.config.grid_size(),
            players = %self.config.player_count(),
            "Match started"
        );
        Ok(Effect::Started)
    }

    fn reset_match(&mut self) -> Effect {
        self.table = None;
        self.clear_turn_state();
        self.phase = Phase::Setup;
        info!("Match reset");
        Effect::Reset
    }

    fn clear_turn_state(&mut self) {
        self.pending = None;
        self.path.clear();
        self.has_placed = false;
        self.bonus_available = false;
    }

    // ─────────────────────────────────────────────────────────
    //  Placement
    // ─────────────────────────────────────────────────────────

    /// Rejects coordinates off the grid. `Ok(None)` means no match is running.
    fn checked_grid(&self, at: Coord) -> Result<Option<&Grid>, GameError> {
        let Some(table) = &self.table else {
            return Ok(None);
        };
        if table.grid.contains(at) {
            Ok(Some(&table.grid))
        } else {
            warn!(%at, "Coordinate off the grid");
            Err(GameError::OutOfBounds {
                coord: at,
                side: table.grid.side(),
            })
        }
    }

    fn placement_tap(&mut self, at: Coord) -> Result<Effect, GameError> {
        let Some(grid) = self.checked_grid(at)? else {
            return Ok(Effect::Ignored);
        };
        if !self.placement_allowed() {
            return Ok(Effect::Ignored);
        }

        let occupied = !grid.is_empty_at(at);
        self.pending = if occupied || self.pending == Some(at) {
            None
        } else {
            Some(at)
        };
        debug!(pending = ?self.pending, "Selector toggled");
        Ok(Effect::SelectorMoved(self.pending))
    }

    fn letter_chosen(&mut self, letter: Letter) -> Result<Effect, GameError> {
        let Some(at) = self.pending else {
            return Ok(Effect::Ignored);
        };
        PlacementContract::pre(self, &at)?;

        let before = cfg!(debug_assertions).then(|| self.clone());

        let table = self
            .table
            .as_mut()
            .ok_or(GameError::NotInSetup(Phase::Setup))?;
        table
            .grid
            .place_letter(at, letter)
            .map_err(|e| GameError::InvariantViolation(e.to_string()))?;
        self.pending = None;

        let bonus = self.phase == Phase::Claiming;
        if bonus {
            self.bonus_available = false;
        } else {
            self.has_placed = true;
            self.phase = Phase::Claiming;
        }
        info!(%at, %letter, bonus, "Letter placed");

        if let Some(before) = &before {
            PlacementContract::post(before, self)?;
        }

        Ok(Effect::Placed { at, letter, bonus })
    }

    // ─────────────────────────────────────────────────────────
    //  Claiming
    // ─────────────────────────────────────────────────────────

    fn drag_entered(&mut self, at: Coord) -> Result<Effect, GameError> {
        if self.checked_grid(at)?.is_none() || self.phase != Phase::Claiming {
            return Ok(Effect::Ignored);
        }
        match self.path.enter(at) {
            DragStep::Ignored => Ok(Effect::Ignored),
            DragStep::Completed(line) => self.resolve_slash(line),
            step => Ok(Effect::PathChanged(step)),
        }
    }

    fn drag_released(&mut self) -> Effect {
        if self.path.release() {
            debug!("Incomplete drag discarded");
            Effect::PathDiscarded
        } else {
            Effect::Ignored
        }
    }

    /// Scores a completed line, then ends the match if the grid is full.
    ///
    /// Fullness is checked whatever the verdict.
    #[instrument(skip(self))]
    fn resolve_slash(&mut self, line: Line) -> Result<Effect, GameError> {
        let table = self
            .table
            .as_mut()
            .ok_or(GameError::NotInSetup(Phase::Setup))?;

        let effect = match rules::validate_slash(&table.grid, &table.ledger, &line) {
            SlashVerdict::Sos { id, start, end } => {
                let scorer = table.roster.current_index();
                let color = *table.roster.current().color();
                let scored = ScoredLine::new(id, start, end, color);
                if table.ledger.record(scored.clone()) {
                    table.roster.award(scorer);
                    self.bonus_available = true;
                    info!(line = %id, scorer, "Line scored");
                    Effect::Scored(scored)
                } else {
                    debug!(line = %id, "Ledger refused line");
                    Effect::NoScore {
                        duplicate: Some(id),
                    }
                }
            }
            SlashVerdict::NotSos => Effect::NoScore { duplicate: None },
            SlashVerdict::AlreadyScored(id) => {
                debug!(line = %id, "Duplicate slash");
                Effect::NoScore {
                    duplicate: Some(id),
                }
            }
        };

        self.path.clear();

        let scored = match &effect {
            Effect::Scored(line) => Some(line.clone()),
            _ => None,
        };
        Ok(self.finish_if_full(scored).unwrap_or(effect))
    }

    fn turn_ended(&mut self) -> Result<Effect, GameError> {
        if self.phase == Phase::Setup {
            return Ok(Effect::Ignored);
        }
        EndTurnContract::pre(self, &())?;

        let before = cfg!(debug_assertions).then(|| self.clone());

        if let Some(effect) = self.finish_if_full(None) {
            return Ok(effect);
        }

        let table = self
            .table
            .as_mut()
            .ok_or(GameError::NotInSetup(Phase::Setup))?;
        table.roster.advance_turn();
        let next = table.roster.current_index();
        self.clear_turn_state();
        self.phase = Phase::Placement;
        info!(next, "Turn ended");

        if let Some(before) = &before {
            EndTurnContract::post(before, self)?;
        }

        Ok(Effect::TurnEnded { next })
    }

    /// Moves to `GameOver` when no empty cell remains. `scored` is the line
    /// the final slash scored, if any.
    fn finish_if_full(&mut self, scored: Option<ScoredLine>) -> Option<Effect> {
        let table = self.table.as_ref()?;
        let outcome = rules::final_outcome(&table.grid, &table.roster)?;
        self.clear_turn_state();
        self.phase = Phase::GameOver;
        info!(%outcome, "Match over");
        Some(Effect::MatchOver { outcome, scored })
    }

    // ─────────────────────────────────────────────────────────
    //  Convenience inputs
    // ─────────────────────────────────────────────────────────

    /// Applies a configuration. Only valid during setup.
    #[instrument(skip(self))]
    pub fn configure(&mut self, config: MatchConfig) -> Result<(), GameError> {
        self.handle(Event::SelectGridSize(*config.grid_size()))?;
        self.handle(Event::SelectPlayerCount(*config.player_count()))?;
        Ok(())
    }

    /// Starts the match with the current configuration.
    pub fn start(&mut self) -> Result<Effect, GameError> {
        self.handle(Event::StartMatch)
    }

    /// Taps a cell.
    pub fn tap(&mut self, at: Coord) -> Result<Effect, GameError> {
        self.handle(Event::PlacementTap(at))
    }

    /// Chooses a letter for the pending cell.
    pub fn choose(&mut self, letter: Letter) -> Result<Effect, GameError> {
        self.handle(Event::LetterChosen(letter))
    }

    /// Taps a cell and immediately writes `letter` into it.
    pub fn place(&mut self, at: Coord, letter: Letter) -> Result<Effect, GameError> {
        self.tap(at)?;
        self.choose(letter)
    }

    /// Drag enters a cell.
    pub fn drag_enter(&mut self, at: Coord) -> Result<Effect, GameError> {
        self.handle(Event::DragEnter(at))
    }

    /// Drag released.
    pub fn release(&mut self) -> Result<Effect, GameError> {
        self.handle(Event::DragRelease)
    }

    /// Feeds a whole drag (enters, then release) and returns the most
    /// significant effect: the slash result if one completed.
    pub fn slash(&mut self, cells: &[Coord]) -> Result<Effect, GameError> {
        let mut result = Effect::Ignored;
        for &at in cells {
            let effect = self.drag_enter(at)?;
            if matches!(
                effect,
                Effect::Scored(_) | Effect::NoScore { .. } | Effect::MatchOver { .. }
            ) {
                result = effect;
            }
        }
        self.release()?;
        Ok(result)
    }

    /// Ends the current turn.
    pub fn end_turn(&mut self) -> Result<Effect, GameError> {
        self.handle(Event::EndTurn)
    }

    /// Returns to setup.
    pub fn reset(&mut self) -> Result<Effect, GameError> {
        self.handle(Event::ResetMatch)
    }

    // ─────────────────────────────────────────────────────────
    //  Read access
    // ─────────────────────────────────────────────────────────

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Configuration used by the next start.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The grid, once a match has started.
    pub fn grid(&self) -> Option<&Grid> {
        self.table.as_ref().map(|t| &t.grid)
    }

    /// The roster, once a match has started.
    pub fn roster(&self) -> Option<&Roster> {
        self.table.as_ref().map(|t| &t.roster)
    }

    /// The line ledger, once a match has started.
    pub fn ledger(&self) -> Option<&LineLedger> {
        self.table.as_ref().map(|t| &t.ledger)
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Option<&Player> {
        self.roster().map(Roster::current)
    }

    /// Cell awaiting a letter choice.
    pub fn pending(&self) -> Option<Coord> {
        self.pending
    }

    /// In-progress drag.
    pub fn drag_path(&self) -> &DragPath {
        &self.path
    }

    /// True once the current player has written a letter this turn.
    pub fn has_placed(&self) -> bool {
        self.has_placed
    }

    /// True while an earned bonus placement is unused.
    pub fn bonus_available(&self) -> bool {
        self.bonus_available
    }

    /// True when a tap may open the letter selector.
    pub fn placement_allowed(&self) -> bool {
        match self.phase {
            Phase::Placement => true,
            Phase::Claiming => self.bonus_available,
            Phase::Setup | Phase::GameOver => false,
        }
    }

    /// Final result, once the match is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.phase.is_terminal() {
            self.roster().map(Roster::outcome)
        } else {
            None
        }
    }

    /// Read-only copy of everything a renderer needs.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}

impl Default for SosGame {
    fn default() -> Self {
        Self::new()
    }
}
