//! The turn and phase state machine.
//!
//! `GameController` owns one session: the board, both players' counters, the
//! turn, the status and the undo history. Actions go in through `execute`
//! (or `try_execute` for the typed reason); each call is atomic, so a
//! declined action leaves every part of the state untouched.
//!
//! ## Turn flow
//!
//! ```text
//! Place/Move ──► mill formed? ──yes──► Removing ──Remove──► opponent lost? ──yes──► Won
//!                     │                                          │
//!                     no                                         no
//!                     ▼                                          ▼
//!                 pass turn ◄────────────────────────────────────┘
//!                     │
//!        next side has no legal move? ──yes──► Drawn
//! ```
//!
//! A side that has placed its last piece while below the losing threshold
//! loses as soon as that piece lands.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::{BoardState, PositionGraph, PositionId};
use crate::core::{
    Action, ActionError, ColorMap, GameConfig, GameError, GameState, GameStatus, Phase, PieceColor,
    Player, Violation,
};
use crate::history::{ActionHistory, Checkpoint, Effect, EffectRecord};
use crate::rules::RuleEngine;

/// What the caller learns from submitting an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Was the action applied?
    pub applied: bool,

    /// Status after the call.
    pub status: GameStatus,

    /// Side to act next.
    pub to_move: PieceColor,

    /// Why the action was declined, if it was.
    pub error: Option<ActionError>,
}

/// One game session.
///
/// Not internally synchronised: callers sharing a session across threads
/// must serialise access themselves.
///
/// ## Example
///
/// ```
/// use morris_engine::board::PositionId;
/// use morris_engine::core::{Action, GameStatus, PieceColor};
/// use morris_engine::game::GameController;
///
/// let mut game = GameController::new();
///
/// assert!(game.execute(Action::place(PositionId::new(0), PieceColor::White)));
/// assert_eq!(game.current_player(), PieceColor::Black);
///
/// // Not White's turn.
/// assert!(!game.execute(Action::place(PositionId::new(1), PieceColor::White)));
///
/// assert!(game.execute(Action::Undo));
/// assert_eq!(game.occupant(PositionId::new(0)), None);
/// assert_eq!(game.status(), GameStatus::InProgress);
/// ```
#[derive(Clone, Debug)]
pub struct GameController {
    graph: &'static PositionGraph,
    config: GameConfig,
    board: BoardState,
    players: ColorMap<Player>,
    to_move: PieceColor,
    status: GameStatus,
    history: ActionHistory,

    /// Audit trail carried over from a restored snapshot. Not undoable.
    prelude: Vec<Action>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// Start a standard game.
    #[must_use]
    pub fn new() -> Self {
        Self::fresh(GameConfig::default())
    }

    /// Start a game with custom rules.
    pub fn with_config(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    fn fresh(config: GameConfig) -> Self {
        let pieces = config.pieces_per_player;
        Self {
            graph: PositionGraph::standard(),
            to_move: config.first_player,
            config,
            board: BoardState::new(),
            players: ColorMap::new(|color| Player::new(color, pieces)),
            status: GameStatus::InProgress,
            history: ActionHistory::new(),
            prelude: Vec::new(),
        }
    }

    // === Queries ===

    /// Rules in force.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Board topology.
    #[must_use]
    pub fn graph(&self) -> &'static PositionGraph {
        self.graph
    }

    /// Current occupancy.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Colour at `id`, if any.
    #[must_use]
    pub fn occupant(&self, id: PositionId) -> Option<PieceColor> {
        self.board.occupant(id)
    }

    /// Side to act next.
    #[must_use]
    pub fn current_player(&self) -> PieceColor {
        self.to_move
    }

    /// Counters for one side.
    #[must_use]
    pub fn player(&self, color: PieceColor) -> &Player {
        &self.players[color]
    }

    /// Counters for both sides.
    #[must_use]
    pub fn players(&self) -> &ColorMap<Player> {
        &self.players
    }

    /// Status after the last applied action.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Global stage: `Placing` until both hands are empty, then `Moving`.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.players.iter().any(|(_, p)| !p.placement_done()) {
            Phase::Placing
        } else {
            Phase::Moving
        }
    }

    /// Stage for one side, including flying.
    #[must_use]
    pub fn phase_for(&self, color: PieceColor) -> Phase {
        self.rules().phase_for(color)
    }

    /// Must the current player remove an opponent piece?
    #[must_use]
    pub fn is_removal_pending(&self) -> bool {
        self.status == GameStatus::Removing
    }

    /// Winner, once the game is won.
    #[must_use]
    pub fn winner(&self) -> Option<PieceColor> {
        self.status.winner()
    }

    /// Undo history.
    #[must_use]
    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    /// Every applied action, including any carried over from a snapshot.
    #[must_use]
    pub fn actions(&self) -> Vec<Action> {
        self.prelude.iter().copied().chain(self.history.actions()).collect()
    }

    /// Rules view over the current position.
    #[must_use]
    pub fn rules(&self) -> RuleEngine<'_> {
        RuleEngine::new(self.graph, &self.board, &self.players, &self.config)
    }

    /// Every action the current player may take. Empty once the game is won.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.status.is_won() {
            return Vec::new();
        }
        self.rules().legal_actions(self.to_move, self.is_removal_pending())
    }

    // === Execution ===

    /// Apply `action` if legal. Returns whether it was applied.
    pub fn execute(&mut self, action: Action) -> bool {
        self.try_execute(action).is_ok()
    }

    /// Apply `action` and report the result together with the resulting status.
    pub fn submit(&mut self, action: Action) -> Outcome {
        let result = self.try_execute(action);
        Outcome {
            applied: result.is_ok(),
            status: self.status,
            to_move: self.to_move,
            error: result.err(),
        }
    }

    /// Apply `action` if legal, returning the new status or why it was declined.
    #[instrument(skip(self), fields(to_move = %self.to_move, status = ?self.status))]
    pub fn try_execute(&mut self, action: Action) -> Result<GameStatus, ActionError> {
        let result = match action {
            Action::Place { destination, actor } => self.place(destination, actor),
            Action::Move {
                source,
                destination,
                actor,
            } => self.relocate(source, destination, actor),
            Action::Remove { target, actor } => self.remove(target, actor),
            Action::Undo => self.undo(),
        };

        match &result {
            Ok(status) => debug!(%action, ?status, "action applied"),
            Err(error) => debug!(%action, %error, "action declined"),
        }
        result
    }

    fn illegal(actor: PieceColor, reason: Violation) -> ActionError {
        ActionError::IllegalAction { actor, reason }
    }

    /// Turn checks shared by Place and Move.
    fn check_turn(&self, actor: PieceColor) -> Result<(), ActionError> {
        if self.status.is_won() {
            return Err(Self::illegal(actor, Violation::GameOver));
        }
        if actor != self.to_move {
            return Err(Self::illegal(actor, Violation::NotYourTurn));
        }
        if self.is_removal_pending() {
            return Err(Self::illegal(actor, Violation::RemovalPending));
        }
        Ok(())
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            players: self.players,
            to_move: self.to_move,
            status: self.status,
        }
    }

    fn place(&mut self, at: PositionId, actor: PieceColor) -> Result<GameStatus, ActionError> {
        self.check_turn(actor)?;
        if self.players[actor].unplaced == 0 {
            return Err(Self::illegal(actor, Violation::NoPiecesInHand));
        }
        if !self.rules().can_place(at) {
            return Err(ActionError::IllegalPlacement { at });
        }

        let before = self.checkpoint();
        self.board.place(at, actor);
        self.players[actor].place_from_hand();
        self.history.push(EffectRecord::new(actor, Effect::Placed { at }, before));
        Ok(self.after_landing(at, actor))
    }

    fn relocate(
        &mut self,
        from: PositionId,
        to: PositionId,
        actor: PieceColor,
    ) -> Result<GameStatus, ActionError> {
        self.check_turn(actor)?;
        let rules = self.rules();
        if !rules.may_move(actor) {
            return Err(Self::illegal(actor, Violation::PlacementUnfinished));
        }
        if !rules.can_move(from, to, actor, rules.phase_for(actor)) {
            return Err(ActionError::IllegalMove { from, to });
        }

        let before = self.checkpoint();
        self.board.move_piece(from, to);
        self.history.push(EffectRecord::new(actor, Effect::Moved { from, to }, before));
        Ok(self.after_landing(to, actor))
    }

    fn remove(&mut self, target: PositionId, actor: PieceColor) -> Result<GameStatus, ActionError> {
        if self.status.is_won() {
            return Err(Self::illegal(actor, Violation::GameOver));
        }
        if actor != self.to_move {
            return Err(Self::illegal(actor, Violation::NotYourTurn));
        }
        if !self.is_removal_pending() {
            return Err(Self::illegal(actor, Violation::NoRemovalPending));
        }
        if !self.rules().can_remove(target, actor) {
            return Err(ActionError::IllegalRemoval { at: target });
        }

        let opponent = actor.opponent();
        self.board.remove(target);
        self.players[opponent].lose_piece();
        let attached = self.history.attach_removal(target);
        debug_assert!(attached, "removal without a mill-forming record");

        if self.players[opponent].has_lost(self.config.losing_threshold) {
            self.status = GameStatus::Won(actor);
            info!(winner = %actor, "game won");
            return Ok(self.status);
        }
        Ok(self.pass_turn())
    }

    fn undo(&mut self) -> Result<GameStatus, ActionError> {
        let record = self.history.pop_last().ok_or(ActionError::EmptyHistory)?;

        if let Some(target) = record.removed {
            self.board.place(target, record.actor.opponent());
        }
        match record.effect {
            Effect::Placed { at } => {
                self.board.remove(at);
            }
            Effect::Moved { from, to } => {
                self.board.move_piece(to, from);
            }
        }

        let Checkpoint {
            players,
            to_move,
            status,
        } = record.before;
        self.players = players;
        self.to_move = to_move;
        self.status = status;
        Ok(self.status)
    }

    /// Status after a piece has landed on `at`.
    fn after_landing(&mut self, at: PositionId, actor: PieceColor) -> GameStatus {
        // Placing a last piece can leave a side that lost pieces earlier
        // below the threshold.
        if let Some(loser) = self.loser() {
            let winner = loser.opponent();
            self.status = GameStatus::Won(winner);
            info!(%winner, %loser, "game won");
            return self.status;
        }

        let mills = self.rules().mills_at(at);
        // With no opponent piece on the board there is nothing to take.
        if !mills.is_empty() && self.board.positions_of(actor.opponent()).next().is_some() {
            self.status = GameStatus::Removing;
            debug!(%at, %actor, lines = mills.len(), "mill formed");
            return self.status;
        }
        self.pass_turn()
    }

    fn pass_turn(&mut self) -> GameStatus {
        self.to_move = self.to_move.opponent();
        self.status = if self.rules().has_no_legal_move(self.to_move) {
            info!(blocked = %self.to_move, "no legal move, game drawn");
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        };
        self.status
    }

    /// A side that has finished placing and is below the losing threshold.
    fn loser(&self) -> Option<PieceColor> {
        let threshold = self.config.losing_threshold;
        self.players
            .iter()
            .find(|(_, p)| p.has_lost(threshold))
            .map(|(color, _)| color)
    }

    /// Status implied by the position alone, used after a restore.
    fn settled_status(&self) -> GameStatus {
        if let Some(loser) = self.loser() {
            return GameStatus::Won(loser.opponent());
        }
        if self.rules().has_no_legal_move(self.to_move) {
            return GameStatus::Drawn;
        }
        GameStatus::InProgress
    }

    // === Persistence ===

    /// Export the board, the applied actions and resume hints.
    ///
    /// A pending removal is not part of the shape: restore a snapshot taken
    /// while `Removing` and the mover's removal is lost.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        GameState::from_board(&self.board, self.actions())
            .with_to_move(self.to_move)
            .with_unplaced(ColorMap::new(|color| self.players[color].unplaced))
    }

    /// Rebuild a session from a snapshot.
    ///
    /// Occupancy is restored directly; the action list is kept as an audit
    /// trail and not replayed, so the restored session starts with nothing
    /// to undo.
    #[instrument(
        skip_all,
        fields(positions = state.positions.len(), actions = state.actions.len())
    )]
    pub fn restore(state: GameState, config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let graph = PositionGraph::standard();

        let mut board = BoardState::new();
        let mut seen = FxHashSet::default();
        for record in &state.positions {
            if !graph.contains(record.id) {
                return Err(GameError::snapshot(format!("position {} is off the board", record.id)));
            }
            if !seen.insert(record.id) {
                return Err(GameError::snapshot(format!("position {} listed twice", record.id)));
            }
            if let Some(color) = record.piece {
                board.place(record.id, color);
            }
        }

        let pieces = config.pieces_per_player;
        let unplaced = state.unplaced.unwrap_or_else(|| {
            ColorMap::new(|color| {
                let placed = u8::try_from(state.placements_by(color)).unwrap_or(u8::MAX);
                pieces.saturating_sub(placed)
            })
        });

        let mut players = ColorMap::new(|color| Player::new(color, 0));
        for color in PieceColor::ALL {
            let on_board = board.count(color);
            let total = on_board + usize::from(unplaced[color]);
            if total > usize::from(pieces) {
                return Err(GameError::snapshot(format!(
                    "{color} has {total} pieces, more than the {pieces} allowed"
                )));
            }
            players[color] = Player {
                color,
                unplaced: unplaced[color],
                on_board: on_board as u8,
            };
        }

        let to_move = state
            .to_move
            .or_else(|| state.next_after_last_actor())
            .unwrap_or(config.first_player);

        let mut controller = Self {
            graph,
            config,
            board,
            players,
            to_move,
            status: GameStatus::InProgress,
            history: ActionHistory::new(),
            prelude: state.actions,
        };
        controller.status = controller.settled_status();
        debug!(status = ?controller.status, %to_move, "snapshot restored");
        Ok(controller)
    }
}
