//! Legality predicates and mill detection.
//!
//! `RuleEngine` is a borrowed, read-only view over a board, the two players'
//! counters and the configuration. Every method is a pure query; nothing here
//! mutates.
//!
//! ## Mill convention
//!
//! `forms_mill` looks at the board as it is. The controller applies a
//! placement or move first and asks afterwards, so the answer always reflects
//! the board after the piece has landed.

use crate::board::{BoardState, MillLine, PositionGraph, PositionId};
use crate::core::{Action, ColorMap, GameConfig, MovementGate, Phase, PieceColor, Player};

/// Read-only rules view over one game position.
#[derive(Clone, Copy, Debug)]
pub struct RuleEngine<'a> {
    graph: &'a PositionGraph,
    board: &'a BoardState,
    players: &'a ColorMap<Player>,
    config: &'a GameConfig,
}

impl<'a> RuleEngine<'a> {
    /// Create a view.
    #[must_use]
    pub fn new(
        graph: &'a PositionGraph,
        board: &'a BoardState,
        players: &'a ColorMap<Player>,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            graph,
            board,
            players,
            config,
        }
    }

    // === Phase ===

    /// May `color` move pieces under the configured gate?
    #[must_use]
    pub fn may_move(&self, color: PieceColor) -> bool {
        match self.config.movement_gate {
            MovementGate::PerPlayer => self.players[color].placement_done(),
            MovementGate::Global => self.players.iter().all(|(_, p)| p.placement_done()),
        }
    }

    /// May `color` fly (move to any empty position)?
    #[must_use]
    pub fn eligible_for_flying(&self, color: PieceColor) -> bool {
        self.config.flying_enabled
            && self.may_move(color)
            && self.players[color].on_board == self.config.flying_threshold
    }

    /// The stage `color` is in right now.
    #[must_use]
    pub fn phase_for(&self, color: PieceColor) -> Phase {
        if !self.may_move(color) {
            Phase::Placing
        } else if self.eligible_for_flying(color) {
            Phase::Flying
        } else {
            Phase::Moving
        }
    }

    // === Placement and movement ===

    /// Can a piece be placed at `id`?
    #[must_use]
    pub fn can_place(&self, id: PositionId) -> bool {
        self.graph.contains(id) && self.board.is_empty(id)
    }

    /// Can `mover` move from `from` to `to` while in `phase`?
    #[must_use]
    pub fn can_move(
        &self,
        from: PositionId,
        to: PositionId,
        mover: PieceColor,
        phase: Phase,
    ) -> bool {
        self.board.occupant(from) == Some(mover)
            && self.can_place(to)
            && (phase == Phase::Flying || self.graph.are_adjacent(from, to))
    }

    /// Can the piece at `from` go anywhere, given `phase`?
    #[must_use]
    pub fn is_mobile(&self, from: PositionId, phase: Phase) -> bool {
        match phase {
            Phase::Flying => self.board.empty_positions().next().is_some(),
            _ => self.graph.neighbors(from).iter().any(|n| self.board.is_empty(*n)),
        }
    }

    // === Mills ===

    fn line_filled_by(&self, line: &MillLine, color: PieceColor) -> bool {
        line.positions().iter().all(|id| self.board.occupant(*id) == Some(color))
    }

    /// Does a line through `id` consist entirely of `color`?
    #[must_use]
    pub fn forms_mill(&self, id: PositionId, color: PieceColor) -> bool {
        self.graph
            .mill_lines_containing(id)
            .iter()
            .any(|line| self.line_filled_by(line, color))
    }

    /// Is the piece at `id` part of a mill right now?
    #[must_use]
    pub fn is_in_mill(&self, id: PositionId) -> bool {
        self.board
            .occupant(id)
            .is_some_and(|color| self.forms_mill(id, color))
    }

    /// The mill lines through `id` currently filled by its occupant.
    #[must_use]
    pub fn mills_at(&self, id: PositionId) -> Vec<MillLine> {
        let Some(color) = self.board.occupant(id) else {
            return Vec::new();
        };
        self.graph
            .mill_lines_containing(id)
            .iter()
            .filter(|line| self.line_filled_by(line, color))
            .copied()
            .collect()
    }

    // === Removal ===

    /// May `acting` remove the piece at `id`?
    ///
    /// Only opponent pieces; a piece in a mill is protected unless every
    /// opponent piece is in a mill.
    #[must_use]
    pub fn can_remove(&self, id: PositionId, acting: PieceColor) -> bool {
        let opponent = acting.opponent();
        if self.board.occupant(id) != Some(opponent) {
            return false;
        }
        !self.is_in_mill(id) || self.board.positions_of(opponent).all(|p| self.is_in_mill(p))
    }

    // === Blockage ===

    /// Does `color` have no legal placement or move at all?
    ///
    /// Judged strictly for `color`: the opponent's blocked pieces never count.
    #[must_use]
    pub fn has_no_legal_move(&self, color: PieceColor) -> bool {
        let can_place =
            self.players[color].unplaced > 0 && self.board.empty_positions().next().is_some();
        if can_place {
            return false;
        }
        if !self.may_move(color) {
            return true;
        }
        let phase = self.phase_for(color);
        !self.board.positions_of(color).any(|from| self.is_mobile(from, phase))
    }

    // === Enumeration ===

    /// Every legal action for `color`.
    ///
    /// With `removal_pending`, only removals are listed.
    #[must_use]
    pub fn legal_actions(&self, color: PieceColor, removal_pending: bool) -> Vec<Action> {
        if removal_pending {
            return self
                .board
                .positions_of(color.opponent())
                .filter(|id| self.can_remove(*id, color))
                .map(|id| Action::remove(id, color))
                .collect();
        }

        let mut actions = Vec::new();
        if self.players[color].unplaced > 0 {
            actions.extend(self.board.empty_positions().map(|id| Action::place(id, color)));
        }
        if self.may_move(color) {
            let phase = self.phase_for(color);
            for from in self.board.positions_of(color) {
                let targets: Vec<PositionId> = match phase {
                    Phase::Flying => self.board.empty_positions().collect(),
                    _ => self
                        .graph
                        .neighbors(from)
                        .iter()
                        .copied()
                        .filter(|to| self.board.is_empty(*to))
                        .collect(),
                };
                actions.extend(targets.into_iter().map(|to| Action::movement(from, to, color)));
            }
        }
        actions
    }
}
