//! Effect records and the undo history.
//!
//! The history stores what actually happened, not what was asked for: the
//! effect of a placement or move, the removal it triggered (if any), and the
//! counters, turn and status from just before. Undo is then a structural
//! reverse of the record with no rule evaluation.
//!
//! A removal is attached to the record of the placement or move that formed
//! the mill, so one record covers one whole turn.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::PositionId;
use crate::core::{Action, ColorMap, GameStatus, PieceColor, Player};

/// Controller state captured before an effect is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub players: ColorMap<Player>,
    pub to_move: PieceColor,
    pub status: GameStatus,
}

/// The board change made by a placement or move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Placed { at: PositionId },
    Moved { from: PositionId, to: PositionId },
}

/// One applied turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectRecord {
    /// Side that acted.
    pub actor: PieceColor,

    /// The placement or move.
    pub effect: Effect,

    /// Opponent piece taken off as a result of a mill, if any.
    pub removed: Option<PositionId>,

    /// State before `effect` was applied.
    pub before: Checkpoint,
}

impl EffectRecord {
    /// Create a record with no removal.
    #[must_use]
    pub fn new(actor: PieceColor, effect: Effect, before: Checkpoint) -> Self {
        Self {
            actor,
            effect,
            removed: None,
            before,
        }
    }

    /// The actions this record stands for, in the order they were applied.
    pub fn actions(&self) -> impl Iterator<Item = Action> {
        let primary = match self.effect {
            Effect::Placed { at } => Action::place(at, self.actor),
            Effect::Moved { from, to } => Action::movement(from, to, self.actor),
        };
        let removal = self.removed.map(|target| Action::remove(target, self.actor));
        std::iter::once(primary).chain(removal)
    }
}

/// Append-only log of applied turns, popped from the end by undo.
///
/// Backed by `im::Vector`, so cloning a controller does not copy the log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionHistory {
    records: Vector<EffectRecord>,
}

impl ActionHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: EffectRecord) {
        self.records.push_back(record);
    }

    /// Remove and return the most recent record. `None` when empty.
    pub fn pop_last(&mut self) -> Option<EffectRecord> {
        self.records.pop_back()
    }

    /// The most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&EffectRecord> {
        self.records.last()
    }

    /// Attach a removal to the most recent record.
    ///
    /// Returns false if there is no record or it already carries a removal.
    pub fn attach_removal(&mut self, target: PositionId) -> bool {
        match self.records.back_mut() {
            Some(record) if record.removed.is_none() => {
                record.removed = Some(target);
                true
            }
            _ => false,
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Is the history empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &EffectRecord> {
        self.records.iter()
    }

    /// The applied actions, oldest first.
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.records.iter().flat_map(EffectRecord::actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkpoint() -> Checkpoint {
        Checkpoint {
            players: ColorMap::new(|c| Player::new(c, 9)),
            to_move: PieceColor::White,
            status: GameStatus::InProgress,
        }
    }

    fn placed(at: u8) -> EffectRecord {
        EffectRecord::new(PieceColor::White, Effect::Placed { at: PositionId(at) }, checkpoint())
    }

    #[test]
    fn test_push_and_pop() {
        let mut history = ActionHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.pop_last(), None);

        history.push(placed(0));
        history.push(placed(1));
        assert_eq!(history.len(), 2);

        assert_eq!(history.pop_last(), Some(placed(1)));
        assert_eq!(history.last(), Some(&placed(0)));
    }

    #[test]
    fn test_attach_removal() {
        let mut history = ActionHistory::new();
        assert!(!history.attach_removal(PositionId(5)));

        history.push(placed(2));
        assert!(history.attach_removal(PositionId(5)));
        assert!(!history.attach_removal(PositionId(6)));

        assert_eq!(history.last().and_then(|r| r.removed), Some(PositionId(5)));
    }

    #[test]
    fn test_actions_expand_removals() {
        let mut history = ActionHistory::new();
        history.push(placed(2));
        history.attach_removal(PositionId(9));
        history.push(EffectRecord::new(
            PieceColor::Black,
            Effect::Moved {
                from: PositionId(8),
                to: PositionId(7),
            },
            checkpoint(),
        ));

        let actions: Vec<_> = history.actions().collect();
        assert_eq!(
            actions,
            vec![
                Action::place(PositionId(2), PieceColor::White),
                Action::remove(PositionId(9), PieceColor::White),
                Action::movement(PositionId(8), PositionId(7), PieceColor::Black),
            ]
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut history = ActionHistory::new();
        history.push(placed(0));

        let snapshot = history.clone();
        history.push(placed(1));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(history.len(), 2);
    }
}
