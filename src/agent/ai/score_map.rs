use smallvec::SmallVec;

use super::score::Score;

/// Key of a score map entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoveSlot {
    /// Position had no legal moves; the entry is its own terminal score
    NoMoves,
    /// Index into the position's legal move enumeration
    Index(usize),
}

/// Guaranteed score of the player to move for each evaluated move.
///
/// Entries are kept in the order they were recorded, which is always move
/// index order, so scanning the map never depends on hashing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreMap {
    entries: SmallVec<[(MoveSlot, Score); 16]>,
}

impl ScoreMap {
    /// Map for a position without moves
    pub fn terminal(score: Score) -> Self {
        Self::single(MoveSlot::NoMoves, score)
    }

    pub fn single(slot: MoveSlot, score: Score) -> Self {
        let mut entries = SmallVec::new();
        entries.push((slot, score));
        Self { entries }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: SmallVec::with_capacity(capacity),
        }
    }

    /// Record the score of move `index`. Callers record in ascending order.
    pub(crate) fn insert(&mut self, index: usize, score: Score) {
        debug_assert!(
            self.entries
                .last()
                .map_or(true, |&(slot, _)| slot < MoveSlot::Index(index)),
            "moves must be recorded in index order"
        );
        self.entries.push((MoveSlot::Index(index), score));
    }

    pub fn get(&self, slot: MoveSlot) -> Option<Score> {
        self.entries
            .iter()
            .find(|&&(s, _)| s == slot)
            .map(|&(_, score)| score)
    }

    /// Best score in the map, `None` only for an empty map
    pub fn max(&self) -> Option<Score> {
        self.entries.iter().map(|&(_, score)| score).max()
    }

    pub fn contains(&self, score: Score) -> bool {
        self.entries.iter().any(|&(_, s)| s == score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MoveSlot, Score)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether this is the single sentinel entry of a position without moves
    pub fn is_terminal(&self) -> bool {
        matches!(self.entries.as_slice(), [(MoveSlot::NoMoves, _)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_map() {
        let map = ScoreMap::terminal(Score::Draw);
        assert!(map.is_terminal());
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(MoveSlot::NoMoves), Some(Score::Draw));
        assert_eq!(map.max(), Some(Score::Draw));
    }

    #[test]
    fn test_insert_and_scan_in_order() {
        let mut map = ScoreMap::with_capacity(3);
        map.insert(0, Score::Loss);
        map.insert(1, Score::Win);
        map.insert(2, Score::Draw);

        let slots: Vec<MoveSlot> = map.iter().map(|(slot, _)| slot).collect();
        assert_eq!(
            slots,
            vec![MoveSlot::Index(0), MoveSlot::Index(1), MoveSlot::Index(2)]
        );
        assert_eq!(map.max(), Some(Score::Win));
        assert!(map.contains(Score::Draw));
        assert!(!map.is_terminal());
        assert_eq!(map.get(MoveSlot::Index(1)), Some(Score::Win));
        assert_eq!(map.get(MoveSlot::NoMoves), None);
    }

    #[test]
    fn test_empty_map_has_no_max() {
        let map = ScoreMap::default();
        assert!(map.is_empty());
        assert_eq!(map.max(), None);
    }
}
