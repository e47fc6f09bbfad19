use crate::MIN_DECK_SIZE;

/// An ordered sequence of tokens that is always a permutation of `0..n`.
///
/// The canonical arrangement is ascending. Shuffles rearrange the tokens in
/// place through [`Deck::cards_mut`] but never add, drop or duplicate one, so
/// sortedness alone decides whether the deck is restored.
///
/// Decks smaller than [`MIN_DECK_SIZE`] are never built; asking for one
/// leaves the deck empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck<T> {
    cards: Vec<T>,
    odd: bool,
}

impl<T> Default for Deck<T> {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            odd: false,
        }
    }
}

impl<T> Deck<T>
where
    T: Ord + Clone + TryFrom<usize>,
{
    /// Replaces the deck with the ascending sequence `0..size`.
    ///
    /// Returns a snapshot of the new arrangement. An undersized request, or
    /// one whose tokens do not fit in `T`, empties the deck instead.
    pub fn generate(&mut self, size: usize) -> Vec<T> {
        self.cards = Self::canonical(size).unwrap_or_default();
        self.odd = self.cards.len() % 2 == 1;
        self.snapshot()
    }
    /// Returns to canonical order at the current size.
    pub fn reset(&mut self) {
        self.generate(self.size());
    }
    fn canonical(size: usize) -> Option<Vec<T>> {
        if size < MIN_DECK_SIZE {
            log::warn!("{:<32}{:<32}", "deck below minimum size", size);
            return None;
        }
        (0..size)
            .map(<T as TryFrom<usize>>::try_from)
            .collect::<Result<Vec<T>, _>>()
            .inspect_err(|_| log::warn!("{:<32}{:<32}", "deck exceeds token range", size))
            .ok()
    }
}

impl<T> Deck<T>
where
    T: Ord + Clone,
{
    /// Ascending order is the only restored arrangement of a permutation.
    pub fn is_restored(&self) -> bool {
        self.cards.is_sorted()
    }
    /// Owned copy of the current arrangement.
    pub fn snapshot(&self) -> Vec<T> {
        self.cards.clone()
    }
}

impl<T> Deck<T> {
    pub fn size(&self) -> usize {
        self.cards.len()
    }
    /// Parity of the deck as of its last generation.
    pub fn is_odd(&self) -> bool {
        self.odd
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn cards(&self) -> &[T] {
        &self.cards
    }
    /// Shuffles permute in place; the length of the slice is fixed.
    pub fn cards_mut(&mut self) -> &mut [T] {
        &mut self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_canonical() {
        let mut deck = Deck::<u32>::default();
        for n in MIN_DECK_SIZE..64 {
            let cards = deck.generate(n);
            assert!(cards.len() == n);
            assert!(cards.iter().enumerate().all(|(i, &c)| c as usize == i));
            assert!(deck.is_restored());
            assert!(deck.is_odd() == (n % 2 == 1));
        }
    }

    #[test]
    fn generate_undersized() {
        let mut deck = Deck::<usize>::default();
        deck.generate(10);
        for n in 0..MIN_DECK_SIZE {
            assert!(deck.generate(n).is_empty());
            assert!(deck.is_empty());
            assert!(!deck.is_odd());
        }
    }

    #[test]
    fn generate_overflowing() {
        let mut deck = Deck::<u8>::default();
        assert!(deck.generate(256).len() == 256);
        assert!(deck.generate(257).is_empty());
    }

    #[test]
    fn reset_restores() {
        let mut deck = Deck::<i64>::default();
        deck.generate(7);
        deck.cards_mut().reverse();
        assert!(!deck.is_restored());
        deck.reset();
        assert!(deck.is_restored());
        assert!(deck.size() == 7);
        assert!(deck.is_odd());
    }

    #[test]
    fn snapshot_detached() {
        let mut deck = Deck::<usize>::default();
        let before = deck.generate(5);
        deck.cards_mut().swap(0, 4);
        assert!(before == vec![0, 1, 2, 3, 4]);
        assert!(deck.snapshot() == vec![4, 1, 2, 3, 0]);
    }
}
