use crate::Deck;
use crate::MIN_DECK_SIZE;
use crate::Shuffle;
use crate::shuffle::random;
use crate::shuffle::faro;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Owns a [`Deck`] and the random engine that its randomized shuffles draw from.
///
/// The engine is seeded once at construction and persists across every
/// [`Shuffler::generate`] and [`Shuffler::reset`]. Independent shufflers have
/// independent streams; use [`Shuffler::seeded`] to make one reproducible.
#[derive(Debug, Clone)]
pub struct Shuffler<T = usize> {
    deck: Deck<T>,
    rng: SmallRng,
}

impl<T> Default for Shuffler<T> {
    fn default() -> Self {
        Self::seeded(clock())
    }
}

impl<T> Shuffler<T> {
    /// Seeds from the system clock.
    pub fn new() -> Self {
        Self::default()
    }
    pub fn seeded(seed: u64) -> Self {
        Self {
            deck: Deck::default(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    pub fn size(&self) -> usize {
        self.deck.size()
    }
    pub fn is_odd(&self) -> bool {
        self.deck.is_odd()
    }
    pub fn cards(&self) -> &[T] {
        self.deck.cards()
    }
}

impl<T> Shuffler<T>
where
    T: Ord + Clone + TryFrom<usize>,
{
    /// Replaces the deck with `0..size` in ascending order.
    /// Returns an empty deck when `size` is below [`MIN_DECK_SIZE`].
    pub fn generate(&mut self, size: usize) -> Vec<T> {
        self.deck.generate(size)
    }
    /// Regenerates at the current size.
    pub fn reset(&mut self) {
        self.deck.reset()
    }
}

impl<T> Shuffler<T>
where
    T: Ord + Clone,
{
    /// Snapshot of the current arrangement.
    pub fn deck(&self) -> Vec<T> {
        self.deck.snapshot()
    }
    pub fn is_restored(&self) -> bool {
        self.deck.is_restored()
    }
    /// Permutes the deck in place. A deck that was never validly generated is
    /// left alone.
    pub fn apply(&mut self, shuffle: Shuffle) {
        if self.deck.size() < MIN_DECK_SIZE {
            log::warn!("{:<32}{:<32}", "skipping shuffle of empty deck", shuffle);
            return;
        }
        log::debug!("{:<32}{:<32}", "applying shuffle", shuffle);
        let cards = self.deck.cards_mut();
        match shuffle {
            Shuffle::StlShuffle => random::stl(cards, &mut self.rng),
            Shuffle::FisherYates => random::fisher_yates(cards, &mut self.rng),
            Shuffle::Outshuffle => faro::outshuffle(cards),
            Shuffle::Inshuffle => faro::inshuffle(cards),
            Shuffle::InverseOutshuffle => faro::inverse_outshuffle(cards),
            Shuffle::InverseInshuffle => faro::inverse_inshuffle(cards),
        }
    }
}

/// nanoseconds since the epoch, or zero if the clock runs backwards
fn clock() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
