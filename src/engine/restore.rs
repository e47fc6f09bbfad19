use crate::MIN_DECK_SIZE;
use crate::Shuffle;
use crate::Shuffler;

/// Counting how many applications of a shuffle bring the deck back to
/// ascending order. For the riffles this is the order of the permutation and
/// depends only on the deck size. For the random kinds it is a stopping time
/// that varies run to run and has no upper bound.
impl<T> Shuffler<T>
where
    T: Ord + Clone,
{
    /// Shuffles until restored, counting the first application as 1.
    ///
    /// Unbounded: with a random kind on a large deck this may not return in
    /// any practical amount of time. Prefer [`Shuffler::restore_within`] there.
    pub fn restore_to_identity(&mut self, shuffle: Shuffle) -> usize {
        let mut count = 0;
        loop {
            count += 1;
            self.apply(shuffle);
            if self.is_restored() {
                break;
            }
        }
        log::debug!("{:<32}{:<32}", self.describe(shuffle), count);
        count
    }

    /// Shuffles until restored or until `budget` applications have been spent.
    ///
    /// Fails on a deck smaller than [`MIN_DECK_SIZE`], and when the budget runs
    /// out first. The deck is left wherever the last application put it.
    pub fn restore_within(&mut self, shuffle: Shuffle, budget: usize) -> anyhow::Result<usize> {
        if self.size() < MIN_DECK_SIZE {
            return Err(anyhow::anyhow!(
                "cannot restore a deck of {} cards (minimum {})",
                self.size(),
                MIN_DECK_SIZE
            ));
        }
        (1..=budget)
            .find(|_| {
                self.apply(shuffle);
                self.is_restored()
            })
            .inspect(|count| log::debug!("{:<32}{:<32}", self.describe(shuffle), count))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "{} did not restore {} cards within {} shuffles",
                    shuffle,
                    self.size(),
                    budget
                )
            })
            .inspect_err(|e| log::warn!("{}", e))
    }

    fn describe(&self, shuffle: Shuffle) -> String {
        format!("{} restored {} cards", shuffle, self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RESTORE_BUDGET;
    use crate::STANDARD_DECK_SIZE;

    #[test]
    fn standard_deck_outshuffle() {
        let mut shuffler = Shuffler::<u8>::seeded(0);
        shuffler.generate(STANDARD_DECK_SIZE);
        assert!(shuffler.restore_to_identity(Shuffle::Outshuffle) == 8);
        assert!(shuffler.is_restored());
    }

    #[test]
    fn standard_deck_inshuffle() {
        let mut shuffler = Shuffler::<u8>::seeded(0);
        shuffler.generate(STANDARD_DECK_SIZE);
        assert!(shuffler.restore_to_identity(Shuffle::Inshuffle) == 52);
    }

    #[test]
    fn inverse_orders_match() {
        let mut shuffler = Shuffler::<usize>::seeded(0);
        for n in 3..100 {
            shuffler.generate(n);
            for shuffle in [Shuffle::Outshuffle, Shuffle::Inshuffle] {
                let forward = shuffler.restore_to_identity(shuffle);
                let inverse = shuffler.restore_to_identity(shuffle.inverse().unwrap());
                assert!(forward == inverse, "{} on {} cards", shuffle, n);
            }
        }
    }

    /// an odd out-shuffle fixes the top card and acts as an in-shuffle on the rest
    #[test]
    fn odd_outshuffle_matches_smaller_inshuffle() {
        let mut odd = Shuffler::<usize>::seeded(0);
        let mut even = Shuffler::<usize>::seeded(0);
        for n in (4..100).step_by(2) {
            odd.generate(n + 1);
            even.generate(n);
            assert!(
                odd.restore_to_identity(Shuffle::Outshuffle)
                    == even.restore_to_identity(Shuffle::Inshuffle)
            );
        }
    }

    #[test]
    fn within_budget() {
        let mut shuffler = Shuffler::<u16>::seeded(0);
        shuffler.generate(STANDARD_DECK_SIZE);
        assert!(shuffler.restore_within(Shuffle::Outshuffle, 8).unwrap() == 8);
        let count = shuffler.restore_within(Shuffle::InverseInshuffle, RESTORE_BUDGET);
        assert!(count.unwrap() == 52);
    }

    #[test]
    fn exhausted_budget() {
        let mut shuffler = Shuffler::<u16>::seeded(0);
        shuffler.generate(STANDARD_DECK_SIZE);
        assert!(shuffler.restore_within(Shuffle::Outshuffle, 7).is_err());
        assert!(!shuffler.is_restored());
    }

    #[test]
    fn undersized_refuses() {
        let mut shuffler = Shuffler::<u16>::seeded(0);
        shuffler.generate(1);
        assert!(shuffler.restore_within(Shuffle::Outshuffle, RESTORE_BUDGET).is_err());
    }

    #[test]
    fn random_kinds_terminate_on_tiny_decks() {
        let mut shuffler = Shuffler::<u8>::seeded(11);
        shuffler.generate(3);
        for shuffle in [Shuffle::StlShuffle, Shuffle::FisherYates] {
            let count = shuffler.restore_within(shuffle, RESTORE_BUDGET).unwrap();
            assert!(count >= 1);
            assert!(shuffler.is_restored());
        }
    }
}
