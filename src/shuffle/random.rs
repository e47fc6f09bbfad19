use rand::Rng;

/// Uniform random permutation via the library shuffle.
pub fn stl<T, R>(deck: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    use rand::seq::SliceRandom;
    deck.shuffle(rng);
}

/// Uniform random permutation, spelled out.
///
/// Walks from the bottom of the deck to the second card, swapping each
/// position with one drawn uniformly from the inclusive range above it.
pub fn fisher_yates<T, R>(deck: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..deck.len()).rev() {
        let j = rng.random_range(0..=i);
        deck.swap(i, j);
    }
}
