//! Perfect riffle shuffles and their inverses.
//!
//! A riffle cuts the deck into a top half and a bottom half and interleaves
//! them card by card. Whichever half lands on the even positions is said to
//! lead. Out-shuffles lead with the top half, so the top card stays on top;
//! in-shuffles lead with the bottom half.
//!
//! When the deck is odd the leading half is the longer one, so its last card
//! is the only one without a partner and falls to the bottom.
//!
//! The inverses read the even and odd positions back out and stack them,
//! leading half first.

/// Which half of the cut occupies the even positions after interleaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lead {
    Top,
    Bottom,
}

impl Lead {
    /// size of the top half of the cut. the leading half gets the extra card.
    fn cut(&self, n: usize) -> usize {
        match self {
            Self::Top => n.div_ceil(2),
            Self::Bottom => n / 2,
        }
    }
}

/// Perfect out-shuffle. `[0,1,2,3,4]` becomes `[0,3,1,4,2]`.
pub fn outshuffle<T: Clone>(deck: &mut [T]) {
    interleave(deck, Lead::Top)
}

/// Perfect in-shuffle. `[0,1,2,3,4,5]` becomes `[3,0,4,1,5,2]`.
pub fn inshuffle<T: Clone>(deck: &mut [T]) {
    interleave(deck, Lead::Bottom)
}

/// Undoes [`outshuffle`] in one application.
pub fn inverse_outshuffle<T: Clone>(deck: &mut [T]) {
    deinterleave(deck, Lead::Top)
}

/// Undoes [`inshuffle`] in one application.
pub fn inverse_inshuffle<T: Clone>(deck: &mut [T]) {
    deinterleave(deck, Lead::Bottom)
}

fn interleave<T: Clone>(deck: &mut [T], lead: Lead) {
    let n = deck.len();
    let cut = lead.cut(n);
    let top = deck[..cut].to_vec();
    let bottom = deck[cut..].to_vec();
    let (evens, odds) = match lead {
        Lead::Top => (top, bottom),
        Lead::Bottom => (bottom, top),
    };
    let pairs = evens.len().min(odds.len());
    for i in 0..pairs {
        deck[2 * i] = evens[i].clone();
        deck[2 * i + 1] = odds[i].clone();
    }
    if let Some(last) = evens.get(pairs) {
        deck[n - 1] = last.clone();
    }
}

fn deinterleave<T: Clone>(deck: &mut [T], lead: Lead) {
    let evens = deck.iter().step_by(2).cloned().collect::<Vec<T>>();
    let odds = deck.iter().skip(1).step_by(2).cloned().collect::<Vec<T>>();
    let (top, bottom) = match lead {
        Lead::Top => (evens, odds),
        Lead::Bottom => (odds, evens),
    };
    top.into_iter()
        .chain(bottom)
        .zip(deck.iter_mut())
        .for_each(|(card, slot)| *slot = card);
}
