//! Perfect riffle shuffles and the order of the permutations they induce.
//!
//! A [`Shuffler`] owns a [`Deck`] of totally ordered tokens and a private
//! random engine. It applies any [`Shuffle`] in place and can count how many
//! applications bring the deck back to ascending order.
//!
//! ## Shuffles
//!
//! - [`Shuffle::StlShuffle`] and [`Shuffle::FisherYates`] draw uniform random permutations
//! - [`Shuffle::Outshuffle`] and [`Shuffle::Inshuffle`] are the two perfect riffles
//! - [`Shuffle::InverseOutshuffle`] and [`Shuffle::InverseInshuffle`] undo them in one step
//!
//! ```
//! use riffle::*;
//! let mut shuffler = Shuffler::<u16>::new();
//! shuffler.generate(STANDARD_DECK_SIZE);
//! assert_eq!(shuffler.restore_to_identity(Shuffle::Outshuffle), 8);
//! ```
pub mod deck;
pub mod engine;
pub mod shuffle;

pub use deck::*;
pub use engine::*;
pub use shuffle::*;

// ============================================================================
// DECK PARAMETERS
// ============================================================================
/// Smallest deck that can be generated. Smaller requests yield an empty deck.
pub const MIN_DECK_SIZE: usize = 3;
/// Size of a standard deck of playing cards.
pub const STANDARD_DECK_SIZE: usize = 52;
/// Default cap on shuffle applications for bounded restoration.
/// Deterministic riffles on decks of a few thousand cards restore well within it.
pub const RESTORE_BUDGET: usize = 0x10000;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at INFO level.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .unwrap_or_else(|e| eprintln!("logger already initialized: {}", e));
}
