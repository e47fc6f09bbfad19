use crate::Arbitrary;

/// The closed vocabulary of permutations a [`Shuffler`] can apply.
///
/// Two kinds draw from the shuffler's random engine. The four riffle kinds are
/// fixed permutations of a deck of a given size, and each pair of forward and
/// inverse riffles composes to the identity.
///
/// [`Shuffler`]: crate::Shuffler
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Shuffle {
    StlShuffle,
    FisherYates,
    Outshuffle,
    Inshuffle,
    InverseOutshuffle,
    InverseInshuffle,
}

impl Shuffle {
    pub const fn all() -> &'static [Self] {
        &[
            Self::StlShuffle,
            Self::FisherYates,
            Self::Outshuffle,
            Self::Inshuffle,
            Self::InverseOutshuffle,
            Self::InverseInshuffle,
        ]
    }
    /// Whether this kind consumes randomness.
    pub const fn is_random(&self) -> bool {
        match self {
            Self::StlShuffle | Self::FisherYates => true,
            _ => false,
        }
    }
    /// The riffle that undoes this one in a single application.
    /// Random shuffles have no fixed inverse.
    pub const fn inverse(&self) -> Option<Self> {
        match self {
            Self::StlShuffle => None,
            Self::FisherYates => None,
            Self::Outshuffle => Some(Self::InverseOutshuffle),
            Self::Inshuffle => Some(Self::InverseInshuffle),
            Self::InverseOutshuffle => Some(Self::Outshuffle),
            Self::InverseInshuffle => Some(Self::Inshuffle),
        }
    }
}

impl std::fmt::Display for Shuffle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::StlShuffle => write!(f, "stl"),
            Self::FisherYates => write!(f, "fy"),
            Self::Outshuffle => write!(f, "out"),
            Self::Inshuffle => write!(f, "in"),
            Self::InverseOutshuffle => write!(f, "inv-out"),
            Self::InverseInshuffle => write!(f, "inv-in"),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Shuffle {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .find(|shuffle| shuffle.to_string() == s.trim().to_lowercase())
            .copied()
            .ok_or_else(|| anyhow::anyhow!("invalid shuffle: {}", s))
    }
}
impl std::str::FromStr for Shuffle {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl Arbitrary for Shuffle {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        Self::all().choose(rng).copied().unwrap_or(Self::FisherYates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        for shuffle in Shuffle::all() {
            let name = shuffle.to_string();
            assert!(Shuffle::try_from(name.as_str()).unwrap() == *shuffle);
        }
    }

    #[test]
    fn parse_loosely() {
        assert!(Shuffle::try_from(" OUT ").unwrap() == Shuffle::Outshuffle);
        assert!("inv-in".parse::<Shuffle>().unwrap() == Shuffle::InverseInshuffle);
        assert!(Shuffle::try_from("faro").is_err());
    }

    #[test]
    fn inverse_involution() {
        for shuffle in Shuffle::all() {
            match shuffle.inverse() {
                Some(inverse) => assert!(inverse.inverse() == Some(*shuffle)),
                None => assert!(shuffle.is_random()),
            }
        }
    }

    #[test]
    fn arbitrary_in_vocabulary() {
        assert!(Shuffle::all().contains(&Shuffle::random()));
    }
}
