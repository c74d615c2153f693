//! Registry of chains the Tableland network runs on.
//!
//! Table names embed a numeric chain id; replies show the human-readable
//! phrase. The registry is a static list, never mutated at runtime.

/// A chain supported by the Tableland network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    slug: &'static str,
    id: u64,
    phrase: &'static str,
}

/// Every chain Tableland tables can be minted on.
pub const SUPPORTED_CHAINS: &[Chain] = &[
    Chain::new("ethereum", 1, "Ethereum"),
    Chain::new("optimism", 10, "Optimism"),
    Chain::new("polygon", 137, "Polygon"),
    Chain::new("arbitrum", 42161, "Arbitrum One"),
    Chain::new("ethereum-goerli", 5, "Ethereum Goerli"),
    Chain::new("optimism-kovan", 69, "Optimism Kovan"),
    Chain::new("optimism-goerli", 420, "Optimism Goerli"),
    Chain::new("arbitrum-goerli", 421613, "Arbitrum Goerli"),
    Chain::new("polygon-mumbai", 80001, "Polygon Mumbai"),
    Chain::new("local-tableland", 31337, "Local Tableland"),
];

impl Chain {
    const fn new(slug: &'static str, id: u64, phrase: &'static str) -> Self {
        Self { slug, id, phrase }
    }

    /// Look up a chain by its numeric id.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebot_core::Chain;
    ///
    /// let chain = Chain::from_id(137).unwrap();
    /// assert_eq!(chain.slug(), "polygon");
    /// ```
    pub fn from_id(id: u64) -> Option<&'static Chain> {
        SUPPORTED_CHAINS.iter().find(|chain| chain.id == id)
    }

    /// Look up a chain by its slug.
    pub fn from_slug(slug: &str) -> Option<&'static Chain> {
        SUPPORTED_CHAINS.iter().find(|chain| chain.slug == slug)
    }

    /// Machine-readable chain name, e.g. `polygon-mumbai`.
    pub fn slug(&self) -> &'static str {
        self.slug
    }

    /// Numeric chain id, e.g. `80001`.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Human-readable chain name shown in replies, e.g. `Polygon Mumbai`.
    pub fn phrase(&self) -> &'static str {
        self.phrase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_round_trip() {
        for chain in SUPPORTED_CHAINS {
            assert_eq!(Chain::from_id(chain.id()), Some(chain));
            assert_eq!(Chain::from_slug(chain.slug()), Some(chain));
        }
    }

    #[test]
    fn unknown_chain_is_none() {
        assert_eq!(Chain::from_id(2), None);
        assert_eq!(Chain::from_slug("solana"), None);
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in SUPPORTED_CHAINS.iter().enumerate() {
            for b in &SUPPORTED_CHAINS[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }
}
