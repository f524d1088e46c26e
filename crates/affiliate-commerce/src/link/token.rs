//! Token sources for affiliate links.
//!
//! Tokens are cosmetic. Nothing checks them for uniqueness, so two links can
//! share a token.

/// Characters a token is drawn from (base 36).
pub const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Produces short random-looking strings for link tokens.
pub trait TokenSource {
    /// Draw the next token.
    fn next_token(&mut self) -> String;
}

/// Uniform random tokens over [`TOKEN_ALPHABET`].
#[cfg(feature = "rand")]
#[derive(Debug, Clone)]
pub struct RandomTokenSource {
    rng: rand::rngs::StdRng,
    length: usize,
}

#[cfg(feature = "rand")]
impl RandomTokenSource {
    /// Seed from OS entropy.
    pub fn new(length: usize) -> Self {
        use rand::SeedableRng;
        Self {
            rng: rand::rngs::StdRng::from_entropy(),
            length,
        }
    }

    /// Seeded source for reproducible runs.
    pub fn with_seed(length: usize, seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            rng: rand::rngs::StdRng::seed_from_u64(seed),
            length,
        }
    }
}

#[cfg(feature = "rand")]
impl TokenSource for RandomTokenSource {
    fn next_token(&mut self) -> String {
        use rand::Rng;
        (0..self.length)
            .map(|_| TOKEN_ALPHABET[self.rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
            .collect()
    }
}

/// Deterministic source that cycles through preset tokens.
#[derive(Debug, Clone, Default)]
pub struct FixedTokenSource {
    tokens: Vec<String>,
    next: usize,
}

impl FixedTokenSource {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }

    /// How many tokens have been handed out.
    pub fn issued(&self) -> usize {
        self.next
    }
}

impl TokenSource for FixedTokenSource {
    fn next_token(&mut self) -> String {
        if self.tokens.is_empty() {
            return String::new();
        }
        let token = self.tokens[self.next % self.tokens.len()].clone();
        self.next += 1;
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_source_cycles() {
        let mut source = FixedTokenSource::new(["abc12", "xyz89"]);
        assert_eq!(source.next_token(), "abc12");
        assert_eq!(source.next_token(), "xyz89");
        assert_eq!(source.next_token(), "abc12");
        assert_eq!(source.issued(), 3);
    }

    #[test]
    fn test_fixed_source_empty() {
        let mut source = FixedTokenSource::default();
        assert_eq!(source.next_token(), "");
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_random_token_shape() {
        let mut source = RandomTokenSource::new(6);
        for _ in 0..50 {
            let token = source.next_token();
            assert_eq!(token.len(), 6);
            assert!(token.bytes().all(|b| TOKEN_ALPHABET.contains(&b)));
        }
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = RandomTokenSource::with_seed(8, 42);
        let mut b = RandomTokenSource::with_seed(8, 42);
        assert_eq!(a.next_token(), b.next_token());
        assert_eq!(a.next_token(), b.next_token());
    }
}
