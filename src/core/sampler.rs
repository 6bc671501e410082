use crate::domain::model::{Birthday, Group, DAYS_IN_YEAR};
use crate::utils::error::{Result, SimError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draws `n` independent, uniformly distributed birthdays from `rng`.
pub fn sample_group<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Group {
    (0..n)
        .map(|_| Birthday::from_sampled(rng.random_range(0..DAYS_IN_YEAR)))
        .collect()
}

/// Owns a random source and hands out fresh groups.
#[derive(Debug, Clone)]
pub struct BirthdaySampler<R = ChaCha8Rng> {
    rng: R,
}

impl BirthdaySampler<ChaCha8Rng> {
    /// Seeds from the operating system. Fails instead of falling back to a weaker source.
    pub fn from_entropy() -> Result<Self> {
        let rng = ChaCha8Rng::try_from_os_rng().map_err(|e| SimError::RandomSourceError {
            message: e.to_string(),
        })?;
        Ok(Self { rng })
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, OS entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Result<Self> {
        match seed {
            Some(seed) => Ok(Self::seeded(seed)),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> BirthdaySampler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn sample_group(&mut self, n: usize) -> Group {
        sample_group(&mut self.rng, n)
    }
}
