//! Simulated provider health tiers.
//!
//! Drawn once per provider from an injected RNG. They carry no meaning
//! outside the process.

use rand::Rng;

/// How quickly the provider answers requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseTime {
    Fast,
    Moderate,
    Slow,
}

impl ResponseTime {
    pub const ALL: [ResponseTime; 3] = [Self::Fast, Self::Moderate, Self::Slow];
}

impl std::fmt::Display for ResponseTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseTime::Fast => write!(f, "fast"),
            ResponseTime::Moderate => write!(f, "moderate"),
            ResponseTime::Slow => write!(f, "slow"),
        }
    }
}

/// How often playback is interrupted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stability {
    Stable,
    Intermittent,
    Unstable,
}

impl Stability {
    pub const ALL: [Stability; 3] = [Self::Stable, Self::Intermittent, Self::Unstable];
}

impl std::fmt::Display for Stability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stability::Stable => write!(f, "stable"),
            Stability::Intermittent => write!(f, "intermittent"),
            Stability::Unstable => write!(f, "unstable"),
        }
    }
}

/// Reputation of the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trust {
    Verified,
    Established,
    Unverified,
}

impl Trust {
    pub const ALL: [Trust; 3] = [Self::Verified, Self::Established, Self::Unverified];
}

impl std::fmt::Display for Trust {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trust::Verified => write!(f, "verified"),
            Trust::Established => write!(f, "established"),
            Trust::Unverified => write!(f, "unverified"),
        }
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, tiers: &[T]) -> T {
    tiers[rng.random_range(0..tiers.len())]
}

/// The three simulated metrics of a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub response_time: ResponseTime,
    pub stability: Stability,
    pub trust: Trust,
}

impl Status {
    /// Draw all three tiers from `rng`
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            response_time: pick(rng, &ResponseTime::ALL),
            stability: pick(rng, &Stability::ALL),
            trust: pick(rng, &Trust::ALL),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "response time: {}, stability: {}, trust: {}",
            self.response_time, self.stability, self.trust
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_same_seed_same_status() {
        let a = Status::draw(&mut ChaCha8Rng::seed_from_u64(7));
        let b = Status::draw(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_draws_cover_every_tier() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let draws: Vec<Status> = (0..200).map(|_| Status::draw(&mut rng)).collect();

        for tier in ResponseTime::ALL {
            assert!(draws.iter().any(|s| s.response_time == tier));
        }
        for tier in Stability::ALL {
            assert!(draws.iter().any(|s| s.stability == tier));
        }
        for tier in Trust::ALL {
            assert!(draws.iter().any(|s| s.trust == tier));
        }
    }

    #[test]
    fn test_status_display() {
        let status = Status {
            response_time: ResponseTime::Fast,
            stability: Stability::Stable,
            trust: Trust::Verified,
        };
        assert_eq!(
            status.to_string(),
            "response time: fast, stability: stable, trust: verified"
        );
    }
}
