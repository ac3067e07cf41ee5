//! Presentation filler for network insights.
//!
//! Nothing produced here is derived from model output. The dashboard wants
//! a risk gauge and a week-long chart next to every insight, and the
//! provider gives us neither, so these values are random.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Severity, TimelinePoint, VisualData};

pub const TIMELINE_DAYS: usize = 7;

pub trait PlaceholderGenerator: Send + Sync {
    fn visual_data(&self) -> VisualData;
}

/// Thread-RNG backed generator used in normal operation
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPlaceholders;

impl PlaceholderGenerator for RandomPlaceholders {
    fn visual_data(&self) -> VisualData {
        fill_visual_data(&mut rand::rng())
    }
}

/// Deterministic generator for tests and reproducible demos
pub struct SeededPlaceholders {
    rng: Mutex<StdRng>,
}

impl SeededPlaceholders {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl PlaceholderGenerator for SeededPlaceholders {
    fn visual_data(&self) -> VisualData {
        fill_visual_data(&mut *self.rng.lock())
    }
}

fn fill_visual_data<R: Rng + ?Sized>(rng: &mut R) -> VisualData {
    let risk_score = rng.random_range(0..100);
    let priority_level = Severity::ALL[rng.random_range(0..Severity::ALL.len())];
    let timeline = (1..=TIMELINE_DAYS)
        .map(|day| TimelinePoint {
            day: format!("Day {}", day),
            risk: rng.random_range(0..100),
            bandwidth: 80 + rng.random_range(0..20),
        })
        .collect();

    VisualData {
        risk_score,
        priority_level,
        timeline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_data_ranges() {
        let generator = RandomPlaceholders;
        for _ in 0..50 {
            let data = generator.visual_data();
            assert!(data.risk_score < 100);
            assert_eq!(data.timeline.len(), TIMELINE_DAYS);
            for (i, point) in data.timeline.iter().enumerate() {
                assert_eq!(point.day, format!("Day {}", i + 1));
                assert!(point.risk < 100);
                assert!((80..100).contains(&point.bandwidth));
            }
        }
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let a = SeededPlaceholders::new(42);
        let b = SeededPlaceholders::new(42);
        assert_eq!(a.visual_data(), b.visual_data());
        assert_eq!(a.visual_data(), b.visual_data());
    }
}
