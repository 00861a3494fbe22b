//! Reproducible lineup selection.
//!
//! A 32-bit linear-congruential generator picks one question per absurdity
//! level. The same seed always yields the same lineup, so tests can assert
//! on exact output instead of depending on wall-clock time.

use std::ops::RangeInclusive;

use tracing::debug;

use crate::question::{DEFAULT_PET_NAME, FLOW_LENGTH, MAX_ABSURDITY, MIN_ABSURDITY, NewQuestion};

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;

const LEVELS: RangeInclusive<u8> = MIN_ABSURDITY..=MAX_ABSURDITY;

/// Linear-congruential generator (modulus 2^32).
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Create a generator. The high and low halves of the seed are folded together.
    pub fn new(seed: u64) -> Self {
        Self {
            state: (seed ^ (seed >> 32)) as u32,
        }
    }

    /// Advance and return the new state.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }

    /// A value in `0..bound`, or 0 when `bound` is 0.
    ///
    /// Scales by the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        ((u64::from(self.next_u32()) * bound as u64) >> 32) as usize
    }
}

/// Pick a lineup of up to [`FLOW_LENGTH`] questions from `pool`.
///
/// One question is drawn per absurdity level 1-10. A draw that carries the
/// pet-name placeholder is re-rolled among the placeholder-free questions
/// at that level when there are any. Levels with no candidate are filled
/// from whatever is left of the pool. Entries whose level is outside 1-10
/// are never picked. Any placeholder that survives is
/// replaced with [`DEFAULT_PET_NAME`]. Orders run 1..=N, sorted by
/// absurdity level.
pub fn select_lineup(pool: &[NewQuestion], seed: u64) -> Vec<NewQuestion> {
    let mut rng = Lcg::new(seed);
    let mut taken = vec![false; pool.len()];
    let mut picks: Vec<NewQuestion> = Vec::with_capacity(FLOW_LENGTH);

    for level in LEVELS {
        if picks.len() == FLOW_LENGTH {
            break;
        }

        let candidates: Vec<usize> = (0..pool.len())
            .filter(|&i| !taken[i] && pool[i].absurdity_level == level)
            .collect();
        if candidates.is_empty() {
            debug!(level, "no question at this absurdity level, leaving a gap");
            continue;
        }

        let mut index = candidates[rng.below(candidates.len())];
        if pool[index].has_placeholder() {
            let plain: Vec<usize> = candidates
                .iter()
                .copied()
                .filter(|&i| !pool[i].has_placeholder())
                .collect();
            if !plain.is_empty() {
                index = plain[rng.below(plain.len())];
            }
        }

        taken[index] = true;
        picks.push(pool[index].clone());
    }

    while picks.len() < FLOW_LENGTH {
        let remaining: Vec<usize> = (0..pool.len())
            .filter(|&i| !taken[i] && LEVELS.contains(&pool[i].absurdity_level))
            .collect();
        if remaining.is_empty() {
            break;
        }
        let index = remaining[rng.below(remaining.len())];
        taken[index] = true;
        picks.push(pool[index].clone());
    }

    picks.sort_by_key(|q| q.absurdity_level);
    for (i, question) in picks.iter_mut().enumerate() {
        if question.has_placeholder() {
            question.substitute_pet_name(DEFAULT_PET_NAME);
        }
        question.order = i as u32 + 1;
    }

    debug!(seed, count = picks.len(), "selected question lineup");
    picks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::builtin_pool;
    use crate::question::QuestionType;
    use proptest::prelude::*;

    fn text(level: u8, label: &str) -> NewQuestion {
        NewQuestion::new(format!("{label} (level {level})"), QuestionType::Text, 0, level)
    }

    #[test]
    fn lcg_known_sequence() {
        let mut rng = Lcg::new(0);
        assert_eq!(rng.next_u32(), 1_013_904_223);
        assert_eq!(rng.next_u32(), 1_196_435_762);
        assert_eq!(rng.next_u32(), 3_519_870_697);
    }

    #[test]
    fn lcg_below_stays_in_bounds() {
        let mut rng = Lcg::new(7);
        for bound in 1..50 {
            assert!(rng.below(bound) < bound);
        }
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn same_seed_same_lineup() {
        let pool = builtin_pool();
        assert_eq!(select_lineup(&pool, 1234), select_lineup(&pool, 1234));
    }

    #[test]
    fn seeds_produce_variety() {
        let pool = builtin_pool();
        let first = select_lineup(&pool, 0);
        assert!((1..20).any(|seed| select_lineup(&pool, seed) != first));
    }

    #[test]
    fn one_question_per_level_from_builtin_pool() {
        let lineup = select_lineup(&builtin_pool(), 99);
        let levels: Vec<u8> = lineup.iter().map(|q| q.absurdity_level).collect();
        assert_eq!(levels, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn placeholder_rerolled_when_alternative_exists() {
        let pool = vec![
            NewQuestion::new("Does [PET_NAME] know?", QuestionType::Text, 0, 1),
            text(1, "plain"),
        ];
        for seed in 0..20 {
            let lineup = select_lineup(&pool, seed);
            assert_eq!(lineup[0].question_text, "plain (level 1)");
        }
    }

    #[test]
    fn placeholder_substituted_when_alone() {
        let pool = vec![NewQuestion::new("Does [PET_NAME] know?", QuestionType::Text, 0, 1)];
        let lineup = select_lineup(&pool, 3);
        assert_eq!(lineup.len(), 1);
        assert_eq!(lineup[0].question_text, "Does Fluffy know?");
    }

    #[test]
    fn gaps_filled_from_remaining_pool() {
        // Nothing at levels 9 and 10, three extras at level 1.
        let mut pool: Vec<NewQuestion> = (1..=8).map(|l| text(l, "only")).collect();
        pool.push(text(1, "extra a"));
        pool.push(text(1, "extra b"));
        pool.push(text(1, "extra c"));

        let lineup = select_lineup(&pool, 5);
        assert_eq!(lineup.len(), FLOW_LENGTH);
        let orders: Vec<u32> = lineup.iter().map(|q| q.order).collect();
        assert_eq!(orders, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn out_of_range_levels_never_picked() {
        let mut pool: Vec<NewQuestion> = (1..=9).map(|l| text(l, "valid")).collect();
        pool.push(text(0, "too tame"));
        pool.push(text(11, "too wild"));

        for seed in 0..20 {
            let lineup = select_lineup(&pool, seed);
            assert_eq!(lineup.len(), 9);
            assert!(lineup.iter().all(|q| (1..=10).contains(&q.absurdity_level)));
            let orders: Vec<u32> = lineup.iter().map(|q| q.order).collect();
            assert_eq!(orders, (1..=9).collect::<Vec<u32>>());
        }
    }

    #[test]
    fn small_pool_yields_everything() {
        let pool: Vec<NewQuestion> = (1..=4).map(|l| text(l, "tiny")).collect();
        let lineup = select_lineup(&pool, 11);
        assert_eq!(lineup.len(), 4);
    }

    proptest! {
        #[test]
        fn lineup_orders_are_one_through_ten(seed in any::<u64>()) {
            let lineup = select_lineup(&builtin_pool(), seed);
            prop_assert_eq!(lineup.len(), FLOW_LENGTH);
            let mut orders: Vec<u32> = lineup.iter().map(|q| q.order).collect();
            orders.sort_unstable();
            prop_assert_eq!(orders, (1..=10).collect::<Vec<u32>>());
            prop_assert!(lineup.iter().all(|q| !q.has_placeholder()));
        }
    }
}
