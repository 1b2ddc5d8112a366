use freewill_core::{
    apply_override, calculate_influence, sample_population, select_influence_indices, ActionSet,
    Population,
};
use freewill_env::{DeterministicSource, NonReproducibleSource};
use proptest::prelude::*;

fn actions(count: usize) -> ActionSet {
    ActionSet::new((0..count).map(|i| format!("a{}", i))).unwrap()
}

proptest! {
    #[test]
    fn prop_override_count_is_untouched_matches_plus_k(
        seed in any::<u64>(),
        n in 1..2_000usize,
        k_frac in 0.0..=1.0f64,
        action_count in 1..6usize,
    ) {
        let actions = actions(action_count);
        let target = actions.first();
        let k = ((n as f64) * k_frac) as usize;
        let master = DeterministicSource::new(seed);

        let baseline = Population::generate(n, &actions, &mut master.derive(1)).unwrap();
        let influence = select_influence_indices(n, k, &mut master.derive(2)).unwrap();
        let final_states = apply_override(&baseline, &influence, target).unwrap();

        let mask = influence.mask();
        let untouched_matches = baseline
            .states()
            .iter()
            .zip(&mask)
            .filter(|&(&s, &hit)| !hit && s == target)
            .count();

        prop_assert_eq!(influence.len(), k);
        prop_assert_eq!(final_states.len(), baseline.len());
        prop_assert_eq!(final_states.count(target), untouched_matches + k);
    }

    #[test]
    fn prop_override_is_idempotent(
        seed in any::<u64>(),
        n in 1..1_000usize,
        k in 0..1_000usize,
    ) {
        let k = k.min(n);
        let actions = ActionSet::cardinal();
        let target = actions.action("south").unwrap();
        let master = DeterministicSource::new(seed);

        let baseline = Population::generate(n, &actions, &mut master.derive(1)).unwrap();
        let influence = select_influence_indices(n, k, &mut master.derive(2)).unwrap();

        let once = apply_override(&baseline, &influence, target).unwrap();
        let twice = apply_override(&once, &influence, target).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_percentages_bounded(
        seed in any::<u64>(),
        n in 1..2_000usize,
        k in 0..2_000usize,
        s in 1..2_000usize,
    ) {
        let k = k.min(n);
        let s = s.min(n);
        let actions = ActionSet::cardinal();
        let target = actions.first();
        let master = DeterministicSource::new(seed);
        let mut observer = NonReproducibleSource::new().unwrap();

        let baseline = Population::generate(n, &actions, &mut master.derive(1)).unwrap();
        let influence = select_influence_indices(n, k, &mut master.derive(2)).unwrap();
        let final_states = apply_override(&baseline, &influence, target).unwrap();
        let (_, observation) = sample_population(&final_states, s, &mut observer).unwrap();
        let report = calculate_influence(&baseline, &final_states, target, &observation).unwrap();

        let percentages = [
            report.baseline_percentage,
            report.majority_percentage,
            report.random_percentage,
        ];
        for pct in percentages {
            prop_assert!((0.0..=100.0).contains(&pct));
        }
        for delta in [report.free_will_influence, report.random_influence] {
            prop_assert!((-100.0..=100.0).contains(&delta));
        }
        // Overrides only ever add target members
        prop_assert!(report.free_will_influence >= 0.0);
        if k == 0 {
            prop_assert_eq!(report.free_will_influence, 0.0);
        }
        if k == n {
            prop_assert_eq!(report.majority_percentage, 100.0);
        }
    }
}

#[test]
fn test_baseline_converges_to_uniform_share() {
    let actions = ActionSet::cardinal();
    let target = actions.first();
    let mut source = DeterministicSource::new(42);
    let baseline = Population::generate(200_000, &actions, &mut source).unwrap();

    let share = 100.0 * baseline.count(target) as f64 / baseline.len() as f64;
    assert!((share - 25.0).abs() < 0.5, "share was {}", share);
}
