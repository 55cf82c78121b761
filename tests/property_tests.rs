use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_roster::descent::DescentProblem;
use u_roster::generate::generate_initial;
use u_roster::model::{Official, RATING_MAX, RATING_MIN};
use u_roster::quality::QualityWeights;
use u_roster::roster::{improve_once, optimize_with, RosterConfig, RosterProblem};
use u_roster::scoring::official_score;
use u_roster::stats::compute_statistics;

// --- STRATEGIES ---

prop_compose! {
    fn arb_official()(
        tier in 1u8..=4,
        rating in RATING_MIN..=RATING_MAX
    ) -> (u8, f64) {
        (tier, rating)
    }
}

// A pool with at least `stations` top-tier officials, plus extra random ones.
prop_compose! {
    fn arb_instance()(stations in 1usize..5)(
        stations in Just(stations),
        top in proptest::collection::vec(RATING_MIN..=RATING_MAX, stations..stations + 3),
        rest in proptest::collection::vec(arb_official(), 0..12),
        seed in any::<u64>()
    ) -> (Vec<Official>, usize, u64) {
        let mut officials: Vec<Official> = top
            .into_iter()
            .map(|r| (4u8, r))
            .chain(rest)
            .enumerate()
            .map(|(i, (tier, rating))| {
                Official::new(format!("o{i}"), format!("Official {i}"), tier, rating).unwrap()
            })
            .collect();
        officials.reverse();
        (officials, stations, seed)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_official_score_is_weight_times_rating(off in arb_official()) {
        let (tier, rating) = off;
        let o = Official::new("p", "P", tier, rating).unwrap();
        let expected = o.tier.weight() * rating;
        prop_assert_eq!(official_score(&o), expected);
    }

    #[test]
    fn prop_initial_assignment_is_cover((officials, stations, seed) in arb_instance()) {
        let a = generate_initial(&officials, stations, &mut StdRng::seed_from_u64(seed));
        prop_assert!(a.is_complete_cover());
        let stats = compute_statistics(&a);
        prop_assert!(stats.count_spread <= 1);
    }

    #[test]
    fn prop_every_sweep_preserves_cover_and_never_worsens(
        (officials, stations, seed) in arb_instance()
    ) {
        let problem = RosterProblem::new(&officials, stations, QualityWeights::default());
        let mut current = generate_initial(&officials, stations, &mut StdRng::seed_from_u64(seed));
        let mut cost = problem.cost(&current);

        for _ in 0..25 {
            let next = improve_once(&current);
            prop_assert!(next.is_complete_cover());
            let next_cost = problem.cost(&next);
            prop_assert!(next_cost <= cost, "sweep worsened quality: {} -> {}", cost, next_cost);
            if next == current {
                break;
            }
            current = next;
            cost = next_cost;
        }
    }

    #[test]
    fn prop_optimize_improves_and_satisfies_eligibility(
        (officials, stations, seed) in arb_instance()
    ) {
        let config = RosterConfig::default().with_seed(seed);
        let result = optimize_with(&officials, stations, &config).unwrap();

        prop_assert!(result.assignment.is_complete_cover());
        prop_assert!(result.quality <= result.initial_quality);
        prop_assert!(result.sweeps <= config.max_sweeps);
        prop_assert!(result.is_eligible());
        for w in result.quality_history.windows(2) {
            prop_assert!(w[1] < w[0]);
        }
    }

    #[test]
    fn prop_fixed_seed_is_deterministic((officials, stations, seed) in arb_instance()) {
        let config = RosterConfig::default().with_seed(seed);
        let a = optimize_with(&officials, stations, &config).unwrap();
        let b = optimize_with(&officials, stations, &config).unwrap();
        prop_assert_eq!(a.assignment, b.assignment);
        prop_assert_eq!(a.sweeps, b.sweeps);
    }
}
