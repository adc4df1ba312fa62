use fixturegen::lexicon::{LexiconCommand, MAX_MISTAKES, MAX_TYPO_BUDGET, autocomplete, autocorrect, remove_target};
use fixturegen::points::{Interval, MAX_RANGE_SPAN, PointCommand, random_point, random_ranges};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    #![proptest_config(proptest::test_runner::Config {
        failure_persistence: Some(Box::new(proptest::test_runner::FileFailurePersistence::WithSource("proptest-regressions"))),
        cases: 64,
        .. proptest::test_runner::Config::default()
    })]
    #[test]
    fn prop_autocorrect_changes_exactly_reported_letters(word in "[a-z]{1,20}", seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let LexiconCommand::Autocorrect { word: typo, mistakes } = autocorrect(&word, &mut rng) else {
            panic!("autocorrect must yield AUTOCORRECT");
        };
        prop_assert_eq!(typo.len(), word.len());
        prop_assert!(mistakes >= 1 && mistakes <= MAX_MISTAKES.min(word.len()));
        let changed = typo.chars().zip(word.chars()).filter(|(a, b)| a != b).count();
        prop_assert_eq!(changed, mistakes);
        prop_assert!(typo.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn prop_autocomplete_prefix_bounds(word in "[a-z]{0,20}", trim in 1usize..3, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        match autocomplete(&word, trim, &mut rng) {
            Some(LexiconCommand::Autocomplete { prefix, budget }) => {
                prop_assert!(word.starts_with(&prefix));
                prop_assert!(!prefix.is_empty());
                prop_assert!(prefix.len() <= word.len() - trim);
                prop_assert!(budget <= MAX_TYPO_BUDGET);
            }
            Some(other) => panic!("unexpected {other}"),
            None => prop_assert!(word.len() < 4),
        }
    }

    #[test]
    fn prop_remove_target_comes_from_its_pool(known in proptest::collection::vec("[a-m]{3,6}", 1..20), seed in any::<u64>()) {
        let dictionary = ["zzzz", "yyyy"];
        let mut rng = StdRng::seed_from_u64(seed);
        let (w, unknown) = remove_target(known.as_slice(), &dictionary[..], &mut rng).unwrap();
        if unknown {
            prop_assert!(dictionary.contains(&w));
        } else {
            prop_assert!(known.iter().any(|k| k == w));
        }
    }

    #[test]
    fn prop_ranges_stay_inside_interval(bound in prop_oneof![Just(10i64), Just(100), Just(10_000)], dims in 1usize..4, seed in any::<u64>()) {
        let interval = Interval::new(-bound, bound);
        let mut rng = StdRng::seed_from_u64(seed);
        for (lo, hi) in random_ranges(interval, dims, &mut rng) {
            prop_assert!(interval.contains(lo) && interval.contains(hi));
            prop_assert!(lo <= hi && hi - lo <= MAX_RANGE_SPAN);
        }
        let p = random_point(interval, dims, &mut rng);
        prop_assert_eq!(p.len(), dims);
        prop_assert!(p.iter().all(|v| interval.contains(*v)));
    }

    #[test]
    fn prop_point_command_text_parses_back(coords in proptest::collection::vec(-10_000i64..10_000, 1..4)) {
        let nn = PointCommand::Nn(coords.clone());
        prop_assert_eq!(nn.to_string().parse::<PointCommand>().unwrap(), nn);
        let rs = PointCommand::Rs(coords.iter().map(|c| (*c, c + 3)).collect());
        prop_assert_eq!(rs.to_string().parse::<PointCommand>().unwrap(), rs);
    }
}
