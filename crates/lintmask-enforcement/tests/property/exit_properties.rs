use lintmask_core::Category;
use lintmask_enforcement::{aggregate, check, decode, EnforcementPolicy};
use proptest::prelude::*;

fn policy_strategy() -> impl Strategy<Value = EnforcementPolicy> {
    proptest::sample::subsequence(vec!["F", "E", "W", "R", "C", "U"], 0..=6)
        .prop_map(|tokens| EnforcementPolicy::from_tokens(tokens))
}

proptest! {
    #[test]
    fn decode_is_ascending_and_only_set_bits(v in any::<u64>()) {
        let decoded = decode(v);
        for pair in decoded.windows(2) {
            prop_assert!(pair[0].bit() < pair[1].bit());
        }
        for category in decoded.iter() {
            prop_assert!(v & category.bit() != 0);
        }
        for category in Category::ALL {
            if v & category.bit() != 0 {
                prop_assert!(decoded.contains(&category));
            }
        }
    }

    #[test]
    fn redecoding_exit_code_yields_blocking(v in any::<u64>(), policy in policy_strategy()) {
        let result = aggregate(v, &policy);
        prop_assert_eq!(decode(result.exit_code), result.blocking.clone());
        for category in result.blocking.iter() {
            prop_assert!(result.triggered.contains(category));
            prop_assert!(policy.is_enforced(*category));
        }
    }

    #[test]
    fn suppressing_never_increases_exit_code(
        v in any::<u64>(),
        policy in policy_strategy(),
        dropped in 0usize..6,
    ) {
        let letter = Category::LINTER[dropped].letter().unwrap().to_string();
        let kept: Vec<String> = policy
            .to_exit_report()
            .split(',')
            .filter(|t| !t.is_empty() && *t != letter)
            .map(String::from)
            .collect();
        let narrower = EnforcementPolicy::from_tokens(kept);
        prop_assert!(aggregate(v, &narrower).exit_code <= aggregate(v, &policy).exit_code);
    }

    #[test]
    fn bit_subsets_never_alias(a in 0u64..128, b in 0u64..128) {
        let sum_a: u64 = decode(a).iter().map(|c| c.bit()).sum();
        let sum_b: u64 = decode(b).iter().map(|c| c.bit()).sum();
        prop_assert_eq!(sum_a == sum_b, a == b);
    }

    #[test]
    fn quality_gate_is_disjoint_from_linter_code(
        v in any::<u64>(),
        policy in policy_strategy(),
        score in -10.0f64..10.0,
        threshold in -10.0f64..10.0,
    ) {
        let linter = aggregate(v, &policy).exit_code;
        let quality = check(score, threshold);
        prop_assert_eq!(linter & quality, 0);
        prop_assert_eq!(decode(linter + quality).contains(&Category::Quality), score < threshold);
    }
}
