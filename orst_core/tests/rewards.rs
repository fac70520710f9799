use orst_core::rewards::*;

mod failures {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(maximize_rewards(&[]), Rewards::unpaired());
        assert!(Rewards::unpaired().pairs.is_empty());
        assert_eq!(Rewards::unpaired().reward, -1);
    }

    #[test]
    fn single_item() {
        assert_eq!(maximize_rewards(&[5]), Rewards::unpaired());
    }

    #[test]
    fn odd_length() {
        assert_eq!(maximize_rewards(&[1, 2, 3]), Rewards::unpaired());
    }

    #[test]
    fn inconsistent_sums() {
        assert_eq!(maximize_rewards(&[1, 1, 2, 4]), Rewards::unpaired());
        assert!(matches!(
            pair_orders(&[1, 1, 2, 4]),
            Err(PairingError::UnevenSums { .. })
        ));
    }

    #[test]
    fn divergence_late_in_the_scan() {
        // 1+9 = 2+8 = 3+7, then 4+5
        assert_eq!(
            pair_orders(&[9, 1, 8, 2, 7, 3, 5, 4]),
            Err(PairingError::UnevenSums {
                expected: 10,
                found: 9
            })
        );
    }
}

mod pairings {
    use super::*;

    #[test]
    fn repeated_prices() {
        let rewards = maximize_rewards(&[1, 3, 3, 1]);
        assert_eq!(rewards.pairs, [(1, 3), (1, 3)]);
        assert_eq!(rewards.reward, 6);
    }

    #[test]
    fn consecutive_prices() {
        let rewards = maximize_rewards(&[1, 2, 3, 4]);
        assert_eq!(rewards.pairs, [(1, 4), (2, 3)]);
        assert_eq!(rewards.reward, 10);
    }

    #[test]
    fn unsorted_input() {
        let rewards = maximize_rewards(&[6, 2, 5, 3, 4, 1, 7, 0]);
        assert_eq!(rewards.pairs, [(0, 7), (1, 6), (2, 5), (3, 4)]);
        assert_eq!(rewards.reward, 28);
    }

    #[test]
    fn large_uniform_input() {
        let prices = (0..1000i64).map(|i| (i % 2) * 10).collect::<Vec<_>>();
        let rewards = maximize_rewards(&prices);
        assert_eq!(rewards.pairs.len(), 500);
        assert!(rewards.pairs.iter().all(|&pair| pair == (0, 10)));
        assert_eq!(rewards.reward, 0);
        assert!(rewards.is_paired());
    }
}
