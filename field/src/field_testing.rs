//! A reusable law suite, instantiated once per concrete field via [`test_field_laws`].

#[macro_export]
macro_rules! test_field_laws {
    ($field:ty) => {
        mod field_laws {
            use super::*;
            use $crate::types::{Field, Sample};

            #[test]
            fn add_neg_sub_mul() {
                type F = $field;
                let x = F::rand();
                let y = F::rand();
                let z = F::rand();

                assert_eq!(x + (-x), F::ZERO);
                assert_eq!(-x, F::ZERO - x);
                assert_eq!(x + x, x * F::TWO);
                assert_eq!(x + y, y + x);
                assert_eq!(x * y, y * x);
                assert_eq!(x * (y * z), (x * y) * z);
                assert_eq!(x - (y + z), (x - y) - z);
                assert_eq!((x + y) - z, x + (y - z));
                assert_eq!(x * (y + z), x * y + x * z);
            }

            #[test]
            fn inverses() {
                type F = $field;
                let x = F::rand();
                assert_eq!(x * x.inverse(), F::ONE);
                assert_eq!(x.inverse() * x, F::ONE);
                assert!(F::ZERO.try_inverse().is_none());
            }

            #[test]
            fn fermat_little_theorem() {
                type F = $field;
                let x = F::rand();
                assert_eq!(x.exp_u64(F::ORDER - 1), F::ONE);
            }

            #[test]
            fn canonical_roundtrip() {
                type F = $field;
                for _ in 0..10 {
                    let x = F::rand();
                    assert_eq!(F::from_canonical_u64(x.to_canonical_u64()), x);
                }
            }

            #[test]
            fn primitive_root_orders() {
                type F = $field;
                let max_power = 6.min(F::TWO_ADICITY);
                for n_log in 0..=max_power {
                    let n = 1usize << n_log;
                    let root = F::primitive_root_of_unity(n);
                    assert_eq!(root.exp_u64(n as u64), F::ONE, "root^n != 1 for n = {n}");
                    if n > 1 {
                        assert_ne!(root.exp_u64((n / 2) as u64), F::ONE, "root has order < n for n = {n}");
                    }
                }
            }

            #[test]
            fn power_of_two_generator_matches_group_generator() {
                type F = $field;
                let exp = (F::ORDER - 1) >> F::TWO_ADICITY;
                assert_eq!(
                    F::MULTIPLICATIVE_GROUP_GENERATOR.exp_u64(exp),
                    F::POWER_OF_TWO_GENERATOR
                );
            }

            #[test]
            fn from_be_bytes_mod_order_matches_small_values() {
                type F = $field;
                assert_eq!(F::from_be_bytes_mod_order(&[5]), F::from_canonical_u64(5));
                assert_eq!(F::from_be_bytes_mod_order(&[0, 0, 7]), F::from_canonical_u64(7));
            }
        }
    };
}
