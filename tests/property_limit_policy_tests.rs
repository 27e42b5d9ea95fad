use carousel_rs::core::{
    LimitOutcome, apply_shift_limit, last_aligned_index, paging_indices, resolve_jump_target,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn last_aligned_matches_remainder_formula(
        item_count in 1usize..500,
        items_per_shift in 1usize..40
    ) {
        let remainder = item_count % items_per_shift;
        let expected = if remainder == 0 {
            item_count.saturating_sub(items_per_shift)
        } else {
            item_count - remainder
        };
        let last_aligned = last_aligned_index(item_count, items_per_shift);

        prop_assert_eq!(last_aligned, expected);
        prop_assert!(last_aligned < item_count);
        prop_assert_eq!(last_aligned % items_per_shift, 0);
    }

    #[test]
    fn shift_limit_always_lands_inside_sequence(
        raw_index in -1_000i64..1_000,
        item_count in 1usize..300,
        items_per_shift in 1usize..20,
        wrap_around in any::<bool>()
    ) {
        let outcome = apply_shift_limit(raw_index, item_count, items_per_shift, wrap_around);
        prop_assert!(outcome.index() < item_count);

        match outcome {
            LimitOutcome::InRange(index) => {
                prop_assert_eq!(i64::try_from(index).expect("fits"), raw_index);
            }
            LimitOutcome::Wrapped(index) => {
                prop_assert!(wrap_around);
                prop_assert_eq!(index % items_per_shift, 0);
            }
            LimitOutcome::Clamped(index) => {
                prop_assert!(!wrap_around);
                prop_assert_eq!(index % items_per_shift, 0);
            }
        }
    }

    #[test]
    fn jump_target_resolves_to_sequence_ends(
        raw_index in -1_000i64..1_000,
        item_count in 1usize..300,
        wrap_around in any::<bool>()
    ) {
        let index = resolve_jump_target(raw_index, item_count, wrap_around);
        prop_assert!(index < item_count);
        let count = i64::try_from(item_count).expect("fits");
        if raw_index < 0 {
            prop_assert_eq!(index, if wrap_around { item_count - 1 } else { 0 });
        } else if raw_index >= count {
            prop_assert_eq!(index, if wrap_around { 0 } else { item_count - 1 });
        }
    }

    #[test]
    fn paging_indices_end_at_last_aligned(
        item_count in 1usize..300,
        items_per_shift in 1usize..20
    ) {
        let indices: Vec<usize> = paging_indices(item_count, items_per_shift).collect();
        prop_assert_eq!(indices.first().copied(), Some(0));
        prop_assert_eq!(
            indices.last().copied(),
            Some(last_aligned_index(item_count, items_per_shift))
        );
        prop_assert_eq!(indices.len(), item_count.div_ceil(items_per_shift));
    }
}
