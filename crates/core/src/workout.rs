//! Workout template rules: set and set-step ordering.

use crate::error::CoreError;

/// Check that set-step orders form exactly `1..=N` for `N` steps.
///
/// Order within the input does not matter; duplicates and gaps are both
/// rejected, as is an empty step list.
pub fn validate_step_orders(orders: &[i32]) -> Result<(), CoreError> {
    if orders.is_empty() {
        return Err(CoreError::Validation(
            "at least one set step is required".to_string(),
        ));
    }

    let mut sorted = orders.to_vec();
    sorted.sort_unstable();

    if !sorted.iter().copied().eq((1..).take(sorted.len())) {
        return Err(CoreError::Validation(
            "step_order must be sequential starting from 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn sequential_orders_are_accepted() {
        assert!(validate_step_orders(&[1, 2, 3]).is_ok());
    }

    #[test]
    fn single_step_is_accepted() {
        assert!(validate_step_orders(&[1]).is_ok());
    }

    #[test]
    fn unsorted_but_complete_orders_are_accepted() {
        assert!(validate_step_orders(&[3, 1, 2]).is_ok());
    }

    #[test]
    fn empty_steps_are_rejected() {
        assert_matches!(
            validate_step_orders(&[]),
            Err(CoreError::Validation(msg)) if msg.contains("at least one")
        );
    }

    #[test]
    fn duplicate_orders_are_rejected() {
        assert_matches!(
            validate_step_orders(&[1, 1, 2]),
            Err(CoreError::Validation(msg)) if msg.contains("sequential")
        );
    }

    #[test]
    fn gaps_are_rejected() {
        assert!(validate_step_orders(&[1, 3]).is_err());
    }

    #[test]
    fn sequence_must_start_at_one() {
        assert!(validate_step_orders(&[2, 3, 4]).is_err());
        assert!(validate_step_orders(&[0, 1, 2]).is_err());
    }
}
