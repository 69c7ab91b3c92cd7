//! Split calculation: turn an expense total plus a split policy into
//! per-participant shares that sum exactly to the total.

use crate::core::errors::{FieldError, LedgerError};
use crate::core::models::expense::SplitShare;
use crate::core::money;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

/// How an expense is divided. Exhaustive matching means a new policy cannot
/// silently fall through to a default error path.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SplitPolicy {
    Equal,
    Percentage { shares: HashMap<String, Decimal> },
    Exact { amounts: HashMap<String, Decimal> },
}

/// Validate inputs and compute the split for `total` across `participants`.
///
/// Equal and percentage splits assign rounded shares in input order and add
/// the entire rounding drift to the last participant, so the shares always
/// sum back to `total` exactly. Exact splits take the caller's amounts as-is
/// (rounded to the cent) and are rejected when they deviate from the total by
/// more than 0.01; there is no silent correction in exact mode.
pub fn calculate_split(
    total: Decimal,
    policy: &SplitPolicy,
    participants: &[String],
) -> Result<Vec<SplitShare>, LedgerError> {
    if total <= Decimal::ZERO {
        return Err(LedgerError::InvalidSplit(FieldError::new(
            "amount",
            "Invalid Amount",
            format!("amount must be greater than 0, got {}", total),
        )));
    }
    if participants.is_empty() {
        return Err(LedgerError::InvalidSplit(FieldError::new(
            "participants",
            "No Participants",
            "at least one participant is required".to_string(),
        )));
    }
    let unique: HashSet<&String> = participants.iter().collect();
    if unique.len() != participants.len() {
        return Err(LedgerError::InvalidSplit(FieldError::new(
            "participants",
            "Duplicate Participants",
            format!(
                "expected {} unique participants, got {}",
                participants.len(),
                unique.len()
            ),
        )));
    }

    match policy {
        SplitPolicy::Equal => equal_split(total, participants),
        SplitPolicy::Percentage { shares } => percentage_split(total, participants, shares),
        SplitPolicy::Exact { amounts } => exact_split(total, participants, amounts),
    }
}

fn equal_split(total: Decimal, participants: &[String]) -> Result<Vec<SplitShare>, LedgerError> {
    let count = Decimal::from(participants.len() as u64);
    let per_person = money::round_currency(money::divide(total, count)?);

    let mut splits: Vec<SplitShare> = participants
        .iter()
        .map(|id| SplitShare {
            participant_id: id.clone(),
            amount: per_person,
            percentage: None,
        })
        .collect();

    // Last participant absorbs the rounding remainder.
    let drift = money::subtract(total, money::multiply(per_person, count));
    if !drift.is_zero() {
        let last = splits.last_mut().expect("participants is non-empty");
        last.amount = money::round_currency(money::add(last.amount, drift));
    }

    Ok(splits)
}

fn percentage_split(
    total: Decimal,
    participants: &[String],
    percentages: &HashMap<String, Decimal>,
) -> Result<Vec<SplitShare>, LedgerError> {
    validate_share_keys("percentages", participants, percentages)?;

    let hundred = Decimal::from(100u64);
    let mut total_percentage = Decimal::ZERO;
    let mut splits = Vec::with_capacity(participants.len());
    for id in participants {
        let percentage = percentages[id];
        if percentage < Decimal::ZERO || percentage > hundred {
            return Err(LedgerError::InvalidSplit(FieldError::new(
                "percentages",
                "Percentage Out Of Range",
                format!(
                    "percentage for participant {} must be between 0 and 100, got {}",
                    id, percentage
                ),
            )));
        }
        total_percentage = money::add(total_percentage, percentage);
        let share = money::divide(money::multiply(total, percentage), hundred)?;
        splits.push(SplitShare {
            participant_id: id.clone(),
            amount: money::round_currency(share),
            percentage: Some(money::round_currency(percentage)),
        });
    }

    // Tolerance is checked on the raw supplied percentages, before rounding.
    if money::subtract(total_percentage, hundred).abs() > money::epsilon() {
        return Err(LedgerError::InvalidSplit(FieldError::new(
            "percentages",
            "Percentages Must Sum To 100",
            format!("expected 100, got {}", total_percentage),
        )));
    }

    let assigned = splits
        .iter()
        .fold(Decimal::ZERO, |sum, s| money::add(sum, s.amount));
    let drift = money::subtract(total, assigned);
    if !drift.is_zero() {
        let last = splits.last_mut().expect("participants is non-empty");
        last.amount = money::round_currency(money::add(last.amount, drift));
    }

    Ok(splits)
}

fn exact_split(
    total: Decimal,
    participants: &[String],
    amounts: &HashMap<String, Decimal>,
) -> Result<Vec<SplitShare>, LedgerError> {
    validate_share_keys("amounts", participants, amounts)?;

    let mut assigned = Decimal::ZERO;
    let mut splits = Vec::with_capacity(participants.len());
    for id in participants {
        let amount = amounts[id];
        if amount < Decimal::ZERO {
            return Err(LedgerError::InvalidSplit(FieldError::new(
                "amounts",
                "Negative Amount",
                format!("amount for participant {} cannot be negative, got {}", id, amount),
            )));
        }
        assigned = money::add(assigned, amount);
        splits.push(SplitShare {
            participant_id: id.clone(),
            amount: money::round_currency(amount),
            percentage: None,
        });
    }

    if money::subtract(assigned, total).abs() > money::epsilon() {
        return Err(LedgerError::InvalidSplit(FieldError::new(
            "amounts",
            "Amounts Must Sum To Total",
            format!("expected {}, got {}", total, assigned),
        )));
    }

    Ok(splits)
}

fn validate_share_keys(
    field: &str,
    participants: &[String],
    shares: &HashMap<String, Decimal>,
) -> Result<(), LedgerError> {
    if shares.len() != participants.len() || participants.iter().any(|id| !shares.contains_key(id)) {
        return Err(LedgerError::InvalidSplit(FieldError::new(
            field,
            "Participant Mismatch",
            format!(
                "{} must be supplied for exactly the {} expense participants",
                field,
                participants.len()
            ),
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn amounts(splits: &[SplitShare]) -> Vec<Decimal> {
        splits.iter().map(|s| s.amount).collect()
    }

    #[test]
    fn equal_split_last_participant_absorbs_remainder() {
        let splits = calculate_split(dec!(10.00), &SplitPolicy::Equal, &ids(&["a", "b", "c"])).unwrap();
        assert_eq!(amounts(&splits), vec![dec!(3.33), dec!(3.33), dec!(3.34)]);
    }

    #[test]
    fn equal_split_remainder_follows_position_not_identity() {
        let splits = calculate_split(dec!(10.00), &SplitPolicy::Equal, &ids(&["c", "b", "a"])).unwrap();
        assert_eq!(splits[0].participant_id, "c");
        assert_eq!(splits[2].participant_id, "a");
        assert_eq!(amounts(&splits), vec![dec!(3.33), dec!(3.33), dec!(3.34)]);
    }

    #[test]
    fn equal_split_sum_matches_total() {
        for total in [dec!(10.00), dec!(0.01), dec!(99.99), dec!(100.00), dec!(0.05)] {
            let splits =
                calculate_split(total, &SplitPolicy::Equal, &ids(&["a", "b", "c", "d", "e", "f", "g"]))
                    .unwrap();
            let sum = amounts(&splits).iter().copied().sum::<Decimal>();
            assert_eq!(sum, total, "equal split of {} drifted", total);
        }
    }

    #[test]
    fn percentage_split_assigns_shares_and_percentages() {
        let shares = HashMap::from([("a".to_string(), dec!(60)), ("b".to_string(), dec!(40))]);
        let splits =
            calculate_split(dec!(100.00), &SplitPolicy::Percentage { shares }, &ids(&["a", "b"])).unwrap();
        assert_eq!(amounts(&splits), vec![dec!(60.00), dec!(40.00)]);
        assert_eq!(splits[0].percentage, Some(dec!(60.00)));
    }

    #[test]
    fn percentage_split_sum_matches_total_after_drift_correction() {
        let shares = HashMap::from([
            ("a".to_string(), dec!(33.33)),
            ("b".to_string(), dec!(33.33)),
            ("c".to_string(), dec!(33.34)),
        ]);
        let splits =
            calculate_split(dec!(0.10), &SplitPolicy::Percentage { shares }, &ids(&["a", "b", "c"]))
                .unwrap();
        let sum = amounts(&splits).iter().copied().sum::<Decimal>();
        assert_eq!(sum, dec!(0.10));
    }

    #[test]
    fn percentages_must_sum_to_one_hundred() {
        let shares = HashMap::from([("a".to_string(), dec!(60)), ("b".to_string(), dec!(39))]);
        let result =
            calculate_split(dec!(100.00), &SplitPolicy::Percentage { shares }, &ids(&["a", "b"]));
        assert!(matches!(result, Err(LedgerError::InvalidSplit(_))));

        // Deviation of exactly 0.01 is within tolerance.
        let shares = HashMap::from([("a".to_string(), dec!(60)), ("b".to_string(), dec!(39.99))]);
        assert!(
            calculate_split(dec!(100.00), &SplitPolicy::Percentage { shares }, &ids(&["a", "b"])).is_ok()
        );
    }

    #[test]
    fn percentage_out_of_range_is_rejected() {
        let shares = HashMap::from([("a".to_string(), dec!(150)), ("b".to_string(), dec!(-50))]);
        let result =
            calculate_split(dec!(100.00), &SplitPolicy::Percentage { shares }, &ids(&["a", "b"]));
        assert!(matches!(result, Err(LedgerError::InvalidSplit(_))));
    }

    #[test]
    fn exact_split_tolerance_boundary() {
        // 0.01 off passes
        let amounts_map = HashMap::from([("a".to_string(), dec!(30)), ("b".to_string(), dec!(69.99))]);
        assert!(calculate_split(
            dec!(100.00),
            &SplitPolicy::Exact { amounts: amounts_map },
            &ids(&["a", "b"])
        )
        .is_ok());

        // 0.02 off fails
        let amounts_map = HashMap::from([("a".to_string(), dec!(30)), ("b".to_string(), dec!(69.98))]);
        let result = calculate_split(
            dec!(100.00),
            &SplitPolicy::Exact { amounts: amounts_map },
            &ids(&["a", "b"]),
        );
        assert!(matches!(result, Err(LedgerError::InvalidSplit(_))));
    }

    #[test]
    fn exact_split_sum_matches_total_for_exact_inputs() {
        let amounts_map = HashMap::from([
            ("a".to_string(), dec!(12.34)),
            ("b".to_string(), dec!(56.78)),
            ("c".to_string(), dec!(30.88)),
        ]);
        let splits = calculate_split(
            dec!(100.00),
            &SplitPolicy::Exact { amounts: amounts_map },
            &ids(&["a", "b", "c"]),
        )
        .unwrap();
        let sum = amounts(&splits).iter().copied().sum::<Decimal>();
        assert_eq!(sum, dec!(100.00));
    }

    #[test]
    fn negative_exact_amount_is_rejected() {
        let amounts_map = HashMap::from([("a".to_string(), dec!(-10)), ("b".to_string(), dec!(110))]);
        let result = calculate_split(
            dec!(100.00),
            &SplitPolicy::Exact { amounts: amounts_map },
            &ids(&["a", "b"]),
        );
        assert!(matches!(result, Err(LedgerError::InvalidSplit(_))));
    }

    #[test]
    fn share_keys_must_match_participant_set() {
        let shares = HashMap::from([("a".to_string(), dec!(50)), ("x".to_string(), dec!(50))]);
        let result =
            calculate_split(dec!(100.00), &SplitPolicy::Percentage { shares }, &ids(&["a", "b"]));
        assert!(matches!(result, Err(LedgerError::InvalidSplit(_))));
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(matches!(
            calculate_split(dec!(0), &SplitPolicy::Equal, &ids(&["a"])),
            Err(LedgerError::InvalidSplit(_))
        ));
        assert!(matches!(
            calculate_split(dec!(-5), &SplitPolicy::Equal, &ids(&["a"])),
            Err(LedgerError::InvalidSplit(_))
        ));
        assert!(matches!(
            calculate_split(dec!(10), &SplitPolicy::Equal, &[]),
            Err(LedgerError::InvalidSplit(_))
        ));
        assert!(matches!(
            calculate_split(dec!(10), &SplitPolicy::Equal, &ids(&["a", "a"])),
            Err(LedgerError::InvalidSplit(_))
        ));
    }
}
