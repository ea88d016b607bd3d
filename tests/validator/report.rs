use nestegg::Error;
use nestegg::validator::validate_transactions;

use crate::common::{dec, strict};

#[test]
fn duplicate_timestamps_keep_the_first_occurrence() {
    let report = validate_transactions(
        50_000.0,
        None,
        &[
            strict("2023-01-01 10:00:00", 151.0, 200.0, 49.0),
            strict("2023-01-01 10:00:00", 299.0, 300.0, 1.0),
        ],
    )
    .unwrap();

    assert_eq!(report.valid.len(), 1);
    assert_eq!(report.valid[0].amount, dec("151"));
    assert_eq!(report.duplicates.len(), 1);
    assert_eq!(report.duplicates[0].amount, dec("299"));
    assert_eq!(report.duplicates[0].message, "Duplicate transaction timestamp.");
    assert!(report.invalid.is_empty());
}

#[test]
fn wrong_ceiling_and_remanent_get_distinct_messages() {
    let report = validate_transactions(
        50_000.0,
        None,
        &[
            strict("2023-01-01 10:00:00", 250.0, 400.0, 150.0),
            strict("2023-01-02 10:00:00", 250.0, 300.0, 49.0),
        ],
    )
    .unwrap();

    assert!(report.valid.is_empty());
    assert_eq!(
        report.invalid[0].message,
        "Invalid ceiling value for the amount. Expected next multiple of 100."
    );
    assert_eq!(
        report.invalid[1].message,
        "Invalid remanent value. Expected ceiling - amount."
    );
}

#[test]
fn small_mismatches_inside_tolerance_pass() {
    let report = validate_transactions(
        50_000.0,
        None,
        &[strict("2023-01-01 10:00:00", 250.0, 300.01, 50.01)],
    )
    .unwrap();
    assert_eq!(report.valid.len(), 1);
}

#[test]
fn canonicalization_failures_land_in_invalid_with_the_error_message() {
    let report = validate_transactions(
        50_000.0,
        None,
        &[
            strict("2023-13-01 10:00:00", 250.0, 300.0, 50.0),
            strict("2023-01-01 10:00:00", -5.0, 0.0, 5.0),
        ],
    )
    .unwrap();

    assert_eq!(
        report.invalid[0].message,
        "Invalid timestamp format. Expected 'YYYY-MM-DD HH:mm:ss' (or HH:mm)."
    );
    assert_eq!(report.invalid[1].message, "Amount cannot be negative.");
}

#[test]
fn cumulative_cap_rejects_in_input_order() {
    // limit = 12 * 10 = 120; remanents are 50 each.
    let report = validate_transactions(
        10.0,
        None,
        &[
            strict("2023-01-01 10:00:00", 250.0, 300.0, 50.0),
            strict("2023-01-02 10:00:00", 150.0, 200.0, 50.0),
            strict("2023-01-03 10:00:00", 350.0, 400.0, 50.0),
        ],
    )
    .unwrap();

    assert_eq!(report.valid.len(), 2);
    assert_eq!(report.invalid.len(), 1);
    assert_eq!(report.invalid[0].date, "2023-01-03 10:00:00");
    assert_eq!(
        report.invalid[0].message,
        "Cumulative remanent exceeds maximum allowed investment."
    );

    let total: rust_decimal::Decimal = report.valid.iter().map(|tx| tx.remanent).sum();
    assert!(total <= dec("120"));
}

#[test]
fn explicit_max_investment_overrides_the_wage_default() {
    let report = validate_transactions(
        50_000.0,
        Some(50.0),
        &[
            strict("2023-01-01 10:00:00", 250.0, 300.0, 50.0),
            strict("2023-01-02 10:00:00", 150.0, 200.0, 50.0),
        ],
    )
    .unwrap();
    assert_eq!(report.valid.len(), 1);
    assert_eq!(report.invalid.len(), 1);
}

#[test]
fn a_record_exactly_at_the_cap_is_allowed() {
    let report = validate_transactions(
        50_000.0,
        Some(100.0),
        &[
            strict("2023-01-01 10:00:00", 250.0, 300.0, 50.0),
            strict("2023-01-02 10:00:00", 150.0, 200.0, 50.0),
        ],
    )
    .unwrap();
    assert_eq!(report.valid.len(), 2);
}

#[test]
fn negative_wage_and_limit_fail_the_request() {
    assert_eq!(
        validate_transactions(-1.0, None, &[]),
        Err(Error::NegativeWage)
    );
    assert_eq!(
        validate_transactions(50_000.0, Some(-1.0), &[]),
        Err(Error::NegativeMaxInvestment)
    );
}

#[test]
fn empty_batch_yields_an_empty_report() {
    let report = validate_transactions(50_000.0, None, &[]).unwrap();
    assert!(report.valid.is_empty());
    assert!(report.invalid.is_empty());
    assert!(report.duplicates.is_empty());
}
