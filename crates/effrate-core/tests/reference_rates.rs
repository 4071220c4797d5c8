//! Integration tests validated against reference effective rates.
//!
//! The loan scenario reproduces a 20-year annuity: 240,000 paid out on
//! 2015-01-01 against 1,200 repaid on the first of every month through
//! 2034-12, with a known effective rate of about 1.91%.

use approx::assert_relative_eq;
use effrate_core::prelude::*;
use effrate_core::stream::npv_at;

fn payment(amount: f64, y: i32, m: u32, d: u32) -> Payment {
    Payment::new(Date::from_ymd(y, m, d).unwrap(), amount)
}

/// 240,000 principal against 240 monthly repayments of 1,200.
fn reference_loan() -> Vec<Payment> {
    let mut payments = vec![payment(240_000.0, 2015, 1, 1)];
    for year in 2015..=2034 {
        for month in 1..=12 {
            payments.push(payment(-1200.0, year, month, 1));
        }
    }
    payments
}

#[test]
fn reference_loan_rate() {
    let payments = reference_loan();
    assert_eq!(payments.len(), 241);

    let rate = effective_interest_rate(&payments).unwrap();
    assert_relative_eq!(rate, 0.0191, epsilon = 1e-3);
}

#[test]
fn converged_rate_is_a_root_of_the_npv() {
    let payments = reference_loan();
    let rate = effective_interest_rate(&payments).unwrap();

    let stream = to_relative_stream(&payments).unwrap();
    assert!(npv_at(&stream, rate).abs() < 1e-5);
}

#[test]
fn repaying_more_than_borrowed_gives_a_positive_rate() {
    // Undiscounted repayments exceed the amount lent out, so discounting
    // at a positive rate is needed to balance the stream.
    let payments = [
        payment(10_000.0, 2020, 1, 1),
        payment(-5_500.0, 2021, 1, 1),
        payment(-5_500.0, 2022, 1, 1),
    ];

    let rate = effective_interest_rate(&payments).unwrap();
    assert!(rate > 0.0);
}

#[test]
fn breakeven_stream_yields_zero_rate() {
    let payments = [
        payment(1000.0, 2020, 1, 1),
        payment(-400.0, 2021, 1, 1),
        payment(-600.0, 2022, 1, 1),
    ];

    let rate = effective_interest_rate(&payments).unwrap();
    assert!(rate.abs() < 1e-6);
}

#[test]
fn quarterly_alternating_stream_sums_at_zero_rate() {
    let payments = [
        payment(-1000.0, 2019, 1, 1),
        payment(1600.0, 2019, 4, 1),
        payment(-2000.0, 2019, 7, 15),
        payment(1600.0, 2019, 10, 1),
    ];
    let stream = to_relative_stream(&payments).unwrap();

    assert_relative_eq!(npv_at(&stream, 0.0), 200.0, epsilon = 1e-12);
}

#[test]
fn rate_is_stable_under_input_shuffling() {
    let mut payments = reference_loan();
    let baseline = effective_interest_rate(&payments).unwrap();

    payments.reverse();
    let shuffled = effective_interest_rate(&payments).unwrap();

    assert_relative_eq!(baseline, shuffled, epsilon = 1e-9);
}
