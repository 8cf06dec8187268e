//! Payment status classification tests for financials-service.

mod common;

use chrono::NaiveDate;
use common::{paid, payment, payout};
use financials_service::models::{PaymentRecordStatus, PaymentStatus};
use financials_service::services::classify_payment_status;
use financials_service::services::payment_status::{last_paid_date, paid_amount};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn partial_payment_is_partial() {
    let p = payout(dec!(5000));
    let payments = vec![paid(&p, dec!(2000))];

    assert_eq!(paid_amount(&payments).unwrap(), dec!(2000));
    assert_eq!(
        classify_payment_status(&payments, p.final_payout).unwrap(),
        PaymentStatus::Partial
    );
}

#[test]
fn no_payments_is_pending() {
    assert_eq!(
        classify_payment_status(&[], dec!(5000)).unwrap(),
        PaymentStatus::Pending
    );
}

#[test]
fn only_paid_records_count() {
    let p = payout(dec!(1000));
    let payments = vec![
        payment(&p, "pending", dec!(1000)),
        payment(&p, "failed", dec!(1000)),
        payment(&p, "void", dec!(1000)),
        payment(&p, "processing", dec!(1000)),
    ];

    assert_eq!(paid_amount(&payments).unwrap(), Decimal::ZERO);
    assert_eq!(
        classify_payment_status(&payments, p.final_payout).unwrap(),
        PaymentStatus::Pending
    );
}

#[test]
fn payments_summing_to_payout_are_paid() {
    let p = payout(dec!(1000));
    let payments = vec![paid(&p, dec!(600)), paid(&p, dec!(400))];
    assert_eq!(
        classify_payment_status(&payments, p.final_payout).unwrap(),
        PaymentStatus::Paid
    );
}

#[test]
fn overpayment_is_paid() {
    let p = payout(dec!(1000));
    let payments = vec![paid(&p, dec!(1000.01))];
    assert_eq!(
        classify_payment_status(&payments, p.final_payout).unwrap(),
        PaymentStatus::Paid
    );
}

#[test]
fn zero_payout_is_paid_without_any_payment() {
    assert_eq!(
        classify_payment_status(&[], Decimal::ZERO).unwrap(),
        PaymentStatus::Paid
    );
}

#[test]
fn status_matches_paid_amount_for_every_case() {
    let final_payout = dec!(750);
    for paid_total in [dec!(0), dec!(0.01), dec!(374.99), dec!(749.99), dec!(750), dec!(900)] {
        let p = payout(final_payout);
        let payments = vec![paid(&p, paid_total)];
        let status = classify_payment_status(&payments, final_payout).unwrap();

        assert_eq!(status == PaymentStatus::Paid, paid_total >= final_payout);
        assert_eq!(
            status == PaymentStatus::Partial,
            paid_total > Decimal::ZERO && paid_total < final_payout
        );
        assert_eq!(status == PaymentStatus::Pending, paid_total == Decimal::ZERO);
    }
}

#[test]
fn negative_amounts_are_rejected() {
    let p = payout(dec!(1000));
    let payments = vec![paid(&p, dec!(100)), paid(&p, dec!(-50))];
    let err = classify_payment_status(&payments, p.final_payout).unwrap_err();
    assert_eq!(err.field(), Some("payments[1].amount"));

    let err = classify_payment_status(&[], dec!(-1)).unwrap_err();
    assert_eq!(err.field(), Some("final_payout"));
}

#[test]
fn last_paid_date_ignores_unpaid_records() {
    let p = payout(dec!(1000));
    let mut early = paid(&p, dec!(200));
    early.paid_date = NaiveDate::from_ymd_opt(2026, 3, 1);
    let mut late = paid(&p, dec!(300));
    late.paid_date = NaiveDate::from_ymd_opt(2026, 4, 15);
    let mut pending = payment(&p, "pending", dec!(500));
    pending.paid_date = NaiveDate::from_ymd_opt(2026, 5, 1);

    assert_eq!(
        last_paid_date(&[early, pending, late]),
        NaiveDate::from_ymd_opt(2026, 4, 15)
    );
}

#[test]
fn record_status_parsing() {
    assert_eq!(PaymentRecordStatus::from_string("paid"), PaymentRecordStatus::Paid);
    assert_eq!(PaymentRecordStatus::from_string("void"), PaymentRecordStatus::Void);
    assert_eq!(
        PaymentRecordStatus::from_string("PAID"),
        PaymentRecordStatus::Pending
    );
}

#[test]
fn paid_total_beyond_decimal_range_is_rejected() {
    let p = payout(Decimal::MAX);
    let payments = vec![paid(&p, Decimal::MAX), paid(&p, Decimal::ONE)];

    let err = classify_payment_status(&payments, p.final_payout).unwrap_err();
    assert_eq!(err.field(), Some("paid_amount"));
}
