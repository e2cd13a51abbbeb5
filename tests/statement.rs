//! Frequency detection over a full statement file

use std::path::PathBuf;

use cadence::import::StatementLoader;
use cadence::models::{BucketTable, BucketTableKind, Money, Period, Tag, TagSet};
use cadence::reports::FrequencyReport;
use cadence::services::{FrequencyService, PeriodClassifier};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_statement_periods() {
    let transactions = StatementLoader::default()
        .load_path(&fixture("statement"))
        .unwrap();
    assert_eq!(transactions.len(), 24);

    let periods = FrequencyService::default().detect(&transactions);

    assert_eq!(periods.len(), 4);
    assert_eq!(periods[&TagSet::from([Tag::Charge, Tag::Rent])], Period::Monthly);
    assert_eq!(periods[&TagSet::from([Tag::Payment, Tag::Cash])], Period::Weekly);
    assert_eq!(
        periods[&TagSet::from([Tag::Payment, Tag::HousingBenefit])],
        Period::FourWeekly
    );
    assert_eq!(periods[&TagSet::from([Tag::Fee])], Period::Unknown);
}

#[test]
fn test_statement_periods_with_extended_table() {
    let transactions = StatementLoader::default()
        .load_path(&fixture("statement"))
        .unwrap();

    let service = FrequencyService::new(PeriodClassifier::new(BucketTable::extended()))
        .with_parallel(false);
    let report = FrequencyReport::generate(&service, BucketTableKind::Extended, &transactions);

    assert_eq!(report.bucket_table, BucketTableKind::Extended);
    assert_eq!(report.recurring_count(), 3);

    let benefit = report.row("PAYMENT;HOUSING_BENEFIT").unwrap();
    assert_eq!(benefit.transaction_count, 6);
    assert_eq!(benefit.days_spanned, 140);
    assert_eq!(benefit.average_days, Some(23));
    assert_eq!(benefit.total_amount, Some(Money::from_minor_units(247500)));
}

#[test]
fn test_shuffled_statement_gives_same_periods() {
    let mut transactions = StatementLoader::default()
        .load_path(&fixture("statement"))
        .unwrap();
    let service = FrequencyService::default();
    let expected = service.detect(&transactions);

    transactions.reverse();
    assert_eq!(service.detect(&transactions), expected);

    transactions.rotate_left(7);
    assert_eq!(service.detect(&transactions), expected);
}
