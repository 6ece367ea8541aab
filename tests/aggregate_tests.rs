use approx::assert_relative_eq;
use chrono::NaiveDate;
use cost_charts::core::aggregate::{
    LEGAL_COUNSEL, MEDIATION, OTHER_PROFESSIONAL_FEES, month_key, round_cents,
};
use cost_charts::core::{PaymentEntry, aggregate_monthly, categorize};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn recipients_map_to_reporting_categories() {
    assert_eq!(categorize("J. Doe (lawyer)"), LEGAL_COUNSEL);
    assert_eq!(categorize("Lawrence Park (mediator)"), MEDIATION);
    assert_eq!(categorize("Family Mediation Centre"), MEDIATION);
    assert_eq!(categorize("Smith Law LLP"), LEGAL_COUNSEL);
    assert_eq!(categorize("Duty Counsel Office"), LEGAL_COUNSEL);
    assert_eq!(categorize("Acme Accounting"), OTHER_PROFESSIONAL_FEES);
    assert_eq!(categorize(""), OTHER_PROFESSIONAL_FEES);
}

#[test]
fn month_keys_are_zero_padded() {
    assert_eq!(month_key(date(2024, 3, 17)), "2024-03");
    assert_eq!(month_key(date(987, 11, 1)), "0987-11");
}

#[test]
fn cents_round_half_away_from_zero() {
    assert_relative_eq!(round_cents(0.125), 0.13);
    assert_relative_eq!(round_cents(-0.125), -0.13);
    assert_relative_eq!(round_cents(10.0), 10.0);
}

#[test]
fn payments_aggregate_into_ordered_months() {
    let entries = vec![
        PaymentEntry::new(date(2024, 2, 3), 20.0, "Acme (lawyer)"),
        PaymentEntry::new(date(2024, 1, 20), 50.0, "Family Mediation Centre"),
        PaymentEntry::new(date(2024, 1, 5), 100.5, "Smith Law LLP"),
        PaymentEntry::new(date(2024, 2, 9), -5.0, "Refund"),
        PaymentEntry::new(date(2024, 2, 10), f64::NAN, "Broken"),
    ];
    let dataset = aggregate_monthly(&entries, "CAD");

    assert_eq!(dataset.currency, "CAD");
    assert_eq!(dataset.monthly.len(), 2);

    let january = &dataset.monthly[0];
    assert_eq!(january.month, "2024-01");
    assert_relative_eq!(january.total, 150.5);
    assert_relative_eq!(january.cumulative, 150.5);
    let categories: Vec<(&str, f64)> = january
        .by_category
        .iter()
        .map(|(name, value)| (name.as_str(), *value))
        .collect();
    assert_eq!(categories, vec![(LEGAL_COUNSEL, 100.5), (MEDIATION, 50.0)]);

    let february = &dataset.monthly[1];
    assert_eq!(february.month, "2024-02");
    assert_relative_eq!(february.total, 20.0);
    assert_relative_eq!(february.cumulative, 170.5);
    assert_eq!(february.by_category.len(), 1);
}

#[test]
fn payments_read_from_json_records() {
    let entries: Vec<PaymentEntry> = serde_json::from_str(
        r#"[
            {"date": "2024-03-02", "amount": 80.25, "sent_to": "K. Lee (mediator)"},
            {"date": "2024-03-28", "amount": 19.75, "sent_to": "Acme Accounting"}
        ]"#,
    )
    .expect("payment records");
    assert_eq!(entries[0].date, date(2024, 3, 2));

    let dataset = aggregate_monthly(&entries, "CAD");
    assert_eq!(dataset.monthly.len(), 1);
    assert_eq!(dataset.monthly[0].month, "2024-03");
    assert_relative_eq!(dataset.monthly[0].total, 100.0);
    assert_relative_eq!(dataset.monthly[0].category_value(MEDIATION), 80.25);
    assert_relative_eq!(
        dataset.monthly[0].category_value(OTHER_PROFESSIONAL_FEES),
        19.75
    );
}

#[test]
fn no_payments_yield_an_empty_dataset() {
    let dataset = aggregate_monthly(&[], "USD");
    assert!(dataset.monthly.is_empty());
    assert_eq!(dataset.currency, "USD");
}
