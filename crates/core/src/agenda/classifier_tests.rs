//! Tests for the follow-up classifier.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::agenda::agenda_model::{AgendaCategory, AgendaConfig, FollowUp, FollowUpKind};
use crate::agenda::classifier::classify;
use crate::customers::{Customer, DelinquencyBucket, LoanHealth, PrsSchedule, SegmentFlag};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn base(name: &str) -> Customer {
    Customer {
        id: name.to_lowercase(),
        name: name.to_string(),
        phone: Some("081234567890".to_string()),
        segment: SegmentFlag::Active,
        loan_health: LoanHealth::Current,
        delinquency_bucket: None,
        has_lantakur: false,
        raw_flag: "Active".to_string(),
        raw_status: "Lancar".to_string(),
        raw_delinquency_tag: String::new(),
        due_date: None,
        payoff_date: None,
        prs_schedule: None,
        outstanding: Decimal::ZERO,
        plafond: Decimal::ZERO,
        savings_balance: Decimal::ZERO,
        officer: "CO-1".to_string(),
        sentra: "Melati".to_string(),
        dpd: 0,
        notes: None,
    }
}

fn one(items: &[FollowUp]) -> &FollowUp {
    assert_eq!(items.len(), 1, "expected exactly one item, got {:?}", items);
    &items[0]
}

#[test]
fn test_ctx_bucket_emits_collection_ctx_with_dpd_urgency() {
    let mut c = base("Siti");
    c.due_date = Some(date(2025, 8, 10));
    c.delinquency_bucket = Some(DelinquencyBucket::Ctx);
    c.dpd = 15;

    let items = classify(&[c], &AgendaConfig::default(), date(2025, 8, 25));
    let item = one(&items);
    assert_eq!(item.category, AgendaCategory::CollectionCtx);
    assert_eq!(item.kind, FollowUpKind::Payment);
    assert_eq!(item.urgency, 15);
}

#[test]
fn test_secondary_buckets_emit_collection_ex() {
    for bucket in [
        DelinquencyBucket::Npf,
        DelinquencyBucket::Xday,
        DelinquencyBucket::Sm,
    ] {
        let mut c = base("Rina");
        c.due_date = Some(date(2025, 8, 10));
        c.delinquency_bucket = Some(bucket);
        c.dpd = 7;

        let items = classify(&[c], &AgendaConfig::default(), date(2025, 8, 25));
        let item = one(&items);
        assert_eq!(item.category, AgendaCategory::CollectionEx);
        assert_eq!(item.urgency, 7);
    }
}

#[test]
fn test_delinquency_shadows_lantakur_and_refinancing() {
    // Satisfies the CTX condition, the lantakur condition, and the
    // refinancing window at once: only the delinquency branch may fire.
    let mut c = base("Siti");
    c.due_date = Some(date(2025, 8, 28));
    c.delinquency_bucket = Some(DelinquencyBucket::Ctx);
    c.has_lantakur = true;
    c.dpd = 4;

    let items = classify(&[c], &AgendaConfig::default(), date(2025, 8, 25));
    let item = one(&items);
    assert_eq!(item.category, AgendaCategory::CollectionCtx);
}

#[test]
fn test_delinquent_without_routable_bucket_emits_nothing() {
    // dpd > 0 but no bucket: delinquent, yet there is no collections
    // queue for it, and the healthy-customer branches are shadowed.
    let mut c = base("Siti");
    c.due_date = Some(date(2025, 8, 28));
    c.dpd = 5;

    let items = classify(&[c], &AgendaConfig::default(), date(2025, 8, 25));
    assert!(items.is_empty());
}

#[test]
fn test_lantakur_for_current_customer() {
    let mut c = base("Siti");
    c.due_date = Some(date(2025, 9, 5));
    c.has_lantakur = true;

    let items = classify(&[c], &AgendaConfig::default(), date(2025, 8, 25));
    let item = one(&items);
    assert_eq!(item.category, AgendaCategory::Lantakur);
    assert_eq!(item.urgency, 0);
}

#[test]
fn test_due_tomorrow_is_soon_payment() {
    let mut c = base("Siti");
    c.due_date = Some(date(2025, 8, 26));

    let items = classify(&[c], &AgendaConfig::default(), date(2025, 8, 25));
    let item = one(&items);
    assert_eq!(item.kind, FollowUpKind::Payment);
    assert_eq!(item.category, AgendaCategory::Soon);
    assert_eq!(item.days_left, Some(1));
}

#[test]
fn test_due_today_and_later_this_month() {
    let mut today_due = base("Siti");
    today_due.due_date = Some(date(2025, 8, 25));
    let mut month_due = base("Rina");
    month_due.due_date = Some(date(2025, 8, 31));

    let items = classify(
        &[today_due, month_due],
        &AgendaConfig::default(),
        date(2025, 8, 25),
    );
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].category, AgendaCategory::Today);
    assert_eq!(items[0].days_left, Some(0));
    assert_eq!(items[1].category, AgendaCategory::ThisMonth);
}

#[test]
fn test_december_january_rollover_in_lookahead_window() {
    let mut c = base("Siti");
    c.due_date = Some(date(2026, 1, 10));

    let items = classify(&[c], &AgendaConfig::default(), date(2025, 12, 15));
    let item = one(&items);
    assert_eq!(item.category, AgendaCategory::NextMonth);
}

#[test]
fn test_due_two_months_out_is_outside_window() {
    let mut c = base("Siti");
    c.due_date = Some(date(2025, 10, 20));

    let items = classify(&[c], &AgendaConfig::default(), date(2025, 8, 25));
    assert!(items.is_empty());
}

#[test]
fn test_wider_lookahead_includes_further_months() {
    let mut c = base("Siti");
    c.due_date = Some(date(2025, 10, 20));
    let config = AgendaConfig {
        refinancing_lookahead_months: 2,
        ..Default::default()
    };

    let items = classify(&[c], &config, date(2025, 8, 25));
    assert_eq!(one(&items).category, AgendaCategory::NextMonth);
}

#[test]
fn test_inactive_and_paid_off_excluded_from_refinancing() {
    for segment in [SegmentFlag::Inactive, SegmentFlag::PaidOff] {
        let mut c = base("Siti");
        c.segment = segment;
        c.due_date = Some(date(2025, 8, 26));

        let items = classify(&[c], &AgendaConfig::default(), date(2025, 8, 25));
        assert!(
            items.iter().all(|i| i.kind != FollowUpKind::Payment),
            "{:?} must not get a refinancing item",
            segment
        );
    }
}

#[test]
fn test_prs_today_and_tomorrow_both_soon() {
    let mut today_meeting = base("Siti");
    today_meeting.prs_schedule = Some(PrsSchedule::Date(date(2025, 8, 25)));
    let mut tomorrow_meeting = base("Rina");
    tomorrow_meeting.prs_schedule = Some(PrsSchedule::DayOfMonth(26));

    let items = classify(
        &[today_meeting, tomorrow_meeting],
        &AgendaConfig::default(),
        date(2025, 8, 25),
    );
    assert_eq!(items.len(), 2);
    for item in &items {
        assert_eq!(item.kind, FollowUpKind::Prs);
        assert_eq!(item.category, AgendaCategory::Soon);
    }
    assert_eq!(items[0].days_left, Some(0));
    assert_eq!(items[1].days_left, Some(1));
}

#[test]
fn test_prs_outside_threshold_and_inactive_skipped() {
    let mut far = base("Siti");
    far.prs_schedule = Some(PrsSchedule::Date(date(2025, 8, 30)));
    let mut inactive = base("Rina");
    inactive.segment = SegmentFlag::Inactive;
    inactive.prs_schedule = Some(PrsSchedule::Date(date(2025, 8, 25)));

    let items = classify(
        &[far, inactive],
        &AgendaConfig::default(),
        date(2025, 8, 25),
    );
    assert!(items.is_empty());
}

#[test]
fn test_prs_day_of_month_rolls_into_next_month() {
    // Meeting day 1 has passed on Aug 25; next occurrence is Sep 1,
    // outside the default one-day threshold.
    let mut c = base("Siti");
    c.prs_schedule = Some(PrsSchedule::DayOfMonth(1));

    let items = classify(&[c.clone()], &AgendaConfig::default(), date(2025, 8, 25));
    assert!(items.is_empty());

    // On Aug 31 the rolled-forward Sep 1 meeting is tomorrow.
    let items = classify(&[c], &AgendaConfig::default(), date(2025, 8, 31));
    assert_eq!(one(&items).days_left, Some(1));
}

#[test]
fn test_winback_recent_window() {
    let mut c = base("Siti");
    c.segment = SegmentFlag::PaidOff;
    c.raw_flag = "Lunas".to_string();
    c.payoff_date = Some(date(2025, 6, 10));

    let items = classify(&[c], &AgendaConfig::default(), date(2025, 8, 25));
    assert_eq!(one(&items).category, AgendaCategory::WinbackRecent);
}

#[test]
fn test_winback_old_window() {
    let mut c = base("Siti");
    c.segment = SegmentFlag::DropOut;
    c.payoff_date = Some(date(2025, 1, 10));

    let items = classify(&[c], &AgendaConfig::default(), date(2025, 8, 25));
    assert_eq!(one(&items).category, AgendaCategory::WinbackOld);
}

#[test]
fn test_winback_too_recent_or_stale_emits_nothing() {
    let mut fresh = base("Siti");
    fresh.segment = SegmentFlag::PaidOff;
    fresh.payoff_date = Some(date(2025, 8, 1));
    let mut stale = base("Rina");
    stale.segment = SegmentFlag::PaidOff;
    stale.payoff_date = Some(date(2024, 7, 10));

    let items = classify(&[fresh, stale], &AgendaConfig::default(), date(2025, 8, 25));
    assert!(items.is_empty());
}

#[test]
fn test_winback_requires_exited_flag() {
    let mut c = base("Siti");
    c.payoff_date = Some(date(2025, 6, 10));

    let items = classify(&[c], &AgendaConfig::default(), date(2025, 8, 25));
    assert!(items.iter().all(|i| i.kind != FollowUpKind::Winback));
}

#[test]
fn test_missing_due_date_disables_only_that_branch() {
    let mut c = base("Siti");
    c.due_date = None;
    c.delinquency_bucket = Some(DelinquencyBucket::Ctx);
    c.dpd = 30;
    c.prs_schedule = Some(PrsSchedule::Date(date(2025, 8, 25)));

    let items = classify(&[c], &AgendaConfig::default(), date(2025, 8, 25));
    let item = one(&items);
    assert_eq!(item.kind, FollowUpKind::Prs);
}

#[test]
fn test_one_customer_can_hit_multiple_branches() {
    let mut c = base("Siti");
    c.due_date = Some(date(2025, 8, 10));
    c.delinquency_bucket = Some(DelinquencyBucket::Ctx);
    c.dpd = 20;
    c.prs_schedule = Some(PrsSchedule::Date(date(2025, 8, 25)));

    let items = classify(&[c], &AgendaConfig::default(), date(2025, 8, 25));
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].category, AgendaCategory::CollectionCtx);
    assert_eq!(items[1].kind, FollowUpKind::Prs);
}

#[test]
fn test_priority_order_with_stable_ties() {
    let mut winback = base("Ani");
    winback.segment = SegmentFlag::PaidOff;
    winback.payoff_date = Some(date(2025, 6, 1));

    let mut this_month = base("Budi");
    this_month.due_date = Some(date(2025, 8, 30));

    let mut soon = base("Citra");
    soon.due_date = Some(date(2025, 8, 26));

    let mut ctx = base("Dewi");
    ctx.due_date = Some(date(2025, 8, 1));
    ctx.delinquency_bucket = Some(DelinquencyBucket::Ctx);
    ctx.dpd = 40;

    let mut second_winback = base("Eka");
    second_winback.segment = SegmentFlag::PaidOff;
    second_winback.payoff_date = Some(date(2025, 6, 15));

    let items = classify(
        &[winback, this_month, soon, ctx, second_winback],
        &AgendaConfig::default(),
        date(2025, 8, 25),
    );
    let names: Vec<&str> = items.iter().map(|i| i.customer_name.as_str()).collect();
    // Collections first, then soon, then the unordered tail in input order.
    assert_eq!(names, vec!["Dewi", "Citra", "Ani", "Budi", "Eka"]);
}

#[test]
fn test_classification_is_idempotent() {
    let mut a = base("Siti");
    a.due_date = Some(date(2025, 8, 26));
    let mut b = base("Rina");
    b.segment = SegmentFlag::PaidOff;
    b.payoff_date = Some(date(2025, 5, 1));
    let customers = vec![a, b];

    let config = AgendaConfig::default();
    let today = date(2025, 8, 25);
    assert_eq!(
        classify(&customers, &config, today),
        classify(&customers, &config, today)
    );
}

prop_compose! {
    fn arb_customer(index: usize)(
        dpd in 0i64..60,
        bucket in prop_oneof![
            Just(None),
            Just(Some(DelinquencyBucket::Ctx)),
            Just(Some(DelinquencyBucket::Npf)),
            Just(Some(DelinquencyBucket::Sm)),
        ],
        due_offset in proptest::option::of(-40i64..80),
        payoff_months in proptest::option::of(0i64..15),
        prs_day in proptest::option::of(1u32..29),
        exited in any::<bool>(),
        lantakur in any::<bool>(),
    ) -> Customer {
        let today = date(2025, 8, 25);
        let mut c = base(&format!("Customer{}", index));
        c.id = format!("c{}", index);
        c.dpd = dpd;
        c.delinquency_bucket = bucket;
        c.has_lantakur = lantakur;
        c.due_date = due_offset.map(|d| today + chrono::Duration::days(d));
        c.payoff_date = payoff_months
            .map(|m| date(2025, 8, 1) - chrono::Months::new(m as u32));
        c.prs_schedule = prs_day.map(PrsSchedule::DayOfMonth);
        if exited {
            c.segment = SegmentFlag::PaidOff;
        }
        c
    }
}

proptest! {
    #[test]
    fn prop_classify_is_idempotent_and_rank_sorted(
        customers in proptest::collection::vec(arb_customer(0), 0..12)
    ) {
        let config = AgendaConfig::default();
        let today = date(2025, 8, 25);
        let first = classify(&customers, &config, today);
        let second = classify(&customers, &config, today);
        prop_assert_eq!(&first, &second);
        for window in first.windows(2) {
            prop_assert!(window[0].category.rank() <= window[1].category.rank());
        }
    }
}
