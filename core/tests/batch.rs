//! Seller review batches and review timestamps.

use chrono::{DateTime, Duration, TimeZone, Utc};
use seedgen_core::{
    batch::{tier_counts, QualityDistribution},
    engine::SeedEngine,
    review_generator::ReviewOptions,
    types::QualityTier,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
}

#[test]
fn hundred_reviews_follow_default_split() {
    let mut engine = SeedEngine::build_at(42, now());
    let reviews = engine
        .generate_seller_reviews("seller-123", 100, None, &ReviewOptions::default())
        .unwrap();
    assert_eq!(reviews.len(), 100);

    let counts = tier_counts(&reviews);
    assert_eq!(counts[&QualityTier::Excellent], 40);
    assert_eq!(counts[&QualityTier::Good], 35);
    assert_eq!(counts[&QualityTier::Average], 20);
    assert_eq!(counts[&QualityTier::Poor], 5);
    assert!(reviews.iter().all(|r| r.seller_id == "seller-123"));
}

#[test]
fn batch_is_not_grouped_by_tier() {
    let mut engine = SeedEngine::build_at(42, now());
    let reviews = engine
        .generate_seller_reviews("seller-123", 100, None, &ReviewOptions::default())
        .unwrap();
    let tiers: Vec<QualityTier> = reviews.iter().map(|r| r.tier()).collect();

    // Generation order is 40 excellent then 35 good; a shuffled batch
    // cannot keep the first 40 all excellent.
    assert!(tiers[..40].iter().any(|t| *t != QualityTier::Excellent));
    let changes = tiers.windows(2).filter(|w| w[0] != w[1]).count();
    assert!(changes > 10, "only {changes} tier changes, batch looks sorted");
}

#[test]
fn custom_distribution_is_respected() {
    let mut engine = SeedEngine::build_at(9, now());
    let dist = QualityDistribution { excellent: 0.0, good: 0.5, average: 0.5, poor: 0.0 };
    let reviews = engine
        .generate_seller_reviews("s", 20, Some(&dist), &ReviewOptions::default())
        .unwrap();
    let counts = tier_counts(&reviews);
    assert_eq!(counts.get(&QualityTier::Excellent), None);
    assert_eq!(counts[&QualityTier::Good], 10);
    assert_eq!(counts[&QualityTier::Average], 10);
}

#[test]
fn invalid_distribution_is_an_error() {
    let mut engine = SeedEngine::build_at(9, now());
    let dist = QualityDistribution { excellent: -1.0, ..Default::default() };
    assert!(engine
        .generate_seller_reviews("s", 20, Some(&dist), &ReviewOptions::default())
        .is_err());
}

#[test]
fn timestamps_are_sorted_and_inside_window() {
    let mut engine = SeedEngine::build_at(42, now());
    let stamps = engine.generate_review_timestamps(50, 6).unwrap();
    assert_eq!(stamps.len(), 50);
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]), "timestamps not sorted");

    let earliest = now() - Duration::days(180);
    for t in &stamps {
        assert!(*t >= earliest && *t <= now(), "{t} outside window");
    }
    // spread over the window, not bunched at one end
    assert!(stamps[0] < now() - Duration::days(120));
    assert!(stamps[49] > now() - Duration::days(60));
}

#[test]
fn backdated_batch_keeps_order() {
    let mut engine = SeedEngine::build_at(42, now());
    let mut reviews = engine
        .generate_seller_reviews("seller-123", 30, None, &ReviewOptions::default())
        .unwrap();
    engine.backdate_reviews(&mut reviews, 2).unwrap();
    let stamps: Vec<_> = reviews.iter().map(|r| r.created_at.unwrap()).collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    assert!(stamps[0] >= now() - Duration::days(60));
}
