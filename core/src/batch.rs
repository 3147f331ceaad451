//! Batch orchestration: a seller's review set and review timestamps.

use crate::{
    clock,
    error::{GenError, GenResult},
    review_generator::{ReviewGenerator, ReviewOptions, ReviewRecord, ReviewRequest},
    rng::GenRng,
    types::{BookCategory, QualityTier, Region},
};
use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_PERIOD_MONTHS: u32 = 6;

/// Largest record count a single batch call accepts.
pub const MAX_BATCH_SIZE: usize = 1_000_000;

/// Reject batch sizes past `MAX_BATCH_SIZE` before any work is done.
pub fn check_batch_size(count: usize) -> GenResult<()> {
    if count > MAX_BATCH_SIZE {
        return Err(GenError::invalid(format!(
            "batch of {count} records exceeds the limit of {MAX_BATCH_SIZE}"
        )));
    }
    Ok(())
}

/// Share of a seller's reviews per quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityDistribution {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
    pub poor: f64,
}

impl Default for QualityDistribution {
    fn default() -> Self {
        Self {
            excellent: 0.40,
            good: 0.35,
            average: 0.20,
            poor: 0.05,
        }
    }
}

impl QualityDistribution {
    pub fn share(&self, tier: QualityTier) -> f64 {
        match tier {
            QualityTier::Excellent => self.excellent,
            QualityTier::Good => self.good,
            QualityTier::Average => self.average,
            QualityTier::Poor => self.poor,
        }
    }

    pub fn validate(&self) -> GenResult<()> {
        for tier in QualityTier::ALL {
            let share = self.share(tier);
            if !share.is_finite() || share < 0.0 {
                return Err(GenError::invalid(format!(
                    "quality share for {} must be finite and non-negative, got {share}",
                    tier.key()
                )));
            }
        }
        let total = self.total();
        if !total.is_finite() {
            return Err(GenError::invalid("quality distribution total overflows"));
        }
        if total <= 0.0 {
            return Err(GenError::invalid("quality distribution sums to zero"));
        }
        Ok(())
    }

    pub fn total(&self) -> f64 {
        QualityTier::ALL.iter().map(|t| self.share(*t)).sum()
    }

    /// Review count per tier for a batch of `count`.
    ///
    /// Excellent, good and average get `floor(count * share)`; poor takes
    /// whatever is left. Shares summing past 1 are scaled down first.
    pub fn plan(&self, count: usize) -> GenResult<Vec<(QualityTier, usize)>> {
        self.validate()?;
        let total = self.total();
        let scale = if total > 1.0 + 1e-9 { total } else { 1.0 };

        let mut plan = Vec::with_capacity(QualityTier::ALL.len());
        let mut assigned = 0usize;
        for tier in [QualityTier::Excellent, QualityTier::Good, QualityTier::Average] {
            let n = ((count as f64 * self.share(tier) / scale) + 1e-9).floor() as usize;
            let n = n.min(count - assigned);
            assigned += n;
            plan.push((tier, n));
        }
        plan.push((QualityTier::Poor, count - assigned));
        Ok(plan)
    }
}

pub struct BatchGenerator;

impl BatchGenerator {
    /// Reviews for one seller following `distribution`. Each review draws
    /// its book category and region uniformly; the result is shuffled so
    /// tiers are interleaved.
    pub fn generate_seller_reviews(
        rng: &mut GenRng,
        seller_id: &str,
        count: usize,
        distribution: &QualityDistribution,
        options: &ReviewOptions,
        now: DateTime<Utc>,
    ) -> GenResult<Vec<ReviewRecord>> {
        check_batch_size(count)?;
        let plan = distribution.plan(count)?;

        let mut reviews = Vec::with_capacity(count);
        for (tier, n) in &plan {
            for _ in 0..*n {
                let category = *rng.pick(&BookCategory::ALL)?;
                let region = *rng.pick(&Region::ALL)?;
                let request = ReviewRequest::new(seller_id, *tier, category, region)
                    .with_options(options.clone());
                reviews.push(ReviewGenerator::generate(rng, &request, now)?);
            }
        }
        reviews.shuffle(rng);

        log::info!(
            "seller {seller_id}: {} reviews ({})",
            reviews.len(),
            plan.iter()
                .map(|(tier, n)| format!("{}={n}", tier.key()))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(reviews)
    }

    /// `count` instants uniform over the last `period_months` (30-day
    /// months) ending at `now`, sorted ascending.
    pub fn generate_review_timestamps(
        rng: &mut GenRng,
        count: usize,
        period_months: u32,
        now: DateTime<Utc>,
    ) -> GenResult<Vec<DateTime<Utc>>> {
        check_batch_size(count)?;
        let start = clock::window_start(now, period_months)?;
        let span_ms = (now - start).num_milliseconds();
        if span_ms < 0 {
            return Err(GenError::invalid(format!(
                "timestamp window of {period_months} months is negative"
            )));
        }

        let mut stamps: Vec<DateTime<Utc>> = (0..count)
            .map(|_| start + Duration::milliseconds(rng.range_inclusive(0, span_ms as u64) as i64))
            .collect();
        stamps.sort();
        log::debug!("{count} timestamps between {start} and {now}");
        Ok(stamps)
    }

    /// Stamp `created_at` on each review, oldest first in list order.
    pub fn backdate_reviews(
        rng: &mut GenRng,
        reviews: &mut [ReviewRecord],
        period_months: u32,
        now: DateTime<Utc>,
    ) -> GenResult<()> {
        let stamps = Self::generate_review_timestamps(rng, reviews.len(), period_months, now)?;
        for (review, stamp) in reviews.iter_mut().zip(stamps) {
            review.created_at = Some(stamp);
        }
        Ok(())
    }
}

/// Number of reviews per tier.
pub fn tier_counts(reviews: &[ReviewRecord]) -> BTreeMap<QualityTier, usize> {
    let mut counts = BTreeMap::new();
    for review in reviews {
        *counts.entry(review.tier()).or_insert(0) += 1;
    }
    counts
}

/// One JSON object per line, the format importers read.
pub fn to_json_lines<T: Serialize>(records: &[T]) -> GenResult<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn default_plan_for_100() {
        let plan = QualityDistribution::default().plan(100).unwrap();
        assert_eq!(
            plan,
            vec![
                (QualityTier::Excellent, 40),
                (QualityTier::Good, 35),
                (QualityTier::Average, 20),
                (QualityTier::Poor, 5),
            ]
        );
    }

    #[test]
    fn remainder_goes_to_poor() {
        let plan = QualityDistribution::default().plan(7).unwrap();
        // floor(2.8)=2, floor(2.45)=2, floor(1.4)=1
        assert_eq!(plan[3], (QualityTier::Poor, 2));
        assert_eq!(plan.iter().map(|(_, n)| n).sum::<usize>(), 7);
    }

    #[test]
    fn oversized_shares_are_scaled() {
        let dist = QualityDistribution {
            excellent: 1.0,
            good: 1.0,
            average: 0.0,
            poor: 0.0,
        };
        let plan = dist.plan(10).unwrap();
        assert_eq!(plan[0], (QualityTier::Excellent, 5));
        assert_eq!(plan[1], (QualityTier::Good, 5));
        assert_eq!(plan[3], (QualityTier::Poor, 0));
    }

    #[test]
    fn invalid_distributions_are_rejected() {
        let negative = QualityDistribution { poor: -0.1, ..Default::default() };
        assert!(matches!(negative.validate(), Err(GenError::InvalidInput(_))));
        let zero = QualityDistribution { excellent: 0.0, good: 0.0, average: 0.0, poor: 0.0 };
        assert!(zero.plan(10).is_err());
        let nan = QualityDistribution { good: f64::NAN, ..Default::default() };
        assert!(nan.validate().is_err());
        let overflowing = QualityDistribution {
            excellent: f64::MAX,
            good: f64::MAX,
            ..Default::default()
        };
        assert!(matches!(overflowing.plan(10), Err(GenError::InvalidInput(_))));
    }

    #[test]
    fn oversized_batches_are_rejected() {
        let mut rng = GenRng::from_seed(4);
        let reviews = BatchGenerator::generate_seller_reviews(
            &mut rng,
            "s",
            usize::MAX,
            &QualityDistribution::default(),
            &ReviewOptions::default(),
            now(),
        );
        assert!(matches!(reviews, Err(GenError::InvalidInput(_))));
        let stamps =
            BatchGenerator::generate_review_timestamps(&mut rng, MAX_BATCH_SIZE + 1, 6, now());
        assert!(matches!(stamps, Err(GenError::InvalidInput(_))));
        assert!(check_batch_size(MAX_BATCH_SIZE).is_ok());
    }

    #[test]
    fn oversized_timestamp_window_is_an_error() {
        let mut rng = GenRng::from_seed(3);
        let result = BatchGenerator::generate_review_timestamps(&mut rng, 1, 4_000_000, now());
        assert!(matches!(result, Err(GenError::InvalidInput(_))));

        let mut reviews = BatchGenerator::generate_seller_reviews(
            &mut rng,
            "s",
            2,
            &QualityDistribution::default(),
            &ReviewOptions::default(),
            now(),
        )
        .unwrap();
        assert!(BatchGenerator::backdate_reviews(&mut rng, &mut reviews, u32::MAX, now()).is_err());
        assert!(reviews.iter().all(|r| r.created_at.is_none()));
    }

    #[test]
    fn json_lines_one_record_per_line() {
        let mut rng = GenRng::from_seed(2);
        let stamps = BatchGenerator::generate_review_timestamps(&mut rng, 3, 1, now()).unwrap();
        let text = to_json_lines(&stamps).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with('\n'));
        assert_eq!(to_json_lines::<u8>(&[]).unwrap(), "");
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = GenRng::from_seed(1);
        let reviews = BatchGenerator::generate_seller_reviews(
            &mut rng,
            "s",
            0,
            &QualityDistribution::default(),
            &ReviewOptions::default(),
            now(),
        )
        .unwrap();
        assert!(reviews.is_empty());
        assert!(BatchGenerator::generate_review_timestamps(&mut rng, 0, 6, now())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn backdating_stamps_every_review_in_order() {
        let mut rng = GenRng::from_seed(9);
        let mut reviews = BatchGenerator::generate_seller_reviews(
            &mut rng,
            "s",
            12,
            &QualityDistribution::default(),
            &ReviewOptions::default(),
            now(),
        )
        .unwrap();
        BatchGenerator::backdate_reviews(&mut rng, &mut reviews, 3, now()).unwrap();
        let stamps: Vec<_> = reviews.iter().map(|r| r.created_at.unwrap()).collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
        assert!(stamps.iter().all(|t| *t >= now() - Duration::days(90) && *t <= now()));
    }
}
