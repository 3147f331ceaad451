//! Vietnamese book-seller reviews.
//!
//! A review is assembled from one quality tier, one book category and one
//! region: the tier fixes the rating range, score bands and phrase pools,
//! the region picks the title and body templates, and the category supplies
//! the book metadata. Politeness follows the region and the reviewer's age.

use crate::{
    error::{GenError, GenResult},
    name_generator::NameGenerator,
    review_corpus::{self, TierCorpus},
    rng::GenRng,
    template::{Slot, SlotValues, Template},
    types::{
        BookCategory, Gender, LanguageStyle, PolitenessLevel, QualityTier, RecordId, Region,
        SellerId,
    },
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const REVIEWER_MIN_AGE: u8 = 18;
pub const REVIEWER_MAX_AGE: u8 = 67;

/// Chance that the four sub-ratings drift one point from the overall rating.
const RATING_JITTER_CHANCE: f64 = 0.3;

/// Band for the authenticity score, shared by every tier.
const AUTHENTICITY_BAND: (f64, f64) = (4.0, 5.0);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewOptions {
    /// Clamped into the reviewer age range.
    #[serde(default)]
    pub reviewer_age: Option<u8>,
    #[serde(default)]
    pub reviewer_gender: Option<Gender>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub seller_id: SellerId,
    pub tier: QualityTier,
    pub category: BookCategory,
    pub region: Region,
    #[serde(default)]
    pub options: ReviewOptions,
}

impl ReviewRequest {
    pub fn new(
        seller_id: impl Into<SellerId>,
        tier: QualityTier,
        category: BookCategory,
        region: Region,
    ) -> Self {
        Self {
            seller_id: seller_id.into(),
            tier,
            category,
            region,
            options: ReviewOptions::default(),
        }
    }

    /// Build a request from string keys. The tier must be known; unknown
    /// categories and regions fall back to literature and the South.
    pub fn from_keys(
        seller_id: impl Into<SellerId>,
        tier: &str,
        category: &str,
        region: &str,
    ) -> GenResult<Self> {
        let tier = QualityTier::from_key(tier)
            .ok_or_else(|| GenError::invalid(format!("unknown quality tier '{tier}'")))?;
        Ok(Self::new(
            seller_id,
            tier,
            BookCategory::from_key_or_default(category),
            Region::from_label_or_default(region),
        ))
    }

    pub fn with_options(mut self, options: ReviewOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewerProfile {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub occupation: String,
    pub reading_habits: Vec<String>,
    pub region: Region,
    pub review_count: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookContext {
    pub book_title: String,
    pub book_author: String,
    /// Vietnamese category label, e.g. "sách giáo khoa".
    pub book_category: String,
    pub book_condition: String,
    pub purchase_reason: String,
    pub isbn: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewCharacteristics {
    pub mentions_family: bool,
    pub mentions_gifting: bool,
    pub mentions_study: bool,
    pub uses_courtesy_phrases: bool,
    pub mentions_packaging: bool,
    pub mentions_festival_season: bool,
    pub uses_formal_language: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataParameters {
    pub book_category: BookCategory,
    pub region: Region,
    pub politeness_level: PolitenessLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub template_type: QualityTier,
    pub variation_used: Region,
    pub generated_at: DateTime<Utc>,
    pub parameters: MetadataParameters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRatings {
    pub delivery: u8,
    pub book_condition: u8,
    pub service: u8,
    pub pricing: u8,
}

impl SubRatings {
    pub fn all(&self) -> [u8; 4] {
        [self.delivery, self.book_condition, self.service, self.pricing]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub id: RecordId,
    pub seller_id: SellerId,
    pub review_title: String,
    pub review_content: String,
    pub overall_rating: u8,
    pub delivery_rating: u8,
    pub book_condition_rating: u8,
    pub service_rating: u8,
    pub pricing_rating: u8,
    pub region: Region,
    pub language_style: LanguageStyle,
    pub politeness_level: PolitenessLevel,
    pub is_auto_generated: bool,
    pub reviewer_profile: ReviewerProfile,
    pub book_context: BookContext,
    pub characteristics: ReviewCharacteristics,
    pub sentiment_score: f64,
    pub quality_score: f64,
    pub authenticity_score: f64,
    pub generation_metadata: GenerationMetadata,
    pub created_at: Option<DateTime<Utc>>,
}

impl ReviewRecord {
    pub fn tier(&self) -> QualityTier {
        self.generation_metadata.template_type
    }

    pub fn sub_ratings(&self) -> SubRatings {
        SubRatings {
            delivery: self.delivery_rating,
            book_condition: self.book_condition_rating,
            service: self.service_rating,
            pricing: self.pricing_rating,
        }
    }
}

pub struct ReviewGenerator;

impl ReviewGenerator {
    pub fn generate(
        rng: &mut GenRng,
        request: &ReviewRequest,
        now: DateTime<Utc>,
    ) -> GenResult<ReviewRecord> {
        let corpus = review_corpus::tier(request.tier);
        let id = rng.uuid().to_string();

        let reviewer_profile = Self::generate_reviewer_profile(rng, request.region, &request.options)?;
        let book_context = Self::generate_book_context(rng, request.category)?;
        let characteristics = Self::generate_characteristics(rng);
        let politeness_level = Self::politeness_for(rng, request.region, reviewer_profile.age);

        let overall_rating =
            rng.range_inclusive(corpus.rating_min as u64, corpus.rating_max as u64) as u8;
        let ratings = Self::sub_ratings(rng, overall_rating);

        let review_title = rng.pick(corpus.titles.for_region(request.region))?.to_string();
        let review_content = Self::render_content(
            rng,
            corpus,
            request.region,
            politeness_level,
            &book_context,
            &characteristics,
        )?;

        let sentiment_score = rng.range_f64(corpus.sentiment.0, corpus.sentiment.1);
        let quality_score = rng.range_f64(corpus.quality.0, corpus.quality.1);
        let authenticity_score = rng.range_f64(AUTHENTICITY_BAND.0, AUTHENTICITY_BAND.1);

        Ok(ReviewRecord {
            id,
            seller_id: request.seller_id.clone(),
            review_title,
            review_content,
            overall_rating,
            delivery_rating: ratings.delivery,
            book_condition_rating: ratings.book_condition,
            service_rating: ratings.service,
            pricing_rating: ratings.pricing,
            region: request.region,
            language_style: request.region.language_style(),
            politeness_level,
            is_auto_generated: true,
            reviewer_profile,
            book_context,
            characteristics,
            sentiment_score,
            quality_score,
            authenticity_score,
            generation_metadata: GenerationMetadata {
                template_type: request.tier,
                variation_used: request.region,
                generated_at: now,
                parameters: MetadataParameters {
                    book_category: request.category,
                    region: request.region,
                    politeness_level,
                },
            },
            created_at: request.options.created_at,
        })
    }

    pub fn generate_reviewer_profile(
        rng: &mut GenRng,
        region: Region,
        options: &ReviewOptions,
    ) -> GenResult<ReviewerProfile> {
        let name = NameGenerator::generate(rng, options.reviewer_gender)?;
        let age = match options.reviewer_age {
            Some(age) => age.clamp(REVIEWER_MIN_AGE, REVIEWER_MAX_AGE),
            None => rng.range_inclusive(REVIEWER_MIN_AGE as u64, REVIEWER_MAX_AGE as u64) as u8,
        };
        let occupation = rng.pick(&review_corpus::OCCUPATIONS)?.to_string();
        let reading_habits = vec![
            rng.pick(&review_corpus::READING_HABITS)?.to_string(),
            rng.pick(&review_corpus::READING_HABITS)?.to_string(),
        ];

        Ok(ReviewerProfile {
            name: name.full_name,
            age,
            gender: name.gender,
            occupation,
            reading_habits,
            region,
            review_count: rng.range_inclusive(1, 20) as u8,
        })
    }

    pub fn generate_book_context(rng: &mut GenRng, category: BookCategory) -> GenResult<BookContext> {
        let corpus = review_corpus::category(category);
        Ok(BookContext {
            book_title: rng.pick(corpus.titles)?.to_string(),
            book_author: rng.pick(&review_corpus::AUTHORS)?.to_string(),
            book_category: corpus.label_vn.to_string(),
            book_condition: rng.pick(&review_corpus::BOOK_CONDITIONS)?.to_string(),
            purchase_reason: rng.pick(corpus.purchase_reasons)?.to_string(),
            isbn: format!("978{}", rng.range_inclusive(1_000_000_000, 9_999_999_999)),
        })
    }

    pub fn generate_characteristics(rng: &mut GenRng) -> ReviewCharacteristics {
        ReviewCharacteristics {
            mentions_family: rng.chance(0.3),
            mentions_gifting: rng.chance(0.2),
            mentions_study: rng.chance(0.4),
            uses_courtesy_phrases: rng.chance(0.8),
            mentions_packaging: rng.chance(0.6),
            mentions_festival_season: rng.chance(0.1),
            uses_formal_language: rng.chance(0.4),
        }
    }

    /// Central reviewers and anyone over 40 are very polite. Southern
    /// reviewers under 30 are neutral 30% of the time.
    pub fn politeness_for(rng: &mut GenRng, region: Region, age: u8) -> PolitenessLevel {
        if region == Region::Central || age > 40 {
            PolitenessLevel::VeryPolite
        } else if region == Region::South && age < 30 {
            if rng.chance(0.3) {
                PolitenessLevel::Neutral
            } else {
                PolitenessLevel::Polite
            }
        } else {
            PolitenessLevel::Polite
        }
    }

    /// One draw decides whether the sub-ratings drift at all; each then
    /// drifts up or down independently and is clamped to 1..=5.
    pub fn sub_ratings(rng: &mut GenRng, overall: u8) -> SubRatings {
        let drift = if rng.chance(RATING_JITTER_CHANCE) { 1 } else { 0 };
        let mut next = || {
            let rating = if rng.chance(0.5) {
                overall as i16 + drift
            } else {
                overall as i16 - drift
            };
            rating.clamp(1, 5) as u8
        };
        SubRatings {
            delivery: next(),
            book_condition: next(),
            service: next(),
            pricing: next(),
        }
    }

    fn render_content(
        rng: &mut GenRng,
        corpus: &TierCorpus,
        region: Region,
        politeness: PolitenessLevel,
        book: &BookContext,
        traits: &ReviewCharacteristics,
    ) -> GenResult<String> {
        let source = rng.pick(corpus.contents.for_region(region))?;
        let template = Template::parse(source)?;

        let mut values = SlotValues::new();
        for slot in template.slots() {
            let value = Self::slot_value(rng, slot, corpus, politeness, book, traits)?;
            values.set_opt(slot, value.as_deref());
        }
        let body = template.render(&values)?;

        let courtesy = review_corpus::courtesy(politeness);
        if traits.uses_courtesy_phrases && politeness == PolitenessLevel::VeryPolite {
            let opening = rng.pick(courtesy.openings)?;
            return Ok(format!("{opening} {body}"));
        }
        Ok(body)
    }

    fn slot_value(
        rng: &mut GenRng,
        slot: Slot,
        corpus: &TierCorpus,
        politeness: PolitenessLevel,
        book: &BookContext,
        traits: &ReviewCharacteristics,
    ) -> GenResult<Option<String>> {
        let pool: &[&str] = match slot {
            Slot::BookCategory => return Ok(Some(book.book_category.clone())),
            Slot::PurchaseReason => return Ok(Some(book.purchase_reason.clone())),
            Slot::BookSpecificComment => corpus.book_specific_comments,
            Slot::BookQualityComment => corpus.book_quality_comments,
            Slot::SellerAppreciation => corpus.seller_appreciations,
            Slot::DeliveryComment => corpus.delivery_comments,
            Slot::Feedback => corpus.feedback,
            Slot::CourtesyClosing => review_corpus::courtesy(politeness).closings,
            Slot::FamilyContext if traits.mentions_family => &review_corpus::FAMILY_MENTIONS,
            Slot::GiftingContext if traits.mentions_gifting => &review_corpus::GIFTING_CONTEXT,
            Slot::SeasonalContext if traits.mentions_festival_season => {
                &review_corpus::FESTIVAL_SEASONS
            }
            Slot::PackagingComment if traits.mentions_packaging => {
                &review_corpus::PACKAGING_APPRECIATION
            }
            Slot::FamilyContext
            | Slot::GiftingContext
            | Slot::SeasonalContext
            | Slot::PackagingComment => return Ok(None),
        };
        Ok(Some(rng.pick(pool)?.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn ratings_stay_in_tier_range() {
        let mut rng = GenRng::from_seed(8);
        for tier in QualityTier::ALL {
            let corpus = review_corpus::tier(tier);
            for _ in 0..200 {
                let request = ReviewRequest::new("s-1", tier, BookCategory::Literature, Region::South);
                let review = ReviewGenerator::generate(&mut rng, &request, now()).unwrap();
                assert!((corpus.rating_min..=corpus.rating_max).contains(&review.overall_rating));
                for r in review.sub_ratings().all() {
                    assert!((1..=5).contains(&r));
                    assert!((r as i16 - review.overall_rating as i16).abs() <= 1);
                }
            }
        }
    }

    #[test]
    fn every_tier_region_politeness_renders_cleanly() {
        let mut rng = GenRng::from_seed(31);
        // age 25 in the South can be neutral, 35 stays polite, 55 is very polite
        for tier in QualityTier::ALL {
            for region in Region::ALL {
                for age in [25u8, 35, 55] {
                    for _ in 0..30 {
                        let request = ReviewRequest::new("s-2", tier, BookCategory::Children, region)
                            .with_options(ReviewOptions {
                                reviewer_age: Some(age),
                                ..Default::default()
                            });
                        let review = ReviewGenerator::generate(&mut rng, &request, now()).unwrap();
                        assert!(!review.review_content.contains('{'), "{}", review.review_content);
                        assert!(!review.review_content.contains('}'));
                        assert!(!review.review_content.contains("  "));
                        assert!(review.review_content.contains("sách thiếu nhi"));
                        assert!(review_corpus::tier(tier)
                            .titles
                            .for_region(region)
                            .contains(&review.review_title.as_str()));
                    }
                }
            }
        }
    }

    #[test]
    fn politeness_rules() {
        let mut rng = GenRng::from_seed(2);
        assert_eq!(
            ReviewGenerator::politeness_for(&mut rng, Region::Central, 20),
            PolitenessLevel::VeryPolite
        );
        assert_eq!(
            ReviewGenerator::politeness_for(&mut rng, Region::North, 41),
            PolitenessLevel::VeryPolite
        );
        assert_eq!(
            ReviewGenerator::politeness_for(&mut rng, Region::North, 25),
            PolitenessLevel::Polite
        );
        assert_eq!(
            ReviewGenerator::politeness_for(&mut rng, Region::South, 30),
            PolitenessLevel::Polite
        );
        let neutral = (0..1_000)
            .filter(|_| {
                ReviewGenerator::politeness_for(&mut rng, Region::South, 22) == PolitenessLevel::Neutral
            })
            .count();
        assert!((230..370).contains(&neutral), "neutral count {neutral}");
    }

    #[test]
    fn scores_fall_in_tier_bands() {
        let mut rng = GenRng::from_seed(17);
        for tier in QualityTier::ALL {
            let corpus = review_corpus::tier(tier);
            for _ in 0..100 {
                let request = ReviewRequest::new("s-3", tier, BookCategory::Health, Region::North);
                let r = ReviewGenerator::generate(&mut rng, &request, now()).unwrap();
                assert!(r.sentiment_score >= corpus.sentiment.0 && r.sentiment_score < corpus.sentiment.1);
                assert!(r.quality_score >= corpus.quality.0 && r.quality_score < corpus.quality.1);
                assert!(r.authenticity_score >= 4.0 && r.authenticity_score < 5.0);
            }
        }
    }

    #[test]
    fn book_context_matches_category() {
        let mut rng = GenRng::from_seed(4);
        for category in BookCategory::ALL {
            let corpus = review_corpus::category(category);
            let book = ReviewGenerator::generate_book_context(&mut rng, category).unwrap();
            assert_eq!(book.book_category, corpus.label_vn);
            assert!(corpus.titles.contains(&book.book_title.as_str()));
            assert!(corpus.purchase_reasons.contains(&book.purchase_reason.as_str()));
            assert_eq!(book.isbn.len(), 13);
            assert!(book.isbn.starts_with("978"));
            assert!(book.isbn.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn options_pin_reviewer_and_timestamp() {
        let mut rng = GenRng::from_seed(4);
        let created = Utc.with_ymd_and_hms(2024, 12, 24, 20, 0, 0).unwrap();
        let request = ReviewRequest::new("s-4", QualityTier::Good, BookCategory::Business, Region::North)
            .with_options(ReviewOptions {
                reviewer_age: Some(90),
                reviewer_gender: Some(Gender::Female),
                created_at: Some(created),
            });
        let r = ReviewGenerator::generate(&mut rng, &request, now()).unwrap();
        assert_eq!(r.reviewer_profile.age, REVIEWER_MAX_AGE);
        assert_eq!(r.reviewer_profile.gender, Gender::Female);
        assert_eq!(r.created_at, Some(created));
        assert_eq!(r.generation_metadata.generated_at, now());
        assert_eq!(r.politeness_level, PolitenessLevel::VeryPolite);
    }

    #[test]
    fn string_keys_resolve_leniently_except_tier() {
        let request = ReviewRequest::from_keys("s-5", "good", "cookbooks", "Hà Giang").unwrap();
        assert_eq!(request.category, BookCategory::Literature);
        assert_eq!(request.region, Region::South);
        assert!(matches!(
            ReviewRequest::from_keys("s-5", "stellar", "textbook", "Miền Bắc"),
            Err(GenError::InvalidInput(_))
        ));
    }
}
