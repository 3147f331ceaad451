//! The seed engine: one object owning every generator stream.
//!
//! STREAMS (one per GeneratorSlot, derived from the master seed):
//!   - Sampler    weighted_random calls made through the engine
//!   - Customer   names, addresses, phones, customers
//!   - Review     single reviews
//!   - Batch      seller review sets
//!   - Timestamp  review timestamps
//!
//! RULES:
//!   - Same seed and same call sequence produce identical output.
//!   - A call only advances its own stream, so adding reviews never shifts
//!     the customers generated from the same seed.
//!   - "Now" comes from the engine clock; pin it for reproducible timestamps.

use crate::{
    address_generator::{Address, AddressGenerator},
    batch::{BatchGenerator, QualityDistribution},
    clock::GenClock,
    config::GeneratorConfig,
    customer_generator::{
        CustomerBatchPreferences, CustomerGenerator, CustomerPreferences, CustomerRecord,
    },
    error::GenResult,
    name_generator::{NameGenerator, PersonName},
    phone_generator::{PhoneGenerator, PhoneNumber},
    review_generator::{ReviewGenerator, ReviewOptions, ReviewRecord, ReviewRequest},
    rng::{GenRng, GeneratorSlot, RngBank},
    types::{City, Gender},
    weighted::{self, WeightedItem},
};
use chrono::{DateTime, Utc};

pub struct SeedEngine {
    pub clock:     GenClock,
    rng_bank:      RngBank,
    sampler:       GenRng,
    customer:      GenRng,
    review:        GenRng,
    batch:         GenRng,
    timestamp:     GenRng,
}

impl SeedEngine {
    pub fn new(seed: u64, clock: GenClock) -> Self {
        let rng_bank = RngBank::new(seed);
        Self {
            clock,
            sampler:   rng_bank.for_slot(GeneratorSlot::Sampler),
            customer:  rng_bank.for_slot(GeneratorSlot::Customer),
            review:    rng_bank.for_slot(GeneratorSlot::Review),
            batch:     rng_bank.for_slot(GeneratorSlot::Batch),
            timestamp: rng_bank.for_slot(GeneratorSlot::Timestamp),
            rng_bank,
        }
    }

    /// Engine reading the system clock for "now".
    pub fn build(seed: u64) -> Self {
        Self::new(seed, GenClock::system())
    }

    /// Engine with "now" pinned, for reproducible timestamps.
    pub fn build_at(seed: u64, now: DateTime<Utc>) -> Self {
        Self::new(seed, GenClock::fixed(now))
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        log::debug!(
            "seed engine from config: seed={} seller={}",
            config.seed,
            config.seller_id
        );
        Self::build(config.seed)
    }

    pub fn seed(&self) -> u64 {
        self.rng_bank.master_seed()
    }

    pub fn weighted_random<'a, T>(&mut self, items: &'a [WeightedItem<T>]) -> GenResult<&'a T> {
        weighted::weighted_random(items, &mut self.sampler)
    }

    pub fn generate_vietnamese_name(&mut self, gender: Option<Gender>) -> GenResult<PersonName> {
        NameGenerator::generate(&mut self.customer, gender)
    }

    pub fn generate_vietnamese_address(&mut self) -> GenResult<Address> {
        AddressGenerator::generate(&mut self.customer)
    }

    pub fn generate_vietnamese_phone(&mut self, city: Option<City>) -> GenResult<PhoneNumber> {
        PhoneGenerator::generate(&mut self.customer, city)
    }

    pub fn generate_vietnamese_customer(
        &mut self,
        preferences: &CustomerPreferences,
    ) -> GenResult<CustomerRecord> {
        let now = self.clock.now();
        CustomerGenerator::generate(&mut self.customer, preferences, now)
    }

    pub fn generate_vietnamese_customers(
        &mut self,
        count: usize,
        preferences: &CustomerBatchPreferences,
    ) -> GenResult<Vec<CustomerRecord>> {
        let now = self.clock.now();
        let customers = CustomerGenerator::generate_batch(&mut self.customer, count, preferences, now)?;
        log::info!("generated {} customers", customers.len());
        Ok(customers)
    }

    pub fn generate_vietnamese_review(&mut self, request: &ReviewRequest) -> GenResult<ReviewRecord> {
        let now = self.clock.now();
        ReviewGenerator::generate(&mut self.review, request, now)
    }

    /// Seller review set; `None` uses the default 40/35/20/5 split.
    pub fn generate_seller_reviews(
        &mut self,
        seller_id: &str,
        count: usize,
        distribution: Option<&QualityDistribution>,
        options: &ReviewOptions,
    ) -> GenResult<Vec<ReviewRecord>> {
        let now = self.clock.now();
        let default = QualityDistribution::default();
        BatchGenerator::generate_seller_reviews(
            &mut self.batch,
            seller_id,
            count,
            distribution.unwrap_or(&default),
            options,
            now,
        )
    }

    pub fn generate_review_timestamps(
        &mut self,
        count: usize,
        period_months: u32,
    ) -> GenResult<Vec<DateTime<Utc>>> {
        let now = self.clock.now();
        BatchGenerator::generate_review_timestamps(&mut self.timestamp, count, period_months, now)
    }

    /// Give each review a `created_at` inside the window, oldest first.
    pub fn backdate_reviews(
        &mut self,
        reviews: &mut [ReviewRecord],
        period_months: u32,
    ) -> GenResult<()> {
        let now = self.clock.now();
        BatchGenerator::backdate_reviews(&mut self.timestamp, reviews, period_months, now)
    }
}
