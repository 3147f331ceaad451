use crate::{
    address_generator::{Address, AddressGenerator},
    batch::check_batch_size,
    email_generator::EmailGenerator,
    error::GenResult,
    name_generator::{NameGenerator, PersonName},
    phone_generator::{PhoneGenerator, PhoneNumber},
    rng::GenRng,
    types::{City, CustomerTier, CustomerType, Gender, PaymentMethod, RecordId},
    weighted::{weighted_random, WeightedItem},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const CUSTOMER_SOURCE: &str = "automation";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AgeBand {
    #[serde(rename = "16-25")]
    GenZ,
    #[serde(rename = "26-35")]
    Millennial,
    #[serde(rename = "36-45")]
    GenX,
    #[serde(rename = "46-55")]
    Boomer,
    #[serde(rename = "56-70")]
    Silent,
}

impl AgeBand {
    pub const ALL: [AgeBand; 5] = [
        AgeBand::GenZ,
        AgeBand::Millennial,
        AgeBand::GenX,
        AgeBand::Boomer,
        AgeBand::Silent,
    ];

    pub fn bounds(&self) -> (u8, u8) {
        match self {
            Self::GenZ => (16, 25),
            Self::Millennial => (26, 35),
            Self::GenX => (36, 45),
            Self::Boomer => (46, 55),
            Self::Silent => (56, 70),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::GenZ => "16-25",
            Self::Millennial => "26-35",
            Self::GenX => "36-45",
            Self::Boomer => "46-55",
            Self::Silent => "56-70",
        }
    }

    pub fn generation(&self) -> &'static str {
        match self {
            Self::GenZ => "Gen Z",
            Self::Millennial => "Millennials",
            Self::GenX => "Gen X",
            Self::Boomer => "Boomers",
            Self::Silent => "Silent Gen",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeProfile {
    pub age: u8,
    pub age_group: AgeBand,
    pub generation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPreference {
    pub method: PaymentMethod,
    pub name_vn: String,
    /// 1-5 scale; customers mostly like the method they picked.
    pub preference: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: RecordId,
    pub name: PersonName,
    pub age: AgeProfile,
    pub email: String,
    pub phone: PhoneNumber,
    pub address: Address,
    pub payment_method: PaymentPreference,
    pub customer_type: CustomerType,
    pub customer_tier: CustomerTier,
    pub generated_at: DateTime<Utc>,
    pub source: String,
}

/// Pins for a single customer. Unset fields are sampled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerPreferences {
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub city: Option<City>,
    #[serde(default)]
    pub customer_type: Option<CustomerType>,
    #[serde(default)]
    pub age_group: Option<AgeBand>,
}

/// Target distributions applied per record across a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerBatchPreferences {
    #[serde(default)]
    pub gender_ratio: Option<Vec<WeightedItem<Gender>>>,
    #[serde(default)]
    pub customer_type_ratio: Option<Vec<WeightedItem<CustomerType>>>,
    #[serde(default)]
    pub city_distribution: Option<Vec<WeightedItem<City>>>,
}

pub struct CustomerGenerator;

impl CustomerGenerator {
    pub fn generate(
        rng: &mut GenRng,
        prefs: &CustomerPreferences,
        now: DateTime<Utc>,
    ) -> GenResult<CustomerRecord> {
        let customer_id: RecordId = rng.uuid().to_string();
        let name = NameGenerator::generate(rng, prefs.gender)?;
        let age = Self::generate_age(rng, prefs.age_group)?;
        let address = match prefs.city {
            Some(city) => AddressGenerator::generate_in(rng, city)?,
            None => AddressGenerator::generate(rng)?,
        };
        let phone = PhoneGenerator::generate(rng, Some(prefs.city.unwrap_or(address.city)))?;
        let email = EmailGenerator::generate(rng, &name)?;
        let payment_method = Self::generate_payment_method(rng)?;

        let customer_type = match prefs.customer_type {
            Some(t) => t,
            None => *weighted_random(&CUSTOMER_TYPES, rng)?,
        };
        let customer_tier = Self::pick_tier(customer_type, rng);

        Ok(CustomerRecord {
            customer_id,
            name,
            age,
            email,
            phone,
            address,
            payment_method,
            customer_type,
            customer_tier,
            generated_at: now,
            source: CUSTOMER_SOURCE.into(),
        })
    }

    /// Generate `count` customers, drawing each record's pins from the
    /// batch distributions.
    pub fn generate_batch(
        rng: &mut GenRng,
        count: usize,
        batch: &CustomerBatchPreferences,
        now: DateTime<Utc>,
    ) -> GenResult<Vec<CustomerRecord>> {
        check_batch_size(count)?;
        let mut customers = Vec::with_capacity(count);
        for _ in 0..count {
            let prefs = CustomerPreferences {
                gender: draw_optional(batch.gender_ratio.as_deref(), rng)?,
                customer_type: draw_optional(batch.customer_type_ratio.as_deref(), rng)?,
                city: draw_optional(batch.city_distribution.as_deref(), rng)?,
                age_group: None,
            };
            customers.push(Self::generate(rng, &prefs, now)?);
        }
        Ok(customers)
    }

    /// Age band by weight, then a uniform age inside it.
    pub fn generate_age(rng: &mut GenRng, band: Option<AgeBand>) -> GenResult<AgeProfile> {
        let band = match band {
            Some(b) => b,
            None => *weighted_random(&AGE_BANDS, rng)?,
        };
        let (lo, hi) = band.bounds();
        let age = rng.range_inclusive(lo as u64, hi as u64) as u8;
        Ok(AgeProfile {
            age,
            age_group: band,
            generation: band.generation().into(),
        })
    }

    pub fn generate_payment_method(rng: &mut GenRng) -> GenResult<PaymentPreference> {
        let method = *weighted_random(&PAYMENT_METHODS, rng)?;
        Ok(PaymentPreference {
            method,
            name_vn: method.name_vn().into(),
            preference: rng.range_inclusive(3, 5) as u8,
        })
    }

    /// Tier follows type: vip customers never sit below gold, new ones
    /// never above silver.
    pub fn pick_tier(customer_type: CustomerType, rng: &mut GenRng) -> CustomerTier {
        match customer_type {
            CustomerType::Vip if rng.chance(0.5) => CustomerTier::Gold,
            CustomerType::Vip => CustomerTier::Platinum,
            CustomerType::Repeat if rng.chance(0.3) => CustomerTier::Gold,
            CustomerType::Repeat => CustomerTier::Silver,
            CustomerType::New if rng.chance(0.2) => CustomerTier::Silver,
            CustomerType::New => CustomerTier::Bronze,
        }
    }
}

fn draw_optional<T: Copy>(
    items: Option<&[WeightedItem<T>]>,
    rng: &mut GenRng,
) -> GenResult<Option<T>> {
    items.map(|items| weighted_random(items, rng).copied()).transpose()
}

static AGE_BANDS: [WeightedItem<AgeBand>; 5] = [
    WeightedItem::new(AgeBand::GenZ, 0.25),
    WeightedItem::new(AgeBand::Millennial, 0.35),
    WeightedItem::new(AgeBand::GenX, 0.25),
    WeightedItem::new(AgeBand::Boomer, 0.10),
    WeightedItem::new(AgeBand::Silent, 0.05),
];

static PAYMENT_METHODS: [WeightedItem<PaymentMethod>; 3] = [
    WeightedItem::new(PaymentMethod::Cash, 0.60),
    WeightedItem::new(PaymentMethod::BankTransfer, 0.35),
    WeightedItem::new(PaymentMethod::Debt, 0.05),
];

static CUSTOMER_TYPES: [WeightedItem<CustomerType>; 3] = [
    WeightedItem::new(CustomerType::New, 0.60),
    WeightedItem::new(CustomerType::Repeat, 0.30),
    WeightedItem::new(CustomerType::Vip, 0.10),
];
