//! Vietnamese phone numbers.
//!
//! A pattern is a display format such as `+84 9XX XXX XXX`: the fixed part
//! carries the country code and prefix, every `X` is one subscriber digit.

use crate::{
    error::GenResult,
    rng::GenRng,
    types::{City, PhoneType},
};
use serde::{Deserialize, Serialize};

pub const MOBILE_SHARE: f64 = 0.85;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    /// Every digit of the number, country code included.
    pub raw: String,
    /// Digits drawn into the pattern's `X` slots.
    pub subscriber: String,
    pub phone_type: PhoneType,
    pub network: Option<String>,
    pub formatted: String,
}

#[derive(Debug, Clone, Copy)]
pub struct MobilePattern {
    pub format: &'static str,
    pub networks: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct LandlinePattern {
    pub format: &'static str,
    pub city: City,
}

pub struct PhoneGenerator;

impl PhoneGenerator {
    /// Generate a number; `city` biases landline area codes when it matches one.
    pub fn generate(rng: &mut GenRng, city: Option<City>) -> GenResult<PhoneNumber> {
        if rng.chance(MOBILE_SHARE) {
            let pattern = rng.pick(&MOBILE_PATTERNS)?;
            let network = *rng.pick(pattern.networks)?;
            Ok(Self::fill(rng, pattern.format, PhoneType::Mobile, Some(network)))
        } else {
            let pattern = Self::pick_landline(rng, city)?;
            Ok(Self::fill(rng, pattern.format, PhoneType::Landline, None))
        }
    }

    /// Landline patterns for the hinted city, or all of them when none match.
    fn pick_landline(rng: &mut GenRng, city: Option<City>) -> GenResult<&'static LandlinePattern> {
        let matching: Vec<&'static LandlinePattern> = match city {
            Some(city) => LANDLINE_PATTERNS.iter().filter(|p| p.city == city).collect(),
            None => LANDLINE_PATTERNS.iter().collect(),
        };
        if matching.is_empty() {
            log::debug!("no landline area code for {city:?}, using any city");
            return rng.pick(&LANDLINE_PATTERNS);
        }
        rng.pick(&matching).copied()
    }

    fn fill(
        rng: &mut GenRng,
        format: &'static str,
        phone_type: PhoneType,
        network: Option<&'static str>,
    ) -> PhoneNumber {
        let subscriber = rng.digits(slot_count(format));
        let formatted = format_number(format, &subscriber);
        let raw = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
        PhoneNumber {
            raw,
            subscriber,
            phone_type,
            network: network.map(str::to_string),
            formatted,
        }
    }

    pub fn mobile_patterns() -> &'static [MobilePattern] {
        &MOBILE_PATTERNS
    }

    pub fn landline_patterns() -> &'static [LandlinePattern] {
        &LANDLINE_PATTERNS
    }
}

/// Number of `X` digit slots in a display format.
pub fn slot_count(format: &str) -> usize {
    format.chars().filter(|c| *c == 'X').count()
}

/// Substitute digits into the `X` slots left to right.
/// Slots beyond the supplied digits are left as `X`.
pub fn format_number(format: &str, digits: &str) -> String {
    let mut digits = digits.chars();
    format
        .chars()
        .map(|c| match c {
            'X' => digits.next().unwrap_or('X'),
            other => other,
        })
        .collect()
}

static MOBILE_PATTERNS: [MobilePattern; 5] = [
    MobilePattern { format: "+84 9XX XXX XXX", networks: &["Mobifone", "Vietnamobile"] },
    MobilePattern { format: "+84 8XX XXX XXX", networks: &["Vinaphone", "Vietnamobile"] },
    MobilePattern { format: "+84 7XX XXX XXX", networks: &["Viettel", "Mobifone"] },
    MobilePattern { format: "+84 5XX XXX XXX", networks: &["Vietnamobile"] },
    MobilePattern { format: "+84 3XX XXX XXX", networks: &["Vinaphone"] },
];

static LANDLINE_PATTERNS: [LandlinePattern; 5] = [
    LandlinePattern { format: "+84 28 XXXX XXXX", city: City::HoChiMinh },
    LandlinePattern { format: "+84 24 XXXX XXXX", city: City::HaNoi },
    LandlinePattern { format: "+84 236 XXX XXXX", city: City::DaNang },
    LandlinePattern { format: "+84 225 XXX XXXX", city: City::HaiPhong },
    LandlinePattern { format: "+84 292 XXX XXXX", city: City::CanTho },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn digits_of(s: &str) -> String {
        s.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    #[test]
    fn format_fills_slots_left_to_right() {
        assert_eq!(format_number("+84 9XX XXX XXX", "12345678"), "+84 912 345 678");
        assert_eq!(format_number("+84 236 XXX XXXX", "123"), "+84 236 123 XXXX");
        assert_eq!(slot_count("+84 28 XXXX XXXX"), 8);
    }

    #[test]
    fn subscriber_digits_match_slot_count() {
        let mut rng = GenRng::from_seed(77);
        for _ in 0..500 {
            let phone = PhoneGenerator::generate(&mut rng, None).unwrap();
            assert!(!phone.formatted.contains('X'), "unfilled slot in {}", phone.formatted);
            let prefix_digits = digits_of(&phone.formatted).len() - phone.subscriber.len();
            // +84 plus a one- to three-digit prefix
            assert!((3..=5).contains(&prefix_digits), "{}", phone.formatted);
            assert_eq!(digits_of(&phone.formatted), phone.raw);
            assert!(phone.raw.ends_with(&phone.subscriber));
        }
    }

    #[test]
    fn mobile_numbers_carry_a_listed_network() {
        let mut rng = GenRng::from_seed(5);
        let mut mobiles = 0;
        for _ in 0..1_000 {
            let phone = PhoneGenerator::generate(&mut rng, None).unwrap();
            match phone.phone_type {
                PhoneType::Mobile => {
                    mobiles += 1;
                    let network = phone.network.as_deref().unwrap();
                    let pattern = MOBILE_PATTERNS
                        .iter()
                        .find(|p| phone.formatted.starts_with(&p.format[..5]))
                        .unwrap();
                    assert!(pattern.networks.contains(&network));
                    assert_eq!(phone.subscriber.len(), 8);
                }
                PhoneType::Landline => assert!(phone.network.is_none()),
            }
        }
        assert!((800..900).contains(&mobiles), "mobile count {mobiles}");
    }

    #[test]
    fn landline_prefers_hinted_city() {
        let mut rng = GenRng::from_seed(13);
        for _ in 0..2_000 {
            let phone = PhoneGenerator::generate(&mut rng, Some(City::HaNoi)).unwrap();
            if phone.phone_type == PhoneType::Landline {
                assert!(phone.formatted.starts_with("+84 24 "), "{}", phone.formatted);
            }
        }
    }

    #[test]
    fn landline_falls_back_for_unlisted_city() {
        let mut rng = GenRng::from_seed(13);
        let mut landlines = 0;
        for _ in 0..2_000 {
            let phone = PhoneGenerator::generate(&mut rng, Some(City::Hue)).unwrap();
            if phone.phone_type == PhoneType::Landline {
                landlines += 1;
                assert!(LANDLINE_PATTERNS
                    .iter()
                    .any(|p| phone.formatted.starts_with(&p.format[..p.format.find('X').unwrap()])));
            }
        }
        assert!(landlines > 0);
    }
}
