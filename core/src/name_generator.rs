//! Deterministic Vietnamese name generation using curated name lists.
//!
//! Names follow the Vietnamese order: family, middle, given.
//! Surnames are frequency-weighted; middle and given names are uniform
//! within the gender's pool. Same RNG seed = same names.

use crate::{
    error::GenResult,
    rng::GenRng,
    types::Gender,
    weighted::{weighted_random, WeightedItem},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub family_name: String,
    pub middle_name: String,
    pub given_name: String,
    pub full_name: String,
    pub gender: Gender,
}

/// Deterministic name generator using curated name lists
pub struct NameGenerator;

impl NameGenerator {
    /// Generate a full name. The gender is a coin flip unless pinned.
    pub fn generate(rng: &mut GenRng, gender: Option<Gender>) -> GenResult<PersonName> {
        let gender = match gender {
            Some(g) => g,
            None if rng.chance(0.5) => Gender::Male,
            None => Gender::Female,
        };
        let family_name = Self::generate_family_name(rng)?;
        let middle_name = *rng.pick(Self::middle_names(gender))?;
        let given_name = *rng.pick(Self::given_names(gender))?;

        Ok(PersonName {
            full_name: format!("{family_name} {middle_name} {given_name}"),
            family_name: family_name.to_string(),
            middle_name: middle_name.to_string(),
            given_name: given_name.to_string(),
            gender,
        })
    }

    /// Weighted surname draw (Nguyễn alone is ~40% of the population).
    pub fn generate_family_name(rng: &mut GenRng) -> GenResult<&'static str> {
        weighted_random(Self::family_names(), rng).copied()
    }

    pub fn family_names() -> &'static [WeightedItem<&'static str>] {
        &FAMILY_NAMES
    }

    pub fn given_names(gender: Gender) -> &'static [&'static str] {
        match gender {
            Gender::Male => &[
                "Minh", "Hoàng", "Nam", "Tuấn", "Dũng", "Hùng", "Thành", "Đức", "Quang", "Huy",
                "Khôi", "Tân", "Việt", "Bảo", "Long", "Phong", "Thiện", "Khánh", "Tú", "Hiếu",
                "Tài", "Toàn", "Đạt", "Sơn", "Phúc", "Hải", "Lâm", "Kiên", "Nghĩa", "Vinh",
                "Trung", "Thịnh", "An", "Đăng", "Linh", "Tâm", "Khang", "Duy", "Đông", "Nhật",
                "Thiên", "Hà", "Trí", "Phát", "Cường", "Giang", "Tuệ", "Lộc", "Gia", "Khải",
            ],
            Gender::Female => &[
                "Hương", "Linh", "Mai", "Hoa", "Lan", "Thu", "Thảo", "Ngọc", "Trang", "Huyền",
                "Phương", "Chi", "Vy", "My", "Thúy", "Anh", "Hằng", "Diệu", "Ly", "Xuân",
                "Như", "Thanh", "Yến", "Kiều", "Hạnh", "Nga", "Dung", "Tâm", "Vân", "Quỳnh",
                "Châu", "Giang", "Bích", "Hiền", "Oanh", "Tuyết", "Hà", "Nhung", "Trinh", "Hạ",
                "Minh", "Thùy", "Hoài", "Loan", "Khuyên", "Bảo", "Nhi", "Trâm", "An", "Thơ",
            ],
        }
    }

    pub fn middle_names(gender: Gender) -> &'static [&'static str] {
        match gender {
            Gender::Male => &[
                "Văn", "Quốc", "Đình", "Hữu", "Xuân", "Thế", "Công", "Minh", "Tuấn", "Thanh",
            ],
            Gender::Female => &[
                "Thị", "Thanh", "Thu", "Ngọc", "Minh", "Thúy", "Diệu", "Xuân", "Phương", "Bảo",
            ],
        }
    }
}

static FAMILY_NAMES: [WeightedItem<&str>; 15] = [
    WeightedItem::new("Nguyễn", 0.40),
    WeightedItem::new("Trần", 0.11),
    WeightedItem::new("Lê", 0.095),
    WeightedItem::new("Phạm", 0.07),
    WeightedItem::new("Hoàng", 0.055),
    WeightedItem::new("Huỳnh", 0.05),
    WeightedItem::new("Phan", 0.045),
    WeightedItem::new("Vũ", 0.04),
    WeightedItem::new("Võ", 0.035),
    WeightedItem::new("Đặng", 0.03),
    WeightedItem::new("Bùi", 0.025),
    WeightedItem::new("Đỗ", 0.02),
    WeightedItem::new("Hồ", 0.015),
    WeightedItem::new("Ngô", 0.015),
    WeightedItem::new("Dương", 0.01),
];
