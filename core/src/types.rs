//! Shared primitive types used across every generator.

use serde::{Deserialize, Serialize};

/// Identifier of the seller a review is written for.
pub type SellerId = String;

/// Stable identifier of a generated record.
pub type RecordId = String;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}

/// The three broad regions of Vietnam.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Region {
    #[serde(rename = "Miền Bắc")]
    North,
    #[serde(rename = "Miền Trung")]
    Central,
    #[serde(rename = "Miền Nam")]
    South,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::North, Region::Central, Region::South];

    pub fn label(&self) -> &'static str {
        match self {
            Self::North => "Miền Bắc",
            Self::Central => "Miền Trung",
            Self::South => "Miền Nam",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label.trim())
    }

    /// Unknown labels resolve to the South, the largest customer base.
    pub fn from_label_or_default(label: &str) -> Self {
        Self::from_label(label).unwrap_or_else(|| {
            log::debug!("unknown region '{label}', using {}", Self::South.label());
            Self::South
        })
    }

    pub fn language_style(&self) -> LanguageStyle {
        match self {
            Self::North => LanguageStyle::Formal,
            Self::Central => LanguageStyle::Regional,
            Self::South => LanguageStyle::Casual,
        }
    }
}

/// Cities the identity generator can place a customer in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum City {
    #[serde(rename = "Thành phố Hồ Chí Minh")]
    HoChiMinh,
    #[serde(rename = "Hà Nội")]
    HaNoi,
    #[serde(rename = "Đà Nẵng")]
    DaNang,
    #[serde(rename = "Hải Phòng")]
    HaiPhong,
    #[serde(rename = "Cần Thơ")]
    CanTho,
    #[serde(rename = "Nha Trang")]
    NhaTrang,
    #[serde(rename = "Huế")]
    Hue,
    #[serde(rename = "Vũng Tàu")]
    VungTau,
    #[serde(rename = "Biên Hòa")]
    BienHoa,
}

impl City {
    pub const ALL: [City; 9] = [
        City::HoChiMinh,
        City::HaNoi,
        City::DaNang,
        City::HaiPhong,
        City::CanTho,
        City::NhaTrang,
        City::Hue,
        City::VungTau,
        City::BienHoa,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::HoChiMinh => "Thành phố Hồ Chí Minh",
            Self::HaNoi => "Hà Nội",
            Self::DaNang => "Đà Nẵng",
            Self::HaiPhong => "Hải Phòng",
            Self::CanTho => "Cần Thơ",
            Self::NhaTrang => "Nha Trang",
            Self::Hue => "Huế",
            Self::VungTau => "Vũng Tàu",
            Self::BienHoa => "Biên Hòa",
        }
    }

    /// Accepts the full name or the common short forms ("TP.HCM", "Sài Gòn").
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        match name {
            "TP.HCM" | "TP HCM" | "HCM" | "Sài Gòn" => return Some(Self::HoChiMinh),
            _ => {}
        }
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Fixed city → region table. Everything not North or Central is South.
    pub fn region(&self) -> Region {
        match self {
            Self::HaNoi | Self::HaiPhong => Region::North,
            Self::DaNang | Self::Hue => Region::Central,
            _ => Region::South,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    New,
    Repeat,
    Vip,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CustomerTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PhoneType {
    Mobile,
    Landline,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    Debt,
}

impl PaymentMethod {
    pub fn name_vn(&self) -> &'static str {
        match self {
            Self::Cash => "Tiền mặt",
            Self::BankTransfer => "Chuyển khoản ngân hàng",
            Self::Debt => "Ghi nợ",
        }
    }
}

/// Review quality bucket. Everything about a review is conditioned on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Excellent,
    Good,
    Average,
    Poor,
}

impl QualityTier {
    pub const ALL: [QualityTier; 4] = [
        QualityTier::Excellent,
        QualityTier::Good,
        QualityTier::Average,
        QualityTier::Poor,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Poor => "poor",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key.trim())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BookCategory {
    Textbook,
    Literature,
    Children,
    Business,
    Health,
}

impl BookCategory {
    pub const ALL: [BookCategory; 5] = [
        BookCategory::Textbook,
        BookCategory::Literature,
        BookCategory::Children,
        BookCategory::Business,
        BookCategory::Health,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Textbook => "textbook",
            Self::Literature => "literature",
            Self::Children => "children",
            Self::Business => "business",
            Self::Health => "health",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key.trim())
    }

    /// Unknown keys resolve to literature.
    pub fn from_key_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            log::debug!("unknown book category '{key}', using literature");
            Self::Literature
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PolitenessLevel {
    VeryPolite,
    Polite,
    Neutral,
    Direct,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LanguageStyle {
    Formal,
    Regional,
    Casual,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_region_table() {
        assert_eq!(City::HaNoi.region(), Region::North);
        assert_eq!(City::HaiPhong.region(), Region::North);
        assert_eq!(City::DaNang.region(), Region::Central);
        assert_eq!(City::Hue.region(), Region::Central);
        assert_eq!(City::HoChiMinh.region(), Region::South);
        assert_eq!(City::NhaTrang.region(), Region::South);
    }

    #[test]
    fn lenient_lookups_fall_back() {
        assert_eq!(Region::from_label_or_default("Miền Bắc"), Region::North);
        assert_eq!(Region::from_label_or_default("Atlantis"), Region::South);
        assert_eq!(BookCategory::from_key_or_default("textbook"), BookCategory::Textbook);
        assert_eq!(BookCategory::from_key_or_default("cookbook"), BookCategory::Literature);
    }

    #[test]
    fn city_short_forms() {
        assert_eq!(City::from_name("TP.HCM"), Some(City::HoChiMinh));
        assert_eq!(City::from_name("Huế"), Some(City::Hue));
        assert_eq!(City::from_name("Paris"), None);
    }

    #[test]
    fn region_serialises_as_vietnamese_label() {
        let json = serde_json::to_string(&Region::Central).unwrap();
        assert_eq!(json, "\"Miền Trung\"");
    }
}
