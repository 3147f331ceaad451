//! Vietnamese street addresses.
//!
//! A city is drawn from a weighted table; district, street prefix and
//! street come uniformly from that city's own pools. The region is always
//! derived from the city, never sampled on its own.

use crate::{
    error::GenResult,
    rng::GenRng,
    types::{City, Region},
    weighted::{weighted_random, WeightedItem},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub house_number: String,
    pub street: String,
    pub district: String,
    pub city: City,
    pub region: Region,
    pub full_address: String,
}

/// Per-city address pools.
#[derive(Debug, Clone, Copy)]
pub struct CityProfile {
    pub city: City,
    pub districts: &'static [&'static str],
    pub street_prefixes: &'static [&'static str],
    pub streets: &'static [&'static str],
}

pub struct AddressGenerator;

impl AddressGenerator {
    pub fn generate(rng: &mut GenRng) -> GenResult<Address> {
        let city = Self::pick_city(rng)?;
        Self::generate_in(rng, city)
    }

    /// Address inside a fixed city.
    pub fn generate_in(rng: &mut GenRng, city: City) -> GenResult<Address> {
        let profile = Self::profile(city);
        let district = *rng.pick(profile.districts)?;
        let prefix = *rng.pick(profile.street_prefixes)?;
        let street_name = *rng.pick(profile.streets)?;

        let mut house_number = rng.range_inclusive(1, 999).to_string();
        if rng.chance(0.3) {
            house_number = format!("{house_number}/{}", rng.range_inclusive(1, 50));
        }

        let street = format!("{prefix} {street_name}");
        let full_address = format!("{house_number} {street}, {district}, {}", city.name());

        Ok(Address {
            house_number,
            street,
            district: district.to_string(),
            city,
            region: city.region(),
            full_address,
        })
    }

    pub fn pick_city(rng: &mut GenRng) -> GenResult<City> {
        weighted_random(&CITY_WEIGHTS, rng).copied()
    }

    pub fn city_weights() -> &'static [WeightedItem<City>] {
        &CITY_WEIGHTS
    }

    pub fn profile(city: City) -> &'static CityProfile {
        CITY_PROFILES
            .iter()
            .find(|p| p.city == city)
            .unwrap_or(&CITY_PROFILES[0])
    }
}

// Shares of automation customers, largest market first.
static CITY_WEIGHTS: [WeightedItem<City>; 9] = [
    WeightedItem::new(City::HoChiMinh, 0.39),
    WeightedItem::new(City::HaNoi, 0.25),
    WeightedItem::new(City::DaNang, 0.12),
    WeightedItem::new(City::HaiPhong, 0.08),
    WeightedItem::new(City::CanTho, 0.06),
    WeightedItem::new(City::NhaTrang, 0.04),
    WeightedItem::new(City::Hue, 0.03),
    WeightedItem::new(City::VungTau, 0.02),
    WeightedItem::new(City::BienHoa, 0.01),
];

static CITY_PROFILES: [CityProfile; 9] = [
    CityProfile {
        city: City::HoChiMinh,
        districts: &[
            "Quận 1", "Quận 3", "Quận 4", "Quận 5", "Quận 6", "Quận 7", "Quận 8", "Quận 10",
            "Quận 11", "Quận 12", "Thành phố Thủ Đức", "Quận Bình Thạnh", "Quận Gò Vấp",
            "Quận Phú Nhuận", "Quận Tân Bình", "Quận Tân Phú", "Quận Bình Tân",
            "Huyện Hóc Môn", "Huyện Củ Chi",
        ],
        street_prefixes: &["Đường", "Phố", "Ngõ", "Hẻm", "Số"],
        streets: &[
            "Nguyễn Huệ", "Lê Lợi", "Đồng Khởi", "Nam Kỳ Khởi Nghĩa", "Hai Bà Trưng",
            "Lý Tự Trọng", "Nguyễn Du", "Pasteur", "Cống Quỳnh", "Trần Hưng Đạo",
            "Điện Biên Phủ", "Nguyễn Thị Minh Khai", "Võ Văn Tần", "Cao Thắng",
        ],
    },
    CityProfile {
        city: City::HaNoi,
        districts: &[
            "Quận Ba Đình", "Quận Hoàn Kiếm", "Quận Hai Bà Trưng", "Quận Đống Đa",
            "Quận Tây Hồ", "Quận Cầu Giấy", "Quận Thanh Xuân", "Quận Hoàng Mai",
            "Quận Long Biên", "Quận Nam Từ Liêm", "Quận Bắc Từ Liêm", "Quận Hà Đông",
        ],
        street_prefixes: &["Phố", "Ngõ", "Đường", "Số"],
        streets: &[
            "Hàng Gai", "Trần Hưng Đạo", "Lý Thường Kiệt", "Bà Triệu", "Nguyễn Du",
            "Trần Phú", "Kim Mã", "Giảng Võ", "Láng Hạ", "Thái Hà", "Xã Đàn",
            "Đội Cấn", "Hàng Bài", "Tràng Tiền", "Đinh Tiên Hoàng",
        ],
    },
    CityProfile {
        city: City::DaNang,
        districts: &[
            "Quận Hải Châu", "Quận Thanh Khê", "Quận Sơn Trà", "Quận Ngũ Hành Sơn",
            "Quận Liên Chiểu", "Quận Cẩm Lệ", "Huyện Hòa Vang",
        ],
        street_prefixes: &["Đường", "Phố", "Ngõ"],
        streets: &[
            "Lê Duẩn", "Trần Phú", "Nguyễn Văn Linh", "Điện Biên Phủ", "Hoàng Diệu",
            "Bạch Đằng", "Hùng Vương", "Lê Lợi", "Nguyễn Thị Minh Khai",
        ],
    },
    CityProfile {
        city: City::HaiPhong,
        districts: &[
            "Quận Hồng Bàng", "Quận Ngô Quyền", "Quận Lê Chân", "Quận Hải An",
            "Quận Kiến An", "Quận Đồ Sơn", "Quận Dương Kinh",
        ],
        street_prefixes: &["Đường", "Phố"],
        streets: &["Lạch Tray", "Điện Biên Phủ", "Tô Hiệu", "Lê Hồng Phong", "Hoàng Văn Thụ"],
    },
    CityProfile {
        city: City::CanTho,
        districts: &[
            "Quận Ninh Kiều", "Quận Bình Thủy", "Quận Cái Răng", "Quận Ô Môn", "Quận Thốt Nốt",
        ],
        street_prefixes: &["Đường", "Phố"],
        streets: &["3 Tháng 2", "30 Tháng 4", "Nguyễn Văn Cừ", "Mậu Thân", "Trần Hưng Đạo"],
    },
    CityProfile {
        city: City::NhaTrang,
        districts: &["TP Nha Trang"],
        street_prefixes: &["Đường", "Phố"],
        streets: &["Trần Phú", "Nguyễn Thị Minh Khai", "Lê Thánh Tôn", "Hoàng Hoa Thám"],
    },
    CityProfile {
        city: City::Hue,
        districts: &["TP Huế"],
        street_prefixes: &["Đường", "Phố"],
        streets: &["Lê Lợi", "Nguyễn Huệ", "Trần Hưng Đạo", "Đinh Tiên Hoàng"],
    },
    CityProfile {
        city: City::VungTau,
        districts: &["TP Vũng Tàu"],
        street_prefixes: &["Đường"],
        streets: &["Hoàng Hoa Thám", "Lê Lợi", "Trương Công Định", "Nguyễn Du"],
    },
    CityProfile {
        city: City::BienHoa,
        districts: &["Phường Tân Hiệp", "Phường Trảng Dài", "Phường Long Bình", "Phường Quyết Thắng"],
        street_prefixes: &["Đường"],
        streets: &["Phạm Văn Thuận", "Đồng Khởi", "Võ Thị Sáu", "Nguyễn Ái Quốc"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_city_has_a_profile() {
        for city in City::ALL {
            let profile = AddressGenerator::profile(city);
            assert_eq!(profile.city, city);
            assert!(!profile.districts.is_empty());
            assert!(!profile.street_prefixes.is_empty());
            assert!(!profile.streets.is_empty());
        }
        assert_eq!(AddressGenerator::city_weights().len(), 9);
    }

    #[test]
    fn region_matches_city_table() {
        let mut rng = GenRng::from_seed(31);
        for _ in 0..500 {
            let address = AddressGenerator::generate(&mut rng).unwrap();
            assert_eq!(address.region, address.city.region());
            if address.city == City::HaNoi {
                assert_eq!(address.region.label(), "Miền Bắc");
            }
        }
    }

    #[test]
    fn house_number_shape() {
        let mut rng = GenRng::from_seed(8);
        let mut with_suffix = 0;
        for _ in 0..1_000 {
            let address = AddressGenerator::generate(&mut rng).unwrap();
            let mut parts = address.house_number.split('/');
            let main: u64 = parts.next().unwrap().parse().unwrap();
            assert!((1..=999).contains(&main));
            if let Some(sub) = parts.next() {
                let sub: u64 = sub.parse().unwrap();
                assert!((1..=50).contains(&sub));
                with_suffix += 1;
            }
            assert!(parts.next().is_none());
        }
        assert!((200..400).contains(&with_suffix), "suffix count {with_suffix}");
    }

    #[test]
    fn pinned_city_stays_in_its_pools() {
        let mut rng = GenRng::from_seed(4);
        let profile = AddressGenerator::profile(City::DaNang);
        for _ in 0..100 {
            let address = AddressGenerator::generate_in(&mut rng, City::DaNang).unwrap();
            assert_eq!(address.city, City::DaNang);
            assert!(profile.districts.contains(&address.district.as_str()));
            assert!(address.full_address.ends_with("Đà Nẵng"));
        }
    }
}
