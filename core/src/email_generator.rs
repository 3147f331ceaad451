//! Email addresses built from a generated name.

use crate::{
    error::GenResult,
    name_generator::PersonName,
    rng::GenRng,
    weighted::{weighted_random, WeightedItem},
};

pub struct EmailGenerator;

impl EmailGenerator {
    pub fn generate(rng: &mut GenRng, name: &PersonName) -> GenResult<String> {
        let domain = weighted_random(&PROVIDERS, rng)?;
        let family = ascii_fold(&name.family_name);
        let given = ascii_fold(&name.given_name);

        let username = match rng.next_u64_below(6) {
            0 => format!("{given}.{family}"),
            1 => format!("{family}.{given}"),
            2 => format!("{given}{family}"),
            3 => format!("{given}_{family}"),
            4 => format!("{given}{}", rng.range_inclusive(1990, 2005)),
            _ => format!("{family}{given}{}", rng.range_inclusive(10, 99)),
        };

        Ok(format!("{username}@{domain}"))
    }

    pub fn providers() -> &'static [WeightedItem<&'static str>] {
        &PROVIDERS
    }
}

static PROVIDERS: [WeightedItem<&str>; 6] = [
    WeightedItem::new("gmail.com", 0.60),
    WeightedItem::new("yahoo.com", 0.15),
    WeightedItem::new("hotmail.com", 0.10),
    WeightedItem::new("outlook.com", 0.05),
    WeightedItem::new("vn.edu.vn", 0.03),
    WeightedItem::new("company.vn", 0.07),
];

/// Lower-case and strip Vietnamese diacritics, `đ` included.
/// Whitespace and anything outside a-z0-9 are dropped.
pub fn ascii_fold(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| {
            let base = fold_char(c);
            base.is_ascii_alphanumeric().then_some(base)
        })
        .collect()
}

fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'ả' | 'ã' | 'ạ' | 'ă' | 'ằ' | 'ắ' | 'ẳ' | 'ẵ' | 'ặ' | 'â' | 'ầ' | 'ấ' | 'ẩ'
        | 'ẫ' | 'ậ' => 'a',
        'è' | 'é' | 'ẻ' | 'ẽ' | 'ẹ' | 'ê' | 'ề' | 'ế' | 'ể' | 'ễ' | 'ệ' => 'e',
        'ì' | 'í' | 'ỉ' | 'ĩ' | 'ị' => 'i',
        'ò' | 'ó' | 'ỏ' | 'õ' | 'ọ' | 'ô' | 'ồ' | 'ố' | 'ổ' | 'ỗ' | 'ộ' | 'ơ' | 'ờ' | 'ớ' | 'ở'
        | 'ỡ' | 'ợ' => 'o',
        'ù' | 'ú' | 'ủ' | 'ũ' | 'ụ' | 'ư' | 'ừ' | 'ứ' | 'ử' | 'ữ' | 'ự' => 'u',
        'ỳ' | 'ý' | 'ỷ' | 'ỹ' | 'ỵ' => 'y',
        'đ' => 'd',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{name_generator::NameGenerator, types::Gender};

    #[test]
    fn folds_vietnamese_letters() {
        assert_eq!(ascii_fold("Nguyễn"), "nguyen");
        assert_eq!(ascii_fold("Đặng"), "dang");
        assert_eq!(ascii_fold("Huỳnh"), "huynh");
        assert_eq!(ascii_fold("Thúy"), "thuy");
        assert_eq!(ascii_fold("Quỳnh Như"), "quynhnhu");
    }

    #[test]
    fn emails_are_plain_ascii_with_known_domain() {
        let mut rng = GenRng::from_seed(21);
        for _ in 0..500 {
            let name = NameGenerator::generate(&mut rng, None).unwrap();
            let email = EmailGenerator::generate(&mut rng, &name).unwrap();
            assert!(email.is_ascii(), "{email}");
            let (user, domain) = email.split_once('@').unwrap();
            assert!(!user.is_empty());
            assert!(PROVIDERS.iter().any(|p| p.value == domain), "{domain}");
            assert!(user.contains(&ascii_fold(&name.given_name)) || user.contains(&ascii_fold(&name.family_name)));
        }
    }

    #[test]
    fn same_seed_same_email() {
        let mut a = GenRng::from_seed(4);
        let mut b = GenRng::from_seed(4);
        let name = NameGenerator::generate(&mut GenRng::from_seed(1), Some(Gender::Female)).unwrap();
        assert_eq!(
            EmailGenerator::generate(&mut a, &name).unwrap(),
            EmailGenerator::generate(&mut b, &name).unwrap()
        );
    }
}
