//! Static review corpus: per-tier templates and phrase pools, per-category
//! book metadata, politeness phrases and reviewer traits.
//!
//! Content templates may only reference tokens known to `template::Slot`;
//! the tests at the bottom parse and render every one of them.

use crate::types::{BookCategory, PolitenessLevel, QualityTier, Region};

/// Lines keyed by region. An empty region list falls back to the South list.
#[derive(Debug, Clone, Copy)]
pub struct RegionTable {
    pub north: &'static [&'static str],
    pub central: &'static [&'static str],
    pub south: &'static [&'static str],
}

impl RegionTable {
    pub fn for_region(&self, region: Region) -> &'static [&'static str] {
        let lines = match region {
            Region::North => self.north,
            Region::Central => self.central,
            Region::South => self.south,
        };
        if lines.is_empty() {
            self.south
        } else {
            lines
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TierCorpus {
    pub tier: QualityTier,
    pub rating_min: u8,
    pub rating_max: u8,
    /// Half-open [lo, hi) band for the sentiment score.
    pub sentiment: (f64, f64),
    /// Half-open [lo, hi) band for the quality score.
    pub quality: (f64, f64),
    pub titles: RegionTable,
    pub contents: RegionTable,
    pub book_specific_comments: &'static [&'static str],
    pub book_quality_comments: &'static [&'static str],
    pub seller_appreciations: &'static [&'static str],
    pub delivery_comments: &'static [&'static str],
    pub feedback: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct CategoryCorpus {
    pub category: BookCategory,
    pub label_vn: &'static str,
    pub purchase_reasons: &'static [&'static str],
    pub titles: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct CourtesyPhrases {
    pub openings: &'static [&'static str],
    pub closings: &'static [&'static str],
}

pub fn tier(tier: QualityTier) -> &'static TierCorpus {
    match tier {
        QualityTier::Excellent => &EXCELLENT,
        QualityTier::Good => &GOOD,
        QualityTier::Average => &AVERAGE,
        QualityTier::Poor => &POOR,
    }
}

pub fn category(category: BookCategory) -> &'static CategoryCorpus {
    match category {
        BookCategory::Textbook => &TEXTBOOK,
        BookCategory::Literature => &LITERATURE,
        BookCategory::Children => &CHILDREN,
        BookCategory::Business => &BUSINESS,
        BookCategory::Health => &HEALTH,
    }
}

pub fn courtesy(level: PolitenessLevel) -> &'static CourtesyPhrases {
    match level {
        PolitenessLevel::VeryPolite => &VERY_POLITE,
        PolitenessLevel::Polite => &POLITE,
        PolitenessLevel::Neutral => &NEUTRAL,
        PolitenessLevel::Direct => &DIRECT,
    }
}

// ── Quality tiers ────────────────────────────────────────────────────

static EXCELLENT: TierCorpus = TierCorpus {
    tier: QualityTier::Excellent,
    rating_min: 5,
    rating_max: 5,
    sentiment: (0.9, 1.0),
    quality: (4.5, 5.0),
    titles: RegionTable {
        north: &[
            "Sách chất lượng tuyệt vời, dịch vụ tận tâm",
            "Rất hài lòng với chất lượng sách và giao hàng",
            "Shop uy tín, sách đúng mô tả, giao nhanh",
            "Chất lượng xuất sắc, đóng gói cẩn thận",
        ],
        central: &[
            "Sách hay, shop chu đáo, rất đáng tin cậy",
            "Chất lượng tuyệt vời, phục vụ tận tình",
            "Sách đẹp, giao nhanh, shop uy tín lắm",
            "Rất hài lòng, sẽ tiếp tục ủng hộ shop",
        ],
        south: &[
            "Sách ok, ship nhanh, giá hợp lý",
            "Quality tốt, service ok, recommend",
            "Sách đẹp, đóng gói cẩn thận, ship nhanh",
            "Hài lòng với chất lượng và dịch vụ",
        ],
    },
    contents: RegionTable {
        north: &[
            "Em đã mua {book_category} tại shop và rất hài lòng. {book_specific_comment} Sách được đóng gói rất cẩn thận, giao hàng nhanh chóng. {seller_appreciation} {family_context} {gifting_context} Em sẽ tiếp tục ủng hộ shop. {courtesy_closing}",
            "Tôi đặt mua {book_category} ({purchase_reason}) và nhận được sản phẩm đúng như mong đợi. {book_quality_comment} {packaging_comment} {delivery_comment} {feedback} {courtesy_closing}",
        ],
        central: &[
            "Tôi rất hài lòng khi mua {book_category} tại shop. {book_specific_comment} Shop đóng gói rất cẩn thận và giao hàng đúng hẹn. {seller_appreciation} {family_context} Đây thực sự là một shop đáng tin cậy. {courtesy_closing}",
            "Sách {book_category} mà tôi đặt mua có chất lượng tuyệt vời. {book_quality_comment} {delivery_comment} {seasonal_context} {feedback} {courtesy_closing}",
        ],
        south: &[
            "Mình order {book_category} ở shop, nhận được hàng rất ok. {book_specific_comment} {delivery_comment} {packaging_comment} {family_context} {feedback} {courtesy_closing}",
            "Sách {book_category} quality tốt, đúng như mô tả. {book_quality_comment} {seller_appreciation} {gifting_context} {feedback} {courtesy_closing}",
        ],
    },
    book_specific_comments: &[
        "Nội dung sách rất phong phú và bổ ích.",
        "Chất lượng in ấn tuyệt vời, hình ảnh rõ nét.",
        "Sách mới 100%, không có tì vết.",
        "Đúng là phiên bản tôi cần, rất hài lòng.",
    ],
    book_quality_comments: &[
        "Giấy in đẹp, chữ rõ, bìa cứng cáp.",
        "Sách còn nguyên seal, không một vết gấp.",
        "Bản in chuẩn, hình minh họa rất đẹp.",
    ],
    seller_appreciations: &[
        "Shop tư vấn rất nhiệt tình và chuyên nghiệp.",
        "Nhân viên shop phục vụ tận tâm và chu đáo.",
        "Shop response nhanh, giải đáp mọi thắc mắc.",
        "Cảm nhận được sự tận tình của shop.",
    ],
    delivery_comments: &[
        "Giao hàng siêu nhanh, chỉ một ngày đã nhận được.",
        "Shipper thân thiện, giao đúng hẹn.",
        "Đặt buổi sáng, buổi chiều đã có sách.",
    ],
    feedback: &[
        "Rất đáng để giới thiệu cho bạn bè và người thân.",
        "Sẽ quay lại mua thêm nhiều đầu sách khác.",
        "Highly recommend shop cho mọi người.",
    ],
};

static GOOD: TierCorpus = TierCorpus {
    tier: QualityTier::Good,
    rating_min: 4,
    rating_max: 4,
    sentiment: (0.7, 0.9),
    quality: (3.5, 4.0),
    titles: RegionTable {
        north: &[
            "Sách tốt, dịch vụ ổn, hài lòng",
            "Chất lượng tốt, giao hàng đúng hẹn",
            "Shop uy tín, sách đẹp, giao nhanh",
            "Hài lòng với sản phẩm và dịch vụ",
        ],
        central: &[
            "Sách hay, shop chu đáo, tốt lắm",
            "Chất lượng tốt, phục vụ tận tình",
            "Sách đẹp, shop uy tín, hài lòng",
            "Tốt, sẽ ủng hộ shop tiếp",
        ],
        south: &[
            "Sách ok, ship ổn, good",
            "Quality tốt, service ok",
            "Sách đẹp, giao nhanh, tốt",
            "Ổn, recommend shop",
        ],
    },
    contents: RegionTable {
        north: &[
            "Em mua {book_category} tại shop, nhận được sản phẩm tốt. {book_specific_comment} {delivery_comment} {feedback} Nhìn chung em hài lòng với shop. {family_context} {courtesy_closing}",
            "Sách {book_category} có chất lượng tốt, đúng mô tả. {book_quality_comment} {packaging_comment} {seller_appreciation} {feedback} {courtesy_closing}",
        ],
        central: &[
            "Tôi đặt mua {book_category} và nhận được sản phẩm tốt. {book_specific_comment} Shop phục vụ tận tình. {delivery_comment} {seasonal_context} {feedback} {courtesy_closing}",
            "Sách {book_category} chất lượng tốt, shop tư vấn nhiệt tình. {book_quality_comment} {delivery_comment} {gifting_context} {feedback} {courtesy_closing}",
        ],
        south: &[
            "Mình order {book_category} ({purchase_reason}), nhận hàng ok. {book_specific_comment} {delivery_comment} {packaging_comment} {feedback} {courtesy_closing}",
            "Sách {book_category} quality tốt, đúng mô tả. {book_quality_comment} {seller_appreciation} {family_context} {feedback} {courtesy_closing}",
        ],
    },
    book_specific_comments: &[
        "Nội dung sách tốt, phù hợp nhu cầu.",
        "Chất lượng in ấn ổn, đọc dễ.",
        "Sách còn mới, tình trạng tốt.",
        "Đúng như mô tả, hài lòng.",
    ],
    book_quality_comments: &[
        "Giấy in khá tốt, chữ dễ đọc.",
        "Bìa sách hơi cong nhẹ nhưng không đáng kể.",
        "Chất lượng in ổn so với giá tiền.",
    ],
    seller_appreciations: &[
        "Shop tư vấn tốt, nhiệt tình.",
        "Nhân viên shop phục vụ ổn.",
        "Shop trả lời nhanh, tốt.",
        "Shop khá chu đáo.",
    ],
    delivery_comments: &[
        "Giao hàng đúng thời gian dự kiến.",
        "Ship chậm một ngày nhưng vẫn chấp nhận được.",
        "Giao hàng ổn, shipper lịch sự.",
    ],
    feedback: &[
        "Nếu đóng gói kỹ hơn một chút thì sẽ hoàn hảo.",
        "Mong shop có thêm nhiều đầu sách mới.",
        "Nhìn chung rất đáng tiền, sẽ ủng hộ tiếp.",
    ],
};

static AVERAGE: TierCorpus = TierCorpus {
    tier: QualityTier::Average,
    rating_min: 3,
    rating_max: 3,
    sentiment: (0.4, 0.6),
    quality: (2.5, 3.0),
    titles: RegionTable {
        north: &[
            "Sách ổn, có thể cải thiện thêm",
            "Tạm ổn, cần cải thiện một số điểm",
            "Bình thường, chấp nhận được",
            "Ổn, mong shop cải thiện hơn",
        ],
        central: &[
            "Tạm ổn, shop cần cải thiện",
            "Bình thường, mong shop phát triển hơn",
            "Ổn, có thể tốt hơn",
            "Tạm được, cần cải thiện",
        ],
        south: &[
            "Tạm ok, có thể improve",
            "Average, cần cải thiện",
            "Ổn, mong shop better",
            "Ok, but can be better",
        ],
    },
    contents: RegionTable {
        north: &[
            "Em mua {book_category} tại shop. {book_specific_comment} {delivery_comment} {seller_appreciation} {feedback} {courtesy_closing}",
            "Sách {book_category} nhìn chung ổn. {book_quality_comment} {delivery_comment} Hy vọng shop sẽ chú ý hơn để nâng cao chất lượng dịch vụ. {family_context} {courtesy_closing}",
        ],
        central: &[
            "Tôi đặt {book_category}, sản phẩm tạm ổn. {book_specific_comment} {seller_appreciation} {feedback} Mong shop có thể cải thiện để khách hàng hài lòng hơn. {courtesy_closing}",
            "Sách {book_category} chất lượng bình thường. {book_quality_comment} {delivery_comment} {seasonal_context} {feedback} {courtesy_closing}",
        ],
        south: &[
            "Mình order {book_category} ({purchase_reason}), tạm ok. {book_specific_comment} {delivery_comment} {feedback} {courtesy_closing}",
            "Sách {book_category} average. {book_quality_comment} {seller_appreciation} {gifting_context} Shop cần cải thiện để compete tốt hơn. {courtesy_closing}",
        ],
    },
    book_specific_comments: &[
        "Nội dung sách bình thường.",
        "Chất lượng in ấn tạm ổn.",
        "Sách có vết nhăn nhẹ nhưng chấp nhận được.",
        "Gần đúng mô tả.",
    ],
    book_quality_comments: &[
        "Giấy hơi mỏng, vài trang in chưa đều mực.",
        "Bìa có vết xước nhỏ.",
        "Chất lượng in ở mức trung bình.",
    ],
    seller_appreciations: &[
        "Shop tư vấn bình thường.",
        "Nhân viên shop phục vụ tạm ổn.",
        "Shop trả lời chậm một chút.",
        "Shop cần cải thiện thái độ.",
    ],
    delivery_comments: &[
        "Giao hàng chậm hơn dự kiến vài ngày.",
        "Phải liên hệ shop mới biết tình trạng đơn.",
        "Thời gian giao hàng chưa ổn định.",
    ],
    feedback: &[
        "Mong shop kiểm tra sách kỹ hơn trước khi gửi.",
        "Shop nên cập nhật tình trạng đơn hàng thường xuyên hơn.",
        "Hy vọng lần sau chất lượng sẽ tốt hơn.",
    ],
};

static POOR: TierCorpus = TierCorpus {
    tier: QualityTier::Poor,
    rating_min: 1,
    rating_max: 2,
    sentiment: (0.1, 0.4),
    quality: (1.5, 2.0),
    titles: RegionTable {
        north: &[
            "Không hài lòng, cần cải thiện nhiều",
            "Chưa đạt kỳ vọng, mong shop cải thiện",
            "Có vấn đề, mong shop khắc phục",
            "Chưa tốt, cần cải thiện",
        ],
        central: &[
            "Chưa hài lòng, mong shop cải thiện",
            "Có vấn đề, cần khắc phục",
            "Chưa đạt kỳ vọng của khách",
            "Cần cải thiện nhiều hơn",
        ],
        south: &[
            "Không ok, cần improve",
            "Có problem, cần fix",
            "Not good, cần cải thiện",
            "Poor quality, cần làm better",
        ],
    },
    contents: RegionTable {
        north: &[
            "Em đặt mua {book_category} nhưng chưa hài lòng. {book_specific_comment} {delivery_comment} {feedback} Em hy vọng shop sẽ cải thiện. {courtesy_closing}",
            "Sách {book_category} không như mong đợi. {book_quality_comment} {seller_appreciation} Mong shop xem xét và cải thiện chất lượng dịch vụ. {courtesy_closing}",
        ],
        central: &[
            "Tôi không hài lòng với {book_category} đã mua. {book_specific_comment} {delivery_comment} {feedback} {family_context} {courtesy_closing}",
            "Sách {book_category} chưa đạt kỳ vọng. {book_quality_comment} {seller_appreciation} Hy vọng shop sẽ chú ý và cải thiện trong tương lai. {courtesy_closing}",
        ],
        south: &[
            "Mình order {book_category} ({purchase_reason}) nhưng không ok. {book_specific_comment} {delivery_comment} {feedback} {courtesy_closing}",
            "Sách {book_category} không good. {book_quality_comment} {seller_appreciation} {seasonal_context} Shop cần fix these issues để competitive hơn. {courtesy_closing}",
        ],
    },
    book_specific_comments: &[
        "Nội dung không như kỳ vọng.",
        "Chất lượng in ấn kém, mờ.",
        "Sách có vết bẩn, hơi cũ.",
        "Không đúng hoàn toàn như mô tả.",
    ],
    book_quality_comments: &[
        "Nhiều trang bị mờ chữ, khó đọc.",
        "Bìa sách bị rách góc khi nhận.",
        "Sách bị ố vàng, có mùi ẩm.",
    ],
    seller_appreciations: &[
        "Shop tư vấn chưa tốt.",
        "Nhân viên shop chưa nhiệt tình.",
        "Shop response chậm.",
        "Shop cần cải thiện cách phục vụ.",
    ],
    delivery_comments: &[
        "Giao hàng trễ gần một tuần so với hẹn.",
        "Đơn hàng bị giao nhầm địa chỉ một lần.",
        "Không có thông báo gì khi đơn bị chậm.",
    ],
    feedback: &[
        "Shop cần kiểm tra lại khâu đóng gói và vận chuyển.",
        "Mong shop xem xét đổi trả cho khách.",
        "Shop cần cải thiện nhiều để giữ chân khách hàng.",
    ],
};

// ── Book categories ──────────────────────────────────────────────────

static TEXTBOOK: CategoryCorpus = CategoryCorpus {
    category: BookCategory::Textbook,
    label_vn: "sách giáo khoa",
    purchase_reasons: &["học tập", "ôn thi", "làm bài tập", "chuẩn bị thi"],
    titles: &[
        "Toán học lớp 12", "Vật lý đại cương", "Hóa học hữu cơ", "Tiếng Anh TOEIC",
        "Ngữ văn lớp 11", "Lịch sử Việt Nam",
    ],
};

static LITERATURE: CategoryCorpus = CategoryCorpus {
    category: BookCategory::Literature,
    label_vn: "văn học",
    purchase_reasons: &["yêu thích", "sưu tập", "đọc giải trí", "nghiên cứu"],
    titles: &[
        "Số đỏ", "Chí Phèo", "Dế Mèn phiêu lưu ký", "Tôi thấy hoa vàng trên cỏ xanh",
        "Nhà giả kim", "Tắt đèn", "Truyện Kiều",
    ],
};

static CHILDREN: CategoryCorpus = CategoryCorpus {
    category: BookCategory::Children,
    label_vn: "sách thiếu nhi",
    purchase_reasons: &["mua cho con", "tặng cháu", "giáo dục", "phát triển trí tuệ"],
    titles: &[
        "Doraemon", "Conan", "Thần đồng đất Việt", "Truyện cổ tích Việt Nam",
        "Những câu chuyện về động vật", "Sách tô màu",
    ],
};

static BUSINESS: CategoryCorpus = CategoryCorpus {
    category: BookCategory::Business,
    label_vn: "kinh doanh",
    purchase_reasons: &["học hỏi", "công việc", "khởi nghiệp", "nâng cao kiến thức"],
    titles: &[
        "Đắc nhân tâm", "Think and Grow Rich", "7 thói quen hiệu quả",
        "Khởi nghiệp thông minh", "Quản trị marketing", "Đầu tư chứng khoán",
    ],
};

static HEALTH: CategoryCorpus = CategoryCorpus {
    category: BookCategory::Health,
    label_vn: "sức khỏe",
    purchase_reasons: &["quan tâm sức khỏe", "chăm sóc gia đình", "phòng bệnh"],
    titles: &[
        "Cẩm nang sức khỏe gia đình", "Dinh dưỡng hàng ngày", "Yoga cơ bản",
        "Chăm sóc sức khỏe tự nhiên", "Phòng chống bệnh tật",
    ],
};

pub static AUTHORS: [&str; 9] = [
    "Nguyễn Nhật Ánh", "Tô Hoài", "Nguyễn Du", "Nam Cao", "Vũ Trọng Phụng",
    "Paulo Coelho", "Napoleon Hill", "Dale Carnegie", "Stephen Covey",
];

pub static BOOK_CONDITIONS: [&str; 4] = ["new", "like_new", "good", "fair"];

// ── Politeness ───────────────────────────────────────────────────────

static VERY_POLITE: CourtesyPhrases = CourtesyPhrases {
    openings: &["Kính chào anh/chị,", "Xin chào anh/chị,", "Chào anh/chị ạ,", "Em xin chào anh/chị,"],
    closings: &[
        "Em xin chân thành cảm ơn.",
        "Cảm ơn anh/chị nhiều lắm ạ.",
        "Em sẽ tiếp tục ủng hộ shop.",
        "Chúc anh/chị và gia đình nhiều sức khỏe.",
    ],
};

static POLITE: CourtesyPhrases = CourtesyPhrases {
    openings: &["Chào anh/chị,", "Xin chào,", "Hello anh/chị,"],
    closings: &["Cảm ơn anh/chị.", "Sẽ ủng hộ shop tiếp.", "Recommend shop cho bạn bè."],
};

static NEUTRAL: CourtesyPhrases = CourtesyPhrases {
    openings: &["Chào bạn,", "Hi,", "Xin chào,"],
    closings: &["Cảm ơn.", "Good.", "Ok."],
};

static DIRECT: CourtesyPhrases = CourtesyPhrases {
    openings: &["Xin chào,", "Hi,"],
    closings: &["Tạm ổn.", "Ok.", "Good."],
};

// ── Cultural context (optional slots) ────────────────────────────────

pub static FAMILY_MENTIONS: [&str; 7] = [
    "Mua cho con, bé rất thích.",
    "Mua tặng bố mẹ.",
    "Cả gia đình đều thích cuốn này.",
    "Con em đọc say mê cả buổi.",
    "Bố mẹ cũng khen sách hay.",
    "Anh chị trong nhà cũng mượn đọc.",
    "Tối nào cả nhà cũng đọc cùng nhau.",
];

pub static GIFTING_CONTEXT: [&str; 7] = [
    "Sách mua để làm quà.",
    "Mua tặng sinh nhật bạn.",
    "Mua làm quà Tết cho người thân.",
    "Mua làm quà 8/3.",
    "Mua làm quà 20/10 cho mẹ.",
    "Mua làm quà tốt nghiệp cho em.",
    "Mua làm quà khai trường cho cháu.",
];

pub static FESTIVAL_SEASONS: [&str; 7] = [
    "Đặt vào mùa Tết nên giao hơi lâu, có thể hiểu được.",
    "Mua đúng dịp đầu năm học.",
    "Đặt vào dịp cuối năm.",
    "Mua vào mùa thi nên rất cần sách kịp thời.",
    "Mua để đọc trong kỳ nghỉ hè.",
    "Đặt đúng dịp Trung thu.",
    "Mua vào dịp Giáng sinh.",
];

pub static PACKAGING_APPRECIATION: [&str; 6] = [
    "Đóng gói cẩn thận.",
    "Bao bì đẹp.",
    "Gói hàng tốt.",
    "Đóng gói chắc chắn.",
    "Sách được bọc kỹ.",
    "Giao hàng an toàn, không móp méo.",
];

// ── Reviewer traits ──────────────────────────────────────────────────

pub static OCCUPATIONS: [&str; 15] = [
    "học sinh", "sinh viên", "giáo viên", "nhân viên văn phòng", "kinh doanh",
    "kế toán", "y tá", "kỹ sư", "luật sư", "bác sĩ",
    "nội trợ", "freelancer", "designer", "marketing", "bán hàng",
];

pub static READING_HABITS: [&str; 9] = [
    "đọc sách học tập", "đọc tiểu thuyết", "đọc sách kinh doanh",
    "đọc sách thiếu nhi", "đọc sách kỹ năng", "đọc truyện tranh",
    "đọc sách tham khảo", "đọc sách tôn giáo", "đọc sách nấu ăn",
];
