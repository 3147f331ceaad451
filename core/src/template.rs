//! Checked placeholder templates.
//!
//! Review bodies are written with `{token}` placeholders drawn from a
//! closed set (`Slot`). Templates are parsed up front so an unknown token
//! is an error rather than literal text in the output, and rendering fails
//! when a required slot has no value. Optional slots render empty.

use crate::error::{GenError, GenResult};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    BookCategory,
    BookSpecificComment,
    BookQualityComment,
    SellerAppreciation,
    DeliveryComment,
    Feedback,
    PurchaseReason,
    CourtesyClosing,
    FamilyContext,
    GiftingContext,
    SeasonalContext,
    PackagingComment,
}

impl Slot {
    pub const ALL: [Slot; 12] = [
        Slot::BookCategory,
        Slot::BookSpecificComment,
        Slot::BookQualityComment,
        Slot::SellerAppreciation,
        Slot::DeliveryComment,
        Slot::Feedback,
        Slot::PurchaseReason,
        Slot::CourtesyClosing,
        Slot::FamilyContext,
        Slot::GiftingContext,
        Slot::SeasonalContext,
        Slot::PackagingComment,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Self::BookCategory => "book_category",
            Self::BookSpecificComment => "book_specific_comment",
            Self::BookQualityComment => "book_quality_comment",
            Self::SellerAppreciation => "seller_appreciation",
            Self::DeliveryComment => "delivery_comment",
            Self::Feedback => "feedback",
            Self::PurchaseReason => "purchase_reason",
            Self::CourtesyClosing => "courtesy_closing",
            Self::FamilyContext => "family_context",
            Self::GiftingContext => "gifting_context",
            Self::SeasonalContext => "seasonal_context",
            Self::PackagingComment => "packaging_comment",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.token() == token)
    }

    /// Optional slots are gated by review characteristics and may be blank.
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            Self::FamilyContext | Self::GiftingContext | Self::SeasonalContext | Self::PackagingComment
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot(Slot),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> GenResult<Self> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(open) = rest.find(['{', '}']) {
            if rest[open..].starts_with('}') {
                return Err(GenError::MalformedTemplate {
                    position: offset + open,
                    template: source.to_string(),
                });
            }
            let close = rest[open + 1..]
                .find(['{', '}'])
                .map(|i| open + 1 + i)
                .filter(|&i| rest[i..].starts_with('}'))
                .ok_or_else(|| GenError::MalformedTemplate {
                    position: offset + open,
                    template: source.to_string(),
                })?;

            if open > 0 {
                segments.push(Segment::Text(rest[..open].to_string()));
            }
            let token = &rest[open + 1..close];
            let slot = Slot::from_token(token).ok_or_else(|| GenError::UnknownPlaceholder {
                token: token.to_string(),
                template: source.to_string(),
            })?;
            segments.push(Segment::Slot(slot));

            offset += close + 1;
            rest = &rest[close + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }
        Ok(Self { segments })
    }

    /// Every slot the template references, in order of first use.
    pub fn slots(&self) -> Vec<Slot> {
        let mut out = Vec::new();
        for segment in &self.segments {
            if let Segment::Slot(slot) = segment {
                if !out.contains(slot) {
                    out.push(*slot);
                }
            }
        }
        out
    }

    pub fn required_slots(&self) -> Vec<Slot> {
        self.slots().into_iter().filter(|s| !s.is_optional()).collect()
    }

    /// Substitute every slot. Runs of whitespace left behind by blank
    /// optional slots are collapsed.
    pub fn render(&self, values: &SlotValues) -> GenResult<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Slot(slot) => match values.get(*slot) {
                    Some(value) => out.push_str(value),
                    None if slot.is_optional() => {}
                    None => return Err(GenError::MissingPlaceholder { token: slot.token() }),
                },
            }
        }
        Ok(out.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}

/// Values for one render call.
#[derive(Debug, Clone, Default)]
pub struct SlotValues {
    values: HashMap<Slot, String>,
}

impl SlotValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, slot: Slot, value: impl Into<String>) -> &mut Self {
        self.values.insert(slot, value.into());
        self
    }

    pub fn set_opt(&mut self, slot: Slot, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.values.insert(slot, value.to_string());
        }
        self
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.values.get(&slot).map(String::as_str)
    }
}
