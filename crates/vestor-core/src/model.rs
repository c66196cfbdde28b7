//! Domain Models
//!
//! Core data types for advice generation. Uses `rust_decimal` for all
//! monetary values - never use f64 for money!

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-selected risk appetite bucket driving the allocation mix
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }

    /// Parse a user-supplied risk string, case-insensitive.
    ///
    /// Unknown values fall back to `Medium` - a silent default, not a
    /// validation failure.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => RiskTier::Low,
            "high" => RiskTier::High,
            _ => RiskTier::Medium,
        }
    }
}

/// The five asset classes advice is split across. Fixed, closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetClass {
    Stocks,
    MutualFunds,
    Etfs,
    Crypto,
    RealEstate,
}

impl AssetClass {
    /// All classes in output order.
    pub const ALL: [AssetClass; 5] = [
        AssetClass::Stocks,
        AssetClass::MutualFunds,
        AssetClass::Etfs,
        AssetClass::Crypto,
        AssetClass::RealEstate,
    ];
}

/// Supported content languages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Hinglish,
}

impl Language {
    /// Parse a user-supplied language string, case-insensitive.
    ///
    /// Unknown values fall back to `En`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "hi" => Language::Hi,
            "hinglish" => Language::Hinglish,
            _ => Language::En,
        }
    }
}

/// One piece of catalog content in all three language variants.
///
/// Language selection is a data lookup so adding a language is a data
/// change, not a code change.
#[derive(Clone, Copy, Debug)]
pub struct Localized {
    pub en: &'static str,
    pub hi: &'static str,
    pub hinglish: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, hi: &'static str, hinglish: &'static str) -> Self {
        Self { en, hi, hinglish }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Hi => self.hi,
            Language::Hinglish => self.hinglish,
        }
    }
}

/// Display symbols for supported currency codes
const CURRENCY_SYMBOLS: [(&str, &str); 7] = [
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("AUD", "A$"),
    ("CAD", "C$"),
];

/// Resolve an uppercased currency code to its display symbol.
///
/// Unknown codes get the `$` default while the code itself is still echoed
/// in the advice document.
pub fn currency_symbol(code: &str) -> &'static str {
    CURRENCY_SYMBOLS
        .iter()
        .find(|(c, _)| *c == code)
        .map_or("$", |(_, symbol)| *symbol)
}

/// Raw recommendation request as it arrives on the wire.
///
/// Every field is defaulted; malformed values are coerced during
/// generation rather than rejected.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdviceRequest {
    pub goals: String,

    /// Budget as sent by the client - a number or a numeric string.
    /// Anything else coerces to zero.
    pub budget: serde_json::Value,

    pub risk: String,

    pub currency: String,

    pub language: String,
}

/// Request inputs after normalization, echoed back in the document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedInputs {
    pub goals: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_budget: Decimal,

    pub risk: RiskTier,

    pub language: Language,
}

/// A complete generated advice document.
///
/// Derived purely from the request and the static tables - immutable once
/// generated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceDocument {
    pub inputs: NormalizedInputs,

    /// Rounded amount per asset class. Rounding drift means the five
    /// amounts need not sum exactly to the budget.
    pub allocations: BTreeMap<AssetClass, u64>,

    pub recommendations: BTreeMap<AssetClass, AssetAdvice>,

    /// Fixed text per risk tier, not derived from the amounts
    pub expected_returns: String,

    /// Uppercased currency code as requested
    pub currency: String,

    pub currency_symbol: String,

    pub diversification_tips: Vec<String>,

    pub regulatory_info: RegulatoryInfo,
}

/// Advice for a single asset class
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAdvice {
    pub amount: u64,

    pub platforms: Vec<String>,

    #[serde(flatten)]
    pub venues: Venues,

    pub note: String,

    pub fees: String,

    pub horizon: String,

    pub tip: String,

    pub detailed_info: AssetDetails,
}

/// Where an asset class trades. Real estate lists locations, everything
/// else lists markets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Venues {
    #[serde(rename = "markets")]
    Markets(Vec<String>),
    #[serde(rename = "locations")]
    Locations(Vec<String>),
}

/// Class-specific nested guidance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum AssetDetails {
    Stocks {
        top_stocks: StockUniverse,
        step_by_step: String,
        risk_level: String,
        min_investment: String,
    },
    MutualFunds {
        recommended_funds: FundCatalog,
        step_by_step: String,
        risk_level: String,
        min_investment: String,
        tax_benefits: String,
    },
    Etfs {
        #[serde(rename = "recommendedETFs")]
        recommended_etfs: Vec<FundInfo>,
        step_by_step: String,
        risk_level: String,
        min_investment: String,
        advantages: String,
    },
    Crypto {
        step_by_step: String,
        risk_level: String,
        min_investment: String,
        tax_implications: String,
    },
    RealEstate {
        step_by_step: String,
        risk_level: String,
        min_investment: String,
        additional_costs: String,
    },
}

/// Listed companies grouped by market capitalization
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUniverse {
    pub large_cap: Vec<String>,
    pub mid_cap: Vec<String>,
    pub small_cap: Vec<String>,
}

/// Mutual fund picks grouped by category
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundCatalog {
    pub large_cap: Vec<FundInfo>,
    pub elss: Vec<FundInfo>,
    pub balanced: Vec<FundInfo>,
}

/// A single fund or ETF listing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FundInfo {
    pub name: String,
    pub code: String,
    pub expense: String,
    pub returns: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lockin: Option<String>,
}

/// Regulatory notes attached to every document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryInfo {
    pub sebi: String,
    pub kyc: String,
    pub tax: String,
    pub disclaimer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_tier_parse_fallback() {
        assert_eq!(RiskTier::parse("LOW"), RiskTier::Low);
        assert_eq!(RiskTier::parse("high"), RiskTier::High);
        assert_eq!(RiskTier::parse("extreme"), RiskTier::Medium);
        assert_eq!(RiskTier::parse(""), RiskTier::Medium);
    }

    #[test]
    fn test_language_parse_fallback() {
        assert_eq!(Language::parse("Hinglish"), Language::Hinglish);
        assert_eq!(Language::parse("hi"), Language::Hi);
        assert_eq!(Language::parse("klingon"), Language::En);
    }

    #[test]
    fn test_currency_symbol_lookup() {
        assert_eq!(currency_symbol("INR"), "₹");
        assert_eq!(currency_symbol("JPY"), "¥");
        assert_eq!(currency_symbol("XYZ"), "$");
    }

    #[test]
    fn test_asset_class_wire_names() {
        let json = serde_json::to_string(&AssetClass::MutualFunds).unwrap();
        assert_eq!(json, "\"mutualFunds\"");
        let json = serde_json::to_string(&AssetClass::RealEstate).unwrap();
        assert_eq!(json, "\"realEstate\"");
    }
}
