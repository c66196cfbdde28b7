//! Advice Generator
//!
//! Combines the allocation table with the catalog to produce a complete
//! advice document. Pure and deterministic: same request, same document.
//! Malformed input fields are coerced to safe defaults, never rejected -
//! errors belong to the boundary, not here.

use std::collections::BTreeMap;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

use crate::allocation::AllocationMix;
use crate::catalog::{self, FundEntry};
use crate::model::{
    AdviceDocument, AdviceRequest, AssetAdvice, AssetClass, AssetDetails, FundCatalog, FundInfo,
    Language, NormalizedInputs, RegulatoryInfo, RiskTier, StockUniverse, Venues, currency_symbol,
};

/// Generate an advice document from a raw request.
pub fn generate(request: &AdviceRequest) -> AdviceDocument {
    let budget = normalize_budget(&request.budget);
    let tier = RiskTier::parse(&request.risk);
    let language = Language::parse(&request.language);
    let currency = normalize_currency(&request.currency);
    let symbol = currency_symbol(&currency);

    tracing::debug!(risk = tier.as_str(), budget = %budget, %currency, "generating advice");

    let mix = AllocationMix::for_tier(tier);
    let mut allocations = BTreeMap::new();
    for class in AssetClass::ALL {
        allocations.insert(class, rounded_amount(budget, mix.fraction(class)));
    }

    let mut recommendations = BTreeMap::new();
    for class in AssetClass::ALL {
        recommendations.insert(class, advice_for(class, allocations[&class], language));
    }

    let regulatory = &catalog::REGULATORY;

    AdviceDocument {
        inputs: NormalizedInputs {
            goals: request.goals.clone(),
            monthly_budget: budget,
            risk: tier,
            language,
        },
        allocations,
        recommendations,
        expected_returns: catalog::expected_returns(tier).to_string(),
        currency,
        currency_symbol: symbol.to_string(),
        diversification_tips: catalog::DIVERSIFICATION_TIPS
            .iter()
            .map(|tip| tip.get(language).to_string())
            .collect(),
        regulatory_info: RegulatoryInfo {
            sebi: regulatory.sebi.get(language).to_string(),
            kyc: regulatory.kyc.get(language).to_string(),
            tax: regulatory.tax.get(language).to_string(),
            disclaimer: regulatory.disclaimer.get(language).to_string(),
        },
    }
}

/// Coerce the client-supplied budget to a non-negative amount.
///
/// Accepts a JSON number or a numeric string; anything else becomes zero,
/// and negative values clamp to zero.
fn normalize_budget(value: &Value) -> Decimal {
    let parsed = match value {
        Value::Number(n) => n
            .to_string()
            .parse::<Decimal>()
            .ok()
            .or_else(|| n.as_f64().and_then(Decimal::from_f64)),
        Value::String(s) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    };
    parsed.map_or(Decimal::ZERO, |budget| budget.max(Decimal::ZERO))
}

/// Uppercase the currency code; blank means USD.
fn normalize_currency(code: &str) -> String {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        "USD".to_string()
    } else {
        trimmed.to_uppercase()
    }
}

/// Round half-up to whole currency units.
fn rounded_amount(budget: Decimal, fraction: Decimal) -> u64 {
    (budget * fraction)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0)
}

fn advice_for(class: AssetClass, amount: u64, language: Language) -> AssetAdvice {
    let content = catalog::for_class(class);
    let venues = to_owned(content.venues);

    AssetAdvice {
        amount,
        platforms: to_owned(content.platforms),
        venues: match class {
            AssetClass::RealEstate => Venues::Locations(venues),
            _ => Venues::Markets(venues),
        },
        note: content.note.get(language).to_string(),
        fees: content.fees.get(language).to_string(),
        horizon: content.horizon.get(language).to_string(),
        tip: content.tip.get(language).to_string(),
        detailed_info: details_for(class, language),
    }
}

fn details_for(class: AssetClass, language: Language) -> AssetDetails {
    let content = catalog::for_class(class);
    let step_by_step = content.step_by_step.get(language).to_string();
    let risk_level = content.risk_level.get(language).to_string();
    let min_investment = content.min_investment.get(language).to_string();

    match class {
        AssetClass::Stocks => AssetDetails::Stocks {
            top_stocks: StockUniverse {
                large_cap: to_owned(&catalog::LARGE_CAP_STOCKS),
                mid_cap: to_owned(&catalog::MID_CAP_STOCKS),
                small_cap: to_owned(&catalog::SMALL_CAP_STOCKS),
            },
            step_by_step,
            risk_level,
            min_investment,
        },
        AssetClass::MutualFunds => AssetDetails::MutualFunds {
            recommended_funds: FundCatalog {
                large_cap: funds(&catalog::LARGE_CAP_FUNDS),
                elss: funds(&catalog::ELSS_FUNDS),
                balanced: funds(&catalog::BALANCED_FUNDS),
            },
            step_by_step,
            risk_level,
            min_investment,
            tax_benefits: catalog::MF_TAX_BENEFITS.get(language).to_string(),
        },
        AssetClass::Etfs => AssetDetails::Etfs {
            recommended_etfs: funds(&catalog::INDEX_ETFS),
            step_by_step,
            risk_level,
            min_investment,
            advantages: catalog::ETF_ADVANTAGES.get(language).to_string(),
        },
        AssetClass::Crypto => AssetDetails::Crypto {
            step_by_step,
            risk_level,
            min_investment,
            tax_implications: catalog::CRYPTO_TAX_IMPLICATIONS.get(language).to_string(),
        },
        AssetClass::RealEstate => AssetDetails::RealEstate {
            step_by_step,
            risk_level,
            min_investment,
            additional_costs: catalog::REAL_ESTATE_ADDITIONAL_COSTS.get(language).to_string(),
        },
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn funds(entries: &[FundEntry]) -> Vec<FundInfo> {
    entries
        .iter()
        .map(|entry| FundInfo {
            name: entry.name.to_string(),
            code: entry.code.to_string(),
            expense: entry.expense.to_string(),
            returns: entry.returns.to_string(),
            lockin: entry.lockin.map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn request(budget: Value, risk: &str, currency: &str, language: &str) -> AdviceRequest {
        AdviceRequest {
            goals: "retirement".into(),
            budget,
            risk: risk.into(),
            currency: currency.into(),
            language: language.into(),
        }
    }

    #[test]
    fn test_high_tier_inr_hinglish() {
        let doc = generate(&request(json!(10000), "high", "INR", "hinglish"));
        assert_eq!(doc.allocations[&AssetClass::Stocks], 4500);
        assert_eq!(doc.allocations[&AssetClass::Crypto], 1500);
        assert_eq!(doc.currency, "INR");
        assert_eq!(doc.currency_symbol, "₹");
        assert_eq!(
            doc.expected_returns,
            "12-15%+/yr (equity-heavy, volatile)"
        );
    }

    #[test]
    fn test_amounts_bounded_by_budget() {
        for budget in [0u64, 1, 7, 999, 10_000, 123_456] {
            for risk in ["low", "medium", "high"] {
                let doc = generate(&request(json!(budget), risk, "USD", "en"));
                for (class, amount) in &doc.allocations {
                    assert!(*amount <= budget, "{risk} {class:?} {amount} > {budget}");
                }
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let req = request(json!(2500), "low", "EUR", "hi");
        assert_eq!(generate(&req), generate(&req));
    }

    #[test]
    fn test_unknown_risk_falls_back_to_medium() {
        let doc = generate(&request(json!(1000), "extreme", "USD", "en"));
        let medium = generate(&request(json!(1000), "medium", "USD", "en"));
        assert_eq!(doc.allocations, medium.allocations);
        assert_eq!(doc.inputs.risk, RiskTier::Medium);
        assert_eq!(doc.expected_returns, "10-12%/yr (balanced portfolio)");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let doc = generate(&request(json!(1000), "medium", "USD", "fr"));
        let note = &doc.recommendations[&AssetClass::Stocks].note;
        assert_eq!(
            note,
            "Market volatility; diversify across Nifty 50, mid-cap, small-cap."
        );
    }

    #[test]
    fn test_unknown_currency_gets_default_symbol() {
        let doc = generate(&request(json!(1000), "medium", "xyz", "en"));
        assert_eq!(doc.currency, "XYZ");
        assert_eq!(doc.currency_symbol, "$");
    }

    #[test]
    fn test_budget_coercion() {
        assert_eq!(normalize_budget(&json!(5000)), dec!(5000));
        assert_eq!(normalize_budget(&json!("5000")), dec!(5000));
        assert_eq!(normalize_budget(&json!("garbage")), Decimal::ZERO);
        assert_eq!(normalize_budget(&json!(null)), Decimal::ZERO);
        assert_eq!(normalize_budget(&json!(-250)), Decimal::ZERO);
    }

    #[test]
    fn test_rounding_is_half_up() {
        // 10 * 0.05 = 0.5 rounds up to 1
        let doc = generate(&request(json!(10), "medium", "USD", "en"));
        assert_eq!(doc.allocations[&AssetClass::Crypto], 1);
    }

    #[test]
    fn test_real_estate_lists_locations() {
        let doc = generate(&request(json!(1000), "medium", "USD", "en"));
        match &doc.recommendations[&AssetClass::RealEstate].venues {
            Venues::Locations(locations) => assert!(locations.contains(&"Mumbai Metro".into())),
            Venues::Markets(_) => panic!("real estate should list locations"),
        }
        match &doc.recommendations[&AssetClass::Stocks].venues {
            Venues::Markets(markets) => assert!(markets.contains(&"Nifty 50".into())),
            Venues::Locations(_) => panic!("stocks should list markets"),
        }
    }

    #[test]
    fn test_hindi_document_uses_hindi_text() {
        let doc = generate(&request(json!(1000), "medium", "INR", "hi"));
        assert!(doc.regulatory_info.kyc.contains("अनिवार्य"));
        assert_eq!(doc.diversification_tips.len(), 5);
    }
}
