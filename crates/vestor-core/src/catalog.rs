//! Catalog Data
//!
//! Static per-asset-class content backing the advice generator: platforms,
//! markets, fee and horizon texts, step-by-step guides, instrument tables,
//! diversification tips, and regulatory notes. All user-facing text is
//! triplicated across the three language variants as `Localized` data;
//! nothing here branches on language.

use crate::model::{AssetClass, Localized, RiskTier};

/// Static advisory content for one asset class
pub struct AssetContent {
    pub platforms: &'static [&'static str],
    pub venues: &'static [&'static str],
    pub note: Localized,
    pub fees: Localized,
    pub horizon: Localized,
    pub tip: Localized,
    pub step_by_step: Localized,
    pub risk_level: Localized,
    pub min_investment: Localized,
}

/// Look up the content block for an asset class
pub const fn for_class(class: AssetClass) -> &'static AssetContent {
    match class {
        AssetClass::Stocks => &STOCKS,
        AssetClass::MutualFunds => &MUTUAL_FUNDS,
        AssetClass::Etfs => &ETFS,
        AssetClass::Crypto => &CRYPTO,
        AssetClass::RealEstate => &REAL_ESTATE,
    }
}

/// Fixed expected-returns text per risk tier
pub const fn expected_returns(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Low => "6-8%/yr (FD, debt funds)",
        RiskTier::Medium => "10-12%/yr (balanced portfolio)",
        RiskTier::High => "12-15%+/yr (equity-heavy, volatile)",
    }
}

static STOCKS: AssetContent = AssetContent {
    platforms: &["Zerodha", "Groww", "Upstox", "Angel One", "5paisa"],
    venues: &["Nifty 50", "Nifty Next 50", "Mid Cap Stocks", "Small Cap Stocks"],
    note: Localized::new(
        "Market volatility; diversify across Nifty 50, mid-cap, small-cap.",
        "बाज़ार अस्थिरता; निफ्टी 50, मिड-कैप, स्मॉल-कैप में विविधता रखें.",
        "Market volatility; Nifty 50, mid-cap, small-cap me diversify karo.",
    ),
    fees: Localized::new(
        "₹20 per order (Zerodha), ₹0 (Groww); STT and other charges apply.",
        "₹20 प्रति ऑर्डर (Zerodha), ₹0 (Groww); STT और अन्य शुल्क लागू.",
        "₹20 per order (Zerodha), ₹0 (Groww); STT aur other charges lagte hain.",
    ),
    horizon: Localized::new(
        "5+ years for wealth creation; SIP in quality stocks recommended.",
        "5+ साल धन निर्माण के लिए; गुणवत्ता वाले शेयरों में SIP करें.",
        "5+ saal wealth creation ke liye; quality stocks me SIP karo.",
    ),
    tip: Localized::new(
        "Start with Nifty 50 stocks; add mid-cap and small-cap gradually.",
        "निफ्टी 50 शेयरों से शुरू करें; धीरे-धीरे मिड-कैप और स्मॉल-कैप जोड़ें.",
        "Nifty 50 stocks se start karo; dheere-dheere mid-cap aur small-cap add karo.",
    ),
    step_by_step: Localized::new(
        "1. Open demat account with Zerodha/Groww 2. Complete KYC 3. Start with Nifty 50 stocks 4. Add mid-cap gradually 5. Monitor quarterly",
        "1. Zerodha/Groww के साथ डीमैट खाता खोलें 2. KYC पूरा करें 3. निफ्टी 50 शेयरों से शुरू करें 4. धीरे-धीरे मिड-कैप जोड़ें 5. तिमाही निगरानी करें",
        "1. Zerodha/Groww ke saath demat account kholo 2. KYC complete karo 3. Nifty 50 stocks se start karo 4. Dheere-dheere mid-cap add karo 5. Quarterly monitor karo",
    ),
    risk_level: Localized::new(
        "Medium to High risk",
        "मध्यम से उच्च जोखिम",
        "Medium se high risk",
    ),
    min_investment: Localized::new(
        "₹500 per stock (minimum)",
        "प्रति शेयर ₹500 (न्यूनतम)",
        "Per stock ₹500 (minimum)",
    ),
};

static MUTUAL_FUNDS: AssetContent = AssetContent {
    platforms: &["Groww", "Zerodha Coin", "Paytm Money", "HDFC Securities", "ICICI Direct"],
    venues: &[
        "HDFC Top 100 Fund",
        "SBI Bluechip Fund",
        "ICICI Prudential Value Discovery",
        "Axis Bluechip Fund",
    ],
    note: Localized::new(
        "Fund performance risk; check expense ratios and fund manager track record.",
        "फंड प्रदर्शन जोखिम; खर्च अनुपात और फंड मैनेजर ट्रैक रिकॉर्ड देखें.",
        "Fund performance risk; expense ratio aur fund manager track record check karo.",
    ),
    fees: Localized::new(
        "Expense ratios 0.5%-2.5%; ELSS funds have 3-year lock-in for tax benefits.",
        "खर्च अनुपात 0.5%-2.5%; ELSS फंड में 3 साल लॉक-इन टैक्स लाभ के लिए.",
        "Expense ratio 0.5%-2.5%; ELSS funds me 3 saal lock-in tax benefits ke liye.",
    ),
    horizon: Localized::new(
        "3-5+ years; ELSS funds have 3-year lock-in; SIP benefits.",
        "3-5+ साल; ELSS फंड में 3 साल लॉक-इन; SIP लाभ.",
        "3-5+ saal; ELSS funds me 3 saal lock-in; SIP benefits.",
    ),
    tip: Localized::new(
        "Consider ELSS funds for tax benefits; SIP in large-cap and balanced funds.",
        "टैक्स लाभ के लिए ELSS फंड पर विचार करें; लार्ज-कैप और बैलेंस्ड फंड में SIP.",
        "Tax benefits ke liye ELSS funds consider karo; large-cap aur balanced funds me SIP.",
    ),
    step_by_step: Localized::new(
        "1. Complete KYC 2. Choose fund category (Large-cap/ELSS/Balanced) 3. Start SIP 4. Monitor performance 5. Rebalance annually",
        "1. KYC पूरा करें 2. फंड श्रेणी चुनें (लार्ज-कैप/ELSS/बैलेंस्ड) 3. SIP शुरू करें 4. प्रदर्शन निगरानी करें 5. सालाना रिबैलेंस करें",
        "1. KYC complete karo 2. Fund category choose karo (Large-cap/ELSS/Balanced) 3. SIP start karo 4. Performance monitor karo 5. Annually rebalance karo",
    ),
    risk_level: Localized::new(
        "Low to Medium risk",
        "कम से मध्यम जोखिम",
        "Low se medium risk",
    ),
    min_investment: Localized::new(
        "₹500 per month (SIP)",
        "प्रति माह ₹500 (SIP)",
        "Per month ₹500 (SIP)",
    ),
};

static ETFS: AssetContent = AssetContent {
    platforms: &["Zerodha", "Groww", "Motilal Oswal", "HDFC Securities", "ICICI Direct"],
    venues: &["Nifty 50 ETF", "Sensex ETF", "Bank Nifty ETF", "Gold ETF"],
    note: Localized::new(
        "Market risk; lower fees than MFs; track Nifty/Sensex indices.",
        "बाज़ार जोखिम; म्यूचुअल फंड से कम खर्च, निफ्टी/सेंसेक्स इंडेक्स ट्रैक करते हैं.",
        "Market risk; mutual funds se kam fee, Nifty/Sensex index track karte hain.",
    ),
    fees: Localized::new(
        "Expense ratios 0.1%-0.5%; lower than mutual funds; direct investment.",
        "खर्च अनुपात 0.1%-0.5%; म्यूचुअल फंड से कम; प्रत्यक्ष निवेश.",
        "Expense ratio 0.1%-0.5%; mutual funds se kam; direct investment.",
    ),
    horizon: Localized::new(
        "3-5+ years; lower expense ratios; track Nifty/Sensex indices.",
        "3-5+ साल; कम खर्च अनुपात; निफ्टी/सेंसेक्स इंडेक्स ट्रैक करते हैं.",
        "3-5+ saal; kam expense ratio; Nifty/Sensex index track karte hain.",
    ),
    tip: Localized::new(
        "Start with Nifty 50 and Sensex ETFs; add sector-specific ETFs later.",
        "निफ्टी 50 और सेंसेक्स ETF से शुरू करें; बाद में सेक्टर-विशिष्ट ETF जोड़ें.",
        "Nifty 50 aur Sensex ETF se start karo; baad me sector-specific ETF add karo.",
    ),
    step_by_step: Localized::new(
        "1. Open demat account 2. Complete KYC 3. Start with Nifty 50 ETF 4. Add Sensex ETF 5. Consider sector ETFs",
        "1. डीमैट खाता खोलें 2. KYC पूरा करें 3. निफ्टी 50 ETF से शुरू करें 4. सेंसेक्स ETF जोड़ें 5. सेक्टर ETF पर विचार करें",
        "1. Demat account kholo 2. KYC complete karo 3. Nifty 50 ETF se start karo 4. Sensex ETF add karo 5. Sector ETF consider karo",
    ),
    risk_level: Localized::new("Medium risk", "मध्यम जोखिम", "Medium risk"),
    min_investment: Localized::new(
        "₹1 per unit (flexible)",
        "प्रति यूनिट ₹1 (लचीला)",
        "Per unit ₹1 (flexible)",
    ),
};

static CRYPTO: AssetContent = AssetContent {
    platforms: &["WazirX", "CoinDCX", "ZebPay", "Bitbns", "Giottus"],
    venues: &["BTC", "ETH", "BNB", "MATIC"],
    note: Localized::new(
        "High volatility; regulatory uncertainty; TDS implications; invest cautiously.",
        "उच्च अस्थिरता; विनियामक अनिश्चितता; TDS निहितार्थ; सावधानी से निवेश करें.",
        "High volatility; regulatory uncertainty; TDS implications; invest cautiously.",
    ),
    fees: Localized::new(
        "Trading fees 0.1%-0.5%; TDS 1% on profits; regulatory compliance required.",
        "ट्रेडिंग फीस 0.1%-0.5%; मुनाफे पर 1% TDS; विनियामक अनुपालन आवश्यक.",
        "Trading fee 0.1%-0.5%; 1% TDS on profits; regulatory compliance required.",
    ),
    horizon: Localized::new(
        "Highly speculative; only for long-term, <5-10% of portfolio.",
        "दीर्घकाल; पोर्टफोलियो में छोटा हिस्सा रखें (<5-10%).",
        "Long-term; portfolio ka chhota part rakho (<5-10%).",
    ),
    tip: Localized::new(
        "Use only Indian exchanges; keep small allocation; understand TDS implications.",
        "केवल भारतीय एक्सचेंज का उपयोग करें; छोटा आवंटन रखें; TDS निहितार्थ समझें.",
        "Sirf Indian exchanges use karo; chhota allocation rakho; TDS implications samjho.",
    ),
    step_by_step: Localized::new(
        "1. Complete KYC on Indian exchange 2. Start with BTC/ETH 3. Keep allocation <5% 4. Understand TDS implications 5. Use hardware wallet for large amounts",
        "1. भारतीय एक्सचेंज पर KYC पूरा करें 2. BTC/ETH से शुरू करें 3. आवंटन <5% रखें 4. TDS निहितार्थ समझें 5. बड़ी रकम के लिए हार्डवेयर वॉलेट उपयोग करें",
        "1. Indian exchange pe KYC complete karo 2. BTC/ETH se start karo 3. Allocation <5% rakho 4. TDS implications samjho 5. Badi raqam ke liye hardware wallet use karo",
    ),
    risk_level: Localized::new("Very High risk", "बहुत उच्च जोखिम", "Bahut high risk"),
    min_investment: Localized::new("₹100 (flexible)", "₹100 (लचीला)", "₹100 (flexible)"),
};

static REAL_ESTATE: AssetContent = AssetContent {
    platforms: &["RealtyMogul India", "Housing.com", "Magicbricks", "99acres", "PropTiger"],
    venues: &["Mumbai Metro", "Delhi NCR", "Bangalore", "Pune", "Hyderabad"],
    note: Localized::new(
        "Illiquidity; location-specific risks; stamp duty and registration costs.",
        "तरलता कम; स्थान-विशिष्ट जोखिम; स्टाम्प ड्यूटी और पंजीकरण लागत.",
        "Illiquidity; location-specific risks; stamp duty aur registration costs.",
    ),
    fees: Localized::new(
        "Platform fees 0.5%-2%; stamp duty, registration charges apply.",
        "प्लेटफ़ॉर्म फीस 0.5%-2%; स्टाम्प ड्यूटी, पंजीकरण शुल्क लागू.",
        "Platform fee 0.5%-2%; stamp duty, registration charges apply.",
    ),
    horizon: Localized::new(
        "Long-term 5-10 years; consider REITs for liquidity.",
        "दीर्घकाल 5-10 साल; तरलता के लिए REITs पर विचार करें.",
        "Long-term 5-10 years; liquidity ke liye REITs consider karo.",
    ),
    tip: Localized::new(
        "Consider REITs for liquidity; focus on metro cities; understand stamp duty implications.",
        "तरलता के लिए REITs पर विचार करें; मेट्रो शहरों पर फोकस; स्टाम्प ड्यूटी निहितार्थ समझें.",
        "Liquidity ke liye REITs consider karo; metro cities pe focus; stamp duty implications samjho.",
    ),
    step_by_step: Localized::new(
        "1. Research metro cities 2. Consider REITs for liquidity 3. Understand stamp duty (5-7%) 4. Check rental yields 5. Plan for long-term hold",
        "1. मेट्रो शहरों का शोध करें 2. तरलता के लिए REITs पर विचार करें 3. स्टाम्प ड्यूटी (5-7%) समझें 4. किराया उपज जांचें 5. दीर्घकालिक होल्ड की योजना बनाएं",
        "1. Metro cities ka research karo 2. Liquidity ke liye REITs consider karo 3. Stamp duty (5-7%) samjho 4. Rental yields check karo 5. Long-term hold ki plan banao",
    ),
    risk_level: Localized::new(
        "Medium to High risk",
        "मध्यम से उच्च जोखिम",
        "Medium se high risk",
    ),
    min_investment: Localized::new(
        "₹10L+ (direct), ₹5K+ (REITs)",
        "₹10L+ (प्रत्यक्ष), ₹5K+ (REITs)",
        "₹10L+ (direct), ₹5K+ (REITs)",
    ),
};

/// Class-specific extras that only one asset class carries
pub const MF_TAX_BENEFITS: Localized = Localized::new(
    "ELSS funds: ₹1.5L deduction under Section 80C",
    "ELSS फंड: सेक्शन 80C के तहत ₹1.5L कटौती",
    "ELSS funds: Section 80C ke tahat ₹1.5L deduction",
);

pub const ETF_ADVANTAGES: Localized = Localized::new(
    "Lower fees, real-time pricing, tax efficient",
    "कम शुल्क, रियल-टाइम मूल्य, कर कुशल",
    "Kam fees, real-time pricing, tax efficient",
);

pub const CRYPTO_TAX_IMPLICATIONS: Localized = Localized::new(
    "1% TDS on profits, 30% tax on gains, regulatory compliance required",
    "मुनाफे पर 1% TDS, लाभ पर 30% कर, विनियामक अनुपालन आवश्यक",
    "Munafe pe 1% TDS, labh pe 30% tax, regulatory compliance required",
);

pub const REAL_ESTATE_ADDITIONAL_COSTS: Localized = Localized::new(
    "Stamp duty 5-7%, Registration 1%, Brokerage 1-2%, Maintenance charges",
    "स्टाम्प ड्यूटी 5-7%, पंजीकरण 1%, दलाली 1-2%, रखरखाव शुल्क",
    "Stamp duty 5-7%, Registration 1%, Brokerage 1-2%, Maintenance charges",
);

/// Listed companies by market cap bucket
pub const LARGE_CAP_STOCKS: [&str; 5] = [
    "Reliance Industries",
    "TCS",
    "HDFC Bank",
    "Infosys",
    "Hindustan Unilever",
];

pub const MID_CAP_STOCKS: [&str; 5] = [
    "Tata Motors",
    "Bajaj Finance",
    "Asian Paints",
    "Maruti Suzuki",
    "Bharti Airtel",
];

pub const SMALL_CAP_STOCKS: [&str; 5] = ["IRCTC", "Zomato", "Paytm", "Nykaa", "PolicyBazaar"];

/// A fund or ETF entry in the static instrument tables
pub struct FundEntry {
    pub name: &'static str,
    pub code: &'static str,
    pub expense: &'static str,
    pub returns: &'static str,
    pub lockin: Option<&'static str>,
}

pub const LARGE_CAP_FUNDS: [FundEntry; 3] = [
    FundEntry {
        name: "HDFC Top 100 Fund",
        code: "HDFC100",
        expense: "1.2%",
        returns: "12-15%",
        lockin: None,
    },
    FundEntry {
        name: "SBI Bluechip Fund",
        code: "SBIBC",
        expense: "1.1%",
        returns: "11-14%",
        lockin: None,
    },
    FundEntry {
        name: "ICICI Prudential Bluechip Fund",
        code: "ICICIBLUE",
        expense: "1.3%",
        returns: "12-15%",
        lockin: None,
    },
];

pub const ELSS_FUNDS: [FundEntry; 3] = [
    FundEntry {
        name: "Axis Long Term Equity Fund",
        code: "AXISELSS",
        expense: "1.2%",
        returns: "13-16%",
        lockin: Some("3 years"),
    },
    FundEntry {
        name: "HDFC TaxSaver Fund",
        code: "HDFCTAX",
        expense: "1.1%",
        returns: "12-15%",
        lockin: Some("3 years"),
    },
    FundEntry {
        name: "SBI Magnum TaxGain Fund",
        code: "SBITAX",
        expense: "1.0%",
        returns: "11-14%",
        lockin: Some("3 years"),
    },
];

pub const BALANCED_FUNDS: [FundEntry; 2] = [
    FundEntry {
        name: "HDFC Balanced Advantage Fund",
        code: "HDFCBAL",
        expense: "1.4%",
        returns: "10-13%",
        lockin: None,
    },
    FundEntry {
        name: "ICICI Prudential Balanced Advantage Fund",
        code: "ICICIBAL",
        expense: "1.3%",
        returns: "10-12%",
        lockin: None,
    },
];

pub const INDEX_ETFS: [FundEntry; 4] = [
    FundEntry {
        name: "Nifty 50 ETF",
        code: "NIFTYBEES",
        expense: "0.05%",
        returns: "10-12%",
        lockin: None,
    },
    FundEntry {
        name: "Sensex ETF",
        code: "SENSEXBEE",
        expense: "0.05%",
        returns: "10-12%",
        lockin: None,
    },
    FundEntry {
        name: "Bank Nifty ETF",
        code: "BANKBEES",
        expense: "0.05%",
        returns: "12-15%",
        lockin: None,
    },
    FundEntry {
        name: "Gold ETF",
        code: "GOLDBEES",
        expense: "0.1%",
        returns: "6-8%",
        lockin: None,
    },
];

/// Portfolio-wide tips appended to every document, in order
pub const DIVERSIFICATION_TIPS: [Localized; 5] = [
    Localized::new(
        "Start SIP in mutual funds and ETFs for disciplined investing.",
        "अनुशासित निवेश के लिए म्यूचुअल फंड और ETF में SIP शुरू करें.",
        "Disciplined investing ke liye mutual funds aur ETF me SIP start karo.",
    ),
    Localized::new(
        "Maintain emergency fund (6-12 months expenses) in FD or liquid funds.",
        "FD या लिक्विड फंड में आपातकालीन फंड (6-12 महीने) रखें.",
        "FD ya liquid funds me emergency fund (6-12 months) rakho.",
    ),
    Localized::new(
        "Rebalance portfolio annually; consider tax implications.",
        "पोर्टफोलियो को सालाना रिबैलेंस करें; टैक्स निहितार्थ पर विचार करें.",
        "Portfolio ko annually rebalance karo; tax implications consider karo.",
    ),
    Localized::new(
        "Use ELSS funds for tax saving under Section 80C (₹1.5L limit).",
        "सेक्शन 80C के तहत टैक्स सेविंग के लिए ELSS फंड का उपयोग करें (₹1.5L सीमा).",
        "Section 80C ke tax saving ke liye ELSS funds use karo (₹1.5L limit).",
    ),
    Localized::new(
        "Consider PPF, EPF for long-term debt allocation.",
        "दीर्घकालिक डेट आवंटन के लिए PPF, EPF पर विचार करें.",
        "Long-term debt allocation ke liye PPF, EPF consider karo.",
    ),
];

/// Regulatory notes in all three languages
pub struct RegulatoryContent {
    pub sebi: Localized,
    pub kyc: Localized,
    pub tax: Localized,
    pub disclaimer: Localized,
}

pub const REGULATORY: RegulatoryContent = RegulatoryContent {
    sebi: Localized::new(
        "SEBI regulates all investment products in India. Always verify broker/fund registration.",
        "भारत में सभी निवेश उत्पादों को SEBI नियंत्रित करता है। हमेशा ब्रोकर/फंड पंजीकरण सत्यापित करें।",
        "India me sabhi investment products ko SEBI regulate karta hai. Hamesha broker/fund registration verify karo.",
    ),
    kyc: Localized::new(
        "KYC (Know Your Customer) is mandatory for all investments in India.",
        "भारत में सभी निवेशों के लिए KYC (Know Your Customer) अनिवार्य है।",
        "India me sabhi investments ke liye KYC (Know Your Customer) mandatory hai.",
    ),
    tax: Localized::new(
        "LTCG tax: 10% on gains >₹1L (equity), 20% with indexation (debt). STCG: 15% (equity).",
        "LTCG टैक्स: ₹1L से अधिक लाभ पर 10% (इक्विटी), 20% इंडेक्सेशन के साथ (डेट)। STCG: 15% (इक्विटी)।",
        "LTCG tax: ₹1L se zyada gains pe 10% (equity), 20% indexation ke saath (debt). STCG: 15% (equity).",
    ),
    disclaimer: Localized::new(
        "This is general advice. Consult a financial advisor for personalized recommendations.",
        "यह सामान्य सलाह है। व्यक्तिगत सिफारिशों के लिए वित्तीय सलाहकार से सलाह लें।",
        "Ye general advice hai. Personal recommendations ke liye financial advisor se consult karo.",
    ),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Language;

    #[test]
    fn test_every_class_has_content() {
        for class in AssetClass::ALL {
            let content = for_class(class);
            assert!(!content.platforms.is_empty());
            assert!(!content.venues.is_empty());
            assert!(!content.note.get(Language::Hi).is_empty());
        }
    }

    #[test]
    fn test_elss_funds_carry_lockin() {
        assert!(ELSS_FUNDS.iter().all(|f| f.lockin == Some("3 years")));
        assert!(LARGE_CAP_FUNDS.iter().all(|f| f.lockin.is_none()));
    }

    #[test]
    fn test_expected_returns_per_tier() {
        assert_eq!(expected_returns(RiskTier::Low), "6-8%/yr (FD, debt funds)");
        assert_eq!(
            expected_returns(RiskTier::High),
            "12-15%+/yr (equity-heavy, volatile)"
        );
    }
}
