//! Keyword Responder
//!
//! A deterministic finite classifier over substring predicates. The rules
//! are an explicit ordered list evaluated first-match-wins, so priority for
//! ambiguous multi-keyword questions is reviewable data, not an if/else
//! chain. Stateless: each call sees only the single question string.

use crate::model::{Language, Localized};

/// One canned-response rule.
///
/// Matches when every `all` substring is present and, if `any` is
/// non-empty, at least one of its substrings is present too. Questions are
/// lowercased before matching.
pub struct Rule {
    pub all: &'static [&'static str],
    pub any: &'static [&'static str],
    pub answer: Localized,
}

impl Rule {
    fn matches(&self, question: &str) -> bool {
        self.all.iter().all(|keyword| question.contains(keyword))
            && (self.any.is_empty() || self.any.iter().any(|keyword| question.contains(keyword)))
    }
}

/// Answer a free-text question in the requested language.
///
/// Falls through the rule table in order; no rule matching returns the
/// default greeting.
pub fn respond(question: &str, language: Language) -> &'static str {
    let q = question.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&q))
        .map_or(DEFAULT_ANSWER.get(language), |rule| rule.answer.get(language))
}

/// Rule table in priority order. Reordering entries changes which answer
/// wins for multi-keyword questions.
pub static RULES: [Rule; 14] = [
    Rule {
        all: &["what is"],
        any: &["stock", "share"],
        answer: Localized::new(
            "Stocks represent ownership in a company. When you buy stocks, you become a partial owner. Indian stocks are traded on NSE and BSE exchanges. Start with Nifty 50 companies for stability.",
            "शेयर किसी कंपनी में स्वामित्व का प्रतिनिधित्व करते हैं। जब आप शेयर खरीदते हैं, तो आप आंशिक मालिक बन जाते हैं। भारतीय शेयर NSE और BSE एक्सचेंज पर कारोबार होते हैं। स्थिरता के लिए निफ्टी 50 कंपनियों से शुरू करें।",
            "Stocks company me ownership represent karte hain. Jab aap stocks kharidte hain, to aap partial owner ban jaate hain. Indian stocks NSE aur BSE exchanges pe trade hote hain. Stability ke liye Nifty 50 companies se start karo.",
        ),
    },
    Rule {
        all: &[],
        any: &["mutual fund", "mf"],
        answer: Localized::new(
            "Mutual funds pool money from multiple investors to invest in stocks, bonds, or other assets. In India, you can start SIP with just ₹500/month. ELSS funds offer tax benefits under Section 80C.",
            "म्यूचुअल फंड कई निवेशकों से पैसा जमा करके शेयर, बॉन्ड या अन्य संपत्तियों में निवेश करते हैं। भारत में, आप सिर्फ ₹500/माह से SIP शुरू कर सकते हैं। ELSS फंड सेक्शन 80C के तहत टैक्स लाभ प्रदान करते हैं।",
            "Mutual funds multiple investors se paisa pool karke stocks, bonds ya other assets me invest karte hain. India me, aap sirf ₹500/month se SIP start kar sakte hain. ELSS funds Section 80C ke tahat tax benefits dete hain.",
        ),
    },
    Rule {
        all: &["etf"],
        any: &[],
        answer: Localized::new(
            "ETFs (Exchange Traded Funds) track market indices like Nifty 50 or Sensex. They have lower fees than mutual funds and trade like stocks. Popular Indian ETFs include NIFTYBEES, SENSEXBEE.",
            "ETF (एक्सचेंज ट्रेडेड फंड) निफ्टी 50 या सेंसेक्स जैसे बाजार सूचकांकों को ट्रैक करते हैं। इनकी फीस म्यूचुअल फंड से कम होती है और ये शेयरों की तरह कारोबार होते हैं। लोकप्रिय भारतीय ETF में NIFTYBEES, SENSEXBEE शामिल हैं।",
            "ETFs (Exchange Traded Funds) market indices jaise Nifty 50 ya Sensex ko track karte hain. Inki fees mutual funds se kam hoti hai aur ye stocks ki tarah trade hote hain. Popular Indian ETFs me NIFTYBEES, SENSEXBEE include hain.",
        ),
    },
    Rule {
        all: &["sip"],
        any: &[],
        answer: Localized::new(
            "SIP (Systematic Investment Plan) allows you to invest a fixed amount regularly in mutual funds. Benefits include rupee cost averaging, discipline, and compounding. Start with ₹500/month.",
            "SIP (सिस्टमैटिक इन्वेस्टमेंट प्लान) आपको म्यूचुअल फंड में नियमित रूप से एक निश्चित राशि निवेश करने की अनुमति देता है। लाभ में रुपये की लागत औसत, अनुशासन और चक्रवृद्धि शामिल हैं। ₹500/माह से शुरू करें।",
            "SIP (Systematic Investment Plan) aapko mutual funds me regularly fixed amount invest karne ki permission deta hai. Benefits me rupee cost averaging, discipline, aur compounding include hain. ₹500/month se start karo.",
        ),
    },
    Rule {
        all: &[],
        any: &["tax", "ltcg", "stcg"],
        answer: Localized::new(
            "LTCG (Long Term Capital Gains): 10% tax on equity gains >₹1L after 1 year. STCG (Short Term): 15% on equity gains within 1 year. ELSS funds offer ₹1.5L deduction under Section 80C.",
            "LTCG (दीर्घकालिक पूंजीगत लाभ): 1 साल बाद ₹1L से अधिक इक्विटी लाभ पर 10% कर। STCG (अल्पकालिक): 1 साल के भीतर इक्विटी लाभ पर 15%। ELSS फंड सेक्शन 80C के तहत ₹1.5L कटौती प्रदान करते हैं।",
            "LTCG (Long Term Capital Gains): 1 saal baad ₹1L se zyada equity gains pe 10% tax. STCG (Short Term): 1 saal ke andar equity gains pe 15%. ELSS funds Section 80C ke tahat ₹1.5L deduction dete hain.",
        ),
    },
    Rule {
        all: &[],
        any: &["zerodha", "groww", "platform"],
        answer: Localized::new(
            "Popular Indian investment platforms: Zerodha (₹20/order for stocks), Groww (free stock trading), Upstox (₹20/order). For mutual funds: Groww, Zerodha Coin, Paytm Money. For crypto: WazirX, CoinDCX.",
            "लोकप्रिय भारतीय निवेश प्लेटफॉर्म: Zerodha (शेयरों के लिए ₹20/ऑर्डर), Groww (मुफ्त शेयर ट्रेडिंग), Upstox (₹20/ऑर्डर)। म्यूचुअल फंड के लिए: Groww, Zerodha Coin, Paytm Money। क्रिप्टो के लिए: WazirX, CoinDCX।",
            "Popular Indian investment platforms: Zerodha (stocks ke liye ₹20/order), Groww (free stock trading), Upstox (₹20/order). Mutual funds ke liye: Groww, Zerodha Coin, Paytm Money. Crypto ke liye: WazirX, CoinDCX.",
        ),
    },
    Rule {
        all: &[],
        any: &["risk", "safe"],
        answer: Localized::new(
            "Investment risk levels: Low (FD, debt funds, 6-8% returns), Medium (balanced funds, large-cap stocks, 10-12% returns), High (mid-cap, small-cap, 12-15% returns). Diversify your portfolio across different asset classes.",
            "निवेश जोखिम स्तर: कम (FD, डेट फंड, 6-8% रिटर्न), मध्यम (बैलेंस्ड फंड, लार्ज-कैप शेयर, 10-12% रिटर्न), उच्च (मिड-कैप, स्मॉल-कैप, 12-15% रिटर्न)। अपने पोर्टफोलियो को विभिन्न परिसंपत्ति वर्गों में विविधता दें।",
            "Investment risk levels: Low (FD, debt funds, 6-8% returns), Medium (balanced funds, large-cap stocks, 10-12% returns), High (mid-cap, small-cap, 12-15% returns). Apne portfolio ko different asset classes me diversify karo.",
        ),
    },
    Rule {
        all: &[],
        any: &["emergency", "fund"],
        answer: Localized::new(
            "Emergency fund should be 6-12 months of your expenses. Keep it in FD or liquid funds for easy access. This should be your first priority before investing in stocks or mutual funds.",
            "आपातकालीन फंड आपके खर्चों का 6-12 महीना होना चाहिए। इसे FD या लिक्विड फंड में रखें ताकि आसानी से पहुंच सकें। यह शेयर या म्यूचुअल फंड में निवेश करने से पहले आपकी पहली प्राथमिकता होनी चाहिए।",
            "Emergency fund aapke expenses ka 6-12 months hona chahiye. Ise FD ya liquid funds me rakho taaki easily access kar sako. Ye stocks ya mutual funds me invest karne se pehle aapki pehli priority honi chahiye.",
        ),
    },
    Rule {
        all: &[],
        any: &["crypto", "bitcoin", "btc"],
        answer: Localized::new(
            "Cryptocurrency is highly volatile and risky. In India, use only registered exchanges like WazirX, CoinDCX. Keep allocation <5-10% of portfolio. TDS 1% applies on profits. Only invest what you can afford to lose.",
            "क्रिप्टोकरेंसी अत्यधिक अस्थिर और जोखिम भरी है। भारत में, केवल WazirX, CoinDCX जैसे पंजीकृत एक्सचेंज का उपयोग करें। पोर्टफोलियो का <5-10% आवंटन रखें। मुनाफे पर 1% TDS लागू होता है। केवल उतना निवेश करें जितना आप खो सकते हैं।",
            "Cryptocurrency bahut volatile aur risky hai. India me, sirf registered exchanges jaise WazirX, CoinDCX use karo. Portfolio ka <5-10% allocation rakho. Profits pe 1% TDS lagta hai. Sirf utna invest karo jitna aap lose kar sakte hain.",
        ),
    },
    Rule {
        all: &[],
        any: &["real estate", "property", "reit"],
        answer: Localized::new(
            "Real estate investment requires large capital (₹10L+). Consider REITs for liquidity. Focus on metro cities like Mumbai, Delhi, Bangalore. Factor in stamp duty (5-7%), registration charges, and maintenance costs.",
            "रियल एस्टेट निवेश के लिए बड़ी पूंजी (₹10L+) की आवश्यकता होती है। तरलता के लिए REITs पर विचार करें। मुंबई, दिल्ली, बैंगलोर जैसे मेट्रो शहरों पर ध्यान दें। स्टाम्प ड्यूटी (5-7%), पंजीकरण शुल्क और रखरखाव लागत को ध्यान में रखें।",
            "Real estate investment ke liye badi capital (₹10L+) ki zarurat hoti hai. Liquidity ke liye REITs consider karo. Mumbai, Delhi, Bangalore jaise metro cities pe focus karo. Stamp duty (5-7%), registration charges, aur maintenance costs ko factor karo.",
        ),
    },
    Rule {
        all: &[],
        any: &["how to start", "beginner"],
        answer: Localized::new(
            "Start with: 1) Build emergency fund (6-12 months expenses) 2) Complete KYC 3) Start SIP in large-cap mutual funds 4) Gradually add mid-cap and small-cap 5) Consider ELSS for tax benefits 6) Diversify across asset classes.",
            "शुरुआत करें: 1) आपातकालीन फंड बनाएं (6-12 महीने के खर्च) 2) KYC पूरा करें 3) लार्ज-कैप म्यूचुअल फंड में SIP शुरू करें 4) धीरे-धीरे मिड-कैप और स्मॉल-कैप जोड़ें 5) टैक्स लाभ के लिए ELSS पर विचार करें 6) परिसंपत्ति वर्गों में विविधता लाएं।",
            "Start karo: 1) Emergency fund banao (6-12 months expenses) 2) KYC complete karo 3) Large-cap mutual funds me SIP start karo 4) Dheere-dheere mid-cap aur small-cap add karo 5) Tax benefits ke liye ELSS consider karo 6) Asset classes me diversify karo.",
        ),
    },
    Rule {
        all: &[],
        any: &["nifty", "sensex"],
        answer: Localized::new(
            "Nifty 50 tracks top 50 companies on NSE, Sensex tracks top 30 on BSE. These are India's main market indices. You can invest in them via ETFs like NIFTYBEES or index funds. They provide broad market exposure with lower risk.",
            "निफ्टी 50 NSE पर शीर्ष 50 कंपनियों को ट्रैक करता है, सेंसेक्स BSE पर शीर्ष 30 को ट्रैक करता है। ये भारत के मुख्य बाजार सूचकांक हैं। आप NIFTYBEES जैसे ETF या इंडेक्स फंड के माध्यम से इनमें निवेश कर सकते हैं।",
            "Nifty 50 NSE pe top 50 companies ko track karta hai, Sensex BSE pe top 30 ko track karta hai. Ye India ke main market indices hain. Aap NIFTYBEES jaise ETF ya index funds ke through invest kar sakte hain.",
        ),
    },
    Rule {
        all: &["kyc"],
        any: &[],
        answer: Localized::new(
            "KYC (Know Your Customer) is mandatory for all investments in India. You need PAN card, Aadhaar, bank details, and address proof. Complete KYC once and you can invest across all platforms. It's a one-time process.",
            "KYC (Know Your Customer) भारत में सभी निवेशों के लिए अनिवार्य है। आपको PAN कार्ड, आधार, बैंक विवरण और पता प्रमाण की आवश्यकता है। एक बार KYC पूरा करें और आप सभी प्लेटफॉर्म पर निवेश कर सकते हैं।",
            "KYC (Know Your Customer) India me sabhi investments ke liye mandatory hai. Aapko PAN card, Aadhaar, bank details, aur address proof ki zarurat hai. Ek baar KYC complete karo aur aap sabhi platforms pe invest kar sakte hain.",
        ),
    },
    Rule {
        all: &[],
        any: &["diversify", "diversification"],
        answer: Localized::new(
            "Diversification means spreading investments across different asset classes and sectors. In India: 40% large-cap stocks/MFs, 20% mid-cap, 10% small-cap, 20% debt funds/FD, 10% gold/REITs. This reduces risk and improves returns.",
            "विविधीकरण का अर्थ है विभिन्न परिसंपत्ति वर्गों और क्षेत्रों में निवेश फैलाना। भारत में: 40% लार्ज-कैप शेयर/एमएफ, 20% मिड-कैप, 10% स्मॉल-कैप, 20% डेट फंड/एफडी, 10% सोना/आरईआईटी।",
            "Diversification ka matlab hai different asset classes aur sectors me investment spread karna. India me: 40% large-cap stocks/MFs, 20% mid-cap, 10% small-cap, 20% debt funds/FD, 10% gold/REITs. Ye risk kam karta hai aur returns improve karta hai.",
        ),
    },
];

/// Greeting returned when no rule matches
pub static DEFAULT_ANSWER: Localized = Localized::new(
    "I'm your SmartVestor AI assistant! I can help you with investment questions about stocks, mutual funds, ETFs, SIP, tax benefits, platforms like Zerodha/Groww, risk management, and more. What would you like to know?",
    "मैं आपका SmartVestor AI सहायक हूं! मैं शेयर, म्यूचुअल फंड, ETF, SIP, टैक्स लाभ, Zerodha/Groww जैसे प्लेटफॉर्म, जोखिम प्रबंधन और अधिक के बारे में निवेश प्रश्नों में आपकी मदद कर सकता हूं। आप क्या जानना चाहते हैं?",
    "Main aapka SmartVestor AI assistant hun! Main stocks, mutual funds, ETFs, SIP, tax benefits, platforms jaise Zerodha/Groww, risk management, aur more ke baare me investment questions me aapki help kar sakta hun. Aap kya janna chahte hain?",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sip_question_gets_sip_answer() {
        let answer = respond("What is SIP?", Language::En);
        assert!(answer.starts_with("SIP (Systematic Investment Plan)"));
    }

    #[test]
    fn test_gibberish_gets_default_greeting() {
        let answer = respond("asdkjhasd", Language::En);
        assert_eq!(answer, DEFAULT_ANSWER.en);
    }

    #[test]
    fn test_sip_outranks_tax() {
        // "sip" (rule 4) is evaluated before "tax" (rule 5)
        let answer = respond("Do SIP investments have tax benefits?", Language::En);
        assert!(answer.starts_with("SIP (Systematic Investment Plan)"));
    }

    #[test]
    fn test_what_is_stock_needs_both_keywords() {
        let answer = respond("what is a stock exchange", Language::En);
        assert!(answer.starts_with("Stocks represent ownership"));
        // "stock" alone matches no rule
        let answer = respond("stock", Language::En);
        assert_eq!(answer, DEFAULT_ANSWER.en);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let answer = respond("TELL ME ABOUT CRYPTO", Language::En);
        assert!(answer.starts_with("Cryptocurrency is highly volatile"));
    }

    #[test]
    fn test_answers_follow_language() {
        let hi = respond("what is sip", Language::Hi);
        assert!(hi.contains("सिस्टमैटिक"));
        let hinglish = respond("what is sip", Language::Hinglish);
        assert!(hinglish.contains("fixed amount invest karne"));
    }

    #[test]
    fn test_mutual_fund_outranks_emergency_fund() {
        // "mutual fund" (rule 2) wins over "fund" (rule 8)
        let answer = respond("should i buy a mutual fund", Language::En);
        assert!(answer.starts_with("Mutual funds pool money"));
    }
}
