use std::collections::HashMap;

use lazy_static::lazy_static;

/// Curated multi-word phrases checked first, by substring containment.
/// These disambiguate names that a single-word alias would misresolve.
const EXACT_PHRASES: &[(&str, &str)] = &[
    ("روپیه پاکستان", "PKR"),
    ("پاکستان روپیه", "PKR"),
    ("پاکستانی روپیه", "PKR"),
    ("pakistani rupee", "PKR"),
    ("pakistan rupee", "PKR"),
    ("روپیه هند", "INR"),
    ("هند روپیه", "INR"),
    ("indian rupee", "INR"),
    ("india rupee", "INR"),
    ("دلار کانادا", "CAD"),
    ("canadian dollar", "CAD"),
    ("canada dollar", "CAD"),
    ("دلار استرالیا", "AUD"),
    ("australian dollar", "AUD"),
    ("australia dollar", "AUD"),
    ("دلار نیوزیلند", "NZD"),
    ("new zealand dollar", "NZD"),
    ("دلار سنگاپور", "SGD"),
    ("singapore dollar", "SGD"),
    ("دلار هنگ کنگ", "HKD"),
    ("hong kong dollar", "HKD"),
    ("دلار تایوان", "TWD"),
    ("taiwan dollar", "TWD"),
    ("ریال سعودی", "SAR"),
    ("ریال عربستان", "SAR"),
    ("saudi riyal", "SAR"),
    ("ریال قطر", "QAR"),
    ("qatari riyal", "QAR"),
    ("ریال عمان", "OMR"),
    ("omani riyal", "OMR"),
    ("ریال یمن", "YER"),
    ("yemeni riyal", "YER"),
    ("دینار کویت", "KWD"),
    ("kuwaiti dinar", "KWD"),
    ("دینار بحرین", "BHD"),
    ("bahraini dinar", "BHD"),
    ("دینار عراق", "IQD"),
    ("iraqi dinar", "IQD"),
    ("دینار اردن", "JOD"),
    ("jordanian dinar", "JOD"),
    ("دینار لیبی", "LYD"),
    ("libyan dinar", "LYD"),
    ("دینار الجزایر", "DZD"),
    ("algerian dinar", "DZD"),
    ("دینار تونس", "TND"),
    ("tunisian dinar", "TND"),
    ("دینار صربستان", "RSD"),
    ("serbian dinar", "RSD"),
    ("درهم امارات", "AED"),
    ("uae dirham", "AED"),
    ("emirati dirham", "AED"),
    ("درهم مراکش", "MAD"),
    ("moroccan dirham", "MAD"),
    ("پوند انگلیس", "GBP"),
    ("پوند بریتانیا", "GBP"),
    ("british pound", "GBP"),
    ("pound sterling", "GBP"),
    ("پوند مصر", "EGP"),
    ("egyptian pound", "EGP"),
    ("پوند سودان", "SDG"),
    ("sudanese pound", "SDG"),
    ("لیره لبنان", "LBP"),
    ("lebanese pound", "LBP"),
    ("لیره سوریه", "SYP"),
    ("syrian pound", "SYP"),
    ("لیر ترکیه", "TRY"),
    ("turkish lira", "TRY"),
    ("فرانک سوئیس", "CHF"),
    ("swiss franc", "CHF"),
    ("روبل روسیه", "RUB"),
    ("russian ruble", "RUB"),
    ("ین ژاپن", "JPY"),
    ("japanese yen", "JPY"),
    ("یوان چین", "CNY"),
    ("chinese yuan", "CNY"),
    ("وون کره جنوبی", "KRW"),
    ("south korean won", "KRW"),
    ("پزوی مکزیک", "MXN"),
    ("mexican peso", "MXN"),
    ("پزوی فیلیپین", "PHP"),
    ("philippine peso", "PHP"),
    ("پزوی آرژانتین", "ARS"),
    ("argentine peso", "ARS"),
    ("پزوی شیلی", "CLP"),
    ("chilean peso", "CLP"),
    ("پزوی کلمبیا", "COP"),
    ("colombian peso", "COP"),
    ("رئال برزیل", "BRL"),
    ("brazilian real", "BRL"),
    ("رند آفریقای جنوبی", "ZAR"),
    ("south african rand", "ZAR"),
    ("رینگیت مالزی", "MYR"),
    ("malaysian ringgit", "MYR"),
    ("بات تایلند", "THB"),
    ("thai baht", "THB"),
    ("دونگ ویتنام", "VND"),
    ("vietnamese dong", "VND"),
    ("تاکا بنگلادش", "BDT"),
    ("bangladeshi taka", "BDT"),
];

/// Flat single-word/abbreviation alias table, matched against the whole
/// token
const ALIASES: &[(&str, &str)] = &[
    ("دلار", "USD"),
    ("dollar", "USD"),
    ("usd", "USD"),
    ("یورو", "EUR"),
    ("euro", "EUR"),
    ("eur", "EUR"),
    ("پوند", "GBP"),
    ("pound", "GBP"),
    ("gbp", "GBP"),
    ("درهم", "AED"),
    ("dirham", "AED"),
    ("aed", "AED"),
    ("لیر", "TRY"),
    ("lira", "TRY"),
    ("try", "TRY"),
    ("تومان", "TOMAN"),
    ("toman", "TOMAN"),
    ("تومن", "TOMAN"),
    ("irt", "TOMAN"),
    ("ریال", "IRR"),
    ("rial", "IRR"),
    ("irr", "IRR"),
    ("cad", "CAD"),
    ("aud", "AUD"),
    ("nzd", "NZD"),
    ("sgd", "SGD"),
    ("hkd", "HKD"),
    ("twd", "TWD"),
    ("یوان", "CNY"),
    ("yuan", "CNY"),
    ("cny", "CNY"),
    ("yen", "JPY"),
    ("jpy", "JPY"),
    ("chf", "CHF"),
    ("رینگیت", "MYR"),
    ("ringgit", "MYR"),
    ("myr", "MYR"),
    ("بات", "THB"),
    ("baht", "THB"),
    ("thb", "THB"),
    ("روپیه", "INR"),
    ("rupee", "INR"),
    ("inr", "INR"),
    ("pkr", "PKR"),
    ("lkr", "LKR"),
    ("npr", "NPR"),
    ("وون", "KRW"),
    ("won", "KRW"),
    ("krw", "KRW"),
    ("کرون", "SEK"),
    ("krona", "SEK"),
    ("sek", "SEK"),
    ("nok", "NOK"),
    ("dkk", "DKK"),
    ("روبل", "RUB"),
    ("ruble", "RUB"),
    ("rub", "RUB"),
    ("منات", "AZN"),
    ("manat", "AZN"),
    ("azn", "AZN"),
    ("درام", "AMD"),
    ("dram", "AMD"),
    ("amd", "AMD"),
    ("لاری", "GEL"),
    ("lari", "GEL"),
    ("gel", "GEL"),
    ("سوم", "KGS"),
    ("som", "KGS"),
    ("kgs", "KGS"),
    ("سامانی", "TJS"),
    ("somoni", "TJS"),
    ("tjs", "TJS"),
    ("uzs", "UZS"),
    ("تنگه", "KZT"),
    ("tenge", "KZT"),
    ("kzt", "KZT"),
    ("افغانی", "AFN"),
    ("afghani", "AFN"),
    ("afn", "AFN"),
    ("syp", "SYP"),
    ("iqd", "IQD"),
    ("sar", "SAR"),
    ("qar", "QAR"),
    ("kwd", "KWD"),
    ("bhd", "BHD"),
    ("omr", "OMR"),
    ("yer", "YER"),
    ("jod", "JOD"),
    ("طلا", "XAU"),
    ("gold", "XAU"),
    ("xau", "XAU"),
    ("نقره", "XAG"),
    ("silver", "XAG"),
    ("xag", "XAG"),
    ("پلاتین", "XPT"),
    ("platinum", "XPT"),
    ("xpt", "XPT"),
    ("پالادیوم", "XPD"),
    ("palladium", "XPD"),
    ("xpd", "XPD"),
    ("بیت کوین", "BTC"),
    ("bitcoin", "BTC"),
    ("btc", "BTC"),
    ("اتریوم", "ETH"),
    ("ethereum", "ETH"),
    ("eth", "ETH"),
    ("تتر", "USDT"),
    ("tether", "USDT"),
    ("usdt", "USDT"),
    ("بایننس کوین", "BNB"),
    ("bnb", "BNB"),
    ("کاردانو", "ADA"),
    ("cardano", "ADA"),
    ("ada", "ADA"),
    ("ریپل", "XRP"),
    ("ripple", "XRP"),
    ("xrp", "XRP"),
    ("دوج کوین", "DOGE"),
    ("dogecoin", "DOGE"),
    ("doge", "DOGE"),
    ("پولکادات", "DOT"),
    ("polkadot", "DOT"),
    ("dot", "DOT"),
    ("سولانا", "SOL"),
    ("solana", "SOL"),
    ("sol", "SOL"),
    ("شیبا اینو", "SHIB"),
    ("shib", "SHIB"),
    ("لایت کوین", "LTC"),
    ("litecoin", "LTC"),
    ("ltc", "LTC"),
    ("ترون", "TRX"),
    ("tron", "TRX"),
    ("trx", "TRX"),
    ("مونرو", "XMR"),
    ("monero", "XMR"),
    ("xmr", "XMR"),
    ("etc", "ETC"),
    ("فایل کوین", "FIL"),
    ("filecoin", "FIL"),
    ("fil", "FIL"),
    ("mxn", "MXN"),
    ("php", "PHP"),
    ("ars", "ARS"),
    ("clp", "CLP"),
    ("cop", "COP"),
    ("cup", "CUP"),
    ("dop", "DOP"),
    ("uyu", "UYU"),
    ("egp", "EGP"),
    ("sdg", "SDG"),
    ("lbp", "LBP"),
    ("dzd", "DZD"),
    ("mad", "MAD"),
    ("tnd", "TND"),
    ("lyd", "LYD"),
    ("rsd", "RSD"),
    ("نایرا", "NGN"),
    ("naira", "NGN"),
    ("ngn", "NGN"),
    ("سدی", "GHS"),
    ("cedi", "GHS"),
    ("ghs", "GHS"),
    ("رند", "ZAR"),
    ("rand", "ZAR"),
    ("zar", "ZAR"),
    ("رئال", "BRL"),
    ("real", "BRL"),
    ("brl", "BRL"),
    ("سول", "PEN"),
    ("سول پرو", "PEN"),
    ("pen", "PEN"),
    ("دونگ", "VND"),
    ("vnd", "VND"),
    ("تاکا", "BDT"),
    ("taka", "BDT"),
    ("bdt", "BDT"),
    ("idr", "IDR"),
    ("rwf", "RWF"),
    ("djf", "DJF"),
    ("bif", "BIF"),
    ("فورینت", "HUF"),
    ("forint", "HUF"),
    ("huf", "HUF"),
    ("زلوتی", "PLN"),
    ("pln", "PLN"),
    ("هریونیا", "UAH"),
    ("hryvnia", "UAH"),
    ("uah", "UAH"),
    ("mur", "MUR"),
    ("scr", "SCR"),
    ("bnd", "BND"),
    ("lrd", "LRD"),
    ("nad", "NAD"),
    ("fjd", "FJD"),
    ("jmd", "JMD"),
    ("bsd", "BSD"),
    ("bzd", "BZD"),
    ("bbd", "BBD"),
];

/// One currency-family rule: a family keyword plus ordered country
/// qualifiers, checked by substring within the same token.
struct FamilyRule {
    keywords: &'static [&'static str],
    qualifiers: &'static [(&'static [&'static str], &'static str)],
    /// Code assigned when the family keyword matches but no qualifier
    /// does (only the dollar family has one)
    default: Option<&'static str>,
}

/// Ordered family rules. The order is load-bearing: when a token
/// matches keywords of several families, the LAST matching family wins,
/// exactly as the rules are listed here. Whether that override should
/// be allowed at all is an open question; the current behavior keeps it.
static FAMILY_RULES: &[FamilyRule] = &[
    FamilyRule {
        keywords: &["دلار", "dollar"],
        qualifiers: &[
            (&["کانادا", "canada"], "CAD"),
            (&["استرالیا", "australia"], "AUD"),
            (&["نیوزیلند", "new zealand"], "NZD"),
            (&["سنگاپور", "singapore"], "SGD"),
            (&["هنگ کنگ", "hong kong"], "HKD"),
            (&["تایوان", "taiwan"], "TWD"),
            (&["برونئی", "brunei"], "BND"),
            (&["لیبریا", "liberia"], "LRD"),
            (&["نامیبیا", "namibia"], "NAD"),
            (&["فیجی", "fiji"], "FJD"),
            (&["جامائیکا", "jamaica"], "JMD"),
            (&["باهاما", "bahamas"], "BSD"),
            (&["بلیز", "belize"], "BZD"),
            (&["باربادوس", "barbados"], "BBD"),
        ],
        default: Some("USD"),
    },
    FamilyRule {
        keywords: &["روپیه", "rupee"],
        qualifiers: &[
            (&["پاکستان", "pakistan"], "PKR"),
            (&["هند", "india"], "INR"),
            (&["سریلانکا", "sri lanka"], "LKR"),
            (&["نپال", "nepal"], "NPR"),
            (&["اندونزی", "indonesia"], "IDR"),
            (&["موریس", "mauritius"], "MUR"),
            (&["سیشل", "seychelles"], "SCR"),
        ],
        default: None,
    },
    FamilyRule {
        keywords: &["دینار", "dinar"],
        qualifiers: &[
            (&["کویت", "kuwait"], "KWD"),
            (&["بحرین", "bahrain"], "BHD"),
            (&["عراق", "iraq"], "IQD"),
            (&["اردن", "jordan"], "JOD"),
            (&["لیبی", "libya"], "LYD"),
            (&["الجزایر", "algeria"], "DZD"),
            (&["تونس", "tunisia"], "TND"),
            (&["صربستان", "serbia"], "RSD"),
        ],
        default: None,
    },
    FamilyRule {
        keywords: &["ریال", "riyal"],
        qualifiers: &[
            (&["سعودی", "saudi"], "SAR"),
            (&["قطر", "qatar"], "QAR"),
            (&["عمان", "oman"], "OMR"),
            (&["یمن", "yemen"], "YER"),
            (&["ایران", "iran"], "IRR"),
        ],
        default: None,
    },
    FamilyRule {
        keywords: &["درهم", "dirham"],
        qualifiers: &[
            (&["امارات", "uae", "emirates"], "AED"),
            (&["مراکش", "morocco"], "MAD"),
        ],
        default: None,
    },
    FamilyRule {
        keywords: &["پوند", "pound"],
        qualifiers: &[
            (&["انگلیس", "بریتانیا", "uk", "british", "sterling"], "GBP"),
            (&["مصر", "egypt"], "EGP"),
            (&["سودان", "sudan"], "SDG"),
            (&["لبنان", "lebanon"], "LBP"),
            (&["سوریه", "syria"], "SYP"),
        ],
        default: None,
    },
    FamilyRule {
        keywords: &["فرانک", "franc"],
        qualifiers: &[
            (&["سوئیس", "swiss"], "CHF"),
            (&["رواندا", "rwanda"], "RWF"),
            (&["جیبوتی", "djibouti"], "DJF"),
            (&["بوروندی", "burundi"], "BIF"),
        ],
        default: None,
    },
    FamilyRule {
        keywords: &["پزو", "peso"],
        qualifiers: &[
            (&["مکزیک", "mexico"], "MXN"),
            (&["فیلیپین", "philippines"], "PHP"),
            (&["آرژانتین", "argentina"], "ARS"),
            (&["شیلی", "chile"], "CLP"),
            (&["کلمبیا", "colombia"], "COP"),
            (&["کوبا", "cuba"], "CUP"),
            (&["دومنیکن", "dominican"], "DOP"),
            (&["اروگوئه", "uruguay"], "UYU"),
        ],
        default: None,
    },
];

lazy_static! {
    static ref ALIAS_MAP: HashMap<&'static str, &'static str> =
        ALIASES.iter().copied().collect();
}

/// Map a free-text token to a canonical currency code.
///
/// Layered lookup, in order: exact phrases (substring), whole-token
/// aliases, then the family rules. Unresolvable tokens yield None and
/// the caller declines to respond.
pub fn resolve(token: &str) -> Option<&'static str> {
    let token = token.trim().to_lowercase();
    if token.is_empty() {
        return None;
    }

    let mut code = EXACT_PHRASES
        .iter()
        .find(|(phrase, _)| token.contains(phrase))
        .map(|(_, code)| *code);

    if code.is_none() {
        // Whole-token lookup first, then word by word so trailing words
        // around a known alias don't hide it
        code = ALIAS_MAP.get(token.as_str()).copied().or_else(|| {
            token
                .split_whitespace()
                .find_map(|word| ALIAS_MAP.get(word).copied())
        });
    }

    for rule in FAMILY_RULES {
        if !rule.keywords.iter().any(|k| token.contains(k)) {
            continue;
        }
        let qualified = rule
            .qualifiers
            .iter()
            .find(|(words, _)| words.iter().any(|w| token.contains(w)))
            .map(|(_, code)| *code);
        if let Some(resolved) = qualified.or(rule.default) {
            code = Some(resolved);
        }
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_dollar_defaults_to_usd() {
        assert_eq!(resolve("دلار"), Some("USD"));
        assert_eq!(resolve("dollar"), Some("USD"));
        assert_eq!(resolve("usd"), Some("USD"));
    }

    #[test]
    fn test_qualified_dollar() {
        assert_eq!(resolve("دلار کانادا"), Some("CAD"));
        assert_eq!(resolve("canadian dollar"), Some("CAD"));
        assert_eq!(resolve("دلار استرالیا"), Some("AUD"));
    }

    #[test]
    fn test_exact_phrase_beats_alias() {
        assert_eq!(resolve("روپیه پاکستان"), Some("PKR"));
        // Bare rupee stays on the alias table's answer
        assert_eq!(resolve("روپیه"), Some("INR"));
    }

    #[test]
    fn test_case_and_whitespace_tolerance() {
        assert_eq!(resolve("  USD  "), Some("USD"));
        assert_eq!(resolve("Bitcoin"), Some("BTC"));
    }

    #[test]
    fn test_unresolvable_token() {
        assert_eq!(resolve("xyzzy"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn test_family_rules() {
        assert_eq!(resolve("دینار کویت"), Some("KWD"));
        assert_eq!(resolve("ریال عمان"), Some("OMR"));
        assert_eq!(resolve("فرانک رواندا"), Some("RWF"));
        assert_eq!(resolve("پزوی شیلی"), Some("CLP"));
    }

    #[test]
    fn test_pivot_aliases() {
        assert_eq!(resolve("تومان"), Some("TOMAN"));
        assert_eq!(resolve("toman"), Some("TOMAN"));
        assert_eq!(resolve("ریال"), Some("IRR"));
    }

    #[test]
    fn test_later_family_overrides_earlier() {
        // A token matching two families resolves to the family listed
        // later in FAMILY_RULES. Documented order-sensitivity, kept
        // deliberately.
        assert_eq!(resolve("دلار pound مصر"), Some("EGP"));
    }
}
