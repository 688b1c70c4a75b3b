use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::api::rates::{CurrencyQuote, PriceSnapshot};

/// The pivot unit every conversion routes through
pub const PIVOT_CODE: &str = "TOMAN";
/// Secondary fiat unit, ten to one pivot unit by definition
pub const RIAL_CODE: &str = "IRR";

/// Result of a successful conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    pub amount: f64,
    pub from_name: String,
    pub to_name: String,
    /// Pivot price of the source currency
    pub from_price: f64,
    /// Pivot price of the target currency
    pub to_price: f64,
}

/// Which side of the conversion had no resolvable pivot price
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    BothUnresolved,
    SourceUnresolved(String),
    TargetUnresolved(String),
}

/// Approximate pivot-unit prices for codes the live snapshot rarely
/// carries. A degraded-mode safety net, not a source of truth.
const FALLBACK_RATES: &[(&str, f64)] = &[
    // Middle Eastern and Asian currencies
    ("AFN", 0.5),
    ("PKR", 0.15),
    ("INR", 0.5),
    ("BDT", 0.4),
    ("LKR", 0.13),
    ("NPR", 0.3),
    ("BTN", 0.5),
    ("MVR", 2.7),
    ("IDR", 0.003),
    ("MYR", 9.0),
    ("SGD", 31.0),
    ("BND", 31.0),
    ("PHP", 0.75),
    ("MMK", 0.02),
    ("LAK", 0.002),
    ("KHR", 0.01),
    ("VND", 0.002),
    ("MNT", 0.01),
    // African currencies
    ("EGP", 1.3),
    ("DZD", 0.3),
    ("MAD", 4.2),
    ("TND", 13.5),
    ("LYD", 8.5),
    ("SDG", 0.07),
    ("ETB", 0.75),
    ("KES", 0.32),
    ("UGX", 0.01),
    ("TZS", 0.02),
    ("RWF", 0.04),
    ("BIF", 0.02),
    ("SOS", 0.07),
    ("DJF", 0.23),
    ("GHS", 3.5),
    ("NGN", 0.28),
    ("ZAR", 2.3),
    // Latin American currencies
    ("BRL", 7.5),
    ("MXN", 1.8),
    ("ARS", 0.6),
    ("CLP", 0.5),
    ("COP", 0.1),
    ("PEN", 1.1),
    // Cryptocurrencies
    ("BTC", 1_200_000_000.0),
    ("ETH", 80_000_000.0),
    ("USDT", 42_000.0),
    ("BNB", 15_000_000.0),
    ("XRP", 20_000.0),
    ("ADA", 15_000.0),
    ("SOL", 3_000_000.0),
    ("DOGE", 5_000.0),
    ("DOT", 250_000.0),
    // Precious metals (per ounce)
    ("XAU", 70_000_000.0),
    ("XAG", 800_000.0),
    ("XPT", 35_000_000.0),
    ("XPD", 40_000_000.0),
];

/// Persian display names for the supported codes
const CURRENCY_NAMES: &[(&str, &str)] = &[
    ("USD", "دلار"),
    ("EUR", "یورو"),
    ("GBP", "پوند"),
    ("AED", "درهم"),
    ("TRY", "لیر"),
    ("TOMAN", "تومان"),
    ("IRR", "ریال"),
    ("CAD", "دلار کانادا"),
    ("AUD", "دلار استرالیا"),
    ("NZD", "دلار نیوزیلند"),
    ("CHF", "فرانک سوئیس"),
    ("JPY", "ین ژاپن"),
    ("CNY", "یوان چین"),
    ("RUB", "روبل روسیه"),
    ("INR", "روپیه هند"),
    ("KRW", "وون کره جنوبی"),
    ("SAR", "ریال سعودی"),
    ("QAR", "ریال قطر"),
    ("OMR", "ریال عمان"),
    ("BHD", "دینار بحرین"),
    ("KWD", "دینار کویت"),
    ("IQD", "دینار عراق"),
    ("SYP", "لیره سوریه"),
    ("LBP", "لیره لبنان"),
    ("JOD", "دینار اردن"),
    ("YER", "ریال یمن"),
    ("AFN", "افغانی"),
    ("PKR", "روپیه پاکستان"),
    ("BDT", "تاکا بنگلادش"),
    ("LKR", "روپیه سریلانکا"),
    ("NPR", "روپیه نپال"),
    ("IDR", "روپیه اندونزی"),
    ("MYR", "رینگیت مالزی"),
    ("SGD", "دلار سنگاپور"),
    ("THB", "بات تایلند"),
    ("VND", "دونگ ویتنام"),
    ("PHP", "پزوی فیلیپین"),
    ("EGP", "پوند مصر"),
    ("ZAR", "رند آفریقای جنوبی"),
    ("DZD", "دینار الجزایر"),
    ("MAD", "درهم مراکش"),
    ("TND", "دینار تونس"),
    ("NGN", "نایرا نیجریه"),
    ("GHS", "سدی غنا"),
    ("BRL", "رئال برزیل"),
    ("MXN", "پزوی مکزیک"),
    ("ARS", "پزوی آرژانتین"),
    ("CLP", "پزوی شیلی"),
    ("COP", "پزوی کلمبیا"),
    ("PEN", "سول پرو"),
    ("BTC", "بیت کوین"),
    ("ETH", "اتریوم"),
    ("USDT", "تتر"),
    ("BNB", "بایننس کوین"),
    ("ADA", "کاردانو"),
    ("XRP", "ریپل"),
    ("DOGE", "دوج کوین"),
    ("DOT", "پولکادات"),
    ("SOL", "سولانا"),
    ("SHIB", "شیبا اینو"),
    ("LTC", "لایت کوین"),
    ("XAU", "انس طلا"),
    ("XAG", "انس نقره"),
    ("XPT", "انس پلاتین"),
    ("XPD", "انس پالادیوم"),
];

lazy_static! {
    static ref FALLBACK_MAP: HashMap<&'static str, f64> =
        FALLBACK_RATES.iter().copied().collect();
    static ref NAME_MAP: HashMap<&'static str, &'static str> =
        CURRENCY_NAMES.iter().copied().collect();
}

/// Display name for a code, falling back to the code itself
pub fn display_name(code: &str) -> String {
    NAME_MAP
        .get(code)
        .map(|name| (*name).to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Price of one unit of `code` in Tomans, from the live snapshot first
/// and the static fallback table second. None when the code is wholly
/// unknown.
pub fn price_in_toman(code: &str, snapshot: &PriceSnapshot) -> Option<f64> {
    if code == PIVOT_CODE {
        return Some(1.0);
    }
    if code == RIAL_CODE {
        // 10 Rials to the Toman, by definition rather than market data
        return Some(0.1);
    }

    for section in [&snapshot.main_currencies, &snapshot.minor_currencies] {
        for quote in &section.data {
            if !quote_matches_code(quote, code) {
                continue;
            }
            // Unparseable price strings are skipped, not fatal
            if let Some(price) = quote.parsed_price() {
                return Some(price);
            }
        }
    }

    FALLBACK_MAP.get(code).copied()
}

/// Per-code matching predicate against a snapshot quote. Each supported
/// code checks a native-language substring, a symbol glyph, or an
/// English name substring.
fn quote_matches_code(quote: &CurrencyQuote, code: &str) -> bool {
    if let Some(quote_code) = quote.currency_code.as_deref() {
        if quote_code.eq_ignore_ascii_case(code) {
            return true;
        }
    }

    let name = quote.currency_name.to_lowercase();
    let symbol = quote
        .currency_symbol
        .as_deref()
        .unwrap_or("")
        .to_lowercase();

    match code {
        "USD" => name.contains("دلار") || name.contains("dollar") || symbol == "$",
        "EUR" => name.contains("یورو") || name.contains("euro") || symbol == "€",
        "GBP" => name.contains("پوند") || name.contains("pound") || symbol == "£",
        "AED" => {
            name.contains("درهم")
                || name.contains("dirham")
                || name.contains("emirati")
                || name.contains("uae")
        }
        "TRY" => name.contains("لیر") || name.contains("lira") || name.contains("turkish"),
        "AFN" => name.contains("افغانی") || name.contains("afghani") || name.contains("afghan"),
        "CNY" => {
            name.contains("یوان")
                || name.contains("yuan")
                || name.contains("chinese")
                || name.contains("china")
        }
        "JPY" => {
            name.contains("ین")
                || name.contains("yen")
                || name.contains("japanese")
                || name.contains("japan")
        }
        "RUB" => {
            name.contains("روبل")
                || name.contains("ruble")
                || name.contains("russian")
                || name.contains("russia")
        }
        "CAD" => {
            name.contains("دلار کانادا")
                || name.contains("canadian dollar")
                || name.contains("canada")
        }
        "AUD" => {
            name.contains("دلار استرالیا")
                || name.contains("australian dollar")
                || name.contains("australia")
        }
        "INR" => {
            name.contains("روپیه هند") || name.contains("indian rupee") || name.contains("india")
        }
        "PKR" => {
            name.contains("روپیه پاکستان")
                || name.contains("pakistani rupee")
                || name.contains("pakistan")
        }
        "IQD" => {
            name.contains("دینار عراق") || name.contains("iraqi dinar") || name.contains("iraq")
        }
        "SAR" => {
            name.contains("ریال سعودی") || name.contains("saudi riyal") || name.contains("saudi")
        }
        "QAR" => {
            name.contains("ریال قطر") || name.contains("qatari riyal") || name.contains("qatar")
        }
        "KWD" => {
            name.contains("دینار کویت")
                || name.contains("kuwaiti dinar")
                || name.contains("kuwait")
        }
        _ => false,
    }
}

/// Convert an amount between two resolved codes through the pivot unit.
///
/// Returns the converted amount plus the resolved display names and both
/// pivot prices so callers can render an exchange rate without another
/// lookup.
pub fn convert(
    amount: f64,
    from_code: &str,
    to_code: &str,
    snapshot: &PriceSnapshot,
) -> Result<Conversion, ConvertError> {
    if from_code == to_code {
        return Ok(Conversion {
            amount,
            from_name: display_name(from_code),
            to_name: display_name(to_code),
            from_price: 1.0,
            to_price: 1.0,
        });
    }

    let from_price = price_in_toman(from_code, snapshot);
    let to_price = price_in_toman(to_code, snapshot);

    let (from_price, to_price) = match (from_price, to_price) {
        (None, None) => return Err(ConvertError::BothUnresolved),
        (None, Some(_)) => return Err(ConvertError::SourceUnresolved(from_code.to_string())),
        (Some(_), None) => return Err(ConvertError::TargetUnresolved(to_code.to_string())),
        (Some(f), Some(t)) => (f, t),
    };

    let converted = if from_code == PIVOT_CODE {
        amount / to_price
    } else if to_code == PIVOT_CODE {
        amount * from_price
    } else {
        // Route through the pivot
        amount * from_price / to_price
    };

    Ok(Conversion {
        amount: converted,
        from_name: display_name(from_code),
        to_name: display_name(to_code),
        from_price,
        to_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::rates::models::RawPrice;

    fn snapshot() -> PriceSnapshot {
        let mut snapshot = PriceSnapshot::default();
        snapshot.main_currencies.data.push(CurrencyQuote {
            currency_name: "دلار".to_string(),
            live_price: Some(RawPrice::Text("58,000".to_string())),
            ..Default::default()
        });
        snapshot.main_currencies.data.push(CurrencyQuote {
            currency_name: "یورو".to_string(),
            live_price: Some(RawPrice::Text("63,000".to_string())),
            ..Default::default()
        });
        snapshot.minor_currencies.data.push(CurrencyQuote {
            currency_name: "دینار کویت".to_string(),
            live_price: Some(RawPrice::Text("189,000".to_string())),
            ..Default::default()
        });
        snapshot
    }

    #[test]
    fn test_pivot_prices() {
        let snap = snapshot();
        assert_eq!(price_in_toman("TOMAN", &snap), Some(1.0));
        assert_eq!(price_in_toman("IRR", &snap), Some(0.1));
        assert_eq!(price_in_toman("USD", &snap), Some(58_000.0));
        assert_eq!(price_in_toman("KWD", &snap), Some(189_000.0));
    }

    #[test]
    fn test_fallback_table_on_empty_snapshot() {
        let empty = PriceSnapshot::default();
        for (code, rate) in FALLBACK_RATES {
            assert_eq!(price_in_toman(code, &empty), Some(*rate), "code {}", code);
        }
        assert_eq!(price_in_toman("ZZZ", &empty), None);
    }

    #[test]
    fn test_unparseable_price_skipped_in_scan() {
        let mut snap = PriceSnapshot::default();
        snap.main_currencies.data.push(CurrencyQuote {
            currency_name: "دلار".to_string(),
            live_price: Some(RawPrice::Text("n/a".to_string())),
            ..Default::default()
        });
        snap.minor_currencies.data.push(CurrencyQuote {
            currency_name: "دلار آزاد".to_string(),
            live_price: Some(RawPrice::Text("58,500".to_string())),
            ..Default::default()
        });
        assert_eq!(price_in_toman("USD", &snap), Some(58_500.0));
    }

    #[test]
    fn test_identity_conversion() {
        let snap = snapshot();
        let result = convert(42.0, "USD", "USD", &snap).expect("conversion failed");
        assert_eq!(result.amount, 42.0);
        assert_eq!(result.from_price, 1.0);
        assert_eq!(result.to_price, 1.0);
    }

    #[test]
    fn test_usd_to_toman() {
        let snap = snapshot();
        let result = convert(1.0, "USD", "TOMAN", &snap).expect("conversion failed");
        assert_eq!(result.amount, 58_000.0);
        assert_eq!(result.from_price, 58_000.0);
        assert_eq!(result.to_name, "تومان");
    }

    #[test]
    fn test_toman_to_usd() {
        let snap = snapshot();
        let result = convert(116_000.0, "TOMAN", "USD", &snap).expect("conversion failed");
        assert_eq!(result.amount, 2.0);
    }

    #[test]
    fn test_cross_conversion_routes_through_pivot() {
        let snap = snapshot();
        let result = convert(63.0, "EUR", "USD", &snap).expect("conversion failed");
        let expected = 63.0 * 63_000.0 / 58_000.0;
        assert!((result.amount - expected).abs() < 1e-9);
    }

    #[test]
    fn test_pivot_round_trip() {
        let snap = snapshot();
        let forward = convert(100.0, "USD", "EUR", &snap).expect("conversion failed");
        let back = convert(forward.amount, "EUR", "USD", &snap).expect("conversion failed");
        assert!((back.amount - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_unresolved_sides_are_tagged() {
        let snap = snapshot();
        assert_eq!(
            convert(1.0, "ZZZ", "YYY", &snap).unwrap_err(),
            ConvertError::BothUnresolved
        );
        assert_eq!(
            convert(1.0, "ZZZ", "USD", &snap).unwrap_err(),
            ConvertError::SourceUnresolved("ZZZ".to_string())
        );
        assert_eq!(
            convert(1.0, "USD", "ZZZ", &snap).unwrap_err(),
            ConvertError::TargetUnresolved("ZZZ".to_string())
        );
    }

    #[test]
    fn test_rial_uses_hardcoded_subunit_rate() {
        let snap = snapshot();
        let result = convert(100.0, "TOMAN", "IRR", &snap).expect("conversion failed");
        assert_eq!(result.amount, 1_000.0);
    }
}
