use lazy_static::lazy_static;
use regex::Regex;

use crate::api::rates::PriceSnapshot;
use crate::services::convert_service::{self, PIVOT_CODE};
use crate::services::resolver_service;
use crate::utils::numbers::{self, AmountError, MAX_AMOUNT};

/// Keywords that always get a reply (the help text) even when no
/// conversion request can be parsed
const TRIGGERS: &[&str] = &["تبدیل", "convert", "تبدیل_ارز", "currency_convert"];

lazy_static! {
    /// `amount currency به/to currency`; currency tokens may span words
    static ref CONVERSION_RE: Regex = Regex::new(
        r"(?i)(\d+(?:[.,]\d+)*)\s*([a-zA-Z\x{0600}-\x{06FF}][a-zA-Z\x{0600}-\x{06FF} ]*?)\s+(?:به|to)\s+([a-zA-Z\x{0600}-\x{06FF}][a-zA-Z\x{0600}-\x{06FF} ]*)"
    )
    .unwrap();
    /// Bare `amount currency`; the target defaults to Toman
    static ref SIMPLE_AMOUNT_RE: Regex = Regex::new(
        r"(?i)(\d+(?:[.,]\d+)*)\s*([a-zA-Z\x{0600}-\x{06FF}][a-zA-Z\x{0600}-\x{06FF} ]*)"
    )
    .unwrap();
    /// Messages that are only digits and separators get no reply at all
    static ref ONLY_NUMBERS_RE: Regex = Regex::new(r"^[\d\s.,]+$").unwrap();
}

/// A parsed free-text conversion request
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount_text: String,
    pub from_text: String,
    pub to_text: String,
}

/// Extract a conversion request from raw message text, or None when the
/// message doesn't look like one
pub fn parse_request(text: &str) -> Option<ConversionRequest> {
    if let Some(caps) = CONVERSION_RE.captures(text) {
        return Some(ConversionRequest {
            amount_text: caps[1].to_string(),
            from_text: caps[2].trim().to_string(),
            to_text: caps[3].trim().to_string(),
        });
    }
    SIMPLE_AMOUNT_RE.captures(text).map(|caps| ConversionRequest {
        amount_text: caps[1].to_string(),
        from_text: caps[2].trim().to_string(),
        to_text: "تومان".to_string(),
    })
}

/// Turn one incoming message into a reply.
///
/// None means "stay silent": messages that are not conversion requests,
/// unresolvable currencies, and missing prices all decline without any
/// user-visible error, so the bot doesn't answer every stray
/// number-plus-word message.
pub fn build_reply(text: &str, snapshot: Option<&PriceSnapshot>) -> Option<String> {
    let text = text.trim();

    if ONLY_NUMBERS_RE.is_match(text) && !contains_trigger(text) {
        return None;
    }

    let request = match parse_request(text) {
        Some(request) => request,
        None => {
            if contains_trigger(text) {
                return Some(help_text());
            }
            return None;
        }
    };

    let amount = match numbers::parse_amount(&request.amount_text) {
        Ok(amount) => amount,
        Err(AmountError::TooLarge) => {
            return Some(format!(
                "❌ مقدار وارد شده بسیار بزرگ است. لطفاً عددی کمتر از {} وارد کنید.",
                numbers::format_number(MAX_AMOUNT)
            ));
        }
        Err(AmountError::Invalid) => return None,
    };

    let from_code = resolver_service::resolve(&request.from_text)?;
    let to_code = resolver_service::resolve(&request.to_text)?;

    // Cold start: no snapshot yet, fail closed with no output
    let snapshot = snapshot?;

    let conversion = convert_service::convert(amount, from_code, to_code, snapshot).ok()?;

    let result_amount = numbers::round_amount(conversion.amount);
    let input_amount = numbers::round_amount(amount);

    let rate = if to_code == PIVOT_CODE {
        conversion.from_price
    } else if from_code == PIVOT_CODE {
        1.0 / conversion.to_price
    } else {
        conversion.from_price / conversion.to_price
    };
    let rate = numbers::round_rate(rate);

    // For USD to Toman the rate line shows the dollar row's live price
    // straight from the snapshot
    let rate_display = if from_code == "USD" && to_code == PIVOT_CODE {
        match dollar_live_price(snapshot) {
            Some(price) => format!(
                "1 {} = {} {}",
                conversion.from_name,
                numbers::format_number(price),
                conversion.to_name
            ),
            None => format!(
                "1 {} = {} {}",
                conversion.from_name,
                numbers::format_number(rate),
                conversion.to_name
            ),
        }
    } else {
        format!(
            "1 {} = {} {}",
            conversion.from_name,
            numbers::format_number(rate),
            conversion.to_name
        )
    };

    let last_update = snapshot.last_update.as_deref().unwrap_or("نامشخص");

    Some(format!(
        "💱 <b>تبدیل ارز</b>\n\n<b>{} {}</b> = <b>{} {}</b>\n\n📊 نرخ تبدیل: <b>{}</b>\n⏱ آخرین بروزرسانی: {}",
        numbers::format_number(input_amount),
        conversion.from_name,
        numbers::format_number(result_amount),
        conversion.to_name,
        rate_display,
        last_update
    ))
}

fn contains_trigger(text: &str) -> bool {
    let lowered = text.to_lowercase();
    TRIGGERS.iter().any(|t| lowered.contains(t))
}

fn dollar_live_price(snapshot: &PriceSnapshot) -> Option<f64> {
    snapshot
        .main_currencies
        .data
        .iter()
        .find(|quote| quote.currency_name == "دلار")
        .and_then(|quote| quote.parsed_price())
}

fn help_text() -> String {
    "💱 راهنمای تبدیل ارز:\n\n\
     برای تبدیل به تومان، کافیست مقدار و نام ارز را بنویسید:\n\
     • `100 دلار`\n\
     • `50 usd`\n\
     • `۱۰۰ یورو`\n\n\
     برای تبدیل بین دو ارز، از فرمت زیر استفاده کنید:\n\
     `مقدار ارز_مبدا به ارز_مقصد`\n\n\
     مثال‌ها:\n\
     • `100 دلار به یورو`\n\
     • `500 تومان به یورو`\n\
     • `50 usd to eur`"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::rates::models::RawPrice;
    use crate::api::rates::CurrencyQuote;

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
        snapshot.last_update = Some("1403/01/01 14:30".to_string());
        snapshot
    }

    #[test]
    fn test_digits_only_message_is_silent() {
        let snap = snapshot();
        assert_eq!(build_reply("100,000", Some(&snap)), None);
        assert_eq!(build_reply("  42 ", Some(&snap)), None);
    }

    #[test]
    fn test_bare_amount_defaults_to_toman() {
        let request = parse_request("100 دلار").expect("request not parsed");
        assert_eq!(request.from_text, "دلار");
        assert_eq!(request.to_text, "تومان");

        let reply = build_reply("100 دلار", Some(&snapshot())).expect("no reply");
        assert!(reply.contains("تومان"));
        assert!(reply.contains("5,800,000"));
    }

    #[test]
    fn test_full_pattern_with_target() {
        let request = parse_request("100 دلار به یورو").expect("request not parsed");
        assert_eq!(request.from_text, "دلار");
        assert_eq!(request.to_text, "یورو");

        let reply = build_reply("100 دلار به یورو", Some(&snapshot())).expect("no reply");
        assert!(reply.contains("یورو"));
    }

    #[test]
    fn test_multi_word_currency_token() {
        let request = parse_request("100 دلار کانادا به یورو").expect("request not parsed");
        assert_eq!(request.from_text, "دلار کانادا");
        assert_eq!(request.to_text, "یورو");
    }

    #[test]
    fn test_usd_to_toman_rate_uses_live_dollar_price() {
        let reply = build_reply("1 دلار", Some(&snapshot())).expect("no reply");
        assert!(reply.contains("1 دلار = 58,000 تومان"));
        assert!(reply.contains("1403/01/01 14:30"));
    }

    #[test]
    fn test_trigger_word_shows_help() {
        let reply = build_reply("تبدیل", Some(&snapshot())).expect("no reply");
        assert!(reply.contains("راهنمای تبدیل ارز"));
    }

    #[test]
    fn test_over_ceiling_warns() {
        let reply = build_reply("2000000000 دلار", Some(&snapshot())).expect("no reply");
        assert!(reply.contains("بسیار بزرگ"));
    }

    #[test]
    fn test_unknown_currency_is_silent() {
        assert_eq!(build_reply("100 xyzzy", Some(&snapshot())), None);
    }

    #[test]
    fn test_cold_start_fails_closed() {
        assert_eq!(build_reply("100 دلار", None), None);
    }

    #[test]
    fn test_persian_digits_accepted() {
        let reply = build_reply("۱۰۰ دلار", Some(&snapshot())).expect("no reply");
        assert!(reply.contains("تومان"));
    }
}
