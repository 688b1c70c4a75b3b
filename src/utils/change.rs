use super::numbers::format_number;

/// Parsed pieces of a change descriptor string, format `(±X.XX%) ±value`
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeParts {
    pub percent: Option<f64>,
    pub value: f64,
}

/// Parse a change descriptor defensively.
///
/// The percent lives inside the outermost parentheses, the absolute
/// value is the last whitespace-separated token after them. Inputs that
/// don't yield a numeric value return None; callers fall back to the
/// raw string.
pub fn parse_change(raw: &str) -> Option<ChangeParts> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    let (percent_text, value_text) = match (text.find('('), text.rfind(')')) {
        (Some(open), Some(close)) if open < close => {
            let inner = &text[open + 1..close];
            // Nested parentheses: strip any leading opens, cut at the
            // first close inside
            let inner = inner.trim_start_matches('(');
            let inner = match inner.find(')') {
                Some(i) => &inner[..i],
                None => inner,
            };
            (Some(inner), &text[close + 1..])
        }
        _ => (None, text),
    };

    let value_token = value_text.split_whitespace().last()?;
    let value = value_token.replace(',', "").parse::<f64>().ok()?;

    let percent = percent_text
        .and_then(|p| p.trim().trim_end_matches('%').trim().parse::<f64>().ok());

    Some(ChangeParts { percent, value })
}

/// Render a change descriptor with a direction marker, or return the
/// raw string unchanged when it can't be parsed
pub fn format_change(raw: &str) -> String {
    match parse_change(raw) {
        Some(parts) => {
            let negative = parts.value < 0.0 || raw.trim().starts_with('-');
            if negative {
                format!("📉 {}-", format_number(parts.value.abs()))
            } else {
                format!("📈 {}+", format_number(parts.value))
            }
        }
        None => raw.to_string(),
    }
}
