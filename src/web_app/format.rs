// web_app/format.rs - Display helpers for prices and images
//
// Display only: nothing here changes stored values.

use num_format::{Locale, ToFormattedString};

use crate::config::CurrencyFormat;

/// Fallback image used when a product has no image or it fails to load
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://space.coze.cn/api/coze_space/gen_image?image_size=square_hd&prompt=product%20placeholder&sign=5f01a548a7ff8f8fa96dc61046e75b54";

/// Format a price as whole currency units, e.g. `¥1,235`.
///
/// Rounds half away from zero. Unknown locale names fall back to `en`.
pub fn format_price(price: f64, currency: &CurrencyFormat) -> String {
    let locale = Locale::from_name(currency.locale.as_str()).unwrap_or(Locale::en);
    let rounded = if price.is_finite() { price.round() } else { 0.0 };
    // Values beyond i64 saturate; catalog prices never get near that
    let units = rounded.abs() as i64;
    let sign = if rounded < 0.0 { "-" } else { "" };

    format!(
        "{}{}{}",
        sign,
        currency.symbol,
        units.to_formatted_string(&locale)
    )
}

/// Pick the image to render for a product
pub fn display_image<'a>(image: &'a str, placeholder: &'a str) -> &'a str {
    if image.trim().is_empty() {
        placeholder
    } else {
        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yuan() -> CurrencyFormat {
        CurrencyFormat::default()
    }

    #[test]
    fn test_price_formatting() {
        let cases = [
            (0.0, "¥0"),
            (9.99, "¥10"),
            (9.49, "¥9"),
            (1234.5, "¥1,235"),
            (1_000_000.0, "¥1,000,000"),
        ];

        for (price, expected) in cases {
            assert_eq!(format_price(price, &yuan()), expected, "Price {}", price);
        }
    }

    #[test]
    fn test_price_formatting_negative() {
        assert_eq!(format_price(-2.5, &yuan()), "-¥3");
        // Rounds to zero, so no sign
        assert_eq!(format_price(-0.2, &yuan()), "¥0");
    }

    #[test]
    fn test_price_formatting_non_finite() {
        assert_eq!(format_price(f64::NAN, &yuan()), "¥0");
        assert_eq!(format_price(f64::INFINITY, &yuan()), "¥0");
    }

    #[test]
    fn test_price_formatting_other_currency() {
        let usd = CurrencyFormat {
            locale: "en".to_string(),
            symbol: "$".to_string(),
        };
        assert_eq!(format_price(12345.0, &usd), "$12,345");
    }

    #[test]
    fn test_price_formatting_unknown_locale() {
        let odd = CurrencyFormat {
            locale: "xx-NOPE".to_string(),
            symbol: "€".to_string(),
        };
        assert_eq!(format_price(1500.0, &odd), "€1,500");
    }

    #[test]
    fn test_display_image_fallback() {
        assert_eq!(display_image("", "fallback.png"), "fallback.png");
        assert_eq!(display_image("   ", "fallback.png"), "fallback.png");
        assert_eq!(display_image("a.png", "fallback.png"), "a.png");
    }
}
