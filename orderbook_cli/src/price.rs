use anyhow::{bail, Context, Result};
use orderbook::Price;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Parses a decimal dollar amount (e.g. `99.50`) into integer cents,
/// rounding half-up to the nearest cent. The engine never sees floats.
pub fn parse_price(input: &str) -> Result<Price> {
    let dollars: Decimal = input
        .parse()
        .with_context(|| format!("invalid price: {input}"))?;
    let cents = (dollars * Decimal::from(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .context("price out of range")?;
    if cents <= 0 {
        bail!("price must be positive");
    }
    Ok(cents)
}

/// Integer cents back to decimal dollars for display.
pub fn dollars(cents: Price) -> Decimal {
    Decimal::new(cents, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_fractional_dollars() {
        assert_eq!(parse_price("100").unwrap(), 10000);
        assert_eq!(parse_price("99.50").unwrap(), 9950);
        assert_eq!(parse_price("0.01").unwrap(), 1);
    }

    #[test]
    fn test_parse_rounds_half_up_to_the_cent() {
        assert_eq!(parse_price("10.005").unwrap(), 1001);
        assert_eq!(parse_price("10.004").unwrap(), 1000);
        assert_eq!(parse_price("0.005").unwrap(), 1);
    }

    #[test]
    fn test_parse_rejects_garbage_and_non_positive() {
        assert!(parse_price("abc").is_err());
        assert!(parse_price("").is_err());
        assert!(parse_price("0").is_err());
        assert!(parse_price("-5").is_err());
        assert!(parse_price("0.001").is_err()); // rounds to zero cents
    }

    #[test]
    fn test_dollars_formats_two_decimals() {
        assert_eq!(dollars(9950).to_string(), "99.50");
        assert_eq!(dollars(10000).to_string(), "100.00");
        assert_eq!(dollars(5).to_string(), "0.05");
    }
}
