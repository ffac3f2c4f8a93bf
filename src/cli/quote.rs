// ABOUTME: CLI quote command: price a monthly message volume outside the wizard
//
// Out-of-range volumes are rejected rather than clamped

use anyhow::{Context, Result};

use super::{OutputFormat, QuoteArgs};
use crate::config::AppConfig;
use crate::pricing::{PricingCalculator, Quote};

/// Execute the quote command
pub fn execute(args: &QuoteArgs, format: OutputFormat, config: &AppConfig) -> Result<()> {
    let calculator = PricingCalculator::new(config.pricing.clone());
    let quote = calculator.quote(args.messages).with_context(|| {
        format!(
            "Choose between {} and {} messages",
            calculator.min_volume(),
            calculator.max_volume()
        )
    })?;

    println!("{}", render(&quote, format)?);
    Ok(())
}

pub fn render(quote: &Quote, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(quote).context("Failed to serialize quote"),
        OutputFormat::Text => Ok([
            quote.volume_label(),
            format!("Price:        {}", quote.price_label()),
            format!("Rate:         {}", quote.rate_label()),
            format!("Rate limit:   {} requests/minute", quote.rate_limit_per_minute),
        ]
        .join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output() {
        let quote = PricingCalculator::default().quote(50_000).unwrap();
        let text = render(&quote, OutputFormat::Text).unwrap();
        assert!(text.contains("Monthly Messages: 50,000"));
        assert!(text.contains("$1,450/month"));
        assert!(text.contains("3000 requests/minute"));
    }

    #[test]
    fn test_json_output() {
        let quote = PricingCalculator::default().quote(1_000).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(&quote, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["volume"], 1_000);
        assert_eq!(json["price"], 29);
        assert_eq!(json["rate_limit_per_minute"], 60);
    }

    #[test]
    fn test_out_of_range_volume_is_an_error() {
        let args = QuoteArgs { messages: 500 };
        let err = execute(&args, OutputFormat::Text, &AppConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("outside the supported range"));
    }
}
