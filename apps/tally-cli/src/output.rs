//! # Output Rendering
//!
//! Turns results into the text written to stdout.
//!
//! ```text
//! json:  { "total": 1000, "deposit": 1300, "change": 300 }
//!
//! text:  Total    ¥1,000
//!        Deposit  ¥1,300
//!        Change   ¥300
//! ```

use serde::Serialize;
use tally_core::{CurrencyFormat, Invoice, Payment, Receipt};

use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// A validated request, as printed by `tally check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckedRequest {
    pub invoice: Invoice,
    pub payments: Vec<Payment>,
}

pub fn render_receipt(receipt: &Receipt, config: &CliConfig) -> CliResult<String> {
    match config.output_format {
        OutputFormat::Json => to_json(receipt, config.pretty),
        OutputFormat::Text => {
            let currency = config.currency();
            Ok(text_table(&[
                ("Total", receipt.total.format(&currency)),
                ("Deposit", receipt.deposit.format(&currency)),
                ("Change", receipt.change.format(&currency)),
            ]))
        }
    }
}

pub fn render_checked(checked: &CheckedRequest, config: &CliConfig) -> CliResult<String> {
    match config.output_format {
        OutputFormat::Json => to_json(checked, config.pretty),
        OutputFormat::Text => {
            let currency = config.currency();
            let mut rows = vec![("Invoice", checked.invoice.total.format(&currency))];
            rows.extend(
                checked
                    .payments
                    .iter()
                    .map(|payment| describe_payment(payment, &currency)),
            );
            Ok(text_table(&rows))
        }
    }
}

fn describe_payment(payment: &Payment, currency: &CurrencyFormat) -> (&'static str, String) {
    match payment {
        Payment::Cash { amount } => ("Cash", amount.format(currency)),
        Payment::CouponPercentage { percentage } => ("Coupon", percentage.to_string()),
        Payment::CouponAmount { amount } => ("Coupon", amount.format(currency)),
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(CliError::Render)
}

fn text_table(rows: &[(&str, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{:<width$}  {}", label, value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{Money, Percentage};

    fn receipt() -> Receipt {
        Receipt {
            total: Money::from_minor(1000),
            deposit: Money::from_minor(1300),
            change: Money::from_minor(300),
        }
    }

    #[test]
    fn test_render_receipt_compact_json() {
        let config = CliConfig {
            pretty: false,
            ..CliConfig::default()
        };
        assert_eq!(
            render_receipt(&receipt(), &config).unwrap(),
            r#"{"total":1000,"deposit":1300,"change":300}"#
        );
    }

    #[test]
    fn test_render_receipt_text() {
        let config = CliConfig::default().with_format(Some(OutputFormat::Text));
        assert_eq!(
            render_receipt(&receipt(), &config).unwrap(),
            "Total    ¥1,000\nDeposit  ¥1,300\nChange   ¥300"
        );
    }

    #[test]
    fn test_render_checked_text() {
        let config = CliConfig::default().with_format(Some(OutputFormat::Text));
        let checked = CheckedRequest {
            invoice: Invoice::new(Money::from_minor(1000)),
            payments: vec![
                Payment::coupon_percentage(Percentage::from_percent(10.0)),
                Payment::cash(Money::from_minor(900)),
            ],
        };
        assert_eq!(
            render_checked(&checked, &config).unwrap(),
            "Invoice  ¥1,000\nCoupon   10%\nCash     ¥900"
        );
    }
}
