//! Site-wide currency format template and pure price rendering.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Amount placeholder in a format template.
pub const AMOUNT_PLACEHOLDER: char = '#';
/// Symbol placeholder in a format template.
pub const SYMBOL_PLACEHOLDER: char = '@';

/// Site-wide template describing how a price is rendered.
///
/// The template must contain exactly one `#` (amount) and one `@` (symbol).
/// Owned by the host's settings; read-only from this extension's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormatTemplate {
    template: String,
    decimal_point: char,
    thousands_sep: char,
}

impl CurrencyFormatTemplate {
    /// Creates a template, validating the placeholder counts.
    pub fn new(
        template: &str,
        decimal_point: char,
        thousands_sep: char,
    ) -> Result<Self, DomainError> {
        let amounts = template.chars().filter(|&c| c == AMOUNT_PLACEHOLDER).count();
        let symbols = template.chars().filter(|&c| c == SYMBOL_PLACEHOLDER).count();
        if amounts != 1 || symbols != 1 {
            return Err(DomainError::InvalidTemplate(template.to_string()));
        }
        Ok(Self {
            template: template.to_string(),
            decimal_point,
            thousands_sep,
        })
    }

    /// Returns the raw template string.
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Renders an amount given in minor units (cents, pence) with the given
    /// display symbol.
    ///
    /// Pure and deterministic: the amount is always shown with exactly two
    /// fractional digits and thousands grouping on the major part.
    pub fn render(&self, amount_minor: i64, symbol: &str) -> String {
        let number = self.render_number(amount_minor);
        self.template
            .replace(SYMBOL_PLACEHOLDER, symbol)
            .replace(AMOUNT_PLACEHOLDER, &number)
    }

    fn render_number(&self, amount_minor: i64) -> String {
        let major = (amount_minor / 100).unsigned_abs();
        let minor = (amount_minor % 100).unsigned_abs();

        let digits = major.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.thousands_sep);
            }
            grouped.push(c);
        }

        let sign = if amount_minor < 0 { "-" } else { "" };
        format!("{sign}{grouped}{}{minor:02}", self.decimal_point)
    }
}

impl Default for CurrencyFormatTemplate {
    /// The host's shipped default: symbol directly followed by the amount.
    fn default() -> Self {
        Self {
            template: "@#".to_string(),
            decimal_point: '.',
            thousands_sep: ',',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_renders_symbol_then_amount() {
        let tpl = CurrencyFormatTemplate::default();
        assert_eq!(tpl.render(1000, "$"), "$10.00");
    }

    #[test]
    fn test_thousands_grouping_and_two_fraction_digits() {
        let tpl = CurrencyFormatTemplate::default();
        // 1234.5 in minor units
        assert_eq!(tpl.render(123_450, "£"), "£1,234.50");
        assert_eq!(tpl.render(100_000_000, "$"), "$1,000,000.00");
    }

    #[test]
    fn test_custom_separators() {
        let tpl = CurrencyFormatTemplate::new("# @", ',', '.').unwrap();
        assert_eq!(tpl.render(123_450, "€"), "1.234,50 €");
    }

    #[test]
    fn test_negative_amounts_keep_sign_on_number() {
        let tpl = CurrencyFormatTemplate::default();
        assert_eq!(tpl.render(-250, "$"), "$-2.50");
    }

    #[test]
    fn test_render_is_deterministic() {
        let tpl = CurrencyFormatTemplate::default();
        assert_eq!(tpl.render(999, "$"), tpl.render(999, "$"));
    }

    #[test]
    fn test_placeholder_counts_validated() {
        assert!(CurrencyFormatTemplate::new("##@", '.', ',').is_err());
        assert!(CurrencyFormatTemplate::new("#", '.', ',').is_err());
        assert!(CurrencyFormatTemplate::new("@@#", '.', ',').is_err());
        assert!(CurrencyFormatTemplate::new("@ #", '.', ',').is_ok());
    }
}
