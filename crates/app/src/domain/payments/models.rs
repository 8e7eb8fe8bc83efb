//! Payment Models

use posy::{catalog::Product, money::MinorUnits};
use serde::Deserialize;

/// Currency code sent to the provider.
pub const CURRENCY: &str = "usd";

/// A payment line resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine {
    pub product: Product,
    pub quantity: u32,
}

impl PricedLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn total(&self) -> MinorUnits {
        posy::money::line_total(self.product.unit_price, self.quantity)
    }
}

/// Hosted checkout session request body.
///
/// The provider takes form fields, with nested values addressed by bracketed keys such as
/// `line_items[0][price_data][currency]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSessionRequest<'a> {
    pub ui_mode: &'static str,
    pub mode: &'static str,
    pub redirect_on_completion: Option<&'static str>,
    pub return_url: Option<&'a str>,
    pub line_items: Vec<SessionLineItem<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLineItem<'a> {
    pub price_data: PriceData<'a>,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceData<'a> {
    pub currency: &'static str,
    pub product_data: ProductData<'a>,
    pub unit_amount: MinorUnits,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductData<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

impl<'a> CreateSessionRequest<'a> {
    /// An embedded, one-off payment for the given lines.
    #[must_use]
    pub fn embedded(lines: &'a [PricedLine], return_url: Option<&'a str>) -> Self {
        Self {
            ui_mode: "embedded",
            mode: "payment",
            redirect_on_completion: return_url.is_none().then_some("never"),
            return_url,
            line_items: lines
                .iter()
                .map(|line| SessionLineItem {
                    price_data: PriceData {
                        currency: CURRENCY,
                        product_data: ProductData {
                            name: &line.product.name,
                            description: &line.product.description,
                        },
                        unit_amount: line.product.unit_price,
                    },
                    quantity: line.quantity,
                })
                .collect(),
        }
    }

    /// Flattens the request into ordered form fields.
    ///
    /// Absent options and empty descriptions are left out; the provider rejects empty strings.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("ui_mode".to_string(), self.ui_mode.to_string()),
            ("mode".to_string(), self.mode.to_string()),
        ];

        if let Some(redirect) = self.redirect_on_completion {
            fields.push(("redirect_on_completion".to_string(), redirect.to_string()));
        }

        if let Some(url) = self.return_url {
            fields.push(("return_url".to_string(), url.to_string()));
        }

        for (index, item) in self.line_items.iter().enumerate() {
            let prefix = format!("line_items[{index}]");
            let price = &item.price_data;

            fields.push((
                format!("{prefix}[price_data][currency]"),
                price.currency.to_string(),
            ));
            fields.push((
                format!("{prefix}[price_data][product_data][name]"),
                price.product_data.name.to_string(),
            ));

            if !price.product_data.description.is_empty() {
                fields.push((
                    format!("{prefix}[price_data][product_data][description]"),
                    price.product_data.description.to_string(),
                ));
            }

            fields.push((
                format!("{prefix}[price_data][unit_amount]"),
                price.unit_amount.to_string(),
            ));
            fields.push((format!("{prefix}[quantity]"), item.quantity.to_string()));
        }

        fields
    }
}

/// Hosted checkout session response body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionResponse {
    pub id: String,
    #[serde(default)]
    pub client_secret: Option<String>,
}

#[cfg(test)]
mod tests {
    use posy::catalog::Catalog;
    use testresult::TestResult;

    use super::*;

    fn field<'f>(fields: &'f [(String, String)], key: &str) -> Option<&'f str> {
        fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn embedded_request_prices_each_line() -> TestResult {
        let catalog = Catalog::florist();
        let lines = vec![
            PricedLine {
                product: catalog.resolve("rose-red")?,
                quantity: 2,
            },
            PricedLine {
                product: catalog.resolve("lily-white")?,
                quantity: 1,
            },
        ];

        let fields = CreateSessionRequest::embedded(&lines, None).form_fields();

        assert_eq!(field(&fields, "ui_mode"), Some("embedded"));
        assert_eq!(field(&fields, "mode"), Some("payment"));
        assert_eq!(field(&fields, "redirect_on_completion"), Some("never"));
        assert_eq!(field(&fields, "line_items[0][quantity]"), Some("2"));
        assert_eq!(field(&fields, "line_items[0][price_data][currency]"), Some("usd"));
        assert_eq!(field(&fields, "line_items[0][price_data][unit_amount]"), Some("499"));
        assert_eq!(
            field(&fields, "line_items[0][price_data][product_data][name]"),
            Some("Red Roses")
        );
        assert_eq!(field(&fields, "line_items[1][quantity]"), Some("1"));
        assert_eq!(field(&fields, "return_url"), None);

        Ok(())
    }

    #[test]
    fn return_url_replaces_the_never_redirect() {
        let fields = CreateSessionRequest::embedded(
            &[],
            Some("https://shop.example/checkout/success"),
        )
        .form_fields();

        assert_eq!(
            field(&fields, "return_url"),
            Some("https://shop.example/checkout/success")
        );
        assert_eq!(field(&fields, "redirect_on_completion"), None);
        assert!(!fields.iter().any(|(name, _)| name.starts_with("line_items")));
    }

    #[test]
    fn empty_descriptions_are_left_out() -> TestResult {
        let mut product = Catalog::florist().resolve("rose-red")?;

        product.description = String::new();

        let lines = [PricedLine {
            product,
            quantity: 1,
        }];
        let fields = CreateSessionRequest::embedded(&lines, None).form_fields();

        assert_eq!(
            field(&fields, "line_items[0][price_data][product_data][description]"),
            None
        );

        Ok(())
    }
}
