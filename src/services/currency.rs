//! Money formatting with an injected currency symbol.

use std::sync::Arc;

/// Supplies the currency symbol to print in front of amounts.
pub trait CurrencyResolver: Send + Sync {
    fn symbol(&self) -> String;
}

/// A resolver that always answers with the same symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCurrency(pub String);

impl CurrencyResolver for FixedCurrency {
    fn symbol(&self) -> String {
        self.0.clone()
    }
}

impl<F> CurrencyResolver for F
where
    F: Fn() -> String + Send + Sync,
{
    fn symbol(&self) -> String {
        self()
    }
}

/// Format an amount in minor units, e.g. `123456` as `$1,234.56`.
pub fn format_currency(amount_minor: i64, resolver: &dyn CurrencyResolver) -> String {
    let sign = if amount_minor < 0 { "-" } else { "" };
    let abs = amount_minor.unsigned_abs();
    let major = abs / 100;
    let minor = abs % 100;
    format!(
        "{sign}{}{}.{minor:02}",
        resolver.symbol(),
        group_thousands(major)
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Cloneable handle bundling a resolver for view builders.
#[derive(Clone)]
pub struct CurrencyFormatter {
    resolver: Arc<dyn CurrencyResolver>,
}

impl std::fmt::Debug for CurrencyFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyFormatter")
            .field("symbol", &self.resolver.symbol())
            .finish()
    }
}

impl CurrencyFormatter {
    pub fn new(resolver: impl CurrencyResolver + 'static) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    pub fn fixed(symbol: impl Into<String>) -> Self {
        Self::new(FixedCurrency(symbol.into()))
    }

    pub fn format(&self, amount_minor: i64) -> String {
        format_currency(amount_minor, self.resolver.as_ref())
    }
}
