//! Currency codes.

use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};

/// A three-letter uppercase currency code (e.g., "USD", "CHF").
///
/// Stored inline so that `Currency` and `Money` stay `Copy`. Construction
/// always validates, so the bytes are guaranteed to be ASCII uppercase letters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency([u8; 3]);

impl Currency {
    /// US Dollar
    pub const USD: Self = Self(*b"USD");
    /// Swiss Franc
    pub const CHF: Self = Self(*b"CHF");
    /// Euro
    pub const EUR: Self = Self(*b"EUR");

    /// Parses a currency code, accepting lowercase input.
    ///
    /// Fails with [`MoneyError::InvalidCurrency`] unless the code is exactly
    /// three ASCII letters, with no surrounding whitespace.
    pub fn new(code: &str) -> MoneyResult<Self> {
        match code.as_bytes() {
            &[a, b, c] if [a, b, c].iter().all(u8::is_ascii_alphabetic) => Ok(Self([
                a.to_ascii_uppercase(),
                b.to_ascii_uppercase(),
                c.to_ascii_uppercase(),
            ])),
            _ => Err(MoneyError::InvalidCurrency(code.to_string())),
        }
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Currency({})", self.as_str())
    }
}

impl std::str::FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.as_str().to_string()
    }
}
