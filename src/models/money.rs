//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that summing line totals is
//! exact. Item files write prices as decimal numbers (`85.99`); the serde
//! impls convert between that representation and cents.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use wishlist::models::Money;
    /// let amount = Money::from_cents(8599); // 85.99
    /// assert_eq!(amount.units(), 85);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    ///
    /// Fails when the amount does not fit in `i64` cents.
    pub fn from_units_cents(units: i64, cents: i64) -> Result<Self, MoneyParseError> {
        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Self)
            .ok_or_else(|| MoneyParseError::OutOfRange(format!("{}.{:02}", units, cents)))
    }

    /// Create a Money amount from a decimal number, rounding to the nearest cent
    ///
    /// Non-finite values are rejected.
    pub fn from_decimal(value: f64) -> Result<Self, MoneyParseError> {
        if !value.is_finite() {
            return Err(MoneyParseError::NonFinite(value.to_string()));
        }
        let cents = (value * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return Err(MoneyParseError::OutOfRange(value.to_string()));
        }
        Ok(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Get the amount as a decimal number
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a plain decimal string
    ///
    /// Accepts formats: "10.50", "-10.50", "10", "10.5"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let amount = if let Some((units_str, cents_str)) = s.split_once('.') {
            if cents_str.contains('.') || !cents_str.chars().all(|c| c.is_ascii_digit()) {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let units: i64 = if units_str.is_empty() {
                0
            } else {
                units_str
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
            };

            // Pad or truncate cents to 2 digits
            let cents: i64 = match cents_str.len() {
                0 => 0,
                1 => {
                    cents_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => cents_str[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            Self::from_units_cents(units, cents)?
        } else {
            let units: i64 = s
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;
            Self::from_units_cents(units, 0)?
        };

        Ok(if negative { -amount } else { amount })
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&CurrencyFormat::default().format(*self))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

/// Price times quantity
///
/// Saturates at the `i64` bounds; item validation rejects prices where that
/// would happen.
impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, qty: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(qty)))
    }
}

impl Money {
    /// Price times quantity, or `None` on overflow
    pub fn checked_mul(self, qty: u32) -> Option<Self> {
        self.0.checked_mul(i64::from(qty)).map(Self)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawAmount {
            Whole(i64),
            Decimal(f64),
            Text(String),
        }

        let amount = match RawAmount::deserialize(deserializer)? {
            RawAmount::Whole(units) => Money::from_units_cents(units, 0),
            RawAmount::Decimal(value) => Money::from_decimal(value),
            RawAmount::Text(text) => Money::parse(&text),
        };
        amount.map_err(serde::de::Error::custom)
    }
}

/// Where the currency symbol goes relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// `€ 12,34`
    #[default]
    Before,
    /// `12,34 €`
    After,
}

/// A fixed currency and locale convention for rendering amounts
///
/// The default is euros in the Dutch convention: `€ 1.234,56`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Currency symbol
    pub symbol: String,

    /// Symbol placement
    #[serde(default)]
    pub symbol_position: SymbolPosition,

    /// Whether a space separates the symbol and the number
    #[serde(default = "default_true")]
    pub symbol_spacing: bool,

    /// Separator between whole units and cents
    pub decimal_separator: char,

    /// Thousands separator, if any
    #[serde(default)]
    pub group_separator: Option<char>,
}

fn default_true() -> bool {
    true
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::euro_nl()
    }
}

impl CurrencyFormat {
    /// Euros, Dutch locale (`€ 1.234,56`)
    pub fn euro_nl() -> Self {
        Self {
            symbol: "€".to_string(),
            symbol_position: SymbolPosition::Before,
            symbol_spacing: true,
            decimal_separator: ',',
            group_separator: Some('.'),
        }
    }

    /// US dollars (`$1,234.56`)
    pub fn us_dollar() -> Self {
        Self {
            symbol: "$".to_string(),
            symbol_position: SymbolPosition::Before,
            symbol_spacing: false,
            decimal_separator: '.',
            group_separator: Some(','),
        }
    }

    /// Render an amount with two decimal places
    pub fn format(&self, amount: Money) -> String {
        let mut number = String::new();
        if amount.is_negative() {
            number.push('-');
        }
        number.push_str(&self.group_digits(amount.units().unsigned_abs()));
        number.push(self.decimal_separator);
        number.push_str(&format!("{:02}", amount.cents_part()));

        let space = if self.symbol_spacing { " " } else { "" };
        match self.symbol_position {
            SymbolPosition::Before => format!("{}{}{}", self.symbol, space, number),
            SymbolPosition::After => format!("{}{}{}", number, space, self.symbol),
        }
    }

    /// Parse an amount previously rendered with this convention
    ///
    /// Plain decimal strings ("1234.56") are accepted as well.
    pub fn parse(&self, s: &str) -> Result<Money, MoneyParseError> {
        let trimmed = s.trim();
        let without_symbol = trimmed
            .strip_prefix(self.symbol.as_str())
            .or_else(|| trimmed.strip_suffix(self.symbol.as_str()))
            .unwrap_or(trimmed);

        let mut normalized = String::with_capacity(without_symbol.len());
        for c in without_symbol.chars() {
            if c.is_whitespace() || Some(c) == self.group_separator {
                continue;
            }
            if c == self.decimal_separator {
                normalized.push('.');
            } else {
                normalized.push(c);
            }
        }

        Money::parse(&normalized).map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))
    }

    fn group_digits(&self, units: u64) -> String {
        let digits = units.to_string();
        let Some(separator) = self.group_separator else {
            return digits;
        };

        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(separator);
            }
            out.push(c);
        }
        out
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    NonFinite(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::NonFinite(s) => write!(f, "Amount is not a finite number: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount is too large: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(8599);
        assert_eq!(m.cents(), 8599);
        assert_eq!(m.units(), 85);
        assert_eq!(m.cents_part(), 99);
    }

    #[test]
    fn test_from_decimal_rounds_to_cent() {
        assert_eq!(Money::from_decimal(85.99).unwrap().cents(), 8599);
        assert_eq!(Money::from_decimal(224.9).unwrap().cents(), 22490);
        assert_eq!(Money::from_decimal(310.49).unwrap().cents(), 31049);
        assert!(Money::from_decimal(f64::NAN).is_err());
        assert!(Money::from_decimal(f64::INFINITY).is_err());
    }

    #[test]
    fn test_display_uses_euro_convention() {
        assert_eq!(Money::from_cents(797129).to_string(), "€ 7.971,29");
        assert_eq!(Money::from_cents(0).to_string(), "€ 0,00");
        assert_eq!(Money::from_cents(5).to_string(), "€ 0,05");
        assert_eq!(Money::from_cents(-1050).to_string(), "€ -10,50");
        assert_eq!(Money::from_cents(123456789).to_string(), "€ 1.234.567,89");
    }

    #[test]
    fn test_other_conventions() {
        let usd = CurrencyFormat::us_dollar();
        assert_eq!(usd.format(Money::from_cents(123456)), "$1,234.56");

        let suffix = CurrencyFormat {
            symbol_position: SymbolPosition::After,
            group_separator: None,
            ..CurrencyFormat::euro_nl()
        };
        assert_eq!(suffix.format(Money::from_cents(123456)), "1234,56 €");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
        assert_eq!((Money::from_cents(39900) * 16).cents(), 638400);
        assert_eq!((Money::from_cents(8599) * 0).cents(), 0);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(i64::MAX / 2 + 1);

        assert_eq!((big * 2).cents(), i64::MAX);
        assert_eq!((big + big).cents(), i64::MAX);
        assert_eq!((-big - big).cents(), i64::MIN);
        assert_eq!(big.checked_mul(2), None);
        assert_eq!(big.checked_mul(1), Some(big));
    }

    #[test]
    fn test_large_amounts_are_rejected() {
        assert!(matches!(
            Money::from_units_cents(100_000_000_000_000_000, 0),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::from_decimal(1e20),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("100000000000000000"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(Money::parse("100000000000000000.50").is_err());

        let yaml: Result<Money, _> = serde_yaml::from_str("100000000000000000");
        assert!(yaml.is_err());
        let json: Result<Money, _> = serde_json::from_str("1e20");
        assert!(json.is_err());

        assert_eq!(Money::from_units_cents(12, 34).unwrap().cents(), 1234);
        assert_eq!(Money::from_decimal(1e15).unwrap().cents(), 100_000_000_000_000_000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert!(Money::parse("").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("abc").is_err());
    }

    #[test]
    fn test_formatted_amounts_parse_back() {
        let eur = CurrencyFormat::euro_nl();
        for cents in [0, 5, 8599, 797129, -1050, 123456789] {
            let amount = Money::from_cents(cents);
            assert_eq!(eur.parse(&eur.format(amount)).unwrap(), amount);
        }

        let usd = CurrencyFormat::us_dollar();
        assert_eq!(usd.parse("$1,234.56").unwrap().cents(), 123456);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization_as_decimal() {
        let m = Money::from_cents(8599);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "85.99");

        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);

        let whole: Money = serde_json::from_str("399").unwrap();
        assert_eq!(whole.cents(), 39900);

        let text: Money = serde_json::from_str("\"15.99\"").unwrap();
        assert_eq!(text.cents(), 1599);
    }
}
