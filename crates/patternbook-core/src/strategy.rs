//! Payment selection with interchangeable strategies.

use crate::{ThisError, log, log::Topic};
use std::fmt::{self, Display};

///
/// PaymentError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum PaymentError {
    #[error("invalid card: {0}")]
    InvalidCard(String),

    #[error("invalid email: {0}")]
    InvalidEmail(String),

    #[error("no payment method selected")]
    NoStrategy,

    #[error("payment amount must be greater than zero")]
    ZeroAmount,
}

///
/// Amount
/// Money in whole cents.
///

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Amount(u64);

impl Amount {
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

///
/// Receipt
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Receipt {
    pub method: &'static str,
    pub amount: Amount,
    /// Masked account reference; never the raw card number.
    pub reference: String,
}

///
/// PaymentStrategy
///

pub trait PaymentStrategy {
    fn name(&self) -> &'static str;
    fn pay(&self, amount: Amount) -> Result<Receipt, PaymentError>;
}

///
/// CreditCardPayment
///

#[derive(Debug)]
pub struct CreditCardPayment {
    card_number: String,
    holder: String,
    cvv: String,
}

impl CreditCardPayment {
    pub fn new(
        card_number: impl Into<String>,
        holder: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Result<Self, PaymentError> {
        let card_number = card_number.into();
        let cvv = cvv.into();

        if !(12..=19).contains(&card_number.len()) || !is_digits(&card_number) {
            return Err(PaymentError::InvalidCard(
                "card number must be 12-19 digits".into(),
            ));
        }
        if !(3..=4).contains(&cvv.len()) || !is_digits(&cvv) {
            return Err(PaymentError::InvalidCard("cvv must be 3-4 digits".into()));
        }

        Ok(Self {
            card_number,
            holder: holder.into(),
            cvv,
        })
    }

    /// First and last four digits with the middle hidden.
    #[must_use]
    pub fn masked_number(&self) -> String {
        let n = &self.card_number;

        format!("{}****{}", &n[..4], &n[n.len() - 4..])
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn name(&self) -> &'static str {
        "Credit Card"
    }

    fn pay(&self, amount: Amount) -> Result<Receipt, PaymentError> {
        let masked = self.masked_number();

        log!(Topic::Strategy, Info, "💳 Processing credit card payment");
        log!(Topic::Strategy, Info, "   Card: {masked}");
        log!(Topic::Strategy, Info, "   Holder: {}", self.holder);
        log!(Topic::Strategy, Info, "   Amount: {amount}");
        log!(Topic::Strategy, Info, "   CVV: {}", "*".repeat(self.cvv.len()));
        log!(Topic::Strategy, Ok, "   ✅ Credit card payment successful!");

        Ok(Receipt {
            method: self.name(),
            amount,
            reference: masked,
        })
    }
}

///
/// PayPalPayment
///

#[derive(Debug)]
pub struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>) -> Result<Self, PaymentError> {
        let email = email.into();

        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(Self { email }),
            _ => Err(PaymentError::InvalidEmail(email)),
        }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn name(&self) -> &'static str {
        "PayPal"
    }

    fn pay(&self, amount: Amount) -> Result<Receipt, PaymentError> {
        log!(Topic::Strategy, Info, "📧 Processing PayPal payment");
        log!(Topic::Strategy, Info, "   Email: {}", self.email);
        log!(Topic::Strategy, Info, "   Amount: {amount}");
        log!(Topic::Strategy, Ok, "   ✅ PayPal payment successful!");

        Ok(Receipt {
            method: self.name(),
            amount,
            reference: self.email.clone(),
        })
    }
}

///
/// PaymentContext
///
/// Holds the currently selected strategy; swapping it takes effect on the
/// next `process` call.
///

#[derive(Default)]
pub struct PaymentContext {
    strategy: Option<Box<dyn PaymentStrategy>>,
}

impl PaymentContext {
    #[must_use]
    pub const fn new() -> Self {
        Self { strategy: None }
    }

    pub fn set_strategy(&mut self, strategy: impl PaymentStrategy + 'static) {
        self.strategy = Some(Box::new(strategy));
    }

    #[must_use]
    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.as_ref().map(|s| s.name())
    }

    pub fn process(&self, amount: Amount) -> Result<Receipt, PaymentError> {
        let Some(strategy) = &self.strategy else {
            log!(Topic::Strategy, Warn, "❌ No payment method selected!");
            return Err(PaymentError::NoStrategy);
        };

        if amount.cents() == 0 {
            return Err(PaymentError::ZeroAmount);
        }

        log!(Topic::Strategy, Info, "💳 Using {} payment method", strategy.name());
        strategy.pay(amount)
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

///
/// TESTS
///
