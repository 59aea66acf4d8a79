use chrono::{DateTime, Utc};
use thiserror::Error;

use super::Cents;

pub type AccountNumber = i64;

/// Names longer than this are truncated on creation.
pub const NAME_MAX_LEN: usize = 49;

/// The single in-memory account a session operates on.
///
/// Number and name are fixed at creation; only the balance changes, and only
/// through [`Account::deposit`] and [`Account::withdraw`], which keep it
/// non-negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    number: AccountNumber,
    name: String,
    balance: Cents,
    opened_at: DateTime<Utc>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Insufficient funds: balance {balance}, required {required}")]
    InsufficientFunds { balance: Cents, required: Cents },

    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Cents),

    #[error("Deposit of {amount} would overflow balance {balance}")]
    BalanceOverflow { balance: Cents, amount: Cents },
}

impl Account {
    pub fn new(number: AccountNumber, name: impl Into<String>) -> Self {
        let name: String = name.into();
        let name = match name.char_indices().nth(NAME_MAX_LEN) {
            Some((idx, _)) => name[..idx].to_string(),
            None => name,
        };

        Self {
            number,
            name,
            balance: 0,
            opened_at: Utc::now(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Add `amount` to the balance. Returns the new balance.
    pub fn deposit(&mut self, amount: Cents) -> Result<Cents, AccountError> {
        ensure_positive(amount)?;
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::BalanceOverflow {
                balance: self.balance,
                amount,
            })?;
        Ok(self.balance)
    }

    /// Subtract `amount` from the balance if it is covered. Returns the new balance.
    pub fn withdraw(&mut self, amount: Cents) -> Result<Cents, AccountError> {
        ensure_positive(amount)?;
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                balance: self.balance,
                required: amount,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}

fn ensure_positive(amount: Cents) -> Result<(), AccountError> {
    if amount <= 0 {
        return Err(AccountError::NonPositiveAmount(amount));
    }
    Ok(())
}
