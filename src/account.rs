// 🏦 Bank Account - Encapsulation
// Balance is private state; the only way to change it is deposit/withdraw
//
// Invariants:
// - Balance never goes negative
// - A failed operation leaves the balance untouched
// - Withdrawing the exact balance counts as insufficient funds

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ACCOUNT ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum AccountError {
    /// Deposit or withdrawal with a non-positive amount
    InvalidAmount { amount: f64 },

    /// Withdrawal that would drain or overdraw the account
    InsufficientFunds { requested: f64, available: f64 },
}

impl std::fmt::Display for AccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountError::InvalidAmount { amount } => {
                write!(f, "Invalid amount {}: amount must be positive", amount)
            }
            AccountError::InsufficientFunds {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Insufficient balance: requested {} but only {} available",
                    requested, available
                )
            }
        }
    }
}

impl std::error::Error for AccountError {}

// ============================================================================
// BANK ACCOUNT
// ============================================================================

/// Bank account with an encapsulated balance.
///
/// The balance field is private on purpose: callers read it through
/// `balance()` and mutate it only through `deposit`/`withdraw`, so the
/// non-negative invariant holds for the whole lifetime of the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankAccount {
    balance: f64,
    opened_at: DateTime<Utc>,
}

impl BankAccount {
    /// Open a new account with zero balance
    pub fn open() -> Self {
        BankAccount {
            balance: 0.0,
            opened_at: Utc::now(),
        }
    }

    /// Current balance (read-only)
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// When the account was opened
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Deposit a positive amount; returns the confirmation line
    pub fn deposit(&mut self, amount: f64) -> Result<String, AccountError> {
        if amount <= 0.0 {
            return Err(AccountError::InvalidAmount { amount });
        }

        self.balance += amount;
        Ok(format!(
            "Deposited amount: {} and Current Balance is: {}",
            amount, self.balance
        ))
    }

    /// Withdraw a positive amount strictly below the current balance;
    /// returns the confirmation line.
    ///
    /// Withdrawing the exact balance is rejected as insufficient funds.
    pub fn withdraw(&mut self, amount: f64) -> Result<String, AccountError> {
        if amount <= 0.0 {
            return Err(AccountError::InvalidAmount { amount });
        }

        if amount >= self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        Ok(format!(
            "Withdrawal Amount: {} and Available Balance: {}",
            amount, self.balance
        ))
    }
}

impl Default for BankAccount {
    fn default() -> Self {
        Self::open()
    }
}

// ============================================================================
// TESTS
// ============================================================================
