// 💳 Payment - Inheritance
// Shared wrapper (amount + transaction id) over method-specific variants
//
// The transaction id starts unset; GenerateTransactionId assigns a fresh
// UUID each call (a second call overwrites). ProcessPayment only reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// PAYMENT METHOD
// ============================================================================

/// Payment method variants, each carrying only its own identifier.
///
/// Card numbers are stored pre-masked (e.g. "**** **** **** 1234"); the
/// report prints the identifier verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PaymentMethod {
    CreditCard { card_number: String },
    PayPal { email: String },
    BankTransfer { account_number: String },
}

impl PaymentMethod {
    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard { .. } => "CreditCard",
            PaymentMethod::PayPal { .. } => "PayPal",
            PaymentMethod::BankTransfer { .. } => "BankTransfer",
        }
    }
}

// ============================================================================
// PAYMENT
// ============================================================================

/// A payment: fixed amount, a method, and an optional transaction id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    amount: f64,
    method: PaymentMethod,
    transaction_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl Payment {
    /// Create a payment with no transaction id yet
    pub fn new(amount: f64, method: PaymentMethod) -> Self {
        Payment {
            amount,
            method,
            transaction_id: None,
            created_at: Utc::now(),
        }
    }

    /// Credit card payment (card number should already be masked)
    pub fn credit_card(amount: f64, card_number: &str) -> Self {
        Payment::new(
            amount,
            PaymentMethod::CreditCard {
                card_number: card_number.to_string(),
            },
        )
    }

    /// PayPal payment
    pub fn paypal(amount: f64, email: &str) -> Self {
        Payment::new(
            amount,
            PaymentMethod::PayPal {
                email: email.to_string(),
            },
        )
    }

    /// Bank transfer payment
    pub fn bank_transfer(amount: f64, account_number: &str) -> Self {
        Payment::new(
            amount,
            PaymentMethod::BankTransfer {
                account_number: account_number.to_string(),
            },
        )
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn method(&self) -> &PaymentMethod {
        &self.method
    }

    /// Transaction id, if one has been generated
    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Assign a fresh UUID v4 transaction id; returns the announcement line.
    /// Calling again overwrites the previous id.
    pub fn generate_transaction_id(&mut self) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.transaction_id = Some(id.clone());
        format!("Transaction Id: {}", id)
    }

    /// Render the processing report for this payment's method.
    /// Reads only; no state is mutated.
    pub fn process_payment(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(3);

        match &self.method {
            PaymentMethod::CreditCard { card_number } => {
                lines.push("Processing Credit Card Payment...".to_string());
                lines.push(format!("Charging card: {}", card_number));
            }
            PaymentMethod::PayPal { email } => {
                lines.push("Processing PayPal Payment...".to_string());
                lines.push(format!("Paying through account: {}", email));
            }
            PaymentMethod::BankTransfer { account_number } => {
                lines.push("Processing Bank Transfer...".to_string());
                lines.push(format!("Transferring from account: {}", account_number));
            }
        }

        lines.push(format!("Amount: ${:.2}", self.amount));
        lines
    }
}

// ============================================================================
// TESTS
// ============================================================================
