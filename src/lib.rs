// Four Pillars - Core Library
// Exposes the four demo domains for use in the console driver and tests

pub mod account;
pub mod driver;
pub mod payment;
pub mod shape;
pub mod vehicle;

// Re-export commonly used types
pub use account::{AccountError, BankAccount};
pub use payment::{Payment, PaymentMethod};
pub use shape::{ColoredShape, Shape, DEFAULT_COLOR};
pub use vehicle::Vehicle;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
