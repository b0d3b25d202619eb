// 🎬 Driver - the fixed script exercising all four concepts in order
//
// Every section returns its output lines instead of printing, so the exact
// sequence is assertable; the binary prints them.

use crate::account::{AccountError, BankAccount};
use crate::payment::Payment;
use crate::shape::{ColoredShape, Shape};
use crate::vehicle::Vehicle;

/// Encapsulation: open an account, deposit 10000, withdraw 200
pub fn encapsulation_demo() -> Result<Vec<String>, AccountError> {
    let mut account = BankAccount::open();

    Ok(vec![account.deposit(10000.0)?, account.withdraw(200.0)?])
}

/// Abstraction: car start / shared fuel status / stop, then scooter start / stop
pub fn abstraction_demo() -> Vec<String> {
    let car = Vehicle::Car;
    let scooter = Vehicle::ElectricScooter;

    vec![
        car.start().to_string(),
        car.fuel_status().to_string(),
        car.stop().to_string(),
        scooter.start().to_string(),
        scooter.stop().to_string(),
    ]
}

/// Inheritance: three payments, transaction id + report each,
/// blank separator line between blocks
pub fn inheritance_demo() -> Vec<String> {
    let mut payments = vec![
        Payment::credit_card(150.75, "**** **** **** 1234"),
        Payment::paypal(89.99, "user@example.com"),
        Payment::bank_transfer(500.00, "1234567890"),
    ];

    let mut lines = Vec::new();
    let last = payments.len() - 1;

    for (i, payment) in payments.iter_mut().enumerate() {
        lines.push(payment.generate_transaction_id());
        lines.extend(payment.process_payment());
        if i < last {
            lines.push(String::new());
        }
    }

    lines
}

/// Polymorphism: heterogeneous shape list drawn in sequence
pub fn polymorphism_demo() -> Vec<String> {
    let shapes = vec![
        ColoredShape::with_color(Shape::Circle { radius: 5.0 }, "Red"),
        ColoredShape::with_color(
            Shape::Rectangle {
                width: 10.0,
                height: 4.0,
            },
            "Blue",
        ),
        ColoredShape::with_color(
            Shape::Triangle {
                base: 8.0,
                height: 6.0,
            },
            "Green",
        ),
    ];

    shapes.iter().map(|shape| shape.draw()).collect()
}

/// The full script, all four sections in their fixed order
pub fn run() -> Result<Vec<String>, AccountError> {
    let mut lines = encapsulation_demo()?;
    lines.extend(abstraction_demo());
    lines.extend(inheritance_demo());
    lines.extend(polymorphism_demo());
    Ok(lines)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encapsulation_section() {
        let lines = encapsulation_demo().unwrap();
        assert_eq!(
            lines,
            vec![
                "Deposited amount: 10000 and Current Balance is: 10000",
                "Withdrawal Amount: 200 and Available Balance: 9800",
            ]
        );
    }

    #[test]
    fn test_abstraction_section() {
        let lines = abstraction_demo();
        assert_eq!(
            lines,
            vec![
                "Car started with key ignition.",
                "Fuel level: OK",
                "Car stopped safely.",
                "Scooter started with a power button.",
                "Scooter powered off.",
            ]
        );
    }

    #[test]
    fn test_inheritance_section() {
        let lines = inheritance_demo();
        assert_eq!(lines.len(), 14);

        // Each block starts with a freshly generated transaction id
        for idx in [0, 5, 10] {
            let id = lines[idx].strip_prefix("Transaction Id: ").unwrap();
            assert!(uuid::Uuid::parse_str(id).is_ok());
        }

        // The three ids are distinct
        assert_ne!(lines[0], lines[5]);
        assert_ne!(lines[5], lines[10]);
        assert_ne!(lines[0], lines[10]);

        assert_eq!(lines[1], "Processing Credit Card Payment...");
        assert_eq!(lines[2], "Charging card: **** **** **** 1234");
        assert_eq!(lines[3], "Amount: $150.75");
        assert_eq!(lines[4], "");

        assert_eq!(lines[6], "Processing PayPal Payment...");
        assert_eq!(lines[7], "Paying through account: user@example.com");
        assert_eq!(lines[8], "Amount: $89.99");
        assert_eq!(lines[9], "");

        assert_eq!(lines[11], "Processing Bank Transfer...");
        assert_eq!(lines[12], "Transferring from account: 1234567890");
        assert_eq!(lines[13], "Amount: $500.00");
    }

    #[test]
    fn test_polymorphism_section() {
        let lines = polymorphism_demo();
        assert_eq!(
            lines,
            vec![
                "Drawing a Red Circle with radius 5",
                "Drawing a Blue Rectangle with width 10 and height 4",
                "Drawing a Green Triangle with base 8 and height 6",
            ]
        );
    }

    #[test]
    fn test_full_script_order() {
        let lines = run().unwrap();
        assert_eq!(lines.len(), 24);

        // Sections appear in their fixed order
        assert_eq!(lines[0], "Deposited amount: 10000 and Current Balance is: 10000");
        assert_eq!(lines[1], "Withdrawal Amount: 200 and Available Balance: 9800");
        assert_eq!(lines[2], "Car started with key ignition.");
        assert_eq!(lines[6], "Scooter powered off.");
        assert!(lines[7].starts_with("Transaction Id: "));
        assert_eq!(lines[10], "Amount: $150.75");
        assert_eq!(lines[20], "Amount: $500.00");
        assert_eq!(lines[21], "Drawing a Red Circle with radius 5");
        assert_eq!(lines[23], "Drawing a Green Triangle with base 8 and height 6");
    }
}
