use anyhow::Result;

use four_pillars::driver;

fn main() -> Result<()> {
    println!("🎓 Four Pillars of OOP - Demo Script");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Encapsulation
    println!("\n🏦 Encapsulation: bank account");
    for line in driver::encapsulation_demo()? {
        println!("{}", line);
    }

    // 2. Abstraction
    println!("\n🚗 Abstraction: vehicles");
    for line in driver::abstraction_demo() {
        println!("{}", line);
    }

    // 3. Inheritance
    println!("\n💳 Inheritance: payment methods");
    for line in driver::inheritance_demo() {
        println!("{}", line);
    }

    // 4. Polymorphism
    println!("\n🔺 Polymorphism: shapes");
    for line in driver::polymorphism_demo() {
        println!("{}", line);
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✅ All four concepts exercised");

    Ok(())
}
