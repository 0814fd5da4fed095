// ============================================================================
// Basic Usage Example
// ============================================================================

use strongtypes::prelude::*;

// The harness declares its domains as indexes into the table below.
const LEVEL: TypeId = TypeId::new(0);
const COEF: TypeId = TypeId::new(1);
const STATE: TypeId = TypeId::new(2);

const STATE_ON: RawValue = 0;
const STATE_OFF: RawValue = 1;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Strong Types Example ===\n");

    // Declared once at startup, alive for the process lifetime.
    let table: &'static [TypeConfig] = Box::leak(
        vec![
            TypeConfig::integer(-999, 1000),
            TypeConfig::decimal(dec_raw(-3.2), dec_raw(3.2), 2),
            TypeConfig::nominal(2),
        ]
        .into_boxed_slice(),
    );
    configure(table);
    println!("Registered {} types\n", table.len());

    // Validated assignment: bad input is a status, never a corrupt value.
    println!("Setting LEVEL values...");
    let level = TypedValue::new(LEVEL);
    match level.set_integer(1001) {
        Ok(_) => println!("  1001 accepted?!"),
        Err(e) => println!("  1001 rejected: {}", e),
    }
    let level = level.set_integer(1000).expect("1000 is in range");
    println!("  stored: {}", level.to_text());

    // Fixed-point decimals truncate toward zero to the declared precision.
    println!("\nSetting COEF values...");
    let coef = TypedValue::new(COEF).set_decimal(3.1477).expect("in range");
    println!("  3.1477 stored as: {}", coef.to_text());

    // Arithmetic produces fresh values and reports precise failures.
    println!("\nArithmetic...");
    let other = TypedValue::new(COEF).set_decimal(-1.11).expect("in range");
    match coef.sum(other) {
        Ok(v) => println!("  3.14 + -1.11 = {}", v.to_text()),
        Err(e) => println!("  sum failed: {}", e),
    }
    match coef.mul(other) {
        Ok(v) => println!("  3.14 * -1.11 = {}", v.to_text()),
        Err(e) => println!("  3.14 * -1.11 rejected: {}", e),
    }

    // Nominal codes assign and compare, nothing else.
    println!("\nNominal state...");
    let on = TypedValue::new(STATE).set_nominal(STATE_ON).expect("valid code");
    let off = TypedValue::new(STATE).set_nominal(STATE_OFF).expect("valid code");
    println!("  on != off: {}", on != off);
    match on.sum(off) {
        Ok(_) => println!("  nominal sum accepted?!"),
        Err(e) => println!("  nominal sum rejected: {}", e),
    }
}
