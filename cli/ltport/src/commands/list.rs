//! `ltport list` — every port the resolver knows.

use anyhow::Result;

use ltport::VariantId;

/// Print the port table.
pub fn run() -> Result<()> {
    println!("Ports:");
    println!();
    for variant in VariantId::ALL {
        println!("  {:<16} {}", variant.name(), variant.description());
    }
    println!();
    println!("Platform ports also accept a version suffix, e.g. 'mac-leopard'.");
    Ok(())
}
