use denary::{Decimal, DecimalResult};

fn main() -> DecimalResult<()> {
    println!("=== Ledger Demo ===\n");

    // Line items priced exactly, no binary float in sight
    let lines = [("widgets", "19.99", 3), ("gaskets", "0.45", 120), ("freight", "112.50", 1)];

    let mut subtotal = Decimal::zero();
    for (name, unit_price, quantity) in lines {
        let price: Decimal = unit_price.parse()?;
        let extended = price.multiplied_by(quantity)?;
        println!("  {name:<10} {quantity:>4} x {unit_price:>8} = {extended:>10}");
        subtotal = subtotal.plus(&extended)?;
    }
    println!("  {:<10} {:>28}", "subtotal", subtotal.to_fixed(2));

    let tax = subtotal.multiplied_by("0.0825")?;
    let total = subtotal.plus(&tax)?;
    println!("  {:<10} {:>28}", "tax 8.25%", tax.to_fixed(2));
    println!("  {:<10} {:>28}\n", "total", total.to_fixed(2));

    println!("=== Precision Demo ===\n");

    // The classic float trap, exact in decimal
    let a: Decimal = "0.1".parse()?;
    let b: Decimal = "0.2".parse()?;
    println!("  0.1 + 0.2       = {}", a.plus(&b)?);

    // Division carries at least 20 fractional digits
    let third = Decimal::from(1).divided_by(3)?;
    println!("  1 / 3           = {third}");
    println!("  1 / 3 to_fixed  = {}", third.to_fixed(4));

    // Equality spans internal scales
    let narrow: Decimal = "123456.789".parse()?;
    let wide = narrow.with_scale(6);
    println!(
        "  123456.789000 == 123456.789 -> {} (scales {} and {})",
        wide == narrow,
        wide.scale(),
        narrow.scale()
    );

    Ok(())
}
