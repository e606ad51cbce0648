//! Basic cronrule API walkthrough: parse, generate, match, encode.

use cronrule::CronExpression;
use jiff::civil::date;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse a cron expression; names are accepted in place of numbers
    let expr: CronExpression = "30 10 * * mon".parse()?;
    println!("Parsed: {expr}");

    // Compute the next occurrence
    let now = date(2025, 6, 15).at(8, 0, 0, 0);
    if let Some(next) = expr.next_after(now) {
        println!("Next occurrence after {now}: {next}");
    }

    // Every occurrence in a bounded window
    let end = date(2025, 7, 31).at(23, 59, 0, 0);
    println!("\nOccurrences until {end}:");
    for dt in expr.between(now, end) {
        println!("  {dt}");
    }

    // Check if a datetime matches the expression
    let monday = date(2025, 6, 16).at(10, 30, 0, 0);
    println!("\n{monday} matches: {}", expr.matches(monday));

    // Invalid input reports the failing field
    if let Err(e) = CronExpression::parse("0 25 * * *") {
        println!("\n{}", e.display_rich());
    }

    // Encoding roundtrips through parsing
    let roundtripped: CronExpression = expr.encode().parse()?;
    assert_eq!(expr, roundtripped);
    println!("\nRoundtrip: {roundtripped}");

    Ok(())
}
