//! Project a recurring transaction over a year from a cadence.

use cronrule::{Cadence, CronExpression};
use jiff::civil::date;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let first_payment = date(2025, 1, 31).at(9, 0, 0, 0);
    let year_end = date(2025, 12, 31).at(23, 59, 0, 0);

    for cadence in [Cadence::Weekly, Cadence::Monthly, Cadence::Yearly] {
        let rule = CronExpression::from_cadence(cadence, first_payment);
        let dates: Vec<_> = rule.between(first_payment, year_end).collect();
        println!("{cadence:>8}: {rule}  ->  {} occurrences", dates.len());
        if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
            println!("          first {first}, last {last}");
        }
    }

    // Stored rules are plain cron text; paginate through them on demand
    let stored = "0 9 1 */3 *";
    let rule: CronExpression = stored.parse()?;
    let page = rule.next_n_after(first_payment, 4);
    println!("\nquarterly '{stored}':");
    for dt in page {
        println!("  {dt}");
    }

    Ok(())
}
