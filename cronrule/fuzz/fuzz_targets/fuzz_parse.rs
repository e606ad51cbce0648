#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parse should never panic, only return Ok or Err
        if let Ok(expr) = cronrule::CronExpression::parse(s) {
            // Pulling a few occurrences must terminate, even for unsatisfiable rules
            let start = jiff::civil::date(2024, 1, 1).at(0, 0, 0, 0);
            let _ = expr.next_n_after(start, 3);
        }
    }
});
