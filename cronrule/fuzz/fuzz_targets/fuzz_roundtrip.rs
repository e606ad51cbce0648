#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(expr) = cronrule::CronExpression::parse(s) {
            let encoded = expr.encode();
            let reparsed = cronrule::CronExpression::parse(&encoded)
                .expect("encoded output must be parseable");
            assert_eq!(expr, reparsed, "encode/parse roundtrip failed");
            assert_eq!(encoded, reparsed.encode(), "encode is not idempotent");
        }
    }
});
