#![no_main]
use libfuzzer_sys::fuzz_target;
use scsv::{Options, parse_str, to_csv_string};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let opts = Options::default();
        if let Ok(first) = parse_str(input, &opts) {
            let csv = to_csv_string(&first);
            // flow markers, stray carriage returns and bare resets would be reinterpreted
            if csv.contains(['|', '\r']) || csv.lines().any(|l| l == "--") {
                return;
            }
            match parse_str(&csv, &opts) {
                Ok(second) => {
                    if first != second {
                        panic!("CSV roundtrip mismatch!\nInput: {input:?}\nCSV: {csv:?}\nFirst: {first:?}\nSecond: {second:?}");
                    }
                }
                Err(e) => panic!("Failed to reparse CSV!\nInput: {input:?}\nCSV: {csv:?}\nError: {e}"),
            }
        }
    }
});
