#![no_main]
use libfuzzer_sys::fuzz_target;
use scsv::{Options, parse_reader, parse_str};

fuzz_target!(|data: &[u8]| {
    let opts = Options::strict();
    let from_reader = parse_reader(data, &opts);
    if let Ok(s) = std::str::from_utf8(data) {
        match (parse_str(s, &opts), from_reader) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(a), Err(b)) => assert_eq!(a.line(), b.line()),
            (a, b) => panic!("str and reader disagree: {a:?} vs {b:?}"),
        }
    }
});
