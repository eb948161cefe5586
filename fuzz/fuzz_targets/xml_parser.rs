#![no_main]
use libfuzzer_sys::fuzz_target;
use xml2yaml::test_utils::parse_both;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (manual, pattern) = parse_both(s);
        assert_eq!(manual, pattern);
    }
});
