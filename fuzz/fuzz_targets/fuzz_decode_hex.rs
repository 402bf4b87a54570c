#![no_main]
extern crate libfuzzer_sys;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = oid_converter::decode_hex(s);
        let _ = oid_converter::encode_dotted(s, oid_converter::OidKind::Absolute);
    }
});
