#![no_main]
extern crate libfuzzer_sys;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // anything that decodes must survive a re-encoding
    if let Ok(oid) = oid_converter::decode_oid(data) {
        if let Ok(bytes) = oid.to_ber() {
            let _ = oid_converter::decode_oid(&bytes).expect("re-encoded OID must decode");
        }
    }
});
