//! Fuzz target for rule catalog parsing and resolution.
//!
//! Goal: Parsing and resolving a catalog should **never panic** on any input.
//! Malformed catalogs must come back as errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_catalog_parser
//! ```

#![no_main]

use bursar_settings::{Overrides, parse_catalog_json, parse_catalog_toml, resolve_catalog};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(cfg) = parse_catalog_toml(text) {
            let _ = resolve_catalog(cfg, Overrides::default());
        }
        if let Ok(cfg) = parse_catalog_json(text) {
            let _ = resolve_catalog(cfg, Overrides::default());
        }
    }
});
