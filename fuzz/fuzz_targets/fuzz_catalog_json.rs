#![no_main]

use beatgen_spec::{FallbackPolicy, PresetCatalog};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(catalog) = PresetCatalog::from_json(json) else {
        return;
    };

    // Every listed key must resolve, and resolved specs must be valid.
    for info in catalog.iter() {
        let spec = catalog
            .resolve(info.key)
            .expect("listed key must resolve");
        assert_eq!(spec, info.spec);
        spec.validate().expect("resolved spec must be valid");
    }

    let _ = catalog.resolve_with("", &FallbackPolicy::CatalogDefault);
});
