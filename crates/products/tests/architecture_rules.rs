//! Architecture rules checked against the real product catalog sources.

use std::path::Path;

use architecture_lint::{lint_crate_sources, Rules};

#[test]
fn product_sources_follow_layer_rules() {
    let src = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/src"));
    let result = lint_crate_sources(src, &Rules::products());
    assert!(result.is_ok(), "{}", result.unwrap_err());
}
