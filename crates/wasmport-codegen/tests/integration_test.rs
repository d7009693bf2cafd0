//! End-to-end generation tests: assemble a real module, analyze it,
//! generate both loader flavors, and check the emitted contracts.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use wasmport_analyzer::analyze;
use wasmport_codegen::{LoaderGenerator, LoaderPayload};
use wasmport_core::AssetReference;

fn fixture() -> Vec<u8> {
    wat::parse_str(
        r#"
        (module
            (import "env" "log" (func $log (param i32)))
            (func (export "add") (param i32 i32) (result i32)
                local.get 0
                local.get 1
                i32.add))
        "#,
    )
    .unwrap()
}

/// Extracts the base64 literal embedded in a sync loader.
fn embedded_base64(source: &str) -> &str {
    let marker = "const base64 = \"";
    let start = source.find(marker).expect("no base64 literal") + marker.len();
    let len = source[start..].find('"').expect("unterminated literal");
    &source[start..start + len]
}

#[test]
fn sync_loader_round_trips_the_binary() {
    let wasm = fixture();
    let interface = analyze(&wasm).unwrap();
    let generator = LoaderGenerator::new().unwrap();

    let source = generator
        .generate(&interface, &LoaderPayload::Embedded(&wasm))
        .unwrap();

    let decoded = STANDARD.decode(embedded_base64(&source)).unwrap();
    assert_eq!(decoded, wasm);
}

#[test]
fn sync_loader_contains_scenario_statements() {
    let wasm = fixture();
    let interface = analyze(&wasm).unwrap();
    let generator = LoaderGenerator::new().unwrap();

    let source = generator
        .generate(&interface, &LoaderPayload::Embedded(&wasm))
        .unwrap();

    assert!(source.contains("import * as env from 'env';"));
    assert!(source.contains("export const add = instance.exports.add;"));
}

#[test]
fn async_loader_references_token_and_embeds_nothing() {
    let wasm = fixture();
    let interface = analyze(&wasm).unwrap();
    let generator = LoaderGenerator::new().unwrap();
    let asset = AssetReference::new("module.wasm");

    let source = generator
        .generate(&interface, &LoaderPayload::Asset(&asset))
        .unwrap();

    assert!(source.contains("fetch("));
    assert!(source.contains("module.wasm"));
    assert!(source.contains("export default"));
    assert!(!source.contains("base64"));
    assert!(!source.contains(&STANDARD.encode(&wasm)));
}

#[test]
fn async_loader_size_is_independent_of_binary_size() {
    // Same interface, very different payload sizes: a data segment pads
    // the second module without touching imports or exports.
    let small = fixture();
    let large = wat::parse_str(format!(
        r#"
        (module
            (import "env" "log" (func $log (param i32)))
            (memory 1)
            (data (i32.const 0) "{}")
            (func (export "add") (param i32 i32) (result i32)
                local.get 0
                local.get 1
                i32.add))
        "#,
        "x".repeat(4096)
    ))
    .unwrap();
    assert!(large.len() > small.len() + 4000);

    let generator = LoaderGenerator::new().unwrap();
    let asset = AssetReference::new("module.wasm");

    let from_small = generator
        .generate(&analyze(&small).unwrap(), &LoaderPayload::Asset(&asset))
        .unwrap();
    let from_large = generator
        .generate(&analyze(&large).unwrap(), &LoaderPayload::Asset(&asset))
        .unwrap();

    assert_eq!(from_small.len(), from_large.len());
}
