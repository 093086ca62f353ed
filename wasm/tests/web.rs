//! Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use final_tap_wasm::{calculate_bmi, format_remaining, score_habits};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn bmi_is_computed() {
    assert!((calculate_bmi(70.0, 175.0) - 22.86).abs() < 0.1);
}

#[wasm_bindgen_test]
fn zero_years_end_today() {
    let json = format_remaining(0.0, "2026-10-19").unwrap();
    assert!(json.contains("\"endDate\":\"2026-10-19\""));
}

#[wasm_bindgen_test]
fn bad_json_is_an_error() {
    assert!(score_habits("not json", "2026-10-19").is_err());
}
