//! WASM bindings for the impact effects calculator.
//!
//! Exposes the pure impact pipeline to the browser front-end using
//! `wasm-bindgen` and `serde-wasm-bindgen`. Geocoding, catalog lookups and
//! map drawing stay on the JavaScript side; results come back as plain
//! objects with `null` for absent values.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { run_full_impact, estimate_diameter_km } from 'impact-wasm';
//!
//! await init();
//!
//! const diameterKm = estimate_diameter_km(22.0, 0.15);
//! const result = run_full_impact(diameterKm * 1000, 20000, false);
//! console.log(`Crater: ${result.effects.crater_diameter_km.toFixed(1)} km`);
//! ```

use wasm_bindgen::prelude::*;

mod pipeline;
mod site;

// Numeric aliases documenting the units of plain number fields
#[wasm_bindgen(typescript_custom_section)]
const TS_UNIT_TYPES: &'static str = r#"
/** Length in meters */
export type Meters = number;
/** Length in kilometers */
export type Kilometers = number;
/** Speed in meters per second */
export type MetersPerSecond = number;
/** Energy in megatons of TNT */
export type Megatons = number;
/** Distance in astronomical units */
export type AstronomicalUnits = number;
"#;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Serialize maps as plain objects rather than JS `Map`s
fn to_js_object<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}
