//! WASM bindings for impact-site classification.

use wasm_bindgen::prelude::*;

use impact::collaborators::{resolve_is_ocean, GeocodeComponents};
use impact::SurfaceLookup;

use crate::{from_js, to_js};

/// Classify the first reverse-geocoding hit as land, ocean or unknown.
///
/// # Arguments
/// * `components` - The hit's address components, or `null` when the
///   geocoder returned no results
#[wasm_bindgen]
pub fn classify_surface(components: JsValue) -> Result<JsValue, JsError> {
    let components: Option<GeocodeComponents> = from_js(components)?;
    to_js(&SurfaceLookup::from_components(components.as_ref()))
}

/// Whether to treat the geocoding hit as an ocean impact.
///
/// Unknown surfaces count as land.
#[wasm_bindgen]
pub fn is_ocean_impact(components: JsValue) -> Result<bool, JsError> {
    let components: Option<GeocodeComponents> = from_js(components)?;
    Ok(resolve_is_ocean(Ok(SurfaceLookup::from_components(
        components.as_ref(),
    ))))
}
