//! WASM bindings for the OLX parser.
//!
//! Feature-gated behind the `wasm` feature flag. The editing UI calls
//! `parseOlx` with the raw problem text and gets the parsed model back as a
//! plain JavaScript object.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { parseOlx } from 'olx-parser';
//!
//! await init();
//! try {
//!     const problem = parseOlx(olxText);
//!     console.log(problem.problemType, problem.answers);
//! } catch (failure) {
//!     // { kind: 'invalidBoolean', message: '...', fragment: '<choice correct="yes">' }
//!     showRecovery(failure.kind, failure.fragment);
//! }
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{OlxError, ParseFailure};
use crate::parser::OlxParser;

/// Maximum OLX size accepted from JavaScript (1 MB)
const MAX_OLX_SIZE: usize = 1_000_000;

/// Serialize a value with maps as plain JS objects.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {e}")))
}

/// Parse one OLX problem document.
///
/// # Returns
/// * `Ok(JsValue)` - The parsed problem (`{}` for a blank problem)
/// * `Err(JsValue)` - A `{ kind, message, fragment }` failure object
#[wasm_bindgen(js_name = parseOlx)]
pub fn parse_olx_js(olx: &str) -> Result<JsValue, JsValue> {
    if olx.len() > MAX_OLX_SIZE {
        let err = OlxError::InputTooLarge {
            size: olx.len(),
            limit: MAX_OLX_SIZE,
        };
        return Err(to_js(&ParseFailure::from(&err))?);
    }

    match OlxParser::new().parse(olx) {
        Ok(parsed) => to_js(&parsed),
        Err(err) => Err(to_js(&ParseFailure::from(&err))?),
    }
}
