// kundali/examples/place_normalization.rs
//
// Shows the response shapes the places provider has been seen returning and
// how each one folds into the same suggestion list.

use kundali::places::normalize_suggestions;
use serde_json::json;

fn main() {
  let shapes = [
    ("predictions object", json!({ "predictions": [ { "description": "Paris, France" } ] })),
    ("array around predictions", json!([ { "predictions": ["Pune, India"] } ])),
    ("bare string array", json!(["Delhi", "Mumbai"])),
    ("results container", json!({ "results": [ { "name": "Chennai" } ] })),
    ("places container", json!({ "places": [ { "formatted_address": "Kolkata, India" } ] })),
    ("unrecognized", json!({ "status": "ZERO_RESULTS" })),
  ];

  for (label, body) in shapes {
    let suggestions = normalize_suggestions(&body);
    println!("{label}:");
    if suggestions.is_empty() {
      println!("  (no suggestions)");
    }
    for s in suggestions {
      println!("  - {}", s.description);
    }
  }
}
