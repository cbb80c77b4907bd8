//! Compiles a [`SearchRequest`] into an Overpass QL query string.

use std::fmt::Write as _;

use moodbite_core::SearchRequest;

/// Builds the provider query: one node clause per tag pair, matching point
/// features within the request radius of its center.
///
/// Pure and deterministic — identical requests compile to identical
/// strings, which is why [`moodbite_core::TagFilter`] preserves insertion
/// order.
#[must_use]
pub fn build_query(request: &SearchRequest) -> String {
    let mut clauses = String::new();
    for pair in request.tags.iter() {
        let _ = writeln!(
            clauses,
            "  node[\"{}\"=\"{}\"](around:{},{},{});",
            pair.key, pair.value, request.radius_meters, request.center.lat, request.center.lng
        );
    }
    format!("[out:json][timeout:25];\n(\n{clauses});\nout body;\n")
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
