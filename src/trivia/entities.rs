//! HTML entity decoding for provider text.
//!
//! Open Trivia DB returns question and answer text HTML-encoded by default
//! (`Who wrote &quot;Dune&quot;?`). Named entities come from the full HTML5
//! table; anything unrecognised is passed through untouched.

/// Decode HTML entities in `input`.
pub fn decode(input: &str) -> String {
    html_escape::decode_html_entities(input).into_owned()
}
