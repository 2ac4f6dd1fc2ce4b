//! Free-text canonicalization ahead of intent routing.
//!
//! Input is lower-cased and trimmed, then run through a fixed, ordered table
//! of word-boundary substitutions. The order matters: general shorthand is
//! expanded first so later multi-word rules and the routing predicates see
//! the expanded form. Everything outside `[a-z0-9 whitespace .]` is stripped
//! last, after rules that rely on characters like `&`, `/` and `-`.

use std::sync::LazyLock;

use regex::Regex;

static SUBSTITUTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // Common chat shorthand.
        (r"\bu\b", "you"),
        (r"\bur\b", "your"),
        (r"\br\b", "are"),
        (r"\bpls\b", "please"),
        (r"\bthx\b", "thanks"),
        (r"\binfo\b", "information"),
        // Logistics and warehouse short forms.
        (r"\bwh\b", "warehouse"),
        (r"\bw/h\b", "warehouse"),
        (r"\binv\b", "inventory"),
        (r"\btemp\b", "temperature"),
        (r"\bwms system\b", "wms"),
        // Locations.
        (r"\brak\b", "ras al khaimah"),
        (r"\babudhabi\b", "abu dhabi"),
        (r"\bdxb\b", "dubai"),
        // Industry abbreviations.
        (r"\bo&g\b", "oil and gas"),
        (r"\bdg\b", "dangerous goods"),
        (r"\bfmcg\b", "fast moving consumer goods"),
        // Quotation and services vocabulary.
        (r"\bdoc\b", "documentation"),
        (r"\bdocs\b", "documentation"),
        (r"\bmsds\b", "material safety data sheet"),
        (r"\bvas\b", "value added services"),
        // E-commerce variants.
        (r"\be[\s\-]?commerce\b", "ecommerce"),
        (r"\bshop logistics\b", "ecommerce"),
        // Logistics models.
        (r"\b3\.5pl\b", "three and half pl"),
        (r"\b2pl\b", "second party logistics"),
        (r"\b3pl\b", "third party logistics"),
        (r"\b4pl\b", "fourth party logistics"),
        // Fleet and vehicle types.
        (r"\breefer\b", "refrigerated truck"),
        (r"\bchiller\b", "refrigerated truck"),
        (r"\bcity truck\b", "small truck"),
        (r"\bev truck\b", "electric truck"),
        // Fire system.
        (r"\bfm200\b", "fm 200"),
        // Misc business terms.
        (r"\bkitting\b", "kitting and assembly"),
        (r"\btagging\b", "labeling"),
        (r"\btransit store\b", "transit warehouse"),
        (r"\basset mgmt\b", "asset management"),
        (r"\bmidday break\b", "summer break"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        let compiled = Regex::new(pattern).expect("substitution pattern must compile");
        (compiled, replacement)
    })
    .collect()
});

static STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s.]").expect("strip pattern must compile"));

/// Canonicalizes raw chat input for the intent router.
pub fn normalize(input: &str) -> String {
    let mut text = input.trim().to_lowercase();

    for (pattern, replacement) in SUBSTITUTIONS.iter() {
        if pattern.is_match(&text) {
            text = pattern.replace_all(&text, *replacement).into_owned();
        }
    }

    STRIP.replace_all(&text, "").into_owned()
}
