//! Normalizes raw page text extracted from PDFs before chunking.

/// Artifact → replacement pairs, applied in order.
///
/// Covers the two ways extractors mangle ligature glyphs: the raw Unicode
/// ligature codepoints, and their UTF-8 bytes mis-decoded as Latin-1
/// ("mojibake", e.g. `ï¬` for "fi"). Longer artifacts are listed before
/// their prefixes (`ï¬‚` starts with `ï¬`), and every replacement is plain
/// ASCII disjoint from every artifact key, so one left-to-right pass never
/// double-replaces. The table is a default, not a complete inventory.
const ARTIFACT_REPAIRS: &[(&str, &str)] = &[
    // Mojibake ligatures
    ("\u{ef}\u{ac}\u{20ac}", "ff"),        // ï¬€
    ("\u{ef}\u{ac}\u{192}", "ffi"),        // ï¬ƒ
    ("\u{ef}\u{ac}\u{201e}", "ffl"),       // ï¬„
    ("\u{ef}\u{ac}\u{201a}", "fl"),        // ï¬‚
    ("\u{ef}\u{ac}\u{81}", "fi"),          // ï¬ with the stray control byte
    ("\u{ef}\u{ac}", "fi"),                // ï¬
    // Unicode ligature codepoints
    ("\u{fb00}", "ff"),                    // ﬀ
    ("\u{fb01}", "fi"),                    // ﬁ
    ("\u{fb02}", "fl"),                    // ﬂ
    ("\u{fb03}", "ffi"),                   // ﬃ
    ("\u{fb04}", "ffl"),                   // ﬄ
    ("\u{fb05}", "st"),                    // ﬅ
    ("\u{fb06}", "st"),                    // ﬆ
    // Mojibake non-breaking space leaves a stray Â behind
    ("\u{c2}\u{a0}", " "),
];

/// Normalize raw extracted page text: repair known extraction artifacts, then
/// collapse whitespace runs to single spaces and trim.
///
/// Pure and total — any input yields a best-effort cleaned string, and clean
/// input passes through unchanged apart from whitespace collapsing.
pub fn clean_text(text: &str) -> String {
    collapse_whitespace(&repair_artifacts(text))
}

fn repair_artifacts(text: &str) -> String {
    let mut repaired = text.to_string();
    for (artifact, replacement) in ARTIFACT_REPAIRS {
        if repaired.contains(artifact) {
            repaired = repaired.replace(artifact, replacement);
        }
    }
    repaired
}

/// Collapse every whitespace run (spaces, newlines, tabs, NBSP) to a single
/// space and strip leading/trailing whitespace.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
