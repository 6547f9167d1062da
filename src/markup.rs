/// Wiki markup tokens removed from heading text, in removal order.
///
/// Longer runs of a character come before shorter ones so `====` is not left
/// behind as `==` residue.
const WIKI_TOKENS: [&str; 17] = [
    "*", "<", ">", "[", "]", "{", "}", "'''", "''", "=====", "====", "===", "==", "§§", "__",
    "--", "@@",
];

/// Removes wiki formatting tokens from text that already had its HTML stripped.
pub fn strip_wiki_markup(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    WIKI_TOKENS
        .iter()
        .fold(content.to_string(), |text, token| text.replace(token, ""))
}
