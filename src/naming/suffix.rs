/// Literal role suffix for a tag, looked up on the uppercased tag name.
/// The rules are mutually exclusive; a tag matches at most one.
pub fn tag_suffix(tag: &str) -> Option<&'static str> {
    let upper = tag.to_ascii_uppercase();
    if is_heading(&upper) {
        return Some("Title");
    }
    match upper.as_str() {
        "A" => Some("Link"),
        "TABLE" => Some("Table"),
        "I" => Some("Icon"),
        "INPUT" => Some("Input"),
        "IMG" => Some("Img"),
        _ => None,
    }
}

/// The heading family: "H" followed by exactly one digit.
fn is_heading(tag: &str) -> bool {
    let bytes = tag.as_bytes();
    bytes.len() == 2 && bytes[0] == b'H' && bytes[1].is_ascii_digit()
}
