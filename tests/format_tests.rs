use element_namer::naming::format::{CasingStyle, FALLBACK_NAME, NameOptions, format_name};

fn pascal() -> NameOptions {
    NameOptions::default()
}

fn camel() -> NameOptions {
    NameOptions {
        casing_style: CasingStyle::Camel,
        ..NameOptions::default()
    }
}

fn no_preserve(mut options: NameOptions) -> NameOptions {
    options.preserve_consecutive_uppercase = false;
    options
}

// ============================================================================
// Tokenization
// ============================================================================

#[test]
fn words_are_pascal_joined() {
    assert_eq!(format_name("login button", &pascal()), "LoginButton");
}

#[test]
fn punctuation_separates_tokens() {
    assert_eq!(format_name("home-link", &pascal()), "HomeLink");
    assert_eq!(format_name("nav__item--active", &pascal()), "NavItemActive");
    assert_eq!(format_name("  spaced   out  ", &pascal()), "SpacedOut");
}

#[test]
fn digits_stay_inside_tokens() {
    assert_eq!(format_name("step2 of3", &pascal()), "Step2Of3");
}

#[test]
fn cjk_ideographs_are_name_characters() {
    assert_eq!(format_name("价格 Price", &pascal()), "价格Price");
    // Shared character class: no split between CJK and ASCII runs.
    assert_eq!(format_name("价格Price", &pascal()), "价格Price");
}

#[test]
fn empty_and_punctuation_only_fall_back() {
    assert_eq!(format_name("", &pascal()), FALLBACK_NAME);
    assert_eq!(format_name("   ", &pascal()), FALLBACK_NAME);
    assert_eq!(format_name("!!! *** ???", &pascal()), FALLBACK_NAME);
}

// ============================================================================
// Length budget
// ============================================================================

#[test]
fn accumulation_stops_at_thirty_characters() {
    // Three 9-char tokens plus separators reach exactly 30; the fourth
    // token must not be added.
    let a = "a".repeat(9);
    let b = "b".repeat(9);
    let c = "c".repeat(9);
    let raw = format!("{} {} {} ddddddddd", a, b, c);
    let expected = format!("A{}B{}C{}", "a".repeat(8), "b".repeat(8), "c".repeat(8));
    assert_eq!(format_name(&raw, &pascal()), expected);
}

#[test]
fn crossing_token_is_kept_whole() {
    // 28 chars accumulated (27 + separator) is under the budget, so the next
    // token is appended in full even though it crosses the threshold.
    let raw = format!("{} verylongtrailingtoken next", "a".repeat(27));
    let expected = format!("A{}Verylongtrailingtoken", "a".repeat(26));
    assert_eq!(format_name(&raw, &pascal()), expected);
}

#[test]
fn budget_counts_characters_not_bytes() {
    // 2-char CJK tokens accumulate to 30 chars (with separators) after ten
    // tokens; the remaining two are dropped.
    let raw = "价格 价格 价格 价格 价格 价格 价格 价格 价格 价格 价格 价格";
    let name = format_name(raw, &pascal());
    assert_eq!(name.chars().count(), 20);
}

// ============================================================================
// Casing
// ============================================================================

#[test]
fn uppercase_runs_survive_by_default() {
    assert_eq!(format_name("main URL input", &pascal()), "MainURLInput");
    assert_eq!(format_name("parse XML fast", &pascal()), "ParseXMLFast");
}

#[test]
fn uppercase_runs_collapse_when_preservation_is_off() {
    assert_eq!(
        format_name("main URL input", &no_preserve(pascal())),
        "MainUrlInput"
    );
}

#[test]
fn interior_capitals_survive_without_preservation() {
    // Case transitions split the word into runs before re-casing.
    assert_eq!(
        format_name("DefaultElement", &no_preserve(pascal())),
        "DefaultElement"
    );
    assert_eq!(format_name("URLBar", &no_preserve(pascal())), "UrlBar");
}

#[test]
fn camel_lowercases_the_leading_word() {
    assert_eq!(format_name("Save File", &camel()), "saveFile");
    assert_eq!(
        format_name("Save File", &no_preserve(camel())),
        "saveFile"
    );
}

#[test]
fn camel_keeps_a_leading_uppercase_run() {
    assert_eq!(format_name("URL bar", &camel()), "URLBar");
}

#[test]
fn mixed_case_ids_keep_their_shape() {
    assert_eq!(format_name("homeLink", &pascal()), "HomeLink");
}

// ============================================================================
// Options deserialization
// ============================================================================

#[test]
fn options_parse_from_caller_json() {
    let options: NameOptions = serde_json::from_str(
        r#"{"casingStyle": "camel", "preserveConsecutiveUppercase": false}"#,
    )
    .unwrap();
    assert_eq!(options.casing_style, CasingStyle::Camel);
    assert!(!options.preserve_consecutive_uppercase);
}

#[test]
fn unrecognized_option_keys_are_ignored() {
    let options: NameOptions =
        serde_json::from_str(r#"{"casingStyle": "pascal", "highlight": true}"#).unwrap();
    assert_eq!(options.casing_style, CasingStyle::Pascal);
    assert!(options.preserve_consecutive_uppercase);
}

#[test]
fn missing_option_keys_take_defaults() {
    let options: NameOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options.casing_style, CasingStyle::Pascal);
    assert!(options.preserve_consecutive_uppercase);
}
