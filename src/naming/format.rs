use serde::{Deserialize, Serialize};

/// Emitted when no source yields a candidate, or a candidate tokenizes to
/// nothing. Guarantees names are never empty.
pub const FALLBACK_NAME: &str = "DefaultElement";

/// Token accumulation stops once the accumulated text reaches this many
/// characters. The token that crosses the threshold is kept whole, and the
/// tag suffix is appended afterwards, so final names may run longer.
const ACCUMULATION_LIMIT: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasingStyle {
    Pascal,
    Camel,
}

/// Formatting options for one naming pass. Threaded explicitly wherever
/// names are derived; there is no process-wide configuration. Unrecognized
/// keys in caller-supplied JSON/YAML are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameOptions {
    #[serde(default = "default_casing", rename = "casingStyle")]
    pub casing_style: CasingStyle,

    #[serde(default = "default_preserve", rename = "preserveConsecutiveUppercase")]
    pub preserve_consecutive_uppercase: bool,
}

impl Default for NameOptions {
    fn default() -> Self {
        Self {
            casing_style: CasingStyle::Pascal,
            preserve_consecutive_uppercase: true,
        }
    }
}

fn default_casing() -> CasingStyle {
    CasingStyle::Pascal
}

fn default_preserve() -> bool {
    true
}

/// Turn a raw candidate string into a base name.
///
/// Tokenizes into maximal runs of ASCII alphanumerics and CJK ideographs,
/// accumulates tokens until the length budget is reached, then applies the
/// configured casing.
pub fn format_name(raw: &str, options: &NameOptions) -> String {
    let tokens = tokenize(raw);

    let mut accumulated = String::new();
    if tokens.is_empty() {
        accumulated.push_str(FALLBACK_NAME);
        accumulated.push(' ');
    } else {
        for token in tokens {
            // Stopping test, not a hard truncation: the crossing token stays.
            if accumulated.chars().count() >= ACCUMULATION_LIMIT {
                break;
            }
            accumulated.push_str(token);
            accumulated.push(' ');
        }
    }

    apply_casing(&accumulated, options)
}

/// Maximal runs of [a-zA-Z0-9] and CJK ideographs U+4E00–U+9FA5, one shared
/// character class, so "价格Price" is a single token.
fn tokenize(raw: &str) -> Vec<&str> {
    raw.split(|c: char| !is_name_char(c))
        .filter(|t| !t.is_empty())
        .collect()
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

fn apply_casing(text: &str, options: &NameOptions) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, word) in text.split_whitespace().enumerate() {
        case_word_into(word, i == 0, options, &mut out);
    }
    out
}

fn case_word_into(word: &str, first_word: bool, options: &NameOptions, out: &mut String) {
    if options.preserve_consecutive_uppercase {
        // The word is one unit: an existing uppercase run like "URL" must
        // survive intact instead of being exploded letter-by-letter.
        let mut chars = word.chars();
        let Some(head) = chars.next() else { return };
        let rest = chars.as_str();
        // A leading run ("URL") stays intact even in camel style; a lone
        // capital is re-cased.
        let leading_run = head.is_uppercase()
            && rest.chars().next().map(|c| c.is_uppercase()).unwrap_or(false);
        if first_word && options.casing_style == CasingStyle::Camel && !leading_run {
            out.extend(head.to_lowercase());
        } else {
            out.extend(head.to_uppercase());
        }
        out.push_str(rest);
        return;
    }

    // Without preservation, interior case transitions split the word into
    // runs ("DefaultElement" -> "Default" + "Element", "URLBar" -> "URL" +
    // "Bar") and each run is re-cased from scratch.
    for (run_index, run) in split_case_runs(word).into_iter().enumerate() {
        let lower_first =
            first_word && run_index == 0 && options.casing_style == CasingStyle::Camel;
        let mut chars = run.chars();
        let Some(head) = chars.next() else { continue };
        if lower_first {
            out.extend(head.to_lowercase());
        } else {
            out.extend(head.to_uppercase());
        }
        out.push_str(chars.as_str().to_lowercase().as_str());
    }
}

/// Split a token at case transitions: before an uppercase that follows a
/// non-uppercase, and before the last uppercase of a run that is followed by
/// a lowercase.
fn split_case_runs(word: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut boundaries = vec![0];

    for i in 1..chars.len() {
        let (offset, c) = chars[i];
        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, n)| n);

        let rising = c.is_uppercase() && !prev.is_uppercase();
        let falling = c.is_uppercase()
            && prev.is_uppercase()
            && next.map(|n| n.is_lowercase()).unwrap_or(false);

        if rising || falling {
            boundaries.push(offset);
        }
    }

    boundaries.push(word.len());
    boundaries
        .windows(2)
        .map(|w| &word[w[0]..w[1]])
        .filter(|run| !run.is_empty())
        .collect()
}
