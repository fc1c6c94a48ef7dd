//! Sentence splitting and cleanup.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\n;.]+").expect("valid separator regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static LIST_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*•\d.)(]+\s*").expect("valid list marker regex"));

/// Splits raw input into cleaned sentences, preserving document order.
///
/// Empty fragments are dropped, so blank input yields an empty vector.
pub fn split(raw: &str) -> Vec<String> {
    SENTENCE_SEPARATOR_RE
        .split(raw)
        .map(clean_sentence)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Trims, collapses whitespace and strips one leading list marker run
/// (`- `, `* `, `• `, `1) `, `(2) `, `3. `).
pub fn clean_sentence(fragment: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(fragment.trim(), " ");
    LIST_MARKER_RE.replace(&collapsed, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::{clean_sentence, split};

    #[test]
    fn splits_on_newlines_semicolons_and_periods() {
        let sentences = split("Bel Jan.\nMail Piet; plan overleg...\n\n");
        assert_eq!(sentences, vec!["Bel Jan", "Mail Piet", "plan overleg"]);
    }

    #[test]
    fn strips_list_markers_and_collapses_whitespace() {
        assert_eq!(clean_sentence("  -   koop   melk "), "koop melk");
        assert_eq!(clean_sentence("1) bel   de school"), "bel de school");
        assert_eq!(clean_sentence("• check mail"), "check mail");
        assert_eq!(clean_sentence("(2) check mail"), "check mail");
        assert_eq!(clean_sentence("* idee"), "idee");
    }

    #[test]
    fn marker_only_fragments_are_dropped() {
        assert!(split("- \n 2) \n • ").is_empty());
        assert!(split("").is_empty());
        assert!(split(" ;;. \n").is_empty());
    }

    #[test]
    fn splitting_is_idempotent_on_rejoined_output() {
        let raw = "- Bel Jan morgen\n2) Te bespreken: begroting CBS; idee: fietspad.  extra   ruimte";
        let first = split(raw);
        for separator in ["\n", ";", ". "] {
            let rejoined = first.join(separator);
            assert_eq!(split(&rejoined), first, "separator {separator:?}");
        }
    }

    #[test]
    fn clean_sentence_is_stable_on_clean_text() {
        let clean = "Mail de krant over het persbericht";
        assert_eq!(clean_sentence(clean), clean);
    }
}
