//! Tag extraction from explicit directives and keyword rule tables.
//!
//! # Invariants
//! - Keyword detection runs on the lower-cased sentence.
//! - Emitted labels are deduplicated; directive text keeps its casing and
//!   is cleaned like a sentence.

use crate::capture::split::clean_sentence;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static TAG_DIRECTIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)tag:\s*([a-zA-Z0-9à-žÀ-Ž _-]+)").expect("valid tag directive regex")
});

/// Fires `label` when the sentence contains any of `keywords`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRule {
    pub keywords: &'static [&'static str],
    pub label: &'static str,
}

impl TagRule {
    /// `lower` must already be lower-cased.
    pub fn matches(&self, lower: &str) -> bool {
        self.keywords.iter().any(|keyword| lower.contains(keyword))
    }
}

/// Organisational categories.
pub const CATEGORY_RULES: &[TagRule] = &[
    TagRule {
        keywords: &[
            "cbs",
            "college",
            "schepencollege",
            "college van burgemeester en schepenen",
        ],
        label: "CBS",
    },
    TagRule {
        keywords: &[
            "communicatie",
            "facebook",
            "instagram",
            "post",
            "bericht",
            "aankondiging",
        ],
        label: "Communicatie",
    },
    TagRule {
        keywords: &[
            "persbericht",
            "persmededeling",
            "media",
            "journalist",
            "krant",
            "radio",
            "tv",
        ],
        label: "Persbericht",
    },
    TagRule {
        keywords: &["te bespreken", "agendapunt", "agenda"],
        label: "Te bespreken",
    },
];

/// Policy themes.
pub const THEME_RULES: &[TagRule] = &[
    TagRule {
        keywords: &[
            "wegen",
            "fietspad",
            "mobiliteit",
            "trage wegen",
            "signalisatie",
        ],
        label: "Mobiliteit",
    },
    TagRule {
        keywords: &["school", "onderwijs", "bko", "kinderopvang"],
        label: "Onderwijs",
    },
    TagRule {
        keywords: &["sport", "club", "hal"],
        label: "Sport",
    },
    TagRule {
        keywords: &["cultuur", "santro", "evenement", "libbeke"],
        label: "Cultuur/Events",
    },
    TagRule {
        keywords: &["privé", "gezin", "thuis"],
        label: "Thuis",
    },
];

/// Extracts the tag set of one sentence.
///
/// Combines the first `tag:` directive with every firing category and theme
/// rule.
pub fn extract_tags(sentence: &str) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();

    if let Some(directive) = directive_tag(sentence) {
        tags.insert(directive);
    }

    let lower = sentence.trim().to_lowercase();
    for rule in CATEGORY_RULES.iter().chain(THEME_RULES) {
        if rule.matches(&lower) {
            tags.insert(rule.label.to_string());
        }
    }

    tags
}

fn directive_tag(sentence: &str) -> Option<String> {
    let captured = TAG_DIRECTIVE_RE.captures(sentence)?.get(1)?.as_str();
    let cleaned = clean_sentence(captured);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_tags, CATEGORY_RULES, THEME_RULES};
    use std::collections::BTreeSet;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn press_release_about_bike_path() {
        let tags = extract_tags("Persbericht over fietspad");
        assert!(tags.contains("Persbericht"));
        assert!(tags.contains("Mobiliteit"));
    }

    #[test]
    fn directive_tag_keeps_casing_and_collapses_whitespace() {
        let tags = extract_tags("TAG:   Begroting   2025");
        assert_eq!(tags, set(&["Begroting 2025"]));
    }

    #[test]
    fn directive_accepts_accented_letters_and_stops_at_punctuation() {
        let tags = extract_tags("tag: café-project_één, verder niets");
        assert!(tags.contains("café-project_één"));
    }

    #[test]
    fn directive_strips_leading_numbering() {
        assert_eq!(extract_tags("tag: 2025 begroting"), set(&["begroting"]));
        assert_eq!(extract_tags("Notitie tag: -3 kermis"), set(&["kermis"]));
    }

    #[test]
    fn numeric_only_directive_adds_nothing() {
        assert!(extract_tags("tag: 12").is_empty());
    }

    #[test]
    fn blank_directive_adds_nothing() {
        assert!(extract_tags("tag:   ").is_empty());
        assert!(extract_tags("tag:!").is_empty());
    }

    #[test]
    fn keyword_matching_is_case_insensitive() {
        assert_eq!(extract_tags("Voorleggen aan het COLLEGE"), set(&["CBS"]));
    }

    #[test]
    fn all_firing_rules_contribute() {
        let tags = extract_tags("Facebook post over het evenement op school");
        assert_eq!(tags, set(&["Communicatie", "Cultuur/Events", "Onderwijs"]));
    }

    #[test]
    fn same_label_from_several_keywords_is_emitted_once() {
        let tags = extract_tags("agendapunt voor de agenda: te bespreken");
        assert_eq!(tags, set(&["Te bespreken"]));
    }

    #[test]
    fn directive_matching_a_rule_label_is_deduplicated() {
        let tags = extract_tags("tag: CBS");
        assert_eq!(tags, set(&["CBS"]));
    }

    #[test]
    fn plain_sentence_has_no_tags() {
        assert!(extract_tags("Bel Jan").is_empty());
    }

    #[test]
    fn rule_tables_have_unique_labels_and_lowercase_keywords() {
        let rules: Vec<_> = CATEGORY_RULES.iter().chain(THEME_RULES).collect();
        let labels: BTreeSet<_> = rules.iter().map(|rule| rule.label).collect();
        assert_eq!(labels.len(), rules.len());
        for rule in rules {
            for keyword in rule.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }
}
