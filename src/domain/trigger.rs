use regex::Regex;
use std::sync::LazyLock;

// `]` cannot be escaped inside a param; the first `]` always closes the tag.
static TRIGGER_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[SKILL:([A-Z_]+)(?::([^\]]*))?\]").expect("trigger tag pattern is valid")
});

/// A skill request embedded in assistant text as `[SKILL:NAME]` or
/// `[SKILL:NAME:param]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub skill_name: String,
    pub param: String,
}

impl Trigger {
    pub fn new(skill_name: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            skill_name: skill_name.into(),
            param: param.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedReply {
    pub triggers: Vec<Trigger>,
    pub cleaned_text: String,
}

/// Extracts every trigger tag from `text` in source order and returns the
/// text with those tags cut out.
///
/// Both outputs come from the same walk over the matches, so the visible
/// text and the trigger list always agree. Malformed tags are left in place.
///
/// Removal is a single pass: prose around a tag can join into a new tag once
/// the tag is cut (`[SKI[SKILL:A]LL:B]` cleans to `[SKILL:B]`), and that new
/// tag is not run.
#[must_use]
pub fn parse(text: &str) -> ParsedReply {
    let mut triggers = Vec::new();
    let mut cleaned_text = String::with_capacity(text.len());
    let mut last_end = 0;

    for caps in TRIGGER_TAG.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        cleaned_text.push_str(&text[last_end..whole.start()]);
        last_end = whole.end();

        triggers.push(Trigger {
            skill_name: caps[1].to_string(),
            param: caps.get(2).map_or_else(String::new, |m| m.as_str().to_string()),
        });
    }
    cleaned_text.push_str(&text[last_end..]);

    ParsedReply {
        triggers,
        cleaned_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_projects_example() {
        let parsed = parse("Let me check. [SKILL:SEARCH_PROJECTS:kitchen remodel] One sec.");
        assert_eq!(
            parsed.triggers,
            vec![Trigger::new("SEARCH_PROJECTS", "kitchen remodel")]
        );
        assert_eq!(parsed.cleaned_text, "Let me check.  One sec.");
    }

    #[test]
    fn test_no_tags_is_identity() {
        let text = "Nothing to do here. [brackets] stay, SKILL: too.";
        let parsed = parse(text);
        assert!(parsed.triggers.is_empty());
        assert_eq!(parsed.cleaned_text, text);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), ParsedReply::default());
    }

    #[test]
    fn test_tag_without_param() {
        let parsed = parse("Booking now[SKILL:BOOK_MEETING].");
        assert_eq!(parsed.triggers, vec![Trigger::new("BOOK_MEETING", "")]);
        assert_eq!(parsed.cleaned_text, "Booking now.");
    }

    #[test]
    fn test_empty_param_segment() {
        let parsed = parse("[SKILL:EXPORT_CSV:]");
        assert_eq!(parsed.triggers, vec![Trigger::new("EXPORT_CSV", "")]);
        assert_eq!(parsed.cleaned_text, "");
    }

    #[test]
    fn test_multiple_tags_keep_source_order() {
        let parsed = parse(
            "[SKILL:SEARCH_CUSTOMERS:Alvarez]Found them.\n[SKILL:EXPORT_CSV:customers] [SKILL:BOOK_MEETING:kickoff]",
        );
        let names: Vec<_> = parsed
            .triggers
            .iter()
            .map(|t| t.skill_name.as_str())
            .collect();
        assert_eq!(names, vec!["SEARCH_CUSTOMERS", "EXPORT_CSV", "BOOK_MEETING"]);
        assert_eq!(parsed.cleaned_text, "Found them.\n ");
    }

    #[test]
    fn test_unknown_names_still_parse() {
        // Resolution against the skill enum happens at dispatch, not here
        let parsed = parse("[SKILL:LAUNCH_ROCKET:moon]");
        assert_eq!(parsed.triggers, vec![Trigger::new("LAUNCH_ROCKET", "moon")]);
    }

    #[test]
    fn test_malformed_tags_are_left_alone() {
        for text in [
            "Unterminated [SKILL:SEARCH_PROJECTS:kitchen",
            "Lowercase [SKILL:search_projects:x]",
            "Digits [SKILL:SEARCH2:x]",
            "Empty name [SKILL:]",
            "Nested [SKILL:[SKILL:",
        ] {
            let parsed = parse(text);
            assert!(parsed.triggers.is_empty(), "matched in {text:?}");
            assert_eq!(parsed.cleaned_text, text);
        }
    }

    #[test]
    fn test_param_stops_at_first_closing_bracket() {
        let parsed = parse("[SKILL:SEARCH_PROJECTS:a]b] tail");
        assert_eq!(parsed.triggers, vec![Trigger::new("SEARCH_PROJECTS", "a")]);
        assert_eq!(parsed.cleaned_text, "b] tail");
    }

    #[test]
    fn test_param_may_contain_colons_and_brackets() {
        let parsed = parse("[SKILL:SEARCH_PROJECTS:site: [north] wing]");
        assert_eq!(
            parsed.triggers,
            vec![Trigger::new("SEARCH_PROJECTS", "site: [north")]
        );
        assert_eq!(parsed.cleaned_text, " wing]");
    }

    #[test]
    fn test_cleaned_text_rescans_to_nothing() {
        let text = "A [SKILL:SEARCH_PROJECTS:deck] B [SKILL:BOOK_MEETING] C [SKILL:EXPORT_CSV:projects]";
        let first = parse(text);
        assert_eq!(first.triggers.len(), 3);
        assert!(!first.cleaned_text.contains("[SKILL:"));

        let second = parse(&first.cleaned_text);
        assert!(second.triggers.is_empty());
        assert_eq!(second.cleaned_text, first.cleaned_text);
    }

    #[test]
    fn test_removal_is_single_pass() {
        let parsed = parse("[SKI[SKILL:A]LL:B]");
        assert_eq!(parsed.triggers, vec![Trigger::new("A", "")]);
        assert_eq!(parsed.cleaned_text, "[SKILL:B]");

        // The spliced tag only surfaces on a second parse
        assert_eq!(parse(&parsed.cleaned_text).triggers, vec![Trigger::new("B", "")]);
    }

    #[test]
    fn test_multibyte_text_around_tags() {
        let parsed = parse("Küche → [SKILL:SEARCH_PROJECTS:Küche] ✓");
        assert_eq!(parsed.triggers, vec![Trigger::new("SEARCH_PROJECTS", "Küche")]);
        assert_eq!(parsed.cleaned_text, "Küche →  ✓");
    }
}
