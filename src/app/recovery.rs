#[must_use]
pub fn get_suggestions(msg: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("unknown skill") {
        suggestions.push(
            "Known skills: SEARCH_PROJECTS, SEARCH_CUSTOMERS, EXPORT_CSV, BOOK_MEETING".to_string(),
        );
    }

    if msg_lower.contains("invalid catalog") {
        suggestions.push("Fix the TOML syntax in the catalog file, then restart".to_string());
    }

    if msg_lower.contains("failed to read catalog") || msg_lower.contains("transcript") {
        suggestions.push("Check the paths in ~/.config/paver/config.toml".to_string());
    }

    if msg_lower.contains("permission denied") || msg_lower.contains("creating") {
        suggestions.push("Set export_dir in ~/.config/paver/config.toml to a writable directory".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions() {
        let s = get_suggestions("unknown skill: LAUNCH_ROCKET");
        assert!(s[0].starts_with("Known skills:"));

        let s = get_suggestions("writing /root/x.csv: Permission denied (os error 13)");
        assert!(s.iter().any(|x| x.contains("export_dir")));

        let s = get_suggestions("invalid catalog /tmp/c.toml: expected value");
        assert!(s.iter().any(|x| x.contains("TOML syntax")));

        assert!(get_suggestions("all good").is_empty());
    }
}
