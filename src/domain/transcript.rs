/// Line that separates two replies in a transcript file.
pub const REPLY_SEPARATOR: &str = "---";

/// Splits transcript file content into replies. Separator lines may carry
/// surrounding whitespace; replies that are blank after trimming are dropped.
#[must_use]
pub fn split_replies(content: &str) -> Vec<String> {
    let mut replies = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim() == REPLY_SEPARATOR {
            push_reply(&mut replies, &current);
            current.clear();
        } else {
            current.push(line);
        }
    }
    push_reply(&mut replies, &current);

    replies
}

fn push_reply(replies: &mut Vec<String>, lines: &[&str]) {
    let reply = lines.join("\n");
    let reply = reply.trim();
    if !reply.is_empty() {
        replies.push(reply.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_replies() {
        let content = "First reply.\n[SKILL:BOOK_MEETING]\n---\n\nSecond\nreply.\n  ---  \n\n---\n";
        assert_eq!(
            split_replies(content),
            vec![
                "First reply.\n[SKILL:BOOK_MEETING]".to_string(),
                "Second\nreply.".to_string()
            ]
        );
    }

    #[test]
    fn test_split_replies_without_separator() {
        assert_eq!(split_replies("just one"), vec!["just one".to_string()]);
        assert!(split_replies("").is_empty());
        assert!(split_replies("---\n---").is_empty());
    }
}
