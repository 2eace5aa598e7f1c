//! Metadata extraction from free-text note blobs.
//!
//! Notes mix prose with `<name:payload>` and bare `<name>` tags, possibly
//! across several lines. Extraction collects every tag; when the same name
//! appears more than once in a single note, the last payload wins, matching
//! the map semantics of the editor's metadata field. (Duplicate tags across
//! different skills still sum; that happens at aggregation, not here.)

/// Extracts `(name, payload)` pairs from a note blob, in first-seen order.
///
/// A bare `<name>` tag yields an empty payload; names cannot contain `<`,
/// `>`, or `:`. Text outside angle brackets is ignored.
pub fn extract_note_tags(note: &str) -> Vec<(String, String)> {
    let mut tags: Vec<(String, String)> = Vec::new();
    let mut rest = note;
    while let Some(open) = rest.find('<') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else {
            break;
        };
        let body = &after[..close];
        if let Some(inner) = body.rfind('<') {
            // A stray '<' inside the body: the real tag starts at the
            // innermost bracket.
            rest = &after[inner..];
            continue;
        }
        rest = &after[close + 1..];
        let (name, payload) = match body.split_once(':') {
            Some((name, payload)) => (name, payload),
            None => (body, ""),
        };
        if name.is_empty() {
            continue;
        }
        match tags.iter_mut().find(|(existing, _)| existing == name) {
            Some(entry) => entry.1 = payload.to_string(),
            None => tags.push((name.to_string(), payload.to_string())),
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(note: &str) -> Vec<(String, String)> {
        extract_note_tags(note)
    }

    #[test]
    fn extracts_valued_and_bare_tags() {
        let note = "A sturdy stance.\n<passivePBST3:25%>\n<passiveDUAL>";
        assert_eq!(
            pairs(note),
            vec![
                ("passivePBST3".to_string(), "25%".to_string()),
                ("passiveDUAL".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn payload_keeps_everything_after_the_first_colon() {
        assert_eq!(
            pairs("<passivePBSTEX2:50%,HPUP,50>"),
            vec![("passivePBSTEX2".to_string(), "50%,HPUP,50".to_string())]
        );
    }

    #[test]
    fn last_duplicate_in_one_note_wins() {
        let note = "<passiveATADD:1><passiveATADD:2>";
        assert_eq!(pairs(note), vec![("passiveATADD".to_string(), "2".to_string())]);
    }

    #[test]
    fn prose_and_stray_brackets_are_ignored() {
        assert_eq!(pairs("damage < 5 sometimes"), Vec::new());
        assert_eq!(
            pairs("a < b <passiveAUTO> c"),
            vec![("passiveAUTO".to_string(), String::new())]
        );
        assert_eq!(pairs("<>"), Vec::new());
        assert_eq!(pairs("<unclosed"), Vec::new());
    }
}
