//! Numbered-list parsing.

use super::patterns::LIST_ITEM;
use crate::types::ListItem;

/// Parse numbered lines into list items.
///
/// A numbered line ("3.1. Text") starts a new item. Other non-blank lines
/// are continuations of the previous item, or an unnumbered first item when
/// no item has started yet. Blank lines are skipped. Numbers are kept as
/// written: gaps and out-of-order numbering are not corrected.
///
/// # Examples
/// ```
/// use talko_legal::text::parse_list;
///
/// let lines: Vec<String> = ["1. First", "wrapped", "2. Second"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let items = parse_list(&lines);
/// assert_eq!(items[0].text, "First wrapped");
/// assert_eq!(items[1].number, "2.");
/// ```
pub fn parse_list(lines: &[String]) -> Vec<ListItem> {
    let mut items: Vec<ListItem> = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = LIST_ITEM.captures(line) {
            let number = caps.get(1).map_or("", |m| m.as_str());
            let text = caps.get(2).map_or("", |m| m.as_str());
            items.push(ListItem::new(number, text));
            continue;
        }

        match items.last_mut() {
            Some(item) if item.text.is_empty() => item.text.push_str(line),
            Some(item) => {
                item.text.push(' ');
                item.text.push_str(line);
            }
            None => items.push(ListItem::new("", line)),
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_parse_list_sub_items() {
        let items = parse_list(&lines(&["3.1. First duty", "3.2. Second duty"]));
        assert_eq!(
            items,
            vec![
                ListItem::new("3.1.", "First duty"),
                ListItem::new("3.2.", "Second duty"),
            ]
        );
    }

    #[test]
    fn test_parse_list_continuations() {
        let items = parse_list(&lines(&["1. Start", "  continues here", "", "2. Next"]));
        assert_eq!(
            items,
            vec![
                ListItem::new("1.", "Start continues here"),
                ListItem::new("2.", "Next"),
            ]
        );
    }

    #[test]
    fn test_parse_list_leading_unnumbered_line() {
        let items = parse_list(&lines(&["Preface", "more", "1. Item"]));
        assert_eq!(
            items,
            vec![ListItem::new("", "Preface more"), ListItem::new("1.", "Item")]
        );
    }

    #[test]
    fn test_parse_list_keeps_numbering_as_written() {
        let items = parse_list(&lines(&["1. a", "3. c", "2. b"]));
        let numbers: Vec<&str> = items.iter().map(|i| i.number.as_str()).collect();
        assert_eq!(numbers, vec!["1.", "3.", "2."]);
    }

    #[test]
    fn test_parse_list_number_without_text() {
        let items = parse_list(&lines(&["4.2.", "text on next line"]));
        assert_eq!(items, vec![ListItem::new("4.2.", "text on next line")]);
    }

    #[test]
    fn test_parse_list_empty() {
        assert!(parse_list(&lines(&["", "  "])).is_empty());
    }
}
