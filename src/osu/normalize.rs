//! Line normalization, the first phase of the parsing pipeline.

/// Normalizes raw input lines: blank and whitespace-only lines are
/// dropped, and every surviving line is trimmed of surrounding ASCII
/// spaces and lowercased.
///
/// Only the space character is trimmed. Tabs and other whitespace stay in
/// place, so a tab-indented line reaches the classifier with its
/// indentation intact.
pub fn normalize_lines<I>(lines: I) -> impl Iterator<Item = String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines.into_iter().filter_map(|line| {
        let line = line.as_ref();
        (!line.trim().is_empty()).then(|| line.trim_matches(' ').to_lowercase())
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn normalized(lines: &[&str]) -> Vec<String> {
        normalize_lines(lines).collect()
    }

    #[test]
    fn drops_blank_lines() {
        assert_eq!(normalized(&["", "   ", "\t", "a"]), vec!["a"]);
    }

    #[test]
    fn lowercases_and_trims_spaces() {
        assert_eq!(normalized(&["  [General]  "]), vec!["[general]"]);
        assert_eq!(normalized(&["Title: Night Sky"]), vec!["title: night sky"]);
    }

    #[test]
    fn keeps_tabs() {
        assert_eq!(normalized(&["\t// note"]), vec!["\t// note"]);
        assert_eq!(normalized(&[" \tx \t "]), vec!["\tx \t"]);
    }
}
