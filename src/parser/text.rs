/// One bibliographic entry held as an immutable sequence of lines.
///
/// Every lookup scans from the first line, so field scans never observe
/// each other's position.
#[derive(Debug, Clone)]
pub struct EntryText {
    lines: Vec<String>,
}

impl EntryText {
    pub fn from_raw(raw: &str) -> Self {
        let lines = raw
            .replace("\r\n", "\n")
            .split('\n')
            .map(str::to_string)
            .collect();
        EntryText { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn first_matching<F>(&self, f: F) -> Option<&str>
    where
        F: Fn(&str) -> bool,
    {
        self.lines.iter().map(String::as_str).find(|l| f(l))
    }

    pub fn last_matching<F>(&self, f: F) -> Option<&str>
    where
        F: Fn(&str) -> bool,
    {
        self.lines.iter().rev().map(String::as_str).find(|l| f(l))
    }

    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_untrimmed_lines() {
        let text = EntryText::from_raw("@article{x,\r\n  title = {A},\n}");
        assert_eq!(text.lines().len(), 3);
        assert_eq!(text.lines()[1], "  title = {A},");
    }

    #[test]
    fn first_and_last_match() {
        let text = EntryText::from_raw("a = 1\nb = 2\na = 3");
        assert_eq!(text.first_matching(|l| l.starts_with("a")), Some("a = 1"));
        assert_eq!(text.last_matching(|l| l.starts_with("a")), Some("a = 3"));
        assert_eq!(text.first_matching(|l| l.starts_with("c")), None);
    }

    #[test]
    fn blank_entry() {
        assert!(EntryText::from_raw("  \n\n").is_blank());
        assert!(!EntryText::from_raw("x").is_blank());
    }
}
