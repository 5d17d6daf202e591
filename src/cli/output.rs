//! Output formatting utilities

/// Format a list of values for display
pub fn format_value_list(values: &[String]) -> String {
    format_list(values, "No values found", "")
}

/// Format a list of tags for display, each with a `#` prefix
pub fn format_tag_list(tags: &[String]) -> String {
    format_list(tags, "No tags found", "#")
}

fn format_list(items: &[String], empty: &str, prefix: &str) -> String {
    if items.is_empty() {
        return empty.to_string();
    }

    items
        .iter()
        .map(|item| format!("{}{}\n", prefix, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_value_list() {
        assert_eq!(format_value_list(&[]), "No values found");
    }

    #[test]
    fn test_format_value_list() {
        let values = vec!["memo.txt".to_string(), "report.pdf".to_string()];
        assert_eq!(format_value_list(&values), "memo.txt\nreport.pdf\n");
    }

    #[test]
    fn test_format_empty_tag_list() {
        assert_eq!(format_tag_list(&[]), "No tags found");
    }

    #[test]
    fn test_format_tag_list() {
        let tags = vec!["personal".to_string(), "work".to_string()];
        let output = format_tag_list(&tags);
        assert_eq!(output, "#personal\n#work\n");
    }

    #[test]
    fn test_format_non_ascii_tags() {
        let tags = vec!["café".to_string(), "c++".to_string()];
        assert_eq!(format_tag_list(&tags), "#café\n#c++\n");
    }
}
