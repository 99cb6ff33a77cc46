//! Frontmatter extraction for Markdown/MDX documents.
//!
//! A document may start with a block delimited by `---` lines. The block is
//! parsed as YAML, which also accepts JSON objects.

use crate::model::Frontmatter;

/// Error returned when a frontmatter block cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    /// Opening delimiter without a closing one.
    #[error("frontmatter block is not closed")]
    Unterminated,
    /// Block is not valid YAML/JSON or has the wrong shape.
    #[error("invalid frontmatter: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Split a document into its frontmatter and body.
///
/// Documents without a leading `---` line get default frontmatter and the
/// whole content as body.
pub(crate) fn split_frontmatter(content: &str) -> Result<(Frontmatter, &str), FrontmatterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return Ok((Frontmatter::default(), content));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok((parse_block(block)?, body));
        }
        offset += line.len();
    }

    Err(FrontmatterError::Unterminated)
}

fn parse_block(block: &str) -> Result<Frontmatter, FrontmatterError> {
    if block.trim().is_empty() {
        return Ok(Frontmatter::default());
    }
    Ok(serde_yaml::from_str(block)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_no_frontmatter() {
        let (fm, body) = split_frontmatter("# Title\n\nBody").unwrap();
        assert_eq!(fm, Frontmatter::default());
        assert_eq!(body, "# Title\n\nBody");
    }

    #[test]
    fn test_yaml_frontmatter() {
        let content = "---\ntitle: Hello\npath: /blog/hello\nauthor: a1\n---\n# Hello\n";
        let (fm, body) = split_frontmatter(content).unwrap();

        assert_eq!(fm.title.as_deref(), Some("Hello"));
        assert_eq!(fm.path.as_deref(), Some("/blog/hello"));
        assert_eq!(fm.author.as_deref(), Some("a1"));
        assert_eq!(body, "# Hello\n");
    }

    #[test]
    fn test_json_frontmatter() {
        let content = "---\n{\"title\": \"Hi\", \"path\": \"/hi\", \"draft\": true}\n---\nBody";
        let (fm, body) = split_frontmatter(content).unwrap();

        assert_eq!(fm.title.as_deref(), Some("Hi"));
        assert_eq!(fm.extra["draft"], true);
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_empty_block() {
        let (fm, body) = split_frontmatter("---\n---\nBody").unwrap();
        assert_eq!(fm, Frontmatter::default());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_crlf_line_endings() {
        let (fm, body) = split_frontmatter("---\r\ntitle: Win\r\n---\r\nBody").unwrap();
        assert_eq!(fm.title.as_deref(), Some("Win"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_unterminated_block() {
        let result = split_frontmatter("---\ntitle: Oops\n# Body");
        assert!(matches!(result, Err(FrontmatterError::Unterminated)));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = split_frontmatter("---\ntitle: [broken\n---\nBody");
        assert!(matches!(result, Err(FrontmatterError::Parse(_))));
    }
}
