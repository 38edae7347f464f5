// src/domain/shared/markdown.rs
//! Markdown stripping for excerpts and word counts.

use once_cell::sync::Lazy;
use regex::Regex;

static CODE_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```[^`]*```").expect("code block pattern"));
static INLINE_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`[^`]+`").expect("inline code pattern"));
static IMAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").expect("image pattern"));
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("link pattern"));
// Emphasis, handled from most to least specific.
static EMPHASIS_RES: Lazy<[Regex; 6]> = Lazy::new(|| {
    [
        Regex::new(r"\*\*\*([^*]+)\*\*\*").expect("emphasis pattern"),
        Regex::new(r"___([^_]+)___").expect("emphasis pattern"),
        Regex::new(r"\*\*([^*]+)\*\*").expect("emphasis pattern"),
        Regex::new(r"__([^_]+)__").expect("emphasis pattern"),
        Regex::new(r"\*([^*]+)\*").expect("emphasis pattern"),
        Regex::new(r"_([^_]+)_").expect("emphasis pattern"),
    ]
});
static HEADER_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#{1,6}\s+").expect("header line pattern"));
static INLINE_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#{1,6}\s+").expect("inline header pattern"));
static BLANK_LINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("blank lines pattern"));

/// Removes basic Markdown syntax, keeping the readable text.
///
/// Code blocks are replaced by their newlines so line structure survives;
/// header lines are dropped entirely; links keep their label.
#[must_use]
pub fn strip_markdown(content: &str) -> String {
    let content = CODE_BLOCK_RE.replace_all(content, |caps: &regex::Captures<'_>| {
        "\n".repeat(caps[0].matches('\n').count())
    });
    let content = INLINE_CODE_RE.replace_all(&content, "");
    let content = IMAGE_RE.replace_all(&content, "");
    let mut content = LINK_RE.replace_all(&content, "$1").into_owned();

    for re in EMPHASIS_RES.iter() {
        content = re.replace_all(&content, "$1").into_owned();
    }

    let lines: Vec<String> = content
        .lines()
        .filter(|line| !HEADER_LINE_RE.is_match(line))
        .map(|line| INLINE_HEADER_RE.replace_all(line, "").into_owned())
        .collect();

    let joined = lines.join("\n");
    BLANK_LINES_RE
        .replace_all(joined.trim(), "\n\n")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_emphasis_and_links() {
        let input = "Learn **bold** and *italic* words, then [read more](https://example.com).";
        assert_eq!(
            strip_markdown(input),
            "Learn bold and italic words, then read more."
        );
    }

    #[test]
    fn drops_header_lines_and_images() {
        let input = "# Lesson One\n\nSome text.\n\n![diagram](img.png)\n\nMore text.";
        assert_eq!(strip_markdown(input), "Some text.\n\nMore text.");
    }

    #[test]
    fn replaces_code_blocks_with_their_newlines() {
        let input = "Before\n```\nlet x = 1;\n```\nAfter";
        let got = strip_markdown(input);
        assert!(got.starts_with("Before"));
        assert!(got.ends_with("After"));
        assert!(!got.contains("let x"));
    }

    #[test]
    fn removes_inline_code() {
        assert_eq!(strip_markdown("Use `tres bien` here."), "Use  here.");
    }
}
