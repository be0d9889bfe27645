//! Text indentation helpers
//!
//! Used when echoing remote command output or multi-line values nested
//! under a header line, so the block reads as belonging to its parent.

/// Return `text` indented by the given number of spaces.
///
/// When `strip` is true, the common leading whitespace shared by all
/// non-blank lines is removed first, so relative indents are preserved but
/// any previous uniform indentation is normalized away. Leading and
/// trailing blank lines are dropped from the result.
///
/// Empty input yields just the prefix: the empty first line is still
/// considered a line to be indented.
pub fn indent(text: &str, spaces: usize, strip: bool) -> String {
    let dedented;
    let text = if strip {
        dedented = dedent(text);
        dedented.as_str()
    } else {
        text
    };

    let prefix = " ".repeat(spaces);
    let indented = text
        .lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n");
    // Strip blank lines before/after, then reintroduce the first line's
    // prefix which just got stripped with them
    let trimmed = indented.trim();
    format!("{prefix}{trimmed}")
}

/// [`indent`] for input already split into lines.
///
/// The lines are joined with `\n` and indented exactly as the equivalent
/// single string would be.
pub fn indent_lines<I, S>(lines: I, spaces: usize, strip: bool) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let text = lines
        .into_iter()
        .map(|line| line.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    indent(&text, spaces, strip)
}

/// Remove the leading whitespace common to all non-blank lines.
///
/// Tabs and spaces are compared exactly, not expanded. Lines consisting
/// solely of whitespace are ignored when computing the margin and left
/// untouched if the margin does not match them.
fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.lines() {
        let stripped = line.trim_start();
        if stripped.is_empty() {
            continue;
        }
        let leading = &line[..line.len() - stripped.len()];
        margin = Some(match margin {
            None => leading,
            Some(current) => common_prefix(current, leading),
        });
    }

    let margin = margin.unwrap_or("");
    if margin.is_empty() {
        return text.to_string();
    }
    text.lines()
        .map(|line| line.strip_prefix(margin).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum();
    &a[..len]
}
