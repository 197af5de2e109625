//! Markdown summary as styled lines.
//!
//! Both terminal front ends print the summary report. They share this single
//! pulldown-cmark event walk and only differ in how a [`StyledLine`] is
//! painted.

use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};

/// Marker printed before every list item.
pub const BULLET: &str = "• ";

/// Block a line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Item,
    Paragraph,
    /// Separator between a block and the paragraph after it.
    Blank,
}

/// A run of text sharing one emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub strong: bool,
}

/// One output line with its markup resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub kind: LineKind,
    pub runs: Vec<TextRun>,
}

impl StyledLine {
    fn new(kind: LineKind) -> Self {
        Self {
            kind,
            runs: Vec::new(),
        }
    }

    /// Line text without markup or bullet.
    #[must_use]
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    fn push(&mut self, text: &str, strong: bool) {
        match self.runs.last_mut() {
            Some(last) if last.strong == strong => last.text.push_str(text),
            _ => self.runs.push(TextRun {
                text: text.to_owned(),
                strong,
            }),
        }
    }
}

/// Walk `markdown` and return one [`StyledLine`] per heading, list item and
/// paragraph. Escapes and inline markup are resolved by the parser.
#[must_use]
pub fn styled_lines(markdown: &str) -> Vec<StyledLine> {
    let mut lines = Vec::new();
    let mut current: Option<StyledLine> = None;
    let mut strong = 0usize;
    let mut list_depth = 0usize;

    for event in MdParser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                open_line(&mut lines, &mut current, LineKind::Heading);
            }
            Event::Start(Tag::Item) => open_line(&mut lines, &mut current, LineKind::Item),
            Event::Start(Tag::Paragraph) if list_depth == 0 => {
                if !lines.is_empty() || current.is_some() {
                    open_line(&mut lines, &mut current, LineKind::Blank);
                }
                open_line(&mut lines, &mut current, LineKind::Paragraph);
            }
            Event::End(TagEnd::Heading(_) | TagEnd::Item | TagEnd::Paragraph) => {
                lines.extend(current.take());
            }
            Event::Start(Tag::List(_)) => list_depth += 1,
            Event::End(TagEnd::List(_)) => list_depth = list_depth.saturating_sub(1),
            Event::Start(Tag::Strong) => strong += 1,
            Event::End(TagEnd::Strong) => strong = strong.saturating_sub(1),
            Event::Text(text) | Event::Code(text) => current
                .get_or_insert_with(|| StyledLine::new(LineKind::Paragraph))
                .push(&text, strong > 0),
            Event::SoftBreak | Event::HardBreak => {
                if let Some(line) = current.as_mut() {
                    line.push(" ", strong > 0);
                }
            }
            _ => {}
        }
    }
    lines.extend(current);
    lines
}

fn open_line(lines: &mut Vec<StyledLine>, current: &mut Option<StyledLine>, kind: LineKind) {
    lines.extend(current.take());
    *current = Some(StyledLine::new(kind));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Params;
    use crate::summary::render_summary;

    fn kinds(lines: &[StyledLine]) -> Vec<LineKind> {
        lines.iter().map(|l| l.kind).collect()
    }

    #[test]
    fn summary_structure() {
        let lines = styled_lines(&render_summary(&Params::default(), Ok(0.5)));
        assert_eq!(
            kinds(&lines),
            vec![
                LineKind::Heading,
                LineKind::Item,
                LineKind::Item,
                LineKind::Blank,
                LineKind::Paragraph,
            ]
        );
        assert_eq!(lines[0].text(), "Current settings");
        assert_eq!(lines[1].text(), "n = 200, β₁ (slope) = 2.0, σ (noise) = 1.0");
        assert_eq!(lines[2].text(), "Estimated Pearson r = 0.500");
        assert!(lines[3].runs.is_empty());
        assert!(lines[4].text().starts_with("Interpretation: Increasing σ"));
    }

    #[test]
    fn strong_runs_are_marked() {
        let lines = styled_lines("- **n** = 200, **β₁ (slope)** = 2.0");
        let runs = &lines[0].runs;
        assert_eq!(runs[0], TextRun { text: "n".into(), strong: true });
        assert_eq!(runs[1], TextRun { text: " = 200, ".into(), strong: false });
        assert_eq!(runs[2].text, "β₁ (slope)");
        assert!(runs[2].strong);
    }

    #[test]
    fn escaped_asterisks_stay_literal() {
        let lines = styled_lines("**x** and \\*y\\*");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "x and *y*");
        assert_eq!(lines[0].runs[0], TextRun { text: "x".into(), strong: true });
        assert!(!lines[0].runs[1].strong);

        let lines = styled_lines("a \\**b** c");
        assert!(lines[0].text().starts_with("a *"));
        assert!(lines[0].runs.iter().all(|run| !run.strong));
    }

    #[test]
    fn soft_breaks_join_paragraph_lines() {
        let lines = styled_lines("first\nsecond");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "first second");
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(styled_lines("").is_empty());
    }
}
