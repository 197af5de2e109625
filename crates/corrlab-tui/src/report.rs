//! Summary panel: the markdown report rendered as styled lines.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use corrlab_core::markdown::{styled_lines, LineKind, BULLET};

use crate::styles::ColorTheme;

/// Convert the summary markdown into styled lines.
///
/// Headings take the header style, strong runs are bold and list items get
/// a bullet.
#[must_use]
pub fn markdown_lines(markdown: &str, theme: &ColorTheme) -> Vec<Line<'static>> {
    styled_lines(markdown)
        .into_iter()
        .map(|line| match line.kind {
            LineKind::Heading => Line::styled(line.text(), theme.header_style()),
            LineKind::Blank => Line::default(),
            LineKind::Item | LineKind::Paragraph => {
                let bullet = (line.kind == LineKind::Item).then(|| Span::raw(BULLET));
                let runs = line.runs.into_iter().map(|run| {
                    if run.strong {
                        Span::styled(run.text, theme.bold_style())
                    } else {
                        Span::raw(run.text)
                    }
                });
                Line::from(bullet.into_iter().chain(runs).collect::<Vec<_>>())
            }
        })
        .collect()
}

/// Render the summary panel.
pub fn render_report(frame: &mut Frame, area: Rect, summary: Option<&str>, theme: &ColorTheme) {
    let lines = summary.map_or_else(
        || vec![Line::styled("Evaluating…", theme.muted_style())],
        |md| markdown_lines(md, theme),
    );
    let paragraph = Paragraph::new(lines)
        .block(Block::bordered().title(" Summary "))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use corrlab_core::params::Params;
    use corrlab_core::summary::render_summary;
    use ratatui::style::Modifier;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn heading_and_bold_spans() {
        let md = render_summary(&Params::default(), Ok(0.5));
        let theme = ColorTheme::default();
        let lines = markdown_lines(&md, &theme);

        assert_eq!(lines.len(), 5);
        assert_eq!(plain(&lines[0]), "Current settings");
        assert_eq!(lines[0].style, theme.header_style());
        assert_eq!(
            plain(&lines[1]),
            "• n = 200, β₁ (slope) = 2.0, σ (noise) = 1.0"
        );
        assert_eq!(plain(&lines[2]), "• Estimated Pearson r = 0.500");
        assert!(lines[3].spans.is_empty());

        let bold = &lines[1].spans[1];
        assert_eq!(bold.content, "n");
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn escaped_asterisks_are_not_bold() {
        let theme = ColorTheme::default();
        let lines = markdown_lines("a \\**b** c and **d**", &theme);
        assert_eq!(lines.len(), 1);
        assert!(plain(&lines[0]).starts_with("a *"));
        let bold: Vec<&str> = lines[0]
            .spans
            .iter()
            .filter(|s| s.style.add_modifier.contains(Modifier::BOLD))
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(bold, vec!["d"]);
    }

    #[test]
    fn renders_with_and_without_summary() {
        use ratatui::backend::TestBackend;
        use ratatui::Terminal;

        let md = render_summary(&Params::default(), Ok(0.962));
        for summary in [Some(md.as_str()), None] {
            let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
            terminal
                .draw(|frame| {
                    let area = frame.area();
                    render_report(frame, area, summary, &ColorTheme::default());
                })
                .unwrap();
        }
    }
}
