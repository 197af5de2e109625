//! Terminal styling for CLI display.

use console::style;

use corrlab_core::markdown::{styled_lines, LineKind, BULLET};

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// Render the markdown summary for a terminal.
///
/// Headings and strong spans lose their markup, list items get a bullet.
/// With `colored`, headings print bold cyan and strong spans bold.
#[must_use]
pub fn render_markdown(markdown: &str, colored: bool) -> String {
    let mut out = String::with_capacity(markdown.len());
    for line in styled_lines(markdown) {
        match line.kind {
            LineKind::Heading if colored => {
                out.push_str(&style(line.text()).bold().cyan().to_string());
            }
            LineKind::Heading => out.push_str(&line.text()),
            LineKind::Blank => {}
            LineKind::Item | LineKind::Paragraph => {
                if line.kind == LineKind::Item {
                    out.push_str(BULLET);
                }
                for run in &line.runs {
                    if run.strong && colored {
                        out.push_str(&style(&run.text).bold().to_string());
                    } else {
                        out.push_str(&run.text);
                    }
                }
            }
        }
        out.push('\n');
    }
    out
}
