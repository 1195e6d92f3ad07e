//! Lightweight markdown parsing and styled text rendering.
//!
//! Advisor replies arrive as markdown. The reveal shows an arbitrary prefix
//! of that text, so the parser is tolerant: unterminated markers simply
//! style the rest of the line.

use eframe::egui;
use once_cell::sync::Lazy;
use regex::Regex;

use super::theme::AdvisorTheme;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("URL regex pattern is valid"));

/// A styled run of text within one line
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TextSpan {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
}

/// One parsed line of markdown
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Line {
    /// Heading with level 1-3
    Heading(u8, Vec<TextSpan>),
    /// Bulleted list item
    Bullet(Vec<TextSpan>),
    Text(Vec<TextSpan>),
}

/// Parse inline markers (`**`, `*`, `` ` ``) into styled spans.
pub(crate) fn parse_inline(text: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut bold = false;
    let mut italic = false;
    let mut code = false;

    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    let flush = |current: &mut String, bold: bool, italic: bool, code: bool, spans: &mut Vec<TextSpan>| {
        if !current.is_empty() {
            spans.push(TextSpan {
                text: std::mem::take(current),
                bold,
                italic,
                code,
            });
        }
    };

    while i < chars.len() {
        match chars[i] {
            // Backtick toggles code verbatim; other markers are literal inside
            '`' => {
                flush(&mut current, bold, italic, code, &mut spans);
                code = !code;
                i += 1;
            }
            '*' if !code => {
                flush(&mut current, bold, italic, code, &mut spans);
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    bold = !bold;
                    i += 2;
                } else {
                    italic = !italic;
                    i += 1;
                }
            }
            ch => {
                current.push(ch);
                i += 1;
            }
        }
    }
    flush(&mut current, bold, italic, code, &mut spans);
    spans
}

/// Split markdown text into parsed lines.
pub(crate) fn parse_lines(text: &str) -> Vec<Line> {
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            if let Some(rest) = trimmed.strip_prefix("### ") {
                Line::Heading(3, parse_inline(rest))
            } else if let Some(rest) = trimmed.strip_prefix("## ") {
                Line::Heading(2, parse_inline(rest))
            } else if let Some(rest) = trimmed.strip_prefix("# ") {
                Line::Heading(1, parse_inline(rest))
            } else if let Some(rest) = trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("* "))
            {
                Line::Bullet(parse_inline(rest))
            } else {
                Line::Text(parse_inline(line))
            }
        })
        .collect()
}

/// Render markdown text as styled spans with hyperlinked URLs.
///
/// `caret` appends the blinking-cursor glyph after the last span, used
/// while the reveal is still printing.
pub(crate) fn render_markdown(
    ui: &mut egui::Ui,
    text: &str,
    theme: &AdvisorTheme,
    caret: bool,
) {
    let lines = parse_lines(text);
    if lines.is_empty() {
        // Nothing revealed yet; the caret still blinks on its own
        if caret {
            ui.label(egui::RichText::new("\u{258c}").size(14.0).color(theme.accent));
        }
        return;
    }
    let last = lines.len().saturating_sub(1);
    for (i, line) in lines.into_iter().enumerate() {
        let line_caret = caret && i == last;
        match line {
            Line::Heading(level, spans) => {
                let size = match level {
                    1 => 20.0,
                    2 => 17.0,
                    _ => 15.0,
                };
                render_spans(ui, &spans, theme, size, true, line_caret);
            }
            Line::Bullet(spans) => {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    ui.label(egui::RichText::new("  • ").size(14.0).color(theme.text_primary));
                    render_spans_inner(ui, &spans, theme, 14.0, false, line_caret);
                });
            }
            Line::Text(spans) => {
                render_spans(ui, &spans, theme, 14.0, false, line_caret);
            }
        }
    }
}

fn render_spans(
    ui: &mut egui::Ui,
    spans: &[TextSpan],
    theme: &AdvisorTheme,
    size: f32,
    heading: bool,
    caret: bool,
) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        render_spans_inner(ui, spans, theme, size, heading, caret);
    });
}

fn render_spans_inner(
    ui: &mut egui::Ui,
    spans: &[TextSpan],
    theme: &AdvisorTheme,
    size: f32,
    heading: bool,
    caret: bool,
) {
    for span in spans {
        // Split into words so URLs become hyperlinks
        for word in span.text.split_inclusive(char::is_whitespace) {
            if URL_RE.is_match(word.trim()) {
                let url = word.trim();
                ui.hyperlink_to(
                    egui::RichText::new(url).size(size).color(theme.link),
                    url,
                );
                if word.ends_with(char::is_whitespace) {
                    ui.label(" ");
                }
            } else if span.code {
                ui.label(
                    egui::RichText::new(word)
                        .size(size)
                        .monospace()
                        .color(theme.code),
                );
            } else {
                let mut rich = egui::RichText::new(word).size(size).color(theme.text_primary);
                if span.bold || heading {
                    rich = rich.strong();
                }
                if span.italic {
                    rich = rich.italics();
                }
                ui.label(rich);
            }
        }
    }
    if caret {
        ui.label(egui::RichText::new("\u{258c}").size(size).color(theme.accent));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> TextSpan {
        TextSpan {
            text: text.into(),
            bold: false,
            italic: false,
            code: false,
        }
    }

    #[test]
    fn test_parse_inline_bold_and_italic() {
        let spans = parse_inline("try **Tiong Bahru** or *Katong*");
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0], plain("try "));
        assert!(spans[1].bold);
        assert_eq!(spans[1].text, "Tiong Bahru");
        assert_eq!(spans[2], plain(" or "));
        assert!(spans[3].italic);
        assert_eq!(spans[3].text, "Katong");
    }

    #[test]
    fn test_parse_inline_code_is_verbatim() {
        let spans = parse_inline("run `foo **bar**` now");
        assert_eq!(spans.len(), 3);
        assert!(spans[1].code);
        assert_eq!(spans[1].text, "foo **bar**");
    }

    #[test]
    fn test_unterminated_marker_styles_rest_of_line() {
        // Happens constantly mid-reveal; must not lose text
        let spans = parse_inline("a **b");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "a ");
        assert!(spans[1].bold);
        assert_eq!(spans[1].text, "b");
    }

    #[test]
    fn test_parse_lines_headings_and_bullets() {
        let lines = parse_lines("# Title\n- one\n* two\nplain");
        assert!(matches!(lines[0], Line::Heading(1, _)));
        assert!(matches!(lines[1], Line::Bullet(_)));
        assert!(matches!(lines[2], Line::Bullet(_)));
        assert!(matches!(lines[3], Line::Text(_)));
    }
}
