use super::{Viewer, FOOTER_HEIGHT, HEADER_HEIGHT, OVERLAY_MARGIN, OVERLAY_WIDTH_PERCENT};
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::syntax::HighlightSpan;
use crate::kernel::viewport::expand_tabs_from;
use crate::kernel::{ExplainContent, ExplainPhase, OverlayView};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const VIEWER_HELP: &[Command] = &[
    Command::CursorUp,
    Command::CursorDown,
    Command::ExtendUp,
    Command::ExtendDown,
    Command::PageUp,
    Command::PageDown,
    Command::CursorFileStart,
    Command::CursorFileEnd,
    Command::Explain,
    Command::ShowHelp,
    Command::Quit,
];

const OVERLAY_HELP: &[Command] = &[
    Command::ScrollUp,
    Command::ScrollDown,
    Command::ScrollPageUp,
    Command::ScrollPageDown,
    Command::Dismiss,
];

pub(super) fn render(viewer: &mut Viewer, frame: &mut Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    viewer.sync_viewport_height(chunks[1].height as usize);

    render_header(viewer, frame, chunks[0]);
    render_lines(viewer, frame, chunks[1]);
    render_footer(viewer, frame, chunks[2]);
    render_overlays(viewer, frame, area);
}

fn render_header(viewer: &Viewer, frame: &mut Frame, area: Rect) {
    let mut title = format!(
        " code-xray — {} [{}]",
        viewer.document.file_name(),
        viewer.document.language().name()
    );
    if !viewer.model.is_empty() {
        title.push_str("  model: ");
        title.push_str(&viewer.model);
    }

    let style = Style::default()
        .fg(viewer.theme.header_fg)
        .bg(viewer.theme.header_bg)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(Line::from(title)).style(style), area);
}

fn render_lines(viewer: &Viewer, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }

    let range = viewer.selection.active_range();
    let gutter_style = Style::default().fg(viewer.theme.gutter_fg);
    let tab_size = viewer.config.tab_size;

    let lines: Vec<Line> = viewer
        .viewport
        .visible_range(viewer.document.len())
        .map(|index| {
            let text = viewer.document.line(index).unwrap_or_default();
            let spans = viewer
                .highlights
                .get(index)
                .map(Vec::as_slice)
                .unwrap_or_default();

            let mut out = vec![Span::styled(format!("{:>4}  ", index + 1), gutter_style)];
            out.extend(styled_segments(viewer, text, spans, tab_size));

            let line = Line::from(out);
            if range.contains(index) {
                line.style(viewer.theme.selected_style())
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Splits a line at its highlight boundaries, expanding tabs against the whole line.
fn styled_segments(
    viewer: &Viewer,
    text: &str,
    spans: &[HighlightSpan],
    tab_size: u8,
) -> Vec<Span<'static>> {
    let mut out = Vec::with_capacity(spans.len() * 2 + 1);
    let mut display_col = 0u32;
    let mut pos = 0usize;

    for span in spans {
        let start = span.start.min(text.len());
        let end = span.end.min(text.len());
        if start < pos || start >= end {
            continue;
        }
        if let Some(plain) = text.get(pos..start) {
            if !plain.is_empty() {
                out.push(Span::raw(expand_tabs_from(plain, tab_size, &mut display_col)));
            }
        }
        if let Some(colored) = text.get(start..end) {
            out.push(Span::styled(
                expand_tabs_from(colored, tab_size, &mut display_col),
                viewer.theme.syntax_style(span.kind),
            ));
            pos = end;
        } else {
            pos = start;
        }
    }

    if let Some(rest) = text.get(pos..) {
        if !rest.is_empty() {
            out.push(Span::raw(expand_tabs_from(rest, tab_size, &mut display_col)));
        }
    }
    out
}

fn render_footer(viewer: &Viewer, frame: &mut Frame, area: Rect) {
    let base = Style::default()
        .fg(viewer.theme.footer_fg)
        .bg(viewer.theme.footer_bg);

    let range = viewer.selection.active_range();
    let mut left = format!(" Ln {}/{}", range, viewer.document.len());
    if let Some(label) = phase_label(viewer.explain.phase()) {
        left.push_str("  ");
        left.push_str(label);
    }

    let hints = if viewer.overlay.is_empty() {
        "↑↓ move  Shift+↑↓ select  Enter explain  ? help  q quit "
    } else {
        "↑↓ scroll  Esc close "
    };

    let width = area.width as usize;
    let gap = width.saturating_sub(left.width() + hints.width());
    let line = if gap > 0 {
        Line::from(vec![
            Span::raw(left),
            Span::raw(" ".repeat(gap)),
            Span::raw(hints),
        ])
    } else {
        Line::from(left)
    };
    frame.render_widget(Paragraph::new(line).style(base), area);
}

fn phase_label(phase: ExplainPhase) -> Option<&'static str> {
    match phase {
        ExplainPhase::Idle | ExplainPhase::Superseded => None,
        ExplainPhase::InFlight => Some("explaining..."),
        ExplainPhase::Delivered => Some("explained"),
        ExplainPhase::Failed => Some("explain failed"),
    }
}

fn render_overlays(viewer: &mut Viewer, frame: &mut Frame, area: Rect) {
    let height = area.height.saturating_sub(OVERLAY_MARGIN * 2);
    let popup = centered_rect(OVERLAY_WIDTH_PERCENT, height, area);
    if popup.width < 3 || popup.height < 3 {
        viewer.last_overlay_body = None;
        return;
    }

    let mut body = None;
    for view in viewer.overlay.iter() {
        frame.render_widget(Clear, popup);

        let border_style = Style::default().fg(viewer.theme.overlay_border);
        let (title, paragraph) = match view {
            OverlayView::Explain {
                range,
                content,
                scroll,
                ..
            } => (
                format!(" Explanation: lines {range} "),
                explain_paragraph(viewer, content).scroll((*scroll, 0)),
            ),
            OverlayView::Help => (" Key bindings ".to_string(), help_paragraph(viewer)),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title)
            .title_bottom(Line::from(" Esc close ").alignment(Alignment::Right));
        let inner = block.inner(popup);
        frame.render_widget(paragraph.block(block), popup);
        body = Some(inner);
    }
    viewer.last_overlay_body = body;
}

fn explain_paragraph(viewer: &Viewer, content: &ExplainContent) -> Paragraph<'static> {
    let style = match content {
        ExplainContent::Loading => Style::default()
            .fg(viewer.theme.muted_fg)
            .add_modifier(Modifier::ITALIC),
        ExplainContent::Text(_) => Style::default(),
        ExplainContent::Error(_) => Style::default().fg(viewer.theme.error_fg),
    };
    let lines: Vec<Line> = content
        .display_text()
        .lines()
        .map(|line| Line::styled(line.to_string(), style))
        .collect();
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

fn help_paragraph(viewer: &Viewer) -> Paragraph<'static> {
    let heading = Style::default()
        .fg(viewer.theme.header_fg)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::styled("Viewer", heading)];
    lines.extend(help_rows(viewer, KeybindingContext::Viewer, VIEWER_HELP));
    lines.push(Line::raw(""));
    lines.push(Line::styled("Overlay", heading));
    lines.extend(help_rows(viewer, KeybindingContext::Overlay, OVERLAY_HELP));
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

fn help_rows(
    viewer: &Viewer,
    context: KeybindingContext,
    commands: &[Command],
) -> Vec<Line<'static>> {
    let bindings = viewer.keybindings.bindings(context);
    commands
        .iter()
        .filter_map(|command| {
            let mut keys: Vec<String> = bindings
                .iter()
                .filter(|(_, bound)| *bound == command)
                .map(|(key, _)| key.to_string())
                .collect();
            if keys.is_empty() {
                return None;
            }
            keys.sort();
            Some(Line::raw(format!(
                "  {:<28}{}",
                keys.join(", "),
                command.description()
            )))
        })
        .collect()
}

fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width = area.width.saturating_mul(width_percent).saturating_div(100);
    let min_width = 10.min(area.width);
    let width = width.max(min_width).min(area.width);

    let min_height = 3.min(area.height);
    let height = height.max(min_height).min(area.height);

    let x = area.x + (area.width.saturating_sub(width) / 2);
    let y = area.y + (area.height.saturating_sub(height) / 2);

    Rect::new(x, y, width, height)
}
