mod layout;
mod logo;
pub mod theme;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::app::Panel;
use crate::utils::text_width;
use layout::{field_width, push_field, push_header};
use theme::{COLOR_BAND, COLOR_VALUE, SWATCHES, accent_for};

const LOGO_GAP: usize = 2;
const SWATCH: &str = "   ";

pub fn render(frame: &mut Frame, panel: &Panel) {
    let area = frame.area();
    render_panel(area, frame.buffer_mut(), panel);
}

/// Logo on the left, header, fields and swatches on the right.
pub fn render_panel(area: Rect, buf: &mut Buffer, panel: &Panel) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let accent = accent_for(panel.platform());
    let logo = logo::logo_for(panel.platform());
    let logo_cols = (logo::logo_width(logo) + LOGO_GAP) as u16;
    let [logo_area, info_area] =
        Layout::horizontal([Constraint::Length(logo_cols), Constraint::Min(0)]).areas(area);

    let logo_style = Style::default().fg(accent);
    let logo_lines = logo
        .iter()
        .map(|line| Line::from(Span::styled(*line, logo_style)))
        .collect::<Vec<_>>();
    Paragraph::new(logo_lines).render(logo_area, buf);

    let info = info_lines(panel, info_area.width as usize);
    Paragraph::new(info).render(info_area, buf);
}

fn info_lines(panel: &Panel, width: usize) -> Vec<Line<'static>> {
    let accent = accent_for(panel.platform());
    let name_style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(COLOR_VALUE);
    let facts = panel.facts();

    let mut lines = Vec::new();
    push_header(&mut lines, &facts.username, &facts.hostname, name_style);
    for field in panel.fields() {
        push_field(
            &mut lines,
            field.title(),
            field.display_value(),
            width,
            name_style,
            value_style,
        );
    }
    lines.push(Line::from(""));
    lines.push(swatch_row(&SWATCHES));
    lines.push(band_row(SWATCHES.len()));
    lines
}

fn swatch_row(colors: &[Color]) -> Line<'static> {
    Line::from(
        colors
            .iter()
            .map(|color| Span::styled(SWATCH, Style::default().bg(*color)))
            .collect::<Vec<_>>(),
    )
}

fn band_row(swatches: usize) -> Line<'static> {
    Line::from(Span::styled(
        SWATCH.repeat(swatches),
        Style::default().bg(COLOR_BAND),
    ))
}

/// Columns and rows the panel needs without cutting anything.
pub fn panel_size(panel: &Panel) -> (u16, u16) {
    let logo = logo::logo_for(panel.platform());
    let facts = panel.facts();
    let info_width = panel
        .fields()
        .iter()
        .map(|field| field_width(field.title(), field.display_value()))
        .chain([
            1 + text_width(&facts.username) + text_width(&facts.hostname),
            SWATCH.len() * SWATCHES.len(),
        ])
        .max()
        .unwrap_or(0);
    let info_height = 2 + panel.fields().len() + 3;
    let width = logo::logo_width(logo) + LOGO_GAP + info_width;
    let height = logo.len().max(info_height);
    (
        width.min(u16::MAX as usize) as u16,
        height.min(u16::MAX as usize) as u16,
    )
}

/// The panel as uncolored text rows, for output that is not a terminal.
pub fn render_plain(panel: &Panel) -> Vec<String> {
    let (width, height) = panel_size(panel);
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    render_panel(area, &mut buf, panel);
    buffer_lines(&buf)
}

fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    let mut lines = (area.top()..area.bottom())
        .map(|y| {
            let mut line = String::new();
            let mut skip = 0;
            for x in area.left()..area.right() {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                let symbol = buf.cell((x, y)).map(|cell| cell.symbol()).unwrap_or(" ");
                skip = text_width(symbol).saturating_sub(1);
                line.push_str(symbol);
            }
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}
