use ratatui::prelude::Style;
use ratatui::text::{Line, Span};

use crate::utils::{fit_text, text_width};

const FIELD_SEP: &str = ": ";

pub(super) fn push_header(
    lines: &mut Vec<Line<'static>>,
    user: &str,
    host: &str,
    name_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(user.to_string(), name_style),
        Span::raw("@"),
        Span::styled(host.to_string(), name_style),
    ]));
    let rule = 1 + text_width(user) + text_width(host);
    lines.push(Line::from("-".repeat(rule)));
}

/// `Title: value`, with the value cut to what `width` leaves over.
pub(super) fn push_field(
    lines: &mut Vec<Line<'static>>,
    title: &str,
    value: &str,
    width: usize,
    title_style: Style,
    value_style: Style,
) {
    let used = text_width(title) + text_width(FIELD_SEP);
    let max_value = width.saturating_sub(used).max(1);
    lines.push(Line::from(vec![
        Span::styled(title.to_string(), title_style),
        Span::raw(FIELD_SEP),
        Span::styled(fit_text(value, max_value), value_style),
    ]));
}

pub(super) fn field_width(title: &str, value: &str) -> usize {
    text_width(title) + text_width(FIELD_SEP) + text_width(value)
}
