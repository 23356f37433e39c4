//! Single-screen slide layout.
//!
//! ```text
//! ╭──────────────────────────────────────────────╮
//! │                    ╭───╮                     │
//! │                    │ ◍ │                     │
//! │                    ╰───╯                     │
//! │              Область применения              │
//! │   Нормы радиационной безопасности ...        │
//! │                                              │
//! │               ━━━ • • • • • • • • •          │
//! ╰──────────────────────────────────────────────╯
//! ┌─────────┐           1 / 10          ┌──────────┐
//! │ ‹ Назад │                           │ Вперёд › │
//! └─────────┘                           └──────────┘
//!      Используйте клавиши ← → для навигации
//! ```

use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Flex, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};
use ratatui::Frame;

use crate::icons::{Icon, IconRenderer};

use super::app::TuiApp;
use super::button::{Button, ButtonSize, ButtonVariant};
use super::transition;

/// Widest the slide column gets on large terminals.
const MAX_WIDTH: u16 = 90;
/// Nominal icon sizes: the slide badge and the inline chevrons.
const SLIDE_ICON_SIZE: u16 = 48;
const CHEVRON_SIZE: u16 = 20;

const PREVIOUS_LABEL: &str = "Назад";
const NEXT_LABEL: &str = "Вперёд";
const KEYBOARD_HINT: &str = "Используйте клавиши ← → для навигации  ·  q — выход";

const CURRENT_DOT: &str = "━━━";
const OTHER_DOT: &str = "•";

/// Draw the full viewer.
pub fn draw(f: &mut Frame, app: &mut TuiApp) {
    draw_at(f, app, Instant::now());
}

/// Draw the viewer as it looks at `now` (mid-transition frames depend on it).
pub fn draw_at(f: &mut Frame, app: &mut TuiApp, now: Instant) {
    app.settle_transition(now);

    let screen = f.area();
    let [column] = Layout::horizontal([Constraint::Max(MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(screen);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // slide card
            Constraint::Length(1), // gap
            Constraint::Length(ButtonSize::Large.height()), // prev / counter / next
            Constraint::Length(1), // gap
            Constraint::Length(1), // keyboard hint
        ])
        .split(column);

    let card = rows[0];
    match app.transition {
        None => draw_slide(f.buffer_mut(), app, card),
        Some(t) => {
            // Full-size card off screen, then slid in across the whole row band.
            let mut scratch = Buffer::empty(card);
            draw_slide(&mut scratch, app, card);
            let dx = t.shift(card.width, now);
            let band = Rect {
                x: screen.x,
                width: screen.width,
                ..card
            };
            transition::blit_shifted(&scratch, f.buffer_mut(), dx, band);
            for dot in &mut app.hit_areas.dots {
                *dot = transition::shift_rect(*dot, dx, band);
            }
        }
    }
    draw_nav(f, app, rows[2]);

    let hint = Paragraph::new(KEYBOARD_HINT)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, rows[4]);
}

fn draw_slide(buf: &mut Buffer, app: &mut TuiApp, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    block.render(area, buf);

    let Some(slide) = app.current_slide() else {
        app.hit_areas.dots.clear();
        return;
    };

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // top padding
            Constraint::Length(3), // icon badge
            Constraint::Length(1),
            Constraint::Length(2), // title
            Constraint::Min(1),    // body
            Constraint::Length(1), // dots
        ])
        .split(inner);

    Paragraph::new(app.icons.render(slide.icon, SLIDE_ICON_SIZE))
        .alignment(Alignment::Center)
        .render(parts[1], buf);

    Paragraph::new(Span::styled(
        slide.title.as_str(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .render(parts[3], buf);

    Paragraph::new(slide.content.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .render(parts[4].inner(Margin::new(3, 0)), buf);

    draw_dots(buf, app, parts[5]);
}

/// Dot indicators, centered. Records each dot's area for clicks.
fn draw_dots(buf: &mut Buffer, app: &mut TuiApp, area: Rect) {
    let current = app.presentation.current();
    let count = app.deck.len();
    let widths: Vec<u16> = (0..count)
        .map(|i| dot_symbol(i == current).chars().count() as u16)
        .collect();
    let total: u16 = widths.iter().sum::<u16>() + count.saturating_sub(1) as u16;

    let mut x = area.x + area.width.saturating_sub(total) / 2;
    app.hit_areas.dots.clear();
    for (i, width) in widths.into_iter().enumerate() {
        let dot = Rect::new(x, area.y, width, area.height.min(1)).intersection(area);
        let style = if i == current {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Paragraph::new(Span::styled(dot_symbol(i == current), style)).render(dot, buf);
        app.hit_areas.dots.push(dot);
        x = x.saturating_add(width + 1);
    }
}

fn dot_symbol(current: bool) -> &'static str {
    if current {
        CURRENT_DOT
    } else {
        OTHER_DOT
    }
}

/// Previous button, "n / total" counter, next button.
fn draw_nav(f: &mut Frame, app: &mut TuiApp, area: Rect) {
    let previous = Button::new(chevron_label(app.icons.as_ref(), Icon::ChevronLeft, PREVIOUS_LABEL, true))
        .variant(ButtonVariant::Outline)
        .size(ButtonSize::Large)
        .disabled(app.presentation.is_first());
    let next = Button::new(chevron_label(app.icons.as_ref(), Icon::ChevronRight, NEXT_LABEL, false))
        .variant(ButtonVariant::Outline)
        .size(ButtonSize::Large)
        .disabled(app.presentation.is_last());

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(previous.width()),
            Constraint::Min(0),
            Constraint::Length(next.width()),
        ])
        .split(area);

    f.render_widget(previous, cols[0]);
    f.render_widget(next, cols[2]);
    app.hit_areas.previous = cols[0];
    app.hit_areas.next = cols[2];

    let (position, total) = app.presentation.position();
    let counter_row = Rect {
        y: cols[1].y + cols[1].height / 2,
        height: cols[1].height.min(1),
        ..cols[1]
    };
    let counter = Paragraph::new(format!("{position} / {total}"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    f.render_widget(counter, counter_row);
}

/// "‹ Назад" or "Вперёд ›".
fn chevron_label(
    icons: &dyn IconRenderer,
    icon: Icon,
    label: &'static str,
    icon_first: bool,
) -> Line<'static> {
    let glyph: Vec<Span<'static>> = icons
        .render(icon, CHEVRON_SIZE)
        .lines
        .into_iter()
        .next()
        .map(|line| line.spans)
        .unwrap_or_default();
    let mut spans = Vec::new();
    if icon_first {
        spans.extend(glyph);
        spans.push(Span::raw(format!(" {label}")));
    } else {
        spans.push(Span::raw(format!("{label} ")));
        spans.extend(glyph);
    }
    Line::from(spans)
}
