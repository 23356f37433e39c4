//! Button primitive — a bordered label that can be disabled.
//!
//! Click handling lives with the caller: the renderer records the area a
//! button was drawn in and the mouse handler hit-tests against it.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Outline,
    Solid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    /// One row, bracketed label.
    Small,
    /// Three rows, boxed label.
    #[default]
    Large,
}

impl ButtonSize {
    pub fn height(self) -> u16 {
        match self {
            ButtonSize::Small => 1,
            ButtonSize::Large => 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Button<'a> {
    content: Line<'a>,
    disabled: bool,
    variant: ButtonVariant,
    size: ButtonSize,
}

impl<'a> Button<'a> {
    pub fn new(content: impl Into<Line<'a>>) -> Self {
        Self {
            content: content.into(),
            disabled: false,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Label width plus border/padding.
    pub fn width(&self) -> u16 {
        self.content.width() as u16 + 4
    }

    fn style(&self) -> Style {
        match (self.disabled, self.variant) {
            (true, _) => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
            (false, ButtonVariant::Outline) => Style::default().fg(Color::White),
            (false, ButtonVariant::Solid) => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        match self.size {
            ButtonSize::Large => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(style)
                    .style(style);
                Paragraph::new(self.content)
                    .alignment(Alignment::Center)
                    .style(style)
                    .block(block)
                    .render(area, buf);
            }
            ButtonSize::Small => {
                let mut spans: Vec<Span> = vec![Span::raw("[ ")];
                spans.extend(self.content.spans);
                spans.push(Span::raw(" ]"));
                Paragraph::new(Line::from(spans))
                    .alignment(Alignment::Center)
                    .style(style)
                    .render(area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn large_button_is_boxed() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        Button::new("Next").render(area, &mut buf);
        assert_eq!(row(&buf, 0), "┌────────┐");
        assert!(row(&buf, 1).contains("Next"));
    }

    #[test]
    fn small_button_is_bracketed() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        Button::new("Ok").size(ButtonSize::Small).render(area, &mut buf);
        assert!(row(&buf, 0).contains("[ Ok ]"));
    }

    #[test]
    fn disabled_button_is_dimmed() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        Button::new("Prev").disabled(true).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, Color::DarkGray);
        assert!(buf[(4, 1)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn solid_variant_fills_background() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        Button::new("Go")
            .variant(ButtonVariant::Solid)
            .render(area, &mut buf);
        assert_eq!(buf[(5, 1)].bg, Color::Cyan);
    }

    #[test]
    fn width_includes_padding() {
        assert_eq!(Button::new("Назад").width(), 9);
        assert_eq!(ButtonSize::Small.height(), 1);
        assert_eq!(ButtonSize::Large.height(), 3);
    }
}
