use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use showreel_core::{CarouselView, CaseStudy, Mode as NavMode};

use super::layout::ScreenLayout;
use crate::app::App;
use crate::theme::Theme;

/// Description lines kept per card before clamping
const MOBILE_DESCRIPTION_LINES: u16 = 6;
const DESKTOP_DESCRIPTION_LINES: u16 = 4;

/// The slide track: one card per case study, shifted horizontally
pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(
        frame: &mut Frame,
        layout: &ScreenLayout,
        app: &App,
        view: &CarouselView,
        offset_percent: f64,
    ) {
        let track = layout.track;
        if track.width == 0 || track.height == 0 {
            return;
        }

        if view.len == 0 {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No case studies",
                Style::default().fg(app.theme.muted),
            )))
            .alignment(Alignment::Center);
            let row = Rect::new(track.x, track.y + track.height / 2, track.width, 1);
            frame.render_widget(empty, row);
            return;
        }

        let description_lines = match view.mode {
            NavMode::Mobile => MOBILE_DESCRIPTION_LINES,
            NavMode::Desktop => DESKTOP_DESCRIPTION_LINES,
        };

        for (index, study) in app.catalog.iter().enumerate() {
            let Some(slot) = slide_rect(track, view.offset.item_width_percent, offset_percent, index)
            else {
                continue;
            };
            render_card(frame, card_rect(slot), study, &app.theme, description_lines);
        }

        if view.controls.show_prev {
            render_control(frame, layout.prev_control(), "‹", &app.theme);
        }
        if view.controls.show_next {
            render_control(frame, layout.next_control(), "›", &app.theme);
        }
    }
}

/// Columns covered by slide `index`, clipped to the track
fn slide_rect(track: Rect, item_width_percent: f64, offset_percent: f64, index: usize) -> Option<Rect> {
    let width = f64::from(track.width);
    let item = item_width_percent / 100.0 * width;
    let left = offset_percent / 100.0 * width + item * index as f64;
    let right = left + item;

    let left = left.round().max(0.0);
    let right = right.round().min(width);
    if right - left < 1.0 {
        return None;
    }

    Some(Rect::new(
        track.x + left as u16,
        track.y,
        (right - left) as u16,
        track.height,
    ))
}

/// Leave a one-column gutter on each side of a card
fn card_rect(slot: Rect) -> Rect {
    if slot.width > 4 {
        Rect::new(slot.x + 1, slot.y, slot.width - 2, slot.height)
    } else {
        slot
    }
}

fn render_card(frame: &mut Frame, area: Rect, study: &CaseStudy, theme: &Theme, description_lines: u16) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.card_border))
        .style(Style::default().bg(theme.card_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title, image, _, description, _, button] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Max(description_lines),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            study.title.as_str(),
            Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        title,
    );

    if !study.image.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("▣ {}", study.image),
                Style::default().fg(theme.muted),
            ))
            .alignment(Alignment::Center),
            image,
        );
    }

    frame.render_widget(
        Paragraph::new(study.description.as_str())
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: true }),
        description,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            " Download Case Study ⬇ ",
            Style::default()
                .fg(theme.on_accent)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        button,
    );
}

fn render_control(frame: &mut Frame, area: Rect, glyph: &str, theme: &Theme) {
    let control = Paragraph::new(Span::styled(
        glyph,
        Style::default()
            .fg(theme.on_accent)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .style(Style::default().bg(theme.accent));
    frame.render_widget(control, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_slides_split_track() {
        let track = Rect::new(0, 3, 120, 20);
        let item = 100.0 / 3.0;
        assert_eq!(slide_rect(track, item, 0.0, 0), Some(Rect::new(0, 3, 40, 20)));
        assert_eq!(slide_rect(track, item, 0.0, 2), Some(Rect::new(80, 3, 40, 20)));
        assert_eq!(slide_rect(track, item, 0.0, 3), None);
    }

    #[test]
    fn test_shifted_track() {
        let track = Rect::new(0, 3, 120, 20);
        let item = 100.0 / 3.0;
        assert_eq!(slide_rect(track, item, -item, 0), None);
        assert_eq!(slide_rect(track, item, -item, 1), Some(Rect::new(0, 3, 40, 20)));
    }

    #[test]
    fn test_mid_transition_clips_partial_slides() {
        let track = Rect::new(0, 3, 60, 20);
        // halfway between slide 0 and slide 1 in mobile mode
        assert_eq!(slide_rect(track, 100.0, -50.0, 0), Some(Rect::new(0, 3, 30, 20)));
        assert_eq!(slide_rect(track, 100.0, -50.0, 1), Some(Rect::new(30, 3, 30, 20)));
    }

    #[test]
    fn test_card_gutter() {
        assert_eq!(card_rect(Rect::new(10, 0, 40, 5)), Rect::new(11, 0, 38, 5));
        assert_eq!(card_rect(Rect::new(10, 0, 3, 5)), Rect::new(10, 0, 3, 5));
    }
}
