use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;

const SUBTITLE: &str =
    "Explore detailed case studies showcasing our innovative applications and industry impact.";

/// Section heading above the track
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let heading = Line::from(vec![
            Span::styled(
                "Case ",
                Style::default().fg(theme.heading).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Study",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
        ]);
        let subtitle = Line::from(Span::styled(SUBTITLE, Style::default().fg(theme.text)));

        let paragraph = Paragraph::new(vec![heading, subtitle])
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.bg));
        frame.render_widget(paragraph, area);
    }
}
