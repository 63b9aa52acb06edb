use ratatui::{
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};
use showreel_core::carousel::IndicatorGroups;

use super::layout::ScreenLayout;
use crate::theme::Theme;

/// Mobile indicator dots, one per slide group
pub struct IndicatorWidget;

impl IndicatorWidget {
    pub fn render(frame: &mut Frame, layout: &ScreenLayout, indicator: &IndicatorGroups, theme: &Theme) {
        if layout.dots.height == 0 {
            return;
        }

        for (group, active) in indicator.dots() {
            let area = layout.dot_rect(group, indicator.count);
            if area.width == 0 {
                continue;
            }
            let (glyph, color) = if active {
                ("━━", theme.highlight)
            } else {
                ("──", theme.dot_idle)
            };
            frame.render_widget(
                Paragraph::new(Span::styled(glyph, Style::default().fg(color).bg(theme.bg))),
                area,
            );
        }
    }
}
