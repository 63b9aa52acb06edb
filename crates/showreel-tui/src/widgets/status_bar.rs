use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use showreel_core::{CarouselView, Mode as NavMode, ViewportSource};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, view: &CarouselView) {
        let mode_str = match (app.mode, view.mode) {
            (Mode::Help, _) => "HELP",
            (Mode::Normal, NavMode::Mobile) => "MOBILE",
            (Mode::Normal, NavMode::Desktop) => "DESKTOP",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {} | {} | {}px",
                mode_str,
                position(view, app.config.carousel.visible_count),
                app.theme_mode.label(),
                app.carousel.source().viewport_width(),
            )
        };

        let help_hint = match view.mode {
            NavMode::Mobile => " drag:swipe 1-9:group t:theme o:open ?:help q:quit ",
            NavMode::Desktop => " ←/→:slide t:theme o:open ?:help q:quit ",
        };
        let padding_len = usize::from(area.width)
            .saturating_sub(status_text.width() + help_hint.width());

        let bar = Style::default().bg(app.theme.bar_bg);
        let line = Line::from(vec![
            Span::styled(status_text, bar.fg(app.theme.heading)),
            Span::styled(" ".repeat(padding_len), bar),
            Span::styled(help_hint, bar.fg(app.theme.muted)),
        ]);

        frame.render_widget(Paragraph::new(line).style(bar), area);
    }
}

/// "3 of 7" on mobile, "2-4 of 7" for a desktop window
fn position(view: &CarouselView, visible_count: usize) -> String {
    if view.len == 0 {
        return "empty".to_string();
    }
    let range = view.visible_range(visible_count);
    if range.len() <= 1 {
        format!("{} of {}", range.start + 1, view.len)
    } else {
        format!("{}-{} of {}", range.start + 1, range.end, view.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showreel_core::carousel::FixedViewport;
    use showreel_core::{Carousel, SlideGeometry};

    fn view(width: u32, steps: usize) -> CarouselView {
        let mut carousel = Carousel::new(SlideGeometry::new(7, 3, 3), FixedViewport(width), 768, 10);
        for _ in 0..steps {
            carousel.next_slide();
        }
        carousel.view()
    }

    #[test]
    fn test_position_text() {
        assert_eq!(position(&view(400, 0), 3), "1 of 7");
        assert_eq!(position(&view(1024, 1), 3), "2-4 of 7");
    }
}
