use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the key binding overlay
    pub fn render_help(frame: &mut Frame, app: &App) {
        let area = frame.area();
        let theme = &app.theme;
        let keymap = &app.config.keymap;

        let entries = [
            (format!("{} / {}", keymap.prev_slide, keymap.next_slide), "previous / next window (desktop)"),
            ("Home / End".to_string(), "first / last window (desktop)"),
            ("1-9".to_string(), "jump to slide group (mobile)"),
            ("drag".to_string(), "swipe between slides (mobile)"),
            ("click".to_string(), "controls (desktop), dots (mobile)"),
            (keymap.toggle_theme.clone(), "toggle dark / light theme"),
            (keymap.open_link.clone(), "open case study download"),
            (keymap.help.clone(), "toggle this help"),
            (keymap.quit.clone(), "quit"),
        ];

        let mut lines = vec![Line::from("")];
        for (key, description) in &entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:>15}  ", truncate_str(key, 15)),
                    Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*description, Style::default().fg(theme.text)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled("press any key to close", Style::default().fg(theme.muted)))
                .alignment(Alignment::Center),
        );

        let popup_width = 56u16.min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.card_bg));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Truncate a string to max length with ellipsis
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(50, 10, area), Rect::new(25, 15, 50, 10));
        assert_eq!(centered_rect(200, 10, area).x, 0);
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("<Left>", 15), "<Left>");
        assert_eq!(truncate_str("abcdefghij", 6), "abc...");
    }
}
