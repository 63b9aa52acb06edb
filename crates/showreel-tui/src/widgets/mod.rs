mod carousel;
mod header;
mod indicator;
mod layout;
mod popup;
mod status_bar;

pub use carousel::CarouselWidget;
pub use header::HeaderWidget;
pub use indicator::IndicatorWidget;
pub use layout::ScreenLayout;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;

use ratatui::{style::Style, widgets::Block, Frame};

use crate::app::{App, Mode};

/// Draw one full frame with the track shifted by `offset_percent`
pub fn draw(frame: &mut Frame, app: &App, offset_percent: f64) {
    let area = frame.area();
    let view = app.view();
    let layout = ScreenLayout::new(area, view.mode);

    frame.render_widget(Block::default().style(Style::default().bg(app.theme.bg)), area);

    HeaderWidget::render(frame, layout.header, &app.theme);
    CarouselWidget::render(frame, &layout, app, &view, offset_percent);
    if let Some(indicator) = &view.indicator {
        IndicatorWidget::render(frame, &layout, indicator, &app.theme);
    }
    StatusBarWidget::render(frame, layout.status, app, &view);

    if app.mode == Mode::Help {
        PopupWidget::render_help(frame, app);
    }
}
