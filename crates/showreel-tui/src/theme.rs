use ratatui::style::Color;
use showreel_core::ThemeMode;

/// Runtime palette for one color scheme
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub bg: Color,
    pub card_bg: Color,
    pub bar_bg: Color,

    // Foregrounds
    pub heading: Color,
    pub text: Color,
    pub muted: Color,

    // Accents
    /// Second word of the section heading, prev/next controls
    pub accent: Color,
    /// Card titles, active dot, download button
    pub highlight: Color,
    /// Text drawn on top of `accent`/`highlight`
    pub on_accent: Color,
    pub card_border: Color,
    pub dot_idle: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Electric blue and green on a near-black card background
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(0x0a, 0x0a, 0x0f),
            card_bg: Color::Rgb(0x12, 0x12, 0x1a),
            bar_bg: Color::Rgb(0x1c, 0x1c, 0x26),
            heading: Color::Rgb(0xff, 0xff, 0xff),
            text: Color::Rgb(0xd1, 0xd5, 0xdb),   // gray-300
            muted: Color::Rgb(0x4b, 0x55, 0x63),  // gray-600
            accent: Color::Rgb(0x00, 0xff, 0xff), // electric blue
            highlight: Color::Rgb(0x00, 0xe8, 0x81), // electric green
            on_accent: Color::Rgb(0x00, 0x00, 0x00),
            card_border: Color::Rgb(0x00, 0x66, 0x66),
            dot_idle: Color::Rgb(0x4b, 0x55, 0x63),
        }
    }

    /// Accent red on white
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(0xff, 0xff, 0xff),
            card_bg: Color::Rgb(0xfa, 0xfa, 0xfa),
            bar_bg: Color::Rgb(0xe5, 0xe7, 0xeb),
            heading: Color::Rgb(0x00, 0x00, 0x00),
            text: Color::Rgb(0x37, 0x41, 0x51),  // gray-700
            muted: Color::Rgb(0x9c, 0xa3, 0xaf), // gray-400
            accent: Color::Rgb(0xeb, 0x32, 0x32),
            highlight: Color::Rgb(0xeb, 0x32, 0x32),
            on_accent: Color::Rgb(0xff, 0xff, 0xff),
            card_border: Color::Rgb(0xe5, 0xe7, 0xeb), // gray-200
            dot_idle: Color::Rgb(0xd1, 0xd5, 0xdb),    // gray-300
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
