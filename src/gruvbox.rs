use ratatui::style::Color;

/// The subset of the gruvbox palette used by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gruvbox {
    Dark0Hard,
    Dark0,
    Dark1,
    Gray244,
    Light2,
    Light4,
    Orange,
    OrangeBright,
    OrangeDim,
    RedBright,
    GreenBright,
    YellowBright,
}

impl Gruvbox {
    const fn rgb(self) -> u32 {
        match self {
            Gruvbox::Dark0Hard => 0x1d2021,
            Gruvbox::Dark0 => 0x282828,
            Gruvbox::Dark1 => 0x3c3836,
            Gruvbox::Gray244 => 0x928374,
            Gruvbox::Light2 => 0xd5c4a1,
            Gruvbox::Light4 => 0xa89984,
            Gruvbox::Orange => 0xd65d0e,
            Gruvbox::OrangeBright => 0xfe8019,
            Gruvbox::OrangeDim => 0xaf3a03,
            Gruvbox::RedBright => 0xfb4934,
            Gruvbox::GreenBright => 0xb8bb26,
            Gruvbox::YellowBright => 0xfabd2f,
        }
    }
}

impl From<Gruvbox> for Color {
    fn from(value: Gruvbox) -> Self {
        Color::from_u32(value.rgb())
    }
}
