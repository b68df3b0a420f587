use std::env;

use directory::Category;
use ratatui::style::{Color, Modifier, Style};

use crate::core::state::StatusKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    TrueColor,
    Ansi256,
    Ansi16,
}

impl ColorMode {
    /// `HELPLINE_COLOR_MODE` wins, then `COLORTERM` / `TERM`.
    pub fn detect() -> Self {
        if let Ok(v) = env::var("HELPLINE_COLOR_MODE") {
            match v.to_ascii_lowercase().as_str() {
                "24bit" | "truecolor" | "rgb" => return ColorMode::TrueColor,
                "256" | "ansi256" => return ColorMode::Ansi256,
                "16" | "ansi16" | "ansi" => return ColorMode::Ansi16,
                _ => {}
            }
        }
        if let Ok(v) = env::var("COLORTERM") {
            let l = v.to_ascii_lowercase();
            if l.contains("truecolor") || l.contains("24bit") {
                return ColorMode::TrueColor;
            }
        }
        if let Ok(v) = env::var("TERM") {
            if v.to_ascii_lowercase().contains("256color") {
                return ColorMode::Ansi256;
            }
        }
        ColorMode::Ansi16
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UiGroup {
    Border,
    Dimmed,
    Title,
    Selected,
    Emergency,
    TollFree,
    Custom,
    Success,
    Error,
    Info,
}

#[derive(Clone, Copy, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Debug)]
pub struct Palette {
    pub fg: Rgb,
    pub dim: Rgb,
    pub border: Rgb,
    pub accent: Rgb,
    pub search: Rgb,
    pub emergency: Rgb,
    pub toll_free: Rgb,
    pub success: Rgb,
    pub error: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        // dunkles Standard-Theme, Notruf in Rot
        Self {
            fg: Rgb(192, 202, 245),
            dim: Rgb(107, 112, 137),
            border: Rgb(59, 63, 81),
            accent: Rgb(125, 207, 255),
            search: Rgb(224, 175, 104),
            emergency: Rgb(247, 118, 142),
            toll_free: Rgb(122, 162, 247),
            success: Rgb(158, 206, 106),
            error: Rgb(247, 118, 142),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub mode: ColorMode,
    pub palette: Palette,
}

impl Theme {
    pub fn from_env_auto() -> Self {
        Self {
            mode: ColorMode::detect(),
            palette: Palette::default(),
        }
    }

    pub fn style(&self, group: UiGroup) -> Style {
        let p = &self.palette;
        match group {
            UiGroup::Border => Style::default().fg(self.color(p.border)),
            UiGroup::Dimmed => Style::default().fg(self.color(p.dim)),
            UiGroup::Title => Style::default()
                .fg(self.color(p.fg))
                .add_modifier(Modifier::BOLD),
            UiGroup::Selected => Style::default()
                .bg(self.color(p.border))
                .fg(self.color(p.accent))
                .add_modifier(Modifier::BOLD),
            UiGroup::Emergency => Style::default()
                .fg(self.color(p.emergency))
                .add_modifier(Modifier::BOLD),
            UiGroup::TollFree => Style::default().fg(self.color(p.toll_free)),
            UiGroup::Custom => Style::default().fg(self.color(p.dim)),
            UiGroup::Success => Style::default().fg(self.color(p.success)),
            UiGroup::Error => Style::default()
                .fg(self.color(p.error))
                .add_modifier(Modifier::BOLD),
            UiGroup::Info => Style::default().fg(self.color(p.fg)),
        }
    }

    pub fn category_style(&self, category: Category) -> Style {
        match category {
            Category::Emergency => self.style(UiGroup::Emergency),
            Category::TollFree => self.style(UiGroup::TollFree),
            Category::Custom => self.style(UiGroup::Custom),
        }
    }

    pub fn status_style(&self, kind: StatusKind) -> Style {
        match kind {
            StatusKind::Info => self.style(UiGroup::Info),
            StatusKind::Success => self.style(UiGroup::Success),
            StatusKind::Error => self.style(UiGroup::Error),
        }
    }

    /// Chip style for small badges in the footer.
    pub fn chip_style(&self) -> Style {
        Style::default()
            .bg(self.color(self.palette.border))
            .fg(self.color(self.palette.fg))
    }

    fn color(&self, rgb: Rgb) -> Color {
        match self.mode {
            ColorMode::TrueColor => Color::Rgb(rgb.0, rgb.1, rgb.2),
            ColorMode::Ansi256 => Color::Indexed(rgb_to_ansi256(rgb)),
            ColorMode::Ansi16 => ansi16_from_rgb(rgb),
        }
    }
}

/// Input mode of the main screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    /// Keystrokes go to the search bar.
    Search,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Search => "SEARCH",
        }
    }

    /// Footer segment with the mode colour as background.
    pub fn status_segment_style(&self, theme: &Theme) -> Style {
        let bg = match self {
            Mode::Normal => theme.color(theme.palette.accent),
            Mode::Search => theme.color(theme.palette.search),
        };
        Style::default()
            .bg(bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }
}

fn rgb_to_ansi256(Rgb(r, g, b): Rgb) -> u8 {
    // 6x6x6 Würfel oder Graustufen, je nachdem was näher liegt
    let step = |v: u8| (v as f32 / 255.0 * 5.0).round() as u8;
    let (ri, gi, bi) = (step(r), step(g), step(b));
    let cube = 16 + 36 * ri + 6 * gi + bi;

    let avg = (r as u16 + g as u16 + b as u16) as f32 / 3.0;
    let gray_idx = (avg / 255.0 * 23.0).round() as u8;

    let level = |i: u8| i as f32 * 255.0 / 5.0;
    let dcube = (level(ri) - r as f32).abs()
        + (level(gi) - g as f32).abs()
        + (level(bi) - b as f32).abs();
    let gval = gray_idx as f32 * 255.0 / 23.0;
    let dgray = (gval - r as f32).abs() + (gval - g as f32).abs() + (gval - b as f32).abs();
    if dgray + 15.0 < dcube {
        232 + gray_idx
    } else {
        cube
    }
}

fn ansi16_from_rgb(Rgb(r, g, b): Rgb) -> Color {
    const BASE: [(Color, Color, (i32, i32, i32)); 8] = [
        (Color::Black, Color::DarkGray, (0, 0, 0)),
        (Color::Red, Color::LightRed, (205, 0, 0)),
        (Color::Green, Color::LightGreen, (0, 205, 0)),
        (Color::Yellow, Color::LightYellow, (205, 205, 0)),
        (Color::Blue, Color::LightBlue, (0, 0, 238)),
        (Color::Magenta, Color::LightMagenta, (205, 0, 205)),
        (Color::Cyan, Color::LightCyan, (0, 205, 205)),
        (Color::Gray, Color::White, (229, 229, 229)),
    ];
    let bright = (r as u16 + g as u16 + b as u16) / 3 > 128;
    let distance = |(cr, cg, cb): (i32, i32, i32)| {
        (cr - r as i32).abs() + (cg - g as i32).abs() + (cb - b as i32).abs()
    };
    BASE.iter()
        .min_by_key(|(_, _, rgb)| distance(*rgb))
        .map(|(normal, light, _)| if bright { *light } else { *normal })
        .unwrap_or(Color::White)
}
