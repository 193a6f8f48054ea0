//! UI theme definitions and style descriptors.
//!
//! Widgets never compose colors themselves; they ask for a descriptor
//! (`ButtonStyle`, `BadgeStyle`, ...) keyed by a variant enum.

use egui::{Color32, Vec2, Visuals};

/// Minimum touch target size (44x44 points), kept for every pressable control.
pub const MIN_TOUCH_TARGET: f32 = 44.0;

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Light => light_visuals(),
            Theme::Dark => dark_visuals(),
        }
    }

    /// Palette for this theme.
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette::LIGHT,
            Theme::Dark => Palette::DARK,
        }
    }

    /// Pick the theme matching egui's current dark-mode flag.
    pub fn from_visuals(visuals: &Visuals) -> Self {
        if visuals.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Design tokens for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub panel: Color32,
    pub card: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub primary: Color32,
    pub primary_foreground: Color32,
    pub secondary: Color32,
    pub secondary_foreground: Color32,
    pub accent: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub destructive: Color32,
    pub border: Color32,
    pub focus_ring: Color32,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color32::from_rgb(255, 251, 240),
        panel: Color32::from_rgb(255, 255, 255),
        card: Color32::from_rgb(255, 255, 255),
        text_primary: Color32::from_rgb(36, 36, 52),
        text_secondary: Color32::from_rgb(90, 90, 110),
        text_muted: Color32::from_rgb(140, 140, 155),
        primary: Color32::from_rgb(79, 70, 229),
        primary_foreground: Color32::WHITE,
        secondary: Color32::from_rgb(254, 240, 199),
        secondary_foreground: Color32::from_rgb(120, 70, 0),
        accent: Color32::from_rgb(236, 233, 255),
        success: Color32::from_rgb(22, 163, 74),
        warning: Color32::from_rgb(234, 160, 0),
        destructive: Color32::from_rgb(220, 38, 38),
        border: Color32::from_rgb(226, 224, 236),
        focus_ring: Color32::from_rgb(99, 102, 241),
    };

    pub const DARK: Palette = Palette {
        background: Color32::from_rgb(20, 20, 30),
        panel: Color32::from_rgb(28, 28, 40),
        card: Color32::from_rgb(38, 38, 52),
        text_primary: Color32::from_rgb(240, 240, 248),
        text_secondary: Color32::from_rgb(170, 170, 185),
        text_muted: Color32::from_rgb(110, 110, 125),
        primary: Color32::from_rgb(129, 140, 248),
        primary_foreground: Color32::from_rgb(20, 20, 30),
        secondary: Color32::from_rgb(70, 56, 20),
        secondary_foreground: Color32::from_rgb(254, 240, 199),
        accent: Color32::from_rgb(55, 52, 90),
        success: Color32::from_rgb(74, 222, 128),
        warning: Color32::from_rgb(251, 191, 36),
        destructive: Color32::from_rgb(248, 113, 113),
        border: Color32::from_rgb(64, 64, 82),
        focus_ring: Color32::from_rgb(165, 180, 252),
    };
}

/// Visual variant of a pressable button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Ghost,
    Destructive,
    Link,
}

/// Size of a pressable button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Default,
    Lg,
    /// Square icon-only button.
    Icon,
}

impl ButtonSize {
    /// Minimum outer size; never smaller than the touch target.
    pub fn min_size(&self) -> Vec2 {
        match self {
            ButtonSize::Sm => Vec2::new(MIN_TOUCH_TARGET, MIN_TOUCH_TARGET),
            ButtonSize::Default => Vec2::new(64.0, MIN_TOUCH_TARGET),
            ButtonSize::Lg => Vec2::new(96.0, 52.0),
            ButtonSize::Icon => Vec2::splat(MIN_TOUCH_TARGET),
        }
    }

    pub fn padding(&self) -> Vec2 {
        match self {
            ButtonSize::Sm => Vec2::new(12.0, 6.0),
            ButtonSize::Default => Vec2::new(16.0, 8.0),
            ButtonSize::Lg => Vec2::new(28.0, 10.0),
            ButtonSize::Icon => Vec2::ZERO,
        }
    }

    pub fn font_size(&self) -> f32 {
        match self {
            ButtonSize::Sm => 14.0,
            ButtonSize::Default => 16.0,
            ButtonSize::Lg => 18.0,
            ButtonSize::Icon => 20.0,
        }
    }
}

/// Resolved colors for a button variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub bg: Color32,
    pub bg_hover: Color32,
    pub bg_pressed: Color32,
    pub text: Color32,
    pub border: Option<Color32>,
    pub underline: bool,
    pub rounding: f32,
}

impl ButtonStyle {
    /// Resolve the style for a variant in the given palette.
    pub fn resolve(variant: ButtonVariant, palette: &Palette) -> Self {
        let base = Self {
            bg: palette.primary,
            bg_hover: palette.primary.gamma_multiply(0.9),
            bg_pressed: palette.primary.gamma_multiply(0.8),
            text: palette.primary_foreground,
            border: None,
            underline: false,
            rounding: 12.0,
        };

        match variant {
            ButtonVariant::Default => base,
            ButtonVariant::Secondary => Self {
                bg: palette.secondary,
                bg_hover: palette.secondary.gamma_multiply(0.92),
                bg_pressed: palette.secondary.gamma_multiply(0.85),
                text: palette.secondary_foreground,
                ..base
            },
            ButtonVariant::Outline => Self {
                bg: palette.panel,
                bg_hover: palette.accent,
                bg_pressed: palette.accent.gamma_multiply(0.9),
                text: palette.text_primary,
                border: Some(palette.border),
                ..base
            },
            ButtonVariant::Ghost => Self {
                bg: Color32::TRANSPARENT,
                bg_hover: palette.accent,
                bg_pressed: palette.accent.gamma_multiply(0.9),
                text: palette.text_primary,
                ..base
            },
            ButtonVariant::Destructive => Self {
                bg: palette.destructive,
                bg_hover: palette.destructive.gamma_multiply(0.9),
                bg_pressed: palette.destructive.gamma_multiply(0.8),
                text: Color32::WHITE,
                ..base
            },
            ButtonVariant::Link => Self {
                bg: Color32::TRANSPARENT,
                bg_hover: Color32::TRANSPARENT,
                bg_pressed: Color32::TRANSPARENT,
                text: palette.primary,
                underline: true,
                ..base
            },
        }
    }
}

/// Visual variant of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    /// (fill, text, border)
    pub fn colors(&self, palette: &Palette) -> (Color32, Color32, Option<Color32>) {
        match self {
            BadgeVariant::Default => (palette.primary, palette.primary_foreground, None),
            BadgeVariant::Secondary => (palette.secondary, palette.secondary_foreground, None),
            BadgeVariant::Destructive => (palette.destructive, Color32::WHITE, None),
            BadgeVariant::Outline => (Color32::TRANSPARENT, palette.text_primary, Some(palette.border)),
        }
    }
}

/// Visual variant of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertVariant {
    #[default]
    Default,
    Destructive,
}

impl AlertVariant {
    /// (fill, title text, border)
    pub fn colors(&self, palette: &Palette) -> (Color32, Color32, Color32) {
        match self {
            AlertVariant::Default => (palette.card, palette.text_primary, palette.border),
            AlertVariant::Destructive => (
                palette.destructive.gamma_multiply(0.08),
                palette.destructive,
                palette.destructive,
            ),
        }
    }
}

/// Create light theme visuals.
fn light_visuals() -> Visuals {
    let p = Palette::LIGHT;
    let mut visuals = Visuals::light();

    visuals.window_fill = p.panel;
    visuals.panel_fill = p.background;
    visuals.faint_bg_color = p.card;
    visuals.extreme_bg_color = p.panel;

    visuals.widgets.noninteractive.bg_fill = p.card;
    visuals.widgets.inactive.bg_fill = p.card;
    visuals.widgets.hovered.bg_fill = p.accent;
    visuals.widgets.active.bg_fill = p.primary;

    visuals.selection.bg_fill = p.primary.linear_multiply(0.2);
    visuals.selection.stroke.color = p.primary;

    visuals.widgets.noninteractive.fg_stroke.color = p.text_primary;
    visuals.widgets.inactive.fg_stroke.color = p.text_secondary;
    visuals.widgets.hovered.fg_stroke.color = p.text_primary;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = p.border;
    visuals.widgets.inactive.bg_stroke.color = p.border;

    visuals
}

/// Create dark theme visuals.
fn dark_visuals() -> Visuals {
    let p = Palette::DARK;
    let mut visuals = Visuals::dark();

    visuals.window_fill = p.panel;
    visuals.panel_fill = p.background;
    visuals.faint_bg_color = p.card;
    visuals.extreme_bg_color = p.background;

    visuals.widgets.noninteractive.bg_fill = p.card;
    visuals.widgets.inactive.bg_fill = p.card;
    visuals.widgets.hovered.bg_fill = p.accent;
    visuals.widgets.active.bg_fill = p.primary;

    visuals.selection.bg_fill = p.primary.linear_multiply(0.4);
    visuals.selection.stroke.color = p.primary;

    visuals.widgets.noninteractive.fg_stroke.color = p.text_primary;
    visuals.widgets.inactive.fg_stroke.color = p.text_secondary;
    visuals.widgets.hovered.fg_stroke.color = p.text_primary;
    visuals.widgets.active.fg_stroke.color = p.text_primary;

    visuals.widgets.noninteractive.bg_stroke.color = p.border;
    visuals.widgets.inactive.bg_stroke.color = p.border;

    visuals
}
