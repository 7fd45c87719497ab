//! Table themes
//!
//! A [`Theme`] is an immutable bundle of colour tokens and CSS class tokens.
//! It is built once from configuration and handed to the views that need
//! it; nothing writes theme state anywhere global.

use crate::config::ThemeConfig;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    /// Dense dark grid used by the planboard itself
    #[default]
    Planboard,
    /// Neutral data-table look for profile and roster listings
    Slate,
    /// Rounded, airy cards for dashboards
    Modern,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 3] = [Self::Planboard, Self::Slate, Self::Modern];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planboard => "planboard",
            Self::Slate => "slate",
            Self::Modern => "modern",
        }
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "planboard" => Ok(Self::Planboard),
            "slate" => Ok(Self::Slate),
            "modern" => Ok(Self::Modern),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}

/// Colour tokens, all `#RRGGBB`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub surface: String,
    pub border: String,
    pub text: String,
    pub muted: String,
}

impl Palette {
    pub fn validate(&self) -> Result<()> {
        for token in [&self.primary, &self.surface, &self.border, &self.text, &self.muted] {
            validate_color(token)?;
        }
        Ok(())
    }
}

/// Class tokens for every styled part of a table and its pagination strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableClasses {
    pub container: &'static str,
    pub table: &'static str,
    pub header_row: &'static str,
    pub header_cell: &'static str,
    pub sortable_header: &'static str,
    pub body: &'static str,
    pub row: &'static str,
    pub cell: &'static str,
    pub empty: &'static str,
    pub pagination: &'static str,
    pub page_button: &'static str,
    pub page_button_active: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub preset: ThemePreset,
    pub palette: Palette,
    pub classes: TableClasses,
}

impl Default for Theme {
    fn default() -> Self {
        Self::preset(ThemePreset::default())
    }
}

impl Theme {
    pub fn preset(preset: ThemePreset) -> Self {
        match preset {
            ThemePreset::Planboard => Self {
                preset,
                palette: Palette {
                    primary: "#2563eb".into(),
                    surface: "#1f2937".into(),
                    border: "#374151".into(),
                    text: "#f3f4f6".into(),
                    muted: "#9ca3af".into(),
                },
                classes: TableClasses {
                    container: "bg-gray-800 rounded-xl border border-gray-700 overflow-hidden",
                    table: "w-full text-sm",
                    header_row: "border-b border-gray-700 bg-gray-750",
                    header_cell: "px-4 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider",
                    sortable_header: "cursor-pointer select-none hover:text-white",
                    body: "divide-y divide-gray-700",
                    row: "hover:bg-gray-750 transition-colors",
                    cell: "px-4 py-3 text-gray-300",
                    empty: "px-4 py-8 text-center text-gray-400",
                    pagination: "flex items-center justify-between px-4 py-3 border-t border-gray-700 text-sm text-gray-400",
                    page_button: "px-3 py-1 rounded-lg hover:bg-gray-700 disabled:opacity-50 disabled:cursor-not-allowed",
                    page_button_active: "px-3 py-1 rounded-lg bg-blue-600 text-white",
                },
            },
            ThemePreset::Slate => Self {
                preset,
                palette: Palette {
                    primary: "#0f766e".into(),
                    surface: "#0f172a".into(),
                    border: "#334155".into(),
                    text: "#e2e8f0".into(),
                    muted: "#94a3b8".into(),
                },
                classes: TableClasses {
                    container: "bg-slate-900 border border-slate-700 rounded-lg overflow-hidden",
                    table: "w-full text-sm",
                    header_row: "bg-slate-800",
                    header_cell: "px-3 py-2 text-left font-semibold text-slate-300",
                    sortable_header: "cursor-pointer select-none hover:text-teal-300",
                    body: "divide-y divide-slate-800",
                    row: "odd:bg-slate-900 even:bg-slate-950 hover:bg-slate-800",
                    cell: "px-3 py-2 text-slate-200",
                    empty: "px-3 py-6 text-center text-slate-400",
                    pagination: "flex items-center justify-between px-3 py-2 bg-slate-800 text-sm text-slate-400",
                    page_button: "px-2 py-1 rounded hover:bg-slate-700 disabled:opacity-40 disabled:cursor-not-allowed",
                    page_button_active: "px-2 py-1 rounded bg-teal-700 text-white",
                },
            },
            ThemePreset::Modern => Self {
                preset,
                palette: Palette {
                    primary: "#7c3aed".into(),
                    surface: "#111827".into(),
                    border: "#4b5563".into(),
                    text: "#f9fafb".into(),
                    muted: "#a1a1aa".into(),
                },
                classes: TableClasses {
                    container: "bg-gray-900 rounded-2xl shadow-xl ring-1 ring-gray-700 overflow-hidden",
                    table: "w-full",
                    header_row: "bg-gray-900",
                    header_cell: "px-6 py-4 text-left text-sm font-medium text-gray-400",
                    sortable_header: "cursor-pointer select-none hover:text-violet-300",
                    body: "",
                    row: "border-t border-gray-800 hover:bg-gray-800/60",
                    cell: "px-6 py-4 text-gray-100",
                    empty: "px-6 py-10 text-center text-gray-500",
                    pagination: "flex items-center justify-between px-6 py-4 border-t border-gray-800 text-sm text-gray-400",
                    page_button: "px-3 py-1.5 rounded-full hover:bg-gray-800 disabled:opacity-40 disabled:cursor-not-allowed",
                    page_button_active: "px-3 py-1.5 rounded-full bg-violet-600 text-white",
                },
            },
        }
    }

    /// Preset plus optional accent override from configuration
    pub fn from_config(config: &ThemeConfig) -> Result<Self> {
        let mut theme = Self::preset(config.preset);
        if let Some(accent) = &config.accent {
            validate_color(accent)?;
            theme.palette.primary = accent.to_ascii_lowercase();
        }
        Ok(theme)
    }

    /// Inline `style` value exposing the palette as CSS custom properties
    pub fn css_variables(&self) -> String {
        format!(
            "--pb-primary: {}; --pb-surface: {}; --pb-border: {}; --pb-text: {}; --pb-muted: {};",
            self.palette.primary,
            self.palette.surface,
            self.palette.border,
            self.palette.text,
            self.palette.muted
        )
    }
}

/// Accepts `#RRGGBB` only
pub fn validate_color(token: &str) -> Result<()> {
    let valid = token.len() == 7
        && token.starts_with('#')
        && token[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidColor(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_have_valid_palettes() {
        for preset in ThemePreset::ALL {
            let theme = Theme::preset(preset);
            assert_eq!(theme.preset, preset);
            assert!(theme.palette.validate().is_ok(), "{} palette", preset);
        }
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("Modern".parse::<ThemePreset>().unwrap(), ThemePreset::Modern);
        assert!(matches!(
            "neon".parse::<ThemePreset>(),
            Err(Error::UnknownTheme(_))
        ));
    }

    #[test]
    fn test_accent_override() {
        let config = ThemeConfig {
            preset: ThemePreset::Slate,
            accent: Some("#FF8800".into()),
        };
        let theme = Theme::from_config(&config).unwrap();
        assert_eq!(theme.palette.primary, "#ff8800");
        assert!(theme.css_variables().contains("--pb-primary: #ff8800;"));
    }

    #[test]
    fn test_validate_color() {
        assert!(validate_color("#1a2B3c").is_ok());
        assert!(validate_color("1a2b3c").is_err());
        assert!(validate_color("#12345").is_err());
        assert!(validate_color("#12345g").is_err());
    }
}
