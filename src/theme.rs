use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cross_xdg::BaseDirs;
use nu_ansi_term::{Color, Style};
use serde::Deserialize;
use tracing::warn;

pub const CONFIG_ENV: &str = "PANCAKES_CONFIG";
const XDG_CONFIG_ENV: &str = "XDG_CONFIG_HOME";
const CONFIG_FILE: &str = "pancakes.toml";

/// Where the theme file was looked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemePath {
    /// Named by `PANCAKES_CONFIG`; it is an error for it to be unreadable.
    Explicit(PathBuf),
    /// The usual config home location; it is fine for it to be missing.
    ConfigHome(PathBuf),
}

/// Styles used when printing the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub banner: Style,
    pub header: Style,
    pub row: Style,
    pub debug: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            banner: Style::new().fg(Color::Red).bold(),
            header: Style::new().fg(Color::Cyan),
            row: Style::new().fg(Color::Green),
            debug: Style::new().fg(Color::DarkGray),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ThemeFile {
    #[serde(default)]
    colors: HashMap<String, String>,
}

impl Theme {
    /// Load the theme from `$PANCAKES_CONFIG` or `<config home>/pancakes.toml`.
    /// A missing or malformed file gives the default theme.
    pub fn load() -> Self {
        Self::load_with_env(|key: &str| std::env::var_os(key))
    }

    /// Like [`Theme::load`], using `env` for environment lookups.
    pub fn load_with_env<F>(env: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        match config_path_with_env(env) {
            Some(ThemePath::Explicit(path)) => Self::read(&path).unwrap_or_else(|e| {
                warn!("ignoring unreadable theme file {} from {CONFIG_ENV}: {e}", path.display());
                Self::default()
            }),
            Some(ThemePath::ConfigHome(path)) => Self::read(&path).unwrap_or_default(),
            None => Self::default(),
        }
    }

    /// Read a theme file. Malformed content gives the default theme; only
    /// failing to read the file is an error.
    pub fn read(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_toml(&content))
    }

    /// Build a theme from TOML text with a `[colors]` table. Unknown keys and
    /// unparseable colours are ignored.
    pub fn from_toml(content: &str) -> Self {
        let mut theme = Self::default();

        let file: ThemeFile = match toml::from_str(content) {
            Ok(file) => file,
            Err(e) => {
                warn!("ignoring malformed theme file: {e}");
                return theme;
            }
        };

        macro_rules! set {
            ($field:ident) => {
                if let Some(c) = file.colors.get(stringify!($field)).and_then(|s| parse_color(s)) {
                    theme.$field = theme.$field.fg(c);
                }
            };
        }

        set!(banner);
        set!(header);
        set!(row);
        set!(debug);

        theme
    }
}

/// `$PANCAKES_CONFIG`, else `$XDG_CONFIG_HOME/pancakes.toml`, else the
/// platform config home. Empty variables count as unset.
pub fn config_path_with_env<F>(env: F) -> Option<ThemePath>
where
    F: Fn(&str) -> Option<OsString>,
{
    let var = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(path) = var(CONFIG_ENV) {
        return Some(ThemePath::Explicit(PathBuf::from(path)));
    }

    let config_home = match var(XDG_CONFIG_ENV) {
        Some(dir) => PathBuf::from(dir),
        // On Linux: resolves to /home/<user>/.config
        None => PathBuf::from(BaseDirs::new().ok()?.config_home()),
    };
    Some(ThemePath::ConfigHome(config_home.join(CONFIG_FILE)))
}

fn parse_color(value: &str) -> Option<Color> {
    let s = value.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }

    Some(match s.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "purple" | "magenta" => Color::Purple,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" | "darkgray" | "dark_gray" => Color::DarkGray,
        "lightred" | "light_red" => Color::LightRed,
        "lightgreen" | "light_green" => Color::LightGreen,
        "lightblue" | "light_blue" => Color::LightBlue,
        "lightcyan" | "light_cyan" => Color::LightCyan,
        _ => return None,
    })
}
