// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use granja_app::PageKind;
use granja_tui::Theme;
use ratatui::style::Color;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "granja";
const CONFIG_VERSION: i64 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub theme: ThemeColors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
            theme: ThemeColors::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub start_page: Option<String>,
    pub sidebar_open: Option<bool>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            start_page: Some(PageKind::Dashboard.slug().to_owned()),
            sidebar_open: Some(false),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ThemeColors {
    pub accent: Option<String>,
    pub ok: Option<String>,
    pub warn: Option<String>,
    pub text: Option<String>,
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("GRANJA_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set GRANJA_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and place values under [ui] and [theme]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(slug) = &self.ui.start_page
            && PageKind::parse_slug(slug).is_none()
        {
            let known = PageKind::ALL
                .iter()
                .map(|page| page.slug())
                .collect::<Vec<_>>()
                .join(", ");
            bail!(
                "ui.start_page {:?} in {} is not a page; use one of: {}",
                slug,
                path.display(),
                known
            );
        }

        for (key, value) in [
            ("theme.accent", &self.theme.accent),
            ("theme.ok", &self.theme.ok),
            ("theme.warn", &self.theme.warn),
            ("theme.text", &self.theme.text),
        ] {
            if let Some(name) = value
                && parse_color(name).is_none()
            {
                bail!(
                    "{} {:?} in {} is not a terminal color; use a name like cyan, green, yellow, or white",
                    key,
                    name,
                    path.display()
                );
            }
        }

        Ok(())
    }

    pub fn start_page(&self) -> PageKind {
        self.ui
            .start_page
            .as_deref()
            .and_then(PageKind::parse_slug)
            .unwrap_or(PageKind::Dashboard)
    }

    pub fn sidebar_open(&self) -> bool {
        self.ui.sidebar_open.unwrap_or(false)
    }

    pub fn theme(&self) -> Theme {
        let defaults = Theme::default();
        Theme {
            accent: resolve_color(self.theme.accent.as_deref(), defaults.accent),
            ok: resolve_color(self.theme.ok.as_deref(), defaults.ok),
            warn: resolve_color(self.theme.warn.as_deref(), defaults.warn),
            text: resolve_color(self.theme.text.as_deref(), defaults.text),
        }
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# granja config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\n# One of: dashboard, fields, tasks, planning\nstart_page = \"dashboard\"\nsidebar_open = false\n\n[theme]\naccent = \"cyan\"\nok = \"green\"\nwarn = \"yellow\"\ntext = \"white\"\n",
            path.display(),
        )
    }
}

fn resolve_color(name: Option<&str>, fallback: Color) -> Color {
    name.and_then(parse_color).unwrap_or(fallback)
}

fn parse_color(name: &str) -> Option<Color> {
    match name.trim().to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        _ => None,
    }
}
