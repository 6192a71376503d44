use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Spacing and geometry constants. `step` governs both the horizontal
/// per-layer and vertical per-slot grid spacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub step: f32,
    pub node_diameter: f32,
    pub line_width: f32,
}

impl LayoutConfig {
    pub fn node_radius(&self) -> f32 {
        self.node_diameter / 2.0
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            step: 100.0,
            node_diameter: 20.0,
            line_width: 3.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutVariables>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    background: Option<String>,
    node_fill: Option<String>,
    node_outline: Option<String>,
    line_color: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutVariables {
    step: Option<f32>,
    node_diameter: Option<f32>,
    line_width: Option<f32>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;
    Ok(merge_config_file(config, parsed))
}

fn merge_config_file(mut config: Config, parsed: ConfigFile) -> Config {
    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "light" {
            config.theme = Theme::light();
        } else if theme_name == "dark" || theme_name == "default" {
            config.theme = Theme::dark();
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.node_fill {
            config.theme.node_fill = v;
        }
        if let Some(v) = vars.node_outline {
            config.theme.node_outline = v;
        }
        if let Some(v) = vars.line_color {
            config.theme.line_color = v;
        }
    }

    if let Some(vars) = parsed.layout {
        if let Some(v) = vars.step {
            config.layout.step = v;
        }
        if let Some(v) = vars.node_diameter {
            config.layout.node_diameter = v;
        }
        if let Some(v) = vars.line_width {
            config.layout.line_width = v;
        }
    }

    config
}
