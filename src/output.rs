//! Color and emoji decisions for CLI output and log lines.
//!
//! `--color=always|never` wins. In `auto` mode `NO_COLOR`, `CLICOLOR=0` and
//! `TERM=dumb` turn color off, `CLICOLOR_FORCE` turns it on, and otherwise
//! the terminal decides.

use std::env;

use env_logger::WriteStyle;

#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Builds the configuration for a `--color` value.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => detect_color_support(),
        };
        Self { use_color }
    }

    /// The env_logger writer style for this configuration.
    pub fn write_style(&self) -> WriteStyle {
        if self.use_color {
            WriteStyle::Always
        } else {
            WriteStyle::Never
        }
    }
}

fn detect_color_support() -> bool {
    let var_is = |name: &str, pred: fn(&str) -> bool| env::var(name).is_ok_and(|v| pred(&v));

    if env::var_os("NO_COLOR").is_some() || var_is("CLICOLOR", |v| v == "0") {
        false
    } else if var_is("CLICOLOR_FORCE", |v| v != "0" && !v.is_empty()) {
        true
    } else if var_is("TERM", |v| v == "dumb") {
        false
    } else {
        console::Term::stdout().features().colors_supported()
    }
}

/// `emoji_str` when colors are on, `plain` otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}
