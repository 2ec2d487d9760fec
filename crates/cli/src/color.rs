// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use doscan_engine::env;
use std::io::IsTerminal;

pub mod codes {
    /// Section headers and verdicts: steel blue
    pub const HEADER: u8 = 74;
    /// Command text: light grey
    pub const LITERAL: u8 = 250;
    /// Sources and reasons: medium grey
    pub const CONTEXT: u8 = 245;
    /// Skipped entries: darker grey
    pub const MUTED: u8 = 240;
    /// Unsafe verdicts: soft red
    pub const ALERT: u8 = 167;
}

/// Whether to emit ANSI colors.
///
/// `NO_COLOR` disables, `COLOR=always` forces, otherwise stdout must be a TTY.
pub fn should_colorize() -> bool {
    env::color().unwrap_or_else(|| std::io::stdout().is_terminal())
}

/// clap help styles using the same palette.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    Styles::styled()
        .header(fg_style(codes::HEADER))
        .usage(fg_style(codes::HEADER))
        .literal(fg_style(codes::LITERAL))
        .placeholder(fg_style(codes::CONTEXT))
}

fn fg_style(code: u8) -> Style {
    Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))))
}

const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    if should_colorize() {
        format!("\x1b[38;5;{code}m{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

pub fn muted(text: &str) -> String {
    paint(codes::MUTED, text)
}

pub fn alert(text: &str) -> String {
    paint(codes::ALERT, text)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
