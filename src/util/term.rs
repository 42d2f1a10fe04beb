// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Terminal lifecycle management.
//!
//! Entering and leaving raw mode and the alternate screen, plus the OSC 11 /
//! OSC 111 sequences used to paint the emulator background in the theme
//! colour. Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) honour
//! these sequences, others silently ignore them.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub(crate) type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Prepares the terminal for the TUI.
///
/// Paints the background, enables raw mode and switches to the alternate
/// screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or the alternate screen
/// cannot be entered.
pub(crate) fn setup_terminal(background_hex: &str) -> Result<Tui> {
    // Without this the emulator leaves a thin outline in its own colour
    set_terminal_bg(background_hex);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Restores the terminal to the state it was in before [`setup_terminal`].
///
/// Best-effort: failures are ignored since this runs during teardown.
pub(crate) fn restore_terminal(terminal: &mut Tui) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    reset_terminal_bg();
    terminal.show_cursor().ok();
}

fn set_terminal_bg(hex_color: &str) {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]11;{}\x07", hex_color).ok();
    stdout.flush().ok();
}

fn reset_terminal_bg() {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]111\x07").ok();
    stdout.flush().ok();
}
