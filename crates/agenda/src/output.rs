//! Terminal output helpers.

pub use anstream::{eprintln as aeprintln, println as aprintln};

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const GREEN: &str = "\x1b[38;2;158;206;106m"; // #9ece6a
    pub const RED: &str = "\x1b[38;2;247;118;142m"; // #f7768e
}

/// Green text, stripped by `anstream` when not writing to a terminal.
pub fn p_g(text: &str) -> String {
    format!("{}{}{}", colors::GREEN, text, colors::RESET)
}

/// Red text, stripped by `anstream` when not writing to a terminal.
pub fn p_r(text: &str) -> String {
    format!("{}{}{}", colors::RED, text, colors::RESET)
}
