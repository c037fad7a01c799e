//! Special keys in the Unicode private use area.
//!
//! See <https://www.w3.org/TR/webdriver/#keyboard-actions>.

pub const NULL: &str = "\u{E000}";
pub const CANCEL: &str = "\u{E001}";
pub const HELP: &str = "\u{E002}";
pub const BACKSPACE: &str = "\u{E003}";
pub const TAB: &str = "\u{E004}";
pub const CLEAR: &str = "\u{E005}";
pub const RETURN: &str = "\u{E006}";
pub const ENTER: &str = "\u{E007}";
pub const SHIFT: &str = "\u{E008}";
pub const CONTROL: &str = "\u{E009}";
pub const ALT: &str = "\u{E00A}";
pub const PAUSE: &str = "\u{E00B}";
pub const ESCAPE: &str = "\u{E00C}";
pub const SPACE: &str = "\u{E00D}";
pub const PAGE_UP: &str = "\u{E00E}";
pub const PAGE_DOWN: &str = "\u{E00F}";
pub const END: &str = "\u{E010}";
pub const HOME: &str = "\u{E011}";
pub const LEFT_ARROW: &str = "\u{E012}";
pub const UP_ARROW: &str = "\u{E013}";
pub const RIGHT_ARROW: &str = "\u{E014}";
pub const DOWN_ARROW: &str = "\u{E015}";
pub const INSERT: &str = "\u{E016}";
pub const DELETE: &str = "\u{E017}";
pub const F1: &str = "\u{E031}";
pub const F2: &str = "\u{E032}";
pub const F3: &str = "\u{E033}";
pub const F4: &str = "\u{E034}";
pub const F5: &str = "\u{E035}";
pub const F6: &str = "\u{E036}";
pub const F7: &str = "\u{E037}";
pub const F8: &str = "\u{E038}";
pub const F9: &str = "\u{E039}";
pub const F10: &str = "\u{E03A}";
pub const F11: &str = "\u{E03B}";
pub const F12: &str = "\u{E03C}";
/// Command on macOS, Windows key elsewhere
pub const META: &str = "\u{E03D}";
