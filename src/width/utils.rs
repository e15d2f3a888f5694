//! Terminal display width helpers.
//!
//! Provides ANSI-aware width calculation for cell content so column padding
//! stays aligned when cells carry colour codes or wide code points.

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}

/// Measures how many terminal columns a string occupies.
///
/// The layout pipeline never measures text any other way, so a fake
/// measurer makes layout behaviour independent of Unicode tables.
pub trait WidthMeasurer {
    fn width(&self, text: &str) -> usize;
}

/// Default measurer backed by [`display_width`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalWidth;

impl WidthMeasurer for TerminalWidth {
    fn width(&self, text: &str) -> usize {
        display_width(text)
    }
}

impl<F> WidthMeasurer for F
where
    F: Fn(&str) -> usize,
{
    fn width(&self, text: &str) -> usize {
        self(text)
    }
}

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Split text into indivisible wrapping units.
///
/// A unit is either a single code point or one complete escape sequence
/// (CSI `ESC [ ... final`, OSC `ESC ] ... BEL|ESC \`, or a two-character
/// `ESC x` sequence). Escape sequences are never split across lines.
pub fn split_units(text: &str) -> Vec<&str> {
    let mut units = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        let mut end = start + ch.len_utf8();

        if ch == ESC {
            match chars.peek().copied() {
                Some((i, '[')) => {
                    chars.next();
                    end = i + 1;
                    for (j, c) in chars.by_ref() {
                        end = j + c.len_utf8();
                        if ('\x40'..='\x7e').contains(&c) {
                            break;
                        }
                    }
                }
                Some((i, ']')) => {
                    chars.next();
                    end = i + 1;
                    while let Some((j, c)) = chars.next() {
                        end = j + c.len_utf8();
                        if c == BEL {
                            break;
                        }
                        if c == ESC {
                            if let Some((k, '\\')) = chars.peek().copied() {
                                chars.next();
                                end = k + 1;
                                break;
                            }
                        }
                    }
                }
                Some((i, c)) => {
                    chars.next();
                    end = i + c.len_utf8();
                }
                None => {}
            }
        }

        units.push(&text[start..end]);
    }

    units
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_width_matches_length() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn ansi_sequences_are_discounted() {
        assert_eq!(display_width("\x1b[1mbold\x1b[0m"), 4);
    }

    #[test]
    fn wide_code_points_count_double() {
        assert_eq!(display_width("漢字"), 4);
    }

    #[test]
    fn closures_act_as_measurers() {
        let bytes = |text: &str| text.len();
        assert_eq!(bytes.width("ab"), 2);
        assert_eq!(TerminalWidth.width("漢"), 2);
    }

    #[test]
    fn units_keep_escape_sequences_whole() {
        let units = split_units("\x1b[31mab\x1b[0m");
        assert_eq!(units, vec!["\x1b[31m", "a", "b", "\x1b[0m"]);
    }

    #[test]
    fn units_handle_osc_and_multibyte() {
        let units = split_units("\x1b]8;;x\x07漢\x1b]0;t\x1b\\z");
        assert_eq!(units, vec!["\x1b]8;;x\x07", "漢", "\x1b]0;t\x1b\\", "z"]);
    }

    #[test]
    fn dangling_escape_is_its_own_unit() {
        assert_eq!(split_units("a\x1b"), vec!["a", "\x1b"]);
        assert_eq!(split_units("\x1b[3"), vec!["\x1b[3"]);
    }
}
