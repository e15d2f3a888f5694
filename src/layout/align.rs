use crate::config::Alignment;
use crate::width::WidthMeasurer;

/// Pad `text` with spaces up to `width` display columns.
///
/// Text that is already `width` wide (or wider) comes back unchanged.
/// Centering puts the odd space on the right.
pub fn align<M>(text: &str, width: usize, alignment: Alignment, measurer: &M) -> String
where
    M: WidthMeasurer + ?Sized,
{
    let deficit = width.saturating_sub(measurer.width(text));
    if deficit == 0 {
        return text.to_string();
    }

    match alignment {
        Alignment::Left => format!("{text}{}", " ".repeat(deficit)),
        Alignment::Right => format!("{}{text}", " ".repeat(deficit)),
        Alignment::Center => {
            let left = deficit / 2;
            let right = deficit - left;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
        }
    }
}
