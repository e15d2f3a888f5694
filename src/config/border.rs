use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Glyphs used to draw the frame around and between cells.
///
/// Each glyph is a string so it may carry pre-applied ANSI styling.
/// Keys missing from a deserialized config fall back to the
/// [`honeywell`](BorderConfig::honeywell) template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BorderConfig {
    pub top_body: String,
    pub top_join: String,
    pub top_left: String,
    pub top_right: String,

    pub bottom_body: String,
    pub bottom_join: String,
    pub bottom_left: String,
    pub bottom_right: String,

    pub body_left: String,
    pub body_right: String,
    pub body_join: String,

    pub join_body: String,
    pub join_left: String,
    pub join_right: String,
    pub join_join: String,
}

impl BorderConfig {
    /// Names accepted by [`BorderConfig::template`].
    pub const TEMPLATES: [&'static str; 4] = ["honeywell", "norc", "ramac", "void"];

    /// Look up a named border template.
    pub fn template(name: &str) -> Result<Self> {
        match name {
            "honeywell" => Ok(Self::honeywell()),
            "norc" => Ok(Self::norc()),
            "ramac" => Ok(Self::ramac()),
            "void" => Ok(Self::void()),
            other => Err(TableError::UnknownBorderTemplate(other.to_string())),
        }
    }

    /// Double outer frame with single-line inner rules.
    pub fn honeywell() -> Self {
        Self::from_glyphs([
            "═", "╤", "╔", "╗", "═", "╧", "╚", "╝", "║", "║", "│", "─", "╟", "╢", "┼",
        ])
    }

    /// Single-line frame.
    pub fn norc() -> Self {
        Self::from_glyphs([
            "─", "┬", "┌", "┐", "─", "┴", "└", "┘", "│", "│", "│", "─", "├", "┤", "┼",
        ])
    }

    /// Plain ASCII frame.
    pub fn ramac() -> Self {
        Self::from_glyphs([
            "-", "+", "+", "+", "-", "+", "+", "+", "|", "|", "|", "-", "|", "|", "|",
        ])
    }

    /// No visible frame at all.
    pub fn void() -> Self {
        Self::from_glyphs([""; 15])
    }

    /// Apply `f` to every glyph, e.g. to wrap the frame in a colour.
    pub fn map_glyphs(&self, f: impl Fn(&str) -> String) -> Self {
        Self {
            top_body: f(&self.top_body),
            top_join: f(&self.top_join),
            top_left: f(&self.top_left),
            top_right: f(&self.top_right),
            bottom_body: f(&self.bottom_body),
            bottom_join: f(&self.bottom_join),
            bottom_left: f(&self.bottom_left),
            bottom_right: f(&self.bottom_right),
            body_left: f(&self.body_left),
            body_right: f(&self.body_right),
            body_join: f(&self.body_join),
            join_body: f(&self.join_body),
            join_left: f(&self.join_left),
            join_right: f(&self.join_right),
            join_join: f(&self.join_join),
        }
    }

    // Order: top (body, join, left, right), bottom (same), body (left,
    // right, join), join (body, left, right, join).
    fn from_glyphs(glyphs: [&str; 15]) -> Self {
        let [
            top_body,
            top_join,
            top_left,
            top_right,
            bottom_body,
            bottom_join,
            bottom_left,
            bottom_right,
            body_left,
            body_right,
            body_join,
            join_body,
            join_left,
            join_right,
            join_join,
        ] = glyphs.map(str::to_string);

        Self {
            top_body,
            top_join,
            top_left,
            top_right,
            bottom_body,
            bottom_join,
            bottom_left,
            bottom_right,
            body_left,
            body_right,
            body_join,
            join_body,
            join_left,
            join_right,
            join_join,
        }
    }
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self::honeywell()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_name_resolves() {
        for name in BorderConfig::TEMPLATES {
            assert!(BorderConfig::template(name).is_ok(), "{name}");
        }
        assert_eq!(BorderConfig::template("norc").unwrap(), BorderConfig::norc());
    }

    #[test]
    fn unknown_template_is_rejected() {
        let err = BorderConfig::template("fancy").unwrap_err();
        assert!(matches!(err, TableError::UnknownBorderTemplate(ref name) if name == "fancy"));
    }

    #[test]
    fn default_is_double_line() {
        let border = BorderConfig::default();
        assert_eq!(border.top_left, "╔");
        assert_eq!(border.join_join, "┼");
        assert_eq!(border.body_join, "│");
    }

    #[test]
    fn map_glyphs_touches_every_glyph() {
        let wrapped = BorderConfig::ramac().map_glyphs(|g| format!("<{g}>"));
        assert_eq!(wrapped.top_left, "<+>");
        assert_eq!(wrapped.join_body, "<->");
        assert_eq!(wrapped.body_right, "<|>");
    }

    #[test]
    fn partial_json_falls_back_to_default_glyphs() {
        let border: BorderConfig = serde_json::from_str(r#"{"topLeft": "*"}"#).unwrap();
        assert_eq!(border.top_left, "*");
        assert_eq!(border.top_right, "╗");
    }
}
