//! Style tables: how each kind of leaf is painted.
//!
//! A table maps a [`StyleRole`] to a text transform. [`Theme`] paints with
//! crossterm styles read from configuration; [`Plain`] returns text untouched.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crossterm::style::{Attribute, Attributes, Color, ContentStyle};

use crate::ast::NodeKind;
use crate::error::{Error, Result};

/// Key into a style table: a node kind, or one half of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
    Kind(NodeKind),
    AssignmentName,
    AssignmentValue,
}

impl StyleRole {
    /// Every role a complete table must cover.
    pub fn all() -> impl Iterator<Item = StyleRole> {
        NodeKind::ALL
            .into_iter()
            .map(StyleRole::Kind)
            .chain([StyleRole::AssignmentName, StyleRole::AssignmentValue])
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StyleRole::Kind(kind) => kind.as_str(),
            StyleRole::AssignmentName => "assignmentName",
            StyleRole::AssignmentValue => "assignmentValue",
        }
    }
}

impl From<NodeKind> for StyleRole {
    fn from(kind: NodeKind) -> Self {
        StyleRole::Kind(kind)
    }
}

impl fmt::Display for StyleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        StyleRole::all()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("unknown style role `{s}`"))
    }
}

/// A mapping from role to text transform.
pub trait StyleTable {
    /// Paint `text` in the style of `role`. Fails if the table lacks the role.
    fn style(&self, role: StyleRole, text: &str) -> Result<String>;
}

/// Identity table: every role leaves its text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl StyleTable for Plain {
    fn style(&self, _role: StyleRole, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

/// Terminal styles per role.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<StyleRole, ContentStyle>,
}

impl Theme {
    /// Build a theme from `role name -> style string` entries.
    ///
    /// Unknown role names and unparsable styles are errors. Roles may be left
    /// out here; use [`Theme::validate`] to require a complete table.
    pub fn from_entries(entries: &BTreeMap<String, String>) -> Result<Self> {
        let mut styles = HashMap::new();
        for (name, raw) in entries {
            let role = name.parse::<StyleRole>().map_err(|reason| Error::InvalidStyle {
                role: name.clone(),
                reason,
            })?;
            let style = parse_style(raw).map_err(|reason| Error::InvalidStyle {
                role: name.clone(),
                reason,
            })?;
            styles.insert(role, style);
        }
        Ok(Self { styles })
    }

    pub fn set(&mut self, role: StyleRole, style: ContentStyle) {
        self.styles.insert(role, style);
    }

    /// Fail on the first role without an entry.
    pub fn validate(&self) -> Result<()> {
        match StyleRole::all().find(|role| !self.styles.contains_key(role)) {
            Some(role) => Err(Error::MissingStyle(role)),
            None => Ok(()),
        }
    }
}

impl StyleTable for Theme {
    fn style(&self, role: StyleRole, text: &str) -> Result<String> {
        let style = self.styles.get(&role).ok_or(Error::MissingStyle(role))?;
        Ok(style.apply(text).to_string())
    }
}

/// Parse a style string such as `"bold green"`, `"italic #ff8800"`,
/// `"underline rgb(10, 20, 30)"` or `"dim 244"`.
///
/// Attributes come first, then at most one color. `"default"` and `""` mean
/// no color.
pub fn parse_style(raw: &str) -> std::result::Result<ContentStyle, String> {
    let lower = raw.trim().to_ascii_lowercase();
    let mut attributes = Attributes::none();
    let mut rest = lower.as_str();
    while let Some((attribute, len)) = leading_attribute(rest) {
        attributes.set(attribute);
        rest = rest[len..].trim_start();
    }

    let mut style = ContentStyle::new();
    style.attributes = attributes;
    if !rest.is_empty() && rest != "default" {
        style.foreground_color = Some(parse_color(rest)?);
    }
    Ok(style)
}

fn leading_attribute(s: &str) -> Option<(Attribute, usize)> {
    const ATTRIBUTES: [(&str, Attribute); 6] = [
        ("bold", Attribute::Bold),
        ("dim", Attribute::Dim),
        ("italic", Attribute::Italic),
        ("underlined", Attribute::Underlined),
        ("underline", Attribute::Underlined),
        ("reverse", Attribute::Reverse),
    ];
    let word = s.split_whitespace().next()?;
    ATTRIBUTES
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, attribute)| (*attribute, word.len()))
}

fn parse_color(raw: &str) -> std::result::Result<Color, String> {
    let invalid = || format!("unable to parse color: {raw}");
    Ok(match raw {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Grey,
        "dark gray" | "dark grey" | "darkgray" | "darkgrey" => Color::DarkGrey,
        "dark red" | "darkred" => Color::DarkRed,
        "dark green" | "darkgreen" => Color::DarkGreen,
        "dark yellow" | "darkyellow" => Color::DarkYellow,
        "dark blue" | "darkblue" => Color::DarkBlue,
        "dark magenta" | "darkmagenta" => Color::DarkMagenta,
        "dark cyan" | "darkcyan" => Color::DarkCyan,
        hex if hex.starts_with('#') => {
            let hex = &hex[1..];
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            Color::Rgb {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
            }
        }
        rgb if rgb.starts_with("rgb(") && rgb.ends_with(')') => {
            let channels = rgb["rgb(".len()..rgb.len() - 1]
                .split(',')
                .map(|c| c.trim().parse::<u8>())
                .collect::<std::result::Result<Vec<u8>, _>>()
                .map_err(|_| invalid())?;
            let [r, g, b] = channels[..] else {
                return Err(invalid());
            };
            Color::Rgb { r, g, b }
        }
        other => Color::AnsiValue(other.parse::<u8>().map_err(|_| invalid())?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_round_trip() {
        for role in StyleRole::all() {
            assert_eq!(role.as_str().parse::<StyleRole>().unwrap(), role);
        }
        assert_eq!(StyleRole::all().count(), 18);
        assert!("heredoc".parse::<StyleRole>().is_err());
    }

    #[test]
    fn parse_attributes_and_color() {
        let style = parse_style("bold italic green").unwrap();
        assert!(style.attributes.has(Attribute::Bold));
        assert!(style.attributes.has(Attribute::Italic));
        assert_eq!(style.foreground_color, Some(Color::Green));
    }

    #[test]
    fn parse_color_forms() {
        assert_eq!(parse_style("dark cyan").unwrap().foreground_color, Some(Color::DarkCyan));
        assert_eq!(
            parse_style("#ff8800").unwrap().foreground_color,
            Some(Color::Rgb { r: 255, g: 136, b: 0 })
        );
        assert_eq!(
            parse_style("rgb(1, 2, 3)").unwrap().foreground_color,
            Some(Color::Rgb { r: 1, g: 2, b: 3 })
        );
        assert_eq!(parse_style("244").unwrap().foreground_color, Some(Color::AnsiValue(244)));
        assert_eq!(parse_style("default").unwrap(), ContentStyle::new());
        assert_eq!(parse_style("").unwrap(), ContentStyle::new());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_style("bold chartreuse").is_err());
        assert!(parse_style("#12345").is_err());
        assert!(parse_style("rgb(1,2)").is_err());
    }

    #[test]
    fn theme_reports_missing_role() {
        let mut entries = BTreeMap::new();
        entries.insert("program".to_string(), "bold green".to_string());
        let theme = Theme::from_entries(&entries).unwrap();
        assert!(theme.style(StyleRole::Kind(NodeKind::Program), "ls").unwrap().contains("ls"));
        let err = theme.style(StyleRole::AssignmentName, "A").unwrap_err();
        assert_eq!(err.to_string(), "style table has no entry for `assignmentName`");
        assert!(theme.validate().is_err());
    }

    #[test]
    fn theme_rejects_unknown_role() {
        let mut entries = BTreeMap::new();
        entries.insert("heredoc".to_string(), "red".to_string());
        let err = Theme::from_entries(&entries).unwrap_err();
        assert!(err.to_string().contains("heredoc"));
    }

    #[test]
    fn plain_is_identity() {
        assert_eq!(Plain.style(StyleRole::AssignmentValue, "x y").unwrap(), "x y");
    }
}
