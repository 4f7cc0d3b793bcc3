//! Structured CSS output.
//!
//! Concerns return [`CssBlock`]s instead of raw strings; the
//! [`Stylesheet`] serializes them in a fixed order so identical input
//! always yields byte-identical CSS.

use std::fmt::{self, Write as _};

/// One `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    /// A declaration marked `!important`.
    ///
    /// Generated rules must beat the theme's static stylesheet, so this is
    /// what every concern uses.
    pub fn important(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: true,
        }
    }

    /// A declaration without `!important`.
    pub fn plain(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)?;
        if self.important {
            f.write_str(" !important")?;
        }
        f.write_str(";")
    }
}

/// A selector list with its declarations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CssRule {
    pub selectors: Vec<String>,
    pub declarations: Vec<Declaration>,
}

impl CssRule {
    /// Rule for a single selector.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selectors: vec![selector.into()],
            declarations: Vec::new(),
        }
    }

    /// Rule for several selectors sharing declarations.
    pub fn many(selectors: &[&str]) -> Self {
        Self {
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            declarations: Vec::new(),
        }
    }

    /// Add an important declaration (builder style).
    pub fn decl(mut self, property: &str, value: impl Into<String>) -> Self {
        self.push(property, value);
        self
    }

    /// Add an important declaration.
    pub fn push(&mut self, property: &str, value: impl Into<String>) {
        self.declarations
            .push(Declaration::important(property, value));
    }

    /// Add an important declaration only when a value is present.
    pub fn push_opt(&mut self, property: &str, value: Option<String>) {
        if let Some(v) = value {
            self.push(property, v);
        }
    }

    /// Value of the first declaration for a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// Whether the rule has no declarations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    fn write_pretty(&self, out: &mut String, indent: &str) {
        let _ = writeln!(
            out,
            "{}{} {{",
            indent,
            self.selectors.join(&format!(",\n{}", indent))
        );
        for d in &self.declarations {
            let _ = writeln!(out, "{}  {}", indent, d);
        }
        let _ = writeln!(out, "{}}}", indent);
    }

    fn write_minified(&self, out: &mut String) {
        out.push_str(&self.selectors.join(","));
        out.push('{');
        for d in &self.declarations {
            out.push_str(&d.property);
            out.push(':');
            out.push_str(&d.value);
            if d.important {
                out.push_str("!important");
            }
            out.push(';');
        }
        out.push('}');
    }
}

impl fmt::Display for CssRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_pretty(&mut out, "");
        f.write_str(&out)
    }
}

/// A top-level stylesheet item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssBlock {
    Rule(CssRule),
    Media { query: String, rules: Vec<CssRule> },
}

impl CssBlock {
    /// Wrap rules in a media query.
    pub fn media(query: impl Into<String>, rules: Vec<CssRule>) -> Self {
        Self::Media {
            query: query.into(),
            rules,
        }
    }

    /// Whether the block would print nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Rule(r) => r.is_empty(),
            Self::Media { rules, .. } => rules.iter().all(CssRule::is_empty),
        }
    }

    /// The rule, if this is a plain rule.
    pub fn as_rule(&self) -> Option<&CssRule> {
        match self {
            Self::Rule(r) => Some(r),
            Self::Media { .. } => None,
        }
    }
}

impl From<CssRule> for CssBlock {
    fn from(rule: CssRule) -> Self {
        Self::Rule(rule)
    }
}

/// A named group of blocks produced by one concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub blocks: Vec<CssBlock>,
}

/// The composed stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stylesheet {
    sections: Vec<Section>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a concern's blocks. Empty blocks are dropped, and a section
    /// with nothing left is skipped entirely.
    pub fn push_section(&mut self, name: &str, blocks: Vec<CssBlock>) {
        let blocks: Vec<CssBlock> = blocks
            .into_iter()
            .filter_map(|b| match b {
                CssBlock::Rule(r) if r.is_empty() => None,
                CssBlock::Media { query, rules } => {
                    let rules: Vec<CssRule> = rules.into_iter().filter(|r| !r.is_empty()).collect();
                    if rules.is_empty() {
                        None
                    } else {
                        Some(CssBlock::Media { query, rules })
                    }
                }
                other => Some(other),
            })
            .collect();

        if !blocks.is_empty() {
            self.sections.push(Section {
                name: name.to_string(),
                blocks,
            });
        }
    }

    /// The sections in emission order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Blocks of one section.
    pub fn section(&self, name: &str) -> Option<&[CssBlock]> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.blocks.as_slice())
    }

    /// Whether nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Readable CSS with one comment line per section.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "/* {} */", section.name);
            for block in &section.blocks {
                match block {
                    CssBlock::Rule(rule) => rule.write_pretty(&mut out, ""),
                    CssBlock::Media { query, rules } => {
                        let _ = writeln!(out, "@media {} {{", query);
                        for rule in rules {
                            rule.write_pretty(&mut out, "  ");
                        }
                        out.push_str("}\n");
                    }
                }
            }
        }
        out
    }

    /// Compact CSS without comments or whitespace.
    pub fn to_minified_css(&self) -> String {
        let mut out = String::new();
        for block in self.sections.iter().flat_map(|s| &s.blocks) {
            match block {
                CssBlock::Rule(rule) => rule.write_minified(&mut out),
                CssBlock::Media { query, rules } => {
                    let _ = write!(out, "@media {}{{", query);
                    for rule in rules {
                        rule.write_minified(&mut out);
                    }
                    out.push('}');
                }
            }
        }
        out
    }

    /// Wrap CSS text in a `<style>` element for the page head.
    ///
    /// `</` inside the CSS is written as the equivalent `<\/` so the text
    /// can never end the element early.
    pub fn style_tag(id: &str, css: &str) -> String {
        format!("<style id=\"{}\">\n{}</style>\n", id, css.replace("</", "<\\/"))
    }

    /// This stylesheet as a `<style>` element.
    pub fn to_style_tag(&self, id: &str) -> String {
        Self::style_tag(id, &self.to_css())
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_display() {
        insta::assert_snapshot!(
            Declaration::important("color", "#fff").to_string(),
            @"color: #fff !important;"
        );
        assert_eq!(Declaration::plain("color", "red").to_string(), "color: red;");
    }

    #[test]
    fn rule_display() {
        let rule = CssRule::many(&[".a", ".b"]).decl("color", "red");
        assert_eq!(rule.to_string(), ".a,\n.b {\n  color: red !important;\n}\n");
    }

    #[test]
    fn push_opt_skips_none() {
        let mut rule = CssRule::new(".x");
        rule.push_opt("color", None);
        assert!(rule.is_empty());
        rule.push_opt("color", Some("blue".into()));
        assert_eq!(rule.get("color"), Some("blue"));
    }

    #[test]
    fn stylesheet_drops_empty_rules_and_sections() {
        let mut sheet = Stylesheet::new();
        sheet.push_section("empty", vec![CssRule::new(".a").into()]);
        sheet.push_section(
            "media",
            vec![CssBlock::media("(max-width: 768px)", vec![CssRule::new(".b")])],
        );
        assert!(sheet.is_empty());

        sheet.push_section("real", vec![CssRule::new(".c").decl("margin", "0").into()]);
        assert_eq!(sheet.sections().len(), 1);
        assert!(sheet.section("real").is_some());
    }

    #[test]
    fn media_block_serializes_indented() {
        let mut sheet = Stylesheet::new();
        sheet.push_section(
            "mobile",
            vec![CssBlock::media(
                "(max-width: 768px)",
                vec![CssRule::new(".menu").decl("display", "none")],
            )],
        );
        assert_eq!(
            sheet.to_css(),
            "/* mobile */\n@media (max-width: 768px) {\n  .menu {\n    display: none !important;\n  }\n}\n"
        );
    }

    #[test]
    fn minified_output() {
        let mut sheet = Stylesheet::new();
        sheet.push_section(
            "a",
            vec![CssRule::many(&[".a", ".b"])
                .decl("color", "red")
                .decl("margin", "0")
                .into()],
        );
        insta::assert_snapshot!(
            sheet.to_minified_css(),
            @".a,.b{color:red!important;margin:0!important;}"
        );
    }

    #[test]
    fn style_tag_wraps_css() {
        let tag = Stylesheet::style_tag("ross-dynamic-css", "a{}\n");
        assert_eq!(tag, "<style id=\"ross-dynamic-css\">\na{}\n</style>\n");
    }

    #[test]
    fn style_tag_cannot_be_closed_from_inside() {
        let tag = Stylesheet::style_tag("ross-dynamic-css", "a{content:\"</style>\"}\n");
        assert_eq!(tag.matches("</style>").count(), 1);
        assert!(tag.ends_with("</style>\n"));
        assert!(tag.contains("<\\/style>"));
    }
}
