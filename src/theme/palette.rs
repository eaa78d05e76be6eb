//! resolved color variable mapping stuff
use crate::color::Color;

/// the resolved set of color variables pushed to a style sink
///
/// predefined themes fill all six slots; custom mode fills only the three
/// required ones and leaves the derived slots to the sink's own baseline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorVariableMap {
    /// main background color
    pub background: Color,
    /// main text color
    pub text: Color,
    /// accent color for interactive elements
    pub accent: Color,
    /// primary brand color
    pub primary: Option<Color>,
    /// secondary brand color
    pub secondary: Option<Color>,
    /// subtle background for panels and stripes
    pub subtle_background: Option<Color>,
}

impl ColorVariableMap {
    /// make a new mapping with only the required slots filled
    pub fn new(background: Color, text: Color, accent: Color) -> Self {
        Self {
            background,
            text,
            accent,
            primary: None,
            secondary: None,
            subtle_background: None,
        }
    }

    /// set the primary color
    pub fn with_primary(mut self, primary: Color) -> Self {
        self.primary = Some(primary);
        self
    }

    /// set the secondary color
    pub fn with_secondary(mut self, secondary: Color) -> Self {
        self.secondary = Some(secondary);
        self
    }

    /// set the subtle background color
    pub fn with_subtle_background(mut self, subtle_background: Color) -> Self {
        self.subtle_background = Some(subtle_background);
        self
    }

    /// convert the mapping to CSS custom property declarations
    ///
    /// absent slots produce no declaration, so whatever the consumer's
    /// stylesheet already defines stays in effect
    pub fn to_css_vars(&self) -> String {
        let mut vars = String::new();

        vars.push_str(&format!(
            "--background-color: {};\n--text-color: {};\n--accent-color: {};\n",
            self.background, self.text, self.accent
        ));

        Self::add_optional_var(&mut vars, "--primary-color", &self.primary);
        Self::add_optional_var(&mut vars, "--secondary-color", &self.secondary);
        Self::add_optional_var(&mut vars, "--subtle-background-color", &self.subtle_background);

        vars
    }

    /// helper to add an optional css variable
    fn add_optional_var(vars: &mut String, name: &str, value: &Option<Color>) {
        if let Some(val) = value {
            vars.push_str(&format!("{}: {};\n", name, val));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_vars_full_map() {
        let map = ColorVariableMap::new(
            Color::parse("#ffffff").unwrap(),
            Color::parse("#333333").unwrap(),
            Color::parse("#007bff").unwrap(),
        )
        .with_primary(Color::parse("#003366").unwrap())
        .with_secondary(Color::parse("#007bff").unwrap())
        .with_subtle_background(Color::parse("#f2f2f2").unwrap());

        let css = map.to_css_vars();
        assert!(css.contains("--background-color: #ffffff;"));
        assert!(css.contains("--primary-color: #003366;"));
        assert!(css.contains("--subtle-background-color: #f2f2f2;"));
    }

    #[test]
    fn test_css_vars_skip_absent_slots() {
        let map = ColorVariableMap::new(
            Color::parse("#000000").unwrap(),
            Color::parse("#111111").unwrap(),
            Color::parse("#222222").unwrap(),
        );

        let css = map.to_css_vars();
        assert!(css.contains("--accent-color: #222222;"));
        assert!(!css.contains("--primary-color"));
        assert!(!css.contains("--secondary-color"));
        assert!(!css.contains("--subtle-background-color"));
    }
}
