/// Initial parser flags. `#@strictmode` and `#@valueprecedence` directives
/// override them from the line they appear on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Options {
    /// Missing values and flow redefinitions become hard errors.
    pub strict: bool,
    /// When a line declares both a flow key and flow values, the values win.
    pub value_precedence: bool,
}

impl Options {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}
