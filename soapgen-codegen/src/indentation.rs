//! Indentation state threaded through rendering.

/// Default indent unit: four spaces.
pub const DEFAULT_INDENT_UNIT: &str = "    ";

/// An indent unit repeated `level` times.
///
/// Values are immutable; nesting goes through [`Indentation::increased`],
/// so a block's body can never leak its level back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indentation {
    unit: String,
    level: usize,
    prefix: String,
}

impl Indentation {
    /// Creates an indentation at level 0.
    #[must_use]
    pub fn new(unit: impl Into<String>) -> Self {
        Self::with_level(unit, 0)
    }

    /// Creates an indentation at the given level.
    #[must_use]
    pub fn with_level(unit: impl Into<String>, level: usize) -> Self {
        let unit = unit.into();
        let prefix = unit.repeat(level);
        Self {
            unit,
            level,
            prefix,
        }
    }

    /// Returns the indent unit.
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Returns the nesting level.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Returns the unit repeated `level` times.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the same unit one level deeper.
    #[must_use]
    pub fn increased(&self) -> Self {
        Self::with_level(self.unit.clone(), self.level + 1)
    }

    /// Prefixes `line` with the current indentation.
    #[must_use]
    pub fn apply(&self, line: &str) -> String {
        let mut indented = String::with_capacity(self.prefix.len() + line.len());
        indented.push_str(&self.prefix);
        indented.push_str(line);
        indented
    }

    /// Emits `first`, then the lines produced by `body` one level deeper,
    /// then `last`.
    ///
    /// `body` receives the increased indentation and is responsible for
    /// applying it to its own lines.
    pub fn wrap_block<F>(&self, first: &str, body: F, last: &str) -> Vec<String>
    where
        F: FnOnce(&Indentation) -> Vec<String>,
    {
        let inner = body(&self.increased());
        let mut lines = Vec::with_capacity(inner.len() + 2);
        lines.push(self.apply(first));
        lines.extend(inner);
        lines.push(self.apply(last));
        lines
    }
}

impl Default for Indentation {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_UNIT)
    }
}
