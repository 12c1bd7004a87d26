//! Document assembly.
//!
//! The [`Generator`] renders every top-level type in name order and places
//! the blocks between the file preamble and the section banners.

use crate::error::CodegenError;
use crate::indentation::{DEFAULT_INDENT_UNIT, Indentation};
use crate::swift::ToLinesOfCode;
use soapgen_model::{MetaType, Validator, sorted_by_name};

/// Default tool-identification line.
pub const DEFAULT_BANNER: &str = "// This file was generated by soapgen.";

/// Modules imported by default, in order.
pub const DEFAULT_IMPORTS: [&str; 2] = ["Foundation", "SoapgenRuntime"];

const STRUCTURES_SECTION: &str = "// MARK: - SOAP Structures";
const CLIENT_SECTION: &str = "// MARK: - SOAP Client";

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Indent unit repeated once per nesting level.
    pub indent_unit: String,
    /// First line of the document.
    pub banner: String,
    /// Imported modules, emitted in order.
    pub imports: Vec<String>,
}

impl GeneratorConfig {
    /// Checks that the configuration produces well-formed output.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` if the indent unit contains
    /// anything but spaces and tabs, the banner spans several lines, or an
    /// import is empty or contains whitespace.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if self.indent_unit.chars().any(|c| c != ' ' && c != '\t') {
            return Err(CodegenError::generation(format!(
                "indent unit {:?} must contain only spaces and tabs",
                self.indent_unit
            )));
        }
        if self.banner.contains('\n') {
            return Err(CodegenError::generation("banner must be a single line"));
        }
        if let Some(import) = self
            .imports
            .iter()
            .find(|import| import.is_empty() || import.chars().any(char::is_whitespace))
        {
            return Err(CodegenError::generation(format!(
                "invalid import {:?}",
                import
            )));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
            banner: DEFAULT_BANNER.to_string(),
            imports: DEFAULT_IMPORTS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Builder for [`Generator`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    config: GeneratorConfig,
}

impl GeneratorBuilder {
    /// Creates a builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indent unit.
    #[must_use]
    pub fn indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.config.indent_unit = unit.into();
        self
    }

    /// Sets the tool-identification line.
    #[must_use]
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.config.banner = banner.into();
        self
    }

    /// Replaces the import list.
    #[must_use]
    pub fn imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one import.
    #[must_use]
    pub fn import(mut self, module: impl Into<String>) -> Self {
        self.config.imports.push(module.into());
        self
    }

    /// Builds the generator.
    #[must_use]
    pub fn build(self) -> Generator {
        Generator::new(self.config)
    }
}

/// Assembles complete source documents from top-level types.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns a builder.
    #[must_use]
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Renders one type as a block at level 0.
    #[must_use]
    pub fn generate_type(&self, meta: &MetaType) -> String {
        meta.to_code(&self.config.indent_unit)
    }

    /// Renders the complete document.
    ///
    /// Top-level types are sorted by name and separated by one blank line.
    /// Types sharing a name are ordered by kind and content, so the result
    /// depends only on the set of types, never on slice order.
    #[must_use]
    pub fn generate(&self, types: &[MetaType]) -> String {
        tracing::debug!("assembling document with {} top-level types", types.len());

        let indentation = Indentation::new(self.config.indent_unit.as_str());
        let blocks: Vec<String> = sorted_by_name(types)
            .into_iter()
            .map(|meta| meta.to_lines_of_code(&indentation).join("\n"))
            .collect();

        let mut lines: Vec<String> = Vec::with_capacity(self.config.imports.len() + 12);
        lines.push(self.config.banner.clone());
        lines.push(String::new());
        lines.extend(
            self.config
                .imports
                .iter()
                .map(|module| format!("import {module}")),
        );
        lines.push(String::new());
        push_section(&mut lines, STRUCTURES_SECTION);
        lines.push(blocks.join("\n\n"));
        lines.push(String::new());
        push_section(&mut lines, CLIENT_SECTION);
        lines.push(String::new());

        lines.join("\n")
    }

    /// Validates the configuration and the model, then renders the document.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` for an unusable configuration and
    /// `CodegenError::Model` if model validation fails.
    pub fn generate_validated(&self, types: &[MetaType]) -> Result<String, CodegenError> {
        self.config.validate()?;
        Validator::new().validate(types)?;
        Ok(self.generate(types))
    }
}

fn push_section(lines: &mut Vec<String>, title: &str) {
    lines.push("//".to_string());
    lines.push(title.to_string());
    lines.push("//".to_string());
}
