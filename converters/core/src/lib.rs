//! Core traits and utilities for RD document converters.
//!
//! This crate provides the shared infrastructure used by converters:
//!
//! - [`Converter`] - trait that converters implement
//! - [`Visitor`](visitor::Visitor) - visitor pattern for folding a document tree
//! - [`Options`] - configuration for conversion
//!
//! # Example
//!
//! ```
//! use rd_converters_core::{GeneratorMetadata, Options};
//!
//! let options = Options::builder()
//!     .title("ls")
//!     .generator_metadata(GeneratorMetadata::new("rd2man", "0.1.0"))
//!     .build();
//! assert_eq!(options.title(), Some("ls"));
//! ```

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use rd_tree::Document;

pub mod visitor;

/// Converter options.
///
/// Use [`Options::builder()`] to construct an instance. This struct is marked
/// `#[non_exhaustive]` to allow adding new fields in future minor versions.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct Options {
    generator_metadata: GeneratorMetadata,
    title: Option<String>,
    timings: bool,
}

impl Options {
    /// Create a new builder with default values.
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Get the generator metadata.
    #[must_use]
    pub fn generator_metadata(&self) -> &GeneratorMetadata {
        &self.generator_metadata
    }

    /// Get the title override, if any.
    ///
    /// When set, it is used as the output title instead of the name of the
    /// source the document was read from.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Get whether timing information should be output.
    #[must_use]
    pub fn timings(&self) -> bool {
        self.timings
    }
}

/// Builder for [`Options`].
#[derive(Debug, Default, Clone)]
pub struct OptionsBuilder {
    generator_metadata: GeneratorMetadata,
    title: Option<String>,
    timings: bool,
}

impl OptionsBuilder {
    /// Set the generator metadata (name and version).
    #[must_use]
    pub fn generator_metadata(mut self, meta: GeneratorMetadata) -> Self {
        self.generator_metadata = meta;
        self
    }

    /// Set the title override.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set or clear the title override.
    #[must_use]
    pub fn maybe_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Enable or disable timing output.
    #[must_use]
    pub fn timings(mut self, timings: bool) -> Self {
        self.timings = timings;
        self
    }

    /// Build the [`Options`] instance.
    #[must_use]
    pub fn build(self) -> Options {
        Options {
            generator_metadata: self.generator_metadata,
            title: self.title,
            timings: self.timings,
        }
    }
}

/// Extension trait for formatting [`Duration`](std::time::Duration) in human-readable form.
pub trait PrettyDuration {
    /// Returns a human-readable string representation of the duration.
    ///
    /// - Automatically selects appropriate unit (ns, µs, ms, s)
    /// - Rounds to 2 decimal places
    /// - Strips trailing zeros
    fn pretty_print(&self) -> String;
}

impl PrettyDuration for std::time::Duration {
    fn pretty_print(&self) -> String {
        let nanos = self.as_nanos();

        // f64 represents every integer up to 2^53 exactly, far beyond any
        // duration a conversion takes.
        #[allow(clippy::cast_precision_loss)]
        let f_nanos = nanos as f64;
        let formatted = match nanos {
            0..=999 => return format!("{nanos}ns"),
            1_000..=999_999 => format!("{:.2}µs", f_nanos / 1_000.0),
            1_000_000..=999_999_999 => format!("{:.2}ms", f_nanos / 1_000_000.0),
            _ => format!("{:.2}s", f_nanos / 1_000_000_000.0),
        };
        // Split the unit off so only the number loses its trailing zeros
        let unit_start = formatted
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(formatted.len());
        let (number, unit) = formatted.split_at(unit_start);
        let number = number.trim_end_matches('0').trim_end_matches('.');
        format!("{number}{unit}")
    }
}

/// Generator metadata for tracking which tool produced the output.
///
/// This is embedded in generated output (e.g. the man page comment header)
/// for debugging and identification purposes.
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct GeneratorMetadata {
    name: String,
    version: String,
}

impl GeneratorMetadata {
    /// Create new generator metadata.
    #[must_use]
    pub fn new<S: AsRef<str>>(name: S, version: S) -> Self {
        Self {
            name: name.as_ref().to_string(),
            version: version.as_ref().to_string(),
        }
    }

    /// Get the generator name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the generator version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl std::fmt::Display for GeneratorMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{}", self.name, self.version)
    }
}

/// Trait for document converters.
///
/// Parsing happens elsewhere; converters only turn an already-built
/// [`Document`] into their output format.
pub trait Converter: Sized {
    /// The error type for this converter.
    type Error: From<std::io::Error>;

    /// Create a new converter instance.
    fn new(options: Options) -> Self;

    /// Get the options this converter was created with.
    fn options(&self) -> &Options;

    /// Work out where the output for `input` should be written.
    ///
    /// `None` means the output goes to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid output path can be derived.
    fn derive_output_path(
        &self,
        _input: &Path,
        _doc: &Document,
    ) -> Result<Option<PathBuf>, Self::Error> {
        Ok(None)
    }

    /// Convert `doc` and write the result to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if conversion or writing fails.
    fn write_to<W: Write>(
        &self,
        doc: &Document,
        writer: W,
        source_file: Option<&Path>,
    ) -> Result<(), Self::Error>;

    /// Convert a pre-built document.
    ///
    /// With `Some(file)` the output goes to the path from
    /// [`derive_output_path`](Converter::derive_output_path), otherwise to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if conversion or writing fails.
    fn convert(&self, doc: &Document, file: Option<&Path>) -> Result<(), Self::Error> {
        if let Some(input) = file
            && let Some(output) = self.derive_output_path(input, doc)?
        {
            // Render into memory first so a failed conversion leaves no file behind
            let mut buffer = Vec::new();
            self.write_to(doc, &mut buffer, Some(input))?;
            let mut writer = BufWriter::new(File::create(&output)?);
            writer.write_all(&buffer)?;
            writer.flush()?;
            tracing::info!(input = %input.display(), output = %output.display(), "converted");
            return Ok(());
        }

        let stdout = std::io::stdout();
        self.write_to(doc, stdout.lock(), file)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_options_builder() {
        let options = Options::builder()
            .title("grep")
            .timings(true)
            .generator_metadata(GeneratorMetadata::new("rd2man", "0.1.0"))
            .build();
        assert_eq!(options.title(), Some("grep"));
        assert!(options.timings());
        assert_eq!(options.generator_metadata().to_string(), "rd2man v0.1.0");
    }

    #[test]
    fn test_maybe_title_clears() {
        let options = Options::builder().title("x").maybe_title(None).build();
        assert_eq!(options.title(), None);
    }

    #[test]
    fn test_pretty_print() {
        assert_eq!(Duration::from_nanos(500).pretty_print(), "500ns");
        assert_eq!(Duration::from_micros(1500).pretty_print(), "1.5ms");
        assert_eq!(Duration::from_millis(20).pretty_print(), "20ms");
        assert_eq!(Duration::from_secs(2).pretty_print(), "2s");
    }
}
