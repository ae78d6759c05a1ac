//! Derivation of missing output filenames and the final input/output paths.

use std::path::PathBuf;

use crate::config::{Invocation, OperationMode};
use crate::error::UsageError;

/// One suffix substitution: in `mode`, a name ending in `strip` has that
/// suffix replaced by `append`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    /// Mode the rule applies to
    pub mode: OperationMode,
    /// Suffix that must be present and is removed
    pub strip: &'static str,
    /// Suffix appended after removal
    pub append: &'static str,
}

impl SuffixRule {
    const fn new(mode: OperationMode, strip: &'static str, append: &'static str) -> Self {
        Self {
            mode,
            strip,
            append,
        }
    }

    /// Applies the rule to `name`, or returns `None` when the suffix is absent.
    pub fn apply(&self, name: &str) -> Option<String> {
        name.strip_suffix(self.strip)
            .map(|stem| format!("{stem}{}", self.append))
    }
}

/// Suffix rules in evaluation order. The first rule matching both the mode and
/// the name wins, so more specific suffixes come first.
pub const SUFFIX_RULES: [SuffixRule; 5] = [
    SuffixRule::new(OperationMode::Read, ".tar.xz", ".tar"),
    SuffixRule::new(OperationMode::Read, ".tpxz", ".tar"),
    SuffixRule::new(OperationMode::Read, ".xz", ""),
    SuffixRule::new(OperationMode::Write, ".tar", ".tpxz"),
    SuffixRule::new(OperationMode::Write, "", ".xz"),
];

/// Derives the companion filename of `name` for `mode`.
///
/// Returns `None` if no rule applies. Write mode always succeeds because its
/// last rule matches every name.
pub fn auto_output(mode: OperationMode, name: &str) -> Option<String> {
    SUFFIX_RULES
        .iter()
        .filter(|rule| rule.mode == mode)
        .find_map(|rule| rule.apply(name))
}

/// Concrete paths of a run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedPaths {
    /// Input file, or `None` for standard input
    pub input: Option<PathBuf>,
    /// Output file, or `None` for standard output
    pub output: Option<PathBuf>,
    /// Whether the input is removed after success because the output name was derived
    pub auto_remove_input: bool,
}

impl ResolvedPaths {
    /// Combines the `-i`/`-o` flags and positional arguments into concrete paths.
    ///
    /// A single positional input with no output, outside list mode, gets an
    /// output name derived through [`auto_output`].
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::UnknownSuffix`] if the output name cannot be derived.
    pub fn resolve(invocation: &Invocation) -> Result<Self, UsageError> {
        let config = &invocation.config;
        let mut paths = Self {
            input: config.input.clone(),
            output: config.output.clone(),
            auto_remove_input: false,
        };

        if config.mode == OperationMode::Extract {
            return Ok(paths);
        }

        match invocation.positionals.as_slice() {
            [] => {}
            [input, output] => {
                paths.input = Some(PathBuf::from(input));
                paths.output = Some(PathBuf::from(output));
            }
            [input, ..] => {
                paths.input = Some(PathBuf::from(input));
                if paths.output.is_none() && config.mode != OperationMode::List {
                    let output = auto_output(config.mode, input).ok_or_else(|| {
                        UsageError::UnknownSuffix {
                            name: input.clone(),
                        }
                    })?;
                    paths.output = Some(PathBuf::from(output));
                    paths.auto_remove_input = true;
                }
            }
        }

        Ok(paths)
    }
}
