//! File processing API
//!
//! Everything that touches the file system lives here: reading sources,
//! parsing and comparing them, and rendering results in one of the
//! [`OutputFormat`]s. The parser and the evaluator stay pure.
//!
//! Not every format applies to every result:
//!
//! | target   | formats                  |
//! |----------|--------------------------|
//! | report   | `table`, `json`, `yaml`  |
//! | tree     | `treeviz`, `json`, `yaml`|
//! | tokens   | `simple`, `json`         |

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::codesim::ast::SyntaxTree;
use crate::codesim::formats::{render_table, FormatError, FormatRegistry, TableStyle};
use crate::codesim::lexer::{tokenize, Token, TokenizeError};
use crate::codesim::parser::{parse, ParseFailure};
use crate::codesim::similarity::{compare, Similarity, SimilarityReport, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Treeviz,
    Simple,
    Json,
    Yaml,
}

/// The kind of result being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Report,
    Tree,
    Tokens,
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseFailure,
    },
    #[error("cannot tokenize {}: {source}", path.display())]
    Tokenize {
        path: PathBuf,
        #[source]
        source: TokenizeError,
    },
    #[error("unknown output format '{0}'")]
    UnknownFormat(String),
    #[error("format '{}' is not available for {}", format.name(), target.name())]
    UnsupportedFormat { format: OutputFormat, target: Target },
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ProcessingError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "table" => Ok(OutputFormat::Table),
            "treeviz" => Ok(OutputFormat::Treeviz),
            "simple" => Ok(OutputFormat::Simple),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(ProcessingError::UnknownFormat(other.to_string())),
        }
    }
}

impl Target {
    pub fn name(&self) -> &'static str {
        match self {
            Target::Report => "comparison reports",
            Target::Tree => "syntax trees",
            Target::Tokens => "tokens",
        }
    }

    pub fn formats(&self) -> &'static [OutputFormat] {
        match self {
            Target::Report => &[OutputFormat::Table, OutputFormat::Json, OutputFormat::Yaml],
            Target::Tree => &[OutputFormat::Treeviz, OutputFormat::Json, OutputFormat::Yaml],
            Target::Tokens => &[OutputFormat::Simple, OutputFormat::Json],
        }
    }

    /// Parse `name` and check that it applies to this target
    pub fn format(&self, name: &str) -> Result<OutputFormat, ProcessingError> {
        let format = OutputFormat::from_str(name)?;
        if self.formats().contains(&format) {
            Ok(format)
        } else {
            Err(ProcessingError::UnsupportedFormat {
                format,
                target: *self,
            })
        }
    }
}

pub fn read_source(path: impl AsRef<Path>) -> Result<String, ProcessingError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| ProcessingError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_file(path: impl AsRef<Path>) -> Result<SyntaxTree, ProcessingError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "parsing file");
    let source = read_source(path)?;
    parse(&source).map_err(|source| ProcessingError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse both files and compare them, left against right
pub fn compare_files(
    left: impl AsRef<Path>,
    right: impl AsRef<Path>,
) -> Result<SimilarityReport, ProcessingError> {
    let left_tree = parse_file(left)?;
    let right_tree = parse_file(right)?;
    Ok(compare(&left_tree, &right_tree))
}

/// Serialized form of a report: the summary next to the full result tree
#[derive(Serialize)]
struct ReportDocument<'a> {
    similarity: f64,
    percentage: u32,
    verdict: Verdict,
    root: &'a Similarity,
}

/// Render a comparison. `threshold` decides the near-duplicate verdict.
pub fn format_report(
    report: &SimilarityReport,
    format: OutputFormat,
    style: &TableStyle,
    threshold: f64,
) -> Result<String, ProcessingError> {
    let verdict = report.verdict(threshold);
    let document = ReportDocument {
        similarity: report.similarity(),
        percentage: report.percentage(),
        verdict,
        root: report.root(),
    };
    match format {
        OutputFormat::Table => Ok(format!(
            "{}\nsimilarity: {}% ({})\n",
            render_table(report, style),
            report.percentage(),
            verdict
        )),
        OutputFormat::Json => serde_json::to_string_pretty(&document)
            .map_err(|err| ProcessingError::Serialization(err.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(&document)
            .map_err(|err| ProcessingError::Serialization(err.to_string())),
        OutputFormat::Treeviz | OutputFormat::Simple => Err(ProcessingError::UnsupportedFormat {
            format,
            target: Target::Report,
        }),
    }
}

pub fn format_tree(tree: &SyntaxTree, format: OutputFormat) -> Result<String, ProcessingError> {
    let registry = FormatRegistry::with_defaults();
    if !registry.has(format.name()) {
        return Err(ProcessingError::UnsupportedFormat {
            format,
            target: Target::Tree,
        });
    }
    Ok(registry.serialize(tree, format.name())?)
}

/// `simple` prints one `line:column Kind("text")` line per token
pub fn format_tokens(tokens: &[Token<'_>], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens
            .iter()
            .map(|token| format!("{} {}\n", token.location.start, token))
            .collect()),
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|err| ProcessingError::Serialization(err.to_string())),
        OutputFormat::Table | OutputFormat::Treeviz | OutputFormat::Yaml => {
            Err(ProcessingError::UnsupportedFormat {
                format,
                target: Target::Tokens,
            })
        }
    }
}

/// Tokenize a file, trivia included, and render the tokens
pub fn process_tokens(
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    let path = path.as_ref();
    let source = read_source(path)?;
    let tokens = tokenize(&source).map_err(|source| ProcessingError::Tokenize {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), tokens = tokens.len(), "tokenized file");
    format_tokens(&tokens, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codesim::location::Position;

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_str("treeviz").ok(), Some(OutputFormat::Treeviz));
        assert!(matches!(
            OutputFormat::from_str("xml"),
            Err(ProcessingError::UnknownFormat(name)) if name == "xml"
        ));
    }

    #[test]
    fn test_formats_per_target() {
        assert_eq!(Target::Report.format("table").ok(), Some(OutputFormat::Table));
        assert_eq!(Target::Tokens.format("json").ok(), Some(OutputFormat::Json));

        let error = Target::Tree.format("table").expect_err("tables are for reports");
        assert_eq!(
            error.to_string(),
            "format 'table' is not available for syntax trees"
        );
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let error = parse_file("/nonexistent/Missing.java").expect_err("no such file");
        assert!(matches!(error, ProcessingError::Io { .. }));
        assert!(error.to_string().starts_with("cannot read /nonexistent/Missing.java"));
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = tokenize("x = 1;").expect("valid source");
        let output = format_tokens(&tokens, OutputFormat::Simple).expect("simple output");
        let first = output.lines().next().expect("a token");

        assert_eq!(first, "0:0 Word(\"x\")");
        assert_eq!(output.lines().count(), tokens.len());
    }

    #[test]
    fn test_tokens_of_commented_source() {
        let source = "// see issue #12\nx = \"a#b\";\n";
        let tokens = tokenize(source).expect("comments and literals are single tokens");
        let output = format_tokens(&tokens, OutputFormat::Simple).expect("simple output");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "0:0 Comment(\"// see issue #12\")");
        assert_eq!(lines[1], "0:16 LineFeed(\"\\n\")");
        assert_eq!(lines[2], "1:0 Word(\"x\")");
        assert!(lines.contains(&"1:4 Text(\"\\\"a#b\\\"\")"));
    }

    #[test]
    fn test_tokens_reject_tree_formats() {
        let tokens = tokenize("x").expect("valid source");
        assert!(matches!(
            format_tokens(&tokens, OutputFormat::Treeviz),
            Err(ProcessingError::UnsupportedFormat {
                target: Target::Tokens,
                ..
            })
        ));
    }

    #[test]
    fn test_report_formats() {
        let left = parse("a; b;").expect("valid source");
        let right = parse("a; c; b;").expect("valid source");
        let report = compare(&left, &right);
        let style = TableStyle::default();

        let table = format_report(&report, OutputFormat::Table, &style, 0.5).expect("table");
        assert!(table.ends_with("similarity: 66% (near duplicate)\n"));

        let json = format_report(&report, OutputFormat::Json, &style, 0.7).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["percentage"], 66);
        assert_eq!(value["verdict"], "Distinct");
        assert_eq!(value["root"]["label"], "file");

        let yaml = format_report(&report, OutputFormat::Yaml, &style, 0.7).expect("yaml");
        assert!(yaml.contains("percentage: 66"));
    }

    #[test]
    fn test_tree_formats() {
        let tree = parse("x;").expect("valid source");
        assert_eq!(
            format_tree(&tree, OutputFormat::Treeviz).expect("treeviz"),
            "└─ VariableReference: x\n"
        );
        assert!(format_tree(&tree, OutputFormat::Simple).is_err());
    }

    #[test]
    fn test_parse_failure_keeps_its_position() {
        let failure = parse("x = 1;\ny = ;").expect_err("missing value");
        let error = ProcessingError::Parse {
            path: PathBuf::from("Broken.java"),
            source: failure,
        };
        assert_eq!(
            error.to_string(),
            "cannot parse Broken.java: unexpected \";\" at 1:4"
        );
        let ProcessingError::Parse { source, .. } = &error else {
            unreachable!()
        };
        assert_eq!(source.position(), Position::new(1, 4));
    }
}
