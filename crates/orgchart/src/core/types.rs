//! Core type definitions for org chart processing
//!
//! Output formats, per-format style switches and the render configuration
//! shared by the orchestrator and the CLI.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::OrgChartError;

/// Output formats the pipeline can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Tab-indented outline
    Tree,
    /// Visio organization chart import text
    Visio,
    /// Mermaid flowchart
    Mermaid,
    /// SVG document
    Svg,
}

impl OutputFormat {
    /// Every format, in the order the CLI prints them
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Tree,
        OutputFormat::Visio,
        OutputFormat::Mermaid,
        OutputFormat::Svg,
    ];

    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["tree", "visio", "mermaid", "svg"]
    }

    /// True for formats that are written to a file unless told otherwise
    pub fn is_file_artifact(&self) -> bool {
        matches!(self, OutputFormat::Svg)
    }

    /// File the format is written to when no destination is given
    pub fn default_output_file(&self) -> Option<PathBuf> {
        match self {
            OutputFormat::Svg => Some(PathBuf::from("org_chart.svg")),
            _ => None,
        }
    }

    /// Human-readable section title
    pub fn title(&self) -> &'static str {
        match self {
            OutputFormat::Tree => "Organization Chart",
            OutputFormat::Visio => "Reporting Relationships (for Visio import)",
            OutputFormat::Mermaid => "Mermaid Flowchart",
            OutputFormat::Svg => "SVG Chart",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Tree => write!(f, "tree"),
            OutputFormat::Visio => write!(f, "visio"),
            OutputFormat::Mermaid => write!(f, "mermaid"),
            OutputFormat::Svg => write!(f, "svg"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = OrgChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree" => Ok(OutputFormat::Tree),
            "visio" => Ok(OutputFormat::Visio),
            "mermaid" => Ok(OutputFormat::Mermaid),
            "svg" => Ok(OutputFormat::Svg),
            other => Err(OrgChartError::unknown_format(other)),
        }
    }
}

/// Layout of the Visio import text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum VisioStyle {
    /// One `X reports to Y` sentence per report
    #[default]
    Sentences,
    /// Tab-delimited `Name` / `Reports_To` columns with a header row, as read
    /// by Visio's Organization Chart Wizard
    Delimited,
}

impl fmt::Display for VisioStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisioStyle::Delimited => write!(f, "delimited"),
            VisioStyle::Sentences => write!(f, "sentences"),
        }
    }
}

/// Backend that lays out and draws the SVG chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SvgEngine {
    /// In-process top-down tree layout
    #[default]
    Builtin,
    /// Graphviz `dot`, run as a child process
    Graphviz,
}

impl fmt::Display for SvgEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgEngine::Builtin => write!(f, "builtin"),
            SvgEngine::Graphviz => write!(f, "graphviz"),
        }
    }
}

/// Rendering options shared by all renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub visio_style: VisioStyle,
    /// Wrap Mermaid output in a ```` ```mermaid ```` code fence
    pub mermaid_fence: bool,
    pub svg_engine: SvgEngine,
    /// Graphviz executable used by [`SvgEngine::Graphviz`]
    pub dot_command: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            visio_style: VisioStyle::default(),
            mermaid_fence: false,
            svg_engine: SvgEngine::default(),
            dot_command: "dot".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_visio_style(mut self, style: VisioStyle) -> Self {
        self.visio_style = style;
        self
    }

    pub fn with_mermaid_fence(mut self, fence: bool) -> Self {
        self.mermaid_fence = fence;
        self
    }

    pub fn with_svg_engine(mut self, engine: SvgEngine) -> Self {
        self.svg_engine = engine;
        self
    }

    pub fn with_dot_command(mut self, command: impl Into<String>) -> Self {
        self.dot_command = command.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_round_trip_names() {
        for format in OutputFormat::ALL {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
        assert_eq!(OutputFormat::variants().len(), OutputFormat::ALL.len());
    }

    #[test]
    fn test_unknown_format() {
        let err = "png".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, OrgChartError::UnknownFormat { ref format } if format == "png"));
        // names are case sensitive, like the CLI choices
        assert!("Tree".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_default_output_file() {
        assert_eq!(
            OutputFormat::Svg.default_output_file(),
            Some(PathBuf::from("org_chart.svg"))
        );
        assert_eq!(OutputFormat::Tree.default_output_file(), None);
        assert!(OutputFormat::Svg.is_file_artifact());
        assert!(!OutputFormat::Mermaid.is_file_artifact());
    }

    #[test]
    fn test_render_config_builder() {
        let config = RenderConfig::new()
            .with_visio_style(VisioStyle::Delimited)
            .with_mermaid_fence(true)
            .with_svg_engine(SvgEngine::Graphviz)
            .with_dot_command("/opt/graphviz/bin/dot");
        assert_eq!(config.visio_style, VisioStyle::Delimited);
        assert!(config.mermaid_fence);
        assert_eq!(config.svg_engine, SvgEngine::Graphviz);
        assert_eq!(config.dot_command, "/opt/graphviz/bin/dot");
        assert_eq!(RenderConfig::default().dot_command, "dot");
        assert_eq!(RenderConfig::default().visio_style, VisioStyle::Sentences);
    }
}
