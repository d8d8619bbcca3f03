//! Command-line interface for the orgchart utility
//!
//! Reads an indented outline and writes it out as a tree, Visio import text,
//! a Mermaid flowchart or an SVG chart.

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use orgchart::plugins::Orchestrator;
use orgchart::{OrgChartError, OutputFormat, RenderConfig, SvgEngine, VisioStyle};

/// orgchart - Turn an indented staff list into an org chart
#[derive(Parser, Debug)]
#[command(name = "orgchart")]
#[command(about = "Convert an indented org outline into tree, Visio, Mermaid or SVG output")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Outline file, one person per line indented under their manager (use - for stdin)
    #[arg(default_value = "org.txt")]
    pub filename: PathBuf,

    /// Output format (tree|visio|mermaid|svg); every format when omitted
    #[arg(short, long)]
    pub format: Option<String>,

    /// Output file (use - for stdout). Without -f this names the SVG file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// SVG layout engine
    #[arg(long, value_enum, default_value_t = EngineChoice::Builtin)]
    pub engine: EngineChoice,

    /// Graphviz executable used by --engine graphviz
    #[arg(long, default_value = "dot")]
    pub dot: String,

    /// Layout of the Visio import text
    #[arg(long, value_enum, default_value_t = VisioStyleChoice::Sentences)]
    pub visio_style: VisioStyleChoice,

    /// Wrap Mermaid output in a ```mermaid code fence
    #[arg(long)]
    pub fence: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (off|trace|debug|info|warn|error) [default: warn]
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json) [default: compact]
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// SVG engines selectable on the command line
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum EngineChoice {
    /// In-process tree layout
    #[default]
    Builtin,
    /// Graphviz `dot` (must be installed)
    Graphviz,
}

impl From<EngineChoice> for SvgEngine {
    fn from(value: EngineChoice) -> Self {
        match value {
            EngineChoice::Builtin => SvgEngine::Builtin,
            EngineChoice::Graphviz => SvgEngine::Graphviz,
        }
    }
}

/// Visio text layouts selectable on the command line
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum VisioStyleChoice {
    /// "X reports to Y" sentences
    #[default]
    Sentences,
    /// Tab-delimited Name / Reports_To table
    Delimited,
}

impl From<VisioStyleChoice> for VisioStyle {
    fn from(value: VisioStyleChoice) -> Self {
        match value {
            VisioStyleChoice::Delimited => VisioStyle::Delimited,
            VisioStyleChoice::Sentences => VisioStyle::Sentences,
        }
    }
}

/// Where one rendered output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Destination::Stdout
        } else {
            Destination::File(path)
        }
    }

    /// Destination for `format`, honoring an explicit `-o`
    pub fn for_format(format: OutputFormat, output: Option<&Path>) -> Self {
        match output {
            Some(path) => Self::from_path(path.to_path_buf()),
            None => format
                .default_output_file()
                .map(Destination::File)
                .unwrap_or(Destination::Stdout),
        }
    }
}

/// Main CLI application
pub struct OrgChartApp {
    verbose: bool,
}

impl OrgChartApp {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    fn build_config(cli: &Cli) -> RenderConfig {
        RenderConfig::new()
            .with_visio_style(cli.visio_style.into())
            .with_mermaid_fence(cli.fence)
            .with_svg_engine(cli.engine.into())
            .with_dot_command(cli.dot.clone())
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        self.verbose = cli.verbose;
        if self.verbose {
            eprintln!("orgchart v{}", env!("CARGO_PKG_VERSION"));
        }

        // reject a bad format before touching the input file
        let format = cli
            .format
            .as_deref()
            .map(str::parse::<OutputFormat>)
            .transpose()?;

        let content = self.read_input(&cli.filename)?;
        if self.verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let orchestrator = Orchestrator::new(Self::build_config(&cli));
        match format {
            Some(format) => self.render_one(&orchestrator, &content, format, cli.output),
            None => self.render_all(&orchestrator, &content, cli.output),
        }
    }

    fn render_one(
        &self,
        orchestrator: &Orchestrator,
        content: &str,
        format: OutputFormat,
        output: Option<PathBuf>,
    ) -> Result<()> {
        let rendered = orchestrator.process(content, format)?;
        let destination = Destination::for_format(format, output.as_deref());
        info!(format = %format, ?destination, "Writing output");
        self.write_output(&destination, &rendered)?;
        if let Destination::File(path) = &destination {
            eprintln!("{} written to {}", format.title(), path.display());
        }
        Ok(())
    }

    /// Every format: text sections on stdout with titles on stderr, the SVG
    /// chart to its file.
    ///
    /// Nothing is written until all formats rendered, and files are written
    /// before stdout so a failed file write leaves stdout empty.
    fn render_all(
        &self,
        orchestrator: &Orchestrator,
        content: &str,
        output: Option<PathBuf>,
    ) -> Result<()> {
        let outputs = orchestrator.process_all(content)?;
        debug!(formats = outputs.len(), "Rendered all formats");

        let planned: Vec<(OutputFormat, Destination, String)> = outputs
            .into_iter()
            .map(|(format, rendered)| {
                let destination = if format.is_file_artifact() {
                    Destination::for_format(format, output.as_deref())
                } else {
                    Destination::Stdout
                };
                (format, destination, rendered)
            })
            .collect();

        for (format, destination, rendered) in &planned {
            if let Destination::File(path) = destination {
                self.write_output(destination, rendered)?;
                eprintln!("=== {} === written to {}", format.title(), path.display());
            }
        }
        for (format, destination, rendered) in &planned {
            if *destination == Destination::Stdout {
                eprintln!("=== {} ===", format.title());
                self.write_output(destination, rendered)?;
            }
        }
        Ok(())
    }

    /// Read the outline from a file, or stdin for `-`
    pub fn read_input(&self, path: &Path) -> Result<String> {
        if path.as_os_str() == "-" {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            return Ok(content);
        }

        fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => OrgChartError::file_not_found(path).into(),
            _ => {
                let message = format!("Failed to read input file '{}': {}", path.display(), e);
                anyhow::Error::from(OrgChartError::from(e)).context(message)
            }
        })
    }

    /// Write rendered output; stdout gets a trailing newline
    pub fn write_output(&self, destination: &Destination, content: &str) -> Result<()> {
        match destination {
            Destination::Stdout => {
                let mut stdout = io::stdout().lock();
                if !content.is_empty() {
                    writeln!(stdout, "{}", content)?;
                }
                stdout.flush()?;
            }
            Destination::File(path) => {
                fs::write(path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
                if self.verbose {
                    eprintln!("Wrote {} bytes to {}", content.len(), path.display());
                }
            }
        }
        Ok(())
    }
}

impl Default for OrgChartApp {
    fn default() -> Self {
        Self::new()
    }
}
