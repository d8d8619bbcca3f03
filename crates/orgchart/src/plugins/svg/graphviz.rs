//! Graphviz SVG backend
//!
//! Serializes the graph to DOT and pipes it through `dot -Tsvg`. Layout and
//! drawing are entirely Graphviz's.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use anyhow::Result;
use tracing::{debug, span, warn, Level};

use super::{GraphBackend, OrgGraph};
use crate::core::OrgChartError;

/// Runs an external Graphviz `dot` executable
pub struct GraphvizBackend {
    command: String,
}

impl GraphvizBackend {
    pub fn new() -> Self {
        Self::with_command("dot")
    }

    /// Use a specific `dot` executable (name on `PATH` or full path)
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Default for GraphvizBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBackend for GraphvizBackend {
    fn render(&self, graph: &OrgGraph) -> Result<String> {
        let render_span = span!(
            Level::INFO,
            "render_svg_graphviz",
            node_count = graph.node_count(),
            command = %self.command
        );
        let _enter = render_span.enter();

        let dot = graph.to_dot();
        debug!(dot_len = dot.len(), "Spawning graphviz");

        let mut child = Command::new(&self.command)
            .arg("-Tsvg")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => OrgChartError::layout_error(format!(
                    "graphviz executable '{}' not found; install Graphviz or use the builtin engine",
                    self.command
                )),
                _ => OrgChartError::layout_error(format!(
                    "failed to start '{}': {}",
                    self.command, e
                )),
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| OrgChartError::layout_error("graphviz stdin is not available"))?;
        // feed stdin from a second thread so a large chart cannot fill both pipes
        let writer = std::thread::spawn(move || stdin.write_all(dot.as_bytes()));

        let output = child.wait_with_output().map_err(OrgChartError::from)?;
        let written = writer
            .join()
            .map_err(|_| OrgChartError::layout_error("graphviz input writer panicked"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = stderr.lines().next().unwrap_or("no diagnostics");
            warn!(status = %output.status, reason, "Graphviz failed");
            return Err(OrgChartError::layout_error(format!(
                "'{}' exited with {}: {}",
                self.command, output.status, reason
            ))
            .into());
        }
        written.map_err(OrgChartError::from)?;

        let svg = String::from_utf8(output.stdout).map_err(|e| {
            OrgChartError::render_error(format!("graphviz produced invalid UTF-8: {}", e))
        })?;
        debug!(bytes = svg.len(), "Graphviz rendering completed");
        Ok(svg)
    }

    fn name(&self) -> &'static str {
        "graphviz"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command() {
        assert_eq!(GraphvizBackend::new().command(), "dot");
        assert_eq!(GraphvizBackend::default().name(), "graphviz");
    }

    #[test]
    fn test_missing_executable_is_layout_error() {
        let backend = GraphvizBackend::with_command("orgchart-test-no-such-dot-binary");
        let mut graph = OrgGraph::new();
        graph.add_node("node_0", "A").unwrap();

        let err = backend.render(&graph).unwrap_err();
        match err.downcast_ref::<OrgChartError>() {
            Some(OrgChartError::Layout { message }) => assert!(message.contains("not found")),
            other => panic!("expected Layout error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    fn fake_dot(dir: &std::path::Path, name: &str, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[cfg(unix)]
    fn sample_graph() -> OrgGraph {
        let mut graph = OrgGraph::new();
        graph.add_node("node_0", "Ada").unwrap();
        graph.add_node("node_1", "Grace").unwrap();
        graph.add_edge("node_0", "node_1").unwrap();
        graph
    }

    #[cfg(unix)]
    #[test]
    fn test_dot_receives_graph_on_stdin() {
        let dir = tempfile::tempdir().unwrap();
        let backend = GraphvizBackend::with_command(fake_dot(dir.path(), "echo-dot", "cat"));
        let graph = sample_graph();

        let output = backend.render(&graph).unwrap();
        assert_eq!(output, graph.to_dot());
    }

    #[cfg(unix)]
    #[test]
    fn test_dot_failure_is_layout_error() {
        let dir = tempfile::tempdir().unwrap();
        let script = "echo 'Error: <stdin>: syntax error in line 1' >&2\nexit 1";
        let backend = GraphvizBackend::with_command(fake_dot(dir.path(), "failing-dot", script));

        let err = backend.render(&sample_graph()).unwrap_err();
        match err.downcast_ref::<OrgChartError>() {
            Some(OrgChartError::Layout { message }) => {
                assert!(message.contains("syntax error in line 1"), "{}", message)
            }
            other => panic!("expected Layout error, got {:?}", other),
        }
    }
}
