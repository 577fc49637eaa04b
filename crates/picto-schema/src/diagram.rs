//! Entity-relationship diagrams of the declared tables.
//!
//! [`render_dot`] and [`render_mermaid`] produce text; [`render_er`] picks a
//! format from the output file extension and writes it, shelling out to
//! Graphviz for image formats.

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use picto_core::schema::{Column, Table, relationships};

use crate::error::DiagramError;

/// Extensions accepted by [`render_er`].
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "dot", "gv", "mmd", "mermaid", "png", "svg", "pdf", "jpg", "jpeg",
];

/// Output format, derived from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramFormat {
    Dot,
    Mermaid,
    /// Rendered by Graphviz with `-T<format>`.
    Graphviz(&'static str),
}

impl DiagramFormat {
    /// Format for `path`, or `None` if its extension is not supported.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "dot" | "gv" => Some(Self::Dot),
            "mmd" | "mermaid" => Some(Self::Mermaid),
            "png" => Some(Self::Graphviz("png")),
            "svg" => Some(Self::Graphviz("svg")),
            "pdf" => Some(Self::Graphviz("pdf")),
            "jpg" | "jpeg" => Some(Self::Graphviz("jpg")),
            _ => None,
        }
    }
}

/// Rendering knobs taken from the `[diagram]` config section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramOptions {
    /// Graphviz executable used for image formats.
    pub graphviz: String,
    /// Graphviz layout direction (`TB`, `LR`, `BT`, `RL`).
    pub rankdir: String,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            graphviz: "dot".into(),
            rankdir: "LR".into(),
        }
    }
}

/// Render `tables` as a Graphviz digraph.
///
/// Each table is an HTML-table node with one row per column (primary key
/// columns underlined). Each foreign key is an edge from the child column to
/// the parent column, labelled with the cardinality at both ends.
#[must_use]
pub fn render_dot(tables: &[Table], rankdir: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "digraph picto {{");
    let _ = writeln!(out, "    graph [rankdir={rankdir}, fontname=\"Helvetica\"];");
    let _ = writeln!(out, "    node [shape=plaintext, fontname=\"Helvetica\"];");
    let _ = writeln!(out, "    edge [fontname=\"Helvetica\", fontsize=10, arrowhead=none];");

    for table in tables {
        let _ = writeln!(out);
        let _ = writeln!(out, "    \"{}\" [label=<", table.name);
        let _ = writeln!(
            out,
            "      <TABLE BORDER=\"0\" CELLBORDER=\"1\" CELLSPACING=\"0\" CELLPADDING=\"4\">"
        );
        let _ = writeln!(
            out,
            "        <TR><TD COLSPAN=\"2\" BGCOLOR=\"lightgrey\"><B>{}</B></TD></TR>",
            html_escape(table.name)
        );
        for column in table.columns {
            let name = html_escape(column.name);
            let name = if column.primary_key {
                format!("<U>{name}</U>")
            } else {
                name
            };
            let _ = writeln!(
                out,
                "        <TR><TD ALIGN=\"LEFT\" PORT=\"{}\">{name}</TD><TD ALIGN=\"LEFT\">{}</TD></TR>",
                column.name,
                html_escape(&column_annotation(column))
            );
        }
        let _ = writeln!(out, "      </TABLE>");
        let _ = writeln!(out, "    >];");
    }

    let edges = relationships(tables);
    if !edges.is_empty() {
        let _ = writeln!(out);
    }
    for rel in &edges {
        let _ = writeln!(
            out,
            "    \"{}\":\"{}\" -> \"{}\":\"{}\" [taillabel=\"{}\", headlabel=\"{}\"];",
            rel.child_table,
            rel.child_column.name,
            rel.parent_table,
            rel.parent_column,
            rel.child_cardinality(),
            rel.parent_cardinality(),
        );
    }

    out.push_str("}\n");
    out
}

/// Render `tables` as a Mermaid `erDiagram`.
#[must_use]
pub fn render_mermaid(tables: &[Table]) -> String {
    let mut out = String::from("erDiagram\n");

    for table in tables {
        let _ = writeln!(out, "    {} {{", table.name);
        for column in table.columns {
            let keys: Vec<&str> = [
                column.primary_key.then_some("PK"),
                column.references.is_some().then_some("FK"),
                column.unique.then_some("UK"),
            ]
            .into_iter()
            .flatten()
            .collect();

            let _ = write!(out, "        {} {}", column.ty.sql_type(), column.name);
            if !keys.is_empty() {
                let _ = write!(out, " {}", keys.join(","));
            }
            if let Some(len) = column.ty.max_len() {
                let _ = write!(out, " \"max {len}\"");
            }
            out.push('\n');
        }
        out.push_str("    }\n");
    }

    for rel in relationships(tables) {
        let parent_end = if rel.child_column.nullable { "|o" } else { "||" };
        let _ = writeln!(
            out,
            "    {} {parent_end}--o{{ {} : \"{}\"",
            rel.parent_table, rel.child_table, rel.child_column.name
        );
    }

    out
}

/// Render `tables` to `path` in the format named by its extension and
/// return the written path.
///
/// # Errors
///
/// Returns `DiagramError::UnsupportedFormat` for an unknown extension,
/// `DiagramError::Io` if the file cannot be written,
/// `DiagramError::GraphvizNotFound` if an image format is requested and the
/// Graphviz executable cannot be started, or `DiagramError::Graphviz` if it
/// exits unsuccessfully.
pub fn render_er(
    tables: &[Table],
    path: &Path,
    options: &DiagramOptions,
) -> Result<PathBuf, DiagramError> {
    let format = DiagramFormat::from_path(path).ok_or_else(|| DiagramError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    tracing::debug!(path = %path.display(), ?format, tables = tables.len(), "rendering diagram");

    match format {
        DiagramFormat::Dot => write_text(path, &render_dot(tables, &options.rankdir))?,
        DiagramFormat::Mermaid => write_text(path, &render_mermaid(tables))?,
        DiagramFormat::Graphviz(target) => {
            run_graphviz(&options.graphviz, target, path, &render_dot(tables, &options.rankdir))?;
        }
    }

    Ok(path.to_path_buf())
}

fn write_text(path: &Path, contents: &str) -> Result<(), DiagramError> {
    std::fs::write(path, contents).map_err(|source| DiagramError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Pipe `dot_source` into `program -T<target> -o <path>`.
fn run_graphviz(
    program: &str,
    target: &str,
    path: &Path,
    dot_source: &str,
) -> Result<(), DiagramError> {
    let mut child = Command::new(program)
        .arg(format!("-T{target}"))
        .arg("-o")
        .arg(path)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                DiagramError::GraphvizNotFound {
                    program: program.to_string(),
                }
            } else {
                DiagramError::Io {
                    path: PathBuf::from(program),
                    source,
                }
            }
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        // A Graphviz that dies early closes the pipe; its exit status reports why.
        if let Err(e) = stdin.write_all(dot_source.as_bytes()) {
            tracing::warn!(error = %e, "could not write DOT source to graphviz");
        }
    }

    let output = child.wait_with_output().map_err(|source| DiagramError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if !output.status.success() {
        return Err(DiagramError::Graphviz {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}

/// Type and constraints shown next to a column name.
fn column_annotation(column: &Column) -> String {
    let mut text = column.ty.to_string();
    if !column.nullable {
        text.push_str(" NOT NULL");
    }
    if column.unique {
        text.push_str(" UNIQUE");
    }
    text
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
