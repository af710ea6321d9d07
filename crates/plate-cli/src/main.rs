use clap::{Parser, Subcommand};
use plate_core::{DocumentSpec, Markup, PlateError};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plate")]
#[command(about = "Render declarative element trees (JSON) to HTML")]
#[command(version)]
struct Cli {
    /// Log rendering details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a .json tree description to HTML
    Render {
        /// Input .json file
        path: String,

        /// Treat the input as a whole document (`{ attrs, children }`)
        #[arg(long)]
        document: bool,

        /// Write the HTML to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Check a .json tree description without printing output
    Check {
        /// Input .json file
        path: String,

        /// Treat the input as a whole document (`{ attrs, children }`)
        #[arg(long)]
        document: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Markup error: {0}")]
    Markup(#[from] PlateError),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Render {
            path,
            document,
            out,
        } => cmd_render(&path, document, out.as_deref()),
        Command::Check { path, document } => cmd_check(&path, document),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

/// Decode and render a description. `document` selects the `{ attrs, children }`
/// document shape over a bare fragment.
fn render_source(source: &str, document: bool) -> Result<String, CliError> {
    let html = if document {
        let spec: DocumentSpec = serde_json::from_str(source)?;
        debug!(nodes = spec.children.len(), "rendering document");
        spec.render()?
    } else {
        let markup: Markup = serde_json::from_str(source)?;
        markup.render()?
    };
    Ok(html)
}

fn cmd_render(path: &str, document: bool, out: Option<&Path>) {
    let source = read_source(path);

    let html = match render_source(&source, document) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match out {
        Some(out_path) => {
            if let Err(e) = std::fs::write(out_path, &html) {
                eprintln!("Error writing {}: {e}", out_path.display());
                std::process::exit(1);
            }
            eprintln!("Rendered: {}", out_path.display());
        }
        None => println!("{html}"),
    }
}

fn cmd_check(path: &str, document: bool) {
    let source = read_source(path);

    if let Err(e) = render_source(&source, document) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    eprintln!("OK: {path}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_fragment_source() {
        let html = render_source(
            r#"{"tag": "div", "children": [{"tag": "p", "children": ["hi"]}, {"tag": "ul", "children": [{"tag": "li", "children": ["x"]}]}]}"#,
            false,
        )
        .unwrap();
        assert_eq!(html, "<div><p>hi</p><ul><li>x</li></ul></div>");
    }

    #[test]
    fn test_render_document_source() {
        let html = render_source(
            r#"{"attrs": {"lang": "en"}, "children": [{"tag": "body", "children": ["a && b"]}]}"#,
            true,
        )
        .unwrap();
        assert_eq!(
            html,
            r#"<!DOCTYPE html><html lang="en"><body>a &amp;&amp; b</body></html>"#
        );
    }

    #[test]
    fn test_invalid_json() {
        let err = render_source("{", false).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
        assert!(err.to_string().starts_with("Parse error:"));
    }

    #[test]
    fn test_invalid_markup() {
        let err = render_source(r#"{"tag": "a b"}"#, false).unwrap_err();
        assert!(matches!(err, CliError::Markup(PlateError::InvalidTagName { .. })));
    }

    #[test]
    fn test_cli_parses_render_flags() {
        let cli = Cli::try_parse_from([
            "plate",
            "-v",
            "render",
            "page.json",
            "--document",
            "-o",
            "out.html",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Render {
                path,
                document,
                out,
            } => {
                assert_eq!(path, "page.json");
                assert!(document);
                assert_eq!(out, Some(PathBuf::from("out.html")));
            }
            Command::Check { .. } => panic!("expected render"),
        }
    }
}
