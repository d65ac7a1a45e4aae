//! Export the OpenAPI document as JSON or YAML.
//!
//! Without `--output` the document is printed to stdout. With `--output` it is
//! written to the given file and a short summary is reported on stderr.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use clap::{Parser, ValueEnum};
use screening_backend::doc::ApiDoc;
use utoipa::OpenApi;

/// Serialisation format for the exported document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    #[default]
    Json,
    Yaml,
}

/// `openapi-dump` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "openapi-dump",
    about = "Export the Screening API OpenAPI document",
    version
)]
struct CliArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
    /// Write the document to this file instead of stdout.
    #[arg(long, value_name = "path")]
    output: Option<PathBuf>,
}

fn render(doc: &utoipa::openapi::OpenApi, format: Format) -> io::Result<String> {
    match format {
        Format::Json => doc.to_pretty_json().map_err(io::Error::other),
        Format::Yaml => doc.to_yaml().map_err(io::Error::other),
    }
}

fn write_output(path: &Path, contents: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name: OsString = path
        .file_name()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("output path `{}` has no file name", path.display()),
            )
        })?
        .to_os_string();
    let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
    directory.write(Path::new(&file_name), contents)
}

fn summary(doc: &utoipa::openapi::OpenApi, path: &Path) -> String {
    format!(
        "exported OpenAPI document to {}\n  - Title: {}\n  - Version: {}\n  - Endpoints: {} paths\n",
        path.display(),
        doc.info.title,
        doc.info.version,
        doc.paths.paths.len()
    )
}

fn run(args: CliArgs) -> io::Result<()> {
    let doc = ApiDoc::openapi();
    let rendered = render(&doc, args.format)?;
    match args.output {
        Some(path) => {
            write_output(&path, &rendered)?;
            io::stderr().lock().write_all(summary(&doc, &path).as_bytes())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.write_all(b"\n")
        }
    }
}

fn main() -> io::Result<()> {
    run(CliArgs::parse())
}
