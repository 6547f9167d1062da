#![warn(clippy::pedantic)]

use clap::Parser;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use wiki_toc::config::Syntax;
use wiki_toc::{HeaderDetector, PlaceholderSubstitutor, TocConfig, TocError};

/// Replace the `{toc}` placeholder in a wiki page with a numbered table of contents.
#[derive(Debug, Parser)]
#[command(name = "wiki-toc", version, about)]
struct Cli {
    /// Page to process; reads stdin when omitted
    input: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file with title, placeholder and syntax settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markup language used to detect headings
    #[arg(long, value_enum)]
    syntax: Option<Syntax>,

    /// Label shown above the entries
    #[arg(long)]
    title: Option<String>,

    /// Token to replace, matched case-insensitively
    #[arg(long)]
    placeholder: Option<String>,

    /// Print detected headings as JSON instead of substituting
    #[arg(long)]
    headings: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<TocConfig, TocError> {
        let mut config = match &self.config {
            Some(path) => TocConfig::load(path)?,
            None => TocConfig::default(),
        };
        if let Some(syntax) = self.syntax {
            config.syntax = syntax;
        }
        if let Some(title) = &self.title {
            config.title.clone_from(title);
        }
        if let Some(placeholder) = &self.placeholder {
            config.placeholder.clone_from(placeholder);
        }
        Ok(config)
    }
}

fn read_input(input: Option<&Path>) -> Result<String, TocError> {
    match input {
        Some(path) => std::fs::read_to_string(path).map_err(|source| TocError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut page = String::new();
            std::io::stdin()
                .read_to_string(&mut page)
                .map_err(|source| TocError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(page)
        }
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), TocError> {
    match output {
        Some(path) => std::fs::write(path, content).map_err(|source| TocError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => std::io::stdout()
            .write_all(content.as_bytes())
            .map_err(|source| TocError::Io {
                path: PathBuf::from("<stdout>"),
                source,
            }),
    }
}

fn run(cli: &Cli) -> Result<(), TocError> {
    let config = cli.resolve_config()?;
    let page = read_input(cli.input.as_deref())?;

    let result = if cli.headings {
        let headings = config.syntax.detect(&page)?;
        log::info!("detected {} headings", headings.len());
        let mut json = serde_json::to_string_pretty(&headings)?;
        json.push('\n');
        json
    } else {
        PlaceholderSubstitutor::from_config(&config, config.syntax)?.substitute(&page)?
    };

    write_output(cli.output.as_deref(), &result)
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "wiki-toc",
            "--syntax",
            "markdown",
            "--title",
            "Contents",
            "--placeholder",
            "[[toc]]",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.syntax, Syntax::Markdown);
        assert_eq!(config.title, "Contents");
        assert_eq!(config.placeholder, "[[toc]]");
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toc.toml");
        std::fs::write(&path, "title = \"From File\"\nsyntax = \"markdown\"\n").unwrap();

        let path = path.to_str().unwrap();

        let cli = Cli::parse_from(["wiki-toc", "--config", path, "--syntax", "wiki"]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.title, "From File");
        assert_eq!(config.syntax, Syntax::Wiki);
    }

    #[test]
    fn test_missing_input_file() {
        let err = read_input(Some(Path::new("/nonexistent/page.wiki"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/page.wiki"));
    }
}
