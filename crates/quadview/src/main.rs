//! Quadtree dump viewer.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;
use quadview::quadfile::QuadFile;
use quadview::{Plot, PlotStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "quadview <quadtree.txt>";

fn main() -> anyhow::Result<()> {
    let Some(path) = input_path(std::env::args_os()) else {
        println!("{USAGE}");
        std::process::exit(1);
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let file = load(&path)?;
    info!(
        vertices = file.vertices().len(),
        nodes = file.nodes().len(),
        "Loaded {}",
        path.display()
    );

    let plot = Plot::new(file, plot_style());

    // Window and GPU errors are not guaranteed to be `Sync`.
    quadview::show(&plot, &window_title(&path)).map_err(|err| {
        anyhow::anyhow!("Failed to present {}: {err}", path.display())
    })?;

    Ok(())
}

/// The dump to show, the first argument after the program name.
fn input_path(
    args: impl IntoIterator<Item = OsString>,
) -> Option<PathBuf> {
    args.into_iter().nth(1).map(PathBuf::from)
}

/// Unlabeled black outlines and red crosses.
fn plot_style() -> PlotStyle {
    PlotStyle::default()
}

fn window_title(path: &Path) -> String {
    match path.file_name() {
        Some(name) => format!("quadview - {}", name.to_string_lossy()),
        None => "quadview".to_owned(),
    }
}

fn load(path: &Path) -> anyhow::Result<QuadFile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    QuadFile::parse(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    fn data_path(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../data")
            .join(name)
    }

    #[test]
    fn missing_argument_means_usage() {
        assert_eq!(input_path(args(&[])), None);
        assert_eq!(input_path(args(&["quadview"])), None);
    }

    #[test]
    fn first_argument_is_the_input() {
        assert_eq!(
            input_path(args(&["quadview", "dump.txt", "extra"])),
            Some(PathBuf::from("dump.txt"))
        );
    }

    #[test]
    fn binary_draws_without_labels() {
        let style = plot_style();

        assert!(!style.boxes.label);
        assert!(!style.boxes.filled);
    }

    #[test]
    fn title_names_the_file() {
        let title = window_title(Path::new("out/run_3.txt"));
        assert_eq!(title, "quadview - run_3.txt");
    }

    #[test]
    fn unreadable_file_reports_the_path() {
        let path = data_path("no_such_dump.txt");
        let err = load(&path).unwrap_err();

        let message = format!("{err:#}");
        assert!(message.starts_with("Failed to read "));
        assert!(message.contains("no_such_dump.txt"));
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn loads_producer_output() {
        let file = load(&data_path("sample_quadtree.txt")).unwrap();

        assert_eq!(file.vertices().len(), 12);
        assert_eq!(file.nodes().len(), 13);
    }
}
