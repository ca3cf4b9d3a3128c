//! CLI parsing, output format and end-to-end build/search with the null provider

use clap::Parser;
use imgseek::cli::{Cli, Command, format_results, run};
use imgseek::domain::SearchResult;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("valid arguments")
}

#[test]
fn test_parse_build_defaults() {
    let cli = parse(&["imgseek", "build"]);

    assert_eq!(cli.config, None);
    assert_eq!(
        cli.command,
        Command::Build {
            image_folder: None,
            index_path: None,
        }
    );
}

#[test]
fn test_parse_search_with_snake_case_aliases() {
    let cli = parse(&[
        "imgseek",
        "search",
        "--query",
        "red car",
        "--index_path",
        "idx.pkl",
        "--top_k",
        "3",
    ]);

    assert_eq!(
        cli.command,
        Command::Search {
            query: "red car".to_string(),
            index_path: Some(PathBuf::from("idx.pkl")),
            top_k: Some(3),
        }
    );
}

#[test]
fn test_parse_global_config_after_subcommand() {
    let cli = parse(&["imgseek", "serve", "--port", "8080", "--config", "my.toml"]);

    assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
    assert_eq!(
        cli.command,
        Command::Serve {
            index_path: None,
            host: None,
            port: Some(8080),
        }
    );
}

#[test]
fn test_search_requires_query() {
    assert!(Cli::try_parse_from(["imgseek", "search"]).is_err());
}

#[test]
fn test_format_results() {
    let results = vec![
        SearchResult {
            path: "images/a.jpg".to_string(),
            score: 0.312_345,
        },
        SearchResult {
            path: "images/b.png".to_string(),
            score: -0.05,
        },
    ];

    let text = format_results("red car", &results);

    assert_eq!(
        text,
        "\nQuery: red car\n\nFound 2 results:\n\n\
         1. images/a.jpg\n   Similarity: 0.3123\n\n\
         2. images/b.png\n   Similarity: -0.0500\n\n"
    );
}

#[test]
fn test_format_no_results() {
    assert_eq!(
        format_results("anything", &[]),
        "\nQuery: anything\n\nFound 0 results:\n\n"
    );
}

fn write_null_config(dir: &Path) -> PathBuf {
    let path = dir.join("imgseek.toml");
    std::fs::write(
        &path,
        "[embedding]\nprovider = \"null\"\ndimensions = 8\n\n[logging]\nlevel = \"warn\"\n",
    )
    .expect("write config");
    path
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

#[tokio::test]
async fn test_build_then_search_end_to_end() {
    let dir = TempDir::new().expect("temp dir");
    let config = write_null_config(dir.path());
    let images = dir.path().join("images");
    std::fs::create_dir_all(images.join("nested")).expect("create dirs");
    std::fs::write(images.join("a.jpg"), b"first").expect("write");
    std::fs::write(images.join("nested").join("b.PNG"), b"second").expect("write");
    std::fs::write(images.join("broken.jpg"), b"").expect("write");
    std::fs::write(images.join("notes.txt"), b"not an image").expect("write");
    let index = dir.path().join("image_index.pkl");

    let mut out = Vec::new();
    let build = parse(&[
        "imgseek",
        "--config",
        arg(&config),
        "build",
        "--image-folder",
        arg(&images),
        "--index-path",
        arg(&index),
    ]);
    run(build, &mut out).await.expect("build succeeds");
    let text = String::from_utf8(out).expect("utf-8 output");
    assert!(
        text.contains("Index build complete: 2 indexed, 1 skipped"),
        "{text}"
    );
    assert!(index.is_file());

    let mut out = Vec::new();
    let search = parse(&[
        "imgseek",
        "--config",
        arg(&config),
        "search",
        "--query",
        "a red car",
        "--index-path",
        arg(&index),
    ]);
    run(search, &mut out).await.expect("search succeeds");
    let text = String::from_utf8(out).expect("utf-8 output");
    assert!(text.contains("Query: a red car"), "{text}");
    assert!(text.contains("Found 2 results:"), "{text}");
    assert!(text.contains("1. "), "{text}");
    assert!(text.contains("Similarity: "), "{text}");
}

#[tokio::test]
async fn test_search_without_index_fails() {
    let dir = TempDir::new().expect("temp dir");
    let config = write_null_config(dir.path());
    let index = dir.path().join("missing.pkl");

    let mut out = Vec::new();
    let search = parse(&[
        "imgseek",
        "--config",
        arg(&config),
        "search",
        "--query",
        "cat",
        "--index-path",
        arg(&index),
    ]);
    let err = run(search, &mut out).await.unwrap_err();

    assert!(err.to_string().contains("Not found"), "{err}");
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_build_missing_folder_fails() {
    let dir = TempDir::new().expect("temp dir");
    let config = write_null_config(dir.path());

    let mut out = Vec::new();
    let build = parse(&[
        "imgseek",
        "--config",
        arg(&config),
        "build",
        "--image-folder",
        arg(&dir.path().join("nope")),
        "--index-path",
        arg(&dir.path().join("idx.pkl")),
    ]);

    assert!(run(build, &mut out).await.is_err());
}
