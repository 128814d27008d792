#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use clap::CommandFactory;
use clap::Parser;

#[test]
fn test_cli_command_structure() {
    Cli::command().debug_assert();
}

#[test]
fn test_generate_defaults() {
    let cli = Cli::parse_from([
        "textsmith-gen",
        "generate",
        "Templates",
        "--output-directory",
        "Generated",
    ]);
    match cli.command {
        Commands::Generate {
            resources,
            recursive,
            root,
            enum_name,
            policy,
            mode,
            output_directory,
            manifest,
            targets,
            dry_run,
        } => {
            assert_eq!(resources, vec![std::path::PathBuf::from("Templates")]);
            assert!(!recursive);
            assert_eq!(root, std::path::PathBuf::from("."));
            assert_eq!(enum_name, "Texts");
            assert_eq!(policy, PolicyArg::Replace);
            assert_eq!(mode, ModeArg::Single);
            assert_eq!(output_directory, std::path::PathBuf::from("Generated"));
            assert!(manifest.is_none());
            assert!(targets.is_empty());
            assert!(!dry_run);
        }
        _ => panic!("expected generate command"),
    }
}

#[test]
fn test_generate_requires_resources() {
    let result = Cli::try_parse_from(["textsmith-gen", "generate", "-o", "Generated"]);
    assert!(result.is_err());
}

#[test]
fn test_generate_mode_and_policy_flags() {
    let cli = Cli::parse_from([
        "textsmith-gen",
        "generate",
        "a.txt",
        "-o",
        "out",
        "--mode",
        "multi",
        "--policy",
        "drop",
        "--target",
        "App",
        "--target",
        "AppTests",
        "--manifest",
        "project.json",
    ]);
    match cli.command {
        Commands::Generate {
            mode,
            policy,
            targets,
            manifest,
            ..
        } => {
            assert_eq!(mode, ModeArg::Multi);
            assert_eq!(policy, PolicyArg::Drop);
            assert_eq!(targets, vec!["App".to_string(), "AppTests".to_string()]);
            assert_eq!(manifest, Some(std::path::PathBuf::from("project.json")));
        }
        _ => panic!("expected generate command"),
    }
}

#[test]
fn test_check_parses() {
    let cli = Cli::parse_from(["textsmith-gen", "check", "docs", "-r", "-e", "Assets"]);
    match cli.command {
        Commands::Check {
            resources,
            recursive,
            enum_name,
            ..
        } => {
            assert_eq!(resources, vec![std::path::PathBuf::from("docs")]);
            assert!(recursive);
            assert_eq!(enum_name, "Assets");
        }
        _ => panic!("expected check command"),
    }
}
