use super::setup::{Cli, Commands};
use crate::{logging, server};
use anyhow::{Context, Result};
use clap::Parser;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use notesapp::config::NotesConfig;

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            logging::init(&config)?;
            server::serve(config).await
        }
        Commands::Config => {
            print!("{}", render_config(&config)?);
            Ok(())
        }
    }
}

/// Directories searched for `notes.toml`, lowest priority first.
fn config_search_paths(cli: &Cli) -> Vec<SearchPath> {
    let mut paths = Vec::new();
    if let Some(dirs) = ProjectDirs::from("com", "notes", "notes") {
        paths.push(SearchPath::Path(dirs.config_dir().to_path_buf()));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(SearchPath::Path(cwd));
    }
    if let Some(dir) = &cli.config_dir {
        paths.push(SearchPath::Path(dir.clone()));
    }
    paths
}

/// Load config files and environment, then apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<NotesConfig> {
    let mut config: NotesConfig = Clapfig::builder()
        .app_name("notes")
        .file_name("notes.toml")
        .search_paths(config_search_paths(cli))
        .search_mode(SearchMode::Merge)
        .load()
        .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?;

    apply_overrides(&mut config, cli);
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn apply_overrides(config: &mut NotesConfig, cli: &Cli) {
    if let Some(host) = &cli.host {
        config.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(path) = &cli.data_file {
        config.data_file = Some(path.clone());
    }
}

fn render_config(config: &NotesConfig) -> Result<String> {
    toml::to_string_pretty(config).context("failed to render configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn overrides_replace_loaded_values() {
        let cli = Cli::try_parse_from([
            "notes",
            "--host",
            "127.0.0.1",
            "--port",
            "9001",
            "--data-file",
            "notes.json",
        ])
        .unwrap();
        let mut config = NotesConfig::default();
        apply_overrides(&mut config, &cli);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9001);
        assert_eq!(config.data_file, Some(PathBuf::from("notes.json")));
    }

    #[test]
    fn absent_flags_keep_loaded_values() {
        let cli = Cli::try_parse_from(["notes"]).unwrap();
        let mut config = NotesConfig {
            port: 7000,
            ..Default::default()
        };
        apply_overrides(&mut config, &cli);
        assert_eq!(config.port, 7000);
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn search_paths_end_with_explicit_dir() {
        let cli = Cli::try_parse_from(["notes", "--config-dir", "/etc/notes"]).unwrap();
        let paths = config_search_paths(&cli);
        assert!(matches!(
            paths.last(),
            Some(SearchPath::Path(p)) if p == &PathBuf::from("/etc/notes")
        ));
    }

    #[test]
    fn rendered_config_is_toml() {
        let rendered = render_config(&NotesConfig::default()).unwrap();
        assert!(rendered.contains("port = 8000"));
        assert!(rendered.contains("app_name = \"Notes API\""));
        assert!(!rendered.contains("data_file"));
    }
}
