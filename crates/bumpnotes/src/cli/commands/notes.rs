//! Dependency notes command

use std::path::Path;
use std::sync::Arc;

use clap::Args;
use console::style;
use tracing::{debug, info};

use bumpnotes_changelog::{LocalChangelogSource, NotesGenerator, NotesReport};
use bumpnotes_core::config::{load_config, load_config_or_default, Config, ManifestConfig};
use bumpnotes_core::{resolve_changes, BumpnotesError, ChangeRecord};
use bumpnotes_git::{GitRepo, TagFetcher};

use crate::cli::{output, Cli, OutputFormat};

/// List tickets from the changelogs of dependencies bumped between two releases
#[derive(Debug, Args)]
pub struct NotesCommand {
    /// Version of the current release
    #[arg(value_name = "CURRENT")]
    pub current: String,

    /// Version of the previous release
    #[arg(value_name = "PREVIOUS")]
    pub previous: String,

    /// Print the raw dependency changes before processing modules
    #[arg(long)]
    pub debug: bool,
}

impl NotesCommand {
    /// Execute the notes command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        self.run(cli, &cwd)
    }

    fn run(&self, cli: &Cli, cwd: &Path) -> anyhow::Result<()> {
        info!(current = %self.current, previous = %self.previous, debug = self.debug, "executing notes command");
        let config = self.load_config(cli, cwd)?;

        // Fails on an unchanged release pair before anything is printed
        let records = self.changes(cwd, &config)?;

        if self.debug {
            self.print_records(cli, &records)?;
        }

        let report = self.notes(cwd, &config, records)?;

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => self.print_report(cli, &config, &report),
        }

        Ok(())
    }

    /// Collect ticket notes for every changed module
    fn notes(
        &self,
        cwd: &Path,
        config: &Config,
        records: Vec<ChangeRecord>,
    ) -> anyhow::Result<NotesReport> {
        let source = Arc::new(LocalChangelogSource::new(cwd, &config.changelog));
        let generator =
            NotesGenerator::from_config(source, &config.tickets).map_err(BumpnotesError::from)?;

        let rt = tokio::runtime::Runtime::new()?;
        Ok(rt.block_on(generator.generate(&self.previous, &self.current, records))?)
    }

    /// Dependencies whose version changed between the two releases
    fn changes(&self, cwd: &Path, config: &Config) -> anyhow::Result<Vec<ChangeRecord>> {
        let repo = GitRepo::discover(cwd).map_err(BumpnotesError::from)?;
        let manifest = manifest_in_repo(&repo, cwd, &config.manifest);
        debug!(repo = %repo.path().display(), manifest = %manifest.file, "resolved manifest path");

        let fetcher = TagFetcher::new(repo, manifest.clone());
        Ok(resolve_changes(
            &fetcher,
            &manifest,
            &self.previous,
            &self.current,
        )?)
    }

    fn load_config(&self, cli: &Cli, cwd: &Path) -> anyhow::Result<Config> {
        let config = match &cli.config {
            Some(path) => load_config(path)?,
            None => load_config_or_default(cwd)?.0,
        };
        Ok(config)
    }

    fn print_records(&self, cli: &Cli, records: &[ChangeRecord]) -> anyhow::Result<()> {
        match cli.format {
            // Keep stdout a single JSON document
            OutputFormat::Json => eprintln!("{}", serde_json::to_string_pretty(records)?),
            OutputFormat::Text => {
                println!("{}", output::header("Dependency changes"));
                for record in records {
                    println!("  {}", record);
                }
                println!();
            }
        }
        Ok(())
    }

    fn print_report(&self, cli: &Cli, config: &Config, report: &NotesReport) {
        if !cli.quiet {
            println!("{}", output::header(&report_title(config, report)));
            println!();
        }

        for notes in &report.modules {
            if !cli.quiet {
                println!(
                    "{} {} {} {}",
                    output::header(&notes.module),
                    style(&notes.previous_version).dim(),
                    style("→").dim(),
                    output::version_style().apply_to(&notes.current_version)
                );
            }

            if notes.links.is_empty() {
                if !cli.quiet {
                    println!("  {}", style("no tickets found").dim());
                }
            } else {
                println!("{}", output::link_style().apply_to(notes.rendered_links()));
            }

            if !cli.quiet {
                println!();
            }
        }

        for failure in &report.failures {
            output::warning(&format!("{}: {}", failure.module, failure.reason));
        }

        if !cli.quiet {
            output::info(&format!(
                "{} links across {} modules ({} skipped)",
                report.link_count(),
                report.modules.len(),
                report.failures.len()
            ));
        }
    }
}

/// Heading for a notes run, naming the project when configured
fn report_title(config: &Config, report: &NotesReport) -> String {
    let project = config.name.as_deref().unwrap_or("Release");
    format!(
        "{} {} → {}",
        project, report.previous_release, report.current_release
    )
}

/// Manifest settings with the file path made relative to the repository root.
///
/// The manifest file is configured relative to the working directory, which
/// may be a sub-directory of the repository.
fn manifest_in_repo(repo: &GitRepo, cwd: &Path, manifest: &ManifestConfig) -> ManifestConfig {
    let file = match repo.relative_dir(cwd) {
        Some(prefix) => to_tree_path(&prefix.join(&manifest.file)),
        None => manifest.file.clone(),
    };

    ManifestConfig {
        file,
        ..manifest.clone()
    }
}

/// Render a path with `/` separators, as git trees expect
fn to_tree_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
