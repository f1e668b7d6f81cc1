//! Release note generation across bumped modules

use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};

use bumpnotes_core::config::TicketsConfig;
use bumpnotes_core::error::{ChangelogError, Result, SourceError};
use bumpnotes_core::source::ChangelogSource;
use bumpnotes_core::ChangeRecord;

use crate::formatter::TicketLinker;
use crate::parser::{extract_range, TicketExtractor};
use crate::types::{ModuleFailure, ModuleNotes, NotesReport};

/// Builds ticket notes for every bumped module
pub struct NotesGenerator {
    source: Arc<dyn ChangelogSource>,
    extractor: Arc<TicketExtractor>,
    linker: Arc<TicketLinker>,
}

impl NotesGenerator {
    /// Create a generator with the default ticket pattern
    pub fn new(source: Arc<dyn ChangelogSource>, linker: TicketLinker) -> Self {
        Self {
            source,
            extractor: Arc::new(TicketExtractor::new()),
            linker: Arc::new(linker),
        }
    }

    /// Create a generator from ticket configuration
    pub fn from_config(
        source: Arc<dyn ChangelogSource>,
        config: &TicketsConfig,
    ) -> std::result::Result<Self, ChangelogError> {
        let extractor = TicketExtractor::with_pattern(&config.pattern)?;
        Ok(Self::new(source, TicketLinker::new(&config.base_url)).with_extractor(extractor))
    }

    /// Use a custom ticket extractor
    pub fn with_extractor(mut self, extractor: TicketExtractor) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    /// Generate notes for each change record between two releases.
    ///
    /// Every module is processed in its own task; results are collected in
    /// the order the tasks finish. A module whose changelog cannot be read
    /// is recorded as a failure without affecting the others. An empty
    /// record list is an error.
    #[instrument(skip(self, records), fields(modules = records.len()))]
    pub async fn generate(
        &self,
        previous: &str,
        current: &str,
        records: Vec<ChangeRecord>,
    ) -> Result<NotesReport> {
        if records.is_empty() {
            return Err(SourceError::no_changes(previous, current).into());
        }

        info!(
            modules = records.len(),
            base_url = self.linker.base_url(),
            "generating module notes"
        );

        let mut tasks = JoinSet::new();
        let mut modules = HashMap::new();
        for record in records {
            let source = Arc::clone(&self.source);
            let extractor = Arc::clone(&self.extractor);
            let linker = Arc::clone(&self.linker);
            let module = record.module_name.clone();

            let handle = tasks.spawn(async move {
                module_notes(&*source, &extractor, &linker, &record).await
            });
            modules.insert(handle.id(), module);
        }

        let mut report = NotesReport::new(previous, current);
        while let Some(joined) = tasks.join_next_with_id().await {
            match joined {
                Ok((_, Ok(notes))) => {
                    info!(module = %notes.module, tickets = notes.tickets.len(), "module notes ready");
                    report.modules.push(notes);
                }
                Ok((id, Err(e))) => {
                    let module = modules.remove(&id).unwrap_or_default();
                    warn!(module = %module, error = %e, "skipping module");
                    report.failures.push(ModuleFailure {
                        module,
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    let module = modules.remove(&e.id()).unwrap_or_default();
                    warn!(module = %module, error = %e, "module task failed");
                    report.failures.push(ModuleFailure {
                        module,
                        reason: format!("task failed: {}", e),
                    });
                }
            }
        }

        debug!(
            succeeded = report.modules.len(),
            failed = report.failures.len(),
            "module notes complete"
        );
        Ok(report)
    }
}

/// Read, slice, scan and link one module's changelog
async fn module_notes(
    source: &dyn ChangelogSource,
    extractor: &TicketExtractor,
    linker: &TicketLinker,
    record: &ChangeRecord,
) -> std::result::Result<ModuleNotes, ChangelogError> {
    info!(module = %record.module_name, "generating changelog");
    let changelog = source.read_changelog(&record.module_name).await?;

    info!(
        module = %record.module_name,
        from = %record.prev_version,
        to = %record.current_version,
        "extracting version range"
    );
    let range = extract_range(&changelog, &record.prev_version, &record.current_version);

    info!(module = %record.module_name, "grabbing tickets");
    let tickets = extractor.extract(&range);
    let links = linker.links(&tickets);

    Ok(ModuleNotes::new(record, tickets, links))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bumpnotes_core::BumpnotesError;
    use std::path::PathBuf;
    use std::time::Duration;

    struct MemorySource {
        changelogs: HashMap<String, String>,
        delays: HashMap<String, u64>,
    }

    impl MemorySource {
        fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                changelogs: entries
                    .iter()
                    .map(|(m, c)| (m.to_string(), c.to_string()))
                    .collect(),
                delays: HashMap::new(),
            }
        }

        fn with_delay(mut self, module: &str, millis: u64) -> Self {
            self.delays.insert(module.to_string(), millis);
            self
        }
    }

    #[async_trait]
    impl ChangelogSource for MemorySource {
        async fn read_changelog(
            &self,
            module: &str,
        ) -> std::result::Result<String, ChangelogError> {
            if let Some(millis) = self.delays.get(module) {
                tokio::time::sleep(Duration::from_millis(*millis)).await;
            }
            if module == "explodes" {
                panic!("boom");
            }
            self.changelogs
                .get(module)
                .cloned()
                .ok_or_else(|| ChangelogError::Unavailable {
                    module: module.to_string(),
                    path: PathBuf::from(format!("node_modules/{}/changelog.md", module)),
                    reason: "No such file or directory".to_string(),
                })
        }
    }

    fn generator(source: MemorySource) -> NotesGenerator {
        NotesGenerator::new(Arc::new(source), TicketLinker::new("http://jira/browse/"))
    }

    #[tokio::test]
    async fn test_generate_single_module() {
        let source = MemorySource::new(&[(
            "module_a",
            "# 1.0.4\n- NEWS-3 thing\n# 1.0.3\n- NEWS-2 other\n# 1.0.2\n- NEWS-1 old\n",
        )]);

        let report = generator(source)
            .generate("1.0.0", "1.1.0", vec![ChangeRecord::new("module_a", "1.0.2", "1.0.4")])
            .await
            .unwrap();

        let notes = report.module("module_a").unwrap();
        assert_eq!(notes.tickets, vec!["NEWS-3", "NEWS-2", "NEWS-1"]);
        assert_eq!(notes.links[0], "http://jira/browse/NEWS-3");
        assert_eq!(notes.previous_version, "1.0.2");
        assert_eq!(notes.current_version, "1.0.4");
        assert!(report.failures.is_empty());
        assert_eq!(report.previous_release, "1.0.0");
        assert_eq!(report.current_release, "1.1.0");
    }

    #[tokio::test]
    async fn test_range_excludes_older_versions() {
        let source = MemorySource::new(&[(
            "a",
            "# 2.0.0\nFOO-1\n# 1.0.0\nFOO-2\n# 0.9.0\nFOO-3",
        )]);

        let report = generator(source)
            .generate("1.0.0", "1.1.0", vec![ChangeRecord::new("a", "1.0.0", "2.0.0")])
            .await
            .unwrap();

        assert_eq!(report.module("a").unwrap().tickets, vec!["FOO-1", "FOO-2"]);
    }

    #[tokio::test]
    async fn test_empty_records_are_fatal() {
        let result = generator(MemorySource::new(&[]))
            .generate("1.0.0", "1.1.0", Vec::new())
            .await;
        match result {
            Err(BumpnotesError::Source(SourceError::NoChanges { previous, current })) => {
                assert_eq!(previous, "1.0.0");
                assert_eq!(current, "1.1.0");
            }
            other => panic!("expected no changes, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_changelog_does_not_stop_others() {
        let source = MemorySource::new(&[("present", "# 1.1.0\nA-1\n# 1.0.0\nA-0\n")]);

        let report = generator(source)
            .generate("1.0.0", "1.1.0", vec![
                ChangeRecord::new("missing", "1.0.0", "2.0.0"),
                ChangeRecord::new("present", "1.0.0", "1.1.0"),
            ])
            .await
            .unwrap();

        assert_eq!(report.modules.len(), 1);
        assert_eq!(report.module("present").unwrap().tickets, vec!["A-1", "A-0"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].module, "missing");
        assert!(report.failures[0].reason.contains("No such file"));
    }

    #[tokio::test]
    async fn test_panicking_module_is_isolated() {
        let source = MemorySource::new(&[("fine", "# 1.0.1\nOK-1\n# 1.0.0\n")]);

        let report = generator(source)
            .generate("1.0.0", "1.1.0", vec![
                ChangeRecord::new("explodes", "1.0.0", "1.0.1"),
                ChangeRecord::new("fine", "1.0.0", "1.0.1"),
            ])
            .await
            .unwrap();

        assert_eq!(report.modules.len(), 1);
        assert_eq!(report.module("fine").unwrap().tickets, vec!["OK-1"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].module, "explodes");
        assert!(report.failures[0].reason.contains("panic"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_results_follow_completion_order() {
        let source = MemorySource::new(&[
            ("slow", "# 1.0.1\nS-1\n# 1.0.0\n"),
            ("fast", "# 1.0.1\nF-1\n# 1.0.0\n"),
        ])
        .with_delay("slow", 500)
        .with_delay("fast", 10);

        let report = generator(source)
            .generate("1.0.0", "1.1.0", vec![
                ChangeRecord::new("slow", "1.0.0", "1.0.1"),
                ChangeRecord::new("fast", "1.0.0", "1.0.1"),
            ])
            .await
            .unwrap();

        let order: Vec<_> = report.modules.iter().map(|m| m.module.as_str()).collect();
        assert_eq!(order, vec!["fast", "slow"]);
    }

    #[tokio::test]
    async fn test_from_config_uses_pattern_and_base_url() {
        let source = MemorySource::new(&[("a", "# 1.0.1\nfixes #42\n# 1.0.0\n")]);
        let config = TicketsConfig {
            base_url: "https://github.com/org/a/issues/".to_string(),
            pattern: "#[0-9]+".to_string(),
        };

        let report = NotesGenerator::from_config(Arc::new(source), &config)
            .unwrap()
            .generate("1.0.0", "1.1.0", vec![ChangeRecord::new("a", "1.0.0", "1.0.1")])
            .await
            .unwrap();

        assert_eq!(
            report.module("a").unwrap().links,
            vec!["https://github.com/org/a/issues/#42"]
        );
    }
}
