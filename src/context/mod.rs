// src/context/mod.rs
//! Repository orchestration: package index, import extraction, graph,
//! ranking, and signatures in ranked order.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{Config, FailurePolicy};
use crate::discovery::{self, Discovered};
use crate::error::{Result, WingmanError};
use crate::graph::imports::{NodeImport, StrategyRegistry};
use crate::graph::package_index::{declared_package, PackagePathIndex};
use crate::graph::rank::{builder, GraphEngine};
use crate::lang::Lang;
use crate::llm::LlmClient;
use crate::prompt::{Prompt, PromptBuilder, PromptRequest};
use crate::signatures::{self, StructuralSignature};
use crate::source::SourceFile;

/// One scanned file in ranked position.
#[derive(Debug, Clone, Serialize)]
pub struct RankedFile {
    pub id: String,
    pub score: f64,
    pub signatures: Vec<StructuralSignature>,
}

/// A file left out under [`FailurePolicy::Skip`].
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub id: String,
    pub error: String,
}

/// Result of one run: files from most to least important.
#[derive(Debug, Clone, Serialize)]
pub struct ContextMap {
    pub root: PathBuf,
    pub entries: Vec<RankedFile>,
    pub failures: Vec<FileFailure>,
    pub node_count: usize,
    pub edge_count: usize,
}

impl ContextMap {
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RankedFile> {
        self.entries.iter().find(|e| e.id == id)
    }
}

/// Immutable engine: configuration plus the language strategy table.
pub struct ContextEngine {
    config: Config,
    strategies: StrategyRegistry,
}

impl ContextEngine {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_strategies(config, StrategyRegistry::new())
    }

    #[must_use]
    pub fn with_strategies(config: Config, strategies: StrategyRegistry) -> Self {
        Self { config, strategies }
    }

    /// Builds the ranked context map for the repository at `root`.
    ///
    /// # Errors
    /// Under [`FailurePolicy::Abort`] the first file, in walk order, that
    /// fails to read or extract ends the run before ranking. Signature
    /// failures surface after ranking. Walk failures always abort.
    pub fn run(&self, root: &Path) -> Result<ContextMap> {
        let root = fs::canonicalize(root).map_err(|e| WingmanError::read(root, e))?;
        let found = discovery::discover(&root, &self.config)?;
        info!(root = %root.display(), files = found.len(), "scanning repository");

        let mut log = FailureLog::new(self.config.scan.on_error);

        let reads: Vec<Result<SourceFile>> = found.iter().map(SourceFile::read).collect();
        let index = build_index(reads.iter().filter_map(|r| r.as_ref().ok()));
        info!(packages = index.package_count(), "package index built");

        let (sources, imports) = self.extract_all(&found, reads, &index, &mut log)?;
        let ids: Vec<String> = sources.iter().map(|s| s.id.clone()).collect();
        let flat: Vec<NodeImport> = imports.into_values().flatten().collect();

        let graph = builder::build(&ids, &flat, &index);
        info!(nodes = graph.len(), edges = graph.edge_count(), "dependency graph built");

        let ranked = GraphEngine::rank(&graph);
        let by_id: HashMap<&str, &SourceFile> =
            sources.iter().map(|s| (s.id.as_str(), s)).collect();

        let mut entries = Vec::with_capacity(sources.len());
        for (id, score) in ranked {
            let Some(source) = by_id.get(id.as_str()) else {
                debug!(node = %id, "unresolved package node, no signatures");
                continue;
            };
            if let Some(signatures) = log.absorb(&id, signatures::extract(source))? {
                entries.push(RankedFile {
                    id,
                    score,
                    signatures,
                });
            }
        }

        Ok(ContextMap {
            root,
            entries,
            failures: log.into_failures(),
            node_count: graph.len(),
            edge_count: graph.edge_count(),
        })
    }

    /// Runs the pipeline and assembles the prompt for `request`.
    ///
    /// # Errors
    /// Propagates [`ContextEngine::run`] errors.
    pub fn prompt(&self, request: &PromptRequest) -> Result<Prompt> {
        let map = self.run(&request.root)?;
        let builder = PromptBuilder::new(self.config.token_budget());
        Ok(builder.build(&map, &request.attachments, &request.query))
    }

    /// Extraction fans out across files; read and extraction results merge
    /// back per file in walk order.
    fn extract_all(
        &self,
        found: &[Discovered],
        reads: Vec<Result<SourceFile>>,
        index: &PackagePathIndex,
        log: &mut FailureLog,
    ) -> Result<(Vec<SourceFile>, BTreeMap<String, Vec<NodeImport>>)> {
        let extract = |read: &Result<SourceFile>| match read {
            Ok(source) => self.strategies.extract(source, index),
            Err(_) => Ok(Vec::new()),
        };
        let outcomes: Vec<Result<Vec<NodeImport>>> = if self.config.scan.parallel {
            reads.par_iter().map(extract).collect()
        } else {
            reads.iter().map(extract).collect()
        };

        let mut kept = Vec::with_capacity(reads.len());
        let mut imports = BTreeMap::new();

        for ((entry, read), outcome) in found.iter().zip(reads).zip(outcomes) {
            let Some(source) = log.absorb(&entry.id, read)? else {
                continue;
            };
            let Some(list) = log.absorb(&source.id, outcome)? else {
                continue;
            };
            debug!(file = %source.id, imports = list.len(), "extracted imports");
            imports.insert(source.id.clone(), list);
            kept.push(source);
        }

        Ok((kept, imports))
    }
}

/// Runs the pipeline, builds the prompt and hands it to `client`.
///
/// # Errors
/// Propagates pipeline errors and the client's failure.
pub fn ask(
    engine: &ContextEngine,
    client: &dyn LlmClient,
    request: &PromptRequest,
) -> Result<String> {
    let prompt = engine.prompt(request)?;
    for id in &prompt.omitted_files {
        debug!(file = %id, "left out of prompt by budget");
    }
    client.send(&prompt.text)
}

fn build_index<'a>(sources: impl Iterator<Item = &'a SourceFile>) -> PackagePathIndex {
    let mut index = PackagePathIndex::new();
    for source in sources.filter(|s| s.lang == Lang::Go) {
        match declared_package(&source.text()) {
            Some(package) => index.insert(package, source.id.clone()),
            None => debug!(file = %source.id, "no package clause"),
        }
    }
    index
}

struct FailureLog {
    policy: FailurePolicy,
    failures: Vec<FileFailure>,
}

impl FailureLog {
    fn new(policy: FailurePolicy) -> Self {
        Self {
            policy,
            failures: Vec::new(),
        }
    }

    /// `Ok(None)` means the file was recorded and should be dropped.
    fn absorb<T>(&mut self, id: &str, result: Result<T>) -> Result<Option<T>> {
        match (result, self.policy) {
            (Ok(value), _) => Ok(Some(value)),
            (Err(e), FailurePolicy::Abort) => Err(e),
            (Err(e), FailurePolicy::Skip) => {
                warn!(file = %id, error = %e, "skipping file");
                self.failures.push(FileFailure {
                    id: id.to_string(),
                    error: e.to_string(),
                });
                Ok(None)
            }
        }
    }

    fn into_failures(self) -> Vec<FileFailure> {
        self.failures
    }
}
