use crate::tokenizer::Dictionary;
use crate::Document;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const WORDS_DIR: &str = "Words";
pub const LINKS_DIR: &str = "Links";

#[derive(Debug, Clone)]
pub struct CorpusConfig {
    pub root: PathBuf,
    /// Category sub-directories, loaded in this order.
    pub categories: Vec<String>,
}

impl CorpusConfig {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf(), categories: default_categories() }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    fn words_dir(&self, category: &str) -> PathBuf {
        self.root.join(WORDS_DIR).join(category)
    }

    fn links_dir(&self, category: &str) -> PathBuf {
        self.root.join(LINKS_DIR).join(category)
    }
}

pub fn default_categories() -> Vec<String> {
    vec!["Games".to_string(), "Programming".to_string()]
}

/// Raw loader output: documents in corpus order plus the dictionary built while reading them.
#[derive(Debug, Default)]
pub struct Corpus {
    pub dictionary: Dictionary,
    pub documents: Vec<Document>,
}

/// Read every category's word files into documents and attach their link lists.
///
/// A category whose `Words` directory cannot be listed aborts the load; a single
/// unreadable word or link file is logged and skipped.
pub fn load_corpus(config: &CorpusConfig) -> Result<Corpus> {
    let mut corpus = Corpus::default();
    for category in &config.categories {
        let words_dir = config.words_dir(category);
        let mut pages = load_category(&words_dir, category, &mut corpus.dictionary)?;
        attach_links(&config.links_dir(category), &mut pages);
        tracing::info!(category = %category, documents = pages.len(), "loaded category");
        corpus.documents.append(&mut pages);
    }
    let uniform = 1.0 / corpus.documents.len().max(1) as f64;
    for doc in corpus.documents.iter_mut() {
        doc.authority = uniform;
    }
    tracing::info!(
        documents = corpus.documents.len(),
        tokens = corpus.dictionary.len(),
        "corpus loaded"
    );
    Ok(corpus)
}

fn load_category(
    dir: &Path,
    category: &str,
    dictionary: &mut Dictionary,
) -> Result<Vec<Document>> {
    if !dir.is_dir() {
        bail!("category directory {} does not exist", dir.display());
    }
    let mut pages = Vec::new();
    for file in list_files(dir)? {
        let Some(name) = file.file_name().and_then(|s| s.to_str()) else {
            tracing::warn!(path = %file.display(), "skipping file with non utf-8 name");
            continue;
        };
        let bytes = match fs::read(&file) {
            Ok(b) => b,
            Err(err) => {
                tracing::warn!(path = %file.display(), %err, "failed to read document, skipping");
                continue;
            }
        };
        let text = String::from_utf8_lossy(&bytes);
        let tokens = dictionary.intern_text(&text);
        pages.push(Document::new(name, category, tokens));
    }
    Ok(pages)
}

/// Regular files directly inside `dir`, sorted by name so token ids are reproducible.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn attach_links(dir: &Path, pages: &mut [Document]) {
    if !dir.is_dir() {
        tracing::warn!(path = %dir.display(), "no link directory, documents keep empty link lists");
        return;
    }
    for page in pages.iter_mut() {
        let path = dir.join(&page.source);
        match fs::read(&path) {
            Ok(bytes) => page.out_links = parse_links(&String::from_utf8_lossy(&bytes)),
            Err(err) => tracing::warn!(path = %path.display(), %err, "failed to read links file"),
        }
    }
}

/// One link per line; blank lines and surrounding whitespace (including `\r`) are dropped.
pub fn parse_links(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
