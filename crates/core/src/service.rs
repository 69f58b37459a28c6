use crate::aggregate::{aggregate, summarize};
use crate::ingest::{classify_file, discover_files, read_chunks, FileKind};
use crate::models::{CollectionSummary, ContentKind, IngestionOptions, SchemaMode, VirtualDocument};
use crate::pattern::{matches_all, MetadataFilter, Pattern};
use crate::schema::classify_schema_mode;
use crate::traits::DocumentStore;
use crate::{Chunk, IngestError, StoreError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DEFAULT_SELECTION_LIMIT: usize = 1_000;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DeletionReport {
    pub collection: String,
    pub matched_documents: Vec<String>,
    pub chunk_ids: Vec<String>,
    pub deleted: usize,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CollectionDeletionReport {
    pub matched: Vec<String>,
    pub deleted: Vec<String>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct IngestReport {
    pub collection: String,
    pub files: Vec<PathBuf>,
    pub created: usize,
    pub failed: usize,
    pub skipped: Vec<SkippedFile>,
}

impl IngestReport {
    fn merge(&mut self, other: IngestReport) {
        self.files.extend(other.files);
        self.created += other.created;
        self.failed += other.failed;
        self.skipped.extend(other.skipped);
    }
}

pub struct DocumentService<S> {
    store: S,
}

impl<S> DocumentService<S>
where
    S: DocumentStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn collections(&self) -> Result<Vec<String>, StoreError> {
        self.store.list_collections().await
    }

    pub async fn chunks(&self, collection: &str, limit: usize) -> Result<Vec<Chunk>, StoreError> {
        self.store.list_documents(collection, limit).await
    }

    pub async fn document(&self, collection: &str, id: &str) -> Result<Chunk, StoreError> {
        self.store.get_document(collection, id).await
    }

    pub async fn virtual_documents(
        &self,
        collection: &str,
        limit: usize,
    ) -> Result<Vec<VirtualDocument>, StoreError> {
        let chunks = self.store.list_documents(collection, limit).await?;
        debug!(collection, fetched = chunks.len(), "fetched chunks");
        Ok(aggregate(chunks))
    }

    pub async fn count(&self, collection: &str, limit: usize) -> Result<usize, StoreError> {
        Ok(self.store.list_documents(collection, limit).await?.len())
    }

    pub async fn summarize(
        &self,
        collection: &str,
        limit: usize,
    ) -> Result<CollectionSummary, StoreError> {
        let documents = self.virtual_documents(collection, limit).await?;
        Ok(summarize(collection, &documents))
    }

    pub async fn select_by_pattern(
        &self,
        collection: &str,
        pattern: &Pattern,
        limit: usize,
    ) -> Result<Vec<VirtualDocument>, StoreError> {
        let documents = self.virtual_documents(collection, limit).await?;
        let selected: Vec<VirtualDocument> = documents
            .into_iter()
            .filter(|document| pattern.is_match(&document.original_filename))
            .collect();
        debug!(
            collection,
            pattern = pattern.as_str(),
            kind = %pattern.kind(),
            matched = selected.len(),
            "selected virtual documents"
        );
        Ok(selected)
    }

    pub async fn delete_by_pattern(
        &self,
        collection: &str,
        pattern: &Pattern,
        limit: usize,
        dry_run: bool,
    ) -> Result<DeletionReport, StoreError> {
        let selected = self.select_by_pattern(collection, pattern, limit).await?;
        let mut report = DeletionReport {
            collection: collection.to_string(),
            matched_documents: selected
                .iter()
                .map(|document| document.original_filename.clone())
                .collect(),
            chunk_ids: selected.iter().flat_map(VirtualDocument::chunk_ids).collect(),
            deleted: 0,
            dry_run,
        };

        if report.chunk_ids.is_empty() || dry_run {
            return Ok(report);
        }

        report.deleted = self
            .store
            .delete_documents_bulk(collection, &report.chunk_ids)
            .await?;
        info!(
            collection,
            documents = report.matched_documents.len(),
            chunks = report.deleted,
            "deleted virtual documents"
        );
        Ok(report)
    }

    pub async fn delete_by_name(
        &self,
        collection: &str,
        name: &str,
        limit: usize,
        dry_run: bool,
    ) -> Result<DeletionReport, StoreError> {
        self.delete_by_pattern(collection, &Pattern::exact(name), limit, dry_run)
            .await
    }

    pub async fn delete_by_ids(
        &self,
        collection: &str,
        ids: &[String],
        dry_run: bool,
    ) -> Result<DeletionReport, StoreError> {
        let mut report = DeletionReport {
            collection: collection.to_string(),
            chunk_ids: ids.to_vec(),
            dry_run,
            ..DeletionReport::default()
        };
        if ids.is_empty() || dry_run {
            return Ok(report);
        }

        report.deleted = match ids {
            [id] => {
                self.store.delete_document(collection, id).await?;
                1
            }
            _ => self.store.delete_documents_bulk(collection, ids).await?,
        };
        info!(collection, requested = ids.len(), deleted = report.deleted, "deleted chunks");
        Ok(report)
    }

    pub async fn select_by_metadata(
        &self,
        collection: &str,
        filters: &[MetadataFilter],
        limit: usize,
    ) -> Result<Vec<Chunk>, StoreError> {
        let chunks = self.store.list_documents(collection, limit).await?;
        let selected: Vec<Chunk> = chunks
            .into_iter()
            .filter(|chunk| matches_all(filters, chunk))
            .collect();
        debug!(
            collection,
            filters = filters.len(),
            matched = selected.len(),
            "selected chunks by metadata"
        );
        Ok(selected)
    }

    pub async fn delete_by_metadata(
        &self,
        collection: &str,
        filters: &[MetadataFilter],
        limit: usize,
        dry_run: bool,
    ) -> Result<DeletionReport, StoreError> {
        let selected = self.select_by_metadata(collection, filters, limit).await?;
        let ids: Vec<String> = selected.into_iter().map(|chunk| chunk.id).collect();
        self.delete_by_ids(collection, &ids, dry_run).await
    }

    pub async fn delete_all(
        &self,
        collection: &str,
        dry_run: bool,
    ) -> Result<DeletionReport, StoreError> {
        let ids: Vec<String> = self
            .store
            .list_documents(collection, 0)
            .await?
            .into_iter()
            .map(|chunk| chunk.id)
            .collect();
        if ids.is_empty() || dry_run {
            return self.delete_by_ids(collection, &ids, dry_run).await;
        }

        let report = DeletionReport {
            collection: collection.to_string(),
            deleted: self.store.delete_documents_bulk(collection, &ids).await?,
            chunk_ids: ids,
            dry_run,
            ..DeletionReport::default()
        };
        info!(collection, deleted = report.deleted, "deleted every chunk");
        Ok(report)
    }

    pub async fn count_collections(&self) -> Result<usize, StoreError> {
        Ok(self.store.list_collections().await?.len())
    }

    pub async fn collection_schema(&self, collection: &str) -> Result<Vec<String>, StoreError> {
        self.store.collection_schema(collection).await
    }

    pub async fn select_collections(&self, pattern: &Pattern) -> Result<Vec<String>, StoreError> {
        let names = self.store.list_collections().await?;
        Ok(pattern
            .filter(names.iter().map(String::as_str))
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    // Stops at the first collection the store refuses to delete.
    pub async fn delete_collections_by_pattern(
        &self,
        pattern: &Pattern,
        dry_run: bool,
    ) -> Result<CollectionDeletionReport, StoreError> {
        let matched = self.select_collections(pattern).await?;
        let mut report = CollectionDeletionReport {
            matched,
            deleted: Vec::new(),
            dry_run,
        };
        if dry_run {
            return Ok(report);
        }

        for name in &report.matched {
            self.store.delete_collection(name).await?;
            info!(collection = %name, "deleted collection");
            report.deleted.push(name.clone());
        }
        Ok(report)
    }

    pub async fn detect_schema_mode(&self, collection: &str, kind: ContentKind) -> SchemaMode {
        let fetched = self.store.collection_schema(collection).await;
        classify_schema_mode(collection, kind, || fetched)
    }

    pub async fn ingest_file(
        &self,
        collection: &str,
        path: &Path,
        options: &IngestionOptions,
    ) -> Result<IngestReport, IngestError> {
        let kind = classify_file(path)?;
        let content_kind = match kind {
            FileKind::Text => ContentKind::Text,
            FileKind::Image => ContentKind::Image,
        };
        let mode = self.detect_schema_mode(collection, content_kind).await;
        let chunks = read_chunks(path, kind, options, mode)?;

        let mut report = IngestReport {
            collection: collection.to_string(),
            files: vec![path.to_path_buf()],
            ..IngestReport::default()
        };
        for (index, chunk) in chunks.iter().enumerate() {
            match self.store.create_document(collection, chunk).await {
                Ok(()) => report.created += 1,
                Err(error) => {
                    warn!(collection, path = %path.display(), index, %error, "failed to create chunk");
                    report.failed += 1;
                }
            }
        }

        info!(
            collection,
            path = %path.display(),
            created = report.created,
            failed = report.failed,
            "ingested file"
        );
        Ok(report)
    }

    pub async fn ingest_folder(
        &self,
        collection: &str,
        folder: &Path,
        options: &IngestionOptions,
    ) -> Result<IngestReport, IngestError> {
        let files = discover_files(folder);
        if files.is_empty() {
            return Err(IngestError::EmptyFolder(folder.display().to_string()));
        }

        let mut report = IngestReport {
            collection: collection.to_string(),
            ..IngestReport::default()
        };
        for path in files {
            match self.ingest_file(collection, &path, options).await {
                Ok(file_report) => report.merge(file_report),
                Err(IngestError::Store(error)) => return Err(error.into()),
                Err(error) => {
                    warn!(path = %path.display(), %error, "skipping file");
                    report.skipped.push(SkippedFile {
                        path,
                        reason: error.to_string(),
                    });
                }
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MetadataMode, SchemaGeneration};
    use crate::stores::InMemoryStore;
    use async_trait::async_trait;
    use std::fs;
    use tempfile::tempdir;

    // InMemoryStore that can be told to refuse writes.
    #[derive(Default)]
    struct FlakyStore {
        inner: InMemoryStore,
        fail_creates: bool,
        fail_bulk_delete: bool,
        fail_collection: Option<String>,
    }

    fn refused(what: &str) -> StoreError {
        StoreError::BackendResponse {
            backend: "flaky".to_string(),
            details: format!("{what} refused"),
        }
    }

    #[async_trait]
    impl DocumentStore for FlakyStore {
        async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
            self.inner.list_collections().await
        }

        async fn list_documents(
            &self,
            collection: &str,
            limit: usize,
        ) -> Result<Vec<Chunk>, StoreError> {
            self.inner.list_documents(collection, limit).await
        }

        async fn get_document(&self, collection: &str, id: &str) -> Result<Chunk, StoreError> {
            self.inner.get_document(collection, id).await
        }

        async fn create_document(&self, collection: &str, chunk: &Chunk) -> Result<(), StoreError> {
            if self.fail_creates {
                return Err(refused("create"));
            }
            self.inner.create_document(collection, chunk).await
        }

        async fn delete_document(&self, collection: &str, id: &str) -> Result<(), StoreError> {
            self.inner.delete_document(collection, id).await
        }

        async fn delete_documents_bulk(
            &self,
            collection: &str,
            ids: &[String],
        ) -> Result<usize, StoreError> {
            if self.fail_bulk_delete {
                return Err(refused("bulk delete"));
            }
            self.inner.delete_documents_bulk(collection, ids).await
        }

        async fn collection_schema(&self, _collection: &str) -> Result<Vec<String>, StoreError> {
            Err(refused("schema"))
        }

        async fn delete_collection(&self, collection: &str) -> Result<(), StoreError> {
            if self.fail_collection.as_deref() == Some(collection) {
                return Err(refused("delete collection"));
            }
            self.inner.delete_collection(collection).await
        }
    }

    fn sample_service() -> DocumentService<InMemoryStore> {
        DocumentService::new(InMemoryStore::with_sample_data())
    }

    #[tokio::test]
    async fn sample_documents_regroup_by_original_file() -> Result<(), StoreError> {
        let service = sample_service();
        let documents = service.virtual_documents("WeaveDocs", 0).await?;

        let names: Vec<_> = documents
            .iter()
            .map(|document| document.original_filename.as_str())
            .collect();
        assert_eq!(names.len(), 3);
        assert_eq!(&names[..2], &["data_science.pdf", "ml_guide.pdf"]);
        assert!(names[2].starts_with("standalone-doc2-sin-"));
        assert_eq!(documents[1].total_chunks, 3);
        assert_eq!(documents[2].total_chunks, 1);
        Ok(())
    }

    #[tokio::test]
    async fn image_collection_summary_counts_stacks() -> Result<(), StoreError> {
        let service = sample_service();
        let summary = service.summarize("WeaveImages", 0).await?;

        assert_eq!(summary.virtual_documents, 2);
        assert_eq!(summary.image_stacks, 2);
        assert_eq!(summary.images, 3);
        assert_eq!(summary.text_documents, 0);
        assert_eq!(service.count("WeaveImages", 0).await?, 3);
        Ok(())
    }

    #[tokio::test]
    async fn delete_by_pattern_removes_every_chunk_of_matched_documents() -> Result<(), Box<dyn std::error::Error>> {
        let service = sample_service();
        let pattern = Pattern::new("ml_*")?;
        let report = service
            .delete_by_pattern("WeaveDocs", &pattern, DEFAULT_SELECTION_LIMIT, false)
            .await?;

        assert_eq!(report.matched_documents, vec!["ml_guide.pdf".to_string()]);
        assert_eq!(report.deleted, 3);
        assert_eq!(service.count("WeaveDocs", 0).await?, 3);
        Ok(())
    }

    #[tokio::test]
    async fn regex_selection_spans_several_documents() -> Result<(), Box<dyn std::error::Error>> {
        let service = sample_service();
        let pattern = Pattern::new(r"\.pdf$")?;
        let selected = service
            .select_by_pattern("WeaveDocs", &pattern, DEFAULT_SELECTION_LIMIT)
            .await?;
        assert_eq!(selected.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn dry_run_reports_without_deleting() -> Result<(), Box<dyn std::error::Error>> {
        let service = sample_service();
        let pattern = Pattern::new("*.pdf")?;
        let report = service
            .delete_by_pattern("WeaveDocs", &pattern, DEFAULT_SELECTION_LIMIT, true)
            .await?;

        assert_eq!(report.chunk_ids.len(), 5);
        assert_eq!(report.deleted, 0);
        assert_eq!(service.count("WeaveDocs", 0).await?, 6);
        Ok(())
    }

    #[tokio::test]
    async fn no_match_never_reaches_bulk_delete() -> Result<(), Box<dyn std::error::Error>> {
        let service = DocumentService::new(FlakyStore {
            inner: InMemoryStore::with_sample_data(),
            fail_bulk_delete: true,
            ..FlakyStore::default()
        });
        let pattern = Pattern::new("nothing*")?;
        let report = service
            .delete_by_pattern("WeaveDocs", &pattern, DEFAULT_SELECTION_LIMIT, false)
            .await?;
        assert!(report.matched_documents.is_empty());
        assert_eq!(report.deleted, 0);
        Ok(())
    }

    #[tokio::test]
    async fn delete_by_name_requires_exact_filename() -> Result<(), StoreError> {
        let service = sample_service();
        let partial = service
            .delete_by_name("WeaveDocs", "ml_guide", DEFAULT_SELECTION_LIMIT, false)
            .await?;
        assert_eq!(partial.deleted, 0);

        let exact = service
            .delete_by_name("WeaveDocs", "ml_guide.pdf", DEFAULT_SELECTION_LIMIT, false)
            .await?;
        assert_eq!(exact.deleted, 3);
        Ok(())
    }

    #[tokio::test]
    async fn delete_by_ids_goes_straight_to_the_store() -> Result<(), StoreError> {
        let service = sample_service();
        let ids = vec!["img1-page1".to_string(), "img2-single".to_string()];
        let report = service.delete_by_ids("WeaveImages", &ids, false).await?;
        assert_eq!(report.deleted, 2);
        assert_eq!(service.count("WeaveImages", 0).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn collection_pattern_deletes_every_match() -> Result<(), Box<dyn std::error::Error>> {
        let service = sample_service();
        let pattern = Pattern::new("Weave*")?;

        let preview = service.delete_collections_by_pattern(&pattern, true).await?;
        assert_eq!(preview.matched.len(), 2);
        assert!(preview.deleted.is_empty());

        let report = service.delete_collections_by_pattern(&pattern, false).await?;
        assert_eq!(report.deleted, vec!["WeaveDocs".to_string(), "WeaveImages".to_string()]);
        assert!(service.collections().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn collection_deletion_stops_at_first_failure() -> Result<(), Box<dyn std::error::Error>> {
        let service = DocumentService::new(FlakyStore {
            inner: InMemoryStore::with_sample_data(),
            fail_collection: Some("WeaveDocs".to_string()),
            ..FlakyStore::default()
        });
        let pattern = Pattern::new("Weave*")?;

        let result = service.delete_collections_by_pattern(&pattern, false).await;
        assert!(result.is_err());
        assert_eq!(service.collections().await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn schema_mode_follows_live_properties() {
        let service = sample_service();
        let docs = service.detect_schema_mode("WeaveDocs", ContentKind::Text).await;
        assert_eq!(docs.metadata_mode, MetadataMode::Json);
        assert_eq!(docs.generation, SchemaGeneration::Modern);

        let missing = service.detect_schema_mode("ragme_docs", ContentKind::Text).await;
        assert_eq!(missing.metadata_mode, MetadataMode::Flat);
        assert_eq!(missing.generation, SchemaGeneration::Legacy);
    }

    #[tokio::test]
    async fn ingested_file_reads_back_as_one_virtual_document() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("notes.txt");
        fs::write(&path, "first line\nsecond line\nthird line\n")?;

        let store = InMemoryStore::new();
        store.create_collection("Notes", &["content", "url", "chunk_index", "total_chunks"])?;
        let service = DocumentService::new(store);

        let options = IngestionOptions { chunk_size: 12 };
        let report = service.ingest_file("Notes", &path, &options).await?;
        assert_eq!(report.created, 3);
        assert_eq!(report.failed, 0);

        let documents = service.virtual_documents("Notes", 0).await?;
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].original_filename, "notes.txt");
        assert_eq!(documents[0].total_chunks, 3);
        assert!(documents[0].chunks[0].metadata.contains_key("chunk_index"));
        Ok(())
    }

    #[tokio::test]
    async fn chunk_write_failures_are_counted_not_fatal() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("a.txt");
        fs::write(&path, "one\ntwo")?;

        let service = DocumentService::new(FlakyStore {
            fail_creates: true,
            ..FlakyStore::default()
        });
        let options = IngestionOptions { chunk_size: 4 };
        let report = service.ingest_file("Anything", &path, &options).await?;
        assert_eq!(report.created, 0);
        assert_eq!(report.failed, 2);
        Ok(())
    }

    #[tokio::test]
    async fn folder_ingest_skips_unsupported_files() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.txt"), "alpha")?;
        fs::write(dir.path().join("b.pdf"), "%PDF-1.4")?;
        fs::write(dir.path().join("c.png"), [0x89u8, b'P', b'N', b'G'])?;

        let store = InMemoryStore::new();
        store.create_collection("Mixed", &["content", "url", "metadata"])?;
        let service = DocumentService::new(store);

        let report = service
            .ingest_folder("Mixed", dir.path(), &IngestionOptions::default())
            .await?;
        assert_eq!(report.created, 2);
        assert_eq!(report.skipped.len(), 1);
        assert!(report.skipped[0].path.ends_with("b.pdf"));

        let summary = service.summarize("Mixed", 0).await?;
        assert_eq!(summary.text_documents, 1);
        assert_eq!(summary.image_stacks, 1);
        Ok(())
    }

    #[tokio::test]
    async fn empty_folder_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let service = sample_service();
        let result = service
            .ingest_folder("WeaveDocs", dir.path(), &IngestionOptions::default())
            .await;
        assert!(matches!(result, Err(IngestError::EmptyFolder(_))));
        Ok(())
    }

    #[tokio::test]
    async fn single_id_delete_uses_the_per_document_call() -> Result<(), StoreError> {
        let service = DocumentService::new(FlakyStore {
            inner: InMemoryStore::with_sample_data(),
            fail_bulk_delete: true,
            ..FlakyStore::default()
        });
        let report = service
            .delete_by_ids("WeaveDocs", &["doc2-single".to_string()], false)
            .await?;
        assert_eq!(report.deleted, 1);
        assert_eq!(service.count("WeaveDocs", 0).await?, 5);

        let missing = service
            .delete_by_ids("WeaveDocs", &["doc2-single".to_string()], false)
            .await;
        assert!(matches!(missing, Err(StoreError::DocumentNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn metadata_filters_select_and_delete_matching_chunks(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let service = sample_service();
        let filters: Vec<MetadataFilter> = vec!["original_filename=data_science.pdf".parse()?];

        let selected = service.select_by_metadata("WeaveDocs", &filters, 0).await?;
        assert_eq!(selected.len(), 2);

        let preview = service.delete_by_metadata("WeaveDocs", &filters, 0, true).await?;
        assert_eq!(preview.chunk_ids.len(), 2);
        assert_eq!(service.count("WeaveDocs", 0).await?, 6);

        let report = service.delete_by_metadata("WeaveDocs", &filters, 0, false).await?;
        assert_eq!(report.deleted, 2);
        assert_eq!(service.count("WeaveDocs", 0).await?, 4);
        Ok(())
    }

    #[tokio::test]
    async fn metadata_filters_without_match_delete_nothing(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let service = sample_service();
        let filters: Vec<MetadataFilter> =
            vec!["author=Test Author".parse()?, "year=1999".parse()?];
        let report = service.delete_by_metadata("WeaveDocs", &filters, 0, false).await?;
        assert_eq!(report.deleted, 0);
        assert!(service.delete_by_metadata("WeaveDocs", &[], 0, false).await?.chunk_ids.is_empty());
        assert_eq!(service.count("WeaveDocs", 0).await?, 6);
        Ok(())
    }

    #[tokio::test]
    async fn delete_all_empties_the_collection() -> Result<(), StoreError> {
        let service = sample_service();
        let preview = service.delete_all("WeaveImages", true).await?;
        assert_eq!(preview.chunk_ids.len(), 3);
        assert_eq!(service.count("WeaveImages", 0).await?, 3);

        let report = service.delete_all("WeaveImages", false).await?;
        assert_eq!(report.deleted, 3);
        assert_eq!(service.count("WeaveImages", 0).await?, 0);
        assert_eq!(service.count_collections().await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn collection_schema_lists_declared_properties() -> Result<(), StoreError> {
        let service = sample_service();
        assert_eq!(
            service.collection_schema("WeaveDocs").await?,
            vec!["content".to_string(), "url".to_string(), "metadata".to_string()]
        );
        assert!(service.collection_schema("Missing").await.is_err());
        Ok(())
    }
}
