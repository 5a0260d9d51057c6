//! Document and process access service.
//!
//! Documents and processes are owned by the remote store: the local layer
//! performs no caching of these kinds. Every read re-fetches; remote
//! unavailability yields an empty result set, and mutations degrade to
//! logged no-ops, so the UI stays resilient without special-casing the
//! backend state.

use std::sync::Arc;
use tramita_core::document::Document;
use tramita_core::process::{Process, ProcessStatus, ProcessSummary};
use tramita_core::remote::RemoteStore;
use tramita_core::sector::Sector;

/// Remote-backed document and process operations.
///
/// Constructed once at process start with the injected remote store.
pub struct DataService {
    remote: Arc<dyn RemoteStore>,
}

impl DataService {
    /// Creates a new DataService.
    pub fn new(remote: Arc<dyn RemoteStore>) -> Self {
        Self { remote }
    }

    /// All documents, newest first. Empty when the backend is
    /// unconfigured or unreachable.
    pub async fn documents(&self) -> Vec<Document> {
        self.remote.fetch_documents().await
    }

    /// The documents of one sector, newest first.
    pub async fn documents_by_sector(&self, sector: Sector) -> Vec<Document> {
        self.remote.fetch_documents_by_sector(sector).await
    }

    /// Inserts or fully replaces a document by id.
    pub async fn save_document(&self, document: &Document) {
        self.remote.upsert_document(document).await;
    }

    /// Deletes a document by id.
    pub async fn delete_document(&self, id: &str) {
        self.remote.delete_document(id).await;
    }

    /// All processes, newest first. Empty when the backend is
    /// unconfigured or unreachable.
    pub async fn processes(&self) -> Vec<Process> {
        self.remote.fetch_processes().await
    }

    /// Inserts or fully replaces a process by id.
    pub async fn save_process(&self, process: &Process) {
        self.remote.upsert_process(process).await;
    }

    /// Deletes a process by id.
    pub async fn delete_process(&self, id: &str) {
        self.remote.delete_process(id).await;
    }

    /// Counts processes per lifecycle status, for report views.
    pub async fn process_summary(&self) -> ProcessSummary {
        let mut summary = ProcessSummary::default();
        for process in self.remote.fetch_processes().await {
            match process.status {
                ProcessStatus::Pending => summary.pending += 1,
                ProcessStatus::InProgress => summary.in_progress += 1,
                ProcessStatus::Completed => summary.completed += 1,
                ProcessStatus::Rejected => summary.rejected += 1,
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubRemoteStore;
    use tramita_core::document::DocumentType;

    #[tokio::test]
    async fn test_unconfigured_save_then_read_is_empty_and_quiet() {
        let service = DataService::new(Arc::new(StubRemoteStore::unconfigured()));
        let document = Document::new("Edital", DocumentType::Pdf, Sector::Reitoria);

        service.save_document(&document).await;
        let documents = service.documents().await;

        assert!(documents.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_read_round_trip() {
        let service = DataService::new(Arc::new(StubRemoteStore::configured()));
        let document = Document::new("Edital", DocumentType::Pdf, Sector::Reitoria);

        service.save_document(&document).await;
        let documents = service.documents().await;

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].id, document.id);
    }

    #[tokio::test]
    async fn test_save_is_upsert_by_id() {
        let service = DataService::new(Arc::new(StubRemoteStore::configured()));
        let mut document = Document::new("Edital", DocumentType::Pdf, Sector::Reitoria);

        service.save_document(&document).await;
        document.title = "Edital retificado".to_string();
        service.save_document(&document).await;

        let documents = service.documents().await;
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].title, "Edital retificado");
    }

    #[tokio::test]
    async fn test_delete_document() {
        let service = DataService::new(Arc::new(StubRemoteStore::configured()));
        let document = Document::new("Edital", DocumentType::Pdf, Sector::Reitoria);

        service.save_document(&document).await;
        service.delete_document(&document.id).await;

        assert!(service.documents().await.is_empty());
    }

    #[tokio::test]
    async fn test_documents_by_sector_filters() {
        let service = DataService::new(Arc::new(StubRemoteStore::configured()));
        service
            .save_document(&Document::new("A", DocumentType::Pdf, Sector::Reitoria))
            .await;
        service
            .save_document(&Document::new("B", DocumentType::Pdf, Sector::Financeiro))
            .await;

        let documents = service.documents_by_sector(Sector::Financeiro).await;
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].title, "B");
    }

    #[tokio::test]
    async fn test_process_summary_counts_by_status() {
        let service = DataService::new(Arc::new(StubRemoteStore::configured()));

        let mut a = Process::new("2026/0001", "A", Sector::Secretaria);
        a.status = ProcessStatus::Pending;
        let mut b = Process::new("2026/0002", "B", Sector::Secretaria);
        b.status = ProcessStatus::Completed;
        let mut c = Process::new("2026/0003", "C", Sector::Secretaria);
        c.status = ProcessStatus::Completed;

        for process in [&a, &b, &c] {
            service.save_process(process).await;
        }

        let summary = service.process_summary().await;
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.total(), 3);
    }
}
