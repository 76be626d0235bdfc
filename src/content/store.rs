//! Content store with builtin defaults
//!
//! [`ContentStore`] is the seam handlers depend on; [`MemoryStore`] is the
//! in-process implementation. Records are append-only: nothing is updated or
//! deleted, and each collection owns a monotonically increasing id counter.

use crate::content::matcher;
use crate::content::seed;
use crate::content::types::*;
use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Storage operations for responses and timeline entries
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All responses, insertion order
    async fn list_responses(&self) -> Result<Vec<ResponseRecord>>;

    /// Responses whose category equals `category` exactly
    async fn list_responses_by_category(&self, category: &str) -> Result<Vec<ResponseRecord>>;

    /// Append a response with the next id
    async fn create_response(&self, req: CreateResponseRequest) -> Result<ResponseRecord>;

    /// All timeline entries sorted by `order` (stable)
    async fn list_timeline(&self) -> Result<Vec<TimelineRecord>>;

    /// Append a timeline entry with the next id
    async fn create_timeline(&self, req: CreateTimelineRequest) -> Result<TimelineRecord>;

    /// Best stored response for free-text input
    async fn find_best_match(&self, query_text: &str) -> Result<Option<ResponseRecord>> {
        let responses = self.list_responses().await?;
        Ok(matcher::best_match(&responses, query_text).cloned())
    }
}

/// Append-only collection with its own id counter
struct Table<T> {
    records: Vec<T>,
    next_id: u64,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(build(id));
        &self.records[self.records.len() - 1]
    }
}

/// In-memory, non-persistent content store
pub struct MemoryStore {
    responses: RwLock<Table<ResponseRecord>>,
    timeline: RwLock<Table<TimelineRecord>>,
}

impl MemoryStore {
    /// Create a store with no records
    pub fn empty() -> Self {
        Self {
            responses: RwLock::new(Table::new()),
            timeline: RwLock::new(Table::new()),
        }
    }

    /// Create a store preloaded with the builtin timeline and responses
    pub fn seeded() -> Self {
        let mut timeline = Table::new();
        for item in seed::builtin_timeline() {
            timeline.insert_with(|id| timeline_record(id, item));
        }

        let mut responses = Table::new();
        for item in seed::builtin_responses() {
            responses.insert_with(|id| response_record(id, item));
        }

        tracing::debug!(
            responses = responses.records.len(),
            timeline = timeline.records.len(),
            "Seeded content store"
        );

        Self {
            responses: RwLock::new(responses),
            timeline: RwLock::new(timeline),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn list_responses(&self) -> Result<Vec<ResponseRecord>> {
        Ok(self.responses.read().await.records.clone())
    }

    async fn list_responses_by_category(&self, category: &str) -> Result<Vec<ResponseRecord>> {
        let responses = self.responses.read().await;
        Ok(responses
            .records
            .iter()
            .filter(|r| r.category == category)
            .cloned()
            .collect())
    }

    async fn create_response(&self, req: CreateResponseRequest) -> Result<ResponseRecord> {
        let mut responses = self.responses.write().await;
        let record = responses.insert_with(|id| response_record(id, req)).clone();
        tracing::info!(id = record.id, category = %record.category, "Created chatbot response");
        Ok(record)
    }

    async fn list_timeline(&self) -> Result<Vec<TimelineRecord>> {
        let mut items = self.timeline.read().await.records.clone();
        items.sort_by_key(|item| item.order);
        Ok(items)
    }

    async fn create_timeline(&self, req: CreateTimelineRequest) -> Result<TimelineRecord> {
        let mut timeline = self.timeline.write().await;
        let record = timeline.insert_with(|id| timeline_record(id, req)).clone();
        tracing::info!(id = record.id, order = record.order, "Created timeline item");
        Ok(record)
    }
}

fn response_record(id: u64, req: CreateResponseRequest) -> ResponseRecord {
    ResponseRecord {
        id,
        query: req.query,
        response: req.response,
        category: req.category,
    }
}

fn timeline_record(id: u64, req: CreateTimelineRequest) -> TimelineRecord {
    TimelineRecord {
        id,
        year: req.year,
        title: req.title,
        description: req.description,
        order: req.order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline_req(year: &str, order: i64) -> CreateTimelineRequest {
        CreateTimelineRequest {
            year: year.to_string(),
            title: format!("{} entry", year),
            description: "test".to_string(),
            order,
        }
    }

    #[tokio::test]
    async fn test_seeded_contents() {
        let store = MemoryStore::seeded();
        let responses = store.list_responses().await.unwrap();
        assert_eq!(responses.len(), 10);
        assert_eq!(responses[0].id, 1);
        assert_eq!(responses[0].query, "what is a chatbot");
        assert_eq!(responses[9].id, 10);

        let timeline = store.list_timeline().await.unwrap();
        assert_eq!(timeline.len(), 5);
        assert_eq!(timeline[0].title, "1960s: ELIZA");
        assert_eq!(timeline[4].year, "Now");
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = MemoryStore::empty();
        assert!(store.list_responses().await.unwrap().is_empty());
        assert!(store.list_timeline().await.unwrap().is_empty());
        assert!(store.find_best_match("what is a chatbot").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_by_category_is_case_sensitive() {
        let store = MemoryStore::seeded();
        let general = store.list_responses_by_category("general").await.unwrap();
        assert_eq!(general.len(), 4);
        assert!(general.iter().all(|r| r.category == "general"));
        assert!(general.windows(2).all(|w| w[0].id < w[1].id));

        assert!(store
            .list_responses_by_category("General")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_create_response_assigns_next_id() {
        let store = MemoryStore::seeded();
        let before = store.list_responses().await.unwrap();
        let max_id = before.iter().map(|r| r.id).max().unwrap();

        let created = store
            .create_response(CreateResponseRequest::new(
                "what is eliza",
                "ELIZA was an early chatbot.",
                "history",
            ))
            .await
            .unwrap();
        assert_eq!(created.id, max_id + 1);

        let after = store.list_responses().await.unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last(), Some(&created));
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let store = MemoryStore::empty();
        let a = store
            .create_response(CreateResponseRequest::new("a", "a", "general"))
            .await
            .unwrap();
        let b = store
            .create_response(CreateResponseRequest::new("a", "a", "general"))
            .await
            .unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_timeline_sorted_and_stable() {
        let store = MemoryStore::empty();
        store.create_timeline(timeline_req("c", 30)).await.unwrap();
        store.create_timeline(timeline_req("a", 10)).await.unwrap();
        store.create_timeline(timeline_req("b1", 20)).await.unwrap();
        store.create_timeline(timeline_req("z", -5)).await.unwrap();
        store.create_timeline(timeline_req("b2", 20)).await.unwrap();

        let years: Vec<String> = store
            .list_timeline()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.year)
            .collect();
        assert_eq!(years, vec!["z", "a", "b1", "b2", "c"]);
    }

    #[tokio::test]
    async fn test_timeline_ids_independent_of_responses() {
        let store = MemoryStore::seeded();
        let item = store.create_timeline(timeline_req("1972", 2)).await.unwrap();
        assert_eq!(item.id, 6);

        let timeline = store.list_timeline().await.unwrap();
        let orders: Vec<i64> = timeline.iter().map(|t| t.order).collect();
        assert!(orders.windows(2).all(|w| w[0] <= w[1]));
        // Seeded order-2 entry keeps its place ahead of the new one
        assert_eq!(timeline[1].title, "1990s: A.L.I.C.E.");
        assert_eq!(timeline[2].year, "1972");
    }

    #[tokio::test]
    async fn test_find_best_match_sees_new_records() {
        let store = MemoryStore::seeded();
        store
            .create_response(CreateResponseRequest::new(
                "chatbot",
                "short answer",
                "general",
            ))
            .await
            .unwrap();

        let hit = store
            .find_best_match("tell me about chatbot applications today")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(hit.query, "chatbot applications");

        let hit = store.find_best_match("What is NLP").await.unwrap().unwrap();
        assert_eq!(hit.category, "technology");
    }

    #[tokio::test]
    async fn test_find_best_match_fallback() {
        let store = MemoryStore::seeded();
        let hit = store
            .find_best_match("the weather in lisbon")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(hit.query, "what is a chatbot");
    }
}
