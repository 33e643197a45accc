#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use mentee_dashboard::core::error::AppError;
use mentee_dashboard::features::mentees::{
    MenteeDataSource, MenteeFilter, MenteeRecord, ResponseRecord,
};
use mentee_dashboard::features::store::RowId;

/// In-memory stand-in for the hosted store.
#[derive(Default)]
pub struct MockMenteeStore {
    pub mentees: Vec<MenteeRecord>,
    pub responses: Vec<(RowId, ResponseRecord)>,
    pub failing_count_for: Option<RowId>,
    pub fail_everything: bool,
    calls: Arc<Mutex<HashMap<String, usize>>>,
}

impl MockMenteeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mentee(mut self, id: i64, name: &str, discord_id: &str, house: Option<&str>) -> Self {
        self.mentees.push(MenteeRecord {
            id: RowId::from(id),
            name: name.to_string(),
            discord_id: discord_id.to_string(),
            house_role: house.map(str::to_string),
        });
        self
    }

    pub fn with_response(
        mut self,
        mentee_id: i64,
        id: i64,
        week_number: i64,
        created_at: Option<&str>,
    ) -> Self {
        self.responses.push((
            mentee_id.into(),
            ResponseRecord {
                id,
                week_number,
                text_response: Some(format!("week {week_number} update")),
                voice_response_url: None,
                created_at: created_at.map(str::to_string),
            },
        ));
        self
    }

    pub fn failing_count_for(mut self, mentee_id: i64) -> Self {
        self.failing_count_for = Some(mentee_id.into());
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_everything = true;
        self
    }

    async fn record_call(&self, key: &str) -> Result<(), AppError> {
        let mut guard = self.calls.lock().await;
        *guard.entry(key.to_string()).or_insert(0) += 1;

        if self.fail_everything {
            return Err(AppError::upstream(format!("{key} unavailable")));
        }
        Ok(())
    }

    pub async fn count_for(&self, key: &str) -> usize {
        let guard = self.calls.lock().await;
        guard.get(key).copied().unwrap_or(0)
    }
}

#[async_trait]
impl MenteeDataSource for MockMenteeStore {
    async fn fetch_house_roles(&self) -> Result<Vec<Option<String>>, AppError> {
        self.record_call("house_roles").await?;
        Ok(self
            .mentees
            .iter()
            .map(|mentee| mentee.house_role.clone())
            .collect())
    }

    async fn fetch_mentees(&self, filter: &MenteeFilter) -> Result<Vec<MenteeRecord>, AppError> {
        self.record_call("mentees").await?;
        Ok(self
            .mentees
            .iter()
            .filter(|mentee| match &filter.house {
                Some(house) => mentee.house_role.as_ref() == Some(house),
                None => true,
            })
            .filter(|mentee| match &filter.search {
                Some(term) => mentee.name.to_lowercase().contains(&term.to_lowercase()),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn count_responses(&self, mentee_id: &RowId) -> Result<Option<u64>, AppError> {
        self.record_call("count").await?;
        if self.failing_count_for.as_ref() == Some(mentee_id) {
            return Err(AppError::upstream(format!(
                "count for mentee {mentee_id} timed out"
            )));
        }

        let count = self
            .responses
            .iter()
            .filter(|(owner, _)| owner == mentee_id)
            .count();
        Ok(Some(count as u64))
    }

    async fn find_mentee_id(&self, discord_id: &str) -> Result<Option<RowId>, AppError> {
        self.record_call("find_mentee").await?;
        Ok(self
            .mentees
            .iter()
            .find(|mentee| mentee.discord_id == discord_id)
            .map(|mentee| mentee.id.clone()))
    }

    async fn fetch_responses(&self, mentee_id: &RowId) -> Result<Vec<ResponseRecord>, AppError> {
        self.record_call("responses").await?;
        let mut rows: Vec<ResponseRecord> = self
            .responses
            .iter()
            .filter(|(owner, _)| owner == mentee_id)
            .map(|(_, response)| response.clone())
            .collect();
        rows.sort_by(|a, b| b.week_number.cmp(&a.week_number));
        Ok(rows)
    }
}

/// Bob (Red) and alice (Blue), as in the dashboard's smoke data.
pub fn bob_and_alice() -> MockMenteeStore {
    MockMenteeStore::new()
        .with_mentee(1, "Bob", "bob#1", Some("Red"))
        .with_mentee(2, "alice", "alice#2", Some("Blue"))
        .with_response(1, 10, 1, Some("2024-01-08T09:00:00+00:00"))
        .with_response(1, 11, 3, Some("2024-01-22T09:00:00+00:00"))
        .with_response(2, 12, 1, None)
}
