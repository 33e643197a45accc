use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::core::error::AppError;
use crate::features::mentees::dto::{
    HouseRoleRow, IdRow, MenteeFilter, MenteeRecord, MenteeSummaryDto, ResponseDetailDto,
    ResponseRecord,
};
use crate::features::mentees::helpers::{
    MenteeListOptions, collapse_house_roles, resolve_created_at, sort_mentees,
};
use crate::features::store::{RowId, StoreClient, TableQuery};

const MENTEES_TABLE: &str = "mentees";
const RESPONSES_TABLE: &str = "responses";

#[async_trait]
pub trait MenteeDataSource: Send + Sync {
    async fn fetch_house_roles(&self) -> Result<Vec<Option<String>>, AppError>;
    async fn fetch_mentees(&self, filter: &MenteeFilter) -> Result<Vec<MenteeRecord>, AppError>;
    async fn count_responses(&self, mentee_id: &RowId) -> Result<Option<u64>, AppError>;
    async fn find_mentee_id(&self, discord_id: &str) -> Result<Option<RowId>, AppError>;
    /// Responses owned by the mentee, most recent week first.
    async fn fetch_responses(&self, mentee_id: &RowId) -> Result<Vec<ResponseRecord>, AppError>;
}

#[async_trait]
impl MenteeDataSource for StoreClient {
    async fn fetch_house_roles(&self) -> Result<Vec<Option<String>>, AppError> {
        let query = TableQuery::new(MENTEES_TABLE).select("house_role");
        let rows: Vec<HouseRoleRow> = self.fetch_rows(&query).await?;
        Ok(rows.into_iter().map(|row| row.house_role).collect())
    }

    async fn fetch_mentees(&self, filter: &MenteeFilter) -> Result<Vec<MenteeRecord>, AppError> {
        let mut query = TableQuery::new(MENTEES_TABLE).select("*");
        if let Some(house) = &filter.house {
            query = query.eq("house_role", house);
        }
        if let Some(term) = &filter.search {
            query = query.ilike("name", &format!("%{term}%"));
        }

        self.fetch_rows(&query).await
    }

    async fn count_responses(&self, mentee_id: &RowId) -> Result<Option<u64>, AppError> {
        let query = TableQuery::new(RESPONSES_TABLE)
            .select("id")
            .eq("mentee_id", mentee_id)
            .exact_count();

        self.count_rows(&query).await
    }

    async fn find_mentee_id(&self, discord_id: &str) -> Result<Option<RowId>, AppError> {
        let query = TableQuery::new(MENTEES_TABLE)
            .select("id")
            .eq("discord_id", discord_id);
        let rows: Vec<IdRow> = self.fetch_rows(&query).await?;
        Ok(rows.into_iter().next().map(|row| row.id))
    }

    async fn fetch_responses(&self, mentee_id: &RowId) -> Result<Vec<ResponseRecord>, AppError> {
        let query = TableQuery::new(RESPONSES_TABLE)
            .select("*")
            .eq("mentee_id", mentee_id)
            .order("week_number", true);

        self.fetch_rows(&query).await
    }
}

pub struct MenteeService {
    data_source: Arc<dyn MenteeDataSource>,
}

impl MenteeService {
    pub fn new(data_source: Arc<dyn MenteeDataSource>) -> Self {
        Self { data_source }
    }

    pub async fn list_houses(&self) -> Result<Vec<String>, AppError> {
        let roles = self.data_source.fetch_house_roles().await.map_err(|error| {
            warn!(target: "mentees", %error, "failed to fetch house roles");
            error.with_context("Error fetching houses")
        })?;

        Ok(collapse_house_roles(roles))
    }

    pub async fn list_mentees(
        &self,
        options: MenteeListOptions,
    ) -> Result<Vec<MenteeSummaryDto>, AppError> {
        let mut mentees = self
            .collect_mentees(&options.filter)
            .await
            .map_err(|error| {
                warn!(target: "mentees", %error, "failed to list mentees");
                error.with_context("Error fetching mentees")
            })?;

        sort_mentees(&mut mentees, options.sort_key, options.sort_order);
        Ok(mentees)
    }

    /// One count query per mentee, awaited in turn.
    async fn collect_mentees(
        &self,
        filter: &MenteeFilter,
    ) -> Result<Vec<MenteeSummaryDto>, AppError> {
        let records = self.data_source.fetch_mentees(filter).await?;
        debug!(
            target: "mentees",
            house = ?filter.house,
            search = ?filter.search,
            matches = records.len(),
            "fetched mentees"
        );

        let mut mentees = Vec::with_capacity(records.len());
        for record in records {
            let response_count = self
                .data_source
                .count_responses(&record.id)
                .await?
                .unwrap_or(0);

            mentees.push(MenteeSummaryDto {
                name: record.name,
                discord_id: record.discord_id,
                house_role: record.house_role,
                response_count,
            });
        }

        Ok(mentees)
    }

    pub async fn mentee_responses(
        &self,
        discord_id: &str,
    ) -> Result<Vec<ResponseDetailDto>, AppError> {
        self.collect_responses(discord_id).await.map_err(|error| {
            if !matches!(error, AppError::NotFound(_)) {
                warn!(target: "mentees", %error, discord_id, "failed to fetch responses");
            }
            error.with_context("Error fetching responses")
        })
    }

    async fn collect_responses(
        &self,
        discord_id: &str,
    ) -> Result<Vec<ResponseDetailDto>, AppError> {
        let mentee_id = self
            .data_source
            .find_mentee_id(discord_id)
            .await?
            .ok_or_else(|| AppError::not_found("Mentee not found"))?;

        let records = self.data_source.fetch_responses(&mentee_id).await?;
        records
            .into_iter()
            .map(|record| -> Result<ResponseDetailDto, AppError> {
                Ok(ResponseDetailDto {
                    created_at: resolve_created_at(record.created_at.as_deref())?,
                    id: record.id,
                    week_number: record.week_number,
                    text_response: record.text_response,
                    voice_response_url: record.voice_response_url,
                })
            })
            .collect()
    }
}
