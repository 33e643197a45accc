use reqwest::Url;

use crate::core::error::AppError;

const REST_PATH: &str = "rest/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    table: String,
    columns: String,
    filters: Vec<(String, String)>,
    order: Option<(String, bool)>,
    exact_count: bool,
}

impl TableQuery {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: "*".to_string(),
            filters: Vec::new(),
            order: None,
            exact_count: false,
        }
    }

    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.columns = columns.into();
        self
    }

    pub fn eq(mut self, column: &str, value: impl std::fmt::Display) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    /// Case-insensitive pattern match; `%` matches any run of characters.
    pub fn ilike(mut self, column: &str, pattern: &str) -> Self {
        self.filters
            .push((column.to_string(), format!("ilike.{pattern}")));
        self
    }

    pub fn order(mut self, column: &str, descending: bool) -> Self {
        self.order = Some((column.to_string(), descending));
        self
    }

    pub fn exact_count(mut self) -> Self {
        self.exact_count = true;
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn wants_exact_count(&self) -> bool {
        self.exact_count
    }

    pub fn to_url(&self, base: &str) -> Result<Url, AppError> {
        let mut url = Url::parse(&format!(
            "{}/{REST_PATH}/{}",
            base.trim_end_matches('/'),
            self.table
        ))
        .map_err(|err| AppError::internal(format!("invalid store url for {}: {err}", self.table)))?;

        {
            let mut query_pairs = url.query_pairs_mut();
            query_pairs.append_pair("select", &self.columns);
            for (column, expression) in &self.filters {
                query_pairs.append_pair(column, expression);
            }
            if let Some((column, descending)) = &self.order {
                let direction = if *descending { "desc" } else { "asc" };
                query_pairs.append_pair("order", &format!("{column}.{direction}"));
            }
        }

        Ok(url)
    }
}
