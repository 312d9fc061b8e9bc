//! Query string extractors for the inbox, the forum search, and the user
//! directory
//!
//! Raw parameters are strings so malformed values map to a 400 with a
//! useful message instead of axum's default rejection.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use campus_core::{DirectoryFilter, InboxFilter, Role, SortOrder, StatusFilter, UpdateSearch, UpdateSort};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

use crate::response::ApiError;

async fn parse_query<T, S>(parts: &mut Parts, state: &S) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    let Query(params) = Query::<T>::from_request_parts(parts, state)
        .await
        .map_err(|e| ApiError::invalid_query(e.body_text()))?;
    Ok(params)
}

fn parse_number(name: &str, value: Option<&str>) -> Result<Option<u32>, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse::<u32>()
                .map_err(|_| ApiError::invalid_query(format!("'{name}' must be a positive integer")))
        })
        .transpose()
}

/// `?status=&page=&limit=&sort=` for the feedback inbox
#[derive(Debug, Default, Deserialize)]
pub struct InboxQuery {
    pub status: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
}

impl InboxQuery {
    /// Resolve into a filter; unknown status is an error, unknown sort is newest
    pub fn into_filter(self, default_limit: u32) -> Result<InboxFilter, ApiError> {
        let status = match self.status.as_deref() {
            Some(s) => s
                .parse::<StatusFilter>()
                .map_err(|e| ApiError::invalid_query(e.to_string()))?,
            None => StatusFilter::All,
        };

        Ok(InboxFilter {
            status,
            sort: self.sort.as_deref().map_or(SortOrder::Newest, SortOrder::parse_lenient),
            page: parse_number("page", self.page.as_deref())?.unwrap_or(1),
            limit: parse_number("limit", self.limit.as_deref())?.unwrap_or(default_limit),
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for InboxQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        parse_query(parts, state).await
    }
}

/// `?keyword=&college=&date=&sort=&page=&limit=` for the daily update forum
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSearchQuery {
    pub keyword: Option<String>,
    pub college: Option<String>,
    /// `YYYY-MM-DD`, interpreted as a UTC day
    pub date: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl UpdateSearchQuery {
    pub fn into_search(self, default_limit: u32) -> Result<UpdateSearch, ApiError> {
        let date = self
            .date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(|d| {
                NaiveDate::parse_from_str(d, "%Y-%m-%d")
                    .map_err(|_| ApiError::invalid_query("'date' must be YYYY-MM-DD"))
            })
            .transpose()?;

        Ok(UpdateSearch {
            keyword: self.keyword,
            college: self.college,
            date,
            sort: self.sort.as_deref().map_or(UpdateSort::Recent, UpdateSort::parse_lenient),
            page: parse_number("page", self.page.as_deref())?.unwrap_or(1),
            limit: parse_number("limit", self.limit.as_deref())?.unwrap_or(default_limit),
        }
        .normalized())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for UpdateSearchQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        parse_query(parts, state).await
    }
}

fn parse_uuid(name: &str, value: Option<&str>) -> Result<Option<Uuid>, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse::<Uuid>()
                .map_err(|_| ApiError::invalid_query(format!("'{name}' must be a UUID")))
        })
        .transpose()
}

/// `?role=&district_id=&campus_id=&search=&page=` for the user directory
#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQueryParams {
    pub role: Option<String>,
    pub district_id: Option<String>,
    pub campus_id: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
}

impl DirectoryQueryParams {
    pub fn into_filter(self) -> Result<DirectoryFilter, ApiError> {
        let role = self
            .role
            .as_deref()
            .filter(|r| !r.is_empty())
            .map(|r| r.parse::<Role>().map_err(|e| ApiError::invalid_query(e.to_string())))
            .transpose()?;

        Ok(DirectoryFilter {
            role,
            district_id: parse_uuid("district_id", self.district_id.as_deref())?,
            campus_id: parse_uuid("campus_id", self.campus_id.as_deref())?,
            search: self.search,
            page: parse_number("page", self.page.as_deref())?.unwrap_or(1),
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for DirectoryQueryParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        parse_query(parts, state).await
    }
}
