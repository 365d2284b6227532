//! Disposal request lifecycle views
//!
//! List view: the full result set is fetched once and every filter, search,
//! sort, and page operation is a pure in-memory pipeline over it, driven by
//! an immutable query descriptor. Detail view: read-only display with an
//! edit mode for `status` and `vendor_notes` that round-trips through the
//! status-update endpoint. The two views fetch independently; a detail-side
//! status change requires an explicit list refresh.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::{
    client::disposal::DisposalApi,
    error::{AppError, AppResult},
    models::enums::{DisposalStatus, SortDirection, SortKey},
    models::request::{DisposalRequest, StatusUpdate},
};

/// Selectable page sizes of the list view
pub const PAGE_SIZES: [usize; 3] = [5, 10, 25];

/// Characters of description shown in the table before truncation
pub const DESCRIPTION_PREVIEW_CHARS: usize = 50;

/// Immutable list-view query descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct RequestQuery {
    pub status: Option<DisposalStatus>,
    pub search: String,
    pub sort_by: SortKey,
    pub sort_dir: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl Default for RequestQuery {
    fn default() -> Self {
        Self {
            status: None,
            search: String::new(),
            sort_by: SortKey::CreatedAt,
            sort_dir: SortDirection::Descending,
            page: 0,
            page_size: 10,
        }
    }
}

/// One page of the filtered, sorted result set
#[derive(Debug, Clone)]
pub struct RequestPage {
    pub rows: Vec<DisposalRequest>,
    /// Total rows after filter + search, across all pages.
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
}

/// Pure filter/search/sort/paginate pipeline over the fetched set.
/// An out-of-range page clamps to the last page.
pub fn apply_query(requests: &[DisposalRequest], query: &RequestQuery) -> RequestPage {
    let needle = query.search.trim().to_lowercase();

    let mut rows: Vec<&DisposalRequest> = requests
        .iter()
        .filter(|request| query.status.map_or(true, |status| request.status == status))
        .filter(|request| needle.is_empty() || matches_search(request, &needle))
        .collect();

    rows.sort_by(|a, b| {
        let ordering = match query.sort_by {
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
            SortKey::Department => a.department.cmp(&b.department),
            SortKey::Weight => a
                .weight_kg
                .unwrap_or(0.0)
                .partial_cmp(&b.weight_kg.unwrap_or(0.0))
                .unwrap_or(Ordering::Equal),
        };
        match query.sort_dir {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    let total = rows.len();
    let page_size = query.page_size.max(1);
    let page_count = (total + page_size - 1) / page_size;
    let page = query.page.min(page_count.saturating_sub(1));

    let rows = rows
        .into_iter()
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect();

    RequestPage {
        rows,
        total,
        page,
        page_count,
    }
}

fn matches_search(request: &DisposalRequest, needle: &str) -> bool {
    request.id.to_lowercase().contains(needle)
        || request.department.to_lowercase().contains(needle)
        || request.e_waste_description.to_lowercase().contains(needle)
}

/// Truncate a description for table rendering.
pub fn truncate_description(description: &str, max_chars: usize) -> String {
    if description.chars().count() <= max_chars {
        description.to_string()
    } else {
        let truncated: String = description.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

// ---------------------------------------------------------------------------
// List view
// ---------------------------------------------------------------------------

/// List view state. Rows stay visible across a failed refresh; the error
/// lands in a banner instead of blanking the table.
pub struct RequestList {
    api: Arc<dyn DisposalApi>,
    requests: Vec<DisposalRequest>,
    query: RequestQuery,
    loading: bool,
    error: Option<String>,
}

impl RequestList {
    pub fn new(api: Arc<dyn DisposalApi>) -> Self {
        Self {
            api,
            requests: Vec::new(),
            query: RequestQuery::default(),
            loading: false,
            error: None,
        }
    }

    pub fn query(&self) -> &RequestQuery {
        &self.query
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current page under the active query.
    pub fn page(&self) -> RequestPage {
        apply_query(&self.requests, &self.query)
    }

    /// Fetch the full result set. On failure the previous rows are kept.
    pub async fn refresh(&mut self) -> AppResult<()> {
        if self.loading {
            return Ok(());
        }
        self.loading = true;

        let result = self.api.list(None).await;
        self.loading = false;

        match result {
            Ok(requests) => {
                tracing::debug!(count = requests.len(), "disposal requests loaded");
                self.requests = requests;
                self.error = None;
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "disposal request list fetch failed");
                self.error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Replace the whole descriptor at once.
    pub fn set_query(&mut self, query: RequestQuery) {
        self.query = query;
    }

    /// Filter/search changes reset to the first page.
    pub fn set_status_filter(&mut self, status: Option<DisposalStatus>) {
        self.query.status = status;
        self.query.page = 0;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.query.page = 0;
    }

    /// Re-sorting by the active key flips direction; a new key starts
    /// ascending.
    pub fn sort_by(&mut self, key: SortKey) {
        if self.query.sort_by == key {
            self.query.sort_dir = self.query.sort_dir.toggled();
        } else {
            self.query.sort_by = key;
            self.query.sort_dir = SortDirection::Ascending;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        if PAGE_SIZES.contains(&page_size) {
            self.query.page_size = page_size;
            self.query.page = 0;
        }
    }
}

// ---------------------------------------------------------------------------
// Detail view
// ---------------------------------------------------------------------------

/// Edit buffer for the two mutable fields
#[derive(Debug, Clone, PartialEq)]
pub struct StatusEdit {
    pub status: DisposalStatus,
    pub vendor_notes: String,
}

/// Detail view state machine: read-only until `begin_edit`, then the edit
/// buffer round-trips through the status-update endpoint on `save`.
pub struct RequestDetail {
    api: Arc<dyn DisposalApi>,
    id: String,
    request: Option<DisposalRequest>,
    edit: Option<StatusEdit>,
    saving: bool,
    error: Option<String>,
}

impl RequestDetail {
    pub fn new(api: Arc<dyn DisposalApi>, id: impl Into<String>) -> Self {
        Self {
            api,
            id: id.into(),
            request: None,
            edit: None,
            saving: false,
            error: None,
        }
    }

    pub fn request(&self) -> Option<&DisposalRequest> {
        self.request.as_ref()
    }

    pub fn edit(&self) -> Option<&StatusEdit> {
        self.edit.as_ref()
    }

    pub fn edit_mut(&mut self) -> Option<&mut StatusEdit> {
        self.edit.as_mut()
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch (or re-fetch) the record. A failed re-fetch keeps the last
    /// displayed state.
    pub async fn fetch(&mut self) -> AppResult<&DisposalRequest> {
        match self.api.get(&self.id).await {
            Ok(request) => {
                self.error = None;
                self.request = Some(request);
            }
            Err(error) => {
                tracing::warn!(id = %self.id, %error, "disposal request fetch failed");
                self.error = Some(error.to_string());
                return Err(error);
            }
        }
        // set just above
        self.request
            .as_ref()
            .ok_or_else(|| AppError::NotFound(self.id.clone()))
    }

    /// Copy the mutable fields into an edit buffer. No-op without a
    /// fetched record.
    pub fn begin_edit(&mut self) -> Option<&mut StatusEdit> {
        if self.edit.is_none() {
            if let Some(request) = &self.request {
                self.edit = Some(StatusEdit {
                    status: request.status,
                    vendor_notes: request.vendor_notes.clone().unwrap_or_default(),
                });
            }
        }
        self.edit.as_mut()
    }

    /// Discard local edits; displayed values revert to the last fetch.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
        self.error = None;
    }

    /// PUT the edit buffer. On success the record is re-fetched and edit
    /// mode exits; on failure edit mode and the typed notes survive.
    pub async fn save(&mut self) -> AppResult<()> {
        let edit = match &self.edit {
            Some(edit) => edit.clone(),
            None => {
                return Err(AppError::Internal(
                    "save called outside edit mode".to_string(),
                ))
            }
        };
        if self.saving {
            return Err(AppError::Internal(
                "a status update is already in flight".to_string(),
            ));
        }

        self.saving = true;
        let update = StatusUpdate {
            status: edit.status,
            vendor_notes: {
                let trimmed = edit.vendor_notes.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            },
        };

        let result = self.api.update_status(&self.id, &update).await;
        self.saving = false;

        match result {
            Ok(_) => {
                tracing::info!(id = %self.id, status = %edit.status, "status updated");
                self.edit = None;
                self.error = None;
                // refresh the displayed record; a failure here surfaces in
                // the banner but the update itself already succeeded
                let _ = self.fetch().await;
                Ok(())
            }
            Err(error) => {
                tracing::warn!(id = %self.id, %error, "status update failed");
                self.error = Some(error.to_string());
                Err(error)
            }
        }
    }
}
