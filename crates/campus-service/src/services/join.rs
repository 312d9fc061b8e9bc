//! Batch join resolution
//!
//! Primary rows are fetched flat, then their foreign references are resolved
//! with one bulk lookup per referenced table and stitched back in memory.
//! Lookups whose id set is empty are never issued.

use std::collections::{HashMap, HashSet};

use campus_core::{AuthorSummary, Campus, DailyUpdate, FeedbackItem, Reaction};
use tracing::instrument;
use uuid::Uuid;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Feedback row with its references resolved
#[derive(Debug, Clone)]
pub struct FeedbackView {
    pub feedback: FeedbackItem,
    /// `None` when the author profile no longer exists
    pub author: Option<AuthorSummary>,
    pub campus: Option<Campus>,
    /// Exactly the reactions whose target is this row
    pub reactions: Vec<Reaction>,
}

/// Daily update with its references resolved for one viewer
#[derive(Debug, Clone)]
pub struct UpdateView {
    pub update: DailyUpdate,
    pub author: Option<AuthorSummary>,
    pub campus: Option<Campus>,
    pub has_upvoted: bool,
}

/// Distinct ids in first-seen order
pub(crate) fn distinct_ids(ids: impl IntoIterator<Item = Uuid>) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

/// Resolves foreign references for batches of primary rows
pub struct BatchJoiner<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BatchJoiner<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Author summaries keyed by account id
    pub(crate) async fn authors(&self, ids: &[Uuid]) -> ServiceResult<HashMap<Uuid, AuthorSummary>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let accounts = self.ctx.account_repo().find_by_ids(ids).await?;
        Ok(accounts.iter().map(|a| (a.id, a.summary())).collect())
    }

    /// Campuses keyed by id
    pub(crate) async fn campuses(&self, ids: &[Uuid]) -> ServiceResult<HashMap<Uuid, Campus>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let campuses = self.ctx.campus_repo().find_by_ids(ids).await?;
        Ok(campuses.into_iter().map(|c| (c.id, c)).collect())
    }

    /// Reactions grouped by target id
    pub(crate) async fn reactions(&self, target_ids: &[Uuid]) -> ServiceResult<HashMap<Uuid, Vec<Reaction>>> {
        if target_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let reactions = self.ctx.reaction_repo().find_by_targets(target_ids).await?;
        let mut grouped: HashMap<Uuid, Vec<Reaction>> = HashMap::new();
        for reaction in reactions {
            grouped.entry(reaction.target_id).or_default().push(reaction);
        }
        Ok(grouped)
    }

    async fn upvoted(&self, viewer: Uuid, update_ids: &[Uuid]) -> ServiceResult<HashSet<Uuid>> {
        if update_ids.is_empty() {
            return Ok(HashSet::new());
        }
        let ids = self.ctx.update_repo().find_upvoted(viewer, update_ids).await?;
        Ok(ids.into_iter().collect())
    }

    /// Attach author, campus, and reactions to each feedback row
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub async fn feedback_views(&self, rows: Vec<FeedbackItem>) -> ServiceResult<Vec<FeedbackView>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let author_ids = distinct_ids(rows.iter().map(|r| r.created_by));
        let campus_ids = distinct_ids(rows.iter().filter_map(|r| r.campus_id));
        let row_ids = distinct_ids(rows.iter().map(|r| r.id));

        let (authors, campuses, mut reactions) = tokio::try_join!(
            self.authors(&author_ids),
            self.campuses(&campus_ids),
            self.reactions(&row_ids),
        )?;

        Ok(rows
            .into_iter()
            .map(|feedback| FeedbackView {
                author: authors.get(&feedback.created_by).cloned(),
                campus: feedback.campus_id.and_then(|id| campuses.get(&id).cloned()),
                reactions: reactions.remove(&feedback.id).unwrap_or_default(),
                feedback,
            })
            .collect())
    }

    /// Attach author, campus, and the viewer's upvote state to each update
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub async fn update_views(&self, rows: Vec<DailyUpdate>, viewer: Uuid) -> ServiceResult<Vec<UpdateView>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let author_ids = distinct_ids(rows.iter().map(|r| r.user_id));
        let campus_ids = distinct_ids(rows.iter().filter_map(|r| r.college_id));
        let row_ids = distinct_ids(rows.iter().map(|r| r.id));

        let (authors, campuses, upvoted) = tokio::try_join!(
            self.authors(&author_ids),
            self.campuses(&campus_ids),
            self.upvoted(viewer, &row_ids),
        )?;

        Ok(rows
            .into_iter()
            .map(|update| UpdateView {
                author: authors.get(&update.user_id).cloned(),
                campus: update.college_id.and_then(|id| campuses.get(&id).cloned()),
                has_upvoted: upvoted.contains(&update.id),
                update,
            })
            .collect())
    }
}
