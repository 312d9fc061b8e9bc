//! In-memory repository doubles for service tests
//!
//! One `MemoryStore` backs every repository trait so tests can seed rows
//! directly and assert how many store calls a service made.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use campus_common::auth::JwtService;
use campus_core::traits::{
    AccountRepository, CampusRepository, DailyUpdateRepository, FeedbackRepository, ReactionRepository,
    ReplyRepository, RepoResult, SettingsRepository,
};
use campus_core::{
    Account, AdminSettings, Campus, DailyUpdate, DirectoryQuery, DomainError, FeedbackItem, FeedbackQuery, FeedbackReply,
    FeedbackScope, FeedbackStatus, Reaction, ReactionTarget, StatusFilter, UpdateSearch, UpdateSort,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::context::{ServiceContext, ServiceContextBuilder};
use super::revalidate::Revalidator;

/// Store call counters
#[derive(Default)]
pub struct CallCounter {
    account: AtomicUsize,
    campus: AtomicUsize,
    reaction: AtomicUsize,
    upvoted: AtomicUsize,
    feedback_reads: AtomicUsize,
    writes: AtomicUsize,
}

impl CallCounter {
    fn bump(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::SeqCst);
    }

    pub fn account_lookups(&self) -> usize {
        self.account.load(Ordering::SeqCst)
    }

    pub fn campus_lookups(&self) -> usize {
        self.campus.load(Ordering::SeqCst)
    }

    pub fn reaction_lookups(&self) -> usize {
        self.reaction.load(Ordering::SeqCst)
    }

    pub fn upvote_lookups(&self) -> usize {
        self.upvoted.load(Ordering::SeqCst)
    }

    /// Page, count, and status-list queries against feedback
    pub fn feedback_reads(&self) -> usize {
        self.feedback_reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
struct Tables {
    accounts: Vec<Account>,
    campuses: Vec<Campus>,
    feedback: Vec<FeedbackItem>,
    replies: Vec<FeedbackReply>,
    reactions: Vec<Reaction>,
    updates: Vec<DailyUpdate>,
    upvotes: Vec<(Uuid, Uuid)>,
    settings: Option<AdminSettings>,
}

pub struct MemoryStore {
    tables: Mutex<Tables>,
    pub calls: CallCounter,
    failing: AtomicBool,
    revalidated: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            tables: Mutex::new(Tables::default()),
            calls: CallCounter::default(),
            failing: AtomicBool::new(false),
            revalidated: Mutex::new(Vec::new()),
        })
    }

    pub fn jwt() -> Arc<JwtService> {
        Arc::new(JwtService::new("memory-store-secret", 3600))
    }

    /// A context whose every repository and revalidator is this store
    pub fn context(self: &Arc<Self>) -> ServiceContext {
        ServiceContextBuilder::new()
            .account_repo(self.clone())
            .campus_repo(self.clone())
            .feedback_repo(self.clone())
            .reply_repo(self.clone())
            .reaction_repo(self.clone())
            .update_repo(self.clone())
            .settings_repo(self.clone())
            .jwt_service(Self::jwt())
            .revalidator(self.clone())
            .build()
            .unwrap()
    }

    /// Make every subsequent store call fail
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn lookup_calls(&self) -> usize {
        self.calls.account_lookups()
            + self.calls.campus_lookups()
            + self.calls.reaction_lookups()
            + self.calls.upvote_lookups()
    }

    pub fn revalidated(&self) -> Vec<String> {
        self.revalidated.lock().unwrap().clone()
    }

    fn check(&self) -> RepoResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("store unavailable".to_string()));
        }
        Ok(())
    }

    fn tables(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    // === Seeding ===

    pub fn add_account(&self, account: Account) -> Account {
        self.tables().accounts.push(account.clone());
        account
    }

    pub fn add_campus(&self, name: &str) -> Campus {
        let campus = Campus::new(Uuid::new_v4(), name.to_string());
        self.tables().campuses.push(campus.clone());
        campus
    }

    pub fn add_feedback(&self, author: &Account, campus_id: Option<Uuid>) -> FeedbackItem {
        self.insert_feedback(FeedbackItem::new(
            "Subject".to_string(),
            "Description".to_string(),
            "general".to_string(),
            author.id,
            campus_id,
        ))
    }

    pub fn insert_feedback(&self, item: FeedbackItem) -> FeedbackItem {
        self.tables().feedback.push(item.clone());
        item
    }

    pub fn add_reaction(&self, target_id: Uuid, kind: ReactionTarget, emoji: &str, user_id: Uuid) -> Reaction {
        let reaction = Reaction::new(target_id, kind, emoji.to_string(), user_id);
        self.tables().reactions.push(reaction.clone());
        reaction
    }

    pub fn add_update(&self, author: &Account, college_id: Option<Uuid>) -> DailyUpdate {
        self.insert_update(DailyUpdate::new(author.id, "Shipped the lab report".to_string(), college_id))
    }

    pub fn insert_update(&self, update: DailyUpdate) -> DailyUpdate {
        self.tables().updates.push(update.clone());
        update
    }

    pub fn add_upvote_for(&self, update_id: Uuid, user_id: Uuid) {
        let mut tables = self.tables();
        tables.upvotes.push((update_id, user_id));
        if let Some(update) = tables.updates.iter_mut().find(|u| u.id == update_id) {
            update.upvote_count += 1;
        }
    }

    pub fn feedback_by_id(&self, id: Uuid) -> Option<FeedbackItem> {
        self.tables().feedback.iter().find(|f| f.id == id).cloned()
    }

    pub fn account_by_id(&self, id: Uuid) -> Option<Account> {
        self.tables().accounts.iter().find(|a| a.id == id).cloned()
    }

    pub fn update_by_id(&self, id: Uuid) -> Option<DailyUpdate> {
        self.tables().updates.iter().find(|u| u.id == id).cloned()
    }
}

fn in_window(at: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    at >= start && at < end
}

fn page<T>(rows: Vec<T>, offset: i64, limit: u32) -> Vec<T> {
    rows.into_iter()
        .skip(usize::try_from(offset).unwrap_or(0))
        .take(limit as usize)
        .collect()
}

impl Revalidator for MemoryStore {
    fn revalidate(&self, path: &str) {
        self.revalidated.lock().unwrap().push(path.to_string());
    }
}

#[async_trait]
impl AccountRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Account>> {
        self.check()?;
        Ok(self.tables().accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Account>> {
        CallCounter::bump(&self.calls.account);
        self.check()?;
        Ok(self
            .tables()
            .accounts
            .iter()
            .filter(|a| ids.contains(&a.id))
            .cloned()
            .collect())
    }

    async fn update_profile(&self, account: &Account) -> RepoResult<()> {
        CallCounter::bump(&self.calls.writes);
        self.check()?;
        let mut tables = self.tables();
        let stored = tables
            .accounts
            .iter_mut()
            .find(|a| a.id == account.id)
            .ok_or(DomainError::AccountNotFound(account.id))?;
        stored.full_name = account.full_name.clone();
        stored.bio = account.bio.clone();
        stored.profile_image_url = account.profile_image_url.clone();
        Ok(())
    }

    async fn find_directory(&self, query: &DirectoryQuery) -> RepoResult<(Vec<Account>, i64)> {
        CallCounter::bump(&self.calls.account);
        self.check()?;
        let search = query.search.as_ref().map(|s| s.to_lowercase());
        let mut rows: Vec<_> = self
            .tables()
            .accounts
            .iter()
            .filter(|a| query.role.map_or(true, |role| a.role == role))
            .filter(|a| query.district_id.map_or(true, |id| a.district_id == Some(id)))
            .filter(|a| query.campus_id.map_or(true, |id| a.campus_id == Some(id)))
            .filter(|a| {
                search.as_ref().map_or(true, |s| {
                    a.full_name.to_lowercase().contains(s)
                        || a.email.as_ref().is_some_and(|e| e.to_lowercase().contains(s))
                })
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.full_name.cmp(&b.full_name).then(a.id.cmp(&b.id)));
        let total = rows.len() as i64;
        Ok((page(rows, query.offset(), query.limit), total))
    }
}

#[async_trait]
impl CampusRepository for MemoryStore {
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Campus>> {
        CallCounter::bump(&self.calls.campus);
        self.check()?;
        Ok(self
            .tables()
            .campuses
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }
}

fn scoped_feedback(tables: &Tables, status: StatusFilter, scope: &FeedbackScope) -> Vec<FeedbackItem> {
    tables
        .feedback
        .iter()
        .filter(|f| scope.admits(f.campus_id))
        .filter(|f| match status {
            StatusFilter::All => true,
            StatusFilter::Only(s) => f.status == s,
        })
        .cloned()
        .collect()
}

#[async_trait]
impl FeedbackRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<FeedbackItem>> {
        self.check()?;
        Ok(self.feedback_by_id(id))
    }

    async fn find_page(&self, query: &FeedbackQuery) -> RepoResult<(Vec<FeedbackItem>, i64)> {
        CallCounter::bump(&self.calls.feedback_reads);
        self.check()?;
        let mut rows = scoped_feedback(&self.tables(), query.status, &query.scope);
        rows.sort_by_key(|f| (f.created_at, f.id));
        if !query.sort.is_ascending() {
            rows.reverse();
        }
        let total = rows.len() as i64;
        Ok((page(rows, query.offset(), query.limit), total))
    }

    async fn list_statuses(&self, scope: &FeedbackScope) -> RepoResult<Vec<FeedbackStatus>> {
        CallCounter::bump(&self.calls.feedback_reads);
        self.check()?;
        Ok(scoped_feedback(&self.tables(), StatusFilter::All, scope)
            .into_iter()
            .map(|f| f.status)
            .collect())
    }

    async fn find_by_author(&self, author_id: Uuid) -> RepoResult<Vec<FeedbackItem>> {
        self.check()?;
        let mut rows: Vec<_> = self
            .tables()
            .feedback
            .iter()
            .filter(|f| f.created_by == author_id)
            .cloned()
            .collect();
        rows.sort_by_key(|f| std::cmp::Reverse(f.created_at));
        Ok(rows)
    }

    async fn create(&self, feedback: &FeedbackItem) -> RepoResult<()> {
        CallCounter::bump(&self.calls.writes);
        self.check()?;
        self.tables().feedback.push(feedback.clone());
        Ok(())
    }

    async fn update_status(&self, id: Uuid, status: FeedbackStatus) -> RepoResult<bool> {
        CallCounter::bump(&self.calls.writes);
        self.check()?;
        let mut tables = self.tables();
        Ok(match tables.feedback.iter_mut().find(|f| f.id == id) {
            Some(item) => {
                item.status = status;
                true
            }
            None => false,
        })
    }
}

#[async_trait]
impl ReplyRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<FeedbackReply>> {
        self.check()?;
        Ok(self.tables().replies.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_feedback(&self, feedback_id: Uuid) -> RepoResult<Vec<FeedbackReply>> {
        self.check()?;
        let mut rows: Vec<_> = self
            .tables()
            .replies
            .iter()
            .filter(|r| r.feedback_id == feedback_id)
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.created_at);
        Ok(rows)
    }

    async fn create(&self, reply: &FeedbackReply) -> RepoResult<()> {
        CallCounter::bump(&self.calls.writes);
        self.check()?;
        let mut tables = self.tables();
        if !tables.feedback.iter().any(|f| f.id == reply.feedback_id) {
            return Err(DomainError::FeedbackNotFound(reply.feedback_id));
        }
        tables.replies.push(reply.clone());
        Ok(())
    }
}

#[async_trait]
impl ReactionRepository for MemoryStore {
    async fn find_by_targets(&self, target_ids: &[Uuid]) -> RepoResult<Vec<Reaction>> {
        CallCounter::bump(&self.calls.reaction);
        self.check()?;
        Ok(self
            .tables()
            .reactions
            .iter()
            .filter(|r| target_ids.contains(&r.target_id))
            .cloned()
            .collect())
    }

    async fn toggle(&self, reaction: &Reaction) -> RepoResult<bool> {
        CallCounter::bump(&self.calls.writes);
        self.check()?;
        let mut tables = self.tables();
        let before = tables.reactions.len();
        tables.reactions.retain(|r| {
            !(r.target_id == reaction.target_id && r.user_id == reaction.user_id && r.emoji == reaction.emoji)
        });
        if tables.reactions.len() < before {
            return Ok(false);
        }
        tables.reactions.push(reaction.clone());
        Ok(true)
    }

    async fn count(&self, target_id: Uuid, emoji: &str) -> RepoResult<i64> {
        self.check()?;
        Ok(self
            .tables()
            .reactions
            .iter()
            .filter(|r| r.target_id == target_id && r.emoji == emoji)
            .count() as i64)
    }
}

#[async_trait]
impl DailyUpdateRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<DailyUpdate>> {
        self.check()?;
        Ok(self.update_by_id(id))
    }

    async fn search(&self, search: &UpdateSearch) -> RepoResult<(Vec<DailyUpdate>, i64)> {
        self.check()?;
        let tables = self.tables();
        let college_id = match &search.college {
            Some(name) => match tables.campuses.iter().find(|c| &c.name == name) {
                Some(campus) => Some(campus.id),
                None => return Ok((Vec::new(), 0)),
            },
            None => None,
        };
        let keyword = search.keyword.as_ref().map(|k| k.to_lowercase());
        let window = search.date_window();

        let mut rows: Vec<_> = tables
            .updates
            .iter()
            .filter(|u| keyword.as_ref().map_or(true, |k| u.content.to_lowercase().contains(k)))
            .filter(|u| college_id.map_or(true, |id| u.college_id == Some(id)))
            .filter(|u| window.map_or(true, |(start, end)| in_window(u.created_at, start, end)))
            .cloned()
            .collect();
        match search.sort {
            UpdateSort::Recent => rows.sort_by_key(|u| std::cmp::Reverse((u.created_at, u.id))),
            UpdateSort::Oldest => rows.sort_by_key(|u| (u.created_at, u.id)),
            UpdateSort::Upvotes => rows.sort_by_key(|u| std::cmp::Reverse((u.upvote_count, u.created_at, u.id))),
        }
        let total = rows.len() as i64;
        Ok((page(rows, search.offset(), search.limit), total))
    }

    async fn exists_between(&self, user_id: Uuid, start: DateTime<Utc>, end: DateTime<Utc>) -> RepoResult<bool> {
        self.check()?;
        Ok(self
            .tables()
            .updates
            .iter()
            .any(|u| u.user_id == user_id && in_window(u.created_at, start, end)))
    }

    async fn create(&self, update: &DailyUpdate) -> RepoResult<()> {
        CallCounter::bump(&self.calls.writes);
        self.check()?;
        self.tables().updates.push(update.clone());
        Ok(())
    }

    async fn find_by_author(&self, user_id: Uuid, limit: i64) -> RepoResult<Vec<DailyUpdate>> {
        self.check()?;
        let mut rows: Vec<_> = self
            .tables()
            .updates
            .iter()
            .filter(|u| u.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by_key(|u| std::cmp::Reverse(u.created_at));
        rows.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(rows)
    }

    async fn find_upvoted(&self, user_id: Uuid, update_ids: &[Uuid]) -> RepoResult<Vec<Uuid>> {
        CallCounter::bump(&self.calls.upvoted);
        self.check()?;
        Ok(self
            .tables()
            .upvotes
            .iter()
            .filter(|(update, user)| *user == user_id && update_ids.contains(update))
            .map(|(update, _)| *update)
            .collect())
    }

    async fn add_upvote(&self, update_id: Uuid, user_id: Uuid) -> RepoResult<i32> {
        CallCounter::bump(&self.calls.writes);
        self.check()?;
        let mut tables = self.tables();
        if !tables.updates.iter().any(|u| u.id == update_id) {
            return Err(DomainError::UpdateNotFound(update_id));
        }
        if tables.upvotes.contains(&(update_id, user_id)) {
            return Err(DomainError::AlreadyUpvoted);
        }
        tables.upvotes.push((update_id, user_id));
        let update = tables
            .updates
            .iter_mut()
            .find(|u| u.id == update_id)
            .ok_or(DomainError::UpdateNotFound(update_id))?;
        update.upvote_count += 1;
        Ok(update.upvote_count)
    }

    async fn remove_upvote(&self, update_id: Uuid, user_id: Uuid) -> RepoResult<i32> {
        CallCounter::bump(&self.calls.writes);
        self.check()?;
        let mut tables = self.tables();
        let before = tables.upvotes.len();
        tables.upvotes.retain(|vote| *vote != (update_id, user_id));
        let removed = tables.upvotes.len() < before;
        let update = tables
            .updates
            .iter_mut()
            .find(|u| u.id == update_id)
            .ok_or(DomainError::UpdateNotFound(update_id))?;
        if removed {
            update.upvote_count = (update.upvote_count - 1).max(0);
        }
        Ok(update.upvote_count)
    }
}

#[async_trait]
impl SettingsRepository for MemoryStore {
    async fn get(&self) -> RepoResult<Option<AdminSettings>> {
        self.check()?;
        Ok(self.tables().settings.clone())
    }

    async fn upsert(&self, settings: &AdminSettings) -> RepoResult<AdminSettings> {
        CallCounter::bump(&self.calls.writes);
        self.check()?;
        self.tables().settings = Some(settings.clone());
        Ok(settings.clone())
    }
}
