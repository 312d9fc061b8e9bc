//! Feedback thread service
//!
//! Threads are visible to the feedback author and to anyone whose inbox
//! scope covers the item.

use campus_core::{
    can_view_inbox, Account, DomainError, FeedbackItem, FeedbackReply, FeedbackScope, Reaction, ReactionCount,
    ReactionTarget, MAX_MESSAGE_LENGTH, REACTION_EMOJIS,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::mappers::ReplyWithDetails;
use crate::dto::{
    FeedbackViewResponse, PostReplyRequest, ReactionCountResponse, ReplyResponse, ThreadResponse,
    ToggleReactionRequest, ToggleReactionResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::feedback::clean_text;
use super::join::{distinct_ids, BatchJoiner};
use super::revalidate::FEEDBACK_PATH;

fn can_access(caller: &Account, item: &FeedbackItem) -> bool {
    item.is_authored_by(caller.id) || FeedbackScope::for_caller(caller.role, caller.campus_id).admits(item.campus_id)
}

fn thread_path(feedback_id: Uuid) -> String {
    format!("{FEEDBACK_PATH}/{feedback_id}")
}

/// Feedback thread service
pub struct FeedbackThreadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedbackThreadService<'a> {
    /// Create a new FeedbackThreadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn load(&self, feedback_id: Uuid) -> ServiceResult<FeedbackItem> {
        Ok(self
            .ctx
            .feedback_repo()
            .find_by_id(feedback_id)
            .await?
            .ok_or(DomainError::FeedbackNotFound(feedback_id))?)
    }

    /// Feedback item, its replies, and reaction tallies for the caller
    #[instrument(skip(self, caller), fields(caller = %caller.id))]
    pub async fn thread(&self, caller: &Account, feedback_id: Uuid) -> ServiceResult<ThreadResponse> {
        let item = self.load(feedback_id).await?;
        if !can_access(caller, &item) {
            return Err(DomainError::FeedbackNotFound(feedback_id).into());
        }

        let replies = self.ctx.reply_repo().find_by_feedback(feedback_id).await?;
        let author_ids = distinct_ids(replies.iter().map(|r| r.user_id));
        let reply_ids = distinct_ids(replies.iter().map(|r| r.id));

        let joiner = BatchJoiner::new(self.ctx);
        let (mut views, authors, mut reactions) = tokio::try_join!(
            joiner.feedback_views(vec![item]),
            joiner.authors(&author_ids),
            joiner.reactions(&reply_ids),
        )?;

        let view = views
            .pop()
            .ok_or(DomainError::FeedbackNotFound(feedback_id))?;
        let reaction_counts = ReactionCount::tally(&view.reactions, caller.id)
            .into_iter()
            .map(ReactionCountResponse::from)
            .collect();

        let replies = replies
            .into_iter()
            .map(|reply| {
                let own = reactions.remove(&reply.id).unwrap_or_default();
                ReplyResponse::from(ReplyWithDetails {
                    author: authors.get(&reply.user_id).cloned(),
                    reactions: ReactionCount::tally(&own, caller.id),
                    reply,
                })
            })
            .collect();

        Ok(ThreadResponse {
            feedback: FeedbackViewResponse::from(view),
            reaction_counts,
            replies,
        })
    }

    /// Reply on a thread; replies from inbox roles are flagged as admin replies
    #[instrument(skip(self, caller, request), fields(caller = %caller.id))]
    pub async fn reply(
        &self,
        caller: &Account,
        feedback_id: Uuid,
        request: PostReplyRequest,
    ) -> ServiceResult<ReplyResponse> {
        let item = self.load(feedback_id).await?;
        if !can_access(caller, &item) {
            return Err(DomainError::NotThreadParticipant.into());
        }

        let message = clean_text("Message", &request.message, MAX_MESSAGE_LENGTH)?;
        let reply = FeedbackReply::new(feedback_id, caller.id, message, can_view_inbox(caller.role));
        self.ctx.reply_repo().create(&reply).await?;

        info!(
            feedback_id = %feedback_id,
            reply_id = %reply.id,
            is_admin_reply = reply.is_admin_reply,
            "Feedback reply posted"
        );
        self.ctx.revalidate(&thread_path(feedback_id));

        Ok(ReplyResponse::from(ReplyWithDetails {
            reply,
            author: Some(caller.summary()),
            reactions: Vec::new(),
        }))
    }

    /// Add the caller's reaction, or remove it if already present
    #[instrument(skip(self, caller), fields(caller = %caller.id))]
    pub async fn toggle_reaction(
        &self,
        caller: &Account,
        request: ToggleReactionRequest,
    ) -> ServiceResult<ToggleReactionResponse> {
        let ToggleReactionRequest {
            target_id,
            target_kind,
            emoji,
        } = request;

        if !REACTION_EMOJIS.contains(&emoji.as_str()) {
            return Err(DomainError::UnsupportedEmoji(emoji).into());
        }

        let feedback_id = match target_kind {
            ReactionTarget::Feedback => target_id,
            ReactionTarget::Reply => {
                self.ctx
                    .reply_repo()
                    .find_by_id(target_id)
                    .await?
                    .ok_or(DomainError::ReactionTargetNotFound(target_id))?
                    .feedback_id
            }
        };
        let item = self
            .ctx
            .feedback_repo()
            .find_by_id(feedback_id)
            .await?
            .ok_or(DomainError::ReactionTargetNotFound(target_id))?;
        if !can_access(caller, &item) {
            return Err(DomainError::NotThreadParticipant.into());
        }

        let reaction = Reaction::new(target_id, target_kind, emoji, caller.id);
        let added = self.ctx.reaction_repo().toggle(&reaction).await?;
        let count = self.ctx.reaction_repo().count(target_id, &reaction.emoji).await?;

        info!(
            target_id = %target_id,
            target_kind = %target_kind,
            emoji = %reaction.emoji,
            added,
            count,
            "Reaction toggled"
        );
        self.ctx.revalidate(&thread_path(feedback_id));

        Ok(ToggleReactionResponse { added, count })
    }
}
