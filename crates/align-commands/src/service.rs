//! Alignment command handlers
//!
//! Each handler follows the same cycle:
//! 1. Resolve the community from the context
//! 2. Take the community lock (mutating commands only)
//! 3. Load bytes, parse into a chart
//! 4. Apply one pure mutation
//! 5. Serialize and save
//!
//! Display names and avatars are taken from the context at call time; the
//! service never looks them up.

use crate::context::{CommandContext, Member, Reply};
use crate::error::{CommandError, CommandResult};
use align_model::{
    authorize_set, parse, remove_user, render_lines, serialize, set_user, AlignmentCategory, Chart,
};
use align_store::{ChartStore, CommunityId, CommunityLocks};
use tokio::sync::OwnedMutexGuard;

/// Front-end facing command set for alignment charts
#[derive(Debug)]
pub struct AlignmentService<S> {
    store: S,
    locks: CommunityLocks,
}

impl<S: ChartStore> AlignmentService<S> {
    /// Create service over a store
    #[inline]
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: CommunityLocks::new(),
        }
    }

    /// Underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current chart of the invoker's community
    ///
    /// # Errors
    /// [`CommandError::NotInCommunityContext`] outside a community, otherwise
    /// store or decode failures.
    pub async fn chart(&self, ctx: &CommandContext) -> CommandResult<Chart> {
        let community = require_community(ctx)?;
        self.load_chart(community).await
    }

    /// Render the community's chart, one line per member
    ///
    /// # Errors
    /// As [`AlignmentService::chart`].
    pub async fn show(&self, ctx: &CommandContext) -> CommandResult<Reply> {
        let chart = self.chart(ctx).await?;
        Ok(Reply::ephemeral(render_lines(&chart)))
    }

    /// Set the invoker's own alignment
    ///
    /// # Errors
    /// [`CommandError::NotInCommunityContext`] outside a community, otherwise
    /// store or codec failures.
    pub async fn set(
        &self,
        ctx: &CommandContext,
        alignment: AlignmentCategory,
    ) -> CommandResult<Reply> {
        let community = require_community(ctx)?;
        let _guard = self.exclusive(community).await;

        let chart = self.load_chart(community).await?;
        let updated = apply_set(&chart, &ctx.invoker, alignment);
        self.save_chart(community, &updated).await?;

        tracing::info!(%community, user = %ctx.invoker.id, %alignment, "alignment set");
        Ok(Reply::ephemeral(format!("Alignment set to **{alignment}**.")))
    }

    /// Remove the invoker's alignment
    ///
    /// Succeeds even when the invoker had no entry.
    ///
    /// # Errors
    /// [`CommandError::NotInCommunityContext`] outside a community, otherwise
    /// store or codec failures.
    pub async fn remove(&self, ctx: &CommandContext) -> CommandResult<Reply> {
        let community = require_community(ctx)?;
        let _guard = self.exclusive(community).await;

        let chart = self.load_chart(community).await?;
        let updated = remove_user(&chart, ctx.invoker.id.as_str());
        self.save_chart(community, &updated).await?;

        tracing::info!(
            %community,
            user = %ctx.invoker.id,
            existed = chart.contains_user(ctx.invoker.id.as_str()),
            "alignment removed"
        );
        Ok(Reply::ephemeral("Your alignment has been removed."))
    }

    /// Set the alignment of `target`, or of the invoker when `target` is
    /// `None`
    ///
    /// Overwriting another member's existing entry requires the invoker to
    /// be an admin of the chart.
    ///
    /// # Errors
    /// [`CommandError::UnauthorizedMutation`] when the overwrite rule
    /// refuses the change; nothing is written in that case.
    pub async fn set_other(
        &self,
        ctx: &CommandContext,
        alignment: AlignmentCategory,
        target: Option<&Member>,
    ) -> CommandResult<Reply> {
        let community = require_community(ctx)?;
        let target = target.unwrap_or(&ctx.invoker);
        let _guard = self.exclusive(community).await;

        let chart = self.load_chart(community).await?;
        if let Err(source) = authorize_set(&chart, &ctx.invoker.id, &target.id) {
            tracing::warn!(
                %community,
                actor = %ctx.invoker.id,
                target = %target.id,
                "refused overwrite of existing alignment"
            );
            return Err(CommandError::UnauthorizedMutation {
                target_name: target.display_name.clone(),
                source,
            });
        }

        let updated = apply_set(&chart, target, alignment);
        self.save_chart(community, &updated).await?;

        tracing::info!(
            %community,
            actor = %ctx.invoker.id,
            target = %target.id,
            %alignment,
            "alignment set for member"
        );

        let text = if target.id == ctx.invoker.id {
            format!("Your alignment set to **{alignment}**.")
        } else {
            format!(
                "Alignment for **{}** set to **{alignment}**.",
                target.display_name
            )
        };
        Ok(Reply::ephemeral(text))
    }

    async fn exclusive(&self, community: &CommunityId) -> OwnedMutexGuard<()> {
        let guard = self.locks.lock(community).await;
        self.locks.prune();
        guard
    }

    async fn load_chart(&self, community: &CommunityId) -> CommandResult<Chart> {
        let bytes = self.store.load(community).await.map_err(|e| {
            tracing::error!(%community, error = %e, "failed to load chart");
            e
        })?;
        let chart = parse(&bytes).map_err(|e| {
            tracing::error!(%community, error = %e, "stored chart is malformed");
            CommandError::from(e)
        })?;

        let unreadable = chart.unreadable_ids().count();
        if unreadable > 0 {
            tracing::warn!(%community, unreadable, "chart has entries that could not be decoded");
        }
        Ok(chart)
    }

    async fn save_chart(&self, community: &CommunityId, chart: &Chart) -> CommandResult<()> {
        let bytes = serialize(chart)?;
        self.store.save(community, &bytes).await.map_err(|e| {
            tracing::error!(%community, error = %e, "failed to save chart");
            CommandError::from(e)
        })
    }
}

fn require_community(ctx: &CommandContext) -> CommandResult<&CommunityId> {
    ctx.community
        .as_ref()
        .ok_or(CommandError::NotInCommunityContext)
}

fn apply_set(chart: &Chart, member: &Member, alignment: AlignmentCategory) -> Chart {
    set_user(
        chart,
        &member.id,
        alignment,
        member.display_name.as_str(),
        member.avatar_url.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use align_store::MemoryChartStore;

    fn ctx(user: &str, name: &str) -> CommandContext {
        CommandContext::in_community(CommunityId::from(1_u64), Member::new(user, name))
    }

    #[tokio::test]
    async fn show_on_fresh_community() {
        let service = AlignmentService::new(MemoryChartStore::new());
        let reply = service.show(&ctx("1", "Alice")).await.unwrap();
        assert_eq!(reply, Reply::ephemeral("No alignments set yet."));
    }

    #[tokio::test]
    async fn set_persists_through_store() {
        let service = AlignmentService::new(MemoryChartStore::new());
        let reply = service
            .set(&ctx("1", "Alice"), AlignmentCategory::NeutralGood)
            .await
            .unwrap();
        assert_eq!(reply.text, "Alignment set to **Neutral Good**.");
        assert!(reply.ephemeral);

        let stored = service.store().get(&CommunityId::from(1_u64)).unwrap();
        let chart = parse(&stored).unwrap();
        assert_eq!(chart.get("1").unwrap().display_name, "Alice");
    }

    #[tokio::test]
    async fn direct_message_is_rejected_before_io() {
        let service = AlignmentService::new(MemoryChartStore::new());
        let err = service
            .set(
                &CommandContext::direct(Member::new("1", "Alice")),
                AlignmentCategory::LawfulGood,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::NotInCommunityContext));
        assert!(service.store().is_empty());
    }

    #[tokio::test]
    async fn idle_community_locks_are_released() {
        let service = AlignmentService::new(MemoryChartStore::new());
        for community in 1..=5_u64 {
            let ctx = CommandContext::in_community(
                CommunityId::from(community),
                Member::new("1", "Alice"),
            );
            service.set(&ctx, AlignmentCategory::LawfulGood).await.unwrap();
        }
        assert!(service.locks.len() <= 1);
        assert_eq!(service.store().len(), 5);
    }
}
