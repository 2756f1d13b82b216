use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::domain::{
    entities::monthly_trackings::MonthlyTrackingEntity,
    repositories::creator_program::CreatorProgramRepository,
    value_objects::{
        enums::{
            creator_statuses::CreatorStatus, tracking_payment_statuses::TrackingPaymentStatus,
        },
        payouts::PayoutBreakdown,
        tracking::{TrackingSummary, VideoTypeCount},
    },
};
use crate::usecases::{month_resolver, payout_calculator, tracking_summarizer};

#[derive(Debug, Error)]
pub enum CreatorDashboardError {
    #[error("creator not found")]
    CreatorNotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CreatorDashboardError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            CreatorDashboardError::CreatorNotFound => StatusCode::NOT_FOUND,
            CreatorDashboardError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type CreatorDashboardResult<T> = std::result::Result<T, CreatorDashboardError>;

#[derive(Debug, Serialize)]
pub struct MonthTrackingDto {
    pub tracking_id: Uuid,
    pub quotas: VideoTypeCount,
    pub delivered: VideoTypeCount,
    pub summary: TrackingSummary,
    pub payout: PayoutBreakdown,
    pub payment_status: TrackingPaymentStatus,
    pub paid_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct CreatorDashboardDto {
    pub handle: String,
    pub status: CreatorStatus,
    pub package_tier: i32,
    pub month: String,
    pub available_months: Vec<String>,
    pub tracking: Option<MonthTrackingDto>,
}

pub struct CreatorDashboardUseCase<R>
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    repository: Arc<R>,
}

impl<R> CreatorDashboardUseCase<R>
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves the month to display, then derives the quota summary and
    /// payout breakdown for it. A month without a tracking row yields a
    /// dashboard with no tracking section, not an error.
    pub async fn dashboard(
        &self,
        user_id: Uuid,
        requested_month: Option<&str>,
    ) -> CreatorDashboardResult<CreatorDashboardDto> {
        let creator = self
            .repository
            .find_creator_by_user_id(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "creator_dashboard: failed to load creator");
                CreatorDashboardError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%user_id, "creator_dashboard: no creator for user");
                CreatorDashboardError::CreatorNotFound
            })?;

        let trackings = self
            .repository
            .list_trackings_by_creator(creator.id)
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    creator_id = %creator.id,
                    db_error = ?err,
                    "creator_dashboard: failed to list trackings"
                );
                CreatorDashboardError::Internal(err)
            })?;

        let mut available_months: Vec<String> =
            trackings.iter().map(|tracking| tracking.month.clone()).collect();
        available_months.sort();

        let month = month_resolver::resolve_month(requested_month, &available_months);
        debug!(
            %user_id,
            month,
            requested = ?requested_month,
            "creator_dashboard: month resolved"
        );

        let tracking = match trackings.into_iter().find(|tracking| tracking.month == month) {
            Some(tracking) => Some(self.build_month_tracking(tracking).await?),
            None => None,
        };

        Ok(CreatorDashboardDto {
            handle: creator.handle,
            status: CreatorStatus::from_str(&creator.status),
            package_tier: creator.package_tier,
            month,
            available_months,
            tracking,
        })
    }

    async fn build_month_tracking(
        &self,
        tracking: MonthlyTrackingEntity,
    ) -> CreatorDashboardResult<MonthTrackingDto> {
        let rates = self.repository.list_video_rates().await.map_err(|err| {
            error!(
                tracking_id = %tracking.id,
                db_error = ?err,
                "creator_dashboard: failed to list video rates"
            );
            CreatorDashboardError::Internal(err)
        })?;

        let summary = tracking_summarizer::summarize_tracking(&tracking.quotas, &tracking.delivered);
        let payout =
            payout_calculator::calculate_payout(&tracking.delivered, &rates, tracking.monthly_credits);

        Ok(MonthTrackingDto {
            tracking_id: tracking.id,
            quotas: tracking.quotas,
            delivered: tracking.delivered,
            summary,
            payout,
            payment_status: TrackingPaymentStatus::from_str(&tracking.payment_status),
            paid_at: tracking.paid_at,
        })
    }
}
