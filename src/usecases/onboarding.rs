use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::domain::{
    entities::{mixes::MixEntity, packages::PackageEntity, video_rates::VideoRateEntity},
    repositories::creator_program::CreatorProgramRepository,
};

#[derive(Debug, Error)]
pub enum OnboardingError {
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl OnboardingError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub type OnboardingResult<T> = std::result::Result<T, OnboardingError>;

#[derive(Debug, Serialize)]
pub struct OnboardingOptionsDto {
    pub packages: Vec<PackageEntity>,
    pub mixes: Vec<MixEntity>,
}

/// Reference data shown on the public apply/login pages.
#[derive(Debug, Serialize)]
pub struct MarketingDataDto {
    pub packages: Vec<PackageEntity>,
    pub mixes: Vec<MixEntity>,
    pub video_rates: Vec<VideoRateEntity>,
}

pub struct OnboardingUseCase<R>
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    repository: Arc<R>,
}

impl<R> OnboardingUseCase<R>
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Packages and mixes are independent reference reads; neither gates
    /// the other, so they run concurrently.
    pub async fn onboarding_options(&self) -> OnboardingResult<OnboardingOptionsDto> {
        let (packages, mixes) = tokio::join!(
            self.repository.list_packages(),
            self.repository.list_mixes(),
        );

        let packages = packages.map_err(|err| {
            error!(db_error = ?err, "onboarding: failed to list packages");
            OnboardingError::Internal(err)
        })?;
        let mixes = mixes.map_err(|err| {
            error!(db_error = ?err, "onboarding: failed to list mixes");
            OnboardingError::Internal(err)
        })?;

        info!(
            package_count = packages.len(),
            mix_count = mixes.len(),
            "onboarding: options loaded"
        );

        Ok(OnboardingOptionsDto { packages, mixes })
    }

    pub async fn marketing_data(&self) -> OnboardingResult<MarketingDataDto> {
        let (packages, mixes, video_rates) = tokio::join!(
            self.repository.list_packages(),
            self.repository.list_mixes(),
            self.repository.list_video_rates(),
        );

        let packages = packages.map_err(|err| {
            error!(db_error = ?err, "onboarding: failed to list packages");
            OnboardingError::Internal(err)
        })?;
        let mixes = mixes.map_err(|err| {
            error!(db_error = ?err, "onboarding: failed to list mixes");
            OnboardingError::Internal(err)
        })?;
        let video_rates = video_rates.map_err(|err| {
            error!(db_error = ?err, "onboarding: failed to list video rates");
            OnboardingError::Internal(err)
        })?;

        Ok(MarketingDataDto {
            packages,
            mixes,
            video_rates,
        })
    }
}
