// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OAuth2 bearer tokens for the Data API.

use std::fmt;
use std::sync::Arc;

use ga4_common_config::{Secret, SecretString};
use gcp_auth::{CustomServiceAccount, TokenProvider};
use tokio::sync::OnceCell;
use tracing::{debug, error};

use crate::error::DataApiError;

pub const ANALYTICS_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/analytics.readonly";

/// Where bearer tokens come from.
#[derive(Clone)]
pub enum ApiAuth {
	/// Service-account key JSON. Tokens are minted and cached by `gcp_auth`.
	ServiceAccount(Arc<CustomServiceAccount>),
	/// Application Default Credentials, resolved on first use.
	ApplicationDefault(Arc<OnceCell<Arc<dyn TokenProvider>>>),
	/// A token obtained elsewhere, sent as-is.
	AccessToken(SecretString),
}

impl ApiAuth {
	/// Parses a service-account key. Fails if the JSON is not a usable key.
	pub fn service_account_json(json: &str) -> Result<Self, DataApiError> {
		let account = CustomServiceAccount::from_json(json).map_err(|e| {
			error!(error = %e, "Failed to load service account key");
			DataApiError::Auth(format!("invalid service account key: {e}"))
		})?;
		Ok(ApiAuth::ServiceAccount(Arc::new(account)))
	}

	pub fn application_default() -> Self {
		ApiAuth::ApplicationDefault(Arc::new(OnceCell::new()))
	}

	pub fn access_token(token: impl Into<String>) -> Self {
		ApiAuth::AccessToken(Secret::new(token.into()))
	}

	pub fn kind(&self) -> &'static str {
		match self {
			ApiAuth::ServiceAccount(_) => "service_account",
			ApiAuth::ApplicationDefault(_) => "application_default",
			ApiAuth::AccessToken(_) => "access_token",
		}
	}

	pub(crate) async fn bearer_token(&self) -> Result<SecretString, DataApiError> {
		match self {
			ApiAuth::AccessToken(token) => Ok(token.clone()),
			ApiAuth::ServiceAccount(account) => token_from(account.as_ref()).await,
			ApiAuth::ApplicationDefault(cell) => {
				let provider = cell
					.get_or_try_init(|| async {
						debug!("Initializing Application Default Credentials");
						gcp_auth::provider().await.map_err(|e| {
							error!(error = %e, "Failed to initialize GCP auth");
							DataApiError::Auth(format!("GCP auth initialization failed: {e}"))
						})
					})
					.await?;
				token_from(provider.as_ref()).await
			}
		}
	}
}

async fn token_from(provider: &dyn TokenProvider) -> Result<SecretString, DataApiError> {
	let token = provider
		.token(&[ANALYTICS_READONLY_SCOPE])
		.await
		.map_err(|e| {
			error!(error = %e, "Failed to get GCP access token");
			DataApiError::Auth(format!("GCP token acquisition failed: {e}"))
		})?;
	Ok(Secret::new(token.as_str().to_string()))
}

impl fmt::Debug for ApiAuth {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ApiAuth").field(&self.kind()).finish()
	}
}
