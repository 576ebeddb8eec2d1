//! Engine loader for initializing providers from configuration

use super::google::GoogleCustomSearch;
use super::provider::EngineProvider;
use super::traits::{Engine, Provider};
use super::youtube::YouTube;
use crate::config::Settings;
use crate::network::HttpClient;
use std::sync::Arc;
use tracing::{info, warn};

/// The two providers a search runs against
pub struct Providers {
    pub video: Arc<dyn Provider>,
    pub web: Arc<dyn Provider>,
}

/// Loader for initializing providers from configuration
pub struct EngineLoader;

impl EngineLoader {
    /// Build the video and web providers from settings
    ///
    /// Missing credentials are not an error here; the affected provider
    /// fails when it is first used.
    pub fn load(settings: &Settings, client: &HttpClient) -> Providers {
        let youtube = YouTube::from_settings(&settings.providers.youtube);
        let google = GoogleCustomSearch::from_settings(&settings.providers.google);

        Self::check_credentials(&youtube, settings.providers.youtube.api_key.is_empty());
        Self::check_credentials(
            &google,
            settings.providers.google.api_key.is_empty()
                || settings.providers.google.search_engine_id.is_empty(),
        );

        let video = EngineProvider::new(Arc::new(youtube), client.clone())
            .with_max_results(settings.providers.youtube.max_results);
        let web = EngineProvider::new(Arc::new(google), client.clone())
            .with_max_results(settings.providers.google.max_results);

        info!("Loaded engines: youtube, google");

        Providers {
            video: Arc::new(video),
            web: Arc::new(web),
        }
    }

    fn check_credentials(engine: &dyn Engine, missing: bool) {
        if missing && engine.about().require_api_key {
            warn!(
                "Engine {} has no credentials configured, its searches will fail",
                engine.name()
            );
        }
    }
}
