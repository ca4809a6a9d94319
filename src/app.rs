use std::sync::Arc;

use anyhow::Result;

use crate::config::Settings;
use crate::http::HttpClient;
use crate::session::{FileTokenStore, Navigator, Session, TokenStore};

/// Client context built once at startup and handed to the controllers.
/// Replaces the module-scope globals of the browser original.
#[derive(Clone)]
pub struct App {
    pub settings: Settings,
    pub session: Session,
    pub http: HttpClient,
}

impl App {
    pub fn new(
        settings: Settings,
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let session = Session::new(store, navigator);
        let http = HttpClient::new(
            settings.api_base_url.clone(),
            settings.http_timeout_seconds,
            session.clone(),
        )?;

        Ok(Self {
            settings,
            session,
            http,
        })
    }

    /// Context with the durable on-disk token store.
    pub fn with_file_store(settings: Settings, navigator: Arc<dyn Navigator>) -> Result<Self> {
        let path = match &settings.credentials_path {
            Some(path) => path.clone(),
            None => FileTokenStore::default_path()?,
        };
        Self::new(settings, Arc::new(FileTokenStore::new(path)), navigator)
    }
}
