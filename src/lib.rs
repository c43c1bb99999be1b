//! # senadb-client
//!
//! Guild-management client for the SenaDBs backend.
//!
//! ## Features
//!
//! - **Authenticated pipeline**: cookie session, one transparent renewal per call
//! - **Single-flight renewal**: concurrent 401s share one refresh request
//! - **Role matrix**: who may promote, demote, delegate or kick whom
//! - **Observable session**: `watch`-based store with an explicit lifecycle
//! - **Guild, profile and archive services** on top of the pipeline
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use senadb_client::{ClientConfig, SenaClient};
//! use senadb_client::core::guild::AutoConfirm;
//! use senadb_client::sdk::client::InMemoryNavigator;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_env()?;
//!     let client = SenaClient::new(config, Arc::new(InMemoryNavigator::new("/")))?;
//!
//!     client.auth().login("tester", "secret").await?;
//!
//!     let dispatcher = client.dispatcher(Arc::new(AutoConfirm));
//!     for member in client.members().list().await?.iter() {
//!         println!("{} {:?}", member.display_name(), dispatcher.available_actions(member));
//!     }
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod auth;
pub mod config;
pub mod core;
pub mod sdk;
pub mod utils;

// Re-export main types
pub use auth::{
    AuthService, Identity, ManagementAction, PermissionMatrix, Role, SessionState, SessionStore,
};
pub use config::ClientConfig;
pub use utils::error::{ClientError, Result};

use crate::config::Validate;
use crate::core::guild::{ActionDispatcher, Confirmer, GuildService, MemberDirectory};
use crate::core::{ArchiveService, UserService};
use crate::sdk::client::{HttpTransport, Navigator, RedirectPolicy, RequestPipeline, Transport};
use std::sync::Arc;
use tracing::info;

/// One signed-in client: a session, its pipeline and the services over it
pub struct SenaClient {
    config: ClientConfig,
    pipeline: Arc<RequestPipeline>,
    members: Arc<MemberDirectory>,
}

impl SenaClient {
    /// Client over HTTP; the session starts `Loading` until
    /// [`AuthService::bootstrap`] settles it
    pub fn new(config: ClientConfig, navigator: Arc<dyn Navigator>) -> Result<Self> {
        config.validate().map_err(ClientError::Config)?;
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self::with_transport(config, transport, navigator))
    }

    /// Client over any transport
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        info!(api = %config.api_base_url, "Creating client");
        let session = Arc::new(SessionStore::init());
        let policy = RedirectPolicy::new(&config.entry_path, &config.register_path);
        let pipeline = Arc::new(RequestPipeline::new(transport, session, navigator, policy));
        let members = Arc::new(MemberDirectory::new(
            pipeline.clone(),
            config.member_cache_ttl(),
        ));
        Self {
            config,
            pipeline,
            members,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        self.pipeline.session()
    }

    pub fn pipeline(&self) -> &Arc<RequestPipeline> {
        &self.pipeline
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.pipeline.clone())
    }

    pub fn members(&self) -> &Arc<MemberDirectory> {
        &self.members
    }

    pub fn guild(&self) -> GuildService {
        GuildService::new(self.pipeline.clone(), self.members.clone())
    }

    /// Dispatcher that asks `confirmer` before every action
    pub fn dispatcher(&self, confirmer: Arc<dyn Confirmer>) -> ActionDispatcher {
        ActionDispatcher::new(self.pipeline.clone(), self.members.clone(), confirmer)
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.pipeline.clone())
    }

    pub fn archive(&self) -> ArchiveService {
        ArchiveService::new(self.pipeline.clone())
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Client build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp, seconds since the epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
