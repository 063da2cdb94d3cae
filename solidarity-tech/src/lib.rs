//! Typed client for the Solidarity Tech REST API.
//!
//! [`SolidarityTech`] exposes one async method per vendor operation
//! (`get_users`, `put_users_id`, `post_event_rsvps`, ...). Each method looks
//! up its descriptor in the [`catalog`], checks the client's [`Profile`] and
//! forwards to the shared [`fetch_core`] client.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use solidarity_tech::{Profile, SolidarityTech, UserInput};
//!
//! # async fn run() -> Result<(), fetch_core::ApiError> {
//! let sdk = SolidarityTech::builder()
//!     .api_key("my-api-key")
//!     .profile(Profile::Lite)
//!     .build()?;
//!
//! let response = sdk
//!     .put_users_id(&UserInput::new().first_name("Ada"), 42)
//!     .await?;
//! if !response.is_success() {
//!     eprintln!("{}: {:?}", response.status, response.error_body());
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
mod client;
pub mod config;
mod operations;
pub mod profile;
pub mod types;

pub use client::{SolidarityTech, SolidarityTechBuilder};
pub use config::EnvConfig;
pub use fetch_core::{ApiError, ConfigOptions, FetchResponse, Params, ResponseData};
pub use profile::Profile;
pub use types::{
    Activity, ActivityList, Call, CallList, Chapter, ChapterList, CustomUserProperty,
    CustomUserPropertyList, ListMeta, ListParams, ListResponse, ResourceId, Text, TextList, User,
    UserActionInput, UserInput, UserList,
};
