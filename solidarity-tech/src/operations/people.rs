//! People and organization data: users, their actions, notes and lists,
//! chapters, custom properties, pages and team members.

use fetch_core::{ApiError, FetchRequest, FetchResponse, Params};
use serde_json::Value;

use crate::catalog;
use crate::client::{by_id, SolidarityTech};
use crate::types::{
    ActivityList, ChapterList, CustomUserPropertyList, ResourceId, UserActionInput, UserInput,
    UserList,
};

impl SolidarityTech {
    /// Retrieves all activities.
    pub async fn get_activities(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<ActivityList>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_ACTIVITIES, request).await
    }

    /// Lists chapter phone numbers.
    pub async fn get_chapter_phone_numbers(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_CHAPTER_PHONE_NUMBERS, request).await
    }

    /// Retrieves all chapters.
    pub async fn get_chapters(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<ChapterList>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_CHAPTERS, request).await
    }

    /// Retrieves all custom user properties.
    pub async fn get_custom_user_properties(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<CustomUserPropertyList>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_CUSTOM_USER_PROPERTIES, request).await
    }

    /// Lists organizations.
    pub async fn get_organizations(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_ORGANIZATIONS, request).await
    }

    /// Shows a single organization.
    pub async fn get_organizations_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::GET_ORGANIZATIONS_ID, by_id(id)).await
    }

    /// Lists pages.
    pub async fn get_pages(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_PAGES, request).await
    }

    /// Shows a single page.
    pub async fn get_pages_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::GET_PAGES_ID, by_id(id)).await
    }

    /// Lists team members.
    pub async fn get_team_members(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_TEAM_MEMBERS, request).await
    }

    /// Creates a user action for a user. Note: This endpoint cannot be used for
    /// creating actions related to donation pages or scheduled call pages.
    pub async fn post_user_actions(
        &self,
        body: &UserActionInput,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().json(body)?;
        self.call(&catalog::POST_USER_ACTIONS, request).await
    }

    /// Lists user lists.
    pub async fn get_user_lists(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_USER_LISTS, request).await
    }

    /// Shows a single user list.
    pub async fn get_user_lists_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::GET_USER_LISTS_ID, by_id(id)).await
    }

    /// Creates a user note.
    ///
    /// Like [`SolidarityTech::post_texts`], this operation takes query
    /// parameters only.
    pub async fn post_user_notes(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::POST_USER_NOTES, request).await
    }

    /// Creates or updates a user.
    pub async fn post_users(
        &self,
        body: &UserInput,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().json(body)?;
        self.call(&catalog::POST_USERS, request).await
    }

    /// Retrieves a list of users.
    ///
    /// Paging uses `_limit` and `_offset`; other filters are passed through
    /// as query parameters.
    ///
    /// ## Examples
    ///
    /// ```rust,no_run
    /// use solidarity_tech::{ListParams, SolidarityTech};
    ///
    /// # async fn run(sdk: SolidarityTech) -> Result<(), fetch_core::ApiError> {
    /// let page = sdk
    ///     .get_users(ListParams::new().limit(50).filter("email", "ada@example.org"))
    ///     .await?;
    /// if let Some(users) = page.success() {
    ///     println!("{} users", users.data.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_users(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<UserList>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_USERS, request).await
    }

    /// Updates a user.
    pub async fn put_users_id(
        &self,
        body: &UserInput,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = by_id(id).json(body)?;
        self.call(&catalog::PUT_USERS_ID, request).await
    }
}
