//! Outreach channels: calls, phonebanks, texts, textbanks and blasts.

use fetch_core::{ApiError, FetchRequest, FetchResponse, Params};
use serde::Serialize;
use serde_json::Value;

use crate::catalog;
use crate::client::{by_id, SolidarityTech};
use crate::types::{CallList, ResourceId, TextList};

impl SolidarityTech {
    /// Retrieves all calls.
    pub async fn get_calls(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<CallList>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_CALLS, request).await
    }

    /// Lists email blasts.
    pub async fn get_email_blasts(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_EMAIL_BLASTS, request).await
    }

    /// Shows a single email blast.
    pub async fn get_email_blasts_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::GET_EMAIL_BLASTS_ID, by_id(id)).await
    }

    /// Lists phonebanks.
    pub async fn get_phonebanks(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_PHONEBANKS, request).await
    }

    /// Shows a single phonebank.
    pub async fn get_phonebanks_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::GET_PHONEBANKS_ID, by_id(id)).await
    }

    /// Lists scheduled calls.
    pub async fn get_scheduled_calls(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_SCHEDULED_CALLS, request).await
    }

    /// Shows a single scheduled call.
    pub async fn get_scheduled_calls_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::GET_SCHEDULED_CALLS_ID, by_id(id)).await
    }

    /// Lists text blasts.
    pub async fn get_text_blasts(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_TEXT_BLASTS, request).await
    }

    /// Shows a single text blast.
    pub async fn get_text_blasts_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::GET_TEXT_BLASTS_ID, by_id(id)).await
    }

    /// Lists text templates.
    pub async fn get_text_templates(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_TEXT_TEMPLATES, request).await
    }

    /// Creates a text template with the specified details.
    pub async fn post_text_templates<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().json(body)?;
        self.call(&catalog::POST_TEXT_TEMPLATES, request).await
    }

    /// Shows a single text template.
    pub async fn get_text_templates_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::GET_TEXT_TEMPLATES_ID, by_id(id)).await
    }

    /// Updates a text template with the specified details.
    pub async fn put_text_templates_id<B: Serialize + ?Sized>(
        &self,
        body: &B,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = by_id(id).json(body)?;
        self.call(&catalog::PUT_TEXT_TEMPLATES_ID, request).await
    }

    /// Deletes a text template with the specified ID.
    pub async fn delete_text_templates_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::DELETE_TEXT_TEMPLATES_ID, by_id(id)).await
    }

    /// Lists textbanks.
    pub async fn get_textbanks(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_TEXTBANKS, request).await
    }

    /// Shows a single textbank.
    pub async fn get_textbanks_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::GET_TEXTBANKS_ID, by_id(id)).await
    }

    /// Sends a text message.
    ///
    /// The message is described entirely by query parameters; no body is
    /// sent.
    pub async fn post_texts(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::POST_TEXTS, request).await
    }

    /// Retrieves a list of texts.
    ///
    /// With empty params the request is a bare `GET /texts`.
    pub async fn get_texts(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<TextList>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_TEXTS, request).await
    }
}
