//! Events, sessions, RSVPs and attendance.

use fetch_core::{ApiError, FetchRequest, FetchResponse, Params};
use serde::Serialize;
use serde_json::Value;

use crate::catalog;
use crate::client::{by_id, SolidarityTech};
use crate::types::ResourceId;

impl SolidarityTech {
    /// Lists event attendances.
    pub async fn get_event_attendances(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_EVENT_ATTENDANCES, request).await
    }

    /// Creates an event attendance with the specified details.
    pub async fn post_event_attendances<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().json(body)?;
        self.call(&catalog::POST_EVENT_ATTENDANCES, request).await
    }

    /// Lists event RSVPs.
    pub async fn get_event_rsvps(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_EVENT_RSVPS, request).await
    }

    /// Creates an event RSVP with the specified details.
    pub async fn post_event_rsvps<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().json(body)?;
        self.call(&catalog::POST_EVENT_RSVPS, request).await
    }

    /// Shows a single event RSVP.
    pub async fn get_event_rsvps_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::GET_EVENT_RSVPS_ID, by_id(id)).await
    }

    /// Updates an event RSVP with the specified details.
    pub async fn put_event_rsvps_id<B: Serialize + ?Sized>(
        &self,
        body: &B,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = by_id(id).json(body)?;
        self.call(&catalog::PUT_EVENT_RSVPS_ID, request).await
    }

    /// Deletes an event RSVP with the specified ID.
    pub async fn delete_event_rsvps_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::DELETE_EVENT_RSVPS_ID, by_id(id)).await
    }

    /// Lists event sessions.
    pub async fn get_event_sessions(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_EVENT_SESSIONS, request).await
    }

    /// Creates an event session with the specified details.
    pub async fn post_event_sessions<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().json(body)?;
        self.call(&catalog::POST_EVENT_SESSIONS, request).await
    }

    /// Shows a single event session.
    pub async fn get_event_sessions_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::GET_EVENT_SESSIONS_ID, by_id(id)).await
    }

    /// Updates an event session with the specified details.
    pub async fn put_event_sessions_id<B: Serialize + ?Sized>(
        &self,
        body: &B,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = by_id(id).json(body)?;
        self.call(&catalog::PUT_EVENT_SESSIONS_ID, request).await
    }

    /// Deletes an event session with the specified ID.
    pub async fn delete_event_sessions_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::DELETE_EVENT_SESSIONS_ID, by_id(id)).await
    }

    /// Lists events.
    pub async fn get_events(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_EVENTS, request).await
    }

    /// Shows a single event.
    pub async fn get_events_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::GET_EVENTS_ID, by_id(id)).await
    }
}
