//! Tasks and the agents assigned to them.

use fetch_core::{ApiError, FetchRequest, FetchResponse, Params};
use serde::Serialize;
use serde_json::Value;

use crate::catalog;
use crate::client::{by_id, SolidarityTech};
use crate::types::ResourceId;

impl SolidarityTech {
    /// Lists agent assignments.
    pub async fn get_agent_assignments(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_AGENT_ASSIGNMENTS, request).await
    }

    /// Creates an agent assignment with the specified details.
    pub async fn post_agent_assignments<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().json(body)?;
        self.call(&catalog::POST_AGENT_ASSIGNMENTS, request).await
    }

    /// Shows a single agent assignment.
    pub async fn get_agent_assignments_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::GET_AGENT_ASSIGNMENTS_ID, by_id(id)).await
    }

    /// Updates an agent assignment with the specified details.
    pub async fn put_agent_assignments_id<B: Serialize + ?Sized>(
        &self,
        body: &B,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = by_id(id).json(body)?;
        self.call(&catalog::PUT_AGENT_ASSIGNMENTS_ID, request).await
    }

    /// Deletes an agent assignment with the specified ID.
    pub async fn delete_agent_assignments_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::DELETE_AGENT_ASSIGNMENTS_ID, by_id(id)).await
    }

    /// Lists scheduled tasks.
    pub async fn get_scheduled_tasks(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_SCHEDULED_TASKS, request).await
    }

    /// Creates a scheduled task with the specified details.
    pub async fn post_scheduled_tasks<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().json(body)?;
        self.call(&catalog::POST_SCHEDULED_TASKS, request).await
    }

    /// Shows a single scheduled task.
    pub async fn get_scheduled_tasks_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::GET_SCHEDULED_TASKS_ID, by_id(id)).await
    }

    /// Updates a scheduled task with the specified details.
    pub async fn put_scheduled_tasks_id<B: Serialize + ?Sized>(
        &self,
        body: &B,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = by_id(id).json(body)?;
        self.call(&catalog::PUT_SCHEDULED_TASKS_ID, request).await
    }

    /// Deletes a scheduled task with the specified ID.
    pub async fn delete_scheduled_tasks_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::DELETE_SCHEDULED_TASKS_ID, by_id(id)).await
    }

    /// Lists task agents.
    pub async fn get_task_agents(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_TASK_AGENTS, request).await
    }

    /// Creates a task agent with the specified details.
    pub async fn post_task_agents<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().json(body)?;
        self.call(&catalog::POST_TASK_AGENTS, request).await
    }

    /// Shows a single task agent.
    pub async fn get_task_agents_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::GET_TASK_AGENTS_ID, by_id(id)).await
    }

    /// Deletes a task agent with the specified ID.
    pub async fn delete_task_agents_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::DELETE_TASK_AGENTS_ID, by_id(id)).await
    }

    /// Lists task assignments.
    pub async fn get_task_assignments(
        &self,
        params: impl Into<Params>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().with_params(params.into());
        self.call(&catalog::GET_TASK_ASSIGNMENTS, request).await
    }

    /// Creates a task assignment with the specified details.
    pub async fn post_task_assignments<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = FetchRequest::new().json(body)?;
        self.call(&catalog::POST_TASK_ASSIGNMENTS, request).await
    }

    /// Shows a single task assignment.
    pub async fn get_task_assignments_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::GET_TASK_ASSIGNMENTS_ID, by_id(id)).await
    }

    /// Updates a task assignment with the specified details.
    pub async fn put_task_assignments_id<B: Serialize + ?Sized>(
        &self,
        body: &B,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        let request = by_id(id).json(body)?;
        self.call(&catalog::PUT_TASK_ASSIGNMENTS_ID, request).await
    }

    /// Deletes a task assignment with the specified ID.
    pub async fn delete_task_assignments_id(
        &self,
        id: impl Into<ResourceId>,
    ) -> Result<FetchResponse<Value>, ApiError> {
        self.call(&catalog::DELETE_TASK_ASSIGNMENTS_ID, by_id(id)).await
    }
}
