//! Request and response types of the Batch operations.
//!
//! Every request owns its wire fields: path and mandatory query values are
//! plain `String`s (an empty value fails before anything is sent), optional
//! fields are `Option`s and are left off the wire when `None`.

use crate::models::{
    BatchInstance, BatchInstanceLifecycleState, BatchInstanceSummary, ComputeEnvironment,
    ComputeEnvironmentLifecycleState, ComputeEnvironmentSummary, CreateBatchInstanceDetails,
    CreateComputeEnvironmentDetails, CreateJobDefinitionDetails, CreateJobDetails, Job,
    JobDefinition, JobDefinitionLifecycleState, JobDefinitionSummary, JobLifecycleState,
    JobSummary, ListBatchInstancesSortBy, ListSortBy, Log, LogSummary, UpdateBatchInstanceDetails,
    UpdateComputeEnvironmentDetails, UpdateJobDefinitionDetails, UpdateJobDetails,
};
use oci_common::pagination::PageableRequest;
use oci_common::{
    BinaryResponse, EmptyResponse, ListResponse, OciRequest, RequestMetadata, RequestTemplate,
    ResourceResponse, SortOrder,
};

pub type CreateBatchInstanceResponse = ResourceResponse<BatchInstance>;
pub type GetBatchInstanceResponse = ResourceResponse<BatchInstance>;
pub type UpdateBatchInstanceResponse = ResourceResponse<BatchInstance>;
pub type DeleteBatchInstanceResponse = EmptyResponse;
pub type DisableBatchInstanceResponse = EmptyResponse;
pub type EnableBatchInstanceResponse = EmptyResponse;
pub type ListBatchInstancesResponse = ListResponse<BatchInstanceSummary>;

pub type CreateComputeEnvironmentResponse = ResourceResponse<ComputeEnvironment>;
pub type GetComputeEnvironmentResponse = ResourceResponse<ComputeEnvironment>;
pub type UpdateComputeEnvironmentResponse = ResourceResponse<ComputeEnvironment>;
pub type DeleteComputeEnvironmentResponse = EmptyResponse;
pub type DisableComputeEnvironmentResponse = EmptyResponse;
pub type EnableComputeEnvironmentResponse = EmptyResponse;
pub type ListComputeEnvironmentsResponse = ListResponse<ComputeEnvironmentSummary>;

pub type CreateJobDefinitionResponse = ResourceResponse<JobDefinition>;
pub type GetJobDefinitionResponse = ResourceResponse<JobDefinition>;
pub type UpdateJobDefinitionResponse = ResourceResponse<JobDefinition>;
pub type DeleteJobDefinitionResponse = EmptyResponse;
pub type ListJobDefinitionsResponse = ListResponse<JobDefinitionSummary>;

pub type CreateJobResponse = ResourceResponse<Job>;
pub type GetJobResponse = ResourceResponse<Job>;
pub type UpdateJobResponse = ResourceResponse<Job>;
pub type CancelJobResponse = EmptyResponse;
pub type DeleteJobResponse = EmptyResponse;
pub type ListJobsResponse = ListResponse<JobSummary>;
pub type GetJobLogResponse = ResourceResponse<Log>;
pub type GetJobLogContentResponse = BinaryResponse;
pub type ListJobLogsResponse = ListResponse<LogSummary>;

// Batch instances

#[derive(Debug, Clone, Default)]
pub struct CreateBatchInstanceRequest {
    pub create_batch_instance_details: CreateBatchInstanceDetails,
    /// Idempotency token; generated when empty
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl CreateBatchInstanceRequest {
    #[must_use]
    pub fn new(details: CreateBatchInstanceDetails) -> Self {
        Self {
            create_batch_instance_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for CreateBatchInstanceRequest {
    type Response = CreateBatchInstanceResponse;
    const OPERATION: &'static str = "CreateBatchInstance";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::post("/batchInstances")
            .json_body(&self.create_batch_instance_details)
            .opc_retry_token(self.opc_retry_token.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }

    fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.opc_retry_token)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetBatchInstanceRequest {
    pub batch_instance_id: String,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl GetBatchInstanceRequest {
    #[must_use]
    pub fn new(batch_instance_id: impl Into<String>) -> Self {
        Self {
            batch_instance_id: batch_instance_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for GetBatchInstanceRequest {
    type Response = GetBatchInstanceResponse;
    const OPERATION: &'static str = "GetBatchInstance";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/batchInstances/{batchInstanceId}")
            .path_param("batchInstanceId", &self.batch_instance_id)
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBatchInstanceRequest {
    pub batch_instance_id: String,
    pub update_batch_instance_details: UpdateBatchInstanceDetails,
    /// Only update when the current etag matches
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl UpdateBatchInstanceRequest {
    #[must_use]
    pub fn new(batch_instance_id: impl Into<String>, details: UpdateBatchInstanceDetails) -> Self {
        Self {
            batch_instance_id: batch_instance_id.into(),
            update_batch_instance_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for UpdateBatchInstanceRequest {
    type Response = UpdateBatchInstanceResponse;
    const OPERATION: &'static str = "UpdateBatchInstance";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::put("/batchInstances/{batchInstanceId}")
            .path_param("batchInstanceId", &self.batch_instance_id)
            .json_body(&self.update_batch_instance_details)
            .if_match(self.if_match.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

/// Shared shape of the batch instance operations addressed by id with an optional `if-match`.
macro_rules! batch_instance_action {
    ($(#[$meta:meta])* $name:ident, $response:ty, $op:literal, $method:ident, $path:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub batch_instance_id: String,
            pub if_match: Option<String>,
            pub opc_request_id: Option<String>,
            pub metadata: RequestMetadata,
        }

        impl $name {
            #[must_use]
            pub fn new(batch_instance_id: impl Into<String>) -> Self {
                Self {
                    batch_instance_id: batch_instance_id.into(),
                    ..Default::default()
                }
            }
        }

        impl OciRequest for $name {
            type Response = $response;
            const OPERATION: &'static str = $op;

            fn metadata(&self) -> &RequestMetadata {
                &self.metadata
            }

            fn render(&self) -> RequestTemplate {
                RequestTemplate::$method($path)
                    .path_param("batchInstanceId", &self.batch_instance_id)
                    .if_match(self.if_match.as_deref())
                    .opc_request_id(self.opc_request_id.as_deref())
            }
        }
    };
}

batch_instance_action!(
    DeleteBatchInstanceRequest,
    DeleteBatchInstanceResponse,
    "DeleteBatchInstance",
    delete,
    "/batchInstances/{batchInstanceId}"
);
batch_instance_action!(
    DisableBatchInstanceRequest,
    DisableBatchInstanceResponse,
    "DisableBatchInstance",
    post,
    "/batchInstances/{batchInstanceId}/actions/disable"
);
batch_instance_action!(
    EnableBatchInstanceRequest,
    EnableBatchInstanceResponse,
    "EnableBatchInstance",
    post,
    "/batchInstances/{batchInstanceId}/actions/enable"
);

#[derive(Debug, Clone, Default)]
pub struct ListBatchInstancesRequest {
    pub compartment_id: Option<String>,
    pub batch_instance_id: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<BatchInstanceLifecycleState>,
    pub sort_by: Option<ListBatchInstancesSortBy>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<i32>,
    /// `opc-next-page` token of the previous page
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListBatchInstancesRequest {
    #[must_use]
    pub fn in_compartment(compartment_id: impl Into<String>) -> Self {
        Self {
            compartment_id: Some(compartment_id.into()),
            ..Default::default()
        }
    }
}

impl OciRequest for ListBatchInstancesRequest {
    type Response = ListBatchInstancesResponse;
    const OPERATION: &'static str = "ListBatchInstances";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/batchInstances")
            .query("compartmentId", self.compartment_id.as_deref())
            .query("batchInstanceId", self.batch_instance_id.as_deref())
            .query("displayName", self.display_name.as_deref())
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .query("sortBy", self.sort_by.as_ref())
            .query("sortOrder", self.sort_order.as_ref())
            .query("limit", self.limit.as_ref())
            .query("page", self.page.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

impl PageableRequest for ListBatchInstancesRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

// Compute environments

#[derive(Debug, Clone, Default)]
pub struct CreateComputeEnvironmentRequest {
    pub create_compute_environment_details: CreateComputeEnvironmentDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl CreateComputeEnvironmentRequest {
    #[must_use]
    pub fn new(details: CreateComputeEnvironmentDetails) -> Self {
        Self {
            create_compute_environment_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for CreateComputeEnvironmentRequest {
    type Response = CreateComputeEnvironmentResponse;
    const OPERATION: &'static str = "CreateComputeEnvironment";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::post("/computeEnvironments")
            .json_body(&self.create_compute_environment_details)
            .opc_retry_token(self.opc_retry_token.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }

    fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.opc_retry_token)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetComputeEnvironmentRequest {
    pub compute_environment_id: String,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl GetComputeEnvironmentRequest {
    #[must_use]
    pub fn new(compute_environment_id: impl Into<String>) -> Self {
        Self {
            compute_environment_id: compute_environment_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for GetComputeEnvironmentRequest {
    type Response = GetComputeEnvironmentResponse;
    const OPERATION: &'static str = "GetComputeEnvironment";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/computeEnvironments/{computeEnvironmentId}")
            .path_param("computeEnvironmentId", &self.compute_environment_id)
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateComputeEnvironmentRequest {
    pub compute_environment_id: String,
    pub update_compute_environment_details: UpdateComputeEnvironmentDetails,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl UpdateComputeEnvironmentRequest {
    #[must_use]
    pub fn new(
        compute_environment_id: impl Into<String>,
        details: UpdateComputeEnvironmentDetails,
    ) -> Self {
        Self {
            compute_environment_id: compute_environment_id.into(),
            update_compute_environment_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for UpdateComputeEnvironmentRequest {
    type Response = UpdateComputeEnvironmentResponse;
    const OPERATION: &'static str = "UpdateComputeEnvironment";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::put("/computeEnvironments/{computeEnvironmentId}")
            .path_param("computeEnvironmentId", &self.compute_environment_id)
            .json_body(&self.update_compute_environment_details)
            .if_match(self.if_match.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

macro_rules! compute_environment_action {
    ($name:ident, $response:ty, $op:literal, $method:ident, $path:literal) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub compute_environment_id: String,
            pub if_match: Option<String>,
            pub opc_request_id: Option<String>,
            pub metadata: RequestMetadata,
        }

        impl $name {
            #[must_use]
            pub fn new(compute_environment_id: impl Into<String>) -> Self {
                Self {
                    compute_environment_id: compute_environment_id.into(),
                    ..Default::default()
                }
            }
        }

        impl OciRequest for $name {
            type Response = $response;
            const OPERATION: &'static str = $op;

            fn metadata(&self) -> &RequestMetadata {
                &self.metadata
            }

            fn render(&self) -> RequestTemplate {
                RequestTemplate::$method($path)
                    .path_param("computeEnvironmentId", &self.compute_environment_id)
                    .if_match(self.if_match.as_deref())
                    .opc_request_id(self.opc_request_id.as_deref())
            }
        }
    };
}

compute_environment_action!(
    DeleteComputeEnvironmentRequest,
    DeleteComputeEnvironmentResponse,
    "DeleteComputeEnvironment",
    delete,
    "/computeEnvironments/{computeEnvironmentId}"
);
compute_environment_action!(
    DisableComputeEnvironmentRequest,
    DisableComputeEnvironmentResponse,
    "DisableComputeEnvironment",
    post,
    "/computeEnvironments/{computeEnvironmentId}/actions/disable"
);
compute_environment_action!(
    EnableComputeEnvironmentRequest,
    EnableComputeEnvironmentResponse,
    "EnableComputeEnvironment",
    post,
    "/computeEnvironments/{computeEnvironmentId}/actions/enable"
);

/// Lists compute environments; every filter is optional.
#[derive(Debug, Clone, Default)]
pub struct ListComputeEnvironmentsRequest {
    pub batch_instance_id: Option<String>,
    pub compartment_id: Option<String>,
    pub compute_environment_id: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<ComputeEnvironmentLifecycleState>,
    pub sort_by: Option<ListSortBy>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListComputeEnvironmentsRequest {
    #[must_use]
    pub fn for_batch_instance(batch_instance_id: impl Into<String>) -> Self {
        Self {
            batch_instance_id: Some(batch_instance_id.into()),
            ..Default::default()
        }
    }
}

impl OciRequest for ListComputeEnvironmentsRequest {
    type Response = ListComputeEnvironmentsResponse;
    const OPERATION: &'static str = "ListComputeEnvironments";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/computeEnvironments")
            .query("batchInstanceId", self.batch_instance_id.as_deref())
            .query("compartmentId", self.compartment_id.as_deref())
            .query("computeEnvironmentId", self.compute_environment_id.as_deref())
            .query("displayName", self.display_name.as_deref())
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .query("sortBy", self.sort_by.as_ref())
            .query("sortOrder", self.sort_order.as_ref())
            .query("limit", self.limit.as_ref())
            .query("page", self.page.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

impl PageableRequest for ListComputeEnvironmentsRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

// Job definitions

#[derive(Debug, Clone, Default)]
pub struct CreateJobDefinitionRequest {
    pub create_job_definition_details: CreateJobDefinitionDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl CreateJobDefinitionRequest {
    #[must_use]
    pub fn new(details: CreateJobDefinitionDetails) -> Self {
        Self {
            create_job_definition_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for CreateJobDefinitionRequest {
    type Response = CreateJobDefinitionResponse;
    const OPERATION: &'static str = "CreateJobDefinition";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::post("/jobDefinitions")
            .json_body(&self.create_job_definition_details)
            .opc_retry_token(self.opc_retry_token.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }

    fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.opc_retry_token)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetJobDefinitionRequest {
    pub job_definition_id: String,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl GetJobDefinitionRequest {
    #[must_use]
    pub fn new(job_definition_id: impl Into<String>) -> Self {
        Self {
            job_definition_id: job_definition_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for GetJobDefinitionRequest {
    type Response = GetJobDefinitionResponse;
    const OPERATION: &'static str = "GetJobDefinition";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/jobDefinitions/{jobDefinitionId}")
            .path_param("jobDefinitionId", &self.job_definition_id)
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateJobDefinitionRequest {
    pub job_definition_id: String,
    pub update_job_definition_details: UpdateJobDefinitionDetails,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl UpdateJobDefinitionRequest {
    #[must_use]
    pub fn new(job_definition_id: impl Into<String>, details: UpdateJobDefinitionDetails) -> Self {
        Self {
            job_definition_id: job_definition_id.into(),
            update_job_definition_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for UpdateJobDefinitionRequest {
    type Response = UpdateJobDefinitionResponse;
    const OPERATION: &'static str = "UpdateJobDefinition";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::put("/jobDefinitions/{jobDefinitionId}")
            .path_param("jobDefinitionId", &self.job_definition_id)
            .json_body(&self.update_job_definition_details)
            .if_match(self.if_match.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteJobDefinitionRequest {
    pub job_definition_id: String,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl DeleteJobDefinitionRequest {
    #[must_use]
    pub fn new(job_definition_id: impl Into<String>) -> Self {
        Self {
            job_definition_id: job_definition_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for DeleteJobDefinitionRequest {
    type Response = DeleteJobDefinitionResponse;
    const OPERATION: &'static str = "DeleteJobDefinition";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::delete("/jobDefinitions/{jobDefinitionId}")
            .path_param("jobDefinitionId", &self.job_definition_id)
            .if_match(self.if_match.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListJobDefinitionsRequest {
    pub batch_instance_id: Option<String>,
    pub compartment_id: Option<String>,
    pub job_definition_id: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<JobDefinitionLifecycleState>,
    pub sort_by: Option<ListSortBy>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListJobDefinitionsRequest {
    #[must_use]
    pub fn for_batch_instance(batch_instance_id: impl Into<String>) -> Self {
        Self {
            batch_instance_id: Some(batch_instance_id.into()),
            ..Default::default()
        }
    }
}

impl OciRequest for ListJobDefinitionsRequest {
    type Response = ListJobDefinitionsResponse;
    const OPERATION: &'static str = "ListJobDefinitions";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/jobDefinitions")
            .query("batchInstanceId", self.batch_instance_id.as_deref())
            .query("compartmentId", self.compartment_id.as_deref())
            .query("jobDefinitionId", self.job_definition_id.as_deref())
            .query("displayName", self.display_name.as_deref())
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .query("sortBy", self.sort_by.as_ref())
            .query("sortOrder", self.sort_order.as_ref())
            .query("limit", self.limit.as_ref())
            .query("page", self.page.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

impl PageableRequest for ListJobDefinitionsRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

// Jobs

#[derive(Debug, Clone, Default)]
pub struct CreateJobRequest {
    pub create_job_details: CreateJobDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl CreateJobRequest {
    #[must_use]
    pub fn new(details: CreateJobDetails) -> Self {
        Self {
            create_job_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for CreateJobRequest {
    type Response = CreateJobResponse;
    const OPERATION: &'static str = "CreateJob";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::post("/jobs")
            .json_body(&self.create_job_details)
            .opc_retry_token(self.opc_retry_token.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }

    fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.opc_retry_token)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetJobRequest {
    pub job_id: String,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl GetJobRequest {
    #[must_use]
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for GetJobRequest {
    type Response = GetJobResponse;
    const OPERATION: &'static str = "GetJob";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/jobs/{jobId}")
            .path_param("jobId", &self.job_id)
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateJobRequest {
    pub job_id: String,
    pub update_job_details: UpdateJobDetails,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl UpdateJobRequest {
    #[must_use]
    pub fn new(job_id: impl Into<String>, details: UpdateJobDetails) -> Self {
        Self {
            job_id: job_id.into(),
            update_job_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for UpdateJobRequest {
    type Response = UpdateJobResponse;
    const OPERATION: &'static str = "UpdateJob";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::put("/jobs/{jobId}")
            .path_param("jobId", &self.job_id)
            .json_body(&self.update_job_details)
            .if_match(self.if_match.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

macro_rules! job_action {
    ($name:ident, $response:ty, $op:literal, $method:ident, $path:literal) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub job_id: String,
            pub if_match: Option<String>,
            pub opc_request_id: Option<String>,
            pub metadata: RequestMetadata,
        }

        impl $name {
            #[must_use]
            pub fn new(job_id: impl Into<String>) -> Self {
                Self {
                    job_id: job_id.into(),
                    ..Default::default()
                }
            }
        }

        impl OciRequest for $name {
            type Response = $response;
            const OPERATION: &'static str = $op;

            fn metadata(&self) -> &RequestMetadata {
                &self.metadata
            }

            fn render(&self) -> RequestTemplate {
                RequestTemplate::$method($path)
                    .path_param("jobId", &self.job_id)
                    .if_match(self.if_match.as_deref())
                    .opc_request_id(self.opc_request_id.as_deref())
            }
        }
    };
}

job_action!(
    CancelJobRequest,
    CancelJobResponse,
    "CancelJob",
    post,
    "/jobs/{jobId}/actions/cancel"
);
job_action!(
    DeleteJobRequest,
    DeleteJobResponse,
    "DeleteJob",
    delete,
    "/jobs/{jobId}"
);

/// Lists jobs; filter by batch instance, compartment or job id.
#[derive(Debug, Clone, Default)]
pub struct ListJobsRequest {
    pub batch_instance_id: Option<String>,
    pub compartment_id: Option<String>,
    pub job_id: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<JobLifecycleState>,
    pub sort_by: Option<ListSortBy>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl OciRequest for ListJobsRequest {
    type Response = ListJobsResponse;
    const OPERATION: &'static str = "ListJobs";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/jobs")
            .query("batchInstanceId", self.batch_instance_id.as_deref())
            .query("compartmentId", self.compartment_id.as_deref())
            .query("jobId", self.job_id.as_deref())
            .query("displayName", self.display_name.as_deref())
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .query("sortBy", self.sort_by.as_ref())
            .query("sortOrder", self.sort_order.as_ref())
            .query("limit", self.limit.as_ref())
            .query("page", self.page.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

impl PageableRequest for ListJobsRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

// Job logs

#[derive(Debug, Clone, Default)]
pub struct GetJobLogRequest {
    pub job_id: String,
    pub log_id: String,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl GetJobLogRequest {
    #[must_use]
    pub fn new(job_id: impl Into<String>, log_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            log_id: log_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for GetJobLogRequest {
    type Response = GetJobLogResponse;
    const OPERATION: &'static str = "GetJobLog";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/jobs/{jobId}/logs/{logId}")
            .path_param("jobId", &self.job_id)
            .path_param("logId", &self.log_id)
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

/// Raw content of a job log; the response body streams the file.
#[derive(Debug, Clone, Default)]
pub struct GetJobLogContentRequest {
    pub job_id: String,
    pub log_id: String,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl GetJobLogContentRequest {
    #[must_use]
    pub fn new(job_id: impl Into<String>, log_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            log_id: log_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for GetJobLogContentRequest {
    type Response = GetJobLogContentResponse;
    const OPERATION: &'static str = "GetJobLogContent";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/jobs/{jobId}/logs/{logId}/content")
            .path_param("jobId", &self.job_id)
            .path_param("logId", &self.log_id)
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListJobLogsRequest {
    pub job_id: String,
    pub compartment_id: Option<String>,
    pub log_id: Option<String>,
    pub sort_by: Option<ListSortBy>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListJobLogsRequest {
    #[must_use]
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for ListJobLogsRequest {
    type Response = ListJobLogsResponse;
    const OPERATION: &'static str = "ListJobLogs";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/jobs/{jobId}/logs")
            .path_param("jobId", &self.job_id)
            .query("compartmentId", self.compartment_id.as_deref())
            .query("logId", self.log_id.as_deref())
            .query("sortBy", self.sort_by.as_ref())
            .query("sortOrder", self.sort_order.as_ref())
            .query("limit", self.limit.as_ref())
            .query("page", self.page.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

impl PageableRequest for ListJobLogsRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use oci_common::OciError;

    const BASE: &str = "https://batch.us-phoenix-1.oci.oraclecloud.com/20180628";

    #[test]
    fn test_list_jobs_renders_only_set_query_fields() {
        let request = ListJobsRequest {
            compartment_id: Some("ocid1.compartment.oc1..c".to_owned()),
            lifecycle_state: Some(JobLifecycleState::InProgress),
            sort_by: Some(ListSortBy::TimeCreated),
            sort_order: Some(SortOrder::Desc),
            limit: Some(50),
            ..Default::default()
        };

        let http = request.render().build(BASE).unwrap();
        assert_eq!(
            http.uri().query(),
            Some(
                "compartmentId=ocid1.compartment.oc1..c&lifecycleState=IN_PROGRESS\
                 &sortBy=TIMECREATED&sortOrder=DESC&limit=50"
            )
        );
    }

    #[test]
    fn test_update_job_renders_path_header_and_body() {
        let request = UpdateJobRequest {
            if_match: Some("v3".to_owned()),
            ..UpdateJobRequest::new(
                "ocid1.batchjob.oc1..j",
                UpdateJobDetails {
                    display_name: Some("nightly".to_owned()),
                    ..Default::default()
                },
            )
        };

        let http = request.render().build(BASE).unwrap();
        assert_eq!(http.method(), "PUT");
        assert_eq!(http.uri().path(), "/20180628/jobs/ocid1.batchjob.oc1..j");
        assert_eq!(http.headers()["if-match"], "v3");
        assert_eq!(http.body().as_ref(), br#"{"displayName":"nightly"}"#);
    }

    #[test]
    fn test_empty_mandatory_fields_fail_rendering() {
        let err = GetJobLogRequest::new("ocid1.batchjob.oc1..j", "")
            .render()
            .build(BASE)
            .unwrap_err();
        assert!(matches!(err, OciError::MissingParameter { name: "logId" }));
    }

    #[test]
    fn test_list_batch_instances_sorts_by_name() {
        let request = ListBatchInstancesRequest {
            sort_by: Some(ListBatchInstancesSortBy::Name),
            ..ListBatchInstancesRequest::in_compartment("c")
        };

        let http = request.render().build(BASE).unwrap();
        assert_eq!(http.uri().query(), Some("compartmentId=c&sortBy=NAME"));
    }

    #[test]
    fn test_list_filters_are_all_optional() {
        let http = ListBatchInstancesRequest::default().render().build(BASE).unwrap();
        assert_eq!(http.uri().query(), None);

        let http = ListComputeEnvironmentsRequest {
            compartment_id: Some("c".to_owned()),
            compute_environment_id: Some("ce".to_owned()),
            ..Default::default()
        }
        .render()
        .build(BASE)
        .unwrap();
        assert_eq!(http.uri().query(), Some("compartmentId=c&computeEnvironmentId=ce"));

        let http = ListJobDefinitionsRequest {
            job_definition_id: Some("jd".to_owned()),
            ..ListJobDefinitionsRequest::for_batch_instance("bi")
        }
        .render()
        .build(BASE)
        .unwrap();
        assert_eq!(http.uri().query(), Some("batchInstanceId=bi&jobDefinitionId=jd"));

        let http = ListBatchInstancesRequest {
            batch_instance_id: Some("bi".to_owned()),
            ..Default::default()
        }
        .render()
        .build(BASE)
        .unwrap();
        assert_eq!(http.uri().query(), Some("batchInstanceId=bi"));
    }
}
