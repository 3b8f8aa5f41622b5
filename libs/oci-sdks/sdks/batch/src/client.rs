use crate::ENDPOINT;
use crate::models::{BatchInstanceSummary, ComputeEnvironmentSummary, JobDefinitionSummary, JobSummary};
use crate::requests::{
    CancelJobRequest, CancelJobResponse, CreateBatchInstanceRequest, CreateBatchInstanceResponse,
    CreateComputeEnvironmentRequest, CreateComputeEnvironmentResponse, CreateJobDefinitionRequest,
    CreateJobDefinitionResponse, CreateJobRequest, CreateJobResponse, DeleteBatchInstanceRequest,
    DeleteBatchInstanceResponse, DeleteComputeEnvironmentRequest, DeleteComputeEnvironmentResponse,
    DeleteJobDefinitionRequest, DeleteJobDefinitionResponse, DeleteJobRequest, DeleteJobResponse,
    DisableBatchInstanceRequest, DisableBatchInstanceResponse, DisableComputeEnvironmentRequest,
    DisableComputeEnvironmentResponse, EnableBatchInstanceRequest, EnableBatchInstanceResponse,
    EnableComputeEnvironmentRequest, EnableComputeEnvironmentResponse, GetBatchInstanceRequest,
    GetBatchInstanceResponse, GetComputeEnvironmentRequest, GetComputeEnvironmentResponse,
    GetJobDefinitionRequest, GetJobDefinitionResponse, GetJobLogContentRequest,
    GetJobLogContentResponse, GetJobLogRequest, GetJobLogResponse, GetJobRequest, GetJobResponse,
    ListBatchInstancesRequest, ListBatchInstancesResponse, ListComputeEnvironmentsRequest,
    ListComputeEnvironmentsResponse, ListJobDefinitionsRequest, ListJobDefinitionsResponse,
    ListJobLogsRequest, ListJobLogsResponse, ListJobsRequest, ListJobsResponse,
    UpdateBatchInstanceRequest, UpdateBatchInstanceResponse, UpdateComputeEnvironmentRequest,
    UpdateComputeEnvironmentResponse, UpdateJobDefinitionRequest, UpdateJobDefinitionResponse,
    UpdateJobRequest, UpdateJobResponse,
};
use futures_core::Stream;
use oci_common::{BaseClient, ConfigurationProvider, OciError, Region};
use std::sync::Arc;

/// Client for the Batch service.
///
/// Every method sends one operation through the retry driver of the
/// underlying [`BaseClient`]; see [`BaseClient::call`] for the shared contract.
#[derive(Debug, Clone)]
pub struct BatchServiceClient {
    base: BaseClient,
}

impl BatchServiceClient {
    /// Client with the default hyper transport, signed with the provider's key.
    ///
    /// # Errors
    /// Returns [`OciError::Config`] if the provider has no region or when
    /// called outside a tokio runtime, or a transport construction error.
    pub fn with_configuration_provider(
        provider: Arc<dyn ConfigurationProvider>,
    ) -> Result<Self, OciError> {
        let base = BaseClient::builder(ENDPOINT)
            .configuration_provider(provider)
            .build()?;
        Ok(Self::from_base(base))
    }

    #[must_use]
    pub fn from_base(base: BaseClient) -> Self {
        Self { base }
    }

    #[must_use]
    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    pub fn set_region(&mut self, region: &Region) {
        self.base.set_region(region);
    }

    pub fn set_endpoint(&mut self, host: impl Into<String>) {
        self.base.set_host(host);
    }

    // Batch instances

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn create_batch_instance(
        &self,
        request: CreateBatchInstanceRequest,
    ) -> Result<CreateBatchInstanceResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_batch_instance(
        &self,
        request: GetBatchInstanceRequest,
    ) -> Result<GetBatchInstanceResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn update_batch_instance(
        &self,
        request: UpdateBatchInstanceRequest,
    ) -> Result<UpdateBatchInstanceResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn delete_batch_instance(
        &self,
        request: DeleteBatchInstanceRequest,
    ) -> Result<DeleteBatchInstanceResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn disable_batch_instance(
        &self,
        request: DisableBatchInstanceRequest,
    ) -> Result<DisableBatchInstanceResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn enable_batch_instance(
        &self,
        request: EnableBatchInstanceRequest,
    ) -> Result<EnableBatchInstanceResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_batch_instances(
        &self,
        request: ListBatchInstancesRequest,
    ) -> Result<ListBatchInstancesResponse, OciError> {
        self.base.call(request).await
    }

    pub fn list_batch_instances_pages(
        &self,
        request: ListBatchInstancesRequest,
    ) -> impl Stream<Item = Result<ListBatchInstancesResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }

    pub fn list_batch_instances_items(
        &self,
        request: ListBatchInstancesRequest,
    ) -> impl Stream<Item = Result<BatchInstanceSummary, OciError>> + Send + 'static {
        self.base.items(request)
    }

    // Compute environments

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn create_compute_environment(
        &self,
        request: CreateComputeEnvironmentRequest,
    ) -> Result<CreateComputeEnvironmentResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_compute_environment(
        &self,
        request: GetComputeEnvironmentRequest,
    ) -> Result<GetComputeEnvironmentResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn update_compute_environment(
        &self,
        request: UpdateComputeEnvironmentRequest,
    ) -> Result<UpdateComputeEnvironmentResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn delete_compute_environment(
        &self,
        request: DeleteComputeEnvironmentRequest,
    ) -> Result<DeleteComputeEnvironmentResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn disable_compute_environment(
        &self,
        request: DisableComputeEnvironmentRequest,
    ) -> Result<DisableComputeEnvironmentResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn enable_compute_environment(
        &self,
        request: EnableComputeEnvironmentRequest,
    ) -> Result<EnableComputeEnvironmentResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_compute_environments(
        &self,
        request: ListComputeEnvironmentsRequest,
    ) -> Result<ListComputeEnvironmentsResponse, OciError> {
        self.base.call(request).await
    }

    pub fn list_compute_environments_pages(
        &self,
        request: ListComputeEnvironmentsRequest,
    ) -> impl Stream<Item = Result<ListComputeEnvironmentsResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }

    pub fn list_compute_environments_items(
        &self,
        request: ListComputeEnvironmentsRequest,
    ) -> impl Stream<Item = Result<ComputeEnvironmentSummary, OciError>> + Send + 'static {
        self.base.items(request)
    }

    // Job definitions

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn create_job_definition(
        &self,
        request: CreateJobDefinitionRequest,
    ) -> Result<CreateJobDefinitionResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_job_definition(
        &self,
        request: GetJobDefinitionRequest,
    ) -> Result<GetJobDefinitionResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn update_job_definition(
        &self,
        request: UpdateJobDefinitionRequest,
    ) -> Result<UpdateJobDefinitionResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn delete_job_definition(
        &self,
        request: DeleteJobDefinitionRequest,
    ) -> Result<DeleteJobDefinitionResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_job_definitions(
        &self,
        request: ListJobDefinitionsRequest,
    ) -> Result<ListJobDefinitionsResponse, OciError> {
        self.base.call(request).await
    }

    pub fn list_job_definitions_pages(
        &self,
        request: ListJobDefinitionsRequest,
    ) -> impl Stream<Item = Result<ListJobDefinitionsResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }

    pub fn list_job_definitions_items(
        &self,
        request: ListJobDefinitionsRequest,
    ) -> impl Stream<Item = Result<JobDefinitionSummary, OciError>> + Send + 'static {
        self.base.items(request)
    }

    // Jobs

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn create_job(&self, request: CreateJobRequest) -> Result<CreateJobResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_job(&self, request: GetJobRequest) -> Result<GetJobResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn update_job(&self, request: UpdateJobRequest) -> Result<UpdateJobResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn cancel_job(&self, request: CancelJobRequest) -> Result<CancelJobResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn delete_job(&self, request: DeleteJobRequest) -> Result<DeleteJobResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_jobs(&self, request: ListJobsRequest) -> Result<ListJobsResponse, OciError> {
        self.base.call(request).await
    }

    pub fn list_jobs_pages(
        &self,
        request: ListJobsRequest,
    ) -> impl Stream<Item = Result<ListJobsResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }

    pub fn list_jobs_items(
        &self,
        request: ListJobsRequest,
    ) -> impl Stream<Item = Result<JobSummary, OciError>> + Send + 'static {
        self.base.items(request)
    }

    // Job logs

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_job_log(&self, request: GetJobLogRequest) -> Result<GetJobLogResponse, OciError> {
        self.base.call(request).await
    }

    /// Streams the log file. The caller owns the returned body and must
    /// drain or drop it.
    ///
    /// # Errors
    /// See [`BaseClient::call`]. Body read errors surface from the stream.
    pub async fn get_job_log_content(
        &self,
        request: GetJobLogContentRequest,
    ) -> Result<GetJobLogContentResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_job_logs(
        &self,
        request: ListJobLogsRequest,
    ) -> Result<ListJobLogsResponse, OciError> {
        self.base.call(request).await
    }

    pub fn list_job_logs_pages(
        &self,
        request: ListJobLogsRequest,
    ) -> impl Stream<Item = Result<ListJobLogsResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }
}
