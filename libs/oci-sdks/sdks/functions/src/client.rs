use crate::ENDPOINT;
use crate::models::{ApplicationSummary, FunctionSummary, TriggerSummary};
use crate::requests::{
    CreateApplicationRequest, CreateApplicationResponse, CreateFunctionRequest,
    CreateFunctionResponse, CreateTriggerRequest, CreateTriggerResponse, DeleteApplicationRequest,
    DeleteApplicationResponse, DeleteFunctionRequest, DeleteFunctionResponse, DeleteTriggerRequest,
    DeleteTriggerResponse, GetApplicationRequest, GetApplicationResponse, GetFunctionRequest,
    GetFunctionResponse, GetTriggerRequest, GetTriggerResponse, ListApplicationsRequest,
    ListApplicationsResponse, ListFunctionsRequest, ListFunctionsResponse, ListTriggersRequest,
    ListTriggersResponse, UpdateApplicationRequest, UpdateApplicationResponse,
    UpdateFunctionRequest, UpdateFunctionResponse, UpdateTriggerRequest, UpdateTriggerResponse,
};
use futures_core::Stream;
use oci_common::{BaseClient, ConfigurationProvider, OciError, Region};
use std::sync::Arc;

/// Client for Functions management: applications, functions and triggers.
///
/// Invoking a function goes to the function's own `invoke_endpoint` and is
/// not part of this client.
#[derive(Debug, Clone)]
pub struct FunctionsManagementClient {
    base: BaseClient,
}

impl FunctionsManagementClient {
    /// # Errors
    /// Returns [`OciError::Config`] if the provider has no region or when
    /// called outside a tokio runtime, or a transport construction error.
    pub fn with_configuration_provider(
        provider: Arc<dyn ConfigurationProvider>,
    ) -> Result<Self, OciError> {
        let base = BaseClient::builder(ENDPOINT)
            .configuration_provider(provider)
            .build()?;
        Ok(Self { base })
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

    // Applications

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn create_application(
        &self,
        request: CreateApplicationRequest,
    ) -> Result<CreateApplicationResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_application(
        &self,
        request: GetApplicationRequest,
    ) -> Result<GetApplicationResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn update_application(
        &self,
        request: UpdateApplicationRequest,
    ) -> Result<UpdateApplicationResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn delete_application(
        &self,
        request: DeleteApplicationRequest,
    ) -> Result<DeleteApplicationResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_applications(
        &self,
        request: ListApplicationsRequest,
    ) -> Result<ListApplicationsResponse, OciError> {
        self.base.call(request).await
    }

    pub fn list_applications_pages(
        &self,
        request: ListApplicationsRequest,
    ) -> impl Stream<Item = Result<ListApplicationsResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }

    pub fn list_applications_items(
        &self,
        request: ListApplicationsRequest,
    ) -> impl Stream<Item = Result<ApplicationSummary, OciError>> + Send + 'static {
        self.base.items(request)
    }

    // Functions

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn create_function(
        &self,
        request: CreateFunctionRequest,
    ) -> Result<CreateFunctionResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_function(
        &self,
        request: GetFunctionRequest,
    ) -> Result<GetFunctionResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn update_function(
        &self,
        request: UpdateFunctionRequest,
    ) -> Result<UpdateFunctionResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn delete_function(
        &self,
        request: DeleteFunctionRequest,
    ) -> Result<DeleteFunctionResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_functions(
        &self,
        request: ListFunctionsRequest,
    ) -> Result<ListFunctionsResponse, OciError> {
        self.base.call(request).await
    }

    pub fn list_functions_pages(
        &self,
        request: ListFunctionsRequest,
    ) -> impl Stream<Item = Result<ListFunctionsResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }

    pub fn list_functions_items(
        &self,
        request: ListFunctionsRequest,
    ) -> impl Stream<Item = Result<FunctionSummary, OciError>> + Send + 'static {
        self.base.items(request)
    }

    // Triggers

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn create_trigger(
        &self,
        request: CreateTriggerRequest,
    ) -> Result<CreateTriggerResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_trigger(
        &self,
        request: GetTriggerRequest,
    ) -> Result<GetTriggerResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn update_trigger(
        &self,
        request: UpdateTriggerRequest,
    ) -> Result<UpdateTriggerResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn delete_trigger(
        &self,
        request: DeleteTriggerRequest,
    ) -> Result<DeleteTriggerResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_triggers(
        &self,
        request: ListTriggersRequest,
    ) -> Result<ListTriggersResponse, OciError> {
        self.base.call(request).await
    }

    pub fn list_triggers_pages(
        &self,
        request: ListTriggersRequest,
    ) -> impl Stream<Item = Result<ListTriggersResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }

    pub fn list_triggers_items(
        &self,
        request: ListTriggersRequest,
    ) -> impl Stream<Item = Result<TriggerSummary, OciError>> + Send + 'static {
        self.base.items(request)
    }
}
