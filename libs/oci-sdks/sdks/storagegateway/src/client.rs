use crate::ENDPOINT;
use crate::models::{CloudSyncSummary, FileSystemSummary, StorageGatewaySummary};
use crate::requests::{
    CancelCloudSyncRequest, CancelCloudSyncResponse, ChangeStorageGatewayCompartmentRequest,
    ChangeStorageGatewayCompartmentResponse, ConnectFileSystemRequest, ConnectFileSystemResponse,
    CreateCloudSyncRequest, CreateCloudSyncResponse, CreateFileSystemRequest,
    CreateFileSystemResponse, CreateStorageGatewayRequest, CreateStorageGatewayResponse,
    DeleteCloudSyncRequest, DeleteCloudSyncResponse, DeleteFileSystemRequest,
    DeleteFileSystemResponse, DeleteStorageGatewayRequest, DeleteStorageGatewayResponse,
    DisconnectFileSystemRequest, DisconnectFileSystemResponse, GetCloudSyncHealthRequest,
    GetCloudSyncHealthResponse, GetCloudSyncRequest, GetCloudSyncResponse,
    GetFileSystemHealthRequest, GetFileSystemHealthResponse, GetFileSystemRequest,
    GetFileSystemResponse, GetStorageGatewayHealthRequest, GetStorageGatewayHealthResponse,
    GetStorageGatewayRequest, GetStorageGatewayResponse, ListCloudSyncsRequest,
    ListCloudSyncsResponse, ListFileSystemsRequest, ListFileSystemsResponse,
    ListStorageGatewaysRequest, ListStorageGatewaysResponse, ReclaimFileSystemRequest,
    ReclaimFileSystemResponse, RefreshFileSystemRequest, RefreshFileSystemResponse,
    RunCloudSyncRequest, RunCloudSyncResponse, UpdateCloudSyncRequest, UpdateCloudSyncResponse,
    UpdateFileSystemRequest, UpdateFileSystemResponse, UpdateStorageGatewayRequest,
    UpdateStorageGatewayResponse,
};
use futures_core::Stream;
use oci_common::{BaseClient, ConfigurationProvider, OciError, Region};
use std::sync::Arc;

/// Client for the Storage Gateway service.
///
/// All operations return the error of the last attempt; see [`BaseClient::call`].
#[derive(Debug, Clone)]
pub struct StorageGatewayClient {
    base: BaseClient,
}

impl StorageGatewayClient {
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

    // Gateways

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn create_storage_gateway(
        &self,
        request: CreateStorageGatewayRequest,
    ) -> Result<CreateStorageGatewayResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_storage_gateway(
        &self,
        request: GetStorageGatewayRequest,
    ) -> Result<GetStorageGatewayResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn update_storage_gateway(
        &self,
        request: UpdateStorageGatewayRequest,
    ) -> Result<UpdateStorageGatewayResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn delete_storage_gateway(
        &self,
        request: DeleteStorageGatewayRequest,
    ) -> Result<DeleteStorageGatewayResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn change_storage_gateway_compartment(
        &self,
        request: ChangeStorageGatewayCompartmentRequest,
    ) -> Result<ChangeStorageGatewayCompartmentResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_storage_gateways(
        &self,
        request: ListStorageGatewaysRequest,
    ) -> Result<ListStorageGatewaysResponse, OciError> {
        self.base.call(request).await
    }

    pub fn list_storage_gateways_pages(
        &self,
        request: ListStorageGatewaysRequest,
    ) -> impl Stream<Item = Result<ListStorageGatewaysResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }

    pub fn list_storage_gateways_items(
        &self,
        request: ListStorageGatewaysRequest,
    ) -> impl Stream<Item = Result<StorageGatewaySummary, OciError>> + Send + 'static {
        self.base.items(request)
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_storage_gateway_health(
        &self,
        request: GetStorageGatewayHealthRequest,
    ) -> Result<GetStorageGatewayHealthResponse, OciError> {
        self.base.call(request).await
    }

    // File systems

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn create_file_system(
        &self,
        request: CreateFileSystemRequest,
    ) -> Result<CreateFileSystemResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_file_system(
        &self,
        request: GetFileSystemRequest,
    ) -> Result<GetFileSystemResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn update_file_system(
        &self,
        request: UpdateFileSystemRequest,
    ) -> Result<UpdateFileSystemResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn delete_file_system(
        &self,
        request: DeleteFileSystemRequest,
    ) -> Result<DeleteFileSystemResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn connect_file_system(
        &self,
        request: ConnectFileSystemRequest,
    ) -> Result<ConnectFileSystemResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn disconnect_file_system(
        &self,
        request: DisconnectFileSystemRequest,
    ) -> Result<DisconnectFileSystemResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn refresh_file_system(
        &self,
        request: RefreshFileSystemRequest,
    ) -> Result<RefreshFileSystemResponse, OciError> {
        self.base.call(request).await
    }

    /// Re-attach the bucket of a file system deleted from another gateway.
    ///
    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn reclaim_file_system(
        &self,
        request: ReclaimFileSystemRequest,
    ) -> Result<ReclaimFileSystemResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_file_systems(
        &self,
        request: ListFileSystemsRequest,
    ) -> Result<ListFileSystemsResponse, OciError> {
        self.base.call(request).await
    }

    pub fn list_file_systems_pages(
        &self,
        request: ListFileSystemsRequest,
    ) -> impl Stream<Item = Result<ListFileSystemsResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }

    pub fn list_file_systems_items(
        &self,
        request: ListFileSystemsRequest,
    ) -> impl Stream<Item = Result<FileSystemSummary, OciError>> + Send + 'static {
        self.base.items(request)
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_file_system_health(
        &self,
        request: GetFileSystemHealthRequest,
    ) -> Result<GetFileSystemHealthResponse, OciError> {
        self.base.call(request).await
    }

    // Cloud syncs

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn create_cloud_sync(
        &self,
        request: CreateCloudSyncRequest,
    ) -> Result<CreateCloudSyncResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_cloud_sync(
        &self,
        request: GetCloudSyncRequest,
    ) -> Result<GetCloudSyncResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn update_cloud_sync(
        &self,
        request: UpdateCloudSyncRequest,
    ) -> Result<UpdateCloudSyncResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn delete_cloud_sync(
        &self,
        request: DeleteCloudSyncRequest,
    ) -> Result<DeleteCloudSyncResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn run_cloud_sync(
        &self,
        request: RunCloudSyncRequest,
    ) -> Result<RunCloudSyncResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn cancel_cloud_sync(
        &self,
        request: CancelCloudSyncRequest,
    ) -> Result<CancelCloudSyncResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_cloud_syncs(
        &self,
        request: ListCloudSyncsRequest,
    ) -> Result<ListCloudSyncsResponse, OciError> {
        self.base.call(request).await
    }

    pub fn list_cloud_syncs_pages(
        &self,
        request: ListCloudSyncsRequest,
    ) -> impl Stream<Item = Result<ListCloudSyncsResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }

    pub fn list_cloud_syncs_items(
        &self,
        request: ListCloudSyncsRequest,
    ) -> impl Stream<Item = Result<CloudSyncSummary, OciError>> + Send + 'static {
        self.base.items(request)
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_cloud_sync_health(
        &self,
        request: GetCloudSyncHealthRequest,
    ) -> Result<GetCloudSyncHealthResponse, OciError> {
        self.base.call(request).await
    }
}
