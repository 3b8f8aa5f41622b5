use crate::ENDPOINT;
use crate::models::TransferJobSummary;
use crate::requests::{
    AttachDevicesToTransferPackageRequest, AttachDevicesToTransferPackageResponse,
    ChangeTransferJobCompartmentRequest, ChangeTransferJobCompartmentResponse,
    CreateTransferApplianceEntitlementRequest, CreateTransferApplianceEntitlementResponse,
    CreateTransferApplianceRequest, CreateTransferApplianceResponse, CreateTransferDeviceRequest,
    CreateTransferDeviceResponse, CreateTransferJobRequest, CreateTransferJobResponse,
    CreateTransferPackageRequest, CreateTransferPackageResponse, DeleteTransferApplianceRequest,
    DeleteTransferApplianceResponse, DeleteTransferDeviceRequest, DeleteTransferDeviceResponse,
    DeleteTransferJobRequest, DeleteTransferJobResponse, DeleteTransferPackageRequest,
    DeleteTransferPackageResponse, DetachDevicesFromTransferPackageRequest,
    DetachDevicesFromTransferPackageResponse, GetTransferApplianceEncryptionPassphraseRequest,
    GetTransferApplianceEncryptionPassphraseResponse, GetTransferApplianceEntitlementRequest,
    GetTransferApplianceEntitlementResponse, GetTransferApplianceRequest,
    GetTransferApplianceResponse, GetTransferDeviceRequest, GetTransferDeviceResponse,
    GetTransferJobRequest, GetTransferJobResponse, GetTransferPackageRequest,
    GetTransferPackageResponse, ListTransferApplianceEntitlementRequest,
    ListTransferApplianceEntitlementResponse, ListTransferAppliancesRequest,
    ListTransferAppliancesResponse, ListTransferDevicesRequest, ListTransferDevicesResponse,
    ListTransferJobsRequest, ListTransferJobsResponse, ListTransferPackagesRequest,
    ListTransferPackagesResponse, UpdateTransferApplianceRequest, UpdateTransferApplianceResponse,
    UpdateTransferDeviceRequest, UpdateTransferDeviceResponse, UpdateTransferJobRequest,
    UpdateTransferJobResponse, UpdateTransferPackageRequest, UpdateTransferPackageResponse,
};
use futures_core::Stream;
use oci_common::{BaseClient, ConfigurationProvider, OciError, Region};
use std::sync::Arc;

/// Client struct over a [`BaseClient`] bound to the Data Transfer endpoint.
macro_rules! service_client {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            base: BaseClient,
        }

        impl $name {
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
        }
    };
}

service_client!(
    /// Transfer jobs: the top-level unit of a data transfer.
    TransferJobClient
);

impl TransferJobClient {
    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn create_transfer_job(
        &self,
        request: CreateTransferJobRequest,
    ) -> Result<CreateTransferJobResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_transfer_job(
        &self,
        request: GetTransferJobRequest,
    ) -> Result<GetTransferJobResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn update_transfer_job(
        &self,
        request: UpdateTransferJobRequest,
    ) -> Result<UpdateTransferJobResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn delete_transfer_job(
        &self,
        request: DeleteTransferJobRequest,
    ) -> Result<DeleteTransferJobResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn change_transfer_job_compartment(
        &self,
        request: ChangeTransferJobCompartmentRequest,
    ) -> Result<ChangeTransferJobCompartmentResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_transfer_jobs(
        &self,
        request: ListTransferJobsRequest,
    ) -> Result<ListTransferJobsResponse, OciError> {
        self.base.call(request).await
    }

    pub fn list_transfer_jobs_pages(
        &self,
        request: ListTransferJobsRequest,
    ) -> impl Stream<Item = Result<ListTransferJobsResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }

    pub fn list_transfer_jobs_items(
        &self,
        request: ListTransferJobsRequest,
    ) -> impl Stream<Item = Result<TransferJobSummary, OciError>> + Send + 'static {
        self.base.items(request)
    }
}

service_client!(
    /// Appliances leased for appliance-type transfer jobs.
    TransferApplianceClient
);

impl TransferApplianceClient {
    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn create_transfer_appliance(
        &self,
        request: CreateTransferApplianceRequest,
    ) -> Result<CreateTransferApplianceResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_transfer_appliance(
        &self,
        request: GetTransferApplianceRequest,
    ) -> Result<GetTransferApplianceResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn update_transfer_appliance(
        &self,
        request: UpdateTransferApplianceRequest,
    ) -> Result<UpdateTransferApplianceResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn delete_transfer_appliance(
        &self,
        request: DeleteTransferApplianceRequest,
    ) -> Result<DeleteTransferApplianceResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_transfer_appliances(
        &self,
        request: ListTransferAppliancesRequest,
    ) -> Result<ListTransferAppliancesResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_transfer_appliance_encryption_passphrase(
        &self,
        request: GetTransferApplianceEncryptionPassphraseRequest,
    ) -> Result<GetTransferApplianceEncryptionPassphraseResponse, OciError> {
        self.base.call(request).await
    }
}

service_client!(
    /// Tenancy entitlements to order appliances.
    TransferApplianceEntitlementClient
);

impl TransferApplianceEntitlementClient {
    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn create_transfer_appliance_entitlement(
        &self,
        request: CreateTransferApplianceEntitlementRequest,
    ) -> Result<CreateTransferApplianceEntitlementResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_transfer_appliance_entitlement(
        &self,
        request: GetTransferApplianceEntitlementRequest,
    ) -> Result<GetTransferApplianceEntitlementResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_transfer_appliance_entitlement(
        &self,
        request: ListTransferApplianceEntitlementRequest,
    ) -> Result<ListTransferApplianceEntitlementResponse, OciError> {
        self.base.call(request).await
    }
}

service_client!(
    /// Shipping packages of disk-type transfer jobs.
    TransferPackageClient
);

impl TransferPackageClient {
    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn create_transfer_package(
        &self,
        request: CreateTransferPackageRequest,
    ) -> Result<CreateTransferPackageResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_transfer_package(
        &self,
        request: GetTransferPackageRequest,
    ) -> Result<GetTransferPackageResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn update_transfer_package(
        &self,
        request: UpdateTransferPackageRequest,
    ) -> Result<UpdateTransferPackageResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn delete_transfer_package(
        &self,
        request: DeleteTransferPackageRequest,
    ) -> Result<DeleteTransferPackageResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn attach_devices_to_transfer_package(
        &self,
        request: AttachDevicesToTransferPackageRequest,
    ) -> Result<AttachDevicesToTransferPackageResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn detach_devices_from_transfer_package(
        &self,
        request: DetachDevicesFromTransferPackageRequest,
    ) -> Result<DetachDevicesFromTransferPackageResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_transfer_packages(
        &self,
        request: ListTransferPackagesRequest,
    ) -> Result<ListTransferPackagesResponse, OciError> {
        self.base.call(request).await
    }
}

service_client!(
    /// Customer disks registered with a disk-type transfer job.
    TransferDeviceClient
);

impl TransferDeviceClient {
    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn create_transfer_device(
        &self,
        request: CreateTransferDeviceRequest,
    ) -> Result<CreateTransferDeviceResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_transfer_device(
        &self,
        request: GetTransferDeviceRequest,
    ) -> Result<GetTransferDeviceResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn update_transfer_device(
        &self,
        request: UpdateTransferDeviceRequest,
    ) -> Result<UpdateTransferDeviceResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn delete_transfer_device(
        &self,
        request: DeleteTransferDeviceRequest,
    ) -> Result<DeleteTransferDeviceResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_transfer_devices(
        &self,
        request: ListTransferDevicesRequest,
    ) -> Result<ListTransferDevicesResponse, OciError> {
        self.base.call(request).await
    }
}
