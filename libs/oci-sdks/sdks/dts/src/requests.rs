//! Request and response types of the Data Transfer operations.
//!
//! Job-scoped resources share one addressing scheme: the job OCID in the
//! `{id}` path segment plus the resource label. Only transfer job listing is
//! paginated; appliance, package and device lists come back as one wrapper
//! object.

use crate::models::{
    AttachDevicesDetails, ChangeTransferJobCompartmentDetails, CreateTransferApplianceDetails,
    CreateTransferApplianceEntitlementDetails, CreateTransferDeviceDetails,
    CreateTransferJobDetails, CreateTransferPackageDetails, DetachDevicesDetails,
    EntitlementLifecycleState, MultipleTransferAppliances, MultipleTransferDevices,
    MultipleTransferPackages, NewTransferDevice, TransferAppliance,
    TransferApplianceEncryptionPassphrase, TransferApplianceEntitlement,
    TransferApplianceEntitlementSummary, TransferApplianceLifecycleState, TransferDevice,
    TransferDeviceLifecycleState, TransferJob, TransferJobLifecycleState, TransferJobSummary,
    TransferPackage, TransferPackageLifecycleState, UpdateTransferApplianceDetails,
    UpdateTransferDeviceDetails, UpdateTransferJobDetails, UpdateTransferPackageDetails,
};
use oci_common::pagination::PageableRequest;
use oci_common::{
    EmptyResponse, ListResponse, OciRequest, RequestMetadata, RequestTemplate, ResourceResponse,
};

pub type CreateTransferJobResponse = ResourceResponse<TransferJob>;
pub type GetTransferJobResponse = ResourceResponse<TransferJob>;
pub type UpdateTransferJobResponse = ResourceResponse<TransferJob>;
pub type DeleteTransferJobResponse = EmptyResponse;
pub type ChangeTransferJobCompartmentResponse = EmptyResponse;
pub type ListTransferJobsResponse = ListResponse<TransferJobSummary>;

pub type CreateTransferApplianceResponse = ResourceResponse<TransferAppliance>;
pub type GetTransferApplianceResponse = ResourceResponse<TransferAppliance>;
pub type UpdateTransferApplianceResponse = ResourceResponse<TransferAppliance>;
pub type DeleteTransferApplianceResponse = EmptyResponse;
pub type ListTransferAppliancesResponse = ResourceResponse<MultipleTransferAppliances>;
pub type GetTransferApplianceEncryptionPassphraseResponse =
    ResourceResponse<TransferApplianceEncryptionPassphrase>;

pub type CreateTransferApplianceEntitlementResponse =
    ResourceResponse<TransferApplianceEntitlement>;
pub type GetTransferApplianceEntitlementResponse = ResourceResponse<TransferApplianceEntitlement>;
pub type ListTransferApplianceEntitlementResponse =
    ListResponse<TransferApplianceEntitlementSummary>;

pub type CreateTransferPackageResponse = ResourceResponse<TransferPackage>;
pub type GetTransferPackageResponse = ResourceResponse<TransferPackage>;
pub type UpdateTransferPackageResponse = ResourceResponse<TransferPackage>;
pub type DeleteTransferPackageResponse = EmptyResponse;
pub type AttachDevicesToTransferPackageResponse = EmptyResponse;
pub type DetachDevicesFromTransferPackageResponse = EmptyResponse;
pub type ListTransferPackagesResponse = ResourceResponse<MultipleTransferPackages>;

pub type CreateTransferDeviceResponse = ResourceResponse<NewTransferDevice>;
pub type GetTransferDeviceResponse = ResourceResponse<TransferDevice>;
pub type UpdateTransferDeviceResponse = ResourceResponse<TransferDevice>;
pub type DeleteTransferDeviceResponse = EmptyResponse;
pub type ListTransferDevicesResponse = ResourceResponse<MultipleTransferDevices>;

// Transfer jobs

#[derive(Debug, Clone, Default)]
pub struct CreateTransferJobRequest {
    pub create_transfer_job_details: CreateTransferJobDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl CreateTransferJobRequest {
    #[must_use]
    pub fn new(details: CreateTransferJobDetails) -> Self {
        Self {
            create_transfer_job_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for CreateTransferJobRequest {
    type Response = CreateTransferJobResponse;
    const OPERATION: &'static str = "CreateTransferJob";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::post("/transferJobs")
            .json_body(&self.create_transfer_job_details)
            .opc_retry_token(self.opc_retry_token.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }

    fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.opc_retry_token)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetTransferJobRequest {
    pub id: String,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl GetTransferJobRequest {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for GetTransferJobRequest {
    type Response = GetTransferJobResponse;
    const OPERATION: &'static str = "GetTransferJob";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/transferJobs/{id}")
            .path_param("id", &self.id)
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTransferJobRequest {
    pub id: String,
    pub update_transfer_job_details: UpdateTransferJobDetails,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl UpdateTransferJobRequest {
    #[must_use]
    pub fn new(id: impl Into<String>, details: UpdateTransferJobDetails) -> Self {
        Self {
            id: id.into(),
            update_transfer_job_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for UpdateTransferJobRequest {
    type Response = UpdateTransferJobResponse;
    const OPERATION: &'static str = "UpdateTransferJob";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::put("/transferJobs/{id}")
            .path_param("id", &self.id)
            .json_body(&self.update_transfer_job_details)
            .if_match(self.if_match.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteTransferJobRequest {
    pub id: String,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl DeleteTransferJobRequest {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for DeleteTransferJobRequest {
    type Response = DeleteTransferJobResponse;
    const OPERATION: &'static str = "DeleteTransferJob";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::delete("/transferJobs/{id}")
            .path_param("id", &self.id)
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChangeTransferJobCompartmentRequest {
    pub transfer_job_id: String,
    pub change_transfer_job_compartment_details: ChangeTransferJobCompartmentDetails,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ChangeTransferJobCompartmentRequest {
    #[must_use]
    pub fn new(transfer_job_id: impl Into<String>, compartment_id: impl Into<String>) -> Self {
        Self {
            transfer_job_id: transfer_job_id.into(),
            change_transfer_job_compartment_details: ChangeTransferJobCompartmentDetails {
                compartment_id: compartment_id.into(),
            },
            ..Default::default()
        }
    }
}

impl OciRequest for ChangeTransferJobCompartmentRequest {
    type Response = ChangeTransferJobCompartmentResponse;
    const OPERATION: &'static str = "ChangeTransferJobCompartment";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::post("/transferJobs/{transferJobId}/actions/changeCompartment")
            .path_param("transferJobId", &self.transfer_job_id)
            .json_body(&self.change_transfer_job_compartment_details)
            .if_match(self.if_match.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListTransferJobsRequest {
    pub compartment_id: String,
    pub lifecycle_state: Option<TransferJobLifecycleState>,
    pub display_name: Option<String>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListTransferJobsRequest {
    #[must_use]
    pub fn new(compartment_id: impl Into<String>) -> Self {
        Self {
            compartment_id: compartment_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for ListTransferJobsRequest {
    type Response = ListTransferJobsResponse;
    const OPERATION: &'static str = "ListTransferJobs";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/transferJobs")
            .required_query("compartmentId", &self.compartment_id)
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .query("displayName", self.display_name.as_deref())
            .query("limit", self.limit.as_ref())
            .query("page", self.page.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

impl PageableRequest for ListTransferJobsRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

/// Reads and deletes of a labelled resource inside a transfer job.
macro_rules! job_child {
    ($method:ident $name:ident, $response:ty, $op:literal, $path:literal, $label:ident, $label_wire:literal) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub transfer_job_id: String,
            pub $label: String,
            pub opc_request_id: Option<String>,
            pub metadata: RequestMetadata,
        }

        impl $name {
            #[must_use]
            pub fn new(transfer_job_id: impl Into<String>, $label: impl Into<String>) -> Self {
                Self {
                    transfer_job_id: transfer_job_id.into(),
                    $label: $label.into(),
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
                    .path_param("id", &self.transfer_job_id)
                    .path_param($label_wire, &self.$label)
                    .opc_request_id(self.opc_request_id.as_deref())
            }
        }
    };
}

/// Body-carrying calls on a labelled resource, guarded by `if-match`.
macro_rules! job_child_with_body {
    ($method:ident $name:ident, $response:ty, $op:literal, $path:literal, $label:ident, $label_wire:literal, $field:ident: $details:ty) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub transfer_job_id: String,
            pub $label: String,
            pub $field: $details,
            pub if_match: Option<String>,
            pub opc_request_id: Option<String>,
            pub metadata: RequestMetadata,
        }

        impl $name {
            #[must_use]
            pub fn new(
                transfer_job_id: impl Into<String>,
                $label: impl Into<String>,
                details: $details,
            ) -> Self {
                Self {
                    transfer_job_id: transfer_job_id.into(),
                    $label: $label.into(),
                    $field: details,
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
                    .path_param("id", &self.transfer_job_id)
                    .path_param($label_wire, &self.$label)
                    .json_body(&self.$field)
                    .if_match(self.if_match.as_deref())
                    .opc_request_id(self.opc_request_id.as_deref())
            }
        }
    };
}

// Appliances

/// Requests an appliance for the job. The body may be omitted entirely.
#[derive(Debug, Clone, Default)]
pub struct CreateTransferApplianceRequest {
    pub transfer_job_id: String,
    pub create_transfer_details: Option<CreateTransferApplianceDetails>,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl CreateTransferApplianceRequest {
    #[must_use]
    pub fn new(transfer_job_id: impl Into<String>) -> Self {
        Self {
            transfer_job_id: transfer_job_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for CreateTransferApplianceRequest {
    type Response = CreateTransferApplianceResponse;
    const OPERATION: &'static str = "CreateTransferAppliance";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::post("/transferJobs/{id}/transferAppliances")
            .path_param("id", &self.transfer_job_id)
            .optional_json_body(self.create_transfer_details.as_ref())
            .opc_retry_token(self.opc_retry_token.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }

    fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.opc_retry_token)
    }
}

job_child!(get
    GetTransferApplianceRequest,
    GetTransferApplianceResponse,
    "GetTransferAppliance",
    "/transferJobs/{id}/transferAppliances/{transferApplianceLabel}",
    transfer_appliance_label,
    "transferApplianceLabel"
);
job_child!(delete
    DeleteTransferApplianceRequest,
    DeleteTransferApplianceResponse,
    "DeleteTransferAppliance",
    "/transferJobs/{id}/transferAppliances/{transferApplianceLabel}",
    transfer_appliance_label,
    "transferApplianceLabel"
);
job_child!(get
    GetTransferApplianceEncryptionPassphraseRequest,
    GetTransferApplianceEncryptionPassphraseResponse,
    "GetTransferApplianceEncryptionPassphrase",
    "/transferJobs/{id}/transferAppliances/{transferApplianceLabel}/encryptionPassphrase",
    transfer_appliance_label,
    "transferApplianceLabel"
);
job_child_with_body!(put
    UpdateTransferApplianceRequest,
    UpdateTransferApplianceResponse,
    "UpdateTransferAppliance",
    "/transferJobs/{id}/transferAppliances/{transferApplianceLabel}",
    transfer_appliance_label,
    "transferApplianceLabel",
    update_transfer_appliance_details: UpdateTransferApplianceDetails
);

#[derive(Debug, Clone, Default)]
pub struct ListTransferAppliancesRequest {
    pub transfer_job_id: String,
    pub lifecycle_state: Option<TransferApplianceLifecycleState>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListTransferAppliancesRequest {
    #[must_use]
    pub fn new(transfer_job_id: impl Into<String>) -> Self {
        Self {
            transfer_job_id: transfer_job_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for ListTransferAppliancesRequest {
    type Response = ListTransferAppliancesResponse;
    const OPERATION: &'static str = "ListTransferAppliances";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/transferJobs/{id}/transferAppliances")
            .path_param("id", &self.transfer_job_id)
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

// Entitlements

#[derive(Debug, Clone, Default)]
pub struct CreateTransferApplianceEntitlementRequest {
    pub create_transfer_appliance_entitlement_details: CreateTransferApplianceEntitlementDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl CreateTransferApplianceEntitlementRequest {
    #[must_use]
    pub fn new(details: CreateTransferApplianceEntitlementDetails) -> Self {
        Self {
            create_transfer_appliance_entitlement_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for CreateTransferApplianceEntitlementRequest {
    type Response = CreateTransferApplianceEntitlementResponse;
    const OPERATION: &'static str = "CreateTransferApplianceEntitlement";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::post("/transferApplianceEntitlement")
            .json_body(&self.create_transfer_appliance_entitlement_details)
            .opc_retry_token(self.opc_retry_token.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }

    fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.opc_retry_token)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetTransferApplianceEntitlementRequest {
    pub id: String,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl GetTransferApplianceEntitlementRequest {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for GetTransferApplianceEntitlementRequest {
    type Response = GetTransferApplianceEntitlementResponse;
    const OPERATION: &'static str = "GetTransferApplianceEntitlement";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/transferApplianceEntitlement/{id}")
            .path_param("id", &self.id)
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

/// Not paginated: the service returns every entitlement in one array.
#[derive(Debug, Clone, Default)]
pub struct ListTransferApplianceEntitlementRequest {
    pub compartment_id: String,
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<EntitlementLifecycleState>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListTransferApplianceEntitlementRequest {
    #[must_use]
    pub fn new(compartment_id: impl Into<String>) -> Self {
        Self {
            compartment_id: compartment_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for ListTransferApplianceEntitlementRequest {
    type Response = ListTransferApplianceEntitlementResponse;
    const OPERATION: &'static str = "ListTransferApplianceEntitlement";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/transferApplianceEntitlement")
            .required_query("compartmentId", &self.compartment_id)
            .query("id", self.id.as_deref())
            .query("displayName", self.display_name.as_deref())
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

// Packages

/// Creates a shipping package for disk jobs. The body may be omitted.
#[derive(Debug, Clone, Default)]
pub struct CreateTransferPackageRequest {
    pub transfer_job_id: String,
    pub create_transfer_package_details: Option<CreateTransferPackageDetails>,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl CreateTransferPackageRequest {
    #[must_use]
    pub fn new(transfer_job_id: impl Into<String>) -> Self {
        Self {
            transfer_job_id: transfer_job_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for CreateTransferPackageRequest {
    type Response = CreateTransferPackageResponse;
    const OPERATION: &'static str = "CreateTransferPackage";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::post("/transferJobs/{id}/transferPackages")
            .path_param("id", &self.transfer_job_id)
            .optional_json_body(self.create_transfer_package_details.as_ref())
            .opc_retry_token(self.opc_retry_token.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }

    fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.opc_retry_token)
    }
}

job_child!(get
    GetTransferPackageRequest,
    GetTransferPackageResponse,
    "GetTransferPackage",
    "/transferJobs/{id}/transferPackages/{transferPackageLabel}",
    transfer_package_label,
    "transferPackageLabel"
);
job_child!(delete
    DeleteTransferPackageRequest,
    DeleteTransferPackageResponse,
    "DeleteTransferPackage",
    "/transferJobs/{id}/transferPackages/{transferPackageLabel}",
    transfer_package_label,
    "transferPackageLabel"
);
job_child_with_body!(put
    UpdateTransferPackageRequest,
    UpdateTransferPackageResponse,
    "UpdateTransferPackage",
    "/transferJobs/{id}/transferPackages/{transferPackageLabel}",
    transfer_package_label,
    "transferPackageLabel",
    update_transfer_package_details: UpdateTransferPackageDetails
);
job_child_with_body!(post
    AttachDevicesToTransferPackageRequest,
    AttachDevicesToTransferPackageResponse,
    "AttachDevicesToTransferPackage",
    "/transferJobs/{id}/transferPackages/{transferPackageLabel}/actions/attachDevices",
    transfer_package_label,
    "transferPackageLabel",
    attach_devices_details: AttachDevicesDetails
);
job_child_with_body!(post
    DetachDevicesFromTransferPackageRequest,
    DetachDevicesFromTransferPackageResponse,
    "DetachDevicesFromTransferPackage",
    "/transferJobs/{id}/transferPackages/{transferPackageLabel}/actions/detachDevices",
    transfer_package_label,
    "transferPackageLabel",
    detach_devices_details: DetachDevicesDetails
);

#[derive(Debug, Clone, Default)]
pub struct ListTransferPackagesRequest {
    pub transfer_job_id: String,
    pub lifecycle_state: Option<TransferPackageLifecycleState>,
    pub display_name: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListTransferPackagesRequest {
    #[must_use]
    pub fn new(transfer_job_id: impl Into<String>) -> Self {
        Self {
            transfer_job_id: transfer_job_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for ListTransferPackagesRequest {
    type Response = ListTransferPackagesResponse;
    const OPERATION: &'static str = "ListTransferPackages";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/transferJobs/{id}/transferPackages")
            .path_param("id", &self.transfer_job_id)
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .query("displayName", self.display_name.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

// Devices

#[derive(Debug, Clone, Default)]
pub struct CreateTransferDeviceRequest {
    pub transfer_job_id: String,
    pub create_transfer_device_details: CreateTransferDeviceDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl CreateTransferDeviceRequest {
    #[must_use]
    pub fn new(transfer_job_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            transfer_job_id: transfer_job_id.into(),
            create_transfer_device_details: CreateTransferDeviceDetails {
                label: label.into(),
            },
            ..Default::default()
        }
    }
}

impl OciRequest for CreateTransferDeviceRequest {
    type Response = CreateTransferDeviceResponse;
    const OPERATION: &'static str = "CreateTransferDevice";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::post("/transferJobs/{id}/transferDevices")
            .path_param("id", &self.transfer_job_id)
            .json_body(&self.create_transfer_device_details)
            .opc_retry_token(self.opc_retry_token.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }

    fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.opc_retry_token)
    }
}

job_child!(get
    GetTransferDeviceRequest,
    GetTransferDeviceResponse,
    "GetTransferDevice",
    "/transferJobs/{id}/transferDevices/{transferDeviceLabel}",
    transfer_device_label,
    "transferDeviceLabel"
);
job_child!(delete
    DeleteTransferDeviceRequest,
    DeleteTransferDeviceResponse,
    "DeleteTransferDevice",
    "/transferJobs/{id}/transferDevices/{transferDeviceLabel}",
    transfer_device_label,
    "transferDeviceLabel"
);
job_child_with_body!(put
    UpdateTransferDeviceRequest,
    UpdateTransferDeviceResponse,
    "UpdateTransferDevice",
    "/transferJobs/{id}/transferDevices/{transferDeviceLabel}",
    transfer_device_label,
    "transferDeviceLabel",
    update_transfer_device_details: UpdateTransferDeviceDetails
);

#[derive(Debug, Clone, Default)]
pub struct ListTransferDevicesRequest {
    pub transfer_job_id: String,
    pub lifecycle_state: Option<TransferDeviceLifecycleState>,
    pub display_name: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListTransferDevicesRequest {
    #[must_use]
    pub fn new(transfer_job_id: impl Into<String>) -> Self {
        Self {
            transfer_job_id: transfer_job_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for ListTransferDevicesRequest {
    type Response = ListTransferDevicesResponse;
    const OPERATION: &'static str = "ListTransferDevices";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/transferJobs/{id}/transferDevices")
            .path_param("id", &self.transfer_job_id)
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .query("displayName", self.display_name.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::models::DeviceLabels;

    const BASE: &str = "https://datatransfer.us-ashburn-1.oraclecloud.com/20171001";
    const JOB: &str = "ocid1.datatransferjob.oc1..j";

    #[test]
    fn test_appliance_create_without_body_sends_nothing() {
        let request = CreateTransferApplianceRequest::new(JOB).render().build(BASE).unwrap();
        assert_eq!(request.method(), "POST");
        assert_eq!(
            request.uri().path(),
            format!("/20171001/transferJobs/{JOB}/transferAppliances")
        );
        assert!(request.body().is_empty());
        assert!(request.headers().get("content-type").is_none());
    }

    #[test]
    fn test_package_create_with_body() {
        let request = CreateTransferPackageRequest {
            create_transfer_package_details: Some(CreateTransferPackageDetails {
                package_delivery_vendor: Some("FedEx".to_owned()),
                ..Default::default()
            }),
            ..CreateTransferPackageRequest::new(JOB)
        }
        .render()
        .build(BASE)
        .unwrap();
        let body: serde_json::Value = serde_json::from_slice(request.body()).unwrap();
        assert_eq!(body, serde_json::json!({"packageDeliveryVendor": "FedEx"}));
    }

    #[test]
    fn test_attach_devices_path_and_if_match() {
        let request = AttachDevicesToTransferPackageRequest {
            if_match: Some("p-2".to_owned()),
            ..AttachDevicesToTransferPackageRequest::new(JOB, "PKG1", DeviceLabels::new(["D1"]))
        }
        .render()
        .build(BASE)
        .unwrap();
        assert_eq!(
            request.uri().path(),
            format!("/20171001/transferJobs/{JOB}/transferPackages/PKG1/actions/attachDevices")
        );
        assert_eq!(request.headers()["if-match"], "p-2");
    }

    #[test]
    fn test_missing_label_is_rejected() {
        let err = GetTransferDeviceRequest::new(JOB, "").render().build(BASE).unwrap_err();
        assert!(
            matches!(err, oci_common::OciError::MissingParameter { name } if name == "transferDeviceLabel")
        );
    }

    #[test]
    fn test_entitlement_list_query() {
        let request = ListTransferApplianceEntitlementRequest {
            lifecycle_state: Some(EntitlementLifecycleState::Active),
            ..ListTransferApplianceEntitlementRequest::new("ocid1.compartment.oc1..c")
        }
        .render()
        .build(BASE)
        .unwrap();
        assert_eq!(
            request.uri().query(),
            Some("compartmentId=ocid1.compartment.oc1..c&lifecycleState=ACTIVE")
        );
    }
}
