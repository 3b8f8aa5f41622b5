//! Request and response types of the Storage Gateway operations.

use crate::models::{
    ChangeStorageGatewayCompartmentDetails, CloudSync, CloudSyncSummary, CreateCloudSyncDetails,
    CreateFileSystemDetails, CreateStorageGatewayDetails, FileSystem, FileSystemSummary, Health,
    LifecycleState, SortBy, StorageGateway, StorageGatewaySummary, UpdateCloudSyncDetails,
    UpdateFileSystemDetails, UpdateStorageGatewayDetails,
};
use oci_common::pagination::PageableRequest;
use oci_common::{
    EmptyResponse, ListResponse, OciRequest, RequestMetadata, RequestTemplate, ResourceResponse,
    SortOrder,
};

pub type CreateStorageGatewayResponse = ResourceResponse<StorageGateway>;
pub type GetStorageGatewayResponse = ResourceResponse<StorageGateway>;
pub type UpdateStorageGatewayResponse = ResourceResponse<StorageGateway>;
pub type DeleteStorageGatewayResponse = EmptyResponse;
pub type ChangeStorageGatewayCompartmentResponse = EmptyResponse;
pub type ListStorageGatewaysResponse = ListResponse<StorageGatewaySummary>;
pub type GetStorageGatewayHealthResponse = ResourceResponse<Health>;

pub type CreateFileSystemResponse = ResourceResponse<FileSystem>;
pub type GetFileSystemResponse = ResourceResponse<FileSystem>;
pub type UpdateFileSystemResponse = ResourceResponse<FileSystem>;
pub type DeleteFileSystemResponse = EmptyResponse;
pub type ConnectFileSystemResponse = EmptyResponse;
pub type DisconnectFileSystemResponse = EmptyResponse;
pub type RefreshFileSystemResponse = EmptyResponse;
pub type ReclaimFileSystemResponse = EmptyResponse;
pub type ListFileSystemsResponse = ListResponse<FileSystemSummary>;
pub type GetFileSystemHealthResponse = ResourceResponse<Health>;

pub type CreateCloudSyncResponse = ResourceResponse<CloudSync>;
pub type GetCloudSyncResponse = ResourceResponse<CloudSync>;
pub type UpdateCloudSyncResponse = ResourceResponse<CloudSync>;
pub type DeleteCloudSyncResponse = EmptyResponse;
pub type RunCloudSyncResponse = EmptyResponse;
pub type CancelCloudSyncResponse = EmptyResponse;
pub type ListCloudSyncsResponse = ListResponse<CloudSyncSummary>;
pub type GetCloudSyncHealthResponse = ResourceResponse<Health>;

// Gateways

#[derive(Debug, Clone, Default)]
pub struct CreateStorageGatewayRequest {
    pub create_storage_gateway_details: CreateStorageGatewayDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl CreateStorageGatewayRequest {
    #[must_use]
    pub fn new(details: CreateStorageGatewayDetails) -> Self {
        Self {
            create_storage_gateway_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for CreateStorageGatewayRequest {
    type Response = CreateStorageGatewayResponse;
    const OPERATION: &'static str = "CreateStorageGateway";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::post("/storageGateways")
            .json_body(&self.create_storage_gateway_details)
            .opc_retry_token(self.opc_retry_token.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }

    fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.opc_retry_token)
    }
}

/// Read-only gateway operations addressed by `storageGatewayId`.
macro_rules! gateway_read {
    ($name:ident, $response:ty, $op:literal, $path:literal) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub storage_gateway_id: String,
            pub opc_request_id: Option<String>,
            pub metadata: RequestMetadata,
        }

        impl $name {
            #[must_use]
            pub fn new(storage_gateway_id: impl Into<String>) -> Self {
                Self {
                    storage_gateway_id: storage_gateway_id.into(),
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
                RequestTemplate::get($path)
                    .path_param("storageGatewayId", &self.storage_gateway_id)
                    .opc_request_id(self.opc_request_id.as_deref())
            }
        }
    };
}

gateway_read!(
    GetStorageGatewayRequest,
    GetStorageGatewayResponse,
    "GetStorageGateway",
    "/storageGateways/{storageGatewayId}"
);
gateway_read!(
    GetStorageGatewayHealthRequest,
    GetStorageGatewayHealthResponse,
    "GetStorageGatewayHealth",
    "/storageGateways/{storageGatewayId}/health"
);

#[derive(Debug, Clone, Default)]
pub struct UpdateStorageGatewayRequest {
    pub storage_gateway_id: String,
    pub update_storage_gateway_details: UpdateStorageGatewayDetails,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl UpdateStorageGatewayRequest {
    #[must_use]
    pub fn new(storage_gateway_id: impl Into<String>, details: UpdateStorageGatewayDetails) -> Self {
        Self {
            storage_gateway_id: storage_gateway_id.into(),
            update_storage_gateway_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for UpdateStorageGatewayRequest {
    type Response = UpdateStorageGatewayResponse;
    const OPERATION: &'static str = "UpdateStorageGateway";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::put("/storageGateways/{storageGatewayId}")
            .path_param("storageGatewayId", &self.storage_gateway_id)
            .json_body(&self.update_storage_gateway_details)
            .if_match(self.if_match.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteStorageGatewayRequest {
    pub storage_gateway_id: String,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl DeleteStorageGatewayRequest {
    #[must_use]
    pub fn new(storage_gateway_id: impl Into<String>) -> Self {
        Self {
            storage_gateway_id: storage_gateway_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for DeleteStorageGatewayRequest {
    type Response = DeleteStorageGatewayResponse;
    const OPERATION: &'static str = "DeleteStorageGateway";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::delete("/storageGateways/{storageGatewayId}")
            .path_param("storageGatewayId", &self.storage_gateway_id)
            .if_match(self.if_match.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

/// Moves a gateway to another compartment. Carries both `if-match` and a retry token.
#[derive(Debug, Clone, Default)]
pub struct ChangeStorageGatewayCompartmentRequest {
    pub storage_gateway_id: String,
    pub change_storage_gateway_compartment_details: ChangeStorageGatewayCompartmentDetails,
    pub if_match: Option<String>,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ChangeStorageGatewayCompartmentRequest {
    #[must_use]
    pub fn new(storage_gateway_id: impl Into<String>, compartment_id: impl Into<String>) -> Self {
        Self {
            storage_gateway_id: storage_gateway_id.into(),
            change_storage_gateway_compartment_details: ChangeStorageGatewayCompartmentDetails {
                compartment_id: compartment_id.into(),
            },
            ..Default::default()
        }
    }
}

impl OciRequest for ChangeStorageGatewayCompartmentRequest {
    type Response = ChangeStorageGatewayCompartmentResponse;
    const OPERATION: &'static str = "ChangeStorageGatewayCompartment";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::post("/storageGateways/{storageGatewayId}/actions/changeCompartment")
            .path_param("storageGatewayId", &self.storage_gateway_id)
            .json_body(&self.change_storage_gateway_compartment_details)
            .if_match(self.if_match.as_deref())
            .opc_retry_token(self.opc_retry_token.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }

    fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.opc_retry_token)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListStorageGatewaysRequest {
    pub compartment_id: String,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<LifecycleState>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListStorageGatewaysRequest {
    #[must_use]
    pub fn new(compartment_id: impl Into<String>) -> Self {
        Self {
            compartment_id: compartment_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for ListStorageGatewaysRequest {
    type Response = ListStorageGatewaysResponse;
    const OPERATION: &'static str = "ListStorageGateways";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/storageGateways")
            .required_query("compartmentId", &self.compartment_id)
            .query("page", self.page.as_deref())
            .query("limit", self.limit.as_ref())
            .query("sortBy", self.sort_by.as_ref())
            .query("sortOrder", self.sort_order.as_ref())
            .query("displayName", self.display_name.as_deref())
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

impl PageableRequest for ListStorageGatewaysRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

/// Operations on a named child of a gateway (file system or cloud sync).
///
/// The `get` arm has no `if-match`; the `action` arm carries one.
macro_rules! gateway_child_op {
    (get $name:ident, $response:ty, $op:literal, $key:ident, $key_wire:literal, $path:literal) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub storage_gateway_id: String,
            pub $key: String,
            pub opc_request_id: Option<String>,
            pub metadata: RequestMetadata,
        }

        impl $name {
            #[must_use]
            pub fn new(storage_gateway_id: impl Into<String>, $key: impl Into<String>) -> Self {
                Self {
                    storage_gateway_id: storage_gateway_id.into(),
                    $key: $key.into(),
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
                RequestTemplate::get($path)
                    .path_param("storageGatewayId", &self.storage_gateway_id)
                    .path_param($key_wire, &self.$key)
                    .opc_request_id(self.opc_request_id.as_deref())
            }
        }
    };
    (action $name:ident, $response:ty, $op:literal, $method:ident, $key:ident, $key_wire:literal, $path:literal) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub storage_gateway_id: String,
            pub $key: String,
            pub if_match: Option<String>,
            pub opc_request_id: Option<String>,
            pub metadata: RequestMetadata,
        }

        impl $name {
            #[must_use]
            pub fn new(storage_gateway_id: impl Into<String>, $key: impl Into<String>) -> Self {
                Self {
                    storage_gateway_id: storage_gateway_id.into(),
                    $key: $key.into(),
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
                    .path_param("storageGatewayId", &self.storage_gateway_id)
                    .path_param($key_wire, &self.$key)
                    .if_match(self.if_match.as_deref())
                    .opc_request_id(self.opc_request_id.as_deref())
            }
        }
    };
}

// File systems

#[derive(Debug, Clone, Default)]
pub struct CreateFileSystemRequest {
    pub storage_gateway_id: String,
    pub create_file_system_details: CreateFileSystemDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl CreateFileSystemRequest {
    #[must_use]
    pub fn new(storage_gateway_id: impl Into<String>, details: CreateFileSystemDetails) -> Self {
        Self {
            storage_gateway_id: storage_gateway_id.into(),
            create_file_system_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for CreateFileSystemRequest {
    type Response = CreateFileSystemResponse;
    const OPERATION: &'static str = "CreateFileSystem";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::post("/storageGateways/{storageGatewayId}/fileSystems")
            .path_param("storageGatewayId", &self.storage_gateway_id)
            .json_body(&self.create_file_system_details)
            .opc_retry_token(self.opc_retry_token.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }

    fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.opc_retry_token)
    }
}

gateway_child_op!(get
    GetFileSystemRequest,
    GetFileSystemResponse,
    "GetFileSystem",
    file_system_name,
    "fileSystemName",
    "/storageGateways/{storageGatewayId}/fileSystems/{fileSystemName}"
);
gateway_child_op!(get
    GetFileSystemHealthRequest,
    GetFileSystemHealthResponse,
    "GetFileSystemHealth",
    file_system_name,
    "fileSystemName",
    "/storageGateways/{storageGatewayId}/fileSystems/{fileSystemName}/health"
);
gateway_child_op!(action
    DeleteFileSystemRequest,
    DeleteFileSystemResponse,
    "DeleteFileSystem",
    delete,
    file_system_name,
    "fileSystemName",
    "/storageGateways/{storageGatewayId}/fileSystems/{fileSystemName}"
);
gateway_child_op!(action
    ConnectFileSystemRequest,
    ConnectFileSystemResponse,
    "ConnectFileSystem",
    post,
    file_system_name,
    "fileSystemName",
    "/storageGateways/{storageGatewayId}/fileSystems/{fileSystemName}/actions/connect"
);
gateway_child_op!(action
    DisconnectFileSystemRequest,
    DisconnectFileSystemResponse,
    "DisconnectFileSystem",
    post,
    file_system_name,
    "fileSystemName",
    "/storageGateways/{storageGatewayId}/fileSystems/{fileSystemName}/actions/disconnect"
);
gateway_child_op!(action
    RefreshFileSystemRequest,
    RefreshFileSystemResponse,
    "RefreshFileSystem",
    post,
    file_system_name,
    "fileSystemName",
    "/storageGateways/{storageGatewayId}/fileSystems/{fileSystemName}/actions/refresh"
);
gateway_child_op!(action
    ReclaimFileSystemRequest,
    ReclaimFileSystemResponse,
    "ReclaimFileSystem",
    post,
    file_system_name,
    "fileSystemName",
    "/storageGateways/{storageGatewayId}/fileSystems/{fileSystemName}/actions/reclaim"
);

#[derive(Debug, Clone, Default)]
pub struct UpdateFileSystemRequest {
    pub storage_gateway_id: String,
    pub file_system_name: String,
    pub update_file_system_details: UpdateFileSystemDetails,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl UpdateFileSystemRequest {
    #[must_use]
    pub fn new(
        storage_gateway_id: impl Into<String>,
        file_system_name: impl Into<String>,
        details: UpdateFileSystemDetails,
    ) -> Self {
        Self {
            storage_gateway_id: storage_gateway_id.into(),
            file_system_name: file_system_name.into(),
            update_file_system_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for UpdateFileSystemRequest {
    type Response = UpdateFileSystemResponse;
    const OPERATION: &'static str = "UpdateFileSystem";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::put("/storageGateways/{storageGatewayId}/fileSystems/{fileSystemName}")
            .path_param("storageGatewayId", &self.storage_gateway_id)
            .path_param("fileSystemName", &self.file_system_name)
            .json_body(&self.update_file_system_details)
            .if_match(self.if_match.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

/// Lists of gateway children share filters and both page cursors.
macro_rules! gateway_child_list {
    ($name:ident, $response:ty, $op:literal, $path:literal) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub storage_gateway_id: String,
            pub display_name: Option<String>,
            pub lifecycle_state: Option<LifecycleState>,
            pub sort_by: Option<SortBy>,
            pub sort_order: Option<SortOrder>,
            pub limit: Option<i32>,
            pub page: Option<String>,
            pub opc_request_id: Option<String>,
            pub metadata: RequestMetadata,
        }

        impl $name {
            #[must_use]
            pub fn new(storage_gateway_id: impl Into<String>) -> Self {
                Self {
                    storage_gateway_id: storage_gateway_id.into(),
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
                RequestTemplate::get($path)
                    .path_param("storageGatewayId", &self.storage_gateway_id)
                    .query("page", self.page.as_deref())
                    .query("limit", self.limit.as_ref())
                    .query("sortBy", self.sort_by.as_ref())
                    .query("sortOrder", self.sort_order.as_ref())
                    .query("displayName", self.display_name.as_deref())
                    .query("lifecycleState", self.lifecycle_state.as_ref())
                    .opc_request_id(self.opc_request_id.as_deref())
            }
        }

        impl PageableRequest for $name {
            fn set_page(&mut self, page: Option<String>) {
                self.page = page;
            }
        }
    };
}

gateway_child_list!(
    ListFileSystemsRequest,
    ListFileSystemsResponse,
    "ListFileSystems",
    "/storageGateways/{storageGatewayId}/fileSystems"
);

// Cloud syncs

#[derive(Debug, Clone, Default)]
pub struct CreateCloudSyncRequest {
    pub storage_gateway_id: String,
    pub create_cloud_sync_details: CreateCloudSyncDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl CreateCloudSyncRequest {
    #[must_use]
    pub fn new(storage_gateway_id: impl Into<String>, details: CreateCloudSyncDetails) -> Self {
        Self {
            storage_gateway_id: storage_gateway_id.into(),
            create_cloud_sync_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for CreateCloudSyncRequest {
    type Response = CreateCloudSyncResponse;
    const OPERATION: &'static str = "CreateCloudSync";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::post("/storageGateways/{storageGatewayId}/cloudSyncs")
            .path_param("storageGatewayId", &self.storage_gateway_id)
            .json_body(&self.create_cloud_sync_details)
            .opc_retry_token(self.opc_retry_token.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }

    fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.opc_retry_token)
    }
}

gateway_child_op!(get
    GetCloudSyncRequest,
    GetCloudSyncResponse,
    "GetCloudSync",
    cloud_sync_name,
    "cloudSyncName",
    "/storageGateways/{storageGatewayId}/cloudSyncs/{cloudSyncName}"
);
gateway_child_op!(get
    GetCloudSyncHealthRequest,
    GetCloudSyncHealthResponse,
    "GetCloudSyncHealth",
    cloud_sync_name,
    "cloudSyncName",
    "/storageGateways/{storageGatewayId}/cloudSyncs/{cloudSyncName}/health"
);
gateway_child_op!(action
    DeleteCloudSyncRequest,
    DeleteCloudSyncResponse,
    "DeleteCloudSync",
    delete,
    cloud_sync_name,
    "cloudSyncName",
    "/storageGateways/{storageGatewayId}/cloudSyncs/{cloudSyncName}"
);
gateway_child_op!(action
    RunCloudSyncRequest,
    RunCloudSyncResponse,
    "RunCloudSync",
    post,
    cloud_sync_name,
    "cloudSyncName",
    "/storageGateways/{storageGatewayId}/cloudSyncs/{cloudSyncName}/actions/run"
);
gateway_child_op!(action
    CancelCloudSyncRequest,
    CancelCloudSyncResponse,
    "CancelCloudSync",
    post,
    cloud_sync_name,
    "cloudSyncName",
    "/storageGateways/{storageGatewayId}/cloudSyncs/{cloudSyncName}/actions/cancel"
);

#[derive(Debug, Clone, Default)]
pub struct UpdateCloudSyncRequest {
    pub storage_gateway_id: String,
    pub cloud_sync_name: String,
    pub update_cloud_sync_details: UpdateCloudSyncDetails,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl UpdateCloudSyncRequest {
    #[must_use]
    pub fn new(
        storage_gateway_id: impl Into<String>,
        cloud_sync_name: impl Into<String>,
        details: UpdateCloudSyncDetails,
    ) -> Self {
        Self {
            storage_gateway_id: storage_gateway_id.into(),
            cloud_sync_name: cloud_sync_name.into(),
            update_cloud_sync_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for UpdateCloudSyncRequest {
    type Response = UpdateCloudSyncResponse;
    const OPERATION: &'static str = "UpdateCloudSync";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::put("/storageGateways/{storageGatewayId}/cloudSyncs/{cloudSyncName}")
            .path_param("storageGatewayId", &self.storage_gateway_id)
            .path_param("cloudSyncName", &self.cloud_sync_name)
            .json_body(&self.update_cloud_sync_details)
            .if_match(self.if_match.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

gateway_child_list!(
    ListCloudSyncsRequest,
    ListCloudSyncsResponse,
    "ListCloudSyncs",
    "/storageGateways/{storageGatewayId}/cloudSyncs"
);

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use oci_common::OciError;

    const BASE: &str = "https://storage-gateway.us-ashburn-1.oci.oraclecloud.com/20190101";

    #[test]
    fn test_file_system_action_renders_names_and_if_match() {
        let request = ReclaimFileSystemRequest {
            if_match: Some("e1".to_owned()),
            ..ReclaimFileSystemRequest::new("ocid1.sg.oc1..g", "share one")
        };

        let http = request.render().build(BASE).unwrap();
        assert_eq!(http.method(), "POST");
        assert_eq!(
            http.uri().path(),
            "/20190101/storageGateways/ocid1.sg.oc1..g/fileSystems/share%20one/actions/reclaim"
        );
        assert_eq!(http.headers()["if-match"], "e1");
    }

    #[test]
    fn test_change_compartment_carries_token_and_body() {
        let request = ChangeStorageGatewayCompartmentRequest {
            opc_retry_token: Some("tok".to_owned()),
            ..ChangeStorageGatewayCompartmentRequest::new("ocid1.sg.oc1..g", "ocid1.compartment.oc1..new")
        };

        let http = request.render().build(BASE).unwrap();
        assert_eq!(http.headers()["opc-retry-token"], "tok");
        assert_eq!(
            http.body().as_ref(),
            br#"{"compartmentId":"ocid1.compartment.oc1..new"}"#
        );
    }

    #[test]
    fn test_empty_cloud_sync_name_is_rejected() {
        let err = RunCloudSyncRequest::new("ocid1.sg.oc1..g", "")
            .render()
            .build(BASE)
            .unwrap_err();

        assert!(matches!(err, OciError::MissingParameter { name: "cloudSyncName" }));
    }
}
