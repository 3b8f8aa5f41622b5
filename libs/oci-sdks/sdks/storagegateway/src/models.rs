//! Storage gateways, their file systems and cloud syncs.

use oci_common::{DefinedTags, FreeformTags, SdkTime, oci_enum};
use serde::{Deserialize, Serialize};

oci_enum! {
    /// Lifecycle shared by gateways, file systems and cloud syncs
    pub enum LifecycleState {
        Creating => "CREATING",
        Active => "ACTIVE",
        Updating => "UPDATING",
        Deleting => "DELETING",
        Deleted => "DELETED",
        Failed => "FAILED",
    }
}

oci_enum! {
    pub enum FileSystemStorageTier {
        Standard => "STANDARD",
        Archive => "ARCHIVE",
    }
}

oci_enum! {
    /// Health reported by the gateway agent
    pub enum HealthStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Warning => "WARNING",
        Critical => "CRITICAL",
    }
}

oci_enum! {
    pub enum SortBy {
        TimeCreated => "TIMECREATED",
        DisplayName => "DISPLAYNAME",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageGateway {
    pub id: Option<String>,
    pub compartment_id: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub status: Option<HealthStatus>,
    pub version: Option<String>,
    pub is_newer_version_available: Option<bool>,
    pub time_created: Option<SdkTime>,
    pub lifecycle_state: Option<LifecycleState>,
    pub lifecycle_details: Option<String>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageGatewaySummary {
    pub id: Option<String>,
    pub compartment_id: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub status: Option<HealthStatus>,
    pub version: Option<String>,
    pub is_newer_version_available: Option<bool>,
    pub time_created: Option<SdkTime>,
    pub lifecycle_state: Option<LifecycleState>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStorageGatewayDetails {
    pub compartment_id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStorageGatewayDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStorageGatewayCompartmentDetails {
    /// Target compartment
    pub compartment_id: String,
}

/// Agent health of a gateway, file system or cloud sync.
///
/// `metrics` and `reasons` are passed through as sent; their shape differs
/// between agent versions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Health {
    pub status: Option<HealthStatus>,
    pub version: Option<String>,
    pub is_newer_version_available: Option<bool>,
    pub time_last_heartbeat_received: Option<SdkTime>,
    pub metrics: Option<serde_json::Value>,
    pub reasons: Option<serde_json::Value>,
}

/// NFS export backed by object storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileSystem {
    pub id: Option<String>,
    pub name: Option<String>,
    pub compartment_id: Option<String>,
    pub storage_gateway_id: Option<String>,
    pub description: Option<String>,
    pub storage_tier: Option<FileSystemStorageTier>,
    pub is_connected: Option<bool>,
    pub is_in_refresh_mode: Option<bool>,
    pub is_reclaim_attempt: Option<bool>,
    pub nfs_allowed_hosts: Option<String>,
    pub nfs_export_options: Option<String>,
    pub time_created: Option<SdkTime>,
    pub lifecycle_state: Option<LifecycleState>,
    pub lifecycle_details: Option<String>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileSystemSummary {
    pub id: Option<String>,
    pub name: Option<String>,
    pub storage_tier: Option<FileSystemStorageTier>,
    pub is_connected: Option<bool>,
    pub is_in_refresh_mode: Option<bool>,
    pub error_count: Option<f32>,
    pub warn_count: Option<f32>,
    pub time_created: Option<SdkTime>,
    pub lifecycle_state: Option<LifecycleState>,
    pub lifecycle_details: Option<String>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileSystemDetails {
    pub name: String,
    pub storage_tier: FileSystemStorageTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nfs_allowed_hosts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nfs_export_options: Option<String>,
    /// Re-attach the bucket of a previously deleted file system with this name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reclaim_attempt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

impl Default for FileSystemStorageTier {
    fn default() -> Self {
        Self::Standard
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFileSystemDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nfs_allowed_hosts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nfs_export_options: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Copy job between a gateway path and object storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudSync {
    pub id: Option<String>,
    pub name: Option<String>,
    pub compartment_id: Option<String>,
    pub storage_gateway_id: Option<String>,
    pub description: Option<String>,
    pub source_path: Option<String>,
    pub target_path: Option<String>,
    /// Direction: gateway to bucket when true
    pub is_upload: Option<bool>,
    pub is_auto_deletion_enabled: Option<bool>,
    pub files_from: Option<String>,
    pub time_created: Option<SdkTime>,
    pub time_started: Option<SdkTime>,
    pub time_ended: Option<SdkTime>,
    pub lifecycle_state: Option<LifecycleState>,
    pub lifecycle_details: Option<String>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudSyncSummary {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub source_path: Option<String>,
    pub target_path: Option<String>,
    pub is_upload: Option<bool>,
    pub time_created: Option<SdkTime>,
    pub time_started: Option<SdkTime>,
    pub time_ended: Option<SdkTime>,
    pub lifecycle_state: Option<LifecycleState>,
    pub lifecycle_details: Option<String>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCloudSyncDetails {
    pub name: String,
    pub source_path: String,
    pub target_path: String,
    pub is_upload: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_deletion_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCloudSyncDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_deletion_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}
