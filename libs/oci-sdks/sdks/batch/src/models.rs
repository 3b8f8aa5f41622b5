//! Batch resources, summaries and create/update details.

use oci_common::{DefinedTags, FreeformTags, SdkTime, oci_enum};
use serde::{Deserialize, Serialize};

oci_enum! {
    /// Lifecycle of a batch instance
    pub enum BatchInstanceLifecycleState {
        Active => "ACTIVE",
        Disabling => "DISABLING",
        Inactive => "INACTIVE",
        Deleted => "DELETED",
    }
}

oci_enum! {
    /// Lifecycle of a compute environment
    pub enum ComputeEnvironmentLifecycleState {
        Active => "ACTIVE",
        Disabling => "DISABLING",
        Inactive => "INACTIVE",
        Deleted => "DELETED",
    }
}

oci_enum! {
    pub enum JobDefinitionLifecycleState {
        Active => "ACTIVE",
        Deleted => "DELETED",
    }
}

oci_enum! {
    /// Lifecycle of a job run
    pub enum JobLifecycleState {
        Accepted => "ACCEPTED",
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
        Succeeded => "SUCCEEDED",
        Canceling => "CANCELING",
        Canceled => "CANCELED",
        Deleted => "DELETED",
    }
}

oci_enum! {
    /// Sort key of the list operations other than `ListBatchInstances`
    pub enum ListSortBy {
        TimeCreated => "TIMECREATED",
        DisplayName => "DISPLAYNAME",
    }
}

oci_enum! {
    /// Batch instances sort by `NAME` rather than display name
    pub enum ListBatchInstancesSortBy {
        TimeCreated => "TIMECREATED",
        Name => "NAME",
    }
}

/// Environment variable passed to job containers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvironmentVariable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Batch instance: the top-level container bound to a compartment and cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchInstance {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub compartment_id: Option<String>,
    pub cluster_id: Option<String>,
    pub namespace: Option<String>,
    pub created_by_user_id: Option<String>,
    pub modified_by_user_id: Option<String>,
    pub deleted_by_user_id: Option<String>,
    pub time_created: Option<SdkTime>,
    pub time_deleted: Option<SdkTime>,
    pub lifecycle_state: Option<BatchInstanceLifecycleState>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchInstanceSummary {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub compartment_id: Option<String>,
    pub cluster_id: Option<String>,
    pub namespace: Option<String>,
    pub time_created: Option<SdkTime>,
    pub lifecycle_state: Option<BatchInstanceLifecycleState>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBatchInstanceDetails {
    pub compartment_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Mutable attributes shared by the update operations of every batch resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResourceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

pub type UpdateBatchInstanceDetails = UpdateResourceDetails;
pub type UpdateJobDefinitionDetails = UpdateResourceDetails;
pub type UpdateJobDetails = UpdateResourceDetails;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComputeEnvironment {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub batch_instance_id: Option<String>,
    pub machine_image_name: Option<String>,
    pub shape_name: Option<String>,
    pub subnet_id: Option<String>,
    pub kube_version: Option<String>,
    pub is_auto_scale_down: Option<bool>,
    pub ssh_public_key: Option<String>,
    pub status_description: Option<String>,
    pub error_code: Option<String>,
    pub created_by_user_id: Option<String>,
    pub modified_by_user_id: Option<String>,
    pub time_created: Option<SdkTime>,
    pub lifecycle_state: Option<ComputeEnvironmentLifecycleState>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComputeEnvironmentSummary {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub batch_instance_id: Option<String>,
    pub shape_name: Option<String>,
    pub time_created: Option<SdkTime>,
    pub lifecycle_state: Option<ComputeEnvironmentLifecycleState>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComputeEnvironmentDetails {
    pub batch_instance_id: String,
    pub machine_image_name: String,
    pub shape_name: String,
    pub subnet_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kube_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_scale_down: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComputeEnvironmentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_scale_down: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Reusable container template for jobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobDefinition {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub batch_instance_id: Option<String>,
    pub docker_image: Option<String>,
    pub container_ocpu: Option<f32>,
    pub container_memory_size_in_mbs: Option<i32>,
    pub docker_registry_secret: Option<String>,
    pub retry_times: Option<i32>,
    pub timeout_seconds: Option<i32>,
    pub command: Option<Vec<String>>,
    pub args: Option<Vec<String>>,
    pub environment_variables: Option<Vec<EnvironmentVariable>>,
    pub created_by_user_id: Option<String>,
    pub modified_by_user_id: Option<String>,
    pub time_created: Option<SdkTime>,
    pub lifecycle_state: Option<JobDefinitionLifecycleState>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobDefinitionSummary {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub batch_instance_id: Option<String>,
    pub docker_image: Option<String>,
    pub container_ocpu: Option<f32>,
    pub container_memory_size_in_mbs: Option<i32>,
    pub time_created: Option<SdkTime>,
    pub lifecycle_state: Option<JobDefinitionLifecycleState>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobDefinitionDetails {
    pub batch_instance_id: String,
    pub docker_image: String,
    pub container_ocpu: f32,
    pub container_memory_size_in_mbs: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_registry_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_times: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<Vec<EnvironmentVariable>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// One run of a job definition on a compute environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub compute_environment_id: Option<String>,
    pub job_definition_id: Option<String>,
    pub batch_instance_id: Option<String>,
    pub docker_image: Option<String>,
    pub command: Option<Vec<String>>,
    pub args: Option<Vec<String>>,
    pub environment_variables: Option<Vec<EnvironmentVariable>>,
    pub container_ocpu: Option<f32>,
    pub container_memory_size_in_mbs: Option<i32>,
    pub concurrency: Option<i32>,
    pub count: Option<i32>,
    pub retry_times: Option<i32>,
    pub timeout_seconds: Option<i32>,
    pub priority: Option<i32>,
    pub docker_registry_secret: Option<String>,
    pub created_by_user_id: Option<String>,
    pub lifecycle_state: Option<JobLifecycleState>,
    pub status_description: Option<String>,
    pub error_code: Option<String>,
    pub job_kube_name: Option<String>,
    pub node_pool_id: Option<String>,
    pub job_log_stderr_path: Option<String>,
    pub job_log_stdout_path: Option<String>,
    pub time_created: Option<SdkTime>,
    pub time_started: Option<SdkTime>,
    pub time_completed: Option<SdkTime>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSummary {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub compute_environment_id: Option<String>,
    pub job_definition_id: Option<String>,
    pub batch_instance_id: Option<String>,
    pub docker_image: Option<String>,
    pub priority: Option<i32>,
    pub lifecycle_state: Option<JobLifecycleState>,
    pub status_description: Option<String>,
    pub time_created: Option<SdkTime>,
    pub time_started: Option<SdkTime>,
    pub time_completed: Option<SdkTime>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobDetails {
    pub compute_environment_id: String,
    pub job_definition_id: String,
    pub batch_instance_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<Vec<EnvironmentVariable>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_ocpu: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_memory_size_in_mbs: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_times: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_registry_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Log file produced by a job run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Log {
    pub id: Option<String>,
    pub job_id: Option<String>,
    pub name: Option<String>,
    pub path: Option<String>,
    pub size_in_bytes: Option<i64>,
    pub time_created: Option<SdkTime>,
    pub time_updated: Option<SdkTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogSummary {
    pub id: Option<String>,
    pub job_id: Option<String>,
    pub name: Option<String>,
    pub size_in_bytes: Option<i64>,
    pub time_created: Option<SdkTime>,
}
