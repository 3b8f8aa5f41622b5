//! Catalog resources, harvested metadata objects and search.

use oci_common::{DefinedTags, FreeformTags, SdkTime, oci_enum};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Namespaced custom properties: namespace name to key/value pairs
pub type Properties = HashMap<String, HashMap<String, String>>;

oci_enum! {
    pub enum LifecycleState {
        Creating => "CREATING",
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Updating => "UPDATING",
        Deleting => "DELETING",
        Deleted => "DELETED",
        Failed => "FAILED",
        Moving => "MOVING",
    }
}

oci_enum! {
    pub enum JobType {
        Harvest => "HARVEST",
        Profiling => "PROFILING",
        Sampling => "SAMPLING",
        Preview => "PREVIEW",
        Import => "IMPORT",
        Export => "EXPORT",
        Internal => "INTERNAL",
        Purge => "PURGE",
        Immediate => "IMMEDIATE",
        Scheduled => "SCHEDULED",
        ImmediateExecution => "IMMEDIATE_EXECUTION",
        ScheduledExecution => "SCHEDULED_EXECUTION",
        ScheduledExecutionInstance => "SCHEDULED_EXECUTION_INSTANCE",
    }
}

oci_enum! {
    pub enum JobExecutionState {
        Created => "CREATED",
        InProgress => "IN_PROGRESS",
        Inactive => "INACTIVE",
        Failed => "FAILED",
        Succeeded => "SUCCEEDED",
        Canceled => "CANCELED",
    }
}

oci_enum! {
    pub enum HarvestStatus {
        Complete => "COMPLETE",
        Error => "ERROR",
        InProgress => "IN_PROGRESS",
        Deferred => "DEFERRED",
    }
}

oci_enum! {
    pub enum TermWorkflowStatus {
        New => "NEW",
        Approved => "APPROVED",
        UnderReview => "UNDER_REVIEW",
        Escalated => "ESCALATED",
    }
}

oci_enum! {
    pub enum SortBy {
        TimeCreated => "TIMECREATED",
        DisplayName => "DISPLAYNAME",
    }
}

// `fields` selectors. The service returns only the named properties when any
// are given.

oci_enum! {
    pub enum EntityFields {
        Key => "key",
        DisplayName => "displayName",
        Description => "description",
        DataAssetKey => "dataAssetKey",
        TimeCreated => "timeCreated",
        TimeUpdated => "timeUpdated",
        CreatedById => "createdById",
        UpdatedById => "updatedById",
        LifecycleState => "lifecycleState",
        ExternalKey => "externalKey",
        TimeExternal => "timeExternal",
        TimeStatusUpdated => "timeStatusUpdated",
        IsLogical => "isLogical",
        IsPartition => "isPartition",
        FolderKey => "folderKey",
        Path => "path",
        HarvestStatus => "harvestStatus",
        LastJobKey => "lastJobKey",
        Uri => "uri",
        Properties => "properties",
    }
}

oci_enum! {
    pub enum FolderFields {
        Key => "key",
        DisplayName => "displayName",
        Description => "description",
        ParentFolderKey => "parentFolderKey",
        Path => "path",
        DataAssetKey => "dataAssetKey",
        Properties => "properties",
        ExternalKey => "externalKey",
        TimeCreated => "timeCreated",
        TimeUpdated => "timeUpdated",
        CreatedById => "createdById",
        UpdatedById => "updatedById",
        TimeExternal => "timeExternal",
        LifecycleState => "lifecycleState",
        HarvestStatus => "harvestStatus",
        LastJobKey => "lastJobKey",
        Uri => "uri",
    }
}

oci_enum! {
    pub enum AttributeFields {
        Key => "key",
        DisplayName => "displayName",
        Description => "description",
        EntityKey => "entityKey",
        LifecycleState => "lifecycleState",
        TimeCreated => "timeCreated",
        TimeUpdated => "timeUpdated",
        CreatedById => "createdById",
        UpdatedById => "updatedById",
        ExternalDataType => "externalDataType",
        ExternalKey => "externalKey",
        IsIncrementalData => "isIncrementalData",
        IsNullable => "isNullable",
        Length => "length",
        Position => "position",
        Precision => "precision",
        Scale => "scale",
        TimeExternal => "timeExternal",
        Uri => "uri",
        Properties => "properties",
    }
}

oci_enum! {
    pub enum GlossaryTermFields {
        Key => "key",
        DisplayName => "displayName",
        Description => "description",
        GlossaryKey => "glossaryKey",
        ParentTermKey => "parentTermKey",
        IsAllowedToHaveChildTerms => "isAllowedToHaveChildTerms",
        Path => "path",
        LifecycleState => "lifecycleState",
        TimeCreated => "timeCreated",
        WorkflowStatus => "workflowStatus",
        AssociatedObjectCount => "associatedObjectCount",
        Uri => "uri",
    }
}

oci_enum! {
    pub enum JobDefinitionFields {
        Key => "key",
        DisplayName => "displayName",
        Description => "description",
        CatalogId => "catalogId",
        JobType => "jobType",
        IsIncremental => "isIncremental",
        DataAssetKey => "dataAssetKey",
        ConnectionKey => "connectionKey",
        InternalVersion => "internalVersion",
        LifecycleState => "lifecycleState",
        TimeCreated => "timeCreated",
        TimeUpdated => "timeUpdated",
        CreatedById => "createdById",
        UpdatedById => "updatedById",
        Uri => "uri",
        IsSampleDataExtracted => "isSampleDataExtracted",
        SampleDataSizeInMbs => "sampleDataSizeInMBs",
        Properties => "properties",
    }
}

oci_enum! {
    pub enum CatalogPermissionsFields {
        CatalogId => "catalogId",
        UserPermissions => "userPermissions",
    }
}

oci_enum! {
    pub enum DataAssetPermissionsFields {
        DataAssetKey => "dataAssetKey",
        UserPermissions => "userPermissions",
    }
}

oci_enum! {
    pub enum GlossaryPermissionsFields {
        GlossaryKey => "glossaryKey",
        UserPermissions => "userPermissions",
    }
}

// Catalogs

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Catalog {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub compartment_id: Option<String>,
    pub lifecycle_state: Option<LifecycleState>,
    pub lifecycle_details: Option<String>,
    pub service_api_url: Option<String>,
    pub service_console_url: Option<String>,
    pub number_of_objects: Option<i32>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
    pub time_created: Option<SdkTime>,
    pub time_updated: Option<SdkTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogSummary {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub compartment_id: Option<String>,
    pub lifecycle_state: Option<LifecycleState>,
    pub lifecycle_details: Option<String>,
    pub number_of_objects: Option<i32>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
    pub time_created: Option<SdkTime>,
    pub time_updated: Option<SdkTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCatalogDetails {
    pub compartment_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

// Harvested objects

/// Data entity (table, file, view) inside a data asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Entity {
    pub key: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub time_created: Option<SdkTime>,
    pub time_updated: Option<SdkTime>,
    pub created_by_id: Option<String>,
    pub updated_by_id: Option<String>,
    pub lifecycle_state: Option<LifecycleState>,
    pub external_key: Option<String>,
    pub time_external: Option<SdkTime>,
    pub time_status_updated: Option<SdkTime>,
    pub is_logical: Option<bool>,
    pub is_partition: Option<bool>,
    pub data_asset_key: Option<String>,
    pub folder_key: Option<String>,
    pub path: Option<String>,
    pub harvest_status: Option<HarvestStatus>,
    pub last_job_key: Option<String>,
    pub uri: Option<String>,
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntitySummary {
    pub key: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub data_asset_key: Option<String>,
    pub time_created: Option<SdkTime>,
    pub time_updated: Option<SdkTime>,
    pub external_key: Option<String>,
    pub path: Option<String>,
    pub folder_key: Option<String>,
    pub uri: Option<String>,
    pub lifecycle_state: Option<LifecycleState>,
    pub harvest_status: Option<HarvestStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Folder {
    pub key: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub parent_folder_key: Option<String>,
    pub path: Option<String>,
    pub data_asset_key: Option<String>,
    pub properties: Option<Properties>,
    pub external_key: Option<String>,
    pub time_created: Option<SdkTime>,
    pub time_updated: Option<SdkTime>,
    pub created_by_id: Option<String>,
    pub updated_by_id: Option<String>,
    pub time_external: Option<SdkTime>,
    pub lifecycle_state: Option<LifecycleState>,
    pub harvest_status: Option<HarvestStatus>,
    pub last_job_key: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FolderSummary {
    pub key: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub data_asset_key: Option<String>,
    pub parent_folder_key: Option<String>,
    pub path: Option<String>,
    pub external_key: Option<String>,
    pub time_external: Option<SdkTime>,
    pub time_created: Option<SdkTime>,
    pub uri: Option<String>,
    pub lifecycle_state: Option<LifecycleState>,
}

/// Column or field of an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attribute {
    pub key: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub entity_key: Option<String>,
    pub lifecycle_state: Option<LifecycleState>,
    pub time_created: Option<SdkTime>,
    pub time_updated: Option<SdkTime>,
    pub created_by_id: Option<String>,
    pub updated_by_id: Option<String>,
    pub external_data_type: Option<String>,
    pub external_key: Option<String>,
    pub is_incremental_data: Option<bool>,
    pub is_nullable: Option<bool>,
    pub length: Option<i64>,
    pub position: Option<i32>,
    pub precision: Option<i32>,
    pub scale: Option<i32>,
    pub time_external: Option<SdkTime>,
    pub uri: Option<String>,
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeSummary {
    pub key: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub entity_key: Option<String>,
    pub external_key: Option<String>,
    pub length: Option<i64>,
    pub is_nullable: Option<bool>,
    pub uri: Option<String>,
    pub external_data_type: Option<String>,
    pub time_created: Option<SdkTime>,
    pub lifecycle_state: Option<LifecycleState>,
}

// Glossaries

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TermSummary {
    pub key: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub glossary_key: Option<String>,
    pub uri: Option<String>,
    pub parent_term_key: Option<String>,
    pub is_allowed_to_have_child_terms: Option<bool>,
    pub path: Option<String>,
    pub time_created: Option<SdkTime>,
    pub lifecycle_state: Option<LifecycleState>,
    pub workflow_status: Option<TermWorkflowStatus>,
    pub associated_object_count: Option<i32>,
}

// Permissions

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogPermissionsSummary {
    pub catalog_id: Option<String>,
    pub user_permissions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataAssetPermissionsSummary {
    pub data_asset_key: Option<String>,
    pub user_permissions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlossaryPermissionsSummary {
    pub glossary_key: Option<String>,
    pub user_permissions: Option<Vec<String>>,
}

// Jobs

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobDefinition {
    pub key: Option<String>,
    pub display_name: Option<String>,
    pub catalog_id: Option<String>,
    pub job_type: Option<JobType>,
    pub is_incremental: Option<bool>,
    pub data_asset_key: Option<String>,
    pub description: Option<String>,
    pub connection_key: Option<String>,
    pub internal_version: Option<String>,
    pub lifecycle_state: Option<LifecycleState>,
    pub time_created: Option<SdkTime>,
    pub time_updated: Option<SdkTime>,
    pub created_by_id: Option<String>,
    pub updated_by_id: Option<String>,
    pub uri: Option<String>,
    pub is_sample_data_extracted: Option<bool>,
    #[serde(rename = "sampleDataSizeInMBs")]
    pub sample_data_size_in_mbs: Option<i32>,
    pub properties: Option<Properties>,
}

/// Every field is optional; an empty body starts a plain run of the job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobExecutionDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_started: Option<SdkTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_ended: Option<SdkTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<JobExecutionState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_instance_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_entity_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobExecution {
    pub key: Option<String>,
    pub job_key: Option<String>,
    pub job_type: Option<JobType>,
    pub sub_type: Option<String>,
    pub parent_key: Option<String>,
    pub schedule_instance_key: Option<String>,
    pub lifecycle_state: Option<JobExecutionState>,
    pub time_created: Option<SdkTime>,
    pub time_started: Option<SdkTime>,
    pub time_ended: Option<SdkTime>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    pub process_key: Option<String>,
    pub external_url: Option<String>,
    pub event_key: Option<String>,
    pub data_entity_key: Option<String>,
    pub created_by_id: Option<String>,
    pub updated_by_id: Option<String>,
    pub properties: Option<Properties>,
    pub uri: Option<String>,
}

// Search

/// Body of a catalog search.
///
/// `query` is free text; `faceted_query`, `dimensions`, `sort` and `filters`
/// are passed through as JSON since their grammar is service-defined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faceted_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<serde_json::Value>,
}

impl SearchCriteria {
    /// Free-text search
    #[must_use]
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchTagSummary {
    pub glossary_key: Option<String>,
    pub key: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchTermSummary {
    pub glossary_key: Option<String>,
    pub glossary_name: Option<String>,
    pub key: Option<String>,
    pub name: Option<String>,
    pub parent_term_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResult {
    pub key: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub time_created: Option<SdkTime>,
    pub time_updated: Option<SdkTime>,
    pub tag_summary: Option<Vec<SearchTagSummary>>,
    pub term_summary: Option<Vec<SearchTermSummary>>,
    pub type_name: Option<String>,
    pub external_type_name: Option<String>,
    pub external_data_type: Option<String>,
    pub data_asset_key: Option<String>,
    pub data_asset_type: Option<String>,
    pub data_asset_name: Option<String>,
    pub folder_key: Option<String>,
    pub folder_type: Option<String>,
    pub folder_name: Option<String>,
    /// The service spells this key in lower case
    #[serde(rename = "entitykey")]
    pub entity_key: Option<String>,
    pub entity_type: Option<String>,
    pub entity_name: Option<String>,
    pub glossary_key: Option<String>,
    pub glossary_name: Option<String>,
    pub parent_term_key: Option<String>,
    pub parent_term_name: Option<String>,
    pub created_by_id: Option<String>,
    pub updated_by_id: Option<String>,
    pub path: Option<String>,
}
