//! Applications, functions and triggers.

use oci_common::{DefinedTags, FreeformTags, SdkTime, oci_enum};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

oci_enum! {
    pub enum ApplicationLifecycleState {
        Creating => "CREATING",
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Updating => "UPDATING",
        Deleting => "DELETING",
        Deleted => "DELETED",
        Failed => "FAILED",
    }
}

oci_enum! {
    pub enum FunctionLifecycleState {
        Creating => "CREATING",
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Updating => "UPDATING",
        Deleting => "DELETING",
        Deleted => "DELETED",
        Failed => "FAILED",
    }
}

oci_enum! {
    pub enum TriggerLifecycleState {
        Creating => "CREATING",
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Updating => "UPDATING",
        Deleting => "DELETING",
        Deleted => "DELETED",
        Failed => "FAILED",
    }
}

oci_enum! {
    pub enum TriggerType {
        Http => "HTTP",
    }
}

impl Default for TriggerType {
    fn default() -> Self {
        Self::Http
    }
}

oci_enum! {
    /// Sort key of the list operations; unlike most services these are camel case
    pub enum ListSortBy {
        TimeCreated => "timeCreated",
        Id => "id",
        DisplayName => "displayName",
    }
}

/// Key/value configuration passed to functions as environment variables
pub type FunctionConfig = HashMap<String, String>;

/// Logical group of functions sharing subnets and configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub id: Option<String>,
    pub compartment_id: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<ApplicationLifecycleState>,
    pub config: Option<FunctionConfig>,
    pub subnet_ids: Option<Vec<String>>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
    pub time_created: Option<SdkTime>,
    pub time_updated: Option<SdkTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationSummary {
    pub id: Option<String>,
    pub compartment_id: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<ApplicationLifecycleState>,
    pub subnet_ids: Option<Vec<String>>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
    pub time_created: Option<SdkTime>,
    pub time_updated: Option<SdkTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationDetails {
    pub compartment_id: String,
    pub display_name: String,
    pub subnet_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<FunctionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<FunctionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Container image deployed into an application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Function {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<FunctionLifecycleState>,
    pub application_id: Option<String>,
    pub compartment_id: Option<String>,
    pub image: Option<String>,
    pub image_digest: Option<String>,
    #[serde(rename = "memoryInMBs")]
    pub memory_in_mbs: Option<i64>,
    pub timeout_in_seconds: Option<i32>,
    pub config: Option<FunctionConfig>,
    /// Base URL for invoking the function
    pub invoke_endpoint: Option<String>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
    pub time_created: Option<SdkTime>,
    pub time_updated: Option<SdkTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionSummary {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<FunctionLifecycleState>,
    pub application_id: Option<String>,
    pub compartment_id: Option<String>,
    pub image: Option<String>,
    pub image_digest: Option<String>,
    #[serde(rename = "memoryInMBs")]
    pub memory_in_mbs: Option<i64>,
    pub timeout_in_seconds: Option<i32>,
    pub invoke_endpoint: Option<String>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
    pub time_created: Option<SdkTime>,
    pub time_updated: Option<SdkTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFunctionDetails {
    pub display_name: String,
    pub application_id: String,
    pub image: String,
    #[serde(rename = "memoryInMBs")]
    pub memory_in_mbs: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_digest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<FunctionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_in_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFunctionDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_digest: Option<String>,
    #[serde(rename = "memoryInMBs", skip_serializing_if = "Option::is_none")]
    pub memory_in_mbs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<FunctionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_in_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Event source bound to a function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trigger {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub function_id: Option<String>,
    pub application_id: Option<String>,
    pub compartment_id: Option<String>,
    #[serde(rename = "type")]
    pub trigger_type: Option<TriggerType>,
    pub source: Option<String>,
    pub endpoint: Option<String>,
    pub lifecycle_state: Option<TriggerLifecycleState>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
    pub time_created: Option<SdkTime>,
    pub time_updated: Option<SdkTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TriggerSummary {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub function_id: Option<String>,
    pub application_id: Option<String>,
    pub compartment_id: Option<String>,
    #[serde(rename = "type")]
    pub trigger_type: Option<TriggerType>,
    pub source: Option<String>,
    pub endpoint: Option<String>,
    pub lifecycle_state: Option<TriggerLifecycleState>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
    pub time_created: Option<SdkTime>,
    pub time_updated: Option<SdkTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTriggerDetails {
    pub display_name: String,
    pub function_id: String,
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

impl CreateTriggerDetails {
    /// HTTP trigger for `function_id`
    #[must_use]
    pub fn http(display_name: impl Into<String>, function_id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            function_id: function_id.into(),
            trigger_type: TriggerType::Http,
            source: None,
            freeform_tags: None,
            defined_tags: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTriggerDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_function_memory_uses_upper_case_unit() {
        let function: Function =
            serde_json::from_str(r#"{"memoryInMBs": 256, "timeoutInSeconds": 30}"#).unwrap();
        assert_eq!(function.memory_in_mbs, Some(256));

        let details = UpdateFunctionDetails {
            memory_in_mbs: Some(512),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&details).unwrap(),
            serde_json::json!({"memoryInMBs": 512})
        );
    }

    #[test]
    fn test_trigger_type_field_is_named_type() {
        let details = CreateTriggerDetails::http("hook", "ocid1.fnfunc.oc1..f");
        assert_eq!(
            serde_json::to_value(&details).unwrap(),
            serde_json::json!({"displayName": "hook", "functionId": "ocid1.fnfunc.oc1..f", "type": "HTTP"})
        );

        let trigger: Trigger = serde_json::from_str(r#"{"type": "STREAMING"}"#).unwrap();
        assert_eq!(trigger.trigger_type.unwrap().as_str(), "STREAMING");
    }
}
