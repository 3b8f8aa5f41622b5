//! Transfer jobs and the appliances, packages and disks attached to them.
//!
//! Appliances, packages and devices are addressed by a short label scoped to
//! their transfer job rather than by OCID.

use oci_common::{DefinedTags, FreeformTags, SdkTime, oci_enum};
use serde::{Deserialize, Serialize};
use std::fmt;

oci_enum! {
    pub enum TransferJobLifecycleState {
        Initiated => "INITIATED",
        Preparing => "PREPARING",
        Active => "ACTIVE",
        Deleted => "DELETED",
        Closed => "CLOSED",
    }
}

oci_enum! {
    /// How data reaches Oracle: customer disks or a leased appliance
    pub enum DeviceType {
        Disk => "DISK",
        Appliance => "APPLIANCE",
    }
}

oci_enum! {
    pub enum TransferApplianceLifecycleState {
        Requested => "REQUESTED",
        OraclePreparing => "ORACLE_PREPARING",
        Shipping => "SHIPPING",
        Delivered => "DELIVERED",
        Preparing => "PREPARING",
        Finalized => "FINALIZED",
        ReturnLabelRequested => "RETURN_LABEL_REQUESTED",
        ReturnLabelGenerating => "RETURN_LABEL_GENERATING",
        ReturnLabelAvailable => "RETURN_LABEL_AVAILABLE",
        ReturnDelayed => "RETURN_DELAYED",
        ReturnShipped => "RETURN_SHIPPED",
        ReturnShippedCancelled => "RETURN_SHIPPED_CANCELLED",
        OracleReceived => "ORACLE_RECEIVED",
        OracleReceivedCancelled => "ORACLE_RECEIVED_CANCELLED",
        Processing => "PROCESSING",
        Complete => "COMPLETE",
        CustomerNeverReceived => "CUSTOMER_NEVER_RECEIVED",
        OracleNeverReceived => "ORACLE_NEVER_RECEIVED",
        CustomerLost => "CUSTOMER_LOST",
        Cancelled => "CANCELLED",
        Deleted => "DELETED",
        Rejected => "REJECTED",
        Error => "ERROR",
    }
}

oci_enum! {
    pub enum EntitlementLifecycleState {
        Creating => "CREATING",
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Deleted => "DELETED",
    }
}

oci_enum! {
    pub enum TransferPackageLifecycleState {
        Preparing => "PREPARING",
        Shipping => "SHIPPING",
        Received => "RECEIVED",
        Processing => "PROCESSING",
        Processed => "PROCESSED",
        Returned => "RETURNED",
        Deleted => "DELETED",
        Cancelled => "CANCELLED",
        CancelledReturned => "CANCELLED_RETURNED",
    }
}

oci_enum! {
    pub enum TransferDeviceLifecycleState {
        Preparing => "PREPARING",
        Ready => "READY",
        Packaged => "PACKAGED",
        Active => "ACTIVE",
        Processing => "PROCESSING",
        Complete => "COMPLETE",
        Missing => "MISSING",
        Error => "ERROR",
        Deleted => "DELETED",
        Cancelled => "CANCELLED",
    }
}

// Transfer jobs

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferJob {
    pub id: Option<String>,
    pub compartment_id: Option<String>,
    /// Object storage bucket the transferred data lands in
    pub upload_bucket_name: Option<String>,
    pub display_name: Option<String>,
    pub label: Option<String>,
    pub device_type: Option<DeviceType>,
    pub creation_user: Option<String>,
    pub lifecycle_state: Option<TransferJobLifecycleState>,
    pub attached_transfer_appliance_labels: Option<Vec<String>>,
    pub attached_transfer_package_labels: Option<Vec<String>>,
    pub attached_transfer_device_labels: Option<Vec<String>>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
    pub time_created: Option<SdkTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferJobSummary {
    pub id: Option<String>,
    pub upload_bucket_name: Option<String>,
    pub display_name: Option<String>,
    pub label: Option<String>,
    pub device_type: Option<DeviceType>,
    pub lifecycle_state: Option<TransferJobLifecycleState>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
    pub time_created: Option<SdkTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferJobDetails {
    pub compartment_id: String,
    pub upload_bucket_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<DeviceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Setting `lifecycle_state` to `CLOSED` closes the job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransferJobDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<TransferJobLifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<DeviceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeTransferJobCompartmentDetails {
    pub compartment_id: String,
}

// Appliances

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addressee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_or_locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_or_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferAppliance {
    pub label: Option<String>,
    pub transfer_job_id: Option<String>,
    pub lifecycle_state: Option<TransferApplianceLifecycleState>,
    pub serial_number: Option<String>,
    pub creation_time: Option<SdkTime>,
    pub customer_received_time: Option<SdkTime>,
    pub customer_returned_time: Option<SdkTime>,
    pub next_billing_time: Option<SdkTime>,
    pub delivery_security_tie_id: Option<String>,
    pub return_security_tie_id: Option<String>,
    pub appliance_delivery_tracking_number: Option<String>,
    pub appliance_return_delivery_tracking_number: Option<String>,
    pub appliance_delivery_vendor: Option<String>,
    pub customer_shipping_address: Option<ShippingAddress>,
    pub upload_status_log_uri: Option<String>,
    pub return_shipping_label_uri: Option<String>,
    pub expected_return_date: Option<SdkTime>,
    pub pickup_window_start_time: Option<SdkTime>,
    pub pickup_window_end_time: Option<SdkTime>,
    pub minimum_storage_capacity_in_terabytes: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferApplianceSummary {
    pub label: Option<String>,
    pub lifecycle_state: Option<TransferApplianceLifecycleState>,
    pub serial_number: Option<String>,
    pub creation_time: Option<SdkTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferApplianceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_shipping_address: Option<ShippingAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_storage_capacity_in_terabytes: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransferApplianceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<TransferApplianceLifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_shipping_address: Option<ShippingAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_return_date: Option<SdkTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_window_start_time: Option<SdkTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_window_end_time: Option<SdkTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_storage_capacity_in_terabytes: Option<i32>,
}

/// List body of `ListTransferAppliances`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MultipleTransferAppliances {
    pub transfer_appliance_objects: Vec<TransferApplianceSummary>,
}

/// Passphrase unlocking an appliance's storage.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferApplianceEncryptionPassphrase {
    pub encryption_passphrase: Option<String>,
}

impl fmt::Debug for TransferApplianceEncryptionPassphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferApplianceEncryptionPassphrase")
            .field("encryption_passphrase", &self.encryption_passphrase.as_ref().map(|_| "***"))
            .finish()
    }
}

// Entitlements

/// Tenancy-level permission to order transfer appliances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferApplianceEntitlement {
    pub id: Option<String>,
    pub compartment_id: Option<String>,
    pub display_name: Option<String>,
    pub requestor_name: Option<String>,
    pub requestor_email: Option<String>,
    pub lifecycle_state: Option<EntitlementLifecycleState>,
    pub lifecycle_state_details: Option<String>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
    pub time_created: Option<SdkTime>,
    pub time_updated: Option<SdkTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferApplianceEntitlementSummary {
    pub id: Option<String>,
    pub compartment_id: Option<String>,
    pub display_name: Option<String>,
    pub requestor_name: Option<String>,
    pub requestor_email: Option<String>,
    pub lifecycle_state: Option<EntitlementLifecycleState>,
    pub freeform_tags: Option<FreeformTags>,
    pub defined_tags: Option<DefinedTags>,
    pub time_created: Option<SdkTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferApplianceEntitlementDetails {
    pub compartment_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requestor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requestor_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

// Packages

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferPackage {
    pub label: Option<String>,
    pub transfer_job_id: Option<String>,
    pub lifecycle_state: Option<TransferPackageLifecycleState>,
    pub creation_time: Option<SdkTime>,
    pub original_package_delivery_tracking_number: Option<String>,
    pub return_package_delivery_tracking_number: Option<String>,
    pub package_delivery_vendor: Option<String>,
    pub transfer_site_shipping_address: Option<String>,
    pub attached_transfer_device_labels: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferPackageSummary {
    pub label: Option<String>,
    pub lifecycle_state: Option<TransferPackageLifecycleState>,
    pub creation_time: Option<SdkTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferPackageDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_package_delivery_tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_package_delivery_tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_delivery_vendor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransferPackageDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_package_delivery_tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_package_delivery_tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_delivery_vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<TransferPackageLifecycleState>,
}

/// Body of both attach and detach device actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceLabels {
    pub device_labels: Vec<String>,
}

impl DeviceLabels {
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            device_labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

pub type AttachDevicesDetails = DeviceLabels;
pub type DetachDevicesDetails = DeviceLabels;

/// List body of `ListTransferPackages`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MultipleTransferPackages {
    pub transfer_package_objects: Vec<TransferPackageSummary>,
}

// Devices

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferDevice {
    pub label: Option<String>,
    pub serial_number: Option<String>,
    #[serde(rename = "iscsiIQN")]
    pub iscsi_iqn: Option<String>,
    pub lifecycle_state: Option<TransferDeviceLifecycleState>,
    pub transfer_job_id: Option<String>,
    pub attached_transfer_package_label: Option<String>,
    pub creation_time: Option<SdkTime>,
    pub upload_status_log_uri: Option<String>,
}

pub type TransferDeviceSummary = TransferDevice;

/// Device as returned by creation, carrying the one-time disk passphrase.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewTransferDevice {
    pub label: Option<String>,
    pub encryption_passphrase: Option<String>,
    #[serde(rename = "iscsiIQN")]
    pub iscsi_iqn: Option<String>,
    pub lifecycle_state: Option<TransferDeviceLifecycleState>,
    pub transfer_job_id: Option<String>,
    pub attached_transfer_package_label: Option<String>,
    pub creation_time: Option<SdkTime>,
}

impl fmt::Debug for NewTransferDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewTransferDevice")
            .field("label", &self.label)
            .field("encryption_passphrase", &self.encryption_passphrase.as_ref().map(|_| "***"))
            .field("iscsi_iqn", &self.iscsi_iqn)
            .field("lifecycle_state", &self.lifecycle_state)
            .field("transfer_job_id", &self.transfer_job_id)
            .field("attached_transfer_package_label", &self.attached_transfer_package_label)
            .field("creation_time", &self.creation_time)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferDeviceDetails {
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransferDeviceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<TransferDeviceLifecycleState>,
}

/// List body of `ListTransferDevices`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MultipleTransferDevices {
    pub transfer_device_objects: Vec<TransferDeviceSummary>,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_device_iqn_keeps_upper_case_suffix() {
        let device: TransferDevice =
            serde_json::from_str(r#"{"label": "XA8XM27EVH", "iscsiIQN": "iqn.2018-01.com.oracle:x"}"#)
                .unwrap();
        assert_eq!(device.iscsi_iqn.as_deref(), Some("iqn.2018-01.com.oracle:x"));
    }

    #[test]
    fn test_passphrases_are_redacted_in_debug() {
        let device = NewTransferDevice {
            label: Some("XA8XM27EVH".to_owned()),
            encryption_passphrase: Some("hunter2".to_owned()),
            ..Default::default()
        };
        let rendered = format!("{device:?}");
        assert!(rendered.contains("XA8XM27EVH"));
        assert!(!rendered.contains("hunter2"));

        let passphrase = TransferApplianceEncryptionPassphrase {
            encryption_passphrase: Some("hunter2".to_owned()),
        };
        assert!(!format!("{passphrase:?}").contains("hunter2"));
    }

    #[test]
    fn test_partial_shipping_address_update_omits_unset_fields() {
        let details = UpdateTransferApplianceDetails {
            customer_shipping_address: Some(ShippingAddress {
                phone_number: Some("+1 555 0100".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&details).unwrap(),
            serde_json::json!({"customerShippingAddress": {"phoneNumber": "+1 555 0100"}})
        );
    }

    #[test]
    fn test_appliance_wrapper_and_unknown_state() {
        let body: MultipleTransferAppliances = serde_json::from_str(
            r#"{"transferApplianceObjects": [{"label": "AP1", "lifecycleState": "IN_CUSTOMS"}]}"#,
        )
        .unwrap();
        let state = body.transfer_appliance_objects[0].lifecycle_state.clone().unwrap();
        assert!(state.is_unknown());
        assert_eq!(state.as_str(), "IN_CUSTOMS");
    }

    #[test]
    fn test_attach_details_shape() {
        assert_eq!(
            serde_json::to_value(DeviceLabels::new(["D1", "D2"])).unwrap(),
            serde_json::json!({"deviceLabels": ["D1", "D2"]})
        );
    }
}
