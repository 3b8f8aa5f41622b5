//! Request and response types of the Functions management operations.
//!
//! Applications, functions and triggers share one operation shape, generated
//! by the local `*_op!` macros. Every mutating call and the function and
//! trigger reads carry an `opc-retry-token`.

use crate::models::{
    Application, ApplicationLifecycleState, ApplicationSummary, CreateApplicationDetails,
    CreateFunctionDetails, CreateTriggerDetails, Function, FunctionLifecycleState,
    FunctionSummary, ListSortBy, Trigger, TriggerLifecycleState, TriggerSummary,
    UpdateApplicationDetails, UpdateFunctionDetails, UpdateTriggerDetails,
};
use oci_common::pagination::PageableRequest;
use oci_common::{
    EmptyResponse, ListResponse, OciRequest, RequestMetadata, RequestTemplate, ResourceResponse,
    SortOrder,
};

pub type CreateApplicationResponse = ResourceResponse<Application>;
pub type GetApplicationResponse = ResourceResponse<Application>;
pub type UpdateApplicationResponse = ResourceResponse<Application>;
pub type DeleteApplicationResponse = EmptyResponse;
pub type ListApplicationsResponse = ListResponse<ApplicationSummary>;

pub type CreateFunctionResponse = ResourceResponse<Function>;
pub type GetFunctionResponse = ResourceResponse<Function>;
pub type UpdateFunctionResponse = ResourceResponse<Function>;
pub type DeleteFunctionResponse = EmptyResponse;
pub type ListFunctionsResponse = ListResponse<FunctionSummary>;

pub type CreateTriggerResponse = ResourceResponse<Trigger>;
pub type GetTriggerResponse = ResourceResponse<Trigger>;
pub type UpdateTriggerResponse = ResourceResponse<Trigger>;
pub type DeleteTriggerResponse = EmptyResponse;
pub type ListTriggersResponse = ListResponse<TriggerSummary>;

macro_rules! retry_token_access {
    () => {
        fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
            Some(&mut self.opc_retry_token)
        }
    };
}

/// `POST /collection` with a details body and a retry token.
macro_rules! create_op {
    ($name:ident, $response:ty, $op:literal, $path:literal, $field:ident: $details:ty) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub $field: $details,
            pub opc_retry_token: Option<String>,
            pub opc_request_id: Option<String>,
            pub metadata: RequestMetadata,
        }

        impl $name {
            #[must_use]
            pub fn new(details: $details) -> Self {
                Self {
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
                RequestTemplate::post($path)
                    .json_body(&self.$field)
                    .opc_retry_token(self.opc_retry_token.as_deref())
                    .opc_request_id(self.opc_request_id.as_deref())
            }

            retry_token_access!();
        }
    };
}

/// `GET /collection/{id}`; the `token` form also sends `opc-retry-token`.
macro_rules! get_op {
    ($name:ident, $response:ty, $op:literal, $path:literal, $id:ident, $id_wire:literal) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub $id: String,
            pub opc_request_id: Option<String>,
            pub metadata: RequestMetadata,
        }

        impl $name {
            #[must_use]
            pub fn new($id: impl Into<String>) -> Self {
                Self {
                    $id: $id.into(),
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
                    .path_param($id_wire, &self.$id)
                    .opc_request_id(self.opc_request_id.as_deref())
            }
        }
    };
    (token $name:ident, $response:ty, $op:literal, $path:literal, $id:ident, $id_wire:literal) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub $id: String,
            pub opc_retry_token: Option<String>,
            pub opc_request_id: Option<String>,
            pub metadata: RequestMetadata,
        }

        impl $name {
            #[must_use]
            pub fn new($id: impl Into<String>) -> Self {
                Self {
                    $id: $id.into(),
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
                    .path_param($id_wire, &self.$id)
                    .opc_retry_token(self.opc_retry_token.as_deref())
                    .opc_request_id(self.opc_request_id.as_deref())
            }

            retry_token_access!();
        }
    };
}

/// `PUT /collection/{id}` with `if-match` and a retry token.
macro_rules! update_op {
    ($name:ident, $response:ty, $op:literal, $path:literal, $id:ident, $id_wire:literal, $field:ident: $details:ty) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub $id: String,
            pub $field: $details,
            pub if_match: Option<String>,
            pub opc_retry_token: Option<String>,
            pub opc_request_id: Option<String>,
            pub metadata: RequestMetadata,
        }

        impl $name {
            #[must_use]
            pub fn new($id: impl Into<String>, details: $details) -> Self {
                Self {
                    $id: $id.into(),
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
                RequestTemplate::put($path)
                    .path_param($id_wire, &self.$id)
                    .json_body(&self.$field)
                    .if_match(self.if_match.as_deref())
                    .opc_retry_token(self.opc_retry_token.as_deref())
                    .opc_request_id(self.opc_request_id.as_deref())
            }

            retry_token_access!();
        }
    };
}

/// `DELETE /collection/{id}` with `if-match` and a retry token.
macro_rules! delete_op {
    ($name:ident, $response:ty, $op:literal, $path:literal, $id:ident, $id_wire:literal) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub $id: String,
            pub if_match: Option<String>,
            pub opc_retry_token: Option<String>,
            pub opc_request_id: Option<String>,
            pub metadata: RequestMetadata,
        }

        impl $name {
            #[must_use]
            pub fn new($id: impl Into<String>) -> Self {
                Self {
                    $id: $id.into(),
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
                RequestTemplate::delete($path)
                    .path_param($id_wire, &self.$id)
                    .if_match(self.if_match.as_deref())
                    .opc_retry_token(self.opc_retry_token.as_deref())
                    .opc_request_id(self.opc_request_id.as_deref())
            }

            retry_token_access!();
        }
    };
}

// Applications

create_op!(
    CreateApplicationRequest,
    CreateApplicationResponse,
    "CreateApplication",
    "/applications",
    create_application_details: CreateApplicationDetails
);
get_op!(
    GetApplicationRequest,
    GetApplicationResponse,
    "GetApplication",
    "/applications/{applicationId}",
    application_id,
    "applicationId"
);
update_op!(
    UpdateApplicationRequest,
    UpdateApplicationResponse,
    "UpdateApplication",
    "/applications/{applicationId}",
    application_id,
    "applicationId",
    update_application_details: UpdateApplicationDetails
);
delete_op!(
    DeleteApplicationRequest,
    DeleteApplicationResponse,
    "DeleteApplication",
    "/applications/{applicationId}",
    application_id,
    "applicationId"
);

#[derive(Debug, Clone, Default)]
pub struct ListApplicationsRequest {
    pub compartment_id: String,
    pub lifecycle_state: Option<ApplicationLifecycleState>,
    pub display_name: Option<String>,
    /// Exact application OCID filter
    pub id: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub sort_by: Option<ListSortBy>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListApplicationsRequest {
    #[must_use]
    pub fn new(compartment_id: impl Into<String>) -> Self {
        Self {
            compartment_id: compartment_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for ListApplicationsRequest {
    type Response = ListApplicationsResponse;
    const OPERATION: &'static str = "ListApplications";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/applications")
            .required_query("compartmentId", &self.compartment_id)
            .query("limit", self.limit.as_ref())
            .query("page", self.page.as_deref())
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .query("displayName", self.display_name.as_deref())
            .query("id", self.id.as_deref())
            .query("sortOrder", self.sort_order.as_ref())
            .query("sortBy", self.sort_by.as_ref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

impl PageableRequest for ListApplicationsRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

// Functions

create_op!(
    CreateFunctionRequest,
    CreateFunctionResponse,
    "CreateFunction",
    "/functions",
    create_function_details: CreateFunctionDetails
);
get_op!(token
    GetFunctionRequest,
    GetFunctionResponse,
    "GetFunction",
    "/functions/{functionId}",
    function_id,
    "functionId"
);
update_op!(
    UpdateFunctionRequest,
    UpdateFunctionResponse,
    "UpdateFunction",
    "/functions/{functionId}",
    function_id,
    "functionId",
    update_function_details: UpdateFunctionDetails
);
delete_op!(
    DeleteFunctionRequest,
    DeleteFunctionResponse,
    "DeleteFunction",
    "/functions/{functionId}",
    function_id,
    "functionId"
);

#[derive(Debug, Clone, Default)]
pub struct ListFunctionsRequest {
    pub application_id: String,
    pub lifecycle_state: Option<FunctionLifecycleState>,
    pub display_name: Option<String>,
    pub id: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub sort_by: Option<ListSortBy>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListFunctionsRequest {
    #[must_use]
    pub fn new(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for ListFunctionsRequest {
    type Response = ListFunctionsResponse;
    const OPERATION: &'static str = "ListFunctions";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/functions")
            .required_query("applicationId", &self.application_id)
            .query("limit", self.limit.as_ref())
            .query("page", self.page.as_deref())
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .query("displayName", self.display_name.as_deref())
            .query("id", self.id.as_deref())
            .query("sortOrder", self.sort_order.as_ref())
            .query("sortBy", self.sort_by.as_ref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

impl PageableRequest for ListFunctionsRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

// Triggers

create_op!(
    CreateTriggerRequest,
    CreateTriggerResponse,
    "CreateTrigger",
    "/triggers",
    create_trigger_details: CreateTriggerDetails
);
get_op!(token
    GetTriggerRequest,
    GetTriggerResponse,
    "GetTrigger",
    "/triggers/{triggerId}",
    trigger_id,
    "triggerId"
);
update_op!(
    UpdateTriggerRequest,
    UpdateTriggerResponse,
    "UpdateTrigger",
    "/triggers/{triggerId}",
    trigger_id,
    "triggerId",
    update_trigger_details: UpdateTriggerDetails
);
delete_op!(
    DeleteTriggerRequest,
    DeleteTriggerResponse,
    "DeleteTrigger",
    "/triggers/{triggerId}",
    trigger_id,
    "triggerId"
);

#[derive(Debug, Clone, Default)]
pub struct ListTriggersRequest {
    pub application_id: String,
    pub function_id: Option<String>,
    pub lifecycle_state: Option<TriggerLifecycleState>,
    pub display_name: Option<String>,
    pub id: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub sort_by: Option<ListSortBy>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListTriggersRequest {
    #[must_use]
    pub fn new(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for ListTriggersRequest {
    type Response = ListTriggersResponse;
    const OPERATION: &'static str = "ListTriggers";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/triggers")
            .required_query("applicationId", &self.application_id)
            .query("functionId", self.function_id.as_deref())
            .query("limit", self.limit.as_ref())
            .query("page", self.page.as_deref())
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .query("displayName", self.display_name.as_deref())
            .query("id", self.id.as_deref())
            .query("sortOrder", self.sort_order.as_ref())
            .query("sortBy", self.sort_by.as_ref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

impl PageableRequest for ListTriggersRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}
