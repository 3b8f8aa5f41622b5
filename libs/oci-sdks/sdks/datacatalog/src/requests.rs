//! Request and response types of the Data Catalog operations.
//!
//! Harvested objects are addressed by keys nested under a catalog OCID.
//! Reads accept a repeated `fields` selector restricting the returned
//! properties.

use crate::models::{
    AttributeFields, AttributeSummary, Catalog, CatalogPermissionsFields,
    CatalogPermissionsSummary, CatalogSummary, CreateCatalogDetails, CreateJobExecutionDetails,
    DataAssetPermissionsFields, DataAssetPermissionsSummary, Entity, EntityFields, EntitySummary,
    Folder, FolderFields, FolderSummary, GlossaryPermissionsFields, GlossaryPermissionsSummary,
    GlossaryTermFields, JobDefinition, JobDefinitionFields, JobExecution, LifecycleState,
    SearchCriteria, SearchResult, SortBy, TermSummary, TermWorkflowStatus,
};
use oci_common::pagination::PageableRequest;
use oci_common::{
    EmptyResponse, ListResponse, OciRequest, RequestMetadata, RequestTemplate, ResourceResponse,
    SortOrder,
};

pub type CreateCatalogResponse = ResourceResponse<Catalog>;
pub type GetCatalogResponse = ResourceResponse<Catalog>;
pub type DeleteCatalogResponse = EmptyResponse;
pub type ListCatalogsResponse = ListResponse<CatalogSummary>;
pub type GetEntityResponse = ResourceResponse<Entity>;
pub type ListEntitiesResponse = ListResponse<EntitySummary>;
pub type GetFolderResponse = ResourceResponse<Folder>;
pub type ListFoldersResponse = ListResponse<FolderSummary>;
pub type ListAttributesResponse = ListResponse<AttributeSummary>;
pub type ListGlossaryTermsResponse = ListResponse<TermSummary>;
pub type ListCatalogPermissionsResponse = ListResponse<CatalogPermissionsSummary>;
pub type ListDataAssetPermissionsResponse = ListResponse<DataAssetPermissionsSummary>;
pub type ListGlossaryPermissionsResponse = ListResponse<GlossaryPermissionsSummary>;
pub type GetJobDefinitionResponse = ResourceResponse<JobDefinition>;
pub type CreateJobExecutionResponse = ResourceResponse<JobExecution>;
/// Search hits; the collection's `count` and facet aggregations are not kept.
pub type SearchCriteriaResponse = ListResponse<SearchResult>;

macro_rules! pageable {
    ($($name:ident),+ $(,)?) => {
        $(
            impl PageableRequest for $name {
                fn set_page(&mut self, page: Option<String>) {
                    self.page = page;
                }
            }
        )+
    };
}

// Catalogs

#[derive(Debug, Clone, Default)]
pub struct CreateCatalogRequest {
    pub create_catalog_details: CreateCatalogDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl CreateCatalogRequest {
    #[must_use]
    pub fn new(details: CreateCatalogDetails) -> Self {
        Self {
            create_catalog_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for CreateCatalogRequest {
    type Response = CreateCatalogResponse;
    const OPERATION: &'static str = "CreateCatalog";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::post("/catalogs")
            .json_body(&self.create_catalog_details)
            .opc_retry_token(self.opc_retry_token.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }

    fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.opc_retry_token)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetCatalogRequest {
    pub catalog_id: String,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl GetCatalogRequest {
    #[must_use]
    pub fn new(catalog_id: impl Into<String>) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for GetCatalogRequest {
    type Response = GetCatalogResponse;
    const OPERATION: &'static str = "GetCatalog";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/catalogs/{catalogId}")
            .path_param("catalogId", &self.catalog_id)
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteCatalogRequest {
    pub catalog_id: String,
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl DeleteCatalogRequest {
    #[must_use]
    pub fn new(catalog_id: impl Into<String>) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for DeleteCatalogRequest {
    type Response = DeleteCatalogResponse;
    const OPERATION: &'static str = "DeleteCatalog";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::delete("/catalogs/{catalogId}")
            .path_param("catalogId", &self.catalog_id)
            .if_match(self.if_match.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListCatalogsRequest {
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

impl ListCatalogsRequest {
    #[must_use]
    pub fn new(compartment_id: impl Into<String>) -> Self {
        Self {
            compartment_id: compartment_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for ListCatalogsRequest {
    type Response = ListCatalogsResponse;
    const OPERATION: &'static str = "ListCatalogs";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/catalogs")
            .required_query("compartmentId", &self.compartment_id)
            .query("displayName", self.display_name.as_deref())
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .query("sortBy", self.sort_by.as_ref())
            .query("sortOrder", self.sort_order.as_ref())
            .query("limit", self.limit.as_ref())
            .query("page", self.page.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

// Entities, folders and attributes

#[derive(Debug, Clone, Default)]
pub struct GetEntityRequest {
    pub catalog_id: String,
    pub data_asset_key: String,
    pub entity_key: String,
    pub fields: Option<Vec<EntityFields>>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl GetEntityRequest {
    #[must_use]
    pub fn new(
        catalog_id: impl Into<String>,
        data_asset_key: impl Into<String>,
        entity_key: impl Into<String>,
    ) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            data_asset_key: data_asset_key.into(),
            entity_key: entity_key.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for GetEntityRequest {
    type Response = GetEntityResponse;
    const OPERATION: &'static str = "GetEntity";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}")
            .path_param("catalogId", &self.catalog_id)
            .path_param("dataAssetKey", &self.data_asset_key)
            .path_param("entityKey", &self.entity_key)
            .query_multi("fields", self.fields.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListEntitiesRequest {
    pub catalog_id: String,
    pub data_asset_key: String,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<LifecycleState>,
    pub fields: Option<Vec<EntityFields>>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListEntitiesRequest {
    #[must_use]
    pub fn new(catalog_id: impl Into<String>, data_asset_key: impl Into<String>) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            data_asset_key: data_asset_key.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for ListEntitiesRequest {
    type Response = ListEntitiesResponse;
    const OPERATION: &'static str = "ListEntities";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities")
            .path_param("catalogId", &self.catalog_id)
            .path_param("dataAssetKey", &self.data_asset_key)
            .query("displayName", self.display_name.as_deref())
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .query_multi("fields", self.fields.as_deref())
            .query("sortBy", self.sort_by.as_ref())
            .query("sortOrder", self.sort_order.as_ref())
            .query("limit", self.limit.as_ref())
            .query("page", self.page.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetFolderRequest {
    pub catalog_id: String,
    pub data_asset_key: String,
    pub folder_key: String,
    pub fields: Option<Vec<FolderFields>>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl GetFolderRequest {
    #[must_use]
    pub fn new(
        catalog_id: impl Into<String>,
        data_asset_key: impl Into<String>,
        folder_key: impl Into<String>,
    ) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            data_asset_key: data_asset_key.into(),
            folder_key: folder_key.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for GetFolderRequest {
    type Response = GetFolderResponse;
    const OPERATION: &'static str = "GetFolder";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/catalogs/{catalogId}/dataAssets/{dataAssetKey}/folders/{folderKey}")
            .path_param("catalogId", &self.catalog_id)
            .path_param("dataAssetKey", &self.data_asset_key)
            .path_param("folderKey", &self.folder_key)
            .query_multi("fields", self.fields.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListFoldersRequest {
    pub catalog_id: String,
    pub data_asset_key: String,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<LifecycleState>,
    pub fields: Option<Vec<FolderFields>>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListFoldersRequest {
    #[must_use]
    pub fn new(catalog_id: impl Into<String>, data_asset_key: impl Into<String>) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            data_asset_key: data_asset_key.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for ListFoldersRequest {
    type Response = ListFoldersResponse;
    const OPERATION: &'static str = "ListFolders";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/catalogs/{catalogId}/dataAssets/{dataAssetKey}/folders")
            .path_param("catalogId", &self.catalog_id)
            .path_param("dataAssetKey", &self.data_asset_key)
            .query("displayName", self.display_name.as_deref())
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .query_multi("fields", self.fields.as_deref())
            .query("sortBy", self.sort_by.as_ref())
            .query("sortOrder", self.sort_order.as_ref())
            .query("limit", self.limit.as_ref())
            .query("page", self.page.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListAttributesRequest {
    pub catalog_id: String,
    pub data_asset_key: String,
    pub entity_key: String,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<LifecycleState>,
    pub fields: Option<Vec<AttributeFields>>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListAttributesRequest {
    #[must_use]
    pub fn new(
        catalog_id: impl Into<String>,
        data_asset_key: impl Into<String>,
        entity_key: impl Into<String>,
    ) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            data_asset_key: data_asset_key.into(),
            entity_key: entity_key.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for ListAttributesRequest {
    type Response = ListAttributesResponse;
    const OPERATION: &'static str = "ListAttributes";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get(
            "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/entities/{entityKey}/attributes",
        )
        .path_param("catalogId", &self.catalog_id)
        .path_param("dataAssetKey", &self.data_asset_key)
        .path_param("entityKey", &self.entity_key)
        .query("displayName", self.display_name.as_deref())
        .query("lifecycleState", self.lifecycle_state.as_ref())
        .query_multi("fields", self.fields.as_deref())
        .query("sortBy", self.sort_by.as_ref())
        .query("sortOrder", self.sort_order.as_ref())
        .query("limit", self.limit.as_ref())
        .query("page", self.page.as_deref())
        .opc_request_id(self.opc_request_id.as_deref())
    }
}

// Glossaries

#[derive(Debug, Clone, Default)]
pub struct ListGlossaryTermsRequest {
    pub catalog_id: String,
    pub glossary_key: String,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<LifecycleState>,
    pub parent_term_key: Option<String>,
    pub is_allowed_to_have_child_terms: Option<bool>,
    pub workflow_status: Option<TermWorkflowStatus>,
    /// Full path of the term, e.g. `glossary.parent.term`
    pub path: Option<String>,
    pub fields: Option<Vec<GlossaryTermFields>>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListGlossaryTermsRequest {
    #[must_use]
    pub fn new(catalog_id: impl Into<String>, glossary_key: impl Into<String>) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            glossary_key: glossary_key.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for ListGlossaryTermsRequest {
    type Response = ListGlossaryTermsResponse;
    const OPERATION: &'static str = "ListGlossaryTerms";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/catalogs/{catalogId}/glossaries/{glossaryKey}/terms")
            .path_param("catalogId", &self.catalog_id)
            .path_param("glossaryKey", &self.glossary_key)
            .query("displayName", self.display_name.as_deref())
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .query("parentTermKey", self.parent_term_key.as_deref())
            .query(
                "isAllowedToHaveChildTerms",
                self.is_allowed_to_have_child_terms.as_ref(),
            )
            .query("workflowStatus", self.workflow_status.as_ref())
            .query("path", self.path.as_deref())
            .query_multi("fields", self.fields.as_deref())
            .query("sortBy", self.sort_by.as_ref())
            .query("sortOrder", self.sort_order.as_ref())
            .query("limit", self.limit.as_ref())
            .query("page", self.page.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

// Permissions

#[derive(Debug, Clone, Default)]
pub struct ListCatalogPermissionsRequest {
    pub catalog_id: String,
    pub display_name: Option<String>,
    pub fields: Option<Vec<CatalogPermissionsFields>>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl ListCatalogPermissionsRequest {
    #[must_use]
    pub fn new(catalog_id: impl Into<String>) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for ListCatalogPermissionsRequest {
    type Response = ListCatalogPermissionsResponse;
    const OPERATION: &'static str = "ListCatalogPermissions";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/catalogs/{catalogId}/permissions")
            .path_param("catalogId", &self.catalog_id)
            .query("displayName", self.display_name.as_deref())
            .query_multi("fields", self.fields.as_deref())
            .query("sortBy", self.sort_by.as_ref())
            .query("sortOrder", self.sort_order.as_ref())
            .query("limit", self.limit.as_ref())
            .query("page", self.page.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

/// Permission lists below a catalog, filtered by `name` rather than
/// `displayName`.
macro_rules! nested_permissions_list {
    ($name:ident, $response:ty, $op:literal, $path:literal, $key:ident, $key_wire:literal, $fields:ty) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub catalog_id: String,
            pub $key: String,
            pub name: Option<String>,
            pub fields: Option<Vec<$fields>>,
            pub sort_by: Option<SortBy>,
            pub sort_order: Option<SortOrder>,
            pub limit: Option<i32>,
            pub page: Option<String>,
            pub opc_request_id: Option<String>,
            pub metadata: RequestMetadata,
        }

        impl $name {
            #[must_use]
            pub fn new(catalog_id: impl Into<String>, $key: impl Into<String>) -> Self {
                Self {
                    catalog_id: catalog_id.into(),
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
                    .path_param("catalogId", &self.catalog_id)
                    .path_param($key_wire, &self.$key)
                    .query("name", self.name.as_deref())
                    .query_multi("fields", self.fields.as_deref())
                    .query("sortBy", self.sort_by.as_ref())
                    .query("sortOrder", self.sort_order.as_ref())
                    .query("limit", self.limit.as_ref())
                    .query("page", self.page.as_deref())
                    .opc_request_id(self.opc_request_id.as_deref())
            }
        }
    };
}

nested_permissions_list!(
    ListDataAssetPermissionsRequest,
    ListDataAssetPermissionsResponse,
    "ListDataAssetPermissions",
    "/catalogs/{catalogId}/dataAssets/{dataAssetKey}/permissions",
    data_asset_key,
    "dataAssetKey",
    DataAssetPermissionsFields
);
nested_permissions_list!(
    ListGlossaryPermissionsRequest,
    ListGlossaryPermissionsResponse,
    "ListGlossaryPermissions",
    "/catalogs/{catalogId}/glossaries/{glossaryKey}/permissions",
    glossary_key,
    "glossaryKey",
    GlossaryPermissionsFields
);

// Jobs

#[derive(Debug, Clone, Default)]
pub struct GetJobDefinitionRequest {
    pub catalog_id: String,
    pub job_definition_key: String,
    pub fields: Option<Vec<JobDefinitionFields>>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl GetJobDefinitionRequest {
    #[must_use]
    pub fn new(catalog_id: impl Into<String>, job_definition_key: impl Into<String>) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            job_definition_key: job_definition_key.into(),
            ..Default::default()
        }
    }
}

impl OciRequest for GetJobDefinitionRequest {
    type Response = GetJobDefinitionResponse;
    const OPERATION: &'static str = "GetJobDefinition";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::get("/catalogs/{catalogId}/jobDefinitions/{jobDefinitionKey}")
            .path_param("catalogId", &self.catalog_id)
            .path_param("jobDefinitionKey", &self.job_definition_key)
            .query_multi("fields", self.fields.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateJobExecutionRequest {
    pub catalog_id: String,
    pub job_key: String,
    pub create_job_execution_details: CreateJobExecutionDetails,
    pub opc_retry_token: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl CreateJobExecutionRequest {
    #[must_use]
    pub fn new(
        catalog_id: impl Into<String>,
        job_key: impl Into<String>,
        details: CreateJobExecutionDetails,
    ) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            job_key: job_key.into(),
            create_job_execution_details: details,
            ..Default::default()
        }
    }
}

impl OciRequest for CreateJobExecutionRequest {
    type Response = CreateJobExecutionResponse;
    const OPERATION: &'static str = "CreateJobExecution";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::post("/catalogs/{catalogId}/jobs/{jobKey}/executions")
            .path_param("catalogId", &self.catalog_id)
            .path_param("jobKey", &self.job_key)
            .json_body(&self.create_job_execution_details)
            .opc_retry_token(self.opc_retry_token.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }

    fn retry_token_mut(&mut self) -> Option<&mut Option<String>> {
        Some(&mut self.opc_retry_token)
    }
}

// Search

/// Search a catalog. Pages are requested with a POST carrying the same body.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteriaRequest {
    pub catalog_id: String,
    pub search_criteria_details: Option<SearchCriteria>,
    pub display_name: Option<String>,
    pub name: Option<String>,
    pub lifecycle_state: Option<LifecycleState>,
    /// Service-side search timeout, e.g. `"10s"`
    pub timeout: Option<String>,
    pub limit: Option<i32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub metadata: RequestMetadata,
}

impl SearchCriteriaRequest {
    #[must_use]
    pub fn new(catalog_id: impl Into<String>, criteria: SearchCriteria) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            search_criteria_details: Some(criteria),
            ..Default::default()
        }
    }
}

impl OciRequest for SearchCriteriaRequest {
    type Response = SearchCriteriaResponse;
    const OPERATION: &'static str = "SearchCriteria";

    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn render(&self) -> RequestTemplate {
        RequestTemplate::post("/catalogs/{catalogId}/search")
            .path_param("catalogId", &self.catalog_id)
            .optional_json_body(self.search_criteria_details.as_ref())
            .query("displayName", self.display_name.as_deref())
            .query("name", self.name.as_deref())
            .query("lifecycleState", self.lifecycle_state.as_ref())
            .query("timeout", self.timeout.as_deref())
            .query("limit", self.limit.as_ref())
            .query("page", self.page.as_deref())
            .opc_request_id(self.opc_request_id.as_deref())
    }
}

pageable!(
    ListCatalogsRequest,
    ListEntitiesRequest,
    ListFoldersRequest,
    ListAttributesRequest,
    ListGlossaryTermsRequest,
    ListCatalogPermissionsRequest,
    ListDataAssetPermissionsRequest,
    ListGlossaryPermissionsRequest,
    SearchCriteriaRequest,
);

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    const BASE: &str = "https://datacatalog.us-phoenix-1.oci.oraclecloud.com/20190325";
    const CATALOG: &str = "ocid1.datacatalog.oc1..cat";

    #[test]
    fn test_fields_repeat_the_query_key() {
        let request = GetEntityRequest {
            fields: Some(vec![EntityFields::Key, EntityFields::DisplayName, EntityFields::Path]),
            ..GetEntityRequest::new(CATALOG, "asset 1", "e/1")
        }
        .render()
        .build(BASE)
        .unwrap();

        assert_eq!(
            request.uri().path(),
            format!("/20190325/catalogs/{CATALOG}/dataAssets/asset%201/entities/e%2F1")
        );
        assert_eq!(
            request.uri().query(),
            Some("fields=key&fields=displayName&fields=path")
        );
    }

    #[test]
    fn test_empty_fields_vector_adds_nothing() {
        let request = ListFoldersRequest {
            fields: Some(Vec::new()),
            ..ListFoldersRequest::new(CATALOG, "asset1")
        }
        .render()
        .build(BASE)
        .unwrap();
        assert_eq!(request.uri().query(), None);
    }

    #[test]
    fn test_search_posts_body_with_query_filters() {
        let request = SearchCriteriaRequest {
            lifecycle_state: Some(LifecycleState::Active),
            timeout: Some("10s".to_owned()),
            ..SearchCriteriaRequest::new(CATALOG, SearchCriteria::query("customer"))
        }
        .render()
        .build(BASE)
        .unwrap();

        assert_eq!(request.method(), "POST");
        assert_eq!(request.uri().query(), Some("lifecycleState=ACTIVE&timeout=10s"));
        let body: serde_json::Value = serde_json::from_slice(request.body()).unwrap();
        assert_eq!(body, serde_json::json!({"query": "customer"}));
    }

    #[test]
    fn test_missing_glossary_key_fails_before_io() {
        let err = ListGlossaryPermissionsRequest::new(CATALOG, "")
            .render()
            .build(BASE)
            .unwrap_err();
        assert!(
            matches!(err, oci_common::OciError::MissingParameter { name } if name == "glossaryKey")
        );
    }

    #[test]
    fn test_list_catalogs_requires_compartment() {
        let err = ListCatalogsRequest::default().render().build(BASE).unwrap_err();
        assert!(
            matches!(err, oci_common::OciError::MissingParameter { name } if name == "compartmentId")
        );
    }
}
