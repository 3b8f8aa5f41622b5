use crate::ENDPOINT;
use crate::models::{
    AttributeSummary, CatalogSummary, EntitySummary, FolderSummary, SearchResult, TermSummary,
};
use crate::requests::{
    CreateCatalogRequest, CreateCatalogResponse, CreateJobExecutionRequest,
    CreateJobExecutionResponse, DeleteCatalogRequest, DeleteCatalogResponse, GetCatalogRequest,
    GetCatalogResponse, GetEntityRequest, GetEntityResponse, GetFolderRequest, GetFolderResponse,
    GetJobDefinitionRequest, GetJobDefinitionResponse, ListAttributesRequest,
    ListAttributesResponse, ListCatalogPermissionsRequest, ListCatalogPermissionsResponse,
    ListCatalogsRequest, ListCatalogsResponse, ListDataAssetPermissionsRequest,
    ListDataAssetPermissionsResponse, ListEntitiesRequest, ListEntitiesResponse,
    ListFoldersRequest, ListFoldersResponse, ListGlossaryPermissionsRequest,
    ListGlossaryPermissionsResponse, ListGlossaryTermsRequest, ListGlossaryTermsResponse,
    SearchCriteriaRequest, SearchCriteriaResponse,
};
use futures_core::Stream;
use oci_common::{BaseClient, ConfigurationProvider, OciError, Region};
use std::sync::Arc;

/// Client for the Data Catalog service.
#[derive(Debug, Clone)]
pub struct DataCatalogClient {
    base: BaseClient,
}

impl DataCatalogClient {
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

    // Catalogs

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn create_catalog(
        &self,
        request: CreateCatalogRequest,
    ) -> Result<CreateCatalogResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_catalog(
        &self,
        request: GetCatalogRequest,
    ) -> Result<GetCatalogResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn delete_catalog(
        &self,
        request: DeleteCatalogRequest,
    ) -> Result<DeleteCatalogResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_catalogs(
        &self,
        request: ListCatalogsRequest,
    ) -> Result<ListCatalogsResponse, OciError> {
        self.base.call(request).await
    }

    pub fn list_catalogs_pages(
        &self,
        request: ListCatalogsRequest,
    ) -> impl Stream<Item = Result<ListCatalogsResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }

    pub fn list_catalogs_items(
        &self,
        request: ListCatalogsRequest,
    ) -> impl Stream<Item = Result<CatalogSummary, OciError>> + Send + 'static {
        self.base.items(request)
    }

    // Harvested objects

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_entity(
        &self,
        request: GetEntityRequest,
    ) -> Result<GetEntityResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_entities(
        &self,
        request: ListEntitiesRequest,
    ) -> Result<ListEntitiesResponse, OciError> {
        self.base.call(request).await
    }

    pub fn list_entities_pages(
        &self,
        request: ListEntitiesRequest,
    ) -> impl Stream<Item = Result<ListEntitiesResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }

    pub fn list_entities_items(
        &self,
        request: ListEntitiesRequest,
    ) -> impl Stream<Item = Result<EntitySummary, OciError>> + Send + 'static {
        self.base.items(request)
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_folder(
        &self,
        request: GetFolderRequest,
    ) -> Result<GetFolderResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_folders(
        &self,
        request: ListFoldersRequest,
    ) -> Result<ListFoldersResponse, OciError> {
        self.base.call(request).await
    }

    pub fn list_folders_pages(
        &self,
        request: ListFoldersRequest,
    ) -> impl Stream<Item = Result<ListFoldersResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }

    pub fn list_folders_items(
        &self,
        request: ListFoldersRequest,
    ) -> impl Stream<Item = Result<FolderSummary, OciError>> + Send + 'static {
        self.base.items(request)
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_attributes(
        &self,
        request: ListAttributesRequest,
    ) -> Result<ListAttributesResponse, OciError> {
        self.base.call(request).await
    }

    pub fn list_attributes_pages(
        &self,
        request: ListAttributesRequest,
    ) -> impl Stream<Item = Result<ListAttributesResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }

    pub fn list_attributes_items(
        &self,
        request: ListAttributesRequest,
    ) -> impl Stream<Item = Result<AttributeSummary, OciError>> + Send + 'static {
        self.base.items(request)
    }

    // Glossaries

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_glossary_terms(
        &self,
        request: ListGlossaryTermsRequest,
    ) -> Result<ListGlossaryTermsResponse, OciError> {
        self.base.call(request).await
    }

    pub fn list_glossary_terms_pages(
        &self,
        request: ListGlossaryTermsRequest,
    ) -> impl Stream<Item = Result<ListGlossaryTermsResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }

    pub fn list_glossary_terms_items(
        &self,
        request: ListGlossaryTermsRequest,
    ) -> impl Stream<Item = Result<TermSummary, OciError>> + Send + 'static {
        self.base.items(request)
    }

    // Permissions

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_catalog_permissions(
        &self,
        request: ListCatalogPermissionsRequest,
    ) -> Result<ListCatalogPermissionsResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_data_asset_permissions(
        &self,
        request: ListDataAssetPermissionsRequest,
    ) -> Result<ListDataAssetPermissionsResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn list_glossary_permissions(
        &self,
        request: ListGlossaryPermissionsRequest,
    ) -> Result<ListGlossaryPermissionsResponse, OciError> {
        self.base.call(request).await
    }

    // Jobs

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn get_job_definition(
        &self,
        request: GetJobDefinitionRequest,
    ) -> Result<GetJobDefinitionResponse, OciError> {
        self.base.call(request).await
    }

    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn create_job_execution(
        &self,
        request: CreateJobExecutionRequest,
    ) -> Result<CreateJobExecutionResponse, OciError> {
        self.base.call(request).await
    }

    // Search

    /// Run a catalog search; `request.page` selects a result page.
    ///
    /// # Errors
    /// See [`BaseClient::call`].
    pub async fn search_criteria(
        &self,
        request: SearchCriteriaRequest,
    ) -> Result<SearchCriteriaResponse, OciError> {
        self.base.call(request).await
    }

    pub fn search_criteria_pages(
        &self,
        request: SearchCriteriaRequest,
    ) -> impl Stream<Item = Result<SearchCriteriaResponse, OciError>> + Send + 'static {
        self.base.pages(request)
    }

    pub fn search_criteria_items(
        &self,
        request: SearchCriteriaRequest,
    ) -> impl Stream<Item = Result<SearchResult, OciError>> + Send + 'static {
        self.base.items(request)
    }
}
