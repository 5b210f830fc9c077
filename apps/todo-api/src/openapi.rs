use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        version = "1.0",
        description = "Create, fetch, list and delete todo items"
    ),
    paths(crate::api::health::ready_handler),
    nest(
        (path = "/api/v1", api = domain_todos::TodosApiDoc)
    ),
    tags((name = "health", description = "Probes"))
)]
pub struct ApiDoc;
