use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Prices are exact decimals, sent as JSON numbers or strings.
#[derive(ToSchema)]
pub struct CreateProductDoc {
    pub name: String,
    #[schema(value_type = String, example = "1000.00")]
    pub price: String,
}

#[derive(ToSchema)]
pub struct CreateMenuGroupDoc { pub name: String }

#[derive(ToSchema)]
pub struct MenuItemDoc { pub product_id: i64, pub quantity: i64 }

#[derive(ToSchema)]
pub struct CreateMenuDoc {
    pub name: String,
    #[schema(value_type = String, example = "17000.00")]
    pub price: String,
    pub menu_group_id: i64,
    pub items: Vec<MenuItemDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::list,
        crate::routes::products::create,
        crate::routes::menu_groups::list,
        crate::routes::menu_groups::create,
        crate::routes::menus::list,
        crate::routes::menus::create,
    ),
    components(
        schemas(
            HealthResponse,
            CreateProductDoc,
            CreateMenuGroupDoc,
            MenuItemDoc,
            CreateMenuDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products"),
        (name = "menu-groups"),
        (name = "menus")
    )
)]
pub struct ApiDoc;
