use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    /// Registration, login and the current account
    Auth,
    /// Catalog, favorites and product images
    Products,
}
