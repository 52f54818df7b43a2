pub mod auth {
    pub mod dto;
    pub mod error_mapper;
    pub mod gate;
    pub mod routes;
}
pub mod error;
pub mod health {
    pub mod routes;
}
pub mod image {
    pub mod error_mapper;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod tags;
