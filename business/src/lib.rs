pub mod application {
    pub mod image {
        pub mod get;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_favorites;
        pub mod image_files;
        pub mod search;
        pub mod toggle_favorite;
        pub mod update;
    }
    pub mod user {
        pub mod authenticate;
        pub mod login;
        pub mod register;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod image {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod get;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod images;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_favorites;
            pub mod search;
            pub mod toggle_favorite;
            pub mod update;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod authenticate;
            pub mod login;
            pub mod register;
        }
    }
}
