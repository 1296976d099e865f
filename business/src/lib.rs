pub mod application {
    pub mod cart {
        pub mod add_product;
        pub mod sessions;
        pub mod store;
    }
    pub mod category {
        pub mod get_menu;
    }
    pub mod checkout {
        pub mod create_link;
    }
    pub mod product {
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_by_slug;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod snapshot;
        pub mod store;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_product;
        }
    }
    pub mod category {
        pub mod errors;
        pub mod menu;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_menu;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod message;
        pub mod model;
        pub mod use_cases {
            pub mod create_link;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_by_slug;
        }
    }
    pub mod shared {
        pub mod money;
        pub mod value_objects;
    }
}
