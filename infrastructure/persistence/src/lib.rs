pub mod db;
pub mod cart {
    pub mod repository;
}
pub mod category {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
