pub mod domain {
    pub mod error;
    pub mod repository;
    pub mod model {
        pub mod catalogue;
        pub mod id;
        pub mod material;
    }
}

pub mod application {
    pub mod error;
    pub mod seed;
    pub mod service;
}

pub mod infra {
    pub mod text_store;
}

pub mod interface {
    pub mod shell;
}
