#[macro_export]
macro_rules! include_modules {
    () => {
        extern crate env_logger;
        pub mod library;
        pub mod model;
        pub mod processing;
        pub mod repository;
        pub mod utils;
    }
}
