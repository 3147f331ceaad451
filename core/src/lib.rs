pub mod address_generator;
pub mod batch;
pub mod clock;
pub mod config;
pub mod customer_generator;
pub mod email_generator;
pub mod engine;
pub mod error;
pub mod name_generator;
pub mod phone_generator;
pub mod review_corpus;
pub mod review_generator;
pub mod rng;
pub mod template;
pub mod types;
pub mod weighted;
