pub mod composer;
pub mod error;
pub mod matcher;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod seed;
pub mod stylist;
