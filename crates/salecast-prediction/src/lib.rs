//! # salecast-prediction
//!
//! The forecast engine. One request runs through four steps:
//!
//! | Step | Failure |
//! |------|---------|
//! | Encode store and product labels | `UnknownCategory` |
//! | Look up (store, product) history | `NoHistory` |
//! | Assemble the ordered feature vector | `FeatureMissing` |
//! | Score and threshold into advice | — |
//!
//! Thresholding: above the global mean advises stocking more, below the
//! stock-less fraction of it advises stocking less, anything between holds.

pub mod advice;
pub mod assembler;
pub mod engine;
pub mod request;

pub use advice::advise;
pub use engine::ForecastEngine;
pub use request::ForecastRequest;
