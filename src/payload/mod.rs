mod generate;


use serde::{Deserialize, Serialize};

pub use generate::PayloadSpec;

/// The `info` header of a payload: tag plus two uniform integers in [1, 100].
/// Serializes as a 3-element JSON array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info(pub String, pub u32, pub u32);

/// One data entry: label plus two uniform floats in [0, 1).
/// Serializes as a 3-element JSON array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample(pub String, pub f64, pub f64);

/// One request body: `{"info": [...], "data": [[...], ...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payload {
    pub info: Info,
    pub data: Vec<Sample>,
}
