//! Section segmentation — header classification and line bucketing.

pub mod headers;
pub mod segmenter;
