//! Media adapter. File-based image ingestion and data-URI handling.

pub mod image_file;

pub use image_file::{decode_data_uri, load_image_as_data_uri, DecodedImage, MAX_IMAGE_BYTES};
