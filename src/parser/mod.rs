pub mod document;
pub mod hex;
pub mod sidecar;
pub mod timestamp;

pub use document::parse_document;
pub use hex::parse_hex_color;
pub use sidecar::SidecarDescriptor;
pub use timestamp::parse_timestamp;
