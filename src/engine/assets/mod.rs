// Asset identifiers
//
// Loading and caching of image data lives outside this crate. Game code refers
// to sprites through `ImageName` only.

mod images;

pub use images::ImageName;
