//! Per-bank statement extractors.
//!
//! Two extraction strategies cover the supported layouts: tabular
//! (recovered cell grids, header-named or fixed-position columns) and
//! line-regex (anchored patterns over raw page text). Axis and IDFC
//! statements exist in both shapes, so those extractors try tables first
//! and fall back to text lines.

mod axis;
mod hdfc;
mod icici_amazon;
mod icici_coral;
mod idfc;

pub use axis::AxisExtractor;
pub use hdfc::HdfcExtractor;
pub use icici_amazon::IciciAmazonExtractor;
pub use icici_coral::IciciCoralExtractor;
pub use idfc::IdfcExtractor;
