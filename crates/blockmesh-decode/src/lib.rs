//! Octree block-name decoding for blockmesh.
//!
//! Block names encode a path from the octree root, one octal digit per
//! refinement level. This crate parses them under a configurable
//! [`Grammar`], decodes them into unit-cube bounding boxes, and scans
//! free-form text lines for them.

pub mod decoder;
pub mod grammar;
pub mod path;
pub mod scan;

pub use decoder::{decode, BlockAddress, BlockAddressDecoder};
pub use grammar::Grammar;
pub use path::OctreePath;
pub use scan::{Rejection, ScanReport, ScannedBlock, TokenScanner};
