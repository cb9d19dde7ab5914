//! # Code Point Ranges
//!
//! ## Single Ranges
//!
//! A [`CodePointRange`] is one inclusive, contiguous interval of code points;
//! it validates its bounds and renders itself as a regex pattern.
//!
//! ## Range Sets
//!
//! Arbitrary collections of code points are collapsed into sorted, disjoint,
//! maximal ranges by [`code_points_to_ranges`]. A [`CodePointMultiRange`] owns
//! such a set, and merges its members into concise patterns.
pub mod code_point_range;
pub mod multi_range;
pub mod multi_range_builder;
pub mod range_builder;

#[doc(inline)]
pub use code_point_range::CodePointRange;
#[doc(inline)]
pub use multi_range::{CodePointMultiRange, MultiRangeSource};
#[doc(inline)]
pub use multi_range_builder::MultiRangeBuilder;
#[doc(inline)]
pub use range_builder::{code_point_sets_to_ranges, code_points_to_ranges, fuse_ranges};
