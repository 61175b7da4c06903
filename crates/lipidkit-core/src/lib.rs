#![forbid(unsafe_code)]

//! Construct-name normalization and cross-source matching.
//!
//! Construct names arrive from HPLC page headers, MALDI spectrum columns, theoretical-mass
//! tables, THT sample sheets and plot file names, each with its own spelling. This crate
//! reduces them to one comparison key ([`normalize`]) and orders a set of keys by a
//! caller-given source priority ([`match_across_sources`]).
//!
//! Everything here is a total function over strings: malformed input yields an empty or
//! unexpected key, never an error.

pub mod disambiguate;
pub mod display;
pub mod header;
pub mod key;
pub mod matcher;
pub mod normalize;

pub use disambiguate::{
    CHROM_MARKER, DEFAULT_SUFFIX, apply_disambiguation_suffix, base_name_from_file,
    build_allowed_set, collision_renames, disambiguate_collisions, has_disambiguation_suffix,
    page_base_name, rekey, strip_disambiguation_suffix, strip_marker,
};
pub use key::{ConstructKey, dedup_preserving_order, group_by_key, index_by_key};
pub use matcher::{
    MatchedName, NameSource, filter_allowed, match_across_sources, match_indexed_sources,
};
pub use normalize::{display_variant, file_stem_slug, normalize, underscore_key};
