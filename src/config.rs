// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

/// Default bucket-count exponent for [`StrHashMap`](crate::hashmap::StrHashMap)
/// (the map allocates `2^exponent` buckets).
pub const DEFAULT_BUCKET_EXPONENT: u32 = 8;
