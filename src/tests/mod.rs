#[cfg(test)]
// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod support;

pub mod hashmap_tests;
pub mod map_tests;
pub mod set_tests;
