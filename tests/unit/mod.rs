//! Integration tests for the lowest-price index.

mod concurrency_tests;
mod index_tests;
