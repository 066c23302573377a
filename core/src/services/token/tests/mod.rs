//! Token service tests

#[cfg(test)]
mod service_tests;
