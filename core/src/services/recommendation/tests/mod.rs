//! Recommendation pipeline tests

#[cfg(test)]
mod service_tests;
