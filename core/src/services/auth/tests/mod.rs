//! Authentication service tests

#[cfg(test)]
mod mocks;
