//! Recommendation route handlers

pub mod recommend;
