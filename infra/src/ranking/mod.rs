//! Ranking engine implementations

mod openai;

pub use openai::OpenAiRankingClient;
