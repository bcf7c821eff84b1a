mod client;

pub use client::OllamaProvider;
