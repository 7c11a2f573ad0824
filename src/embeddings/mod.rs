// Embeddings module
// HTTP client for the Ollama-compatible embedding server

pub mod ollama;

pub use ollama::OllamaClient;
