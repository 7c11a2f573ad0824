// Index module
// Point assembly and the upsert client for the Qdrant index service

pub mod qdrant;

pub use qdrant::{IndexPoint, PointPayload, QdrantClient, build_points};
