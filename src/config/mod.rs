pub mod settings;

pub use settings::{ScyllaConfig, ServerConfig, Settings, StoreBackend};
