mod config_error;
mod model_error;
mod palate_error;
mod store_error;

pub use config_error::ConfigError;
pub use model_error::ModelError;
pub use palate_error::{PalateError, PalateResult};
pub use store_error::StoreError;
