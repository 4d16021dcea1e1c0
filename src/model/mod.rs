pub mod countries;
pub mod types;

pub use countries::CountryRegistry;
pub use types::{MessageRequest, PageModel, PredictionKind, PredictionQuery};
