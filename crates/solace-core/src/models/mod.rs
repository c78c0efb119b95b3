pub mod answer_set;
pub mod assessment;
pub mod instrument_key;
pub mod severity;
pub mod wellness;
