use thiserror::Error;

use crate::dimension::Dimension;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WellnessError {
    #[error("{dimension} rating {value} on {date} is outside [0, 10]")]
    RatingOutOfRange {
        dimension: Dimension,
        value: u8,
        date: jiff::civil::Date,
    },
}
