pub mod converter;
pub mod service;
pub mod validator;

pub use crate::domain::model::{
    Conversion, ConversionInput, InternalFault, Rejection, RejectionReason, RomanNumeral,
    ValidatedNumber,
};
pub use crate::domain::ports::{NumeralEncoder, RequestMetrics};
pub use crate::utils::error::Result;
