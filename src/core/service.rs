use crate::core::converter::RomanEncoder;
use crate::core::validator;
use crate::domain::model::{Conversion, ConversionInput, InternalFault, Rejection, RomanNumeral};
use crate::domain::ports::NumeralEncoder;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Input rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("Conversion failed: {0}")]
    Internal(#[from] InternalFault),
}

/// 驗證後才呼叫 encoder；無狀態，可在多個請求間共用
#[derive(Debug, Clone, Default)]
pub struct ConversionService<E: NumeralEncoder = RomanEncoder> {
    encoder: E,
}

impl ConversionService<RomanEncoder> {
    pub fn new() -> Self {
        Self::with_encoder(RomanEncoder)
    }
}

impl<E: NumeralEncoder> ConversionService<E> {
    pub fn with_encoder(encoder: E) -> Self {
        Self { encoder }
    }

    pub fn convert(&self, raw: &ConversionInput) -> Result<Conversion, ConversionError> {
        let input = match validator::validate(raw) {
            Ok(number) => number,
            Err(rejection) => {
                tracing::warn!(
                    reason = %rejection.reason,
                    input = ?raw,
                    "Conversion input rejected"
                );
                return Err(rejection.into());
            }
        };

        let output = self
            .encoder
            .encode(input)
            .and_then(|numeral| RomanNumeral::try_from(numeral.into_string()))
            .map_err(|fault| {
                tracing::error!(input = input.get(), error = %fault, "Numeral encoding failed");
                fault
            })?;

        tracing::info!(input = input.get(), output = %output, "Converted number");
        Ok(Conversion { input, output })
    }
}
