//! Single decision table for raw conversion input.
//!
//! Both the HTTP handler (authoritative gate) and the presentation client
//! (pre-check) call [`validate`]; neither keeps its own copy of the rules.

use crate::domain::model::{ConversionInput, Rejection, ValidatedNumber, MAX_VALUE, MIN_VALUE};

pub fn validate(raw: &ConversionInput) -> Result<ValidatedNumber, Rejection> {
    match raw {
        ConversionInput::Missing => Err(Rejection::not_a_number()),
        ConversionInput::Text(text) => validate_text(text),
        ConversionInput::Integer(value) => validate_integer(*value),
        ConversionInput::Float(value) => validate_float(*value),
    }
}

/// 查詢字串入口：`None` 代表缺少參數
pub fn validate_str(raw: Option<&str>) -> Result<ValidatedNumber, Rejection> {
    match raw {
        Some(text) => validate_text(text),
        None => Err(Rejection::not_a_number()),
    }
}

pub fn validate_integer(value: i64) -> Result<ValidatedNumber, Rejection> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        return Err(Rejection::out_of_range());
    }

    u16::try_from(value)
        .map(ValidatedNumber::new)
        .map_err(|_| Rejection::out_of_range())
}

fn validate_text(text: &str) -> Result<ValidatedNumber, Rejection> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Rejection::not_a_number());
    }

    // 只接受 [+-]?digits，小數與科學記號一律拒絕，不做截斷
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Rejection::not_a_number());
    }

    match trimmed.parse::<i64>() {
        Ok(value) => validate_integer(value),
        // 整數但超出 i64
        Err(_) => Err(Rejection::out_of_range()),
    }
}

fn validate_float(value: f64) -> Result<ValidatedNumber, Rejection> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(Rejection::not_a_number());
    }

    if value < MIN_VALUE as f64 || value > MAX_VALUE as f64 {
        return Err(Rejection::out_of_range());
    }

    validate_integer(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RejectionReason;

    fn reason(raw: ConversionInput) -> RejectionReason {
        validate(&raw).unwrap_err().reason
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert_eq!(reason("".into()), RejectionReason::NotANumber);
        assert_eq!(reason(" ".into()), RejectionReason::NotANumber);
        assert_eq!(reason("abc".into()), RejectionReason::NotANumber);
        assert_eq!(reason("xyz".into()), RejectionReason::NotANumber);
        assert_eq!(reason("1.5".into()), RejectionReason::NotANumber);
        assert_eq!(reason("7a%8".into()), RejectionReason::NotANumber);
        assert_eq!(reason("1e3".into()), RejectionReason::NotANumber);
        assert_eq!(reason("-".into()), RejectionReason::NotANumber);
        assert_eq!(reason(ConversionInput::Missing), RejectionReason::NotANumber);
        assert_eq!(reason(ConversionInput::Float(1.5)), RejectionReason::NotANumber);
        assert_eq!(reason(ConversionInput::Float(f64::NAN)), RejectionReason::NotANumber);
        assert_eq!(
            reason(ConversionInput::Float(f64::INFINITY)),
            RejectionReason::NotANumber
        );
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(reason(0i64.into()), RejectionReason::OutOfRange);
        assert_eq!(reason((-5i64).into()), RejectionReason::OutOfRange);
        assert_eq!(reason(4000i64.into()), RejectionReason::OutOfRange);
        assert_eq!(reason("0".into()), RejectionReason::OutOfRange);
        assert_eq!(reason("-5".into()), RejectionReason::OutOfRange);
        assert_eq!(reason("5000".into()), RejectionReason::OutOfRange);
        assert_eq!(
            reason("99999999999999999999999".into()),
            RejectionReason::OutOfRange
        );
        assert_eq!(reason(ConversionInput::Float(4000.0)), RejectionReason::OutOfRange);
    }

    #[test]
    fn test_accepts_boundaries() {
        assert_eq!(validate(&1i64.into()).unwrap().get(), 1);
        assert_eq!(validate(&3999i64.into()).unwrap().get(), 3999);
        assert_eq!(validate(&"3999".into()).unwrap().get(), 3999);
        assert_eq!(validate(&" 25 ".into()).unwrap().get(), 25);
        assert_eq!(validate(&"+7".into()).unwrap().get(), 7);
        assert_eq!(validate(&ConversionInput::Float(12.0)).unwrap().get(), 12);
    }

    #[test]
    fn test_validate_str_missing() {
        assert_eq!(
            validate_str(None).unwrap_err().reason,
            RejectionReason::NotANumber
        );
        assert_eq!(validate_str(Some("64")).unwrap().get(), 64);
    }

    #[test]
    fn test_accepts_exactly_domain() {
        for n in -10i64..=4010 {
            assert_eq!(validate_integer(n).is_ok(), (1..=3999).contains(&n), "n = {}", n);
        }
    }
}
