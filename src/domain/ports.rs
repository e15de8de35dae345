use crate::domain::model::{InternalFault, RomanNumeral, ValidatedNumber};
use crate::utils::error::Result;
use std::time::Duration;

/// 將已驗證的整數編碼成羅馬數字
pub trait NumeralEncoder: Send + Sync {
    fn encode(&self, number: ValidatedNumber) -> std::result::Result<RomanNumeral, InternalFault>;
}

/// HTTP 層的觀測接口，由外部注入
pub trait RequestMetrics: Send + Sync {
    fn observe_request(&self, method: &str, route: &str, status: u16, elapsed: Duration);

    /// 以 Prometheus 文字格式輸出
    fn export(&self) -> Result<String>;
}

impl<T: NumeralEncoder + ?Sized> NumeralEncoder for std::sync::Arc<T> {
    fn encode(&self, number: ValidatedNumber) -> std::result::Result<RomanNumeral, InternalFault> {
        (**self).encode(number)
    }
}
