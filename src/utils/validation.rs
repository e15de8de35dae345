use crate::utils::error::{AppError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> AppError {
    AppError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// 解析 http(s) 位址，成功時直接回傳 Url
pub fn parse_http_url(field: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| invalid(field, raw, format!("not a URL: {}", e)))?;

    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        "http" | "https" => Err(invalid(field, raw, "URL has no host")),
        scheme => Err(invalid(field, raw, format!("scheme must be http or https, got {}", scheme))),
    }
}

/// CORS origin 必須與瀏覽器送出的 Origin 標頭逐字相同
/// (scheme://host[:port]，無路徑、無結尾斜線、不寫預設埠)
pub fn validate_origin(field: &str, raw: &str) -> Result<()> {
    let url = parse_http_url(field, raw)?;
    let origin = url.origin().ascii_serialization();

    if origin != raw {
        return Err(invalid(
            field,
            raw,
            format!("origin must be written exactly as {}", origin),
        ));
    }
    Ok(())
}

/// 監聽位址：非空白且不含空白字元
pub fn validate_listen_host(field: &str, host: &str) -> Result<()> {
    if host.is_empty() {
        return Err(invalid(field, host, "host cannot be empty"));
    }
    if host.chars().any(char::is_whitespace) {
        return Err(invalid(field, host, "host cannot contain whitespace"));
    }
    Ok(())
}

/// 0 代表由作業系統挑選埠號，設定檔中不允許
pub fn validate_listen_port(field: &str, port: u16) -> Result<()> {
    if port == 0 {
        return Err(invalid(field, port, "port must be a fixed value between 1 and 65535"));
    }
    Ok(())
}

pub fn validate_millis(field: &str, millis: u64, max: u64) -> Result<()> {
    if millis == 0 || millis > max {
        return Err(invalid(field, millis, format!("must be between 1 and {} ms", max)));
    }
    Ok(())
}
