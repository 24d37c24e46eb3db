//! Decoding of native command output.
//!
//! `mklink` writes its messages in the system's legacy ANSI code page
//! (GBK on a Chinese install), not UTF-8. Decoding is lossy: a wrong code
//! page garbles non-ASCII text but never fails the call.
use encoding_rs::Encoding;

use crate::error::ConfigError;

/// Config value that asks for the system code page.
pub const AUTO: &str = "auto";

/// Resolve a configured encoding label.
///
/// `"auto"` (any case) picks the system ANSI code page and falls back to
/// UTF-8 when it cannot be detected or has no known encoding. Any other
/// value is looked up as a WHATWG encoding label (`"gbk"`, `"big5"`,
/// `"windows-1252"`, …).
///
/// # Errors
///
/// Returns [`ConfigError::UnknownEncoding`] for an unrecognised label.
pub fn resolve(label: &str) -> Result<&'static Encoding, ConfigError> {
    if label.trim().eq_ignore_ascii_case(AUTO) {
        return Ok(detect_ansi_code_page()
            .and_then(encoding_for_code_page)
            .unwrap_or(encoding_rs::UTF_8));
    }
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| ConfigError::UnknownEncoding(label.to_string()))
}

/// Map a Windows code page number to its encoding.
#[must_use]
pub fn encoding_for_code_page(code_page: u16) -> Option<&'static Encoding> {
    let encoding = match code_page {
        874 => encoding_rs::WINDOWS_874,
        932 => encoding_rs::SHIFT_JIS,
        936 => encoding_rs::GBK,
        949 => encoding_rs::EUC_KR,
        950 => encoding_rs::BIG5,
        866 => encoding_rs::IBM866,
        1250 => encoding_rs::WINDOWS_1250,
        1251 => encoding_rs::WINDOWS_1251,
        1252 => encoding_rs::WINDOWS_1252,
        1253 => encoding_rs::WINDOWS_1253,
        1254 => encoding_rs::WINDOWS_1254,
        1255 => encoding_rs::WINDOWS_1255,
        1256 => encoding_rs::WINDOWS_1256,
        1257 => encoding_rs::WINDOWS_1257,
        1258 => encoding_rs::WINDOWS_1258,
        20866 => encoding_rs::KOI8_R,
        54936 => encoding_rs::GB18030,
        65001 => encoding_rs::UTF_8,
        _ => return None,
    };
    Some(encoding)
}

/// Read the ANSI code page (`ACP`) from the registry.
#[cfg(windows)]
#[must_use]
pub fn detect_ansi_code_page() -> Option<u16> {
    use winreg::RegKey;
    use winreg::enums::HKEY_LOCAL_MACHINE;
    let key = RegKey::predef(HKEY_LOCAL_MACHINE)
        .open_subkey(r"SYSTEM\CurrentControlSet\Control\Nls\CodePage")
        .ok()?;
    let acp: String = key.get_value("ACP").ok()?;
    acp.trim().parse().ok()
}

/// No ANSI code page outside Windows.
#[cfg(not(windows))]
#[must_use]
pub const fn detect_ansi_code_page() -> Option<u16> {
    None
}

/// Decode `bytes`, replacing malformed sequences.
#[must_use]
pub fn decode(encoding: &'static Encoding, bytes: &[u8]) -> String {
    let (text, _had_errors) = encoding.decode_without_bom_handling(bytes);
    text.into_owned()
}
