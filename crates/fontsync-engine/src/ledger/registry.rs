//! Windows font registry ledger
//!
//! Fonts are registered as REG_SZ values under
//! `HKLM\SOFTWARE\Microsoft\Windows NT\CurrentVersion\Fonts`, named by
//! display name with the font's file name as data. Writing requires an
//! elevated process.

use super::{FontLedger, LedgerEntry};
use fontsync_core::error::{Error, Result};
use windows::core::{HSTRING, PWSTR};
use windows::Win32::Foundation::{
    ERROR_FILE_NOT_FOUND, ERROR_MORE_DATA, ERROR_NO_MORE_ITEMS, WIN32_ERROR,
};
use windows::Win32::System::Registry::{
    RegCloseKey, RegDeleteValueW, RegEnumValueW, RegOpenKeyExW, RegQueryValueExW,
    RegSetValueExW, HKEY, HKEY_LOCAL_MACHINE, KEY_QUERY_VALUE, KEY_READ, KEY_SET_VALUE,
    REG_SAM_FLAGS, REG_SZ,
};

/// Registry key holding the machine-wide font list
pub const FONTS_KEY: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion\Fonts";

/// Maximum registry value name length, in UTF-16 units
const MAX_VALUE_NAME: usize = 16_384;

/// Ledger backed by the Windows font registry key
#[derive(Debug, Clone)]
pub struct RegistryLedger {
    subkey: HSTRING,
}

impl Default for RegistryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryLedger {
    pub fn new() -> Self {
        Self {
            subkey: HSTRING::from(FONTS_KEY),
        }
    }

    fn open(&self, access: REG_SAM_FLAGS) -> Result<OpenKey> {
        let mut key = HKEY::default();
        let status =
            unsafe { RegOpenKeyExW(HKEY_LOCAL_MACHINE, &self.subkey, 0, access, &mut key) };
        check(status, "open the font registry key")?;
        Ok(OpenKey(key))
    }
}

/// Registry handle closed on drop
struct OpenKey(HKEY);

impl Drop for OpenKey {
    fn drop(&mut self) {
        unsafe {
            let _ = RegCloseKey(self.0);
        }
    }
}

fn check(status: WIN32_ERROR, action: &str) -> Result<()> {
    if status.is_ok() {
        Ok(())
    } else {
        Err(Error::ledger(format!(
            "failed to {}: {}",
            action,
            windows::core::Error::from(status.to_hresult()).message()
        )))
    }
}

fn to_wide(value: &str) -> Vec<u16> {
    value.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Decode REG_SZ data (UTF-16LE, usually NUL-terminated)
fn decode_sz(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .take_while(|&unit| unit != 0)
        .collect();
    String::from_utf16_lossy(&units)
}

impl FontLedger for RegistryLedger {
    fn entries(&self) -> Result<Vec<LedgerEntry>> {
        let key = self.open(KEY_READ)?;
        let mut entries = Vec::new();
        let mut name_buf = vec![0u16; MAX_VALUE_NAME];
        let mut data_buf = vec![0u8; 4096];

        let mut index = 0;
        loop {
            let mut name_len = name_buf.len() as u32;
            let mut data_len = data_buf.len() as u32;
            let mut value_type = 0u32;

            let status = unsafe {
                RegEnumValueW(
                    key.0,
                    index,
                    PWSTR(name_buf.as_mut_ptr()),
                    &mut name_len,
                    None,
                    Some(&mut value_type as *mut u32),
                    Some(data_buf.as_mut_ptr()),
                    Some(&mut data_len as *mut u32),
                )
            };

            if status == ERROR_NO_MORE_ITEMS {
                break;
            }
            // Not a file name we could have written
            if status == ERROR_MORE_DATA {
                index += 1;
                continue;
            }
            check(status, "enumerate the font registry key")?;

            if value_type == REG_SZ.0 {
                let display_name = String::from_utf16_lossy(&name_buf[..name_len as usize]);
                let file_name = decode_sz(&data_buf[..data_len as usize]);
                entries.push(LedgerEntry::new(display_name, file_name));
            }
            index += 1;
        }

        Ok(entries)
    }

    fn write(&self, display_name: &str, file_name: &str) -> Result<()> {
        let key = self.open(KEY_SET_VALUE)?;
        let data: Vec<u8> = to_wide(file_name)
            .into_iter()
            .flat_map(|unit| unit.to_le_bytes())
            .collect();

        let name = HSTRING::from(display_name);
        let status = unsafe { RegSetValueExW(key.0, &name, 0, REG_SZ, Some(data.as_slice())) };
        check(status, &format!("write registry value '{}'", display_name))
    }

    fn delete(&self, display_name: &str) -> Result<bool> {
        let key = self.open(KEY_SET_VALUE)?;
        let status = unsafe { RegDeleteValueW(key.0, &HSTRING::from(display_name)) };
        if status == ERROR_FILE_NOT_FOUND {
            return Ok(false);
        }
        check(status, &format!("delete registry value '{}'", display_name))?;
        Ok(true)
    }

    fn exists(&self, display_name: &str) -> Result<bool> {
        let key = self.open(KEY_QUERY_VALUE)?;
        let status = unsafe {
            RegQueryValueExW(
                key.0,
                &HSTRING::from(display_name),
                None,
                None,
                None,
                None,
            )
        };
        if status == ERROR_FILE_NOT_FOUND {
            return Ok(false);
        }
        check(status, &format!("query registry value '{}'", display_name))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_sz_stops_at_nul() {
        let mut bytes: Vec<u8> = "Arial.ttf"
            .encode_utf16()
            .flat_map(|u| u.to_le_bytes())
            .collect();
        bytes.extend_from_slice(&[0, 0, b'x', 0]);
        assert_eq!(decode_sz(&bytes), "Arial.ttf");
    }

    #[test]
    fn test_to_wide_is_nul_terminated() {
        assert_eq!(to_wide("ab"), vec![b'a' as u16, b'b' as u16, 0]);
    }
}
