//! Live Windows registry backend.
//!
//! Reads from HKEY_LOCAL_MACHINE through the Win32 registry API. Handles
//! are wrapped in [`WindowsKey`], which closes the raw HKEY on drop, so a
//! handle is released on every exit path regardless of how a lookup ends.
//!
//! This backend is read-only: nothing in this crate creates, mutates, or
//! deletes registry data.

use windows::core::PCWSTR;
use windows::Win32::Foundation::{
    ERROR_ACCESS_DENIED, ERROR_FILE_NOT_FOUND, ERROR_SUCCESS, WIN32_ERROR,
};
use windows::Win32::System::Registry::{
    RegCloseKey, RegOpenKeyExW, RegQueryValueExW, HKEY, HKEY_LOCAL_MACHINE, KEY_READ,
    KEY_WOW64_64KEY, REG_DWORD, REG_EXPAND_SZ, REG_MULTI_SZ, REG_SZ, REG_VALUE_TYPE,
};

use super::{AccessOptions, RegistryKey, RegistryPath, RegistryStore, RegistryValue, StoreError};

/// Registry store rooted at HKEY_LOCAL_MACHINE.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsStore;

impl WindowsStore {
    /// Create a store over the local machine hive.
    pub fn new() -> Self {
        Self
    }
}

impl RegistryStore for WindowsStore {
    fn open(
        &self,
        path: &RegistryPath,
        options: AccessOptions,
    ) -> Result<Box<dyn RegistryKey>, StoreError> {
        let wide = to_wide(path.as_str());
        let mut sam = KEY_READ;
        if options.wow64_64() {
            sam |= KEY_WOW64_64KEY;
        }

        let mut hkey = HKEY::default();
        // SAFETY: `wide` is NUL-terminated and outlives the call; `hkey` is a
        // valid out-pointer for the duration of the call.
        let status = unsafe {
            RegOpenKeyExW(
                HKEY_LOCAL_MACHINE,
                PCWSTR(wide.as_ptr()),
                0,
                sam,
                &mut hkey,
            )
        };

        match status {
            ERROR_SUCCESS => Ok(Box::new(WindowsKey {
                hkey,
                path: path.as_str().to_string(),
            })),
            ERROR_FILE_NOT_FOUND => Err(StoreError::PathNotFound {
                path: path.as_str().to_string(),
            }),
            ERROR_ACCESS_DENIED => Err(StoreError::AccessDenied {
                path: path.as_str().to_string(),
            }),
            other => Err(backend_error(path.as_str(), other)),
        }
    }
}

/// An open HKLM subkey.
struct WindowsKey {
    hkey: HKEY,
    path: String,
}

impl RegistryKey for WindowsKey {
    fn value(&self, name: &str) -> Result<RegistryValue, StoreError> {
        let wide = to_wide(name);

        // First call sizes the buffer, second fills it.
        let mut value_type = REG_VALUE_TYPE::default();
        let mut data_len: u32 = 0;
        // SAFETY: the handle is open for reading; `value_type` and `data_len`
        // are valid out-pointers for the duration of the call.
        let status = unsafe {
            RegQueryValueExW(
                self.hkey,
                PCWSTR(wide.as_ptr()),
                None,
                Some(&mut value_type),
                None,
                Some(&mut data_len),
            )
        };
        match status {
            ERROR_SUCCESS => {}
            ERROR_FILE_NOT_FOUND => {
                return Err(StoreError::ValueNotFound {
                    path: self.path.clone(),
                    name: name.to_string(),
                })
            }
            ERROR_ACCESS_DENIED => {
                return Err(StoreError::AccessDenied {
                    path: self.path.clone(),
                })
            }
            other => return Err(backend_error(&self.path, other)),
        }

        let mut data = vec![0u8; data_len as usize];
        // SAFETY: `data` has exactly the capacity the previous call reported,
        // and `data_len` tracks it.
        let status = unsafe {
            RegQueryValueExW(
                self.hkey,
                PCWSTR(wide.as_ptr()),
                None,
                Some(&mut value_type),
                Some(data.as_mut_ptr()),
                Some(&mut data_len),
            )
        };
        if status != ERROR_SUCCESS {
            return Err(backend_error(&self.path, status));
        }
        data.truncate(data_len as usize);

        match value_type {
            REG_SZ | REG_EXPAND_SZ => Ok(RegistryValue::String(decode_string(&data))),
            REG_MULTI_SZ => Ok(RegistryValue::MultiString(decode_multi_string(&data))),
            REG_DWORD => {
                let mut raw = [0u8; 4];
                let len = data.len().min(4);
                raw[..len].copy_from_slice(&data[..len]);
                Ok(RegistryValue::Dword(u32::from_le_bytes(raw)))
            }
            _ => Err(StoreError::UnsupportedType {
                path: self.path.clone(),
                name: name.to_string(),
            }),
        }
    }
}

impl Drop for WindowsKey {
    fn drop(&mut self) {
        // SAFETY: the handle was opened by RegOpenKeyExW and is closed
        // exactly once.
        unsafe {
            let _ = RegCloseKey(self.hkey);
        }
    }
}

/// Encode a Rust string as a NUL-terminated wide string.
fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Decode a REG_SZ / REG_EXPAND_SZ byte buffer, dropping the terminator.
fn decode_string(data: &[u8]) -> String {
    let wide = bytes_to_wide(data);
    let end = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    String::from_utf16_lossy(&wide[..end])
}

/// Decode a REG_MULTI_SZ byte buffer into its string list.
fn decode_multi_string(data: &[u8]) -> Vec<String> {
    let wide = bytes_to_wide(data);
    wide.split(|&c| c == 0)
        .take_while(|chunk| !chunk.is_empty())
        .map(String::from_utf16_lossy)
        .collect()
}

fn bytes_to_wide(data: &[u8]) -> Vec<u16> {
    data.chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

fn backend_error(path: &str, status: WIN32_ERROR) -> StoreError {
    StoreError::Backend {
        path: path.to_string(),
        message: format!("WIN32_ERROR({})", status.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_wide_appends_terminator() {
        let wide = to_wide("AB");
        assert_eq!(wide, vec![b'A' as u16, b'B' as u16, 0]);
    }

    #[test]
    fn decode_string_drops_terminator() {
        let data: Vec<u8> = [b'H' as u16, b'Q' as u16, 0]
            .iter()
            .flat_map(|c| c.to_le_bytes())
            .collect();
        assert_eq!(decode_string(&data), "HQ");
    }

    #[test]
    fn decode_multi_string_splits_on_nul() {
        let data: Vec<u8> = [b'A' as u16, 0, b'B' as u16, 0, 0]
            .iter()
            .flat_map(|c| c.to_le_bytes())
            .collect();
        assert_eq!(decode_multi_string(&data), vec!["A", "B"]);
    }

    #[test]
    fn decode_multi_string_empty_buffer() {
        assert!(decode_multi_string(&[]).is_empty());
    }

    #[test]
    fn open_missing_key_reports_path_not_found() {
        let store = WindowsStore::new();
        let path = RegistryPath::new(r"SOFTWARE\cicfacts-test-key-that-does-not-exist");
        let err = store.open(&path, AccessOptions::read()).err().unwrap();
        assert!(matches!(err, StoreError::PathNotFound { .. }));
    }

    #[test]
    fn open_software_key_succeeds() {
        // SOFTWARE always exists under HKLM and is world-readable.
        let store = WindowsStore::new();
        let path = RegistryPath::new("SOFTWARE");
        assert!(store
            .open(&path, AccessOptions::read().with_wow64_64())
            .is_ok());
    }
}
