//! GATT identity of the HUD peripheral
//!
//! The navigation app looks for this device name and service, then writes
//! navigation payloads to the write characteristic. The indicate
//! characteristic is advertised for app compatibility but never used.

/// Advertised device name
pub const DEVICE_NAME: &str = "ESP32_Sygic_HUD";

/// Primary service UUID
pub const SERVICE_UUID: &str = "DD3F0AD1-6239-4E1F-81F1-91F6C9F01D86";

/// Indicate characteristic UUID (HUD → app, unused)
pub const CHAR_INDICATE_UUID: &str = "DD3F0AD2-6239-4E1F-81F1-91F6C9F01D86";

/// Write characteristic UUID (app → HUD, navigation payloads)
pub const CHAR_WRITE_UUID: &str = "DD3F0AD3-6239-4E1F-81F1-91F6C9F01D86";
