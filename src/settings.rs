use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional log file. When `None`, logs go to stderr only.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Which camera device to open for camera scans.
    #[serde(default)]
    pub camera_index: u32,
    /// Sleep between camera reads in milliseconds.
    #[serde(default = "default_camera_interval_ms")]
    pub camera_interval_ms: u64,
    /// Sleep between tracked-region grabs in milliseconds.
    #[serde(default = "default_tracked_interval_ms")]
    pub tracked_interval_ms: u64,
    /// UI poller tick in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Last known main window size. If absent, a default size is used.
    #[serde(default)]
    pub window_size: Option<(f32, f32)>,
    /// Size of the tracked-region drag overlay.
    #[serde(default = "default_overlay_size")]
    pub overlay_size: (f32, f32),
}

fn default_camera_interval_ms() -> u64 {
    40
}

fn default_tracked_interval_ms() -> u64 {
    100
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_overlay_size() -> (f32, f32) {
    (300.0, 300.0)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            camera_index: 0,
            camera_interval_ms: default_camera_interval_ms(),
            tracked_interval_ms: default_tracked_interval_ms(),
            poll_interval_ms: default_poll_interval_ms(),
            window_size: Some((800.0, 600.0)),
            overlay_size: default_overlay_size(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
