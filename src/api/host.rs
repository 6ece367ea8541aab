use std::collections::HashMap;

use crate::render::RenderFrame;

use super::{ChartHost, MountPoint};

/// In-memory `ChartHost` for headless embedding and tests.
///
/// Mount points exist only once given a width. Each `replace_mount` keeps the
/// newest frame and bumps that mount's replacement count.
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    payload: Option<String>,
    widths: HashMap<MountPoint, u32>,
    theme: HashMap<String, String>,
    frames: HashMap<MountPoint, RenderFrame>,
    replacements: HashMap<MountPoint, u64>,
}

impl HeadlessHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with both mount points present at `width_px`.
    #[must_use]
    pub fn with_mounts(width_px: u32) -> Self {
        MountPoint::ALL
            .into_iter()
            .fold(Self::new(), |host, mount| host.with_mount(mount, width_px))
    }

    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    #[must_use]
    pub fn with_mount(mut self, mount: MountPoint, width_px: u32) -> Self {
        self.widths.insert(mount, width_px);
        self
    }

    #[must_use]
    pub fn with_theme_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.theme.insert(name.into(), value.into());
        self
    }

    pub fn set_payload(&mut self, payload: Option<String>) {
        self.payload = payload;
    }

    pub fn set_mount_width(&mut self, mount: MountPoint, width_px: u32) {
        self.widths.insert(mount, width_px);
    }

    /// Removes the mount point along with whatever it was showing.
    pub fn remove_mount(&mut self, mount: MountPoint) {
        self.widths.remove(&mount);
        self.frames.remove(&mount);
    }

    pub fn set_theme_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.theme.insert(name.into(), value.into());
    }

    /// Frame currently shown in `mount`.
    #[must_use]
    pub fn frame(&self, mount: MountPoint) -> Option<&RenderFrame> {
        self.frames.get(&mount)
    }

    #[must_use]
    pub fn replacement_count(&self, mount: MountPoint) -> u64 {
        self.replacements.get(&mount).copied().unwrap_or(0)
    }
}

impl ChartHost for HeadlessHost {
    fn data_payload(&self) -> Option<String> {
        self.payload.clone()
    }

    fn mount_width(&self, mount: MountPoint) -> Option<u32> {
        self.widths.get(&mount).copied()
    }

    fn theme_property(&self, name: &str) -> Option<String> {
        self.theme.get(name).cloned()
    }

    fn replace_mount(&mut self, mount: MountPoint, frame: RenderFrame) {
        self.frames.insert(mount, frame);
        *self.replacements.entry(mount).or_insert(0) += 1;
    }
}
