//! In-memory [`FormSurface`] implementation for tests.
//!
//! Records every create/remove/visibility/required/enabled operation so
//! tests can assert on what the widget actually did to the surface,
//! including operation counts for idempotence checks. Helper methods panic
//! on unknown handles to fail tests loudly.

use rsvp_widget::{FieldHandle, FormSurface, GuestBlockHandles, GuestBlockTemplate, Mount};
use std::collections::HashMap;

#[derive(Clone, Debug)]
struct FieldState {
    value: String,
    visible: bool,
    required: bool,
    enabled: bool,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            value: String::new(),
            visible: true,
            required: false,
            enabled: true,
        }
    }
}

/// Fake rendering surface backed by hash maps.
#[derive(Clone, Debug, Default)]
pub struct FakeSurface {
    next_handle: u64,
    fields: HashMap<FieldHandle, FieldState>,
    mounts: HashMap<Mount, FieldHandle>,
    /// Live blocks in creation order: (guest index, handles).
    blocks: Vec<(u8, GuestBlockHandles)>,
    /// Total blocks ever created (never decremented).
    pub blocks_created: u32,
    /// Total blocks ever removed.
    pub blocks_removed: u32,
}

const ALL_MOUNTS: [Mount; 6] = [
    Mount::Form,
    Mount::GuestCountSection,
    Mount::GuestCountInput,
    Mount::GuestContainer,
    Mount::SongSection,
    Mount::SongInput,
];

impl FakeSurface {
    /// Surface with every mount point present.
    pub fn new() -> Self {
        let mut surface = Self::default();
        for mount in ALL_MOUNTS {
            let handle = surface.mint();
            surface.mounts.insert(mount, handle);
        }
        surface
    }

    /// Surface with one mount point deliberately absent, for init-failure
    /// tests.
    pub fn missing(absent: Mount) -> Self {
        let mut surface = Self::new();
        if let Some(handle) = surface.mounts.remove(&absent) {
            surface.fields.remove(&handle);
        }
        surface
    }

    fn mint(&mut self) -> FieldHandle {
        let handle = FieldHandle::from_raw(self.next_handle);
        self.next_handle += 1;
        self.fields.insert(handle, FieldState::default());
        handle
    }

    fn field(&self, handle: FieldHandle) -> &FieldState {
        self.fields
            .get(&handle)
            .unwrap_or_else(|| panic!("unknown or removed handle: {handle:?}"))
    }

    /// Handle of a fixed mount point. Panics if absent.
    pub fn mount(&self, mount: Mount) -> FieldHandle {
        *self
            .mounts
            .get(&mount)
            .unwrap_or_else(|| panic!("mount point not present: {mount:?}"))
    }

    /// Guest indices of the live blocks, in creation order.
    pub fn block_indices(&self) -> Vec<u8> {
        self.blocks.iter().map(|(index, _)| *index).collect()
    }

    /// Handles of the live block with this guest index.
    pub fn block(&self, index: u8) -> Option<GuestBlockHandles> {
        self.blocks
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, handles)| *handles)
    }

    /// Number of live blocks.
    pub fn live_blocks(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_visible(&self, handle: FieldHandle) -> bool {
        self.field(handle).visible
    }

    pub fn is_required(&self, handle: FieldHandle) -> bool {
        self.field(handle).required
    }

    pub fn is_enabled(&self, handle: FieldHandle) -> bool {
        self.field(handle).enabled
    }

    pub fn value(&self, handle: FieldHandle) -> &str {
        &self.field(handle).value
    }

    /// Clear every field value, simulating the platform's native form
    /// reset. Does not remove blocks; that is the controller's job once it
    /// receives `ResetCompleted`.
    pub fn native_reset(&mut self) {
        for state in self.fields.values_mut() {
            state.value.clear();
        }
    }
}

impl FormSurface for FakeSurface {
    fn resolve_mount(&mut self, mount: Mount) -> Option<FieldHandle> {
        self.mounts.get(&mount).copied()
    }

    fn create_block(&mut self, template: &GuestBlockTemplate<'_>) -> GuestBlockHandles {
        let block = self.mint();
        let name = self.mint();
        let dietary = self.mint();
        let note_group = self.mint();
        let note = self.mint();

        // Template defaults: name/dietary required, note hidden and not
        // required, everything empty.
        self.fields.get_mut(&name).unwrap().required = true;
        self.fields.get_mut(&dietary).unwrap().required = true;
        self.fields.get_mut(&note_group).unwrap().visible = false;

        let handles = GuestBlockHandles {
            block,
            name,
            dietary,
            note_group,
            note,
        };
        self.blocks.push((template.index, handles));
        self.blocks_created += 1;
        handles
    }

    fn remove_block(&mut self, handles: GuestBlockHandles) {
        for handle in [
            handles.block,
            handles.name,
            handles.dietary,
            handles.note_group,
            handles.note,
        ] {
            self.fields.remove(&handle);
        }
        self.blocks.retain(|(_, h)| *h != handles);
        self.blocks_removed += 1;
    }

    fn set_visible(&mut self, handle: FieldHandle, visible: bool) {
        if let Some(state) = self.fields.get_mut(&handle) {
            state.visible = visible;
        }
    }

    fn set_required(&mut self, handle: FieldHandle, required: bool) {
        if let Some(state) = self.fields.get_mut(&handle) {
            state.required = required;
        }
    }

    fn set_enabled(&mut self, handle: FieldHandle, enabled: bool) {
        if let Some(state) = self.fields.get_mut(&handle) {
            state.enabled = enabled;
        }
    }

    fn get_value(&self, handle: FieldHandle) -> Option<&str> {
        self.fields.get(&handle).map(|state| state.value.as_str())
    }

    fn set_value(&mut self, handle: FieldHandle, value: &str) {
        if let Some(state) = self.fields.get_mut(&handle) {
            state.value.clear();
            state.value.push_str(value);
        }
    }
}
