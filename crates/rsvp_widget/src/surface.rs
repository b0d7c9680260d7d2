//! Rendering-surface contract.
//!
//! The widget depends only on this minimal interface. A production
//! implementation maps handles onto real UI elements; the test fake in
//! `form-test-support` records every operation in memory.

use form_core::DietaryOption;

use crate::mount::Mount;

/// Opaque handle to one rendered field or container.
///
/// The raw value has no meaning to the widget; it is minted by the surface
/// and used only as a key in later calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldHandle(u64);

impl FieldHandle {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

/// Handles for the fields of one rendered guest block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuestBlockHandles {
    /// The block container itself.
    pub block: FieldHandle,
    /// The guest-name text input.
    pub name: FieldHandle,
    /// The dietary-choice select.
    pub dietary: FieldHandle,
    /// The group wrapping the conditional note field (visibility target).
    pub note_group: FieldHandle,
    /// The conditional free-text note input (required-ness target).
    pub note: FieldHandle,
}

/// Everything the surface needs to render one guest block.
///
/// A freshly created block starts with an empty name, the dietary select on
/// its unselected placeholder, the name and dietary fields required, and
/// the note group hidden with a non-required note input.
#[derive(Clone, Copy, Debug)]
pub struct GuestBlockTemplate<'a> {
    /// 1-based guest index, also used for the block heading.
    pub index: u8,
    /// Dietary select options in display order.
    pub dietary_options: &'a [DietaryOption],
}

/// Minimal contract the widget needs from a rendering surface.
///
/// All operations are synchronous and infallible once construction has
/// succeeded; a handle the surface no longer knows is ignored.
pub trait FormSurface {
    /// Look up a fixed mount point. `None` means the surface does not
    /// provide it, which aborts widget construction.
    fn resolve_mount(&mut self, mount: Mount) -> Option<FieldHandle>;

    /// Render one guest block after all existing blocks, per the template's
    /// defaults, and mint handles for its fields.
    fn create_block(&mut self, template: &GuestBlockTemplate<'_>) -> GuestBlockHandles;

    /// Remove a rendered block and all its fields.
    fn remove_block(&mut self, handles: GuestBlockHandles);

    fn set_visible(&mut self, handle: FieldHandle, visible: bool);

    fn set_required(&mut self, handle: FieldHandle, required: bool);

    fn set_enabled(&mut self, handle: FieldHandle, enabled: bool);

    /// Returns the current value of a field, if the handle is live.
    fn get_value(&self, handle: FieldHandle) -> Option<&str>;

    fn set_value(&mut self, handle: FieldHandle, value: &str);
}
