//! Window registry: the single source of truth for open windows, focus, and minimized state.
//!
//! Every operation is total. Ids that are not (or no longer) open degrade to no-ops so late
//! pointer events against a closed window are harmless. Geometry writes are trusted: callers
//! clamp through [`crate::geometry`] before committing.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    rc::Rc,
};

use desktop_app_contract::ApplicationId;
use serde_json::Value;
use thiserror::Error;

use crate::{
    catalog::{AppCatalog, WindowManagerConfig},
    geometry,
    model::{Position, Size, WindowId, WindowRecord},
};

/// Outcome of [`WindowRegistry::open_window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new record was created.
    Created(WindowId),
    /// A record for the app already existed and was focused/unminimized instead.
    Focused(WindowId),
    /// The app id is not in the catalog.
    UnknownApp,
}

impl OpenOutcome {
    pub fn window_id(self) -> Option<WindowId> {
        match self {
            Self::Created(id) | Self::Focused(id) => Some(id),
            Self::UnknownApp => None,
        }
    }
}

/// A broken registry invariant. Only produced by programming defects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("minimized {0} is not an open window")]
    MinimizedNotOpen(WindowId),
    #[error("active {0} is not an open window")]
    ActiveNotOpen(WindowId),
    #[error("active {0} is minimized")]
    ActiveMinimized(WindowId),
    #[error("app `{0}` has more than one open window")]
    DuplicateApp(ApplicationId),
    #[error("app index disagrees with open windows for `{0}`")]
    AppIndexMismatch(ApplicationId),
    #[error("{window_id} is smaller than the minimum size of `{app_id}`")]
    BelowMinimumSize {
        window_id: WindowId,
        app_id: ApplicationId,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowRegistry {
    catalog: Rc<AppCatalog>,
    next_window_id: u64,
    open_windows: BTreeMap<WindowId, WindowRecord>,
    by_app: HashMap<ApplicationId, WindowId>,
    active_window: Option<WindowId>,
    minimized_windows: BTreeSet<WindowId>,
}

impl WindowRegistry {
    pub fn new(catalog: Rc<AppCatalog>) -> Self {
        Self {
            catalog,
            next_window_id: 1,
            open_windows: BTreeMap::new(),
            by_app: HashMap::new(),
            active_window: None,
            minimized_windows: BTreeSet::new(),
        }
    }

    pub fn catalog(&self) -> &AppCatalog {
        &self.catalog
    }

    pub fn config(&self) -> WindowManagerConfig {
        self.catalog.config()
    }

    /// Opens `app_id`, or focuses and unminimizes its existing window.
    ///
    /// New windows get the app's default size at the next cascade position and become active.
    pub fn open_window(&mut self, app_id: &ApplicationId, props: Value) -> OpenOutcome {
        if let Some(window_id) = self.by_app.get(app_id).copied() {
            self.minimized_windows.remove(&window_id);
            self.active_window = Some(window_id);
            return OpenOutcome::Focused(window_id);
        }

        let Some(descriptor) = self.catalog.descriptor(app_id) else {
            return OpenOutcome::UnknownApp;
        };
        let size = descriptor.default_size;
        let position = geometry::cascade_position(self.open_windows.len(), &self.catalog.config());

        let window_id = self.allocate_window_id();
        self.open_windows.insert(
            window_id,
            WindowRecord {
                id: window_id,
                app_id: app_id.clone(),
                position,
                size,
                props,
            },
        );
        self.by_app.insert(app_id.clone(), window_id);
        self.minimized_windows.remove(&window_id);
        self.active_window = Some(window_id);
        OpenOutcome::Created(window_id)
    }

    /// Removes a window. Returns the removed record, or `None` when it was not open.
    pub fn close_window(&mut self, window_id: WindowId) -> Option<WindowRecord> {
        let record = self.open_windows.remove(&window_id)?;
        self.by_app.remove(&record.app_id);
        self.minimized_windows.remove(&window_id);
        if self.active_window == Some(window_id) {
            self.active_window = self.promotion_candidate(window_id);
        }
        Some(record)
    }

    /// Sets or clears the active window. Focusing a minimized window also unminimizes it.
    ///
    /// Returns `false` (and changes nothing) when `window_id` is not open.
    pub fn set_active_window(&mut self, window_id: Option<WindowId>) -> bool {
        match window_id {
            None => {
                self.active_window = None;
                true
            }
            Some(id) if self.open_windows.contains_key(&id) => {
                self.minimized_windows.remove(&id);
                self.active_window = Some(id);
                true
            }
            Some(_) => false,
        }
    }

    /// Hides a window. If it was active, the next visible window takes focus.
    pub fn minimize_window(&mut self, window_id: WindowId) -> bool {
        if !self.open_windows.contains_key(&window_id) {
            return false;
        }
        self.minimized_windows.insert(window_id);
        if self.active_window == Some(window_id) {
            self.active_window = self.promotion_candidate(window_id);
        }
        true
    }

    /// Unhides and focuses a window. Restoring a visible window is just a focus.
    pub fn restore_window(&mut self, window_id: WindowId) -> bool {
        if !self.open_windows.contains_key(&window_id) {
            return false;
        }
        self.minimized_windows.remove(&window_id);
        self.active_window = Some(window_id);
        true
    }

    /// Overwrites the stored position. Returns whether the record changed.
    pub fn update_window_position(&mut self, window_id: WindowId, position: Position) -> bool {
        match self.open_windows.get_mut(&window_id) {
            Some(record) if record.position != position => {
                record.position = position;
                true
            }
            _ => false,
        }
    }

    /// Overwrites the stored size. Returns whether the record changed.
    pub fn update_window_size(&mut self, window_id: WindowId, size: Size) -> bool {
        match self.open_windows.get_mut(&window_id) {
            Some(record) if record.size != size => {
                record.size = size;
                true
            }
            _ => false,
        }
    }

    /// Closes every window at the end of a session and returns the ids that were open.
    ///
    /// The id counter keeps running so ids are never reused by a later session on this registry.
    pub fn teardown(&mut self) -> Vec<WindowId> {
        let closed = self.open_windows.keys().copied().collect();
        self.open_windows.clear();
        self.by_app.clear();
        self.minimized_windows.clear();
        self.active_window = None;
        closed
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.open_windows.get(&window_id)
    }

    /// Open windows in insertion order.
    pub fn windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.open_windows.values()
    }

    pub fn window_for_app(&self, app_id: &ApplicationId) -> Option<WindowId> {
        self.by_app.get(app_id).copied()
    }

    pub fn active_window(&self) -> Option<WindowId> {
        self.active_window
    }

    pub fn is_minimized(&self, window_id: WindowId) -> bool {
        self.minimized_windows.contains(&window_id)
    }

    pub fn minimized_windows(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.minimized_windows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.open_windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open_windows.is_empty()
    }

    /// Verifies I1-I4. Geometry bounds that depend on the viewport are the frame's concern.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if let Some(id) = self
            .minimized_windows
            .iter()
            .find(|id| !self.open_windows.contains_key(id))
        {
            return Err(InvariantViolation::MinimizedNotOpen(*id));
        }

        if let Some(active) = self.active_window {
            if !self.open_windows.contains_key(&active) {
                return Err(InvariantViolation::ActiveNotOpen(active));
            }
            if self.minimized_windows.contains(&active) {
                return Err(InvariantViolation::ActiveMinimized(active));
            }
        }

        let mut per_app: HashMap<&ApplicationId, WindowId> = HashMap::new();
        for record in self.open_windows.values() {
            if per_app.insert(&record.app_id, record.id).is_some() {
                return Err(InvariantViolation::DuplicateApp(record.app_id.clone()));
            }
            if self.by_app.get(&record.app_id) != Some(&record.id) {
                return Err(InvariantViolation::AppIndexMismatch(record.app_id.clone()));
            }
            if let Some(descriptor) = self.catalog.descriptor(&record.app_id) {
                if !record.size.covers(descriptor.min_size) {
                    return Err(InvariantViolation::BelowMinimumSize {
                        window_id: record.id,
                        app_id: record.app_id.clone(),
                    });
                }
            }
        }
        if let Some(app_id) = self.by_app.keys().find(|app_id| !per_app.contains_key(app_id)) {
            return Err(InvariantViolation::AppIndexMismatch(app_id.clone()));
        }

        Ok(())
    }

    fn allocate_window_id(&mut self) -> WindowId {
        let id = WindowId(self.next_window_id);
        self.next_window_id = self.next_window_id.saturating_add(1);
        id
    }

    fn promotion_candidate(&self, leaving: WindowId) -> Option<WindowId> {
        self.open_windows
            .keys()
            .rev()
            .copied()
            .find(|id| *id != leaving && !self.minimized_windows.contains(id))
    }
}
