//! Runtime-owned sessions for content hosted inside window frames.
//!
//! A session is created the first time a frame renders its body and survives minimize, so a
//! restored window shows the same content. It ends when the reducer releases the window.

use std::{collections::HashMap, rc::Rc};

use desktop_app_contract::{AppHandle, AppMountContext, ContentSize, HostedApp};
use leptos::logging;

use crate::{
    model::{Size, WindowId, WindowRecord},
    reducer::RuntimeEffect,
};

struct ContentSession {
    app: Rc<dyn HostedApp>,
    handle: AppHandle,
}

/// Mounted content keyed by window.
pub struct HostedContentState {
    chrome_height: i32,
    sessions: HashMap<WindowId, ContentSession>,
}

impl HostedContentState {
    pub fn new(chrome_height: i32) -> Self {
        Self {
            chrome_height,
            sessions: HashMap::new(),
        }
    }

    pub fn content_size(&self, frame: Size) -> ContentSize {
        ContentSize::for_frame(frame.width, frame.height, self.chrome_height)
    }

    #[cfg(test)]
    fn is_mounted(&self, window_id: WindowId) -> bool {
        self.sessions.contains_key(&window_id)
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Returns the existing handle for `record`, mounting `app` first if needed.
    pub fn ensure_mounted(&mut self, record: &WindowRecord, app: Rc<dyn HostedApp>) -> AppHandle {
        if let Some(session) = self.sessions.get(&record.id) {
            return session.handle.clone();
        }

        let handle = app.mount(AppMountContext {
            app_id: record.app_id.clone(),
            window_id: record.id.0,
            props: record.props.clone(),
            initial_size: self.content_size(record.size),
        });
        self.sessions.insert(
            record.id,
            ContentSession {
                app,
                handle: handle.clone(),
            },
        );
        handle
    }

    /// Tells mounted content its frame is now `frame` pixels. Unmounted windows are skipped.
    pub fn resize(&mut self, window_id: WindowId, frame: Size) -> bool {
        let size = self.content_size(frame);
        match self.sessions.get(&window_id) {
            Some(session) => {
                session.app.resize(&session.handle, size);
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, window_id: WindowId) -> bool {
        match self.sessions.remove(&window_id) {
            Some(session) => {
                session.app.unmount(session.handle);
                true
            }
            None => false,
        }
    }

    /// Unmounts everything. Returns how many sessions were ended.
    pub fn release_all(&mut self) -> usize {
        let released = self.sessions.len();
        for (_, session) in self.sessions.drain() {
            session.app.unmount(session.handle);
        }
        released
    }

    /// Executes one reducer effect.
    pub fn apply(&mut self, effect: &RuntimeEffect) {
        match *effect {
            RuntimeEffect::ContentResized { window_id, size } => {
                self.resize(window_id, size);
            }
            RuntimeEffect::ContentReleased { window_id } => {
                if !self.release(window_id) {
                    logging::debug_warn!("{window_id} released before its content mounted");
                }
            }
        }
    }
}
