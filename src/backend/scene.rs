//! [`WindowManager`] implementation backed by a static JSON scene.
//!
//! A scene describes the screen, the desktops and every client window.
//! It lets the pager run (and be looked at) without a live window manager:
//! the `deskpager` binary renders a scene to images, and the GTK host lets
//! you click around in one.
//!
//! # Example
//!
//! ```json
//! {
//!   "screen": { "width": 1920, "height": 1080 },
//!   "desktops": 4,
//!   "current": 0,
//!   "clients": [
//!     { "name": "editor", "x": 0, "y": 0, "width": 1280, "height": 1080, "desktop": 0 },
//!     { "name": "clock", "x": 1700, "y": 20, "width": 200, "height": 100,
//!       "sticky": true, "layer": 2 }
//!   ]
//! }
//! ```

use crate::command::{ClientInfo, ScreenSize};
use crate::traits::WindowManager;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::path::Path;

/// Errors from loading a scene or switching desktops in it.
#[derive(Debug, thiserror::Error)]
#[error("scene error: {0}")]
pub struct SceneError(String);

/// A client window in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneClient {
    /// Label used in log output only.
    #[serde(default)]
    pub name: Option<String>,
    /// Stacking layer; higher layers are painted over lower ones.
    #[serde(default)]
    pub layer: u32,
    #[serde(flatten)]
    pub client: ClientInfo,
}

/// The on-disk scene format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub screen: ScreenSize,
    pub desktops: usize,
    #[serde(default)]
    pub current: usize,
    /// Clients listed bottom-most first within each layer.
    #[serde(default)]
    pub clients: Vec<SceneClient>,
}

/// An in-memory window manager holding a [`Scene`].
///
/// Desktop switches update the current desktop; everything else is fixed.
#[derive(Debug)]
pub struct SceneWm {
    screen: ScreenSize,
    desktops: usize,
    current: Cell<usize>,
    /// Sorted by layer, bottom first; file order kept within a layer.
    clients: Vec<SceneClient>,
}

impl SceneWm {
    /// Build a window manager from a scene, checking it for consistency.
    pub fn new(scene: Scene) -> Result<Self, SceneError> {
        if scene.desktops == 0 {
            return Err(SceneError("a scene needs at least one desktop".into()));
        }
        if scene.screen.width == 0 || scene.screen.height == 0 {
            return Err(SceneError(format!(
                "screen {}x{} is degenerate",
                scene.screen.width, scene.screen.height
            )));
        }
        if scene.current >= scene.desktops {
            return Err(SceneError(format!(
                "current desktop {} out of range (have {})",
                scene.current, scene.desktops
            )));
        }
        for c in &scene.clients {
            if !c.client.sticky && c.client.desktop >= scene.desktops {
                warn!(
                    "client {} is on desktop {} of {}; it will not be visible",
                    c.name.as_deref().unwrap_or("<unnamed>"),
                    c.client.desktop,
                    scene.desktops
                );
            }
        }

        let mut clients = scene.clients;
        // Stable: keeps the file order within each layer.
        clients.sort_by_key(|c| c.layer);

        Ok(Self {
            screen: scene.screen,
            desktops: scene.desktops,
            current: Cell::new(scene.current),
            clients,
        })
    }

    /// Load a scene from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SceneError(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&contents)
    }

    /// Parse a scene from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let scene: Scene =
            serde_json::from_str(json).map_err(|e| SceneError(format!("parse: {}", e)))?;
        Self::new(scene)
    }

    /// A small built-in scene: four 1920x1080 desktops with a handful of
    /// windows, including a sticky one and a focused one.
    pub fn demo() -> Self {
        let client = |name: &str, layer, x, y, width, height, desktop| SceneClient {
            name: Some(name.to_string()),
            layer,
            client: ClientInfo::new(x, y, width, height, desktop),
        };

        let mut clients = vec![
            client("terminal", 1, 40, 60, 900, 600, 0),
            client("browser", 1, 600, 200, 1200, 800, 0),
            client("editor", 1, 0, 0, 1920, 1080, 1),
            client("mail", 1, 200, 150, 1000, 700, 2),
            client("music", 1, 1300, 600, 500, 400, 2),
            client("offscreen", 1, -800, 300, 600, 400, 3),
            client("clock", 2, 1720, 20, 180, 90, 0),
        ];
        clients[1].client.active = true;
        clients[6].client.sticky = true;

        Self {
            screen: ScreenSize {
                width: 1920,
                height: 1080,
            },
            desktops: 4,
            current: Cell::new(0),
            clients,
        }
    }
}

impl WindowManager for SceneWm {
    type Error = SceneError;

    fn screen(&self) -> ScreenSize {
        self.screen
    }

    fn desktop_count(&self) -> usize {
        self.desktops
    }

    fn current_desktop(&self) -> usize {
        self.current.get()
    }

    fn clients(&self) -> Vec<ClientInfo> {
        self.clients.iter().map(|c| c.client.clone()).collect()
    }

    fn change_desktop(&self, desktop: usize) -> Result<(), Self::Error> {
        if desktop >= self.desktops {
            return Err(SceneError(format!(
                "desktop {} out of range (have {})",
                desktop, self.desktops
            )));
        }
        debug!("desktop {} -> {}", self.current.get(), desktop);
        self.current.set(desktop);
        Ok(())
    }

    fn previous_desktop(&self) -> Result<(), Self::Error> {
        let current = self.current.get();
        let target = if current == 0 {
            self.desktops - 1
        } else {
            current - 1
        };
        self.change_desktop(target)
    }

    fn next_desktop(&self) -> Result<(), Self::Error> {
        self.change_desktop((self.current.get() + 1) % self.desktops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"{
        "screen": { "width": 1000, "height": 800 },
        "desktops": 3,
        "current": 1,
        "clients": [
            { "name": "top", "layer": 2, "x": 0, "y": 0, "width": 10, "height": 10 },
            { "name": "a", "x": 1, "y": 0, "width": 10, "height": 10, "desktop": 1 },
            { "name": "b", "x": 2, "y": 0, "width": 10, "height": 10, "mapped": false },
            { "name": "pinned", "layer": 1, "x": 3, "y": 0, "width": 10, "height": 10,
              "sticky": true, "active": true }
        ]
    }"#;

    #[test]
    fn parses_scene() {
        let wm = SceneWm::from_json(SCENE).unwrap();
        assert_eq!(wm.screen(), ScreenSize { width: 1000, height: 800 });
        assert_eq!(wm.desktop_count(), 3);
        assert_eq!(wm.current_desktop(), 1);
        let clients = wm.clients();
        assert_eq!(clients.len(), 4);
        assert!(!clients[1].mapped);
        assert!(clients[2].sticky && clients[2].active);
    }

    #[test]
    fn clients_ordered_bottom_layer_first_stable() {
        let wm = SceneWm::from_json(SCENE).unwrap();
        let xs: Vec<i32> = wm.clients().iter().map(|c| c.x).collect();
        // layer 0: a (1), b (2); layer 1: pinned (3); layer 2: top (0)
        assert_eq!(xs, vec![1, 2, 3, 0]);
    }

    #[test]
    fn change_desktop_validates_range() {
        let wm = SceneWm::from_json(SCENE).unwrap();
        wm.change_desktop(2).unwrap();
        assert_eq!(wm.current_desktop(), 2);
        assert!(wm.change_desktop(3).is_err());
        assert_eq!(wm.current_desktop(), 2);
    }

    #[test]
    fn previous_and_next_wrap() {
        let wm = SceneWm::from_json(SCENE).unwrap();
        wm.next_desktop().unwrap();
        assert_eq!(wm.current_desktop(), 2);
        wm.next_desktop().unwrap();
        assert_eq!(wm.current_desktop(), 0);
        wm.previous_desktop().unwrap();
        assert_eq!(wm.current_desktop(), 2);
        wm.previous_desktop().unwrap();
        assert_eq!(wm.current_desktop(), 1);
    }

    #[test]
    fn rejects_inconsistent_scenes() {
        assert!(SceneWm::from_json(
            r#"{ "screen": { "width": 10, "height": 10 }, "desktops": 0 }"#
        )
        .is_err());
        assert!(SceneWm::from_json(
            r#"{ "screen": { "width": 10, "height": 10 }, "desktops": 2, "current": 2 }"#
        )
        .is_err());
        assert!(SceneWm::from_json(
            r#"{ "screen": { "width": 0, "height": 10 }, "desktops": 2 }"#
        )
        .is_err());
        assert!(SceneWm::from_json("not json").is_err());
    }

    #[test]
    fn demo_scene_is_consistent() {
        let demo = SceneWm::demo();
        assert_eq!(demo.desktop_count(), 4);
        let clients = demo.clients();
        assert!(clients.iter().any(|c| c.sticky));
        assert_eq!(clients.iter().filter(|c| c.active).count(), 1);
        // The sticky clock is on the top layer, so it comes last.
        assert!(clients.last().unwrap().sticky);
    }
}
