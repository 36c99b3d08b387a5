//! Viewer host: model catalogue, model switching and control routing.
//!
//! The viewer owns the current scene graph, the GUI [`Panel`] and the
//! [`NamingSession`]. Every model switch ends the previous session before the
//! next model is scanned, so controls never leak across models.

use std::collections::HashMap;

use anyhow::{Context as _, bail};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use crate::{
    data_structures::scene_graph::SceneGraph,
    gui::{ControlId, Panel},
    naming::{NamingSession, SessionSummary},
    resources::{import_gltf, load_binary},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelEntry {
    pub key: String,
    pub file: String,
}

impl ModelEntry {
    pub fn new(key: &str, file: &str) -> Self {
        Self {
            key: key.to_string(),
            file: file.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub models: Vec<ModelEntry>,
    pub initial_model: String,
    /// Linear RGB in `[0, 1]`.
    pub background: [f32; 3],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            models: vec![
                ModelEntry::new("hinge", "hinge_rig.gltf"),
                ModelEntry::new("lamp", "lamp_arm.gltf"),
            ],
            initial_model: "hinge".to_string(),
            background: [0.13, 0.13, 0.13],
        }
    }
}

#[derive(Debug)]
pub struct Viewer {
    config: ViewerConfig,
    scene: Option<SceneGraph>,
    current: Option<String>,
    cache: HashMap<String, Vec<u8>>,
    session: NamingSession,
    panel: Panel,
    background: [f32; 3],
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Self {
        let background = clamp_colour(config.background);
        Self {
            config,
            scene: None,
            current: None,
            cache: HashMap::new(),
            session: NamingSession::new(),
            panel: Panel::new(),
            background,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn model_keys(&self) -> impl Iterator<Item = &str> {
        self.config.models.iter().map(|entry| entry.key.as_str())
    }

    pub fn current_model(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn scene(&self) -> Option<&SceneGraph> {
        self.scene.as_ref()
    }

    pub fn session(&self) -> &NamingSession {
        &self.session
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn background(&self) -> [f32; 3] {
        self.background
    }

    pub fn set_background(&mut self, colour: [f32; 3]) {
        self.background = clamp_colour(colour);
    }

    /// Fetches every catalogue file concurrently and keeps the bytes around.
    ///
    /// Returns how many files were cached; failures are logged and skipped.
    pub async fn preload(&mut self) -> usize {
        let files: Vec<String> = self
            .config
            .models
            .iter()
            .map(|entry| entry.file.clone())
            .filter(|file| !self.cache.contains_key(file))
            .collect();
        let loaded = futures::future::join_all(files.iter().map(|file| load_binary(file))).await;
        for (file, result) in files.into_iter().zip(loaded) {
            match result {
                Ok(bytes) => {
                    self.cache.insert(file, bytes);
                }
                Err(e) => log::warn!("Could not preload {}: {}", file, e),
            }
        }
        self.cache.len()
    }

    /// Loads the model registered under `key` and starts a new naming session on it.
    pub async fn switch_model(&mut self, key: &str) -> anyhow::Result<SessionSummary> {
        let Some(entry) = self.config.models.iter().find(|entry| entry.key == key) else {
            bail!("Unknown model '{}'", key);
        };
        let file = entry.file.clone();
        let bytes = match self.cache.get(&file) {
            Some(bytes) => bytes.clone(),
            None => load_binary(&file).await?,
        };
        let graph = import_gltf(&bytes).with_context(|| format!("Failed to import {}", file))?;
        self.show_model(key, graph)
    }

    /// Replaces the displayed model: ends the current session, then begins one on `graph`.
    ///
    /// A graph with several roots is scanned through one group wrapping all of them.
    pub fn show_model(
        &mut self,
        key: &str,
        mut graph: SceneGraph,
    ) -> anyhow::Result<SessionSummary> {
        self.session.end(&mut self.panel);
        self.scene = None;
        self.current = None;

        let Some(root) = graph.single_root() else {
            bail!("Model '{}' has no root node", key);
        };
        let summary = self.session.begin(&mut graph, root, &mut self.panel);
        self.scene = Some(graph);
        self.current = Some(key.to_string());
        Ok(summary)
    }

    /// Routes a slider change from the panel to the naming session.
    ///
    /// Returns the value applied to the scene after clamping.
    pub fn on_slider(&mut self, control: ControlId, value: f32) -> Option<f32> {
        let accepted = self.panel.set_slider(control, value)?;
        let scene = self.scene.as_mut()?;
        self.session.handle_change(control, accepted, scene)
    }

    /// Ends the session and drops the current model.
    pub fn unload(&mut self) {
        self.session.end(&mut self.panel);
        self.scene = None;
        self.current = None;
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

fn clamp_colour(colour: [f32; 3]) -> [f32; 3] {
    colour.map(|channel| {
        if channel.is_finite() {
            channel.clamp(0.0, 1.0)
        } else {
            0.0
        }
    })
}

/// Installs the platform logger. Safe to call more than once.
pub fn init_logger() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Could not initialize logger: {}", e).into());
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    init_logger();
}
