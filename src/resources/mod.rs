/**
 * This module contains all logic for loading model files and turning them into scene graphs.
 */
use cgmath::{Euler, Quaternion, Vector3};

use crate::data_structures::{
    instance::Instance,
    scene_graph::{NodeId, NodeKind, SceneGraph, SceneNode},
};

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str) -> anyhow::Result<reqwest::Url> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window available"))?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| anyhow::anyhow!("page origin is not readable"))?;
    let base = reqwest::Url::parse(&format!("{}/assets/", origin))?;
    Ok(base.join(file_name)?)
}

pub async fn load_binary(file_name: &str) -> anyhow::Result<Vec<u8>> {
    #[cfg(target_arch = "wasm32")]
    let data = {
        let url = format_url(file_name)?;
        reqwest::get(url).await?.bytes().await?.to_vec()
    };
    #[cfg(not(target_arch = "wasm32"))]
    let data = {
        let path = std::path::Path::new("./").join("assets").join(file_name);
        tokio::fs::read(&path)
            .await
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?
    };

    Ok(data)
}

/// Reads `file_name` from the assets and imports its node hierarchy.
pub async fn load_scene_gltf(file_name: &str) -> anyhow::Result<SceneGraph> {
    let bytes = load_binary(file_name).await?;
    import_gltf(&bytes)
}

/// Builds a scene graph from the default (or first) scene of a glTF document.
///
/// Only names, hierarchy and TRS transforms are read. Several scene roots are
/// wrapped into one unnamed group so the result always has a single root.
pub fn import_gltf(bytes: &[u8]) -> anyhow::Result<SceneGraph> {
    let gltf = gltf::Gltf::from_slice(bytes)?;
    let scene = gltf
        .default_scene()
        .or_else(|| gltf.scenes().next())
        .ok_or_else(|| anyhow::anyhow!("glTF document contains no scene"))?;

    let mut graph = SceneGraph::new();
    for node in scene.nodes() {
        to_scene_node(&mut graph, None, &node);
    }
    graph.single_root();
    log::info!(
        "Imported glTF scene {:?} with {} nodes",
        scene.name().unwrap_or("Default"),
        graph.len()
    );
    Ok(graph)
}

fn to_scene_node(graph: &mut SceneGraph, parent: Option<NodeId>, node: &gltf::Node) -> NodeId {
    let kind = match (node.mesh(), node.camera()) {
        (Some(mesh), _) => NodeKind::Mesh {
            mesh: mesh.name().unwrap_or("unknown_mesh").to_string(),
            primitives: mesh.primitives().len(),
        },
        (None, Some(_)) => NodeKind::Other,
        (None, None) => NodeKind::Group,
    };
    let (translation, rotation, scale) = node.transform().decomposed();
    // glTF stores quaternions as [x, y, z, w]
    let rotation = Quaternion::new(rotation[3], rotation[0], rotation[1], rotation[2]);
    let local = Instance {
        position: Vector3::from(translation),
        rotation: Euler::from(rotation),
        scale: Vector3::from(scale),
    };

    let mut scene_node = SceneNode::new(kind).with_transform(local);
    if let Some(name) = node.name() {
        scene_node = scene_node.named(name);
    }
    let id = match parent {
        Some(parent) => graph.add_child(parent, scene_node),
        None => graph.add_root(scene_node),
    };
    for child in node.children() {
        to_scene_node(graph, Some(id), &child);
    }
    id
}
