use super::ray::pointer_to_ndc;
use super::raycaster::{Hit, Raycaster};
use crate::camera::Camera;
use crate::scene::{InteractiveAction, SceneGraph};

/// Action of the nearest hit, if that object is interactive.
///
/// Only the first (closest) entry is consulted: an interactive object
/// behind an occluder is not clickable.
#[must_use]
pub fn resolve_nearest<'a>(
    graph: &'a SceneGraph,
    hits: &[Hit],
) -> Option<&'a InteractiveAction> {
    let nearest = hits.first()?;
    graph
        .node(nearest.node)?
        .interactive
        .as_ref()
        .map(|tag| &tag.action)
}

/// Resolve a click at pixel `(client_x, client_y)` in a
/// `viewport_width x viewport_height` viewport to the action it triggers.
///
/// Stateless: nothing is cached between calls. Misses, non-interactive
/// hits, and degenerate viewports all yield `None`.
#[must_use]
pub fn resolve_pointer<'a>(
    camera: &Camera,
    graph: &'a SceneGraph,
    client_x: f32,
    client_y: f32,
    viewport_width: f32,
    viewport_height: f32,
) -> Option<&'a InteractiveAction> {
    let ndc =
        pointer_to_ndc(client_x, client_y, viewport_width, viewport_height)?;
    let hits = Raycaster::from_camera(camera, ndc).intersect_scene(graph);
    let action = resolve_nearest(graph, &hits);
    if let (Some(action), Some(hit)) = (action, hits.first()) {
        log::debug!(
            "pointer ({client_x}, {client_y}) hit interactive node {:?} at \
             distance {:.3}: {action:?}",
            hit.node,
            hit.distance
        );
    }
    action
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::{Mesh, SceneNode, Transform};

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    fn link() -> InteractiveAction {
        InteractiveAction::OpenUrl("https://example.com/".into())
    }

    fn camera() -> Camera {
        Camera::new(Vec3::new(0.0, 3.0, 5.0), Vec3::ZERO, 30.0, W / H, 0.1, 1000.0)
    }

    #[test]
    fn click_on_cube_triggers_its_action() {
        let mut graph = SceneGraph::new();
        let _ = graph.add_labeled_cube("Visit", 1.0, Vec3::ZERO, link());
        let action = resolve_pointer(&camera(), &graph, W / 2.0, H / 2.0, W, H);
        assert_eq!(action, Some(&link()));
    }

    #[test]
    fn cube_moved_out_of_the_ray_is_a_miss() {
        let mut graph = SceneGraph::new();
        let _ = graph.add_labeled_cube("Visit", 1.0, Vec3::new(50.0, 0.0, 0.0), link());
        let action = resolve_pointer(&camera(), &graph, W / 2.0, H / 2.0, W, H);
        assert_eq!(action, None);
    }

    #[test]
    fn occluder_in_front_blocks_the_cube() {
        let mut graph = SceneGraph::new();
        let _ = graph.add_labeled_cube("Visit", 1.0, Vec3::ZERO, link());
        // A wall between the camera and the cube.
        let _ = graph.add(
            None,
            SceneNode::with_mesh("wall", Mesh::cuboid(4.0, 4.0, 0.1))
                .transformed(Transform::from_translation(Vec3::new(0.0, 1.5, 2.5))),
        );
        let action = resolve_pointer(&camera(), &graph, W / 2.0, H / 2.0, W, H);
        assert_eq!(action, None);
    }

    #[test]
    fn non_interactive_hit_is_a_no_op() {
        let mut graph = SceneGraph::new();
        let _ = graph.add(
            None,
            SceneNode::with_mesh("model", Mesh::cuboid(1.0, 1.0, 1.0)),
        );
        assert_eq!(
            resolve_pointer(&camera(), &graph, W / 2.0, H / 2.0, W, H),
            None
        );
    }

    #[test]
    fn repeated_clicks_resolve_identically() {
        let mut graph = SceneGraph::new();
        let _ = graph.add_labeled_cube("Visit", 1.0, Vec3::ZERO, link());
        let cam = camera();
        for _ in 0..3 {
            assert_eq!(
                resolve_pointer(&cam, &graph, W / 2.0, H / 2.0, W, H),
                Some(&link())
            );
        }
    }

    #[test]
    fn empty_hits_resolve_to_nothing() {
        let graph = SceneGraph::new();
        assert_eq!(resolve_nearest(&graph, &[]), None);
        assert_eq!(resolve_pointer(&camera(), &graph, 1.0, 1.0, W, 0.0), None);
    }
}
