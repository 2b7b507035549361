//! Render driver: turns sprite nodes into renderer draw calls.

use glam::{Vec2, Vec4};

use crate::api::types::NodeId;
use crate::assets::cache::AssetLoader;
use crate::components::sprite::SpriteComponent;
use crate::core::tree::SceneTree;
use crate::core::walker::TreeWalker;
use crate::renderer::traits::{FontHandle, Renderer};

/// What one [`render_scene`] pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Nodes visited by the walk.
    pub visited: usize,
    /// Sprites handed to the renderer.
    pub drawn: usize,
    /// Sprites whose texture could not be loaded.
    pub skipped: usize,
}

/// Draw every sprite under `root` in pre-order, so parents end up beneath
/// their children and earlier siblings beneath later ones.
///
/// Does not clear the renderer. A dead `root` draws nothing.
pub fn render_scene<L, R>(
    tree: &SceneTree,
    root: NodeId,
    walker: &mut TreeWalker,
    assets: &mut L,
    renderer: &mut R,
) -> RenderStats
where
    L: AssetLoader + ?Sized,
    R: Renderer + ?Sized,
{
    let mut stats = RenderStats::default();
    if !tree.contains(root) {
        return stats;
    }
    walker.begin(root);
    while let Some(node) = walker.current() {
        stats.visited += 1;
        if let Some(sprite) = tree.component::<SpriteComponent>(node) {
            match assets.load_texture(&sprite.texture_path) {
                Some(texture) => {
                    let world = tree.world_transform(node);
                    let src = sprite.source_rect(texture.size);
                    let dst = sprite.destination_rect(texture.size);
                    renderer.draw_texture(world, dst, &texture, src, sprite.tint);
                    stats.drawn += 1;
                }
                None => stats.skipped += 1,
            }
        }
        walker.advance(tree);
    }
    stats
}

/// Draw `"FPS: {fps}"` in white along the bottom-left edge.
pub fn draw_fps_overlay<R: Renderer + ?Sized>(renderer: &mut R, font: &FontHandle, size: f32, fps: u32) {
    let y = renderer.height() - renderer.font_ascent(font, size);
    let text = format!("FPS: {fps}");
    renderer.draw_line_text(font, size, Vec2::new(0.0, y), &text, Vec4::ONE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::manifest::{AssetManifest, ManifestLoader};
    use crate::components::transform::TransformComponent;
    use crate::math::{BBox2, Transform2};
    use crate::renderer::instance::RenderBuffer;

    const MANIFEST: &str = r#"{
        "textures": {
            "bg.png": { "width": 288, "height": 512 },
            "bird.png": { "width": 34, "height": 24 }
        }
    }"#;

    fn loader() -> ManifestLoader {
        ManifestLoader::new(AssetManifest::from_json(MANIFEST).unwrap())
    }

    #[test]
    fn draws_sprites_in_preorder() {
        let mut tree = SceneTree::new();
        let main = tree.create_node("Main");
        let bg = tree.spawn_child(main, "Background");
        tree.set_component(bg, SpriteComponent::new("bg.png"));
        let bird = tree.spawn_child(main, "Bird");
        tree.set_component(bird, SpriteComponent::new("bird.png").with_anchor(Vec2::splat(0.5)));
        tree.set_component(bird, TransformComponent::from_translation(Vec2::new(144.0, 256.0)));

        let mut assets = loader();
        let mut renderer = RenderBuffer::new(288.0, 512.0);
        let mut walker = TreeWalker::new();
        let stats = render_scene(&tree, main, &mut walker, &mut assets, &mut renderer);

        assert_eq!(stats, RenderStats { visited: 3, drawn: 2, skipped: 0 });
        let [first, second] = renderer.instances.as_slice() else {
            panic!("expected two instances");
        };
        assert_eq!(first.dst_box(), BBox2::from_size(Vec2::new(288.0, 512.0)));
        assert_eq!(first.uv_box(), BBox2::UNIT);
        assert_eq!(
            second.world_transform(),
            Transform2::from_translation(Vec2::new(144.0, 256.0))
        );
        assert_eq!(second.dst_box(), BBox2::new(Vec2::new(-17.0, -12.0), Vec2::new(17.0, 12.0)));
    }

    #[test]
    fn missing_texture_is_skipped() {
        let mut tree = SceneTree::new();
        let main = tree.create_node("Main");
        tree.set_component(main, SpriteComponent::new("missing.png"));
        let bird = tree.spawn_child(main, "Bird");
        tree.set_component(bird, SpriteComponent::new("bird.png"));

        let mut assets = loader();
        let mut renderer = RenderBuffer::new(288.0, 512.0);
        let stats = render_scene(&tree, main, &mut TreeWalker::new(), &mut assets, &mut renderer);

        assert_eq!(stats.drawn, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(renderer.instance_count(), 1);
    }

    #[test]
    fn world_transform_reaches_sprite() {
        let mut tree = SceneTree::new();
        let main = tree.create_node("Main");
        tree.set_component(main, TransformComponent::new().with_scale(Vec2::splat(2.0)));
        let pivot = tree.spawn_child(main, "Pivot");
        let bird = tree.spawn_child(pivot, "Bird");
        tree.set_component(bird, TransformComponent::from_translation(Vec2::new(5.0, 0.0)));
        tree.set_component(bird, SpriteComponent::new("bird.png"));

        let mut renderer = RenderBuffer::new(288.0, 512.0);
        render_scene(&tree, main, &mut TreeWalker::new(), &mut loader(), &mut renderer);

        let world = renderer.instances[0].world_transform();
        assert_eq!(world.apply(Vec2::ZERO), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn dead_root_visits_nothing() {
        let mut tree = SceneTree::new();
        let main = tree.create_node("Main");
        tree.set_component(main, SpriteComponent::new("bg.png"));
        tree.despawn_recursive(main);

        let mut renderer = RenderBuffer::new(288.0, 512.0);
        let stats = render_scene(&tree, main, &mut TreeWalker::new(), &mut loader(), &mut renderer);
        assert_eq!(stats, RenderStats::default());
        assert_eq!(renderer.instance_count(), 0);

        let stats = render_scene(&tree, NodeId::default(), &mut TreeWalker::new(), &mut loader(), &mut renderer);
        assert_eq!(stats.visited, 0);
    }

    #[test]
    fn fps_overlay_sits_on_bottom_edge() {
        let font = FontHandle { id: 9, ascent: 0.75, line_height: 1.2 };
        let mut renderer = RenderBuffer::new(288.0, 512.0);
        draw_fps_overlay(&mut renderer, &font, 20.0, 60);

        assert_eq!(renderer.text.len(), 1);
        let run = &renderer.text[0];
        assert_eq!(run.text, "FPS: 60");
        assert_eq!(run.pos, Vec2::new(0.0, 497.0));
        assert_eq!(run.color, Vec4::ONE);
        assert_eq!(run.font, 9);
    }
}
