//! Node components.
//!
//! A node carries at most one component per [`ComponentKind`], stored in a
//! fixed slot array. Components are a closed tagged union ([`Component`]);
//! typed access goes through [`NodeComponent`] instead of pointer casts.

pub mod script;
pub mod sprite;
pub mod transform;

pub use script::{FixedUpdateFn, Script, ScriptComponent};
pub use sprite::SpriteComponent;
pub use transform::TransformComponent;

/// The closed set of component kinds a node can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ComponentKind {
    Script = 0,
    Transform = 1,
    Sprite = 2,
}

impl ComponentKind {
    /// Number of component kinds (and component slots per node).
    pub const COUNT: usize = 3;

    pub const ALL: [ComponentKind; Self::COUNT] = [Self::Script, Self::Transform, Self::Sprite];

    /// Slot index for this kind.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns None if the index is out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A component instance, tagged by kind.
#[derive(Debug)]
pub enum Component {
    Script(ScriptComponent),
    Transform(TransformComponent),
    Sprite(SpriteComponent),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Script(_) => ComponentKind::Script,
            Component::Transform(_) => ComponentKind::Transform,
            Component::Sprite(_) => ComponentKind::Sprite,
        }
    }
}

/// Typed view of one [`Component`] variant.
pub trait NodeComponent: Into<Component> + Sized {
    const KIND: ComponentKind;

    fn from_component(component: &Component) -> Option<&Self>;
    fn from_component_mut(component: &mut Component) -> Option<&mut Self>;
    fn into_inner(component: Component) -> Option<Self>;
}

macro_rules! node_component {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Component {
            fn from(value: $ty) -> Self {
                Component::$variant(value)
            }
        }

        impl NodeComponent for $ty {
            const KIND: ComponentKind = ComponentKind::$variant;

            fn from_component(component: &Component) -> Option<&Self> {
                match component {
                    Component::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
                match component {
                    Component::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn into_inner(component: Component) -> Option<Self> {
                match component {
                    Component::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

node_component!(ScriptComponent, Script);
node_component!(TransformComponent, Transform);
node_component!(SpriteComponent, Sprite);

/// Fixed-size component storage for one node, one slot per kind.
/// An empty slot means the node does not have that component.
#[derive(Debug, Default)]
pub struct ComponentSlots {
    slots: [Option<Component>; ComponentKind::COUNT],
}

impl ComponentSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a component in its kind's slot. Last write wins; the displaced
    /// component, if any, is returned.
    pub fn insert(&mut self, component: impl Into<Component>) -> Option<Component> {
        let component = component.into();
        let index = component.kind().index();
        self.slots[index].replace(component)
    }

    pub fn get<T: NodeComponent>(&self) -> Option<&T> {
        self.slots[T::KIND.index()].as_ref().and_then(T::from_component)
    }

    pub fn get_mut<T: NodeComponent>(&mut self) -> Option<&mut T> {
        self.slots[T::KIND.index()].as_mut().and_then(T::from_component_mut)
    }

    /// Empty the slot for `T` and hand back what was there.
    pub fn take<T: NodeComponent>(&mut self) -> Option<T> {
        self.slots[T::KIND.index()].take().and_then(T::into_inner)
    }

    pub fn get_kind(&self, kind: ComponentKind) -> Option<&Component> {
        self.slots[kind.index()].as_ref()
    }

    pub fn contains(&self, kind: ComponentKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// Kinds currently present, in slot order.
    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        ComponentKind::ALL.into_iter().filter(|kind| self.contains(*kind))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn kind_index_round_trip() {
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(ComponentKind::from_index(ComponentKind::COUNT), None);
    }

    #[test]
    fn new_slots_are_empty() {
        let slots = ComponentSlots::new();
        assert!(slots.is_empty());
        assert!(slots.get::<TransformComponent>().is_none());
        assert_eq!(slots.kinds().count(), 0);
    }

    #[test]
    fn insert_is_last_write_wins() {
        let mut slots = ComponentSlots::new();
        let first = slots.insert(TransformComponent::from_translation(Vec2::new(1.0, 0.0)));
        assert!(first.is_none());

        let displaced = slots.insert(TransformComponent::from_translation(Vec2::new(2.0, 0.0)));
        let displaced = displaced.and_then(TransformComponent::into_inner).unwrap();
        assert_eq!(displaced.translation, Vec2::new(1.0, 0.0));
        assert_eq!(slots.get::<TransformComponent>().unwrap().translation, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn kinds_do_not_collide() {
        let mut slots = ComponentSlots::new();
        slots.insert(TransformComponent::default());
        slots.insert(SpriteComponent::new("bird.png"));

        assert!(slots.contains(ComponentKind::Transform));
        assert!(slots.contains(ComponentKind::Sprite));
        assert!(!slots.contains(ComponentKind::Script));
        assert_eq!(
            slots.kinds().collect::<Vec<_>>(),
            vec![ComponentKind::Transform, ComponentKind::Sprite]
        );
        assert_eq!(slots.get_kind(ComponentKind::Sprite).map(Component::kind), Some(ComponentKind::Sprite));
    }

    #[test]
    fn take_empties_the_slot() {
        let mut slots = ComponentSlots::new();
        slots.insert(SpriteComponent::new("pipe.png"));
        let sprite = slots.take::<SpriteComponent>().unwrap();
        assert_eq!(sprite.texture_path, "pipe.png");
        assert!(slots.is_empty());
        assert!(slots.take::<SpriteComponent>().is_none());
    }

    #[test]
    fn typed_downcast_rejects_other_variants() {
        let component: Component = SpriteComponent::new("a.png").into();
        assert!(TransformComponent::from_component(&component).is_none());
        assert!(SpriteComponent::from_component(&component).is_some());
    }
}
