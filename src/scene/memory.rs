use super::{SceneContext, SelectAction};
use crate::aabb::Aabb;
use crate::errors::SceneError;
use crate::float_types::Real;
use crate::primitive::CirclePrimitive;
use crate::triangulated::Triangulated3D;
use crate::vertex::Vertex;
use log::trace;
use nalgebra::Point3;

/// Stable handle to an object created in a [`MemoryScene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub selected: bool,
    pub circle: CirclePrimitive,
}

/// In-memory stand-in for a content-creation host.
///
/// Objects are named the way such hosts usually do (`Circle`, `Circle.001`,
/// ...). Creating an object makes it the only selected one. Names are not
/// reused after deletion within the lifetime of the scene, mirroring how a
/// host keeps orphaned data blocks around until the file is reloaded.
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    objects: Vec<SceneObject>,
    next_id: u64,
    created: usize,
    capacity: Option<usize>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scene that refuses to hold more than `limit` objects at once.
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self { capacity: Some(limit), ..Self::default() }
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn selected(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|o| o.selected)
    }

    pub fn select_all(&mut self, action: SelectAction) {
        let target = match action {
            SelectAction::Select => Some(true),
            SelectAction::Deselect => Some(false),
            SelectAction::Toggle => Some(!self.objects.iter().any(|o| o.selected)),
            SelectAction::Invert => None,
        };
        for object in &mut self.objects {
            object.selected = target.unwrap_or(!object.selected);
        }
        trace!("select_all({action:?}): {} selected", self.selected().count());
    }

    /// Remove every selected object, returning how many went away.
    pub fn delete_selected(&mut self) -> usize {
        let before = self.objects.len();
        self.objects.retain(|o| !o.selected);
        let removed = before - self.objects.len();
        trace!("delete_selected: removed {removed}, {} left", self.objects.len());
        removed
    }

    /// Host-style primitive creation.
    pub fn create_circle(
        &mut self,
        radius: Real,
        location: Point3<Real>,
        vertices: usize,
    ) -> Result<ObjectId, SceneError> {
        let circle = CirclePrimitive::new(radius, location, vertices)?;
        self.insert(circle)
    }

    fn insert(&mut self, circle: CirclePrimitive) -> Result<ObjectId, SceneError> {
        if let Some(limit) = self.capacity {
            if self.objects.len() >= limit {
                return Err(SceneError::CapacityExceeded { limit });
            }
        }

        let id = ObjectId(self.next_id);
        self.next_id += 1;
        let name = match self.created {
            0 => "Circle".to_string(),
            n => format!("Circle.{n:03}"),
        };
        self.created += 1;

        for object in &mut self.objects {
            object.selected = false;
        }
        trace!("create {name} at {:?}", circle.location);
        self.objects.push(SceneObject { id, name, selected: true, circle });
        Ok(id)
    }

    /// Bounds of every tessellated object, `None` for an empty scene.
    pub fn bounding_box(&self) -> Option<Aabb> {
        self.objects
            .iter()
            .map(|o| o.circle.bounding_box())
            .reduce(|a, b| a.union(&b))
    }
}

impl SceneContext for MemoryScene {
    fn reset(&mut self) -> Result<(), SceneError> {
        self.select_all(SelectAction::Select);
        self.delete_selected();
        Ok(())
    }

    fn place_circle(&mut self, circle: CirclePrimitive) -> Result<(), SceneError> {
        circle.validate()?;
        self.insert(circle).map(|_| ())
    }
}

impl Triangulated3D for MemoryScene {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for object in &self.objects {
            object.circle.visit_triangles(&mut f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with(n: usize) -> MemoryScene {
        let mut scene = MemoryScene::new();
        for i in 0..n {
            scene
                .create_circle(1.0, Point3::new(i as Real, 0.0, 0.0), 8)
                .unwrap();
        }
        scene
    }

    #[test]
    fn names_follow_host_convention() {
        let scene = scene_with(3);
        let names: Vec<_> = scene.objects().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["Circle", "Circle.001", "Circle.002"]);
    }

    #[test]
    fn new_object_is_the_only_selection() {
        let scene = scene_with(3);
        let selected: Vec<_> = scene.selected().map(|o| o.name.clone()).collect();
        assert_eq!(selected, ["Circle.002"]);
    }

    #[test]
    fn select_actions() {
        let mut scene = scene_with(3);
        scene.select_all(SelectAction::Invert);
        assert_eq!(scene.selected().count(), 2);
        scene.select_all(SelectAction::Toggle);
        assert_eq!(scene.selected().count(), 0);
        scene.select_all(SelectAction::Toggle);
        assert_eq!(scene.selected().count(), 3);
        scene.select_all(SelectAction::Deselect);
        assert_eq!(scene.selected().count(), 0);
    }

    #[test]
    fn delete_only_touches_selection() {
        let mut scene = scene_with(4);
        assert_eq!(scene.delete_selected(), 1);
        assert_eq!(scene.len(), 3);
        scene.select_all(SelectAction::Deselect);
        assert_eq!(scene.delete_selected(), 0);
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn reset_empties_scene_and_is_noop_when_empty() {
        let mut scene = scene_with(5);
        scene.reset().unwrap();
        assert!(scene.is_empty());
        scene.reset().unwrap();
        assert!(scene.is_empty());
        assert!(scene.bounding_box().is_none());
    }

    #[test]
    fn capacity_limit_is_reported() {
        let mut scene = MemoryScene::with_capacity_limit(1);
        scene.create_circle(1.0, Point3::origin(), 8).unwrap();
        assert_eq!(
            scene.create_circle(1.0, Point3::origin(), 8),
            Err(SceneError::CapacityExceeded { limit: 1 })
        );
    }

    #[test]
    fn invalid_primitive_is_rejected_by_host() {
        let mut scene = MemoryScene::new();
        let bogus = CirclePrimitive { radius: -1.0, location: Point3::origin(), vertices: 8 };
        assert!(matches!(
            scene.place_circle(bogus),
            Err(SceneError::InvalidPrimitive(_))
        ));
        assert!(scene.is_empty());
    }
}
