//! Core-Domänentypen: Entities, Szenen-Graph, Layer, Schnittpunkt-Filter.

pub mod entity;
pub mod hit;
pub mod hit_filter;
pub mod layers;
pub mod scene;

pub use entity::{ControlPointRef, EdgeRef, EntityKind, EntityKinds, EntityRef, FaceRef, ItemId};
pub use hit::{HitTester, Intersection, ScreenRect};
pub use hit_filter::{FilteredHit, DEPTH_COINCIDENCE_EPS};
pub use layers::{Layer, LayerStack};
pub use scene::{ModelItem, NodeId, NodeKind, SceneDatabase, SceneNode};
