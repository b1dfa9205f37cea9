//! Easel drawing core.
//!
//! Shapes, the factories that build them from command tokens, the named-shape
//! registry, placed scene objects, and the command interpreter tying them
//! together. Everything here is CPU-only: rendering means recording
//! primitives into an `easel_engine::scene::DrawList`.

pub mod error;
pub mod factory;
pub mod interp;
pub mod object;
pub mod parse;
pub mod registry;
pub mod scene;
pub mod shape;

pub use error::{CommandError, ErrorKind};
pub use factory::{FactoryFn, ShapeFactories};
pub use interp::{CommandCtx, Interpreter};
pub use object::{Border, Direction, SceneObject};
pub use parse::tokenize;
pub use registry::ShapeRegistry;
pub use scene::Scene;
pub use shape::{Shape, ShapeDef, SharedShape};
