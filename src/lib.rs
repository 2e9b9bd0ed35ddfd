extern crate indexmap;
#[macro_use]
extern crate itertools;
#[macro_use]
extern crate ndarray;

pub mod adjacency;
pub mod dataset;
pub mod estimator;
pub mod graph;
pub mod util;

pub use adjacency::Adjacency;
pub use dataset::Dataset;
pub use estimator::{EdgeAttributes, NetworkEstimator, NetworkModel, TableModel};
pub use graph::{AttrValue, Attributes, Edge, Graph};
pub use util::{Result, InteractomeError};
