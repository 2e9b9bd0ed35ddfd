//! Defines a `NetworkEstimator`, which derives a thresholded network from a dataset.
//!
//! The pairwise computation itself lives behind the `NetworkModel` trait; the
//! estimator owns the shared fit / threshold / export logic that every model needs.

use adjacency::Adjacency;
use dataset::Dataset;
use graph::{Attributes, Graph};
use util::{Result, InteractomeError};

use indexmap::IndexMap;

mod table;
pub use self::table::TableModel;

/// Extra edge metadata, keyed by endpoint pair.
///
/// A key is matched against a discovered edge in the exact orientation given. Edges
/// are discovered as `(earlier, later)` in index order, so a key in the reversed
/// orientation never matches and its attributes are silently skipped.
pub type EdgeAttributes = IndexMap<(String, String), Attributes>;


/// A trait that represents the ability to compute pairwise interaction strengths
/// (and, optionally, their significance) over a fitted dataset.
pub trait NetworkModel {

    /// Compute the interaction strength of every pair of entities in `data`.
    ///
    /// The labels of the returned `Adjacency` must be exactly the dataset's index.
    fn adjacency(&self, data: &Dataset) -> Result<Adjacency>;


    /// Compute the significance of every pairwise interaction in `data`.
    ///
    /// Models with no notion of significance inherit this implementation.
    ///
    /// # Errors
    /// * `InteractomeError::NotImplemented` unless the model overrides this method
    fn p_values(&self, _data: &Dataset) -> Result<Adjacency> {
        Err(InteractomeError::NotImplemented)
    }

}


/// Derives thresholded networks from a dataset using a `NetworkModel`.
///
/// An estimator starts out unfitted. `fit` installs a borrowed dataset, and from then
/// on `to_network` may be called any number of times; it reads the fitted state
/// without mutating it.
pub struct NetworkEstimator<'a, M: NetworkModel> {

    /// The model that supplies the pairwise computation
    model: M,

    /// The fitted dataset, if any
    data: Option<&'a Dataset>

}


impl<'a, M: NetworkModel> NetworkEstimator<'a, M> {

    /// Construct an unfitted `NetworkEstimator` around the given model.
    pub fn new(model: M) -> Self {
        NetworkEstimator { model, data: None }
    }


    /// Borrow the model.
    pub fn model(&self) -> &M {
        &self.model
    }


    /// Record the dataset to derive networks from.
    ///
    /// Overwrites any previously fitted dataset. The dataset is borrowed, not copied,
    /// and is never mutated.
    pub fn fit(&mut self, data: &'a Dataset) {
        self.data = Some(data);
    }


    /// Check if a dataset has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.data.is_some()
    }


    /// Derive the network of interactions stronger than `threshold`.
    ///
    /// Every entity in the dataset's index becomes a node, whether or not it ends up
    /// with an edge. An edge is added for each pair whose interaction strength is
    /// strictly greater than `threshold`; a strength equal to the threshold does not
    /// qualify.
    ///
    /// # Args
    /// * `threshold`: the cutoff on interaction strength
    /// * `additional_attributes`: extra metadata to attach to surviving edges, looked
    ///   up by endpoint pair in discovery orientation
    ///
    /// # Returns
    /// a new `Graph`; the estimator retains nothing
    ///
    /// # Errors
    /// * `InteractomeError::NotFitted` if no dataset has been fitted
    /// * any error of the model's adjacency computation
    pub fn to_network(
        &self,
        threshold: f64,
        additional_attributes: Option<&EdgeAttributes>
    ) -> Result<Graph> {
        let data = self.fitted()?;

        let mut graph = Graph::new();
        for node in data.index() {
            graph.add_node(node);
        }

        let adjacency = self.model.adjacency(data)?;
        for (a, b, weight) in adjacency.pairs() {
            if ! (weight > threshold) {
                continue;
            }

            let attributes = additional_attributes
                .and_then(|attrs| attrs.get(&(String::from(a), String::from(b))))
                .cloned()
                .unwrap_or_default();

            graph.add_edge(a, b, weight, attributes);
        }

        Ok(graph)
    }


    /// Retrieve the significance of every pairwise interaction.
    ///
    /// # Errors
    /// * `InteractomeError::NotFitted` if no dataset has been fitted
    /// * `InteractomeError::NotImplemented` if the model does not supply significance
    ///   values
    pub fn p_values(&self) -> Result<Adjacency> {
        self.model.p_values(self.fitted()?)
    }


    fn fitted(&self) -> Result<&'a Dataset> {
        self.data.ok_or(InteractomeError::NotFitted)
    }

}
