//! Defines `TableModel`, a `NetworkModel` backed by precomputed tables.

use adjacency::Adjacency;
use dataset::Dataset;
use super::NetworkModel;
use util::{Result, InteractomeError};

/// A `NetworkModel` whose pairwise interaction strengths were computed ahead of time.
///
/// The model performs no computation of its own: it checks that its table covers
/// exactly the entities of the fitted dataset and serves the table as-is. Significance
/// values may optionally be supplied alongside the strengths.
#[derive(Debug)]
pub struct TableModel {

    /// The precomputed interaction strengths
    adjacency: Adjacency,

    /// The precomputed significance values, if any
    p_values: Option<Adjacency>

}


impl TableModel {

    /// Construct a `TableModel` serving the given interaction strengths.
    pub fn new(adjacency: Adjacency) -> TableModel {
        TableModel { adjacency, p_values: None }
    }


    /// Construct a `TableModel` serving both interaction strengths and their
    /// significance.
    ///
    /// # Errors
    /// * `InteractomeError::General` if the two tables are not labeled identically
    pub fn with_p_values(adjacency: Adjacency, p_values: Adjacency) -> Result<TableModel> {
        if ! adjacency.labels().eq(p_values.labels()) {
            return Err(
                InteractomeError::General(
                    String::from("Significance labels do not match the adjacency labels")
                )
            );
        }

        Ok(TableModel { adjacency, p_values: Some(p_values) })
    }

}


impl NetworkModel for TableModel {

    /// Serve the precomputed strengths.
    ///
    /// # Errors
    /// * `InteractomeError::General` if the table's labels are not exactly the
    ///   dataset's index
    fn adjacency(&self, data: &Dataset) -> Result<Adjacency> {
        if ! data.index().eq(self.adjacency.labels()) {
            return Err(
                InteractomeError::General(
                    String::from("Precomputed labels do not match the dataset index")
                )
            );
        }

        Ok(self.adjacency.clone())
    }


    fn p_values(&self, data: &Dataset) -> Result<Adjacency> {
        match self.p_values {
            Some(ref p) => {
                if ! data.index().eq(p.labels()) {
                    return Err(
                        InteractomeError::General(
                            String::from("Precomputed labels do not match the dataset index")
                        )
                    );
                }

                Ok(p.clone())
            },
            None => Err(InteractomeError::NotImplemented)
        }
    }

}
