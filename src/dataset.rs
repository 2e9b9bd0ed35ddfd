//! Defines a `Dataset`, the labeled tabular input an estimator is fitted with.
//!
//! A `Dataset` names its rows: each row label identifies an entity, and the row holds
//! that entity's observed values. The ordered set of row labels is the dataset *index*,
//! and the index determines the node set of any network derived from the dataset.

use util::{Result, InteractomeError};

use indexmap::IndexSet;
use ndarray::prelude as nd;

/// A table of observations with labeled rows and columns.
///
/// Rows are entities, columns are observations. Construction validates that the labels
/// match the table dimensions and that no label repeats; afterwards the value is
/// immutable. An estimator borrows a `Dataset`, it never takes ownership of one.
#[derive(Clone, Debug)]
pub struct Dataset {

    /// The row labels - one per entity, in row order
    index: IndexSet<String>,

    /// The column labels - one per observation, in column order
    columns: IndexSet<String>,

    /// The observed values. Rows follow `index`, columns follow `columns`.
    values: nd::Array2<f64>

}


impl Dataset {

    /// Create a new `Dataset` from row labels, column labels and a table of values.
    ///
    /// # Args
    /// * `index`: the entity label for each row of `values`
    /// * `columns`: the observation label for each column of `values`
    /// * `values`: the observed values
    ///
    /// # Errors
    /// * `InteractomeError::General` if the label counts do not match the table dimensions
    /// * `InteractomeError::DuplicateLabel` if a row or column label repeats
    pub fn new(index: &[&str], columns: &[&str], values: nd::Array2<f64>) -> Result<Self> {
        let (rows, cols) = values.dim();
        if index.len() != rows || columns.len() != cols {
            return Err(
                InteractomeError::General(
                    String::from("Invalid arguments. Label counts must match the table dimensions")
                )
            );
        }

        let index: IndexSet<String> = index.iter().map(|s| String::from(*s)).collect();
        if index.len() != rows {
            return Err(InteractomeError::DuplicateLabel);
        }

        let columns: IndexSet<String> = columns.iter().map(|s| String::from(*s)).collect();
        if columns.len() != cols {
            return Err(InteractomeError::DuplicateLabel);
        }

        Ok(Dataset { index, columns, values })
    }


    /// Iterate over the entity labels, in row order.
    pub fn index<'a>(&'a self) -> impl Iterator<Item = &'a str> + 'a {
        self.index.iter().map(|s| s.as_str())
    }


    /// Iterate over the observation labels, in column order.
    pub fn columns<'a>(&'a self) -> impl Iterator<Item = &'a str> + 'a {
        self.columns.iter().map(|s| s.as_str())
    }


    /// Check if an entity is present in the index.
    pub fn contains(&self, entity: &str) -> bool {
        self.index.contains(entity)
    }


    /// Get the row position of an entity, if it is present in the index.
    pub fn position(&self, entity: &str) -> Option<usize> {
        self.index.get_full(entity).map(|(i, _)| i)
    }


    /// Get the number of entities (rows).
    pub fn num_entities(&self) -> usize {
        self.index.len()
    }


    /// Get the number of observations (columns).
    pub fn num_observations(&self) -> usize {
        self.columns.len()
    }


    /// Retrieve the observed values for a single entity.
    ///
    /// # Errors
    /// * `InteractomeError::UnknownLabel` if the entity is not in the index
    pub fn row(&self, entity: &str) -> Result<nd::ArrayView1<f64>> {
        match self.position(entity) {
            Some(i) => Ok(self.values.row(i)),
            None => Err(InteractomeError::UnknownLabel(String::from(entity)))
        }
    }


    /// Retrieve a single observed value.
    ///
    /// # Errors
    /// * `InteractomeError::UnknownLabel` if the entity or the observation is unknown
    pub fn get(&self, entity: &str, observation: &str) -> Result<f64> {
        let row = match self.position(entity) {
            Some(i) => i,
            None => return Err(InteractomeError::UnknownLabel(String::from(entity)))
        };

        let col = match self.columns.get_full(observation) {
            Some((i, _)) => i,
            None => return Err(InteractomeError::UnknownLabel(String::from(observation)))
        };

        Ok(self.values[[row, col]])
    }


    /// Borrow the full table of values.
    pub fn values(&self) -> &nd::Array2<f64> {
        &self.values
    }

}
