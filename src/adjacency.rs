//! Defines an `Adjacency`, a labeled square matrix of pairwise interaction strengths.
//!
//! An `Adjacency` is what a network model computes: for every pair of entities, a
//! numeric strength. It is a transient value - a model recomputes it on demand, and an
//! estimator thresholds it into a network without retaining it.

use util::{Result, InteractomeError};

use indexmap::IndexSet;
use ndarray::prelude as nd;

/// A square matrix of interaction strengths with one ordered label set for both axes.
///
/// Entries are addressed by entity pair. Pair enumeration visits each unordered pair
/// exactly once, as `(earlier, later)` in label order, reading the upper triangle of
/// the matrix. Diagonal entries are never enumerated.
#[derive(Clone, Debug)]
pub struct Adjacency {

    /// The entity labels, shared by rows and columns
    labels: IndexSet<String>,

    /// The interaction strengths. Both axes follow `labels`.
    values: nd::Array2<f64>

}


impl Adjacency {

    /// Create a new `Adjacency` from entity labels and a square matrix of strengths.
    ///
    /// # Errors
    /// * `InteractomeError::General` if the matrix is not square, or the label count
    ///   does not match its size
    /// * `InteractomeError::DuplicateLabel` if a label repeats
    pub fn new(labels: &[&str], values: nd::Array2<f64>) -> Result<Self> {
        let (rows, cols) = values.dim();
        if rows != cols {
            return Err(
                InteractomeError::General(
                    String::from("Invalid arguments. The matrix must be square")
                )
            );
        }

        if labels.len() != rows {
            return Err(
                InteractomeError::General(
                    String::from("Invalid arguments. Label count must match the matrix size")
                )
            );
        }

        let labels: IndexSet<String> = labels.iter().map(|s| String::from(*s)).collect();
        if labels.len() != rows {
            return Err(InteractomeError::DuplicateLabel);
        }

        Ok(Adjacency { labels, values })
    }


    /// Create a zero-initialized `Adjacency` over the given entity labels.
    ///
    /// # Errors
    /// * `InteractomeError::DuplicateLabel` if a label repeats
    pub fn zeros(labels: &[&str]) -> Result<Self> {
        let n = labels.len();
        Adjacency::new(labels, nd::Array2::zeros((n, n)))
    }


    /// Iterate over the entity labels, in axis order.
    pub fn labels<'a>(&'a self) -> impl Iterator<Item = &'a str> + 'a {
        self.labels.iter().map(|s| s.as_str())
    }


    /// Get the number of entities.
    pub fn len(&self) -> usize {
        self.labels.len()
    }


    /// Check if there are no entities.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }


    /// Check if an entity is present.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }


    /// Retrieve the interaction strength for a pair of entities.
    ///
    /// # Errors
    /// * `InteractomeError::UnknownLabel` if either entity is unknown
    pub fn get(&self, a: &str, b: &str) -> Result<f64> {
        let i = self.position(a)?;
        let j = self.position(b)?;
        Ok(self.values[[i, j]])
    }


    /// Set the interaction strength for a pair of entities.
    ///
    /// Interactions are undirected, so both `(a, b)` and `(b, a)` are written.
    ///
    /// # Errors
    /// * `InteractomeError::UnknownLabel` if either entity is unknown
    pub fn set(&mut self, a: &str, b: &str, strength: f64) -> Result<()> {
        let i = self.position(a)?;
        let j = self.position(b)?;
        self.values[[i, j]] = strength;
        self.values[[j, i]] = strength;
        Ok(())
    }


    /// Check if every strength agrees with its transposed entry.
    pub fn is_symmetric(&self) -> bool {
        let n = self.labels.len();
        iproduct!(0..n, 0..n).all(|(i, j)| self.values[[i, j]] == self.values[[j, i]])
    }


    /// Iterate over each unordered pair of entities and its interaction strength.
    ///
    /// Pairs are yielded as `(earlier, later)` in label order - the upper triangle of
    /// the matrix, row by row. The diagonal is skipped.
    pub fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a str, &'a str, f64)> + 'a {
        let n = self.labels.len();
        iproduct!(0..n, 0..n)
            .filter(|&(i, j)| i < j)
            .map(move |(i, j)| {
                let a = self.labels.get_index(i).unwrap().as_str();
                let b = self.labels.get_index(j).unwrap().as_str();
                (a, b, self.values[[i, j]])
            })
    }


    fn position(&self, label: &str) -> Result<usize> {
        match self.labels.get_full(label) {
            Some((i, _)) => Ok(i),
            None => Err(InteractomeError::UnknownLabel(String::from(label)))
        }
    }

}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn construction() {
        let adjacency = Adjacency::new(
            &["RAF1", "MAP2K1"],
            array![
                [0.0, 0.9],
                [0.9, 0.0]
            ]
        ).unwrap();

        assert_eq!(2, adjacency.len());
        assert!(! adjacency.is_empty());
        assert!(adjacency.contains("RAF1"));
        assert_eq!(0.9, adjacency.get("RAF1", "MAP2K1").unwrap());
    }

    #[test]
    fn not_square() {
        let result = Adjacency::new(&["RAF1", "MAP2K1"], array![[0.0, 0.9]]);
        match result {
            Err(InteractomeError::General(_)) => (),
            other => panic!("Expected a dimension error, got {:?}", other)
        }
    }

    #[test]
    fn label_count_mismatch() {
        let result = Adjacency::new(&["RAF1"], array![[0.0, 0.9], [0.9, 0.0]]);
        match result {
            Err(InteractomeError::General(_)) => (),
            other => panic!("Expected a dimension error, got {:?}", other)
        }
    }

    #[test]
    fn duplicate_label() {
        let result = Adjacency::zeros(&["RAF1", "RAF1"]);
        match result {
            Err(InteractomeError::DuplicateLabel) => (),
            other => panic!("Expected a duplicate label error, got {:?}", other)
        }
    }

    #[test]
    fn symmetric_set() {
        let mut adjacency = Adjacency::zeros(&["RAF1", "MAP2K1", "MAPK1"]).unwrap();
        adjacency.set("MAP2K1", "RAF1", 0.75).unwrap();

        assert_eq!(0.75, adjacency.get("RAF1", "MAP2K1").unwrap());
        assert_eq!(0.75, adjacency.get("MAP2K1", "RAF1").unwrap());
        assert_eq!(0.0, adjacency.get("RAF1", "MAPK1").unwrap());
    }

    #[test]
    fn unknown_label() {
        let mut adjacency = Adjacency::zeros(&["RAF1", "MAP2K1"]).unwrap();

        assert!(adjacency.get("RAF1", "AKT1").is_err());
        match adjacency.set("AKT1", "RAF1", 1.0) {
            Err(InteractomeError::UnknownLabel(ref label)) => assert_eq!("AKT1", label),
            other => panic!("Expected an unknown label error, got {:?}", other)
        }
    }

    #[test]
    fn pair_enumeration() {
        let mut adjacency = Adjacency::zeros(&["A", "B", "C"]).unwrap();
        adjacency.set("A", "B", 0.1).unwrap();
        adjacency.set("A", "C", 0.2).unwrap();
        adjacency.set("B", "C", 0.3).unwrap();

        let pairs: Vec<(&str, &str, f64)> = adjacency.pairs().collect();
        assert_eq!(vec![("A", "B", 0.1), ("A", "C", 0.2), ("B", "C", 0.3)], pairs);
    }

    #[test]
    /// A pair set in reverse label order is still enumerated in label order.
    fn pair_orientation() {
        let mut adjacency = Adjacency::zeros(&["A", "B"]).unwrap();
        adjacency.set("B", "A", 0.5).unwrap();

        let pairs: Vec<(&str, &str, f64)> = adjacency.pairs().collect();
        assert_eq!(vec![("A", "B", 0.5)], pairs);
    }

    #[test]
    fn symmetry() {
        let symmetric = Adjacency::new(
            &["A", "B"],
            array![
                [0.0, 0.4],
                [0.4, 0.0]
            ]
        ).unwrap();
        assert!(symmetric.is_symmetric());

        let directed = Adjacency::new(
            &["A", "B"],
            array![
                [0.0, 0.4],
                [0.1, 0.0]
            ]
        ).unwrap();
        assert!(! directed.is_symmetric());
    }

    #[test]
    fn empty() {
        let adjacency = Adjacency::zeros(&[]).unwrap();
        assert!(adjacency.is_empty());
        assert_eq!(0, adjacency.pairs().count());
    }

}
