//! Provides an example of deriving thresholded interaction networks from a dataset.
//!
//! A small panel of kinase-pathway proteins is fitted with precomputed interaction
//! strengths, then exported at two different cutoffs.

extern crate interactome;
extern crate ndarray;
extern crate ndarray_rand;
extern crate rand;

use interactome as i;
use i::{AttrValue, NetworkEstimator, TableModel};

use ndarray::prelude as nd;
use ndarray_rand::RandomExt;
use rand::distributions::Range;

fn main() -> i::Result<()> {
    let entities = ["RAF1", "MAP2K1", "MAPK1", "MAPK3", "DUSP6"];
    let replicates = ["rep_a", "rep_b", "rep_c", "rep_d"];

    ////////////////////////////////////////////////////////////////////////////
    // Step 1:  Build the dataset
    //
    // Note:    the observed values stand in for real abundance measurements;
    //          only the index drives the network's node set
    let values = nd::Array::random((entities.len(), replicates.len()), Range::new(0.0, 1.0));
    let data = i::Dataset::new(&entities, &replicates, values)?;

    ////////////////////////////////////////////////////////////////////////////
    // Step 2:  Build the model from precomputed interaction strengths
    let mut adjacency = i::Adjacency::zeros(&entities)?;
    adjacency.set("RAF1", "MAP2K1", 0.92)?;
    adjacency.set("MAP2K1", "MAPK1", 0.88)?;
    adjacency.set("MAP2K1", "MAPK3", 0.81)?;
    adjacency.set("MAPK1", "MAPK3", 0.64)?;
    adjacency.set("MAPK1", "DUSP6", 0.43)?;
    let model = TableModel::new(adjacency);

    ////////////////////////////////////////////////////////////////////////////
    // Step 3:  Fit the estimator
    let mut estimator = NetworkEstimator::new(model);
    estimator.fit(&data);

    ////////////////////////////////////////////////////////////////////////////
    // Step 4:  Attach extra metadata to one known interaction
    let mut bag = i::Attributes::new();
    bag.insert(String::from("evidence"), AttrValue::from("coip"));

    let mut additional = i::EdgeAttributes::new();
    additional.insert((String::from("RAF1"), String::from("MAP2K1")), bag);

    ////////////////////////////////////////////////////////////////////////////
    // Step 5:  Export at two cutoffs
    for threshold in [0.5, 0.85].iter() {
        let network = estimator.to_network(*threshold, Some(&additional))?;

        println!("interactions > {}", threshold);
        println!("--------------------------------------------------");
        println!("nodes: {}, edges: {}", network.num_nodes(), network.num_edges());

        for (a, b, edge) in network.edges() {
            match edge.attribute("evidence") {
                Some(&AttrValue::Text(ref source)) => {
                    println!("{:8} -- {:8}\t{:.2}\t[evidence: {}]", a, b, edge.weight(), source)
                },
                _ => println!("{:8} -- {:8}\t{:.2}", a, b, edge.weight())
            }
        }

        let isolated: Vec<&str> = network.nodes()
                                         .filter(|n| network.edges().all(|(a, b, _)| a != *n && b != *n))
                                         .collect();
        println!("isolated: {:?}", isolated);
        println!();
    }

    Ok(())
}
