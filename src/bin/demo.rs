//! Builds a tree from random values, unbalances it, rebalances it, and
//! prints what happened at every step.

use bstree::tree::Tree;

use rand::distributions::Uniform;
use rand::{thread_rng, Rng};

fn main() {
    let values: Vec<i32> = thread_rng()
        .sample_iter(Uniform::from(0..100))
        .take(15)
        .collect();
    println!("random values: {:?}", values);

    let mut tree = Tree::build(values);
    print!("{}", tree);
    println!("balanced: {}", tree.is_balanced());
    print_traversals(&tree);

    // Hang a chain of out-of-range values off the right spine.
    for value in [101, 133, 169, 766] {
        tree.insert(value);
    }
    println!(
        "balanced after inserting values over 100: {}",
        tree.is_balanced()
    );

    tree.rebalance();
    println!("balanced after rebalancing: {}", tree.is_balanced());
    print!("{}", tree);
    print_traversals(&tree);
}

fn print_traversals(tree: &Tree<i32>) {
    println!("level order: {:?}", tree.level_order());
    println!("pre order:   {:?}", tree.pre_order());
    println!("in order:    {:?}", tree.in_order());
    println!("post order:  {:?}", tree.post_order());
}
