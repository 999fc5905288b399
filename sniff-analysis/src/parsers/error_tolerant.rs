//! Error-tolerant parsing: extract partial results from trees with ERROR nodes.

use tree_sitter::Node;

use crate::types::Location;

/// Count ERROR nodes in a tree-sitter tree.
pub fn count_errors(root: Node) -> (u32, Vec<Location>) {
    let mut count = 0u32;
    let mut locations = Vec::new();
    collect_errors(root, &mut count, &mut locations);
    (count, locations)
}

fn collect_errors(node: Node, count: &mut u32, locations: &mut Vec<Location>) {
    if node.is_error() || node.is_missing() {
        *count += 1;
        let start = node.start_position();
        locations.push(Location::new(start.row as u32 + 1, start.column as u32));
    }
    let child_count = node.child_count();
    for i in 0..child_count {
        if let Some(child) = node.child(i) {
            collect_errors(child, count, locations);
        }
    }
}
