//! Reachability queries.
//!
//! Three independently implemented traversal strategies compute the set of
//! vertices reachable from a start vertex. They are deliberately kept as
//! three distinct code paths: the production entry point
//! [`reachable_from`] runs all of them and fails loudly if they ever
//! disagree, so each acts as a cross-check on the others.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use bg_core::{CoreResult, CountryId};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Dfs;
use tracing::debug;

use crate::error::GraphError;
use crate::graph::BorderGraph;

/// The connected component containing `start`, including `start` itself.
///
/// Runs all three strategies and returns their common result. Fails with
/// `VertexNotFound` when `start` is not a vertex, and with
/// `StrategyDivergence` if the strategies ever return different sets.
pub fn reachable_from(graph: &BorderGraph, start: CountryId) -> CoreResult<BTreeSet<CountryId>> {
    let frontier = frontier_expansion(graph, start)?;
    let library = depth_first_library(graph, start)?;
    let recursive = depth_first_recursive(graph, start)?;

    debug!(
        start = %start,
        frontier = frontier.len(),
        library = library.len(),
        recursive = recursive.len(),
        "reachability strategies completed"
    );

    if frontier != library || frontier != recursive {
        return Err(GraphError::StrategyDivergence {
            frontier: frontier.len(),
            library: library.len(),
            recursive: recursive.len(),
        }
        .into());
    }

    Ok(frontier)
}

/// Strategy 1: frontier expansion (breadth-first discovery order).
///
/// Keeps a visited set and a FIFO queue of pending vertices. Each popped
/// vertex is marked visited and its neighbors not already visited or
/// pending are appended to the back of the queue.
pub fn frontier_expansion(graph: &BorderGraph, start: CountryId) -> CoreResult<BTreeSet<CountryId>> {
    ensure_vertex(graph, start)?;

    let mut visited: BTreeSet<CountryId> = BTreeSet::new();
    visited.insert(start);

    let mut pending: VecDeque<CountryId> = graph.neighbors(start).iter().copied().collect();

    while let Some(next) = pending.pop_front() {
        visited.insert(next);
        for &neighbor in graph.neighbors(next) {
            if !visited.contains(&neighbor) && !pending.contains(&neighbor) {
                pending.push_back(neighbor);
            }
        }
    }

    Ok(visited)
}

/// Strategy 2: library depth-first traversal.
///
/// Mirrors the graph into a petgraph [`UnGraph`] and walks it with the
/// stock [`Dfs`] visitor.
pub fn depth_first_library(
    graph: &BorderGraph,
    start: CountryId,
) -> CoreResult<BTreeSet<CountryId>> {
    ensure_vertex(graph, start)?;

    let mut mirror: UnGraph<CountryId, ()> = UnGraph::new_undirected();
    let mut nodes: BTreeMap<CountryId, NodeIndex> = BTreeMap::new();
    for country in graph.vertices() {
        nodes.insert(country.id, mirror.add_node(country.id));
    }
    for (a, b) in graph.edges() {
        mirror.add_edge(nodes[&a], nodes[&b], ());
    }

    let mut visited: BTreeSet<CountryId> = BTreeSet::new();
    let mut dfs = Dfs::new(&mirror, nodes[&start]);
    while let Some(node) = dfs.next(&mirror) {
        visited.insert(mirror[node]);
    }

    Ok(visited)
}

/// Strategy 3: recursive depth-first visit.
///
/// Plain recursion over a shared, growing visited set; nothing is removed
/// on backtrack. Recursion depth is bounded by the component size, which is
/// small for this dataset (at most a few hundred countries).
pub fn depth_first_recursive(
    graph: &BorderGraph,
    start: CountryId,
) -> CoreResult<BTreeSet<CountryId>> {
    ensure_vertex(graph, start)?;

    let mut visited: BTreeSet<CountryId> = BTreeSet::new();
    recursive_visit(graph, start, &mut visited);
    Ok(visited)
}

fn recursive_visit(graph: &BorderGraph, current: CountryId, visited: &mut BTreeSet<CountryId>) {
    visited.insert(current);
    for &neighbor in graph.neighbors(current) {
        if !visited.contains(&neighbor) {
            recursive_visit(graph, neighbor, visited);
        }
    }
}

fn ensure_vertex(graph: &BorderGraph, start: CountryId) -> CoreResult<()> {
    if graph.contains(start) {
        Ok(())
    } else {
        Err(GraphError::VertexNotFound { id: start }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;
    use crate::country::Country;

    fn country(id: u32, code: &str) -> Country {
        Country::new(CountryId::new(id), code, code)
    }

    fn id(raw: u32) -> CountryId {
        CountryId::new(raw)
    }

    /// Path 1-2-3-4 plus a separate 5-6 pair and an isolated vertex 7.
    fn fixture() -> BorderGraph {
        let mut builder = GraphBuilder::new();
        builder.add_border(country(1, "AAA"), country(2, "BBB"));
        builder.add_border(country(2, "BBB"), country(3, "CCC"));
        builder.add_border(country(3, "CCC"), country(4, "DDD"));
        builder.add_border(country(5, "EEE"), country(6, "FFF"));
        builder.add_vertex(country(7, "GGG"));
        builder.build().unwrap()
    }

    #[test]
    fn reaches_whole_component() {
        let graph = fixture();
        let expected: BTreeSet<_> = [id(1), id(2), id(3), id(4)].into_iter().collect();
        assert_eq!(reachable_from(&graph, id(1)).unwrap(), expected);
        assert_eq!(reachable_from(&graph, id(3)).unwrap(), expected);
    }

    #[test]
    fn does_not_cross_components() {
        let graph = fixture();
        let expected: BTreeSet<_> = [id(5), id(6)].into_iter().collect();
        assert_eq!(reachable_from(&graph, id(5)).unwrap(), expected);
    }

    #[test]
    fn isolated_vertex_yields_singleton() {
        let graph = fixture();
        let expected: BTreeSet<_> = [id(7)].into_iter().collect();
        assert_eq!(reachable_from(&graph, id(7)).unwrap(), expected);
    }

    #[test]
    fn unknown_start_is_an_error() {
        let graph = fixture();
        for result in [
            reachable_from(&graph, id(99)),
            frontier_expansion(&graph, id(99)),
            depth_first_library(&graph, id(99)),
            depth_first_recursive(&graph, id(99)),
        ] {
            assert!(result.is_err());
        }
    }

    #[test]
    fn strategies_agree_on_cycle() {
        let mut builder = GraphBuilder::new();
        builder.add_border(country(1, "AAA"), country(2, "BBB"));
        builder.add_border(country(2, "BBB"), country(3, "CCC"));
        builder.add_border(country(3, "CCC"), country(1, "AAA"));
        let graph = builder.build().unwrap();

        let frontier = frontier_expansion(&graph, id(1)).unwrap();
        let library = depth_first_library(&graph, id(1)).unwrap();
        let recursive = depth_first_recursive(&graph, id(1)).unwrap();

        assert_eq!(frontier, library);
        assert_eq!(frontier, recursive);
        assert_eq!(frontier.len(), 3);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::analytics::connected_component_count;
    use crate::builder::GraphBuilder;
    use crate::country::Country;
    use proptest::prelude::*;

    fn country(id: u32) -> Country {
        Country::new(CountryId::new(id), format!("C{id:02}"), format!("C{id:02}"))
    }

    fn arb_graph() -> impl Strategy<Value = BorderGraph> {
        prop::collection::vec((0u32..12, 0u32..12), 1..40).prop_filter_map(
            "graph needs at least one non-loop edge",
            |pairs| {
                let mut builder = GraphBuilder::new();
                for (a, b) in pairs {
                    builder.add_border(country(a), country(b));
                }
                builder.build().ok()
            },
        )
    }

    proptest! {
        #[test]
        fn strategies_agree_on_random_graphs(graph in arb_graph(), pick in 0usize..64) {
            let ids: Vec<CountryId> = graph.vertices().map(|c| c.id).collect();
            let start = ids[pick % ids.len()];

            let frontier = frontier_expansion(&graph, start).unwrap();
            let library = depth_first_library(&graph, start).unwrap();
            let recursive = depth_first_recursive(&graph, start).unwrap();

            prop_assert_eq!(&frontier, &library);
            prop_assert_eq!(&frontier, &recursive);
            prop_assert!(frontier.contains(&start));
        }

        #[test]
        fn reachable_sets_partition_the_vertex_set(graph in arb_graph()) {
            let mut distinct: BTreeSet<BTreeSet<CountryId>> = BTreeSet::new();
            let mut covered: BTreeSet<CountryId> = BTreeSet::new();

            for country in graph.vertices() {
                let set = reachable_from(&graph, country.id).unwrap();
                prop_assert!(set.contains(&country.id));
                covered.extend(set.iter().copied());
                distinct.insert(set);
            }

            // No overlaps, no omissions: distinct component sets cover every
            // vertex exactly once.
            let total: usize = distinct.iter().map(BTreeSet::len).sum();
            prop_assert_eq!(total, graph.vertex_count());
            prop_assert_eq!(covered.len(), graph.vertex_count());
            prop_assert_eq!(distinct.len(), connected_component_count(&graph));
        }
    }
}
