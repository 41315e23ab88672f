//! Property tests comparing the search against a brute-force oracle.
//!
//! Graphs are kept small enough (at most seven vertices) that every vertex
//! permutation can be checked directly.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

use hampath_test_support::proptest_profile::PropertyRunProfile;

use super::search;
use crate::Graph;

const MAX_VERTICES: usize = 7;

#[derive(Debug, Clone)]
struct GraphFixture {
    directed: bool,
    vertices: usize,
    edges: Vec<(usize, usize)>,
}

impl GraphFixture {
    fn build(&self) -> Graph<usize> {
        let mut graph = Graph::new(self.directed);
        for vertex in 0..self.vertices {
            graph.add_vertex(vertex);
        }
        for &(from, to) in &self.edges {
            graph.add_edge(from, to);
        }
        graph
    }
}

fn graph_fixture() -> impl Strategy<Value = GraphFixture> {
    (any::<bool>(), 0..=MAX_VERTICES).prop_flat_map(|(directed, vertices)| {
        let edge = (0..vertices.max(1), 0..vertices.max(1));
        let edges = if vertices == 0 {
            Just(Vec::new()).boxed()
        } else {
            proptest::collection::vec(edge, 0..=vertices * 3).boxed()
        };
        edges.prop_map(move |edges| GraphFixture {
            directed,
            vertices,
            edges,
        })
    })
}

/// Every ordering of all vertices whose consecutive pairs are edges.
fn oracle(graph: &Graph<usize>) -> HashSet<Vec<usize>> {
    fn permute(
        graph: &Graph<usize>,
        remaining: &mut Vec<usize>,
        prefix: &mut Vec<usize>,
        out: &mut HashSet<Vec<usize>>,
    ) {
        if remaining.is_empty() {
            out.insert(prefix.clone());
            return;
        }
        for position in 0..remaining.len() {
            let vertex = remaining.remove(position);
            let connected = prefix
                .last()
                .is_none_or(|&last| graph.has_edge(&last, &vertex));
            if connected {
                prefix.push(vertex);
                permute(graph, remaining, prefix, out);
                prefix.pop();
            }
            remaining.insert(position, vertex);
        }
    }

    let mut found = HashSet::new();
    if graph.is_empty() {
        return found;
    }
    let mut remaining: Vec<usize> = graph.vertices().copied().collect();
    permute(graph, &mut remaining, &mut Vec::new(), &mut found);
    found
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: PropertyRunProfile::load(128).cases(),
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn all_paths_match_the_oracle(fixture in graph_fixture()) {
        let graph = fixture.build();
        let paths = search(&graph, None, true)
            .map_err(|err| TestCaseError::fail(format!("search failed: {err}")))?;
        let found: Vec<Vec<usize>> = paths.into_iter().map(|path| path.into_vertices()).collect();
        let unique: HashSet<Vec<usize>> = found.iter().cloned().collect();
        prop_assert_eq!(unique.len(), found.len(), "paths must not repeat");
        prop_assert_eq!(unique, oracle(&graph));
    }

    #[test]
    fn returned_paths_are_valid(fixture in graph_fixture()) {
        let graph = fixture.build();
        let paths = search(&graph, None, true)
            .map_err(|err| TestCaseError::fail(format!("search failed: {err}")))?;
        for path in &paths {
            prop_assert_eq!(path.len(), graph.vertex_count());
            let distinct: HashSet<&usize> = path.vertices().iter().collect();
            prop_assert_eq!(distinct.len(), graph.vertex_count());
            for (from, to) in path.edges() {
                let neighbours = graph
                    .neighbors(from)
                    .map_err(|err| TestCaseError::fail(err.to_string()))?;
                prop_assert!(neighbours.contains(to));
            }
        }
    }

    #[test]
    fn first_only_returns_the_first_enumerated_path(fixture in graph_fixture()) {
        let graph = fixture.build();
        let first = search(&graph, None, false)
            .map_err(|err| TestCaseError::fail(format!("search failed: {err}")))?;
        let all = search(&graph, None, true)
            .map_err(|err| TestCaseError::fail(format!("search failed: {err}")))?;
        prop_assert!(first.len() <= 1);
        prop_assert_eq!(first.first(), all.first());
    }

    #[test]
    fn fixed_start_paths_begin_at_start(fixture in graph_fixture(), pick in any::<prop::sample::Index>()) {
        let graph = fixture.build();
        prop_assume!(!graph.is_empty());
        let start = pick.index(graph.vertex_count());
        let paths = search(&graph, Some(&start), true)
            .map_err(|err| TestCaseError::fail(format!("search failed: {err}")))?;
        let expected: HashSet<Vec<usize>> = oracle(&graph)
            .into_iter()
            .filter(|path| path.first() == Some(&start))
            .collect();
        let found: HashSet<Vec<usize>> = paths.into_iter().map(|path| path.into_vertices()).collect();
        prop_assert_eq!(found, expected);
    }
}
