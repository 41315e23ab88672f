use hampath_core::Graph;

/// Undirected cycle over `labels`, closing the last vertex back to the first.
#[must_use]
pub fn cycle(labels: &[&str]) -> Graph {
    let mut graph = Graph::undirected();
    for (index, from) in labels.iter().enumerate() {
        let to = labels[(index + 1) % labels.len()];
        graph.add_edge((*from).to_owned(), to.to_owned());
    }
    graph
}

/// Undirected graph over an explicit edge list.
#[must_use]
pub fn undirected(edges: &[(&str, &str)]) -> Graph {
    edges
        .iter()
        .map(|(from, to)| ((*from).to_owned(), (*to).to_owned()))
        .collect()
}

pub fn owned(label: &str) -> String {
    label.to_owned()
}
