use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{GameState, Graph, Shape, SHAPE_PALETTE};

pub const DEFAULT_NODE_COUNT: usize = 8;
pub const DEFAULT_EDGE_COUNT: usize = 11;
pub const DEFAULT_SHAPE_COUNT: usize = 4;

/// Parameters for [`random_game()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomGameParams {
    pub node_count: usize,
    pub edge_count: usize,
    /// How many entries of [`SHAPE_PALETTE`] the nodes are decorated with.
    pub shape_count: usize,
    pub score_same_shape: i32,
    pub score_different_shape: i32,
}

impl Default for RandomGameParams {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            edge_count: DEFAULT_EDGE_COUNT,
            shape_count: DEFAULT_SHAPE_COUNT,
            score_same_shape: 1,
            score_different_shape: -1,
        }
    }
}

/// The forward links of one node while generating a graph.
struct ForwardLinks {
    node: usize,
    node_count: usize,
    /// Larger nodes this node is linked to.
    chosen: BTreeSet<usize>,
}

impl ForwardLinks {
    fn new(node: usize, node_count: usize) -> Self {
        Self {
            node,
            node_count,
            chosen: BTreeSet::new(),
        }
    }

    /// How many larger nodes this node is not linked to yet.
    fn available(&self) -> usize {
        self.node_count - self.node - 1 - self.chosen.len()
    }

    /// Links to a uniformly chosen larger node that is not linked yet.
    /// There must be at least one.
    fn link_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let pick = rng.gen_range(0..self.available());
        let target = nth_not_taken(self.node + 1, &self.chosen, pick);
        self.chosen.insert(target);
    }
}

/// The `n`-th number (counting from zero) among `start..` that is not in
/// `taken`. Every element of `taken` must be at least `start`.
fn nth_not_taken(start: usize, taken: &BTreeSet<usize>, n: usize) -> usize {
    let mut target = start + n;
    for &t in taken {
        if t > target {
            break;
        }
        target += 1;
    }
    target
}

/// Generates the adjacency list of a random connected graph.
///
/// Every node except the last is linked to a random larger node, which yields
/// `node_count - 1` edges and a connected graph. Further random forward links
/// are then added until there are `edge_count` edges, or until no node has
/// any larger node left to link to.
///
/// `node_count` is raised to at least 2 and `edge_count` to at least
/// `node_count - 1`. Only larger indices appear in each node's list, so
/// the last node's list is always empty. Memory use grows with the number
/// of nodes and edges, not with the number of possible edges.
pub fn random_graph<R: Rng + ?Sized>(
    node_count: usize,
    edge_count: usize,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    let node_count = node_count.max(2);
    let edge_count = edge_count.max(node_count - 1);

    let mut links: Vec<ForwardLinks> = (0..node_count - 1)
        .map(|node| {
            let mut links = ForwardLinks::new(node, node_count);
            links.link_random(rng);
            links
        })
        .collect();

    // Nodes that still have a larger node to link to, in no particular order.
    let mut candidates: Vec<usize> = links
        .iter()
        .filter(|l| l.available() > 0)
        .map(|l| l.node)
        .collect();
    let mut num_edges = node_count - 1;
    while num_edges < edge_count && !candidates.is_empty() {
        let pick = rng.gen_range(0..candidates.len());
        let node_links = &mut links[candidates[pick]];
        node_links.link_random(rng);
        if node_links.available() == 0 {
            candidates.swap_remove(pick);
        }
        num_edges += 1;
    }

    let mut edges: Vec<Vec<usize>> = links
        .into_iter()
        .map(|l| l.chosen.into_iter().collect())
        .collect();
    edges.push(Vec::new());
    edges
}

/// Draws a shape for each node, uniformly among the first `shape_count`
/// entries of [`SHAPE_PALETTE`].
///
/// `shape_count` is clamped to `1..=SHAPE_PALETTE.len()`.
pub fn random_shapes<R: Rng + ?Sized>(
    node_count: usize,
    shape_count: usize,
    rng: &mut R,
) -> Vec<Shape> {
    let palette = &SHAPE_PALETTE[..shape_count.clamp(1, SHAPE_PALETTE.len())];
    (0..node_count)
        .map(|_| palette[rng.gen_range(0..palette.len())])
        .collect()
}

/// Creates the initial state of a match on a freshly generated graph.
pub fn random_game<R: Rng + ?Sized>(params: RandomGameParams, rng: &mut R) -> GameState {
    let edges = random_graph(params.node_count, params.edge_count, rng);
    let shapes = random_shapes(edges.len(), params.shape_count, rng);
    GameState::initial(
        Graph::build(edges, shapes),
        params.score_same_shape,
        params.score_different_shape,
    )
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn is_connected(edges: &[Vec<usize>]) -> bool {
        let mut neighbors = vec![BTreeSet::new(); edges.len()];
        for (n1, adjs) in edges.iter().enumerate() {
            for &n2 in adjs {
                neighbors[n1].insert(n2);
                neighbors[n2].insert(n1);
            }
        }
        let mut seen = BTreeSet::from([0]);
        let mut stack = vec![0];
        while let Some(node) = stack.pop() {
            for &next in &neighbors[node] {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        seen.len() == edges.len()
    }

    fn count_edges(edges: &[Vec<usize>]) -> usize {
        edges.iter().map(Vec::len).sum()
    }

    #[test]
    fn six_nodes_eight_edges() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let params = RandomGameParams {
                node_count: 6,
                edge_count: 8,
                ..RandomGameParams::default()
            };
            let state = random_game(params, &mut rng);
            let graph = state.graph();
            assert_eq!(graph.node_count(), 6);
            assert_eq!(graph.shapes().len(), 6);
            assert_eq!(graph.edge_count(), 8);
            assert!(is_connected(graph.adjacency()));
            for (node, adjs) in graph.adjacency().iter().enumerate() {
                // Every node but the last links forward
                assert_eq!(adjs.is_empty(), node == 5);
                assert!(adjs.iter().all(|&n| n > node && n < 6));
            }
        }
    }

    #[test]
    fn counts_are_clamped() {
        let mut rng = StdRng::seed_from_u64(7);
        let edges = random_graph(0, 0, &mut rng);
        assert_eq!(edges, vec![vec![1], vec![]]);

        let edges = random_graph(5, 1, &mut rng);
        assert_eq!(edges.len(), 5);
        assert_eq!(count_edges(&edges), 4);
        assert!(is_connected(&edges));
    }

    #[test]
    fn too_many_edges_gives_a_complete_graph() {
        let mut rng = StdRng::seed_from_u64(3);
        let edges = random_graph(5, 100, &mut rng);
        assert_eq!(count_edges(&edges), 10);
        for (node, adjs) in edges.iter().enumerate() {
            assert_eq!(adjs, &(node + 1..5).collect::<Vec<_>>());
        }
    }

    #[test]
    fn nth_not_taken_skips_taken_numbers() {
        let taken = BTreeSet::from([2, 3, 6]);
        let free: Vec<usize> = (0..5).map(|n| nth_not_taken(1, &taken, n)).collect();
        assert_eq!(free, vec![1, 4, 5, 7, 8]);
        assert_eq!(nth_not_taken(4, &BTreeSet::new(), 2), 6);
    }

    #[test]
    fn large_sparse_graph() {
        let mut rng = StdRng::seed_from_u64(9);
        let edges = random_graph(200_000, 200_010, &mut rng);
        assert_eq!(edges.len(), 200_000);
        assert_eq!(count_edges(&edges), 200_010);
        assert!(is_connected(&edges));
    }

    #[test]
    fn same_seed_same_graph() {
        let a = random_game(RandomGameParams::default(), &mut StdRng::seed_from_u64(42));
        let b = random_game(RandomGameParams::default(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_eq!(a.score_same_shape(), 1);
        assert_eq!(a.score_different_shape(), -1);
        assert!(a.coloring().is_empty());
    }

    #[test]
    fn shapes_come_from_the_start_of_the_palette() {
        let mut rng = StdRng::seed_from_u64(11);
        let shapes = random_shapes(200, 2, &mut rng);
        assert_eq!(shapes.len(), 200);
        assert!(shapes.iter().all(|s| [Shape::Circle, Shape::Triangle].contains(s)));

        assert!(random_shapes(50, 0, &mut rng).iter().all(|&s| s == Shape::Circle));
        assert_eq!(
            random_shapes(500, 99, &mut rng).into_iter().collect::<BTreeSet<_>>().len(),
            SHAPE_PALETTE.len()
        );
    }

    quickcheck! {
        fn generated_graphs_are_valid(node_count: u8, edge_count: u8, seed: u64) -> bool {
            let node_count = usize::from(node_count % 20);
            let edge_count = usize::from(edge_count % 60);
            let mut rng = StdRng::seed_from_u64(seed);
            let edges = random_graph(node_count, edge_count, &mut rng);
            let n = node_count.max(2);
            let max_edges = n * (n - 1) / 2;
            let shapes = random_shapes(edges.len(), DEFAULT_SHAPE_COUNT, &mut rng);
            edges.len() == n
                && count_edges(&edges) == edge_count.max(n - 1).min(max_edges)
                && is_connected(&edges)
                && Graph::new(edges, shapes).is_ok()
        }
    }
}
