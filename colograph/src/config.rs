use serde::{Deserialize, Serialize};

use crate::{Role, Shape};

/// The graph used when a configuration does not specify one.
pub const DEFAULT_EDGES: [&[usize]; 4] = [&[1, 3], &[2], &[3], &[]];

/// The shapes used when a configuration does not specify any.
pub const DEFAULT_SHAPES: [Shape; 4] = [Shape::Circle, Shape::Triangle, Shape::Square, Shape::Star];

pub const DEFAULT_SCORE_SAME_SHAPE: i32 = -1;
pub const DEFAULT_SCORE_DIFFERENT_SHAPE: i32 = -1;

/// Everything needed to set up a match.
///
/// Missing fields take their defaults when deserializing. Note that `edges`
/// and `shapes` must have the same length, so overriding only one of them
/// only works for a graph with four nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Adjacency list: `edges[n]` holds neighbors of node `n`.
    pub edges: Vec<Vec<usize>>,
    /// One shape per node.
    pub shapes: Vec<Shape>,
    /// Added to the owner's score for each colored edge joining two nodes of the same shape.
    pub score_same_shape: i32,
    /// Added to the owner's score for each colored edge joining two nodes of different shapes.
    pub score_different_shape: i32,
    /// The role to move first. [`Role::First`] if not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_role: Option<Role>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            edges: DEFAULT_EDGES.iter().map(|adjs| adjs.to_vec()).collect(),
            shapes: DEFAULT_SHAPES.to_vec(),
            score_same_shape: DEFAULT_SCORE_SAME_SHAPE,
            score_different_shape: DEFAULT_SCORE_DIFFERENT_SHAPE,
            active_role: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: GameConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.edges, vec![vec![1, 3], vec![2], vec![3], vec![]]);
        assert_eq!(config.shapes.len(), 4);
        assert_eq!(config.score_same_shape, -1);
        assert_eq!(config.score_different_shape, -1);
        assert_eq!(config.active_role, None);
    }

    #[test]
    fn partial_config() {
        let config: GameConfig = serde_json::from_str(
            r#"{
                "edges": [[1], []],
                "shapes": ["square", "star"],
                "score_same_shape": 1,
                "active_role": "second"
            }"#,
        )
        .unwrap();
        assert_eq!(config.edges, vec![vec![1], vec![]]);
        assert_eq!(config.shapes, vec![Shape::Square, Shape::Star]);
        assert_eq!(config.score_same_shape, 1);
        assert_eq!(config.score_different_shape, DEFAULT_SCORE_DIFFERENT_SHAPE);
        assert_eq!(config.active_role, Some(Role::Second));
    }
}
