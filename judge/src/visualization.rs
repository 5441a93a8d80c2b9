use colograph::{GameState, Role};

/// A plain-text table of the nodes, followed by the colored edges and the score.
pub fn describe_state(state: &GameState) -> String {
    let graph = state.graph();
    let mut result = String::from("node  shape     owner");
    for node in graph.nodes() {
        let owner = state
            .node_color(node)
            .map_or(String::from("-"), |role| role.to_string());
        result += &format!("\n{:>4}  {:<8}  {}", node, graph.shape(node).name(), owner);
    }

    result += "\ncolored edges:";
    let mut any_edge = false;
    for (edge, role) in state.coloring().edges() {
        let kind = if graph.is_same_shape(edge) {
            "same"
        } else {
            "different"
        };
        result += &format!("\n  {} {} ({} shape)", edge, role, kind);
        any_edge = true;
    }
    if !any_edge {
        result += " none";
    }

    let score = state.score();
    result += &format!(
        "\nscore: {} {}, {} {}",
        Role::First,
        score[Role::First],
        Role::Second,
        score[Role::Second]
    );
    result
}
