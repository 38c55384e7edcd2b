/// Final output: ranking table, JSON, and Graphviz DOT text.
use hasserank_core::OrderGraph;
use serde::Serialize;

#[derive(Serialize)]
struct JsonRankedItem {
    rank: usize,
    name: String,
}

#[derive(Serialize)]
struct JsonOutput {
    items: Vec<JsonRankedItem>,
    total_moves: u64,
    skipped: usize,
    total_order: bool,
}

/// Print the ranking most- to least-preferred as a table.
pub fn print_ranking(ranking: &[String], total_moves: u64) {
    let name_width = ranking.iter().map(|n| n.len()).max().unwrap_or(4).max(4);

    println!(" # | {:<name_width$}", "Item");
    println!("---|-{}", "-".repeat(name_width));
    for (i, name) in ranking.iter().enumerate() {
        println!("{:>2} | {:<name_width$}", i + 1, name);
    }
    println!("\n{} items ordered in {} moves", ranking.len(), total_moves);
}

/// Print results as JSON. `ranking` is empty when only a partial order exists.
pub fn print_json(ranking: &[String], total_moves: u64, skipped: usize, total_order: bool) {
    let items: Vec<JsonRankedItem> = ranking
        .iter()
        .enumerate()
        .map(|(i, name)| JsonRankedItem { rank: i + 1, name: name.clone() })
        .collect();

    let output = JsonOutput { items, total_moves, skipped, total_order };
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

/// Render the graph as Graphviz DOT text. Producing an actual image from it
/// is left to `dot` itself.
pub fn to_dot(graph: &OrderGraph, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("digraph \"{}\" {{\n", escape(name)));
    for node in graph.nodes() {
        out.push_str(&format!("    \"{}\";\n", escape(&node)));
    }
    for (winner, loser) in graph.edges() {
        out.push_str(&format!("    \"{}\" -> \"{}\";\n", escape(&winner), escape(&loser)));
    }
    out.push_str("}\n");
    out
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_dot_lists_nodes_and_edges() {
        let items: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        let mut g = OrderGraph::with_items(&items).unwrap();
        g.add_edge("A", "B").unwrap();
        g.add_edge("B", "C").unwrap();

        let dot = to_dot(&g, "movies");
        assert!(dot.starts_with("digraph \"movies\" {"));
        assert!(dot.contains("\"A\";"));
        assert!(dot.contains("\"A\" -> \"B\";"));
        assert!(dot.contains("\"B\" -> \"C\";"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_to_dot_escapes_quotes() {
        let items: Vec<String> = vec!["say \"hi\"".to_string(), "other".to_string()];
        let g = OrderGraph::with_items(&items).unwrap();
        let dot = to_dot(&g, "x");
        assert!(dot.contains("\"say \\\"hi\\\"\";"));
    }
}
