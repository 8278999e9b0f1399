/// Six substations, ten candidate runs; the minimum tree weighs 15.
pub const CANONICAL_INPUT: &str = "\
6
1,2,3,ab
1,6,5,af
1,5,6,ae
2,6,4,bf
5,6,2,ef
2,3,1,bc
3,6,4,cf
3,4,6,cd
4,5,8,de
4,6,5,df
";

/// Renders a tree the way the command-line report lists it.
#[must_use]
pub fn report_lines(tree: &powergrid_core::SpanningTree) -> Vec<String> {
    tree.edges()
        .iter()
        .map(|edge| format!("{} [{}]", edge.name(), edge.weight()))
        .collect()
}
