use pathmatrix::{
    algo::ShortestPaths,
    core::{Labeling, VertexId},
    infra::export::{Csv, Dot, Export},
    storage::AdjMatrix,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let labeling = Labeling::Letters;
    let [a, b, c, d] = [0, 1, 2, 3].map(VertexId::new);

    let mut graph = AdjMatrix::new(4)?;
    graph.extend_with_edges([(a, b, 1), (a, c, 10), (b, c, 2), (c, d, 1)])?;

    print!("{}", Csv::new(labeling).to_string(&graph));

    let shortest_paths = ShortestPaths::on(&graph).goal(d).run(a)?;
    let result = shortest_paths.path_to(d);
    let path = result
        .path
        .iter()
        .map(|vertex| labeling.label(*vertex))
        .collect::<Vec<_>>()
        .join(" -> ");

    println!("{} from A to D through {path}", shortest_paths[d]);
    // 4 from A to D through A -> B -> C -> D

    // Render with `dot -Tsvg`.
    print!(
        "{}",
        Dot::new(Some(String::from("route")), labeling)
            .highlight(&result.path)
            .to_string(&graph)
    );

    Ok(())
}
