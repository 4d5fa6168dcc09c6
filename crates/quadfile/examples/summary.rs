use quadfile::QuadFile;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/sample_quadtree.txt".to_owned());
    let text = std::fs::read_to_string(&path).unwrap();
    let file = QuadFile::parse(&text).unwrap();

    println!(
        "{path}: {} vertices, {} nodes",
        file.vertices().len(),
        file.nodes().len()
    );

    for (index, node) in file.indexed_nodes() {
        println!(
            "  [{index}] min: {}, max: {}, items: {}",
            node.min_corner(),
            node.max_corner(),
            node.item_count()
        );
    }

    if let Some(bounds) = file.bounds() {
        println!("bounds: {bounds:?}");
    }
}
