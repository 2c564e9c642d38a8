//! Build a graph from an ASCII maze and print what each path generator
//! produces on it.
//!
//! Run: cargo run --bin maze-walk

use mazegraph_core::{Point, Tile};
use mazegraph_paths::{GraphError, MazeGraph, Path};

const MAZE: &[&str] = &[
    "###########",
    "#....#....#",
    "#.##.#.##.#",
    "#.........#",
    "#.##.#.##.#",
    "#....#....#",
    "###########",
];

fn build(rows: &[&str]) -> MazeGraph {
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    let height = rows.len() as u32;
    let mut graph = MazeGraph::new(width, height);
    graph.add_walkable_edges(|t| {
        rows.get(t.y as usize)
            .and_then(|r| r.as_bytes().get(t.x as usize))
            .is_some_and(|&c| c != b'#')
    });
    graph
}

fn render(rows: &[&str], path: &[Tile]) -> String {
    let mut out = String::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            let t = Tile::new(x as u32, y as u32);
            if path.first() == Some(&t) {
                out.push('S');
            } else if path.last() == Some(&t) {
                out.push('E');
            } else if path.contains(&t) {
                out.push('*');
            } else {
                out.push(c);
            }
        }
        out.push('\n');
    }
    out
}

fn show(title: &str, rows: &[&str], path: &[Tile]) {
    println!("{title}: {} step(s)", path.len().saturating_sub(1));
    print!("{}", render(rows, path));
    println!();
}

fn run() -> Result<(), GraphError> {
    let mut graph = build(MAZE);
    let mut rng = rand::rng();
    println!(
        "{} grid, {} vertices, {} edges\n",
        graph.size(),
        graph.vertex_count(),
        graph.edge_count()
    );

    let start = Tile::new(1, 1);
    let goal = Tile::new(9, 5);

    show("shortest", MAZE, &graph.shortest_path(start, goal)?);
    show("random", MAZE, &graph.random_path(start, &mut rng)?);
    show("fixed length 6", MAZE, &graph.fixed_length_path(start, 6)?);
    show(
        "along (1, -1)",
        MAZE,
        &graph.path_along_direction(start, Point::new(1, -1), None)?,
    );
    show(
        "avoiding (4, 3)",
        MAZE,
        &graph.path_avoiding(start, goal, Tile::new(4, 3))?,
    );

    let mut path = Path::new(graph.shortest_path(start, goal)?)?;
    print!("walk:");
    while let Some(t) = path.next_tile() {
        print!(" {t}");
    }
    println!("\nwalked {} of {} edges", path.edges_traversed(), path.len());
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
