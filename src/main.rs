fn main() {
    let mut nodes: usize = 3;
    let mut directed = false;
    let mut adjacency = false;
    let mut count_only = false;

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--nodes" | "-n" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                nodes = v.parse().unwrap_or_else(|_| usage_and_exit(2));
                i += 2;
            }
            "--directed" => {
                directed = true;
                i += 1;
            }
            "--adjacency" => {
                adjacency = true;
                i += 1;
            }
            "--count-only" => {
                count_only = true;
                i += 1;
            }
            "--help" | "-h" => usage_and_exit(0),
            _ => usage_and_exit(2),
        }
    }

    let result = if directed {
        graphspace::enumerate::generate_directed_graphs(nodes)
    } else {
        graphspace::enumerate::generate_undirected_graphs(nodes)
    };

    let graphs = match result {
        Ok(graphs) => graphs,
        Err(e) => {
            eprintln!("graphspace: {e}");
            std::process::exit(1);
        }
    };

    let kind = if directed { "directed" } else { "undirected" };
    println!("{} {kind} graphs on {nodes} nodes", graphs.len());
    if count_only {
        return;
    }

    for g in &graphs {
        if adjacency {
            print!("{}", g.adjacency_string());
        } else {
            println!("{g}");
        }
    }
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  graphspace [--nodes N] [--directed] [--adjacency] [--count-only]\n\nOptions:\n  --nodes/-n N   Node count to enumerate (default: 3)\n  --directed     Enumerate directed graphs (default: undirected)\n  --adjacency    Print the adjacency-listing form instead of edge pairs\n  --count-only   Print only the generated count\n"
    );
    std::process::exit(code)
}
