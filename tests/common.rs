use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Graph used throughout the CLI tests: BFS, DFS and UCS all disagree on it
pub const SAMPLE_GRAPH: &str = "A:B:1,C:4\nB:C:2,D:5\nC:D:1\n";

pub fn graphwalk() -> Command {
    let mut cmd = cargo_bin_cmd!("graphwalk");
    cmd.env_remove("GRAPHWALK_CONFIG")
        .env_remove("GRAPHWALK_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `content` as `graph.txt` under `dir` and return its path
pub fn write_graph(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("graph.txt");
    fs::write(&path, content).expect("write graph file");
    path
}
