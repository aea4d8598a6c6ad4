//! Shared task data for tests.

use salbp::dag::TaskGraph;
use salbp::input::parse_records;

/// Thirteen-task reference line (total work 65), in the input format.
pub const REFERENCE_LINE: &str = "\
1 3 3;
2 6 4;
3 8 6; 1
4 4 7; 2
5 7 7;
6 2 8; 3
7 3 8; 4 5
8 6 9 10 11; 7 6
9 9 12; 8
10 5 12; 8
11 2 13; 8
12 7 13; 10 9
13 3; 11 12
";

/// Four tasks, two chains: 1 -> 3 and 2 -> 4 (total work 21).
pub const TWO_CHAINS: &str = "\
1 3 3
2 6 4
3 8 ; 1
4 4 ; 2
";

/// Five tasks where WET packing needs 3 stations at c = 9 but 4 at c = 10.
/// Chain 1 -> 2 -> 3; tasks 4 and 5 are free.
pub const LONGER_CYCLE_MORE_STATIONS: &str = "\
1 2 2
2 9 3
3 2
4 3
5 7
";

pub fn reference_graph() -> TaskGraph {
    graph_from(REFERENCE_LINE)
}

pub fn two_chains_graph() -> TaskGraph {
    graph_from(TWO_CHAINS)
}

pub fn graph_from(text: &str) -> TaskGraph {
    let records = parse_records(text).expect("fixture must parse");
    TaskGraph::from_records(&records).expect("fixture must form a valid graph")
}
