use salbp::balance::{base_cycle_time, find_cycle_time, pack, Balance};
use salbp::errors::SalbpError;
use salbp::ordering::Method;
use salbp::{balance_line, report};
use salbp_test_utils::fixtures::{
    graph_from, reference_graph, two_chains_graph, LONGER_CYCLE_MORE_STATIONS,
};
use salbp_test_utils::init_tracing;

fn collect_attempts(
    graph: &salbp::dag::TaskGraph,
    method: Method,
    workstations: usize,
) -> (Balance, Vec<Balance>) {
    let order = method.order(graph);
    let mut attempts = Vec::new();
    let last = find_cycle_time(&order, workstations, |b| {
        attempts.push(b.clone());
        Ok(())
    })
    .unwrap();
    (last, attempts)
}

#[test]
fn base_cycle_time_is_even_split_of_total_work() {
    let graph = reference_graph();
    let order = Method::Wet.order(&graph);

    assert_eq!(base_cycle_time(&order, 4), 16);
    assert_eq!(base_cycle_time(&order, 1), 65);
    // 65 / 13 = 5 is shorter than task 9 (9).
    assert_eq!(base_cycle_time(&order, 13), 9);
}

#[test]
fn reference_line_wet_search_stops_at_seventeen() {
    init_tracing();
    let graph = reference_graph();

    let (last, attempts) = collect_attempts(&graph, Method::Wet, 4);

    let tried: Vec<u64> = attempts.iter().map(Balance::cycle_time).collect();
    assert_eq!(tried, vec![16, 17]);
    assert_eq!(attempts[0].station_count(), 5);
    assert_eq!(last.cycle_time(), 17);
    assert_eq!(last.station_count(), 4);
    assert_eq!(&last, attempts.last().unwrap());
}

#[test]
fn reference_line_rpw_search_stops_at_seventeen() {
    let graph = reference_graph();

    let (last, attempts) = collect_attempts(&graph, Method::Rpw, 4);

    let counts: Vec<usize> = attempts.iter().map(Balance::station_count).collect();
    assert_eq!(counts, vec![5, 4]);
    assert_eq!(last.cycle_time(), 17);
    assert_eq!(last.line_time(), 68);
}

#[test]
fn two_chains_search_stops_at_first_fitting_cycle_time() {
    let graph = two_chains_graph();

    let (last, attempts) = collect_attempts(&graph, Method::Wet, 2);

    let tried: Vec<u64> = attempts.iter().map(Balance::cycle_time).collect();
    assert_eq!(tried, vec![10, 11]);
    assert_eq!(attempts[0].station_count(), 3);
    assert_eq!(last.station_count(), 2);
}

fn station_ids(balance: &Balance) -> Vec<Vec<u32>> {
    balance
        .stations()
        .iter()
        .map(|s| s.tasks().iter().map(|t| t.id.0).collect())
        .collect()
}

#[test]
fn longer_cycle_time_can_need_more_stations() {
    let graph = graph_from(LONGER_CYCLE_MORE_STATIONS);
    let order = Method::Wet.order(&graph);

    let at_nine = pack(&order, 9).unwrap();
    let at_ten = pack(&order, 10).unwrap();

    assert_eq!(station_ids(&at_nine), vec![vec![5, 1], vec![2], vec![4, 3]]);
    // 5 and 4 fill the first station, so 1, 2 and 3 end up one per station.
    assert_eq!(
        station_ids(&at_ten),
        vec![vec![5, 4], vec![1], vec![2], vec![3]]
    );
}

#[test]
fn search_stops_at_first_fit_despite_non_monotonic_counts() {
    let graph = graph_from(LONGER_CYCLE_MORE_STATIONS);

    // Base is the longest task (9), which already fits 3 stations; c = 10
    // would need 4 and is never tried.
    let (last, attempts) = collect_attempts(&graph, Method::Wet, 3);
    assert_eq!(attempts.len(), 1);
    assert_eq!(last.cycle_time(), 9);
    assert_eq!(last.station_count(), 3);

    // 23 / 2 = 11 needs 3 stations, 12 needs 2.
    let (last, attempts) = collect_attempts(&graph, Method::Wet, 2);
    let counts: Vec<(u64, usize)> = attempts
        .iter()
        .map(|b| (b.cycle_time(), b.station_count()))
        .collect();
    assert_eq!(counts, vec![(11, 3), (12, 2)]);
    assert_eq!(station_ids(&last), vec![vec![5, 4, 1], vec![2, 3]]);
}

#[test]
fn base_already_fitting_yields_a_single_attempt() {
    let graph = graph_from("1 5\n2 5\n3 5\n");

    let (last, attempts) = collect_attempts(&graph, Method::Wet, 3);

    assert_eq!(attempts.len(), 1);
    assert_eq!(last.cycle_time(), 5);
    assert_eq!(last.station_count(), 3);
}

#[test]
fn single_workstation_ends_at_total_duration() {
    let graph = two_chains_graph();

    let (last, _) = collect_attempts(&graph, Method::Rpw, 1);

    assert_eq!(last.cycle_time(), 21);
    assert_eq!(last.station_count(), 1);
}

#[test]
fn task_of_maximum_duration_balances_on_one_station() {
    let graph = graph_from("1 18446744073709551615\n");

    let (last, attempts) = collect_attempts(&graph, Method::Rpw, 2);

    assert_eq!(attempts.len(), 1);
    assert_eq!(last.cycle_time(), u64::MAX);
    assert_eq!(last.line_time(), u64::MAX);
    assert_eq!(last.smoothness_index(), 0.0);
    assert!((last.line_efficiency() - 100.0).abs() < 1e-9);
}

#[test]
fn zero_workstations_is_rejected() {
    let graph = two_chains_graph();
    let order = Method::Wet.order(&graph);

    let result = find_cycle_time(&order, 0, |_| Ok(()));
    assert!(matches!(result, Err(SalbpError::ConfigError(_))));
}

#[test]
fn observer_error_aborts_the_search() {
    let graph = two_chains_graph();
    let order = Method::Wet.order(&graph);
    let mut seen = 0;

    let result = find_cycle_time(&order, 2, |_| {
        seen += 1;
        Err(SalbpError::ConfigError("stop".to_string()))
    });

    assert!(matches!(result, Err(SalbpError::ConfigError(msg)) if msg == "stop"));
    assert_eq!(seen, 1);
}

#[test]
fn balance_line_writes_order_and_every_attempt() {
    let graph = two_chains_graph();
    let mut out = Vec::new();

    let last = balance_line(&graph, Method::Wet, 2, &mut out).unwrap();

    let expected = "\
Order for WET: 3, 2, 4, 1
WET, c = 10
  ST(1) 2(6) 4(4)
  ST(2) 1(3)
  ST(3) 3(8)
  LE = 70.00%
  SI = 7.28
  T = 30

WET, c = 11
  ST(1) 2(6) 4(4)
  ST(2) 1(3) 3(8)
  LE = 95.45%
  SI = 1.00
  T = 22
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
    assert_eq!(last.cycle_time(), 11);
}

#[test]
fn write_attempt_matches_report_format() {
    let graph = reference_graph();
    let (last, _) = collect_attempts(&graph, Method::Wet, 4);

    let mut out = Vec::new();
    report::write_attempt(&mut out, Method::Wet, &last).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("WET, c = 17\n  ST(1) 5(7) 2(6) 4(4)\n"));
    assert!(text.contains("  LE = 95.59%\n"));
    assert!(text.contains("  SI = 2.24\n"));
    assert!(text.ends_with("  T = 68\n"));
}
