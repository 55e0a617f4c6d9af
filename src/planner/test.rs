use crate::graph::traits::util::init_graph;
use crate::graph::{Graph, GraphBuilder};
use crate::planner::*;
use crate::primitive::Entry;

use approx::assert_relative_eq;
use geo::Point;
use itertools::Itertools;
use planner_fixtures::*;
use rayon::prelude::*;
use std::error::Error;
use wkt::ToWkt;

const SCALE: f64 = 250.0;

/// Percentage of the extent at which a grid column or row sits.
fn percent(span: u64, at: u64) -> f64 {
    at as f64 / (span - 1) as f64 * 100.0
}

fn native_length<E: Entry>(route: &Route<E>) -> f64 {
    route
        .nodes
        .iter()
        .tuple_windows()
        .map(|(a, b)| a.distance(b))
        .sum()
}

fn assert_connected<E: Entry>(graph: &Graph<E>, route: &Route<E>) {
    for (a, b) in route.nodes.iter().tuple_windows() {
        assert!(
            graph.is_adjacent(&a.id, &b.id),
            "{:?} -> {:?} is not a segment of the graph",
            a.id,
            b.id
        );
    }
}

#[test_log::test]
fn square_diagonal() -> Result<(), Box<dyn Error>> {
    let graph = init_graph(&square(), SCALE)?;
    let mut planner = RoutePlanner::new(&graph, 0.0, 0.0, 100.0, 100.0)?;

    assert_eq!(planner.query().start.id, SQUARE_A);
    assert_eq!(planner.query().end.id, SQUARE_C);

    let route = planner.run_search().expect("square is connected").clone();
    println!("{}", route.linestring().wkt_string());

    let ids = route.ids().collect::<Vec<_>>();
    assert_eq!(ids.len(), 3);
    assert_eq!(ids[0], SQUARE_A);
    assert!(ids[1] == SQUARE_B || ids[1] == SQUARE_D);
    assert_eq!(ids[2], SQUARE_C);

    assert_relative_eq!(route.distance, 2.0 * SCALE);
    assert_eq!(planner.total_distance(), Some(route.distance));
    Ok(())
}

#[test]
fn square_tie_breaks_on_identifier() -> Result<(), Box<dyn Error>> {
    let graph = init_graph(&square(), SCALE)?;
    let mut planner = RoutePlanner::new(&graph, 0.0, 0.0, 100.0, 100.0)?;

    // B and D share f = 2, the smaller identifier wins
    let route = planner.run_search().expect("square is connected");
    assert_eq!(
        route.ids().collect::<Vec<_>>(),
        vec![SQUARE_A, SQUARE_B, SQUARE_C]
    );
    Ok(())
}

#[test]
fn start_equals_end() -> Result<(), Box<dyn Error>> {
    let graph = init_graph(&square(), SCALE)?;
    let mut planner = RoutePlanner::new(&graph, 1.0, 2.0, 0.0, 0.0)?;

    let route = planner.run_search().expect("trivial route");
    assert_eq!(route.len(), 1);
    assert_eq!(route.start().map(|node| node.id), Some(SQUARE_A));
    assert_eq!(route.end().map(|node| node.id), Some(SQUARE_A));
    assert_relative_eq!(route.distance, 0.0);
    assert_eq!(planner.expansions(), 0);
    Ok(())
}

#[test_log::test]
fn disconnected_has_no_route() -> Result<(), Box<dyn Error>> {
    let graph = init_graph(&disconnected(), SCALE)?;
    let mut planner = RoutePlanner::new(&graph, 0.0, 0.0, 100.0, 100.0)?;

    assert_eq!(planner.query().start.id, 0);
    assert_eq!(planner.query().end.id, 4);

    assert!(planner.run_search().is_none());
    assert_eq!(planner.status(), &SearchStatus::Exhausted);
    assert!(planner.route().is_none());
    assert!(planner.total_distance().is_none());

    // Only the start's component was explored
    let mut explored = planner.visited().map(|record| record.node.id).collect_vec();
    explored.sort();
    assert_eq!(explored, vec![0, 1, 2]);
    Ok(())
}

#[test]
fn empty_graph_is_unresolvable() -> Result<(), Box<dyn Error>> {
    let graph = GraphBuilder::<u64>::new().build()?;

    let result = RoutePlanner::new(&graph, 10.0, 20.0, 30.0, 40.0);
    assert_eq!(
        result.err(),
        Some(PlannerError::Unresolvable { x: 10.0, y: 20.0 })
    );
    Ok(())
}

#[test]
fn non_finite_coordinates_are_unresolvable() -> Result<(), Box<dyn Error>> {
    let graph = init_graph(&square(), SCALE)?;

    let result = RoutePlanner::new(&graph, f64::NAN, 0.0, 100.0, 100.0);
    assert!(matches!(result, Err(PlannerError::Unresolvable { x, y }) if x.is_nan() && y == 0.0));

    let result = RoutePlanner::new(&graph, 0.0, 0.0, 100.0, f64::INFINITY);
    assert!(matches!(
        result,
        Err(PlannerError::Unresolvable { x, y }) if x == 100.0 && y == f64::INFINITY
    ));
    Ok(())
}

#[test]
fn one_way_roads_are_respected() -> Result<(), Box<dyn Error>> {
    let graph = GraphBuilder::<u64>::new()
        .node(0, Point::new(0.0, 0.0))
        .node(1, Point::new(1.0, 0.0))
        .node(2, Point::new(2.0, 0.0))
        .way(&[0, 1, 2], true)
        .build()?;

    let mut forward = RoutePlanner::new(&graph, 0.0, 0.0, 100.0, 0.0)?;
    let route = forward.run_search().expect("forward along the way");
    assert_eq!(route.ids().collect_vec(), vec![0, 1, 2]);
    assert_relative_eq!(route.distance, 2.0);

    let mut backward = RoutePlanner::new(&graph, 100.0, 0.0, 0.0, 0.0)?;
    assert!(backward.run_search().is_none());
    Ok(())
}

#[test]
fn grid_routes_are_connected_and_measured() -> Result<(), Box<dyn Error>> {
    const WIDTH: u64 = 9;
    const HEIGHT: u64 = 7;
    let graph = init_graph(&grid(WIDTH, HEIGHT), SCALE)?;

    let queries = [((0, 0), (8, 6)), ((3, 5), (6, 0)), ((8, 2), (1, 4)), ((4, 3), (4, 3))];

    for ((sc, sr), (ec, er)) in queries {
        let mut planner = RoutePlanner::new(
            &graph,
            percent(WIDTH, sc),
            percent(HEIGHT, sr),
            percent(WIDTH, ec),
            percent(HEIGHT, er),
        )?;

        let route = planner.run_search().expect("grid is connected").clone();

        assert_eq!(route.start().map(|n| n.id), Some(grid_id(WIDTH, sc, sr)));
        assert_eq!(route.end().map(|n| n.id), Some(grid_id(WIDTH, ec, er)));
        assert_connected(&graph, &route);
        assert_relative_eq!(route.distance, native_length(&route) * SCALE, epsilon = 1e-9);

        // Every step is a unit segment and the heuristic is consistent on a grid
        let manhattan = sc.abs_diff(ec) + sr.abs_diff(er);
        assert_eq!(route.len() as u64, manhattan + 1);
        assert_relative_eq!(route.distance, manhattan as f64 * SCALE, epsilon = 1e-6);
    }

    Ok(())
}

#[test]
fn heuristic_never_overestimates() -> Result<(), Box<dyn Error>> {
    const WIDTH: u64 = 8;
    const HEIGHT: u64 = 6;
    let graph = init_graph(&grid(WIDTH, HEIGHT), 1.0)?;

    let mut planner = RoutePlanner::new(&graph, 0.0, 0.0, 100.0, 100.0)?;
    planner.run_search().expect("grid is connected");

    let end = planner.query().end;
    assert!(planner.visited().count() > 1);

    for record in planner.visited() {
        // The true remaining distance on a four-way unit grid is Manhattan
        let remaining = (end.position.x() - record.node.position.x()).abs()
            + (end.position.y() - record.node.position.y()).abs();

        assert!(
            record.h <= remaining + 1e-9,
            "h({:?}) = {} overestimates {}",
            record.node.id,
            record.h,
            remaining
        );
        assert_relative_eq!(record.h, record.node.distance(&end));
    }

    Ok(())
}

#[test]
fn first_discovery_keeps_the_eager_path() -> Result<(), Box<dyn Error>> {
    let graph = init_graph(&detour(), 1.0)?;
    let mut planner = RoutePlanner::new(&graph, 0.0, 0.0, 100.0, 0.0)?;

    let route = planner.run_search().expect("detour is connected");
    assert_eq!(
        route.ids().collect_vec(),
        vec![DETOUR_START, DETOUR_EAGER, DETOUR_JUNCTION, DETOUR_END]
    );
    assert_relative_eq!(route.distance, 14.0);
    Ok(())
}

#[test]
fn reopen_finds_the_bypass() -> Result<(), Box<dyn Error>> {
    let graph = init_graph(&detour(), 1.0)?;
    let config = PlannerConfig::default().relaxation(Relaxation::Reopen);
    let mut planner = RoutePlanner::new(&graph, 0.0, 0.0, 100.0, 0.0)?.with_config(config);

    let route = planner.run_search().expect("detour is connected");
    assert_eq!(
        route.ids().collect_vec(),
        vec![DETOUR_START, DETOUR_BYPASS, DETOUR_JUNCTION, DETOUR_END]
    );
    assert_relative_eq!(route.distance, 2.0 * 15.25f64.sqrt() + 5.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn reopen_is_optimal_on_grids() -> Result<(), Box<dyn Error>> {
    const WIDTH: u64 = 12;
    const HEIGHT: u64 = 10;
    let graph = init_graph(&grid(WIDTH, HEIGHT), SCALE)?;

    for config in [
        PlannerConfig::default().relaxation(Relaxation::Reopen),
        PlannerConfig::default()
            .relaxation(Relaxation::Reopen)
            .tie_break(TieBreak::Unspecified),
    ] {
        let mut planner = RoutePlanner::new(
            &graph,
            percent(WIDTH, 1),
            percent(HEIGHT, 8),
            percent(WIDTH, 10),
            percent(HEIGHT, 2),
        )?
        .with_config(config);

        let route = planner.run_search().expect("grid is connected");
        let manhattan = (10 - 1 + 8 - 2) as f64;
        assert_relative_eq!(route.distance, manhattan * SCALE, epsilon = 1e-6);
    }

    Ok(())
}

#[test]
fn repeated_runs_are_identical() -> Result<(), Box<dyn Error>> {
    let graph = init_graph(&detour(), SCALE)?;

    let run = || -> Result<Option<Route<u64>>, PlannerError> {
        let mut planner = RoutePlanner::new(&graph, 0.0, 0.0, 100.0, 0.0)?;
        Ok(planner.run_search().cloned())
    };

    let first = run()?;
    assert!(first.is_some());
    for _ in 0..5 {
        assert_eq!(run()?, first);
    }

    Ok(())
}

#[test]
fn search_moves_through_states() -> Result<(), Box<dyn Error>> {
    let graph = init_graph(&square(), SCALE)?;
    let mut planner = RoutePlanner::new(&graph, 0.0, 0.0, 100.0, 100.0)?;

    assert_eq!(planner.status(), &SearchStatus::Init);

    // Start is discovered and its neighbours queued
    assert_eq!(planner.step(), &SearchStatus::Expanding);
    assert_eq!(planner.frontier_len(), 2);
    assert_eq!(planner.visited().count(), 3);

    let mut steps = 0;
    while !planner.step().is_terminal() {
        steps += 1;
        assert!(steps < 10, "square search should terminate quickly");
    }

    let found = planner.status().clone();
    assert!(matches!(found, SearchStatus::Found(_)));

    // Terminal states are never left
    assert_eq!(planner.step(), &found);
    assert_eq!(planner.run_search(), found.route());
    Ok(())
}

#[test]
fn start_node_has_no_parent() -> Result<(), Box<dyn Error>> {
    let graph = init_graph(&grid(4, 4), SCALE)?;
    let mut planner = RoutePlanner::new(&graph, 0.0, 0.0, 100.0, 100.0)?;
    planner.run_search().expect("grid is connected");

    let start = planner.query().start.id;
    for record in planner.visited() {
        if record.node.id == start {
            assert!(record.parent.is_none());
            assert_relative_eq!(record.g, 0.0);
        } else {
            assert!(record.parent.is_some());
        }
    }

    Ok(())
}

#[test]
fn planners_share_one_graph() -> Result<(), Box<dyn Error>> {
    const WIDTH: u64 = 16;
    const HEIGHT: u64 = 16;
    let graph = init_graph(&grid(WIDTH, HEIGHT), SCALE)?;

    let queries = (0..WIDTH)
        .map(|at| (percent(WIDTH, at), 0.0, percent(WIDTH, WIDTH - 1 - at), 100.0))
        .collect_vec();

    let search = |(sx, sy, ex, ey): &(f64, f64, f64, f64)| {
        RoutePlanner::new(&graph, *sx, *sy, *ex, *ey)
            .ok()
            .and_then(|mut planner| planner.run_search().cloned())
    };

    let parallel = queries.par_iter().map(search).collect::<Vec<_>>();
    let serial = queries.iter().map(search).collect::<Vec<_>>();

    assert_eq!(parallel, serial);
    assert!(parallel.iter().all(Option::is_some));
    Ok(())
}

#[test]
fn config_reads_variables() {
    let config = PlannerConfig::from_vars(|key| match key {
        "ROUTE_PLANNER_RELAXATION" => Some("Reopen".to_string()),
        "ROUTE_PLANNER_TIE_BREAK" => Some(" unspecified ".to_string()),
        _ => None,
    })
    .expect("values are valid");

    assert_eq!(config.relaxation, Relaxation::Reopen);
    assert_eq!(config.tie_break, TieBreak::Unspecified);

    let defaults = PlannerConfig::from_vars(|_| None).expect("nothing to parse");
    assert_eq!(defaults, PlannerConfig::default());
    assert_eq!(defaults.relaxation, Relaxation::FirstDiscovery);
    assert_eq!(defaults.tie_break.to_string(), "identifier");
}

#[test]
fn config_rejects_unknown_values() {
    let result = PlannerConfig::from_vars(|key| {
        (key == "ROUTE_PLANNER_RELAXATION").then(|| "sometimes".to_string())
    });

    assert_eq!(
        result.err(),
        Some(ConfigError::InvalidValue {
            key: "ROUTE_PLANNER_RELAXATION",
            value: "sometimes".to_string(),
        })
    );
}
