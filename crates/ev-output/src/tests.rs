use tempfile::TempDir;

use ev_action::{Action, Decision};
use ev_agent::AgentBuilder;
use ev_core::{SimParams, VertexType};
use ev_graph::{Capacity, Graph};
use ev_sim::SimBuilder;

use crate::csv::CsvExtractor;

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

#[test]
fn header_lists_time_then_one_column_per_agent() {
    let dir = tmp();
    let path = dir.path().join("run.csv");

    let mut graph: Graph<String, String> = Graph::new();
    graph.add_vertex("v0".into(), VertexType::Empty, Capacity::Unbounded);
    let agents = vec![
        AgentBuilder::new("a".to_string(), vec![Decision::new("v0".into(), Action::Null)]).build().unwrap(),
        AgentBuilder::new("b".to_string(), vec![Decision::new("v0".into(), Action::Null)]).build().unwrap(),
    ];

    let extractor = CsvExtractor::new(&path).unwrap();
    let params = SimParams { delta_min: 0.5, battery_eff: 0.75, leakage_power_w: 0.0 };
    let mut sim = SimBuilder::new()
        .graph(graph)
        .agents(agents)
        .params(params)
        .extractor(Box::new(extractor))
        .build()
        .unwrap();

    sim.start(2.0).unwrap();
    sim.run().unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
    assert_eq!(headers, ["time", "\"a\"", "\"b\""]);
}

#[test]
fn row_count_matches_iteration_plus_one() {
    let dir = tmp();
    let path = dir.path().join("run.csv");

    let mut graph: Graph<String, String> = Graph::new();
    graph.add_vertex("v0".into(), VertexType::Empty, Capacity::Unbounded);
    let agent =
        AgentBuilder::new("a".to_string(), vec![Decision::new("v0".into(), Action::Wait { time_min: 100.0 })])
            .build()
            .unwrap();

    let extractor = CsvExtractor::new(&path).unwrap();
    let params = SimParams { delta_min: 0.5, battery_eff: 0.75, leakage_power_w: 0.0 };
    let mut sim = SimBuilder::new()
        .graph(graph)
        .agents(vec![agent])
        .params(params)
        .extractor(Box::new(extractor))
        .build()
        .unwrap();

    sim.start(3.0).unwrap();
    sim.run().unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len() as u64, sim.control().iteration + 1);
}

#[test]
fn finished_agent_cell_carries_the_finished_suffix() {
    let dir = tmp();
    let path = dir.path().join("run.csv");

    let mut graph: Graph<String, String> = Graph::new();
    graph.add_vertex("v0".into(), VertexType::Empty, Capacity::Unbounded);
    let agent = AgentBuilder::new("a".to_string(), vec![Decision::new("v0".into(), Action::Null)]).build().unwrap();

    let extractor = CsvExtractor::new(&path).unwrap();
    let params = SimParams { delta_min: 0.25, battery_eff: 0.75, leakage_power_w: 0.0 };
    let mut sim = SimBuilder::new()
        .graph(graph)
        .agents(vec![agent])
        .params(params)
        .extractor(Box::new(extractor))
        .build()
        .unwrap();

    sim.start(5.0).unwrap();
    sim.run().unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
    let last = rows.last().expect("at least one row");
    assert!(last[1].contains("FINISHED"), "expected FINISHED in final row, got {:?}", last);
    assert!(last[1].contains("100.0%"), "soc should still read 100%, got {:?}", last);
}

#[test]
fn waiting_agent_cell_carries_the_waiting_suffix() {
    let dir = tmp();
    let path = dir.path().join("run.csv");

    let mut graph: Graph<String, String> = Graph::new();
    graph.add_vertex("v0".into(), VertexType::Empty, Capacity::Finite(0));
    let agent = AgentBuilder::new("a".to_string(), vec![Decision::new("v0".into(), Action::Null)]).build().unwrap();

    let extractor = CsvExtractor::new(&path).unwrap();
    let params = SimParams { delta_min: 1.0, battery_eff: 0.75, leakage_power_w: 0.0 };
    let mut sim = SimBuilder::new()
        .graph(graph)
        .agents(vec![agent])
        .params(params)
        .extractor(Box::new(extractor))
        .build()
        .unwrap();

    sim.start(3.0).unwrap();
    sim.run().unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
    let last = rows.last().expect("at least one row");
    assert!(last[1].contains("WAITING"), "expected WAITING in final row, got {:?}", last);
}
