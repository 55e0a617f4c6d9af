pub mod model;

pub use model::{Model, Neighbors};

#[cfg(test)]
pub(crate) mod util {
    use crate::graph::{Graph, GraphBuilder, GraphError};

    use geo::Point;
    use planner_fixtures::Fixture;

    use std::time::Instant;

    /// Builds a two-way graph from a fixture, with the given metric scale.
    pub(crate) fn init_graph(fixture: &Fixture, scale: f64) -> Result<Graph<u64>, GraphError> {
        let time = Instant::now();

        let builder = fixture
            .nodes
            .iter()
            .fold(GraphBuilder::new(), |builder, (id, x, y)| {
                builder.node(*id, Point::new(*x, *y))
            });

        let graph = fixture
            .segments
            .iter()
            .fold(builder, |builder, (a, b)| builder.edge(*a, *b))
            .metric_scale(scale)
            .build()?;

        println!("Graph Init ({}) Took: {:?}", fixture.name, time.elapsed());
        Ok(graph)
    }
}
