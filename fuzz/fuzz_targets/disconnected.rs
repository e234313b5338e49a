#![no_main]

use libfuzzer_sys::arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{arbitrary, fuzz_target};
use spanning::core::graph::fuzzing::{arbitrary_disconnected_graph, check_disconnected};
use spanning::core::graph::UndirectedGraph;

#[derive(Debug)]
struct TestCase {
    graph: UndirectedGraph,
}

impl Arbitrary<'_> for TestCase {
    fn arbitrary(u: &mut Unstructured<'_>) -> arbitrary::Result<Self> {
        let graph = arbitrary_disconnected_graph(u)?;
        Ok(TestCase { graph })
    }
}

fuzz_target!(|testcase: TestCase| {
    check_disconnected(&testcase.graph);
});
