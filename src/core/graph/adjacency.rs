//! Textual Adjacency Lists
//!
//! Each non-blank line declares one vertex followed by its neighbors and the
//! distance to each of them:
//!
//! ```text
//! Dallas,Austin,195,Houston,239
//! Austin,Dallas,195
//! Houston,Dallas,239
//! ```
//!
//! Fields are separated by commas and trimmed, trailing commas are ignored.
//! The loader works on text that
//! is already in memory, reading files is left to the caller.

use alloc::string::ToString;

use crate::core::error::{Error, Result};
use crate::core::graph::{UndirectedGraph, Weight};

/// Parse an adjacency list into a graph.
///
/// Vertex ids follow first-seen order over the whole text, so a line's head
/// vertex may already own an id because an earlier line named it as a
/// neighbor.
///
/// # Errors
///
/// - [`Error::EmptyVertexName`] for a blank head or neighbor field.
/// - [`Error::MissingWeight`] when a neighbor has no weight after it.
/// - [`Error::InvalidWeight`] when a weight is not a non-negative integer.
///
/// # Examples
///
/// ```
/// use spanning::core::graph::adjacency;
/// use spanning::core::graph::WeightedEdges;
///
/// let graph = adjacency::parse("A,B,1\nB,A,1\n").unwrap();
/// assert_eq!(graph.num_vertices(), 2);
///
/// assert!(adjacency::parse("A,B,far").is_err());
/// ```
pub fn parse(text: &str) -> Result<UndirectedGraph> {
    let mut graph = UndirectedGraph::new();

    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        if line.trim().is_empty() {
            continue;
        }

        // trailing empty fields are padding, not neighbors
        let record = line.trim_end().trim_end_matches(',');
        let mut fields = record.split(',').map(str::trim);

        let head = fields.next().unwrap_or_default();
        if head.is_empty() {
            return Err(Error::EmptyVertexName { line: line_no });
        }
        graph.add_vertex(head);

        while let Some(neighbor) = fields.next() {
            if neighbor.is_empty() {
                return Err(Error::EmptyVertexName { line: line_no });
            }
            let weight = fields.next().ok_or_else(|| Error::MissingWeight {
                line: line_no,
                neighbor: neighbor.to_string(),
            })?;
            let weight = parse_weight(weight, line_no)?;
            graph.add_edge(head, neighbor, weight);
        }
    }

    log::debug!(
        "parsed adjacency list with {} vertices",
        graph.index().size()
    );

    Ok(graph)
}

fn parse_weight(field: &str, line: usize) -> Result<Weight> {
    field.parse::<Weight>().map_err(|_| Error::InvalidWeight {
        line,
        value: field.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::*;
    use crate::core::graph::{Edge, WeightedEdges};

    #[test]
    fn test_parse_cities() {
        let text = "Dallas,Austin,195,Houston,239\nAustin,Dallas,195\nHouston,Dallas,239\n";
        let graph = parse(text).unwrap();

        let dallas = graph.vertex("Dallas").unwrap();
        let austin = graph.vertex("Austin").unwrap();
        let houston = graph.vertex("Houston").unwrap();

        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(
            graph.edge_records().into_iter().collect::<Vec<_>>(),
            vec![
                Edge::new(dallas, austin, 195),
                Edge::new(dallas, houston, 239),
                Edge::new(austin, dallas, 195),
                Edge::new(houston, dallas, 239),
            ]
        );
    }

    #[test]
    fn test_head_without_neighbors() {
        let graph = parse("Marfa\n\n  \nAlpine, Marfa , 26\n").unwrap();

        assert_eq!(graph.num_vertices(), 2);
        let marfa = graph.vertex("Marfa").unwrap();
        assert_eq!(graph.index().name(marfa).map(String::as_str), Some("Marfa"));
        assert!(graph.neighbors(marfa).is_empty());
        assert_eq!(graph.edge_records().into_iter().count(), 1);
    }

    #[test]
    fn test_missing_weight() {
        assert_eq!(
            parse("A,B,1\nB,A").unwrap_err(),
            Error::MissingWeight {
                line: 2,
                neighbor: "A".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_weight() {
        assert_eq!(
            parse("A,B,ten").unwrap_err(),
            Error::InvalidWeight {
                line: 1,
                value: "ten".to_string()
            }
        );
        assert_eq!(
            parse("A,B,-3").unwrap_err(),
            Error::InvalidWeight {
                line: 1,
                value: "-3".to_string()
            }
        );
    }

    #[test]
    fn test_empty_names() {
        assert_eq!(
            parse(",B,1").unwrap_err(),
            Error::EmptyVertexName { line: 1 }
        );
        assert_eq!(
            parse("A,B,1\nA,,2").unwrap_err(),
            Error::EmptyVertexName { line: 2 }
        );
    }

    #[test]
    fn test_trailing_comma() {
        let graph = parse("Dallas,Austin,195,\nAustin,Dallas,195,,\nMarfa,\n").unwrap();

        let dallas = graph.vertex("Dallas").unwrap();
        let austin = graph.vertex("Austin").unwrap();

        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(
            graph.edge_records().into_iter().collect::<Vec<_>>(),
            vec![Edge::new(dallas, austin, 195), Edge::new(austin, dallas, 195)]
        );

        // an empty field inside the record is still an error
        assert_eq!(
            parse("Dallas,,195,Austin,7,").unwrap_err(),
            Error::EmptyVertexName { line: 1 }
        );
    }

    #[test]
    fn test_empty_text() {
        let graph = parse("").unwrap();
        assert_eq!(graph.num_vertices(), 0);
    }
}
