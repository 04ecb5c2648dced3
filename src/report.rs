//! Tab-separated text reports of a solved map.

use std::io::{self, Write};

use crate::cargo::SupplyChainRules;
use crate::map::{Industry, Town};
use crate::network::CapacityGraph;
use crate::routing::{CommittedPath, EfficiencyStats};

/// Writes one `(a, b)` line per directed link.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn write_edges<W: Write>(out: &mut W, graph: &CapacityGraph) -> io::Result<()> {
    for edge in graph.edges() {
        writeln!(out, "({}, {})", edge.a, edge.b)?;
    }
    Ok(())
}

/// Writes the committed paths with cargo and wagon ids.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn write_paths<W: Write>(out: &mut W, paths: &[CommittedPath]) -> io::Result<()> {
    writeln!(out, "{} connections", paths.len())?;
    writeln!(out, "cargo_id\twagon_id\tquantity\tcost\tpath")?;
    for p in paths {
        write!(
            out,
            "{}\t{}\t{}\t{}\t[ ",
            p.cargo.index(),
            p.wagon.index(),
            p.quantity,
            p.cost
        )?;
        for node in &p.path {
            write!(out, "{node} ")?;
        }
        writeln!(out, "]")?;
    }
    Ok(())
}

/// Writes industries with their node ids, names and coordinates.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn write_industries<W: Write, R: SupplyChainRules>(
    out: &mut W,
    industries: &[Industry],
    rules: &R,
) -> io::Result<()> {
    writeln!(out, "{} industries", industries.len())?;
    writeln!(out, "node_id\tname\tx_coord\ty_coord")?;
    for (i, industry) in industries.iter().enumerate() {
        writeln!(
            out,
            "{i}\t{}\t{}\t{}",
            rules.industry_name(industry.output),
            industry.location.x,
            industry.location.y
        )?;
    }
    Ok(())
}

/// Writes towns with their node ids, which start at `first_index`.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn write_towns<W: Write>(out: &mut W, towns: &[Town], first_index: usize) -> io::Result<()> {
    writeln!(out, "{} towns", towns.len())?;
    writeln!(out, "node_id\tname\tx_coord\ty_coord")?;
    for (i, town) in towns.iter().enumerate() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            first_index + i,
            town.name,
            town.location.x,
            town.location.y
        )?;
    }
    Ok(())
}

/// Writes total volume, naive and actual cost, and the saving.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn write_efficiency<W: Write>(out: &mut W, stats: &EfficiencyStats) -> io::Result<()> {
    writeln!(out, "Efficiency statistics:")?;
    writeln!(out, "total cargo volume:  {}", stats.total_quantity)?;
    writeln!(out, "naive total cost:    {}", stats.naive_cost)?;
    writeln!(out, "actual total cost:   {}", stats.actual_cost)?;
    match stats.saving() {
        Some(saving) => writeln!(out, "cost saving          {}%", saving * 100.0),
        None => writeln!(out, "cost saving          n/a"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cargo::{CargoType, StandardRules, WagonType};
    use crate::math::Point2;
    use crate::network::NodeId;
    use crate::triangulation::IndexedEdge;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn edges_are_listed_in_order() {
        let mut g = CapacityGraph::new(NodeId::table(1, 1));
        g.add_edge(IndexedEdge::new(1, 0), 2.0);
        let text = render(|out| write_edges(out, &g));
        assert_eq!(text, "(0, 1)\n(1, 0)\n");
    }

    #[test]
    fn paths_report() {
        let paths = [CommittedPath {
            cargo: CargoType::Coal,
            wagon: WagonType::Gondola,
            quantity: 50.0,
            cost: 312.5,
            path: vec![0, 4, 2],
        }];
        let text = render(|out| write_paths(out, &paths));
        assert_eq!(
            text,
            "1 connections\ncargo_id\twagon_id\tquantity\tcost\tpath\n3\t0\t50\t312.5\t[ 0 4 2 ]\n"
        );
    }

    #[test]
    fn industries_and_towns_share_index_space() {
        let industries = [
            Industry::new(Point2::new(1.0, 2.0), CargoType::Stone),
            Industry::new(Point2::new(3.5, 4.0), CargoType::Goods),
        ];
        let towns = [Town::new(
            Point2::new(7.0, 8.0),
            "Millbrook",
            [CargoType::Food, CargoType::Goods],
        )];

        let text = render(|out| write_industries(out, &industries, &StandardRules));
        assert_eq!(
            text,
            "2 industries\nnode_id\tname\tx_coord\ty_coord\n0\tQuarry\t1\t2\n1\tGoods Factory\t3.5\t4\n"
        );

        let text = render(|out| write_towns(out, &towns, industries.len()));
        assert_eq!(
            text,
            "1 towns\nnode_id\tname\tx_coord\ty_coord\n2\tMillbrook\t7\t8\n"
        );
    }

    #[test]
    fn efficiency_report() {
        let stats = EfficiencyStats {
            total_quantity: 80.0,
            naive_cost: 500.0,
            actual_cost: 375.0,
        };
        let text = render(|out| write_efficiency(out, &stats));
        assert_eq!(
            text,
            "Efficiency statistics:\n\
             total cargo volume:  80\n\
             naive total cost:    500\n\
             actual total cost:   375\n\
             cost saving          25%\n"
        );

        let text = render(|out| write_efficiency(out, &EfficiencyStats::default()));
        assert!(text.ends_with("cost saving          n/a\n"));
    }
}
