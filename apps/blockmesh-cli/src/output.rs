//! Writing a plan for the renderer.

use std::io::Write;

use blockmesh_core::{Error, Extent2, Result};
use blockmesh_plot::PlotPlan;

use crate::args::OutputFormat;

/// Write `plan` to `out` in `format`.
pub fn write_plan<W: Write>(out: &mut W, plan: &PlotPlan, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, plan),
        OutputFormat::Bincode => bincode::serialize_into(out, plan)
            .map_err(|e| Error::Serialization(e.to_string())),
    }
}

fn write_text<W: Write>(out: &mut W, plan: &PlotPlan) -> Result<()> {
    writeln!(out, "# level x y width height color token")?;
    for rect in &plan.rects {
        writeln!(
            out,
            "{} {} {} {} {} {} {}",
            rect.level, rect.x, rect.y, rect.width, rect.height, rect.color, rect.token
        )?;
    }
    if let Some(extent) = &plan.extent {
        write_extent(out, "extent", extent)?;
    }
    write_extent(out, "limits", &plan.limits)?;
    Ok(())
}

fn write_extent<W: Write>(out: &mut W, label: &str, extent: &Extent2) -> Result<()> {
    writeln!(
        out,
        "# {label} {} {} {} {}",
        extent.min.x, extent.min.y, extent.max.x, extent.max.y
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockmesh_decode::{Grammar, TokenScanner};
    use blockmesh_plot::{prepare, PlotConfig};

    fn plan(line: &str) -> PlotPlan {
        let report = TokenScanner::new(Grammar::default())
            .unwrap()
            .scan_lines(&[line]);
        prepare(&report.blocks, &PlotConfig::default()).unwrap()
    }

    #[test]
    fn text_lists_rects_then_limits() {
        let mut out = Vec::new();
        write_plan(&mut out, &plan("Z17 Z0"), OutputFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "# level x y width height color token",
                "1 0 0 0.5 0.5 #ffa500 Z0",
                "2 0.75 0.25 0.25 0.25 #008000 Z17",
                "# extent 0 0 1 0.5",
                "# limits -0.2 -0.2 1.2 1.2",
            ]
        );
    }

    #[test]
    fn empty_plan_has_only_header_and_limits() {
        let mut out = Vec::new();
        write_plan(&mut out, &plan("no blocks here"), OutputFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn bincode_roundtrips() {
        let original = plan("Z3 Z35");
        let mut out = Vec::new();
        write_plan(&mut out, &original, OutputFormat::Bincode).unwrap();
        let decoded: PlotPlan = bincode::deserialize(&out).unwrap();
        assert_eq!(decoded, original);
    }
}
