//! Legacy VTK ASCII export for viewing sampled fields in ParaView and other tools.

use std::io::{self, Write};

use crate::fields::{Field, Grid};

/// Writes the legacy VTK ASCII file header.
pub fn write_vtk_header<W: Write>(mut writer: W, title: &str) -> io::Result<()> {
    writeln!(writer, "# vtk DataFile Version 3.0")?;
    writeln!(writer, "{}", title)?;
    writeln!(writer, "ASCII")?;
    Ok(())
}

/// Writes `field` as a `STRUCTURED_POINTS` dataset with an `E` vector array and a
/// `magnitude` scalar array.
///
/// Origin and spacing are read from the grid, so it must be a regular meshgrid such as
/// the one returned by [`crate::fields::build_grid`]. Degenerate axes get unit spacing.
pub fn write_vtk_structured_points<W: Write>(mut writer: W, title: &str, grid: &Grid, field: &Field) -> io::Result<()> {
    super::check_shapes(grid, field)?;
    let (rows, cols) = grid.shape();
    let (dx, dy) = grid.spacing();
    let (dx, dy) = (if dx == 0.0 { 1.0 } else { dx }, if dy == 0.0 { 1.0 } else { dy });
    let (x0, y0) = if grid.is_empty() { (0.0, 0.0) } else { (grid.x()[(0, 0)], grid.y()[(0, 0)]) };

    write_vtk_header(&mut writer, title)?;
    writeln!(writer, "DATASET STRUCTURED_POINTS")?;
    writeln!(writer, "DIMENSIONS {} {} 1", cols, rows)?;
    writeln!(writer, "ORIGIN {:e} {:e} 0", x0, y0)?;
    writeln!(writer, "SPACING {:e} {:e} 1", dx, dy)?;
    writeln!(writer, "POINT_DATA {}", rows * cols)?;

    // VTK orders points with x varying fastest.
    writeln!(writer, "VECTORS E double")?;
    for i in 0..rows {
        for j in 0..cols {
            writeln!(writer, "{:.16e} {:.16e} 0", field.ex()[(i, j)], field.ey()[(i, j)])?;
        }
    }

    let magnitude = field.magnitude();
    writeln!(writer, "SCALARS magnitude double 1")?;
    writeln!(writer, "LOOKUP_TABLE default")?;
    for i in 0..rows {
        for j in 0..cols {
            writeln!(writer, "{:.16e}", magnitude[(i, j)])?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Charge, build_grid, compute_field_default};
    use crate::math::Lattice;

    #[test]
    fn structured_points_header_describes_grid() {
        let grid = build_grid(-2.0, 2.0, 0.0, 1.0, 5).unwrap();
        let field = compute_field_default(&[Charge::new(-1.0, 0.0, 0.5)], &grid).unwrap();
        let mut buf = Vec::new();
        write_vtk_structured_points(&mut buf, "dipole", &grid, &field).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "# vtk DataFile Version 3.0");
        assert_eq!(lines[1], "dipole");
        assert_eq!(lines[4], "DIMENSIONS 5 5 1");
        assert_eq!(lines[5], "ORIGIN -2e0 0e0 0");
        assert_eq!(lines[6], "SPACING 1e0 2.5e-1 1");
        assert_eq!(lines[7], "POINT_DATA 25");
        assert_eq!(lines[8], "VECTORS E double");
        // header (8) + vector block (1 + 25) + scalar block (2 + 25)
        assert_eq!(lines.len(), 8 + 26 + 27);
    }

    #[test]
    fn empty_grid_writes_header_without_samples() {
        let grid = Grid::from_coordinates(Lattice::zeros(0, 3), Lattice::zeros(0, 3)).unwrap();
        let field = Field::zeros(0, 3);
        let mut buf = Vec::new();
        write_vtk_structured_points(&mut buf, "empty", &grid, &field).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[4], "DIMENSIONS 3 0 1");
        assert_eq!(lines[5], "ORIGIN 0e0 0e0 0");
        assert_eq!(lines[6], "SPACING 1e0 1e0 1");
        assert_eq!(lines[7], "POINT_DATA 0");
        assert_eq!(lines.len(), 8 + 1 + 2);
    }
}
