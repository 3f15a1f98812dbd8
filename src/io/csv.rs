//! Comma-separated export of sampled fields.

use std::io::{self, Write};

use crate::fields::{Field, Grid};

/// Writes one `x,y,ex,ey,magnitude` row per sample, row by row.
pub fn write_field_csv<W: Write>(mut w: W, grid: &Grid, field: &Field) -> io::Result<()> {
    super::check_shapes(grid, field)?;
    let magnitude = field.magnitude();
    let (rows, cols) = grid.shape();
    writeln!(w, "x,y,ex,ey,magnitude")?;
    for i in 0..rows {
        for j in 0..cols {
            writeln!(
                w,
                "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e}",
                grid.x()[(i, j)],
                grid.y()[(i, j)],
                field.ex()[(i, j)],
                field.ey()[(i, j)],
                magnitude[(i, j)]
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Charge, build_grid, compute_field_default};

    #[test]
    fn writes_header_and_one_row_per_sample() {
        let grid = build_grid(-1.0, 1.0, -1.0, 1.0, 4).unwrap();
        let field = compute_field_default(&[Charge::new(1.0, 0.0, 0.0)], &grid).unwrap();
        let mut buf = Vec::new();
        write_field_csv(&mut buf, &grid, &field).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 17);
        assert_eq!(lines[0], "x,y,ex,ey,magnitude");
        assert!(lines[1].starts_with("-1.0000000000000000e0,-1.0000000000000000e0,"));
        assert_eq!(lines[2].split(',').count(), 5);
    }

    #[test]
    fn rejects_mismatched_field() {
        let grid = build_grid(0.0, 1.0, 0.0, 1.0, 3).unwrap();
        let field = Field::zeros(2, 2);
        let err = write_field_csv(Vec::new(), &grid, &field).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
