//! Integration tests for the matrix rasterizer

use pretty_assertions::assert_eq;

use qr_svg::{render_matrix, render_svg, BitMatrix, ModuleMatrix, SvgOptions};

/// Extract the `d` attribute of the single path element
fn path_data(svg: &str) -> &str {
    let start = svg.find(r#"<path d=""#).expect("path element") + r#"<path d=""#.len();
    let end = svg[start..].find('"').expect("closing quote");
    &svg[start..start + end]
}

/// Extract the viewBox attribute value
fn view_box(svg: &str) -> &str {
    let start = svg.find(r#"viewBox=""#).expect("viewBox") + r#"viewBox=""#.len();
    let end = svg[start..].find('"').expect("closing quote");
    &svg[start..start + end]
}

/// Deterministic pseudo-random matrix
fn scrambled(side: usize, seed: u64) -> BitMatrix {
    let mut state = seed;
    let mut matrix = BitMatrix::new(side);
    for r in 0..side {
        for c in 0..side {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            matrix.set(r, c, (state >> 33) & 1 == 1);
        }
    }
    matrix
}

#[test]
fn test_default_geometry_all_light() {
    let svg = render_matrix(&BitMatrix::new(21));
    assert_eq!(view_box(&svg), "0 0 58 58");
    assert_eq!(path_data(&svg), "");
    assert!(!path_data(&svg).contains('M'));
}

#[test]
fn test_single_dark_cell_default_margin() {
    let mut matrix = BitMatrix::new(21);
    matrix.set(0, 0, true);
    let options = SvgOptions::new().with_cell_size(2.0).with_margin(8.0);
    let svg = render_svg(&matrix, &options);
    assert_eq!(path_data(&svg), "M8,8l2,0 0,2 -2,0 0,-2z ");
}

#[test]
fn test_explicit_parameters_full_document() {
    let options = SvgOptions::new().with_cell_size(5.0).with_margin(0.0);
    let svg = render_svg(&[[true]], &options);
    insta::assert_snapshot!(svg, @r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 2 2"  preserveAspectRatio="xMinYMin meet"><rect width="100%" height="100%" fill="white" cx="0" cy="0"/><path d="M0,0l5,0 0,5 -5,0 0,-5z " stroke="transparent" fill="black"/></svg>"#);
}

#[test]
fn test_viewbox_ignores_cell_size() {
    let matrix = BitMatrix::new(10);
    let svg = render_svg(&matrix, &SvgOptions::new().with_cell_size(7.0).with_margin(3.0));
    assert_eq!(view_box(&svg), "0 0 26 26");
}

#[test]
fn test_structure_holds_for_many_matrices() {
    for side in 1..=25 {
        let matrix = scrambled(side, side as u64);
        let options = SvgOptions::default();
        let svg = render_svg(&matrix, &options);

        assert!(!svg.is_empty());
        assert_eq!(svg.matches("<rect").count(), 1, "side {}", side);
        assert_eq!(svg.matches("<path").count(), 1, "side {}", side);

        let size = (side as f64 + 8.0) * 2.0;
        assert_eq!(view_box(&svg), format!("0 0 {} {}", size, size));

        let moves = path_data(&svg).matches('M').count();
        assert_eq!(moves, matrix.dark_count(), "side {}", side);
    }
}

#[test]
fn test_render_is_idempotent() {
    let matrix = scrambled(29, 42);
    let options = SvgOptions::new().with_cell_size(3.0);
    assert_eq!(render_svg(&matrix, &options), render_svg(&matrix, &options));
}

#[test]
fn test_vec_and_bit_matrix_render_identically() {
    let rows = vec![
        vec![true, false, true],
        vec![false, true, false],
        vec![true, true, false],
    ];
    let bits = BitMatrix::from_rows(&rows);
    assert_eq!(render_matrix(&rows), render_matrix(&bits));
}

#[test]
fn test_jagged_rows_do_not_panic() {
    let rows = vec![vec![true, true, true], vec![true], vec![]];
    let svg = render_matrix(&rows);
    assert_eq!(path_data(&svg).matches('M').count(), 4);
}

#[test]
fn test_parsed_matrix_offsets() {
    let matrix = BitMatrix::parse("\n.#\n#.\n").expect("Should parse");
    let svg = render_svg(&matrix, &SvgOptions::new().with_cell_size(1.0).with_margin(1.0));
    assert_eq!(
        path_data(&svg),
        "M2,1l1,0 0,1 -1,0 0,-1z M1,2l1,0 0,1 -1,0 0,-1z "
    );
    assert_eq!(view_box(&svg), "0 0 6 6");
}
